//! Chart Plotter Module
//! Draws the dashboard visualizations using egui_plot.

use crate::stats::{CategoryValues, GroupedCounts, ProductBalance, ProductChurnRate, ScatterSeries};
use egui::{Color32, RichText, Stroke};
use egui_plot::{
    Bar, BarChart, BoxElem, BoxPlot, BoxSpread, Legend, Plot, PlotPoint, PlotPoints, Points, Text,
};

/// Color for retained customers (Exited = 0).
pub const RETAINED_COLOR: Color32 = Color32::from_rgb(52, 152, 219); // Blue
/// Color for churned customers (Exited = 1).
pub const CHURNED_COLOR: Color32 = Color32::from_rgb(231, 76, 60); // Red

/// Color palette for categorical series
pub const PALETTE: [Color32; 10] = [
    Color32::from_rgb(52, 152, 219), // Blue
    Color32::from_rgb(231, 76, 60),  // Red
    Color32::from_rgb(46, 204, 113), // Green
    Color32::from_rgb(155, 89, 182), // Purple
    Color32::from_rgb(243, 156, 18), // Orange
    Color32::from_rgb(26, 188, 156), // Teal
    Color32::from_rgb(233, 30, 99),  // Pink
    Color32::from_rgb(0, 188, 212),  // Cyan
    Color32::from_rgb(255, 87, 34),  // Deep Orange
    Color32::from_rgb(96, 125, 139), // Blue Grey
];

const CHART_HEIGHT: f32 = 300.0;

/// Creates the dashboard charts using egui_plot.
pub struct ChartPlotter;

impl ChartPlotter {
    /// Get color for a categorical series.
    pub fn category_color(index: usize) -> Color32 {
        PALETTE[index % PALETTE.len()]
    }

    /// Get color for a churn status.
    pub fn churn_color(churned: bool) -> Color32 {
        if churned {
            CHURNED_COLOR
        } else {
            RETAINED_COLOR
        }
    }

    /// Bar chart of category counts, one colored bar per category.
    pub fn draw_category_histogram(ui: &mut egui::Ui, id: &str, counts: &[(String, usize)]) {
        let x_labels: Vec<String> = counts.iter().map(|(label, _)| label.clone()).collect();

        Plot::new(format!("hist_{id}"))
            .height(CHART_HEIGHT)
            .allow_scroll(false)
            .include_y(0.0)
            .y_axis_label("Count")
            .legend(Legend::default())
            .x_axis_formatter(move |mark, _range| {
                let idx = mark.value.round() as usize;
                if idx < x_labels.len() {
                    x_labels[idx].clone()
                } else {
                    String::new()
                }
            })
            .show(ui, |plot_ui| {
                for (i, (label, count)) in counts.iter().enumerate() {
                    let bar = Bar::new(i as f64, *count as f64)
                        .width(0.6)
                        .name(label)
                        .fill(Self::category_color(i));
                    plot_ui.bar_chart(BarChart::new(vec![bar]).name(label));
                }
            });
    }

    /// Churn distribution: one bar per churn status.
    pub fn draw_churn_histogram(ui: &mut egui::Ui, id: &str, retained: usize, churned: usize) {
        let x_labels = ["Retained (0)", "Churned (1)"];

        Plot::new(format!("churn_hist_{id}"))
            .height(CHART_HEIGHT)
            .allow_scroll(false)
            .include_y(0.0)
            .y_axis_label("Count")
            .legend(Legend::default())
            .x_axis_formatter(move |mark, _range| {
                let idx = mark.value.round() as usize;
                if idx < x_labels.len() {
                    x_labels[idx].to_string()
                } else {
                    String::new()
                }
            })
            .show(ui, |plot_ui| {
                for (i, (name, count, churn)) in [
                    ("Retained (0)", retained, false),
                    ("Churned (1)", churned, true),
                ]
                .iter()
                .enumerate()
                {
                    let bar = Bar::new(i as f64, *count as f64)
                        .width(0.6)
                        .name(*name)
                        .fill(Self::churn_color(*churn));
                    plot_ui.bar_chart(BarChart::new(vec![bar]).name(*name));
                }
            });
    }

    /// Churn rate per product count.
    pub fn draw_rate_bars(ui: &mut egui::Ui, id: &str, rates: &[ProductChurnRate]) {
        Plot::new(format!("rate_{id}"))
            .height(CHART_HEIGHT)
            .allow_scroll(false)
            .include_y(0.0)
            .include_y(1.0)
            .x_axis_label("Number of Products")
            .y_axis_label("Churn Rate")
            .show(ui, |plot_ui| {
                let bars: Vec<Bar> = rates
                    .iter()
                    .map(|row| {
                        Bar::new(row.products as f64, row.rate)
                            .width(0.6)
                            .name(format!("{} products", row.products))
                            .fill(CHURNED_COLOR)
                    })
                    .collect();
                plot_ui.bar_chart(BarChart::new(bars).name("Churn rate"));
            });
    }

    /// Retained/churned counts side by side per category.
    pub fn draw_grouped_count_bars(ui: &mut egui::Ui, id: &str, rows: &[GroupedCounts]) {
        let x_labels: Vec<String> = rows.iter().map(|row| row.category.clone()).collect();

        Plot::new(format!("grouped_{id}"))
            .height(CHART_HEIGHT)
            .allow_scroll(false)
            .include_y(0.0)
            .y_axis_label("Count")
            .legend(Legend::default())
            .x_axis_formatter(move |mark, _range| {
                let idx = mark.value.round() as usize;
                if idx < x_labels.len() {
                    x_labels[idx].clone()
                } else {
                    String::new()
                }
            })
            .show(ui, |plot_ui| {
                let mut retained_bars: Vec<Bar> = Vec::with_capacity(rows.len());
                let mut churned_bars: Vec<Bar> = Vec::with_capacity(rows.len());

                for (i, row) in rows.iter().enumerate() {
                    retained_bars.push(
                        Bar::new(i as f64 - 0.2, row.retained as f64)
                            .width(0.35)
                            .name(&row.category)
                            .fill(RETAINED_COLOR),
                    );
                    churned_bars.push(
                        Bar::new(i as f64 + 0.2, row.churned as f64)
                            .width(0.35)
                            .name(&row.category)
                            .fill(CHURNED_COLOR),
                    );
                }

                plot_ui.bar_chart(BarChart::new(retained_bars).name("Retained"));
                plot_ui.bar_chart(BarChart::new(churned_bars).name("Churned"));
            });
    }

    /// Mean balance per product count, split by churn status, with value
    /// labels above the bars.
    pub fn draw_grouped_mean_bars(ui: &mut egui::Ui, id: &str, rows: &[ProductBalance]) {
        let max_mean = rows
            .iter()
            .flat_map(|row| [row.retained_mean, row.churned_mean])
            .flatten()
            .fold(0.0f64, f64::max);
        let label_pad = max_mean * 0.02;

        Plot::new(format!("mean_{id}"))
            .height(CHART_HEIGHT)
            .allow_scroll(false)
            .include_y(0.0)
            .x_axis_label("Number of Products")
            .y_axis_label("Mean Balance")
            .legend(Legend::default())
            .show(ui, |plot_ui| {
                let mut retained_bars: Vec<Bar> = Vec::new();
                let mut churned_bars: Vec<Bar> = Vec::new();

                for row in rows {
                    let x = row.products as f64;
                    if let Some(mean) = row.retained_mean {
                        retained_bars.push(
                            Bar::new(x - 0.2, mean)
                                .width(0.35)
                                .name(format!("{} products", row.products))
                                .fill(RETAINED_COLOR),
                        );
                        plot_ui.text(
                            Text::new(
                                PlotPoint::new(x - 0.2, mean + label_pad),
                                RichText::new(format!("{mean:.0}")).size(10.0),
                            )
                            .anchor(egui::Align2::CENTER_BOTTOM),
                        );
                    }
                    if let Some(mean) = row.churned_mean {
                        churned_bars.push(
                            Bar::new(x + 0.2, mean)
                                .width(0.35)
                                .name(format!("{} products", row.products))
                                .fill(CHURNED_COLOR),
                        );
                        plot_ui.text(
                            Text::new(
                                PlotPoint::new(x + 0.2, mean + label_pad),
                                RichText::new(format!("{mean:.0}")).size(10.0),
                            )
                            .anchor(egui::Align2::CENTER_BOTTOM),
                        );
                    }
                }

                plot_ui.bar_chart(BarChart::new(retained_bars).name("Non-Exited"));
                plot_ui.bar_chart(BarChart::new(churned_bars).name("Exited"));
            });
    }

    /// Scatter of two numeric columns colored by churn status.
    pub fn draw_churn_scatter(
        ui: &mut egui::Ui,
        id: &str,
        series: &ScatterSeries,
        x_label: &str,
        y_label: &str,
    ) {
        Plot::new(format!("scatter_{id}"))
            .height(CHART_HEIGHT)
            .allow_scroll(false)
            .x_axis_label(x_label.to_string())
            .y_axis_label(y_label.to_string())
            .legend(Legend::default())
            .show(ui, |plot_ui| {
                let retained: PlotPoints = PlotPoints::from_iter(series.retained.iter().copied());
                plot_ui.points(
                    Points::new(retained)
                        .radius(2.0)
                        .color(RETAINED_COLOR)
                        .name("Retained"),
                );

                let churned: PlotPoints = PlotPoints::from_iter(series.churned.iter().copied());
                plot_ui.points(
                    Points::new(churned)
                        .radius(2.0)
                        .color(CHURNED_COLOR)
                        .name("Churned"),
                );
            });
    }

    /// Box plots of a numeric column per category, split by churn status.
    pub fn draw_box_by_category(
        ui: &mut egui::Ui,
        id: &str,
        rows: &[CategoryValues],
        y_label: &str,
    ) {
        let x_labels: Vec<String> = rows.iter().map(|row| row.category.clone()).collect();

        Plot::new(format!("box_{id}"))
            .height(CHART_HEIGHT)
            .allow_scroll(false)
            .y_axis_label(y_label.to_string())
            .legend(Legend::default())
            .x_axis_formatter(move |mark, _range| {
                let idx = mark.value.round() as usize;
                if idx < x_labels.len() {
                    x_labels[idx].clone()
                } else {
                    String::new()
                }
            })
            .show(ui, |plot_ui| {
                let mut retained_boxes: Vec<BoxElem> = Vec::new();
                let mut churned_boxes: Vec<BoxElem> = Vec::new();

                for (i, row) in rows.iter().enumerate() {
                    if let Some(spread) = Self::box_spread(&row.retained) {
                        retained_boxes.push(
                            BoxElem::new(i as f64 - 0.18, spread)
                                .box_width(0.3)
                                .fill(RETAINED_COLOR.gamma_multiply(0.3))
                                .stroke(Stroke::new(1.5, RETAINED_COLOR)),
                        );
                    }
                    if let Some(spread) = Self::box_spread(&row.churned) {
                        churned_boxes.push(
                            BoxElem::new(i as f64 + 0.18, spread)
                                .box_width(0.3)
                                .fill(CHURNED_COLOR.gamma_multiply(0.3))
                                .stroke(Stroke::new(1.5, CHURNED_COLOR)),
                        );
                    }
                }

                plot_ui.box_plot(BoxPlot::new(retained_boxes).name("Retained"));
                plot_ui.box_plot(BoxPlot::new(churned_boxes).name("Churned"));
            });
    }

    /// Quartiles and 1.5 IQR whiskers for one box.
    fn box_spread(values: &[f64]) -> Option<BoxSpread> {
        if values.is_empty() {
            return None;
        }

        let mut sorted = values.to_vec();
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

        let n = sorted.len();
        let q1 = sorted.get(n / 4).copied().unwrap_or(0.0);
        let median = sorted.get(n / 2).copied().unwrap_or(0.0);
        let q3 = sorted.get(3 * n / 4).copied().unwrap_or(0.0);
        let iqr = q3 - q1;
        let whisker_low = sorted
            .iter()
            .copied()
            .find(|&v| v >= q1 - 1.5 * iqr)
            .unwrap_or(q1);
        let whisker_high = sorted
            .iter()
            .rev()
            .copied()
            .find(|&v| v <= q3 + 1.5 * iqr)
            .unwrap_or(q3);

        Some(BoxSpread::new(whisker_low, q1, median, q3, whisker_high))
    }

    /// Churn share pie chart with a count/percentage legend.
    pub fn draw_churn_pie(ui: &mut egui::Ui, retained: usize, churned: usize) {
        let total = retained + churned;
        if total == 0 {
            ui.label(RichText::new("No data").color(Color32::GRAY));
            return;
        }

        let slices = [
            ("Retained", retained, RETAINED_COLOR),
            ("Churned", churned, CHURNED_COLOR),
        ];

        ui.horizontal(|ui| {
            let (rect, _) =
                ui.allocate_exact_size(egui::vec2(240.0, 240.0), egui::Sense::hover());
            let painter = ui.painter();
            let center = rect.center();
            let radius = rect.width().min(rect.height()) / 2.0 - 6.0;

            let mut start_angle = -std::f32::consts::FRAC_PI_2;
            for (_, count, color) in slices {
                if count == 0 {
                    continue;
                }
                let sweep = count as f32 / total as f32 * std::f32::consts::TAU;

                // Tessellation expects convex shapes, so wide slices are
                // drawn as quarter-circle wedges of the same color.
                let mut remaining = sweep;
                while remaining > 0.0 {
                    let segment = remaining.min(std::f32::consts::FRAC_PI_2);
                    let steps = ((segment / 0.05).ceil() as usize).max(2);
                    let mut points = Vec::with_capacity(steps + 2);
                    points.push(center);
                    for step in 0..=steps {
                        let angle = start_angle + segment * step as f32 / steps as f32;
                        points.push(center + radius * egui::vec2(angle.cos(), angle.sin()));
                    }
                    painter.add(egui::Shape::convex_polygon(points, color, Stroke::NONE));
                    start_angle += segment;
                    remaining -= segment;
                }
            }

            ui.add_space(16.0);
            ui.vertical(|ui| {
                ui.add_space(90.0);
                for (label, count, color) in slices {
                    ui.horizontal(|ui| {
                        let (swatch, _) = ui
                            .allocate_exact_size(egui::vec2(14.0, 14.0), egui::Sense::hover());
                        ui.painter().rect_filled(swatch, 3.0, color);
                        let share = 100.0 * count as f64 / total as f64;
                        ui.label(
                            RichText::new(format!("{label}: {count} ({share:.1}%)")).size(13.0),
                        );
                    });
                }
            });
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn box_spread_uses_iqr_whiskers() {
        let values = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 100.0];
        let spread = ChartPlotter::box_spread(&values).unwrap();

        // Index-based quartiles: q1 = sorted[2], median = sorted[4], q3 = sorted[6]
        assert_eq!(spread.quartile1, 3.0);
        assert_eq!(spread.median, 5.0);
        assert_eq!(spread.quartile3, 7.0);
        // The outlier at 100 falls outside q3 + 1.5 * IQR = 13.
        assert_eq!(spread.lower_whisker, 1.0);
        assert_eq!(spread.upper_whisker, 8.0);
    }

    #[test]
    fn box_spread_of_empty_sample_is_none() {
        assert!(ChartPlotter::box_spread(&[]).is_none());
    }

    #[test]
    fn palette_cycles_for_many_categories() {
        assert_eq!(ChartPlotter::category_color(0), PALETTE[0]);
        assert_eq!(ChartPlotter::category_color(PALETTE.len()), PALETTE[0]);
        assert_eq!(ChartPlotter::category_color(3), PALETTE[3]);
    }
}
