//! Visual Analysis View
//! Tabbed charts with dynamic column selectors.

use crate::charts::ChartPlotter;
use crate::data::{ChurnData, AGE_GROUP};
use crate::stats;
use egui::{Color32, ComboBox, RichText};

/// Tabs inside the Visual Analysis page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalysisTab {
    Univariate,
    Bivariate,
    Multivariate,
}

impl AnalysisTab {
    pub const ALL: [AnalysisTab; 3] = [
        AnalysisTab::Univariate,
        AnalysisTab::Bivariate,
        AnalysisTab::Multivariate,
    ];

    pub fn title(self) -> &'static str {
        match self {
            AnalysisTab::Univariate => "Univariate Analysis",
            AnalysisTab::Bivariate => "Bivariate Analysis",
            AnalysisTab::Multivariate => "Multivariate Analysis",
        }
    }
}

/// Visual Analysis page state: the active tab and its column selectors.
/// Every chart re-derives its slice from the shared table on each frame.
pub struct AnalysisView {
    tab: AnalysisTab,
    histogram_col: String,
    scatter_x: String,
    scatter_y: String,
}

impl Default for AnalysisView {
    fn default() -> Self {
        Self {
            tab: AnalysisTab::Univariate,
            histogram_col: String::new(),
            scatter_x: "Age".to_string(),
            scatter_y: "Balance".to_string(),
        }
    }
}

impl AnalysisView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Draw the page: tab bar plus the active tab's charts.
    pub fn show(&mut self, ui: &mut egui::Ui, data: &ChurnData) {
        ui.heading("📊 Visual Analysis");
        ui.add_space(8.0);

        ui.horizontal(|ui| {
            for tab in AnalysisTab::ALL {
                if ui.selectable_label(self.tab == tab, tab.title()).clicked() {
                    self.tab = tab;
                }
            }
        });
        ui.separator();
        ui.add_space(5.0);

        match self.tab {
            AnalysisTab::Univariate => self.show_univariate(ui, data),
            AnalysisTab::Bivariate => self.show_bivariate(ui, data),
            AnalysisTab::Multivariate => self.show_multivariate(ui, data),
        }
    }

    fn show_univariate(&mut self, ui: &mut egui::Ui, data: &ChurnData) {
        ui.label(
            RichText::new("📊 Dynamic Histogram (Categorical Column)")
                .size(14.0)
                .strong(),
        );
        ui.add_space(5.0);

        let options = data.categorical_columns();
        if options.is_empty() {
            warning(ui, "No categorical columns available");
        } else {
            if !options.contains(&self.histogram_col) {
                self.histogram_col = options[0].clone();
            }

            ui.horizontal(|ui| {
                ui.label("Choose a categorical column:");
                ComboBox::from_id_salt("hist_cat")
                    .width(160.0)
                    .selected_text(&self.histogram_col)
                    .show_ui(ui, |ui| {
                        for col in &options {
                            if ui
                                .selectable_label(self.histogram_col == *col, col)
                                .clicked()
                            {
                                self.histogram_col = col.clone();
                            }
                        }
                    });
            });

            match stats::value_counts(data.frame(), &self.histogram_col) {
                Ok(counts) => ChartPlotter::draw_category_histogram(ui, "categorical", &counts),
                Err(e) => warning(ui, &format!("Chart unavailable: {e}")),
            }
        }

        ui.add_space(15.0);
        ui.label(RichText::new("Churn Distribution").size(14.0).strong());
        ui.add_space(5.0);
        match stats::churn_counts(data.frame()) {
            Ok((retained, churned)) => {
                ChartPlotter::draw_churn_histogram(ui, "distribution", retained, churned);

                ui.add_space(15.0);
                ui.label(
                    RichText::new("Churn vs Non-Churn Pie Chart")
                        .size(14.0)
                        .strong(),
                );
                ui.add_space(5.0);
                ChartPlotter::draw_churn_pie(ui, retained, churned);
            }
            Err(e) => warning(ui, &format!("Chart unavailable: {e}")),
        }
    }

    fn show_bivariate(&mut self, ui: &mut egui::Ui, data: &ChurnData) {
        ui.label(
            RichText::new("📈 Custom Scatter Plot (Numerical Columns)")
                .size(14.0)
                .strong(),
        );
        ui.add_space(5.0);

        let options = data.numeric_columns();
        if options.is_empty() {
            warning(ui, "No numerical columns available");
        } else {
            if !options.contains(&self.scatter_x) {
                self.scatter_x = options[0].clone();
            }
            if !options.contains(&self.scatter_y) {
                self.scatter_y = options[options.len() - 1].clone();
            }

            ui.horizontal(|ui| {
                ui.label("X-axis:");
                ComboBox::from_id_salt("scatter_x")
                    .width(160.0)
                    .selected_text(&self.scatter_x)
                    .show_ui(ui, |ui| {
                        for col in &options {
                            if ui.selectable_label(self.scatter_x == *col, col).clicked() {
                                self.scatter_x = col.clone();
                            }
                        }
                    });

                ui.add_space(10.0);
                ui.label("Y-axis:");
                ComboBox::from_id_salt("scatter_y")
                    .width(160.0)
                    .selected_text(&self.scatter_y)
                    .show_ui(ui, |ui| {
                        for col in &options {
                            if ui.selectable_label(self.scatter_y == *col, col).clicked() {
                                self.scatter_y = col.clone();
                            }
                        }
                    });
            });

            match stats::churn_scatter(data.frame(), &self.scatter_x, &self.scatter_y) {
                Ok(series) => ChartPlotter::draw_churn_scatter(
                    ui,
                    "custom",
                    &series,
                    &self.scatter_x,
                    &self.scatter_y,
                ),
                Err(e) => warning(ui, &format!("Chart unavailable: {e}")),
            }
        }

        ui.add_space(15.0);
        ui.label(
            RichText::new("Number of Products vs Churn Rate")
                .size(14.0)
                .strong(),
        );
        ui.add_space(5.0);
        match stats::churn_rate_by_products(data.frame()) {
            Ok(rates) => ChartPlotter::draw_rate_bars(ui, "products", &rates),
            Err(e) => warning(ui, &format!("Chart unavailable: {e}")),
        }
    }

    fn show_multivariate(&self, ui: &mut egui::Ui, data: &ChurnData) {
        ui.label(
            RichText::new("Age Group vs Churn Status")
                .size(14.0)
                .strong(),
        );
        ui.add_space(5.0);
        match stats::counts_by_category_and_churn(data.frame(), AGE_GROUP) {
            Ok(rows) => ChartPlotter::draw_grouped_count_bars(ui, "age_group", &rows),
            Err(e) => warning(ui, &format!("Chart unavailable: {e}")),
        }

        ui.add_space(15.0);
        ui.label(
            RichText::new("Age vs Balance Colored by Churn Status")
                .size(14.0)
                .strong(),
        );
        ui.add_space(5.0);
        match stats::churn_scatter(data.frame(), "Age", "Balance") {
            Ok(series) => {
                ChartPlotter::draw_churn_scatter(ui, "age_balance", &series, "Age", "Balance")
            }
            Err(e) => warning(ui, &format!("Chart unavailable: {e}")),
        }

        ui.add_space(15.0);
        ui.label(
            RichText::new("Geography vs Balance by Churn Status")
                .size(14.0)
                .strong(),
        );
        ui.add_space(5.0);
        match stats::values_by_category_and_churn(data.frame(), "Geography", "Balance") {
            Ok(rows) => ChartPlotter::draw_box_by_category(ui, "geography", &rows, "Balance"),
            Err(e) => warning(ui, &format!("Chart unavailable: {e}")),
        }

        ui.add_space(15.0);
        ui.label(
            RichText::new("Mean Balance vs Number of Products by Churn Status")
                .size(14.0)
                .strong(),
        );
        ui.add_space(5.0);
        match stats::mean_balance_by_products(data.frame()) {
            Ok(rows) => ChartPlotter::draw_grouped_mean_bars(ui, "balance_products", &rows),
            Err(e) => warning(ui, &format!("Chart unavailable: {e}")),
        }
    }
}

fn warning(ui: &mut egui::Ui, text: &str) {
    ui.label(RichText::new(text).color(Color32::from_rgb(243, 156, 18)));
}
