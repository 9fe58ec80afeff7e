//! Table Views
//! Dataset preview and the EDA summary grids.

use crate::data::ChurnData;
use crate::stats;
use egui::{RichText, ScrollArea};

/// Rows shown in the dataset preview.
const PREVIEW_ROWS: usize = 5;

/// "Dataset Description" page: column guide plus the head of the table.
pub fn dataset_description(ui: &mut egui::Ui, data: &ChurnData) {
    ui.heading("📁 Dataset Description");
    ui.add_space(8.0);
    ui.label("This dataset contains customer data from a bank, including:");
    ui.label("• Customer demographics (Age, Gender, Geography)");
    ui.label("• Financial details (Credit Score, Balance, Estimated Salary)");
    ui.label("• Bank engagement details (Tenure, Number of Products, Credit Card ownership)");
    ui.label("• Churn status indicating whether the customer exited or stayed.");
    ui.add_space(12.0);

    ui.label(RichText::new("🔍 Dataset Preview").size(14.0).strong());
    ui.add_space(5.0);

    let (headers, rows) = data.head_rows(PREVIEW_ROWS);
    ScrollArea::horizontal()
        .id_salt("dataset_preview")
        .show(ui, |ui| {
            egui::Grid::new("preview_grid")
                .striped(true)
                .min_col_width(70.0)
                .spacing([12.0, 4.0])
                .show(ui, |ui| {
                    for header in &headers {
                        ui.label(RichText::new(header).strong().size(11.0));
                    }
                    ui.end_row();

                    for row in &rows {
                        for cell in row {
                            ui.label(RichText::new(cell).size(11.0));
                        }
                        ui.end_row();
                    }
                });
        });
}

/// "EDA & Feature Engineering" page: cleaning summary and describe tables.
pub fn exploration(ui: &mut egui::Ui, data: &ChurnData) {
    ui.heading("🧹 EDA & Feature Engineering");
    ui.add_space(8.0);
    ui.label("• No missing values found in the dataset.");
    ui.label("• No inconsistent values.");
    ui.label("• Outliers detected in the Balance column.");
    ui.label("• Engineered features added at load time:");
    ui.label("      TenureGroup (New, Mid-term, Long-term)");
    ui.label("      AgeGroup (Young, Adult, Senior)");
    ui.label("      BalanceSalaryRatio (Balance / (EstimatedSalary + 1))");
    ui.add_space(12.0);

    ui.label(RichText::new("📊 Basic Info").size(14.0).strong());
    ui.add_space(5.0);

    egui::Grid::new("overview_grid")
        .striped(true)
        .min_col_width(80.0)
        .spacing([12.0, 4.0])
        .show(ui, |ui| {
            for header in ["Column", "Dtype", "Non-Null", "Null", "Unique"] {
                ui.label(RichText::new(header).strong().size(11.0));
            }
            ui.end_row();

            for row in stats::column_overview(data.frame()) {
                ui.label(RichText::new(&row.name).size(11.0));
                ui.label(RichText::new(&row.dtype).size(11.0));
                ui.label(RichText::new(row.non_null.to_string()).size(11.0));
                ui.label(RichText::new(row.nulls.to_string()).size(11.0));
                ui.label(RichText::new(row.unique.to_string()).size(11.0));
                ui.end_row();
            }
        });

    ui.add_space(15.0);
    ui.label(RichText::new("📈 Numerical Summary").size(14.0).strong());
    ui.add_space(5.0);

    let numeric_columns = data.numeric_columns();
    egui::Grid::new("describe_grid")
        .striped(true)
        .min_col_width(70.0)
        .spacing([12.0, 4.0])
        .show(ui, |ui| {
            for header in [
                "Column", "Count", "Mean", "Std", "Min", "25%", "50%", "75%", "Max",
            ] {
                ui.label(RichText::new(header).strong().size(11.0));
            }
            ui.end_row();

            for row in stats::numeric_describe(data.frame(), &numeric_columns) {
                ui.label(RichText::new(&row.column).size(11.0));
                ui.label(RichText::new(row.count.to_string()).size(11.0));
                ui.label(RichText::new(format!("{:.2}", row.mean)).size(11.0));
                ui.label(RichText::new(format!("{:.2}", row.std)).size(11.0));
                ui.label(RichText::new(format!("{:.2}", row.min)).size(11.0));
                ui.label(RichText::new(format!("{:.2}", row.q25)).size(11.0));
                ui.label(RichText::new(format!("{:.2}", row.median)).size(11.0));
                ui.label(RichText::new(format!("{:.2}", row.q75)).size(11.0));
                ui.label(RichText::new(format!("{:.2}", row.max)).size(11.0));
                ui.end_row();
            }
        });
}
