//! Main Application Window
//! Sidebar navigation over the shared prepared table.

use crate::data::ChurnData;
use egui::{CentralPanel, ScrollArea, SidePanel};

use super::analysis::AnalysisView;
use super::sidebar::{Page, Sidebar};
use super::tables;

/// Main application window. Holds the session table (read-only after
/// preparation) and the view selection state.
pub struct ChurnApp {
    data: ChurnData,
    sidebar: Sidebar,
    analysis: AnalysisView,
}

impl ChurnApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, data: ChurnData) -> Self {
        Self {
            data,
            sidebar: Sidebar::new(),
            analysis: AnalysisView::new(),
        }
    }

    fn show_objective(ui: &mut egui::Ui) {
        ui.heading("🎯 Project Objective");
        ui.add_space(8.0);
        ui.label("The goal of this dashboard is to:");
        ui.label("• Analyze customer data to identify patterns in churn behavior.");
        ui.label("• Provide data-driven recommendations for reducing churn.");
        ui.add_space(8.0);
        ui.label(
            "Use the sidebar to explore the dataset, the engineered features \
             and the visual analysis of churn drivers.",
        );
    }
}

impl eframe::App for ChurnApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Left panel - navigation
        SidePanel::left("sidebar")
            .min_width(260.0)
            .max_width(320.0)
            .show(ctx, |ui| {
                ScrollArea::vertical().show(ui, |ui| {
                    self.sidebar.show(ui);
                });
            });

        // Central panel - the selected page, fully re-rendered each pass
        CentralPanel::default().show(ctx, |ui| {
            ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| match self.sidebar.page {
                    Page::Objective => Self::show_objective(ui),
                    Page::DatasetDescription => tables::dataset_description(ui, &self.data),
                    Page::Exploration => tables::exploration(ui, &self.data),
                    Page::VisualAnalysis => self.analysis.show(ui, &self.data),
                });
        });
    }
}
