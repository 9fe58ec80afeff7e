//! Sidebar Widget
//! Persistent left panel with the page selector.

use egui::{Color32, RichText};

/// Dashboard pages reachable from the sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Objective,
    DatasetDescription,
    Exploration,
    VisualAnalysis,
}

impl Page {
    pub const ALL: [Page; 4] = [
        Page::Objective,
        Page::DatasetDescription,
        Page::Exploration,
        Page::VisualAnalysis,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Page::Objective => "Project Objective",
            Page::DatasetDescription => "Dataset Description",
            Page::Exploration => "EDA & Feature Engineering",
            Page::VisualAnalysis => "Visual Analysis",
        }
    }
}

/// Left side panel with navigation. Last selection wins, no history.
pub struct Sidebar {
    pub page: Page,
}

impl Default for Sidebar {
    fn default() -> Self {
        Self {
            page: Page::Objective,
        }
    }
}

impl Sidebar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Draw the sidebar
    pub fn show(&mut self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.add_space(5.0);
            ui.label(
                RichText::new("🏦 Bank Churn Analysis")
                    .size(20.0)
                    .color(Color32::from_rgb(100, 149, 237)),
            );
            ui.label(
                RichText::new("Customer churn dashboard")
                    .size(11.0)
                    .color(Color32::GRAY),
            );
        });
        ui.add_space(10.0);
        ui.separator();
        ui.add_space(5.0);

        ui.label(RichText::new("📊 Navigate to").size(14.0).strong());
        ui.add_space(5.0);

        for page in Page::ALL {
            if ui
                .selectable_label(self.page == page, page.title())
                .clicked()
            {
                self.page = page;
            }
        }

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(5.0);

        ui.label(RichText::new("👤 About").size(14.0).strong());
        ui.add_space(5.0);
        ui.label(
            RichText::new(
                "Descriptive analysis of bank customer churn: who leaves, \
                 who stays, and how balance, tenure and age relate to it.",
            )
            .size(11.0)
            .color(Color32::GRAY),
        );
    }
}
