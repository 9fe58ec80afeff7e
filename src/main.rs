//! churnscope - Bank Customer Churn Analysis Dashboard
//!
//! Loads the churn dataset once at startup, then runs the interactive
//! dashboard. A missing or malformed dataset is a fatal startup error.

use anyhow::Context;
use churnscope::gui::ChurnApp;
use eframe::egui;
use tracing::{error, info};

/// Input dataset, expected in the working directory.
const DATA_FILE: &str = "churn.csv";

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let data = match churnscope::load_prepared(DATA_FILE) {
        Ok(data) => data,
        Err(e) => {
            error!("startup failed: {e}");
            return Err(e).with_context(|| format!("failed to load dataset from {DATA_FILE}"));
        }
    };
    info!(rows = data.row_count(), "dataset ready, starting UI");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1400.0, 800.0])
            .with_min_inner_size([1100.0, 700.0])
            .with_title("Bank Churn Analysis"),
        ..Default::default()
    };

    eframe::run_native(
        "Bank Churn Analysis",
        options,
        Box::new(move |cc| Ok(Box::new(ChurnApp::new(cc, data)))),
    )
    .map_err(|e| anyhow::anyhow!("failed to run UI: {e}"))
}
