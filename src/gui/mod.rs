//! GUI module - User interface components

mod analysis;
mod app;
mod sidebar;
mod tables;

pub use analysis::{AnalysisTab, AnalysisView};
pub use app::ChurnApp;
pub use sidebar::{Page, Sidebar};
