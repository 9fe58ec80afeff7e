//! Charts module - Chart rendering

mod plotter;

pub use plotter::{ChartPlotter, CHURNED_COLOR, PALETTE, RETAINED_COLOR};
