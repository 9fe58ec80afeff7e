//! churnscope - Bank Customer Churn Analysis Dashboard
//!
//! Loads a fixed CSV of bank customers, derives grouping features and
//! serves an interactive egui dashboard of descriptive statistics and
//! charts. The table is built once at startup and read-only afterwards.

pub mod charts;
pub mod data;
pub mod gui;
pub mod stats;

pub use data::{load_prepared, ChurnData, LoaderError};
