//! Data module - CSV loading and feature preparation

mod features;
mod loader;

pub use features::{
    balance_salary_ratio, prepare, AgeGroup, TenureGroup, AGE_GROUP, BALANCE_SALARY_RATIO,
    TENURE_GROUP,
};
pub use loader::{load_csv, load_prepared, ChurnData, LoaderError, ID_COLUMNS, REQUIRED_COLUMNS};
