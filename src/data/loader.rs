//! CSV Data Loader Module
//! Loads the churn dataset with Polars and validates its schema.

use polars::prelude::*;
use std::path::Path;
use thiserror::Error;
use tracing::info;

use super::features;

/// Columns the input file must provide.
pub const REQUIRED_COLUMNS: [&str; 14] = [
    "RowNumber",
    "CustomerId",
    "Surname",
    "CreditScore",
    "Geography",
    "Gender",
    "Age",
    "Tenure",
    "Balance",
    "NumOfProducts",
    "HasCrCard",
    "IsActiveMember",
    "EstimatedSalary",
    "Exited",
];

/// Identifier columns dropped right after load, never referenced again.
pub const ID_COLUMNS: [&str; 3] = ["RowNumber", "CustomerId", "Surname"];

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("dataset file not found: {0}")]
    FileNotFound(String),
    #[error("failed to read CSV: {0}")]
    Csv(#[from] PolarsError),
    #[error("dataset is missing required columns: {0}")]
    MissingColumns(String),
}

/// Read the raw CSV and verify every required column is present.
pub fn load_csv(file_path: &str) -> Result<DataFrame, LoaderError> {
    if !Path::new(file_path).exists() {
        return Err(LoaderError::FileNotFound(file_path.to_string()));
    }

    let df = LazyCsvReader::new(file_path)
        .with_infer_schema_length(Some(10000))
        .finish()?
        .collect()?;

    let missing: Vec<&str> = REQUIRED_COLUMNS
        .iter()
        .copied()
        .filter(|name| df.column(name).is_err())
        .collect();
    if !missing.is_empty() {
        return Err(LoaderError::MissingColumns(missing.join(", ")));
    }

    info!(
        rows = df.height(),
        columns = df.width(),
        path = file_path,
        "loaded raw dataset"
    );
    Ok(df)
}

/// Load the raw CSV and run feature preparation.
///
/// This is the one-time startup step; the returned table is read-only
/// for the remainder of the session.
pub fn load_prepared(file_path: &str) -> Result<ChurnData, LoaderError> {
    let raw = load_csv(file_path)?;
    let prepared = features::prepare(&raw)?;
    info!(
        rows = prepared.height(),
        columns = prepared.width(),
        "prepared dataset with engineered features"
    );
    Ok(ChurnData::new(prepared))
}

/// The prepared in-memory session table.
#[derive(Debug)]
pub struct ChurnData {
    df: DataFrame,
}

impl ChurnData {
    pub fn new(df: DataFrame) -> Self {
        Self { df }
    }

    pub fn frame(&self) -> &DataFrame {
        &self.df
    }

    pub fn row_count(&self) -> usize {
        self.df.height()
    }

    pub fn column_count(&self) -> usize {
        self.df.width()
    }

    /// Columns usable as histogram categories (string dtype).
    pub fn categorical_columns(&self) -> Vec<String> {
        self.df
            .get_columns()
            .iter()
            .filter(|col| matches!(col.dtype(), DataType::String))
            .map(|col| col.name().to_string())
            .collect()
    }

    /// Columns usable on scatter plot axes (integer or float dtype).
    pub fn numeric_columns(&self) -> Vec<String> {
        self.df
            .get_columns()
            .iter()
            .filter(|col| {
                matches!(
                    col.dtype(),
                    DataType::Float32
                        | DataType::Float64
                        | DataType::Int8
                        | DataType::Int16
                        | DataType::Int32
                        | DataType::Int64
                        | DataType::UInt8
                        | DataType::UInt16
                        | DataType::UInt32
                        | DataType::UInt64
                )
            })
            .map(|col| col.name().to_string())
            .collect()
    }

    /// First `n` rows rendered as display strings, header row included.
    pub fn head_rows(&self, n: usize) -> (Vec<String>, Vec<Vec<String>>) {
        let headers: Vec<String> = self
            .df
            .get_column_names()
            .iter()
            .map(|s| s.to_string())
            .collect();

        let count = n.min(self.df.height());
        let mut rows: Vec<Vec<String>> = Vec::with_capacity(count);
        for i in 0..count {
            let mut row: Vec<String> = Vec::with_capacity(self.df.width());
            for col in self.df.get_columns() {
                let cell = col
                    .get(i)
                    .map(|v| v.to_string().trim_matches('"').to_string())
                    .unwrap_or_default();
                row.push(cell);
            }
            rows.push(row);
        }
        (headers, rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_test_csv() -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            "RowNumber,CustomerId,Surname,CreditScore,Geography,Gender,Age,Tenure,Balance,NumOfProducts,HasCrCard,IsActiveMember,EstimatedSalary,Exited"
        )
        .unwrap();
        writeln!(file, "1,15634602,Hargrave,619,France,Female,42,2,0.0,1,1,1,101348.88,1").unwrap();
        writeln!(file, "2,15647311,Hill,608,Spain,Female,41,1,83807.86,1,0,1,112542.58,0").unwrap();
        writeln!(file, "3,15619304,Onio,502,France,Female,42,8,159660.8,3,1,0,113931.57,1").unwrap();
        writeln!(file, "4,15701354,Boni,699,France,Female,39,1,0.0,2,0,0,93826.63,0").unwrap();
        writeln!(file, "5,15737888,Mitchell,850,Spain,Female,43,2,125510.82,1,1,1,79084.1,0")
            .unwrap();
        writeln!(file, "6,15574012,Chu,645,Germany,Male,44,8,113755.78,2,1,0,149756.71,1").unwrap();
        file
    }

    #[test]
    fn load_csv_reads_all_rows() {
        let file = create_test_csv();
        let df = load_csv(file.path().to_str().unwrap()).unwrap();
        assert_eq!(df.height(), 6);
        assert_eq!(df.width(), REQUIRED_COLUMNS.len());
    }

    #[test]
    fn load_csv_rejects_missing_file() {
        let err = load_csv("no_such_dataset.csv").unwrap_err();
        assert!(matches!(err, LoaderError::FileNotFound(_)));
    }

    #[test]
    fn load_csv_rejects_missing_columns() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "CreditScore,Geography,Gender").unwrap();
        writeln!(file, "619,France,Female").unwrap();

        let err = load_csv(file.path().to_str().unwrap()).unwrap_err();
        match err {
            LoaderError::MissingColumns(cols) => {
                assert!(cols.contains("Age"));
                assert!(cols.contains("Exited"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn load_prepared_keeps_row_count() {
        let file = create_test_csv();
        let data = load_prepared(file.path().to_str().unwrap()).unwrap();
        assert_eq!(data.row_count(), 6);
        // 14 required - 3 identifiers + 3 derived
        assert_eq!(data.column_count(), 14);
    }

    #[test]
    fn column_classification_covers_selectors() {
        let file = create_test_csv();
        let data = load_prepared(file.path().to_str().unwrap()).unwrap();

        let cats = data.categorical_columns();
        assert!(cats.contains(&"Geography".to_string()));
        assert!(cats.contains(&"Gender".to_string()));
        assert!(cats.contains(&features::TENURE_GROUP.to_string()));
        assert!(cats.contains(&features::AGE_GROUP.to_string()));

        let nums = data.numeric_columns();
        assert!(nums.contains(&"Age".to_string()));
        assert!(nums.contains(&"Balance".to_string()));
        assert!(nums.contains(&features::BALANCE_SALARY_RATIO.to_string()));
        assert!(!nums.contains(&"Geography".to_string()));
    }

    #[test]
    fn head_preview_matches_first_rows() {
        let file = create_test_csv();
        let data = load_prepared(file.path().to_str().unwrap()).unwrap();

        let (headers, rows) = data.head_rows(5);
        assert_eq!(headers.len(), data.column_count());
        assert_eq!(rows.len(), 5);

        // First row of the prepared table, unchanged from the input order.
        let geography_idx = headers.iter().position(|h| h == "Geography").unwrap();
        assert_eq!(rows[0][geography_idx], "France");
        let tenure_group_idx = headers
            .iter()
            .position(|h| h == features::TENURE_GROUP)
            .unwrap();
        assert_eq!(rows[0][tenure_group_idx], "New");
    }
}
