//! Descriptive Summary Module
//! Per-column overviews and the numeric describe table shown on the EDA page.

use polars::prelude::*;
use statrs::statistics::Statistics;

/// One row of the "Basic Info" table.
#[derive(Debug, Clone)]
pub struct ColumnOverview {
    pub name: String,
    pub dtype: String,
    pub non_null: usize,
    pub nulls: usize,
    pub unique: usize,
}

/// One row of the numeric describe table.
#[derive(Debug, Clone)]
pub struct NumericSummary {
    pub column: String,
    pub count: usize,
    pub mean: f64,
    pub std: f64,
    pub min: f64,
    pub q25: f64,
    pub median: f64,
    pub q75: f64,
    pub max: f64,
}

/// Dtype, null and cardinality overview for every column of the table.
pub fn column_overview(df: &DataFrame) -> Vec<ColumnOverview> {
    df.get_columns()
        .iter()
        .map(|col| {
            let series = col.as_materialized_series();
            ColumnOverview {
                name: col.name().to_string(),
                dtype: col.dtype().to_string(),
                non_null: col.len() - col.null_count(),
                nulls: col.null_count(),
                unique: series.n_unique().unwrap_or(0),
            }
        })
        .collect()
}

/// Describe every listed numeric column of the table.
pub fn numeric_describe(df: &DataFrame, columns: &[String]) -> Vec<NumericSummary> {
    columns
        .iter()
        .filter_map(|name| {
            let values = numeric_values(df, name).ok()?;
            Some(describe_values(name, &values))
        })
        .collect()
}

/// All non-null values of a column, cast to f64.
pub fn numeric_values(df: &DataFrame, column: &str) -> PolarsResult<Vec<f64>> {
    let col = df.column(column)?.cast(&DataType::Float64)?;
    let ca = col.f64()?;
    Ok(ca.into_iter().flatten().collect())
}

/// Descriptive statistics for one set of values.
pub fn describe_values(column: &str, values: &[f64]) -> NumericSummary {
    let n = values.len();
    if n == 0 {
        return NumericSummary {
            column: column.to_string(),
            count: 0,
            mean: f64::NAN,
            std: f64::NAN,
            min: f64::NAN,
            q25: f64::NAN,
            median: f64::NAN,
            q75: f64::NAN,
            max: f64::NAN,
        };
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    NumericSummary {
        column: column.to_string(),
        count: n,
        mean: Statistics::mean(values),
        std: if n > 1 { Statistics::std_dev(values) } else { 0.0 },
        min: sorted[0],
        q25: percentile(&sorted, 25.0),
        median: percentile(&sorted, 50.0),
        q75: percentile(&sorted, 75.0),
        max: sorted[n - 1],
    }
}

/// Percentile with linear interpolation between ranks.
pub fn percentile(sorted_values: &[f64], p: f64) -> f64 {
    let n = sorted_values.len();
    if n == 0 {
        return f64::NAN;
    }
    if n == 1 {
        return sorted_values[0];
    }

    let rank = (p / 100.0) * (n - 1) as f64;
    let lower = rank.floor() as usize;
    let upper = (rank.ceil() as usize).min(n - 1);
    let frac = rank - lower as f64;

    if lower == upper {
        sorted_values[lower]
    } else {
        sorted_values[lower] * (1.0 - frac) + sorted_values[upper] * frac
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percentile_interpolates_between_ranks() {
        let sorted = [1.0, 2.0, 3.0, 4.0];
        assert_eq!(percentile(&sorted, 0.0), 1.0);
        assert_eq!(percentile(&sorted, 50.0), 2.5);
        assert_eq!(percentile(&sorted, 100.0), 4.0);
        assert_eq!(percentile(&sorted, 25.0), 1.75);
    }

    #[test]
    fn percentile_handles_degenerate_inputs() {
        assert!(percentile(&[], 50.0).is_nan());
        assert_eq!(percentile(&[7.0], 95.0), 7.0);
    }

    #[test]
    fn describe_matches_hand_computation() {
        let values = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        let summary = describe_values("x", &values);

        assert_eq!(summary.count, 8);
        assert!((summary.mean - 5.0).abs() < 1e-12);
        // Sample standard deviation (n - 1 denominator).
        assert!((summary.std - (32.0f64 / 7.0).sqrt()).abs() < 1e-12);
        assert_eq!(summary.min, 2.0);
        assert_eq!(summary.max, 9.0);
        assert_eq!(summary.median, 4.5);
        assert_eq!(summary.q25, 4.0);
        assert_eq!(summary.q75, 5.5);
    }

    #[test]
    fn describe_of_empty_column_is_nan() {
        let summary = describe_values("empty", &[]);
        assert_eq!(summary.count, 0);
        assert!(summary.mean.is_nan());
    }

    #[test]
    fn column_overview_counts_nulls_and_uniques() {
        let df = df!(
            "Geography" => [Some("France"), Some("Spain"), None, Some("France")],
            "Age" => [42i64, 29, 50, 42],
        )
        .unwrap();

        let overview = column_overview(&df);
        assert_eq!(overview.len(), 2);

        let geo = &overview[0];
        assert_eq!(geo.name, "Geography");
        assert_eq!(geo.non_null, 3);
        assert_eq!(geo.nulls, 1);
        // Null counts as its own distinct value in Polars.
        assert_eq!(geo.unique, 3);

        let age = &overview[1];
        assert_eq!(age.nulls, 0);
        assert_eq!(age.unique, 3);
    }

    #[test]
    fn numeric_describe_skips_non_numeric_columns() {
        let df = df!(
            "Geography" => ["France", "Spain"],
            "Balance" => [100.0f64, 200.0],
        )
        .unwrap();

        let rows = numeric_describe(&df, &["Balance".to_string()]);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].column, "Balance");
        assert!((rows[0].mean - 150.0).abs() < 1e-12);
    }
}
