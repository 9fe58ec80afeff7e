//! Aggregation Module
//! Group-by slices the visual analysis views re-derive on every render pass.

use polars::prelude::*;
use std::collections::BTreeMap;

/// Retained/churned counts for one category of a column.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupedCounts {
    pub category: String,
    pub retained: usize,
    pub churned: usize,
}

/// Churn rate (mean of `Exited`) for one product count.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductChurnRate {
    pub products: i64,
    pub rate: f64,
}

/// Mean balance per product count, split by churn status.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductBalance {
    pub products: i64,
    pub retained_mean: Option<f64>,
    pub churned_mean: Option<f64>,
}

/// Scatter points split by churn status.
#[derive(Debug, Clone, Default)]
pub struct ScatterSeries {
    pub retained: Vec<[f64; 2]>,
    pub churned: Vec<[f64; 2]>,
}

/// Value samples for one category, split by churn status.
#[derive(Debug, Clone)]
pub struct CategoryValues {
    pub category: String,
    pub retained: Vec<f64>,
    pub churned: Vec<f64>,
}

/// Category -> count for a column, categories sorted for stable display.
pub fn value_counts(df: &DataFrame, column: &str) -> PolarsResult<Vec<(String, usize)>> {
    let series = df.column(column)?.as_materialized_series().clone();

    let mut counts: BTreeMap<String, usize> = BTreeMap::new();
    for i in 0..series.len() {
        let Ok(value) = series.get(i) else { continue };
        if value.is_null() {
            continue;
        }
        let key = value.to_string().trim_matches('"').to_string();
        *counts.entry(key).or_default() += 1;
    }

    Ok(counts.into_iter().collect())
}

/// (retained, churned) totals for the whole table.
pub fn churn_counts(df: &DataFrame) -> PolarsResult<(usize, usize)> {
    let exited = exited_column(df)?;
    let exited = exited.i64()?;

    let mut retained = 0usize;
    let mut churned = 0usize;
    for value in exited.into_iter().flatten() {
        if value == 0 {
            retained += 1;
        } else {
            churned += 1;
        }
    }
    Ok((retained, churned))
}

/// Mean of `Exited` grouped by `NumOfProducts`, sorted by product count.
pub fn churn_rate_by_products(df: &DataFrame) -> PolarsResult<Vec<ProductChurnRate>> {
    let grouped = df
        .clone()
        .lazy()
        .group_by([col("NumOfProducts")])
        .agg([col("Exited").mean().alias("rate")])
        .sort(["NumOfProducts"], Default::default())
        .collect()?;

    let products = grouped.column("NumOfProducts")?.cast(&DataType::Int64)?;
    let products = products.i64()?;
    let rates = grouped.column("rate")?.f64()?;

    let mut rows = Vec::with_capacity(grouped.height());
    for i in 0..grouped.height() {
        if let (Some(products), Some(rate)) = (products.get(i), rates.get(i)) {
            rows.push(ProductChurnRate { products, rate });
        }
    }
    Ok(rows)
}

/// Retained/churned counts per category of a column, categories sorted.
pub fn counts_by_category_and_churn(
    df: &DataFrame,
    column: &str,
) -> PolarsResult<Vec<GroupedCounts>> {
    let series = df.column(column)?.as_materialized_series().clone();
    let exited = exited_column(df)?;
    let exited = exited.i64()?;

    let mut counts: BTreeMap<String, (usize, usize)> = BTreeMap::new();
    for i in 0..df.height() {
        let (Ok(category), Some(flag)) = (series.get(i), exited.get(i)) else {
            continue;
        };
        if category.is_null() {
            continue;
        }
        let key = category.to_string().trim_matches('"').to_string();
        let entry = counts.entry(key).or_default();
        if flag == 0 {
            entry.0 += 1;
        } else {
            entry.1 += 1;
        }
    }

    Ok(counts
        .into_iter()
        .map(|(category, (retained, churned))| GroupedCounts {
            category,
            retained,
            churned,
        })
        .collect())
}

/// Mean `Balance` grouped by (`NumOfProducts`, `Exited`), rounded to 2
/// decimals, sorted by product count.
pub fn mean_balance_by_products(df: &DataFrame) -> PolarsResult<Vec<ProductBalance>> {
    let products = df.column("NumOfProducts")?.cast(&DataType::Int64)?;
    let products = products.i64()?;
    let balance = df.column("Balance")?.cast(&DataType::Float64)?;
    let balance = balance.f64()?;
    let exited = exited_column(df)?;
    let exited = exited.i64()?;

    // (sum, count) per (products, churn status)
    let mut sums: BTreeMap<i64, [(f64, usize); 2]> = BTreeMap::new();
    for i in 0..df.height() {
        let (Some(p), Some(b), Some(flag)) = (products.get(i), balance.get(i), exited.get(i))
        else {
            continue;
        };
        let entry = sums.entry(p).or_insert([(0.0, 0); 2]);
        let slot = if flag == 0 { &mut entry[0] } else { &mut entry[1] };
        slot.0 += b;
        slot.1 += 1;
    }

    let round2 = |v: f64| (v * 100.0).round() / 100.0;
    Ok(sums
        .into_iter()
        .map(|(products, [retained, churned])| ProductBalance {
            products,
            retained_mean: (retained.1 > 0).then(|| round2(retained.0 / retained.1 as f64)),
            churned_mean: (churned.1 > 0).then(|| round2(churned.0 / churned.1 as f64)),
        })
        .collect())
}

/// Points of two numeric columns, split by churn status.
pub fn churn_scatter(df: &DataFrame, x: &str, y: &str) -> PolarsResult<ScatterSeries> {
    let x_col = df.column(x)?.cast(&DataType::Float64)?;
    let x_ca = x_col.f64()?;
    let y_col = df.column(y)?.cast(&DataType::Float64)?;
    let y_ca = y_col.f64()?;
    let exited = exited_column(df)?;
    let exited = exited.i64()?;

    let mut series = ScatterSeries::default();
    for i in 0..df.height() {
        let (Some(xv), Some(yv), Some(flag)) = (x_ca.get(i), y_ca.get(i), exited.get(i)) else {
            continue;
        };
        if flag == 0 {
            series.retained.push([xv, yv]);
        } else {
            series.churned.push([xv, yv]);
        }
    }
    Ok(series)
}

/// Samples of a numeric column per category of another column, split by
/// churn status. Categories sorted for stable display.
pub fn values_by_category_and_churn(
    df: &DataFrame,
    category: &str,
    value: &str,
) -> PolarsResult<Vec<CategoryValues>> {
    let categories = df.column(category)?.as_materialized_series().clone();
    let values = df.column(value)?.cast(&DataType::Float64)?;
    let values = values.f64()?;
    let exited = exited_column(df)?;
    let exited = exited.i64()?;

    let mut grouped: BTreeMap<String, (Vec<f64>, Vec<f64>)> = BTreeMap::new();
    for i in 0..df.height() {
        let (Ok(cat), Some(v), Some(flag)) = (categories.get(i), values.get(i), exited.get(i))
        else {
            continue;
        };
        if cat.is_null() {
            continue;
        }
        let key = cat.to_string().trim_matches('"').to_string();
        let entry = grouped.entry(key).or_default();
        if flag == 0 {
            entry.0.push(v);
        } else {
            entry.1.push(v);
        }
    }

    Ok(grouped
        .into_iter()
        .map(|(category, (retained, churned))| CategoryValues {
            category,
            retained,
            churned,
        })
        .collect())
}

fn exited_column(df: &DataFrame) -> PolarsResult<Column> {
    df.column("Exited")?.cast(&DataType::Int64)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_frame() -> DataFrame {
        df!(
            "Geography" => ["France", "Spain", "France", "Germany", "France", "Spain"],
            "Age" => [42i64, 29, 50, 35, 61, 24],
            "Balance" => [0.0f64, 80000.0, 160000.0, 120000.0, 40000.0, 0.0],
            "NumOfProducts" => [1i64, 1, 2, 2, 1, 2],
            "Exited" => [1i64, 0, 1, 0, 0, 0],
        )
        .unwrap()
    }

    #[test]
    fn value_counts_are_sorted_by_category() {
        let counts = value_counts(&sample_frame(), "Geography").unwrap();
        assert_eq!(
            counts,
            vec![
                ("France".to_string(), 3),
                ("Germany".to_string(), 1),
                ("Spain".to_string(), 2),
            ]
        );
    }

    #[test]
    fn churn_counts_split_the_table() {
        let (retained, churned) = churn_counts(&sample_frame()).unwrap();
        assert_eq!(retained, 4);
        assert_eq!(churned, 2);
    }

    #[test]
    fn churn_rate_groups_by_product_count() {
        let rates = churn_rate_by_products(&sample_frame()).unwrap();
        assert_eq!(rates.len(), 2);
        assert_eq!(rates[0].products, 1);
        assert!((rates[0].rate - 1.0 / 3.0).abs() < 1e-12);
        assert_eq!(rates[1].products, 2);
        assert!((rates[1].rate - 1.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn grouped_counts_split_by_churn() {
        let rows = counts_by_category_and_churn(&sample_frame(), "Geography").unwrap();
        assert_eq!(
            rows,
            vec![
                GroupedCounts {
                    category: "France".to_string(),
                    retained: 1,
                    churned: 2,
                },
                GroupedCounts {
                    category: "Germany".to_string(),
                    retained: 1,
                    churned: 0,
                },
                GroupedCounts {
                    category: "Spain".to_string(),
                    retained: 2,
                    churned: 0,
                },
            ]
        );
    }

    #[test]
    fn mean_balance_rounds_to_cents() {
        let rows = mean_balance_by_products(&sample_frame()).unwrap();
        assert_eq!(rows.len(), 2);

        let one_product = &rows[0];
        assert_eq!(one_product.products, 1);
        assert_eq!(one_product.retained_mean, Some(60000.0));
        assert_eq!(one_product.churned_mean, Some(0.0));

        let two_products = &rows[1];
        assert_eq!(two_products.retained_mean, Some(60000.0));
        assert_eq!(two_products.churned_mean, Some(160000.0));
    }

    #[test]
    fn mean_balance_is_absent_for_empty_slots() {
        let df = df!(
            "Balance" => [100.0f64, 200.0],
            "NumOfProducts" => [4i64, 4],
            "Exited" => [1i64, 1],
        )
        .unwrap();

        let rows = mean_balance_by_products(&df).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].retained_mean, None);
        assert_eq!(rows[0].churned_mean, Some(150.0));
    }

    #[test]
    fn scatter_points_split_by_churn() {
        let series = churn_scatter(&sample_frame(), "Age", "Balance").unwrap();
        assert_eq!(series.retained.len(), 4);
        assert_eq!(series.churned.len(), 2);
        assert_eq!(series.churned[0], [42.0, 0.0]);
        assert_eq!(series.retained[0], [29.0, 80000.0]);
    }

    #[test]
    fn category_values_split_by_churn() {
        let rows = values_by_category_and_churn(&sample_frame(), "Geography", "Balance").unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].category, "France");
        assert_eq!(rows[0].retained, vec![40000.0]);
        assert_eq!(rows[0].churned, vec![0.0, 160000.0]);
    }
}
