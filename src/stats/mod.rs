//! Statistics module - descriptive summaries and view aggregates

mod aggregate;
mod summary;

pub use aggregate::{
    churn_counts, churn_rate_by_products, churn_scatter, counts_by_category_and_churn,
    mean_balance_by_products, value_counts, values_by_category_and_churn, CategoryValues,
    GroupedCounts, ProductBalance, ProductChurnRate, ScatterSeries,
};
pub use summary::{
    column_overview, describe_values, numeric_describe, numeric_values, percentile,
    ColumnOverview, NumericSummary,
};
