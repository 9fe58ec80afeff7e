//! Feature Engineering Module
//! Derives the grouping columns attached to every customer record at load time.

use polars::prelude::*;

use super::loader::ID_COLUMNS;

/// Derived column: tenure bucket.
pub const TENURE_GROUP: &str = "TenureGroup";
/// Derived column: age bucket.
pub const AGE_GROUP: &str = "AgeGroup";
/// Derived column: balance relative to salary.
pub const BALANCE_SALARY_RATIO: &str = "BalanceSalaryRatio";

/// Tenure bucket for a customer account.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TenureGroup {
    New,
    MidTerm,
    LongTerm,
}

impl TenureGroup {
    /// Classify a tenure (years with the bank) into its bucket.
    /// New: tenure <= 3, Mid-term: 4..=6, Long-term: > 6.
    pub fn classify(tenure: i64) -> Self {
        if tenure <= 3 {
            TenureGroup::New
        } else if tenure <= 6 {
            TenureGroup::MidTerm
        } else {
            TenureGroup::LongTerm
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TenureGroup::New => "New",
            TenureGroup::MidTerm => "Mid-term",
            TenureGroup::LongTerm => "Long-term",
        }
    }
}

/// Age bucket for a customer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgeGroup {
    Young,
    Adult,
    Senior,
}

impl AgeGroup {
    /// Classify an age into its bucket.
    /// Young: age < 30, Adult: 30..=49, Senior: >= 50.
    pub fn classify(age: i64) -> Self {
        if age < 30 {
            AgeGroup::Young
        } else if age < 50 {
            AgeGroup::Adult
        } else {
            AgeGroup::Senior
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            AgeGroup::Young => "Young",
            AgeGroup::Adult => "Adult",
            AgeGroup::Senior => "Senior",
        }
    }
}

/// Balance relative to estimated salary. The +1 keeps the denominator
/// strictly positive for zero-salary rows (intended smoothing constant).
pub fn balance_salary_ratio(balance: f64, salary: f64) -> f64 {
    balance / (salary + 1.0)
}

/// Drop the identifier columns and append the three derived columns.
///
/// Row count and row order are unchanged; the result is treated as
/// immutable for the rest of the session.
pub fn prepare(df: &DataFrame) -> PolarsResult<DataFrame> {
    let mut out = df.drop_many(ID_COLUMNS);

    let tenure = out.column("Tenure")?.cast(&DataType::Int64)?;
    let tenure = tenure.i64()?;
    let age = out.column("Age")?.cast(&DataType::Int64)?;
    let age = age.i64()?;
    let balance = out.column("Balance")?.cast(&DataType::Float64)?;
    let balance = balance.f64()?;
    let salary = out.column("EstimatedSalary")?.cast(&DataType::Float64)?;
    let salary = salary.f64()?;

    let height = out.height();
    let mut tenure_groups: Vec<String> = Vec::with_capacity(height);
    let mut age_groups: Vec<String> = Vec::with_capacity(height);
    let mut ratios: Vec<f64> = Vec::with_capacity(height);

    // Source data is assumed complete; nulls classify from the zero default.
    for i in 0..height {
        let t = tenure.get(i).unwrap_or_default();
        let a = age.get(i).unwrap_or_default();
        let b = balance.get(i).unwrap_or_default();
        let s = salary.get(i).unwrap_or_default();

        tenure_groups.push(TenureGroup::classify(t).as_str().to_string());
        age_groups.push(AgeGroup::classify(a).as_str().to_string());
        ratios.push(balance_salary_ratio(b, s));
    }

    out.with_column(Column::new(TENURE_GROUP.into(), tenure_groups))?;
    out.with_column(Column::new(AGE_GROUP.into(), age_groups))?;
    out.with_column(Column::new(BALANCE_SALARY_RATIO.into(), ratios))?;

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tenure_buckets_partition_at_3_and_6() {
        assert_eq!(TenureGroup::classify(0), TenureGroup::New);
        assert_eq!(TenureGroup::classify(3), TenureGroup::New);
        assert_eq!(TenureGroup::classify(4), TenureGroup::MidTerm);
        assert_eq!(TenureGroup::classify(6), TenureGroup::MidTerm);
        assert_eq!(TenureGroup::classify(7), TenureGroup::LongTerm);
        assert_eq!(TenureGroup::classify(10), TenureGroup::LongTerm);
    }

    #[test]
    fn tenure_classification_is_total() {
        // Out-of-domain values still map to a bucket, no validation.
        assert_eq!(TenureGroup::classify(-1), TenureGroup::New);
        assert_eq!(TenureGroup::classify(i64::MAX), TenureGroup::LongTerm);
    }

    #[test]
    fn age_buckets_partition_at_29_and_49() {
        assert_eq!(AgeGroup::classify(18), AgeGroup::Young);
        assert_eq!(AgeGroup::classify(29), AgeGroup::Young);
        assert_eq!(AgeGroup::classify(30), AgeGroup::Adult);
        assert_eq!(AgeGroup::classify(49), AgeGroup::Adult);
        assert_eq!(AgeGroup::classify(50), AgeGroup::Senior);
        assert_eq!(AgeGroup::classify(92), AgeGroup::Senior);
    }

    #[test]
    fn ratio_divides_by_salary_plus_one() {
        let ratio = balance_salary_ratio(100_000.0, 50_000.0);
        assert!((ratio - 100_000.0 / 50_001.0).abs() < 1e-12);
        assert!((ratio - 1.99996).abs() < 1e-5);
    }

    #[test]
    fn ratio_is_defined_for_zero_salary() {
        assert_eq!(balance_salary_ratio(500.0, 0.0), 500.0);
        assert_eq!(balance_salary_ratio(0.0, 0.0), 0.0);
    }

    fn sample_frame() -> DataFrame {
        df!(
            "RowNumber" => [1i64, 2, 3],
            "CustomerId" => [15634602i64, 15647311, 15619304],
            "Surname" => ["Hargrave", "Hill", "Onio"],
            "CreditScore" => [619i64, 608, 502],
            "Geography" => ["France", "Spain", "France"],
            "Gender" => ["Female", "Female", "Female"],
            "Age" => [42i64, 29, 50],
            "Tenure" => [2i64, 4, 8],
            "Balance" => [0.0f64, 83807.86, 159660.8],
            "NumOfProducts" => [1i64, 1, 3],
            "HasCrCard" => [1i64, 0, 1],
            "IsActiveMember" => [1i64, 1, 0],
            "EstimatedSalary" => [101348.88f64, 112542.58, 113931.57],
            "Exited" => [1i64, 0, 1],
        )
        .unwrap()
    }

    #[test]
    fn prepare_drops_identifiers_and_appends_derived_columns() {
        let raw = sample_frame();
        let prepared = prepare(&raw).unwrap();

        assert_eq!(prepared.height(), raw.height());
        for dropped in ["RowNumber", "CustomerId", "Surname"] {
            assert!(prepared.column(dropped).is_err());
        }
        for added in [TENURE_GROUP, AGE_GROUP, BALANCE_SALARY_RATIO] {
            assert!(prepared.column(added).is_ok());
        }
    }

    #[test]
    fn prepare_classifies_rows_in_order() {
        let prepared = prepare(&sample_frame()).unwrap();

        let tenure = prepared.column(TENURE_GROUP).unwrap();
        let tenure = tenure.str().unwrap();
        assert_eq!(tenure.get(0), Some("New"));
        assert_eq!(tenure.get(1), Some("Mid-term"));
        assert_eq!(tenure.get(2), Some("Long-term"));

        let age = prepared.column(AGE_GROUP).unwrap();
        let age = age.str().unwrap();
        assert_eq!(age.get(0), Some("Adult"));
        assert_eq!(age.get(1), Some("Young"));
        assert_eq!(age.get(2), Some("Senior"));

        let ratio = prepared.column(BALANCE_SALARY_RATIO).unwrap();
        let ratio = ratio.f64().unwrap();
        assert_eq!(ratio.get(0), Some(0.0));
        let expected = 83807.86 / (112542.58 + 1.0);
        assert!((ratio.get(1).unwrap() - expected).abs() < 1e-12);
    }
}
