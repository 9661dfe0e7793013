//! Summary Statistics Module
//! Describe-style descriptive statistics over the numeric table columns.

use polars::prelude::*;
use rayon::prelude::*;

/// Row labels of the summary table, in display order.
pub const SUMMARY_ROWS: [&str; 8] = ["count", "mean", "std", "min", "25%", "50%", "75%", "max"];

/// Descriptive statistics for a single numeric column.
#[derive(Debug, Clone)]
pub struct ColumnSummary {
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

impl ColumnSummary {
    fn empty(column: &str) -> Self {
        Self {
            column: column.to_string(),
            count: 0,
            mean: f64::NAN,
            std: f64::NAN,
            min: f64::NAN,
            q25: f64::NAN,
            median: f64::NAN,
            q75: f64::NAN,
            max: f64::NAN,
        }
    }

    /// Value backing a summary row label.
    pub fn value_for(&self, row: &str) -> f64 {
        match row {
            "count" => self.count as f64,
            "mean" => self.mean,
            "std" => self.std,
            "min" => self.min,
            "25%" => self.q25,
            "50%" => self.median,
            "75%" => self.q75,
            "max" => self.max,
            _ => f64::NAN,
        }
    }
}

fn is_numeric_dtype(dtype: &DataType) -> bool {
    matches!(
        dtype,
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
}

/// Handles summary statistics with multi-threading support.
pub struct SummaryCalculator;

impl SummaryCalculator {
    /// Compute summaries for every numeric column, preserving column order.
    pub fn summarize_columns(df: &DataFrame) -> Vec<ColumnSummary> {
        let numeric: Vec<(String, Vec<f64>)> = df
            .get_columns()
            .iter()
            .filter(|col| is_numeric_dtype(col.dtype()))
            .map(|col| {
                let values: Vec<f64> = col
                    .cast(&DataType::Float64)
                    .ok()
                    .and_then(|c| {
                        c.f64()
                            .ok()
                            .map(|ca| ca.into_iter().flatten().filter(|v| !v.is_nan()).collect())
                    })
                    .unwrap_or_default();
                (col.name().to_string(), values)
            })
            .collect();

        numeric
            .par_iter()
            .map(|(name, values)| Self::compute_summary(name, values))
            .collect()
    }

    /// Compute descriptive statistics for an array of values.
    pub fn compute_summary(column: &str, values: &[f64]) -> ColumnSummary {
        let n = values.len();
        if n == 0 {
            return ColumnSummary::empty(column);
        }

        let mut sorted = values.to_vec();
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

        let mean = values.iter().sum::<f64>() / n as f64;
        let variance = if n > 1 {
            values.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (n - 1) as f64
        } else {
            0.0
        };

        ColumnSummary {
            column: column.to_string(),
            count: n,
            mean,
            std: variance.sqrt(),
            min: sorted[0],
            q25: Self::percentile(&sorted, 25.0),
            median: Self::percentile(&sorted, 50.0),
            q75: Self::percentile(&sorted, 75.0),
            max: sorted[n - 1],
        }
    }

    /// Calculate percentile using linear interpolation (NumPy compatible).
    fn percentile(sorted_values: &[f64], p: f64) -> f64 {
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
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: f64, b: f64) {
        assert!((a - b).abs() < 1e-9, "{} != {}", a, b);
    }

    #[test]
    fn summary_matches_known_values() {
        let values = [1.0, 2.0, 3.0, 4.0];
        let summary = SummaryCalculator::compute_summary("x", &values);

        assert_eq!(summary.count, 4);
        assert_close(summary.mean, 2.5);
        assert_close(summary.std, (5.0f64 / 3.0).sqrt());
        assert_close(summary.min, 1.0);
        assert_close(summary.q25, 1.75);
        assert_close(summary.median, 2.5);
        assert_close(summary.q75, 3.25);
        assert_close(summary.max, 4.0);
    }

    #[test]
    fn single_value_has_zero_std() {
        let summary = SummaryCalculator::compute_summary("x", &[7.0]);
        assert_eq!(summary.count, 1);
        assert_close(summary.std, 0.0);
        assert_close(summary.median, 7.0);
    }

    #[test]
    fn empty_column_is_all_nan() {
        let summary = SummaryCalculator::compute_summary("x", &[]);
        assert_eq!(summary.count, 0);
        assert!(summary.mean.is_nan());
        assert!(summary.max.is_nan());
    }

    #[test]
    fn skips_text_columns_and_keeps_order() {
        let df = DataFrame::new(vec![
            Column::new("Description".into(), vec!["a", "b", "c"]),
            Column::new("Per capita 1992".into(), vec![1.0, 2.0, 3.0]),
            Column::new("% consume".into(), vec![Some(10.0), None, Some(30.0)]),
        ])
        .unwrap();

        let summaries = SummaryCalculator::summarize_columns(&df);
        let names: Vec<&str> = summaries.iter().map(|s| s.column.as_str()).collect();
        assert_eq!(names, vec!["Per capita 1992", "% consume"]);

        // nulls excluded from the count
        assert_eq!(summaries[1].count, 2);
        assert_close(summaries[1].mean, 20.0);
    }

    #[test]
    fn value_for_maps_every_row_label() {
        let summary = SummaryCalculator::compute_summary("x", &[1.0, 2.0]);
        for row in SUMMARY_ROWS {
            assert!(!summary.value_for(row).is_nan(), "row {} unmapped", row);
        }
    }
}
