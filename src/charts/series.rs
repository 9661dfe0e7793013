//! Chart Series Module
//! Extracts chart-ready series from the loaded table.

use polars::prelude::*;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SeriesError {
    #[error("Column '{0}' not found in the dataset. Please check the column name.")]
    ColumnMissing(String),
    #[error("Column '{0}' is not numeric")]
    NotNumeric(String),
    #[error("Polars error: {0}")]
    Polars(#[from] PolarsError),
}

/// Labeled values for a single-series bar chart.
#[derive(Debug, Clone, PartialEq)]
pub struct CategorySeries {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

/// One pie slice with its share of the column total.
#[derive(Debug, Clone, PartialEq)]
pub struct PieSlice {
    pub label: String,
    pub value: f64,
    pub fraction: f64,
}

/// Several named value columns sharing one label axis.
#[derive(Debug, Clone, PartialEq)]
pub struct MultiSeries {
    pub labels: Vec<String>,
    pub series: Vec<(String, Vec<Option<f64>>)>,
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

/// Builds chart series from the wide table, validating every column it reads.
pub struct SeriesBuilder;

impl SeriesBuilder {
    fn column<'a>(df: &'a DataFrame, name: &str) -> Result<&'a Column, SeriesError> {
        df.column(name)
            .map_err(|_| SeriesError::ColumnMissing(name.to_string()))
    }

    fn numeric_values(df: &DataFrame, name: &str) -> Result<Vec<Option<f64>>, SeriesError> {
        let column = Self::column(df, name)?;
        if !is_numeric_dtype(column.dtype()) {
            return Err(SeriesError::NotNumeric(name.to_string()));
        }

        let values = column.cast(&DataType::Float64)?;
        let ca = values.f64()?;
        Ok(ca.into_iter().collect())
    }

    fn label_values(df: &DataFrame, name: &str) -> Result<Vec<Option<String>>, SeriesError> {
        let column = Self::column(df, name)?;
        Ok((0..column.len())
            .map(|i| {
                column.get(i).ok().and_then(|v| {
                    if v.is_null() {
                        None
                    } else {
                        Some(v.to_string().trim_matches('"').to_string())
                    }
                })
            })
            .collect())
    }

    /// Extract label/value pairs for a bar chart, dropping incomplete rows.
    pub fn category_series(
        df: &DataFrame,
        label_col: &str,
        value_col: &str,
    ) -> Result<CategorySeries, SeriesError> {
        let labels = Self::label_values(df, label_col)?;
        let values = Self::numeric_values(df, value_col)?;

        let mut out = CategorySeries {
            labels: Vec::new(),
            values: Vec::new(),
        };
        for (label, value) in labels.into_iter().zip(values) {
            if let (Some(label), Some(value)) = (label, value) {
                if !value.is_nan() {
                    out.labels.push(label);
                    out.values.push(value);
                }
            }
        }
        Ok(out)
    }

    /// Extract pie slices with fractions of the column total.
    ///
    /// Only positive values become slices; an all-null or non-positive column
    /// yields an empty list.
    pub fn pie_slices(
        df: &DataFrame,
        label_col: &str,
        value_col: &str,
    ) -> Result<Vec<PieSlice>, SeriesError> {
        let series = Self::category_series(df, label_col, value_col)?;

        let total: f64 = series.values.iter().filter(|v| **v > 0.0).sum();
        if total <= 0.0 {
            return Ok(Vec::new());
        }

        Ok(series
            .labels
            .into_iter()
            .zip(series.values)
            .filter(|(_, value)| *value > 0.0)
            .map(|(label, value)| PieSlice {
                label,
                value,
                fraction: value / total,
            })
            .collect())
    }

    /// Extract several wide columns side by side for line and grouped-bar charts.
    ///
    /// Rows without a label are dropped entirely; missing values inside a kept
    /// row stay as gaps.
    pub fn multi_series(
        df: &DataFrame,
        label_col: &str,
        value_cols: &[&str],
    ) -> Result<MultiSeries, SeriesError> {
        let labels = Self::label_values(df, label_col)?;
        let columns: Vec<(String, Vec<Option<f64>>)> = value_cols
            .iter()
            .map(|name| Ok(((*name).to_string(), Self::numeric_values(df, name)?)))
            .collect::<Result<_, SeriesError>>()?;

        let mut keep = Vec::new();
        let mut out_labels = Vec::new();
        for (i, label) in labels.iter().enumerate() {
            if let Some(label) = label {
                keep.push(i);
                out_labels.push(label.clone());
            }
        }

        let series = columns
            .into_iter()
            .map(|(name, values)| {
                let kept: Vec<Option<f64>> = keep.iter().map(|&i| values[i]).collect();
                (name, kept)
            })
            .collect();

        Ok(MultiSeries {
            labels: out_labels,
            series,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn beverage_frame() -> DataFrame {
        DataFrame::new(vec![
            Column::new(
                "Description".into(),
                vec![Some("Soft drinks"), Some("Milk"), None, Some("Fruit juice")],
            ),
            Column::new(
                "Per capita 1992".into(),
                vec![Some(435.0), Some(312.0), Some(99.0), None],
            ),
            Column::new(
                "Per capita 1997".into(),
                vec![Some(460.0), Some(295.0), Some(80.0), Some(140.0)],
            ),
            Column::new(
                "% consume".into(),
                vec![Some(50.0), Some(30.0), None, Some(20.0)],
            ),
        ])
        .unwrap()
    }

    #[test]
    fn category_series_drops_incomplete_rows() {
        let df = beverage_frame();
        let series =
            SeriesBuilder::category_series(&df, "Description", "Per capita 1992").unwrap();

        // row without label and row without value both dropped
        assert_eq!(series.labels, vec!["Soft drinks", "Milk"]);
        assert_eq!(series.values, vec![435.0, 312.0]);
    }

    #[test]
    fn missing_column_is_reported_by_name() {
        let df = beverage_frame();
        let err = SeriesBuilder::category_series(&df, "Description", "Per capita 1984").unwrap_err();
        assert!(matches!(err, SeriesError::ColumnMissing(ref name) if name == "Per capita 1984"));
        assert!(err.to_string().contains("'Per capita 1984' not found"));
    }

    #[test]
    fn dropped_per_capita_column_keeps_the_original_message() {
        let df = beverage_frame()
            .drop("Per capita 1992")
            .unwrap();

        let err = SeriesBuilder::category_series(&df, "Description", "Per capita 1992").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Column 'Per capita 1992' not found in the dataset. Please check the column name."
        );
        // the other charts on the page still have their columns
        assert!(SeriesBuilder::pie_slices(&df, "Description", "% consume").is_ok());
    }

    #[test]
    fn text_column_as_values_is_rejected() {
        let df = beverage_frame();
        let err = SeriesBuilder::category_series(&df, "Description", "Description").unwrap_err();
        assert!(matches!(err, SeriesError::NotNumeric(_)));
    }

    #[test]
    fn pie_fractions_sum_to_one() {
        let df = beverage_frame();
        let slices = SeriesBuilder::pie_slices(&df, "Description", "% consume").unwrap();

        assert_eq!(slices.len(), 3);
        let total: f64 = slices.iter().map(|s| s.fraction).sum();
        assert!((total - 1.0).abs() < 1e-9);
        assert_eq!(slices[0].label, "Soft drinks");
        assert!((slices[0].fraction - 0.5).abs() < 1e-9);
    }

    #[test]
    fn all_null_pie_column_yields_no_slices() {
        let df = DataFrame::new(vec![
            Column::new("Description".into(), vec!["a", "b"]),
            Column::new("% consume".into(), vec![None::<f64>, None]),
        ])
        .unwrap();

        let slices = SeriesBuilder::pie_slices(&df, "Description", "% consume").unwrap();
        assert!(slices.is_empty());
    }

    #[test]
    fn multi_series_keeps_gaps_and_row_alignment() {
        let df = beverage_frame();
        let multi = SeriesBuilder::multi_series(
            &df,
            "Description",
            &["Per capita 1992", "Per capita 1997"],
        )
        .unwrap();

        assert_eq!(multi.labels, vec!["Soft drinks", "Milk", "Fruit juice"]);
        assert_eq!(multi.series.len(), 2);
        assert_eq!(multi.series[0].0, "Per capita 1992");
        // the unlabeled row is gone, the null value survives as a gap
        assert_eq!(multi.series[0].1, vec![Some(435.0), Some(312.0), None]);
        assert_eq!(multi.series[1].1, vec![Some(460.0), Some(295.0), Some(140.0)]);
    }

    #[test]
    fn multi_series_validates_every_column() {
        let df = beverage_frame();
        let err =
            SeriesBuilder::multi_series(&df, "Description", &["Per capita 1992", "Per consumer"])
                .unwrap_err();
        assert!(matches!(err, SeriesError::ColumnMissing(ref name) if name == "Per consumer"));
    }
}
