//! Workbook Loader Module
//! Reads one worksheet from an Excel workbook into a Polars DataFrame.

use calamine::{open_workbook, Data, Range, Reader, Xlsx};
use polars::prelude::*;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("Failed to open workbook: {0}")]
    Workbook(#[from] calamine::XlsxError),
    #[error("Worksheet '{0}' contains no data rows")]
    EmptySheet(String),
    #[error("Failed to build table: {0}")]
    Table(#[from] PolarsError),
    #[error("No data loaded")]
    NoData,
}

/// Handles workbook loading with calamine and Polars.
pub struct WorkbookLoader {
    df: Option<DataFrame>,
}

impl Default for WorkbookLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl WorkbookLoader {
    pub fn new() -> Self {
        Self { df: None }
    }

    /// Load one worksheet from an xlsx workbook.
    pub fn load_workbook(
        &mut self,
        file_path: &str,
        sheet: &str,
    ) -> Result<&DataFrame, LoaderError> {
        let mut workbook: Xlsx<_> = open_workbook(file_path)?;
        let range = workbook.worksheet_range(sheet)?;
        let df = dataframe_from_range(&range, sheet)?;

        self.df = Some(df);
        self.df.as_ref().ok_or(LoaderError::NoData)
    }

    /// Get a reference to the loaded DataFrame.
    pub fn get_dataframe(&self) -> Option<&DataFrame> {
        self.df.as_ref()
    }

    /// Set DataFrame directly (used for async loading)
    pub fn set_dataframe(&mut self, df: DataFrame) {
        self.df = Some(df);
    }

    /// Drop the loaded table, e.g. after a failed reload.
    pub fn clear(&mut self) {
        self.df = None;
    }
}

/// Convert a worksheet cell range to a DataFrame.
///
/// The first row is the header; a column whose non-empty cells are all numeric
/// becomes Float64 with empty cells as nulls, anything else becomes strings.
pub fn dataframe_from_range(range: &Range<Data>, sheet: &str) -> Result<DataFrame, LoaderError> {
    let mut rows = range.rows();
    let Some(header_row) = rows.next() else {
        return Err(LoaderError::EmptySheet(sheet.to_string()));
    };
    let data_rows: Vec<&[Data]> = rows.collect();
    if data_rows.is_empty() {
        return Err(LoaderError::EmptySheet(sheet.to_string()));
    }

    let headers: Vec<String> = header_row
        .iter()
        .enumerate()
        .map(|(i, cell)| match cell {
            Data::Empty => format!("column_{}", i),
            other => other.to_string().trim().to_string(),
        })
        .collect();

    let columns: Vec<Column> = headers
        .iter()
        .enumerate()
        .map(|(col_idx, name)| build_column(name, col_idx, &data_rows))
        .collect();

    Ok(DataFrame::new(columns)?)
}

fn cell_at<'a>(row: &'a [Data], col_idx: usize) -> &'a Data {
    row.get(col_idx).unwrap_or(&Data::Empty)
}

fn build_column(name: &str, col_idx: usize, rows: &[&[Data]]) -> Column {
    let numeric = rows.iter().all(|row| {
        matches!(
            cell_at(row, col_idx),
            Data::Empty | Data::Float(_) | Data::Int(_)
        )
    });

    if numeric {
        let values: Vec<Option<f64>> = rows
            .iter()
            .map(|row| match cell_at(row, col_idx) {
                Data::Float(f) => Some(*f),
                Data::Int(i) => Some(*i as f64),
                _ => None,
            })
            .collect();
        Column::new(name.into(), values)
    } else {
        let values: Vec<Option<String>> = rows
            .iter()
            .map(|row| match cell_at(row, col_idx) {
                Data::Empty => None,
                Data::String(s) => {
                    let trimmed = s.trim();
                    if trimmed.is_empty() {
                        None
                    } else {
                        Some(trimmed.to_string())
                    }
                }
                other => Some(other.to_string()),
            })
            .collect();
        Column::new(name.into(), values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_range() -> Range<Data> {
        let mut range = Range::new((0, 0), (3, 2));
        range.set_value((0, 0), Data::String("Description".to_string()));
        range.set_value((0, 1), Data::String("Per capita 1992".to_string()));
        range.set_value((0, 2), Data::String("% consume".to_string()));

        range.set_value((1, 0), Data::String("Soft drinks".to_string()));
        range.set_value((1, 1), Data::Float(435.0));
        range.set_value((1, 2), Data::Float(49.2));

        range.set_value((2, 0), Data::String("Milk".to_string()));
        range.set_value((2, 1), Data::Int(312));
        // (2, 2) left empty

        range.set_value((3, 0), Data::String("Fruit juice".to_string()));
        range.set_value((3, 1), Data::Float(128.5));
        range.set_value((3, 2), Data::Float(31.9));
        range
    }

    #[test]
    fn converts_sheet_with_expected_columns() {
        let df = dataframe_from_range(&sample_range(), "Table A1").unwrap();

        assert_eq!(df.height(), 3);
        let names: Vec<String> = df
            .get_column_names()
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(names, vec!["Description", "Per capita 1992", "% consume"]);
    }

    #[test]
    fn numeric_columns_become_float64_with_nulls() {
        let df = dataframe_from_range(&sample_range(), "Table A1").unwrap();

        let per_capita = df.column("Per capita 1992").unwrap();
        assert_eq!(per_capita.dtype(), &DataType::Float64);
        let ca = per_capita.f64().unwrap();
        assert_eq!(ca.get(0), Some(435.0));
        assert_eq!(ca.get(1), Some(312.0)); // integer cell widened

        let pct = df.column("% consume").unwrap();
        assert_eq!(pct.f64().unwrap().get(1), None); // empty cell preserved as null
    }

    #[test]
    fn text_columns_stay_strings() {
        let df = dataframe_from_range(&sample_range(), "Table A1").unwrap();
        assert_eq!(df.column("Description").unwrap().dtype(), &DataType::String);
    }

    #[test]
    fn mixed_column_falls_back_to_strings() {
        let mut range = Range::new((0, 0), (2, 0));
        range.set_value((0, 0), Data::String("Notes".to_string()));
        range.set_value((1, 0), Data::Float(3.5));
        range.set_value((2, 0), Data::String("n/a".to_string()));

        let df = dataframe_from_range(&range, "Sheet1").unwrap();
        assert_eq!(df.column("Notes").unwrap().dtype(), &DataType::String);
    }

    #[test]
    fn empty_header_cell_gets_synthesized_name() {
        let mut range = Range::new((0, 0), (1, 1));
        range.set_value((0, 0), Data::String("Description".to_string()));
        // (0, 1) header left empty
        range.set_value((1, 0), Data::String("Milk".to_string()));
        range.set_value((1, 1), Data::Float(1.0));

        let df = dataframe_from_range(&range, "Sheet1").unwrap();
        assert!(df.column("column_1").is_ok());
    }

    #[test]
    fn header_only_sheet_is_rejected() {
        let mut range = Range::new((0, 0), (0, 1));
        range.set_value((0, 0), Data::String("Description".to_string()));
        range.set_value((0, 1), Data::String("Per capita 1992".to_string()));

        let err = dataframe_from_range(&range, "Table A1").unwrap_err();
        assert!(matches!(err, LoaderError::EmptySheet(ref s) if s == "Table A1"));
    }

    #[test]
    fn missing_file_reports_workbook_error() {
        let mut loader = WorkbookLoader::new();
        let err = loader
            .load_workbook("does_not_exist.xlsx", "Table A1")
            .unwrap_err();
        assert!(matches!(err, LoaderError::Workbook(_)));
        assert!(loader.get_dataframe().is_none());
    }
}
