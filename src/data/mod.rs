//! Data module - workbook loading and the fixed table schema

mod loader;

pub use loader::{dataframe_from_range, LoaderError, WorkbookLoader};

/// Workbook shipped alongside the binary.
pub const DEFAULT_WORKBOOK: &str = "DataProject.xlsx";

/// Worksheet holding the beverage consumption table.
pub const SHEET_NAME: &str = "Table A1";

/// Rows shown in the dataset preview.
pub const PREVIEW_ROWS: usize = 5;

// Column names of Table A1.
pub const COL_DESCRIPTION: &str = "Description";
pub const COL_PER_CAPITA_1992: &str = "Per capita 1992";
pub const COL_PER_CAPITA_1997: &str = "Per capita 1997";
pub const COL_PER_CAPITA_2008: &str = "Per capita 2008-2009";
pub const COL_PER_CAPITA_2008_2: &str = "Per capita 2008-2009 (2)";
pub const COL_PCT_CONSUME: &str = "% consume";
pub const COL_PER_CONSUMER: &str = "Per consumer";
pub const COL_PER_CONSUMER_2: &str = "Per consumer2";
pub const COL_PER_CONSUMER_3: &str = "Per consumer3";

/// Per-capita columns charted across years, in charting order.
pub const PER_CAPITA_COLS: [&str; 4] = [
    COL_PER_CAPITA_1992,
    COL_PER_CAPITA_1997,
    COL_PER_CAPITA_2008,
    COL_PER_CAPITA_2008_2,
];

/// Per-consumer columns charted side by side.
pub const PER_CONSUMER_COLS: [&str; 3] = [COL_PER_CONSUMER, COL_PER_CONSUMER_2, COL_PER_CONSUMER_3];
