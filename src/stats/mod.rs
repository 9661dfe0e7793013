//! Stats module - summary statistics

mod calculator;

pub use calculator::{ColumnSummary, SummaryCalculator, SUMMARY_ROWS};
