//! Charts module - series extraction and rendering

mod export;
mod plotter;
mod series;

pub use export::{export_file_name, ChartExporter, ExportError};
pub use plotter::{ChartPlotter, ACCENT, PIE_START_ANGLE_DEG};
pub use series::{CategorySeries, MultiSeries, PieSlice, SeriesBuilder, SeriesError};
