//! BevDash Main Application
//! Main window with sidebar navigation and page rendering.

use crate::charts::{export_file_name, ChartExporter, SeriesBuilder};
use crate::data::{
    WorkbookLoader, COL_DESCRIPTION, COL_PCT_CONSUME, COL_PER_CAPITA_1992, DEFAULT_WORKBOOK,
    PER_CAPITA_COLS, PER_CONSUMER_COLS, SHEET_NAME,
};
use crate::gui::{overview, sources, trends, Page, Sidebar, SidebarAction};
use crate::stats::{ColumnSummary, SummaryCalculator};
use egui::{Color32, RichText, ScrollArea, SidePanel};
use polars::prelude::*;
use std::path::{Path, PathBuf};
use std::sync::mpsc::{channel, Receiver};
use std::thread;
use tracing::{debug, error, info, warn};

const LOAD_ERROR_BANNER: &str = "Failed to load data. Please check the file path and sheet name.";

/// Workbook loading result from the background thread
enum LoadResult {
    Complete {
        df: DataFrame,
        summaries: Vec<ColumnSummary>,
        row_count: usize,
        column_count: usize,
    },
    Error(String),
}

/// Main application window.
pub struct BevDashApp {
    loader: WorkbookLoader,
    sidebar: Sidebar,
    summaries: Vec<ColumnSummary>,
    load_error: Option<String>,

    // Async workbook loading
    load_rx: Option<Receiver<LoadResult>>,
    is_loading: bool,
}

impl BevDashApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        let mut app = Self {
            loader: WorkbookLoader::new(),
            sidebar: Sidebar::new(),
            summaries: Vec::new(),
            load_error: None,
            load_rx: None,
            is_loading: false,
        };
        app.start_load(PathBuf::from(DEFAULT_WORKBOOK));
        app
    }

    /// Load a workbook in a background thread.
    fn start_load(&mut self, path: PathBuf) {
        if self.is_loading {
            return;
        }

        self.is_loading = true;
        self.load_error = None;
        self.sidebar.workbook_path = Some(path.clone());
        self.sidebar
            .set_status(&format!("Loading {}...", path.display()));

        let (tx, rx) = channel();
        self.load_rx = Some(rx);

        thread::spawn(move || {
            let mut loader = WorkbookLoader::new();
            match loader.load_workbook(&path.to_string_lossy(), SHEET_NAME) {
                Ok(df) => {
                    let df = df.clone();
                    let summaries = SummaryCalculator::summarize_columns(&df);
                    let _ = tx.send(LoadResult::Complete {
                        row_count: df.height(),
                        column_count: df.width(),
                        df,
                        summaries,
                    });
                }
                Err(e) => {
                    let _ = tx.send(LoadResult::Error(e.to_string()));
                }
            }
        });
    }

    /// Check for workbook loading results
    fn check_load_results(&mut self) {
        let rx = self.load_rx.take();
        if let Some(rx) = rx {
            let mut should_keep_receiver = true;

            while let Ok(result) = rx.try_recv() {
                match result {
                    LoadResult::Complete {
                        df,
                        summaries,
                        row_count,
                        column_count,
                    } => {
                        info!(rows = row_count, columns = column_count, "workbook loaded");
                        self.loader.set_dataframe(df);
                        self.summaries = summaries;
                        self.load_error = None;
                        self.sidebar
                            .set_status(&format!("Loaded {} rows, {} columns", row_count, column_count));
                        self.sidebar.export_enabled = true;
                        self.is_loading = false;
                        should_keep_receiver = false;
                    }
                    LoadResult::Error(detail) => {
                        error!(%detail, "workbook load failed");
                        self.loader.clear();
                        self.summaries.clear();
                        self.load_error = Some(detail.clone());
                        self.sidebar.set_status(&format!("Error: {}", detail));
                        self.sidebar.export_enabled = false;
                        self.is_loading = false;
                        should_keep_receiver = false;
                    }
                }
            }

            if should_keep_receiver {
                self.load_rx = Some(rx);
            }
        }
    }

    /// Handle workbook selection through a native file dialog.
    fn handle_browse_workbook(&mut self) {
        if self.is_loading {
            return;
        }

        if let Some(path) = rfd::FileDialog::new()
            .add_filter("Excel Workbooks", &["xlsx", "xlsm"])
            .pick_file()
        {
            self.start_load(path);
        }
    }

    /// Re-read the current workbook from disk.
    fn handle_reload(&mut self) {
        let path = self
            .sidebar
            .workbook_path
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_WORKBOOK));
        self.start_load(path);
    }

    /// Export the selected page's charts as PNG files.
    fn handle_export_charts(&mut self) {
        let Some(df) = self.loader.get_dataframe() else {
            self.sidebar.set_status("No data to export");
            return;
        };

        let Some(dir) = rfd::FileDialog::new()
            .set_title("Choose export directory")
            .pick_folder()
        else {
            return; // User cancelled
        };

        match Self::export_page_charts(df, self.sidebar.page, &dir) {
            Ok(0) => {
                self.sidebar.set_status("No charts on this page");
            }
            Ok(count) => {
                info!(count, dir = %dir.display(), "charts exported");
                self.sidebar
                    .set_status(&format!("Exported {} charts", count));
                let _ = open::that(&dir);
            }
            Err(e) => {
                warn!(%e, "chart export failed");
                self.sidebar.set_status(&format!("Error: {}", e));
            }
        }
    }

    fn export_page_charts(df: &DataFrame, page: Page, dir: &Path) -> anyhow::Result<usize> {
        let mut written = 0;

        match page {
            Page::Overview => {}
            Page::ConsumptionTrends => {
                match SeriesBuilder::category_series(df, COL_DESCRIPTION, COL_PER_CAPITA_1992) {
                    Ok(series) => {
                        ChartExporter::export_bar_png(
                            &series,
                            trends::CHART_TITLES[0],
                            "Beverage Type",
                            "Energy (kJ/day)",
                            &dir.join(export_file_name(trends::CHART_TITLES[0])),
                        )?;
                        written += 1;
                    }
                    Err(e) => warn!(%e, "skipping chart export"),
                }

                match SeriesBuilder::pie_slices(df, COL_DESCRIPTION, COL_PCT_CONSUME) {
                    Ok(slices) if !slices.is_empty() => {
                        ChartExporter::export_pie_png(
                            &slices,
                            trends::CHART_TITLES[1],
                            &dir.join(export_file_name(trends::CHART_TITLES[1])),
                        )?;
                        written += 1;
                    }
                    Ok(_) => {}
                    Err(e) => warn!(%e, "skipping chart export"),
                }

                match SeriesBuilder::multi_series(df, COL_DESCRIPTION, &PER_CAPITA_COLS) {
                    Ok(multi) => {
                        ChartExporter::export_line_png(
                            &multi,
                            trends::CHART_TITLES[2],
                            "Beverage Type",
                            "Per Capita Consumption",
                            &dir.join(export_file_name(trends::CHART_TITLES[2])),
                        )?;
                        written += 1;
                    }
                    Err(e) => warn!(%e, "skipping chart export"),
                }
            }
            Page::EnergySources => {
                match SeriesBuilder::multi_series(df, COL_DESCRIPTION, &PER_CONSUMER_COLS) {
                    Ok(multi) => {
                        ChartExporter::export_grouped_bar_png(
                            &multi,
                            sources::CHART_TITLES[0],
                            "Beverage Type",
                            "Per Consumer Consumption",
                            &dir.join(export_file_name(sources::CHART_TITLES[0])),
                        )?;
                        written += 1;
                    }
                    Err(e) => warn!(%e, "skipping chart export"),
                }

                match SeriesBuilder::category_series(df, COL_DESCRIPTION, COL_PER_CAPITA_1992) {
                    Ok(series) => {
                        ChartExporter::export_bar_png(
                            &series,
                            sources::CHART_TITLES[1],
                            "Description",
                            "Total Energy (kJ/day)",
                            &dir.join(export_file_name(sources::CHART_TITLES[1])),
                        )?;
                        written += 1;
                    }
                    Err(e) => warn!(%e, "skipping chart export"),
                }
            }
        }

        Ok(written)
    }

    fn show_load_error(ui: &mut egui::Ui, detail: &str) {
        ui.vertical_centered(|ui| {
            ui.add_space(ui.available_height() * 0.35);
            ui.label(
                RichText::new(LOAD_ERROR_BANNER)
                    .size(18.0)
                    .color(Color32::from_rgb(220, 53, 69)),
            );
            ui.add_space(6.0);
            ui.label(RichText::new(detail).size(12.0).color(Color32::GRAY));
        });
    }
}

impl eframe::App for BevDashApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Check for background results
        self.check_load_results();

        // Request repaint while loading
        if self.is_loading {
            ctx.request_repaint();
        }

        // Left panel - page selector and workbook controls
        SidePanel::left("sidebar")
            .min_width(230.0)
            .max_width(280.0)
            .show(ctx, |ui| {
                ScrollArea::vertical().show(ui, |ui| {
                    let action = self.sidebar.show(ui);

                    match action {
                        SidebarAction::PageChanged => {
                            debug!(page = self.sidebar.page.label(), "page selected");
                        }
                        SidebarAction::OpenWorkbook => self.handle_browse_workbook(),
                        SidebarAction::Reload => self.handle_reload(),
                        SidebarAction::ExportCharts => self.handle_export_charts(),
                        SidebarAction::None => {}
                    }
                });
            });

        // Central panel - the selected page
        egui::CentralPanel::default().show(ctx, |ui| {
            if self.is_loading {
                ui.vertical_centered(|ui| {
                    ui.add_space(ui.available_height() * 0.4);
                    ui.spinner();
                    ui.label(RichText::new("Loading workbook...").size(14.0));
                });
            } else if let Some(detail) = &self.load_error {
                Self::show_load_error(ui, detail);
            } else if let Some(df) = self.loader.get_dataframe() {
                ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| match self.sidebar.page {
                        Page::Overview => overview::show(ui, df, &self.summaries),
                        Page::ConsumptionTrends => trends::show(ui, df),
                        Page::EnergySources => sources::show(ui, df),
                    });
            } else {
                ui.centered_and_justified(|ui| {
                    ui.label(RichText::new("No Data").size(20.0));
                });
            }
        });
    }
}
