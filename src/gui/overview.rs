//! Overview Page
//! Dataset preview and summary statistics.

use crate::data::PREVIEW_ROWS;
use crate::stats::{ColumnSummary, SUMMARY_ROWS};
use egui::{Color32, RichText, ScrollArea};
use polars::prelude::*;

pub const SECTION_TITLES: [&str; 2] = ["Dataset Preview", "Summary Statistics"];

pub fn show(ui: &mut egui::Ui, df: &DataFrame, summaries: &[ColumnSummary]) {
    ui.heading(RichText::new("Overview of Dataset").size(24.0).strong());
    ui.label(
        RichText::new("General overview and summary statistics")
            .size(13.0)
            .color(Color32::GRAY),
    );
    ui.add_space(4.0);
    ui.label("This section provides a high-level overview of the dataset and its key variables.");
    ui.add_space(12.0);

    ui.label(RichText::new(SECTION_TITLES[0]).size(16.0).strong());
    ui.add_space(5.0);
    draw_preview_table(ui, df);

    ui.add_space(15.0);

    ui.label(RichText::new(SECTION_TITLES[1]).size(16.0).strong());
    ui.add_space(5.0);
    draw_summary_table(ui, summaries);
}

fn format_cell(value: &AnyValue) -> String {
    if value.is_null() {
        String::new()
    } else {
        value.to_string().trim_matches('"').to_string()
    }
}

fn draw_preview_table(ui: &mut egui::Ui, df: &DataFrame) {
    let preview = df.head(Some(PREVIEW_ROWS));

    egui::Frame::none()
        .fill(ui.visuals().widgets.noninteractive.bg_fill)
        .rounding(5.0)
        .inner_margin(8.0)
        .show(ui, |ui| {
            ScrollArea::horizontal()
                .id_salt("preview_scroll")
                .show(ui, |ui| {
                    egui::Grid::new("preview_table")
                        .striped(true)
                        .min_col_width(70.0)
                        .spacing([12.0, 4.0])
                        .show(ui, |ui| {
                            for name in preview.get_column_names() {
                                ui.label(RichText::new(name.to_string()).strong().size(11.0));
                            }
                            ui.end_row();

                            for row in 0..preview.height() {
                                for column in preview.get_columns() {
                                    let text = column
                                        .get(row)
                                        .map(|v| format_cell(&v))
                                        .unwrap_or_default();
                                    ui.label(RichText::new(text).size(11.0));
                                }
                                ui.end_row();
                            }
                        });
                });

            ui.add_space(4.0);
            ui.label(
                RichText::new(format!("{} rows × {} columns", df.height(), df.width()))
                    .size(10.0)
                    .color(Color32::GRAY),
            );
        });
}

fn draw_summary_table(ui: &mut egui::Ui, summaries: &[ColumnSummary]) {
    if summaries.is_empty() {
        ui.label(RichText::new("No numeric columns to summarize").size(12.0));
        return;
    }

    egui::Frame::none()
        .fill(ui.visuals().widgets.noninteractive.bg_fill)
        .rounding(5.0)
        .inner_margin(8.0)
        .show(ui, |ui| {
            ScrollArea::horizontal()
                .id_salt("summary_scroll")
                .show(ui, |ui| {
                    egui::Grid::new("summary_table")
                        .striped(true)
                        .min_col_width(70.0)
                        .spacing([12.0, 4.0])
                        .show(ui, |ui| {
                            ui.label(RichText::new("").size(11.0));
                            for summary in summaries {
                                ui.label(RichText::new(&summary.column).strong().size(11.0));
                            }
                            ui.end_row();

                            for row in SUMMARY_ROWS {
                                ui.label(RichText::new(row).strong().size(11.0));
                                for summary in summaries {
                                    let value = summary.value_for(row);
                                    let text = if value.is_nan() {
                                        "-".to_string()
                                    } else if row == "count" {
                                        format!("{}", summary.count)
                                    } else {
                                        format!("{:.3}", value)
                                    };
                                    ui.label(RichText::new(text).size(11.0));
                                }
                                ui.end_row();
                            }
                        });
                });
        });
}
