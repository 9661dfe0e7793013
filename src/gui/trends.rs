//! Consumption Trends Page
//! Bar, pie, and line charts of per-capita consumption.

use crate::charts::{ChartPlotter, SeriesBuilder, ACCENT};
use crate::data::{COL_DESCRIPTION, COL_PCT_CONSUME, COL_PER_CAPITA_1992, PER_CAPITA_COLS};
use crate::gui::{chart_card, chart_error, no_data_label};
use egui::{Color32, RichText};
use polars::prelude::*;

pub const CHART_TITLES: [&str; 3] = [
    "Energy Contribution by Beverage Type (1992)",
    "Percentage Consumption by Beverage Type (1992)",
    "Consumption Trends Over Years",
];

pub fn show(ui: &mut egui::Ui, df: &DataFrame) {
    ui.heading(RichText::new("Consumption Trends").size(24.0).strong());
    ui.label(
        RichText::new("Analyzing trends over different years")
            .size(13.0)
            .color(Color32::GRAY),
    );
    ui.add_space(12.0);

    ui.columns(2, |columns| {
        chart_card(&mut columns[0], CHART_TITLES[0], |ui| {
            match SeriesBuilder::category_series(df, COL_DESCRIPTION, COL_PER_CAPITA_1992) {
                Ok(series) => ChartPlotter::draw_bar_chart(
                    ui,
                    "trends_bar_1992",
                    &series,
                    ACCENT,
                    "Beverage Type",
                    "Energy (kJ/day)",
                ),
                Err(e) => chart_error(ui, &e),
            }
        });

        chart_card(&mut columns[1], CHART_TITLES[1], |ui| {
            match SeriesBuilder::pie_slices(df, COL_DESCRIPTION, COL_PCT_CONSUME) {
                Ok(slices) if slices.is_empty() => no_data_label(ui),
                Ok(slices) => ChartPlotter::draw_pie_chart(ui, "trends_pie_consume", &slices),
                Err(e) => chart_error(ui, &e),
            }
        });
    });

    ui.add_space(12.0);

    chart_card(ui, CHART_TITLES[2], |ui| {
        match SeriesBuilder::multi_series(df, COL_DESCRIPTION, &PER_CAPITA_COLS) {
            Ok(multi) => ChartPlotter::draw_line_chart(
                ui,
                "trends_line_years",
                &multi,
                "Beverage Type",
                "Per Capita Consumption",
            ),
            Err(e) => chart_error(ui, &e),
        }
    });
}
