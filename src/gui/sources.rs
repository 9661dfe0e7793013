//! Energy Sources Page
//! Per-consumer comparison and total energy charts.

use crate::charts::{ChartPlotter, SeriesBuilder, ACCENT};
use crate::data::{COL_DESCRIPTION, COL_PER_CAPITA_1992, PER_CONSUMER_COLS};
use crate::gui::{chart_card, chart_error};
use egui::{Color32, RichText};
use polars::prelude::*;

pub const CHART_TITLES: [&str; 2] = [
    "Per Consumer Consumption in Different Years",
    "Total Energy from Sources",
];

pub fn show(ui: &mut egui::Ui, df: &DataFrame) {
    ui.heading(RichText::new("Energy Sources").size(24.0).strong());
    ui.label(
        RichText::new("Analysis of energy contribution by source")
            .size(13.0)
            .color(Color32::GRAY),
    );
    ui.add_space(12.0);

    ui.columns(2, |columns| {
        chart_card(&mut columns[0], CHART_TITLES[0], |ui| {
            match SeriesBuilder::multi_series(df, COL_DESCRIPTION, &PER_CONSUMER_COLS) {
                Ok(multi) => ChartPlotter::draw_grouped_bar_chart(
                    ui,
                    "sources_grouped_bar",
                    &multi,
                    "Beverage Type",
                    "Per Consumer Consumption",
                ),
                Err(e) => chart_error(ui, &e),
            }
        });

        chart_card(&mut columns[1], CHART_TITLES[1], |ui| {
            match SeriesBuilder::category_series(df, COL_DESCRIPTION, COL_PER_CAPITA_1992) {
                Ok(series) => ChartPlotter::draw_bar_chart(
                    ui,
                    "sources_total_energy",
                    &series,
                    ACCENT,
                    "Description",
                    "Total Energy (kJ/day)",
                ),
                // missing "Per capita 1992" skips this chart only
                Err(e) => chart_error(ui, &e),
            }
        });
    });
}
