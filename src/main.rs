//! BevDash - Beverage Consumption Data Dashboard
//!
//! Loads the "Table A1" worksheet of the beverage consumption workbook and
//! renders bar, pie, and line charts across three pages.

mod charts;
mod data;
mod gui;
mod stats;

use eframe::egui;
use gui::BevDashApp;
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> eframe::Result<()> {
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder().with_env_filter(env).init();
    tracing::info!("startup");

    // Configure native options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1400.0, 800.0])
            .with_min_inner_size([1100.0, 650.0])
            .with_title("BevDash"),
        ..Default::default()
    };

    // Run the application
    eframe::run_native(
        "BevDash",
        options,
        Box::new(|cc| Ok(Box::new(BevDashApp::new(cc)))),
    )
}
