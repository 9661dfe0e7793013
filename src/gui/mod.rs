//! GUI module - User interface components

mod app;
mod overview;
mod sidebar;
mod sources;
mod trends;

pub use app::BevDashApp;
pub use sidebar::{Page, Sidebar, SidebarAction};

use crate::charts::SeriesError;
use egui::{Color32, RichText};

/// Framed card holding one chart and its title.
pub(crate) fn chart_card(
    ui: &mut egui::Ui,
    title: &str,
    add_contents: impl FnOnce(&mut egui::Ui),
) {
    egui::Frame::none()
        .rounding(8.0)
        .fill(ui.visuals().widgets.noninteractive.bg_fill)
        .inner_margin(12.0)
        .show(ui, |ui| {
            ui.label(RichText::new(title).size(14.0).strong());
            ui.add_space(6.0);
            add_contents(ui);
        });
}

/// Per-chart error label; the rest of the page keeps rendering.
pub(crate) fn chart_error(ui: &mut egui::Ui, error: &SeriesError) {
    ui.colored_label(Color32::from_rgb(220, 53, 69), error.to_string());
}

pub(crate) fn no_data_label(ui: &mut egui::Ui) {
    ui.label(RichText::new("No data").size(14.0).color(Color32::GRAY));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selector_offers_exactly_three_pages() {
        assert_eq!(Page::ALL.len(), 3);
        let labels: Vec<&str> = Page::ALL.iter().map(|p| p.label()).collect();
        assert_eq!(
            labels,
            vec!["Overview", "Consumption Trends", "Energy Sources"]
        );
    }

    #[test]
    fn overview_is_the_default_page() {
        assert_eq!(Page::default(), Page::Overview);
        assert_eq!(Sidebar::new().page, Page::Overview);
    }

    #[test]
    fn chart_titles_do_not_leak_across_pages() {
        let mut titles: Vec<&str> = Vec::new();
        titles.extend(overview::SECTION_TITLES);
        titles.extend(trends::CHART_TITLES);
        titles.extend(sources::CHART_TITLES);

        let mut deduped = titles.clone();
        deduped.sort();
        deduped.dedup();
        assert_eq!(deduped.len(), titles.len());
    }
}
