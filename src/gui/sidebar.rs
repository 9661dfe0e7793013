//! Sidebar Widget
//! Left panel with the page selector, workbook controls, and status line.

use egui::{Color32, RichText};
use std::path::PathBuf;

/// Dashboard pages offered by the selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Overview,
    ConsumptionTrends,
    EnergySources,
}

impl Page {
    /// Selector order.
    pub const ALL: [Page; 3] = [Page::Overview, Page::ConsumptionTrends, Page::EnergySources];

    pub fn label(self) -> &'static str {
        match self {
            Page::Overview => "Overview",
            Page::ConsumptionTrends => "Consumption Trends",
            Page::EnergySources => "Energy Sources",
        }
    }
}

/// Left side panel with page navigation and workbook controls.
pub struct Sidebar {
    pub page: Page,
    pub workbook_path: Option<PathBuf>,
    pub status: String,
    pub export_enabled: bool,
}

impl Default for Sidebar {
    fn default() -> Self {
        Self {
            page: Page::Overview,
            workbook_path: None,
            status: "Ready".to_string(),
            export_enabled: false,
        }
    }
}

impl Sidebar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_status(&mut self, status: &str) {
        self.status = status.to_string();
    }

    /// Draw the sidebar
    pub fn show(&mut self, ui: &mut egui::Ui) -> SidebarAction {
        let mut action = SidebarAction::None;

        // Title
        ui.vertical_centered(|ui| {
            ui.add_space(5.0);
            ui.label(
                RichText::new("📊 BevDash")
                    .size(22.0)
                    .color(Color32::from_rgb(74, 63, 219)),
            );
            ui.label(
                RichText::new("Beverage Consumption Dashboard")
                    .size(11.0)
                    .color(Color32::GRAY),
            );
        });
        ui.add_space(10.0);
        ui.separator();
        ui.add_space(5.0);

        // ===== Page Selection =====
        ui.label(RichText::new("Select Page").size(14.0).strong());
        ui.add_space(5.0);
        for page in Page::ALL {
            if ui.radio_value(&mut self.page, page, page.label()).changed() {
                action = SidebarAction::PageChanged;
            }
        }

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(10.0);

        // ===== Data Source =====
        ui.label(RichText::new("📁 Data Source").size(14.0).strong());
        ui.add_space(5.0);

        egui::Frame::none()
            .fill(ui.visuals().widgets.noninteractive.bg_fill)
            .rounding(5.0)
            .inner_margin(8.0)
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    let path_text = self
                        .workbook_path
                        .as_ref()
                        .and_then(|p| p.file_name())
                        .map(|n| n.to_string_lossy().to_string())
                        .unwrap_or_else(|| "No workbook".to_string());

                    ui.label(RichText::new(&path_text).size(12.0).color(
                        if self.workbook_path.is_some() {
                            Color32::WHITE
                        } else {
                            Color32::GRAY
                        },
                    ));

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.button("📂 Browse").clicked() {
                            action = SidebarAction::OpenWorkbook;
                        }
                    });
                });
            });

        ui.add_space(5.0);
        if ui.small_button("⟳ Reload").clicked() {
            action = SidebarAction::Reload;
        }

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(10.0);

        // ===== Export =====
        ui.vertical_centered(|ui| {
            ui.add_enabled_ui(self.export_enabled, |ui| {
                let button = egui::Button::new(RichText::new("📄 Export Charts").size(14.0))
                    .min_size(egui::vec2(170.0, 30.0));
                if ui.add(button).clicked() {
                    action = SidebarAction::ExportCharts;
                }
            });
        });

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(10.0);

        // ===== Status =====
        let status_color = if self.status.contains("Error") {
            Color32::from_rgb(220, 53, 69)
        } else if self.status.contains("Loaded") || self.status.contains("Exported") {
            Color32::from_rgb(40, 167, 69)
        } else {
            Color32::GRAY
        };
        ui.label(RichText::new(&self.status).size(11.0).color(status_color));

        action
    }
}

/// Actions triggered by the sidebar
#[derive(Debug, Clone, PartialEq)]
pub enum SidebarAction {
    None,
    PageChanged,
    OpenWorkbook,
    Reload,
    ExportCharts,
}
