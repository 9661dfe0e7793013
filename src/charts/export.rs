//! Chart Export Module
//! Renders charts to PNG files with plotters, mirroring the interactive styling.

use crate::charts::{CategorySeries, MultiSeries, PieSlice, PIE_START_ANGLE_DEG};
use plotters::prelude::*;
use std::path::Path;
use thiserror::Error;

const EXPORT_WIDTH: u32 = 1200;
const EXPORT_HEIGHT: u32 = 800;

/// Accent and palette colors matching the interactive charts.
const ACCENT: RGBColor = RGBColor(31, 119, 180);

const PALETTE: [RGBColor; 8] = [
    RGBColor(31, 119, 180),
    RGBColor(174, 199, 232),
    RGBColor(255, 127, 14),
    RGBColor(255, 187, 120),
    RGBColor(44, 160, 44),
    RGBColor(152, 223, 138),
    RGBColor(214, 39, 40),
    RGBColor(255, 152, 150),
];

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Failed to render chart: {0}")]
    Render(String),
}

fn render_err<E: std::fmt::Display>(e: E) -> ExportError {
    ExportError::Render(e.to_string())
}

/// File name for an exported chart, derived from its title.
pub fn export_file_name(title: &str) -> String {
    let slug: String = title
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                '_'
            }
        })
        .collect();
    format!("{}.png", slug.trim_matches('_'))
}

/// Renders static chart images for export.
pub struct ChartExporter;

impl ChartExporter {
    fn series_color(index: usize) -> RGBColor {
        PALETTE[(index * 2) % PALETTE.len()]
    }

    /// Render a single-series bar chart to a PNG file.
    pub fn export_bar_png(
        series: &CategorySeries,
        title: &str,
        x_label: &str,
        y_label: &str,
        path: &Path,
    ) -> Result<(), ExportError> {
        let root = BitMapBackend::new(path, (EXPORT_WIDTH, EXPORT_HEIGHT)).into_drawing_area();
        root.fill(&WHITE).map_err(render_err)?;

        let x_max = (series.labels.len() as f64 - 0.5).max(0.5);
        let y_min = series.values.iter().copied().fold(0.0f64, f64::min);
        let y_max = series.values.iter().copied().fold(1.0f64, f64::max) * 1.1;

        let mut chart = ChartBuilder::on(&root)
            .caption(title, ("sans-serif", 28))
            .margin(20)
            .x_label_area_size(110)
            .y_label_area_size(70)
            .build_cartesian_2d(-0.5f64..x_max, y_min..y_max)
            .map_err(render_err)?;

        let labels = &series.labels;
        chart
            .configure_mesh()
            .disable_x_mesh()
            .x_labels(labels.len().max(1))
            .x_label_formatter(&|x| {
                let idx = x.round();
                if idx >= 0.0 && (x - idx).abs() < 0.3 {
                    labels.get(idx as usize).cloned().unwrap_or_default()
                } else {
                    String::new()
                }
            })
            .x_desc(x_label)
            .y_desc(y_label)
            .draw()
            .map_err(render_err)?;

        chart
            .draw_series(series.values.iter().enumerate().map(|(i, &value)| {
                Rectangle::new([(i as f64 - 0.3, 0.0), (i as f64 + 0.3, value)], ACCENT.filled())
            }))
            .map_err(render_err)?;

        root.present().map_err(render_err)?;
        Ok(())
    }

    /// Render one bar cluster per label to a PNG file.
    pub fn export_grouped_bar_png(
        multi: &MultiSeries,
        title: &str,
        x_label: &str,
        y_label: &str,
        path: &Path,
    ) -> Result<(), ExportError> {
        let root = BitMapBackend::new(path, (EXPORT_WIDTH, EXPORT_HEIGHT)).into_drawing_area();
        root.fill(&WHITE).map_err(render_err)?;

        let x_max = (multi.labels.len() as f64 - 0.5).max(0.5);
        let y_max = multi
            .series
            .iter()
            .flat_map(|(_, values)| values.iter().flatten())
            .fold(1.0f64, |acc, &v| acc.max(v))
            * 1.1;

        let mut chart = ChartBuilder::on(&root)
            .caption(title, ("sans-serif", 28))
            .margin(20)
            .x_label_area_size(110)
            .y_label_area_size(70)
            .build_cartesian_2d(-0.5f64..x_max, 0.0f64..y_max)
            .map_err(render_err)?;

        let labels = &multi.labels;
        chart
            .configure_mesh()
            .disable_x_mesh()
            .x_labels(labels.len().max(1))
            .x_label_formatter(&|x| {
                let idx = x.round();
                if idx >= 0.0 && (x - idx).abs() < 0.3 {
                    labels.get(idx as usize).cloned().unwrap_or_default()
                } else {
                    String::new()
                }
            })
            .x_desc(x_label)
            .y_desc(y_label)
            .draw()
            .map_err(render_err)?;

        let n_series = multi.series.len().max(1);
        let bar_width = 0.75 / n_series as f64;
        for (series_idx, (name, values)) in multi.series.iter().enumerate() {
            let color = Self::series_color(series_idx);
            let offset = (series_idx as f64 - (n_series as f64 - 1.0) / 2.0) * bar_width;
            chart
                .draw_series(
                    values
                        .iter()
                        .enumerate()
                        .filter_map(|(i, value)| value.map(|v| (i, v)))
                        .map(|(i, value)| {
                            let x = i as f64 + offset;
                            Rectangle::new(
                                [
                                    (x - bar_width * 0.45, 0.0),
                                    (x + bar_width * 0.45, value),
                                ],
                                color.filled(),
                            )
                        }),
                )
                .map_err(render_err)?
                .label(name.clone())
                .legend(move |(x, y)| {
                    Rectangle::new([(x, y - 6), (x + 12, y + 6)], color.filled())
                });
        }

        chart
            .configure_series_labels()
            .border_style(BLACK)
            .background_style(WHITE.mix(0.8))
            .draw()
            .map_err(render_err)?;

        root.present().map_err(render_err)?;
        Ok(())
    }

    /// Render a pie chart to a PNG file.
    pub fn export_pie_png(
        slices: &[PieSlice],
        title: &str,
        path: &Path,
    ) -> Result<(), ExportError> {
        let root = BitMapBackend::new(path, (EXPORT_WIDTH, EXPORT_HEIGHT)).into_drawing_area();
        root.fill(&WHITE).map_err(render_err)?;
        let root = root
            .titled(title, ("sans-serif", 28))
            .map_err(render_err)?;

        let dims = root.dim_in_pixel();
        let center = (dims.0 as i32 / 2, dims.1 as i32 / 2);
        let radius = f64::from(dims.0.min(dims.1)) * 0.35;

        let sizes: Vec<f64> = slices.iter().map(|s| s.value).collect();
        let colors: Vec<RGBColor> = slices
            .iter()
            .enumerate()
            .map(|(i, _)| PALETTE[i % PALETTE.len()])
            .collect();
        let labels: Vec<String> = slices.iter().map(|s| s.label.clone()).collect();

        let mut pie = Pie::new(&center, &radius, &sizes, &colors, &labels);
        pie.start_angle(PIE_START_ANGLE_DEG);
        pie.label_style(("sans-serif", 20).into_font());
        pie.percentages(("sans-serif", 16).into_font().color(&WHITE));
        root.draw(&pie).map_err(render_err)?;

        root.present().map_err(render_err)?;
        Ok(())
    }

    /// Render one line per series to a PNG file.
    pub fn export_line_png(
        multi: &MultiSeries,
        title: &str,
        x_label: &str,
        y_label: &str,
        path: &Path,
    ) -> Result<(), ExportError> {
        let root = BitMapBackend::new(path, (EXPORT_WIDTH, EXPORT_HEIGHT)).into_drawing_area();
        root.fill(&WHITE).map_err(render_err)?;

        let x_max = (multi.labels.len() as f64 - 0.5).max(0.5);
        let flat: Vec<f64> = multi
            .series
            .iter()
            .flat_map(|(_, values)| values.iter().flatten().copied())
            .collect();
        let y_min = flat.iter().copied().fold(0.0f64, f64::min);
        let y_max = flat.iter().copied().fold(1.0f64, f64::max) * 1.1;

        let mut chart = ChartBuilder::on(&root)
            .caption(title, ("sans-serif", 28))
            .margin(20)
            .x_label_area_size(110)
            .y_label_area_size(70)
            .build_cartesian_2d(-0.5f64..x_max, y_min..y_max)
            .map_err(render_err)?;

        let labels = &multi.labels;
        chart
            .configure_mesh()
            .x_labels(labels.len().max(1))
            .x_label_formatter(&|x| {
                let idx = x.round();
                if idx >= 0.0 && (x - idx).abs() < 0.3 {
                    labels.get(idx as usize).cloned().unwrap_or_default()
                } else {
                    String::new()
                }
            })
            .x_desc(x_label)
            .y_desc(y_label)
            .draw()
            .map_err(render_err)?;

        for (series_idx, (name, values)) in multi.series.iter().enumerate() {
            let color = Self::series_color(series_idx);
            let points: Vec<(f64, f64)> = values
                .iter()
                .enumerate()
                .filter_map(|(i, value)| value.map(|v| (i as f64, v)))
                .collect();
            chart
                .draw_series(LineSeries::new(points, color.stroke_width(2)))
                .map_err(render_err)?
                .label(name.clone())
                .legend(move |(x, y)| {
                    PathElement::new(vec![(x, y), (x + 18, y)], color.stroke_width(2))
                });
        }

        chart
            .configure_series_labels()
            .border_style(BLACK)
            .background_style(WHITE.mix(0.8))
            .draw()
            .map_err(render_err)?;

        root.present().map_err(render_err)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_names_are_filesystem_safe() {
        assert_eq!(
            export_file_name("Energy Contribution by Beverage Type (1992)"),
            "energy_contribution_by_beverage_type__1992.png"
        );
        assert_eq!(export_file_name("Total Energy from Sources"), "total_energy_from_sources.png");
    }

    #[test]
    fn file_names_have_no_leading_or_trailing_separators() {
        let name = export_file_name("(weird) title!");
        assert!(!name.starts_with('_'));
        assert!(name.ends_with(".png"));
    }
}
