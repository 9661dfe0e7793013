//! Chart Plotter Module
//! Interactive bar, pie, and line charts using egui_plot.

use crate::charts::{CategorySeries, MultiSeries, PieSlice};
use egui::{Color32, RichText, Stroke};
use egui_plot::{Bar, BarChart, Legend, Line, Plot, PlotPoint, PlotPoints, Polygon, Text};

/// Accent color for single-series charts (#1f77b4).
pub const ACCENT: Color32 = Color32::from_rgb(31, 119, 180);

/// Slice/series palette, matching the source styling.
pub const PALETTE: [Color32; 8] = [
    Color32::from_rgb(31, 119, 180),  // #1f77b4
    Color32::from_rgb(174, 199, 232), // #aec7e8
    Color32::from_rgb(255, 127, 14),  // #ff7f0e
    Color32::from_rgb(255, 187, 120), // #ffbb78
    Color32::from_rgb(44, 160, 44),   // #2ca02c
    Color32::from_rgb(152, 223, 138), // #98df8a
    Color32::from_rgb(214, 39, 40),   // #d62728
    Color32::from_rgb(255, 152, 150), // #ff9896
];

/// Pie slices fan out counter-clockwise from here.
pub const PIE_START_ANGLE_DEG: f64 = 140.0;

const CHART_HEIGHT: f32 = 300.0;

/// Creates interactive visualizations using egui_plot.
pub struct ChartPlotter;

impl ChartPlotter {
    /// Color for the n-th series of a multi-series chart.
    ///
    /// Steps over the light shades so adjacent series stay distinguishable.
    pub fn series_color(index: usize) -> Color32 {
        PALETTE[(index * 2) % PALETTE.len()]
    }

    /// Arc polygon for one pie slice, starting at the origin.
    pub fn slice_points(start_deg: f64, sweep_deg: f64, radius: f64) -> Vec<[f64; 2]> {
        let steps = ((sweep_deg.abs() / 4.0).ceil() as usize).max(1);
        let mut points = Vec::with_capacity(steps + 2);
        points.push([0.0, 0.0]);
        for s in 0..=steps {
            let angle = (start_deg + sweep_deg * s as f64 / steps as f64).to_radians();
            points.push([radius * angle.cos(), radius * angle.sin()]);
        }
        points
    }

    /// Draw a vertical bar chart with category labels on the x-axis.
    pub fn draw_bar_chart(
        ui: &mut egui::Ui,
        id: &str,
        series: &CategorySeries,
        color: Color32,
        x_label: &str,
        y_label: &str,
    ) {
        let x_labels = series.labels.clone();
        let bars: Vec<Bar> = series
            .values
            .iter()
            .enumerate()
            .map(|(i, &value)| Bar::new(i as f64, value).width(0.6).fill(color))
            .collect();

        Plot::new(id)
            .height(CHART_HEIGHT)
            .allow_scroll(false)
            .x_axis_label(x_label)
            .y_axis_label(y_label)
            .x_axis_formatter(move |mark, _range| {
                let idx = mark.value.round();
                if idx >= 0.0 && (mark.value - idx).abs() < 0.3 {
                    x_labels.get(idx as usize).cloned().unwrap_or_default()
                } else {
                    String::new()
                }
            })
            .show(ui, |plot_ui| {
                plot_ui.bar_chart(BarChart::new(bars));
            });
    }

    /// Draw one bar cluster per label, one color per series.
    pub fn draw_grouped_bar_chart(
        ui: &mut egui::Ui,
        id: &str,
        multi: &MultiSeries,
        x_label: &str,
        y_label: &str,
    ) {
        let n_series = multi.series.len().max(1);
        let bar_width = 0.75 / n_series as f64;
        let x_labels = multi.labels.clone();

        Plot::new(id)
            .height(CHART_HEIGHT)
            .allow_scroll(false)
            .legend(Legend::default())
            .x_axis_label(x_label)
            .y_axis_label(y_label)
            .x_axis_formatter(move |mark, _range| {
                let idx = mark.value.round();
                if idx >= 0.0 && (mark.value - idx).abs() < 0.3 {
                    x_labels.get(idx as usize).cloned().unwrap_or_default()
                } else {
                    String::new()
                }
            })
            .show(ui, |plot_ui| {
                for (series_idx, (name, values)) in multi.series.iter().enumerate() {
                    let color = Self::series_color(series_idx);
                    let offset = (series_idx as f64 - (n_series as f64 - 1.0) / 2.0) * bar_width;
                    let bars: Vec<Bar> = values
                        .iter()
                        .enumerate()
                        .filter_map(|(i, value)| value.map(|v| (i, v)))
                        .map(|(i, value)| {
                            Bar::new(i as f64 + offset, value)
                                .width(bar_width * 0.9)
                                .fill(color)
                        })
                        .collect();
                    plot_ui.bar_chart(BarChart::new(bars).color(color).name(name));
                }
            });
    }

    /// Draw a pie chart as filled polygons with percentage and label text.
    pub fn draw_pie_chart(ui: &mut egui::Ui, id: &str, slices: &[PieSlice]) {
        Plot::new(id)
            .height(CHART_HEIGHT)
            .data_aspect(1.0)
            .show_axes([false, false])
            .show_grid([false, false])
            .show_x(false)
            .show_y(false)
            .allow_zoom(false)
            .allow_drag(false)
            .allow_scroll(false)
            .include_x(-1.6)
            .include_x(1.6)
            .include_y(-1.4)
            .include_y(1.4)
            .show(ui, |plot_ui| {
                let mut angle = PIE_START_ANGLE_DEG;
                for (i, slice) in slices.iter().enumerate() {
                    let sweep = slice.fraction * 360.0;
                    let color = PALETTE[i % PALETTE.len()];

                    let points = Self::slice_points(angle, sweep, 1.0);
                    plot_ui.polygon(
                        Polygon::new(PlotPoints::from(points))
                            .fill_color(color)
                            .stroke(Stroke::new(1.0, Color32::WHITE)),
                    );

                    let mid = (angle + sweep / 2.0).to_radians();
                    plot_ui.text(Text::new(
                        PlotPoint::new(0.65 * mid.cos(), 0.65 * mid.sin()),
                        RichText::new(format!("{:.1}%", slice.fraction * 100.0))
                            .size(12.0)
                            .color(Color32::WHITE),
                    ));
                    plot_ui.text(Text::new(
                        PlotPoint::new(1.2 * mid.cos(), 1.2 * mid.sin()),
                        RichText::new(&slice.label).size(12.0),
                    ));

                    angle += sweep;
                }
            });
    }

    /// Draw one line per series over a shared category axis.
    pub fn draw_line_chart(
        ui: &mut egui::Ui,
        id: &str,
        multi: &MultiSeries,
        x_label: &str,
        y_label: &str,
    ) {
        let x_labels = multi.labels.clone();

        Plot::new(id)
            .height(CHART_HEIGHT)
            .allow_scroll(false)
            .legend(Legend::default())
            .x_axis_label(x_label)
            .y_axis_label(y_label)
            .x_axis_formatter(move |mark, _range| {
                let idx = mark.value.round();
                if idx >= 0.0 && (mark.value - idx).abs() < 0.3 {
                    x_labels.get(idx as usize).cloned().unwrap_or_default()
                } else {
                    String::new()
                }
            })
            .show(ui, |plot_ui| {
                for (series_idx, (name, values)) in multi.series.iter().enumerate() {
                    let points: PlotPoints = values
                        .iter()
                        .enumerate()
                        .filter_map(|(i, value)| value.map(|v| [i as f64, v]))
                        .collect();
                    plot_ui.line(
                        Line::new(points)
                            .color(Self::series_color(series_idx))
                            .width(1.5)
                            .name(name),
                    );
                }
            });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slice_points_start_at_origin() {
        let points = ChartPlotter::slice_points(140.0, 90.0, 1.0);
        assert_eq!(points[0], [0.0, 0.0]);
        // every arc point sits on the unit circle
        for p in &points[1..] {
            let r = (p[0] * p[0] + p[1] * p[1]).sqrt();
            assert!((r - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn slice_arc_spans_the_requested_angles() {
        let points = ChartPlotter::slice_points(140.0, 90.0, 1.0);

        let first = points[1];
        let last = points[points.len() - 1];
        let start = 140.0f64.to_radians();
        let end = 230.0f64.to_radians();

        assert!((first[0] - start.cos()).abs() < 1e-9);
        assert!((first[1] - start.sin()).abs() < 1e-9);
        assert!((last[0] - end.cos()).abs() < 1e-9);
        assert!((last[1] - end.sin()).abs() < 1e-9);
    }

    #[test]
    fn tiny_slice_still_produces_a_polygon() {
        let points = ChartPlotter::slice_points(0.0, 0.5, 1.0);
        assert!(points.len() >= 3);
    }

    #[test]
    fn series_colors_are_distinct_for_small_counts() {
        let a = ChartPlotter::series_color(0);
        let b = ChartPlotter::series_color(1);
        let c = ChartPlotter::series_color(2);
        assert_ne!(a, b);
        assert_ne!(b, c);
        assert_ne!(a, c);
    }
}
