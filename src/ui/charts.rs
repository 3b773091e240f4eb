use std::f64::consts::{FRAC_PI_2, TAU};

use eframe::egui::{Color32, RichText, Stroke, Ui};
use egui_plot::{Legend, MarkerShape, Plot, PlotPoint, PlotPoints, Points, Polygon, Text};

use crate::color::ColorMap;
use crate::data::aggregate::PieChart;
use crate::state::AppState;

/// Arc resolution of a full pie turn.
const SEGMENTS_PER_TURN: f64 = 128.0;

/// Wedges thinner than this get no percentage label.
const MIN_LABELLED_FRACTION: f64 = 0.03;

// ---------------------------------------------------------------------------
// Central panel: pie on top, scatter below
// ---------------------------------------------------------------------------

pub fn charts_view(ui: &mut Ui, state: &AppState) {
    let chart_height = ((ui.available_height() - 80.0) / 2.0).max(120.0);

    ui.heading(&state.pie.title);
    outcome_pie(ui, &state.pie, chart_height);

    ui.separator();

    ui.heading(&state.scatter.title);
    payload_scatter(ui, state, chart_height);
}

// ---------------------------------------------------------------------------
// Pie geometry
// ---------------------------------------------------------------------------

/// Turn counts into `(start, end)` fractions of a full turn.
/// A zero total yields no wedges.
pub fn wedge_fractions(values: &[usize]) -> Vec<(f64, f64)> {
    let total: usize = values.iter().sum();
    if total == 0 {
        return Vec::new();
    }
    let mut start = 0.0;
    values
        .iter()
        .map(|&v| {
            let end = start + v as f64 / total as f64;
            let wedge = (start, end);
            start = end;
            wedge
        })
        .collect()
}

/// Point on the unit circle for a turn fraction, starting at 12 o'clock
/// and running clockwise.
fn polar(fraction: f64, radius: f64) -> [f64; 2] {
    let angle = FRAC_PI_2 - fraction * TAU;
    [radius * angle.cos(), radius * angle.sin()]
}

/// Closed outline of one wedge: the centre followed by its arc.
pub fn wedge_outline(start: f64, end: f64) -> Vec<[f64; 2]> {
    let steps = ((end - start) * SEGMENTS_PER_TURN).ceil().max(1.0) as usize;
    let mut outline = Vec::with_capacity(steps + 2);
    outline.push([0.0, 0.0]);
    for i in 0..=steps {
        let f = start + (end - start) * i as f64 / steps as f64;
        outline.push(polar(f, 1.0));
    }
    outline
}

// ---------------------------------------------------------------------------
// Pie chart
// ---------------------------------------------------------------------------

fn outcome_pie(ui: &mut Ui, pie: &PieChart, height: f32) {
    if pie.total() == 0 {
        ui.label(RichText::new("No launches for this selection.").italics());
    }

    let labels: Vec<&str> = pie.slices.iter().map(|s| s.label.as_str()).collect();
    let colors = ColorMap::new(&labels);
    let values: Vec<usize> = pie.slices.iter().map(|s| s.value).collect();
    let fractions = wedge_fractions(&values);

    Plot::new("outcome_pie")
        .height(height)
        .legend(Legend::default())
        .data_aspect(1.0)
        .show_axes(false)
        .show_grid(false)
        .show_x(false)
        .show_y(false)
        .allow_boxed_zoom(false)
        .allow_drag(false)
        .allow_scroll(false)
        .allow_zoom(false)
        .include_x(-1.1)
        .include_x(1.1)
        .include_y(-1.1)
        .include_y(1.1)
        .show(ui, |plot_ui| {
            for (slice, &(start, end)) in pie.slices.iter().zip(&fractions) {
                if end <= start {
                    continue;
                }
                let color = colors.color_for(&slice.label);
                let points: PlotPoints = wedge_outline(start, end).into_iter().collect();
                plot_ui.polygon(
                    Polygon::new(points)
                        .name(format!("{} ({})", slice.label, slice.value))
                        .fill_color(color)
                        .stroke(Stroke::new(1.0, Color32::WHITE)),
                );

                let fraction = end - start;
                if fraction >= MIN_LABELLED_FRACTION {
                    let [x, y] = polar((start + end) / 2.0, 0.65);
                    plot_ui.text(Text::new(
                        PlotPoint::new(x, y),
                        RichText::new(format!("{:.1}%", fraction * 100.0))
                            .strong()
                            .color(Color32::WHITE),
                    ));
                }
            }
        });
}

// ---------------------------------------------------------------------------
// Scatter chart
// ---------------------------------------------------------------------------

fn payload_scatter(ui: &mut Ui, state: &AppState, height: f32) {
    if state.scatter.points.is_empty() {
        ui.label(RichText::new("No launches in the selected payload range.").italics());
    }

    Plot::new("payload_scatter")
        .height(height)
        .legend(Legend::default())
        .x_axis_label("Payload Mass (kg)")
        .y_axis_label("class")
        .include_y(-0.25)
        .include_y(1.25)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            for (category, xy) in state.scatter.series() {
                let points: PlotPoints = xy.into_iter().collect();
                plot_ui.points(
                    Points::new(points)
                        .name(category)
                        .color(state.booster_colors.color_for(category))
                        .shape(MarkerShape::Circle)
                        .filled(true)
                        .radius(4.0),
                );
            }
        });
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_wedge_fractions_cover_full_turn() {
        let wedges = wedge_fractions(&[1, 1, 2]);
        assert_eq!(wedges.len(), 3);
        assert!((wedges[0].0 - 0.0).abs() < EPS);
        assert!((wedges[0].1 - 0.25).abs() < EPS);
        assert!((wedges[1].1 - 0.5).abs() < EPS);
        assert!((wedges[2].1 - 1.0).abs() < EPS);
    }

    #[test]
    fn test_wedge_fractions_zero_total() {
        assert!(wedge_fractions(&[]).is_empty());
        assert!(wedge_fractions(&[0, 0]).is_empty());
    }

    #[test]
    fn test_zero_slice_has_zero_width() {
        let wedges = wedge_fractions(&[0, 3]);
        assert_eq!(wedges[0], (0.0, 0.0));
        assert!((wedges[1].1 - 1.0).abs() < EPS);
    }

    #[test]
    fn test_wedge_outline_starts_at_centre_and_top() {
        let outline = wedge_outline(0.0, 0.25);
        assert_eq!(outline[0], [0.0, 0.0]);

        let first = outline[1];
        assert!(first[0].abs() < EPS && (first[1] - 1.0).abs() < EPS);

        // Clockwise: a quarter turn ends at 3 o'clock.
        let last = outline[outline.len() - 1];
        assert!((last[0] - 1.0).abs() < EPS && last[1].abs() < EPS);

        assert!(outline[1..]
            .iter()
            .all(|p| ((p[0] * p[0] + p[1] * p[1]).sqrt() - 1.0).abs() < EPS));
    }
}
