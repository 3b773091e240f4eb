use eframe::egui::{RichText, Ui};
use egui_extras::{Column, TableBuilder};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Records table (bottom panel)
// ---------------------------------------------------------------------------

/// Rows currently feeding the scatter chart.
pub fn records_table(ui: &mut Ui, state: &AppState) {
    let points = &state.scatter.points;
    let row_height = ui.text_style_height(&eframe::egui::TextStyle::Body) + 4.0;

    TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .column(Column::auto().at_least(60.0))
        .column(Column::auto().at_least(140.0))
        .column(Column::auto().at_least(60.0))
        .column(Column::remainder())
        .header(20.0, |mut header| {
            header.col(|ui| {
                ui.strong("#");
            });
            header.col(|ui| {
                ui.strong("Payload Mass (kg)");
            });
            header.col(|ui| {
                ui.strong("class");
            });
            header.col(|ui| {
                ui.strong("Booster Version Category");
            });
        })
        .body(|body| {
            body.rows(row_height, points.len(), |mut row| {
                let idx = row.index();
                let p = &points[idx];
                row.col(|ui| {
                    ui.label((idx + 1).to_string());
                });
                row.col(|ui| {
                    ui.label(format!("{:.1}", p.payload_mass_kg));
                });
                row.col(|ui| {
                    ui.label(p.class.to_string());
                });
                row.col(|ui| {
                    let color = state.booster_colors.color_for(&p.booster_version_category);
                    ui.label(RichText::new(&p.booster_version_category).color(color));
                });
            });
        });
}
