use eframe::egui::{self, Color32, RichText, ScrollArea, Slider, Ui};

use crate::data::model::SiteSelection;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – input widgets
// ---------------------------------------------------------------------------

/// Render the left input panel: site dropdown, payload range and legend.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Launch Site");
    ui.separator();

    // Clone what we need so we can mutate state after the combo box closes.
    let mut options = vec![SiteSelection::All];
    options.extend(
        state
            .dataset
            .sites
            .iter()
            .map(|site| SiteSelection::from_value(site)),
    );

    let mut picked: Option<SiteSelection> = None;
    egui::ComboBox::from_id_salt("site_dropdown")
        .selected_text(state.site.label())
        .width(ui.available_width())
        .show_ui(ui, |ui: &mut Ui| {
            for option in &options {
                if ui
                    .selectable_label(state.site == *option, option.label())
                    .clicked()
                {
                    picked = Some(option.clone());
                }
            }
        });
    if let Some(site) = picked {
        state.set_site(site);
    }

    ui.add_space(12.0);
    ui.strong("Payload range (Kg):");

    let (min, max) = state.payload_limits();
    let mut range = state.payload_range;
    let mut changed = false;
    changed |= ui
        .add(Slider::new(&mut range.low, min..=max).text("from").suffix(" kg"))
        .changed();
    changed |= ui
        .add(Slider::new(&mut range.high, min..=max).text("to").suffix(" kg"))
        .changed();
    if changed {
        state.set_payload_range(range);
    }
    if let Some(reason) = state.empty_scatter_reason() {
        ui.label(RichText::new(reason).color(Color32::YELLOW));
    }
    if ui.small_button("Reset range").clicked() {
        state.reset_payload_range();
    }

    ui.separator();
    ui.strong("Booster Version Category");

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            for (label, color) in state.booster_colors.legend_entries() {
                ui.label(RichText::new(format!("● {label}")).color(color));
            }
        });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
            if ui.button("Export chart data…").clicked() {
                export_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        ui.label(state.summary());

        ui.separator();

        if ui
            .selectable_label(state.show_table, "Records table")
            .clicked()
        {
            state.show_table = !state.show_table;
        }

        if let Some(msg) = &state.status_message {
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialogs
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open launch records")
        .add_filter("Supported files", &["csv", "json", "parquet", "pq"])
        .add_filter("CSV", &["csv"])
        .add_filter("JSON", &["json"])
        .add_filter("Parquet", &["parquet", "pq"])
        .pick_file();

    if let Some(path) = file {
        match crate::data::loader::load_file(&path) {
            Ok(dataset) => {
                log::info!(
                    "Loaded {} launches from sites {:?}",
                    dataset.len(),
                    dataset.sites
                );
                state.set_dataset(dataset);
            }
            Err(e) => {
                log::error!("Failed to load file: {e:#}");
                state.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }
}

pub fn export_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Export chart data")
        .add_filter("JSON", &["json"])
        .set_file_name("launch_charts.json")
        .save_file();

    if let Some(path) = file {
        match crate::export::write_json(&path, state) {
            Ok(()) => state.status_message = None,
            Err(e) => {
                log::error!("Failed to export chart data: {e:#}");
                state.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }
}
