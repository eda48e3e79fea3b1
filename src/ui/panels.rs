use eframe::egui::{self, RichText, Ui};

use crate::data::aggregate::SiteSelection;
use crate::state::{AppState, PAYLOAD_SLIDER_MAX, PAYLOAD_SLIDER_MIN, PAYLOAD_SLIDER_STEP};

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top bar with the dataset summary.
pub fn top_bar(ui: &mut Ui, state: &AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.label(RichText::new("Launch Records Dashboard").strong());

        ui.separator();

        ui.label(format!(
            "{} launches loaded, {} plotted",
            state.dataset.len(),
            state.scatter_points.len()
        ));
    });
}

// ---------------------------------------------------------------------------
// Left side panel – dashboard controls
// ---------------------------------------------------------------------------

/// Render the controls panel: site dropdown and payload range sliders.
pub fn controls_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Controls");
    ui.separator();

    // ---- Site dropdown ----
    ui.strong("Launch site");
    let mut picked: Option<SiteSelection> = None;
    egui::ComboBox::from_id_salt("site_dropdown")
        .selected_text(state.site_selection.to_string())
        .show_ui(ui, |ui: &mut Ui| {
            for option in state.site_options() {
                let is_current = state.site_selection == option;
                if ui.selectable_label(is_current, option.to_string()).clicked() {
                    picked = Some(option);
                }
            }
        });
    if let Some(selection) = picked {
        state.select_site(selection);
    }

    ui.add_space(8.0);
    ui.separator();

    // ---- Payload range ----
    ui.strong("Payload range (kg)");
    let mut lo = state.payload_lo;
    let mut hi = state.payload_hi;

    let lo_changed = ui
        .add(
            egui::Slider::new(&mut lo, PAYLOAD_SLIDER_MIN..=PAYLOAD_SLIDER_MAX)
                .step_by(PAYLOAD_SLIDER_STEP)
                .text("Min"),
        )
        .changed();
    let hi_changed = ui
        .add(
            egui::Slider::new(&mut hi, PAYLOAD_SLIDER_MIN..=PAYLOAD_SLIDER_MAX)
                .step_by(PAYLOAD_SLIDER_STEP)
                .text("Max"),
        )
        .changed();

    if lo_changed || hi_changed {
        state.set_payload_range(lo, hi);
    }

    ui.add_space(8.0);
    ui.separator();

    ui.label(format!(
        "{} launches between {:.0} and {:.0} kg",
        state.scatter_points.len(),
        state.payload_lo,
        state.payload_hi
    ));
}
