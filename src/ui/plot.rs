use std::collections::BTreeMap;
use std::f32::consts::TAU;

use eframe::egui::{Color32, Pos2, Sense, Shape, Stroke, Ui, vec2};
use egui_plot::{Legend, MarkerShape, Plot, Points};

use crate::data::aggregate::SiteSelection;
use crate::state::AppState;

const SUCCESS_COLOR: Color32 = Color32::from_rgb(46, 204, 113);
const FAILURE_COLOR: Color32 = Color32::from_rgb(231, 76, 60);

// ---------------------------------------------------------------------------
// Outcome pie (upper chart)
// ---------------------------------------------------------------------------

/// Render the outcome breakdown as a pie with a legend beside it.
pub fn success_pie(ui: &mut Ui, state: &AppState) {
    let title = match &state.site_selection {
        SiteSelection::All => "Total successful launches by site".to_string(),
        SiteSelection::Site(name) => format!("Success vs failure counts for {name}"),
    };
    ui.strong(title);

    let total: u32 = state.pie_slices.iter().map(|s| s.value).sum();
    if total == 0 {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.label("No launches for this selection.");
        });
        return;
    }

    ui.horizontal(|ui: &mut Ui| {
        draw_sectors(ui, state, total);
        draw_legend(ui, state, total);
    });
}

fn slice_color(state: &AppState, label: &str) -> Color32 {
    match &state.site_selection {
        SiteSelection::All => state.site_colors.color_for(label),
        SiteSelection::Site(_) => {
            if label == "Success" {
                SUCCESS_COLOR
            } else {
                FAILURE_COLOR
            }
        }
    }
}

fn draw_sectors(ui: &mut Ui, state: &AppState, total: u32) {
    let side = ui
        .available_height()
        .min(ui.available_width() * 0.5)
        .max(60.0);
    let (rect, _) = ui.allocate_exact_size(vec2(side, side), Sense::hover());
    let painter = ui.painter_at(rect);
    let center = rect.center();
    let radius = side * 0.45;

    // Sectors start at 12 o'clock and run clockwise.  Each sector is a fan
    // of thin triangles so sweeps past 180° render correctly.
    let mut angle = -TAU / 4.0;
    for slice in &state.pie_slices {
        if slice.value == 0 {
            continue;
        }
        let sweep = TAU * slice.value as f32 / total as f32;
        let color = slice_color(state, &slice.label);
        let steps = ((sweep / TAU * 64.0).ceil() as usize).max(1);

        let mut shapes = Vec::with_capacity(steps);
        for step in 0..steps {
            let a0 = angle + sweep * step as f32 / steps as f32;
            let a1 = angle + sweep * (step + 1) as f32 / steps as f32;
            shapes.push(Shape::convex_polygon(
                vec![
                    center,
                    arc_point(center, radius, a0),
                    arc_point(center, radius, a1),
                ],
                color,
                Stroke::NONE,
            ));
        }
        painter.extend(shapes);
        angle += sweep;
    }
}

fn arc_point(center: Pos2, radius: f32, angle: f32) -> Pos2 {
    Pos2::new(
        center.x + radius * angle.cos(),
        center.y + radius * angle.sin(),
    )
}

fn draw_legend(ui: &mut Ui, state: &AppState, total: u32) {
    ui.vertical(|ui: &mut Ui| {
        for slice in &state.pie_slices {
            let color = slice_color(state, &slice.label);
            ui.horizontal(|ui: &mut Ui| {
                let (swatch, _) = ui.allocate_exact_size(vec2(12.0, 12.0), Sense::hover());
                ui.painter().rect_filled(swatch, 2.0, color);
                let pct = 100.0 * slice.value as f32 / total as f32;
                ui.label(format!("{}: {} ({pct:.1}%)", slice.label, slice.value));
            });
        }
    });
}

// ---------------------------------------------------------------------------
// Payload scatter (lower chart)
// ---------------------------------------------------------------------------

/// Render the payload-vs-outcome scatter, grouped by booster version.
pub fn payload_scatter(ui: &mut Ui, state: &AppState) {
    ui.strong("Payload vs launch outcome");

    if state.scatter_points.is_empty() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.label("No launches in the selected payload range.");
        });
        return;
    }

    let mut by_category: BTreeMap<&str, Vec<[f64; 2]>> = BTreeMap::new();
    for p in &state.scatter_points {
        by_category
            .entry(p.booster_category.as_str())
            .or_default()
            .push([p.payload_kg, p.outcome.class() as f64]);
    }

    Plot::new("payload_scatter")
        .legend(Legend::default())
        .x_axis_label("Payload Mass (kg)")
        .y_axis_label("Launch outcome")
        .include_y(-0.25)
        .include_y(1.25)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            for (category, points) in by_category {
                let points = Points::new(points)
                    .name(category)
                    .color(state.booster_colors.color_for(category))
                    .shape(MarkerShape::Circle)
                    .radius(4.0);
                plot_ui.points(points);
            }
        });
}
