//! "Create New Dashboard" modal

use ds_core::{AppState, DashboardTemplate, Modal};
use egui::{Context, Key, RichText};

use crate::theme::{accent_color, muted_color};
use crate::UiState;

pub fn add_dashboard_modal(ctx: &Context, app_state: &mut AppState, ui_state: &mut UiState) {
    let mut open = true;
    let mut create = false;
    let mut cancel = false;
    let draft = &mut ui_state.new_dashboard;

    egui::Window::new("Create New Dashboard")
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .default_width(420.0)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.label(RichText::new("Dashboard Name").strong());
            let response = ui.add(
                egui::TextEdit::singleline(&mut draft.name)
                    .hint_text("e.g. Regional Sales")
                    .desired_width(f32::INFINITY),
            );
            let can_create = !draft.name.trim().is_empty();
            if response.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter)) && can_create {
                create = true;
            }

            ui.add_space(8.0);
            ui.label(RichText::new("Template").strong());
            for template in DashboardTemplate::ALL {
                ui.horizontal(|ui| {
                    ui.radio_value(&mut draft.template, template, template.name());
                    ui.label(RichText::new(template.description()).color(muted_color()).small());
                });
            }

            ui.add_space(12.0);
            ui.horizontal(|ui| {
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let button = egui::Button::new(RichText::new("Create").color(egui::Color32::WHITE))
                        .fill(accent_color());
                    if ui.add_enabled(can_create, button).clicked() {
                        create = true;
                    }
                    if ui.button("Cancel").clicked() {
                        cancel = true;
                    }
                });
            });
        });

    if create {
        let name = ui_state.new_dashboard.name.clone();
        let template = ui_state.new_dashboard.template;
        match app_state.add_dashboard(&name, template) {
            Ok(_) => ui_state.new_dashboard = Default::default(),
            Err(err) => ui_state.report("Could not create dashboard", err),
        }
    } else if cancel || !open {
        ui_state.new_dashboard = Default::default();
        app_state.modal = Modal::None;
    }
}
