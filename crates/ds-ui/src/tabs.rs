//! Dashboard tab strip

use ds_core::{AppState, DashboardId, Modal};
use egui::{Key, RichText, ScrollArea, Ui};

use crate::theme::accent_color;
use crate::{icons, TabEdit, UiState};

/// Below this width the strip collapses into a dropdown
const COMPACT_WIDTH: f32 = 480.0;

enum TabAction {
    Select(DashboardId),
    StartRename(DashboardId),
    CommitRename,
    CancelRename,
    Remove(DashboardId),
    Add,
}

/// Render the tabs, the active tab's menu and the "Add Dashboard" button
pub fn dashboard_tabs(ui: &mut Ui, app_state: &mut AppState, ui_state: &mut UiState) {
    let mut actions = Vec::new();

    if ui.available_width() < COMPACT_WIDTH {
        compact_tabs(ui, app_state, &mut actions);
    } else {
        ui.horizontal(|ui| {
            ScrollArea::horizontal()
                .id_source("dashboard_tabs")
                .max_width(ui.available_width() - 140.0)
                .show(ui, |ui| {
                    ui.horizontal(|ui| {
                        for dashboard in app_state.dashboards.iter() {
                            let active = dashboard.id == app_state.dashboards.active_id();
                            match ui_state.editing_tab.as_mut() {
                                Some(edit) if edit.id == dashboard.id => {
                                    rename_field(ui, edit, &mut actions);
                                }
                                _ => {
                                    let text = if active {
                                        RichText::new(&dashboard.name).strong().color(accent_color())
                                    } else {
                                        RichText::new(&dashboard.name)
                                    };
                                    let response = ui.selectable_label(active, text);
                                    if response.clicked() {
                                        actions.push(TabAction::Select(dashboard.id));
                                    }
                                    if response.double_clicked() {
                                        actions.push(TabAction::StartRename(dashboard.id));
                                    }
                                    if active {
                                        tab_menu(ui, dashboard.id, app_state.dashboards.can_remove(), &mut actions);
                                    }
                                }
                            }
                        }
                    });
                });

            if ui.button(format!("{} Add Dashboard", icons::PLUS)).clicked() {
                actions.push(TabAction::Add);
            }
        });
    }

    for action in actions {
        apply(action, app_state, ui_state);
    }
}

fn rename_field(ui: &mut Ui, edit: &mut TabEdit, actions: &mut Vec<TabAction>) {
    let response = ui.add(egui::TextEdit::singleline(&mut edit.value).desired_width(140.0));
    response.request_focus();

    if ui.input(|i| i.key_pressed(Key::Escape)) {
        actions.push(TabAction::CancelRename);
    } else if response.lost_focus() || ui.input(|i| i.key_pressed(Key::Enter)) {
        actions.push(TabAction::CommitRename);
    }
}

fn tab_menu(ui: &mut Ui, id: DashboardId, can_remove: bool, actions: &mut Vec<TabAction>) {
    ui.menu_button(icons::MENU, |ui| {
        if ui.button("Rename").clicked() {
            actions.push(TabAction::StartRename(id));
            ui.close_menu();
        }
        if ui.add_enabled(can_remove, egui::Button::new("Delete")).clicked() {
            actions.push(TabAction::Remove(id));
            ui.close_menu();
        }
    });
}

fn compact_tabs(ui: &mut Ui, app_state: &AppState, actions: &mut Vec<TabAction>) {
    ui.horizontal(|ui| {
        let active = app_state.dashboards.active_id();
        let selected = app_state
            .dashboards
            .active()
            .map(|d| d.name.clone())
            .unwrap_or_default();

        egui::ComboBox::from_id_source("dashboard_select")
            .selected_text(selected)
            .show_ui(ui, |ui| {
                for dashboard in app_state.dashboards.iter() {
                    if ui.selectable_label(dashboard.id == active, &dashboard.name).clicked() {
                        actions.push(TabAction::Select(dashboard.id));
                    }
                }
            });

        tab_menu(ui, active, app_state.dashboards.can_remove(), actions);

        if ui.button(icons::PLUS).on_hover_text("Add Dashboard").clicked() {
            actions.push(TabAction::Add);
        }
    });
}

fn apply(action: TabAction, app_state: &mut AppState, ui_state: &mut UiState) {
    match action {
        TabAction::Select(id) => {
            if let Err(err) = app_state.select_dashboard(id) {
                ui_state.report("Could not open dashboard", err);
            }
        }
        TabAction::StartRename(id) => {
            if let Some(dashboard) = app_state.dashboards.get(id) {
                ui_state.editing_tab = Some(TabEdit {
                    id,
                    value: dashboard.name.clone(),
                });
            }
        }
        TabAction::CommitRename => {
            if let Some(edit) = ui_state.editing_tab.take() {
                // A blank name keeps the old one
                if !edit.value.trim().is_empty() {
                    if let Err(err) = app_state.rename_dashboard(edit.id, &edit.value) {
                        ui_state.report("Could not rename dashboard", err);
                    }
                }
            }
        }
        TabAction::CancelRename => ui_state.editing_tab = None,
        TabAction::Remove(id) => {
            if let Err(err) = app_state.remove_dashboard(id) {
                ui_state.report("Could not delete dashboard", err);
            }
        }
        TabAction::Add => {
            ui_state.new_dashboard = Default::default();
            app_state.modal = Modal::AddDashboard;
        }
    }
}
