//! Date range and cycle selectors

use ds_core::period::{Cycle, DateRangePreset};
use ds_core::AppState;
use egui::{RichText, Ui};
use tracing::{debug, info};

use crate::theme::muted_color;
use crate::{icons, UiState};

/// Dropdown of date range presets with an inline custom range picker
pub fn date_range_selector(ui: &mut Ui, app_state: &mut AppState, ui_state: &mut UiState) {
    let selection = &mut app_state.date_range;
    let draft = &mut ui_state.custom_range;

    let button = ui.button(format!("{} {}", icons::CALENDAR, selection.display_label()));
    let popup_id = ui.make_persistent_id("date_range_popup");
    if button.clicked() {
        ui.memory_mut(|mem| mem.toggle_popup(popup_id));
    }

    egui::popup::popup_below_widget(ui, popup_id, &button, |ui| {
        ui.set_min_width(220.0);
        for preset in DateRangePreset::ALL {
            let checked = selection.preset == preset;
            if ui.selectable_label(checked, preset.label()).clicked() {
                if selection.select_preset(preset) {
                    debug!(range = preset.label(), "date range selected");
                    draft.picking = false;
                    ui.memory_mut(|mem| mem.close_popup());
                } else {
                    draft.picking = true;
                }
            }
        }
    });

    if !draft.picking {
        return;
    }

    let mut open = true;
    let mut apply = false;
    egui::Window::new("Custom Range")
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .show(ui.ctx(), |ui| {
            egui::Grid::new("custom_range_grid").num_columns(2).show(ui, |ui| {
                ui.label("Start");
                ui.add(egui::TextEdit::singleline(&mut draft.start).hint_text("YYYY-MM-DD"));
                ui.end_row();
                ui.label("End");
                ui.add(egui::TextEdit::singleline(&mut draft.end).hint_text("YYYY-MM-DD"));
                ui.end_row();
            });
            ui.label(RichText::new("Both dates are required").color(muted_color()).small());
            let ready = !draft.start.trim().is_empty() && !draft.end.trim().is_empty();
            if ui.add_enabled(ready, egui::Button::new("Apply")).clicked() {
                apply = true;
            }
        });

    if apply {
        if let Some(range) = selection.apply_custom(&draft.start, &draft.end) {
            info!(start = %range.start, end = %range.end, "custom date range applied");
            draft.picking = false;
        }
    } else if !open {
        draft.picking = false;
    }
}

/// Daily / Weekly / Monthly / Yearly toggle for the sales trend chart
pub fn cycle_selector(ui: &mut Ui, cycle: &mut Cycle) {
    egui::ComboBox::from_id_source("cycle_selector")
        .selected_text(cycle.label())
        .width(110.0)
        .show_ui(ui, |ui| {
            for option in Cycle::ALL {
                ui.selectable_value(cycle, option, option.label());
            }
        });
}
