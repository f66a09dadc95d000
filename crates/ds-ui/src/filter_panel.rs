//! Right-hand filter side panel

use ds_core::filter_panel::{ClientStatus, DateWindow, DealSize, FilterPanelState, PANEL_REGIONS};
use ds_core::AppState;
use egui::{Context, RichText, SidePanel, Ui};

use crate::theme::{accent_color, muted_color};
use crate::icons;
use crate::widget_utils::WidgetId;

/// Render the panel when it is open
pub fn filter_panel(ctx: &Context, app_state: &mut AppState) {
    if !app_state.filter_panel.open {
        return;
    }

    let mut apply = false;
    SidePanel::right("filter_panel")
        .resizable(false)
        .exact_width(300.0)
        .show(ctx, |ui| {
            ui.add_space(8.0);
            ui.horizontal(|ui| {
                ui.label(RichText::new(format!("{} Filters", icons::FILTER)).strong().size(16.0));
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.small_button(icons::CLOSE).clicked() {
                        app_state.filter_panel.open = false;
                    }
                });
            });
            ui.separator();

            let panel = &mut app_state.filter_panel;
            filter_fields(ui, panel);

            ui.add_space(16.0);
            ui.horizontal(|ui| {
                if ui.button("Reset").clicked() {
                    panel.reset();
                }
                let button = egui::Button::new(RichText::new("Apply Filters").color(egui::Color32::WHITE))
                    .fill(accent_color());
                if ui.add(button).clicked() {
                    apply = true;
                }
            });
        });

    if apply {
        app_state.apply_filters();
    }
}

fn filter_fields(ui: &mut Ui, panel: &mut FilterPanelState) {
    label(ui, "Date Range");
    egui::ComboBox::from_id_source(WidgetId::new("filter_panel").with("date").id())
        .selected_text(panel.date_window.label())
        .width(260.0)
        .show_ui(ui, |ui| {
            for window in DateWindow::ALL {
                ui.selectable_value(&mut panel.date_window, window, window.label());
            }
        });

    label(ui, "Region");
    optional_combo(ui, "region", "All Regions", &mut panel.region, PANEL_REGIONS);

    label(ui, "Sales Rep");
    optional_combo(ui, "rep", "All Reps", &mut panel.sales_rep, FilterPanelState::sales_reps());

    label(ui, "Client Status");
    for status in ClientStatus::ALL {
        let mut checked = panel.is_status_checked(status);
        if ui.checkbox(&mut checked, status.label()).changed() {
            panel.set_status(status, checked);
        }
    }

    label(ui, "Deal Size");
    for size in DealSize::ALL {
        ui.radio_value(&mut panel.deal_size, size, size.label());
    }
}

fn label(ui: &mut Ui, text: &str) {
    ui.add_space(10.0);
    ui.label(RichText::new(text).color(muted_color()).small());
}

fn optional_combo(
    ui: &mut Ui,
    id: &str,
    all_label: &str,
    value: &mut Option<&'static str>,
    options: &'static [&'static str],
) {
    egui::ComboBox::from_id_source(WidgetId::new("filter_panel").with(id).id())
        .selected_text(value.map_or(all_label, |v| v))
        .width(260.0)
        .show_ui(ui, |ui| {
            ui.selectable_value(value, None, all_label);
            for option in options {
                ui.selectable_value(value, Some(*option), *option);
            }
        });
}
