//! Widget library modal

use ds_core::catalog::{CategoryFilter, SortBy, WidgetDescriptor};
use ds_core::{AppState, Modal};
use egui::{Context, Grid, RichText, ScrollArea, Ui};

use crate::theme::{accent_color, muted_color};
use crate::widget_utils::{GridExt, WidgetId};
use crate::{icons, preview};

const CARD_WIDTH: f32 = 220.0;

/// Render the library window while it is open
pub fn widget_library(ctx: &Context, app_state: &mut AppState) {
    let mut open = true;
    let mut configure = false;

    egui::Window::new("Widget Library")
        .open(&mut open)
        .collapsible(false)
        .resizable(true)
        .default_size([880.0, 600.0])
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.label(RichText::new("Browse widgets and add them to your dashboard").color(muted_color()));
            ui.add_space(8.0);
            toolbar(ui, app_state);
            ui.separator();

            ui.horizontal_top(|ui| {
                category_sidebar(ui, app_state);
                ui.separator();
                configure = widget_grid(ui, &app_state.library.widgets());
            });
        });

    if configure {
        app_state.configure_from_library();
    } else if !open {
        app_state.modal = Modal::None;
    }
}

fn toolbar(ui: &mut Ui, app_state: &mut AppState) {
    ui.horizontal(|ui| {
        ui.label(icons::SEARCH);
        ui.add(
            egui::TextEdit::singleline(app_state.library.search_text_mut())
                .hint_text("Search widgets...")
                .desired_width(280.0),
        );

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let sort = app_state.library.query().sort_by;
            if ui.selectable_label(sort == SortBy::Module, "Module").clicked() {
                app_state.library.set_sort(SortBy::Module);
            }
            if ui.selectable_label(sort == SortBy::Popularity, "Popularity").clicked() {
                app_state.library.set_sort(SortBy::Popularity);
            }
            ui.label(RichText::new("Sort by").color(muted_color()));
        });
    });
}

fn category_sidebar(ui: &mut Ui, app_state: &mut AppState) {
    ui.vertical(|ui| {
        ui.set_width(180.0);
        let current = app_state.library.query().category;
        let mut picked = None;

        for tab in CategoryFilter::tabs() {
            let count = app_state.library.count(tab);
            ui.horizontal(|ui| {
                if ui.selectable_label(tab == current, tab.label()).clicked() {
                    picked = Some(tab);
                }
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(RichText::new(count.to_string()).color(muted_color()).small());
                });
            });
        }

        if let Some(tab) = picked {
            app_state.library.set_category(tab);
        }
    });
}

/// Card grid; returns true when a card's "Configure" was pressed
fn widget_grid(ui: &mut Ui, widgets: &[&WidgetDescriptor]) -> bool {
    if widgets.is_empty() {
        ui.vertical_centered(|ui| {
            ui.add_space(80.0);
            ui.label(RichText::new(icons::SEARCH).size(32.0).color(muted_color()));
            ui.label(RichText::new("No widgets found").strong());
            ui.label(RichText::new("Try adjusting your search or filters").color(muted_color()));
        });
        return false;
    }

    let mut configure = false;
    let columns = ((ui.available_width() / (CARD_WIDTH + 12.0)).floor() as usize).max(1);

    ScrollArea::vertical().auto_shrink([false; 2]).show(ui, |ui| {
        Grid::new_with_id(WidgetId::new("library").with("cards"))
            .spacing([12.0, 12.0])
            .show(ui, |ui| {
                for (i, widget) in widgets.iter().enumerate() {
                    if widget_card(ui, widget) {
                        configure = true;
                    }
                    if (i + 1) % columns == 0 {
                        ui.end_row();
                    }
                }
            });
    });

    configure
}

fn widget_card(ui: &mut Ui, widget: &WidgetDescriptor) -> bool {
    let mut configure = false;
    egui::Frame::none()
        .fill(ui.visuals().window_fill)
        .stroke(ui.visuals().widgets.noninteractive.bg_stroke)
        .rounding(10.0)
        .inner_margin(12.0)
        .show(ui, |ui| {
            ui.set_width(CARD_WIDTH);
            preview::widget_preview(ui, widget.preview, 90.0);
            ui.add_space(6.0);
            ui.label(RichText::new(widget.name).strong());
            ui.label(RichText::new(widget.description).color(muted_color()).small());
            ui.horizontal(|ui| {
                ui.label(RichText::new(widget.category.label()).small());
                ui.label(RichText::new(widget.data_type).color(muted_color()).small());
            });
            ui.horizontal(|ui| {
                ui.label(RichText::new(format!("{}% popular", widget.popularity)).color(muted_color()).small());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let button = egui::Button::new(RichText::new("Configure").color(egui::Color32::WHITE))
                        .fill(accent_color());
                    if ui.add(button).clicked() {
                        configure = true;
                    }
                });
            });
        });
    configure
}
