use chrono::Utc;
use ds_core::{AppState, Modal};
use egui::{CentralPanel, Context, RichText, ScrollArea, TopBottomPanel};

use crate::theme::{accent_color, color_from_hex, muted_color};
use crate::{icons, UiState};

/// Render the tab strip and the dashboard header
pub fn dashboard_header(ctx: &Context, app_state: &mut AppState, ui_state: &mut UiState) {
    TopBottomPanel::top("dashboard_tabs").show(ctx, |ui| {
        ui.add_space(4.0);
        crate::tabs::dashboard_tabs(ui, app_state, ui_state);
        ui.add_space(4.0);
    });

    TopBottomPanel::top("dashboard_header").show(ctx, |ui| {
        ui.add_space(8.0);
        ui.horizontal(|ui| {
            let (title, subtitle) = app_state
                .dashboards
                .active()
                .map(|d| (d.name.clone(), d.description.clone()))
                .unwrap_or_default();

            ui.vertical(|ui| {
                ui.label(RichText::new(title).strong().size(22.0));
                ui.label(RichText::new(subtitle).color(muted_color()));
            });

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let add = egui::Button::new(
                    RichText::new(format!("{} Add Widget", icons::PLUS)).color(egui::Color32::WHITE),
                )
                .fill(accent_color());
                if ui.add(add).clicked() {
                    app_state.open_library();
                }

                let filters = egui::SelectableLabel::new(
                    app_state.filter_panel.open,
                    format!("{} Filters", icons::SLIDERS),
                );
                if ui.add(filters).clicked() {
                    app_state.filter_panel.toggle();
                }

                crate::selectors::date_range_selector(ui, app_state, ui_state);
            });
        });
        ui.add_space(8.0);
    });
}

/// Render the central panel: KPI row, charts and the dashboard's widgets
pub fn central_panel(ctx: &Context, app_state: &mut AppState, ui_state: &mut UiState) {
    CentralPanel::default().show(ctx, |ui| {
        // Error messages
        show_error_messages(ui, ui_state);

        ScrollArea::vertical().auto_shrink([false; 2]).show(ui, |ui| {
            let now = Utc::now();
            let range_label = app_state.date_range.card_label();

            ui.columns(app_state.kpis.len().max(1), |columns| {
                for (i, (column, card)) in columns.iter_mut().zip(app_state.kpis.iter_mut()).enumerate() {
                    if let Err(err) = crate::kpi_card::kpi_card(column, i, card, &range_label, now) {
                        ui_state.report("Export failed", err);
                    }
                }
            });

            ui.add_space(16.0);
            ui.columns(2, |columns| {
                crate::charts::sales_trend_chart(&mut columns[0], &mut app_state.cycle, &range_label);
                crate::charts::activities_chart(&mut columns[1], &range_label);
            });

            ui.add_space(16.0);
            show_dashboard_widgets(ui, app_state);
        });
    });
}

/// Dispatch the visible modal
pub fn modals(ctx: &Context, app_state: &mut AppState, ui_state: &mut UiState) {
    match app_state.modal {
        Modal::None => {}
        Modal::WidgetLibrary => crate::library::widget_library(ctx, app_state),
        Modal::WidgetWizard => crate::wizard::widget_wizard(ctx, app_state),
        Modal::AddDashboard => crate::add_dashboard::add_dashboard_modal(ctx, app_state, ui_state),
    }
}

/// Tiles for widgets created on the active dashboard
fn show_dashboard_widgets(ui: &mut egui::Ui, app_state: &AppState) {
    let Some(dashboard) = app_state.dashboards.active() else {
        return;
    };

    if dashboard.widgets.is_empty() {
        ui.vertical_centered(|ui| {
            ui.add_space(24.0);
            ui.label(RichText::new(icons::CHART).size(28.0).color(muted_color()));
            ui.label(RichText::new("No custom widgets yet").strong());
            ui.label(RichText::new("Use \"Add Widget\" to build one from the library").color(muted_color()));
        });
        return;
    }

    ui.label(RichText::new("Widgets").strong().size(16.0));
    ui.add_space(8.0);
    ui.horizontal_wrapped(|ui| {
        for config in &dashboard.widgets {
            egui::Frame::none()
                .fill(ui.visuals().window_fill)
                .stroke(egui::Stroke::new(1.0, color_from_hex(&config.color_accent)))
                .rounding(12.0)
                .inner_margin(12.0)
                .show(ui, |ui| {
                    ui.set_width(260.0);
                    ui.label(RichText::new(&config.title).strong());
                    let kind = config
                        .visualization_type
                        .map(|v| v.label())
                        .unwrap_or_default();
                    ui.label(
                        RichText::new(format!("{} · {}", kind, ds_core::wizard::metric_label(&config.metric)))
                            .color(muted_color())
                            .small(),
                    );
                    if let Some(visualization) = config.visualization_type {
                        crate::preview::widget_preview(ui, visualization.preview(), 80.0);
                    }
                });
        }
    });
}

/// Show error messages
pub fn show_error_messages(ui: &mut egui::Ui, ui_state: &mut UiState) {
    let now = std::time::Instant::now();

    // Remove old messages
    ui_state
        .error_messages
        .retain(|msg| now.duration_since(msg.timestamp).as_secs() < 10);

    for msg in &ui_state.error_messages {
        egui::Frame::none()
            .fill(crate::theme::error_color().linear_multiply(0.2))
            .stroke(egui::Stroke::new(1.0, crate::theme::error_color()))
            .rounding(4.0)
            .inner_margin(8.0)
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.label(RichText::new("⚠").color(crate::theme::error_color()));
                    ui.label(&msg.title);
                    ui.separator();
                    ui.label(&msg.message);
                });
            });
    }
}
