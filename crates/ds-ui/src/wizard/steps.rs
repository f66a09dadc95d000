use ds_core::wizard::{
    reference, DataSourceKind, DisplayFields, FilterField, FilterFields, GroupBy, SourceFields, StepUpdate,
    VisualizationFields, VisualizationType, WizardSession,
};
use egui::{RichText, Ui};

use crate::preview::widget_preview;
use crate::theme::{accent_color, color_from_hex, muted_color};
use crate::widget_utils::{GridExt, WidgetId};

fn option_frame(ui: &Ui, selected: bool) -> egui::Frame {
    let stroke = if selected {
        egui::Stroke::new(2.0, accent_color())
    } else {
        ui.visuals().widgets.noninteractive.bg_stroke
    };
    egui::Frame::none()
        .fill(ui.visuals().window_fill)
        .stroke(stroke)
        .rounding(8.0)
        .inner_margin(10.0)
}

fn section(ui: &mut Ui, title: &str) {
    ui.add_space(8.0);
    ui.label(RichText::new(title).strong());
    ui.add_space(4.0);
}

pub(super) fn data_source(ui: &mut Ui, session: &mut WizardSession) {
    let current = session.config().data_source;

    section(ui, "Data Source");
    egui::Grid::new_with_id(WidgetId::new("wizard").with("sources"))
        .num_columns(2)
        .spacing([8.0, 8.0])
        .show(ui, |ui| {
            for (i, source) in DataSourceKind::ALL.iter().enumerate() {
                let response = option_frame(ui, current == Some(*source))
                    .show(ui, |ui| {
                        ui.set_width(300.0);
                        ui.label(RichText::new(source.label()).strong());
                        ui.label(RichText::new(source.description()).color(muted_color()).small());
                    })
                    .response
                    .interact(egui::Sense::click());
                if response.clicked() {
                    session.apply(StepUpdate::Source(SourceFields {
                        data_source: Some(*source),
                        metric: None,
                    }));
                }
                if i % 2 == 1 {
                    ui.end_row();
                }
            }
        });

    let Some(source) = session.config().data_source else {
        return;
    };

    section(ui, "Metric");
    let selected = session.config().metric.clone();
    for metric in source.metrics() {
        let checked = selected == metric.id;
        ui.horizontal(|ui| {
            if ui.radio(checked, metric.label).clicked() && !checked {
                session.apply(StepUpdate::Source(SourceFields {
                    data_source: None,
                    metric: Some(metric.id.to_string()),
                }));
            }
            ui.label(RichText::new(metric.description).color(muted_color()).small());
        });
    }
}

pub(super) fn visualization(ui: &mut Ui, session: &mut WizardSession) {
    let current = session.config().visualization_type;

    section(ui, "Chart Type");
    egui::Grid::new_with_id(WidgetId::new("wizard").with("visualizations"))
        .num_columns(4)
        .spacing([8.0, 8.0])
        .show(ui, |ui| {
            for (i, kind) in VisualizationType::ALL.iter().enumerate() {
                let response = option_frame(ui, current == Some(*kind))
                    .show(ui, |ui| {
                        ui.set_width(150.0);
                        widget_preview(ui, kind.preview(), 60.0);
                        ui.label(RichText::new(kind.label()).strong());
                        ui.label(RichText::new(kind.description()).color(muted_color()).small());
                    })
                    .response
                    .interact(egui::Sense::click())
                    .on_hover_text(format!("Best for: {}", kind.best_for()));
                if response.clicked() {
                    session.apply(StepUpdate::Visualization(VisualizationFields {
                        visualization_type: Some(*kind),
                    }));
                }
                if i % 4 == 3 {
                    ui.end_row();
                }
            }
        });
}

pub(super) fn filters(ui: &mut Ui, session: &mut WizardSession) {
    for field in FilterField::ALL {
        section(ui, field.label());
        ui.horizontal_wrapped(|ui| {
            for value in field.options() {
                let mut checked = session.reducer().filter_values(field).iter().any(|v| v == value);
                if ui.checkbox(&mut checked, *value).changed() {
                    session.toggle_filter(field, value);
                }
            }
        });
    }

    section(ui, "Date Range");
    let current = session.config().filters.date_range.clone();
    let label = reference::DATE_RANGES
        .iter()
        .find(|(key, _)| *key == current)
        .map(|(_, label)| *label)
        .unwrap_or(current.as_str());
    egui::ComboBox::from_id_source(WidgetId::new("wizard").with("filters").with("date_range").id())
        .selected_text(label)
        .show_ui(ui, |ui| {
            for (key, label) in reference::DATE_RANGES {
                if ui.selectable_label(current == *key, *label).clicked() {
                    session.apply(StepUpdate::Filters(FilterFields {
                        date_range: Some(key.to_string()),
                        ..Default::default()
                    }));
                }
            }
        });

    section(ui, "Group By");
    let group_by = session.config().group_by;
    for option in GroupBy::ALL {
        ui.horizontal(|ui| {
            if ui.radio(group_by == option, option.label()).clicked() {
                session.apply(StepUpdate::Filters(FilterFields {
                    group_by: Some(option),
                    ..Default::default()
                }));
            }
            ui.label(RichText::new(option.description()).color(muted_color()).small());
        });
    }
}

pub(super) fn display(ui: &mut Ui, session: &mut WizardSession) {
    section(ui, "Widget Title");
    let mut title = session.config().title.clone();
    let response = ui.add(
        egui::TextEdit::singleline(&mut title)
            .hint_text("Enter a title for your widget")
            .desired_width(f32::INFINITY),
    );
    if response.changed() {
        session.apply(StepUpdate::Display(DisplayFields {
            title: Some(title),
            ..Default::default()
        }));
    }

    section(ui, "Color Accent");
    let accent = session.config().color_accent.clone();
    ui.horizontal_wrapped(|ui| {
        for (hex, name) in reference::COLOR_PRESETS {
            let color = color_from_hex(hex);
            let selected = accent.eq_ignore_ascii_case(hex);
            let (rect, response) = ui.allocate_exact_size(egui::vec2(28.0, 28.0), egui::Sense::click());
            ui.painter().circle_filled(rect.center(), 12.0, color);
            if selected {
                ui.painter()
                    .circle_stroke(rect.center(), 13.5, egui::Stroke::new(2.0, ui.visuals().text_color()));
            }
            if response.on_hover_text(*name).clicked() {
                session.apply(StepUpdate::Display(DisplayFields {
                    color_accent: Some(hex.to_string()),
                    ..Default::default()
                }));
            }
        }
    });

    section(ui, "Options");
    let mut share = session.config().share_with_team;
    if ui.checkbox(&mut share, "Share with team").changed() {
        session.apply(StepUpdate::Display(DisplayFields {
            share_with_team: Some(share),
            ..Default::default()
        }));
    }
    let mut show = session.config().show_in_dashboard;
    if ui.checkbox(&mut show, "Show in dashboard").changed() {
        session.apply(StepUpdate::Display(DisplayFields {
            show_in_dashboard: Some(show),
            ..Default::default()
        }));
    }
}

pub(super) fn review(ui: &mut Ui, session: &WizardSession) {
    let summary = session.summary();
    let config = session.config();

    egui::Grid::new_with_id(WidgetId::new("wizard").with("review"))
        .num_columns(2)
        .spacing([24.0, 6.0])
        .striped(true)
        .show(ui, |ui| {
            let rows = [
                ("Title", config.title.as_str()),
                ("Data Source", summary.data_source()),
                ("Metric", summary.metric()),
                ("Visualization", summary.visualization()),
                ("Group By", summary.group_by()),
            ];
            for (label, value) in rows {
                ui.label(RichText::new(label).color(muted_color()));
                ui.label(value);
                ui.end_row();
            }

            ui.label(RichText::new("Color").color(muted_color()));
            ui.label(RichText::new(&config.color_accent).color(color_from_hex(&config.color_accent)));
            ui.end_row();
        });

    section(ui, "Filters");
    if summary.has_active_filters() {
        for (field, values) in summary.active_filters() {
            ui.label(format!("{}: {}", field.label(), values.join(", ")));
        }
    } else {
        ui.label(RichText::new("No filters applied").color(muted_color()));
    }

    if let Some(kind) = config.visualization_type {
        section(ui, "Preview");
        widget_preview(ui, kind.preview(), 120.0);
    }
}
