//! Widget configuration wizard modal

mod steps;

use ds_core::wizard::{StepStatus, WizardSession, WizardStep};
use ds_core::AppState;
use egui::{Color32, Context, RichText, Ui};
use tracing::debug;

use crate::theme::{accent_color, muted_color, success_color};
use crate::icons;

enum Footer {
    Cancel,
    Back,
    Next,
    Create,
}

/// Render the wizard window while it is open
pub fn widget_wizard(ctx: &Context, app_state: &mut AppState) {
    let mut open = true;
    let mut footer = None;

    egui::Window::new("Create New Widget")
        .open(&mut open)
        .collapsible(false)
        .resizable(true)
        .default_size([760.0, 620.0])
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            let session = &mut app_state.wizard;
            ui.label(RichText::new(session.heading()).color(muted_color()));
            ui.add_space(8.0);
            progress_indicator(ui, session);
            ui.separator();

            egui::ScrollArea::vertical()
                .max_height(420.0)
                .auto_shrink([false, true])
                .show(ui, |ui| match session.step() {
                    WizardStep::DataSource => steps::data_source(ui, session),
                    WizardStep::Visualization => steps::visualization(ui, session),
                    WizardStep::Filters => steps::filters(ui, session),
                    WizardStep::Display => steps::display(ui, session),
                    WizardStep::Review => steps::review(ui, session),
                });

            ui.separator();
            footer = footer_buttons(ui, session);
        });

    if !open {
        app_state.cancel_wizard();
        return;
    }

    match footer {
        Some(Footer::Cancel) => app_state.cancel_wizard(),
        Some(Footer::Back) => {
            app_state.wizard.back();
        }
        Some(Footer::Next) => {
            let step = app_state.wizard.next();
            debug!(step = step.index(), "wizard step");
        }
        Some(Footer::Create) => {
            app_state.finish_wizard();
        }
        None => {}
    }
}

/// Numbered circles joined by connector lines
fn progress_indicator(ui: &mut Ui, session: &WizardSession) {
    ui.horizontal(|ui| {
        for (i, step) in WizardStep::ALL.iter().enumerate() {
            if i > 0 {
                let done = session.step_status(*step) != StepStatus::Upcoming;
                let color = if done { accent_color() } else { ui.visuals().weak_text_color() };
                ui.label(RichText::new("────").color(color));
            }

            let (glyph, fill, text) = match session.step_status(*step) {
                StepStatus::Completed => (icons::CHECK.to_string(), success_color(), Color32::WHITE),
                StepStatus::Current => (step.index().to_string(), accent_color(), Color32::WHITE),
                StepStatus::Upcoming => (
                    step.index().to_string(),
                    ui.visuals().faint_bg_color,
                    ui.visuals().weak_text_color(),
                ),
            };

            ui.vertical(|ui| {
                egui::Frame::none()
                    .fill(fill)
                    .rounding(12.0)
                    .inner_margin(egui::Margin::symmetric(8.0, 4.0))
                    .show(ui, |ui| {
                        ui.label(RichText::new(glyph).color(text).strong());
                    });
                ui.label(RichText::new(step.title()).small());
                ui.label(RichText::new(step.description()).color(muted_color()).small());
            });
        }
    });
}

fn footer_buttons(ui: &mut Ui, session: &WizardSession) -> Option<Footer> {
    let mut footer = None;
    ui.horizontal(|ui| {
        if ui.button("Cancel").clicked() {
            footer = Some(Footer::Cancel);
        }
        if ui
            .add_enabled(session.can_retreat(), egui::Button::new(format!("{} Back", icons::BACK)))
            .clicked()
        {
            footer = Some(Footer::Back);
        }

        ui.label(RichText::new(session.progress_label()).color(muted_color()).small());

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if session.step() == WizardStep::LAST {
                let create = egui::Button::new(
                    RichText::new(format!("{} Create Widget", icons::CHECK)).color(Color32::WHITE),
                )
                .fill(success_color());
                if ui.add(create).clicked() {
                    footer = Some(Footer::Create);
                }
            } else {
                let next = egui::Button::new(RichText::new(format!("Next {}", icons::NEXT)).color(Color32::WHITE))
                    .fill(accent_color());
                if ui.add_enabled(session.can_advance(), next).clicked() {
                    footer = Some(Footer::Next);
                }
            }
        });
    });
    footer
}
