//! KPI card tiles

use anyhow::Context as _;
use chrono::{DateTime, Utc};
use ds_core::kpi::{KpiCard, KpiIcon, Trend, ValueFilter};
use egui::{RichText, Ui};
use tracing::info;

use crate::theme::{error_color, muted_color, success_color};
use crate::icons;

fn icon_glyph(icon: KpiIcon) -> &'static str {
    match icon {
        KpiIcon::Users => "👥",
        KpiIcon::UserPlus => "👤",
        KpiIcon::Refund => "💲",
        KpiIcon::Clock => "⏱",
    }
}

/// Render one card. Errors come from the CSV export.
pub fn kpi_card(
    ui: &mut Ui,
    index: usize,
    card: &mut KpiCard,
    range_label: &str,
    now: DateTime<Utc>,
) -> anyhow::Result<()> {
    let mut export = false;

    ui.push_id(("kpi_card", index), |ui| {
        egui::Frame::none()
            .fill(ui.visuals().window_fill)
            .stroke(ui.visuals().widgets.noninteractive.bg_stroke)
            .rounding(12.0)
            .inner_margin(16.0)
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.label(RichText::new(&card.title).color(muted_color()));
                    ui.label(RichText::new(icons::INFO).color(muted_color()).small())
                        .on_hover_text(format!("{} for {}", card.title, range_label));

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(RichText::new(icon_glyph(card.icon)).size(18.0));
                    });
                });

                ui.add_space(4.0);
                ui.label(RichText::new(&card.value).strong().size(26.0));

                ui.horizontal(|ui| {
                    let (arrow, color) = match card.trend {
                        Trend::Up => (icons::TREND_UP, success_color()),
                        Trend::Down => (icons::TREND_DOWN, error_color()),
                    };
                    ui.label(RichText::new(format!("{} {}", arrow, card.change)).color(color));
                    if !range_label.is_empty() {
                        ui.label(RichText::new(format!("vs. previous · {}", range_label)).color(muted_color()).small());
                    }
                });

                ui.separator();

                ui.horizontal(|ui| {
                    let caption = if card.is_refreshing() {
                        "Refreshing...".to_string()
                    } else {
                        card.time_ago(now)
                    };
                    ui.label(RichText::new(caption).color(muted_color()).small());

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.menu_button(icons::FILTER, |ui| {
                            for filter in ValueFilter::ALL {
                                if ui.radio_value(&mut card.value_filter, filter, filter.label()).clicked() {
                                    ui.close_menu();
                                }
                            }
                        });

                        if ui.small_button(icons::DOWNLOAD).on_hover_text("Export CSV").clicked() {
                            export = true;
                        }

                        let refresh = egui::Button::new(icons::REFRESH).small();
                        if ui
                            .add_enabled(!card.is_refreshing(), refresh)
                            .on_hover_text("Refresh")
                            .clicked()
                        {
                            card.begin_refresh(now);
                            ui.ctx().request_repaint();
                        }
                    });
                });
            });
    });

    if export {
        export_card(card)?;
    }
    Ok(())
}

/// Ask for a target path and write the card's CSV there
fn export_card(card: &KpiCard) -> anyhow::Result<()> {
    let file_name = card.export_file_name();
    let Some(path) = rfd::FileDialog::new()
        .set_file_name(file_name.as_str())
        .add_filter("CSV", &["csv"])
        .save_file()
    else {
        return Ok(());
    };

    std::fs::write(&path, card.export_csv())
        .with_context(|| format!("failed to write {}", path.display()))?;
    info!(card = %card.title, path = %path.display(), "exported KPI card");
    Ok(())
}
