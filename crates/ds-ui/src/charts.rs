//! Chart placeholders on the dashboard body

use ds_core::period::{self, Cycle};
use egui::{RichText, Ui};
use egui_plot::{Bar, BarChart, Line, Plot, PlotPoints};

use crate::theme::{accent_color, muted_color};
use crate::widget_utils::WidgetId;

fn card_frame(ui: &Ui) -> egui::Frame {
    egui::Frame::none()
        .fill(ui.visuals().window_fill)
        .stroke(ui.visuals().widgets.noninteractive.bg_stroke)
        .rounding(12.0)
        .inner_margin(16.0)
}

/// "Sales Trends" line chart; the header selector writes `cycle` in place
pub fn sales_trend_chart(ui: &mut Ui, cycle: &mut Cycle, range_label: &str) {
    card_frame(ui).show(ui, |ui| {
        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                ui.label(RichText::new("Sales Trends").strong().size(16.0));
                ui.label(RichText::new(range_label).color(muted_color()).small());
            });
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                crate::selectors::cycle_selector(ui, cycle);
            });
        });
        ui.add_space(8.0);

        let series = period::sales_trend(*cycle);
        let points: PlotPoints = series
            .iter()
            .enumerate()
            .map(|(i, (_, value))| [i as f64, *value])
            .collect();

        Plot::new(WidgetId::new("sales_trend").with(cycle.label()).id())
            .height(240.0)
            .allow_zoom(false)
            .allow_drag(false)
            .allow_scroll(false)
            .show(ui, |plot_ui| {
                plot_ui.line(Line::new(points).color(accent_color()).width(2.0).name("Sales"));
            });

        let labels: Vec<&str> = series.iter().map(|(label, _)| label.as_str()).collect();
        ui.label(RichText::new(labels.join("  ·  ")).color(muted_color()).small());
    });
}

/// "Top Activities" bar chart
pub fn activities_chart(ui: &mut Ui, range_label: &str) {
    card_frame(ui).show(ui, |ui| {
        ui.label(RichText::new("Top Activities").strong().size(16.0));
        ui.label(RichText::new(range_label).color(muted_color()).small());
        ui.add_space(8.0);

        let bars: Vec<Bar> = period::top_activities()
            .into_iter()
            .enumerate()
            .map(|(i, (name, count))| Bar::new(i as f64, count).name(name).width(0.6))
            .collect();

        Plot::new("top_activities")
            .height(240.0)
            .allow_zoom(false)
            .allow_drag(false)
            .allow_scroll(false)
            .show(ui, |plot_ui| {
                plot_ui.bar_chart(BarChart::new(bars).color(accent_color()));
            });
    });
}
