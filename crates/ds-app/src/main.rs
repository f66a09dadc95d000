//! Main application entry point

use std::time::Duration;

use anyhow::Result;
use chrono::Utc;
use ds_core::events::events;
use ds_core::{AppSettings, AppState};
use ds_ui::{Theme, UiState};
use eframe::egui::{self, Context};
use tracing::info;

/// Main application state
struct DashboardApp {
    /// Shell state shared with every component
    app_state: AppState,

    /// Frame-to-frame UI state
    ui_state: UiState,
}

impl DashboardApp {
    fn new(cc: &eframe::CreationContext<'_>, settings: AppSettings) -> Self {
        ds_ui::apply_theme(&cc.egui_ctx, &Theme::from_settings(&settings));

        let app_state = AppState::new(settings, Utc::now());

        app_state.event_bus.subscribe(|created: &events::WidgetCreated| {
            info!(
                dashboard = %created.dashboard,
                title = %created.config.title,
                "widget added to dashboard"
            );
        });
        app_state.event_bus.subscribe(|applied: &events::FiltersApplied| {
            info!(summary = %applied.summary, "dashboard filters changed");
        });

        Self {
            app_state,
            ui_state: UiState::default(),
        }
    }
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        // Finish simulated KPI refreshes; keep repainting while one is pending
        if self.app_state.tick(Utc::now()) {
            ctx.request_repaint_after(Duration::from_millis(100));
        }

        ds_ui::dashboard_header(ctx, &mut self.app_state, &mut self.ui_state);
        ds_ui::filter_panel::filter_panel(ctx, &mut self.app_state);
        ds_ui::central_panel(ctx, &mut self.app_state, &mut self.ui_state);
        ds_ui::modals(ctx, &mut self.app_state, &mut self.ui_state);

        // "Updated N minutes ago" captions
        ctx.request_repaint_after(Duration::from_secs(30));
    }
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let settings = AppSettings::load();
    info!(dark_mode = settings.dark_mode, "Starting dashboard shell");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 860.0])
            .with_min_inner_size([720.0, 560.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Analytics Dashboard",
        options,
        Box::new(move |cc| Box::new(DashboardApp::new(cc, settings))),
    )
    .map_err(|e| anyhow::anyhow!("Failed to run app: {}", e))?;

    Ok(())
}
