//! User interface components for the dashboard shell
//!
//! This crate renders the shell with egui: dashboard tabs, KPI cards, chart
//! placeholders, the filter side panel and the widget library and wizard
//! modals. All state lives in [`ds_core::AppState`] and [`UiState`].

pub mod add_dashboard;
pub mod charts;
pub mod filter_panel;
pub mod kpi_card;
pub mod library;
pub mod preview;
pub mod selectors;
pub mod shell;
pub mod tabs;
pub mod theme;
pub mod widget_utils;
pub mod wizard;

use std::time::Instant;

use ds_core::{DashboardId, DashboardTemplate};

/// Re-export commonly used types
pub use shell::{central_panel, dashboard_header, modals};
pub use theme::{apply_theme, Theme};
pub use widget_utils::{GridExt, WidgetId};

/// UI-only state that persists across frames
#[derive(Default)]
pub struct UiState {
    /// Tab currently being renamed in place
    pub editing_tab: Option<TabEdit>,

    /// Inputs of the "Create New Dashboard" modal
    pub new_dashboard: NewDashboardDraft,

    /// Inputs of the custom date range picker
    pub custom_range: CustomRangeDraft,

    /// Error messages to display
    pub error_messages: Vec<ErrorMessage>,
}

impl UiState {
    /// Queue a message for the banner area
    pub fn report(&mut self, title: impl Into<String>, err: impl std::fmt::Display) {
        let title = title.into();
        tracing::warn!("{}: {}", title, err);
        self.error_messages.push(ErrorMessage {
            title,
            message: err.to_string(),
            timestamp: Instant::now(),
        });
    }
}

/// In-place rename of a dashboard tab
pub struct TabEdit {
    pub id: DashboardId,
    pub value: String,
}

/// Draft for a new dashboard
#[derive(Default)]
pub struct NewDashboardDraft {
    pub name: String,
    pub template: DashboardTemplate,
}

/// Draft for a custom date range
#[derive(Default)]
pub struct CustomRangeDraft {
    pub picking: bool,
    pub start: String,
    pub end: String,
}

/// Error message to display
pub struct ErrorMessage {
    pub title: String,
    pub message: String,
    pub timestamp: Instant,
}

// Common icon definitions
pub mod icons {
    pub const PLUS: &str = "➕";
    pub const CLOSE: &str = "✖";
    pub const MENU: &str = "⋮";
    pub const FILTER: &str = "🔍";
    pub const SLIDERS: &str = "☰";
    pub const REFRESH: &str = "🔄";
    pub const DOWNLOAD: &str = "💾";
    pub const INFO: &str = "ℹ";
    pub const CALENDAR: &str = "📅";
    pub const CHART: &str = "📊";
    pub const CHECK: &str = "✔";
    pub const BACK: &str = "⏴";
    pub const NEXT: &str = "⏵";
    pub const TREND_UP: &str = "⬈";
    pub const TREND_DOWN: &str = "⬊";
    pub const SETTINGS: &str = "⚙";
    pub const SEARCH: &str = "🔎";
}
