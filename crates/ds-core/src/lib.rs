//! Core state for the analytics dashboard shell
//!
//! This crate holds the UI-independent logic: the widget configuration
//! wizard, the widget library view, dashboard tabs, KPI cards and the
//! surrounding application state.

pub mod catalog;
pub mod dashboards;
pub mod events;
pub mod filter_panel;
pub mod kpi;
pub mod period;
pub mod settings;
pub mod state;
pub mod wizard;

use std::path::PathBuf;

use thiserror::Error;

// Re-export commonly used types
pub use catalog::{project, CatalogQuery, Category, CategoryFilter, PreviewType, SortBy, WidgetCatalogView, WidgetDescriptor, WIDGET_CATALOG};
pub use dashboards::{Dashboard, DashboardId, DashboardTemplate, Dashboards};
pub use events::{Event, EventBus};
pub use settings::AppSettings;
pub use state::{AppState, Modal};
pub use wizard::{WidgetConfig, WizardConfigReducer, WizardSession, WizardStep, StepUpdate};

/// Errors raised by shell operations
#[derive(Error, Debug)]
pub enum ShellError {
    #[error("dashboard name must not be empty")]
    EmptyName,

    #[error("no dashboard with id {0}")]
    UnknownDashboard(DashboardId),

    #[error("the last dashboard cannot be deleted")]
    LastDashboard,

    #[error("failed to read settings from {}: {source}", .path.display())]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid settings in {}: {source}", .path.display())]
    ConfigParse {
        path: PathBuf,
        source: serde_json::Error,
    },
}
