use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::info;

use crate::catalog::WidgetCatalogView;
use crate::dashboards::{DashboardId, DashboardTemplate, Dashboards};
use crate::events::{events, EventBus};
use crate::filter_panel::FilterPanelState;
use crate::kpi::KpiCard;
use crate::period::{Cycle, DateRangeSelection};
use crate::settings::AppSettings;
use crate::wizard::{WidgetConfig, WizardSession};
use crate::ShellError;

/// Which modal, if any, covers the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Modal {
    #[default]
    None,
    WidgetLibrary,
    WidgetWizard,
    AddDashboard,
}

/// The shell's application state, owned by the top-level app and passed to
/// every component explicitly
pub struct AppState {
    /// Dashboard tabs
    pub dashboards: Dashboards,

    /// The event bus
    pub event_bus: Arc<EventBus>,

    /// Application settings
    pub settings: AppSettings,

    /// Visible modal
    pub modal: Modal,

    /// Widget library view
    pub library: WidgetCatalogView<'static>,

    /// The single in-flight wizard session
    pub wizard: WizardSession,

    /// Side panel selections
    pub filter_panel: FilterPanelState,

    /// Range applied to cards and charts
    pub date_range: DateRangeSelection,

    /// Sales trend aggregation
    pub cycle: Cycle,

    /// Top-row KPI cards
    pub kpis: Vec<KpiCard>,
}

impl AppState {
    /// Create a new application state
    pub fn new(settings: AppSettings, now: DateTime<Utc>) -> Self {
        let filter_panel = FilterPanelState {
            open: settings.filter_panel_open,
            ..FilterPanelState::default()
        };

        Self {
            dashboards: Dashboards::default(),
            event_bus: Arc::new(EventBus::new()),
            modal: Modal::None,
            library: WidgetCatalogView::default(),
            wizard: WizardSession::new(),
            filter_panel,
            date_range: DateRangeSelection::new(settings.default_date_range),
            cycle: settings.default_cycle,
            kpis: KpiCard::defaults(now),
            settings,
        }
    }

    pub fn open_library(&mut self) {
        self.library.reset();
        self.modal = Modal::WidgetLibrary;
    }

    /// "Configure" on a library card: close the library and start a fresh
    /// wizard session
    pub fn configure_from_library(&mut self) {
        self.wizard.cancel();
        self.modal = Modal::WidgetWizard;
    }

    pub fn open_wizard(&mut self) {
        self.modal = Modal::WidgetWizard;
    }

    /// Close the wizard, discarding the draft
    pub fn cancel_wizard(&mut self) {
        self.wizard.cancel();
        self.modal = Modal::None;
    }

    /// Finish the wizard session and hand the widget to the active dashboard
    pub fn finish_wizard(&mut self) -> Option<WidgetConfig> {
        let config = self.wizard.finish()?;
        self.modal = Modal::None;

        let dashboard = self.dashboards.active_id();
        self.dashboards.attach_widget(config.clone());
        info!(%dashboard, title = %config.title, "widget created");

        self.event_bus.publish(events::WidgetCreated {
            dashboard,
            config: config.clone(),
        });
        Some(config)
    }

    pub fn add_dashboard(&mut self, name: &str, template: DashboardTemplate) -> Result<DashboardId, ShellError> {
        let id = self.dashboards.add(name, template)?;
        let name = self.dashboards.get(id).map(|d| d.name.clone()).unwrap_or_default();
        self.modal = Modal::None;
        self.event_bus.publish(events::DashboardAdded { id, name });
        Ok(id)
    }

    pub fn rename_dashboard(&mut self, id: DashboardId, name: &str) -> Result<(), ShellError> {
        self.dashboards.rename(id, name)?;
        let name = self.dashboards.get(id).map(|d| d.name.clone()).unwrap_or_default();
        self.event_bus.publish(events::DashboardRenamed { id, name });
        Ok(())
    }

    pub fn remove_dashboard(&mut self, id: DashboardId) -> Result<(), ShellError> {
        self.dashboards.remove(id)?;
        self.event_bus.publish(events::DashboardRemoved { id });
        Ok(())
    }

    pub fn select_dashboard(&mut self, id: DashboardId) -> Result<(), ShellError> {
        if self.dashboards.active_id() == id {
            return Ok(());
        }
        self.dashboards.select(id)?;
        self.event_bus.publish(events::DashboardSelected { id });
        Ok(())
    }

    pub fn apply_filters(&mut self) {
        let summary = self.filter_panel.summary();
        info!(%summary, "filters applied");
        self.event_bus.publish(events::FiltersApplied { summary });
    }

    /// Advance simulated KPI refreshes; returns true while any is pending
    pub fn tick(&mut self, now: DateTime<Utc>) -> bool {
        let delay = self.settings.kpi_refresh_delay();
        for card in &mut self.kpis {
            card.poll_refresh(now, delay);
        }
        self.kpis.iter().any(|card| card.is_refreshing())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wizard::{DataSourceKind, DisplayFields, SourceFields, StepUpdate, VisualizationFields, VisualizationType};
    use parking_lot::Mutex;

    fn state() -> AppState {
        AppState::new(AppSettings::default(), Utc::now())
    }

    #[test]
    fn test_library_to_wizard_to_dashboard() {
        let mut state = state();
        let created = Arc::new(Mutex::new(Vec::new()));
        let sink = created.clone();
        state.event_bus.subscribe(move |e: &events::WidgetCreated| {
            sink.lock().push(e.config.title.clone());
        });

        state.open_library();
        assert_eq!(state.modal, Modal::WidgetLibrary);
        state.configure_from_library();
        assert_eq!(state.modal, Modal::WidgetWizard);

        // Nothing to hand off before the review step
        assert!(state.finish_wizard().is_none());

        state.wizard.apply(StepUpdate::Source(SourceFields {
            data_source: Some(DataSourceKind::Sales),
            metric: None,
        }));
        state.wizard.apply(StepUpdate::Source(SourceFields {
            data_source: None,
            metric: Some("total_revenue".to_string()),
        }));
        state.wizard.next();
        state.wizard.apply(StepUpdate::Visualization(VisualizationFields {
            visualization_type: Some(VisualizationType::Number),
        }));
        state.wizard.next();
        state.wizard.next();
        state.wizard.apply(StepUpdate::Display(DisplayFields {
            title: Some("Revenue".to_string()),
            ..Default::default()
        }));
        state.wizard.next();

        let config = state.finish_wizard().unwrap();
        assert_eq!(config.title, "Revenue");
        assert_eq!(state.modal, Modal::None);
        assert_eq!(state.dashboards.active().unwrap().widgets.len(), 1);
        assert_eq!(*created.lock(), vec!["Revenue".to_string()]);
    }

    #[test]
    fn test_cancel_wizard_discards_draft() {
        let mut state = state();
        state.open_wizard();
        state.wizard.apply(StepUpdate::Source(SourceFields {
            data_source: Some(DataSourceKind::Products),
            metric: None,
        }));
        state.cancel_wizard();
        assert_eq!(state.modal, Modal::None);
        assert_eq!(state.wizard.config(), &WidgetConfig::default());
    }

    #[test]
    fn test_dashboard_operations_publish() {
        let mut state = state();
        let seen = Arc::new(Mutex::new(0usize));
        for _ in 0..2 {
            let counter = seen.clone();
            state.event_bus.subscribe(move |_: &events::DashboardAdded| {
                *counter.lock() += 1;
            });
        }

        state.modal = Modal::AddDashboard;
        let id = state.add_dashboard("Regional", DashboardTemplate::Sales).unwrap();
        assert_eq!(state.modal, Modal::None);
        assert_eq!(*seen.lock(), 2);
        assert_eq!(state.dashboards.active_id(), id);

        assert!(state.add_dashboard(" ", DashboardTemplate::Blank).is_err());
        assert_eq!(*seen.lock(), 2);
    }

    #[test]
    fn test_tick_finishes_refresh() {
        let start = Utc::now();
        let mut state = AppState::new(AppSettings::default(), start);
        state.kpis[0].begin_refresh(start);
        assert!(state.tick(start));
        assert!(!state.tick(start + chrono::Duration::seconds(2)));
    }

    #[test]
    fn test_settings_seed_state() {
        let settings = AppSettings {
            filter_panel_open: true,
            default_cycle: Cycle::Yearly,
            ..AppSettings::default()
        };
        let state = AppState::new(settings, Utc::now());
        assert!(state.filter_panel.open);
        assert_eq!(state.cycle, Cycle::Yearly);
    }
}
