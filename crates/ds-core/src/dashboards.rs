//! Tab-based dashboard container state

use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::wizard::WidgetConfig;
use crate::ShellError;

/// Unique identifier for a dashboard tab
pub type DashboardId = Uuid;

/// Header subtitle for dashboards without a dedicated one
pub const DEFAULT_DESCRIPTION: &str = "Analyze your key business metrics";

/// Starting layout offered by the "Create New Dashboard" modal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DashboardTemplate {
    #[default]
    Blank,
    Sales,
    Client,
    Rep,
}

impl DashboardTemplate {
    pub const ALL: [DashboardTemplate; 4] = [
        DashboardTemplate::Blank,
        DashboardTemplate::Sales,
        DashboardTemplate::Client,
        DashboardTemplate::Rep,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            DashboardTemplate::Blank => "Blank Dashboard",
            DashboardTemplate::Sales => "Sales Dashboard",
            DashboardTemplate::Client => "Client Dashboard",
            DashboardTemplate::Rep => "Rep Performance",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            DashboardTemplate::Blank => "Start from scratch with an empty dashboard",
            DashboardTemplate::Sales => "Pre-configured with sales metrics and charts",
            DashboardTemplate::Client => "Track client relationships and engagement",
            DashboardTemplate::Rep => "Monitor individual sales rep performance",
        }
    }
}

/// One dashboard tab
#[derive(Debug, Clone, PartialEq)]
pub struct Dashboard {
    pub id: DashboardId,
    pub name: String,
    /// Subtitle shown under the header
    pub description: String,
    pub template: DashboardTemplate,
    /// Widgets authored through the wizard
    pub widgets: Vec<WidgetConfig>,
}

impl Dashboard {
    fn new(name: impl Into<String>, description: impl Into<String>, template: DashboardTemplate) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            description: description.into(),
            template,
            widgets: Vec::new(),
        }
    }
}

/// Ordered set of dashboard tabs with exactly one active tab
#[derive(Debug, Clone)]
pub struct Dashboards {
    tabs: Vec<Dashboard>,
    active: DashboardId,
}

impl Default for Dashboards {
    fn default() -> Self {
        let tabs = vec![
            Dashboard::new("Sales Dashboard", "Track your field sales performance", DashboardTemplate::Sales),
            Dashboard::new("Rep DB", "Monitor individual sales representative performance", DashboardTemplate::Rep),
            Dashboard::new("Client Dashboard", "Track client relationships and engagement", DashboardTemplate::Client),
            Dashboard::new("Product Analytics", DEFAULT_DESCRIPTION, DashboardTemplate::Blank),
            Dashboard::new("Team Performance", DEFAULT_DESCRIPTION, DashboardTemplate::Blank),
        ];
        let active = tabs[0].id;
        Self { tabs, active }
    }
}

impl Dashboards {
    pub fn iter(&self) -> impl Iterator<Item = &Dashboard> {
        self.tabs.iter()
    }

    pub fn len(&self) -> usize {
        self.tabs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }

    pub fn get(&self, id: DashboardId) -> Option<&Dashboard> {
        self.tabs.iter().find(|d| d.id == id)
    }

    pub fn active_id(&self) -> DashboardId {
        self.active
    }

    pub fn active(&self) -> Option<&Dashboard> {
        self.get(self.active)
    }

    /// Whether the delete action is available
    pub fn can_remove(&self) -> bool {
        self.tabs.len() > 1
    }

    /// Append a dashboard and make it active
    pub fn add(&mut self, name: &str, template: DashboardTemplate) -> Result<DashboardId, ShellError> {
        let name = non_empty(name)?;
        let description = match template {
            DashboardTemplate::Blank => DEFAULT_DESCRIPTION,
            other => other.description(),
        };
        let dashboard = Dashboard::new(name, description, template);
        let id = dashboard.id;

        info!(%id, name, ?template, "dashboard added");
        self.tabs.push(dashboard);
        self.active = id;
        Ok(id)
    }

    pub fn rename(&mut self, id: DashboardId, name: &str) -> Result<(), ShellError> {
        let name = non_empty(name)?;
        let dashboard = self
            .tabs
            .iter_mut()
            .find(|d| d.id == id)
            .ok_or(ShellError::UnknownDashboard(id))?;

        info!(%id, from = %dashboard.name, to = name, "dashboard renamed");
        dashboard.name = name.to_string();
        Ok(())
    }

    /// Delete a dashboard; the last remaining one cannot be deleted.
    /// Deleting the active tab activates the first remaining one.
    pub fn remove(&mut self, id: DashboardId) -> Result<(), ShellError> {
        if !self.can_remove() {
            return Err(ShellError::LastDashboard);
        }
        let index = self
            .tabs
            .iter()
            .position(|d| d.id == id)
            .ok_or(ShellError::UnknownDashboard(id))?;

        let removed = self.tabs.remove(index);
        info!(%id, name = %removed.name, "dashboard removed");

        if self.active == id {
            self.active = self.tabs[0].id;
        }
        Ok(())
    }

    pub fn select(&mut self, id: DashboardId) -> Result<(), ShellError> {
        if self.get(id).is_none() {
            return Err(ShellError::UnknownDashboard(id));
        }
        self.active = id;
        Ok(())
    }

    /// Put a finished widget on the active dashboard if it asked to be shown
    pub fn attach_widget(&mut self, config: WidgetConfig) -> Option<DashboardId> {
        if !config.show_in_dashboard {
            return None;
        }
        let active = self.active;
        let dashboard = self.tabs.iter_mut().find(|d| d.id == active)?;
        dashboard.widgets.push(config);
        Some(active)
    }
}

fn non_empty(name: &str) -> Result<&str, ShellError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        Err(ShellError::EmptyName)
    } else {
        Ok(trimmed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_tabs() {
        let dashboards = Dashboards::default();
        let names: Vec<&str> = dashboards.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["Sales Dashboard", "Rep DB", "Client Dashboard", "Product Analytics", "Team Performance"]
        );
        assert_eq!(dashboards.active().map(|d| d.name.as_str()), Some("Sales Dashboard"));
    }

    #[test]
    fn test_add_trims_and_activates() {
        let mut dashboards = Dashboards::default();
        let id = dashboards.add("  Q4 Sales Overview ", DashboardTemplate::Blank).unwrap();

        let active = dashboards.active().unwrap();
        assert_eq!(active.id, id);
        assert_eq!(active.name, "Q4 Sales Overview");
        assert_eq!(active.description, DEFAULT_DESCRIPTION);
        assert_eq!(dashboards.len(), 6);
    }

    #[test]
    fn test_empty_names_rejected() {
        let mut dashboards = Dashboards::default();
        assert!(matches!(dashboards.add("   ", DashboardTemplate::Sales), Err(ShellError::EmptyName)));

        let id = dashboards.active_id();
        assert!(matches!(dashboards.rename(id, ""), Err(ShellError::EmptyName)));
        assert_eq!(dashboards.active().unwrap().name, "Sales Dashboard");

        dashboards.rename(id, " Field Sales ").unwrap();
        assert_eq!(dashboards.active().unwrap().name, "Field Sales");
    }

    #[test]
    fn test_remove_active_falls_back_to_first() {
        let mut dashboards = Dashboards::default();
        let first = dashboards.active_id();
        let third = dashboards.iter().nth(2).unwrap().id;

        dashboards.select(third).unwrap();
        dashboards.remove(third).unwrap();
        assert_eq!(dashboards.active_id(), first);

        dashboards.remove(first).unwrap();
        let new_first = dashboards.iter().next().unwrap().id;
        assert_eq!(dashboards.active_id(), new_first);
    }

    #[test]
    fn test_last_dashboard_cannot_be_removed() {
        let mut dashboards = Dashboards::default();
        while dashboards.can_remove() {
            let id = dashboards.active_id();
            dashboards.remove(id).unwrap();
        }
        let last = dashboards.active_id();
        assert!(matches!(dashboards.remove(last), Err(ShellError::LastDashboard)));
        assert_eq!(dashboards.len(), 1);
    }

    #[test]
    fn test_unknown_ids() {
        let mut dashboards = Dashboards::default();
        let stranger = Uuid::new_v4();
        assert!(matches!(dashboards.select(stranger), Err(ShellError::UnknownDashboard(_))));
        assert!(matches!(dashboards.remove(stranger), Err(ShellError::UnknownDashboard(_))));
    }

    #[test]
    fn test_attach_widget_respects_visibility() {
        let mut dashboards = Dashboards::default();
        let mut config = WidgetConfig { title: "Win rate".to_string(), ..Default::default() };

        assert_eq!(dashboards.attach_widget(config.clone()), Some(dashboards.active_id()));
        config.show_in_dashboard = false;
        assert_eq!(dashboards.attach_widget(config), None);

        assert_eq!(dashboards.active().unwrap().widgets.len(), 1);
    }
}
