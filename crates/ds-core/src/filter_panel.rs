//! Right-hand filter side panel

use crate::wizard::reference;

/// Look-back window choices
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateWindow {
    Last7Days,
    #[default]
    Last30Days,
    Last3Months,
    Last12Months,
    Custom,
}

impl DateWindow {
    pub const ALL: [DateWindow; 5] = [
        DateWindow::Last7Days,
        DateWindow::Last30Days,
        DateWindow::Last3Months,
        DateWindow::Last12Months,
        DateWindow::Custom,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            DateWindow::Last7Days => "Last 7 days",
            DateWindow::Last30Days => "Last 30 days",
            DateWindow::Last3Months => "Last 3 months",
            DateWindow::Last12Months => "Last 12 months",
            DateWindow::Custom => "Custom range",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClientStatus {
    Active,
    Inactive,
    Pending,
    Churned,
}

impl ClientStatus {
    pub const ALL: [ClientStatus; 4] = [
        ClientStatus::Active,
        ClientStatus::Inactive,
        ClientStatus::Pending,
        ClientStatus::Churned,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ClientStatus::Active => "Active",
            ClientStatus::Inactive => "Inactive",
            ClientStatus::Pending => "Pending",
            ClientStatus::Churned => "Churned",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DealSize {
    #[default]
    All,
    Small,
    Medium,
    Large,
}

impl DealSize {
    pub const ALL: [DealSize; 4] = [DealSize::All, DealSize::Small, DealSize::Medium, DealSize::Large];

    pub fn label(&self) -> &'static str {
        match self {
            DealSize::All => "All Sizes",
            DealSize::Small => "Small ($0 - $10k)",
            DealSize::Medium => "Medium ($10k - $50k)",
            DealSize::Large => "Large ($50k+)",
        }
    }
}

/// Regions offered by the panel; a subset of the wizard's reference list
pub const PANEL_REGIONS: &[&str] = &[
    "North America",
    "Europe",
    "Asia Pacific",
    "Latin America",
];

/// Side panel selections. `None` region or rep means "all".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterPanelState {
    pub open: bool,
    pub date_window: DateWindow,
    pub region: Option<&'static str>,
    pub sales_rep: Option<&'static str>,
    pub client_statuses: Vec<ClientStatus>,
    pub deal_size: DealSize,
}

impl Default for FilterPanelState {
    fn default() -> Self {
        Self {
            open: false,
            date_window: DateWindow::default(),
            region: None,
            sales_rep: None,
            client_statuses: vec![ClientStatus::Active],
            deal_size: DealSize::default(),
        }
    }
}

impl FilterPanelState {
    /// Reps offered by the panel
    pub fn sales_reps() -> &'static [&'static str] {
        &reference::REPRESENTATIVES[..4]
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn is_status_checked(&self, status: ClientStatus) -> bool {
        self.client_statuses.contains(&status)
    }

    pub fn set_status(&mut self, status: ClientStatus, checked: bool) {
        let present = self.is_status_checked(status);
        if checked && !present {
            self.client_statuses.push(status);
        } else if !checked && present {
            self.client_statuses.retain(|s| *s != status);
        }
    }

    /// Restore defaults, keeping the panel open
    pub fn reset(&mut self) {
        *self = Self {
            open: self.open,
            ..Self::default()
        };
    }

    /// One-line description of the selections
    pub fn summary(&self) -> String {
        let statuses: Vec<&str> = self.client_statuses.iter().map(|s| s.label()).collect();
        format!(
            "{}; region: {}; rep: {}; status: {}; deal size: {}",
            self.date_window.label(),
            self.region.unwrap_or("All Regions"),
            self.sales_rep.unwrap_or("All Reps"),
            if statuses.is_empty() { "none".to_string() } else { statuses.join(", ") },
            self.deal_size.label()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let panel = FilterPanelState::default();
        assert!(!panel.open);
        assert_eq!(panel.client_statuses, vec![ClientStatus::Active]);
        assert_eq!(FilterPanelState::sales_reps().len(), 4);
    }

    #[test]
    fn test_reset_keeps_visibility() {
        let mut panel = FilterPanelState::default();
        panel.toggle();
        panel.region = Some("Europe");
        panel.deal_size = DealSize::Large;
        panel.set_status(ClientStatus::Churned, true);
        panel.set_status(ClientStatus::Active, false);

        panel.reset();
        assert!(panel.open);
        assert_eq!(panel.region, None);
        assert_eq!(panel.deal_size, DealSize::All);
        assert_eq!(panel.client_statuses, vec![ClientStatus::Active]);
    }

    #[test]
    fn test_summary() {
        let mut panel = FilterPanelState::default();
        panel.sales_rep = Some("Emma Davis");
        assert_eq!(
            panel.summary(),
            "Last 30 days; region: All Regions; rep: Emma Davis; status: Active; deal size: All Sizes"
        );
    }
}
