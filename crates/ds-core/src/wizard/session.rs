//! A single in-flight wizard session: current step plus the draft

use tracing::{debug, info};

use super::{
    metric_label, FilterField, StepUpdate, WidgetConfig, WizardConfigReducer, WizardStep,
};

/// How a step is drawn in the progress indicator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepStatus {
    Completed,
    Current,
    Upcoming,
}

/// Wizard session state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WizardSession {
    step: WizardStep,
    reducer: WizardConfigReducer,
}

impl Default for WizardSession {
    fn default() -> Self {
        Self {
            step: WizardStep::FIRST,
            reducer: WizardConfigReducer::new(),
        }
    }
}

impl WizardSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn config(&self) -> &WidgetConfig {
        self.reducer.config()
    }

    pub fn reducer(&self) -> &WizardConfigReducer {
        &self.reducer
    }

    pub fn apply(&mut self, update: StepUpdate) {
        self.reducer.apply(update);
    }

    pub fn toggle_filter(&mut self, field: FilterField, value: &str) {
        self.reducer.toggle_filter(field, value);
    }

    /// Whether the "Next" control is enabled
    pub fn can_advance(&self) -> bool {
        self.step != WizardStep::LAST && self.reducer.is_step_valid(self.step)
    }

    pub fn can_retreat(&self) -> bool {
        self.step != WizardStep::FIRST
    }

    /// Move forward if the current step's gate is open
    pub fn next(&mut self) -> WizardStep {
        let next = self.reducer.advance(self.step);
        if next != self.step {
            debug!(from = self.step.index(), to = next.index(), "wizard advanced");
        }
        self.step = next;
        self.step
    }

    /// Move back one step; entered data is kept
    pub fn back(&mut self) -> WizardStep {
        self.step = self.reducer.retreat(self.step);
        self.step
    }

    pub fn step_status(&self, step: WizardStep) -> StepStatus {
        match step.cmp(&self.step) {
            std::cmp::Ordering::Less => StepStatus::Completed,
            std::cmp::Ordering::Equal => StepStatus::Current,
            std::cmp::Ordering::Greater => StepStatus::Upcoming,
        }
    }

    /// Footer text between the navigation buttons
    pub fn progress_label(&self) -> String {
        if self.step == WizardStep::LAST {
            "Review your configuration".to_string()
        } else {
            format!(
                "{} of {} steps completed",
                self.step.index(),
                WizardStep::LAST.index() - 1
            )
        }
    }

    /// Header text, e.g. "Step 2 of 5: Visualization"
    pub fn heading(&self) -> String {
        format!(
            "Step {} of {}: {}",
            self.step.index(),
            WizardStep::LAST.index(),
            self.step.title()
        )
    }

    /// Hand off the finished widget and reset the session.
    ///
    /// Yields nothing unless the session is on the review step.
    pub fn finish(&mut self) -> Option<WidgetConfig> {
        if self.step != WizardStep::LAST {
            return None;
        }
        let config = self.reducer.complete();
        info!(title = %config.title, "widget configuration completed");
        *self = Self::default();
        Some(config)
    }

    /// Abandon the draft
    pub fn cancel(&mut self) {
        debug!(step = self.step.index(), "wizard cancelled");
        *self = Self::default();
    }

    pub fn summary(&self) -> WizardSummary<'_> {
        WizardSummary {
            config: self.reducer.config(),
        }
    }
}

/// Display labels for the review step
pub struct WizardSummary<'a> {
    config: &'a WidgetConfig,
}

impl<'a> WizardSummary<'a> {
    pub fn data_source(&self) -> &'static str {
        self.config.data_source.map(|s| s.label()).unwrap_or("")
    }

    pub fn metric(&self) -> &'a str {
        metric_label(&self.config.metric)
    }

    pub fn visualization(&self) -> &'static str {
        self.config
            .visualization_type
            .map(|v| v.label())
            .unwrap_or("")
    }

    pub fn group_by(&self) -> &'static str {
        self.config.group_by.label()
    }

    pub fn has_active_filters(&self) -> bool {
        self.config.filters.has_active_filters()
    }

    /// Non-empty filter sets in display order
    pub fn active_filters(&self) -> Vec<(FilterField, &'a [String])> {
        let filters = &self.config.filters;
        FilterField::ALL
            .iter()
            .map(|field| {
                let values: &'a [String] = match field {
                    FilterField::Representatives => &filters.representatives,
                    FilterField::Clients => &filters.clients,
                    FilterField::ProductBrand => &filters.product_brand,
                    FilterField::Region => &filters.region,
                };
                (*field, values)
            })
            .filter(|(_, values)| !values.is_empty())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wizard::{DataSourceKind, DisplayFields, SourceFields, VisualizationFields, VisualizationType};

    fn walk_to_review(session: &mut WizardSession) {
        session.apply(StepUpdate::Source(SourceFields {
            data_source: Some(DataSourceKind::Clients),
            metric: None,
        }));
        session.apply(StepUpdate::Source(SourceFields {
            data_source: None,
            metric: Some("churn_rate".to_string()),
        }));
        session.next();
        session.apply(StepUpdate::Visualization(VisualizationFields {
            visualization_type: Some(VisualizationType::Bar),
        }));
        session.next();
        session.next();
        session.apply(StepUpdate::Display(DisplayFields {
            title: Some("Churn by region".to_string()),
            ..Default::default()
        }));
        session.next();
    }

    #[test]
    fn test_next_is_gated() {
        let mut session = WizardSession::new();
        assert!(!session.can_advance());
        assert_eq!(session.next(), WizardStep::DataSource);
        assert!(!session.can_retreat());
    }

    #[test]
    fn test_full_walk_and_finish() {
        let mut session = WizardSession::new();
        walk_to_review(&mut session);
        assert_eq!(session.step(), WizardStep::Review);
        assert!(!session.can_advance());
        assert_eq!(session.progress_label(), "Review your configuration");

        let config = session.finish().expect("review step yields config");
        assert_eq!(config.metric, "churn_rate");
        assert_eq!(config.title, "Churn by region");

        assert_eq!(session, WizardSession::new());
    }

    #[test]
    fn test_finish_outside_review_yields_nothing() {
        let mut session = WizardSession::new();
        assert!(session.finish().is_none());
    }

    #[test]
    fn test_back_keeps_entered_data() {
        let mut session = WizardSession::new();
        walk_to_review(&mut session);
        let before = session.config().clone();

        while session.can_retreat() {
            session.back();
        }
        assert_eq!(session.step(), WizardStep::DataSource);
        assert_eq!(session.config(), &before);

        for _ in 0..4 {
            session.next();
        }
        assert_eq!(session.step(), WizardStep::Review);
    }

    #[test]
    fn test_cancel_resets() {
        let mut session = WizardSession::new();
        walk_to_review(&mut session);
        session.cancel();
        assert_eq!(session.step(), WizardStep::DataSource);
        assert_eq!(session.config(), &WidgetConfig::default());
    }

    #[test]
    fn test_progress_indicator() {
        let mut session = WizardSession::new();
        walk_to_review(&mut session);
        session.back();
        session.back();

        assert_eq!(session.step_status(WizardStep::DataSource), StepStatus::Completed);
        assert_eq!(session.step_status(WizardStep::Filters), StepStatus::Current);
        assert_eq!(session.step_status(WizardStep::Review), StepStatus::Upcoming);
        assert_eq!(session.progress_label(), "3 of 4 steps completed");
        assert_eq!(session.heading(), "Step 3 of 5: Filters");
    }

    #[test]
    fn test_summary_labels() {
        let mut session = WizardSession::new();
        walk_to_review(&mut session);
        session.toggle_filter(FilterField::Region, "Europe");

        let summary = session.summary();
        assert_eq!(summary.data_source(), "Client Data");
        assert_eq!(summary.metric(), "Churn Rate");
        assert_eq!(summary.visualization(), "Bar Chart");
        assert_eq!(summary.group_by(), "No Grouping");
        assert!(summary.has_active_filters());

        let active = summary.active_filters();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].0, FilterField::Region);
    }
}
