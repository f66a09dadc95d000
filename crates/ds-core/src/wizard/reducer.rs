//! Step-scoped updates and validity gates over a [`WidgetConfig`]

use tracing::debug;

use super::{DataSourceKind, GroupBy, VisualizationType, WidgetConfig, WizardStep};

/// Fields written by the data source step. `None` leaves a field untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceFields {
    pub data_source: Option<DataSourceKind>,
    pub metric: Option<String>,
}

/// Fields written by the visualization step
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VisualizationFields {
    pub visualization_type: Option<VisualizationType>,
}

/// Fields written by the filters step
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterFields {
    pub representatives: Option<Vec<String>>,
    pub clients: Option<Vec<String>>,
    pub product_brand: Option<Vec<String>>,
    pub region: Option<Vec<String>>,
    pub date_range: Option<String>,
    pub group_by: Option<GroupBy>,
}

/// Fields written by the display step
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DisplayFields {
    pub title: Option<String>,
    pub color_accent: Option<String>,
    pub share_with_team: Option<bool>,
    pub show_in_dashboard: Option<bool>,
}

/// A partial update scoped to one editable step
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepUpdate {
    Source(SourceFields),
    Visualization(VisualizationFields),
    Filters(FilterFields),
    Display(DisplayFields),
}

impl StepUpdate {
    /// The step whose fields this update writes
    pub fn step(&self) -> WizardStep {
        match self {
            StepUpdate::Source(_) => WizardStep::DataSource,
            StepUpdate::Visualization(_) => WizardStep::Visualization,
            StepUpdate::Filters(_) => WizardStep::Filters,
            StepUpdate::Display(_) => WizardStep::Display,
        }
    }
}

/// One of the four multi-select filter sets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterField {
    Representatives,
    Clients,
    ProductBrand,
    Region,
}

impl FilterField {
    pub const ALL: [FilterField; 4] = [
        FilterField::Representatives,
        FilterField::Clients,
        FilterField::ProductBrand,
        FilterField::Region,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            FilterField::Representatives => "Sales Representatives",
            FilterField::Clients => "Clients",
            FilterField::ProductBrand => "Product Brands",
            FilterField::Region => "Regions",
        }
    }

    /// Values the user may pick from
    pub fn options(&self) -> &'static [&'static str] {
        match self {
            FilterField::Representatives => super::reference::REPRESENTATIVES,
            FilterField::Clients => super::reference::CLIENTS,
            FilterField::ProductBrand => super::reference::PRODUCT_BRANDS,
            FilterField::Region => super::reference::REGIONS,
        }
    }
}

/// Pure state container for the widget being authored
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WizardConfigReducer {
    config: WidgetConfig,
}

impl WizardConfigReducer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current draft
    pub fn config(&self) -> &WidgetConfig {
        &self.config
    }

    /// Merge a step-scoped partial update into the draft.
    ///
    /// Switching the data source always clears the metric, including a metric
    /// supplied in the same update.
    pub fn apply(&mut self, update: StepUpdate) {
        let config = &mut self.config;
        match update {
            StepUpdate::Source(fields) => {
                let source_changed = matches!(
                    fields.data_source,
                    Some(source) if config.data_source != Some(source)
                );
                if source_changed {
                    config.data_source = fields.data_source;
                    config.metric.clear();
                } else if let Some(metric) = fields.metric {
                    config.metric = metric;
                }
            }
            StepUpdate::Visualization(fields) => {
                if let Some(kind) = fields.visualization_type {
                    config.visualization_type = Some(kind);
                }
            }
            StepUpdate::Filters(fields) => {
                let filters = &mut config.filters;
                if let Some(values) = fields.representatives {
                    filters.representatives = values;
                }
                if let Some(values) = fields.clients {
                    filters.clients = values;
                }
                if let Some(values) = fields.product_brand {
                    filters.product_brand = values;
                }
                if let Some(values) = fields.region {
                    filters.region = values;
                }
                if let Some(range) = fields.date_range {
                    filters.date_range = range;
                }
                if let Some(group_by) = fields.group_by {
                    config.group_by = group_by;
                }
            }
            StepUpdate::Display(fields) => {
                if let Some(title) = fields.title {
                    config.title = title;
                }
                if let Some(accent) = fields.color_accent {
                    config.color_accent = accent;
                }
                if let Some(share) = fields.share_with_team {
                    config.share_with_team = share;
                }
                if let Some(show) = fields.show_in_dashboard {
                    config.show_in_dashboard = show;
                }
            }
        }
    }

    /// Add `value` to a filter set when absent, remove it when present
    pub fn toggle_filter(&mut self, field: FilterField, value: &str) {
        let mut values = self.filter_values(field).to_vec();
        if let Some(pos) = values.iter().position(|v| v == value) {
            values.remove(pos);
        } else {
            values.push(value.to_string());
        }

        let mut fields = FilterFields::default();
        match field {
            FilterField::Representatives => fields.representatives = Some(values),
            FilterField::Clients => fields.clients = Some(values),
            FilterField::ProductBrand => fields.product_brand = Some(values),
            FilterField::Region => fields.region = Some(values),
        }
        self.apply(StepUpdate::Filters(fields));
    }

    pub fn filter_values(&self, field: FilterField) -> &[String] {
        let filters = &self.config.filters;
        match field {
            FilterField::Representatives => &filters.representatives,
            FilterField::Clients => &filters.clients,
            FilterField::ProductBrand => &filters.product_brand,
            FilterField::Region => &filters.region,
        }
    }

    /// Step gate: whether the user may move past `step`
    pub fn is_step_valid(&self, step: WizardStep) -> bool {
        let config = &self.config;
        match step {
            WizardStep::DataSource => match config.data_source {
                Some(source) => !config.metric.is_empty() && source.offers_metric(&config.metric),
                None => false,
            },
            WizardStep::Visualization => config.visualization_type.is_some(),
            WizardStep::Filters => true,
            WizardStep::Display => !config.title.trim().is_empty(),
            WizardStep::Review => true,
        }
    }

    /// The step after `current`, or `current` itself when its gate is closed
    pub fn advance(&self, current: WizardStep) -> WizardStep {
        if !self.is_step_valid(current) {
            debug!(step = current.index(), "advance blocked by step gate");
            return current;
        }
        current.following()
    }

    /// The step before `current`, clamped at the first step
    pub fn retreat(&self, current: WizardStep) -> WizardStep {
        current.preceding()
    }

    /// Snapshot of the finished widget.
    ///
    /// Does not re-validate; the `advance` gates keep incomplete drafts from
    /// reaching the review step.
    pub fn complete(&self) -> WidgetConfig {
        self.config.clone()
    }

    /// Drop the draft and start over from defaults
    pub fn reset(&mut self) {
        self.config = WidgetConfig::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source(data_source: Option<DataSourceKind>, metric: Option<&str>) -> StepUpdate {
        StepUpdate::Source(SourceFields {
            data_source,
            metric: metric.map(str::to_string),
        })
    }

    fn fully_valid() -> WizardConfigReducer {
        let mut reducer = WizardConfigReducer::new();
        reducer.apply(source(Some(DataSourceKind::Sales), None));
        reducer.apply(source(None, Some("total_revenue")));
        reducer.apply(StepUpdate::Visualization(VisualizationFields {
            visualization_type: Some(VisualizationType::Line),
        }));
        reducer.apply(StepUpdate::Display(DisplayFields {
            title: Some("Revenue".to_string()),
            ..Default::default()
        }));
        reducer
    }

    #[test]
    fn test_source_change_clears_metric() {
        let mut reducer = WizardConfigReducer::new();
        reducer.apply(source(Some(DataSourceKind::Sales), None));
        reducer.apply(source(None, Some("total_revenue")));
        assert_eq!(reducer.config().metric, "total_revenue");

        for next in [DataSourceKind::Clients, DataSourceKind::Products, DataSourceKind::Sales] {
            reducer.apply(source(None, Some(next.metrics()[0].id)));
            reducer.apply(source(Some(next), Some("stale")));
            assert_eq!(reducer.config().data_source, Some(next));
            assert_eq!(reducer.config().metric, "");
        }

        reducer.apply(source(Some(DataSourceKind::Performance), Some("team_quota")));
        assert_eq!(reducer.config().data_source, Some(DataSourceKind::Performance));
        assert_eq!(reducer.config().metric, "");
    }

    #[test]
    fn test_reselecting_same_source_keeps_metric() {
        let mut reducer = WizardConfigReducer::new();
        reducer.apply(source(Some(DataSourceKind::Sales), None));
        reducer.apply(source(None, Some("sales_growth")));
        reducer.apply(source(Some(DataSourceKind::Sales), None));
        assert_eq!(reducer.config().metric, "sales_growth");
    }

    #[test]
    fn test_step_one_gate() {
        let mut reducer = WizardConfigReducer::new();
        assert!(!reducer.is_step_valid(WizardStep::DataSource));

        reducer.apply(source(Some(DataSourceKind::Sales), None));
        assert!(!reducer.is_step_valid(WizardStep::DataSource));

        reducer.apply(source(None, Some("total_revenue")));
        assert!(reducer.is_step_valid(WizardStep::DataSource));
    }

    #[test]
    fn test_foreign_metric_is_invalid() {
        let mut reducer = WizardConfigReducer::new();
        reducer.apply(source(Some(DataSourceKind::Products), None));
        reducer.apply(source(None, Some("total_revenue")));
        assert_eq!(reducer.config().metric, "total_revenue");
        assert!(!reducer.is_step_valid(WizardStep::DataSource));
    }

    #[test]
    fn test_remaining_gates() {
        let mut reducer = WizardConfigReducer::new();
        assert!(!reducer.is_step_valid(WizardStep::Visualization));
        assert!(reducer.is_step_valid(WizardStep::Filters));
        assert!(!reducer.is_step_valid(WizardStep::Display));
        assert!(reducer.is_step_valid(WizardStep::Review));

        reducer.apply(StepUpdate::Display(DisplayFields {
            title: Some("   ".to_string()),
            ..Default::default()
        }));
        assert!(!reducer.is_step_valid(WizardStep::Display));

        reducer.apply(StepUpdate::Display(DisplayFields {
            title: Some(" Q4 ".to_string()),
            ..Default::default()
        }));
        assert!(reducer.is_step_valid(WizardStep::Display));
    }

    #[test]
    fn test_advance_blocked_when_invalid() {
        let reducer = WizardConfigReducer::new();
        for step in WizardStep::ALL {
            if !reducer.is_step_valid(step) {
                assert_eq!(reducer.advance(step), step);
            }
        }
        assert_eq!(reducer.advance(WizardStep::DataSource), WizardStep::DataSource);
        assert_eq!(reducer.advance(WizardStep::Filters), WizardStep::Display);

        // Source set, metric empty
        let mut reducer = fully_valid();
        reducer.apply(source(Some(DataSourceKind::Clients), None));
        assert_eq!(reducer.config().metric, "");
        assert_eq!(reducer.advance(WizardStep::DataSource), WizardStep::DataSource);

        // Source set, metric from another source
        let mut reducer = fully_valid();
        reducer.apply(source(Some(DataSourceKind::Performance), None));
        reducer.apply(source(None, Some("total_revenue")));
        let before = reducer.config().clone();
        assert_eq!(reducer.advance(WizardStep::DataSource), WizardStep::DataSource);
        assert_eq!(reducer.config(), &before);

        // Whitespace-only title
        let mut reducer = fully_valid();
        reducer.apply(StepUpdate::Display(DisplayFields {
            title: Some(" \t ".to_string()),
            ..Default::default()
        }));
        assert_eq!(reducer.advance(WizardStep::Display), WizardStep::Display);
        assert_eq!(reducer.advance(WizardStep::Filters), WizardStep::Display);
    }

    #[test]
    fn test_navigation_clamps_and_leaves_config_alone() {
        let reducer = fully_valid();
        let before = reducer.config().clone();

        let mut step = WizardStep::FIRST;
        for _ in 0..10 {
            step = reducer.advance(step);
        }
        assert_eq!(step, WizardStep::Review);

        for _ in 0..10 {
            step = reducer.retreat(step);
        }
        assert_eq!(step, WizardStep::DataSource);
        assert_eq!(reducer.config(), &before);
    }

    #[test]
    fn test_advance_then_retreat_is_identity() {
        let reducer = fully_valid();
        for step in &WizardStep::ALL[..4] {
            assert_eq!(reducer.retreat(reducer.advance(*step)), *step);
        }
    }

    #[test]
    fn test_updates_read_back_verbatim() {
        let mut reducer = WizardConfigReducer::new();
        reducer.apply(StepUpdate::Filters(FilterFields {
            representatives: Some(vec!["Emma Davis".to_string(), "John Smith".to_string()]),
            region: Some(vec!["Europe".to_string()]),
            date_range: Some("last_quarter".to_string()),
            group_by: Some(GroupBy::Region),
            ..Default::default()
        }));
        reducer.apply(StepUpdate::Display(DisplayFields {
            title: Some("  Padded title ".to_string()),
            color_accent: Some("#dc2626".to_string()),
            share_with_team: Some(true),
            show_in_dashboard: Some(false),
        }));

        let config = reducer.config();
        assert_eq!(config.filters.representatives, vec!["Emma Davis", "John Smith"]);
        assert_eq!(config.filters.region, vec!["Europe"]);
        assert!(config.filters.clients.is_empty());
        assert_eq!(config.filters.date_range, "last_quarter");
        assert_eq!(config.group_by, GroupBy::Region);
        assert_eq!(config.title, "  Padded title ");
        assert_eq!(config.color_accent, "#dc2626");
        assert!(config.share_with_team);
        assert!(!config.show_in_dashboard);
    }

    #[test]
    fn test_toggle_filter_preserves_order() {
        let mut reducer = WizardConfigReducer::new();
        reducer.toggle_filter(FilterField::Clients, "Innovation Labs");
        reducer.toggle_filter(FilterField::Clients, "Acme Corporation");
        reducer.toggle_filter(FilterField::Clients, "TechStart Inc");
        reducer.toggle_filter(FilterField::Clients, "Acme Corporation");

        assert_eq!(
            reducer.filter_values(FilterField::Clients),
            &["Innovation Labs".to_string(), "TechStart Inc".to_string()]
        );
        assert!(reducer.config().filters.has_active_filters());
    }

    #[test]
    fn test_complete_and_reset() {
        let mut reducer = fully_valid();
        let finished = reducer.complete();
        assert_eq!(finished.title, "Revenue");
        assert_eq!(finished.metric, "total_revenue");

        reducer.reset();
        assert_eq!(reducer.config(), &WidgetConfig::default());
        assert_eq!(finished.visualization_type, Some(VisualizationType::Line));
    }
}
