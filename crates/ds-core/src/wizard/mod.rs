//! Widget configuration wizard
//!
//! The wizard assembles a [`WidgetConfig`] over five ordered steps. Each step
//! writes only its own fields and forward navigation is gated by a per-step
//! validity predicate.

mod reducer;
mod session;

pub use reducer::{
    DisplayFields, FilterField, FilterFields, SourceFields, StepUpdate, VisualizationFields,
    WizardConfigReducer,
};
pub use session::{StepStatus, WizardSession, WizardSummary};

use serde::{Deserialize, Serialize};

use crate::catalog::PreviewType;

/// Default colour accent for new widgets
pub const DEFAULT_COLOR_ACCENT: &str = "#2563eb";

/// Default date range key for the filters step
pub const DEFAULT_DATE_RANGE: &str = "all";

/// Where a widget reads its numbers from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DataSourceKind {
    Sales,
    Clients,
    Products,
    Performance,
}

impl DataSourceKind {
    pub const ALL: [DataSourceKind; 4] = [
        DataSourceKind::Sales,
        DataSourceKind::Clients,
        DataSourceKind::Products,
        DataSourceKind::Performance,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            DataSourceKind::Sales => "sales",
            DataSourceKind::Clients => "clients",
            DataSourceKind::Products => "products",
            DataSourceKind::Performance => "performance",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DataSourceKind::Sales => "Sales Data",
            DataSourceKind::Clients => "Client Data",
            DataSourceKind::Products => "Product Data",
            DataSourceKind::Performance => "Team Performance",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            DataSourceKind::Sales => "Revenue and transaction metrics",
            DataSourceKind::Clients => "Customer information and analytics",
            DataSourceKind::Products => "Inventory and product performance",
            DataSourceKind::Performance => "Employee and team metrics",
        }
    }

    /// The fixed metric vocabulary for this source
    pub fn metrics(&self) -> &'static [MetricDef] {
        match self {
            DataSourceKind::Sales => SALES_METRICS,
            DataSourceKind::Clients => CLIENT_METRICS,
            DataSourceKind::Products => PRODUCT_METRICS,
            DataSourceKind::Performance => PERFORMANCE_METRICS,
        }
    }

    /// Whether `metric` belongs to this source's vocabulary
    pub fn offers_metric(&self, metric: &str) -> bool {
        self.metrics().iter().any(|m| m.id == metric)
    }
}

/// A selectable metric
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetricDef {
    pub id: &'static str,
    pub label: &'static str,
    pub description: &'static str,
}

const fn metric(id: &'static str, label: &'static str, description: &'static str) -> MetricDef {
    MetricDef { id, label, description }
}

const SALES_METRICS: &[MetricDef] = &[
    metric("total_revenue", "Total Revenue", "Sum of all sales transactions"),
    metric("avg_order_value", "Average Order Value", "Mean transaction amount"),
    metric("return_percentage", "Return Sales Percentage", "Percentage of sales that were returned"),
    metric("conversion_rate", "Conversion Rate", "Leads converted to customers"),
    metric("sales_growth", "Sales Growth", "Period-over-period growth rate"),
];

const CLIENT_METRICS: &[MetricDef] = &[
    metric("total_clients", "Total Clients", "Count of all active clients"),
    metric("new_clients", "New Clients", "Recently acquired customers"),
    metric("client_retention", "Client Retention Rate", "Percentage of retained customers"),
    metric("lifetime_value", "Customer Lifetime Value", "Average revenue per customer"),
    metric("churn_rate", "Churn Rate", "Rate of customer attrition"),
];

const PRODUCT_METRICS: &[MetricDef] = &[
    metric("units_sold", "Units Sold", "Total quantity of products sold"),
    metric("inventory_level", "Inventory Level", "Current stock quantities"),
    metric("product_performance", "Product Performance", "Sales by product category"),
    metric("stock_turnover", "Stock Turnover Rate", "How quickly inventory sells"),
];

const PERFORMANCE_METRICS: &[MetricDef] = &[
    metric("team_quota", "Team Quota Attainment", "Percentage of sales target achieved"),
    metric("avg_deal_size", "Average Deal Size", "Mean value of closed deals"),
    metric("activities_completed", "Activities Completed", "Number of completed tasks"),
    metric("response_time", "Average Response Time", "Time to respond to leads"),
];

/// How the widget draws its data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VisualizationType {
    Number,
    Bar,
    Line,
    Pie,
    Table,
    Gauge,
    Funnel,
    Map,
}

impl VisualizationType {
    pub const ALL: [VisualizationType; 8] = [
        VisualizationType::Number,
        VisualizationType::Bar,
        VisualizationType::Line,
        VisualizationType::Pie,
        VisualizationType::Table,
        VisualizationType::Gauge,
        VisualizationType::Funnel,
        VisualizationType::Map,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            VisualizationType::Number => "number",
            VisualizationType::Bar => "bar",
            VisualizationType::Line => "line",
            VisualizationType::Pie => "pie",
            VisualizationType::Table => "table",
            VisualizationType::Gauge => "gauge",
            VisualizationType::Funnel => "funnel",
            VisualizationType::Map => "map",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            VisualizationType::Number => "Number Card",
            VisualizationType::Bar => "Bar Chart",
            VisualizationType::Line => "Line Chart",
            VisualizationType::Pie => "Pie Chart",
            VisualizationType::Table => "Table",
            VisualizationType::Gauge => "Gauge Chart",
            VisualizationType::Funnel => "Funnel Chart",
            VisualizationType::Map => "Geographic Map",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            VisualizationType::Number => "Display a single key metric with optional trend indicator",
            VisualizationType::Bar => "Compare values across categories or time periods",
            VisualizationType::Line => "Show trends and changes over time",
            VisualizationType::Pie => "Show proportions and percentage breakdown",
            VisualizationType::Table => "Display detailed data in rows and columns",
            VisualizationType::Gauge => "Show progress toward a goal or target",
            VisualizationType::Funnel => "Visualize stages in a process or conversion flow",
            VisualizationType::Map => "Show data distribution across locations",
        }
    }

    pub fn best_for(&self) -> &'static str {
        match self {
            VisualizationType::Number => "KPIs and summary statistics",
            VisualizationType::Bar => "Categorical comparisons and rankings",
            VisualizationType::Line => "Time series data and trend analysis",
            VisualizationType::Pie => "Part-to-whole relationships",
            VisualizationType::Table => "Detailed listings and multiple metrics",
            VisualizationType::Gauge => "Progress tracking and goal achievement",
            VisualizationType::Funnel => "Sales pipelines and conversion tracking",
            VisualizationType::Map => "Location-based data and regional analysis",
        }
    }

    pub fn preview(&self) -> PreviewType {
        match self {
            VisualizationType::Number => PreviewType::Number,
            VisualizationType::Bar => PreviewType::Bar,
            VisualizationType::Line => PreviewType::Line,
            VisualizationType::Pie => PreviewType::Pie,
            VisualizationType::Table => PreviewType::Table,
            VisualizationType::Gauge => PreviewType::Gauge,
            VisualizationType::Funnel => PreviewType::Funnel,
            VisualizationType::Map => PreviewType::Map,
        }
    }
}

/// How the widget segments its data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GroupBy {
    #[default]
    None,
    Rep,
    Client,
    Region,
    Product,
    Time,
}

impl GroupBy {
    pub const ALL: [GroupBy; 6] = [
        GroupBy::None,
        GroupBy::Rep,
        GroupBy::Client,
        GroupBy::Region,
        GroupBy::Product,
        GroupBy::Time,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            GroupBy::None => "No Grouping",
            GroupBy::Rep => "Sales Representative",
            GroupBy::Client => "Client",
            GroupBy::Region => "Region",
            GroupBy::Product => "Product Brand",
            GroupBy::Time => "Time Period",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            GroupBy::None => "Show data in aggregate",
            GroupBy::Rep => "Group by individual sales reps",
            GroupBy::Client => "Group by customer accounts",
            GroupBy::Region => "Group by geographic region",
            GroupBy::Product => "Group by product line",
            GroupBy::Time => "Group by date/time intervals",
        }
    }
}

/// Reference values offered by the filters step
pub mod reference {
    pub const REPRESENTATIVES: &[&str] = &[
        "John Smith",
        "Sarah Johnson",
        "Michael Chen",
        "Emma Davis",
        "David Wilson",
        "Lisa Anderson",
    ];

    pub const CLIENTS: &[&str] = &[
        "Acme Corporation",
        "TechStart Inc",
        "Global Solutions",
        "Premier Industries",
        "Innovation Labs",
        "Enterprise Group",
    ];

    pub const PRODUCT_BRANDS: &[&str] = &[
        "Premium Line",
        "Standard Series",
        "Economy Range",
        "Professional Suite",
        "Enterprise Edition",
    ];

    pub const REGIONS: &[&str] = &[
        "North America",
        "Europe",
        "Asia Pacific",
        "Latin America",
        "Middle East",
    ];

    /// Colour presets for the display step as (hex, label)
    pub const COLOR_PRESETS: &[(&str, &str)] = &[
        ("#2563eb", "Blue"),
        ("#7c3aed", "Purple"),
        ("#059669", "Green"),
        ("#dc2626", "Red"),
        ("#ea580c", "Orange"),
        ("#0891b2", "Cyan"),
        ("#db2777", "Pink"),
        ("#65a30d", "Lime"),
    ];

    /// Date range keys for the filters step as (key, label)
    pub const DATE_RANGES: &[(&str, &str)] = &[
        ("all", "All Time"),
        ("7d", "Last 7 Days"),
        ("30d", "Last 30 Days"),
        ("90d", "Last 90 Days"),
        ("1y", "Last Year"),
    ];
}

/// Multi-select filters applied to a widget
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WidgetFilters {
    pub representatives: Vec<String>,
    pub clients: Vec<String>,
    pub product_brand: Vec<String>,
    pub region: Vec<String>,
    pub date_range: String,
}

impl Default for WidgetFilters {
    fn default() -> Self {
        Self {
            representatives: Vec::new(),
            clients: Vec::new(),
            product_brand: Vec::new(),
            region: Vec::new(),
            date_range: DEFAULT_DATE_RANGE.to_string(),
        }
    }
}

impl WidgetFilters {
    /// Whether any of the multi-select filters narrows the data
    pub fn has_active_filters(&self) -> bool {
        !self.representatives.is_empty()
            || !self.clients.is_empty()
            || !self.product_brand.is_empty()
            || !self.region.is_empty()
    }
}

/// The widget being authored by a wizard session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WidgetConfig {
    // Step 1
    pub data_source: Option<DataSourceKind>,
    /// Metric id, only meaningful relative to `data_source`
    pub metric: String,

    // Step 2
    pub visualization_type: Option<VisualizationType>,

    // Step 3
    pub filters: WidgetFilters,
    pub group_by: GroupBy,

    // Step 4
    pub title: String,
    pub color_accent: String,
    pub share_with_team: bool,
    pub show_in_dashboard: bool,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            data_source: None,
            metric: String::new(),
            visualization_type: None,
            filters: WidgetFilters::default(),
            group_by: GroupBy::None,
            title: String::new(),
            color_accent: DEFAULT_COLOR_ACCENT.to_string(),
            share_with_team: false,
            show_in_dashboard: true,
        }
    }
}

/// One of the five ordered wizard steps
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum WizardStep {
    DataSource = 1,
    Visualization = 2,
    Filters = 3,
    Display = 4,
    Review = 5,
}

impl WizardStep {
    pub const ALL: [WizardStep; 5] = [
        WizardStep::DataSource,
        WizardStep::Visualization,
        WizardStep::Filters,
        WizardStep::Display,
        WizardStep::Review,
    ];

    pub const FIRST: WizardStep = WizardStep::DataSource;
    pub const LAST: WizardStep = WizardStep::Review;

    /// 1-based step number
    pub fn index(&self) -> u8 {
        *self as u8
    }

    pub fn from_index(index: u8) -> Option<Self> {
        Self::ALL.get(usize::from(index).checked_sub(1)?).copied()
    }

    /// The following step, clamped at the last one
    pub fn following(&self) -> Self {
        Self::from_index(self.index() + 1).unwrap_or(Self::LAST)
    }

    /// The preceding step, clamped at the first one
    pub fn preceding(&self) -> Self {
        Self::from_index(self.index() - 1).unwrap_or(Self::FIRST)
    }

    pub fn title(&self) -> &'static str {
        match self {
            WizardStep::DataSource => "Data Source",
            WizardStep::Visualization => "Visualization",
            WizardStep::Filters => "Filters",
            WizardStep::Display => "Display",
            WizardStep::Review => "Review",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            WizardStep::DataSource => "Select metric",
            WizardStep::Visualization => "Choose chart type",
            WizardStep::Filters => "Refine data",
            WizardStep::Display => "Customize appearance",
            WizardStep::Review => "Confirm settings",
        }
    }
}

/// Look up a metric label by id across every source, falling back to the id
pub fn metric_label(id: &str) -> &str {
    METRIC_LABELS.get(id).copied().unwrap_or(id)
}

static METRIC_LABELS: once_cell::sync::Lazy<ahash::AHashMap<&'static str, &'static str>> =
    once_cell::sync::Lazy::new(|| {
        DataSourceKind::ALL
            .iter()
            .flat_map(|source| source.metrics())
            .map(|m| (m.id, m.label))
            .collect()
    });

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_index_round_trip() {
        for step in WizardStep::ALL {
            assert_eq!(WizardStep::from_index(step.index()), Some(step));
        }
        assert_eq!(WizardStep::from_index(0), None);
        assert_eq!(WizardStep::from_index(6), None);
    }

    #[test]
    fn test_step_neighbours_clamp() {
        assert_eq!(WizardStep::Review.following(), WizardStep::Review);
        assert_eq!(WizardStep::DataSource.preceding(), WizardStep::DataSource);
        assert_eq!(WizardStep::Filters.following(), WizardStep::Display);
        assert_eq!(WizardStep::Filters.preceding(), WizardStep::Visualization);
    }

    #[test]
    fn test_metric_vocabularies() {
        assert_eq!(DataSourceKind::Sales.metrics().len(), 5);
        assert_eq!(DataSourceKind::Clients.metrics().len(), 5);
        assert_eq!(DataSourceKind::Products.metrics().len(), 4);
        assert_eq!(DataSourceKind::Performance.metrics().len(), 4);

        assert!(DataSourceKind::Sales.offers_metric("total_revenue"));
        assert!(!DataSourceKind::Products.offers_metric("total_revenue"));
    }

    #[test]
    fn test_metric_label_lookup() {
        assert_eq!(metric_label("stock_turnover"), "Stock Turnover Rate");
        assert_eq!(metric_label("unknown_metric"), "unknown_metric");
    }

    #[test]
    fn test_default_config() {
        let config = WidgetConfig::default();
        assert_eq!(config.data_source, None);
        assert!(config.metric.is_empty());
        assert_eq!(config.group_by, GroupBy::None);
        assert_eq!(config.color_accent, DEFAULT_COLOR_ACCENT);
        assert_eq!(config.filters.date_range, "all");
        assert!(!config.share_with_team);
        assert!(config.show_in_dashboard);
    }
}
