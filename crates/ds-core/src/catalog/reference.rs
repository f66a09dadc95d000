//! Reference widget catalog, in id order

use super::{Category, PreviewType, WidgetDescriptor};

const fn widget(
    id: &'static str,
    name: &'static str,
    description: &'static str,
    category: Category,
    data_type: &'static str,
    popularity: u8,
    preview: PreviewType,
) -> WidgetDescriptor {
    WidgetDescriptor { id, name, description, category, data_type, popularity, preview }
}

pub const WIDGET_CATALOG: &[WidgetDescriptor] = &[
    // KPIs
    widget("1", "Total Revenue", "Display total revenue across all sales channels", Category::Kpis, "Number Card", 95, PreviewType::Number),
    widget("2", "Conversion Rate", "Track lead-to-customer conversion percentage", Category::Kpis, "Number Card", 88, PreviewType::Gauge),
    widget("3", "Active Deals", "Count of currently active sales opportunities", Category::Kpis, "Number Card", 82, PreviewType::Number),
    widget("4", "Customer Satisfaction", "Average satisfaction score from recent surveys", Category::Kpis, "Gauge Chart", 76, PreviewType::Gauge),

    // Clients
    widget("5", "Client List", "Comprehensive table of all active clients", Category::Clients, "Table", 91, PreviewType::Table),
    widget("6", "New Clients Trend", "Line chart showing client acquisition over time", Category::Clients, "Line Chart", 85, PreviewType::Line),
    widget("7", "Client Distribution", "Geographic distribution of your client base", Category::Clients, "Map", 72, PreviewType::Map),
    widget("8", "Client Segments", "Breakdown of clients by industry or size", Category::Clients, "Pie Chart", 78, PreviewType::Pie),
    widget("9", "Top Clients", "List of highest value clients by revenue", Category::Clients, "Bar Chart", 84, PreviewType::Bar),

    // Sales
    widget("10", "Sales Pipeline", "Visual funnel of deals through sales stages", Category::Sales, "Funnel Chart", 93, PreviewType::Funnel),
    widget("11", "Monthly Sales", "Bar chart comparing sales across months", Category::Sales, "Bar Chart", 89, PreviewType::Bar),
    widget("12", "Sales by Rep", "Performance comparison across sales team", Category::Sales, "Bar Chart", 87, PreviewType::Bar),
    widget("13", "Deal Forecast", "Projected revenue based on pipeline data", Category::Sales, "Line Chart", 81, PreviewType::Line),
    widget("14", "Win Rate", "Percentage of deals won vs lost", Category::Sales, "Number Card", 80, PreviewType::Number),

    // Visits
    widget("15", "Visit Schedule", "Calendar view of upcoming client visits", Category::Visits, "Table", 77, PreviewType::Table),
    widget("16", "Visits This Month", "Total number of completed field visits", Category::Visits, "Number Card", 75, PreviewType::Number),
    widget("17", "Visit Locations", "Map showing all visit locations", Category::Visits, "Map", 70, PreviewType::Map),
    widget("18", "Visit Trends", "Track visit frequency over time", Category::Visits, "Line Chart", 68, PreviewType::Line),

    // Performance
    widget("19", "Team Performance", "Compare metrics across team members", Category::Performance, "Table", 86, PreviewType::Table),
    widget("20", "Target vs Actual", "Track performance against sales targets", Category::Performance, "Line Chart", 90, PreviewType::Line),
    widget("21", "Activity Breakdown", "Distribution of activities by type", Category::Performance, "Pie Chart", 73, PreviewType::Pie),

    // Analytics
    widget("22", "Revenue Analytics", "Deep dive into revenue sources and trends", Category::Analytics, "Line Chart", 83, PreviewType::Line),
    widget("23", "Customer Lifetime Value", "Average value per customer over time", Category::Analytics, "Number Card", 79, PreviewType::Number),
    widget("24", "Churn Analysis", "Track and analyze customer churn rates", Category::Analytics, "Bar Chart", 74, PreviewType::Bar),
];
