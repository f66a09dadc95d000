//! Widget library: a static catalog of widget templates and the filtered,
//! searched and sorted projection the library modal displays.

mod reference;

pub use reference::WIDGET_CATALOG;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Which preview shape a widget card draws
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PreviewType {
    Number,
    Bar,
    Line,
    Pie,
    Table,
    Map,
    Funnel,
    Gauge,
}

/// Catalog module a widget belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Kpis,
    Clients,
    Sales,
    Visits,
    Performance,
    Analytics,
}

impl Category {
    /// Tab order in the library sidebar
    pub const ALL: [Category; 6] = [
        Category::Kpis,
        Category::Clients,
        Category::Sales,
        Category::Visits,
        Category::Performance,
        Category::Analytics,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Category::Kpis => "kpis",
            Category::Clients => "clients",
            Category::Sales => "sales",
            Category::Visits => "visits",
            Category::Performance => "performance",
            Category::Analytics => "analytics",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Category::Kpis => "KPIs",
            Category::Clients => "Clients",
            Category::Sales => "Sales",
            Category::Visits => "Visits",
            Category::Performance => "Performance",
            Category::Analytics => "Analytics",
        }
    }
}

/// Category tab selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    /// Every tab, "All" first
    pub fn tabs() -> impl Iterator<Item = CategoryFilter> {
        std::iter::once(CategoryFilter::All).chain(Category::ALL.into_iter().map(CategoryFilter::Only))
    }

    pub fn label(&self) -> &'static str {
        match self {
            CategoryFilter::All => "All Widgets",
            CategoryFilter::Only(category) => category.label(),
        }
    }

    pub fn admits(&self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(selected) => *selected == category,
        }
    }
}

/// Ordering of the projected list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortBy {
    /// Most used first
    #[default]
    Popularity,
    /// Grouped by category id
    Module,
}

/// A widget template offered by the library
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WidgetDescriptor {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub category: Category,
    /// Display label such as "Bar Chart"
    pub data_type: &'static str,
    /// 0-100
    pub popularity: u8,
    pub preview: PreviewType,
}

impl WidgetDescriptor {
    /// Case-insensitive match of an already lower-cased needle
    fn matches_search(&self, needle: &str) -> bool {
        [self.name, self.description, self.data_type]
            .iter()
            .any(|field| field.to_lowercase().contains(needle))
    }
}

/// Library query: category tab, search box and sort toggle
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CatalogQuery {
    pub category: CategoryFilter,
    pub search_text: String,
    pub sort_by: SortBy,
}

/// Filter, search and sort `catalog`. The catalog itself is left untouched and
/// ties keep catalog order.
pub fn project<'a>(catalog: &'a [WidgetDescriptor], query: &CatalogQuery) -> Vec<&'a WidgetDescriptor> {
    let needle = query.search_text.to_lowercase();

    let mut widgets: Vec<&WidgetDescriptor> = catalog
        .iter()
        .filter(|w| query.category.admits(w.category))
        .filter(|w| needle.is_empty() || w.matches_search(&needle))
        .collect();

    // sort_by is stable
    match query.sort_by {
        SortBy::Popularity => widgets.sort_by(|a, b| b.popularity.cmp(&a.popularity)),
        SortBy::Module => widgets.sort_by(|a, b| a.category.id().cmp(b.category.id())),
    }

    widgets
}

/// Per-tab item counts over the whole catalog, independent of the search text
pub fn category_counts(catalog: &[WidgetDescriptor]) -> IndexMap<CategoryFilter, usize> {
    CategoryFilter::tabs()
        .map(|tab| (tab, catalog.iter().filter(|w| tab.admits(w.category)).count()))
        .collect()
}

/// The library modal's view over a catalog
#[derive(Debug, Clone)]
pub struct WidgetCatalogView<'a> {
    catalog: &'a [WidgetDescriptor],
    query: CatalogQuery,
    counts: IndexMap<CategoryFilter, usize>,
}

impl Default for WidgetCatalogView<'static> {
    fn default() -> Self {
        Self::new(WIDGET_CATALOG)
    }
}

impl<'a> WidgetCatalogView<'a> {
    pub fn new(catalog: &'a [WidgetDescriptor]) -> Self {
        Self {
            catalog,
            query: CatalogQuery::default(),
            counts: category_counts(catalog),
        }
    }

    pub fn query(&self) -> &CatalogQuery {
        &self.query
    }

    pub fn set_category(&mut self, category: CategoryFilter) {
        self.query.category = category;
    }

    pub fn set_sort(&mut self, sort_by: SortBy) {
        self.query.sort_by = sort_by;
    }

    /// Search box contents, for direct editing
    pub fn search_text_mut(&mut self) -> &mut String {
        &mut self.query.search_text
    }

    /// Widgets to show for the current query
    pub fn widgets(&self) -> Vec<&'a WidgetDescriptor> {
        project(self.catalog, &self.query)
    }

    pub fn count(&self, tab: CategoryFilter) -> usize {
        self.counts.get(&tab).copied().unwrap_or(0)
    }

    pub fn counts(&self) -> &IndexMap<CategoryFilter, usize> {
        &self.counts
    }

    /// Back to "All", no search, most popular first
    pub fn reset(&mut self) {
        self.query = CatalogQuery::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(category: CategoryFilter, search: &str, sort_by: SortBy) -> CatalogQuery {
        CatalogQuery {
            category,
            search_text: search.to_string(),
            sort_by,
        }
    }

    fn names(widgets: &[&WidgetDescriptor]) -> Vec<&'static str> {
        widgets.iter().map(|w| w.name).collect()
    }

    #[test]
    fn test_sales_by_popularity() {
        let q = query(CategoryFilter::Only(Category::Sales), "", SortBy::Popularity);
        let result = project(WIDGET_CATALOG, &q);

        assert_eq!(
            names(&result),
            vec!["Sales Pipeline", "Monthly Sales", "Sales by Rep", "Deal Forecast", "Win Rate"]
        );
        let popularity: Vec<u8> = result.iter().map(|w| w.popularity).collect();
        assert_eq!(popularity, vec![93, 89, 87, 81, 80]);
    }

    #[test]
    fn test_search_client_by_module() {
        let q = query(CategoryFilter::All, "client", SortBy::Module);
        let result = project(WIDGET_CATALOG, &q);

        let ids: Vec<&str> = result.iter().map(|w| w.id).collect();
        assert_eq!(ids, vec!["5", "6", "7", "8", "9", "15"]);

        for pair in result.windows(2) {
            assert!(pair[0].category.id() <= pair[1].category.id());
        }
    }

    #[test]
    fn test_search_is_case_insensitive_across_fields() {
        let by_data_type = project(WIDGET_CATALOG, &query(CategoryFilter::All, "FUNNEL CHART", SortBy::Popularity));
        assert_eq!(names(&by_data_type), vec!["Sales Pipeline"]);

        let by_description = project(WIDGET_CATALOG, &query(CategoryFilter::All, "Surveys", SortBy::Popularity));
        assert_eq!(names(&by_description), vec!["Customer Satisfaction"]);
    }

    #[test]
    fn test_no_match_is_empty() {
        let result = project(WIDGET_CATALOG, &query(CategoryFilter::All, "zzzznomatch", SortBy::Popularity));
        assert!(result.is_empty());
    }

    #[test]
    fn test_projection_is_idempotent() {
        let q = query(CategoryFilter::All, "rate", SortBy::Module);
        assert_eq!(project(WIDGET_CATALOG, &q), project(WIDGET_CATALOG, &q));
    }

    #[test]
    fn test_popularity_ties_keep_catalog_order() {
        let catalog = [
            WidgetDescriptor { id: "a", name: "A", description: "", category: Category::Visits, data_type: "Table", popularity: 50, preview: PreviewType::Table },
            WidgetDescriptor { id: "b", name: "B", description: "", category: Category::Kpis, data_type: "Table", popularity: 70, preview: PreviewType::Table },
            WidgetDescriptor { id: "c", name: "C", description: "", category: Category::Analytics, data_type: "Table", popularity: 50, preview: PreviewType::Table },
        ];

        let popular = project(&catalog, &CatalogQuery::default());
        assert_eq!(names(&popular), vec!["B", "A", "C"]);

        let by_module = project(&catalog, &query(CategoryFilter::All, "", SortBy::Module));
        assert_eq!(names(&by_module), vec!["C", "B", "A"]);
    }

    #[test]
    fn test_category_counts_ignore_search() {
        let mut view = WidgetCatalogView::default();
        view.search_text_mut().push_str("zzzz");
        assert!(view.widgets().is_empty());

        assert_eq!(view.count(CategoryFilter::All), 24);
        assert_eq!(view.count(CategoryFilter::Only(Category::Kpis)), 4);
        assert_eq!(view.count(CategoryFilter::Only(Category::Clients)), 5);
        assert_eq!(view.count(CategoryFilter::Only(Category::Sales)), 5);
        assert_eq!(view.count(CategoryFilter::Only(Category::Visits)), 4);
        assert_eq!(view.count(CategoryFilter::Only(Category::Performance)), 3);
        assert_eq!(view.count(CategoryFilter::Only(Category::Analytics)), 3);

        let order: Vec<CategoryFilter> = view.counts().keys().copied().collect();
        assert_eq!(order.first(), Some(&CategoryFilter::All));
        assert_eq!(order.len(), 7);
    }

    #[test]
    fn test_view_reset() {
        let mut view = WidgetCatalogView::default();
        view.set_category(CategoryFilter::Only(Category::Visits));
        view.set_sort(SortBy::Module);
        assert_eq!(view.widgets().len(), 4);

        view.reset();
        assert_eq!(view.query(), &CatalogQuery::default());
        assert_eq!(view.widgets().len(), 24);
        assert_eq!(view.widgets()[0].name, "Total Revenue");
    }
}
