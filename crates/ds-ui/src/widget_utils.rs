//! Widget ID helpers for repeated widgets
//!
//! Cards, option grids and dropdowns are drawn in loops and inside reused
//! windows; a [`WidgetId`] is a path of hashable parts that maps to one
//! stable egui [`Id`].

use std::hash::Hash;

use egui::{Grid, Id};

/// Hierarchical widget ID, e.g. `WidgetId::new("wizard").with("review")`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WidgetId(Id);

impl WidgetId {
    pub fn new(root: impl Hash) -> Self {
        Self(Id::new(root))
    }

    /// Descend one level
    pub fn with(self, part: impl Hash) -> Self {
        Self(self.0.with(part))
    }

    pub fn id(self) -> Id {
        self.0
    }
}

impl From<WidgetId> for Id {
    fn from(id: WidgetId) -> Self {
        id.0
    }
}

/// Grids keyed by a [`WidgetId`]
pub trait GridExt {
    fn new_with_id(id: WidgetId) -> Self;
}

impl GridExt for Grid {
    fn new_with_id(id: WidgetId) -> Self {
        Grid::new(id.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_map_to_stable_ids() {
        let review = WidgetId::new("wizard").with("review");
        assert_eq!(review, WidgetId::new("wizard").with("review"));
        assert_ne!(review, WidgetId::new("wizard").with("sources"));
        assert_ne!(review, WidgetId::new("library").with("review"));
        assert_eq!(Id::from(review), review.id());
    }

    #[test]
    fn test_order_of_parts_matters() {
        let a = WidgetId::new("filter_panel").with("region").with(0usize);
        let b = WidgetId::new("filter_panel").with(0usize).with("region");
        assert_ne!(a, b);
    }
}
