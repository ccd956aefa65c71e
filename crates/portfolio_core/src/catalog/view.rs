//! Catalog filter view state.
//!
//! # Responsibility
//! - Own the loaded project list, the active filter and the detail selection.
//! - Derive the visible subset on every read.
//!
//! # Invariants
//! - `items` is fixed after construction.
//! - The visible list is exactly the items whose category passes `filter`,
//!   in original order. It is recomputed on each read and never cached.
//! - At most one item is selected, and it is always one of `items`.

use super::projection::{CatalogSnapshot, FilterOption, ProjectCard, ProjectDetail};
use crate::model::filter::CategoryFilter;
use crate::model::project::{Project, ProjectId};
use log::{debug, warn};
use std::iter::FusedIterator;

/// Stateful catalog view backing the projects page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogView {
    items: Vec<Project>,
    filter: CategoryFilter,
    /// Index into `items`.
    selected: Option<usize>,
}

impl CatalogView {
    /// Creates a view over `items` with filter `All` and no selection.
    pub fn new(items: Vec<Project>) -> Self {
        Self {
            items,
            filter: CategoryFilter::All,
            selected: None,
        }
    }

    /// Full item list in load order.
    pub fn items(&self) -> &[Project] {
        &self.items
    }

    pub fn filter(&self) -> CategoryFilter {
        self.filter
    }

    /// Replaces the active filter. Selection is left untouched.
    pub fn set_filter(&mut self, filter: CategoryFilter) {
        debug!(
            "event=catalog_filter module=catalog from={} to={}",
            self.filter.as_str(),
            filter.as_str()
        );
        self.filter = filter;
    }

    /// Selects `item` for the detail overlay, replacing any prior selection.
    ///
    /// `item` must be one of [`CatalogView::items`]. Anything else is a caller
    /// bug; it is logged and the current selection is kept.
    pub fn select(&mut self, item: &Project) {
        match self.items.iter().position(|candidate| candidate == item) {
            Some(index) => self.selected = Some(index),
            None => warn!(
                "event=catalog_select module=catalog status=ignored reason=not_in_catalog project_id={}",
                item.id
            ),
        }
    }

    /// Selects the first item with `id`. Returns `false` when absent.
    pub fn select_by_id(&mut self, id: ProjectId) -> bool {
        match self.items.iter().position(|candidate| candidate.id == id) {
            Some(index) => {
                self.selected = Some(index);
                true
            }
            None => false,
        }
    }

    /// Hides the detail overlay.
    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    pub fn selected(&self) -> Option<&Project> {
        self.selected.and_then(|index| self.items.get(index))
    }

    /// Lazily yields the items passing the current filter.
    ///
    /// The iterator borrows the view, so it always reflects the latest filter.
    /// Call again (or clone the iterator) to restart.
    pub fn visible_items(&self) -> VisibleItems<'_> {
        VisibleItems {
            inner: self.items.iter(),
            filter: self.filter,
        }
    }

    /// True when nothing passes the current filter; the page then shows
    /// [`super::projection::EMPTY_CATEGORY_MESSAGE`].
    pub fn is_empty_state(&self) -> bool {
        self.visible_items().next().is_none()
    }

    /// Filter buttons with the active one flagged.
    pub fn filter_options(&self) -> Vec<FilterOption> {
        CategoryFilter::ALL_OPTIONS
            .iter()
            .map(|option| FilterOption::new(*option, *option == self.filter))
            .collect()
    }

    /// Serializable projection of the whole view for rendering.
    pub fn snapshot(&self) -> CatalogSnapshot {
        let cards = self
            .visible_items()
            .map(ProjectCard::from_project)
            .collect::<Vec<_>>();
        CatalogSnapshot {
            filter: self.filter,
            filters: self.filter_options(),
            empty_state: cards.is_empty(),
            cards,
            selected: self.selected().map(ProjectDetail::from_project),
        }
    }

    /// Teardown: filter back to `All`, selection cleared. Items are kept.
    pub fn reset(&mut self) {
        self.filter = CategoryFilter::All;
        self.selected = None;
    }
}

/// Iterator returned by [`CatalogView::visible_items`].
#[derive(Debug, Clone)]
pub struct VisibleItems<'a> {
    inner: std::slice::Iter<'a, Project>,
    filter: CategoryFilter,
}

impl<'a> Iterator for VisibleItems<'a> {
    type Item = &'a Project;

    fn next(&mut self) -> Option<Self::Item> {
        let filter = self.filter;
        self.inner.find(|item| filter.matches(item.category))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.inner.size_hint().1)
    }
}

impl FusedIterator for VisibleItems<'_> {}
