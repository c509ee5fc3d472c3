//! Reactive wrapper over `ListQuery`; the setters keep its page-reset rule.

use contracts::shared::query::{FilterValue, ListQuery, SortOrder};
use leptos::prelude::*;

use crate::config::app_config;

#[derive(Clone, Copy)]
pub struct ListState {
    pub query: RwSignal<ListQuery>,
}

impl ListState {
    pub fn new(initial: ListQuery) -> Self {
        Self {
            query: RwSignal::new(initial),
        }
    }

    pub fn set_page(&self, page: u32) {
        self.query.update(|q| q.set_page(page));
    }

    pub fn set_search(&self, search: String) {
        // Typing the same text again must not bounce the view to page 1
        if self.query.with_untracked(|q| q.search == search) {
            return;
        }
        self.query.update(|q| q.set_search(search));
    }

    pub fn set_limit_text(&self, raw: &str) {
        self.query.update(|q| q.set_limit_text(raw));
    }

    pub fn toggle_sort(&self, field: &str) {
        self.query.update(|q| q.toggle_sort(field));
    }

    pub fn set_sort(&self, field: Option<String>, order: SortOrder) {
        self.query.update(|q| q.set_sort(field, order));
    }

    pub fn set_filter(&self, key: &str, value: Option<FilterValue>) {
        self.query.update(|q| q.set_filter(key, value));
    }

    pub fn set_filter_text(&self, key: &str, raw: &str) {
        self.query.update(|q| q.set_filter_text(key, raw));
    }

    pub fn clear_filters(&self) {
        self.query.update(|q| q.clear_filters());
    }

    /// Current `<select>` value of a filter, empty when unset
    pub fn filter_text(&self, key: &str) -> String {
        self.query
            .with(|q| q.filter(key).map(|v| v.to_string()).unwrap_or_default())
    }

    pub fn search(&self) -> String {
        self.query.with(|q| q.search.clone())
    }

    pub fn sort(&self) -> (Option<String>, SortOrder) {
        self.query.with(|q| (q.sort_by.clone(), q.sort_order))
    }

    pub fn active_filter_count(&self) -> usize {
        self.query.with(|q| q.active_filter_count())
    }
}

/// Initial query of an admin list: configured page size and a default sort
pub fn create_state(sort_by: &str, order: SortOrder) -> ListState {
    ListState::new(ListQuery::with_limit(app_config().ui.default_limit).sorted_by(sort_by, order))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_state(test: impl FnOnce(ListState)) {
        let owner = Owner::new();
        owner.with(|| {
            let mut query = ListQuery::default();
            query.set_page(3);
            test(ListState::new(query));
        });
    }

    #[test]
    fn test_filter_change_resets_page() {
        with_state(|state| {
            state.set_filter_text("isActive", "true");
            let query = state.query.get_untracked();
            assert_eq!(query.page, 1);
            assert_eq!(query.filter("isActive"), Some(&FilterValue::Bool(true)));
        });
    }

    #[test]
    fn test_page_change_keeps_filters() {
        with_state(|state| {
            state.set_filter_text("status", "new");
            state.set_page(2);
            let query = state.query.get_untracked();
            assert_eq!(query.page, 2);
            assert_eq!(query.filters.len(), 1);
        });
    }

    #[test]
    fn test_repeated_search_keeps_page() {
        with_state(|state| {
            state.set_search("web".into());
            state.set_page(2);
            state.set_search("web".into());
            assert_eq!(state.query.get_untracked().page, 2);
            state.set_search("mobile".into());
            assert_eq!(state.query.get_untracked().page, 1);
        });
    }
}
