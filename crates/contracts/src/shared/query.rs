//! Query parameters of a collection list view.
//!
//! `ListQuery` is the single source of truth for one list: search text,
//! page, page size, sort and entity-specific filters. Every change except a
//! page change sends the view back to page 1.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

pub const DEFAULT_LIMIT: u32 = 10;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn code(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "asc" => Some(SortOrder::Asc),
            "desc" => Some(SortOrder::Desc),
            _ => None,
        }
    }
}

/// Value of an entity-specific filter
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FilterValue {
    Bool(bool),
    Number(i64),
    Text(String),
}

impl FilterValue {
    /// Parse a value coming from a `<select>`: booleans and integers are typed,
    /// anything else stays text. Empty input and the literal `"null"` mean
    /// "no filter".
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        if raw.is_empty() || raw.eq_ignore_ascii_case("null") || raw == "undefined" {
            return None;
        }
        if let Ok(b) = raw.parse::<bool>() {
            return Some(FilterValue::Bool(b));
        }
        if let Ok(n) = raw.parse::<i64>() {
            return Some(FilterValue::Number(n));
        }
        Some(FilterValue::Text(raw.to_string()))
    }

    fn is_blank(&self) -> bool {
        match self {
            FilterValue::Text(s) => {
                let s = s.trim();
                s.is_empty() || s.eq_ignore_ascii_case("null") || s == "undefined"
            }
            _ => false,
        }
    }
}

impl fmt::Display for FilterValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterValue::Bool(b) => write!(f, "{}", b),
            FilterValue::Number(n) => write!(f, "{}", n),
            FilterValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<bool> for FilterValue {
    fn from(value: bool) -> Self {
        FilterValue::Bool(value)
    }
}

impl From<i64> for FilterValue {
    fn from(value: i64) -> Self {
        FilterValue::Number(value)
    }
}

impl From<&str> for FilterValue {
    fn from(value: &str) -> Self {
        FilterValue::Text(value.to_string())
    }
}

impl From<String> for FilterValue {
    fn from(value: String) -> Self {
        FilterValue::Text(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListQuery {
    pub search: String,
    pub page: u32,
    pub limit: u32,
    pub sort_by: Option<String>,
    pub sort_order: SortOrder,
    pub filters: BTreeMap<String, FilterValue>,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            search: String::new(),
            page: 1,
            limit: DEFAULT_LIMIT,
            sort_by: None,
            sort_order: SortOrder::Asc,
            filters: BTreeMap::new(),
        }
    }
}

impl ListQuery {
    pub fn with_limit(limit: u32) -> Self {
        Self {
            limit: limit.max(1),
            ..Self::default()
        }
    }

    pub fn sorted_by(mut self, field: &str, order: SortOrder) -> Self {
        self.sort_by = Some(field.to_string());
        self.sort_order = order;
        self
    }

    pub fn with_filter(mut self, key: &str, value: impl Into<FilterValue>) -> Self {
        self.set_filter(key, Some(value.into()));
        self
    }

    fn reset_page(&mut self) {
        self.page = 1;
    }

    /// The only setter that keeps the other parameters untouched
    pub fn set_page(&mut self, page: u32) {
        self.page = page.max(1);
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
        self.reset_page();
    }

    pub fn set_limit(&mut self, limit: u32) {
        if limit > 0 {
            self.limit = limit;
        }
        self.reset_page();
    }

    /// Coerce a page-size selector value. Garbage keeps the current limit.
    pub fn set_limit_text(&mut self, raw: &str) {
        match raw.trim().parse::<u32>() {
            Ok(limit) => self.set_limit(limit),
            Err(_) => self.reset_page(),
        }
    }

    pub fn set_sort(&mut self, field: Option<String>, order: SortOrder) {
        self.sort_by = field.filter(|f| !f.trim().is_empty());
        self.sort_order = order;
        self.reset_page();
    }

    /// Header click: same field flips the order, a new field starts ascending
    pub fn toggle_sort(&mut self, field: &str) {
        if self.sort_by.as_deref() == Some(field) {
            self.sort_order = self.sort_order.toggled();
        } else {
            self.sort_by = Some(field.to_string());
            self.sort_order = SortOrder::Asc;
        }
        self.reset_page();
    }

    pub fn set_filter(&mut self, key: &str, value: Option<FilterValue>) {
        match value.filter(|v| !v.is_blank()) {
            Some(v) => {
                self.filters.insert(key.to_string(), v);
            }
            None => {
                self.filters.remove(key);
            }
        }
        self.reset_page();
    }

    /// Raw `<select>` value; see [`FilterValue::parse`]
    pub fn set_filter_text(&mut self, key: &str, raw: &str) {
        self.set_filter(key, FilterValue::parse(raw));
    }

    pub fn clear_filters(&mut self) {
        self.search.clear();
        self.filters.clear();
        self.reset_page();
    }

    pub fn filter(&self, key: &str) -> Option<&FilterValue> {
        self.filters.get(key)
    }

    /// Number of active user-facing filters (search counts as one)
    pub fn active_filter_count(&self) -> usize {
        let search = usize::from(!self.search.trim().is_empty());
        search + self.filters.len()
    }

    /// Wire parameters with empty / `null` values stripped
    pub fn to_query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        let search = self.search.trim();
        if !search.is_empty() && !search.eq_ignore_ascii_case("null") {
            pairs.push(("search".to_string(), search.to_string()));
        }
        pairs.push(("page".to_string(), self.page.max(1).to_string()));
        pairs.push(("limit".to_string(), self.limit.to_string()));
        if let Some(sort_by) = self.sort_by.as_deref().filter(|s| !s.trim().is_empty()) {
            pairs.push(("sortBy".to_string(), sort_by.to_string()));
            pairs.push(("sortOrder".to_string(), self.sort_order.code().to_string()));
        }
        for (key, value) in &self.filters {
            if !value.is_blank() {
                pairs.push((key.clone(), value.to_string()));
            }
        }
        pairs
    }

    /// Stable serialization used as a cache-key segment
    pub fn cache_fragment(&self) -> String {
        self.to_query_pairs()
            .into_iter()
            .map(|(k, v)| format!("{}={}", k, v))
            .collect::<Vec<_>>()
            .join("&")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn on_page_three() -> ListQuery {
        let mut query = ListQuery::default();
        query.set_page(3);
        query
    }

    #[test]
    fn test_page_is_at_least_one() {
        let mut query = ListQuery::default();
        query.set_page(0);
        assert_eq!(query.page, 1);
    }

    #[test]
    fn test_set_page_keeps_other_params() {
        let mut query = ListQuery::default().with_filter("isActive", true);
        query.set_search("web");
        query.set_page(4);
        assert_eq!(query.page, 4);
        assert_eq!(query.search, "web");
        assert_eq!(query.filter("isActive"), Some(&FilterValue::Bool(true)));
    }

    #[test]
    fn test_every_other_setter_resets_page() {
        let setters: Vec<Box<dyn Fn(&mut ListQuery)>> = vec![
            Box::new(|q: &mut ListQuery| q.set_search("foo")),
            Box::new(|q: &mut ListQuery| q.set_limit(25)),
            Box::new(|q: &mut ListQuery| q.set_limit_text("50")),
            Box::new(|q: &mut ListQuery| q.set_limit_text("abc")),
            Box::new(|q: &mut ListQuery| q.set_sort(Some("createdAt".into()), SortOrder::Desc)),
            Box::new(|q: &mut ListQuery| q.toggle_sort("name")),
            Box::new(|q: &mut ListQuery| q.set_filter("status", Some("new".into()))),
            Box::new(|q: &mut ListQuery| q.set_filter_text("isFeatured", "true")),
            Box::new(|q: &mut ListQuery| q.set_filter("status", None)),
            Box::new(|q: &mut ListQuery| q.clear_filters()),
        ];
        for setter in setters {
            let mut query = on_page_three();
            setter(&mut query);
            assert_eq!(query.page, 1);
        }
    }

    #[test]
    fn test_limit_text_coercion() {
        let mut query = ListQuery::default();
        query.set_limit_text(" 25 ");
        assert_eq!(query.limit, 25);
        query.set_limit_text("many");
        assert_eq!(query.limit, 25);
        query.set_limit_text("0");
        assert_eq!(query.limit, 25);
    }

    #[test]
    fn test_toggle_sort() {
        let mut query = ListQuery::default();
        query.toggle_sort("name");
        assert_eq!(query.sort_by.as_deref(), Some("name"));
        assert_eq!(query.sort_order, SortOrder::Asc);
        query.toggle_sort("name");
        assert_eq!(query.sort_order, SortOrder::Desc);
        query.toggle_sort("createdAt");
        assert_eq!(query.sort_by.as_deref(), Some("createdAt"));
        assert_eq!(query.sort_order, SortOrder::Asc);
    }

    #[test]
    fn test_null_filters_are_dropped() {
        let mut query = ListQuery::default();
        query.set_filter_text("categoryId", "null");
        query.set_filter_text("status", "");
        query.set_filter("locale", Some(FilterValue::Text("null".into())));
        assert!(query.filters.is_empty());
    }

    #[test]
    fn test_filter_value_parse() {
        assert_eq!(FilterValue::parse("true"), Some(FilterValue::Bool(true)));
        assert_eq!(FilterValue::parse("12"), Some(FilterValue::Number(12)));
        assert_eq!(
            FilterValue::parse("web"),
            Some(FilterValue::Text("web".into()))
        );
        assert_eq!(FilterValue::parse("undefined"), None);
    }

    #[test]
    fn test_query_pairs() {
        let mut query = ListQuery::with_limit(20)
            .sorted_by("orderIndex", SortOrder::Desc)
            .with_filter("isActive", true);
        query.set_search("  mobile ");
        let pairs = query.to_query_pairs();
        assert_eq!(
            pairs,
            vec![
                ("search".to_string(), "mobile".to_string()),
                ("page".to_string(), "1".to_string()),
                ("limit".to_string(), "20".to_string()),
                ("sortBy".to_string(), "orderIndex".to_string()),
                ("sortOrder".to_string(), "desc".to_string()),
                ("isActive".to_string(), "true".to_string()),
            ]
        );
    }

    #[test]
    fn test_query_pairs_skip_empty_search_and_sort() {
        let query = ListQuery::default();
        let keys: Vec<String> = query.to_query_pairs().into_iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["page", "limit"]);
    }

    #[test]
    fn test_cache_fragment_is_order_stable() {
        let a = ListQuery::default()
            .with_filter("status", "new")
            .with_filter("isActive", true);
        let b = ListQuery::default()
            .with_filter("isActive", true)
            .with_filter("status", "new");
        assert_eq!(a.cache_fragment(), b.cache_fragment());
        assert_eq!(a.cache_fragment(), "page=1&limit=10&isActive=true&status=new");
    }

    #[test]
    fn test_active_filter_count() {
        let mut query = ListQuery::default().with_filter("status", "read");
        assert_eq!(query.active_filter_count(), 1);
        query.set_search("acme");
        assert_eq!(query.active_filter_count(), 2);
        query.clear_filters();
        assert_eq!(query.active_filter_count(), 0);
    }
}
