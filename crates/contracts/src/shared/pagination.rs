use serde::{Deserialize, Serialize};

/// Pagination metadata returned by the backend or synthesized on the client
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationMeta {
    pub total: u64,
    pub page: u32,
    pub limit: u32,
    #[serde(default)]
    pub total_pages: u32,
    #[serde(default)]
    pub is_next_page: bool,
    #[serde(default)]
    pub is_prev_page: bool,
}

impl PaginationMeta {
    /// Build metadata for a result set of `total` records
    pub fn synthesize(total: u64, page: u32, limit: u32) -> Self {
        let page = page.max(1);
        let total_pages = total_pages(total, limit);
        Self {
            total,
            page,
            limit,
            total_pages,
            is_next_page: page < total_pages,
            is_prev_page: page > 1,
        }
    }

    /// Offset of the first record on the current page
    pub fn offset(&self) -> usize {
        page_offset(self.page, self.limit)
    }
}

impl Default for PaginationMeta {
    fn default() -> Self {
        Self::synthesize(0, 1, crate::shared::query::DEFAULT_LIMIT)
    }
}

/// Metadata as the backend sends it; any derived field may be absent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawPaginationMeta {
    pub total: u64,
    pub page: u32,
    pub limit: u32,
    #[serde(default)]
    pub total_pages: Option<u32>,
    #[serde(default)]
    pub is_next_page: Option<bool>,
    #[serde(default)]
    pub is_prev_page: Option<bool>,
}

impl RawPaginationMeta {
    /// Keep what the backend sent, derive only what it left out
    pub fn resolve(self) -> PaginationMeta {
        let derived = PaginationMeta::synthesize(self.total, self.page, self.limit);
        PaginationMeta {
            total_pages: self.total_pages.unwrap_or(derived.total_pages),
            is_next_page: self.is_next_page.unwrap_or(derived.is_next_page),
            is_prev_page: self.is_prev_page.unwrap_or(derived.is_prev_page),
            ..derived
        }
    }
}

/// `ceil(total / limit)`, zero for an empty set or a zero limit
pub fn total_pages(total: u64, limit: u32) -> u32 {
    if limit == 0 {
        return 0;
    }
    total.div_ceil(limit as u64).min(u32::MAX as u64) as u32
}

pub fn page_offset(page: u32, limit: u32) -> usize {
    (page.max(1) as usize - 1) * limit as usize
}

/// Uniform `{data, meta}` shape every collection query resolves to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paginated<T> {
    pub data: Vec<T>,
    pub meta: PaginationMeta,
}

impl<T> Paginated<T> {
    pub fn empty(page: u32, limit: u32) -> Self {
        Self {
            data: Vec::new(),
            meta: PaginationMeta::synthesize(0, page, limit),
        }
    }

    /// Client-side pagination over an already filtered, unpaginated list
    pub fn from_slice(items: Vec<T>, page: u32, limit: u32) -> Self {
        let meta = PaginationMeta::synthesize(items.len() as u64, page, limit);
        let start = meta.offset().min(items.len());
        let end = start.saturating_add(limit as usize).min(items.len());
        let data = items
            .into_iter()
            .skip(start)
            .take(end - start)
            .collect();
        Self { data, meta }
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn map<U, F: FnMut(T) -> U>(self, f: F) -> Paginated<U> {
        Paginated {
            data: self.data.into_iter().map(f).collect(),
            meta: self.meta,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(0, 10), 0);
        assert_eq!(total_pages(23, 10), 3);
        assert_eq!(total_pages(20, 10), 2);
        assert_eq!(total_pages(5, 0), 0);
    }

    #[test]
    fn test_synthesize_flags() {
        let meta = PaginationMeta::synthesize(23, 2, 10);
        assert_eq!(meta.total_pages, 3);
        assert!(meta.is_next_page);
        assert!(meta.is_prev_page);

        let last = PaginationMeta::synthesize(23, 3, 10);
        assert!(!last.is_next_page);

        let empty = PaginationMeta::synthesize(0, 1, 10);
        assert_eq!(empty.total_pages, 0);
        assert!(!empty.is_next_page);
        assert!(!empty.is_prev_page);
    }

    #[test]
    fn test_from_slice_second_page() {
        let items: Vec<u32> = (0..23).collect();
        let page = Paginated::from_slice(items, 2, 10);
        assert_eq!(page.data, (10..20).collect::<Vec<_>>());
        assert_eq!(page.meta.total, 23);
        assert_eq!(page.meta.total_pages, 3);
    }

    #[test]
    fn test_from_slice_past_the_end() {
        let items: Vec<u32> = (0..5).collect();
        let page = Paginated::from_slice(items, 4, 10);
        assert!(page.is_empty());
        assert_eq!(page.meta.total, 5);
    }

    #[test]
    fn test_meta_deserializes_without_derived_fields() {
        let meta: RawPaginationMeta =
            serde_json::from_str(r#"{"total":25,"page":3,"limit":10}"#).unwrap();
        let meta = meta.resolve();
        assert_eq!(meta.total_pages, 3);
        assert!(meta.is_prev_page);
        assert!(!meta.is_next_page);
    }

    #[test]
    fn test_raw_meta_keeps_backend_flags() {
        let raw: RawPaginationMeta = serde_json::from_str(
            r#"{"total":10,"page":1,"limit":10,"totalPages":2,"isNextPage":true}"#,
        )
        .unwrap();
        let meta = raw.resolve();
        assert_eq!(meta.total_pages, 2);
        assert!(meta.is_next_page);
        assert!(!meta.is_prev_page);
    }

    #[test]
    fn test_raw_meta_derives_missing_fields() {
        let raw: RawPaginationMeta =
            serde_json::from_str(r#"{"total":25,"page":3,"limit":10,"isPrevPage":null}"#).unwrap();
        assert_eq!(raw.resolve(), PaginationMeta::synthesize(25, 3, 10));
    }
}
