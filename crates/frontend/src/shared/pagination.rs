//! Pagination presenter: which controls are enabled and the "A - B" range.

use contracts::shared::pagination::PaginationMeta;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationView {
    pub page: u32,
    pub total_pages: u32,
    pub total: u64,
    pub can_first: bool,
    pub can_prev: bool,
    pub can_next: bool,
    pub can_last: bool,
    pub range: String,
}

impl PaginationView {
    pub fn from_meta(meta: &PaginationMeta) -> Self {
        Self {
            page: meta.page,
            total_pages: meta.total_pages,
            total: meta.total,
            can_first: meta.is_prev_page,
            can_prev: meta.is_prev_page,
            can_next: meta.is_next_page,
            can_last: meta.is_next_page,
            range: range_label(meta),
        }
    }

    pub fn prev_page(&self) -> u32 {
        self.page.saturating_sub(1).max(1)
    }

    pub fn next_page(&self) -> u32 {
        (self.page + 1).min(self.total_pages.max(1))
    }

    pub fn last_page(&self) -> u32 {
        self.total_pages.max(1)
    }
}

/// `"A - B"` with `A = (page-1)*limit+1` and `B = min(page*limit, total)`.
/// An empty set reads `"0 - 0"`; past the last page `A` is clamped to `B`.
pub fn range_label(meta: &PaginationMeta) -> String {
    if meta.total == 0 {
        return "0 - 0".to_string();
    }
    let page = meta.page.max(1) as u64;
    let limit = meta.limit as u64;
    let end = (page * limit).min(meta.total);
    let start = ((page - 1) * limit + 1).min(end);
    format!("{} - {}", start, end)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_range() {
        assert_eq!(range_label(&PaginationMeta::synthesize(0, 1, 10)), "0 - 0");
    }

    #[test]
    fn test_last_partial_page() {
        assert_eq!(range_label(&PaginationMeta::synthesize(25, 3, 10)), "21 - 25");
        assert_eq!(range_label(&PaginationMeta::synthesize(25, 1, 10)), "1 - 10");
    }

    #[test]
    fn test_page_past_the_end_is_clamped() {
        assert_eq!(range_label(&PaginationMeta::synthesize(25, 5, 10)), "25 - 25");
    }

    #[test]
    fn test_controls_follow_flags() {
        let first = PaginationView::from_meta(&PaginationMeta::synthesize(25, 1, 10));
        assert!(!first.can_first && !first.can_prev);
        assert!(first.can_next && first.can_last);
        assert_eq!(first.next_page(), 2);
        assert_eq!(first.last_page(), 3);

        let last = PaginationView::from_meta(&PaginationMeta::synthesize(25, 3, 10));
        assert!(last.can_prev && !last.can_next);
        assert_eq!(last.prev_page(), 2);

        let empty = PaginationView::from_meta(&PaginationMeta::synthesize(0, 1, 10));
        assert!(!empty.can_prev && !empty.can_next);
        assert_eq!(empty.last_page(), 1);
    }
}
