//! Page arithmetic for the pagination controls.

/// Width of the compact page window.
pub const COMPACT_WINDOW: u64 = 5;

/// Up to this many pages are all shown in the ellipsis layout.
pub const SHOW_ALL_UP_TO: u64 = 7;

/// 1-based inclusive row range shown on `page`. An empty result set gives
/// `(0, 0)`.
pub fn showing_range(page: u64, limit: u64, total: u64) -> (u64, u64) {
    if total == 0 || limit == 0 {
        return (0, 0);
    }
    let start = (page.max(1) - 1) * limit + 1;
    let end = (page.max(1) * limit).min(total);
    (start.min(total), end)
}

pub fn is_visible(total_pages: u64) -> bool {
    total_pages > 1
}

/// Whether moving to `page` is allowed.
pub fn in_range(page: u64, total_pages: u64) -> bool {
    (1..=total_pages).contains(&page)
}

/// Parse the quick jump input, accepting only pages that exist.
pub fn parse_jump(input: &str, total_pages: u64) -> Option<u64> {
    input
        .trim()
        .parse::<u64>()
        .ok()
        .filter(|page| in_range(*page, total_pages))
}

/// Up to five consecutive pages around `page`.
pub fn compact_window(page: u64, total_pages: u64) -> Vec<u64> {
    if total_pages == 0 {
        return Vec::new();
    }
    let start = total_pages
        .saturating_sub(COMPACT_WINDOW - 1)
        .min(page.saturating_sub(2))
        .max(1);
    let end = (start + COMPACT_WINDOW - 1).min(total_pages);
    (start..=end).collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    Page(u64),
    Ellipsis,
}

/// First and last page always, the neighbours of `page`, and ellipses for
/// the gaps.
pub fn ellipsis_window(page: u64, total_pages: u64) -> Vec<PageItem> {
    if total_pages <= SHOW_ALL_UP_TO {
        return (1..=total_pages).map(PageItem::Page).collect();
    }
    let mut items = vec![PageItem::Page(1)];
    if page > 4 {
        items.push(PageItem::Ellipsis);
    }
    let start = page.saturating_sub(1).max(2);
    let end = (page + 1).min(total_pages - 1);
    items.extend((start..=end).map(PageItem::Page));
    if page < total_pages - 3 {
        items.push(PageItem::Ellipsis);
    }
    items.push(PageItem::Page(total_pages));
    items
}

#[cfg(test)]
mod tests {
    use super::*;
    use PageItem::{Ellipsis, Page};

    #[test]
    fn showing_range_clamps_to_total() {
        assert_eq!(showing_range(1, 10, 1), (1, 1));
        assert_eq!(showing_range(2, 10, 35), (11, 20));
        assert_eq!(showing_range(4, 10, 35), (31, 35));
        assert_eq!(showing_range(1, 10, 0), (0, 0));
    }

    #[test]
    fn single_page_is_hidden() {
        assert!(!is_visible(0));
        assert!(!is_visible(1));
        assert!(is_visible(2));
    }

    #[test]
    fn compact_window_slides_with_page() {
        assert_eq!(compact_window(1, 3), vec![1, 2, 3]);
        assert_eq!(compact_window(1, 10), vec![1, 2, 3, 4, 5]);
        assert_eq!(compact_window(5, 10), vec![3, 4, 5, 6, 7]);
        assert_eq!(compact_window(10, 10), vec![6, 7, 8, 9, 10]);
        assert_eq!(compact_window(9, 10), vec![6, 7, 8, 9, 10]);
    }

    #[test]
    fn short_ranges_show_every_page() {
        assert_eq!(
            ellipsis_window(3, 7),
            (1..=7).map(Page).collect::<Vec<_>>()
        );
    }

    #[test]
    fn long_ranges_collapse_with_ellipses() {
        assert_eq!(
            ellipsis_window(1, 20),
            vec![Page(1), Page(2), Ellipsis, Page(20)]
        );
        assert_eq!(
            ellipsis_window(10, 20),
            vec![Page(1), Ellipsis, Page(9), Page(10), Page(11), Ellipsis, Page(20)]
        );
        assert_eq!(
            ellipsis_window(20, 20),
            vec![Page(1), Ellipsis, Page(19), Page(20)]
        );
        assert_eq!(
            ellipsis_window(4, 10),
            vec![Page(1), Page(3), Page(4), Page(5), Ellipsis, Page(10)]
        );
    }

    #[test]
    fn jumps_outside_the_range_are_ignored() {
        assert_eq!(parse_jump("3", 5), Some(3));
        assert_eq!(parse_jump(" 5 ", 5), Some(5));
        assert_eq!(parse_jump("0", 5), None);
        assert_eq!(parse_jump("6", 5), None);
        assert_eq!(parse_jump("two", 5), None);
        assert!(!in_range(0, 0));
    }
}
