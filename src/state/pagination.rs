//! Client-side pagination over in-memory lists.

#[cfg(test)]
#[path = "pagination_test.rs"]
mod pagination_test;

/// Rows per page on the list screens.
pub const PAGE_SIZE: usize = 10;

/// Number of pages for `len` items: `ceil(len / page_size)`.
pub fn page_count(len: usize, page_size: usize) -> usize {
    len.div_ceil(page_size)
}

/// The 1-indexed page `page` of `items`: elements `[(page-1)*P, page*P)`,
/// clamped to the list bounds. Out-of-range pages yield an empty slice.
pub fn page_slice<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    let start = page.saturating_sub(1).saturating_mul(page_size);
    let start = start.min(items.len());
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}

/// One entry of the rendered page-number strip.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageItem {
    Page(usize),
    Ellipsis,
}

/// Windowed page numbers: first and last pages always shown, one neighbor on
/// each side of the current page, runs of hidden pages collapsed into a
/// single ellipsis.
pub fn page_numbers(current: usize, total: usize) -> Vec<PageItem> {
    const DELTA: usize = 1;

    let mut items = Vec::new();
    for page in 1..=total {
        let near_current =
            page + DELTA >= current && page <= current + DELTA;
        if page == 1 || page == total || near_current {
            items.push(PageItem::Page(page));
        } else if items.last() != Some(&PageItem::Ellipsis) {
            items.push(PageItem::Ellipsis);
        }
    }
    items
}
