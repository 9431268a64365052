use super::*;

// =============================================================
// page_count
// =============================================================

#[test]
fn page_count_is_ceiling_division() {
    assert_eq!(page_count(0, 10), 0);
    assert_eq!(page_count(1, 10), 1);
    assert_eq!(page_count(10, 10), 1);
    assert_eq!(page_count(11, 10), 2);
    assert_eq!(page_count(25, 10), 3);
}

// =============================================================
// page_slice
// =============================================================

#[test]
fn page_slice_returns_requested_window() {
    let items: Vec<usize> = (0..25).collect();
    assert_eq!(page_slice(&items, 1, 10), (0..10).collect::<Vec<_>>());
    assert_eq!(page_slice(&items, 2, 10), (10..20).collect::<Vec<_>>());
}

#[test]
fn page_slice_clamps_last_page() {
    let items: Vec<usize> = (0..25).collect();
    assert_eq!(page_slice(&items, 3, 10), (20..25).collect::<Vec<_>>());
}

#[test]
fn page_slice_out_of_range_is_empty() {
    let items: Vec<usize> = (0..5).collect();
    assert!(page_slice(&items, 4, 10).is_empty());
    assert!(page_slice::<usize>(&[], 1, 10).is_empty());
}

#[test]
fn page_slice_treats_page_zero_as_first() {
    let items: Vec<usize> = (0..5).collect();
    assert_eq!(page_slice(&items, 0, 10), page_slice(&items, 1, 10));
}

// =============================================================
// page_numbers
// =============================================================

#[test]
fn page_numbers_small_totals_have_no_ellipsis() {
    assert_eq!(
        page_numbers(1, 3),
        vec![PageItem::Page(1), PageItem::Page(2), PageItem::Page(3)]
    );
}

#[test]
fn page_numbers_collapse_distant_pages() {
    assert_eq!(
        page_numbers(1, 10),
        vec![
            PageItem::Page(1),
            PageItem::Page(2),
            PageItem::Ellipsis,
            PageItem::Page(10),
        ]
    );
}

#[test]
fn page_numbers_window_around_current() {
    assert_eq!(
        page_numbers(5, 10),
        vec![
            PageItem::Page(1),
            PageItem::Ellipsis,
            PageItem::Page(4),
            PageItem::Page(5),
            PageItem::Page(6),
            PageItem::Ellipsis,
            PageItem::Page(10),
        ]
    );
}

#[test]
fn page_numbers_empty_when_no_pages() {
    assert!(page_numbers(1, 0).is_empty());
}
