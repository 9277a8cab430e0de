use super::*;

struct Row {
    name: &'static str,
    phone: &'static str,
}

fn rows() -> Vec<Row> {
    vec![
        Row { name: "Asha Rao", phone: "98450" },
        Row { name: "Ravi Kumar", phone: "99000" },
        Row { name: "Meera", phone: "98111" },
    ]
}

fn names(found: &[&Row]) -> Vec<&'static str> {
    found.iter().map(|r| r.name).collect()
}

// =============================================================
// Filtering
// =============================================================

#[test]
fn filter_matches_case_insensitive_substring() {
    let data = rows();
    let found = filter_rows(&data, "RAV", |r| vec![r.name, r.phone]);
    assert_eq!(names(&found), vec!["Ravi Kumar"]);
}

#[test]
fn filter_checks_every_indexed_field() {
    let data = rows();
    let found = filter_rows(&data, "98", |r| vec![r.name, r.phone]);
    assert_eq!(names(&found), vec!["Asha Rao", "Meera"]);
}

#[test]
fn filter_ignores_fields_not_indexed() {
    let data = rows();
    assert!(filter_rows(&data, "98", |r| vec![r.name]).is_empty());
}

#[test]
fn blank_term_keeps_everything() {
    let data = rows();
    assert_eq!(filter_rows(&data, "   ", |r| vec![r.name]).len(), 3);
}

// =============================================================
// Ordering
// =============================================================

#[test]
fn display_order_sort_is_stable() {
    let mut data = vec![("b", 2), ("a", 1), ("c", 2), ("d", 0)];
    sort_by_display_order(&mut data, |r| r.1);
    assert_eq!(data.iter().map(|r| r.0).collect::<Vec<_>>(), vec!["d", "a", "b", "c"]);
}

#[test]
fn serial_is_zero_padded() {
    assert_eq!(serial(0), "01");
    assert_eq!(serial(9), "10");
    assert_eq!(serial(120), "121");
}

// =============================================================
// Paging
// =============================================================

#[test]
fn total_pages_rounds_up_and_is_at_least_one() {
    let p = Pagination::default();
    assert_eq!(p.total_pages(0), 1);
    assert_eq!(p.total_pages(10), 1);
    assert_eq!(p.total_pages(11), 2);
}

#[test]
fn slice_returns_requested_page() {
    let data: Vec<u32> = (1..=25).collect();
    let p = Pagination { page: 3, per_page: 10 };
    assert_eq!(p.slice(&data), &[21, 22, 23, 24, 25]);
}

#[test]
fn serial_continues_across_pages() {
    let data: Vec<u32> = (1..=60).collect();
    let p = Pagination { page: 3, per_page: 20 };
    assert_eq!(p.offset(), 40);
    let first = p.slice(&data)[0];
    assert_eq!(first, 41);
    assert_eq!(serial(p.offset()), "41");
    assert_eq!(Pagination::default().offset(), 0);
}

#[test]
fn slice_past_end_is_empty() {
    let data: Vec<u32> = (1..=5).collect();
    let p = Pagination { page: 4, per_page: 10 };
    assert!(p.slice(&data).is_empty());
}

#[test]
fn clamp_pulls_page_back_after_rows_shrink() {
    let mut p = Pagination { page: 5, per_page: 10 };
    p.clamp(12);
    assert_eq!(p.page, 2);
    p.clamp(0);
    assert_eq!(p.page, 1);
}

#[test]
fn range_label_reports_visible_window() {
    let p = Pagination { page: 2, per_page: 10 };
    assert_eq!(p.range_label(42), "Showing 11\u{2013}20 of 42");
    assert_eq!(Pagination { page: 5, per_page: 10 }.range_label(42), "Showing 41\u{2013}42 of 42");
    assert_eq!(p.range_label(0), "Showing 0 of 0");
}

#[test]
fn prev_next_flags() {
    let p = Pagination { page: 1, per_page: 10 };
    assert!(!p.has_prev());
    assert!(p.has_next(11));
    assert!(!p.has_next(10));
}

#[test]
fn changing_page_size_resets_to_first_page() {
    let mut p = Pagination { page: 3, per_page: 10 };
    p.set_per_page(20);
    assert_eq!(p, Pagination { page: 1, per_page: 20 });
}
