//! Client-side filtering, ordering and paging for list screens.

#[cfg(test)]
#[path = "list_test.rs"]
mod list_test;

use crate::config::DEFAULT_PAGE_SIZE;

/// Keep rows where any of `fields` contains `term`, ignoring case. A blank
/// term keeps every row.
pub fn filter_rows<'a, T, F>(rows: &'a [T], term: &str, fields: F) -> Vec<&'a T>
where
    F: Fn(&T) -> Vec<&str>,
{
    let needle = term.trim().to_lowercase();
    if needle.is_empty() {
        return rows.iter().collect();
    }
    rows.iter()
        .filter(|row| fields(row).iter().any(|field| field.to_lowercase().contains(&needle)))
        .collect()
}

/// Stable sort by a display-order key.
pub fn sort_by_display_order<T, F>(rows: &mut [T], key: F)
where
    F: Fn(&T) -> i64,
{
    rows.sort_by_key(|row| key(row));
}

/// `1` -> `01`.
pub fn serial(index: usize) -> String {
    format!("{:02}", index + 1)
}

/// One-based page over an in-memory list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pagination {
    pub page: usize,
    pub per_page: usize,
}

impl Default for Pagination {
    fn default() -> Self {
        Self { page: 1, per_page: DEFAULT_PAGE_SIZE }
    }
}

impl Pagination {
    pub fn total_pages(&self, total: usize) -> usize {
        total.div_ceil(self.per_page.max(1)).max(1)
    }

    /// Pull `page` back into range after the row count shrinks.
    pub fn clamp(&mut self, total: usize) {
        self.page = self.page.clamp(1, self.total_pages(total));
    }

    /// Absolute index of the first row on the current page.
    pub fn offset(&self) -> usize {
        (self.page.max(1) - 1).saturating_mul(self.per_page.max(1))
    }

    pub fn slice<'a, T>(&self, rows: &'a [T]) -> &'a [T] {
        let per_page = self.per_page.max(1);
        let start = self.offset().min(rows.len());
        let end = start.saturating_add(per_page).min(rows.len());
        &rows[start..end]
    }

    /// `Showing 11–20 of 42`.
    pub fn range_label(&self, total: usize) -> String {
        if total == 0 {
            return "Showing 0 of 0".to_owned();
        }
        let per_page = self.per_page.max(1);
        let start = (self.page.max(1) - 1) * per_page + 1;
        let end = (start + per_page - 1).min(total);
        format!("Showing {start}\u{2013}{end} of {total}")
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self, total: usize) -> bool {
        self.page < self.total_pages(total)
    }

    pub fn set_per_page(&mut self, per_page: usize) {
        self.per_page = per_page.max(1);
        self.page = 1;
    }
}
