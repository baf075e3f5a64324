//! Table pipeline: sort, year-filter, delta-annotate, paginate.
//!
//! Pure function of a series plus view parameters. The caller owns the
//! selection state and re-invokes on every change; nothing is cached here.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use std::collections::BTreeSet;

use crate::domain::{ObservedPoint, Series};

/// Rows per table page.
pub const PAGE_SIZE: usize = 12;

/// Year selection for the table view. Ephemeral presentation state, never
/// persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum YearFilter {
    /// Keep every point.
    All,
    /// Keep points whose calendar year matches.
    Year(i32),
}

impl YearFilter {
    pub fn matches(&self, date: NaiveDate) -> bool {
        match self {
            YearFilter::All => true,
            YearFilter::Year(y) => date.year() == *y,
        }
    }
}

/// One rendered table row.
///
/// `change` is the delta vs. the chronologically previous point of the
/// *filtered* set; `None` for the oldest row in the view.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RowView {
    pub date: NaiveDate,
    pub value: f64,
    pub change: Option<f64>,
}

/// Output of the table pipeline: one page of rows plus paging totals.
#[derive(Debug, Clone, PartialEq)]
pub struct TableView {
    /// At most [`PAGE_SIZE`] rows, newest first. Empty for out-of-range pages.
    pub rows: Vec<RowView>,
    /// Number of points surviving the year filter.
    pub total_filtered: usize,
    /// `ceil(total_filtered / PAGE_SIZE)`; zero when the filter matches nothing.
    pub total_pages: usize,
}

/// Renders one page of the table view.
///
/// Steps, in order: sort descending by date, apply the year filter, annotate
/// each row with its delta vs. the next (chronologically previous) row, then
/// slice out the requested 1-based page.
///
/// Out-of-range pages (including `page == 0`) yield an empty `rows` slice
/// rather than an error; the UI disables its paging controls instead.
pub fn table_view(series: &Series, filter: YearFilter, page: usize) -> TableView {
    let mut sorted: Vec<&ObservedPoint> = series.iter().collect();
    // Stable sort: duplicate dates (producer contract violation) keep
    // arrival order instead of erroring.
    sorted.sort_by(|a, b| b.date.cmp(&a.date));

    let filtered: Vec<&ObservedPoint> = sorted
        .into_iter()
        .filter(|p| filter.matches(p.date))
        .collect();

    let total_filtered = filtered.len();
    let total_pages = total_filtered.div_ceil(PAGE_SIZE);

    let rows = match page {
        0 => Vec::new(),
        _ => {
            let start = (page - 1) * PAGE_SIZE;
            let end = (start + PAGE_SIZE).min(total_filtered);
            if start >= total_filtered {
                Vec::new()
            } else {
                (start..end)
                    .map(|i| RowView {
                        date: filtered[i].date,
                        value: filtered[i].value,
                        // i + 1 is the chronologically previous point.
                        change: filtered.get(i + 1).map(|prev| filtered[i].value - prev.value),
                    })
                    .collect()
            }
        }
    };

    TableView {
        rows,
        total_filtered,
        total_pages,
    }
}

/// Distinct years present in the unfiltered series, newest first.
///
/// Offered by the presentation layer as the year-filter options.
pub fn available_years(series: &Series) -> Vec<i32> {
    let years: BTreeSet<i32> = series.iter().map(|p| p.date.year()).collect();
    years.into_iter().rev().collect()
}
