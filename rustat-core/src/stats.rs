//! Descriptive statistics over a series.
//!
//! Everything here is display-support math for the summary cards and the
//! per-year statistics table; the numbers are computed on demand when the
//! data file does not carry pre-computed ones.

use chrono::Datelike;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::{ObservedPoint, Series};
use crate::view::{table_view, YearFilter};

/// Extremes and mean of a whole series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeriesStats {
    pub highest: ObservedPoint,
    pub lowest: ObservedPoint,
    pub average: f64,
}

/// The latest observation with its delta vs. the previous period.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Snapshot {
    pub date: chrono::NaiveDate,
    pub value: f64,
    pub change: Option<f64>,
}

/// Per-year aggregate row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct YearlyStats {
    pub year: i32,
    pub mean: f64,
    pub std_dev: f64,
    pub min: f64,
    pub max: f64,
    pub count: usize,
}

/// Extremes and mean; `None` for an empty series.
///
/// Ties on an extreme value resolve to the chronologically earliest point.
pub fn series_stats(series: &Series) -> Option<SeriesStats> {
    let mut iter = series.iter();
    let first = *iter.next()?;

    let mut highest = first;
    let mut lowest = first;
    let mut sum = first.value;

    for p in iter {
        if p.value > highest.value || (p.value == highest.value && p.date < highest.date) {
            highest = *p;
        }
        if p.value < lowest.value || (p.value == lowest.value && p.date < lowest.date) {
            lowest = *p;
        }
        sum += p.value;
    }

    Some(SeriesStats {
        highest,
        lowest,
        average: sum / series.len() as f64,
    })
}

/// The newest point and its month-over-month delta.
///
/// Exactly the first row of the unfiltered table view, so the summary card
/// and the table can never disagree.
pub fn latest_snapshot(series: &Series) -> Option<Snapshot> {
    let row = table_view(series, YearFilter::All, 1).rows.into_iter().next()?;
    Some(Snapshot {
        date: row.date,
        value: row.value,
        change: row.change,
    })
}

/// Mean of the last `months` points in chronological order.
pub fn trailing_average(series: &Series, months: usize) -> Option<f64> {
    trailing_block_average(series, months, 0)
}

/// Mean of the `months` points immediately preceding the trailing block,
/// for the "vs. the year before" delta on the summary card.
pub fn previous_trailing_average(series: &Series, months: usize) -> Option<f64> {
    trailing_block_average(series, months, months)
}

fn trailing_block_average(series: &Series, months: usize, skip_last: usize) -> Option<f64> {
    if months == 0 {
        return None;
    }
    let mut points: Vec<&ObservedPoint> = series.iter().collect();
    points.sort_by_key(|p| p.date);

    let kept = points.len().checked_sub(skip_last)?;
    let block = &points[kept.saturating_sub(months)..kept];
    if block.is_empty() {
        return None;
    }
    Some(block.iter().map(|p| p.value).sum::<f64>() / block.len() as f64)
}

/// Per-year mean / population std-dev / min / max, ascending by year.
pub fn yearly_stats(series: &Series) -> Vec<YearlyStats> {
    let mut by_year: BTreeMap<i32, Vec<f64>> = BTreeMap::new();
    for p in series.iter() {
        by_year.entry(p.date.year()).or_default().push(p.value);
    }

    by_year
        .into_iter()
        .map(|(year, values)| {
            let count = values.len();
            let mean = values.iter().sum::<f64>() / count as f64;
            let variance =
                values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / count as f64;
            let min = values.iter().copied().fold(f64::INFINITY, f64::min);
            let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
            YearlyStats {
                year,
                mean,
                std_dev: variance.sqrt(),
                min,
                max,
                count,
            }
        })
        .collect()
}

/// Year × month pivot for the seasonality view, ascending by year.
///
/// Slot `[m - 1]` holds the value observed in month `m`; duplicate dates
/// resolve to the last arrival.
pub fn month_matrix(series: &Series) -> Vec<(i32, [Option<f64>; 12])> {
    let mut by_year: BTreeMap<i32, [Option<f64>; 12]> = BTreeMap::new();
    for p in series.iter() {
        let row = by_year.entry(p.date.year()).or_insert([None; 12]);
        row[p.date.month0() as usize] = Some(p.value);
    }
    by_year.into_iter().collect()
}
