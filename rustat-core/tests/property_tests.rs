//! Property tests for the view-pipeline invariants.
//!
//! Uses proptest to verify:
//! 1. Pagination — pages partition the filtered series exactly
//! 2. Delta annotation — newest-first deltas match value differences
//! 3. Chart merge — unique ascending dates, single join point
//! 4. Overlay flag — no forecast fields leak when the overlay is off

use chrono::NaiveDate;
use proptest::prelude::*;
use std::collections::HashSet;

use rustat_core::domain::{ForecastPoint, ForecastSeries, ObservedPoint, Series};
use rustat_core::view::{available_years, chart_series, table_view, Window, YearFilter, PAGE_SIZE};

// ── Strategies (proptest) ────────────────────────────────────────────

/// A series of up to 120 monthly points with unique dates, in shuffled
/// arrival order, values in a CPI-ish band.
fn arb_series() -> impl Strategy<Value = Series> {
    (
        1991i32..2024,
        1u32..=12,
        0usize..120,
        proptest::collection::vec(90.0..140.0f64, 120),
        any::<u64>(),
    )
        .prop_map(|(start_year, start_month, count, values, seed)| {
            let mut points = Vec::with_capacity(count);
            let mut y = start_year;
            let mut m = start_month;
            for value in values.into_iter().take(count) {
                points.push(ObservedPoint {
                    date: NaiveDate::from_ymd_opt(y, m, 1).unwrap(),
                    value,
                });
                m += 1;
                if m > 12 {
                    m = 1;
                    y += 1;
                }
            }
            // Deterministic shuffle so pipelines see unsorted arrival order.
            let mut state = seed | 1;
            for i in (1..points.len()).rev() {
                state = state
                    .wrapping_mul(6364136223846793005)
                    .wrapping_add(1442695040888963407);
                let j = (state >> 33) as usize % (i + 1);
                points.swap(i, j);
            }
            Series::new(points)
        })
}

/// A forecast contiguous with the series anchor, up to 24 months.
fn arb_forecast(anchor: NaiveDate) -> impl Strategy<Value = ForecastSeries> {
    use chrono::Datelike;
    (1usize..=24, proptest::collection::vec((95.0..135.0f64, 0.1..6.0f64), 24)).prop_map(
        move |(count, samples)| {
            let mut y = anchor.year();
            let mut m = anchor.month();
            samples
                .into_iter()
                .take(count)
                .map(|(value, half_width)| {
                    m += 1;
                    if m > 12 {
                        m = 1;
                        y += 1;
                    }
                    ForecastPoint {
                        date: NaiveDate::from_ymd_opt(y, m, 1).unwrap(),
                        value,
                        lower: value - half_width,
                        upper: value + half_width,
                    }
                })
                .collect()
        },
    )
}

/// A non-empty series paired with a forecast contiguous with its anchor.
fn arb_series_with_forecast() -> impl Strategy<Value = (Series, ForecastSeries)> {
    arb_series()
        .prop_filter("series must be non-empty", |s| !s.is_empty())
        .prop_flat_map(|s| {
            let anchor = s.last_date().unwrap();
            (Just(s), arb_forecast(anchor))
        })
}

fn arb_filter() -> impl Strategy<Value = YearFilter> {
    prop_oneof![
        Just(YearFilter::All),
        (1991i32..2035).prop_map(YearFilter::Year),
    ]
}

fn arb_window() -> impl Strategy<Value = Window> {
    prop_oneof![
        Just(Window::OneYear),
        Just(Window::FiveYears),
        Just(Window::TenYears),
        Just(Window::All),
    ]
}

// ── 1. Pagination ────────────────────────────────────────────────────

proptest! {
    /// Pages partition the filtered series: concatenation loses nothing,
    /// duplicates nothing, and stays newest-first.
    #[test]
    fn pages_partition_the_filtered_series(series in arb_series(), filter in arb_filter()) {
        let first = table_view(&series, filter, 1);
        prop_assert_eq!(first.total_pages, first.total_filtered.div_ceil(PAGE_SIZE));

        let mut seen = Vec::new();
        for page in 1..=first.total_pages {
            let view = table_view(&series, filter, page);
            prop_assert!(view.rows.len() <= PAGE_SIZE);
            seen.extend(view.rows);
        }

        prop_assert_eq!(seen.len(), first.total_filtered);
        prop_assert!(seen.windows(2).all(|w| w[0].date > w[1].date));

        let expected: usize = series.iter().filter(|p| filter.matches(p.date)).count();
        prop_assert_eq!(seen.len(), expected);
    }

    /// Pages past the end are empty, never an error.
    #[test]
    fn out_of_range_pages_are_empty(series in arb_series(), extra in 1usize..10) {
        let view = table_view(&series, YearFilter::All, 1);
        let beyond = table_view(&series, YearFilter::All, view.total_pages + extra);
        prop_assert!(beyond.rows.is_empty());
        prop_assert_eq!(beyond.total_filtered, view.total_filtered);
    }
}

// ── 2. Delta annotation ──────────────────────────────────────────────

proptest! {
    /// Only the oldest row lacks a delta; every other delta equals the
    /// difference with the chronologically previous row.
    #[test]
    fn deltas_match_differences(series in arb_series(), filter in arb_filter()) {
        let first = table_view(&series, filter, 1);
        let rows: Vec<_> = (1..=first.total_pages)
            .flat_map(|page| table_view(&series, filter, page).rows)
            .collect();

        if let Some((oldest, rest)) = rows.split_last() {
            prop_assert!(oldest.change.is_none());
            prop_assert!(rest.iter().all(|r| r.change.is_some()));
        }
        for pair in rows.windows(2) {
            let delta = pair[0].value - pair[1].value;
            prop_assert!((pair[0].change.unwrap() - delta).abs() < 1e-12);
        }
    }

    /// Year options always cover exactly the years of the raw series.
    #[test]
    fn year_options_match_series_years(series in arb_series()) {
        use chrono::Datelike;
        let options = available_years(&series);
        let expected: HashSet<i32> = series.iter().map(|p| p.date.year()).collect();
        prop_assert_eq!(options.len(), expected.len());
        prop_assert!(options.iter().all(|y| expected.contains(y)));
        prop_assert!(options.windows(2).all(|w| w[0] > w[1]));
    }

    /// The yearly-stats table and the year-filter options agree on which
    /// years exist, just in opposite orders.
    #[test]
    fn yearly_stats_years_mirror_year_options(series in arb_series()) {
        let yearly: Vec<i32> = rustat_core::stats::yearly_stats(&series)
            .iter()
            .map(|y| y.year)
            .collect();
        let mut options = available_years(&series);
        options.reverse();
        prop_assert_eq!(yearly, options);
    }
}

// ── 3. Chart merge ───────────────────────────────────────────────────

proptest! {
    /// With the overlay on: unique strictly-ascending dates and exactly one
    /// join point carrying both series at the last historical value.
    #[test]
    fn merge_has_unique_dates_and_single_join(
        (series, forecast) in arb_series_with_forecast(),
        window in arb_window(),
    ) {
        let anchor = series.last_date().unwrap();
        let out = chart_series(&series, Some(&forecast), window, true);

        prop_assert!(out.windows(2).all(|w| w[0].date < w[1].date));

        let joins: Vec<_> = out
            .iter()
            .filter(|p| p.value.is_some() && p.forecast.is_some())
            .collect();
        prop_assert_eq!(joins.len(), 1);
        prop_assert_eq!(joins[0].date, anchor);
        prop_assert_eq!(joins[0].forecast, joins[0].value);
        prop_assert_eq!(joins[0].lower, joins[0].value);
        prop_assert_eq!(joins[0].upper, joins[0].value);
    }

    /// With the overlay off, forecast fields never appear.
    #[test]
    fn overlay_off_has_no_forecast_fields(
        (series, forecast) in arb_series_with_forecast(),
        window in arb_window(),
    ) {
        let out = chart_series(&series, Some(&forecast), window, false);
        prop_assert!(out.iter().all(|p| p.forecast.is_none()
            && p.lower.is_none()
            && p.upper.is_none()));
    }

    /// The window never drops the anchor month.
    #[test]
    fn window_always_retains_the_anchor(series in arb_series(), window in arb_window()) {
        prop_assume!(!series.is_empty());
        let anchor = series.last_date().unwrap();
        let out = chart_series(&series, None, window, false);
        prop_assert_eq!(out.last().unwrap().date, anchor);
    }
}
