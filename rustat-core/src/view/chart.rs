//! Chart pipeline: trailing-window selection and historical/forecast merge.
//!
//! The merge is an ordered map keyed by date, not a sequence concatenation:
//! the no-duplicate-date invariant falls out of the container, and the join
//! point is the single entry carrying both series.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use std::collections::BTreeMap;
use std::str::FromStr;

use crate::domain::{ForecastSeries, Series};

/// Trailing window over the historical series, anchored at its last date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Window {
    OneYear,
    FiveYears,
    TenYears,
    All,
}

impl Window {
    /// Years back from the anchor, `None` for the full series.
    pub fn years_back(&self) -> Option<i32> {
        match self {
            Window::OneYear => Some(1),
            Window::FiveYears => Some(5),
            Window::TenYears => Some(10),
            Window::All => None,
        }
    }

    /// Short form used by the CLI and config files: `1y`, `5y`, `10y`, `all`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Window::OneYear => "1y",
            Window::FiveYears => "5y",
            Window::TenYears => "10y",
            Window::All => "all",
        }
    }

    /// Cycle order for the UI period selector.
    pub fn next(&self) -> Window {
        match self {
            Window::OneYear => Window::FiveYears,
            Window::FiveYears => Window::TenYears,
            Window::TenYears => Window::All,
            Window::All => Window::OneYear,
        }
    }
}

impl FromStr for Window {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1y" => Ok(Window::OneYear),
            "5y" => Ok(Window::FiveYears),
            "10y" => Ok(Window::TenYears),
            "all" => Ok(Window::All),
            other => Err(format!("unknown window '{other}' (expected 1y, 5y, 10y, all)")),
        }
    }
}

/// One chart-ready point.
///
/// Exactly one of `value`/`forecast` is set, except at the join point (the
/// last historical date when the forecast overlay is on), which carries both.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ChartPoint {
    pub date: NaiveDate,
    pub value: Option<f64>,
    pub forecast: Option<f64>,
    pub lower: Option<f64>,
    pub upper: Option<f64>,
}

impl ChartPoint {
    fn blank(date: NaiveDate) -> Self {
        Self {
            date,
            value: None,
            forecast: None,
            lower: None,
            upper: None,
        }
    }
}

/// Builds the chronologically ascending chart sequence.
///
/// Window selection always anchors on the *historical* series' last date,
/// whether or not a forecast is supplied. With the overlay on, the last
/// historical point is re-emitted with a zero-width forecast interval so the
/// two line segments meet without a gap.
///
/// An empty historical series produces an empty output even when a forecast
/// is supplied; an empty forecast is treated as absent.
pub fn chart_series(
    series: &Series,
    forecast: Option<&ForecastSeries>,
    window: Window,
    show_forecast: bool,
) -> Vec<ChartPoint> {
    let Some(anchor) = series.last_date() else {
        return Vec::new();
    };

    let start = match window.years_back() {
        Some(n) => first_of_month(anchor.year() - n, anchor.month()),
        // Non-empty series: first_date is present whenever last_date is.
        None => series.first_date().unwrap_or(anchor),
    };

    let mut merged: BTreeMap<NaiveDate, ChartPoint> = BTreeMap::new();
    for p in series.iter().filter(|p| p.date >= start) {
        // Duplicate dates: last arrival wins.
        let entry = merged.entry(p.date).or_insert_with(|| ChartPoint::blank(p.date));
        entry.value = Some(p.value);
    }

    let overlay = forecast.filter(|f| !f.is_empty());
    if show_forecast {
        if let Some(fc) = overlay {
            // Join point: the anchor carries both series, with a degenerate
            // (zero-width) interval at the last historical value.
            if let Some(join) = merged.get_mut(&anchor) {
                if let Some(v) = join.value {
                    join.forecast = Some(v);
                    join.lower = Some(v);
                    join.upper = Some(v);
                }
            }
            for f in fc.iter() {
                let entry = merged.entry(f.date).or_insert_with(|| ChartPoint::blank(f.date));
                entry.forecast = Some(f.value);
                entry.lower = Some(f.lower);
                entry.upper = Some(f.upper);
            }
        }
    }

    merged.into_values().collect()
}

/// First day of the given month; month comes from a valid `NaiveDate`.
fn first_of_month(year: i32, month: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, 1).expect("first of a valid month")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ForecastPoint, ObservedPoint};

    fn pt(y: i32, m: u32, value: f64) -> ObservedPoint {
        ObservedPoint {
            date: NaiveDate::from_ymd_opt(y, m, 1).unwrap(),
            value,
        }
    }

    fn fpt(y: i32, m: u32, value: f64, lower: f64, upper: f64) -> ForecastPoint {
        ForecastPoint {
            date: NaiveDate::from_ymd_opt(y, m, 1).unwrap(),
            value,
            lower,
            upper,
        }
    }

    fn monthly(from_year: i32, from_month: u32, count: usize) -> Series {
        let mut y = from_year;
        let mut m = from_month;
        let mut points = Vec::with_capacity(count);
        for i in 0..count {
            points.push(pt(y, m, 100.0 + i as f64));
            m += 1;
            if m > 12 {
                m = 1;
                y += 1;
            }
        }
        Series::new(points)
    }

    #[test]
    fn window_start_normalizes_to_first_of_anchor_month() {
        // Anchor 2025-06, 1y window: start = 2024-06-01.
        let s = monthly(1991, 1, (2025 - 1991) * 12 + 6);
        assert_eq!(s.last_date(), NaiveDate::from_ymd_opt(2025, 6, 1));

        let out = chart_series(&s, None, Window::OneYear, false);
        assert_eq!(out.first().unwrap().date, NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());
        assert_eq!(out.len(), 13); // 2024-06 ..= 2025-06 inclusive
    }

    #[test]
    fn all_window_keeps_everything() {
        let s = monthly(2020, 1, 30);
        let out = chart_series(&s, None, Window::All, false);
        assert_eq!(out.len(), 30);
    }

    #[test]
    fn output_is_strictly_ascending() {
        let s = Series::new(vec![pt(2024, 3, 3.0), pt(2024, 1, 1.0), pt(2024, 2, 2.0)]);
        let out = chart_series(&s, None, Window::All, false);
        assert!(out.windows(2).all(|w| w[0].date < w[1].date));
    }

    #[test]
    fn no_forecast_fields_when_overlay_off() {
        let s = monthly(2024, 1, 6);
        let fc: ForecastSeries = vec![fpt(2024, 7, 101.0, 100.0, 102.0)].into_iter().collect();
        let out = chart_series(&s, Some(&fc), Window::All, false);
        assert!(out.iter().all(|p| {
            p.forecast.is_none() && p.lower.is_none() && p.upper.is_none()
        }));
    }

    #[test]
    fn join_point_carries_both_series_with_zero_width_interval() {
        let s = monthly(2024, 1, 6); // last = 2024-06, value 105.0
        let fc: ForecastSeries = vec![
            fpt(2024, 7, 106.0, 104.0, 108.0),
            fpt(2024, 8, 107.0, 104.0, 110.0),
        ]
        .into_iter()
        .collect();

        let out = chart_series(&s, Some(&fc), Window::All, true);
        assert_eq!(out.len(), 8);

        let joins: Vec<&ChartPoint> = out
            .iter()
            .filter(|p| p.value.is_some() && p.forecast.is_some())
            .collect();
        assert_eq!(joins.len(), 1);

        let join = joins[0];
        assert_eq!(join.date, NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());
        assert_eq!(join.value, Some(105.0));
        assert_eq!(join.forecast, Some(105.0));
        assert_eq!(join.lower, Some(105.0));
        assert_eq!(join.upper, Some(105.0));
    }

    #[test]
    fn one_point_per_distinct_date_in_merged_output() {
        let s = monthly(2024, 1, 6);
        let fc: ForecastSeries = vec![fpt(2024, 7, 106.0, 104.0, 108.0)].into_iter().collect();
        let out = chart_series(&s, Some(&fc), Window::All, true);

        let mut dates: Vec<NaiveDate> = out.iter().map(|p| p.date).collect();
        let before = dates.len();
        dates.dedup();
        assert_eq!(dates.len(), before);
    }

    #[test]
    fn window_clips_history_but_join_survives() {
        let s = monthly(2010, 1, 180); // 15 years, last = 2024-12
        let fc: ForecastSeries = vec![fpt(2025, 1, 200.0, 195.0, 205.0)].into_iter().collect();
        let out = chart_series(&s, Some(&fc), Window::OneYear, true);

        // 2023-12 ..= 2024-12 historical (13) + one forecast month.
        assert_eq!(out.len(), 14);
        assert_eq!(
            out.iter().filter(|p| p.value.is_some() && p.forecast.is_some()).count(),
            1
        );
    }

    #[test]
    fn empty_series_is_empty_even_with_forecast() {
        let fc: ForecastSeries = vec![fpt(2025, 1, 1.0, 0.0, 2.0)].into_iter().collect();
        assert!(chart_series(&Series::default(), Some(&fc), Window::All, true).is_empty());
    }

    #[test]
    fn empty_forecast_behaves_like_absent() {
        let s = monthly(2024, 1, 3);
        let out = chart_series(&s, Some(&ForecastSeries::default()), Window::All, true);
        assert!(out.iter().all(|p| p.forecast.is_none()));
        assert_eq!(out.len(), 3);
    }

    #[test]
    fn single_point_series_survives_every_window() {
        let s = Series::new(vec![pt(2024, 6, 100.0)]);
        for w in [Window::OneYear, Window::FiveYears, Window::TenYears, Window::All] {
            let out = chart_series(&s, None, w, false);
            assert_eq!(out.len(), 1, "window {w:?}");
        }
    }

    #[test]
    fn window_round_trips_through_from_str() {
        for w in [Window::OneYear, Window::FiveYears, Window::TenYears, Window::All] {
            assert_eq!(w.as_str().parse::<Window>().unwrap(), w);
        }
        assert!("2y".parse::<Window>().is_err());
    }
}
