//! Observed and forecast points - the fundamental series units.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// One observed value of an indicator for a single month.
///
/// Dates carry year-month granularity; the day component is normalized to 1
/// by the upstream exporter and by [`month_date`] deserialization.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ObservedPoint {
    #[serde(with = "month_date")]
    pub date: NaiveDate,
    pub value: f64,
}

/// One pre-computed forecast value with its 95% confidence bounds.
///
/// Produced out-of-band by the SARIMA exporter. `lower <= value <= upper`
/// is a producer contract, checked at ingest (not by the view pipelines).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ForecastPoint {
    #[serde(with = "month_date")]
    pub date: NaiveDate,
    pub value: f64,
    pub lower: f64,
    pub upper: f64,
}

impl ForecastPoint {
    /// Bounds sanity: finite values with `lower <= value <= upper`.
    pub fn is_sane(&self) -> bool {
        self.value.is_finite()
            && self.lower.is_finite()
            && self.upper.is_finite()
            && self.lower <= self.value
            && self.value <= self.upper
    }

    /// Width of the confidence interval.
    pub fn interval_width(&self) -> f64 {
        self.upper - self.lower
    }
}

/// Parses a month-granularity date: `YYYY-MM-DD` or bare `YYYY-MM`.
///
/// The day component, when present, is normalized to the first of the month.
pub fn parse_month_date(s: &str) -> Option<NaiveDate> {
    let parsed = NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(&format!("{s}-01"), "%Y-%m-%d"))
        .ok()?;
    parsed.with_day(1)
}

/// Serde adapter for month-granularity dates.
///
/// Accepts both `"2024-03"` and `"2024-03-01"` on input; always writes the
/// full `YYYY-MM-DD` form so exported files stay chrono-compatible.
pub mod month_date {
    use chrono::NaiveDate;
    use serde::{self, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&date.format("%Y-%m-%d").to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        super::parse_month_date(&s)
            .ok_or_else(|| serde::de::Error::custom(format!("bad month date '{s}'")))
    }
}
