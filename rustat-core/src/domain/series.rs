//! Series containers for historical and forecast data.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::point::{ForecastPoint, ObservedPoint};

/// A finite sequence of observed points.
///
/// Dates are unique within a series (producer contract) but the sequence is
/// not guaranteed to arrive sorted; the view pipelines order it themselves.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Series(Vec<ObservedPoint>);

impl Series {
    pub fn new(points: Vec<ObservedPoint>) -> Self {
        Self(points)
    }

    pub fn points(&self) -> &[ObservedPoint] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ObservedPoint> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Chronologically first date, regardless of arrival order.
    pub fn first_date(&self) -> Option<NaiveDate> {
        self.0.iter().map(|p| p.date).min()
    }

    /// Chronologically last date, regardless of arrival order.
    pub fn last_date(&self) -> Option<NaiveDate> {
        self.0.iter().map(|p| p.date).max()
    }
}

impl FromIterator<ObservedPoint> for Series {
    fn from_iter<I: IntoIterator<Item = ObservedPoint>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Series {
    type Item = &'a ObservedPoint;
    type IntoIter = std::slice::Iter<'a, ObservedPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// A finite sequence of forecast points.
///
/// Assumed chronologically contiguous with, and immediately following, the
/// last date of the corresponding historical series. The ingest layer checks
/// bound sanity; contiguity is an unenforced producer precondition.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ForecastSeries(Vec<ForecastPoint>);

impl ForecastSeries {
    pub fn new(points: Vec<ForecastPoint>) -> Self {
        Self(points)
    }

    pub fn points(&self) -> &[ForecastPoint] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ForecastPoint> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// First forecast point in arrival order (the next-month forecast).
    pub fn first(&self) -> Option<&ForecastPoint> {
        self.0.first()
    }
}

impl FromIterator<ForecastPoint> for ForecastSeries {
    fn from_iter<I: IntoIterator<Item = ForecastPoint>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a ForecastSeries {
    type Item = &'a ForecastPoint;
    type IntoIter = std::slice::Iter<'a, ForecastPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
