//! Indicator - one catalog record: metadata plus its series and forecast.

use serde::{Deserialize, Serialize};

use crate::stats::{series_stats, SeriesStats};

use super::series::{ForecastSeries, Series};

/// A macroeconomic indicator as shipped in a static JSON file.
///
/// Everything except `data`/`forecast` is pass-through display metadata; the
/// view pipelines never read it. Field names follow the exporter's camelCase
/// convention (`nameEn`, `sourceUrl`).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Indicator {
    /// Stable catalog key, e.g. `cpi`.
    pub code: String,
    /// Russian display name.
    pub name: String,
    #[serde(default)]
    pub name_en: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    /// Display unit, `%` for index-style indicators.
    #[serde(default = "default_unit")]
    pub unit: String,
    /// Human-readable cadence, e.g. "Ежемесячно".
    #[serde(default)]
    pub frequency: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub methodology: String,
    #[serde(default)]
    pub source: String,
    #[serde(default)]
    pub source_url: String,
    /// Historical observations; arrival order is not guaranteed.
    pub data: Series,
    /// Pre-generated SARIMA forecast, when the exporter produced one.
    #[serde(default)]
    pub forecast: Option<ForecastSeries>,
    /// Pre-computed extremes/mean; recomputed when absent.
    #[serde(default)]
    pub stats: Option<SeriesStats>,
}

fn default_unit() -> String {
    "%".to_string()
}

impl Indicator {
    /// Pre-computed stats when the file carries them, otherwise computed
    /// from the series. `None` only for an empty series.
    pub fn summary_stats(&self) -> Option<SeriesStats> {
        self.stats.or_else(|| series_stats(&self.data))
    }

    pub fn forecast(&self) -> Option<&ForecastSeries> {
        self.forecast.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ObservedPoint;
    use chrono::NaiveDate;

    fn sample_json() -> &'static str {
        r#"{
            "code": "cpi",
            "name": "Индекс потребительских цен",
            "nameEn": "Consumer Price Index",
            "frequency": "Ежемесячно",
            "source": "Росстат",
            "sourceUrl": "https://rosstat.gov.ru",
            "data": [
                {"date": "2024-01", "value": 100.86},
                {"date": "2024-02", "value": 100.68}
            ],
            "forecast": [
                {"date": "2024-03", "value": 100.5, "lower": 100.1, "upper": 100.9}
            ]
        }"#
    }

    #[test]
    fn parses_exporter_json() {
        let ind: Indicator = serde_json::from_str(sample_json()).unwrap();
        assert_eq!(ind.code, "cpi");
        assert_eq!(ind.name_en.as_deref(), Some("Consumer Price Index"));
        assert_eq!(ind.unit, "%");
        assert_eq!(ind.data.len(), 2);
        assert_eq!(ind.forecast().unwrap().len(), 1);
        assert_eq!(
            ind.data.points()[0].date,
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
        );
    }

    #[test]
    fn summary_stats_computed_when_absent() {
        let ind: Indicator = serde_json::from_str(sample_json()).unwrap();
        assert!(ind.stats.is_none());
        let stats = ind.summary_stats().unwrap();
        assert_eq!(stats.highest.value, 100.86);
        assert_eq!(stats.lowest.value, 100.68);
    }

    #[test]
    fn precomputed_stats_pass_through_unchanged() {
        let mut ind: Indicator = serde_json::from_str(sample_json()).unwrap();
        ind.stats = Some(SeriesStats {
            highest: ObservedPoint {
                date: NaiveDate::from_ymd_opt(1998, 12, 1).unwrap(),
                value: 138.4,
            },
            lowest: ObservedPoint {
                date: NaiveDate::from_ymd_opt(2017, 8, 1).unwrap(),
                value: 99.46,
            },
            average: 104.2,
        });
        // The exporter's numbers win over recomputation.
        assert_eq!(ind.summary_stats().unwrap().highest.value, 138.4);
    }
}
