//! Sample data generator for the TUI.
//!
//! Produces a realistic-looking CPI indicator so the dashboard runs without
//! any data files: seasonal shape, decaying 90s-style volatility, a
//! 12-month forecast with widening confidence bounds.

use chrono::{Datelike, NaiveDate};
use rustat_core::data::LoadedIndicator;
use rustat_core::domain::{ForecastPoint, Indicator, ObservedPoint, Series};
use rustat_core::fingerprint::DatasetHash;
use std::path::PathBuf;

/// Monthly seasonal pressure on consumer prices, strongest in winter.
const SEASONAL: [f64; 12] = [
    1.4, 0.9, 0.6, 0.4, 0.3, 0.2, 0.1, -0.1, 0.1, 0.4, 0.6, 0.9,
];

pub fn sample_catalog() -> Vec<LoadedIndicator> {
    vec![sample_cpi()]
}

fn sample_cpi() -> LoadedIndicator {
    let start = NaiveDate::from_ymd_opt(1995, 1, 1).unwrap();
    let months = 30 * 12 + 6; // 1995-01 .. 2025-06
    let data = build_series(start, months, 42);
    let forecast = build_forecast(&data);

    let indicator = Indicator {
        code: "cpi".to_string(),
        name: "Индекс потребительских цен".to_string(),
        name_en: Some("Consumer Price Index".to_string()),
        category: Some("Инфляция".to_string()),
        unit: "%".to_string(),
        frequency: "Ежемесячно".to_string(),
        description: "Изменение стоимости фиксированной потребительской корзины \
                      товаров и услуг, % к предыдущему месяцу."
            .to_string(),
        methodology: "Демонстрационные данные, сгенерированные детерминированно; \
                      форма ряда имитирует публикации Росстата."
            .to_string(),
        source: "Образец (встроенный)".to_string(),
        source_url: String::new(),
        data,
        forecast: Some(forecast),
        stats: None,
    };

    let bytes = serde_json::to_vec(&indicator).expect("sample indicator must serialize");
    LoadedIndicator {
        dataset_hash: DatasetHash::from_bytes(&bytes),
        indicator,
        path: PathBuf::from("<sample>"),
    }
}

/// Deterministic pseudo-random series: LCG noise over a seasonal base, with
/// volatility decaying from the 90s toward the present.
fn build_series(start: NaiveDate, months: usize, seed: u64) -> Series {
    let mut state = seed;
    let mut y = start.year();
    let mut m = start.month();

    (0..months)
        .map(|i| {
            state = state
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            let u = ((state >> 33) as f64) / (u32::MAX as f64) * 2.0 - 1.0;

            // Early years swing several points; recent years well under one.
            let progress = i as f64 / months as f64;
            let volatility = 3.0 * (1.0 - progress).powi(2) + 0.25;
            let value = 100.6 + SEASONAL[(m - 1) as usize] * (0.4 + progress * 0.4) + u * volatility;

            let point = ObservedPoint {
                date: NaiveDate::from_ymd_opt(y, m, 1).unwrap(),
                value,
            };
            m += 1;
            if m > 12 {
                m = 1;
                y += 1;
            }
            point
        })
        .collect()
}

/// Twelve months past the series end, bounds widening with the horizon.
fn build_forecast(data: &Series) -> rustat_core::domain::ForecastSeries {
    let anchor = data.last_date().expect("sample series is non-empty");
    let mut y = anchor.year();
    let mut m = anchor.month();

    (0..12)
        .map(|i| {
            m += 1;
            if m > 12 {
                m = 1;
                y += 1;
            }
            let value = 100.4 + SEASONAL[(m - 1) as usize] * 0.35;
            let width = 0.25 + 0.12 * i as f64;
            ForecastPoint {
                date: NaiveDate::from_ymd_opt(y, m, 1).unwrap(),
                value,
                lower: value - width,
                upper: value + width,
            }
        })
        .collect()
}
