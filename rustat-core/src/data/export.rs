//! CSV export of historical and forecast series.

use std::io::Write;

use crate::domain::{ForecastSeries, ObservedPoint, Series};

use super::ingest::DataError;

/// Writes `date,value` rows in chronological order.
pub fn write_series_csv<W: Write>(writer: W, series: &Series) -> Result<(), DataError> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(["date", "value"]).map_err(csv_err)?;

    let mut points: Vec<&ObservedPoint> = series.iter().collect();
    points.sort_by_key(|p| p.date);

    for p in points {
        wtr.write_record([p.date.format("%Y-%m-%d").to_string(), format_value(p.value)])
            .map_err(csv_err)?;
    }
    wtr.flush().map_err(|e| DataError::Write(e.to_string()))
}

/// Writes `date,value,lower,upper` rows in exporter order.
pub fn write_forecast_csv<W: Write>(
    writer: W,
    forecast: &ForecastSeries,
) -> Result<(), DataError> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(["date", "value", "lower", "upper"])
        .map_err(csv_err)?;

    for f in forecast.iter() {
        wtr.write_record([
            f.date.format("%Y-%m-%d").to_string(),
            format_value(f.value),
            format_value(f.lower),
            format_value(f.upper),
        ])
        .map_err(csv_err)?;
    }
    wtr.flush().map_err(|e| DataError::Write(e.to_string()))
}

/// Shortest round-trip float form; full precision, no display rounding.
fn format_value(v: f64) -> String {
    format!("{v}")
}

fn csv_err(e: csv::Error) -> DataError {
    DataError::Write(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ForecastPoint;
    use chrono::NaiveDate;

    fn pt(y: i32, m: u32, value: f64) -> ObservedPoint {
        ObservedPoint {
            date: NaiveDate::from_ymd_opt(y, m, 1).unwrap(),
            value,
        }
    }

    #[test]
    fn series_csv_is_chronological() {
        let s = Series::new(vec![pt(2024, 2, 100.68), pt(2024, 1, 100.86)]);
        let mut buf = Vec::new();
        write_series_csv(&mut buf, &s).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(
            text,
            "date,value\n2024-01-01,100.86\n2024-02-01,100.68\n"
        );
    }

    #[test]
    fn forecast_csv_keeps_bounds() {
        let f: ForecastSeries = vec![ForecastPoint {
            date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            value: 100.5,
            lower: 100.1,
            upper: 100.9,
        }]
        .into_iter()
        .collect();

        let mut buf = Vec::new();
        write_forecast_csv(&mut buf, &f).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(
            text,
            "date,value,lower,upper\n2024-03-01,100.5,100.1,100.9\n"
        );
    }

    #[test]
    fn empty_series_writes_header_only() {
        let mut buf = Vec::new();
        write_series_csv(&mut buf, &Series::default()).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "date,value\n");
    }
}
