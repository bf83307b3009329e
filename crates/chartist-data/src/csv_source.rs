//! CSV price source.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use chrono::{NaiveDate, NaiveDateTime};
use csv::ReaderBuilder;
use serde::Deserialize;

use chartist_core::error::DataError;
use chartist_core::traits::PriceSource;
use chartist_core::types::{PricePoint, TimeSeries};

/// CSV record format.
#[derive(Debug, Deserialize)]
struct CsvRecord {
    #[serde(alias = "Date", alias = "timestamp", alias = "Timestamp")]
    date: String,
    #[serde(alias = "Close", alias = "Adj Close")]
    close: f64,
}

/// Daily close loader backed by an exported CSV file.
pub struct CsvPriceSource {
    path: PathBuf,
}

impl CsvPriceSource {
    /// Create a new CSV price source.
    pub fn new(path: impl AsRef<Path>) -> Result<Self, DataError> {
        let path = path.as_ref().to_path_buf();
        if !path.exists() {
            return Err(DataError::Unavailable);
        }
        Ok(Self { path })
    }

    fn load_range(&self, start: NaiveDate, end: NaiveDate) -> Result<TimeSeries, DataError> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_path(&self.path)
            .map_err(|e| DataError::Parse(e.to_string()))?;

        let mut points = Vec::new();
        for result in reader.deserialize() {
            let record: CsvRecord = result.map_err(|e| DataError::Parse(e.to_string()))?;

            let date = parse_date(&record.date)?;
            if date < start || date > end {
                continue;
            }
            if !record.close.is_finite() || record.close < 0.0 {
                return Err(DataError::Parse(format!(
                    "invalid close {} on {}",
                    record.close, date
                )));
            }
            points.push(PricePoint::new(date_to_millis(date), record.close));
        }

        if points.is_empty() {
            return Err(DataError::Unavailable);
        }

        points.sort_by_key(|p| p.timestamp);
        TimeSeries::from_points(&points)
    }
}

#[async_trait]
impl PriceSource for CsvPriceSource {
    async fn fetch_daily_close(
        &self,
        _symbol: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<TimeSeries, DataError> {
        if start > end {
            return Err(DataError::InvalidRange { start, end });
        }
        self.load_range(start, end)
    }

    fn name(&self) -> &str {
        "csv"
    }
}

fn date_to_millis(date: NaiveDate) -> i64 {
    date.and_hms_opt(0, 0, 0)
        .unwrap()
        .and_utc()
        .timestamp_millis()
}

/// Parse the date formats commonly seen in exported price files.
fn parse_date(date_str: &str) -> Result<NaiveDate, DataError> {
    let formats = ["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y", "%d-%m-%Y"];

    for format in formats {
        if let Ok(date) = NaiveDate::parse_from_str(date_str, format) {
            return Ok(date);
        }
    }

    // Datetime-stamped exports keep their date part
    if let Ok(dt) = NaiveDateTime::parse_from_str(date_str, "%Y-%m-%d %H:%M:%S") {
        return Ok(dt.date());
    }

    Err(DataError::Parse(format!(
        "could not parse date: {date_str}"
    )))
}
