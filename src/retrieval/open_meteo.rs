//! Retrieval of daily observation series from the Open-Meteo historical archive.
//!
//! The archive answers with index-aligned arrays (`time`, `temperature_2m_max`, ...).
//! A misaligned answer is the upstream's contract violation: missing trailing entries
//! simply surface as missing fields when a day is synthesized.

use crate::retrieval::error::RetrievalError;
use crate::types::location::LatLon;
use crate::types::observation::DailyObservation;
use bon::bon;
use chrono::NaiveDate;
use log::{debug, warn};
use reqwest::blocking::Client;
use serde::Deserialize;
use std::time::Duration;

const ARCHIVE_URL: &str = "https://archive-api.open-meteo.com/v1/archive";
const DAILY_FIELDS: &str = "temperature_2m_max,temperature_2m_min,precipitation_sum,windspeed_10m_max";
const DEFAULT_TIMEZONE: &str = "America/Mexico_City";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// The `daily` block of an archive response. All arrays are aligned by index.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DailySeries {
    pub time: Vec<NaiveDate>,
    pub temperature_2m_max: Vec<Option<f64>>,
    pub temperature_2m_min: Vec<Option<f64>>,
    pub precipitation_sum: Vec<Option<f64>>,
    pub windspeed_10m_max: Vec<Option<f64>>,
}

#[derive(Debug, Deserialize)]
struct ArchiveResponse {
    daily: DailySeries,
}

impl DailySeries {
    /// Number of days in the series, as given by the `time` array.
    pub fn len(&self) -> usize {
        self.time.len()
    }

    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }

    /// The observation at `index`, or `None` past the end of `time`.
    ///
    /// A `null` or absent entry in any numeric array becomes `None` in the returned
    /// observation rather than a default value.
    pub fn observation(&self, index: usize) -> Option<DailyObservation> {
        let date = *self.time.get(index)?;
        let at = |values: &[Option<f64>]| values.get(index).copied().flatten();
        Some(DailyObservation {
            date,
            temp_max: at(&self.temperature_2m_max),
            temp_min: at(&self.temperature_2m_min),
            precipitation: at(&self.precipitation_sum),
            wind_speed: at(&self.windspeed_10m_max),
        })
    }

    /// Every observation in date order.
    pub fn observations(&self) -> impl Iterator<Item = DailyObservation> + '_ {
        (0..self.len()).filter_map(|index| self.observation(index))
    }
}

/// A source of daily observation series for a coordinate and an inclusive date range.
///
/// [`OpenMeteoClient`] is the network implementation; tests and offline runs can
/// provide their own.
pub trait DailySource {
    fn fetch(
        &self,
        location: LatLon,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<DailySeries, RetrievalError>;
}

/// Blocking client for the Open-Meteo archive API. No API key is required.
///
/// # Examples
///
/// ```no_run
/// # use weather_corpus::{DailySource, LatLon, OpenMeteoClient, RetrievalError};
/// # use chrono::NaiveDate;
/// # fn main() -> Result<(), RetrievalError> {
/// let client = OpenMeteoClient::builder().build()?;
/// let start = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
/// let end = NaiveDate::from_ymd_opt(2025, 6, 30).unwrap();
/// let series = client.fetch(LatLon(17.0627, -96.7236), start, end)?;
/// println!("{} days retrieved", series.len());
/// # Ok(())
/// # }
/// ```
pub struct OpenMeteoClient {
    http: Client,
    base_url: String,
    timezone: String,
}

#[bon]
impl OpenMeteoClient {
    /// Creates a client.
    ///
    /// # Arguments
    ///
    /// * `.base_url(..)`: Optional. Archive endpoint. Defaults to the public Open-Meteo archive.
    /// * `.timezone(..)`: Optional. Timezone days are aligned to. Defaults to `America/Mexico_City`.
    /// * `.timeout(Duration)`: Optional. Per-request timeout. Defaults to 10 seconds.
    ///
    /// # Errors
    ///
    /// Returns [`RetrievalError::ClientBuild`] if the HTTP client cannot be initialised.
    #[builder]
    pub fn new(
        #[builder(into)] base_url: Option<String>,
        #[builder(into)] timezone: Option<String>,
        timeout: Option<Duration>,
    ) -> Result<Self, RetrievalError> {
        let http = Client::builder()
            .timeout(timeout.unwrap_or(DEFAULT_TIMEOUT))
            .build()
            .map_err(RetrievalError::ClientBuild)?;
        Ok(Self {
            http,
            base_url: base_url.unwrap_or_else(|| ARCHIVE_URL.to_string()),
            timezone: timezone.unwrap_or_else(|| DEFAULT_TIMEZONE.to_string()),
        })
    }
}

impl DailySource for OpenMeteoClient {
    fn fetch(
        &self,
        location: LatLon,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<DailySeries, RetrievalError> {
        let url = self.base_url.clone();
        let params = [
            ("latitude", location.latitude().to_string()),
            ("longitude", location.longitude().to_string()),
            ("start_date", start.to_string()),
            ("end_date", end.to_string()),
            ("daily", DAILY_FIELDS.to_string()),
            ("temperature_unit", "celsius".to_string()),
            ("timezone", self.timezone.clone()),
        ];
        debug!("Requesting {} with {:?}", url, params);

        let response = self
            .http
            .get(&url)
            .query(&params)
            .send()
            .map_err(|e| RetrievalError::NetworkRequest(url.clone(), e))?;

        let response = match response.error_for_status() {
            Ok(resp) => resp,
            Err(e) => {
                warn!("HTTP error for {}: {:?}", url, e);
                return Err(if let Some(status) = e.status() {
                    RetrievalError::HttpStatus {
                        url,
                        status,
                        source: e,
                    }
                } else {
                    RetrievalError::NetworkRequest(url, e)
                });
            }
        };

        let body: ArchiveResponse = response
            .json()
            .map_err(|e| RetrievalError::Decode(url.clone(), e))?;
        Ok(body.daily)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "latitude": 17.06,
        "longitude": -96.72,
        "daily": {
            "time": ["2025-06-01", "2025-06-02", "2025-06-03"],
            "temperature_2m_max": [27.3, 29.0, null],
            "temperature_2m_min": [15.1, 16.4, 14.0],
            "precipitation_sum": [0.0, 12.5, 3.2],
            "windspeed_10m_max": [8.4, 11.0]
        }
    }"#;

    #[test]
    fn test_decode_archive_response() {
        let response: ArchiveResponse = serde_json::from_str(SAMPLE).unwrap();
        let series = response.daily;
        assert_eq!(series.len(), 3);
        assert_eq!(
            series.observation(1),
            Some(DailyObservation::complete(
                NaiveDate::from_ymd_opt(2025, 6, 2).unwrap(),
                29.0,
                16.4,
                12.5,
                11.0
            ))
        );
    }

    #[test]
    fn test_gaps_become_missing_fields() {
        let series = serde_json::from_str::<ArchiveResponse>(SAMPLE).unwrap().daily;
        let third = series.observation(2).unwrap();
        assert_eq!(third.temp_max, None);
        assert_eq!(third.wind_speed, None);
        assert_eq!(third.precipitation, Some(3.2));
        assert_eq!(series.observation(3), None);
        assert_eq!(series.observations().count(), 3);
    }
}
