//! Defines the `Document` record, the unit of the corpus, and its persisted shape.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One narrative record describing a single location's weather on a single day.
///
/// The field order and names here are the persisted line format: one JSON object per
/// line with `id`, `city`, `region`, `state`, `country`, `date` (`YYYY-MM-DD`), `text`
/// and a nested `metadata` object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Derived from city and date, unique across the corpus. See [`document_id`].
    pub id: String,
    pub city: String,
    pub region: String,
    pub state: String,
    pub country: String,
    pub date: NaiveDate,
    /// The synthesized narrative. Never empty.
    pub text: String,
    pub metadata: DocumentMetadata,
}

/// Numeric copies of the day's observations, rounded to two decimals, plus the
/// location's region and coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentMetadata {
    pub temp_max_celsius: f64,
    pub temp_min_celsius: f64,
    pub precipitation_mm: f64,
    pub wind_speed_kmh: f64,
    pub latitude: f64,
    pub longitude: f64,
    pub region: String,
}

/// Builds the stable document id for a city and date.
///
/// The city name is lower-cased and spaces become underscores; accents are kept.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use weather_corpus::document_id;
///
/// let date = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
/// assert_eq!(document_id("Oaxaca de Juárez", date), "oaxaca_de_juárez_2025-06-01");
/// ```
pub fn document_id(city: &str, date: NaiveDate) -> String {
    format!("{}_{}", city.to_lowercase().replace(' ', "_"), date)
}
