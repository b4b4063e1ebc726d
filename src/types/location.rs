//! Defines the locations a corpus is built for.

use serde::{Deserialize, Serialize};

/// Represents a geographical coordinate using latitude and longitude.
///
/// Latitude is the first element (index 0), and longitude is the second (index 1).
///
/// # Examples
///
/// ```
/// use weather_corpus::LatLon;
///
/// let oaxaca = LatLon(17.0627, -96.7236);
/// assert_eq!(oaxaca.0, 17.0627); // Latitude
/// assert_eq!(oaxaca.1, -96.7236); // Longitude
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLon(pub f64, pub f64);

impl LatLon {
    pub fn latitude(&self) -> f64 {
        self.0
    }

    pub fn longitude(&self) -> f64 {
        self.1
    }
}

/// A named place observations are retrieved for.
///
/// Locations are defined once at startup and never change during a run. The `name`
/// is the unique key and, together with a date, determines the document id.
#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    /// Display name, e.g. "Oaxaca de Juárez".
    pub name: String,
    /// Where the observations are taken.
    pub coordinates: LatLon,
    /// Region label within the state, e.g. "Costa".
    pub region: String,
    pub state: String,
    pub country: String,
}

impl Location {
    pub fn new(
        name: impl Into<String>,
        coordinates: LatLon,
        region: impl Into<String>,
        state: impl Into<String>,
        country: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            coordinates,
            region: region.into(),
            state: state.into(),
            country: country.into(),
        }
    }
}

pub const OAXACA_STATE: &str = "Oaxaca";
pub const MEXICO_COUNTRY: &str = "México";

const OAXACA_CITIES: [(&str, f64, f64, &str); 8] = [
    ("Oaxaca de Juárez", 17.0627, -96.7236, "Región Central"),
    ("Tehuantepec", 16.3486, -95.2621, "Istmo de Tehuantepec"),
    ("Puerto Escondido", 15.8537, -97.0731, "Costa"),
    ("Huajuapan de León", 17.8000, -97.7833, "Región Mixteca"),
    ("Ixtlán de Juárez", 17.3128, -96.4586, "Sierra Norte"),
    ("Miahuatlán de Porfirio Díaz", 16.3658, -96.5847, "Región Centro"),
    ("Teotitlán de Flores Magón", 17.3458, -96.3789, "Sierra Norte"),
    ("San Juan Bautista Tuxtepec", 18.1548, -96.1245, "Papaloapan"),
];

/// The eight locations across the regions of Oaxaca, México that the default corpus covers.
pub fn oaxaca_locations() -> Vec<Location> {
    OAXACA_CITIES
        .iter()
        .map(|(name, lat, lon, region)| {
            Location::new(*name, LatLon(*lat, *lon), *region, OAXACA_STATE, MEXICO_COUNTRY)
        })
        .collect()
}
