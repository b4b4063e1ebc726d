//! Turns one location and one day of observations into a [`Document`] with a
//! Spanish narrative built from the threshold classifier's categories.

use crate::synthesis::error::SynthesisError;
use crate::types::condition::Measurement;
use crate::types::document::{document_id, Document, DocumentMetadata};
use crate::types::location::Location;
use crate::types::observation::DailyObservation;

/// The four observation values once every field is known to be present.
struct Readings {
    temp_max: f64,
    temp_min: f64,
    precipitation: f64,
    wind_speed: f64,
}

impl Readings {
    fn from_observation(
        location: &Location,
        observation: &DailyObservation,
    ) -> Result<Self, SynthesisError> {
        let require = |value: Option<f64>, field: &'static str| {
            value.ok_or_else(|| SynthesisError::MissingField {
                field,
                city: location.name.clone(),
                date: observation.date,
            })
        };
        Ok(Self {
            temp_max: require(observation.temp_max, "temperature_2m_max")?,
            temp_min: require(observation.temp_min, "temperature_2m_min")?,
            precipitation: require(observation.precipitation, "precipitation_sum")?,
            wind_speed: require(observation.wind_speed, "windspeed_10m_max")?,
        })
    }
}

/// Synthesizes the document for `location` on `observation.date`.
///
/// The narrative concatenates, in order: a header sentence naming the place and date,
/// the raw measurements with their units, and one qualitative clause each for
/// precipitation, maximum temperature and wind. Raw values are embedded unrounded;
/// the metadata copies are rounded to two decimals.
///
/// Pure and deterministic: the same inputs always produce the same document.
///
/// # Errors
///
/// Returns [`SynthesisError::MissingField`] if any of the four numeric fields is absent.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use weather_corpus::{synthesize, DailyObservation, LatLon, Location};
///
/// let location = Location::new("Tehuantepec", LatLon(16.3486, -95.2621), "Istmo de Tehuantepec", "Oaxaca", "México");
/// let date = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
/// let doc = synthesize(&location, &DailyObservation::complete(date, 36.0, 24.5, 0.0, 8.2)).unwrap();
///
/// assert_eq!(doc.id, "tehuantepec_2025-06-01");
/// assert!(doc.text.ends_with("Día sin lluvia. Día extremadamente caluroso. Vientos ligeros."));
/// ```
pub fn synthesize(
    location: &Location,
    observation: &DailyObservation,
) -> Result<Document, SynthesisError> {
    let readings = Readings::from_observation(location, observation)?;
    let date = observation.date;

    let precipitation = Measurement::Precipitation.classify(readings.precipitation);
    let temperature = Measurement::MaxTemperature.classify(readings.temp_max);
    let wind = Measurement::WindSpeed.classify(readings.wind_speed);

    let text = [
        format!(
            "{}, {}, {}, {} - Fecha: {}.",
            location.name, location.region, location.state, location.country, date
        ),
        format!(
            "Condiciones: Temperatura máxima {}°C, mínima {}°C.",
            raw(readings.temp_max),
            raw(readings.temp_min)
        ),
        format!("Precipitación acumulada: {} mm.", raw(readings.precipitation)),
        format!("Velocidad máxima del viento: {} km/h.", raw(readings.wind_speed)),
        precipitation.clause(readings.precipitation),
        temperature.clause(readings.temp_max),
        wind.clause(readings.wind_speed),
    ]
    .join(" ");

    Ok(Document {
        id: document_id(&location.name, date),
        city: location.name.clone(),
        region: location.region.clone(),
        state: location.state.clone(),
        country: location.country.clone(),
        date,
        text,
        metadata: DocumentMetadata {
            temp_max_celsius: round2(readings.temp_max),
            temp_min_celsius: round2(readings.temp_min),
            precipitation_mm: round2(readings.precipitation),
            wind_speed_kmh: round2(readings.wind_speed),
            latitude: location.coordinates.latitude(),
            longitude: location.coordinates.longitude(),
            region: location.region.clone(),
        },
    })
}

/// Shortest round-trip form, keeping one decimal on integral values (`25` prints `25.0`).
fn raw(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        value.to_string()
    }
}

/// Rounds to two decimals from the exact decimal expansion of `value`: `2.675` is
/// stored as 2.67499... and becomes `2.67`.
fn round2(value: f64) -> f64 {
    format!("{value:.2}").parse().unwrap_or(value)
}
