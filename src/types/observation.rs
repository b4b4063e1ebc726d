use chrono::NaiveDate;

/// One day of observations for one location.
///
/// Each numeric field is optional because the upstream series may carry gaps (`null`
/// entries). A document can only be synthesized when all four are present.
#[derive(Debug, PartialEq, Clone)]
pub struct DailyObservation {
    pub date: NaiveDate,
    pub temp_max: Option<f64>,      // temperature_2m_max (°C)
    pub temp_min: Option<f64>,      // temperature_2m_min (°C)
    pub precipitation: Option<f64>, // precipitation_sum (mm)
    pub wind_speed: Option<f64>,    // windspeed_10m_max (km/h)
}

impl DailyObservation {
    /// An observation with every field present.
    pub fn complete(
        date: NaiveDate,
        temp_max: f64,
        temp_min: f64,
        precipitation: f64,
        wind_speed: f64,
    ) -> Self {
        Self {
            date,
            temp_max: Some(temp_max),
            temp_min: Some(temp_min),
            precipitation: Some(precipitation),
            wind_speed: Some(wind_speed),
        }
    }
}
