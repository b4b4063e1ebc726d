//! Defines the `Condition` enum, the qualitative category a daily measurement falls into,
//! and the ordered threshold scales that map raw values onto those categories.

use std::fmt;

/// The kind of daily measurement being classified.
///
/// Each kind owns a fixed, ordered list of threshold bands. See [`Measurement::classify`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Measurement {
    /// Daily precipitation sum in millimetres.
    Precipitation,
    /// Daily maximum temperature in degrees Celsius.
    MaxTemperature,
    /// Daily maximum wind speed in km/h.
    WindSpeed,
}

/// A descriptive category for one day's measurement.
///
/// Every variant belongs to exactly one [`Measurement`] kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Condition {
    /// Precipitation of exactly 0 mm (or less).
    NoRain,
    /// Precipitation in (0, 10] mm.
    LightPrecipitation,
    /// Precipitation in (10, 50] mm.
    RainyDay,
    /// Precipitation above 50 mm.
    AbundantPrecipitation,
    /// Max temperature at or below 20 °C.
    Cool,
    /// Max temperature in (20, 25] °C.
    Mild,
    /// Max temperature in (25, 30] °C.
    Warm,
    /// Max temperature in (30, 35] °C.
    VeryHot,
    /// Max temperature above 35 °C.
    ExtremelyHot,
    /// Wind speed at or below 10 km/h.
    LightWind,
    /// Wind speed in (10, 15] km/h.
    ModerateWind,
    /// Wind speed in (15, 25] km/h.
    StrongWind,
    /// Wind speed above 25 km/h.
    VeryStrongWind,
}

/// An ordered band list: `floor` applies unless the value is strictly above one of the
/// ascending breakpoints, in which case the band of the highest exceeded breakpoint wins.
struct ThresholdScale {
    floor: Condition,
    steps: &'static [(f64, Condition)],
}

impl ThresholdScale {
    fn classify(&self, value: f64) -> Condition {
        self.steps
            .iter()
            .rev()
            .find(|(breakpoint, _)| value > *breakpoint)
            .map(|(_, condition)| *condition)
            .unwrap_or(self.floor)
    }
}

static PRECIPITATION_SCALE: ThresholdScale = ThresholdScale {
    floor: Condition::NoRain,
    steps: &[
        (0.0, Condition::LightPrecipitation),
        (10.0, Condition::RainyDay),
        (50.0, Condition::AbundantPrecipitation),
    ],
};

static MAX_TEMPERATURE_SCALE: ThresholdScale = ThresholdScale {
    floor: Condition::Cool,
    steps: &[
        (20.0, Condition::Mild),
        (25.0, Condition::Warm),
        (30.0, Condition::VeryHot),
        (35.0, Condition::ExtremelyHot),
    ],
};

static WIND_SPEED_SCALE: ThresholdScale = ThresholdScale {
    floor: Condition::LightWind,
    steps: &[
        (10.0, Condition::ModerateWind),
        (15.0, Condition::StrongWind),
        (25.0, Condition::VeryStrongWind),
    ],
};

impl Measurement {
    fn scale(&self) -> &'static ThresholdScale {
        match self {
            Measurement::Precipitation => &PRECIPITATION_SCALE,
            Measurement::MaxTemperature => &MAX_TEMPERATURE_SCALE,
            Measurement::WindSpeed => &WIND_SPEED_SCALE,
        }
    }

    /// Maps a raw value onto exactly one [`Condition`] of this measurement kind.
    ///
    /// A value sitting exactly on a breakpoint belongs to the lower band, since every
    /// band is open on its lower bound. Values below the first breakpoint (including
    /// negatives and `NaN`) fall into the lowest band. Inputs are not validated.
    ///
    /// # Examples
    ///
    /// ```
    /// use weather_corpus::{Condition, Measurement};
    ///
    /// assert_eq!(Measurement::Precipitation.classify(0.0), Condition::NoRain);
    /// assert_eq!(Measurement::Precipitation.classify(55.2), Condition::AbundantPrecipitation);
    /// assert_eq!(Measurement::MaxTemperature.classify(20.0), Condition::Cool);
    /// assert_eq!(Measurement::WindSpeed.classify(15.0), Condition::ModerateWind);
    /// ```
    pub fn classify(&self, value: f64) -> Condition {
        self.scale().classify(value)
    }
}

impl Condition {
    /// The measurement kind this category belongs to.
    pub fn measurement(&self) -> Measurement {
        match self {
            Condition::NoRain
            | Condition::LightPrecipitation
            | Condition::RainyDay
            | Condition::AbundantPrecipitation => Measurement::Precipitation,
            Condition::Cool
            | Condition::Mild
            | Condition::Warm
            | Condition::VeryHot
            | Condition::ExtremelyHot => Measurement::MaxTemperature,
            Condition::LightWind
            | Condition::ModerateWind
            | Condition::StrongWind
            | Condition::VeryStrongWind => Measurement::WindSpeed,
        }
    }

    /// Short English label for the category, e.g. `"rainy day"`.
    pub fn label(&self) -> &'static str {
        match self {
            Condition::NoRain => "no rain",
            Condition::LightPrecipitation => "light precipitation",
            Condition::RainyDay => "rainy day",
            Condition::AbundantPrecipitation => "abundant precipitation",
            Condition::Cool => "cool",
            Condition::Mild => "mild",
            Condition::Warm => "warm",
            Condition::VeryHot => "very hot",
            Condition::ExtremelyHot => "extremely hot",
            Condition::LightWind => "light wind",
            Condition::ModerateWind => "moderate wind",
            Condition::StrongWind => "strong wind",
            Condition::VeryStrongWind => "very strong wind",
        }
    }

    /// The Spanish narrative clause for this category.
    ///
    /// Precipitation clauses (other than [`Condition::NoRain`]) embed `value` with one
    /// decimal; every other clause ignores it.
    pub fn clause(&self, value: f64) -> String {
        match self {
            Condition::NoRain => "Día sin lluvia.".to_string(),
            Condition::LightPrecipitation => {
                format!("Día con ligeras precipitaciones de {value:.1} mm.")
            }
            Condition::RainyDay => format!("Día lluvioso con {value:.1} mm de precipitación."),
            Condition::AbundantPrecipitation => {
                format!("Día con precipitaciones abundantes, {value:.1} mm de lluvia.")
            }
            Condition::Cool => "Día fresco.".to_string(),
            Condition::Mild => "Día templado.".to_string(),
            Condition::Warm => "Día cálido.".to_string(),
            Condition::VeryHot => "Día muy caluroso.".to_string(),
            Condition::ExtremelyHot => "Día extremadamente caluroso.".to_string(),
            Condition::LightWind => "Vientos ligeros.".to_string(),
            Condition::ModerateWind => "Vientos moderados.".to_string(),
            Condition::StrongWind => "Vientos fuertes.".to_string(),
            Condition::VeryStrongWind => "Vientos muy fuertes.".to_string(),
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
