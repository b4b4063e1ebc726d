//! Builds a corpus location by location, isolating failures per location and per day.

use crate::retrieval::error::RetrievalError;
use crate::retrieval::open_meteo::DailySource;
use crate::synthesis::error::SynthesisError;
use crate::synthesis::narrative::synthesize;
use crate::types::document::Document;
use crate::types::location::Location;
use bon::builder;
use chrono::NaiveDate;
use log::{info, warn};
use thiserror::Error;

/// Something that was excluded from the corpus, and why.
#[derive(Debug, Error)]
pub enum BuildFailure {
    /// The location's series could not be retrieved; it contributes no documents.
    #[error("Retrieval failed for '{location}'")]
    Retrieval {
        location: String,
        #[source]
        error: RetrievalError,
    },

    /// One day of the location's series could not be synthesized.
    #[error("Day {index} of '{location}' could not be synthesized")]
    Synthesis {
        location: String,
        index: usize,
        #[source]
        error: SynthesisError,
    },
}

/// The outcome of a corpus build.
#[derive(Debug, Default)]
pub struct CorpusBuild {
    /// Documents in location-major, date-ascending order.
    pub documents: Vec<Document>,
    /// Documents produced per location, in location order. Failed locations report 0.
    pub per_location: Vec<(String, usize)>,
    pub failures: Vec<BuildFailure>,
}

impl CorpusBuild {
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Retrieves and synthesizes one document per (location, day) in `start..=end`.
///
/// A retrieval failure drops that location and moves on; a synthesis failure drops that
/// one day. Either way the exclusion is recorded in [`CorpusBuild::failures`]. Nothing
/// partial or defaulted is ever added to the corpus.
///
/// # Examples
///
/// ```no_run
/// # use weather_corpus::{build_corpus, oaxaca_locations, OpenMeteoClient, WeatherCorpusError};
/// # use chrono::NaiveDate;
/// # fn main() -> Result<(), WeatherCorpusError> {
/// let client = OpenMeteoClient::builder().build()?;
/// let build = build_corpus()
///     .source(&client)
///     .locations(&oaxaca_locations())
///     .start(NaiveDate::from_ymd_opt(2025, 6, 1).unwrap())
///     .end(NaiveDate::from_ymd_opt(2025, 12, 31).unwrap())
///     .call();
/// println!("{} documents, {} failures", build.documents.len(), build.failures.len());
/// # Ok(())
/// # }
/// ```
#[builder]
pub fn build_corpus<S: DailySource>(
    source: &S,
    locations: &[Location],
    start: NaiveDate,
    end: NaiveDate,
) -> CorpusBuild {
    let mut build = CorpusBuild::default();

    for (position, location) in locations.iter().enumerate() {
        info!(
            "[{}/{}] Retrieving {} ({})",
            position + 1,
            locations.len(),
            location.name,
            location.region
        );

        let series = match source.fetch(location.coordinates, start, end) {
            Ok(series) => series,
            Err(error) => {
                warn!("Skipping {}: {}", location.name, error);
                build.per_location.push((location.name.clone(), 0));
                build.failures.push(BuildFailure::Retrieval {
                    location: location.name.clone(),
                    error,
                });
                continue;
            }
        };

        let mut produced = 0;
        for (index, observation) in series.observations().enumerate() {
            match synthesize(location, &observation) {
                Ok(doc) => {
                    build.documents.push(doc);
                    produced += 1;
                }
                Err(error) => {
                    warn!("Skipping day {} of {}: {}", index, location.name, error);
                    build.failures.push(BuildFailure::Synthesis {
                        location: location.name.clone(),
                        index,
                        error,
                    });
                }
            }
        }

        info!("{} documents generated for {}", produced, location.name);
        build.per_location.push((location.name.clone(), produced));
    }

    build
}
