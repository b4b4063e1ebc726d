mod analysis;
mod corpus;
mod error;
mod report;
mod retrieval;
mod synthesis;
mod types;

pub use error::WeatherCorpusError;

pub use types::condition::{Condition, Measurement};
pub use types::document::{document_id, Document, DocumentMetadata};
pub use types::location::{oaxaca_locations, LatLon, Location, MEXICO_COUNTRY, OAXACA_STATE};
pub use types::observation::DailyObservation;

pub use synthesis::error::SynthesisError;
pub use synthesis::narrative::synthesize;

pub use retrieval::error::RetrievalError;
pub use retrieval::open_meteo::{DailySeries, DailySource, OpenMeteoClient};

pub use corpus::builder::{build_corpus, BuildFailure, CorpusBuild};
pub use corpus::error::{CorpusStoreError, MalformedRecord};
pub use corpus::store::{read_corpus, write_corpus, CorpusRead};
pub use corpus::summary::{CorpusSummary, Range};

pub use analysis::frequency::{count_tokens, FrequencyTable};
pub use analysis::stats::LengthStats;
pub use analysis::stopwords::{StopwordSet, DOMAIN_STOPWORDS};
pub use analysis::tokenizer::{tokenize, word_count};

pub use report::error::ReportError;
pub use report::generator::{Artifact, CloudVariant, Report, ReportConfig, ReportGenerator};
pub use report::render::{Background, ColorMap, RenderOptions, Renderer, WeightsFileRenderer};
