use crate::corpus::error::CorpusStoreError;
use crate::report::error::ReportError;
use crate::retrieval::error::RetrievalError;
use crate::synthesis::error::SynthesisError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WeatherCorpusError {
    #[error(transparent)]
    Retrieval(#[from] RetrievalError),

    #[error(transparent)]
    Synthesis(#[from] SynthesisError),

    #[error(transparent)]
    CorpusStore(#[from] CorpusStoreError),

    #[error(transparent)]
    Report(#[from] ReportError),
}
