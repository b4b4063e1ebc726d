use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CorpusStoreError {
    #[error("Corpus file '{0}' not found")]
    NotFound(PathBuf),

    #[error("Failed to create corpus directory '{0}'")]
    DirCreation(PathBuf, #[source] std::io::Error),

    #[error("Failed to read corpus file '{0}'")]
    Read(PathBuf, #[source] std::io::Error),

    #[error("Failed to write corpus file '{0}'")]
    Write(PathBuf, #[source] std::io::Error),

    #[error("Failed to encode document '{id}'")]
    Encode {
        id: String,
        #[source]
        source: serde_json::Error,
    },
}

/// A persisted line that could not be decoded into a document. Skipped, never fatal.
#[derive(Debug, Error)]
#[error("Line {line} is not a valid document")]
pub struct MalformedRecord {
    /// 1-based line number in the source file.
    pub line: usize,
    #[source]
    pub source: serde_json::Error,
}
