//! Line-delimited JSON persistence for a corpus: one document per line, UTF-8,
//! non-ASCII written as-is.

use crate::corpus::error::{CorpusStoreError, MalformedRecord};
use crate::types::document::Document;
use log::{info, warn};
use std::fs::{self, File};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// The documents decoded from a corpus file plus the lines that had to be skipped.
#[derive(Debug)]
pub struct CorpusRead {
    pub documents: Vec<Document>,
    pub skipped: Vec<MalformedRecord>,
}

/// Writes `documents` to `path`, one JSON object per line, replacing any existing file.
///
/// Missing parent directories are created. Returns the number of documents written.
///
/// # Errors
///
/// Returns [`CorpusStoreError::DirCreation`] if a parent directory cannot be created,
/// [`CorpusStoreError::Write`] on I/O failure, and [`CorpusStoreError::Encode`] if a
/// document cannot be serialized.
pub fn write_corpus(documents: &[Document], path: &Path) -> Result<usize, CorpusStoreError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .map_err(|e| CorpusStoreError::DirCreation(parent.to_path_buf(), e))?;
    }

    let file = File::create(path).map_err(|e| CorpusStoreError::Write(path.to_path_buf(), e))?;
    let mut writer = BufWriter::new(file);
    for doc in documents {
        serde_json::to_writer(&mut writer, doc).map_err(|e| CorpusStoreError::Encode {
            id: doc.id.clone(),
            source: e,
        })?;
        writer
            .write_all(b"\n")
            .map_err(|e| CorpusStoreError::Write(path.to_path_buf(), e))?;
    }
    writer
        .flush()
        .map_err(|e| CorpusStoreError::Write(path.to_path_buf(), e))?;

    info!("Wrote {} documents to {}", documents.len(), path.display());
    Ok(documents.len())
}

/// Reads a corpus written by [`write_corpus`].
///
/// Lines are decoded independently: a line that fails to decode, including one that is
/// not valid UTF-8, is logged, recorded in [`CorpusRead::skipped`] and the read continues. Blank lines carry no record and are
/// ignored.
///
/// # Errors
///
/// Returns [`CorpusStoreError::NotFound`] if `path` does not exist and
/// [`CorpusStoreError::Read`] if it cannot be read.
pub fn read_corpus(path: &Path) -> Result<CorpusRead, CorpusStoreError> {
    if !path.exists() {
        return Err(CorpusStoreError::NotFound(path.to_path_buf()));
    }
    let file = File::open(path).map_err(|e| CorpusStoreError::Read(path.to_path_buf(), e))?;

    let mut documents = Vec::new();
    let mut skipped = Vec::new();
    for (index, line) in BufReader::new(file).split(b'\n').enumerate() {
        let mut line = line.map_err(|e| CorpusStoreError::Read(path.to_path_buf(), e))?;
        if line.last() == Some(&b'\r') {
            line.pop();
        }
        if line.iter().all(u8::is_ascii_whitespace) {
            continue;
        }
        // Invalid UTF-8 surfaces as a decode error, so it is skipped like any bad record.
        match serde_json::from_slice::<Document>(&line) {
            Ok(doc) => documents.push(doc),
            Err(e) => {
                let record = MalformedRecord {
                    line: index + 1,
                    source: e,
                };
                warn!("{}: {} ({})", path.display(), record, record.source);
                skipped.push(record);
            }
        }
    }

    info!(
        "Read {} documents from {} ({} skipped)",
        documents.len(),
        path.display(),
        skipped.len()
    );
    Ok(CorpusRead { documents, skipped })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::synthesis::narrative::synthesize;
    use crate::types::location::oaxaca_locations;
    use crate::types::observation::DailyObservation;
    use chrono::{Duration, NaiveDate};

    fn sample_corpus(days: i64) -> Vec<Document> {
        let start = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        oaxaca_locations()
            .iter()
            .take(2)
            .flat_map(|location| {
                (0..days).map(move |offset| {
                    let obs = DailyObservation::complete(
                        start + Duration::days(offset),
                        24.0 + offset as f64 * 1.37,
                        12.15,
                        offset as f64 * 7.3,
                        9.99 + offset as f64,
                    );
                    synthesize(location, &obs).unwrap()
                })
            })
            .collect()
    }

    #[test]
    fn test_round_trip() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("nested").join("data").join("corpus.jsonl");
        let corpus = sample_corpus(5);

        let written = write_corpus(&corpus, &path)?;
        assert_eq!(written, 10);

        let read = read_corpus(&path)?;
        assert!(read.skipped.is_empty());
        assert_eq!(read.documents, corpus);
        Ok(())
    }

    #[test]
    fn test_unicode_is_written_unescaped() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("corpus.jsonl");
        write_corpus(&sample_corpus(1), &path)?;

        let raw = fs::read_to_string(&path)?;
        assert_eq!(raw.lines().count(), 2);
        assert!(raw.contains("Oaxaca de Juárez"));
        assert!(raw.contains("Precipitación"));
        assert!(!raw.contains("\\u00"));
        Ok(())
    }

    #[test]
    fn test_malformed_line_is_skipped() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("corpus.jsonl");
        let corpus = sample_corpus(5);
        write_corpus(&corpus, &path)?;

        let mut lines: Vec<String> = fs::read_to_string(&path)?
            .lines()
            .map(str::to_string)
            .collect();
        lines.insert(4, "{\"id\": \"broken\", \"city\": ".to_string());
        fs::write(&path, lines.join("\n") + "\n")?;

        let read = read_corpus(&path)?;
        assert_eq!(read.documents.len(), 10);
        assert_eq!(read.skipped.len(), 1);
        assert_eq!(read.skipped[0].line, 5);
        assert_eq!(read.documents, corpus);
        Ok(())
    }

    #[test]
    fn test_invalid_utf8_line_is_skipped() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("corpus.jsonl");
        let corpus = sample_corpus(1);
        write_corpus(&corpus, &path)?;

        let raw = fs::read(&path)?;
        let second_line = raw.iter().position(|&b| b == b'\n').map_or(0, |i| i + 1);
        let mut patched = raw[..second_line].to_vec();
        patched.extend_from_slice(&[0xff, 0xfe, b'\n']);
        patched.extend_from_slice(&raw[second_line..]);
        fs::write(&path, patched)?;

        let read = read_corpus(&path)?;
        assert_eq!(read.documents, corpus);
        assert_eq!(read.skipped.len(), 1);
        assert_eq!(read.skipped[0].line, 2);
        Ok(())
    }

    #[test]
    fn test_crlf_line_endings() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("corpus.jsonl");
        let corpus = sample_corpus(2);
        write_corpus(&corpus, &path)?;

        let crlf = fs::read_to_string(&path)?.replace('\n', "\r\n");
        fs::write(&path, crlf)?;

        let read = read_corpus(&path)?;
        assert!(read.skipped.is_empty());
        assert_eq!(read.documents, corpus);
        Ok(())
    }

    #[test]
    fn test_missing_source_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.jsonl");
        match read_corpus(&path) {
            Err(CorpusStoreError::NotFound(p)) => assert_eq!(p, path),
            other => panic!("expected NotFound, got {:?}", other),
        }
    }
}
