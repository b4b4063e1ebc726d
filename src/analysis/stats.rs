use crate::analysis::tokenizer::word_count;
use crate::types::document::Document;

/// Document length statistics, in whitespace-delimited words.
#[derive(Debug, Clone, PartialEq)]
pub struct LengthStats {
    pub n_docs: usize,
    pub total_words: usize,
    pub min_len: usize,
    pub max_len: usize,
    pub mean_len: f64,
    pub median_len: f64,
    /// Population standard deviation.
    pub std_len: f64,
}

impl LengthStats {
    /// Returns `None` for an empty document set.
    pub fn compute(documents: &[Document]) -> Option<Self> {
        let mut lengths: Vec<usize> = documents.iter().map(|d| word_count(&d.text)).collect();
        lengths.sort_unstable();
        let (&min_len, &max_len) = (lengths.first()?, lengths.last()?);

        let n = lengths.len();
        let total_words: usize = lengths.iter().sum();
        let mean_len = total_words as f64 / n as f64;
        let median_len = if n % 2 == 1 {
            lengths[n / 2] as f64
        } else {
            (lengths[n / 2 - 1] + lengths[n / 2]) as f64 / 2.0
        };
        let variance = lengths
            .iter()
            .map(|&len| (len as f64 - mean_len).powi(2))
            .sum::<f64>()
            / n as f64;

        Some(Self {
            n_docs: n,
            total_words,
            min_len,
            max_len,
            mean_len,
            median_len,
            std_len: variance.sqrt(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::synthesis::narrative::synthesize;
    use crate::types::location::{LatLon, Location};
    use crate::types::observation::DailyObservation;
    use chrono::NaiveDate;

    fn doc_with_text(text: &str) -> Document {
        let location = Location::new("Costa", LatLon(15.85, -97.07), "Costa", "Oaxaca", "México");
        let date = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        let mut doc =
            synthesize(&location, &DailyObservation::complete(date, 25.0, 15.0, 0.0, 5.0)).unwrap();
        doc.text = text.to_string();
        doc
    }

    #[test]
    fn test_length_stats() {
        let docs = vec![
            doc_with_text("uno dos"),
            doc_with_text("uno dos tres cuatro"),
            doc_with_text("uno dos tres cuatro cinco seis"),
        ];
        let stats = LengthStats::compute(&docs).unwrap();
        assert_eq!(stats.n_docs, 3);
        assert_eq!(stats.total_words, 12);
        assert_eq!(stats.min_len, 2);
        assert_eq!(stats.max_len, 6);
        assert_eq!(stats.mean_len, 4.0);
        assert_eq!(stats.median_len, 4.0);
        // population std of [2, 4, 6]
        assert!((stats.std_len - (8.0f64 / 3.0).sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_even_median() {
        let docs = vec![doc_with_text("a"), doc_with_text("a b c d")];
        assert_eq!(LengthStats::compute(&docs).unwrap().median_len, 2.5);
    }

    #[test]
    fn test_empty() {
        assert_eq!(LengthStats::compute(&[]), None);
    }
}
