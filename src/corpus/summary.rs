//! Aggregate figures over a corpus's document metadata.

use crate::types::document::Document;

/// Minimum, maximum and mean of one metadata column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Range {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
}

impl Range {
    fn of(values: impl Iterator<Item = f64>) -> Option<Self> {
        let (count, sum, min, max) = values.fold(
            (0usize, 0.0, f64::INFINITY, f64::NEG_INFINITY),
            |(count, sum, min, max), v| (count + 1, sum + v, min.min(v), max.max(v)),
        );
        (count > 0).then(|| Range {
            min,
            max,
            mean: sum / count as f64,
        })
    }
}

/// Weather figures for a whole corpus. Empty corpora have no temperature ranges.
#[derive(Debug, Clone, PartialEq)]
pub struct CorpusSummary {
    pub documents: usize,
    pub cities: usize,
    pub temp_max: Option<Range>,
    pub temp_min: Option<Range>,
    /// Days with precipitation strictly above 0 mm.
    pub rainy_days: usize,
    pub total_precipitation_mm: f64,
}

impl CorpusSummary {
    pub fn from_documents(documents: &[Document]) -> Self {
        let mut cities: Vec<&str> = documents.iter().map(|d| d.city.as_str()).collect();
        cities.sort_unstable();
        cities.dedup();

        Self {
            documents: documents.len(),
            cities: cities.len(),
            temp_max: Range::of(documents.iter().map(|d| d.metadata.temp_max_celsius)),
            temp_min: Range::of(documents.iter().map(|d| d.metadata.temp_min_celsius)),
            rainy_days: documents
                .iter()
                .filter(|d| d.metadata.precipitation_mm > 0.0)
                .count(),
            total_precipitation_mm: documents.iter().map(|d| d.metadata.precipitation_mm).sum(),
        }
    }
}
