//! Exploratory report over a document set: length statistics, ranked term lists and
//! three frequency-weighted visualizations.

use crate::analysis::frequency::{count_tokens, FrequencyTable};
use crate::analysis::stats::LengthStats;
use crate::analysis::stopwords::StopwordSet;
use crate::analysis::tokenizer::tokenize;
use crate::report::error::ReportError;
use crate::report::render::{RenderOptions, Renderer};
use crate::types::document::Document;
use bon::Builder;
use log::info;
use std::fs;
use std::path::PathBuf;

/// Report settings. Unset builder fields take the defaults shown.
///
/// # Examples
///
/// ```
/// use weather_corpus::ReportConfig;
///
/// let config = ReportConfig::builder().top_k(10).output_dir("reports").build();
/// assert_eq!(config.top_k, 10);
/// assert_eq!(config.percentile, 90.0);
/// ```
#[derive(Debug, Clone, PartialEq, Builder)]
pub struct ReportConfig {
    /// Length of each ranked term list.
    #[builder(default = 20)]
    pub top_k: usize,
    /// Percentile above which terms are treated as over-common.
    #[builder(default = 90.0)]
    pub percentile: f64,
    /// Directory visual artifacts are written to; created if missing.
    #[builder(default = PathBuf::from("outputs"), into)]
    pub output_dir: PathBuf,
    #[builder(default)]
    pub render_options: RenderOptions,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

/// The three visualizations a report requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CloudVariant {
    /// Every token, stopwords included.
    Unfiltered,
    /// Stopwords removed.
    WithoutStopwords,
    /// Stopwords removed and over-common terms suppressed by the percentile filter.
    Filtered,
}

impl CloudVariant {
    pub const ALL: [CloudVariant; 3] = [
        CloudVariant::Unfiltered,
        CloudVariant::WithoutStopwords,
        CloudVariant::Filtered,
    ];

    pub fn file_name(&self) -> &'static str {
        match self {
            CloudVariant::Unfiltered => "wordcloud_sin_filtrado.png",
            CloudVariant::WithoutStopwords => "wordcloud_sin_stopwords.png",
            CloudVariant::Filtered => "wordcloud_filtrado.png",
        }
    }
}

/// A visualization the renderer produced.
#[derive(Debug, Clone, PartialEq)]
pub struct Artifact {
    pub variant: CloudVariant,
    pub path: PathBuf,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    /// `None` when the document set is empty.
    pub stats: Option<LengthStats>,
    /// Top terms with stopwords removed.
    pub top_terms: Vec<(String, usize)>,
    /// Top terms with stopwords removed and the percentile filter applied.
    pub top_filtered_terms: Vec<(String, usize)>,
    pub artifacts: Vec<Artifact>,
}

pub struct ReportGenerator<'a, R: Renderer> {
    renderer: &'a R,
    stopwords: &'a StopwordSet,
    config: ReportConfig,
}

impl<'a, R: Renderer> ReportGenerator<'a, R> {
    pub fn new(renderer: &'a R, stopwords: &'a StopwordSet, config: ReportConfig) -> Self {
        Self {
            renderer,
            stopwords,
            config,
        }
    }

    pub fn config(&self) -> &ReportConfig {
        &self.config
    }

    /// Runs the whole report.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::OutputDirCreation`] if the output directory cannot be created
    /// and [`ReportError::Render`] if the renderer fails on any of the three requests.
    pub fn generate(&self, documents: &[Document]) -> Result<Report, ReportError> {
        let stats = LengthStats::compute(documents);

        let table = count_tokens(documents, self.stopwords, true);
        let top_terms = table.top_k(self.config.top_k);
        let top_filtered_terms = table
            .percentile_filter(self.config.percentile)
            .top_k(self.config.top_k);

        fs::create_dir_all(&self.config.output_dir)
            .map_err(|e| ReportError::OutputDirCreation(self.config.output_dir.clone(), e))?;

        let mut artifacts = Vec::with_capacity(CloudVariant::ALL.len());
        for variant in CloudVariant::ALL {
            let destination = self.config.output_dir.join(variant.file_name());
            let text = self.weighted_text(documents, variant);
            let path = self
                .renderer
                .render(&text, &destination, &self.config.render_options)
                .map_err(|source| ReportError::Render {
                    path: destination.clone(),
                    source,
                })?;
            info!("Rendered {:?} cloud to {}", variant, path.display());
            artifacts.push(Artifact { variant, path });
        }

        Ok(Report {
            stats,
            top_terms,
            top_filtered_terms,
            artifacts,
        })
    }

    /// The frequency-weighted blob handed to the renderer for `variant`: the corpus
    /// tokens, in order, with the variant's exclusions applied, joined by spaces.
    pub fn weighted_text(&self, documents: &[Document], variant: CloudVariant) -> String {
        let mut tokens: Vec<String> = documents
            .iter()
            .flat_map(|doc| tokenize(&doc.text))
            .collect();

        if variant != CloudVariant::Unfiltered {
            tokens.retain(|token| !self.stopwords.contains(token));
        }
        if variant == CloudVariant::Filtered {
            let kept = FrequencyTable::from_tokens(tokens.iter().cloned())
                .percentile_filter(self.config.percentile);
            tokens.retain(|token| kept.contains(token));
        }

        tokens.join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::synthesis::narrative::synthesize;
    use crate::types::location::oaxaca_locations;
    use crate::types::observation::DailyObservation;
    use chrono::{Duration, NaiveDate};
    use std::cell::RefCell;
    use std::path::Path;

    #[derive(Default)]
    struct RecordingRenderer {
        calls: RefCell<Vec<(String, PathBuf)>>,
    }

    impl Renderer for RecordingRenderer {
        fn render(
            &self,
            weighted_text: &str,
            destination: &Path,
            _options: &RenderOptions,
        ) -> Result<PathBuf, Box<dyn std::error::Error + Send + Sync>> {
            self.calls
                .borrow_mut()
                .push((weighted_text.to_string(), destination.to_path_buf()));
            Ok(destination.to_path_buf())
        }
    }

    struct FailingRenderer;

    impl Renderer for FailingRenderer {
        fn render(
            &self,
            _weighted_text: &str,
            _destination: &Path,
            _options: &RenderOptions,
        ) -> Result<PathBuf, Box<dyn std::error::Error + Send + Sync>> {
            Err("no image backend".into())
        }
    }

    fn corpus() -> Vec<Document> {
        let start = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        let locations = oaxaca_locations();
        locations
            .iter()
            .take(3)
            .enumerate()
            .flat_map(|(i, location)| {
                (0..4).map(move |day| {
                    let obs = DailyObservation::complete(
                        start + Duration::days(day),
                        19.0 + (i as f64) * 6.0 + day as f64,
                        12.0,
                        (day * 7) as f64,
                        8.0 + (i as f64) * 5.0,
                    );
                    synthesize(location, &obs).unwrap()
                })
            })
            .collect()
    }

    #[test]
    fn test_generate_report() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempfile::tempdir()?;
        let renderer = RecordingRenderer::default();
        let stopwords = StopwordSet::spanish_with_domain();
        let config = ReportConfig::builder()
            .top_k(5)
            .output_dir(dir.path().join("outputs"))
            .build();
        let docs = corpus();

        let report = ReportGenerator::new(&renderer, &stopwords, config).generate(&docs)?;

        assert_eq!(report.stats.as_ref().map(|s| s.n_docs), Some(12));
        assert_eq!(report.top_terms.len(), 5);
        // two "máxima" and two clauses opening with "día" per document, then "mm" in
        // every header plus the light and rainy clauses; "°C" and "km/h" never count
        assert_eq!(
            report.top_terms[..3].to_vec(),
            vec![
                ("máxima".to_string(), 24),
                ("día".to_string(), 24),
                ("mm".to_string(), 21)
            ]
        );
        assert!(report
            .top_terms
            .iter()
            .all(|(token, _)| !["c", "km", "h"].contains(&token.as_str())));
        assert!(report
            .top_terms
            .iter()
            .all(|(token, _)| !stopwords.contains(token)));
        assert!(report
            .top_filtered_terms
            .iter()
            .all(|(token, _)| token != "día"));

        let calls = renderer.calls.borrow();
        assert_eq!(calls.len(), 3);
        assert!(dir.path().join("outputs").is_dir());
        let names: Vec<&str> = report
            .artifacts
            .iter()
            .filter_map(|a| a.path.file_name().and_then(|n| n.to_str()))
            .collect();
        assert_eq!(
            names,
            vec![
                "wordcloud_sin_filtrado.png",
                "wordcloud_sin_stopwords.png",
                "wordcloud_filtrado.png"
            ]
        );

        // each stage only ever removes tokens
        let lens: Vec<usize> = calls.iter().map(|(text, _)| text.split(' ').count()).collect();
        assert!(lens[0] > lens[1] && lens[1] > lens[2]);
        assert!(calls[0].0.split(' ').any(|t| t == "de"));
        assert!(!calls[1].0.split(' ').any(|t| t == "de"));
        Ok(())
    }

    #[test]
    fn test_empty_corpus() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempfile::tempdir()?;
        let renderer = RecordingRenderer::default();
        let stopwords = StopwordSet::spanish_with_domain();
        let config = ReportConfig::builder().output_dir(dir.path()).build();

        let report = ReportGenerator::new(&renderer, &stopwords, config).generate(&[])?;
        assert_eq!(report.stats, None);
        assert!(report.top_terms.is_empty());
        assert!(report.top_filtered_terms.is_empty());
        assert!(renderer.calls.borrow().iter().all(|(text, _)| text.is_empty()));
        Ok(())
    }

    #[test]
    fn test_render_failure_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let stopwords = StopwordSet::empty();
        let config = ReportConfig::builder().output_dir(dir.path()).build();
        let result = ReportGenerator::new(&FailingRenderer, &stopwords, config).generate(&corpus());
        match result {
            Err(ReportError::Render { path, .. }) => {
                assert_eq!(path, dir.path().join("wordcloud_sin_filtrado.png"))
            }
            other => panic!("expected render error, got {:?}", other),
        }
    }

    #[test]
    fn test_default_config() {
        let config = ReportConfig::default();
        assert_eq!(config.top_k, 20);
        assert_eq!(config.percentile, 90.0);
        assert_eq!(config.output_dir, PathBuf::from("outputs"));
        assert_eq!(config.render_options.width, 800);
        assert_eq!(config.render_options.max_words, 100);
    }
}
