//! The seam to the frequency-weighted visualization collaborator.
//!
//! A renderer receives a single blob of whitespace-separated tokens in which every term
//! appears as often as it should weigh, plus a fixed set of options. Encoding the image
//! is entirely the renderer's business.

use crate::analysis::frequency::FrequencyTable;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Canvas background.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Background {
    White,
    Black,
    Transparent,
}

/// Color scheme terms are painted with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMap {
    Viridis,
    Plasma,
    Inferno,
    Magma,
    Cividis,
}

/// Options passed verbatim to the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct RenderOptions {
    pub width: u32,
    pub height: u32,
    pub background: Background,
    pub color_map: ColorMap,
    /// Most distinct terms drawn.
    pub max_words: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: 800,
            height: 400,
            background: Background::White,
            color_map: ColorMap::Viridis,
            max_words: 100,
        }
    }
}

/// Produces a visual artifact from frequency-weighted text.
pub trait Renderer {
    /// Renders `weighted_text` to (or next to) `destination` and returns the path of the
    /// artifact actually written.
    fn render(
        &self,
        weighted_text: &str,
        destination: &Path,
        options: &RenderOptions,
    ) -> Result<PathBuf, Box<dyn std::error::Error + Send + Sync>>;
}

/// Writes the term weights a renderer would draw as JSON beside `destination`
/// (same stem, `.json` extension), for environments without an image backend.
#[derive(Debug, Clone, Copy, Default)]
pub struct WeightsFileRenderer;

#[derive(Serialize)]
struct WeightsFile<'a> {
    options: &'a RenderOptions,
    terms: Vec<TermWeight>,
}

#[derive(Serialize)]
struct TermWeight {
    term: String,
    weight: usize,
}

impl Renderer for WeightsFileRenderer {
    fn render(
        &self,
        weighted_text: &str,
        destination: &Path,
        options: &RenderOptions,
    ) -> Result<PathBuf, Box<dyn std::error::Error + Send + Sync>> {
        let terms = FrequencyTable::from_tokens(weighted_text.split_whitespace())
            .top_k(options.max_words)
            .into_iter()
            .map(|(term, weight)| TermWeight { term, weight })
            .collect();
        let path = destination.with_extension("json");
        let body = serde_json::to_string_pretty(&WeightsFile { options, terms })?;
        fs::write(&path, body)?;
        Ok(path)
    }
}
