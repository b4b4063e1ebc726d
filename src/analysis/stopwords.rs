//! Stopword sets: tokens excluded from frequency analysis because they carry little
//! topical signal.

use std::collections::HashSet;

const SPANISH: &str = include_str!("../../resources/stopwords_es.txt");

/// Common words of the corpus domain that are excluded on top of the language list.
pub const DOMAIN_STOPWORDS: [&str; 5] = ["ciudad", "país", "clima", "temperatura", "humedad"];

/// An immutable set of lower-cased stopwords.
///
/// Constructed explicitly and handed to the frequency analysis, so tests and callers can
/// swap in their own lists.
///
/// # Examples
///
/// ```
/// use weather_corpus::StopwordSet;
///
/// let stopwords = StopwordSet::spanish_with_domain();
/// assert!(stopwords.contains("de"));
/// assert!(stopwords.contains("temperatura"));
/// assert!(!stopwords.contains("lluvia"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StopwordSet {
    words: HashSet<String>,
}

impl StopwordSet {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds a set from arbitrary words; each is trimmed and lower-cased.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words
                .into_iter()
                .map(|w| w.as_ref().trim().to_lowercase())
                .filter(|w| !w.is_empty())
                .collect(),
        }
    }

    /// The standard Spanish stopword list.
    pub fn spanish() -> Self {
        Self::from_words(SPANISH.lines())
    }

    /// The domain-specific exclusions only.
    pub fn domain() -> Self {
        Self::from_words(DOMAIN_STOPWORDS)
    }

    /// Spanish list plus domain exclusions, the set used for corpus reports.
    pub fn spanish_with_domain() -> Self {
        Self::spanish().union(&Self::domain())
    }

    pub fn union(&self, other: &StopwordSet) -> Self {
        Self {
            words: self.words.union(&other.words).cloned().collect(),
        }
    }

    pub fn contains(&self, token: &str) -> bool {
        self.words.contains(token)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
