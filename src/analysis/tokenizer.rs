use unicode_segmentation::UnicodeSegmentation;

/// Sentence and clause punctuation peeled off the edges of a chunk before it is judged.
const EDGE_PUNCTUATION: &[char] = &[
    ',', '.', ':', ';', '¿', '?', '¡', '!', '"', '\'', '«', '»', '“', '”', '‘', '’', '(', ')',
    '[', ']', '…',
];

/// Splits `text` into lower-cased word tokens.
///
/// Chunks are whitespace-delimited. Leading and trailing punctuation is stripped, then a
/// chunk is kept only if every remaining character is alphabetic. Measurements such as
/// `27.3°C` or `km/h` therefore stay whole and are dropped rather than split into
/// letter fragments.
///
/// # Examples
///
/// ```
/// use weather_corpus::tokenize;
///
/// assert_eq!(
///     tokenize("Precipitación acumulada: 12.5 mm."),
///     vec!["precipitación", "acumulada", "mm"]
/// );
/// assert_eq!(tokenize("Viento: 12.0 km/h, máxima 27.3°C."), vec!["viento", "máxima"]);
/// assert!(tokenize("").is_empty());
/// ```
pub fn tokenize(text: &str) -> Vec<String> {
    text.split_whitespace()
        .map(trim_punctuation)
        .filter(|chunk| !chunk.is_empty() && chunk.chars().all(char::is_alphabetic))
        .map(str::to_lowercase)
        .collect()
}

// Word-bound segments at either edge made only of punctuation are removed.
fn trim_punctuation(chunk: &str) -> &str {
    let is_punctuation = |segment: &str| segment.chars().all(|c| EDGE_PUNCTUATION.contains(&c));
    let segments: Vec<(usize, &str)> = chunk.split_word_bound_indices().collect();

    let start = segments.iter().find(|(_, segment)| !is_punctuation(segment));
    let end = segments.iter().rev().find(|(_, segment)| !is_punctuation(segment));
    match (start, end) {
        (Some(&(start, _)), Some(&(offset, segment))) => &chunk[start..offset + segment.len()],
        _ => "",
    }
}

/// Whitespace-delimited word count, used for document length statistics.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}
