pub mod frequency;
pub mod stats;
pub mod stopwords;
pub mod tokenizer;
