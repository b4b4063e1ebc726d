use chrono::NaiveDate;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum SynthesisError {
    #[error("Observation field '{field}' is missing for '{city}' on {date}")]
    MissingField {
        field: &'static str,
        city: String,
        date: NaiveDate,
    },
}
