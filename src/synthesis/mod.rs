pub mod error;
pub mod narrative;
