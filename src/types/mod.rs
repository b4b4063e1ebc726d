pub mod condition;
pub mod document;
pub mod location;
pub mod observation;
