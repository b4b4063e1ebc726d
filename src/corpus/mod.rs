pub mod builder;
pub mod error;
pub mod store;
pub mod summary;
