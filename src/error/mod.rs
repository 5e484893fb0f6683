//! Error handling module

pub mod types;

pub use types::ConventionError;
