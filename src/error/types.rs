//! Error types
//!
//! The synthesis pass itself is total and never fails on well-formed
//! descriptors; these errors cover the loading surface only.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConventionError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid controller settings: {0}")]
    InvalidSettings(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_error_message() {
        let err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: ConventionError = err.into();
        assert!(err.to_string().starts_with("Invalid JSON"));
    }
}
