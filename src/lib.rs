//! Convention-based route synthesis engine
//!
//! Derives HTTP exposure metadata (route templates, verbs, parameter
//! binding, API visibility) for application services from naming
//! conventions, without per-method route annotations. Explicitly authored
//! routing metadata always takes precedence and is completed rather than
//! overridden.

// Public modules
pub mod config;
pub mod conventions;
pub mod error;
pub mod logging;
pub mod schemas;
pub mod utils;

// Re-export commonly used types
pub use config::{ConventionConfig, ServiceControllerSetting, Settings};
pub use conventions::ConventionEngine;
pub use error::ConventionError;
pub use schemas::{DiscoveryDocument, RoutePlan, RouteReport};
