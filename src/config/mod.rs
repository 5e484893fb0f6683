//! Configuration management module
//!
//! This module handles loading application configuration from environment
//! variables and .env files, plus the per-module controller settings.

pub mod settings;

pub use settings::{
    load_controller_settings, ConventionConfig, ServiceControllerSetting, Settings,
    DEFAULT_SERVICE_MODULE_NAME,
};
