//! Application settings and configuration
//!
//! This module provides configuration management for the application,
//! loading settings from environment variables with sensible defaults,
//! plus the per-module controller settings consumed by the engine.

use crate::error::ConventionError;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Module name used when no controller setting matches a service's assembly
pub const DEFAULT_SERVICE_MODULE_NAME: &str = "App";

// ============================================================================
// Controller Settings
// ============================================================================

/// Per-module exposure configuration, keyed by assembly identity
///
/// One setting per assembly; the engine looks settings up by exact
/// assembly identity and falls back to defaults when none matches.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServiceControllerSetting {
    pub assembly: String,

    /// Module segment of synthesized route templates; `None` falls back to
    /// [`DEFAULT_SERVICE_MODULE_NAME`]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub module_name: Option<String>,

    /// When true, verbs are inferred from action-name prefixes; otherwise
    /// every synthesized selector gets the default verb
    #[serde(default)]
    pub use_conventional_http_verbs: bool,
}

/// Load controller settings from a JSON file
///
/// Rejects files that carry more than one setting for the same assembly.
pub fn load_controller_settings(
    path: impl AsRef<Path>,
) -> Result<Vec<ServiceControllerSetting>, ConventionError> {
    let content = fs::read_to_string(path)?;
    let settings: Vec<ServiceControllerSetting> = serde_json::from_str(&content)?;

    let mut seen = HashSet::new();
    for setting in &settings {
        if !seen.insert(setting.assembly.as_str()) {
            return Err(ConventionError::InvalidSettings(format!(
                "duplicate entry for assembly '{}'",
                setting.assembly
            )));
        }
    }

    Ok(settings)
}

// ============================================================================
// Engine Configuration
// ============================================================================

/// The engine-facing configuration view
///
/// Constructed once at startup and passed by reference into the engine;
/// read-only for the whole pass.
#[derive(Debug, Clone)]
pub struct ConventionConfig {
    default_module_name: String,
    controller_settings: Vec<ServiceControllerSetting>,
}

impl ConventionConfig {
    pub fn new(
        default_module_name: impl Into<String>,
        controller_settings: Vec<ServiceControllerSetting>,
    ) -> Self {
        Self {
            default_module_name: default_module_name.into(),
            controller_settings,
        }
    }

    /// Find the setting for an assembly by exact identity
    pub fn setting_for(&self, assembly: &str) -> Option<&ServiceControllerSetting> {
        self.controller_settings
            .iter()
            .find(|setting| setting.assembly == assembly)
    }

    /// Module name for an assembly, falling back to the configured default
    pub fn module_name_for(&self, assembly: &str) -> &str {
        self.setting_for(assembly)
            .and_then(|setting| setting.module_name.as_deref())
            .unwrap_or(&self.default_module_name)
    }

    /// Whether conventional verb inference is enabled for an assembly
    ///
    /// No setting means no conventional verbs, matching the lookup-miss
    /// recovery policy.
    pub fn uses_conventional_verbs(&self, assembly: &str) -> bool {
        self.setting_for(assembly)
            .map(|setting| setting.use_conventional_http_verbs)
            .unwrap_or(false)
    }
}

impl Default for ConventionConfig {
    fn default() -> Self {
        Self::new(DEFAULT_SERVICE_MODULE_NAME, Vec::new())
    }
}

// ============================================================================
// Application Settings
// ============================================================================

/// Main application settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Settings {
    // App settings
    pub app_name: String,
    pub app_version: String,
    pub log_level: String,
    pub log_json: bool,

    // Engine settings
    pub default_module_name: String,
    pub controller_settings_file: Option<PathBuf>,
}

impl Settings {
    /// Load settings from environment variables with defaults
    pub fn load() -> Result<Self> {
        // Load .env file if it exists (ignored in production typically)
        dotenvy::dotenv().ok();

        let settings = Self {
            app_name: env_or_default("APP_NAME", "route-conventions"),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            log_level: env_or_default("LOG_LEVEL", "info"),
            log_json: env_or_default("LOG_JSON", "false").parse().unwrap_or(false),

            default_module_name: env_or_default(
                "DEFAULT_MODULE_NAME",
                DEFAULT_SERVICE_MODULE_NAME,
            ),
            controller_settings_file: env::var("CONTROLLER_SETTINGS_FILE").ok().map(PathBuf::from),
        };

        Ok(settings)
    }

    /// Build the engine configuration from these settings
    ///
    /// Reads the controller settings file when one is configured; no file
    /// means an empty settings list (defaults apply everywhere).
    pub fn convention_config(&self) -> Result<ConventionConfig, ConventionError> {
        let controller_settings = match &self.controller_settings_file {
            Some(path) => load_controller_settings(path)?,
            None => Vec::new(),
        };

        Ok(ConventionConfig::new(
            self.default_module_name.clone(),
            controller_settings,
        ))
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            app_name: "route-conventions".to_string(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            log_level: "info".to_string(),
            log_json: false,
            default_module_name: DEFAULT_SERVICE_MODULE_NAME.to_string(),
            controller_settings_file: None,
        }
    }
}

/// Get an environment variable or return a default value
fn env_or_default(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}
