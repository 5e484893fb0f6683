//! Service descriptor model
//!
//! The input side of the engine: fully materialized descriptions of the
//! service candidates produced by the external discovery layer. The engine
//! never performs reflection itself; capability checks and marker
//! predicates are resolved during discovery and arrive here as plain data.

use crate::error::ConventionError;
use crate::schemas::routing::{ApiExplorerInfo, BindingAnnotation, RouteSelector};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

// ============================================================================
// Discovery Document
// ============================================================================

/// Ordered collection of service candidates for one synthesis pass
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct DiscoveryDocument {
    /// Free-form origin label for diagnostics (e.g. the scanned assembly set)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,

    #[serde(default)]
    pub services: Vec<ServiceCandidate>,
}

impl DiscoveryDocument {
    /// Parse a discovery document from a JSON string
    pub fn from_json_str(json: &str) -> Result<Self, ConventionError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a discovery document from a JSON file
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConventionError> {
        let content = fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }
}

// ============================================================================
// Service Candidates
// ============================================================================

/// Resolved remote-service marker
///
/// `enabled` is the marker's enablement predicate evaluated against the
/// carrying type or method, computed once during discovery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct RemoteServiceMarker {
    pub enabled: bool,
}

/// A type considered for automatic network exposure
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServiceCandidate {
    /// Short type name as registered by discovery (e.g. `OrderAppService`)
    pub type_name: String,

    /// Identity of the owning assembly, used to match controller settings
    pub assembly: String,

    /// True when the type structurally satisfies the application-service
    /// capability
    #[serde(default)]
    pub is_application_service: bool,

    /// Explicit remote-service marker found on the type, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remote_service_marker: Option<RemoteServiceMarker>,

    /// Controller-level route selectors authored ahead of the conventions
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub selectors: Vec<RouteSelector>,

    #[serde(default)]
    pub api_explorer: ApiExplorerInfo,

    #[serde(default)]
    pub actions: Vec<ActionDescriptor>,
}

/// A single externally invokable method on a service candidate
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ActionDescriptor {
    pub name: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub selectors: Vec<RouteSelector>,

    /// Tri-state explorer visibility; `None` is "unset"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_visible: Option<bool>,

    /// Remote-service marker attached directly to this method, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remote_service_marker: Option<RemoteServiceMarker>,

    #[serde(default)]
    pub parameters: Vec<ParameterDescriptor>,
}

// ============================================================================
// Parameters
// ============================================================================

/// Type classification of an action parameter, precomputed by discovery
///
/// `Simple` covers primitives, nullable primitives, and string-like types;
/// everything else is `Complex`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ParameterKind {
    Simple,
    Complex,
}

/// One parameter of an action
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ParameterDescriptor {
    pub name: String,

    /// Declared type name, carried for diagnostics only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_name: Option<String>,

    pub kind: ParameterKind,

    /// Binding annotation authored ahead of the conventions, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub binding: Option<BindingAnnotation>,
}
