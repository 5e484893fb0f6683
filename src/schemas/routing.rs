//! Routing metadata vocabulary
//!
//! The unit types shared by descriptors (input) and patches (output):
//! HTTP verbs, route selectors, parameter binding annotations, and
//! API explorer flags.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// HTTP Verbs
// ============================================================================

/// HTTP method used in selector constraints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpVerb {
    Get,
    Post,
    Put,
    Delete,
    Patch,
    Head,
    Options,
    Trace,
}

impl HttpVerb {
    /// Canonical uppercase wire name
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpVerb::Get => "GET",
            HttpVerb::Post => "POST",
            HttpVerb::Put => "PUT",
            HttpVerb::Delete => "DELETE",
            HttpVerb::Patch => "PATCH",
            HttpVerb::Head => "HEAD",
            HttpVerb::Options => "OPTIONS",
            HttpVerb::Trace => "TRACE",
        }
    }
}

impl fmt::Display for HttpVerb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HttpVerb {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "GET" => Ok(HttpVerb::Get),
            "POST" => Ok(HttpVerb::Post),
            "PUT" => Ok(HttpVerb::Put),
            "DELETE" => Ok(HttpVerb::Delete),
            "PATCH" => Ok(HttpVerb::Patch),
            "HEAD" => Ok(HttpVerb::Head),
            "OPTIONS" => Ok(HttpVerb::Options),
            "TRACE" => Ok(HttpVerb::Trace),
            _ => anyhow::bail!("Unknown HTTP verb: {}", s),
        }
    }
}

// ============================================================================
// Parameter Binding
// ============================================================================

/// Where a parameter value is read from when a request is dispatched
///
/// The convention engine only ever adds `Body`; the remaining sources can
/// arrive pre-authored from the discovery layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BindingAnnotation {
    Body,
    Query,
    Path,
    Header,
    Form,
}

// ============================================================================
// Route Selectors
// ============================================================================

/// A unit of routing metadata: an optional route template paired with an
/// optional set of allowed HTTP methods
///
/// A selector with neither is "empty" and is pruned before any convention
/// logic runs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct RouteSelector {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub http_methods: Vec<HttpVerb>,
}

impl RouteSelector {
    /// Selector carrying only a route template
    pub fn from_template(template: impl Into<String>) -> Self {
        Self {
            template: Some(template.into()),
            http_methods: Vec::new(),
        }
    }

    /// Selector carrying only a method constraint
    pub fn from_verb(verb: HttpVerb) -> Self {
        Self {
            template: None,
            http_methods: vec![verb],
        }
    }

    /// True when the selector has neither a template nor method constraints
    pub fn is_empty(&self) -> bool {
        self.template.is_none() && self.http_methods.is_empty()
    }
}

// ============================================================================
// API Explorer
// ============================================================================

/// Visibility and grouping flags consumed by API exploration tooling
///
/// Both fields are tri-state: `None` means "unresolved" and downstream
/// components fall back to their own defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ApiExplorerInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_visible: Option<bool>,
}
