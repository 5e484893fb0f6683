//! Route synthesis output model
//!
//! The engine never mutates the descriptors it is given. Each eligible
//! candidate yields an immutable [`ServicePatch`] describing the routing
//! metadata post-state; the orchestrator applies patches to its own owned
//! model via [`ServicePatch::apply`], producing the resolved view the
//! dispatch layer consumes.

use crate::schemas::descriptor::{DiscoveryDocument, ParameterKind, ServiceCandidate};
use crate::schemas::routing::{ApiExplorerInfo, BindingAnnotation, HttpVerb, RouteSelector};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ============================================================================
// Patches
// ============================================================================

/// Why a candidate was admitted for conventional exposure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Eligibility {
    /// The type structurally satisfies the application-service capability
    ApplicationService,
    /// The type carries an explicit remote-service marker whose enablement
    /// predicate returned true
    RemoteServiceMarker,
}

/// Routing metadata post-state for one eligible service candidate
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServicePatch {
    /// Raw type name of the candidate this patch belongs to
    pub type_name: String,

    pub eligibility: Eligibility,

    /// Public-facing controller name (normalized for application services,
    /// unchanged for marker-only services)
    pub controller_name: String,

    /// Controller-level explorer flags with defaults filled in
    pub api_explorer: ApiExplorerInfo,

    /// Controller-level selectors after pruning; templates are never altered
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub selectors: Vec<RouteSelector>,

    pub actions: Vec<ActionPatch>,
}

/// Routing metadata post-state for one action
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ActionPatch {
    pub name: String,

    /// Tri-state explorer visibility; `None` propagates as "unresolved"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_visible: Option<bool>,

    /// Effective selector list: synthesized, completed, or as authored
    pub selectors: Vec<RouteSelector>,

    /// Names of parameters that receive a body-binding annotation
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub body_bindings: Vec<String>,
}

impl ServicePatch {
    /// Merge this patch with its candidate into the resolved view
    ///
    /// Parameter lists come from the candidate; bindings listed in
    /// `body_bindings` are filled in, existing annotations are kept as is.
    /// Actions missing from the patch (none, in practice) pass through
    /// with their authored selectors.
    pub fn apply(&self, candidate: &ServiceCandidate) -> ResolvedService {
        let actions = candidate
            .actions
            .iter()
            .map(|action| {
                let patch = self.actions.iter().find(|p| p.name == action.name);

                let parameters = action
                    .parameters
                    .iter()
                    .map(|prm| {
                        let binding = prm.binding.or_else(|| {
                            patch
                                .filter(|p| p.body_bindings.iter().any(|b| b == &prm.name))
                                .map(|_| BindingAnnotation::Body)
                        });
                        ResolvedParameter {
                            name: prm.name.clone(),
                            kind: prm.kind,
                            binding,
                        }
                    })
                    .collect();

                match patch {
                    Some(p) => ResolvedAction {
                        name: p.name.clone(),
                        is_visible: p.is_visible,
                        selectors: p.selectors.clone(),
                        parameters,
                    },
                    None => ResolvedAction {
                        name: action.name.clone(),
                        is_visible: action.is_visible,
                        selectors: action.selectors.clone(),
                        parameters,
                    },
                }
            })
            .collect();

        ResolvedService {
            controller_name: self.controller_name.clone(),
            group_name: self.api_explorer.group_name.clone(),
            is_visible: self.api_explorer.is_visible.unwrap_or(true),
            actions,
        }
    }
}

/// All patches produced by one synthesis pass
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RoutePlan {
    pub services: Vec<ServicePatch>,
}

impl RoutePlan {
    /// Apply every patch to its candidate
    ///
    /// Candidates without a patch were not eligible and are omitted.
    pub fn resolve(&self, doc: &DiscoveryDocument) -> Vec<ResolvedService> {
        self.services
            .iter()
            .filter_map(|patch| {
                doc.services
                    .iter()
                    .find(|c| c.type_name == patch.type_name)
                    .map(|candidate| patch.apply(candidate))
            })
            .collect()
    }
}

// ============================================================================
// Resolved View
// ============================================================================

/// A service candidate with all routing metadata resolved
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ResolvedService {
    pub controller_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_name: Option<String>,
    pub is_visible: bool,
    pub actions: Vec<ResolvedAction>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ResolvedAction {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_visible: Option<bool>,
    pub selectors: Vec<RouteSelector>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub parameters: Vec<ResolvedParameter>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ResolvedParameter {
    pub name: String,
    pub kind: ParameterKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub binding: Option<BindingAnnotation>,
}

// ============================================================================
// Route Report
// ============================================================================

/// Flattened route table for inspection output
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RouteReport {
    pub generated_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    pub routes: Vec<RouteRow>,
}

/// One selector of one action, flattened for display
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RouteRow {
    pub verbs: Vec<HttpVerb>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template: Option<String>,
    pub controller: String,
    pub action: String,
    pub visible: bool,
}

impl RouteReport {
    /// Flatten resolved services into one row per selector
    pub fn from_resolved(source: Option<String>, services: &[ResolvedService]) -> Self {
        let mut routes = Vec::new();

        for service in services {
            for action in &service.actions {
                let visible = action.is_visible.unwrap_or(service.is_visible);
                for selector in &action.selectors {
                    routes.push(RouteRow {
                        verbs: selector.http_methods.clone(),
                        template: selector.template.clone(),
                        controller: service.controller_name.clone(),
                        action: action.name.clone(),
                        visible,
                    });
                }
            }
        }

        Self {
            generated_at: Utc::now(),
            source,
            routes,
        }
    }
}
