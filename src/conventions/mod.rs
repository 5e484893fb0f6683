//! Conventions module
//!
//! Contains the rule engine that derives HTTP exposure metadata from
//! service descriptors:
//! - name normalization and eligibility
//! - verb inference from action-name prefixes
//! - route template construction
//! - selector precedence (explicit metadata always wins)
//! - parameter binding strategy
//! - API explorer visibility

pub mod binding;
pub mod engine;
pub mod naming;
pub mod routes;
pub mod selectors;
pub mod verbs;
pub mod visibility;

pub use binding::{can_use_body_binding, select_body_bindings, BODYLESS_VERBS};
pub use engine::ConventionEngine;
pub use naming::{normalize_service_name, SERVICE_NAME_SUFFIXES};
pub use routes::build_route_template;
pub use selectors::{configure_action_selectors, has_explicit_template, prune_empty};
pub use verbs::{conventional_verb_for, verb_for, DEFAULT_HTTP_VERB};
pub use visibility::{resolve_action_visibility, resolve_controller_explorer};
