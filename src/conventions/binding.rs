//! Parameter binding strategy
//!
//! Decides which parameters are read from the request body. Runs against
//! an action's effective selector list, so it always sees the final verb
//! set, whether synthesized or explicitly authored.

use crate::schemas::descriptor::{ParameterDescriptor, ParameterKind};
use crate::schemas::routing::{HttpVerb, RouteSelector};

/// Verbs that conventionally carry no request body
pub const BODYLESS_VERBS: &[HttpVerb] = &[
    HttpVerb::Get,
    HttpVerb::Delete,
    HttpVerb::Trace,
    HttpVerb::Head,
];

fn is_bodyless(verb: &HttpVerb) -> bool {
    BODYLESS_VERBS.contains(verb)
}

/// Whether an action may bind complex parameters from the request body
///
/// A selector with a non-empty method set votes against body binding when
/// every one of its verbs is body-less; selectors without constraints do
/// not vote. No objection means body binding is allowed.
pub fn can_use_body_binding(selectors: &[RouteSelector]) -> bool {
    for selector in selectors {
        if selector.http_methods.is_empty() {
            continue;
        }
        if selector.http_methods.iter().all(is_bodyless) {
            return false;
        }
    }

    true
}

/// Names of parameters that should receive a body-binding annotation
///
/// Parameters with an existing binding annotation are never touched;
/// simple-typed parameters bind from the URL and are skipped.
pub fn select_body_bindings(
    parameters: &[ParameterDescriptor],
    selectors: &[RouteSelector],
) -> Vec<String> {
    let allowed = can_use_body_binding(selectors);

    parameters
        .iter()
        .filter(|prm| prm.binding.is_none())
        .filter(|prm| prm.kind == ParameterKind::Complex)
        .filter(|_| allowed)
        .map(|prm| prm.name.clone())
        .collect()
}
