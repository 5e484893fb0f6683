//! Selector configuration
//!
//! Resolves the precedence between explicitly authored routing metadata
//! and convention-derived metadata. Explicit declarations always win:
//! a route template anywhere on the controller blocks synthesis for the
//! whole service, and authored action selectors are only ever completed,
//! never overridden.

use crate::conventions::routes::build_route_template;
use crate::conventions::verbs::verb_for;
use crate::schemas::routing::RouteSelector;

/// Drop selectors carrying neither a template nor method constraints
///
/// Empty selectors are dead routing entries and must go before any
/// convention logic runs.
pub fn prune_empty(selectors: &[RouteSelector]) -> Vec<RouteSelector> {
    selectors
        .iter()
        .filter(|selector| !selector.is_empty())
        .cloned()
        .collect()
}

/// True when any selector already carries a route template
pub fn has_explicit_template(selectors: &[RouteSelector]) -> bool {
    selectors.iter().any(|selector| selector.template.is_some())
}

/// Resolve the effective selector list for one action
///
/// No selectors left after pruning: synthesize exactly one, with the
/// conventional template and a single-verb constraint. Otherwise keep the
/// authored selectors, filling in the conventional template wherever one
/// is missing; authored verb constraints stay untouched.
pub fn configure_action_selectors(
    module_name: &str,
    controller_name: &str,
    action_name: &str,
    authored: &[RouteSelector],
    use_conventional_verbs: bool,
) -> Vec<RouteSelector> {
    let mut selectors = prune_empty(authored);

    if selectors.is_empty() {
        selectors.push(RouteSelector {
            template: Some(build_route_template(
                module_name,
                controller_name,
                action_name,
            )),
            http_methods: vec![verb_for(action_name, use_conventional_verbs)],
        });
    } else {
        for selector in &mut selectors {
            if selector.template.is_none() {
                selector.template = Some(build_route_template(
                    module_name,
                    controller_name,
                    action_name,
                ));
            }
        }
    }

    selectors
}
