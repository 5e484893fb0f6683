//! API explorer visibility
//!
//! Computes visibility and grouping flags for a service and its actions.
//! Pure metadata resolution, no failure modes.

use crate::schemas::descriptor::ActionDescriptor;
use crate::schemas::routing::ApiExplorerInfo;

/// Resolve controller-level explorer flags
///
/// An unset grouping key becomes the exposed service name; unset
/// visibility defaults to visible.
pub fn resolve_controller_explorer(info: &ApiExplorerInfo, exposed_name: &str) -> ApiExplorerInfo {
    ApiExplorerInfo {
        group_name: info
            .group_name
            .clone()
            .or_else(|| Some(exposed_name.to_string())),
        is_visible: info.is_visible.or(Some(true)),
    }
}

/// Resolve action-level explorer visibility
///
/// An unset flag takes the enablement result of a marker attached directly
/// to the method; without a marker it stays unset, and downstream explorer
/// components fall back to controller-level visibility.
pub fn resolve_action_visibility(action: &ActionDescriptor) -> Option<bool> {
    action
        .is_visible
        .or_else(|| action.remote_service_marker.map(|marker| marker.enabled))
}
