//! Route template construction
//!
//! All synthesized routes share one fixed shape. Names arrive already
//! validated by the naming layer and are substituted verbatim.

/// Build the conventional route template for an action
pub fn build_route_template(module_name: &str, controller_name: &str, action_name: &str) -> String {
    format!(
        "api/services/{}/{}/{}",
        module_name, controller_name, action_name
    )
}
