//! Convention engine
//!
//! Orchestrates the synthesis pass: eligibility, explorer flags, selector
//! configuration, and parameter binding, in that order, per candidate.
//! The engine holds no state across invocations; candidates never interact.

use crate::config::ConventionConfig;
use crate::conventions::binding::select_body_bindings;
use crate::conventions::naming::normalize_service_name;
use crate::conventions::selectors::{configure_action_selectors, has_explicit_template, prune_empty};
use crate::conventions::visibility::{resolve_action_visibility, resolve_controller_explorer};
use crate::schemas::descriptor::{DiscoveryDocument, ServiceCandidate};
use crate::schemas::patch::{ActionPatch, Eligibility, RoutePlan, ServicePatch};
use std::collections::HashMap;

/// Decide whether a candidate is exposed, and why
///
/// The structural capability wins over the explicit marker; a disabled
/// marker on a non-application-service type means no exposure at all.
fn classify_eligibility(candidate: &ServiceCandidate) -> Option<Eligibility> {
    if candidate.is_application_service {
        return Some(Eligibility::ApplicationService);
    }

    match candidate.remote_service_marker {
        Some(marker) if marker.enabled => Some(Eligibility::RemoteServiceMarker),
        _ => None,
    }
}

/// Convention-based route synthesis engine
///
/// One instance per startup pass; the configuration is read-only for the
/// engine's whole lifetime.
#[derive(Debug, Clone, Default)]
pub struct ConventionEngine {
    config: ConventionConfig,
}

impl ConventionEngine {
    pub fn new(config: ConventionConfig) -> Self {
        Self { config }
    }

    /// Run the synthesis pass over a whole discovery document
    ///
    /// Candidates are processed in document order; non-eligible candidates
    /// produce no patch.
    pub fn run(&self, doc: &DiscoveryDocument) -> RoutePlan {
        let mut services = Vec::new();

        for candidate in &doc.services {
            match self.plan_service(candidate) {
                Some(patch) => services.push(patch),
                None => {
                    tracing::debug!(
                        service = %candidate.type_name,
                        assembly = %candidate.assembly,
                        "Skipping candidate: not a remote service"
                    );
                }
            }
        }

        warn_on_duplicate_templates(&services);

        RoutePlan { services }
    }

    /// Derive the routing metadata patch for one candidate
    ///
    /// Returns `None` for non-eligible candidates. A controller-level
    /// selector that already carries a route template marks the whole
    /// service as explicitly authored: its actions pass through untouched,
    /// only explorer flags and parameter bindings are still resolved.
    pub fn plan_service(&self, candidate: &ServiceCandidate) -> Option<ServicePatch> {
        let eligibility = classify_eligibility(candidate)?;

        let controller_name = match eligibility {
            Eligibility::ApplicationService => {
                normalize_service_name(&candidate.type_name).to_string()
            }
            // Marker-only services keep their registration name unchanged
            Eligibility::RemoteServiceMarker => candidate.type_name.clone(),
        };

        let api_explorer = resolve_controller_explorer(&candidate.api_explorer, &controller_name);

        let controller_selectors = prune_empty(&candidate.selectors);
        let explicitly_routed = has_explicit_template(&controller_selectors);

        let module_name = self.config.module_name_for(&candidate.assembly);
        let use_conventional_verbs = self.config.uses_conventional_verbs(&candidate.assembly);

        let actions = candidate
            .actions
            .iter()
            .map(|action| {
                let selectors = if explicitly_routed {
                    action.selectors.clone()
                } else {
                    configure_action_selectors(
                        module_name,
                        &controller_name,
                        &action.name,
                        &action.selectors,
                        use_conventional_verbs,
                    )
                };

                let body_bindings = select_body_bindings(&action.parameters, &selectors);

                ActionPatch {
                    name: action.name.clone(),
                    is_visible: resolve_action_visibility(action),
                    selectors,
                    body_bindings,
                }
            })
            .collect();

        tracing::debug!(
            service = %candidate.type_name,
            controller = %controller_name,
            module = %module_name,
            explicitly_routed,
            use_conventional_verbs,
            "Planned service exposure"
        );

        Some(ServicePatch {
            type_name: candidate.type_name.clone(),
            eligibility,
            controller_name,
            api_explorer,
            selectors: controller_selectors,
            actions,
        })
    }
}

/// Diagnostic only: duplicate templates across a plan are the caller's
/// explicit-authoring responsibility and never rejected
fn warn_on_duplicate_templates(services: &[ServicePatch]) {
    let mut seen: HashMap<&str, u32> = HashMap::new();

    for service in services {
        for action in &service.actions {
            for selector in &action.selectors {
                if let Some(template) = selector.template.as_deref() {
                    *seen.entry(template).or_insert(0) += 1;
                }
            }
        }
    }

    for (template, count) in seen {
        if count > 1 {
            tracing::warn!(
                template = %template,
                count,
                "Route template appears on multiple selectors"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ConventionConfig, ServiceControllerSetting};
    use crate::schemas::descriptor::{
        ActionDescriptor, ParameterDescriptor, ParameterKind, RemoteServiceMarker,
    };
    use crate::schemas::routing::{ApiExplorerInfo, BindingAnnotation, HttpVerb, RouteSelector};

    fn action(name: &str) -> ActionDescriptor {
        ActionDescriptor {
            name: name.to_string(),
            selectors: Vec::new(),
            is_visible: None,
            remote_service_marker: None,
            parameters: Vec::new(),
        }
    }

    fn complex_param(name: &str) -> ParameterDescriptor {
        ParameterDescriptor {
            name: name.to_string(),
            type_name: None,
            kind: ParameterKind::Complex,
            binding: None,
        }
    }

    fn app_service(type_name: &str, actions: Vec<ActionDescriptor>) -> ServiceCandidate {
        ServiceCandidate {
            type_name: type_name.to_string(),
            assembly: "Acme.Orders".to_string(),
            is_application_service: true,
            remote_service_marker: None,
            selectors: Vec::new(),
            api_explorer: ApiExplorerInfo::default(),
            actions,
        }
    }

    fn conventional_config() -> ConventionConfig {
        ConventionConfig::new(
            "App",
            vec![ServiceControllerSetting {
                assembly: "Acme.Orders".to_string(),
                module_name: None,
                use_conventional_http_verbs: true,
            }],
        )
    }

    #[test]
    fn test_order_app_service_scenario() {
        let mut delete = action("DeleteOrder");
        delete.parameters = vec![complex_param("request")];
        let mut update = action("UpdateOrder");
        update.parameters = vec![complex_param("input")];

        let candidate = app_service(
            "OrderAppService",
            vec![action("GetList"), action("CreateOrder"), delete, update],
        );

        let engine = ConventionEngine::new(conventional_config());
        let patch = engine.plan_service(&candidate).unwrap();

        assert_eq!(patch.eligibility, Eligibility::ApplicationService);
        assert_eq!(patch.controller_name, "Order");
        assert_eq!(patch.api_explorer.group_name.as_deref(), Some("Order"));
        assert_eq!(patch.api_explorer.is_visible, Some(true));

        let get_list = &patch.actions[0];
        assert_eq!(get_list.selectors.len(), 1);
        assert_eq!(get_list.selectors[0].http_methods, vec![HttpVerb::Get]);
        assert_eq!(
            get_list.selectors[0].template.as_deref(),
            Some("api/services/App/Order/GetList")
        );

        let create = &patch.actions[1];
        assert_eq!(create.selectors[0].http_methods, vec![HttpVerb::Post]);

        // DELETE carries no body, so the complex parameter stays unbound
        let delete = &patch.actions[2];
        assert_eq!(delete.selectors[0].http_methods, vec![HttpVerb::Delete]);
        assert!(delete.body_bindings.is_empty());

        // PUT carries a body, so the complex parameter binds from it
        let update = &patch.actions[3];
        assert_eq!(update.selectors[0].http_methods, vec![HttpVerb::Put]);
        assert_eq!(update.body_bindings, vec!["input".to_string()]);
    }

    #[test]
    fn test_every_synthesized_selector_has_one_verb() {
        let candidate = app_service(
            "InvoiceAppService",
            vec![action("GetList"), action("Approve"), action("RemoveDraft")],
        );

        let engine = ConventionEngine::new(conventional_config());
        let patch = engine.plan_service(&candidate).unwrap();

        for action in &patch.actions {
            assert_eq!(action.selectors.len(), 1);
            assert_eq!(action.selectors[0].http_methods.len(), 1);
            assert!(action.selectors[0].template.is_some());
        }
    }

    #[test]
    fn test_non_eligible_candidate_skipped() {
        let mut candidate = app_service("Background", vec![action("Run")]);
        candidate.is_application_service = false;

        let engine = ConventionEngine::new(ConventionConfig::default());
        assert!(engine.plan_service(&candidate).is_none());

        // Disabled marker does not rescue it
        candidate.remote_service_marker = Some(RemoteServiceMarker { enabled: false });
        assert!(engine.plan_service(&candidate).is_none());
    }

    #[test]
    fn test_marker_service_keeps_registration_name() {
        let mut candidate = app_service("LegacyOrderService", vec![action("GetList")]);
        candidate.is_application_service = false;
        candidate.remote_service_marker = Some(RemoteServiceMarker { enabled: true });

        let engine = ConventionEngine::new(conventional_config());
        let patch = engine.plan_service(&candidate).unwrap();

        assert_eq!(patch.eligibility, Eligibility::RemoteServiceMarker);
        // No suffix stripping for marker-only services
        assert_eq!(patch.controller_name, "LegacyOrderService");
        assert_eq!(
            patch.actions[0].selectors[0].template.as_deref(),
            Some("api/services/App/LegacyOrderService/GetList")
        );
    }

    #[test]
    fn test_default_verb_mode_from_setting() {
        let config = ConventionConfig::new(
            "App",
            vec![ServiceControllerSetting {
                assembly: "Acme.Orders".to_string(),
                module_name: None,
                use_conventional_http_verbs: false,
            }],
        );

        let candidate = app_service(
            "OrderAppService",
            vec![action("GetList"), action("DeleteOrder")],
        );

        let engine = ConventionEngine::new(config);
        let patch = engine.plan_service(&candidate).unwrap();

        for action in &patch.actions {
            assert_eq!(action.selectors[0].http_methods, vec![HttpVerb::Post]);
        }
    }

    #[test]
    fn test_missing_setting_means_default_verbs_and_module() {
        let mut candidate = app_service("OrderAppService", vec![action("GetList")]);
        candidate.assembly = "Acme.Unknown".to_string();

        let engine = ConventionEngine::new(conventional_config());
        let patch = engine.plan_service(&candidate).unwrap();

        let selector = &patch.actions[0].selectors[0];
        assert_eq!(selector.template.as_deref(), Some("api/services/App/Order/GetList"));
        assert_eq!(selector.http_methods, vec![HttpVerb::Post]);
    }

    #[test]
    fn test_module_name_from_setting() {
        let config = ConventionConfig::new(
            "App",
            vec![ServiceControllerSetting {
                assembly: "Acme.Orders".to_string(),
                module_name: Some("Orders".to_string()),
                use_conventional_http_verbs: true,
            }],
        );

        let candidate = app_service("OrderAppService", vec![action("GetList")]);
        let engine = ConventionEngine::new(config);
        let patch = engine.plan_service(&candidate).unwrap();

        assert_eq!(
            patch.actions[0].selectors[0].template.as_deref(),
            Some("api/services/Orders/Order/GetList")
        );
    }

    #[test]
    fn test_explicit_controller_template_blocks_all_actions() {
        let mut get_list = action("GetList");
        get_list.selectors = vec![RouteSelector::from_verb(HttpVerb::Get)];

        let mut candidate = app_service("OrderAppService", vec![get_list, action("CreateOrder")]);
        candidate.selectors = vec![
            RouteSelector::default(),
            RouteSelector::from_template("api/orders"),
        ];

        let engine = ConventionEngine::new(conventional_config());
        let patch = engine.plan_service(&candidate).unwrap();

        // Controller selectors pruned, explicit template untouched
        assert_eq!(patch.selectors.len(), 1);
        assert_eq!(patch.selectors[0].template.as_deref(), Some("api/orders"));

        // Action selectors pass through exactly as authored
        assert_eq!(
            patch.actions[0].selectors,
            vec![RouteSelector::from_verb(HttpVerb::Get)]
        );
        assert!(patch.actions[1].selectors.is_empty());
    }

    #[test]
    fn test_controller_constraints_alone_do_not_block() {
        let mut candidate = app_service("OrderAppService", vec![action("GetList")]);
        candidate.selectors = vec![RouteSelector::from_verb(HttpVerb::Get)];

        let engine = ConventionEngine::new(conventional_config());
        let patch = engine.plan_service(&candidate).unwrap();

        assert_eq!(
            patch.actions[0].selectors[0].template.as_deref(),
            Some("api/services/App/Order/GetList")
        );
    }

    #[test]
    fn test_binding_sees_explicitly_authored_verbs() {
        // Authored GET selector without a template: the completed selector
        // still carries GET, so the complex parameter must not bind
        let mut lookup = action("LookupOrder");
        lookup.selectors = vec![RouteSelector::from_verb(HttpVerb::Get)];
        lookup.parameters = vec![complex_param("query")];

        // Under an explicit controller route, authored PUT keeps binding on
        let mut update = action("UpdateOrder");
        update.selectors = vec![RouteSelector::from_verb(HttpVerb::Put)];
        update.parameters = vec![complex_param("input")];

        let engine = ConventionEngine::new(conventional_config());

        let candidate = app_service("OrderAppService", vec![lookup.clone()]);
        let patch = engine.plan_service(&candidate).unwrap();
        assert!(patch.actions[0].body_bindings.is_empty());

        let mut blocked = app_service("OrderAppService", vec![update]);
        blocked.selectors = vec![RouteSelector::from_template("api/orders")];
        let patch = engine.plan_service(&blocked).unwrap();
        assert_eq!(patch.actions[0].body_bindings, vec!["input".to_string()]);
    }

    #[test]
    fn test_existing_parameter_binding_kept() {
        let mut update = action("UpdateOrder");
        update.parameters = vec![ParameterDescriptor {
            name: "input".to_string(),
            type_name: None,
            kind: ParameterKind::Complex,
            binding: Some(BindingAnnotation::Query),
        }];

        let candidate = app_service("OrderAppService", vec![update]);
        let engine = ConventionEngine::new(conventional_config());
        let patch = engine.plan_service(&candidate).unwrap();

        assert!(patch.actions[0].body_bindings.is_empty());
    }

    #[test]
    fn test_action_visibility_from_marker() {
        let mut hidden = action("GetInternal");
        hidden.remote_service_marker = Some(RemoteServiceMarker { enabled: false });

        let candidate = app_service("OrderAppService", vec![hidden, action("GetList")]);
        let engine = ConventionEngine::new(conventional_config());
        let patch = engine.plan_service(&candidate).unwrap();

        assert_eq!(patch.actions[0].is_visible, Some(false));
        assert_eq!(patch.actions[1].is_visible, None);
    }

    #[test]
    fn test_run_processes_document_in_order() {
        let mut ineligible = app_service("Worker", vec![action("Run")]);
        ineligible.is_application_service = false;

        let doc = DiscoveryDocument {
            source: None,
            services: vec![
                app_service("OrderAppService", vec![action("GetList")]),
                ineligible,
                app_service("InvoiceAppService", vec![action("GetList")]),
            ],
        };

        let engine = ConventionEngine::new(conventional_config());
        let plan = engine.run(&doc);

        assert_eq!(plan.services.len(), 2);
        assert_eq!(plan.services[0].controller_name, "Order");
        assert_eq!(plan.services[1].controller_name, "Invoice");
    }

    #[test]
    fn test_run_is_deterministic() {
        let doc = DiscoveryDocument {
            source: None,
            services: vec![app_service(
                "OrderAppService",
                vec![action("GetList"), action("Approve")],
            )],
        };

        let engine = ConventionEngine::new(conventional_config());
        let first = serde_json::to_string(&engine.run(&doc)).unwrap();
        let second = serde_json::to_string(&engine.run(&doc)).unwrap();
        assert_eq!(first, second);
    }
}
