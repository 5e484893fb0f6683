//! Schema module
//!
//! Contains the descriptor model supplied by the discovery layer, the
//! routing metadata vocabulary, and the patch model the engine produces.

pub mod descriptor;
pub mod patch;
pub mod routing;

pub use descriptor::{
    ActionDescriptor, DiscoveryDocument, ParameterDescriptor, ParameterKind, RemoteServiceMarker,
    ServiceCandidate,
};
pub use patch::{
    ActionPatch, Eligibility, ResolvedAction, ResolvedParameter, ResolvedService, RoutePlan,
    RouteReport, RouteRow, ServicePatch,
};
pub use routing::{ApiExplorerInfo, BindingAnnotation, HttpVerb, RouteSelector};
