//! Service name normalization
//!
//! Strips the historical service suffixes from a type name to produce the
//! public-facing controller name.

use crate::utils::remove_postfix;

/// Known service-type suffixes, checked in order
pub const SERVICE_NAME_SUFFIXES: &[&str] = &["AppService", "ApplicationService", "Service"];

/// Derive the public-facing controller name from a service type name
///
/// Removes the first matching suffix from [`SERVICE_NAME_SUFFIXES`]; a name
/// without any known suffix is returned unchanged.
pub fn normalize_service_name(type_name: &str) -> &str {
    remove_postfix(type_name, SERVICE_NAME_SUFFIXES)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_known_suffixes() {
        assert_eq!(normalize_service_name("OrderAppService"), "Order");
        assert_eq!(normalize_service_name("OrderApplicationService"), "Order");
        assert_eq!(normalize_service_name("OrderService"), "Order");
    }

    #[test]
    fn test_unknown_suffix_unchanged() {
        assert_eq!(normalize_service_name("OrderManager"), "OrderManager");
        assert_eq!(normalize_service_name("Order"), "Order");
    }

    #[test]
    fn test_strips_once_only() {
        // Only the trailing suffix goes, not every occurrence
        assert_eq!(normalize_service_name("ServiceAppService"), "Service");
    }

    #[test]
    fn test_normalization_is_stable() {
        let once = normalize_service_name("InvoiceAppService");
        assert_eq!(normalize_service_name(once), once);
    }
}
