//! String utilities
//!
//! Contains helper functions for safe string manipulation.

/// Remove the first matching postfix from the end of a string
///
/// Postfixes are checked in list order, case-sensitively. At most one
/// postfix is removed; if none match, the string is returned unchanged.
///
/// # Arguments
/// * `s` - The string to strip
/// * `postfixes` - Candidate postfixes, checked in order
///
/// # Returns
/// A slice of `s` with the first matching postfix removed
///
/// # Example
/// ```
/// use route_conventions::utils::remove_postfix;
///
/// assert_eq!(remove_postfix("OrderAppService", &["AppService", "Service"]), "Order");
/// assert_eq!(remove_postfix("Account", &["AppService", "Service"]), "Account");
/// ```
pub fn remove_postfix<'a>(s: &'a str, postfixes: &[&str]) -> &'a str {
    if s.is_empty() {
        return s;
    }

    for postfix in postfixes {
        if postfix.is_empty() {
            continue;
        }
        if let Some(stripped) = s.strip_suffix(postfix) {
            return stripped;
        }
    }

    s
}
