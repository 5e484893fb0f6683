//! HTTP verb inference
//!
//! Classifies an action name by its lexical prefix using a fixed ordered
//! table. The same table drives client proxy generation, so the mapping is
//! part of the public naming contract.

use crate::schemas::routing::HttpVerb;

/// Verb used when no prefix matches, and in default mode for every action
pub const DEFAULT_HTTP_VERB: HttpVerb = HttpVerb::Post;

/// Action-name prefix to verb table; the longest matching prefix wins
const VERB_PREFIXES: &[(&str, HttpVerb)] = &[
    ("Get", HttpVerb::Get),
    ("Find", HttpVerb::Get),
    ("Put", HttpVerb::Put),
    ("Update", HttpVerb::Put),
    ("Delete", HttpVerb::Delete),
    ("Remove", HttpVerb::Delete),
    ("Post", HttpVerb::Post),
    ("Create", HttpVerb::Post),
    ("Insert", HttpVerb::Post),
    ("Patch", HttpVerb::Patch),
];

/// Infer the HTTP verb for an action name from its prefix
///
/// Case-sensitive; unmatched names fall back to [`DEFAULT_HTTP_VERB`].
/// Total: every input yields exactly one verb.
pub fn conventional_verb_for(action_name: &str) -> HttpVerb {
    let mut best: Option<(&str, HttpVerb)> = None;

    for (prefix, verb) in VERB_PREFIXES {
        if action_name.starts_with(prefix) {
            match best {
                Some((current, _)) if current.len() >= prefix.len() => {}
                _ => best = Some((prefix, *verb)),
            }
        }
    }

    best.map(|(_, verb)| verb).unwrap_or(DEFAULT_HTTP_VERB)
}

/// Verb for a synthesized selector under the module's verb mode
pub fn verb_for(action_name: &str, use_conventional_verbs: bool) -> HttpVerb {
    if use_conventional_verbs {
        conventional_verb_for(action_name)
    } else {
        DEFAULT_HTTP_VERB
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_prefixes() {
        assert_eq!(conventional_verb_for("GetList"), HttpVerb::Get);
        assert_eq!(conventional_verb_for("Get"), HttpVerb::Get);
        assert_eq!(conventional_verb_for("FindByName"), HttpVerb::Get);
    }

    #[test]
    fn test_write_prefixes() {
        assert_eq!(conventional_verb_for("CreateOrder"), HttpVerb::Post);
        assert_eq!(conventional_verb_for("InsertLine"), HttpVerb::Post);
        assert_eq!(conventional_verb_for("PostComment"), HttpVerb::Post);
        assert_eq!(conventional_verb_for("UpdateOrder"), HttpVerb::Put);
        assert_eq!(conventional_verb_for("PutSetting"), HttpVerb::Put);
        assert_eq!(conventional_verb_for("DeleteOrder"), HttpVerb::Delete);
        assert_eq!(conventional_verb_for("RemoveLine"), HttpVerb::Delete);
        assert_eq!(conventional_verb_for("PatchOrder"), HttpVerb::Patch);
    }

    #[test]
    fn test_unmatched_falls_back_to_default() {
        assert_eq!(conventional_verb_for("Approve"), DEFAULT_HTTP_VERB);
        assert_eq!(conventional_verb_for("SendReminder"), DEFAULT_HTTP_VERB);
        assert_eq!(conventional_verb_for(""), DEFAULT_HTTP_VERB);
    }

    #[test]
    fn test_prefix_match_is_case_sensitive() {
        assert_eq!(conventional_verb_for("getList"), DEFAULT_HTTP_VERB);
    }

    #[test]
    fn test_prefix_match_is_lexical() {
        // Plain prefix matching, no word-boundary analysis
        assert_eq!(conventional_verb_for("Getaway"), HttpVerb::Get);
    }

    #[test]
    fn test_default_mode_ignores_names() {
        assert_eq!(verb_for("GetList", false), DEFAULT_HTTP_VERB);
        assert_eq!(verb_for("DeleteOrder", false), DEFAULT_HTTP_VERB);
        assert_eq!(verb_for("GetList", true), HttpVerb::Get);
    }

    #[test]
    fn test_deterministic() {
        for name in ["GetList", "Approve", "UpdateOrder", ""] {
            assert_eq!(conventional_verb_for(name), conventional_verb_for(name));
        }
    }
}
