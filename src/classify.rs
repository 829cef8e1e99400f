use std::collections::HashSet;

#[cfg(test)]
use mockall::automock;

/// Cost category of one reconciled call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallCategory {
    /// Auxiliary small-model invocation triggered by a hook
    Lightweight,
    /// Main conversational agent
    Primary,
}

/// Policy deciding which category a model identifier bills under.
///
/// Injected rather than inlined so finer heuristics can replace the default
/// without touching the reconciler or aggregator.
#[cfg_attr(test, automock)]
pub trait Classify {
    fn classify(&self, model: &str) -> CallCategory;
}

/// Default heuristic: a haiku-class model is a hook call, everything else is
/// the main agent. Approximate by design of the logs; a hook that invokes a
/// large model is indistinguishable from a main-agent call here.
#[derive(Debug, Clone, Copy, Default)]
pub struct ModelNameHeuristic;

impl Classify for ModelNameHeuristic {
    fn classify(&self, model: &str) -> CallCategory {
        if model.to_lowercase().contains("haiku") {
            CallCategory::Lightweight
        } else {
            CallCategory::Primary
        }
    }
}

/// Alternative policy: an explicit set of hook-designated model identifiers
#[derive(Debug, Clone, Default)]
pub struct ModelAllowlist {
    lightweight: HashSet<String>,
}

impl ModelAllowlist {
    pub fn new(lightweight: impl IntoIterator<Item = String>) -> Self {
        Self {
            lightweight: lightweight.into_iter().collect(),
        }
    }
}

impl Classify for ModelAllowlist {
    fn classify(&self, model: &str) -> CallCategory {
        if self.lightweight.contains(model) {
            CallCategory::Lightweight
        } else {
            CallCategory::Primary
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_haiku_is_lightweight() {
        let policy = ModelNameHeuristic;
        assert_eq!(
            policy.classify("claude-3-5-haiku-20241022"),
            CallCategory::Lightweight
        );
        assert_eq!(policy.classify("Claude-HAIKU"), CallCategory::Lightweight);
    }

    #[test]
    fn test_everything_else_is_primary() {
        let policy = ModelNameHeuristic;
        assert_eq!(
            policy.classify("claude-3-opus-20240229"),
            CallCategory::Primary
        );
        assert_eq!(
            policy.classify("claude-sonnet-4-20250514"),
            CallCategory::Primary
        );
        assert_eq!(policy.classify("unknown"), CallCategory::Primary);
    }

    #[test]
    fn test_allowlist_policy() {
        let policy = ModelAllowlist::new(["hook-model-v1".to_string()]);
        assert_eq!(policy.classify("hook-model-v1"), CallCategory::Lightweight);
        // Even a haiku model is primary unless listed
        assert_eq!(
            policy.classify("claude-3-5-haiku-20241022"),
            CallCategory::Primary
        );
    }
}
