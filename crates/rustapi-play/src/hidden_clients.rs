//! Hidden client selection for the Play viewer
//!
//! The viewer's `hiddenClients` option has accumulated three accepted
//! shapes over time, and all three remain valid. Whichever shape the
//! caller supplies is serialized unchanged; the crate never converts
//! between them.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Which code-sample clients the viewer should hide
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum HiddenClients {
    /// Hide (or show) every client of every target
    All(bool),
    /// Per-target selection, keyed by target name (e.g. `"python"`)
    ByTarget(BTreeMap<String, TargetClients>),
    /// Legacy shape: hide these client names across all targets
    List(Vec<String>),
}

/// Per-target value inside [`HiddenClients::ByTarget`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TargetClients {
    /// Hide (or show) every client of this target
    All(bool),
    /// Hide exactly these clients of this target
    Named(Vec<String>),
}

impl Default for HiddenClients {
    /// No clients hidden, in the legacy list shape (serializes to `[]`)
    fn default() -> Self {
        HiddenClients::List(Vec::new())
    }
}

impl From<bool> for HiddenClients {
    fn from(hide_all: bool) -> Self {
        HiddenClients::All(hide_all)
    }
}

impl From<Vec<String>> for HiddenClients {
    fn from(clients: Vec<String>) -> Self {
        HiddenClients::List(clients)
    }
}

impl From<Vec<&str>> for HiddenClients {
    fn from(clients: Vec<&str>) -> Self {
        HiddenClients::List(clients.into_iter().map(String::from).collect())
    }
}

impl From<BTreeMap<String, TargetClients>> for HiddenClients {
    fn from(targets: BTreeMap<String, TargetClients>) -> Self {
        HiddenClients::ByTarget(targets)
    }
}

impl From<bool> for TargetClients {
    fn from(hide_all: bool) -> Self {
        TargetClients::All(hide_all)
    }
}

impl From<Vec<&str>> for TargetClients {
    fn from(clients: Vec<&str>) -> Self {
        TargetClients::Named(clients.into_iter().map(String::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_default_serializes_to_empty_list() {
        let value = serde_json::to_value(HiddenClients::default()).unwrap();
        assert_eq!(value, json!([]));
    }

    #[test]
    fn test_uniform_shape() {
        let value = serde_json::to_value(HiddenClients::All(true)).unwrap();
        assert_eq!(value, json!(true));
    }

    #[test]
    fn test_legacy_list_shape() {
        let hidden: HiddenClients = vec!["curl", "httpie"].into();
        let value = serde_json::to_value(&hidden).unwrap();
        assert_eq!(value, json!(["curl", "httpie"]));
    }

    #[test]
    fn test_per_target_shape() {
        let mut targets = BTreeMap::new();
        targets.insert("python".to_string(), TargetClients::from(vec!["requests"]));
        targets.insert("go".to_string(), TargetClients::All(true));

        let value = serde_json::to_value(HiddenClients::ByTarget(targets)).unwrap();
        assert_eq!(value, json!({"go": true, "python": ["requests"]}));
    }

    #[test]
    fn test_shapes_deserialize_without_merging() {
        let uniform: HiddenClients = serde_json::from_value(json!(false)).unwrap();
        assert_eq!(uniform, HiddenClients::All(false));

        let legacy: HiddenClients = serde_json::from_value(json!(["curl"])).unwrap();
        assert_eq!(legacy, HiddenClients::List(vec!["curl".to_string()]));

        let by_target: HiddenClients =
            serde_json::from_value(json!({"python": ["requests"], "go": true})).unwrap();
        let HiddenClients::ByTarget(targets) = by_target else {
            panic!("expected per-target shape");
        };
        assert_eq!(targets["go"], TargetClients::All(true));
        assert_eq!(targets["python"], TargetClients::Named(vec!["requests".to_string()]));
    }
}
