//! Immutable operator parameter sets.

use std::collections::BTreeMap;

use crate::error::{Error, Result};

/// Named `f64` parameters handed to operator constructors.
///
/// Settings are a write-once value object: [`with`](Self::with) consumes
/// and returns, so a built set is never mutated behind an operator's back.
/// Operators copy the parameters they need at construction time and do not
/// retain the map afterwards.
///
/// Keys are matched exactly (`"CR"` is not `"cr"`); operator *names*, by
/// contrast, are matched case-insensitively by the registries.
///
/// # Examples
///
/// ```
/// use evocore::operator::OperatorSettings;
///
/// let settings = OperatorSettings::new()
///     .with("probability", 0.9)
///     .with("distributionIndex", 20.0);
///
/// assert_eq!(settings.get("probability"), Some(0.9));
/// assert_eq!(settings.get("CR"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OperatorSettings {
    values: BTreeMap<String, f64>,
}

impl OperatorSettings {
    /// Creates an empty setting set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns these settings with `key` set to `value`, replacing any
    /// previous value for the key.
    pub fn with(mut self, key: impl Into<String>, value: f64) -> Self {
        self.values.insert(key.into(), value);
        self
    }

    /// Value for `key`, if present.
    pub fn get(&self, key: &str) -> Option<f64> {
        self.values.get(key).copied()
    }

    /// Value for `key`, or `default` when absent.
    pub fn get_or(&self, key: &str, default: f64) -> f64 {
        self.get(key).unwrap_or(default)
    }

    /// Value for `key`, or a configuration error naming the operator that
    /// needed it.
    pub fn require(&self, operator: &'static str, key: &'static str) -> Result<f64> {
        self.get(key).ok_or(Error::MissingSetting { operator, key })
    }

    /// Number of stored settings.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True when no settings are stored.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_builds_incrementally() {
        let settings = OperatorSettings::new().with("CR", 0.5).with("F", 0.9);
        assert_eq!(settings.len(), 2);
        assert_eq!(settings.get("CR"), Some(0.5));
        assert_eq!(settings.get("F"), Some(0.9));
    }

    #[test]
    fn test_with_replaces_existing_key() {
        let settings = OperatorSettings::new()
            .with("probability", 0.1)
            .with("probability", 0.2);
        assert_eq!(settings.len(), 1);
        assert_eq!(settings.get("probability"), Some(0.2));
    }

    #[test]
    fn test_keys_are_case_sensitive() {
        let settings = OperatorSettings::new().with("CR", 0.5);
        assert_eq!(settings.get("cr"), None);
    }

    #[test]
    fn test_get_or_falls_back() {
        let settings = OperatorSettings::new();
        assert_eq!(settings.get_or("alpha", 0.5), 0.5);
        assert!(settings.is_empty());
    }

    #[test]
    fn test_require_reports_operator_and_key() {
        let settings = OperatorSettings::new();
        let err = settings.require("SBXCrossover", "probability").unwrap_err();
        assert!(err.is_configuration());
        let msg = err.to_string();
        assert!(msg.contains("SBXCrossover"), "missing operator in: {msg}");
        assert!(msg.contains("probability"), "missing key in: {msg}");
    }
}
