/*
[INPUT]:  Strategy labels selected by the user
[OUTPUT]: Opaque strategy label with display helpers
[POS]:    Data layer - strategy label passed through to the service
[UPDATE]: When the service adds or renames strategies
*/

use std::fmt;

use serde::{Deserialize, Serialize};

/// Labels the service is known to accept, in selector order
pub const KNOWN_STRATEGIES: [&str; 4] = [
    "smart_balance",
    "fastest_wins",
    "high_impact",
    "deadline_driven",
];

/// Scheduling strategy label. The client never interprets it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Strategy(String);

impl Strategy {
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Every known strategy, in selector order
    pub fn known() -> Vec<Strategy> {
        KNOWN_STRATEGIES.iter().map(|label| Strategy::new(*label)).collect()
    }

    /// Human-cased label, e.g. `SMART BALANCE`
    pub fn display_label(&self) -> String {
        human_case(&self.0)
    }
}

impl Default for Strategy {
    fn default() -> Self {
        Self::new(KNOWN_STRATEGIES[0])
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Underscores become spaces, letters are upper-cased
pub fn human_case(label: &str) -> String {
    label.replace('_', " ").to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_label() {
        assert_eq!(Strategy::new("smart_balance").display_label(), "SMART BALANCE");
        assert_eq!(Strategy::new("deadline_driven").display_label(), "DEADLINE DRIVEN");
        assert_eq!(Strategy::new("custom").display_label(), "CUSTOM");
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let value = serde_json::to_value(Strategy::new("high_impact")).unwrap();
        assert_eq!(value, serde_json::json!("high_impact"));
    }

    #[test]
    fn test_default_is_first_known() {
        assert_eq!(Strategy::default().as_str(), "smart_balance");
        assert_eq!(Strategy::known().len(), KNOWN_STRATEGIES.len());
    }
}
