//! Rule identifiers in `<repository>:<rule>` form

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier of a coding rule, e.g. `squid:AvoidCycles`
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RuleKey {
    /// Rule repository (e.g. `squid`)
    pub repository: String,
    /// Rule key inside its repository
    pub rule: String,
}

impl RuleKey {
    pub fn new(repository: impl Into<String>, rule: impl Into<String>) -> Self {
        Self {
            repository: repository.into(),
            rule: rule.into(),
        }
    }

    /// Parse `<repository>:<rule>`. The rule part may itself contain colons.
    pub fn parse(s: &str) -> Result<Self, InvalidRuleKey> {
        match s.split_once(':') {
            Some((repository, rule)) if !repository.trim().is_empty() && !rule.trim().is_empty() => {
                Ok(Self::new(repository.trim(), rule.trim()))
            }
            _ => Err(InvalidRuleKey(s.to_string())),
        }
    }
}

impl fmt::Display for RuleKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.repository, self.rule)
    }
}

impl FromStr for RuleKey {
    type Err = InvalidRuleKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for RuleKey {
    type Error = InvalidRuleKey;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<RuleKey> for String {
    fn from(key: RuleKey) -> Self {
        key.to_string()
    }
}

/// A string that is not a valid `<repository>:<rule>` pair
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid rule key '{0}', expected <repository>:<rule>")]
pub struct InvalidRuleKey(pub String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rule_key() {
        let key = RuleKey::parse("squid:AvoidCycles").unwrap();
        assert_eq!(key.repository, "squid");
        assert_eq!(key.rule, "AvoidCycles");
        assert_eq!(key.to_string(), "squid:AvoidCycles");
    }

    #[test]
    fn test_rule_part_keeps_extra_colons() {
        let key = RuleKey::parse("common-java:Xpath:check").unwrap();
        assert_eq!(key.repository, "common-java");
        assert_eq!(key.rule, "Xpath:check");
    }

    #[test]
    fn test_malformed_rule_key() {
        assert_eq!(
            RuleKey::parse("malformed"),
            Err(InvalidRuleKey("malformed".to_string()))
        );
        assert!(RuleKey::parse(":rule").is_err());
        assert!(RuleKey::parse("squid:").is_err());
    }

    #[test]
    fn test_deserialize_from_string() {
        let key: RuleKey = serde_json::from_str("\"pmd:UnusedPrivateField\"").unwrap();
        assert_eq!(key, RuleKey::new("pmd", "UnusedPrivateField"));
        assert!(serde_json::from_str::<RuleKey>("\"nocolon\"").is_err());
    }
}
