//! Issue domain model
//!
//! Records as produced by the storage layer: issues and the entities they
//! reference (components, rules, users, action plans).

mod rule_key;
mod types;

pub use rule_key::RuleKey;
pub use types::*;
