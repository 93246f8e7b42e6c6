//! Optional per-issue enrichments requested through `extra_fields`

use super::params::{parse_list, EXTRA_FIELDS};
use crate::error::QueryError;
use std::fmt;
use std::str::FromStr;

/// A named enrichment of the issue view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExtraField {
    /// Actions the caller may perform on the issue
    Actions,
    /// Workflow transitions available to the caller
    Transitions,
    /// Display name of the assignee
    AssigneeName,
    /// Display name of the action plan
    ActionPlanName,
}

impl ExtraField {
    pub const ALL: [ExtraField; 4] = [
        Self::Actions,
        Self::Transitions,
        Self::AssigneeName,
        Self::ActionPlanName,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Actions => "actions",
            Self::Transitions => "transitions",
            Self::AssigneeName => "assigneeName",
            Self::ActionPlanName => "actionPlanName",
        }
    }

    fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

impl FromStr for ExtraField {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .find(|f| f.as_str() == s)
            .copied()
            .ok_or_else(|| {
                QueryError::invalid(
                    EXTRA_FIELDS,
                    s,
                    "possible values are actions, transitions, assigneeName, actionPlanName",
                )
            })
    }
}

impl fmt::Display for ExtraField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Set of requested extra fields
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExtraFields(u8);

impl ExtraFields {
    pub fn none() -> Self {
        Self(0)
    }

    pub fn all() -> Self {
        Self::ALL_FIELDS
    }

    const ALL_FIELDS: ExtraFields = ExtraFields(0b1111);

    /// Parse the raw `extra_fields` parameter
    pub fn parse(raw: Option<&str>) -> Result<Self, QueryError> {
        let mut fields = Self::none();
        for token in parse_list(EXTRA_FIELDS, raw)?.unwrap_or_default() {
            fields = fields.with(token.parse()?);
        }
        Ok(fields)
    }

    pub fn with(self, field: ExtraField) -> Self {
        Self(self.0 | field.bit())
    }

    pub fn contains(&self, field: ExtraField) -> bool {
        self.0 & field.bit() != 0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }
}

impl FromIterator<ExtraField> for ExtraFields {
    fn from_iter<I: IntoIterator<Item = ExtraField>>(iter: I) -> Self {
        iter.into_iter().fold(Self::none(), Self::with)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_extra_fields() {
        let fields = ExtraFields::parse(Some("actions,assigneeName")).unwrap();
        assert!(fields.contains(ExtraField::Actions));
        assert!(fields.contains(ExtraField::AssigneeName));
        assert!(!fields.contains(ExtraField::Transitions));
        assert!(!fields.contains(ExtraField::ActionPlanName));
    }

    #[test]
    fn test_absent_extra_fields() {
        assert!(ExtraFields::parse(None).unwrap().is_empty());
        assert!(ExtraFields::parse(Some("")).unwrap().is_empty());
    }

    #[test]
    fn test_unknown_extra_field() {
        let err = ExtraFields::parse(Some("actions,comments")).unwrap_err();
        assert!(matches!(
            err,
            QueryError::InvalidParameter { ref value, .. } if value == "comments"
        ));
    }

    #[test]
    fn test_all() {
        let all = ExtraFields::all();
        assert!(ExtraField::ALL.iter().all(|f| all.contains(*f)));
        assert_eq!(ExtraField::ALL.into_iter().collect::<ExtraFields>(), all);
    }
}
