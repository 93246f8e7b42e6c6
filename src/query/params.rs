//! Raw request parameters and their value parsers
//!
//! Every parser distinguishes an absent parameter (`None`, no filter) from a
//! present one, and reports failures with the parameter name and raw value.

use crate::error::QueryError;
use crate::issues::{RuleKey, UnknownValue};
use chrono::{DateTime, FixedOffset, NaiveDate, Utc};
use serde::Deserialize;
use std::str::FromStr;

pub const ISSUES: &str = "issues";
pub const SEVERITIES: &str = "severities";
pub const STATUSES: &str = "statuses";
pub const RESOLUTIONS: &str = "resolutions";
pub const RESOLVED: &str = "resolved";
pub const COMPONENTS: &str = "components";
pub const COMPONENT_ROOTS: &str = "componentRoots";
pub const RULES: &str = "rules";
pub const HIDE_RULES: &str = "hideRules";
pub const ACTION_PLANS: &str = "actionPlans";
pub const PLANNED: &str = "planned";
pub const REPORTERS: &str = "reporters";
pub const ASSIGNEES: &str = "assignees";
pub const ASSIGNED: &str = "assigned";
pub const LANGUAGES: &str = "languages";
pub const EXTRA_FIELDS: &str = "extra_fields";
pub const CREATED_AT: &str = "createdAt";
pub const CREATED_AFTER: &str = "createdAfter";
pub const CREATED_BEFORE: &str = "createdBefore";
pub const PAGE_SIZE: &str = "pageSize";
pub const PAGE_INDEX: &str = "pageIndex";
pub const SORT: &str = "sort";
pub const ASC: &str = "asc";

/// Query string of an issue search, kept as raw strings.
///
/// Values are parsed by [`QueryBuilder`](super::QueryBuilder) so that every
/// failure can name the offending parameter.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchParams {
    /// Comma-separated issue keys
    pub issues: Option<String>,
    pub severities: Option<String>,
    pub statuses: Option<String>,
    pub resolutions: Option<String>,
    pub resolved: Option<String>,
    /// Components, without their sub-components
    pub components: Option<String>,
    /// Components and all of their sub-components
    #[serde(rename = "componentRoots")]
    pub component_roots: Option<String>,
    /// Comma-separated `<repository>:<rule>` keys
    pub rules: Option<String>,
    #[serde(rename = "hideRules")]
    pub hide_rules: Option<String>,
    /// Action plan keys (not names)
    #[serde(rename = "actionPlans")]
    pub action_plans: Option<String>,
    pub planned: Option<String>,
    pub reporters: Option<String>,
    pub assignees: Option<String>,
    pub assigned: Option<String>,
    pub languages: Option<String>,
    #[serde(rename = "extra_fields", alias = "extraFields")]
    pub extra_fields: Option<String>,
    #[serde(rename = "createdAt")]
    pub created_at: Option<String>,
    /// Inclusive lower bound
    #[serde(rename = "createdAfter")]
    pub created_after: Option<String>,
    /// Exclusive upper bound
    #[serde(rename = "createdBefore")]
    pub created_before: Option<String>,
    #[serde(rename = "pageSize")]
    pub page_size: Option<String>,
    #[serde(rename = "pageIndex")]
    pub page_index: Option<String>,
    pub sort: Option<String>,
    #[serde(rename = "asc", alias = "ascending")]
    pub asc: Option<String>,
}

/// Split a comma-separated value into trimmed tokens.
///
/// A blank value is an explicit empty list. Empty tokens (`a,,b`) are rejected.
pub fn parse_list(param: &str, raw: Option<&str>) -> Result<Option<Vec<String>>, QueryError> {
    let Some(raw) = raw else {
        return Ok(None);
    };
    if raw.trim().is_empty() {
        return Ok(Some(Vec::new()));
    }

    raw.split(',')
        .map(|token| {
            let token = token.trim();
            if token.is_empty() {
                Err(QueryError::parse(param, raw))
            } else {
                Ok(token.to_string())
            }
        })
        .collect::<Result<Vec<_>, _>>()
        .map(Some)
}

/// Parse a list of enumerated values
pub fn parse_enum_list<T>(param: &str, raw: Option<&str>) -> Result<Option<Vec<T>>, QueryError>
where
    T: FromStr<Err = UnknownValue>,
{
    let Some(tokens) = parse_list(param, raw)? else {
        return Ok(None);
    };
    tokens
        .iter()
        .map(|token| {
            token
                .parse::<T>()
                .map_err(|e| QueryError::invalid(param, token.as_str(), e.to_string()))
        })
        .collect::<Result<Vec<_>, _>>()
        .map(Some)
}

/// Parse a list of rule keys; a token without separator is a parse error
pub fn parse_rule_keys(param: &str, raw: Option<&str>) -> Result<Option<Vec<RuleKey>>, QueryError> {
    let Some(tokens) = parse_list(param, raw)? else {
        return Ok(None);
    };
    tokens
        .iter()
        .map(|token| RuleKey::parse(token).map_err(|_| QueryError::parse(param, token.as_str())))
        .collect::<Result<Vec<_>, _>>()
        .map(Some)
}

/// Tri-state boolean: unset stays unset
pub fn parse_bool(param: &str, raw: Option<&str>) -> Result<Option<bool>, QueryError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(v) if v.eq_ignore_ascii_case("true") || v.eq_ignore_ascii_case("yes") => Ok(Some(true)),
        Some(v) if v.eq_ignore_ascii_case("false") || v.eq_ignore_ascii_case("no") => Ok(Some(false)),
        Some(v) => Err(QueryError::invalid(
            param,
            v,
            "value must be one of true, false, yes, no",
        )),
    }
}

pub fn parse_int(param: &str, raw: Option<&str>) -> Result<Option<i32>, QueryError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(v) => v
            .parse::<i32>()
            .map(Some)
            .map_err(|_| QueryError::invalid(param, v, "value is not an integer")),
    }
}

/// Parse an ISO date (`2013-05-01`, midnight UTC) or date-time
/// (`2013-05-01T13:00:00+0100` or RFC 3339)
pub fn parse_date(param: &str, raw: Option<&str>) -> Result<Option<DateTime<Utc>>, QueryError> {
    let Some(value) = raw.map(str::trim).filter(|v| !v.is_empty()) else {
        return Ok(None);
    };

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Ok(Some(dt.with_timezone(&Utc)));
    }
    if let Ok(dt) = DateTime::<FixedOffset>::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%z") {
        return Ok(Some(dt.with_timezone(&Utc)));
    }
    if let Some(midnight) = NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
    {
        return Ok(Some(midnight.and_utc()));
    }

    Err(QueryError::invalid_date(param, value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::issues::Severity;
    use chrono::TimeZone;

    #[test]
    fn test_list_absent_empty_and_trimmed() {
        assert_eq!(parse_list(ISSUES, None).unwrap(), None);
        assert_eq!(parse_list(ISSUES, Some("  ")).unwrap(), Some(vec![]));
        assert_eq!(
            parse_list(ISSUES, Some(" a , b,c ")).unwrap(),
            Some(vec!["a".to_string(), "b".to_string(), "c".to_string()])
        );
    }

    #[test]
    fn test_list_rejects_empty_token() {
        let err = parse_list(REPORTERS, Some("admin,,simon")).unwrap_err();
        assert!(matches!(err, QueryError::Parse { ref param, .. } if param == REPORTERS));
    }

    #[test]
    fn test_enum_list() {
        let severities = parse_enum_list::<Severity>(SEVERITIES, Some("BLOCKER,CRITICAL")).unwrap();
        assert_eq!(severities, Some(vec![Severity::Blocker, Severity::Critical]));

        let err = parse_enum_list::<Severity>(SEVERITIES, Some("BLOCKER,URGENT")).unwrap_err();
        assert!(matches!(
            err,
            QueryError::InvalidParameter { ref param, ref value, .. }
                if param == SEVERITIES && value == "URGENT"
        ));
    }

    #[test]
    fn test_rule_keys() {
        let rules = parse_rule_keys(RULES, Some("squid:AvoidCycles,pmd:UnusedLocal")).unwrap();
        assert_eq!(
            rules,
            Some(vec![
                RuleKey::new("squid", "AvoidCycles"),
                RuleKey::new("pmd", "UnusedLocal")
            ])
        );

        assert_eq!(
            parse_rule_keys(RULES, Some("squid:AvoidCycles,malformed")).unwrap_err(),
            QueryError::parse(RULES, "malformed")
        );
    }

    #[test]
    fn test_tri_state_bool() {
        assert_eq!(parse_bool(RESOLVED, None).unwrap(), None);
        assert_eq!(parse_bool(RESOLVED, Some("true")).unwrap(), Some(true));
        assert_eq!(parse_bool(RESOLVED, Some("no")).unwrap(), Some(false));
        assert!(parse_bool(RESOLVED, Some("maybe")).is_err());
    }

    #[test]
    fn test_int() {
        assert_eq!(parse_int(PAGE_SIZE, Some("-1")).unwrap(), Some(-1));
        assert!(matches!(
            parse_int(PAGE_SIZE, Some("fifty")),
            Err(QueryError::InvalidParameter { .. })
        ));
    }

    #[test]
    fn test_dates() {
        let expected = Utc.with_ymd_and_hms(2013, 5, 1, 0, 0, 0).unwrap();
        assert_eq!(parse_date(CREATED_AT, Some("2013-05-01")).unwrap(), Some(expected));

        let expected = Utc.with_ymd_and_hms(2013, 5, 1, 12, 0, 0).unwrap();
        assert_eq!(
            parse_date(CREATED_AT, Some("2013-05-01T13:00:00+0100")).unwrap(),
            Some(expected)
        );
        assert_eq!(
            parse_date(CREATED_AT, Some("2013-05-01T12:00:00Z")).unwrap(),
            Some(expected)
        );
    }

    #[test]
    fn test_invalid_date_carries_raw_value() {
        assert_eq!(
            parse_date(CREATED_BEFORE, Some("01/05/2013")).unwrap_err(),
            QueryError::invalid_date(CREATED_BEFORE, "01/05/2013")
        );
    }
}
