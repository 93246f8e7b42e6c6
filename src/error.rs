//! Error types for issue search
//!
//! Parameter errors are client errors and always name the offending
//! parameter and its raw value. Executor errors propagate unchanged.

use thiserror::Error;

/// Failure while turning raw request parameters into an [`IssueQuery`](crate::query::IssueQuery)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// A list element could not be parsed
    #[error("Invalid element '{token}' in parameter '{param}'")]
    Parse { param: String, token: String },

    /// A date parameter is neither an ISO date nor an ISO date-time
    #[error("Cannot parse date '{value}' of parameter '{param}'. Format must be yyyy-MM-dd or yyyy-MM-ddTHH:mm:ssZ")]
    InvalidDate { param: String, value: String },

    /// Out-of-range number, non-numeric input or unknown enumerated value
    #[error("Invalid value '{value}' for parameter '{param}': {reason}")]
    InvalidParameter {
        param: String,
        value: String,
        reason: String,
    },
}

impl QueryError {
    pub fn parse(param: &str, token: impl Into<String>) -> Self {
        Self::Parse {
            param: param.to_string(),
            token: token.into(),
        }
    }

    pub fn invalid_date(param: &str, value: impl Into<String>) -> Self {
        Self::InvalidDate {
            param: param.to_string(),
            value: value.into(),
        }
    }

    pub fn invalid(param: &str, value: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            param: param.to_string(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Name of the parameter that caused the failure
    pub fn param(&self) -> &str {
        match self {
            Self::Parse { param, .. }
            | Self::InvalidDate { param, .. }
            | Self::InvalidParameter { param, .. } => param,
        }
    }
}

/// Failure reported by a [`SearchExecutor`](crate::search::SearchExecutor)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// Underlying storage or index failure
    #[error("Search failed: {0}")]
    Storage(String),

    /// The caller lacks the required role on every addressed component
    #[error("Insufficient privileges: {0}")]
    PermissionDenied(String),
}

/// Any failure of an issue search
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error(transparent)]
    Query(#[from] QueryError),

    #[error(transparent)]
    Search(#[from] SearchError),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_parameter_and_value() {
        let err = QueryError::parse("rules", "malformed");
        assert_eq!(err.param(), "rules");
        assert!(err.to_string().contains("malformed"));

        let err = QueryError::invalid_date("createdAfter", "2013-13-45");
        assert!(err.to_string().contains("2013-13-45"));
        assert!(err.to_string().contains("createdAfter"));
    }
}
