//! Per-request context passed explicitly through the search pipeline

use chrono::{DateTime, Utc};

/// Identity of the caller
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Caller {
    /// `None` for anonymous callers
    pub login: Option<String>,
}

impl Caller {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn user(login: impl Into<String>) -> Self {
        Self {
            login: Some(login.into()),
        }
    }

    pub fn is_logged_in(&self) -> bool {
        self.login.is_some()
    }

    /// Whether the caller is the user with this login
    pub fn is(&self, login: Option<&str>) -> bool {
        matches!((self.login.as_deref(), login), (Some(a), Some(b)) if a == b)
    }
}

/// Everything a request needs besides its parameters
#[derive(Debug, Clone)]
pub struct RequestContext {
    pub caller: Caller,
    /// Negotiated locale code, e.g. `en` or `fr`
    pub locale: String,
    /// Captured once so that every relative date of a response agrees
    pub now: DateTime<Utc>,
}

impl RequestContext {
    pub fn new(caller: Caller, locale: impl Into<String>) -> Self {
        Self {
            caller,
            locale: locale.into(),
            now: Utc::now(),
        }
    }

    pub fn at(mut self, now: DateTime<Utc>) -> Self {
        self.now = now;
        self
    }
}

impl Default for RequestContext {
    fn default() -> Self {
        Self::new(Caller::anonymous(), "en")
    }
}
