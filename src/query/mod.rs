//! Query building module
//!
//! Turns the flat request parameters of an issue search into a validated
//! [`IssueQuery`]:
//! - Comma-separated lists: `severities=BLOCKER,CRITICAL`
//! - Rule keys: `rules=squid:AvoidCycles`
//! - Tri-state booleans: `resolved=false`
//! - Dates: `createdAfter=2013-05-01` or `2013-05-01T13:00:00+0100`
//! - Paging and sorting: `pageSize=-1`, `sort=SEVERITY&asc=true`

mod builder;
mod extra_fields;
mod models;
pub mod params;

pub use builder::QueryBuilder;
pub use extra_fields::{ExtraField, ExtraFields};
pub use models::{IssueQuery, IssueSort};
pub use params::SearchParams;
