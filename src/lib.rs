//! Issue search: a filtered, paginated query service over code-quality issues
//!
//! Raw request parameters are validated into an [`IssueQuery`], executed by a
//! [`SearchExecutor`] and assembled into a composite response carrying the
//! page of issues along with the components, projects, rules and users they
//! reference.

pub mod actions;
pub mod config;
pub mod context;
pub mod error;
pub mod issues;
pub mod locales;
pub mod lookup;
pub mod query;
pub mod results;
pub mod search;
pub mod store;
pub mod web;

pub use config::Settings;
pub use context::{Caller, RequestContext};
pub use error::{Error, Result};
pub use query::{IssueQuery, QueryBuilder, SearchParams};
pub use results::{IssueSearchResponse, ResultAssembler};
pub use search::{PaginationPolicy, Search, SearchExecutor};
pub use store::MemoryIndex;

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
