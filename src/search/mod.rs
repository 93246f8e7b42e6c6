//! Search orchestration module
//!
//! Defines the executor contract, the pagination rules and the pipeline
//! running a request from raw parameters to the assembled response.

mod executor;
mod models;
mod paging;

pub use executor::Search;
pub use models::*;
pub use paging::*;
