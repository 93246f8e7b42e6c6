//! Result assembly module
//!
//! Turns an executor's result set into the composite search response: issue
//! views plus the deduplicated components, projects, rules and users they
//! reference.

mod assembler;
mod references;
mod views;

pub use assembler::ResultAssembler;
pub use references::ReferenceSet;
pub use views::*;
