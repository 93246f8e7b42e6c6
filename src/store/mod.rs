//! Issue storage
//!
//! A [`MemoryIndex`] built from a YAML [`Dataset`] serves as the search
//! executor and as the backend of every entity lookup.

mod dataset;
mod filter;
mod memory;

pub use dataset::{Dataset, ProjectPermission};
pub use memory::MemoryIndex;
