//! Application state shared across handlers

use crate::actions::WorkflowActions;
use crate::config::Settings;
use crate::lookup::Lookups;
use crate::query::QueryBuilder;
use crate::results::ResultAssembler;
use crate::search::Search;
use crate::store::MemoryIndex;
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub settings: Arc<Settings>,
    pub search: Arc<Search>,
}

impl AppState {
    /// Wire the search pipeline over an in-memory index
    pub fn new(settings: Settings, index: Arc<MemoryIndex>) -> Self {
        let policy = settings.policy();
        let assembler = ResultAssembler::new(
            policy,
            settings.formatter(),
            Lookups::from_backend(index.clone()),
            Arc::new(WorkflowActions::new(index.clone())),
        );
        let search = Search::new(QueryBuilder::new(policy), index, assembler);

        Self {
            settings: Arc::new(settings),
            search: Arc::new(search),
        }
    }

    pub fn instance_name(&self) -> &str {
        &self.settings.general.instance_name
    }
}
