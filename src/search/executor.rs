//! Search orchestration: parameters to response

use super::models::SearchExecutor;
use crate::context::RequestContext;
use crate::error::Result;
use crate::query::{ExtraFields, QueryBuilder, SearchParams};
use crate::results::{IssueSearchResponse, ResultAssembler};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Runs an issue search end to end for one request
pub struct Search {
    builder: QueryBuilder,
    executor: Arc<dyn SearchExecutor>,
    assembler: ResultAssembler,
}

impl Search {
    pub fn new(builder: QueryBuilder, executor: Arc<dyn SearchExecutor>, assembler: ResultAssembler) -> Self {
        Self {
            builder,
            executor,
            assembler,
        }
    }

    /// Build the query, execute it and assemble the response
    pub async fn execute(&self, params: &SearchParams, ctx: &RequestContext) -> Result<IssueSearchResponse> {
        let start = Instant::now();

        let query = self.builder.build(params)?;
        let extra_fields = ExtraFields::parse(params.extra_fields.as_deref())?;
        debug!("Executing issue query {:?}", query);

        let result = self.executor.find(&query, ctx).await.map_err(|e| {
            warn!("Issue search failed: {}", e);
            e
        })?;

        let response = self.assembler.assemble(&query, &result, extra_fields, ctx);

        info!(
            "Issue search returned {} of {} issues in {:?}",
            response.issues.len(),
            response.paging.paging.total,
            start.elapsed()
        );

        Ok(response)
    }
}
