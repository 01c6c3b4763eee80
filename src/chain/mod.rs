// Ledger boundary traits
// ----------------------
// The planner itself is pure; anything that touches the chain lives behind
// these two traits. A reader hands back self-consistent pool snapshots, a
// submitter executes a finished operation list atomically.

use std::collections::HashMap;

use async_trait::async_trait;

use crate::error::PlannerError;
use crate::models::{OperationPlan, PoolState, SubmitReceipt};

/// Source of pool snapshots. Staleness is the caller's concern; the planner
/// does no caching or refresh of its own.
#[async_trait]
pub trait PoolReader: Send + Sync {
    async fn get_pool_state(&self, pool_id: &str) -> Result<PoolState, PlannerError>;
}

/// Executes an operation plan as one atomic unit on behalf of `owner`.
/// The plan carries no signing material; the submitter resolves ledger object
/// references at execution time and either commits every step or none.
#[async_trait]
pub trait TransactionSubmitter: Send + Sync {
    async fn submit(&self, plan: &OperationPlan, owner: &str)
        -> Result<SubmitReceipt, PlannerError>;
}

/// In-memory pool reader over owned snapshots, for tests and offline planning.
#[derive(Debug, Default, Clone)]
pub struct StaticPoolReader {
    pools: HashMap<String, PoolState>,
}

impl StaticPoolReader {
    pub fn new(pools: impl IntoIterator<Item = PoolState>) -> Self {
        Self {
            pools: pools
                .into_iter()
                .map(|p| (p.pool_id.clone(), p))
                .collect(),
        }
    }

    pub fn insert(&mut self, pool: PoolState) {
        self.pools.insert(pool.pool_id.clone(), pool);
    }
}

#[async_trait]
impl PoolReader for StaticPoolReader {
    async fn get_pool_state(&self, pool_id: &str) -> Result<PoolState, PlannerError> {
        self.pools
            .get(pool_id)
            .cloned()
            .ok_or_else(|| PlannerError::PoolNotFound(pool_id.to_string()))
    }
}
