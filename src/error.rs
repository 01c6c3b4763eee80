use num_bigint::BigUint;

/// Planner errors.
///
/// Every planner entry point returns a typed result; no partial plan is ever
/// handed back alongside an error.
#[derive(Debug, thiserror::Error)]
pub enum PlannerError {
    #[error("price must be positive and finite, got {0}")]
    InvalidPrice(f64),

    #[error("no valid aligned tick range around tick {current_tick} with spacing {spacing}")]
    InvalidRange { current_tick: i32, spacing: u32 },

    #[error("asset {asset} is not part of pool {pool_id}")]
    UnsupportedAsset { asset: String, pool_id: String },

    #[error("leg amount {amount} is below the protocol minimum of {minimum}")]
    RejectedAmount { amount: BigUint, minimum: u64 },

    #[error("insufficient balance of {asset}: need {required}, have {available}")]
    InsufficientBalance {
        asset: String,
        required: BigUint,
        available: BigUint,
    },

    #[error("pool {0} is paused")]
    PoolUnavailable(String),

    #[error("pool {0} not found")]
    PoolNotFound(String),

    #[error("submission failed: {0}")]
    SubmissionFailed(String),
}
