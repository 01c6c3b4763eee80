// Planning service
// ----------------
// Wires the pieces together for the two deposit flows: read a pool snapshot,
// derive the tick range, split the amounts, and hand back the finished
// operation list. Everything here is one-way data flow over immutable inputs;
// the submitter is the only party that ever talks to the ledger.

use num_bigint::BigUint;

use crate::chain::PoolReader;
use crate::config::PlannerConfig;
use crate::engine::allocation;
use crate::engine::builder::{build_operation_plan, BuildRequest};
use crate::error::PlannerError;
use crate::math::price::sqrt_price_to_price;
use crate::math::tick::compute_range;
use crate::models::{FixedSide, OperationPlan, PoolState};

/// A single-asset deposit: swap part of the input, deposit both sides.
#[derive(Debug, Clone)]
pub struct ZapDepositRequest {
    pub pool_id: String,
    pub owner: String,
    pub input_asset: String,
    pub input_amount: BigUint,
    /// Add to this position instead of opening a new one.
    pub existing_position: Option<String>,
    pub input_fragment_count: usize,
    /// Range half-width override, in spacing units.
    pub width_in_spacings: Option<u32>,
}

/// A two-asset deposit with both amounts already in hand.
#[derive(Debug, Clone)]
pub struct DirectDepositRequest {
    pub pool_id: String,
    pub owner: String,
    pub amount_a: BigUint,
    pub amount_b: BigUint,
    pub fixed_side: FixedSide,
    pub existing_position: Option<String>,
    pub input_fragment_count: usize,
    pub width_in_spacings: Option<u32>,
}

/// Plan a zap deposit end to end. Returns a complete plan or an error,
/// never anything in between.
pub async fn plan_zap_deposit<R: PoolReader + ?Sized>(
    reader: &R,
    cfg: &PlannerConfig,
    req: &ZapDepositRequest,
) -> Result<OperationPlan, PlannerError> {
    let pool = fetch_open_pool(reader, &req.pool_id).await?;

    let width = req.width_in_spacings.unwrap_or(cfg.width_in_spacings);
    let range = compute_range(pool.current_tick, pool.tick_spacing, width)?;

    log::debug!(
        "planning zap for pool {} at price {:.6}, range [{}, {}]",
        pool.pool_id,
        sqrt_price_to_price(pool.current_sqrt_price, pool.decimals_a, pool.decimals_b),
        range.lower,
        range.upper
    );

    let plan = allocation::plan_zap(
        &req.input_asset,
        &req.input_amount,
        &pool,
        cfg.fee_buffer_bps,
        cfg.min_leg_amount,
    )?;

    Ok(build_operation_plan(&BuildRequest {
        pool: &pool,
        range,
        plan: &plan,
        existing_position: req.existing_position.clone(),
        input_fragment_count: req.input_fragment_count,
        owner: req.owner.clone(),
    }))
}

/// Plan a two-asset deposit end to end.
pub async fn plan_two_asset_deposit<R: PoolReader + ?Sized>(
    reader: &R,
    cfg: &PlannerConfig,
    req: &DirectDepositRequest,
) -> Result<OperationPlan, PlannerError> {
    let pool = fetch_open_pool(reader, &req.pool_id).await?;

    let width = req.width_in_spacings.unwrap_or(cfg.width_in_spacings);
    let range = compute_range(pool.current_tick, pool.tick_spacing, width)?;

    let plan = allocation::plan_direct_deposit(
        &req.amount_a,
        &req.amount_b,
        req.fixed_side,
        &pool,
        cfg.min_leg_amount,
    )?;

    log::debug!(
        "planning direct deposit for pool {}: {} A / {} B, range [{}, {}]",
        pool.pool_id,
        plan.deposit_a,
        plan.deposit_b,
        range.lower,
        range.upper
    );

    Ok(build_operation_plan(&BuildRequest {
        pool: &pool,
        range,
        plan: &plan,
        existing_position: req.existing_position.clone(),
        input_fragment_count: req.input_fragment_count,
        owner: req.owner.clone(),
    }))
}

/// Fetch a snapshot and reject paused pools before any further computation.
async fn fetch_open_pool<R: PoolReader + ?Sized>(
    reader: &R,
    pool_id: &str,
) -> Result<PoolState, PlannerError> {
    let pool = reader.get_pool_state(pool_id).await?;
    if pool.is_paused {
        return Err(PlannerError::PoolUnavailable(pool.pool_id));
    }
    Ok(pool)
}
