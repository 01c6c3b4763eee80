// Liquidity allocation: split one input asset into swap + deposit legs
// --------------------------------------------------------------------
// All amounts are raw smallest units (BigUint). The counter-asset leg of a
// zap is an estimate from the pool's raw sqrt price; it is a non-binding hint
// to the deposit call, which the ledger resolves authoritatively.

use num_bigint::BigUint;
use num_traits::Zero;

use crate::error::PlannerError;
use crate::math::price::Q64_RESOLUTION;
use crate::models::{FixedSide, LiquidityPlan, PoolState};

/// Basis-point denominator for the fee/slippage buffer.
pub const BPS_DENOMINATOR: u32 = 10_000;

/// Default buffer reserved against swap slippage and fee erosion: 200 bps.
pub const DEFAULT_FEE_BUFFER_BPS: u32 = 200;

/// Plan a single-asset ("zap") deposit: half is swapped into the counter
/// asset, the remaining deposit leg is shaved by `fee_buffer_bps`, and the
/// input side is fixed because only its amount is known exactly up front.
pub fn plan_zap(
    input_asset: &str,
    input_amount: &BigUint,
    pool: &PoolState,
    fee_buffer_bps: u32,
    min_leg_amount: u64,
) -> Result<LiquidityPlan, PlannerError> {
    if pool.is_paused {
        return Err(PlannerError::PoolUnavailable(pool.pool_id.clone()));
    }

    let fixed_side = side_of(input_asset, pool)?;
    if input_amount.is_zero() {
        return Err(PlannerError::RejectedAmount {
            amount: BigUint::zero(),
            minimum: min_leg_amount.max(1),
        });
    }
    reject_below_minimum(input_amount, min_leg_amount)?;

    let swap_amount = input_amount / 2u8; // floor
    let deposit_of_input = input_amount - &swap_amount;
    let buffer_complement = BigUint::from(BPS_DENOMINATOR - fee_buffer_bps.min(BPS_DENOMINATOR));
    let deposit_adjusted = &deposit_of_input * buffer_complement / BPS_DENOMINATOR;

    reject_below_minimum(&swap_amount, min_leg_amount)?;
    reject_below_minimum(&deposit_adjusted, min_leg_amount)?;

    let counter_estimate = estimate_counter_amount(&swap_amount, pool, fixed_side);

    let (deposit_a, deposit_b) = match fixed_side {
        FixedSide::A => (deposit_adjusted, counter_estimate),
        FixedSide::B => (counter_estimate, deposit_adjusted),
    };

    Ok(LiquidityPlan {
        input_asset: input_asset.to_string(),
        input_amount: input_amount.clone(),
        swap_amount,
        deposit_a,
        deposit_b,
        fixed_side,
    })
}

/// Plan a two-asset deposit with both amounts caller-supplied. No swap leg
/// and no buffer; the minimum-amount policy still applies to both legs.
pub fn plan_direct_deposit(
    amount_a: &BigUint,
    amount_b: &BigUint,
    fixed_side: FixedSide,
    pool: &PoolState,
    min_leg_amount: u64,
) -> Result<LiquidityPlan, PlannerError> {
    if pool.is_paused {
        return Err(PlannerError::PoolUnavailable(pool.pool_id.clone()));
    }

    if !amount_a.is_zero() {
        reject_below_minimum(amount_a, min_leg_amount)?;
    }
    if !amount_b.is_zero() {
        reject_below_minimum(amount_b, min_leg_amount)?;
    }

    let (input_asset, input_amount) = match fixed_side {
        FixedSide::A => (pool.coin_type_a.clone(), amount_a.clone()),
        FixedSide::B => (pool.coin_type_b.clone(), amount_b.clone()),
    };
    reject_below_minimum(&input_amount, min_leg_amount)?;

    Ok(LiquidityPlan {
        input_asset,
        input_amount,
        swap_amount: BigUint::zero(),
        deposit_a: amount_a.clone(),
        deposit_b: amount_b.clone(),
        fixed_side,
    })
}

/// Check a plan against caller-reported balances. The planner never fetches
/// balances itself; the coin-inventory collaborator supplies them.
pub fn verify_balances(
    plan: &LiquidityPlan,
    pool: &PoolState,
    available_a: &BigUint,
    available_b: &BigUint,
) -> Result<(), PlannerError> {
    let (required_a, required_b) = required_amounts(plan);
    if required_a > *available_a {
        return Err(PlannerError::InsufficientBalance {
            asset: pool.coin_type_a.clone(),
            required: required_a,
            available: available_a.clone(),
        });
    }
    if required_b > *available_b {
        return Err(PlannerError::InsufficientBalance {
            asset: pool.coin_type_b.clone(),
            required: required_b,
            available: available_b.clone(),
        });
    }
    Ok(())
}

/// Amounts the caller must actually fund, per asset side. For a zap only the
/// input side is funded; the counter leg comes out of the swap.
fn required_amounts(plan: &LiquidityPlan) -> (BigUint, BigUint) {
    if !plan.swap_amount.is_zero() {
        // zap: the whole input amount is consumed (swap + deposit + buffer)
        match plan.fixed_side {
            FixedSide::A => (plan.input_amount.clone(), BigUint::zero()),
            FixedSide::B => (BigUint::zero(), plan.input_amount.clone()),
        }
    } else {
        (plan.deposit_a.clone(), plan.deposit_b.clone())
    }
}

fn side_of(input_asset: &str, pool: &PoolState) -> Result<FixedSide, PlannerError> {
    if input_asset == pool.coin_type_a {
        Ok(FixedSide::A)
    } else if input_asset == pool.coin_type_b {
        Ok(FixedSide::B)
    } else {
        Err(PlannerError::UnsupportedAsset {
            asset: input_asset.to_string(),
            pool_id: pool.pool_id.clone(),
        })
    }
}

fn reject_below_minimum(amount: &BigUint, min_leg_amount: u64) -> Result<(), PlannerError> {
    if *amount < BigUint::from(min_leg_amount) {
        return Err(PlannerError::RejectedAmount {
            amount: amount.clone(),
            minimum: min_leg_amount,
        });
    }
    Ok(())
}

/// Estimate how much of the counter asset the swap leg yields, from the raw
/// Q64.64 sqrt price: `amount * sqrtPrice^2 / 2^128` for A->B, the inverse
/// for B->A. Raw-unit arithmetic, so decimal exponents cancel out.
fn estimate_counter_amount(swap_amount: &BigUint, pool: &PoolState, input_side: FixedSide) -> BigUint {
    let squared = BigUint::from(pool.current_sqrt_price).pow(2);
    if squared.is_zero() {
        return BigUint::zero();
    }
    match input_side {
        FixedSide::A => (swap_amount * &squared) >> (2 * Q64_RESOLUTION as usize),
        FixedSide::B => (swap_amount << (2 * Q64_RESOLUTION as usize)) / squared,
    }
}
