// Transaction plan builder
// ------------------------
// One builder covers every deposit variant (zap or direct, fresh or existing
// position) through the `{existing_position, swap_amount, fixed_side}`
// parameters instead of one function per combination. Operations come out in
// a fixed order; the external submitter executes the list as one atomic unit.
//
// The builder is pure data-in, data-out: no I/O, no ledger handles.

use num_traits::Zero;

use crate::math::tick::encode_tick;
use crate::models::{
    FixedSide, LiquidityPlan, Operation, OperationPlan, PoolState, PositionRef, TickRange,
};

/// Sqrt prices at the global tick bounds, Q64.64 raw. Used as the swap price
/// limit: the extreme legal bound in the swap's direction.
pub const MIN_SQRT_PRICE_X64: u128 = 4_295_048_016;
pub const MAX_SQRT_PRICE_X64: u128 = 79_226_673_515_401_279_992_447_579_055;

/// Everything the builder needs for one plan. Owned snapshots only.
#[derive(Debug, Clone)]
pub struct BuildRequest<'a> {
    pub pool: &'a PoolState,
    pub range: TickRange,
    pub plan: &'a LiquidityPlan,
    /// Position object id to add to; `None` opens a fresh position.
    pub existing_position: Option<String>,
    /// How many fragments of the input asset the caller holds.
    pub input_fragment_count: usize,
    pub owner: String,
}

/// Compose the ordered operation list:
/// MergeCoins? -> Swap? -> OpenPosition? -> AddLiquidity -> ReturnChange.
pub fn build_operation_plan(req: &BuildRequest<'_>) -> OperationPlan {
    let pool = req.pool;
    let plan = req.plan;
    let mut operations = Vec::with_capacity(5);

    if req.input_fragment_count > 1 {
        operations.push(Operation::MergeCoins {
            coin_type: plan.input_asset.clone(),
            fragment_count: req.input_fragment_count,
        });
    }

    if !plan.swap_amount.is_zero() {
        // swapping the input asset for the counter asset
        let a_to_b = plan.fixed_side == FixedSide::A;
        operations.push(Operation::Swap {
            pool_id: pool.pool_id.clone(),
            input_asset: plan.input_asset.clone(),
            amount: plan.swap_amount.clone(),
            a_to_b,
            sqrt_price_limit: if a_to_b {
                MIN_SQRT_PRICE_X64
            } else {
                MAX_SQRT_PRICE_X64
            },
            by_amount_in: true,
        });
    }

    let position = match &req.existing_position {
        Some(id) => PositionRef::Existing(id.clone()),
        None => {
            operations.push(Operation::OpenPosition {
                pool_id: pool.pool_id.clone(),
                tick_lower: encode_tick(req.range.lower),
                tick_upper: encode_tick(req.range.upper),
            });
            PositionRef::Opened
        }
    };

    operations.push(Operation::AddLiquidity {
        pool_id: pool.pool_id.clone(),
        position,
        amount_a: plan.deposit_a.clone(),
        amount_b: plan.deposit_b.clone(),
        fixed_side: plan.fixed_side,
    });

    operations.push(Operation::ReturnChange {
        owner: req.owner.clone(),
        coin_types: vec![pool.coin_type_a.clone(), pool.coin_type_b.clone()],
    });

    OperationPlan {
        pool_id: pool.pool_id.clone(),
        owner: req.owner.clone(),
        operations,
    }
}
