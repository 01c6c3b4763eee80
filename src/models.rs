use chrono::{DateTime, Utc};
use num_bigint::BigUint;
use serde::{Deserialize, Serialize};

/// Immutable snapshot of a CLMM pool, as reported by the pool reader.
///
/// The planner never mutates this; staleness is the caller's concern.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PoolState {
    pub pool_id: String,
    /// Coin type tags, e.g. "0x2::sui::SUI".
    pub coin_type_a: String,
    pub coin_type_b: String,
    pub decimals_a: u8,
    pub decimals_b: u8,
    pub tick_spacing: u32,
    pub current_tick: i32,
    /// Q64.64 fixed-point square-root price, raw.
    pub current_sqrt_price: u128,
    pub liquidity: u128,
    pub is_paused: bool,
}

impl PoolState {
    pub fn holds_asset(&self, coin_type: &str) -> bool {
        coin_type == self.coin_type_a || coin_type == self.coin_type_b
    }
}

/// Which deposit leg the ledger must treat as exact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FixedSide {
    A,
    B,
}

/// A validated, spacing-aligned tick range. Created by the range calculator,
/// consumed by the plan builder; not persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickRange {
    pub lower: i32,
    pub upper: i32,
}

impl TickRange {
    pub fn width(&self) -> i64 {
        self.upper as i64 - self.lower as i64
    }
}

/// How a single input amount is split into swap and deposit legs.
///
/// Invariant: `swap_amount + deposit(input side) <= input_amount`; the gap is
/// the reserved fee/slippage buffer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LiquidityPlan {
    pub input_asset: String,
    pub input_amount: BigUint,
    pub swap_amount: BigUint,
    pub deposit_a: BigUint,
    pub deposit_b: BigUint,
    pub fixed_side: FixedSide,
}

impl LiquidityPlan {
    /// The deposit leg denominated in the input asset.
    pub fn deposit_of_input(&self) -> &BigUint {
        match self.fixed_side {
            FixedSide::A => &self.deposit_a,
            FixedSide::B => &self.deposit_b,
        }
    }
}

/// Reference to the position an `AddLiquidity` operation targets.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PositionRef {
    /// Chain-side position object id supplied by the caller.
    Existing(String),
    /// The position opened earlier in the same plan.
    Opened,
}

/// One abstract step of an operation plan. Pure data; the external submitter
/// resolves ledger object handles at execution time.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Operation {
    MergeCoins {
        coin_type: String,
        fragment_count: usize,
    },
    Swap {
        pool_id: String,
        input_asset: String,
        amount: BigUint,
        a_to_b: bool,
        /// Extreme legal sqrt-price bound in the swap's direction, not an
        /// exact-price target.
        sqrt_price_limit: u128,
        by_amount_in: bool,
    },
    OpenPosition {
        pool_id: String,
        /// Tick bounds in unsigned wire form (see `math::tick`).
        tick_lower: u32,
        tick_upper: u32,
    },
    AddLiquidity {
        pool_id: String,
        position: PositionRef,
        amount_a: BigUint,
        amount_b: BigUint,
        fixed_side: FixedSide,
    },
    ReturnChange {
        owner: String,
        coin_types: Vec<String>,
    },
}

impl Operation {
    pub fn kind(&self) -> &'static str {
        match self {
            Operation::MergeCoins { .. } => "MergeCoins",
            Operation::Swap { .. } => "Swap",
            Operation::OpenPosition { .. } => "OpenPosition",
            Operation::AddLiquidity { .. } => "AddLiquidity",
            Operation::ReturnChange { .. } => "ReturnChange",
        }
    }
}

/// Ordered operation list, executed atomically by the external submitter.
/// Discarding one before submission has no side effects.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OperationPlan {
    pub pool_id: String,
    pub owner: String,
    pub operations: Vec<Operation>,
}

impl OperationPlan {
    pub fn kinds(&self) -> Vec<&'static str> {
        self.operations.iter().map(|op| op.kind()).collect()
    }
}

/// Receipt returned by a transaction submitter on success.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitReceipt {
    pub digest: String,
    pub executed_at: DateTime<Utc>,
}
