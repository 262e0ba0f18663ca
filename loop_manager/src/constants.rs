//! Looping Strategy Manager's Constants

use alloy_primitives::U256;

/// Scale used for fixed point arithmetic
pub const WAD: u128 = 1_000_000_000_000_000_000; // e18
pub fn wad() -> U256 {
    U256::from(WAD)
}

/// Fraction of the reported borrow capacity taken on each iteration
const DEFAULT_BORROW_FACTOR_RAW: u128 = 75 * WAD / 100; // 75*10^16 => 0.75
pub fn default_borrow_factor() -> U256 {
    U256::from(DEFAULT_BORROW_FACTOR_RAW)
}

/// Number of supply-borrow-swap iterations per deposit
pub const DEFAULT_ITERATION_COUNT: u32 = 3;

/// Swap route fee tier in hundredths of a basis point (0.3%)
pub const DEFAULT_SWAP_FEE_TIER: u32 = 3_000;

/// Largest fee tier that fits the router's uint24 field
pub const MAX_FEE_TIER: u32 = (1 << 24) - 1;

/// Nominal minimum swap output.
/// This floor offers no real slippage protection; it only rejects a
/// fully drained route.
const MIN_SWAP_OUTPUT_FLOOR_RAW: u64 = 1;
pub fn min_swap_output_floor() -> U256 {
    U256::from(MIN_SWAP_OUTPUT_FLOOR_RAW)
}

/// Variable interest rate mode of the lending pool
const VARIABLE_RATE_MODE_RAW: u64 = 2;
pub fn variable_rate_mode() -> U256 {
    U256::from(VARIABLE_RATE_MODE_RAW)
}

/// Referral code forwarded on every supply and borrow
pub const REFERRAL_CODE: u16 = 0;
