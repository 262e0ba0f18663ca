use std::str::FromStr;

use alloy_primitives::{Address, U256};

use crate::{
    constants::wad,
    utils::error::{arithmetic_err, StrategyError, StrategyResult},
};

/// Converts a hex-encoded address string into an `Address`
pub fn string_to_address(input: &str) -> StrategyResult<Address> {
    Address::from_str(input).map_err(|err| StrategyError::Decoding(format!("{:#?}", err)))
}

/// Parses a decimal amount string into a `U256`
pub fn string_to_u256(input: &str) -> StrategyResult<U256> {
    U256::from_str(input).map_err(|err| StrategyError::Decoding(format!("{:#?}", err)))
}

/// Multiplies an amount by a WAD-scaled fraction, truncating toward zero.
/// This matches the lending pool's own rounding convention.
pub fn wad_mul(amount: U256, fraction: U256) -> StrategyResult<U256> {
    amount
        .checked_mul(fraction)
        .ok_or_else(|| arithmetic_err("WAD multiplication overflowed."))?
        .checked_div(wad())
        .ok_or_else(|| arithmetic_err("The WAD scale was zero."))
}
