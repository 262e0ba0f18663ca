use alloy_sol_types::sol;
use serde::{Deserialize, Serialize};

use crate::{
    constants::{
        default_borrow_factor, min_swap_output_floor, wad, DEFAULT_ITERATION_COUNT,
        DEFAULT_SWAP_FEE_TIER, MAX_FEE_TIER,
    },
    strategy::settings::StrategySettings,
    utils::{
        common::{string_to_address, string_to_u256},
        error::StrategyError,
    },
};

sol!(
    // Lending pool
    function supply(address asset, uint256 amount, address onBehalfOf, uint16 referralCode) external;
    function borrow(address asset, uint256 amount, uint256 interestRateMode, uint16 referralCode, address onBehalfOf) external;
    function repay(address asset, uint256 amount, uint256 rateMode, address onBehalfOf) external returns (uint256);
    function withdraw(address asset, uint256 amount, address to) external returns (uint256);
    function getUserAccountData(address user) external view returns (
        uint256 totalCollateralBase,
        uint256 totalDebtBase,
        uint256 availableBorrowsBase,
        uint256 currentLiquidationThreshold,
        uint256 ltv,
        uint256 healthFactor
    );

    // Exchange router
    struct ExactInputSingleParams {
        address tokenIn;
        address tokenOut;
        uint24 fee;
        address recipient;
        uint256 amountIn;
        uint256 amountOutMinimum;
        uint160 sqrtPriceLimitX96;
    }
    function exactInputSingle(ExactInputSingleParams params) external payable returns (uint256 amountOut);

    // Variable debt token credit delegation
    function borrowAllowance(address fromUser, address toUser) external view returns (uint256);
    function approveDelegation(address delegatee, uint256 amount) external;

    // ERC20
    function balanceOf(address account) external view returns (uint256);
);

/// Construction-time configuration with string-encoded contract addresses.
/// Optional parameters fall back to the crate defaults.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct StrategyInit {
    pub lending_pool: String,
    pub swap_router: String,
    pub delegation_registry: String,
    pub collateral_asset: String,
    pub debt_asset: String,
    pub engine_account: String,
    /// WAD fraction of the reported capacity borrowed per iteration
    pub borrow_factor: Option<String>,
    pub iteration_count: Option<u32>,
    pub swap_fee_tier: Option<u32>,
    pub min_swap_output_floor: Option<String>,
}

impl TryFrom<StrategyInit> for StrategySettings {
    type Error = StrategyError;

    fn try_from(value: StrategyInit) -> Result<Self, Self::Error> {
        let borrow_factor = match value.borrow_factor {
            Some(raw) => string_to_u256(&raw)?,
            None => default_borrow_factor(),
        };
        if borrow_factor > wad() {
            return Err(StrategyError::Decoding(
                "The borrow factor must not exceed 1.0 (WAD).".to_string(),
            ));
        }

        let swap_fee_tier = value.swap_fee_tier.unwrap_or(DEFAULT_SWAP_FEE_TIER);
        if swap_fee_tier > MAX_FEE_TIER {
            return Err(StrategyError::Decoding(format!(
                "The fee tier {} does not fit the router's uint24 field.",
                swap_fee_tier
            )));
        }

        let min_swap_output_floor = match value.min_swap_output_floor {
            Some(raw) => string_to_u256(&raw)?,
            None => min_swap_output_floor(),
        };

        Ok(Self {
            lending_pool: string_to_address(&value.lending_pool)?,
            swap_router: string_to_address(&value.swap_router)?,
            delegation_registry: string_to_address(&value.delegation_registry)?,
            collateral_asset: string_to_address(&value.collateral_asset)?,
            debt_asset: string_to_address(&value.debt_asset)?,
            engine_account: string_to_address(&value.engine_account)?,
            borrow_factor,
            iteration_count: value.iteration_count.unwrap_or(DEFAULT_ITERATION_COUNT),
            swap_fee_tier,
            min_swap_output_floor,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::U256;

    fn valid_init() -> StrategyInit {
        StrategyInit {
            lending_pool: "0x1111111111111111111111111111111111111111".to_string(),
            swap_router: "0x2222222222222222222222222222222222222222".to_string(),
            delegation_registry: "0x3333333333333333333333333333333333333333".to_string(),
            collateral_asset: "0x4444444444444444444444444444444444444444".to_string(),
            debt_asset: "0x5555555555555555555555555555555555555555".to_string(),
            engine_account: "0x6666666666666666666666666666666666666666".to_string(),
            borrow_factor: None,
            iteration_count: None,
            swap_fee_tier: None,
            min_swap_output_floor: None,
        }
    }

    #[test]
    fn test_init_defaults() {
        let settings = StrategySettings::try_from(valid_init()).unwrap();
        assert_eq!(settings.borrow_factor, default_borrow_factor());
        assert_eq!(settings.iteration_count, DEFAULT_ITERATION_COUNT);
        assert_eq!(settings.swap_fee_tier, DEFAULT_SWAP_FEE_TIER);
        assert_eq!(settings.min_swap_output_floor, U256::from(1u64));
    }

    #[test]
    fn test_init_rejects_bad_address() {
        let mut init = valid_init();
        init.lending_pool = "bogus".to_string();
        let result = StrategySettings::try_from(init);
        assert!(matches!(result, Err(StrategyError::Decoding(_))));
    }

    #[test]
    fn test_init_rejects_factor_above_one() {
        let mut init = valid_init();
        init.borrow_factor = Some("2000000000000000000".to_string()); // 2.0
        let result = StrategySettings::try_from(init);
        assert!(matches!(result, Err(StrategyError::Decoding(_))));
    }

    #[test]
    fn test_init_rejects_wide_fee_tier() {
        let mut init = valid_init();
        init.swap_fee_tier = Some(1 << 24);
        let result = StrategySettings::try_from(init);
        assert!(matches!(result, Err(StrategyError::Decoding(_))));
    }
}
