//! Immutable strategy settings
//!
//! These settings are fixed at construction and never change for the
//! lifetime of the manager instance.

use alloy_primitives::{Address, U256};

/// Contract handles and strategy parameters
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StrategySettings {
    /// Lending pool contract address
    pub lending_pool: Address,
    /// Exchange router contract address
    pub swap_router: Address,
    /// Variable debt token address tracking credit delegation
    pub delegation_registry: Address,
    /// Asset supplied as collateral
    pub collateral_asset: Address,
    /// Correlated asset borrowed against the collateral
    pub debt_asset: Address,
    /// Account the engine supplies from and receives swap output to
    pub engine_account: Address,
    /// WAD fraction of the reported capacity borrowed per iteration
    pub borrow_factor: U256,
    /// Fixed number of supply-borrow-swap iterations
    pub iteration_count: u32,
    /// Fee tier of the single-hop swap route, in hundredths of a bip
    pub swap_fee_tier: u32,
    /// Minimum acceptable swap output. Nominal by default.
    pub min_swap_output_floor: U256,
}

impl StrategySettings {
    /// Sets the lending pool contract address.
    pub fn lending_pool(&mut self, lending_pool: Address) -> &mut Self {
        self.lending_pool = lending_pool;
        self
    }

    /// Sets the exchange router contract address.
    pub fn swap_router(&mut self, swap_router: Address) -> &mut Self {
        self.swap_router = swap_router;
        self
    }

    /// Sets the delegation registry address.
    pub fn delegation_registry(&mut self, delegation_registry: Address) -> &mut Self {
        self.delegation_registry = delegation_registry;
        self
    }

    /// Sets the collateral asset.
    pub fn collateral_asset(&mut self, collateral_asset: Address) -> &mut Self {
        self.collateral_asset = collateral_asset;
        self
    }

    /// Sets the debt asset.
    pub fn debt_asset(&mut self, debt_asset: Address) -> &mut Self {
        self.debt_asset = debt_asset;
        self
    }

    /// Sets the engine's own account.
    pub fn engine_account(&mut self, engine_account: Address) -> &mut Self {
        self.engine_account = engine_account;
        self
    }

    /// Sets the WAD borrow factor.
    pub fn borrow_factor(&mut self, borrow_factor: U256) -> &mut Self {
        self.borrow_factor = borrow_factor;
        self
    }

    /// Sets the iteration count.
    pub fn iteration_count(&mut self, iteration_count: u32) -> &mut Self {
        self.iteration_count = iteration_count;
        self
    }

    /// Sets the swap fee tier.
    pub fn swap_fee_tier(&mut self, swap_fee_tier: u32) -> &mut Self {
        self.swap_fee_tier = swap_fee_tier;
        self
    }

    /// Sets the minimum swap output floor.
    pub fn min_swap_output_floor(&mut self, min_swap_output_floor: U256) -> &mut Self {
        self.min_swap_output_floor = min_swap_output_floor;
        self
    }
}
