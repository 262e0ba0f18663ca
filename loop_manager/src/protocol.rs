//! Trait seams over the external financial primitives.
//!
//! Every handle is fixed at construction and injected into the engines,
//! so the protocol side can be substituted with test doubles. The `sol!`
//! declarations in [`crate::types`] are the wire shapes these traits speak.

use alloy_primitives::{Address, U256};

use crate::{
    types::{getUserAccountDataReturn, ExactInputSingleParams},
    utils::error::StrategyResult,
};

/// Lending pool the strategy supplies to and borrows from
#[cfg_attr(test, mockall::automock)]
pub trait LendingPool {
    fn supply(
        &self,
        asset: Address,
        amount: U256,
        on_behalf_of: Address,
        referral_code: u16,
    ) -> StrategyResult<()>;

    fn borrow(
        &self,
        asset: Address,
        amount: U256,
        interest_rate_mode: U256,
        referral_code: u16,
        on_behalf_of: Address,
    ) -> StrategyResult<()>;

    /// Returns the amount actually repaid
    fn repay(
        &self,
        asset: Address,
        amount: U256,
        rate_mode: U256,
        on_behalf_of: Address,
    ) -> StrategyResult<U256>;

    /// Returns the amount actually withdrawn
    fn withdraw(&self, asset: Address, amount: U256, to: Address) -> StrategyResult<U256>;

    fn get_user_account_data(&self, user: Address) -> StrategyResult<getUserAccountDataReturn>;
}

/// Single-hop exchange route at a fixed fee tier
#[cfg_attr(test, mockall::automock)]
pub trait SwapRouter {
    /// Returns the realized output amount
    fn exact_input_single(&self, params: ExactInputSingleParams) -> StrategyResult<U256>;
}

/// Credit delegation ledger.
/// Consulted, never decremented, by the engine; consumption is enforced
/// by the protocol's own bookkeeping.
#[cfg_attr(test, mockall::automock)]
pub trait DelegationRegistry {
    fn borrow_allowance(&self, from_user: Address, to_user: Address) -> StrategyResult<U256>;

    /// Forwards an owner's authorization grant to the registry
    fn approve_delegation(
        &self,
        owner: Address,
        delegatee: Address,
        amount: U256,
    ) -> StrategyResult<()>;
}

/// ERC-20 style balance view.
/// The source of the balance-delta accounting: every carry-forward amount
/// is derived from before/after reads here, never from a claimed return.
#[cfg_attr(test, mockall::automock)]
pub trait AssetLedger {
    fn balance_of(&self, asset: Address, account: Address) -> StrategyResult<U256>;
}

/// Narrow view of the enclosing vault's share accounting.
/// The manager holds a reference to this, never the vault's state.
#[cfg_attr(test, mockall::automock)]
pub trait VaultAccounting {
    fn is_allocator(&self, account: Address) -> StrategyResult<bool>;

    fn is_paused(&self) -> StrategyResult<bool>;

    fn shares_of(&self, owner: Address) -> StrategyResult<U256>;

    fn assets_for_shares(&self, shares: U256) -> StrategyResult<U256>;

    /// Burns the shares and removes the implied assets from the vault's
    /// total tracked assets in one step
    fn burn_shares(&self, owner: Address, shares: U256, assets: U256) -> StrategyResult<()>;
}
