//! The looping engine: iterative supply, borrow, swap.
//!
//! Each iteration supplies the working amount as collateral, borrows a
//! fixed fraction of the protocol-reported capacity on behalf of the
//! owner, and converts the borrowed asset back into the collateral asset.
//! The working amount carried into the next iteration is always the
//! observed balance delta of the engine account, never a call's claimed
//! return value. This defends against fee-on-transfer assets and rounding
//! drift in the external protocols.

use alloy_primitives::{Address, U256};

use crate::{
    constants::{variable_rate_mode, REFERRAL_CODE},
    journal::{EventSink, StrategyEvent},
    protocol::{AssetLedger, DelegationRegistry, LendingPool, SwapRouter},
    strategy::settings::StrategySettings,
    swap::SwapAdapter,
    utils::{
        common::wad_mul,
        error::{arithmetic_err, protocol_err, StrategyError, StrategyResult},
    },
};

/// Fraction of the reported capacity taken this iteration, truncated
/// toward zero per the lending pool's convention.
pub(crate) fn borrow_target(capacity: U256, borrow_factor: U256) -> StrategyResult<U256> {
    wad_mul(capacity, borrow_factor)
}

/// Orchestrates the iterative supply-borrow-swap cycle for one deposit
pub struct LoopingEngine<'a, P, R, D, A>
where
    P: LendingPool,
    R: SwapRouter,
    D: DelegationRegistry,
    A: AssetLedger,
{
    settings: &'a StrategySettings,
    pool: &'a P,
    registry: &'a D,
    ledger: &'a A,
    swap: SwapAdapter<'a, R, A>,
}

impl<'a, P, R, D, A> LoopingEngine<'a, P, R, D, A>
where
    P: LendingPool,
    R: SwapRouter,
    D: DelegationRegistry,
    A: AssetLedger,
{
    pub fn new(
        settings: &'a StrategySettings,
        pool: &'a P,
        router: &'a R,
        registry: &'a D,
        ledger: &'a A,
    ) -> Self {
        Self {
            settings,
            pool,
            registry,
            ledger,
            swap: SwapAdapter::new(settings, router, ledger),
        }
    }

    /// Runs the loop for `initial_amount` on behalf of `owner`.
    ///
    /// Returns the total collateral supplied across all iterations, which
    /// equals `initial_amount` plus the sum of realized swap outputs. Any
    /// step failure aborts the whole call; the host ledger rolls back
    /// whatever the failed call had not yet committed.
    pub fn run(
        &self,
        initial_amount: U256,
        owner: Address,
        journal: &mut dyn EventSink,
    ) -> StrategyResult<U256> {
        if initial_amount == U256::ZERO {
            return Err(protocol_err("The deposit amount was zero."));
        }

        let engine = self.settings.engine_account;
        let mut amount = initial_amount;
        let mut total_supplied = U256::ZERO;

        for _ in 0..self.settings.iteration_count {
            self.pool
                .supply(self.settings.collateral_asset, amount, owner, REFERRAL_CODE)?;
            total_supplied = total_supplied
                .checked_add(amount)
                .ok_or_else(|| arithmetic_err("The total supplied amount overflowed."))?;

            let account = self.pool.get_user_account_data(owner)?;
            let amount_to_borrow =
                borrow_target(account.availableBorrowsBase, self.settings.borrow_factor)?;

            // The allowance is the protocol's ledger, not ours, so it is
            // re-checked on every iteration.
            let allowance = self.registry.borrow_allowance(owner, engine)?;
            if allowance < amount_to_borrow {
                return Err(StrategyError::InsufficientDelegation {
                    required: amount_to_borrow,
                    allowance,
                });
            }

            let previous_amount = self
                .ledger
                .balance_of(self.settings.collateral_asset, engine)?;

            self.pool.borrow(
                self.settings.debt_asset,
                amount_to_borrow,
                variable_rate_mode(),
                REFERRAL_CODE,
                owner,
            )?;

            self.swap.convert(
                amount_to_borrow,
                self.settings.min_swap_output_floor,
                journal,
            )?;

            let current_amount = self
                .ledger
                .balance_of(self.settings.collateral_asset, engine)?;
            amount = current_amount.checked_sub(previous_amount).ok_or_else(|| {
                arithmetic_err("The collateral balance decreased across a borrow-swap step.")
            })?;

            journal.record(StrategyEvent::BorrowObserved {
                owner,
                requested: amount_to_borrow,
                realized: amount,
            });
        }

        // Deploy the leftover balance; nothing further is borrowed against it.
        self.pool
            .supply(self.settings.collateral_asset, amount, owner, REFERRAL_CODE)?;
        total_supplied = total_supplied
            .checked_add(amount)
            .ok_or_else(|| arithmetic_err("The total supplied amount overflowed."))?;

        Ok(total_supplied)
    }
}
