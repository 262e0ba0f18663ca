//! The unwinding engine: full-position repay, then withdraw.
//!
//! Only full closes are supported. Repay must complete before the
//! withdrawal is attempted: the lending pool re-checks the position's
//! backing on withdraw, and outstanding debt would make it reject the
//! release of collateral.

use alloy_primitives::{Address, U256};

use crate::{
    constants::variable_rate_mode,
    journal::{EventSink, StrategyEvent},
    protocol::{AssetLedger, LendingPool},
    strategy::settings::StrategySettings,
    utils::error::{protocol_err, StrategyResult},
};

/// Orchestrates the repay-then-withdraw close of a position
pub struct UnwindingEngine<'a, P: LendingPool, A: AssetLedger> {
    settings: &'a StrategySettings,
    pool: &'a P,
    ledger: &'a A,
}

impl<'a, P: LendingPool, A: AssetLedger> UnwindingEngine<'a, P, A> {
    pub fn new(settings: &'a StrategySettings, pool: &'a P, ledger: &'a A) -> Self {
        Self {
            settings,
            pool,
            ledger,
        }
    }

    /// Closes `owner`'s position in full.
    ///
    /// Returns the actually repaid and withdrawn amounts as reported by
    /// the pool.
    pub fn run(
        &self,
        owner: Address,
        journal: &mut dyn EventSink,
    ) -> StrategyResult<(U256, U256)> {
        let engine = self.settings.engine_account;

        let holding = self
            .ledger
            .balance_of(self.settings.collateral_asset, engine)?;
        if holding == U256::ZERO {
            return Err(protocol_err("There is no holding to unwind."));
        }

        let repaid = self.pool.repay(
            self.settings.debt_asset,
            holding,
            variable_rate_mode(),
            owner,
        )?;
        if repaid == U256::ZERO {
            return Err(protocol_err("The pool reported a zero repayment."));
        }

        let withdrawn = self
            .pool
            .withdraw(self.settings.collateral_asset, holding, engine)?;
        if withdrawn == U256::ZERO {
            return Err(protocol_err("The pool reported a zero withdrawal."));
        }

        journal.record(StrategyEvent::UnwindObserved {
            owner,
            repaid,
            withdrawn,
        });

        Ok((repaid, withdrawn))
    }
}
