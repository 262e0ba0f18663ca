//! The public-facing strategy manager.
//!
//! `StrategyCore` is what the enclosing vault's deposit and withdraw hooks
//! invoke. It holds the constructor-injected protocol handles, the journal,
//! and the withdraw-path lock, and delegates the actual work to the
//! looping and unwinding engines.

use alloy_primitives::{Address, U256};

use crate::{
    journal::{EventSink, Journal, StrategyEvent},
    protocol::{AssetLedger, DelegationRegistry, LendingPool, SwapRouter, VaultAccounting},
    strategy::{lock::Lock, LoopingEngine, StrategySettings, UnwindingEngine},
    utils::error::{StrategyError, StrategyResult},
};

/// Orchestrator invoked by the enclosing vault's hooks.
///
/// Holds no position state across calls: positions live in the external
/// lending protocol, shares in the vault's ledger. Only the journal
/// accumulates entries.
pub struct StrategyCore<P, R, D, A, V>
where
    P: LendingPool,
    R: SwapRouter,
    D: DelegationRegistry,
    A: AssetLedger,
    V: VaultAccounting,
{
    settings: StrategySettings,
    pool: P,
    router: R,
    registry: D,
    ledger: A,
    vault: V,
    journal: Journal,
    lock: Lock,
}

impl<P, R, D, A, V> StrategyCore<P, R, D, A, V>
where
    P: LendingPool,
    R: SwapRouter,
    D: DelegationRegistry,
    A: AssetLedger,
    V: VaultAccounting,
{
    pub fn new(
        settings: StrategySettings,
        pool: P,
        router: R,
        registry: D,
        ledger: A,
        vault: V,
    ) -> Self {
        Self {
            settings,
            pool,
            router,
            registry,
            ledger,
            vault,
            journal: Journal::new(),
            lock: Lock::default(),
        }
    }

    pub fn settings(&self) -> &StrategySettings {
        &self.settings
    }

    /// The accumulated observability journal
    pub fn journal(&self) -> &Journal {
        &self.journal
    }

    /// Deposit hook. The caller must carry the vault's allocator
    /// capability; the deposited assets are looped into a leveraged
    /// position owned by the caller.
    pub fn on_deposit(
        &mut self,
        caller: Address,
        receiver: Address,
        assets: U256,
        shares: U256,
    ) -> StrategyResult<U256> {
        if !self.vault.is_allocator(caller)? {
            return Err(StrategyError::Unauthorized);
        }

        let engine = LoopingEngine::new(
            &self.settings,
            &self.pool,
            &self.router,
            &self.registry,
            &self.ledger,
        );
        let total_supplied = engine.run(assets, caller, &mut self.journal)?;

        self.journal.record(StrategyEvent::DepositObserved {
            caller,
            assets,
            shares,
            receiver,
        });

        Ok(total_supplied)
    }

    /// Withdraw hook. Closes the owner's entire position; there is no
    /// partial-withdraw path. Returns the number of shares burned.
    pub fn on_withdraw(
        &mut self,
        caller: Address,
        receiver: Address,
        owner: Address,
    ) -> StrategyResult<U256> {
        if caller != owner {
            return Err(StrategyError::Unauthorized);
        }
        if self.vault.is_paused()? {
            return Err(StrategyError::Paused);
        }

        // Guard against reentrant invocation from protocol callbacks
        // mid-unwind. Released on every exit path.
        self.lock.try_lock()?;
        let result = self.run_withdraw(receiver, owner);
        self.lock.unlock(true);
        result
    }

    fn run_withdraw(&mut self, receiver: Address, owner: Address) -> StrategyResult<U256> {
        let shares = self.vault.shares_of(owner)?;
        let assets = self.vault.assets_for_shares(shares)?;
        self.vault.burn_shares(owner, shares, assets)?;

        self.journal.record(StrategyEvent::WithdrawObserved {
            owner,
            assets,
            shares,
            receiver,
        });

        let engine = UnwindingEngine::new(&self.settings, &self.pool, &self.ledger);
        engine.run(owner, &mut self.journal)?;

        Ok(shares)
    }

    /// Pass-through forwarding the owner's borrowing authority grant to
    /// the delegation registry. The engine itself never mutates the
    /// allowance it later consults.
    pub fn delegate_credit(&self, owner: Address, amount: U256) -> StrategyResult<()> {
        self.registry
            .approve_delegation(owner, self.settings.engine_account, amount)
    }
}
