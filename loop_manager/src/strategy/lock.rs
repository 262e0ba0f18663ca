//! Withdraw Path Locking
//!
//! A mutual-exclusion guard scoped to a single withdraw call. It rejects
//! reentrant invocation triggered by callbacks from asset-transfer or
//! protocol calls made mid-unwind, and must be released on every exit
//! path, including failure.
//!
//! ```plain
//! Lock State Machine:
//!
//!                   ┌──────────┐
//!              ┌────► Unlocked │
//!              │    └──────────┘
//!              │         │
//!          unlock     try_lock
//!              │         │
//!              │         ▼
//!              │    ┌─────────┐
//!              └────┤ Locked  │
//!                   └─────────┘
//! ```

use crate::utils::error::{StrategyError, StrategyResult};

/// Runtime lock for the unwind path
#[derive(Clone, Debug, Default)]
pub struct Lock {
    /// Current lock state
    is_locked: bool,
}

impl Lock {
    /// Attempts to acquire the lock.
    ///
    /// # Returns
    /// * `Ok(())` - Lock successfully acquired
    /// * `Err(StrategyError::Locked)` - Lock unavailable
    pub fn try_lock(&mut self) -> StrategyResult<()> {
        if self.is_locked {
            return Err(StrategyError::Locked);
        }
        self.is_locked = true;
        Ok(())
    }

    /// Releases the lock if it was legitimately acquired.
    ///
    /// # Arguments
    /// * `acquired_lock` - Whether the caller previously acquired the lock
    pub fn unlock(&mut self, acquired_lock: bool) -> &mut Self {
        if acquired_lock {
            self.is_locked = false;
        }
        self
    }

    pub fn is_locked(&self) -> bool {
        self.is_locked
    }
}
