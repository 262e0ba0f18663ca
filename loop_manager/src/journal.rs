//! Strategy journal.
//!
//! The journal is the only observability channel of the manager. Every
//! public operation appends entries describing what actually happened:
//! realized amounts, never requested ones. Business logic records through
//! the [`EventSink`] trait so tests can assert emitted sequences directly.

use alloy_primitives::{Address, U256};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::utils::error::{StrategyError, StrategyResult};

/// Observability events produced by the manager
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub enum StrategyEvent {
    /// A deposit was looped into a leveraged position
    DepositObserved {
        caller: Address,
        assets: U256,
        shares: U256,
        receiver: Address,
    },
    /// One loop iteration borrowed against the owner's collateral.
    /// `realized` is the observed balance delta, not the requested amount.
    BorrowObserved {
        owner: Address,
        requested: U256,
        realized: U256,
    },
    /// Borrowed assets were converted back into the collateral asset
    SwapObserved {
        amount_in: U256,
        resulting_balance: U256,
    },
    /// The owner's full share balance was burned ahead of unwinding
    WithdrawObserved {
        owner: Address,
        assets: U256,
        shares: U256,
        receiver: Address,
    },
    /// The position was closed: debt repaid, collateral released
    UnwindObserved {
        owner: Address,
        repaid: U256,
        withdrawn: U256,
    },
}

/// Journal entry
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct JournalEntry {
    pub timestamp: u64,
    pub event: StrategyEvent,
}

impl JournalEntry {
    /// Creates a new entry stamped with the current wall clock
    pub fn new(event: StrategyEvent) -> Self {
        Self {
            timestamp: Utc::now().timestamp() as u64,
            event,
        }
    }
}

/// Event sink abstraction, decoupling emission from storage
pub trait EventSink {
    fn record(&mut self, event: StrategyEvent);
}

/// In-memory journal collection
#[derive(Clone, Debug, Default)]
pub struct Journal {
    entries: Vec<JournalEntry>,
}

impl Journal {
    pub fn new() -> Self {
        Self::default()
    }

    /// All committed entries, oldest first
    pub fn entries(&self) -> &[JournalEntry] {
        &self.entries
    }

    /// The committed events without their timestamps
    pub fn events(&self) -> Vec<StrategyEvent> {
        self.entries.iter().map(|entry| entry.event.clone()).collect()
    }

    /// Serializes the journal for export to the host
    pub fn export_json(&self) -> StrategyResult<String> {
        serde_json::to_string(&self.entries)
            .map_err(|err| StrategyError::Decoding(format!("{:#?}", err)))
    }
}

impl EventSink for Journal {
    fn record(&mut self, event: StrategyEvent) {
        self.entries.push(JournalEntry::new(event));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_journal_preserves_order() {
        let mut journal = Journal::new();
        journal.record(StrategyEvent::SwapObserved {
            amount_in: U256::from(5u64),
            resulting_balance: U256::from(5u64),
        });
        journal.record(StrategyEvent::BorrowObserved {
            owner: Address::repeat_byte(0x11),
            requested: U256::from(5u64),
            realized: U256::from(4u64),
        });

        let events = journal.events();
        assert_eq!(events.len(), 2);
        assert!(matches!(events[0], StrategyEvent::SwapObserved { .. }));
        assert!(matches!(events[1], StrategyEvent::BorrowObserved { .. }));
    }

    #[test]
    fn test_journal_export_json() {
        let mut journal = Journal::new();
        journal.record(StrategyEvent::UnwindObserved {
            owner: Address::repeat_byte(0x22),
            repaid: U256::from(7u64),
            withdrawn: U256::from(7u64),
        });

        let exported = journal.export_json().unwrap();
        assert!(exported.contains("UnwindObserved"));
    }
}
