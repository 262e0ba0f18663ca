//! Leveraged looping strategy manager.
//!
//! Takes a deposited base asset and amplifies exposure by iteratively
//! supplying it as collateral to a lending pool, borrowing a correlated
//! asset against it, and swapping the borrowed asset back into the
//! collateral asset. On exit, the position is unwound in full: debt is
//! repaid before any collateral is released.
//!
//! All external protocols (lending pool, swap router, credit delegation,
//! asset ledger, the enclosing vault) sit behind constructor-injected
//! traits declared in [`protocol`].

pub mod constants;
pub mod journal;
pub mod manager;
pub mod protocol;
pub mod strategy;
pub mod swap;
pub mod types;
pub mod utils;

pub use manager::StrategyCore;
pub use strategy::settings::StrategySettings;
pub use utils::error::{StrategyError, StrategyResult};
