use alloy_primitives::U256;
use serde::{Deserialize, Serialize};

/// Looping Strategy Manager Result
pub type StrategyResult<T> = Result<T, StrategyError>;

/// Looping Strategy Manager Errors
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub enum StrategyError {
    /// Caller is not the position owner, or lacks the vault's allocator capability
    Unauthorized,
    /// The owner's credit delegation does not cover the requested borrow
    InsufficientDelegation { required: U256, allowance: U256 },
    /// Operation attempted while the enclosing vault is paused
    Paused,
    /// A withdraw is already in progress
    Locked,
    /// An external lending or swap call failed or returned a zero/invalid result
    Protocol(String),
    /// Asset movement between a participant and the engine failed
    Transfer(String),
    /// Malformed construction-time configuration
    Decoding(String),
    /// Arithmetic error
    Arithmetic(String),
}

pub fn protocol_err<S: AsRef<str>>(s: S) -> StrategyError {
    StrategyError::Protocol(s.as_ref().to_string())
}

pub fn transfer_err<S: AsRef<str>>(s: S) -> StrategyError {
    StrategyError::Transfer(s.as_ref().to_string())
}

pub fn arithmetic_err<S: AsRef<str>>(s: S) -> StrategyError {
    StrategyError::Arithmetic(s.as_ref().to_string())
}
