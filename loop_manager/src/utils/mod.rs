//! Utility and helper functions needed for:
//! - Decoding the construction-time configuration
//! - Fixed point arithmetic
//! - Error handling

pub mod common;
pub mod error;
