//! # Console Error Type
//!
//! Failures that stop the console itself.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the Console                            │
//! │                                                                         │
//! │  User typed "abc" ──► ValidationError ──► printed, menu shown again     │
//! │  Line 9 of 2      ──► CoreError       ──► printed, menu shown again     │
//! │                                                                         │
//! │  stdout closed    ──► ConsoleError::Io      ──┐                         │
//! │  bad SHOPCART_*   ──► ConsoleError::Config  ──┴──► main exits non-zero  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Domain errors never become a `ConsoleError`; the flows report them and
//! the loop continues.

use thiserror::Error;

use crate::config::ConfigError;

/// Fatal console errors.
#[derive(Debug, Error)]
pub enum ConsoleError {
    /// Reading stdin or writing stdout failed.
    #[error("Console I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration could not be loaded or is invalid.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Convenience type alias for Results with ConsoleError.
pub type ConsoleResult<T> = Result<T, ConsoleError>;
