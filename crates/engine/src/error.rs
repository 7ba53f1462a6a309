//! The module contains the error the engine can throw.
//!
//! The errors are:
//!
//! - [`KeyNotFound`] thrown when an expense is not in the ledger.
//! - [`InvalidAmount`] thrown when an amount cannot be turned into cents, or
//!   when the ledger total does not fit in cents.
//! - [`ConfirmationPending`] thrown when a command arrives while a
//!   destructive action is waiting for an answer.
//! - [`NothingPending`] thrown by confirm or cancel when no action waits.
//! - [`SignedOut`] thrown for any command after the tracker was closed.
//! - [`Validation`] wraps the first form field that failed its check.
//!
//!  [`KeyNotFound`]: EngineError::KeyNotFound
//!  [`InvalidAmount`]: EngineError::InvalidAmount
//!  [`ConfirmationPending`]: EngineError::ConfirmationPending
//!  [`NothingPending`]: EngineError::NothingPending
//!  [`SignedOut`]: EngineError::SignedOut
//!  [`Validation`]: EngineError::Validation
use thiserror::Error;

use crate::validation::ValidationError;

/// Engine custom errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("\"{0}\" key not found!")]
    KeyNotFound(String),
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
    #[error("A confirmation is pending, answer it first")]
    ConfirmationPending,
    #[error("Nothing to confirm")]
    NothingPending,
    #[error("Not signed in")]
    SignedOut,
    #[error(transparent)]
    Validation(#[from] ValidationError),
}
