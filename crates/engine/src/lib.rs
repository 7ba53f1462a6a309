//! Core of the expense tracker.
//!
//! - [`validation`]: syntactic checks for the login and registration forms.
//! - [`Ledger`]: in-memory expense list with an exact running total.
//! - [`check_session`]: decides between the main screen and the login flow.
//! - [`Tracker`]: applies main-screen [`Command`]s to a ledger.

pub use category::{Category, TagColor};
pub use commands::{Command, Outcome, Pending};
pub use error::EngineError;
pub use ledger::{ExpenseId, ExpenseRecord, Ledger, NewExpense};
pub use money::MoneyCents;
pub use session::{Gate, IdentityProvider, UserIdentity, check_session, welcome_name};
pub use tracker::Tracker;
pub use validation::ValidationError;

mod category;
pub mod commands;
mod error;
mod ledger;
mod money;
mod session;
mod tracker;
pub mod validation;

type ResultEngine<T> = Result<T, EngineError>;
