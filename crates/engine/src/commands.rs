//! Command and outcome types for [`Tracker::apply`].
//!
//! Every user action on the main screen becomes one [`Command`]. Destructive
//! commands do not run straight away: they park a [`Pending`] action and ask
//! for confirmation, which a later `Confirm` or `Cancel` resolves.
//!
//! [`Tracker::apply`]: crate::Tracker::apply

use crate::{ExpenseId, NewExpense};

pub const ADDED_NOTICE: &str = "Expense added successfully!";
pub const DELETED_NOTICE: &str = "Expense deleted";
pub const DELETED_ALL_NOTICE: &str = "All expenses deleted";
pub const NOTHING_TO_DELETE_NOTICE: &str = "No expenses to delete";
pub const LOGGED_OUT_NOTICE: &str = "Logged out successfully";
pub const ABOUT_TEXT: &str = "\
About Expense Tracker
A simple and elegant expense tracking app to help you manage your finances.

Version 1.0";

/// A user action on the main screen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    AddExpense(NewExpense),
    DeleteExpense(ExpenseId),
    DeleteAll,
    Logout,
    Confirm,
    Cancel,
    About,
}

/// Destructive action waiting for the user's answer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Pending {
    DeleteExpense(ExpenseId),
    DeleteAll,
    Logout,
}

impl Pending {
    /// Dialog title.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Pending::DeleteExpense(_) => "Delete Expense",
            Pending::DeleteAll => "Delete All Expenses",
            Pending::Logout => "Logout",
        }
    }

    /// Dialog question.
    #[must_use]
    pub const fn prompt(self) -> &'static str {
        match self {
            Pending::DeleteExpense(_) => "Are you sure you want to delete this expense?",
            Pending::DeleteAll => {
                "Are you sure you want to delete all expenses? This action cannot be undone."
            }
            Pending::Logout => "Are you sure you want to logout?",
        }
    }
}

/// What happened after a command was applied.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Added(ExpenseId),
    ConfirmationRequired(Pending),
    Deleted(ExpenseId),
    DeletedAll(usize),
    LoggedOut,
    Cancelled,
    /// Informational message, state unchanged.
    Notice(&'static str),
}

impl Outcome {
    /// Short message for the user, if the outcome has one.
    #[must_use]
    pub fn message(&self) -> Option<&'static str> {
        match self {
            Outcome::Added(_) => Some(ADDED_NOTICE),
            Outcome::ConfirmationRequired(pending) => Some(pending.prompt()),
            Outcome::Deleted(_) => Some(DELETED_NOTICE),
            Outcome::DeletedAll(_) => Some(DELETED_ALL_NOTICE),
            Outcome::LoggedOut => Some(LOGGED_OUT_NOTICE),
            Outcome::Cancelled => None,
            Outcome::Notice(text) => Some(*text),
        }
    }
}
