//! Main-screen state machine.
//!
//! [`Tracker`] owns the ledger for one signed-in session and applies
//! [`Command`]s to it. All transitions go through [`Tracker::apply`], so the
//! screen logic can be driven and tested without any UI.

use crate::{
    Command, EngineError, IdentityProvider, Ledger, Outcome, Pending, ResultEngine,
    commands::{ABOUT_TEXT, NOTHING_TO_DELETE_NOTICE},
    session::{Gate, check_session},
};

#[derive(Debug)]
pub struct Tracker {
    ledger: Ledger,
    pending: Option<Pending>,
    signed_in: bool,
}

impl Tracker {
    /// Opens the main screen if the provider has a signed-in user.
    ///
    /// Returns the greeting alongside the tracker, or `None` when the caller
    /// must go to the login flow instead.
    pub fn open<P>(provider: &P) -> Option<(Self, String)>
    where
        P: IdentityProvider + ?Sized,
    {
        match check_session(provider) {
            Gate::Proceed { welcome } => Some((
                Self {
                    ledger: Ledger::new(),
                    pending: None,
                    signed_in: true,
                },
                welcome,
            )),
            Gate::RedirectToLogin => None,
        }
    }

    #[must_use]
    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    #[must_use]
    pub fn pending(&self) -> Option<Pending> {
        self.pending
    }

    #[must_use]
    pub fn is_signed_in(&self) -> bool {
        self.signed_in
    }

    /// Re-checks the session when the screen comes back to the foreground.
    ///
    /// If the user is gone the tracker is closed and its data dropped.
    pub fn resume<P>(&mut self, provider: &P) -> Gate
    where
        P: IdentityProvider + ?Sized,
    {
        let gate = check_session(provider);
        if gate == Gate::RedirectToLogin {
            self.close();
        }
        gate
    }

    /// Applies one command.
    ///
    /// While a confirmation is pending only `Confirm`, `Cancel` and `About`
    /// are accepted.
    pub fn apply<P>(&mut self, command: Command, provider: &mut P) -> ResultEngine<Outcome>
    where
        P: IdentityProvider + ?Sized,
    {
        if !self.signed_in {
            return Err(EngineError::SignedOut);
        }

        if self.pending.is_some()
            && !matches!(command, Command::Confirm | Command::Cancel | Command::About)
        {
            return Err(EngineError::ConfirmationPending);
        }

        match command {
            Command::AddExpense(expense) => {
                let id = self.ledger.add(expense).id();
                Ok(Outcome::Added(id))
            }
            Command::DeleteExpense(id) => {
                if self.ledger.get(id).is_none() {
                    return Err(EngineError::KeyNotFound(id.to_string()));
                }
                Ok(self.ask(Pending::DeleteExpense(id)))
            }
            Command::DeleteAll => {
                if self.ledger.is_empty() {
                    return Ok(Outcome::Notice(NOTHING_TO_DELETE_NOTICE));
                }
                Ok(self.ask(Pending::DeleteAll))
            }
            Command::Logout => Ok(self.ask(Pending::Logout)),
            Command::Confirm => {
                let pending = self.pending.take().ok_or(EngineError::NothingPending)?;
                self.run(pending, provider)
            }
            Command::Cancel => {
                let pending = self.pending.take().ok_or(EngineError::NothingPending)?;
                tracing::debug!(?pending, "confirmation cancelled");
                Ok(Outcome::Cancelled)
            }
            Command::About => Ok(Outcome::Notice(ABOUT_TEXT)),
        }
    }

    fn ask(&mut self, pending: Pending) -> Outcome {
        self.pending = Some(pending);
        Outcome::ConfirmationRequired(pending)
    }

    fn run<P>(&mut self, pending: Pending, provider: &mut P) -> ResultEngine<Outcome>
    where
        P: IdentityProvider + ?Sized,
    {
        match pending {
            Pending::DeleteExpense(id) => {
                let record = self.ledger.remove(id)?;
                Ok(Outcome::Deleted(record.id()))
            }
            Pending::DeleteAll => Ok(Outcome::DeletedAll(self.ledger.remove_all())),
            Pending::Logout => {
                provider.sign_out();
                self.close();
                tracing::info!("signed out");
                Ok(Outcome::LoggedOut)
            }
        }
    }

    fn close(&mut self) {
        self.ledger.remove_all();
        self.pending = None;
        self.signed_in = false;
    }
}
