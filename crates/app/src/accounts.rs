//! In-memory account directory acting as the identity provider.
//!
//! Accounts live only as long as the process. Email lookup ignores case.

use engine::{IdentityProvider, UserIdentity, ValidationError, validation};
use thiserror::Error;

use crate::settings::SeedAccount;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),
    #[error("An account with this email already exists")]
    EmailTaken,
    #[error("Authentication failed: wrong email or password")]
    BadCredentials,
}

#[derive(Debug, Clone)]
struct Account {
    username: String,
    email: String,
    password: String,
}

impl Account {
    fn identity(&self) -> UserIdentity {
        UserIdentity::new(Some(self.username.clone()), Some(self.email.clone()))
    }
}

#[derive(Debug, Default)]
pub struct Accounts {
    accounts: Vec<Account>,
    current: Option<usize>,
}

impl Accounts {
    /// Builds the directory from configured accounts.
    ///
    /// Seeds that fail registration checks are skipped with a warning.
    pub fn from_seed(seed: &[SeedAccount]) -> Self {
        let mut accounts = Self::default();
        for entry in seed {
            let added = accounts.insert(
                Some(entry.username.as_str()),
                Some(entry.email.as_str()),
                Some(entry.password.as_str()),
                Some(entry.password.as_str()),
            );
            if let Err(err) = added {
                tracing::warn!(email = %entry.email, "skipping seed account: {err}");
            }
        }
        tracing::debug!(count = accounts.len(), "account directory ready");
        accounts
    }

    /// Creates an account and signs it in.
    pub fn register(
        &mut self,
        username: Option<&str>,
        email: Option<&str>,
        password: Option<&str>,
        confirm: Option<&str>,
    ) -> Result<(), AuthError> {
        let index = self.insert(username, email, password, confirm)?;
        self.current = Some(index);
        tracing::info!(username = %self.accounts[index].username, "account registered");
        Ok(())
    }

    pub fn sign_in(
        &mut self,
        email: Option<&str>,
        password: Option<&str>,
    ) -> Result<(), AuthError> {
        validation::check_login(email, password)?;
        let (Some(email), Some(password)) = (email, password) else {
            return Err(AuthError::BadCredentials);
        };

        let index = self
            .find(email)
            .filter(|&index| self.accounts[index].password == password)
            .ok_or(AuthError::BadCredentials)?;
        self.current = Some(index);
        tracing::info!(username = %self.accounts[index].username, "signed in");
        Ok(())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    fn insert(
        &mut self,
        username: Option<&str>,
        email: Option<&str>,
        password: Option<&str>,
        confirm: Option<&str>,
    ) -> Result<usize, AuthError> {
        validation::check_registration(username, email, password, confirm)?;
        let (Some(username), Some(email), Some(password)) = (username, email, password) else {
            return Err(AuthError::Invalid(ValidationError::Username));
        };
        if self.find(email).is_some() {
            return Err(AuthError::EmailTaken);
        }

        self.accounts.push(Account {
            username: username.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        });
        Ok(self.accounts.len() - 1)
    }

    fn find(&self, email: &str) -> Option<usize> {
        self.accounts
            .iter()
            .position(|account| account.email.eq_ignore_ascii_case(email))
    }
}

impl IdentityProvider for Accounts {
    fn current_user(&self) -> Option<UserIdentity> {
        self.current
            .and_then(|index| self.accounts.get(index))
            .map(Account::identity)
    }

    fn sign_out(&mut self) {
        self.current = None;
    }
}
