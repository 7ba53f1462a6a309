//! Session gate: decides between the main screen and the login flow.
//!
//! Authentication itself lives behind [`IdentityProvider`]; the engine only
//! asks who is signed in and, on logout, asks the provider to sign out.

use serde::{Deserialize, Serialize};

const FALLBACK_NAME: &str = "User";

/// Signed-in user as reported by the identity provider.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserIdentity {
    display_name: Option<String>,
    email: Option<String>,
}

impl UserIdentity {
    #[must_use]
    pub fn new(display_name: Option<String>, email: Option<String>) -> Self {
        Self {
            display_name,
            email,
        }
    }

    #[must_use]
    pub fn display_name(&self) -> Option<&str> {
        self.display_name.as_deref()
    }

    #[must_use]
    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }
}

/// External authentication service.
pub trait IdentityProvider {
    /// The signed-in user, if any.
    fn current_user(&self) -> Option<UserIdentity>;

    fn sign_out(&mut self);
}

/// Result of checking the session at startup or resume.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Gate {
    Proceed { welcome: String },
    RedirectToLogin,
}

/// Runs the gate against the provider.
pub fn check_session<P>(provider: &P) -> Gate
where
    P: IdentityProvider + ?Sized,
{
    match provider.current_user() {
        Some(user) => {
            let welcome = format!("Welcome, {}", welcome_name(&user));
            tracing::info!("session present");
            Gate::Proceed { welcome }
        }
        None => {
            tracing::info!("no session, redirecting to login");
            Gate::RedirectToLogin
        }
    }
}

/// Name shown in the greeting.
///
/// Prefers a non-blank display name, then the local part of the email, then
/// a generic fallback.
#[must_use]
pub fn welcome_name(user: &UserIdentity) -> String {
    if let Some(name) = user.display_name().filter(|name| !name.trim().is_empty()) {
        return name.to_string();
    }
    match user.email() {
        Some(email) => email
            .split_once('@')
            .map_or(email, |(local, _)| local)
            .to_string(),
        None => FALLBACK_NAME.to_string(),
    }
}
