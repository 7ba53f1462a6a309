//! Syntactic checks for the login and registration forms.
//!
//! Absent input is modelled as `None` and is simply invalid. Nothing here
//! panics and nothing here talks to the identity provider.
//!
//! Two flavours are exposed:
//! - `check_*` functions return which field failed first, for form messages;
//! - `is_valid_*` / `validate_*` predicates return a plain `bool`.

use thiserror::Error;

/// Minimum number of characters in a password.
pub const MIN_PASSWORD_LEN: usize = 6;

/// First form field that failed validation.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Username is required and cannot contain spaces")]
    Username,
    #[error("Enter a valid email address")]
    Email,
    #[error("Password must be at least 6 characters")]
    Password,
    #[error("Passwords do not match")]
    PasswordConfirmation,
}

pub fn check_email(email: Option<&str>) -> Result<(), ValidationError> {
    let email = non_empty(email).ok_or(ValidationError::Email)?;
    if email.contains(' ') {
        return Err(ValidationError::Email);
    }

    // Exactly one '@' with something on both sides.
    let (local, domain) = email.split_once('@').ok_or(ValidationError::Email)?;
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return Err(ValidationError::Email);
    }

    if !domain.contains('.') || domain.starts_with('.') || domain.ends_with('.') {
        return Err(ValidationError::Email);
    }
    Ok(())
}

pub fn check_password(password: Option<&str>) -> Result<(), ValidationError> {
    match non_empty(password) {
        Some(password) if password.chars().count() >= MIN_PASSWORD_LEN => Ok(()),
        _ => Err(ValidationError::Password),
    }
}

pub fn check_username(username: Option<&str>) -> Result<(), ValidationError> {
    match non_empty(username) {
        Some(username) if !username.contains(' ') => Ok(()),
        _ => Err(ValidationError::Username),
    }
}

/// The confirmation must be present and equal to the password, byte for byte.
pub fn check_password_confirmation(
    password: Option<&str>,
    confirm: Option<&str>,
) -> Result<(), ValidationError> {
    match non_empty(confirm) {
        Some(confirm) if password == Some(confirm) => Ok(()),
        _ => Err(ValidationError::PasswordConfirmation),
    }
}

/// Validates the login form: email, then password.
pub fn check_login(email: Option<&str>, password: Option<&str>) -> Result<(), ValidationError> {
    check_email(email)?;
    check_password(password)
}

/// Validates the registration form, stopping at the first bad field in the
/// order username, email, password, confirmation.
pub fn check_registration(
    username: Option<&str>,
    email: Option<&str>,
    password: Option<&str>,
    confirm: Option<&str>,
) -> Result<(), ValidationError> {
    check_username(username)?;
    check_email(email)?;
    check_password(password)?;
    check_password_confirmation(password, confirm)
}

#[must_use]
pub fn is_valid_email(email: Option<&str>) -> bool {
    check_email(email).is_ok()
}

#[must_use]
pub fn is_valid_password(password: Option<&str>) -> bool {
    check_password(password).is_ok()
}

#[must_use]
pub fn is_valid_username(username: Option<&str>) -> bool {
    check_username(username).is_ok()
}

#[must_use]
pub fn validate_password_confirmation(password: Option<&str>, confirm: Option<&str>) -> bool {
    check_password_confirmation(password, confirm).is_ok()
}

#[must_use]
pub fn validate_login_input(email: Option<&str>, password: Option<&str>) -> bool {
    check_login(email, password).is_ok()
}

#[must_use]
pub fn validate_registration_input(
    username: Option<&str>,
    email: Option<&str>,
    password: Option<&str>,
    confirm: Option<&str>,
) -> bool {
    check_registration(username, email, password, confirm).is_ok()
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn accepts_common_emails() {
        for email in [
            "user@example.com",
            "user@mail.example.com",
            "user123@example.com",
            "first.last@example.com",
            "user-name@example.com",
            "user+tag@example.com",
            "user_name@example.com",
            "USER@EXAMPLE.COM",
            "user@example.museum",
        ] {
            assert!(is_valid_email(Some(email)), "{email} should be valid");
        }
    }

    #[test]
    fn rejects_malformed_emails() {
        for email in [
            "",
            "   ",
            "userexample.com",
            "user@",
            "@example.com",
            "user @example.com",
            "user@@example.com",
            "user@exa@mple.com",
            "user@localhost",
            "user@.example.com",
            "user@example.com.",
        ] {
            assert!(!is_valid_email(Some(email)), "{email:?} should be invalid");
        }
        assert!(!is_valid_email(None));
    }

    #[test]
    fn password_length_boundaries() {
        assert!(!is_valid_password(Some("12345")));
        assert!(is_valid_password(Some("123456")));
        assert!(is_valid_password(Some("1234567")));
        assert!(is_valid_password(Some("my pass")));
        assert!(is_valid_password(Some(&"a".repeat(1000))));
        assert!(!is_valid_password(Some("")));
        assert!(!is_valid_password(None));
        // Six characters, more than six bytes.
        assert!(is_valid_password(Some("pässwö")));
        assert!(!is_valid_password(Some("ééééé")));
    }

    #[test]
    fn usernames_cannot_contain_spaces() {
        assert!(is_valid_username(Some("user")));
        assert!(is_valid_username(Some("user_name")));
        assert!(is_valid_username(Some("u")));
        assert!(!is_valid_username(Some("user name")));
        assert!(!is_valid_username(Some("")));
        assert!(!is_valid_username(None));
    }

    #[test]
    fn confirmation_must_match_exactly() {
        assert!(validate_password_confirmation(
            Some("password123"),
            Some("password123")
        ));
        assert!(!validate_password_confirmation(
            Some("password123"),
            Some("Password123")
        ));
        assert!(!validate_password_confirmation(Some("password123"), Some("")));
        assert!(!validate_password_confirmation(Some("password123"), None));
        assert!(!validate_password_confirmation(None, Some("password123")));
    }

    #[test]
    fn login_requires_both_fields() {
        assert!(!validate_login_input(Some("user@example.com"), Some("12345")));
        assert!(validate_login_input(Some("user@example.com"), Some("123456")));
        assert!(!validate_login_input(Some("notanemail"), Some("validpassword")));
        assert!(!validate_login_input(None, None));
        assert_eq!(
            check_login(Some("bad"), Some("123")),
            Err(ValidationError::Email)
        );
    }

    #[test]
    fn registration_truth_table() {
        let good = ("user", "user@example.com", "secret1", "secret1");
        for mask in 0u8..16 {
            let username = if mask & 1 == 0 { good.0 } else { "bad user" };
            let email = if mask & 2 == 0 { good.1 } else { "bad-email" };
            let password = if mask & 4 == 0 { good.2 } else { "123" };
            // A bad confirmation must still be bad when the password is short.
            let confirm = if mask & 8 == 0 { password } else { "mismatch" };

            let expected = mask == 0;
            assert_eq!(
                validate_registration_input(
                    Some(username),
                    Some(email),
                    Some(password),
                    Some(confirm)
                ),
                expected,
                "mask {mask:04b}"
            );
        }
    }

    #[test]
    fn registration_reports_first_failing_field() {
        assert_eq!(
            check_registration(Some("a b"), Some("x"), Some("1"), Some("2")),
            Err(ValidationError::Username)
        );
        assert_eq!(
            check_registration(Some("ab"), Some("x"), Some("1"), Some("2")),
            Err(ValidationError::Email)
        );
        assert_eq!(
            check_registration(Some("ab"), Some("a@b.c"), Some("1"), Some("2")),
            Err(ValidationError::Password)
        );
        assert_eq!(
            check_registration(Some("ab"), Some("a@b.c"), Some("123456"), Some("12345")),
            Err(ValidationError::PasswordConfirmation)
        );
        assert_eq!(
            check_registration(Some("ab"), Some("a@b.c"), Some("123456"), Some("123456")),
            Ok(())
        );
    }

    proptest! {
        #[test]
        fn email_without_at_is_invalid(s in "[^@]*") {
            prop_assert!(!is_valid_email(Some(&s)));
        }

        #[test]
        fn second_at_always_invalidates(
            local in "[a-z0-9._+-]{1,12}",
            domain in "[a-z0-9-]{1,12}",
            tld in "[a-z]{2,6}",
            pos in any::<prop::sample::Index>(),
        ) {
            let email = format!("{local}@{domain}.{tld}");
            prop_assert!(is_valid_email(Some(&email)));

            let at = pos.index(email.len() + 1);
            let mut broken = email.clone();
            broken.insert(at, '@');
            prop_assert!(!is_valid_email(Some(&broken)));
        }

        #[test]
        fn password_rule_is_length_only(s in any::<String>()) {
            prop_assert_eq!(is_valid_password(Some(&s)), s.chars().count() >= MIN_PASSWORD_LEN);
        }
    }
}
