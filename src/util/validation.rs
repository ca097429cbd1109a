//! Client-side form rules.
//!
//! A failing rule shows an inline message and the request is never sent.

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;

use crate::net::types::PasswordChange;

pub const FULL_NAME_MESSAGE: &str = "Names must not contain special characters.";
pub const PHONE_MESSAGE: &str = "Enter a 10-digit phone number starting with 0.";
pub const EMAIL_MESSAGE: &str = "Enter a valid email address.";

pub const MIN_PASSWORD_LEN: usize = 6;

/// Letters (any script) and spaces. Empty input passes; the field is optional.
pub fn is_valid_full_name(value: &str) -> bool {
    value.chars().all(|c| c.is_alphabetic() || c == ' ')
}

pub fn is_valid_phone(value: &str) -> bool {
    let value = value.trim();
    value.len() == 10 && value.starts_with('0') && value.bytes().all(|b| b.is_ascii_digit())
}

pub fn is_valid_email(value: &str) -> bool {
    let value = value.trim();
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && domain.split('.').all(|part| !part.is_empty())
}

/// Check the password sub-form and build the request body.
///
/// # Errors
///
/// Returns the inline message to show when a rule fails.
pub fn validate_password_change(old: &str, new: &str, confirm: &str) -> Result<PasswordChange, &'static str> {
    if old.is_empty() {
        return Err("Enter your current password.");
    }
    if new.chars().count() < MIN_PASSWORD_LEN {
        return Err("New password must be at least 6 characters.");
    }
    if new != confirm {
        return Err("Passwords do not match.");
    }
    Ok(PasswordChange { old_password: old.to_owned(), new_password: new.to_owned() })
}
