//! Common validation rules shared across request payloads.

use std::borrow::Cow;

use validator::ValidationError;

pub const USERNAME_MIN_CHARS: usize = 3;
pub const PASSWORD_MIN_CHARS: usize = 8;
pub const PASSWORD_MAX_CHARS: usize = 12;

fn rule_error(code: &'static str, message: &'static str) -> ValidationError {
    ValidationError::new(code).with_message(Cow::Borrowed(message))
}

/// Validates a login username.
///
/// Requirements:
/// - Present
/// - At least 3 characters
pub fn validate_username(username: &str) -> Result<(), ValidationError> {
    if username.is_empty() {
        return Err(rule_error("username_required", "Username is required!"));
    }
    if username.chars().count() < USERNAME_MIN_CHARS {
        return Err(rule_error(
            "username_too_short",
            "Username must be at least 3 characters",
        ));
    }
    Ok(())
}

/// Validates a login password.
///
/// Requirements:
/// - Present
/// - Between 8 and 12 characters
pub fn validate_login_password(password: &str) -> Result<(), ValidationError> {
    let length = password.chars().count();
    if length == 0 {
        return Err(rule_error("password_required", "Password is required!"));
    }
    if length < PASSWORD_MIN_CHARS {
        return Err(rule_error(
            "password_too_short",
            "Password must be at least 8 characters",
        ));
    }
    if length > PASSWORD_MAX_CHARS {
        return Err(rule_error(
            "password_too_long",
            "Password cannot be longer than 12 characters",
        ));
    }
    Ok(())
}
