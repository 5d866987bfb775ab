//! Field rules for auth accounts.

use crate::error::DomainError;

pub const NAME_LEN: (usize, usize) = (2, 100);
pub const MIN_PASSWORD_LEN: usize = 6;

/// Trimmed display name, 2–100 characters.
pub fn validate_account_name(name: &str) -> Result<&str, DomainError> {
    let trimmed = name.trim();
    let len = trimmed.chars().count();
    if (NAME_LEN.0..=NAME_LEN.1).contains(&len) {
        Ok(trimmed)
    } else {
        Err(DomainError::InvalidAccountName)
    }
}

/// Structural check only: one `@`, non-empty local part, dotted domain.
pub fn validate_email(email: &str) -> Result<&str, DomainError> {
    let email = email.trim();
    let Some((local, domain)) = email.split_once('@') else {
        return Err(DomainError::InvalidEmail);
    };
    let domain_ok = !domain.contains('@')
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !domain.contains("..");
    if local.is_empty() || !domain_ok || email.chars().any(char::is_whitespace) {
        return Err(DomainError::InvalidEmail);
    }
    Ok(email)
}

pub fn validate_password(password: &str) -> Result<&str, DomainError> {
    if password.chars().count() >= MIN_PASSWORD_LEN {
        Ok(password)
    } else {
        Err(DomainError::PasswordTooShort)
    }
}

/// Absolute http(s) URL for a profile picture.
pub fn validate_picture_url(url: &str) -> Result<&str, DomainError> {
    let url = url.trim();
    let rest = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
        .ok_or(DomainError::InvalidPictureUrl)?;
    if rest.is_empty() || rest.starts_with('/') || url.chars().any(char::is_whitespace) {
        return Err(DomainError::InvalidPictureUrl);
    }
    Ok(url)
}
