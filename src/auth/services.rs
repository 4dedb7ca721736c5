use lazy_static::lazy_static;
use regex::Regex;

use crate::error::ApiError;

pub(crate) fn is_valid_email(email: &str) -> bool {
    lazy_static! {
        static ref EMAIL_RE: Regex = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
    }
    EMAIL_RE.is_match(email)
}

/// Validates and normalizes signup input: username trimmed, email trimmed and
/// lowercased. Duplicate checks happen against the database afterwards.
pub(crate) fn normalize_signup(
    username: &str,
    email: &str,
    password: &str,
) -> Result<(String, String), ApiError> {
    let username = username.trim().to_string();
    let email = email.trim().to_lowercase();

    if username.is_empty() {
        return Err(ApiError::Validation("username must not be empty".into()));
    }
    if !is_valid_email(&email) {
        return Err(ApiError::Validation("invalid email".into()));
    }
    if password.chars().count() < 8 {
        return Err(ApiError::Validation(
            "password must be at least 8 characters".into(),
        ));
    }

    Ok((username, email))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_addresses() {
        assert!(is_valid_email("ada@example.com"));
        assert!(is_valid_email("ada+tag@sub.example.org"));
    }

    #[test]
    fn rejects_malformed_addresses() {
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("a b@example.com"));
        assert!(!is_valid_email("ada@example"));
    }

    #[test]
    fn normalize_trims_and_lowercases() {
        let (username, email) =
            normalize_signup("  Ada ", " Ada@Example.COM ", "password123").expect("valid input");
        assert_eq!(username, "Ada");
        assert_eq!(email, "ada@example.com");
    }

    #[test]
    fn normalize_rejects_empty_username_and_short_password() {
        assert!(normalize_signup("   ", "ada@example.com", "password123").is_err());
        assert!(normalize_signup("ada", "ada@example.com", "short").is_err());
    }

    #[test]
    fn password_minimum_counts_characters_not_bytes() {
        // 5 Cyrillic characters are 10 bytes; still below the 8-character minimum.
        assert!(normalize_signup("ada", "ada@example.com", "ппппп").is_err());
        assert!(normalize_signup("ada", "ada@example.com", "парольок").is_ok());
    }
}
