//! Boundary validation, mirroring the strictness the SPA enforces before a
//! request ever reaches a service. Services apply their own looser rules.

use lazy_static::lazy_static;
use regex::Regex;
use time::{Date, OffsetDateTime};

use crate::error::ApiError;

lazy_static! {
    static ref EMAIL_RE: Regex = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
    static ref URL_RE: Regex =
        Regex::new(r"^(https?://)?([\da-z.-]+)\.([a-z.]{2,6})([/\w .-]*)*/?$").unwrap();
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

pub fn is_valid_url(url: &str) -> bool {
    URL_RE.is_match(url)
}

pub fn bio_error(bio: &str) -> Option<String> {
    (bio.chars().count() > 500).then(|| "Bio must be less than 500 characters".to_string())
}

pub fn avatar_error(avatar: &str) -> Option<String> {
    (!is_valid_url(avatar)).then(|| "Please provide a valid avatar URL".to_string())
}

pub fn date_of_birth_error(dob: Date) -> Option<String> {
    let today = OffsetDateTime::now_utc().date();
    if dob > today {
        Some("Date of birth cannot be in the future".to_string())
    } else if dob.year() < 1900 {
        Some("Date of birth seems invalid".to_string())
    } else {
        None
    }
}

// The regex crate has no lookahead, so the strength rule is a character scan.
fn password_strength_errors(password: &str) -> Vec<String> {
    let mut errors = Vec::new();
    if password.chars().count() < 8 {
        errors.push("Password must be at least 8 characters long".to_string());
    }
    let has_lower = password.chars().any(|c| c.is_ascii_lowercase());
    let has_upper = password.chars().any(|c| c.is_ascii_uppercase());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    let has_symbol = password.chars().any(|c| "!@#$%^&*".contains(c));
    if !(has_lower && has_upper && has_digit && has_symbol) {
        errors.push(
            "Password must contain at least one uppercase letter, one lowercase letter, \
             one number, and one special character"
                .to_string(),
        );
    }
    errors
}

/// Signup rules stricter than the service layer's: bounded name and a
/// mixed-character password.
pub fn validate_signup(name: &str, email: &str, password: &str) -> Result<(), ApiError> {
    let mut errors = Vec::new();
    let name_len = name.trim().chars().count();
    if name_len < 2 {
        errors.push("Name must be at least 2 characters long".to_string());
    }
    if name_len > 50 {
        errors.push("Name must be less than 50 characters long".to_string());
    }
    if !is_valid_email(email.trim()) {
        errors.push("Please provide a valid email".to_string());
    }
    errors.extend(password_strength_errors(password));
    if errors.is_empty() {
        Ok(())
    } else {
        Err(ApiError::Validation(errors))
    }
}

pub fn validate_login(email: &str, password: &str) -> Result<(), ApiError> {
    let mut errors = Vec::new();
    if !is_valid_email(email.trim()) {
        errors.push("Please provide a valid email".to_string());
    }
    if password.is_empty() {
        errors.push("Password is required".to_string());
    }
    if errors.is_empty() {
        Ok(())
    } else {
        Err(ApiError::Validation(errors))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    #[test]
    fn email_regex_accepts_and_rejects() {
        assert!(is_valid_email("a@x.com"));
        assert!(is_valid_email("first.last@sub.domain.org"));
        assert!(!is_valid_email("no-at-sign"));
        assert!(!is_valid_email("two@@x.com"));
        assert!(!is_valid_email("spaces in@x.com"));
        assert!(!is_valid_email("missing@tld"));
    }

    #[test]
    fn avatar_url_shapes() {
        assert!(avatar_error("https://cdn.example.com/me.png").is_none());
        assert!(avatar_error("example.com/avatar.jpg").is_none());
        assert!(avatar_error("not a url").is_some());
    }

    #[test]
    fn bio_length_boundary() {
        assert!(bio_error(&"x".repeat(500)).is_none());
        assert!(bio_error(&"x".repeat(501)).is_some());
    }

    #[test]
    fn date_of_birth_bounds() {
        assert!(date_of_birth_error(date!(1990 - 05 - 20)).is_none());
        assert_eq!(
            date_of_birth_error(date!(1899 - 12 - 31)).as_deref(),
            Some("Date of birth seems invalid")
        );
        let future = OffsetDateTime::now_utc().date().next_day().unwrap();
        assert_eq!(
            date_of_birth_error(future).as_deref(),
            Some("Date of birth cannot be in the future")
        );
    }

    #[test]
    fn password_strength_matrix() {
        assert!(password_strength_errors("Str0ng!pass").is_empty());
        // too short
        assert!(!password_strength_errors("S0r!t").is_empty());
        // missing digit
        assert!(!password_strength_errors("Strong!pass").is_empty());
        // missing symbol
        assert!(!password_strength_errors("Str0ngpass").is_empty());
        // missing uppercase
        assert!(!password_strength_errors("str0ng!pass").is_empty());
    }

    #[test]
    fn signup_aggregates_all_failures() {
        let err = validate_signup("x", "bad-email", "weak");
        match err {
            Err(ApiError::Validation(errors)) => assert!(errors.len() >= 3),
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn login_requires_password() {
        assert!(validate_login("a@x.com", "anything").is_ok());
        assert!(validate_login("a@x.com", "").is_err());
    }
}
