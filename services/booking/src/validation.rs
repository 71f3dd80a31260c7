//! Stateless business-rule validators
//!
//! Credential rules (email, password, date of birth) and the pure vacation
//! rules (date range, price bounds). Each validator is a pure function that
//! surfaces the first failing rule; parsed values are returned so callers
//! never parse twice.

use chrono::{Datelike, NaiveDate, Utc};
use regex::Regex;
use std::sync::OnceLock;

use crate::error::{BookingError, BookingResult};
use crate::models::NewUser;

/// Special characters accepted by the password policy
const SPECIAL_CHARACTERS: &str = "!@#$%^&*()_+-=\\|?><~";

/// Minimum age required at registration
const MINIMUM_AGE: i32 = 18;

/// Inclusive vacation price bounds
const PRICE_MIN: f64 = 1000.0;
const PRICE_MAX: f64 = 10000.0;

/// Validate email format
///
/// Requires exactly one `@`, a non-empty local part restricted to
/// `[A-Za-z0-9._%+-]`, and a domain whose dot-separated labels are all
/// non-empty and alphanumeric, with a final label of at least two characters.
pub fn validate_email(email: &str) -> BookingResult<()> {
    let Some((local_part, domain)) = email.split_once('@') else {
        return Err(BookingError::InvalidFormat(
            "Invalid email format: missing or multiple '@' symbols".to_string(),
        ));
    };
    if domain.contains('@') {
        return Err(BookingError::InvalidFormat(
            "Invalid email format: missing or multiple '@' symbols".to_string(),
        ));
    }

    static LOCAL_PART_REGEX: OnceLock<Regex> = OnceLock::new();
    let regex = LOCAL_PART_REGEX.get_or_init(|| {
        Regex::new(r"^[A-Za-z0-9._%+-]+$").expect("Failed to compile local part regex")
    });

    if !regex.is_match(local_part) {
        return Err(BookingError::InvalidFormat(
            "Invalid email format: invalid characters in the local part".to_string(),
        ));
    }

    if !domain.contains('.') || domain.starts_with('.') || domain.ends_with('.') {
        return Err(BookingError::InvalidFormat(
            "Invalid email format: invalid domain structure".to_string(),
        ));
    }

    let labels: Vec<&str> = domain.split('.').collect();
    for label in &labels {
        if label.is_empty() || !label.chars().all(char::is_alphanumeric) {
            return Err(BookingError::InvalidFormat(
                "Invalid email format: invalid characters in the domain".to_string(),
            ));
        }
    }
    if labels.last().is_none_or(|label| label.chars().count() < 2) {
        return Err(BookingError::InvalidFormat(
            "Invalid email format: domain suffix must be at least 2 characters long".to_string(),
        ));
    }

    Ok(())
}

/// Validate password strength
///
/// Checks run in a fixed order and the first failure is surfaced:
/// length, uppercase, lowercase, digit, special character.
pub fn validate_password(password: &str) -> BookingResult<()> {
    if password.chars().count() < 6 {
        return Err(BookingError::InvalidFormat(
            "Password must be at least 6 characters long".to_string(),
        ));
    }

    if !password.chars().any(char::is_uppercase) {
        return Err(BookingError::InvalidFormat(
            "Password must contain at least one uppercase letter".to_string(),
        ));
    }

    if !password.chars().any(char::is_lowercase) {
        return Err(BookingError::InvalidFormat(
            "Password must contain at least one lowercase letter".to_string(),
        ));
    }

    if !password.chars().any(|c| c.is_ascii_digit()) {
        return Err(BookingError::InvalidFormat(
            "Password must contain at least one number".to_string(),
        ));
    }

    if !password.chars().any(|c| SPECIAL_CHARACTERS.contains(c)) {
        return Err(BookingError::InvalidFormat(format!(
            "Password must contain at least one special character ({})",
            SPECIAL_CHARACTERS
        )));
    }

    Ok(())
}

/// Validate date of birth
///
/// The date must parse as `YYYY-MM-DD` (a format error otherwise) and the
/// computed whole-year age must be at least 18 (an out-of-range error
/// otherwise). Returns the parsed date.
pub fn validate_date_of_birth(date_of_birth: &str) -> BookingResult<NaiveDate> {
    let dob = parse_date(date_of_birth)?;

    let today = Utc::now().date_naive();
    if whole_years_between(dob, today) < MINIMUM_AGE {
        return Err(BookingError::OutOfRange(
            "User must be at least 18 years old".to_string(),
        ));
    }

    Ok(dob)
}

/// Validate a full registration payload
///
/// Required fields are checked in order (firstname, lastname, email,
/// password, date_of_birth) with the first missing field named, then the
/// email, password, and date-of-birth validators run in that order,
/// short-circuiting on the first failure. Returns the parsed date of birth.
pub fn validate_user_data(user_data: &NewUser) -> BookingResult<NaiveDate> {
    let required: [(&'static str, &str); 5] = [
        ("firstname", &user_data.firstname),
        ("lastname", &user_data.lastname),
        ("email", &user_data.email),
        ("password", &user_data.password),
        ("date_of_birth", &user_data.date_of_birth),
    ];
    for (name, value) in required {
        if value.is_empty() {
            return Err(BookingError::MissingField(name));
        }
    }

    validate_email(&user_data.email)?;
    validate_password(&user_data.password)?;
    validate_date_of_birth(&user_data.date_of_birth)
}

/// Validate a vacation date range
///
/// Both dates must parse as `YYYY-MM-DD`; the start date must be strictly in
/// the future and the end date strictly after the start date. Returns the
/// parsed pair.
pub fn validate_dates(start_date: &str, end_date: &str) -> BookingResult<(NaiveDate, NaiveDate)> {
    let start = parse_date(start_date)?;
    let end = parse_date(end_date)?;

    let today = Utc::now().date_naive();
    if start <= today {
        return Err(BookingError::OutOfRange(
            "Start date must be in the future".to_string(),
        ));
    }
    if end <= start {
        return Err(BookingError::OutOfRange(
            "End date must be after start date".to_string(),
        ));
    }

    Ok((start, end))
}

/// Validate a vacation price
///
/// The price must parse as a numeric value and lie in the inclusive range
/// 1000 to 10000. Returns the parsed value.
pub fn validate_price(price: &str) -> BookingResult<f64> {
    let value: f64 = price
        .trim()
        .parse()
        .map_err(|_| BookingError::InvalidFormat("Invalid price format".to_string()))?;

    if !(PRICE_MIN..=PRICE_MAX).contains(&value) {
        return Err(BookingError::OutOfRange(
            "Price must be between $1,000 and $10,000".to_string(),
        ));
    }

    Ok(value)
}

fn parse_date(value: &str) -> BookingResult<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| BookingError::InvalidFormat("Invalid date format. Use YYYY-MM-DD".to_string()))
}

/// Whole-year difference between two dates, accounting for month and day
fn whole_years_between(from: NaiveDate, to: NaiveDate) -> i32 {
    let mut years = to.year() - from.year();
    if (to.month(), to.day()) < (from.month(), from.day()) {
        years -= 1;
    }
    years
}
