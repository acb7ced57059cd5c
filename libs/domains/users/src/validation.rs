//! Pure validation for user payloads.
//!
//! Every function here is side-effect free and callable without a store,
//! so the rules stay unit-testable in isolation.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::{CreateUserRequest, NewUser, UserPatch};

// local@domain.tld, no whitespace or extra '@'; no further TLD checks.
static EMAIL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

const NAME_MESSAGE: &str = "Name must be between 2 and 100 characters";
const EMAIL_MESSAGE: &str = "Invalid email format";
const AGE_MESSAGE: &str = "Age must be between 0 and 150";

/// True iff `email` looks like `local@domain.tld`.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

/// True iff the trimmed name is 2 to 100 characters long.
pub fn is_valid_name(name: &str) -> bool {
    let len = name.trim().chars().count();
    (2..=100).contains(&len)
}

/// True iff `age` is between 0 and 150, boundaries included.
pub fn is_valid_age(age: i64) -> bool {
    (0..=150).contains(&age)
}

/// Validate a creation payload.
///
/// Checks name, email, age in that fixed order; a missing field fails its
/// check. Returns the assembled store input on success, the collected
/// messages otherwise.
pub fn validate_for_create(input: &CreateUserRequest) -> Result<NewUser, Vec<String>> {
    let mut errors = Vec::new();

    if !input.name.as_deref().is_some_and(is_valid_name) {
        errors.push(NAME_MESSAGE.to_string());
    }
    if !input.email.as_deref().is_some_and(is_valid_email) {
        errors.push(EMAIL_MESSAGE.to_string());
    }
    if !input.age.is_some_and(is_valid_age) {
        errors.push(AGE_MESSAGE.to_string());
    }

    if let (Some(name), Some(email), Some(age)) = (&input.name, &input.email, input.age) {
        if errors.is_empty() {
            return Ok(NewUser {
                name: name.clone(),
                email: email.clone(),
                age,
            });
        }
    }

    Err(errors)
}

/// Validate a partial update.
///
/// Only fields present in the patch are checked; absent fields are skipped.
pub fn validate_for_update(patch: &UserPatch) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    if patch.name.as_deref().is_some_and(|name| !is_valid_name(name)) {
        errors.push(NAME_MESSAGE.to_string());
    }
    if patch
        .email
        .as_deref()
        .is_some_and(|email| !is_valid_email(email))
    {
        errors.push(EMAIL_MESSAGE.to_string());
    }
    if patch.age.is_some_and(|age| !is_valid_age(age)) {
        errors.push(AGE_MESSAGE.to_string());
    }

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}
