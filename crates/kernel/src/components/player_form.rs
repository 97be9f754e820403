//! Player form: field order, prompts, and validation rules.
//!
//! Each answer is validated on its own; an invalid answer re-asks only that
//! field. Optional fields accept a blank line.

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use crate::models::CreatePlayer;

/// Maximum length of every text column.
pub const MAX_TEXT_LEN: usize = 50;

/// Accepted age range, inclusive.
pub const AGE_RANGE: (i64, i64) = (1, 150);

/// Loose address check: something@something.tld, no whitespace.
///
/// # Panics
///
/// Panics if the hard-coded regex literal is invalid (impossible in practice).
#[allow(clippy::expect_used)]
static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("valid regex literal"));

/// Domain validation failures, shown to the user before re-asking.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field} is required")]
    Required { field: &'static str },

    #[error("{field} must be at most {max} characters")]
    TooLong { field: &'static str, max: usize },

    #[error("'{value}' is not a valid email address")]
    InvalidEmail { value: String },

    #[error("age must be a whole number between {min} and {max}")]
    InvalidAge { min: i64, max: i64 },

    #[error("nickname '{0}' is already taken")]
    NicknameTaken(String),
}

/// Fields of the player form, in prompt order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerField {
    FirstName,
    LastName,
    Email,
    Nickname,
    Age,
}

impl PlayerField {
    pub const ALL: [PlayerField; 5] = [
        PlayerField::FirstName,
        PlayerField::LastName,
        PlayerField::Email,
        PlayerField::Nickname,
        PlayerField::Age,
    ];

    /// Human-readable field name.
    pub fn label(self) -> &'static str {
        match self {
            PlayerField::FirstName => "First name",
            PlayerField::LastName => "Last name",
            PlayerField::Email => "Email",
            PlayerField::Nickname => "Nickname",
            PlayerField::Age => "Age",
        }
    }

    pub fn required(self) -> bool {
        matches!(self, PlayerField::Nickname)
    }

    /// Prompt text; required fields are marked with `*`.
    pub fn prompt(self) -> String {
        if self.required() {
            format!("* {}: ", self.label())
        } else {
            format!("{}: ", self.label())
        }
    }
}

/// Validate `raw` for `field` and store it in `input`.
pub fn apply(input: &mut CreatePlayer, field: PlayerField, raw: &str) -> Result<(), ValidationError> {
    let value = raw.trim();

    if value.is_empty() {
        if field.required() {
            return Err(ValidationError::Required {
                field: field.label(),
            });
        }
        return Ok(());
    }

    if field != PlayerField::Age && value.chars().count() > MAX_TEXT_LEN {
        return Err(ValidationError::TooLong {
            field: field.label(),
            max: MAX_TEXT_LEN,
        });
    }

    match field {
        PlayerField::FirstName => input.first_name = Some(value.to_string()),
        PlayerField::LastName => input.last_name = Some(value.to_string()),
        PlayerField::Nickname => input.nickname = value.to_string(),
        PlayerField::Email => {
            if !EMAIL.is_match(value) {
                return Err(ValidationError::InvalidEmail {
                    value: value.to_string(),
                });
            }
            input.email = Some(value.to_string());
        }
        PlayerField::Age => {
            let (min, max) = AGE_RANGE;
            match value.parse::<i64>() {
                Ok(age) if (min..=max).contains(&age) => input.age = Some(age),
                _ => return Err(ValidationError::InvalidAge { min, max }),
            }
        }
    }

    Ok(())
}
