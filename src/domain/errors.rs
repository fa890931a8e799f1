//! Domain validation errors.

use std::fmt;

/// A single rule broken by a contact field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is empty or whitespace-only.
    EmptyField(&'static str),

    /// A field exceeds its maximum length.
    TooLong { field: &'static str, max: usize },

    /// The ULID is shorter than the minimum length.
    UlidTooShort(String),

    /// The ULID contains something other than digits and uppercase letters.
    UlidInvalidCharacters(String),

    /// The email address does not match the address grammar.
    InvalidEmail(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyField(field) => write!(f, "{} cannot be empty", field),
            Self::TooLong { field, max } => {
                write!(f, "{} must be at most {} characters", field, max)
            }
            Self::UlidTooShort(ulid) => write!(f, "ULID too short: {}", ulid),
            Self::UlidInvalidCharacters(ulid) => {
                write!(f, "ULID must contain only digits and uppercase letters: {}", ulid)
            }
            Self::InvalidEmail(email) => write!(f, "Invalid email address: {}", email),
        }
    }
}

impl std::error::Error for ValidationError {}
