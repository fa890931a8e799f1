//! ContactUlid value object.

use super::errors::ValidationError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Minimum number of characters in a contact ULID.
pub const MIN_ULID_LENGTH: usize = 10;

/// The externally supplied, public handle of a contact.
///
/// A ULID has at least [`MIN_ULID_LENGTH`] characters, each of them an ASCII
/// digit or an uppercase ASCII letter.
///
/// # Example
///
/// ```
/// use contacts_manager::domain::ContactUlid;
///
/// let ulid = ContactUlid::new("1ABC23456HH").unwrap();
/// assert_eq!(ulid.as_str(), "1ABC23456HH");
/// assert!(ContactUlid::new("short").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContactUlid(String);

impl ContactUlid {
    /// Create a new ContactUlid, validating length and alphabet.
    ///
    /// # Errors
    ///
    /// - `ValidationError::EmptyField` if the ULID is empty or whitespace-only.
    /// - `ValidationError::UlidTooShort` below the minimum length.
    /// - `ValidationError::UlidInvalidCharacters` for anything outside `0-9A-Z`.
    pub fn new(ulid: impl Into<String>) -> Result<Self, ValidationError> {
        let ulid = ulid.into();

        if ulid.trim().is_empty() {
            return Err(ValidationError::EmptyField("ULID"));
        }

        if ulid.chars().count() < MIN_ULID_LENGTH {
            return Err(ValidationError::UlidTooShort(ulid));
        }

        if !ulid
            .chars()
            .all(|c| c.is_ascii_digit() || c.is_ascii_uppercase())
        {
            return Err(ValidationError::UlidInvalidCharacters(ulid));
        }

        Ok(Self(ulid))
    }

    /// Get the ULID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// Serde support - serialize as string
impl Serialize for ContactUlid {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for ContactUlid {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        ContactUlid::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for ContactUlid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
