//! Contact validation shared by the add and update paths.
//!
//! Validation is all-or-nothing: a single broken rule rejects the whole
//! record. [`contact_violations`] lists every broken rule for diagnostics.

use super::email::EmailAddress;
use super::errors::ValidationError;
use super::ulid::ContactUlid;
use crate::models::Contact;

/// Maximum length of a first or last name, in characters.
pub const MAX_NAME_LENGTH: usize = 100;

/// Every rule the contact breaks, in field order. Empty means valid.
pub fn contact_violations(contact: &Contact) -> Vec<ValidationError> {
    let mut violations = Vec::new();

    check_name(&mut violations, "First name", &contact.first_name);
    check_name(&mut violations, "Last name", &contact.last_name);
    check_required(&mut violations, "Address", &contact.address);

    if let Err(err) = ContactUlid::new(contact.ulid.as_str()) {
        violations.push(err);
    }

    if contact.email.trim().is_empty() {
        violations.push(ValidationError::EmptyField("Email"));
    } else if let Err(err) = EmailAddress::new(contact.email.as_str()) {
        violations.push(err);
    }

    check_required(&mut violations, "Gender", &contact.gender);
    check_required(&mut violations, "Phone", &contact.phone);

    violations
}

/// Validate a contact, returning the broken rules on failure.
pub fn validate_contact(contact: &Contact) -> Result<(), Vec<ValidationError>> {
    let violations = contact_violations(contact);
    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

fn check_required(violations: &mut Vec<ValidationError>, field: &'static str, value: &str) {
    if value.trim().is_empty() {
        violations.push(ValidationError::EmptyField(field));
    }
}

fn check_name(violations: &mut Vec<ValidationError>, field: &'static str, value: &str) {
    check_required(violations, field, value);
    if value.chars().count() > MAX_NAME_LENGTH {
        violations.push(ValidationError::TooLong {
            field,
            max: MAX_NAME_LENGTH,
        });
    }
}
