//! Shared contact fixtures for integration tests.

#![allow(dead_code)]

use contacts_manager::Contact;

/// The valid contact used by the add scenarios.
pub fn test_contact() -> Contact {
    Contact {
        id: None,
        ulid: "1ABC23456HH".to_string(),
        first_name: "TestFirstName".to_string(),
        last_name: "TestLastName".to_string(),
        address: "Anything for testing address".to_string(),
        email: "test@gmail.com".to_string(),
        gender: "Male".to_string(),
        phone: "0889933779".to_string(),
    }
}

/// Peter Petrov, ULID 1234ABCD12.
pub fn peter() -> Contact {
    Contact {
        id: None,
        ulid: "1234ABCD12".to_string(),
        first_name: "Peter".to_string(),
        last_name: "Petrov".to_string(),
        address: "Crimson Str.".to_string(),
        email: "test@email.com".to_string(),
        gender: "Male".to_string(),
        phone: "0999123123".to_string(),
    }
}

/// Vladko Vladkov, ULID 9999UIOP12.
pub fn vladko() -> Contact {
    Contact {
        id: None,
        ulid: "9999UIOP12".to_string(),
        first_name: "Vladko".to_string(),
        last_name: "Vladkov".to_string(),
        address: "Sky Str.".to_string(),
        email: "vladko@email.com".to_string(),
        gender: "Male".to_string(),
        phone: "0888123123".to_string(),
    }
}

/// A second contact sharing Peter's first name.
pub fn another_peter() -> Contact {
    Contact {
        first_name: "Peter".to_string(),
        ..vladko()
    }
}

/// A second contact sharing Peter's last name.
pub fn another_petrov() -> Contact {
    Contact {
        last_name: "Petrov".to_string(),
        ..vladko()
    }
}

/// The contact with its storage key cleared, for comparing against a fixture.
pub fn without_id(contact: Contact) -> Contact {
    Contact { id: None, ..contact }
}
