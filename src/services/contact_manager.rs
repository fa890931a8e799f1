//! Contact manager.
//!
//! Validates input, calls the repository at most once per operation, and
//! reports absence as an explicit `NotFound` failure.

use crate::config::Config;
use crate::domain::validate_contact;
use crate::error::{ContactError, ContactResult, RepositoryResult};
use crate::models::Contact;
use crate::repositories::{open_repository, ContactRepository};
use async_trait::async_trait;
use std::sync::Arc;

const EMPTY_ULID: &str = "ULID cannot be empty.";
const EMPTY_FIRST_NAME: &str = "First name cannot be empty.";
const EMPTY_LAST_NAME: &str = "Last name cannot be empty.";
const NO_CONTACTS: &str = "No contact found.";
const NO_FIRST_NAME_MATCH: &str = "No contact found with the given first name.";
const NO_LAST_NAME_MATCH: &str = "No contact found with the given last name.";

/// Contact manager trait for business operations.
#[async_trait]
pub trait ContactManager: Send + Sync {
    /// Validate and persist a new contact, returning it with its storage id.
    ///
    /// No duplicate-ULID pre-check happens here; the store's own uniqueness
    /// constraint surfaces as `ContactError::Storage`.
    async fn add(&self, contact: Contact) -> ContactResult<Contact>;

    /// Delete the contact with this ULID. A ULID that matches nothing is not an error.
    async fn delete(&self, ulid: &str) -> ContactResult<()>;

    /// All contacts; fails with `NotFound` when there are none.
    async fn get_all(&self) -> ContactResult<Vec<Contact>>;

    /// The contact with this ULID; fails with `NotFound` when absent.
    async fn get_specific(&self, ulid: &str) -> ContactResult<Contact>;

    /// Contacts with exactly this first name; fails with `NotFound` when none match.
    async fn search_by_first_name(&self, first_name: &str) -> ContactResult<Vec<Contact>>;

    /// Contacts with exactly this last name; fails with `NotFound` when none match.
    async fn search_by_last_name(&self, last_name: &str) -> ContactResult<Vec<Contact>>;

    /// Re-validate the full record and replace the stored one with the same ULID.
    async fn update(&self, contact: Contact) -> ContactResult<()>;
}

/// Default implementation of ContactManager.
pub struct ContactManagerImpl {
    repository: Arc<dyn ContactRepository>,
}

/// Validation helper functions.
impl ContactManagerImpl {
    /// Reject empty or whitespace-only keys and search terms.
    fn require_non_blank(value: &str, message: &str) -> ContactResult<()> {
        if value.trim().is_empty() {
            tracing::warn!(reason = %message, "Rejected blank argument");
            return Err(ContactError::Argument(message.to_string()));
        }
        Ok(())
    }

    /// Apply the all-or-nothing contact rules.
    fn require_valid(contact: &Contact) -> ContactResult<()> {
        validate_contact(contact).map_err(|violations| {
            tracing::warn!(
                ulid = %contact.ulid,
                violations = ?violations,
                "Rejected invalid contact"
            );
            ContactError::InvalidData { violations }
        })
    }

    /// Turn an empty result set into `NotFound`.
    fn require_any(contacts: Vec<Contact>, message: &str) -> ContactResult<Vec<Contact>> {
        if contacts.is_empty() {
            tracing::debug!(reason = %message, "Empty result");
            return Err(ContactError::NotFound(message.to_string()));
        }
        Ok(contacts)
    }

    /// Log a storage failure and pass it through unchanged.
    fn storage<T>(operation: &str, result: RepositoryResult<T>) -> ContactResult<T> {
        result.map_err(|e| {
            tracing::error!(operation = %operation, error = %e, "Contact storage failed");
            ContactError::Storage(e)
        })
    }
}

impl ContactManagerImpl {
    /// Create a new contact manager over the given repository.
    pub fn new(repository: Arc<dyn ContactRepository>) -> Self {
        Self { repository }
    }

    /// Open the store selected by `config` and wrap it in a manager.
    pub fn from_config(config: &Config) -> ContactResult<Self> {
        Ok(Self::new(open_repository(config)?))
    }
}

#[async_trait]
impl ContactManager for ContactManagerImpl {
    async fn add(&self, contact: Contact) -> ContactResult<Contact> {
        tracing::debug!(ulid = %contact.ulid, "add");
        Self::require_valid(&contact)?;

        let stored = Self::storage("add", self.repository.add(&contact).await)?;
        tracing::info!(id = ?stored.id, ulid = %stored.ulid, "Contact added");
        Ok(stored)
    }

    async fn delete(&self, ulid: &str) -> ContactResult<()> {
        tracing::debug!(ulid = %ulid, "delete");
        Self::require_non_blank(ulid, EMPTY_ULID)?;

        let removed = Self::storage("delete", self.repository.delete_by_ulid(ulid).await)?;
        match removed {
            Some(contact) => tracing::info!(id = ?contact.id, ulid = %ulid, "Contact deleted"),
            None => tracing::debug!(ulid = %ulid, "Delete matched no contact"),
        }
        Ok(())
    }

    async fn get_all(&self) -> ContactResult<Vec<Contact>> {
        tracing::debug!("get_all");
        let contacts = Self::storage("get_all", self.repository.get_all().await)?;
        Self::require_any(contacts, NO_CONTACTS)
    }

    async fn get_specific(&self, ulid: &str) -> ContactResult<Contact> {
        tracing::debug!(ulid = %ulid, "get_specific");
        Self::require_non_blank(ulid, EMPTY_ULID)?;

        Self::storage("get_specific", self.repository.get_by_ulid(ulid).await)?.ok_or_else(|| {
            tracing::debug!(ulid = %ulid, "No contact with ULID");
            ContactError::NotFound(format!("No contact found with ULID: {}", ulid))
        })
    }

    async fn search_by_first_name(&self, first_name: &str) -> ContactResult<Vec<Contact>> {
        tracing::debug!(first_name = %first_name, "search_by_first_name");
        Self::require_non_blank(first_name, EMPTY_FIRST_NAME)?;

        let contacts = Self::storage(
            "search_by_first_name",
            self.repository.find_by_first_name(first_name).await,
        )?;
        Self::require_any(contacts, NO_FIRST_NAME_MATCH)
    }

    async fn search_by_last_name(&self, last_name: &str) -> ContactResult<Vec<Contact>> {
        tracing::debug!(last_name = %last_name, "search_by_last_name");
        Self::require_non_blank(last_name, EMPTY_LAST_NAME)?;

        let contacts = Self::storage(
            "search_by_last_name",
            self.repository.find_by_last_name(last_name).await,
        )?;
        Self::require_any(contacts, NO_LAST_NAME_MATCH)
    }

    async fn update(&self, contact: Contact) -> ContactResult<()> {
        tracing::debug!(id = ?contact.id, ulid = %contact.ulid, "update");
        Self::require_valid(&contact)?;

        let replaced = Self::storage("update", self.repository.update(&contact).await)?;
        if !replaced {
            tracing::debug!(id = ?contact.id, ulid = %contact.ulid, "Update matched no contact");
        }
        Ok(())
    }
}
