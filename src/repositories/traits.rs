use crate::error::RepositoryResult;
use crate::models::Contact;
use async_trait::async_trait;

/// Repository for contact persistence.
///
/// A thin data-access boundary: implementations store and fetch rows but never
/// validate them and never turn absence into an error. Absence is reported as
/// `None`, an empty `Vec`, or `false`, and the caller decides what it means.
#[async_trait]
pub trait ContactRepository: Send + Sync {
    /// Insert a new contact and return it with its storage-assigned `id`.
    ///
    /// Any `id` already set on `contact` is ignored.
    async fn add(&self, contact: &Contact) -> RepositoryResult<Contact>;

    /// Remove the contact with this ULID, returning what was removed.
    async fn delete_by_ulid(&self, ulid: &str) -> RepositoryResult<Option<Contact>>;

    /// Every stored contact, in ascending `id` order.
    async fn get_all(&self) -> RepositoryResult<Vec<Contact>>;

    /// The contact with this ULID, if any.
    async fn get_by_ulid(&self, ulid: &str) -> RepositoryResult<Option<Contact>>;

    /// Contacts whose first name equals `first_name` exactly (case-sensitive).
    async fn find_by_first_name(&self, first_name: &str) -> RepositoryResult<Vec<Contact>>;

    /// Contacts whose last name equals `last_name` exactly (case-sensitive).
    async fn find_by_last_name(&self, last_name: &str) -> RepositoryResult<Vec<Contact>>;

    /// Replace the stored fields of the contact with the same ULID.
    ///
    /// Any `id` set on `contact` is ignored, as in `add`, so a stale or
    /// foreign `id` never redirects the write. Neither `id` nor `ulid` is
    /// rewritten. Returns `false` when no row matched.
    async fn update(&self, contact: &Contact) -> RepositoryResult<bool>;
}
