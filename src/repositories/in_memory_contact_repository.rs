use crate::error::{RepositoryError, RepositoryResult};
use crate::models::Contact;
use crate::repositories::traits::ContactRepository;
use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

#[derive(Debug)]
struct Rows {
    next_id: i64,
    by_id: BTreeMap<i64, Contact>,
}

/// Contact repository kept entirely in process memory.
///
/// Mirrors the SQLite store's behavior, including the UNIQUE constraint on
/// `ulid`, so that it can stand in for it in tests and ephemeral setups.
#[derive(Debug)]
pub struct InMemoryContactRepository {
    rows: RwLock<Rows>,
}

impl InMemoryContactRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self {
            rows: RwLock::new(Rows {
                next_id: 1,
                by_id: BTreeMap::new(),
            }),
        }
    }

    fn filter_by<F>(rows: &Rows, predicate: F) -> Vec<Contact>
    where
        F: Fn(&Contact) -> bool,
    {
        rows.by_id
            .values()
            .filter(|contact| predicate(contact))
            .cloned()
            .collect()
    }
}

impl Default for InMemoryContactRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ContactRepository for InMemoryContactRepository {
    async fn add(&self, contact: &Contact) -> RepositoryResult<Contact> {
        let mut rows = self.rows.write().await;

        if rows.by_id.values().any(|c| c.ulid == contact.ulid) {
            return Err(RepositoryError::DuplicateUlid(contact.ulid.clone()));
        }

        let id = rows.next_id;
        rows.next_id += 1;

        let stored = contact.clone().with_id(id);
        rows.by_id.insert(id, stored.clone());
        tracing::debug!(id = id, ulid = %stored.ulid, "Inserted contact in memory");
        Ok(stored)
    }

    async fn delete_by_ulid(&self, ulid: &str) -> RepositoryResult<Option<Contact>> {
        let mut rows = self.rows.write().await;

        let id = rows
            .by_id
            .iter()
            .find(|(_, c)| c.ulid == ulid)
            .map(|(id, _)| *id);

        Ok(id.and_then(|id| rows.by_id.remove(&id)))
    }

    async fn get_all(&self) -> RepositoryResult<Vec<Contact>> {
        let rows = self.rows.read().await;
        Ok(rows.by_id.values().cloned().collect())
    }

    async fn get_by_ulid(&self, ulid: &str) -> RepositoryResult<Option<Contact>> {
        let rows = self.rows.read().await;
        Ok(rows.by_id.values().find(|c| c.ulid == ulid).cloned())
    }

    async fn find_by_first_name(&self, first_name: &str) -> RepositoryResult<Vec<Contact>> {
        let rows = self.rows.read().await;
        Ok(Self::filter_by(&rows, |c| c.first_name == first_name))
    }

    async fn find_by_last_name(&self, last_name: &str) -> RepositoryResult<Vec<Contact>> {
        let rows = self.rows.read().await;
        Ok(Self::filter_by(&rows, |c| c.last_name == last_name))
    }

    async fn update(&self, contact: &Contact) -> RepositoryResult<bool> {
        let mut rows = self.rows.write().await;

        let Some(stored) = rows.by_id.values_mut().find(|c| c.ulid == contact.ulid) else {
            tracing::debug!(id = ?contact.id, ulid = %contact.ulid, "No row for update");
            return Ok(false);
        };

        stored.first_name = contact.first_name.clone();
        stored.last_name = contact.last_name.clone();
        stored.address = contact.address.clone();
        stored.email = contact.email.clone();
        stored.gender = contact.gender.clone();
        stored.phone = contact.phone.clone();
        Ok(true)
    }
}
