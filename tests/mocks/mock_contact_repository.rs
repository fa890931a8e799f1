use async_trait::async_trait;
use contacts_manager::error::{RepositoryError, RepositoryResult};
use contacts_manager::models::Contact;
use contacts_manager::repositories::ContactRepository;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock contact repository for testing.
///
/// Keeps contacts in a map keyed by ULID, the key the real stores match on
/// for updates, so any `id` carried by an update is ignored. Counts calls per
/// method and can be switched into a failing mode to exercise storage-error
/// propagation.
#[allow(dead_code)]
#[derive(Clone)]
pub struct MockContactRepository {
    contacts: Arc<Mutex<HashMap<String, Contact>>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
    next_id: Arc<Mutex<i64>>,
    failing: Arc<Mutex<bool>>,
}

#[allow(dead_code)]
impl MockContactRepository {
    /// Create a new empty MockContactRepository.
    pub fn new() -> Self {
        Self {
            contacts: Arc::new(Mutex::new(HashMap::new())),
            call_counts: Arc::new(Mutex::new(HashMap::new())),
            next_id: Arc::new(Mutex::new(1)),
            failing: Arc::new(Mutex::new(false)),
        }
    }

    /// Seed a contact directly, bypassing the manager.
    pub fn add_contact(&self, contact: Contact) {
        let mut contacts = self.contacts.lock().unwrap();
        contacts.insert(contact.ulid.clone(), contact);
    }

    /// Snapshot of a stored contact.
    pub fn stored(&self, ulid: &str) -> Option<Contact> {
        self.contacts.lock().unwrap().get(ulid).cloned()
    }

    /// Number of stored contacts.
    pub fn len(&self) -> usize {
        self.contacts.lock().unwrap().len()
    }

    /// Make every subsequent call fail with a storage error.
    pub fn set_failing(&self, failing: bool) {
        *self.failing.lock().unwrap() = failing;
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    /// Total calls across every method.
    pub fn total_calls(&self) -> usize {
        self.call_counts.lock().unwrap().values().sum()
    }

    /// Reset all call counts.
    pub fn reset_call_counts(&self) {
        let mut counts = self.call_counts.lock().unwrap();
        counts.clear();
    }

    fn track_call(&self, method: &str) -> RepositoryResult<()> {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;

        if *self.failing.lock().unwrap() {
            return Err(RepositoryError::Task(format!("{} failed", method)));
        }
        Ok(())
    }

    fn filter_by<F>(&self, predicate: F) -> Vec<Contact>
    where
        F: Fn(&Contact) -> bool,
    {
        let contacts = self.contacts.lock().unwrap();
        contacts.values().filter(|c| predicate(c)).cloned().collect()
    }
}

impl Default for MockContactRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ContactRepository for MockContactRepository {
    async fn add(&self, contact: &Contact) -> RepositoryResult<Contact> {
        self.track_call("add")?;

        let mut contacts = self.contacts.lock().unwrap();
        if contacts.contains_key(&contact.ulid) {
            return Err(RepositoryError::DuplicateUlid(contact.ulid.clone()));
        }

        let mut next_id = self.next_id.lock().unwrap();
        let stored = contact.clone().with_id(*next_id);
        *next_id += 1;

        contacts.insert(stored.ulid.clone(), stored.clone());
        Ok(stored)
    }

    async fn delete_by_ulid(&self, ulid: &str) -> RepositoryResult<Option<Contact>> {
        self.track_call("delete_by_ulid")?;
        Ok(self.contacts.lock().unwrap().remove(ulid))
    }

    async fn get_all(&self) -> RepositoryResult<Vec<Contact>> {
        self.track_call("get_all")?;
        Ok(self.filter_by(|_| true))
    }

    async fn get_by_ulid(&self, ulid: &str) -> RepositoryResult<Option<Contact>> {
        self.track_call("get_by_ulid")?;
        Ok(self.stored(ulid))
    }

    async fn find_by_first_name(&self, first_name: &str) -> RepositoryResult<Vec<Contact>> {
        self.track_call("find_by_first_name")?;
        Ok(self.filter_by(|c| c.first_name == first_name))
    }

    async fn find_by_last_name(&self, last_name: &str) -> RepositoryResult<Vec<Contact>> {
        self.track_call("find_by_last_name")?;
        Ok(self.filter_by(|c| c.last_name == last_name))
    }

    async fn update(&self, contact: &Contact) -> RepositoryResult<bool> {
        self.track_call("update")?;

        let mut contacts = self.contacts.lock().unwrap();
        match contacts.get_mut(&contact.ulid) {
            Some(stored) => {
                let id = stored.id;
                *stored = contact.clone();
                stored.id = id;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
