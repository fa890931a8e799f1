use crate::db::{open_db, open_db_in_memory};
use crate::error::{RepositoryError, RepositoryResult};
use crate::models::Contact;
use crate::repositories::traits::ContactRepository;
use async_trait::async_trait;
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::path::Path;
use std::sync::{Arc, Mutex};

const CONTACT_SELECT_SQL: &str = "SELECT
    id,
    ulid,
    first_name,
    last_name,
    address,
    email,
    gender,
    phone
FROM contacts";

/// SQLite-backed contact repository.
///
/// The connection is shared behind a mutex and every statement runs on
/// tokio's blocking pool so callers never block the async runtime.
#[derive(Clone)]
pub struct SqliteContactRepository {
    conn: Arc<Mutex<Connection>>,
}

impl SqliteContactRepository {
    /// Wrap an already migrated connection.
    pub fn new(conn: Connection) -> Self {
        Self {
            conn: Arc::new(Mutex::new(conn)),
        }
    }

    /// Open (and migrate) a database file.
    pub fn open(path: impl AsRef<Path>) -> RepositoryResult<Self> {
        Ok(Self::new(open_db(path)?))
    }

    /// Open (and migrate) a private in-memory database.
    pub fn open_in_memory() -> RepositoryResult<Self> {
        Ok(Self::new(open_db_in_memory()?))
    }

    /// Run `op` against the connection on the blocking pool.
    async fn with_conn<T, F>(&self, op: F) -> RepositoryResult<T>
    where
        T: Send + 'static,
        F: FnOnce(&Connection) -> RepositoryResult<T> + Send + 'static,
    {
        let conn = Arc::clone(&self.conn);

        tokio::task::spawn_blocking(move || {
            let guard = conn.lock().map_err(|_| RepositoryError::Poisoned)?;
            op(&*guard)
        })
        .await
        .map_err(|e| RepositoryError::Task(format!("Task join error: {}", e)))?
    }

    async fn query_contacts(
        &self,
        filter: &'static str,
        value: &str,
    ) -> RepositoryResult<Vec<Contact>> {
        let value = value.to_string();

        self.with_conn(move |conn| {
            let mut stmt = conn.prepare(&format!(
                "{CONTACT_SELECT_SQL} WHERE {filter} = ?1 ORDER BY id ASC;"
            ))?;
            let contacts = stmt
                .query_map([value], parse_contact_row)?
                .collect::<Result<Vec<_>, _>>()?;
            Ok(contacts)
        })
        .await
    }
}

#[async_trait]
impl ContactRepository for SqliteContactRepository {
    async fn add(&self, contact: &Contact) -> RepositoryResult<Contact> {
        let contact = contact.clone();

        self.with_conn(move |conn| {
            let inserted = conn.execute(
                "INSERT INTO contacts (
                    ulid,
                    first_name,
                    last_name,
                    address,
                    email,
                    gender,
                    phone
                ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7);",
                params![
                    contact.ulid,
                    contact.first_name,
                    contact.last_name,
                    contact.address,
                    contact.email,
                    contact.gender,
                    contact.phone,
                ],
            );

            match inserted {
                Ok(_) => {
                    let id = conn.last_insert_rowid();
                    tracing::debug!(id = id, ulid = %contact.ulid, "Inserted contact");
                    Ok(contact.with_id(id))
                }
                Err(e) if is_unique_violation(&e) => {
                    Err(RepositoryError::DuplicateUlid(contact.ulid))
                }
                Err(e) => Err(e.into()),
            }
        })
        .await
    }

    async fn delete_by_ulid(&self, ulid: &str) -> RepositoryResult<Option<Contact>> {
        let ulid = ulid.to_string();

        self.with_conn(move |conn| {
            let existing = conn
                .query_row(
                    &format!("{CONTACT_SELECT_SQL} WHERE ulid = ?1;"),
                    [&ulid],
                    parse_contact_row,
                )
                .optional()?;

            if existing.is_some() {
                conn.execute("DELETE FROM contacts WHERE ulid = ?1;", [&ulid])?;
            }

            Ok(existing)
        })
        .await
    }

    async fn get_all(&self) -> RepositoryResult<Vec<Contact>> {
        self.with_conn(|conn| {
            let mut stmt = conn.prepare(&format!("{CONTACT_SELECT_SQL} ORDER BY id ASC;"))?;
            let contacts = stmt
                .query_map([], parse_contact_row)?
                .collect::<Result<Vec<_>, _>>()?;
            Ok(contacts)
        })
        .await
    }

    async fn get_by_ulid(&self, ulid: &str) -> RepositoryResult<Option<Contact>> {
        let ulid = ulid.to_string();

        self.with_conn(move |conn| {
            let contact = conn
                .query_row(
                    &format!("{CONTACT_SELECT_SQL} WHERE ulid = ?1;"),
                    [ulid],
                    parse_contact_row,
                )
                .optional()?;
            Ok(contact)
        })
        .await
    }

    async fn find_by_first_name(&self, first_name: &str) -> RepositoryResult<Vec<Contact>> {
        self.query_contacts("first_name", first_name).await
    }

    async fn find_by_last_name(&self, last_name: &str) -> RepositoryResult<Vec<Contact>> {
        self.query_contacts("last_name", last_name).await
    }

    async fn update(&self, contact: &Contact) -> RepositoryResult<bool> {
        let contact = contact.clone();

        self.with_conn(move |conn| {
            let changed = conn.execute(
                "UPDATE contacts
                 SET
                    first_name = ?1,
                    last_name = ?2,
                    address = ?3,
                    email = ?4,
                    gender = ?5,
                    phone = ?6
                 WHERE ulid = ?7;",
                params![
                    contact.first_name,
                    contact.last_name,
                    contact.address,
                    contact.email,
                    contact.gender,
                    contact.phone,
                    contact.ulid,
                ],
            )?;

            if changed == 0 {
                tracing::debug!(id = ?contact.id, ulid = %contact.ulid, "No row for update");
            }
            Ok(changed > 0)
        })
        .await
    }
}

fn parse_contact_row(row: &Row<'_>) -> rusqlite::Result<Contact> {
    Ok(Contact {
        id: Some(row.get("id")?),
        ulid: row.get("ulid")?,
        first_name: row.get("first_name")?,
        last_name: row.get("last_name")?,
        address: row.get("address")?,
        email: row.get("email")?,
        gender: row.get("gender")?,
        phone: row.get("phone")?,
    })
}

fn is_unique_violation(err: &rusqlite::Error) -> bool {
    matches!(
        err,
        rusqlite::Error::SqliteFailure(e, _)
            if e.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(ulid: &str, first_name: &str, last_name: &str) -> Contact {
        Contact {
            id: None,
            ulid: ulid.to_string(),
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            address: "Crimson Str.".to_string(),
            email: "test@email.com".to_string(),
            gender: "Male".to_string(),
            phone: "0999123123".to_string(),
        }
    }

    #[tokio::test]
    async fn test_add_and_get_by_ulid() {
        let repo = SqliteContactRepository::open_in_memory().unwrap();
        let stored = repo.add(&sample("1234ABCD12", "Peter", "Petrov")).await.unwrap();
        assert!(stored.id.is_some());

        let loaded = repo.get_by_ulid("1234ABCD12").await.unwrap().unwrap();
        assert_eq!(loaded, stored);
        assert!(repo.get_by_ulid("123123OOOOPO").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_duplicate_ulid_maps_to_conflict() {
        let repo = SqliteContactRepository::open_in_memory().unwrap();
        repo.add(&sample("1234ABCD12", "Peter", "Petrov")).await.unwrap();

        let result = repo.add(&sample("1234ABCD12", "Vladko", "Vladkov")).await;
        assert!(matches!(result, Err(RepositoryError::DuplicateUlid(u)) if u == "1234ABCD12"));
    }

    #[tokio::test]
    async fn test_delete_returns_removed_row() {
        let repo = SqliteContactRepository::open_in_memory().unwrap();
        let stored = repo.add(&sample("1234ABCD12", "Peter", "Petrov")).await.unwrap();

        assert_eq!(repo.delete_by_ulid("1234ABCD12").await.unwrap(), Some(stored));
        assert_eq!(repo.delete_by_ulid("1234ABCD12").await.unwrap(), None);
        assert!(repo.get_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_by_ulid_when_id_missing() {
        let repo = SqliteContactRepository::open_in_memory().unwrap();
        repo.add(&sample("1234ABCD12", "Peter", "Petrov")).await.unwrap();

        let mut changed = sample("1234ABCD12", "Peter", "Petrov");
        changed.phone = "0888000000".to_string();
        assert!(repo.update(&changed).await.unwrap());

        let loaded = repo.get_by_ulid("1234ABCD12").await.unwrap().unwrap();
        assert_eq!(loaded.phone, "0888000000");

        assert!(!repo.update(&sample("0000000000", "No", "One")).await.unwrap());
    }

    #[tokio::test]
    async fn test_update_ignores_foreign_id() {
        let repo = SqliteContactRepository::open_in_memory().unwrap();
        let peter = repo.add(&sample("1234ABCD12", "Peter", "Petrov")).await.unwrap();
        let vladko = repo.add(&sample("9999UIOP12", "Vladko", "Vladkov")).await.unwrap();

        let mut changed = vladko.clone().with_id(peter.id.unwrap());
        changed.address = "Sky Str.".to_string();
        assert!(repo.update(&changed).await.unwrap());

        assert_eq!(repo.get_by_ulid("1234ABCD12").await.unwrap(), Some(peter));
        let loaded = repo.get_by_ulid("9999UIOP12").await.unwrap().unwrap();
        assert_eq!(loaded.address, "Sky Str.");
        assert_eq!(loaded.id, vladko.id);
    }

    #[tokio::test]
    async fn test_file_database_persists_across_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("contacts.db");

        {
            let repo = SqliteContactRepository::open(&path).unwrap();
            repo.add(&sample("1234ABCD12", "Peter", "Petrov")).await.unwrap();
        }

        let repo = SqliteContactRepository::open(&path).unwrap();
        let all = repo.get_all().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].ulid, "1234ABCD12");
    }
}
