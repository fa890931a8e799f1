//! Contact persistence behind the [`ContactRepository`] trait.

mod in_memory_contact_repository;
mod sqlite_contact_repository;
mod traits;

pub use in_memory_contact_repository::InMemoryContactRepository;
pub use sqlite_contact_repository::SqliteContactRepository;
pub use traits::ContactRepository;

use crate::config::{Config, StoreKind, IN_MEMORY_DB_PATH};
use crate::error::RepositoryResult;
use std::sync::Arc;

/// Build the store selected by `config`.
pub fn open_repository(config: &Config) -> RepositoryResult<Arc<dyn ContactRepository>> {
    let repository: Arc<dyn ContactRepository> = match config.store {
        StoreKind::Memory => Arc::new(InMemoryContactRepository::new()),
        StoreKind::Sqlite if config.database_path == IN_MEMORY_DB_PATH => {
            Arc::new(SqliteContactRepository::open_in_memory()?)
        }
        StoreKind::Sqlite => Arc::new(SqliteContactRepository::open(&config.database_path)?),
    };

    tracing::info!(
        store = %config.store,
        path = %config.database_path,
        "Contact repository ready"
    );
    Ok(repository)
}
