//! Contact model.

use serde::{Deserialize, Serialize};

/// A contact record.
///
/// `id` is assigned by the store on insert and is `None` until then; `ulid`
/// is the public handle callers use for lookups and deletes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct Contact {
    /// Storage-assigned surrogate key
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    /// Externally supplied unique identifier
    pub ulid: String,

    /// First name
    pub first_name: String,

    /// Last name
    pub last_name: String,

    /// Postal address
    pub address: String,

    /// Email address
    pub email: String,

    /// Free-form gender category
    pub gender: String,

    /// Phone number
    pub phone: String,
}

impl Contact {
    /// Copy of this contact carrying the given storage key.
    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }
}
