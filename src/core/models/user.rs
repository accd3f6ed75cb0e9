use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct User {
    /// Assigned by the storage engine at creation, immutable afterwards.
    pub id: i64,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    /// Refreshed by the storage engine on every mutation.
    pub updated_at: DateTime<Utc>,
    /// Sole lifecycle flag: false = Active, true = Deleted.
    pub deleted: bool,
}

/// Sparse update input. A field left unset means "leave unchanged"; an
/// empty string is a legitimate explicit value, not absence.
#[derive(Clone, Debug, Default, Deserialize, ToSchema)]
pub struct UserPatch {
    pub name: Option<String>,
    pub email: Option<String>,
}

impl UserPatch {
    /// Collapses the patch into the exact write-set to apply: only the
    /// fields that were present in the input survive.
    pub fn into_write_set(self) -> WriteSet {
        WriteSet {
            name: self.name,
            email: self.email,
        }
    }
}

/// The field-value pairs an update will write. Empty is legal and is
/// applied as a no-op update rather than rejected.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WriteSet {
    pub name: Option<String>,
    pub email: Option<String>,
}

impl WriteSet {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none()
    }
}
