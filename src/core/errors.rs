use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug, Serialize)]
pub enum RosterError {
    /// User with given ID not found
    #[error("User {0} not found")]
    UserNotFound(i64),

    /// Soft delete requested for a user already in the Deleted state
    #[error("User {0} is already deleted")]
    AlreadyDeleted(i64),

    /// Restore requested for a user that is not soft-deleted
    #[error("User {0} is not soft-deleted")]
    NotDeleted(i64),

    /// Failure reported by the storage collaborator, propagated unmodified
    #[error("Storage error: {0}")]
    StorageError(String),
}
