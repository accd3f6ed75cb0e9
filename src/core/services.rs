use tracing::{debug, info, warn};

use crate::core::errors::RosterError;
use crate::core::models::{Projection, User, UserPatch};
use crate::infrastructure::storage::{ConditionalUpdate, Storage, UserFilter};

pub const DEFAULT_PAGE: u64 = 1;
pub const DEFAULT_LIMIT: u64 = 10;

/// Owns the user lifecycle rules: listing, creation, sparse updates, soft
/// delete, restore, and bulk soft delete. Stateless by construction; every
/// piece of mutable state lives behind the storage collaborator, so
/// instances can be replicated freely.
pub struct UserService<S: Storage> {
    storage: S,
}

impl<S: Storage> UserService<S> {
    pub fn new(storage: S) -> Self {
        info!("Initializing UserService");
        UserService { storage }
    }

    /// Lists Active users in storage order. Soft-deleted records are
    /// unconditionally excluded from plain listing.
    ///
    /// `skip = (page - 1) * limit`; both parameters default when omitted
    /// and are clamped to at least 1.
    pub async fn list_users(
        &self,
        page: Option<u64>,
        limit: Option<u64>,
        projection: &Projection,
    ) -> Result<Vec<User>, RosterError> {
        let page = page.unwrap_or(DEFAULT_PAGE).max(1);
        let limit = limit.unwrap_or(DEFAULT_LIMIT).max(1);
        let skip = (page - 1).saturating_mul(limit);
        debug!("Listing users, page {} limit {}", page, limit);
        self.storage
            .find_many(UserFilter::active(), skip, limit, projection)
            .await
    }

    /// Point lookup. Absence is not an error at this layer; callers decide
    /// what a missing user means.
    pub async fn get_user(&self, id: i64) -> Result<Option<User>, RosterError> {
        self.storage.find_unique(id).await
    }

    /// Always creates a new Active record. Email uniqueness is left to the
    /// storage schema, not checked here.
    pub async fn create_user(&self, name: String, email: String) -> Result<User, RosterError> {
        info!("Creating user with email: {}", email);
        let created = self.storage.create(name, email).await?;
        debug!("User created with ID: {}", created.id);
        Ok(created)
    }

    /// Applies a sparse patch. Fields the caller left unset stay as they
    /// are; an empty patch is applied as a no-op update, not rejected. The
    /// `deleted` flag is never writable through this path.
    pub async fn update_user(
        &self,
        id: i64,
        patch: UserPatch,
        projection: &Projection,
    ) -> Result<User, RosterError> {
        info!("Updating user with ID: {}", id);
        let write_set = patch.into_write_set();
        if write_set.is_empty() {
            debug!("Empty write-set for user {}, applying as no-op", id);
        }
        self.storage
            .update(id, write_set, projection)
            .await?
            .ok_or(RosterError::UserNotFound(id))
    }

    /// Active -> Deleted, expressed as one conditional write so that of N
    /// racing deletes exactly one wins and the rest observe AlreadyDeleted.
    pub async fn delete_user(&self, id: i64) -> Result<User, RosterError> {
        info!("Soft deleting user with ID: {}", id);
        match self.storage.set_deleted_if(id, false, true).await? {
            ConditionalUpdate::Applied(user) => Ok(user),
            ConditionalUpdate::NotFound => Err(RosterError::UserNotFound(id)),
            ConditionalUpdate::PreconditionFailed => {
                warn!("User {} is already deleted", id);
                Err(RosterError::AlreadyDeleted(id))
            }
        }
    }

    /// Deleted -> Active, same conditional-write shape as `delete_user`.
    pub async fn restore_user(&self, id: i64) -> Result<User, RosterError> {
        info!("Restoring user with ID: {}", id);
        match self.storage.set_deleted_if(id, true, false).await? {
            ConditionalUpdate::Applied(user) => Ok(user),
            ConditionalUpdate::NotFound => Err(RosterError::UserNotFound(id)),
            ConditionalUpdate::PreconditionFailed => {
                warn!("User {} is not soft-deleted", id);
                Err(RosterError::NotDeleted(id))
            }
        }
    }

    /// Best-effort batch soft delete: a single conditional bulk write,
    /// true iff at least one Active row transitioned. Ids that are missing
    /// or already Deleted are skipped without per-id reporting.
    pub async fn bulk_delete_users(&self, ids: &[i64]) -> Result<bool, RosterError> {
        info!("Bulk soft deleting {} user ids", ids.len());
        let transitioned = self
            .storage
            .update_many(ids, UserFilter::active(), true)
            .await?;
        debug!("Bulk delete transitioned {} rows", transitioned);
        Ok(transitioned > 0)
    }
}
