use async_trait::async_trait;

use crate::core::errors::RosterError;
use crate::core::models::{Projection, User, WriteSet};

/// Filter on persisted lifecycle state. `deleted: None` matches every row.
#[derive(Clone, Copy, Debug, Default)]
pub struct UserFilter {
    pub deleted: Option<bool>,
}

impl UserFilter {
    pub fn active() -> Self {
        UserFilter {
            deleted: Some(false),
        }
    }

    pub fn matches(&self, user: &User) -> bool {
        self.deleted.map_or(true, |deleted| user.deleted == deleted)
    }
}

/// Outcome of a conditional single-row update.
#[derive(Clone, Debug)]
pub enum ConditionalUpdate {
    /// Predicate held; the row was written and is returned post-write.
    Applied(User),
    /// No row with that id exists.
    NotFound,
    /// The row exists but its current state failed the predicate.
    PreconditionFailed,
}

#[async_trait]
pub trait Storage: Send + Sync {
    async fn find_unique(&self, id: i64) -> Result<Option<User>, RosterError>;

    /// Filtered, paginated scan in storage (id) order. The projection is
    /// forwarded from the caller untouched.
    async fn find_many(
        &self,
        filter: UserFilter,
        skip: u64,
        take: u64,
        projection: &Projection,
    ) -> Result<Vec<User>, RosterError>;

    /// Inserts a new Active row; the engine assigns id and timestamps.
    async fn create(&self, name: String, email: String) -> Result<User, RosterError>;

    /// Applies a write-set. An empty write-set is a legal no-op touch;
    /// whether `updated_at` still advances is the engine's choice.
    async fn update(
        &self,
        id: i64,
        write_set: WriteSet,
        projection: &Projection,
    ) -> Result<Option<User>, RosterError>;

    /// Writes `deleted` iff the row's current flag equals `expected`. The
    /// check and the write must form a single critical section relative to
    /// concurrent calls on the same id.
    async fn set_deleted_if(
        &self,
        id: i64,
        expected: bool,
        deleted: bool,
    ) -> Result<ConditionalUpdate, RosterError>;

    /// Conditional bulk write over `ids`; returns how many rows matched
    /// the filter and transitioned.
    async fn update_many(
        &self,
        ids: &[i64],
        filter: UserFilter,
        deleted: bool,
    ) -> Result<u64, RosterError>;
}

pub mod in_memory;
