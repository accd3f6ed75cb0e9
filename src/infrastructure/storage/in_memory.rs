use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::core::errors::RosterError;
use crate::core::models::{Projection, User, WriteSet};
use crate::infrastructure::storage::{ConditionalUpdate, Storage, UserFilter};

/// Reference storage engine. Rows live in a `BTreeMap` keyed by a
/// monotonically increasing id, so scans come back in insertion order.
/// Every conditional update takes the write lock once, making the
/// predicate check and the write a single critical section.
#[derive(Clone, Default)]
pub struct InMemoryStorage {
    inner: Arc<RwLock<Inner>>,
}

#[derive(Default)]
struct Inner {
    users: BTreeMap<i64, User>,
    next_id: i64,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Storage for InMemoryStorage {
    async fn find_unique(&self, id: i64) -> Result<Option<User>, RosterError> {
        let inner = self.inner.read().await;
        Ok(inner.users.get(&id).cloned())
    }

    async fn find_many(
        &self,
        filter: UserFilter,
        skip: u64,
        take: u64,
        _projection: &Projection,
    ) -> Result<Vec<User>, RosterError> {
        // This engine materializes every column; the projection is only
        // meaningful to engines that can return partial rows.
        let inner = self.inner.read().await;
        Ok(inner
            .users
            .values()
            .filter(|user| filter.matches(user))
            .skip(skip as usize)
            .take(take as usize)
            .cloned()
            .collect())
    }

    async fn create(&self, name: String, email: String) -> Result<User, RosterError> {
        let mut inner = self.inner.write().await;
        inner.next_id += 1;
        let now = Utc::now();
        let user = User {
            id: inner.next_id,
            name,
            email,
            created_at: now,
            updated_at: now,
            deleted: false,
        };
        inner.users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn update(
        &self,
        id: i64,
        write_set: WriteSet,
        _projection: &Projection,
    ) -> Result<Option<User>, RosterError> {
        let mut inner = self.inner.write().await;
        let Some(user) = inner.users.get_mut(&id) else {
            return Ok(None);
        };
        if let Some(name) = write_set.name {
            user.name = name;
        }
        if let Some(email) = write_set.email {
            user.email = email;
        }
        // An empty write-set still counts as a touch.
        user.updated_at = Utc::now();
        Ok(Some(user.clone()))
    }

    async fn set_deleted_if(
        &self,
        id: i64,
        expected: bool,
        deleted: bool,
    ) -> Result<ConditionalUpdate, RosterError> {
        let mut inner = self.inner.write().await;
        let Some(user) = inner.users.get_mut(&id) else {
            return Ok(ConditionalUpdate::NotFound);
        };
        if user.deleted != expected {
            return Ok(ConditionalUpdate::PreconditionFailed);
        }
        user.deleted = deleted;
        user.updated_at = Utc::now();
        Ok(ConditionalUpdate::Applied(user.clone()))
    }

    async fn update_many(
        &self,
        ids: &[i64],
        filter: UserFilter,
        deleted: bool,
    ) -> Result<u64, RosterError> {
        let mut inner = self.inner.write().await;
        let now = Utc::now();
        let mut transitioned = 0;
        for id in ids {
            if let Some(user) = inner.users.get_mut(id) {
                if filter.matches(user) {
                    user.deleted = deleted;
                    user.updated_at = now;
                    transitioned += 1;
                }
            }
        }
        Ok(transitioned)
    }
}
