use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::core::errors::RosterError;
use crate::core::models::{Projection, User, UserPatch, WriteSet};
use crate::core::services::UserService;
use crate::infrastructure::storage::in_memory::InMemoryStorage;
use crate::infrastructure::storage::{ConditionalUpdate, Storage, UserFilter};

/// Decorator that remembers every projection the service hands to the
/// engine, so forwarding can be asserted byte for byte.
#[derive(Clone)]
struct RecordingStorage {
    inner: InMemoryStorage,
    seen: Arc<Mutex<Vec<Projection>>>,
}

impl RecordingStorage {
    fn new() -> Self {
        RecordingStorage {
            inner: InMemoryStorage::new(),
            seen: Arc::new(Mutex::new(Vec::new())),
        }
    }

    fn seen(&self) -> Vec<Projection> {
        self.seen.lock().unwrap().clone()
    }
}

#[async_trait]
impl Storage for RecordingStorage {
    async fn find_unique(&self, id: i64) -> Result<Option<User>, RosterError> {
        self.inner.find_unique(id).await
    }

    async fn find_many(
        &self,
        filter: UserFilter,
        skip: u64,
        take: u64,
        projection: &Projection,
    ) -> Result<Vec<User>, RosterError> {
        self.seen.lock().unwrap().push(projection.clone());
        self.inner.find_many(filter, skip, take, projection).await
    }

    async fn create(&self, name: String, email: String) -> Result<User, RosterError> {
        self.inner.create(name, email).await
    }

    async fn update(
        &self,
        id: i64,
        write_set: WriteSet,
        projection: &Projection,
    ) -> Result<Option<User>, RosterError> {
        self.seen.lock().unwrap().push(projection.clone());
        self.inner.update(id, write_set, projection).await
    }

    async fn set_deleted_if(
        &self,
        id: i64,
        expected: bool,
        deleted: bool,
    ) -> Result<ConditionalUpdate, RosterError> {
        self.inner.set_deleted_if(id, expected, deleted).await
    }

    async fn update_many(
        &self,
        ids: &[i64],
        filter: UserFilter,
        deleted: bool,
    ) -> Result<u64, RosterError> {
        self.inner.update_many(ids, filter, deleted).await
    }
}

#[tokio::test]
async fn test_list_forwards_projection_spec_untouched() {
    let storage = RecordingStorage::new();
    let service = UserService::new(storage.clone());

    let spec = r#"{"select":{"name":true,"email":true}}"#;
    service
        .list_users(None, None, &Projection::from_spec(spec))
        .await
        .unwrap();

    let seen = storage.seen();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].spec(), Some(spec));
}

#[tokio::test]
async fn test_update_forwards_projection_spec_untouched() {
    let storage = RecordingStorage::new();
    let service = UserService::new(storage.clone());
    let user = service
        .create_user("Ada".to_string(), "ada@example.com".to_string())
        .await
        .unwrap();

    let spec = r#"{"select":{"id":true}}"#;
    let patch = UserPatch {
        name: Some("A".to_string()),
        email: None,
    };
    service
        .update_user(user.id, patch, &Projection::from_spec(spec))
        .await
        .unwrap();

    let seen = storage.seen();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].spec(), Some(spec));
}

#[tokio::test]
async fn test_absent_projection_defaults_to_all_fields() {
    let storage = RecordingStorage::new();
    let service = UserService::new(storage.clone());

    service
        .list_users(None, None, &Projection::all())
        .await
        .unwrap();

    let seen = storage.seen();
    assert_eq!(seen.len(), 1);
    assert!(seen[0].is_all());
    assert_eq!(seen[0].spec(), None);
}
