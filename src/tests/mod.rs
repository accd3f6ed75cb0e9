mod list_tests;
mod projection_tests;

use crate::core::services::UserService;
use crate::infrastructure::storage::in_memory::InMemoryStorage;

pub fn create_test_service() -> UserService<InMemoryStorage> {
    UserService::new(InMemoryStorage::new())
}
