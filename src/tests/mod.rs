mod group_tests;
mod user_tests;

use crate::core::models::User;
use crate::core::services::DivvyService;
use crate::infrastructure::cache::in_memory::InMemoryCache;
use crate::infrastructure::logging::in_memory::InMemoryLogging;
use crate::infrastructure::storage::in_memory::InMemoryStorage;

pub fn create_test_service() -> DivvyService<InMemoryLogging, InMemoryStorage, InMemoryCache> {
    let _ = env_logger::try_init();
    let storage = InMemoryStorage::new();
    let logging = InMemoryLogging::new();
    let cache = InMemoryCache::new();
    DivvyService::new(storage, logging, cache, "test-secret".to_string())
}

pub async fn register_test_user(
    service: &DivvyService<InMemoryLogging, InMemoryStorage, InMemoryCache>,
    name: &str,
) -> User {
    service
        .register_user(
            name.to_string(),
            format!("{}@example.com", name.to_lowercase()),
            "hunter2!",
        )
        .await
        .unwrap()
}
