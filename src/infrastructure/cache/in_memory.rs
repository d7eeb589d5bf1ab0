use crate::core::errors::DivvyError;
use crate::core::services::SimplifiedDebts;
use crate::infrastructure::cache::{Cache, cache_keys};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Clone)]
pub struct InMemoryCache {
    cache: Arc<RwLock<HashMap<String, (SimplifiedDebts, chrono::DateTime<chrono::Utc>)>>>,
}

impl InMemoryCache {
    pub fn new() -> Self {
        InMemoryCache {
            cache: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

impl Default for InMemoryCache {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Cache for InMemoryCache {
    async fn get_simplified_debts(
        &self,
        group_id: &str,
    ) -> Result<Option<SimplifiedDebts>, DivvyError> {
        let cache = self.cache.read().await;
        let key = cache_keys::simplified_debts_key(group_id);
        Ok(cache
            .get(&key)
            .filter(|(_, expiry)| *expiry > chrono::Utc::now())
            .map(|(debts, _)| debts.clone()))
    }

    async fn save_simplified_debts(
        &self,
        group_id: &str,
        debts: &SimplifiedDebts,
        ttl: std::time::Duration,
    ) -> Result<(), DivvyError> {
        let mut cache = self.cache.write().await;
        let key = cache_keys::simplified_debts_key(group_id);
        cache.insert(
            key,
            (
                debts.clone(),
                chrono::Utc::now()
                    + chrono::Duration::from_std(ttl)
                        .map_err(|e| DivvyError::CacheError(format!("Failed to convert TTL: {}", e)))?,
            ),
        );
        Ok(())
    }

    async fn invalidate_group(&self, group_id: &str) -> Result<(), DivvyError> {
        let mut cache = self.cache.write().await;
        cache.remove(&cache_keys::simplified_debts_key(group_id));
        cache.retain(|_, (_, expiry)| *expiry > chrono::Utc::now());
        Ok(())
    }
}
