pub mod cache_keys;
pub mod in_memory;

use crate::core::errors::DivvyError;
use crate::core::services::SimplifiedDebts;
use async_trait::async_trait;

#[async_trait]
pub trait Cache: Send + Sync {
    async fn get_simplified_debts(
        &self,
        group_id: &str,
    ) -> Result<Option<SimplifiedDebts>, DivvyError>;
    async fn save_simplified_debts(
        &self,
        group_id: &str,
        debts: &SimplifiedDebts,
        ttl: std::time::Duration,
    ) -> Result<(), DivvyError>;
    async fn invalidate_group(&self, group_id: &str) -> Result<(), DivvyError>;
}
