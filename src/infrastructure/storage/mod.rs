use crate::core::errors::DivvyError;
use crate::core::models::{Expense, Group, GroupAudit, Settlement, User};
use async_trait::async_trait;

pub mod in_memory;

#[async_trait]
pub trait Storage: Send + Sync {
    async fn save_user(&self, user: User) -> Result<(), DivvyError>;
    async fn get_user(&self, id: &str) -> Result<Option<User>, DivvyError>;
    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>, DivvyError>;

    async fn save_group(&self, group: Group) -> Result<(), DivvyError>;
    async fn get_group(&self, id: &str) -> Result<Option<Group>, DivvyError>;
    async fn get_group_by_join_link(&self, link: &str) -> Result<Option<Group>, DivvyError>;
    async fn delete_group(&self, id: &str) -> Result<(), DivvyError>;
    async fn revoke_join_link(&self, link: &str) -> Result<(), DivvyError>;

    async fn save_expense(&self, expense: Expense) -> Result<(), DivvyError>;
    async fn get_expense(&self, id: &str) -> Result<Option<Expense>, DivvyError>;
    async fn get_expenses_by_group(&self, group_id: &str) -> Result<Vec<Expense>, DivvyError>;

    async fn save_settlement(&self, settlement: Settlement) -> Result<(), DivvyError>;
    async fn get_settlements_for_user(
        &self,
        user_id: &str,
        group_id: Option<&str>,
    ) -> Result<Vec<Settlement>, DivvyError>;

    async fn save_group_audit(&self, audit: GroupAudit) -> Result<(), DivvyError>;
    async fn get_group_audits(&self, group_id: &str) -> Result<Vec<GroupAudit>, DivvyError>;
}
