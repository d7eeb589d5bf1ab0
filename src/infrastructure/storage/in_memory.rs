use crate::core::errors::DivvyError;
use crate::core::models::{Expense, Group, GroupAudit, Settlement, User};
use crate::infrastructure::storage::Storage;
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::Mutex;

pub struct InMemoryStorage {
    users: Mutex<HashMap<String, User>>,
    emails: Mutex<HashMap<String, String>>, // email -> user_id
    groups: Mutex<HashMap<String, Group>>,
    join_links: Mutex<HashMap<String, String>>, // link -> group_id
    expenses: Mutex<HashMap<String, Expense>>,
    settlements: Mutex<HashMap<String, Settlement>>,
    group_audits: Mutex<HashMap<String, Vec<GroupAudit>>>,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        InMemoryStorage {
            users: Mutex::new(HashMap::new()),
            emails: Mutex::new(HashMap::new()),
            groups: Mutex::new(HashMap::new()),
            join_links: Mutex::new(HashMap::new()),
            expenses: Mutex::new(HashMap::new()),
            settlements: Mutex::new(HashMap::new()),
            group_audits: Mutex::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Storage for InMemoryStorage {
    async fn save_user(&self, user: User) -> Result<(), DivvyError> {
        let mut emails = self.emails.lock().await;
        if let Some(existing) = emails.get(&user.email) {
            if *existing != user.id {
                return Err(DivvyError::EmailAlreadyRegistered(user.email));
            }
        }
        emails.insert(user.email.clone(), user.id.clone());
        let mut users = self.users.lock().await;
        users.insert(user.id.clone(), user);
        Ok(())
    }

    async fn get_user(&self, id: &str) -> Result<Option<User>, DivvyError> {
        Ok(self.users.lock().await.get(id).cloned())
    }

    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>, DivvyError> {
        // For production: Use database index on email
        let user_id = self.emails.lock().await.get(email).cloned();
        Ok(match user_id {
            Some(id) => self.users.lock().await.get(&id).cloned(),
            None => None,
        })
    }

    async fn save_group(&self, group: Group) -> Result<(), DivvyError> {
        // For production: Use database transactions
        let mut groups = self.groups.lock().await;
        let mut join_links = self.join_links.lock().await;
        join_links.insert(group.join_link.clone(), group.id.clone());
        groups.insert(group.id.clone(), group);
        Ok(())
    }

    async fn get_group(&self, id: &str) -> Result<Option<Group>, DivvyError> {
        // For production: Add caching
        Ok(self.groups.lock().await.get(id).cloned())
    }

    async fn get_group_by_join_link(&self, link: &str) -> Result<Option<Group>, DivvyError> {
        // For production: Use database index on join_link
        let group_id = self.join_links.lock().await.get(link).cloned();
        Ok(match group_id {
            Some(id) => self.groups.lock().await.get(&id).cloned(),
            None => None,
        })
    }

    async fn delete_group(&self, id: &str) -> Result<(), DivvyError> {
        let mut groups = self.groups.lock().await;
        if let Some(group) = groups.remove(id) {
            self.join_links.lock().await.remove(&group.join_link);
        }
        Ok(())
    }

    async fn revoke_join_link(&self, link: &str) -> Result<(), DivvyError> {
        // For production: Ensure atomic revocation
        self.join_links.lock().await.remove(link);
        Ok(())
    }

    async fn save_expense(&self, expense: Expense) -> Result<(), DivvyError> {
        self.expenses
            .lock()
            .await
            .insert(expense.id.clone(), expense);
        Ok(())
    }

    async fn get_expense(&self, id: &str) -> Result<Option<Expense>, DivvyError> {
        Ok(self.expenses.lock().await.get(id).cloned())
    }

    async fn get_expenses_by_group(&self, group_id: &str) -> Result<Vec<Expense>, DivvyError> {
        // For production: Use database query with index
        Ok(self
            .expenses
            .lock()
            .await
            .values()
            .filter(|e| e.group_id == group_id)
            .cloned()
            .collect())
    }

    async fn save_settlement(&self, settlement: Settlement) -> Result<(), DivvyError> {
        self.settlements
            .lock()
            .await
            .insert(settlement.id.clone(), settlement);
        Ok(())
    }

    async fn get_settlements_for_user(
        &self,
        user_id: &str,
        group_id: Option<&str>,
    ) -> Result<Vec<Settlement>, DivvyError> {
        Ok(self
            .settlements
            .lock()
            .await
            .values()
            .filter(|s| s.payer_id == user_id || s.receiver_id == user_id)
            .filter(|s| group_id.is_none_or(|gid| s.group_id.as_deref() == Some(gid)))
            .cloned()
            .collect())
    }

    async fn save_group_audit(&self, audit: GroupAudit) -> Result<(), DivvyError> {
        let mut audits = self.group_audits.lock().await;
        audits
            .entry(audit.group_id.clone())
            .or_insert_with(Vec::new)
            .push(audit);
        Ok(())
    }

    async fn get_group_audits(&self, group_id: &str) -> Result<Vec<GroupAudit>, DivvyError> {
        // For production: Add pagination
        Ok(self
            .group_audits
            .lock()
            .await
            .get(group_id)
            .cloned()
            .unwrap_or_default())
    }
}
