use crate::auth::jwt::{Claims, JwtService};
use crate::config::CONFIG;
use crate::constants::{
    BALANCES_QUERIED, CURRENCY_EPSILON, DEBTS_SIMPLIFIED, EXPENSE_ADDED, EXPENSE_REVERSED,
    GROUP_CREATED, GROUP_DELETED, JOIN_LINK_REGENERATED, JOIN_LINK_REVOKED, MAX_DESCRIPTION_LENGTH,
    MAX_NAME_LENGTH, MEMBER_ADDED, MEMBER_JOINED, MEMBER_REMOVED, OWNERSHIP_TRANSFERRED,
    SETTLEMENT_CREATED, USER_LOGGED_IN, USER_REGISTERED,
};
use crate::core::debts::{BalanceEntry, SettlementTransaction, participant_balances, simplify_debts};
use crate::core::errors::{DivvyError, FieldError};
use crate::core::models::{
    Expense, ExpenseCategory, ExpenseSplit, Group, GroupAudit, GroupMember, Role, Settlement,
    SplitShare, SplitType, User,
};
use crate::infrastructure::cache::Cache;
use crate::infrastructure::logging::LoggingService;
use crate::infrastructure::storage::Storage;
use chrono::{DateTime, Utc};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::collections::{HashMap, HashSet};
use std::str::FromStr;
use std::time::Duration;
use utoipa::ToSchema;
use uuid::Uuid;

/// Response payload of the simplified-debts query: the non-negligible
/// balances that went into the plan plus the plan itself.
#[derive(Serialize, Deserialize, Debug, ToSchema, Clone)]
pub struct SimplifiedDebts {
    balances: Vec<BalanceEntry>,
    simplified: Vec<SettlementTransaction>,
}

impl SimplifiedDebts {
    pub fn balances(&self) -> &Vec<BalanceEntry> {
        &self.balances
    }

    pub fn simplified(&self) -> &Vec<SettlementTransaction> {
        &self.simplified
    }
}

pub struct DivvyService<L: LoggingService, S: Storage, C: Cache> {
    storage: S,
    logging: L,
    cache: C,
    jwt_service: JwtService,
}

impl<L: LoggingService, S: Storage, C: Cache> DivvyService<L, S, C> {
    pub fn new(storage: S, logging: L, cache: C, jwt_secret: String) -> Self {
        DivvyService {
            storage,
            logging,
            cache,
            jwt_service: JwtService::new(jwt_secret),
        }
    }

    pub fn validate_token(&self, token: &str) -> Result<Claims, DivvyError> {
        self.jwt_service.validate_token(token)
    }

    // VALIDATION HELPERS

    fn validate_string_input(
        &self,
        field: &str,
        value: &str,
        max_length: usize,
    ) -> Result<(), DivvyError> {
        if value.trim().is_empty() {
            return Err(DivvyError::InvalidInput(
                field.to_string(),
                FieldError {
                    field: field.to_string(),
                    title: format!("Invalid {}", field),
                    description: format!("{} cannot be empty", field),
                },
            ));
        }
        if value.len() > max_length {
            return Err(DivvyError::InvalidInput(
                field.to_string(),
                FieldError {
                    field: field.to_string(),
                    title: format!("{} Too Long", field),
                    description: format!("{} cannot exceed {} characters", field, max_length),
                },
            ));
        }
        Ok(())
    }

    fn validate_email(&self, email: &str) -> Result<(), DivvyError> {
        let valid = email.split_once('@').is_some_and(|(local, domain)| {
            !local.is_empty() && domain.contains('.') && !domain.starts_with('.')
        });
        if valid {
            Ok(())
        } else {
            Err(DivvyError::InvalidEmail(email.to_string()))
        }
    }

    fn validate_amount(&self, field: &str, amount: f64) -> Result<(), DivvyError> {
        if !amount.is_finite() || amount <= 0.0 {
            return Err(DivvyError::InvalidInput(
                field.to_string(),
                FieldError {
                    field: field.to_string(),
                    title: format!("Invalid {}", field),
                    description: format!("{} must be a positive amount", field),
                },
            ));
        }
        Ok(())
    }

    async fn validate_group_and_owner(
        &self,
        group_id: &str,
        owner_id: &str,
    ) -> Result<Group, DivvyError> {
        let group = self
            .storage
            .get_group(group_id)
            .await?
            .ok_or_else(|| DivvyError::GroupNotFound(group_id.to_string()))?;
        if !group
            .members
            .iter()
            .any(|m| m.user.id == owner_id && m.role == Role::Owner)
        {
            warn!("User {} is not owner of group {}", owner_id, group_id);
            return Err(DivvyError::NotGroupOwner(owner_id.to_string()));
        }
        Ok(group)
    }

    async fn validate_group_membership(
        &self,
        group_id: &str,
        user_id: &str,
    ) -> Result<Group, DivvyError> {
        let group = self
            .storage
            .get_group(group_id)
            .await?
            .ok_or_else(|| DivvyError::GroupNotFound(group_id.to_string()))?;
        if !group.is_member(user_id) {
            warn!("User {} is not a member of group {}", user_id, group_id);
            return Err(DivvyError::NotGroupMember(user_id.to_string()));
        }
        Ok(group)
    }

    async fn log_and_audit(
        &self,
        group_id: Option<&str>,
        action: &str,
        log_details: serde_json::Value,
        user_id: Option<&str>,
    ) -> Result<(), DivvyError> {
        self.logging
            .log_action(action, log_details.clone(), user_id)
            .await?;
        if let Some(gid) = group_id {
            self.storage
                .save_group_audit(GroupAudit {
                    id: Uuid::new_v4().to_string(),
                    group_id: gid.to_string(),
                    action: action.to_string(),
                    user_id: user_id.map(String::from),
                    details: serde_json::from_value(log_details).unwrap_or_default(),
                    timestamp: Utc::now(),
                })
                .await?;
        }
        Ok(())
    }

    fn generate_join_link() -> String {
        Uuid::new_v4().to_string()
    }

    // USERS

    pub async fn register_user(
        &self,
        name: String,
        email: String,
        password: &str,
    ) -> Result<User, DivvyError> {
        info!("Registering user with email: {}", email);
        self.validate_string_input("name", &name, MAX_NAME_LENGTH)?;
        self.validate_email(&email)?;
        self.validate_string_input("password", password, MAX_NAME_LENGTH)?;

        if self.storage.get_user_by_email(&email).await?.is_some() {
            return Err(DivvyError::EmailAlreadyRegistered(email));
        }

        let hash = bcrypt::hash(password, bcrypt::DEFAULT_COST)
            .map_err(|e| DivvyError::InternalServerError(format!("Password hash error: {}", e)))?;
        let user = User {
            id: Uuid::new_v4().to_string(),
            name,
            email,
            password: hash,
        };
        self.storage.save_user(user.clone()).await?;
        debug!("User registered with ID: {}", user.id);

        self.log_and_audit(
            None,
            USER_REGISTERED,
            json!({ "user_id": &user.id }),
            Some(user.id.as_str()),
        )
        .await?;

        Ok(user)
    }

    pub async fn authenticate(&self, email: &str, password: &str) -> Result<String, DivvyError> {
        info!("Authenticating user with email: {}", email);
        let user = self
            .storage
            .get_user_by_email(email)
            .await?
            .ok_or(DivvyError::InvalidCredentials)?;

        let matches = bcrypt::verify(password, &user.password)
            .map_err(|e| DivvyError::InternalServerError(format!("Password verify error: {}", e)))?;
        if !matches {
            warn!("Failed login attempt for email: {}", email);
            return Err(DivvyError::InvalidCredentials);
        }

        let token = self.jwt_service.generate_token(&user.id, "USER")?;
        self.log_and_audit(
            None,
            USER_LOGGED_IN,
            json!({ "user_id": &user.id }),
            Some(user.id.as_str()),
        )
        .await?;
        Ok(token)
    }

    pub async fn get_user(&self, user_id: &str) -> Result<Option<User>, DivvyError> {
        self.storage.get_user(user_id).await
    }

    // GROUPS

    pub async fn create_group(
        &self,
        name: String,
        members: Vec<User>,
        created_by: &User,
    ) -> Result<Group, DivvyError> {
        info!("Creating group '{}' for user {}", name, created_by.id);
        self.validate_string_input("name", &name, MAX_NAME_LENGTH)?;

        let mut group_members = vec![GroupMember {
            user: created_by.clone(),
            role: Role::Owner,
        }];
        let mut seen: HashSet<String> = HashSet::from([created_by.id.clone()]);
        for member in members {
            if seen.insert(member.id.clone()) {
                group_members.push(GroupMember {
                    user: member,
                    role: Role::Member,
                });
            }
        }

        let group = Group {
            id: Uuid::new_v4().to_string(),
            name,
            members: group_members,
            join_link: Self::generate_join_link(),
            created_at: Utc::now(),
        };
        self.storage.save_group(group.clone()).await?;
        debug!("Group created with ID: {}", group.id);

        self.log_and_audit(
            Some(group.id.as_str()),
            GROUP_CREATED,
            json!({ "group_id": &group.id, "member_count": group.members.len() }),
            Some(created_by.id.as_str()),
        )
        .await?;

        Ok(group)
    }

    pub async fn delete_group(&self, group_id: &str, deleted_by: &User) -> Result<(), DivvyError> {
        info!("Deleting group {} by user {}", group_id, deleted_by.id);
        self.validate_group_and_owner(group_id, &deleted_by.id).await?;
        self.storage.delete_group(group_id).await?;
        self.cache.invalidate_group(group_id).await?;

        self.log_and_audit(
            None,
            GROUP_DELETED,
            json!({ "group_id": group_id }),
            Some(deleted_by.id.as_str()),
        )
        .await?;
        Ok(())
    }

    pub async fn add_member_to_group(
        &self,
        group_id: &str,
        user: User,
        added_by: &User,
    ) -> Result<(), DivvyError> {
        info!(
            "Adding user {} to group {} by user {}",
            user.id, group_id, added_by.id
        );
        let mut group = self.validate_group_membership(group_id, &added_by.id).await?;
        if group.is_member(&user.id) {
            return Err(DivvyError::AlreadyGroupMember(user.id));
        }

        let user_id = user.id.clone();
        group.members.push(GroupMember {
            user,
            role: Role::Member,
        });
        self.storage.save_group(group).await?;

        self.log_and_audit(
            Some(group_id),
            MEMBER_ADDED,
            json!({ "group_id": group_id, "user_id": &user_id }),
            Some(added_by.id.as_str()),
        )
        .await?;
        Ok(())
    }

    pub async fn add_member_by_email(
        &self,
        group_id: &str,
        email: &str,
        added_by: &User,
    ) -> Result<(), DivvyError> {
        let user = self
            .storage
            .get_user_by_email(email)
            .await?
            .ok_or_else(|| DivvyError::UserNotFound(email.to_string()))?;
        self.add_member_to_group(group_id, user, added_by).await
    }

    pub async fn remove_member_from_group(
        &self,
        group_id: &str,
        user_id: &str,
        removed_by: &User,
    ) -> Result<(), DivvyError> {
        info!(
            "Removing user {} from group {} by user {}",
            user_id, group_id, removed_by.id
        );
        let mut group = self.validate_group_and_owner(group_id, &removed_by.id).await?;
        if user_id == removed_by.id {
            return Err(DivvyError::OwnerCannotRemoveSelf);
        }
        if !group.is_member(user_id) {
            return Err(DivvyError::NotGroupMember(user_id.to_string()));
        }
        if group.members.len() == 1 {
            return Err(DivvyError::CannotRemoveLastMember);
        }

        group.members.retain(|m| m.user.id != user_id);
        self.storage.save_group(group).await?;
        self.cache.invalidate_group(group_id).await?;

        self.log_and_audit(
            Some(group_id),
            MEMBER_REMOVED,
            json!({ "group_id": group_id, "user_id": user_id }),
            Some(removed_by.id.as_str()),
        )
        .await?;
        Ok(())
    }

    pub async fn join_group_by_link(&self, link: &str, user: &User) -> Result<Group, DivvyError> {
        info!("User {} joining group via link", user.id);
        let mut group = self
            .storage
            .get_group_by_join_link(link)
            .await?
            .ok_or(DivvyError::JoinLinkNotFound)?;
        if group.is_member(&user.id) {
            return Err(DivvyError::AlreadyGroupMember(user.id.clone()));
        }

        group.members.push(GroupMember {
            user: user.clone(),
            role: Role::Member,
        });
        self.storage.save_group(group.clone()).await?;

        self.log_and_audit(
            Some(group.id.as_str()),
            MEMBER_JOINED,
            json!({ "group_id": &group.id, "user_id": &user.id }),
            Some(user.id.as_str()),
        )
        .await?;
        Ok(group)
    }

    pub async fn revoke_join_link(
        &self,
        group_id: &str,
        revoked_by: &User,
    ) -> Result<(), DivvyError> {
        let group = self.validate_group_and_owner(group_id, &revoked_by.id).await?;
        self.storage.revoke_join_link(&group.join_link).await?;

        self.log_and_audit(
            Some(group_id),
            JOIN_LINK_REVOKED,
            json!({ "group_id": group_id }),
            Some(revoked_by.id.as_str()),
        )
        .await?;
        Ok(())
    }

    pub async fn regenerate_join_link(
        &self,
        group_id: &str,
        regenerated_by: &User,
    ) -> Result<String, DivvyError> {
        let mut group = self
            .validate_group_and_owner(group_id, &regenerated_by.id)
            .await?;
        self.storage.revoke_join_link(&group.join_link).await?;
        group.join_link = Self::generate_join_link();
        let link = group.join_link.clone();
        self.storage.save_group(group).await?;

        self.log_and_audit(
            Some(group_id),
            JOIN_LINK_REGENERATED,
            json!({ "group_id": group_id }),
            Some(regenerated_by.id.as_str()),
        )
        .await?;
        Ok(link)
    }

    pub async fn transfer_ownership(
        &self,
        group_id: &str,
        new_owner: &User,
        transferred_by: &User,
    ) -> Result<(), DivvyError> {
        info!(
            "Transferring ownership of group {} from {} to {}",
            group_id, transferred_by.id, new_owner.id
        );
        let mut group = self
            .validate_group_and_owner(group_id, &transferred_by.id)
            .await?;
        if !group.is_member(&new_owner.id) {
            return Err(DivvyError::NotGroupMember(new_owner.id.clone()));
        }

        for member in &mut group.members {
            member.role = if member.user.id == new_owner.id {
                Role::Owner
            } else {
                Role::Member
            };
        }
        self.storage.save_group(group).await?;

        self.log_and_audit(
            Some(group_id),
            OWNERSHIP_TRANSFERRED,
            json!({ "group_id": group_id, "new_owner_id": &new_owner.id }),
            Some(transferred_by.id.as_str()),
        )
        .await?;
        Ok(())
    }

    pub async fn get_group(&self, group_id: &str, queried_by: &User) -> Result<Group, DivvyError> {
        self.validate_group_membership(group_id, &queried_by.id).await
    }

    // EXPENSES

    #[allow(clippy::too_many_arguments)]
    pub async fn add_expense(
        &self,
        group_id: &str,
        description: String,
        amount: f64,
        category: &str,
        date: Option<DateTime<Utc>>,
        payer_id: &str,
        split_type: SplitType,
        shares: Vec<SplitShare>,
        created_by: &User,
    ) -> Result<Expense, DivvyError> {
        info!(
            "Adding expense of {} to group {} by user {}",
            amount, group_id, created_by.id
        );
        self.validate_string_input("description", &description, MAX_DESCRIPTION_LENGTH)?;
        self.validate_amount("amount", amount)?;
        let category = ExpenseCategory::from_str(category)?;

        let group = self.validate_group_membership(group_id, &created_by.id).await?;
        if !group.is_member(payer_id) {
            return Err(DivvyError::NotGroupMember(payer_id.to_string()));
        }

        let splits = Self::compute_splits(amount, split_type, &shares)?;
        for split in &splits {
            if !group.is_member(&split.user_id) {
                return Err(DivvyError::InvalidSplitUser(split.user_id.clone()));
            }
        }

        let now = Utc::now();
        let expense = Expense {
            id: Uuid::new_v4().to_string(),
            group_id: group_id.to_string(),
            description,
            amount,
            category,
            date: date.unwrap_or(now),
            payer_id: payer_id.to_string(),
            created_by: created_by.id.clone(),
            splits,
            reversed: false,
            created_at: now,
        };
        self.storage.save_expense(expense.clone()).await?;
        self.cache.invalidate_group(group_id).await?;
        debug!("Expense created with ID: {}", expense.id);

        self.log_and_audit(
            Some(group_id),
            EXPENSE_ADDED,
            json!({ "expense_id": &expense.id, "group_id": group_id, "amount": amount }),
            Some(created_by.id.as_str()),
        )
        .await?;

        Ok(expense)
    }

    /// Turns client-submitted shares into concrete per-user amounts, checking
    /// that they reconcile with the expense amount within the currency
    /// tolerance (percentages must sum to 100).
    fn compute_splits(
        amount: f64,
        split_type: SplitType,
        shares: &[SplitShare],
    ) -> Result<Vec<ExpenseSplit>, DivvyError> {
        if shares.is_empty() {
            return Err(DivvyError::InvalidSplit);
        }

        let splits = match split_type {
            SplitType::Equal => {
                let share = amount / shares.len() as f64;
                shares
                    .iter()
                    .map(|s| ExpenseSplit {
                        user_id: s.user_id.clone(),
                        amount_owed: share,
                    })
                    .collect()
            }
            SplitType::Unequal => {
                let mut splits = Vec::with_capacity(shares.len());
                let mut total = 0.0;
                for share in shares {
                    let owed = share.amount.ok_or(DivvyError::InvalidSplit)?;
                    total += owed;
                    splits.push(ExpenseSplit {
                        user_id: share.user_id.clone(),
                        amount_owed: owed,
                    });
                }
                if (total - amount).abs() > CURRENCY_EPSILON {
                    warn!("Unequal splits sum {} does not match amount {}", total, amount);
                    return Err(DivvyError::InvalidSplit);
                }
                splits
            }
            SplitType::Percentage => {
                let mut splits = Vec::with_capacity(shares.len());
                let mut total = 0.0;
                for share in shares {
                    let percentage = share.percentage.ok_or(DivvyError::InvalidSplit)?;
                    total += percentage;
                    splits.push(ExpenseSplit {
                        user_id: share.user_id.clone(),
                        amount_owed: amount * percentage / 100.0,
                    });
                }
                if (total - 100.0).abs() > CURRENCY_EPSILON {
                    warn!("Percentages sum to {} instead of 100", total);
                    return Err(DivvyError::InvalidSplit);
                }
                splits
            }
        };
        Ok(splits)
    }

    pub async fn reverse_expense(
        &self,
        expense_id: &str,
        reversed_by: &User,
    ) -> Result<Expense, DivvyError> {
        info!("Reversing expense {} by user {}", expense_id, reversed_by.id);
        let mut expense = self
            .storage
            .get_expense(expense_id)
            .await?
            .ok_or_else(|| DivvyError::ExpenseNotFound(expense_id.to_string()))?;
        self.validate_group_membership(&expense.group_id, &reversed_by.id)
            .await?;
        if expense.reversed {
            return Err(DivvyError::ExpenseAlreadyReversed(expense_id.to_string()));
        }

        expense.reversed = true;
        self.storage.save_expense(expense.clone()).await?;
        self.cache.invalidate_group(&expense.group_id).await?;

        self.log_and_audit(
            Some(expense.group_id.as_str()),
            EXPENSE_REVERSED,
            json!({ "expense_id": &expense.id, "group_id": &expense.group_id }),
            Some(reversed_by.id.as_str()),
        )
        .await?;

        Ok(expense)
    }

    pub async fn list_group_expenses(
        &self,
        group_id: &str,
        category: Option<&str>,
        queried_by: &User,
    ) -> Result<Vec<Expense>, DivvyError> {
        self.validate_group_membership(group_id, &queried_by.id).await?;
        let category = category.map(ExpenseCategory::from_str).transpose()?;

        let mut expenses: Vec<Expense> = self
            .storage
            .get_expenses_by_group(group_id)
            .await?
            .into_iter()
            .filter(|e| !e.reversed)
            .filter(|e| category.is_none_or(|c| e.category == c))
            .collect();
        expenses.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(expenses)
    }

    // SETTLEMENTS

    pub async fn create_settlement(
        &self,
        group_id: Option<&str>,
        receiver_id: &str,
        amount: f64,
        date: Option<DateTime<Utc>>,
        payer: &User,
    ) -> Result<Settlement, DivvyError> {
        info!(
            "Creating settlement of {} from {} to {}",
            amount, payer.id, receiver_id
        );
        if receiver_id == payer.id {
            return Err(DivvyError::SelfSettlement);
        }
        if !amount.is_finite() || amount <= 0.0 {
            return Err(DivvyError::InvalidSettlementAmount);
        }
        if self.storage.get_user(receiver_id).await?.is_none() {
            return Err(DivvyError::UserNotFound(receiver_id.to_string()));
        }
        if let Some(gid) = group_id {
            self.validate_group_membership(gid, &payer.id).await?;
        }

        let now = Utc::now();
        let settlement = Settlement {
            id: Uuid::new_v4().to_string(),
            group_id: group_id.map(String::from),
            payer_id: payer.id.clone(),
            receiver_id: receiver_id.to_string(),
            amount,
            date: date.unwrap_or(now),
            created_at: now,
        };
        self.storage.save_settlement(settlement.clone()).await?;
        if let Some(gid) = group_id {
            self.cache.invalidate_group(gid).await?;
        }

        self.log_and_audit(
            group_id,
            SETTLEMENT_CREATED,
            json!({ "settlement_id": &settlement.id, "amount": amount }),
            Some(payer.id.as_str()),
        )
        .await?;

        Ok(settlement)
    }

    pub async fn list_settlements(
        &self,
        user: &User,
        group_id: Option<&str>,
    ) -> Result<Vec<Settlement>, DivvyError> {
        let mut settlements = self
            .storage
            .get_settlements_for_user(&user.id, group_id)
            .await?;
        settlements.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(settlements)
    }

    // BALANCES & DEBT SIMPLIFICATION

    /// Effective (non-reversed) expenses of a group plus a name lookup for
    /// its current members: the explicitly-scoped input the pure
    /// aggregation pass runs over.
    async fn effective_expenses(
        &self,
        group: &Group,
    ) -> Result<(Vec<Expense>, HashMap<String, String>), DivvyError> {
        let expenses: Vec<Expense> = self
            .storage
            .get_expenses_by_group(&group.id)
            .await?
            .into_iter()
            .filter(|e| !e.reversed)
            .collect();
        let names = group
            .members
            .iter()
            .map(|m| (m.user.id.clone(), m.user.name.clone()))
            .collect();
        Ok((expenses, names))
    }

    pub async fn group_balances(
        &self,
        group_id: &str,
        queried_by: &User,
    ) -> Result<Vec<BalanceEntry>, DivvyError> {
        debug!("Calculating balances for group {}", group_id);
        let group = self.validate_group_membership(group_id, &queried_by.id).await?;
        let (expenses, names) = self.effective_expenses(&group).await?;
        let balances = participant_balances(&expenses, &names);

        self.logging
            .log_action(
                BALANCES_QUERIED,
                json!({ "group_id": group_id }),
                Some(queried_by.id.as_str()),
            )
            .await?;
        Ok(balances)
    }

    pub async fn simplified_debts(
        &self,
        group_id: &str,
        queried_by: &User,
    ) -> Result<SimplifiedDebts, DivvyError> {
        let group = self.validate_group_membership(group_id, &queried_by.id).await?;

        if let Some(cached) = self.cache.get_simplified_debts(group_id).await? {
            debug!("Serving simplified debts for group {} from cache", group_id);
            return Ok(cached);
        }

        let (expenses, names) = self.effective_expenses(&group).await?;
        let balances = participant_balances(&expenses, &names);
        let simplified = simplify_debts(&balances);
        let debts = SimplifiedDebts {
            balances,
            simplified,
        };

        self.cache
            .save_simplified_debts(
                group_id,
                &debts,
                Duration::from_secs(CONFIG.balance_cache_ttl_secs),
            )
            .await?;
        self.logging
            .log_action(
                DEBTS_SIMPLIFIED,
                json!({ "group_id": group_id, "transaction_count": debts.simplified.len() }),
                Some(queried_by.id.as_str()),
            )
            .await?;
        Ok(debts)
    }

    // AUDIT

    pub async fn get_app_logs(&self) -> Result<Vec<crate::core::models::AppLog>, DivvyError> {
        self.logging.get_logs().await
    }

    pub async fn get_group_audits(
        &self,
        group_id: &str,
        queried_by: &User,
    ) -> Result<Vec<GroupAudit>, DivvyError> {
        self.validate_group_membership(group_id, &queried_by.id).await?;
        self.storage.get_group_audits(group_id).await
    }
}
