use crate::core::errors::DivvyError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use utoipa::ToSchema;

#[derive(Clone, Copy, Debug, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub enum ExpenseCategory {
    #[serde(rename = "Food & Dining")]
    FoodAndDining,
    Transportation,
    Shopping,
    Entertainment,
    Utilities,
    Rent,
    Other,
}

impl FromStr for ExpenseCategory {
    type Err = DivvyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Food & Dining" => Ok(ExpenseCategory::FoodAndDining),
            "Transportation" => Ok(ExpenseCategory::Transportation),
            "Shopping" => Ok(ExpenseCategory::Shopping),
            "Entertainment" => Ok(ExpenseCategory::Entertainment),
            "Utilities" => Ok(ExpenseCategory::Utilities),
            "Rent" => Ok(ExpenseCategory::Rent),
            "Other" => Ok(ExpenseCategory::Other),
            other => Err(DivvyError::InvalidCategory(other.to_string())),
        }
    }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SplitType {
    Equal,
    Unequal,
    Percentage,
}

/// Per-user share as submitted by the client. `amount` is read for unequal
/// splits, `percentage` for percentage splits; equal splits only need the
/// user ids.
#[derive(Clone, Debug, Deserialize, ToSchema)]
pub struct SplitShare {
    pub user_id: String,
    pub amount: Option<f64>,
    pub percentage: Option<f64>,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct ExpenseSplit {
    pub user_id: String,
    pub amount_owed: f64,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct Expense {
    pub id: String,
    pub group_id: String,
    pub description: String,
    pub amount: f64,
    pub category: ExpenseCategory,
    #[schema(value_type = String, example = "2024-06-01T12:34:56Z")]
    pub date: DateTime<Utc>,
    pub payer_id: String,
    pub created_by: String,
    pub splits: Vec<ExpenseSplit>,
    pub reversed: bool,
    #[schema(value_type = String, example = "2024-06-01T12:34:56Z")]
    pub created_at: DateTime<Utc>,
}

impl Expense {
    /// Split recorded for `user_id`, if the user participates in this expense.
    pub fn split_for(&self, user_id: &str) -> Option<&ExpenseSplit> {
        self.splits.iter().find(|s| s.user_id == user_id)
    }
}
