pub mod api;
pub mod auth;
pub mod config;
pub mod constants;
pub mod core;
pub mod infrastructure;

pub use crate::core::debts::{
    BalanceEntry, OwedShare, PaidExpense, SettlementTransaction, net_balance,
    participant_balances, simplify_debts,
};
pub use crate::core::errors::DivvyError;
pub use crate::core::services::{DivvyService, SimplifiedDebts};

#[cfg(test)]
mod tests; // Include integration tests
