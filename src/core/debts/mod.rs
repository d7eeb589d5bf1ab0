//! Debt settlement engine.
//!
//! Pure functions only: net-balance calculation, balance aggregation over a
//! scoped expense set, and greedy debt simplification. Nothing in this
//! module touches storage, logging, or the clock, and no input slice is
//! ever mutated in place.

pub mod balance;
pub mod simplify;

pub use balance::{BalanceEntry, OwedShare, PaidExpense, net_balance, participant_balances};
pub use simplify::{SettlementTransaction, simplify_debts};
