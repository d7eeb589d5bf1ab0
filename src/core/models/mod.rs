pub mod audit;
pub mod expense;
pub mod group;
pub mod settlement;
pub mod user;

pub use audit::{AppLog, GroupAudit};
pub use expense::{Expense, ExpenseCategory, ExpenseSplit, SplitShare, SplitType};
pub use group::{Group, GroupMember, Role};
pub use settlement::Settlement;
pub use user::User;
