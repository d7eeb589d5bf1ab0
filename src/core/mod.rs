pub mod debts;
pub mod errors;
pub mod models;
pub mod services;
