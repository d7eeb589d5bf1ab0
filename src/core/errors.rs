use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Serialize)]
pub struct FieldError {
    pub field: String,
    pub title: String,
    pub description: String,
}

#[derive(Error, Debug, Serialize)]
pub enum DivvyError {
    /// Email format is invalid
    #[error("Invalid email format: {0}")]
    InvalidEmail(String),

    /// Email is already registered
    #[error("Email {0} already registered")]
    EmailAlreadyRegistered(String),

    /// Login credentials do not match a registered user
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Missing or invalid bearer token
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// User with given ID not found
    #[error("User {0} not found")]
    UserNotFound(String),

    /// Group with given ID not found
    #[error("Group {0} not found")]
    GroupNotFound(String),

    /// User is already a member of the group
    #[error("User {0} is already a group member")]
    AlreadyGroupMember(String),

    /// User is not a member of the group
    #[error("User {0} is not a group member")]
    NotGroupMember(String),

    /// User is not the group owner
    #[error("User {0} is not group owner")]
    NotGroupOwner(String),

    /// Group owner cannot remove themselves
    #[error("Owner cannot remove themselves")]
    OwnerCannotRemoveSelf,

    /// Cannot remove the last member of a group
    #[error("Cannot remove last group member")]
    CannotRemoveLastMember,

    /// Join link is not valid or not found
    #[error("Join link not found")]
    JoinLinkNotFound,

    /// Expense with given ID not found
    #[error("Expense {0} not found")]
    ExpenseNotFound(String),

    /// Expense has already been reversed
    #[error("Expense {0} already reversed")]
    ExpenseAlreadyReversed(String),

    /// Expense category is not one of the supported categories
    #[error("Invalid expense category: {0}")]
    InvalidCategory(String),

    /// Split amounts don't add up correctly
    #[error("Invalid split amounts")]
    InvalidSplit,

    /// User specified in split is invalid
    #[error("Invalid split user: {0}")]
    InvalidSplitUser(String),

    /// Cannot create a settlement from a user to themselves
    #[error("Cannot create settlement to self")]
    SelfSettlement,

    /// Settlement amount must be positive
    #[error("Invalid settlement amount")]
    InvalidSettlementAmount,

    /// Generic input validation error with detailed field information
    #[error("Invalid input for field `{0}`: {1:?}")]
    InvalidInput(String, FieldError),

    /// Internal server error (e.g., unexpected failure)
    #[error("Internal server error: {0}")]
    InternalServerError(String),

    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("Logging error: {0}")]
    LoggingError(String),

    #[error("Cache error: {0}")]
    CacheError(String),
}
