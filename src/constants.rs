/// Currency rounding tolerance in major units (two-decimal currencies).
/// Split validation and debt settlement both treat differences at or below
/// this as noise.
pub const CURRENCY_EPSILON: f64 = 0.01;

pub const MAX_NAME_LENGTH: usize = 100;
pub const MAX_DESCRIPTION_LENGTH: usize = 500;

// Audit action names
pub const USER_REGISTERED: &str = "user_registered";
pub const USER_LOGGED_IN: &str = "user_logged_in";
pub const GROUP_CREATED: &str = "group_created";
pub const GROUP_DELETED: &str = "group_deleted";
pub const MEMBER_ADDED: &str = "member_added";
pub const MEMBER_JOINED: &str = "member_joined";
pub const MEMBER_REMOVED: &str = "member_removed";
pub const JOIN_LINK_REVOKED: &str = "join_link_revoked";
pub const JOIN_LINK_REGENERATED: &str = "join_link_regenerated";
pub const OWNERSHIP_TRANSFERRED: &str = "ownership_transferred";
pub const EXPENSE_ADDED: &str = "expense_added";
pub const EXPENSE_REVERSED: &str = "expense_reversed";
pub const SETTLEMENT_CREATED: &str = "settlement_created";
pub const BALANCES_QUERIED: &str = "balances_queried";
pub const DEBTS_SIMPLIFIED: &str = "debts_simplified";
