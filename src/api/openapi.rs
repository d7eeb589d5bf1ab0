use utoipa::OpenApi;

use crate::{
    api::models::{
        AddExpenseRequest, AddMemberByEmailRequest, AddMemberRequest, CreateGroupRequest,
        CreateSettlementRequest, ErrorResponse, JoinGroupRequest, LoginRequest, LoginResponse,
        RegisterRequest, RemoveMemberRequest, TransferOwnershipRequest,
    },
    core::{
        debts::{BalanceEntry, SettlementTransaction},
        models::{AppLog, Expense, Group, GroupAudit, Settlement, User},
        services::SimplifiedDebts,
    },
};

#[derive(OpenApi)]
#[openapi(
    paths(
        super::handlers::register,
        super::handlers::login,
        super::handlers::get_user,
        super::handlers::create_group,
        super::handlers::get_group,
        super::handlers::delete_group,
        super::handlers::join_group_by_link,
        super::handlers::add_member_to_group,
        super::handlers::add_member_by_email,
        super::handlers::remove_member_from_group,
        super::handlers::revoke_join_link,
        super::handlers::regenerate_join_link,
        super::handlers::transfer_ownership,
        super::handlers::add_expense,
        super::handlers::reverse_expense,
        super::handlers::list_group_expenses,
        super::handlers::create_settlement,
        super::handlers::list_settlements,
        super::handlers::group_balances,
        super::handlers::simplified_debts,
        super::handlers::get_group_audits,
        super::handlers::get_app_logs
    ),
    components(schemas(
        RegisterRequest,
        LoginRequest,
        LoginResponse,
        CreateGroupRequest,
        AddMemberRequest,
        AddMemberByEmailRequest,
        RemoveMemberRequest,
        JoinGroupRequest,
        TransferOwnershipRequest,
        AddExpenseRequest,
        CreateSettlementRequest,
        ErrorResponse,
        User,
        Group,
        Expense,
        Settlement,
        AppLog,
        GroupAudit,
        BalanceEntry,
        SettlementTransaction,
        SimplifiedDebts
    )),
    info(
        title = "Divvy API",
        description = "API for managing group expenses and settling who owes whom",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;
