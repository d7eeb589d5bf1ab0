use crate::{
    api::models::*,
    auth::jwt::Claims,
    core::{
        debts::BalanceEntry,
        errors::DivvyError,
        models::{AppLog, Expense, Group, GroupAudit, Settlement, User},
        services::{DivvyService, SimplifiedDebts},
    },
    infrastructure::{
        cache::in_memory::InMemoryCache, logging::in_memory::InMemoryLogging,
        storage::in_memory::InMemoryStorage,
    },
};
use axum::{
    Extension, Json, Router,
    extract::{Path, Query, Request, State},
    http::StatusCode,
    middleware::{self, Next},
    response::IntoResponse,
};
use http::header;
use std::sync::Arc;

type AppService = Arc<DivvyService<InMemoryLogging, InMemoryStorage, InMemoryCache>>;

// Middleware to validate JWT
async fn auth_middleware(
    State(service): State<AppService>,
    mut req: Request<axum::body::Body>,
    next: Next,
) -> Result<impl IntoResponse, ApiError> {
    let auth_header = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| DivvyError::Unauthorized("Missing Authorization header".to_string()))?;

    let token = auth_header
        .strip_prefix("Bearer ")
        .ok_or_else(|| DivvyError::Unauthorized("Invalid Authorization header".to_string()))?;

    let claims = service.validate_token(token)?;
    req.extensions_mut().insert(claims);
    Ok(next.run(req).await)
}

/// Resolves the authenticated user behind the validated token.
async fn current_user(service: &AppService, claims: &Claims) -> Result<User, DivvyError> {
    service
        .get_user(&claims.sub)
        .await?
        .ok_or_else(|| DivvyError::UserNotFound(claims.sub.clone()))
}

// Define API routes
pub fn api_routes(service: AppService) -> Router {
    let protected_routes = Router::new()
        .route("/users/{user_id}", axum::routing::get(get_user))
        .route("/groups", axum::routing::post(create_group))
        .route("/groups/{group_id}", axum::routing::get(get_group))
        .route("/groups/{group_id}", axum::routing::delete(delete_group))
        .route("/groups/join", axum::routing::post(join_group_by_link))
        .route("/groups/{group_id}/members", axum::routing::post(add_member_to_group))
        .route(
            "/groups/{group_id}/members/email",
            axum::routing::post(add_member_by_email),
        )
        .route(
            "/groups/{group_id}/members/remove",
            axum::routing::post(remove_member_from_group),
        )
        .route(
            "/groups/{group_id}/join_link/revoke",
            axum::routing::post(revoke_join_link),
        )
        .route(
            "/groups/{group_id}/join_link/regenerate",
            axum::routing::post(regenerate_join_link),
        )
        .route("/groups/{group_id}/ownership", axum::routing::post(transfer_ownership))
        .route("/groups/{group_id}/expenses", axum::routing::get(list_group_expenses))
        .route("/groups/{group_id}/balances", axum::routing::get(group_balances))
        .route(
            "/groups/{group_id}/debts/simplified",
            axum::routing::get(simplified_debts),
        )
        .route("/groups/{group_id}/audits", axum::routing::get(get_group_audits))
        .route("/expenses", axum::routing::post(add_expense))
        .route("/expenses/{expense_id}/reverse", axum::routing::post(reverse_expense))
        .route("/settlements", axum::routing::post(create_settlement))
        .route("/settlements", axum::routing::get(list_settlements))
        .route("/logs", axum::routing::get(get_app_logs))
        .route_layer(middleware::from_fn_with_state(service.clone(), auth_middleware));

    Router::new()
        .route("/login", axum::routing::post(login))
        .route("/users", axum::routing::post(register)) // Unprotected
        .merge(protected_routes)
        .with_state(service)
}

#[utoipa::path(
    post,
    path = "/api/users",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "User registered", body = User),
        (status = 400, description = "Invalid input", body = ErrorResponse),
        (status = 409, description = "Email already registered", body = ErrorResponse)
    )
)]
pub(crate) async fn register(
    State(service): State<AppService>,
    Json(req): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<User>), ApiError> {
    let user = service
        .register_user(req.name, req.email, &req.password)
        .await?;
    Ok((StatusCode::CREATED, Json(user)))
}

#[utoipa::path(
    post,
    path = "/api/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = LoginResponse),
        (status = 401, description = "Invalid credentials", body = ErrorResponse)
    )
)]
pub(crate) async fn login(
    State(service): State<AppService>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let token = service.authenticate(&req.email, &req.password).await?;
    Ok(Json(LoginResponse { token }))
}

#[utoipa::path(
    get,
    path = "/api/users/{user_id}",
    responses(
        (status = 200, description = "User found", body = User),
        (status = 404, description = "User not found", body = ErrorResponse)
    )
)]
pub(crate) async fn get_user(
    State(service): State<AppService>,
    Path(user_id): Path<String>,
) -> Result<Json<User>, ApiError> {
    let user = service
        .get_user(&user_id)
        .await?
        .ok_or(DivvyError::UserNotFound(user_id))?;
    Ok(Json(user))
}

#[utoipa::path(
    post,
    path = "/api/groups",
    request_body = CreateGroupRequest,
    responses(
        (status = 200, description = "Group created", body = Group),
        (status = 404, description = "Member not found", body = ErrorResponse)
    )
)]
pub(crate) async fn create_group(
    State(service): State<AppService>,
    Extension(claims): Extension<Claims>,
    Json(req): Json<CreateGroupRequest>,
) -> Result<Json<Group>, ApiError> {
    let created_by = current_user(&service, &claims).await?;
    let members = req
        .member_ids
        .into_iter()
        .map(|id| async {
            service
                .get_user(&id)
                .await?
                .ok_or(DivvyError::UserNotFound(id))
        })
        .collect::<Vec<_>>();
    let members = futures::future::try_join_all(members).await?;
    let group = service.create_group(req.name, members, &created_by).await?;
    Ok(Json(group))
}

#[utoipa::path(
    get,
    path = "/api/groups/{group_id}",
    responses(
        (status = 200, description = "Group found", body = Group),
        (status = 403, description = "Not a member", body = ErrorResponse)
    )
)]
pub(crate) async fn get_group(
    State(service): State<AppService>,
    Extension(claims): Extension<Claims>,
    Path(group_id): Path<String>,
) -> Result<Json<Group>, ApiError> {
    let user = current_user(&service, &claims).await?;
    let group = service.get_group(&group_id, &user).await?;
    Ok(Json(group))
}

#[utoipa::path(
    delete,
    path = "/api/groups/{group_id}",
    responses(
        (status = 200, description = "Group deleted"),
        (status = 403, description = "Not group owner", body = ErrorResponse)
    )
)]
pub(crate) async fn delete_group(
    State(service): State<AppService>,
    Extension(claims): Extension<Claims>,
    Path(group_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let user = current_user(&service, &claims).await?;
    service.delete_group(&group_id, &user).await?;
    Ok(StatusCode::OK)
}

#[utoipa::path(
    post,
    path = "/api/groups/join",
    request_body = JoinGroupRequest,
    responses(
        (status = 200, description = "Joined group", body = Group),
        (status = 404, description = "Join link not found", body = ErrorResponse)
    )
)]
pub(crate) async fn join_group_by_link(
    State(service): State<AppService>,
    Extension(claims): Extension<Claims>,
    Json(req): Json<JoinGroupRequest>,
) -> Result<Json<Group>, ApiError> {
    let user = current_user(&service, &claims).await?;
    let group = service.join_group_by_link(&req.join_link, &user).await?;
    Ok(Json(group))
}

#[utoipa::path(
    post,
    path = "/api/groups/{group_id}/members",
    request_body = AddMemberRequest,
    responses(
        (status = 200, description = "Member added"),
        (status = 409, description = "Already a member", body = ErrorResponse)
    )
)]
pub(crate) async fn add_member_to_group(
    State(service): State<AppService>,
    Extension(claims): Extension<Claims>,
    Path(group_id): Path<String>,
    Json(req): Json<AddMemberRequest>,
) -> Result<StatusCode, ApiError> {
    let added_by = current_user(&service, &claims).await?;
    let user = service
        .get_user(&req.user_id)
        .await?
        .ok_or(DivvyError::UserNotFound(req.user_id))?;
    service.add_member_to_group(&group_id, user, &added_by).await?;
    Ok(StatusCode::OK)
}

#[utoipa::path(
    post,
    path = "/api/groups/{group_id}/members/email",
    request_body = AddMemberByEmailRequest,
    responses(
        (status = 200, description = "Member added"),
        (status = 404, description = "User not found", body = ErrorResponse)
    )
)]
pub(crate) async fn add_member_by_email(
    State(service): State<AppService>,
    Extension(claims): Extension<Claims>,
    Path(group_id): Path<String>,
    Json(req): Json<AddMemberByEmailRequest>,
) -> Result<StatusCode, ApiError> {
    let added_by = current_user(&service, &claims).await?;
    service
        .add_member_by_email(&group_id, &req.email, &added_by)
        .await?;
    Ok(StatusCode::OK)
}

#[utoipa::path(
    post,
    path = "/api/groups/{group_id}/members/remove",
    request_body = RemoveMemberRequest,
    responses(
        (status = 200, description = "Member removed"),
        (status = 403, description = "Not group owner", body = ErrorResponse)
    )
)]
pub(crate) async fn remove_member_from_group(
    State(service): State<AppService>,
    Extension(claims): Extension<Claims>,
    Path(group_id): Path<String>,
    Json(req): Json<RemoveMemberRequest>,
) -> Result<StatusCode, ApiError> {
    let removed_by = current_user(&service, &claims).await?;
    service
        .remove_member_from_group(&group_id, &req.user_id, &removed_by)
        .await?;
    Ok(StatusCode::OK)
}

#[utoipa::path(
    post,
    path = "/api/groups/{group_id}/join_link/revoke",
    responses(
        (status = 200, description = "Join link revoked"),
        (status = 403, description = "Not group owner", body = ErrorResponse)
    )
)]
pub(crate) async fn revoke_join_link(
    State(service): State<AppService>,
    Extension(claims): Extension<Claims>,
    Path(group_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let revoked_by = current_user(&service, &claims).await?;
    service.revoke_join_link(&group_id, &revoked_by).await?;
    Ok(StatusCode::OK)
}

#[utoipa::path(
    post,
    path = "/api/groups/{group_id}/join_link/regenerate",
    responses(
        (status = 200, description = "New join link", body = String),
        (status = 403, description = "Not group owner", body = ErrorResponse)
    )
)]
pub(crate) async fn regenerate_join_link(
    State(service): State<AppService>,
    Extension(claims): Extension<Claims>,
    Path(group_id): Path<String>,
) -> Result<Json<String>, ApiError> {
    let regenerated_by = current_user(&service, &claims).await?;
    let link = service
        .regenerate_join_link(&group_id, &regenerated_by)
        .await?;
    Ok(Json(link))
}

#[utoipa::path(
    post,
    path = "/api/groups/{group_id}/ownership",
    request_body = TransferOwnershipRequest,
    responses(
        (status = 200, description = "Ownership transferred"),
        (status = 403, description = "Not group owner", body = ErrorResponse)
    )
)]
pub(crate) async fn transfer_ownership(
    State(service): State<AppService>,
    Extension(claims): Extension<Claims>,
    Path(group_id): Path<String>,
    Json(req): Json<TransferOwnershipRequest>,
) -> Result<StatusCode, ApiError> {
    let transferred_by = current_user(&service, &claims).await?;
    let new_owner = service
        .get_user(&req.new_owner_id)
        .await?
        .ok_or(DivvyError::UserNotFound(req.new_owner_id))?;
    service
        .transfer_ownership(&group_id, &new_owner, &transferred_by)
        .await?;
    Ok(StatusCode::OK)
}

#[utoipa::path(
    post,
    path = "/api/expenses",
    request_body = AddExpenseRequest,
    responses(
        (status = 200, description = "Expense recorded", body = Expense),
        (status = 400, description = "Invalid split", body = ErrorResponse)
    )
)]
pub(crate) async fn add_expense(
    State(service): State<AppService>,
    Extension(claims): Extension<Claims>,
    Json(req): Json<AddExpenseRequest>,
) -> Result<Json<Expense>, ApiError> {
    let created_by = current_user(&service, &claims).await?;
    let expense = service
        .add_expense(
            &req.group_id,
            req.description,
            req.amount,
            &req.category,
            req.date,
            &req.payer_id,
            req.split_type,
            req.splits,
            &created_by,
        )
        .await?;
    Ok(Json(expense))
}

#[utoipa::path(
    post,
    path = "/api/expenses/{expense_id}/reverse",
    responses(
        (status = 200, description = "Expense reversed", body = Expense),
        (status = 409, description = "Already reversed", body = ErrorResponse)
    )
)]
pub(crate) async fn reverse_expense(
    State(service): State<AppService>,
    Extension(claims): Extension<Claims>,
    Path(expense_id): Path<String>,
) -> Result<Json<Expense>, ApiError> {
    let reversed_by = current_user(&service, &claims).await?;
    let expense = service.reverse_expense(&expense_id, &reversed_by).await?;
    Ok(Json(expense))
}

#[utoipa::path(
    get,
    path = "/api/groups/{group_id}/expenses",
    responses(
        (status = 200, description = "Group expenses, newest first", body = [Expense]),
        (status = 403, description = "Not a member", body = ErrorResponse)
    )
)]
pub(crate) async fn list_group_expenses(
    State(service): State<AppService>,
    Extension(claims): Extension<Claims>,
    Path(group_id): Path<String>,
    Query(query): Query<ExpensesQuery>,
) -> Result<Json<Vec<Expense>>, ApiError> {
    let user = current_user(&service, &claims).await?;
    let expenses = service
        .list_group_expenses(&group_id, query.category.as_deref(), &user)
        .await?;
    Ok(Json(expenses))
}

#[utoipa::path(
    post,
    path = "/api/settlements",
    request_body = CreateSettlementRequest,
    responses(
        (status = 201, description = "Settlement recorded", body = Settlement),
        (status = 400, description = "Invalid settlement", body = ErrorResponse)
    )
)]
pub(crate) async fn create_settlement(
    State(service): State<AppService>,
    Extension(claims): Extension<Claims>,
    Json(req): Json<CreateSettlementRequest>,
) -> Result<(StatusCode, Json<Settlement>), ApiError> {
    let payer = current_user(&service, &claims).await?;
    let settlement = service
        .create_settlement(
            req.group_id.as_deref(),
            &req.receiver_id,
            req.amount,
            req.date,
            &payer,
        )
        .await?;
    Ok((StatusCode::CREATED, Json(settlement)))
}

#[utoipa::path(
    get,
    path = "/api/settlements",
    responses(
        (status = 200, description = "Settlements involving the caller, newest first", body = [Settlement])
    )
)]
pub(crate) async fn list_settlements(
    State(service): State<AppService>,
    Extension(claims): Extension<Claims>,
    Query(query): Query<SettlementsQuery>,
) -> Result<Json<Vec<Settlement>>, ApiError> {
    let user = current_user(&service, &claims).await?;
    let settlements = service
        .list_settlements(&user, query.group_id.as_deref())
        .await?;
    Ok(Json(settlements))
}

#[utoipa::path(
    get,
    path = "/api/groups/{group_id}/balances",
    responses(
        (status = 200, description = "Net balances of group members", body = [BalanceEntry]),
        (status = 403, description = "Not a member", body = ErrorResponse)
    )
)]
pub(crate) async fn group_balances(
    State(service): State<AppService>,
    Extension(claims): Extension<Claims>,
    Path(group_id): Path<String>,
) -> Result<Json<Vec<BalanceEntry>>, ApiError> {
    let user = current_user(&service, &claims).await?;
    let balances = service.group_balances(&group_id, &user).await?;
    Ok(Json(balances))
}

#[utoipa::path(
    get,
    path = "/api/groups/{group_id}/debts/simplified",
    responses(
        (status = 200, description = "Minimal settlement plan for the group", body = SimplifiedDebts),
        (status = 403, description = "Not a member", body = ErrorResponse)
    )
)]
pub(crate) async fn simplified_debts(
    State(service): State<AppService>,
    Extension(claims): Extension<Claims>,
    Path(group_id): Path<String>,
) -> Result<Json<SimplifiedDebts>, ApiError> {
    let user = current_user(&service, &claims).await?;
    let debts = service.simplified_debts(&group_id, &user).await?;
    Ok(Json(debts))
}

#[utoipa::path(
    get,
    path = "/api/groups/{group_id}/audits",
    responses(
        (status = 200, description = "Group audit trail", body = [GroupAudit]),
        (status = 403, description = "Not a member", body = ErrorResponse)
    )
)]
pub(crate) async fn get_group_audits(
    State(service): State<AppService>,
    Extension(claims): Extension<Claims>,
    Path(group_id): Path<String>,
) -> Result<Json<Vec<GroupAudit>>, ApiError> {
    let user = current_user(&service, &claims).await?;
    let audits = service.get_group_audits(&group_id, &user).await?;
    Ok(Json(audits))
}

#[utoipa::path(
    get,
    path = "/api/logs",
    responses((status = 200, description = "Application logs", body = [AppLog]))
)]
pub(crate) async fn get_app_logs(
    State(service): State<AppService>,
) -> Result<Json<Vec<AppLog>>, ApiError> {
    let logs = service.get_app_logs().await?;
    Ok(Json(logs))
}
