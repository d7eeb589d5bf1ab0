use axum::{Json, http::StatusCode, response::IntoResponse};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::core::errors::DivvyError;
use crate::core::models::{SplitShare, SplitType};

// Request structs for JSON payloads
#[derive(Deserialize, ToSchema)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Deserialize, ToSchema)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Serialize, ToSchema)]
pub struct LoginResponse {
    pub token: String,
}

#[derive(Deserialize, ToSchema)]
pub struct CreateGroupRequest {
    pub name: String,
    pub member_ids: Vec<String>,
}

#[derive(Deserialize, ToSchema)]
pub struct AddMemberRequest {
    pub user_id: String,
}

#[derive(Deserialize, ToSchema)]
pub struct AddMemberByEmailRequest {
    pub email: String,
}

#[derive(Deserialize, ToSchema)]
pub struct RemoveMemberRequest {
    pub user_id: String,
}

#[derive(Deserialize, ToSchema)]
pub struct JoinGroupRequest {
    pub join_link: String,
}

#[derive(Deserialize, ToSchema)]
pub struct TransferOwnershipRequest {
    pub new_owner_id: String,
}

#[derive(Deserialize, ToSchema)]
pub struct AddExpenseRequest {
    pub group_id: String,
    pub description: String,
    pub amount: f64,
    pub category: String,
    #[schema(value_type = Option<String>, example = "2024-06-01T12:34:56Z")]
    pub date: Option<DateTime<Utc>>,
    pub payer_id: String,
    pub split_type: SplitType,
    pub splits: Vec<SplitShare>,
}

#[derive(Deserialize, ToSchema)]
pub struct CreateSettlementRequest {
    pub group_id: Option<String>,
    pub receiver_id: String,
    pub amount: f64,
    #[schema(value_type = Option<String>, example = "2024-06-01T12:34:56Z")]
    pub date: Option<DateTime<Utc>>,
}

#[derive(Deserialize, ToSchema)]
pub struct SettlementsQuery {
    pub group_id: Option<String>,
}

#[derive(Deserialize, ToSchema)]
pub struct ExpensesQuery {
    pub category: Option<String>,
}

// Error response struct
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

// Newtype wrapper for DivvyError to implement IntoResponse
pub struct ApiError(pub DivvyError);

impl From<DivvyError> for ApiError {
    fn from(err: DivvyError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = match &self.0 {
            DivvyError::InvalidEmail(_)
            | DivvyError::InvalidInput(_, _)
            | DivvyError::InvalidCategory(_)
            | DivvyError::InvalidSplit
            | DivvyError::InvalidSplitUser(_)
            | DivvyError::InvalidSettlementAmount
            | DivvyError::SelfSettlement
            | DivvyError::CannotRemoveLastMember => StatusCode::BAD_REQUEST,
            DivvyError::InvalidCredentials | DivvyError::Unauthorized(_) => {
                StatusCode::UNAUTHORIZED
            }
            DivvyError::NotGroupMember(_)
            | DivvyError::NotGroupOwner(_)
            | DivvyError::OwnerCannotRemoveSelf => StatusCode::FORBIDDEN,
            DivvyError::UserNotFound(_)
            | DivvyError::GroupNotFound(_)
            | DivvyError::ExpenseNotFound(_)
            | DivvyError::JoinLinkNotFound => StatusCode::NOT_FOUND,
            DivvyError::EmailAlreadyRegistered(_)
            | DivvyError::AlreadyGroupMember(_)
            | DivvyError::ExpenseAlreadyReversed(_) => StatusCode::CONFLICT,
            DivvyError::InternalServerError(_)
            | DivvyError::StorageError(_)
            | DivvyError::LoggingError(_)
            | DivvyError::CacheError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        let body = Json(ErrorResponse {
            error: self.0.to_string(),
        });
        (status, body).into_response()
    }
}
