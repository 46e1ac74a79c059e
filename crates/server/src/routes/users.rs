use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use rust_decimal::Decimal;
use serde::Serialize;
use uuid::Uuid;

use service::users::domain::{LoginInput, RegisterInput, User};

use crate::errors::JsonApiError;
use crate::routes::USER_NOT_FOUND_FOR_ID;
use crate::state::ServerState;

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct BalanceOutput {
    pub user_id: Uuid,
    pub balance: Decimal,
}

#[utoipa::path(post, path = "/api/users", tag = "users", request_body = crate::openapi::RegisterRequest, responses((status = 201, description = "Registered", body = crate::openapi::UserDoc), (status = 400, description = "Email already registered")))]
pub async fn register(
    State(state): State<ServerState>,
    Json(input): Json<RegisterInput>,
) -> Result<(StatusCode, Json<User>), JsonApiError> {
    let user = state.users.register_user(input).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

#[utoipa::path(post, path = "/api/users/authenticate", tag = "users", request_body = crate::openapi::LoginRequest, responses((status = 200, description = "Authenticated", body = crate::openapi::UserDoc), (status = 400, description = "Unknown email or wrong password")))]
pub async fn authenticate(
    State(state): State<ServerState>,
    Json(input): Json<LoginInput>,
) -> Result<Json<User>, JsonApiError> {
    let user = state.users.authenticate(&input.email, &input.password).await?;
    Ok(Json(user))
}

#[utoipa::path(get, path = "/api/users/{id}/balance", tag = "users", params(("id" = Uuid, Path, description = "User id")), responses((status = 200, description = "Settled income minus settled expense", body = BalanceOutput), (status = 404, description = "User not found")))]
pub async fn balance(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
) -> Result<Json<BalanceOutput>, JsonApiError> {
    if state.users.find_by_id(id).await?.is_none() {
        return Err(JsonApiError::not_found(USER_NOT_FOUND_FOR_ID));
    }
    let balance = state.entries.balance_for_user(id).await?;
    Ok(Json(BalanceOutput { user_id: id, balance }))
}
