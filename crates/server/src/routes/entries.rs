use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use models::{EntryStatus, EntryType};
use rust_decimal::Decimal;
use serde::Deserialize;
use service::entries::FinancialEntry;
use service::errors::ServiceError;
use tracing::warn;
use uuid::Uuid;

use crate::errors::JsonApiError;
use crate::routes::USER_NOT_FOUND_FOR_ID;
use crate::state::ServerState;

pub const ENTRY_NOT_FOUND: &str = "Lançamento não encontrado na base de Dados.";
pub const INVALID_STATUS: &str =
    "Não foi possível atualizar o status do lançamento, envie um status válido.";

/// Entry payload for create and update. `type` and `status` are matched
/// case-insensitively.
#[derive(Debug, Default, Deserialize, utoipa::ToSchema)]
pub struct EntryInput {
    pub description: Option<String>,
    pub month: Option<i32>,
    pub year: Option<i32>,
    pub value: Option<Decimal>,
    /// Owning user id
    pub user: Option<Uuid>,
    #[serde(rename = "type")]
    pub entry_type: Option<String>,
    pub status: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct EntryQuery {
    pub user: Uuid,
    pub description: Option<String>,
    pub month: Option<i32>,
    pub year: Option<i32>,
    #[serde(rename = "type")]
    pub entry_type: Option<String>,
    pub status: Option<String>,
}

#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct StatusInput {
    pub status: String,
}

fn parse_opt<T>(raw: Option<&str>) -> Result<Option<T>, ServiceError>
where
    T: std::str::FromStr<Err = models::errors::ModelError>,
{
    raw.map(str::parse).transpose().map_err(ServiceError::from)
}

async fn ensure_user(state: &ServerState, user: Option<Uuid>) -> Result<(), JsonApiError> {
    if let Some(id) = user {
        if state.users.find_by_id(id).await?.is_none() {
            return Err(JsonApiError::bad_request(USER_NOT_FOUND_FOR_ID));
        }
    }
    Ok(())
}

async fn load_entry(state: &ServerState, id: Uuid) -> Result<FinancialEntry, JsonApiError> {
    state
        .entries
        .find_by_id(id)
        .await?
        .ok_or_else(|| JsonApiError::not_found(ENTRY_NOT_FOUND))
}

async fn to_entry(state: &ServerState, input: EntryInput) -> Result<FinancialEntry, JsonApiError> {
    ensure_user(state, input.user).await?;
    Ok(FinancialEntry {
        description: input.description,
        month: input.month,
        year: input.year,
        user_id: input.user,
        value: input.value,
        entry_type: parse_opt::<EntryType>(input.entry_type.as_deref())?,
        status: parse_opt::<EntryStatus>(input.status.as_deref())?,
        ..Default::default()
    })
}

#[utoipa::path(post, path = "/api/entries", tag = "entries", request_body = EntryInput, responses((status = 201, description = "Created", body = crate::openapi::EntryDoc), (status = 400, description = "Invalid entry or unknown user")))]
pub async fn create(
    State(state): State<ServerState>,
    Json(input): Json<EntryInput>,
) -> Result<(StatusCode, Json<FinancialEntry>), JsonApiError> {
    let entry = to_entry(&state, input).await?;
    let saved = state.entries.save(entry).await?;
    Ok((StatusCode::CREATED, Json(saved)))
}

#[utoipa::path(
    get,
    path = "/api/entries",
    tag = "entries",
    params(
        ("user" = Uuid, Query, description = "Owning user id"),
        ("description" = Option<String>, Query, description = "Exact description"),
        ("month" = Option<i32>, Query, description = "Month, 1 to 12"),
        ("year" = Option<i32>, Query, description = "Four digit year"),
        ("type" = Option<String>, Query, description = "INCOME or EXPENSE"),
        ("status" = Option<String>, Query, description = "PENDING, SETTLED or CANCELLED"),
    ),
    responses((status = 200, description = "Matching entries", body = [crate::openapi::EntryDoc]), (status = 400, description = "Unknown user"))
)]
pub async fn search(
    State(state): State<ServerState>,
    Query(q): Query<EntryQuery>,
) -> Result<Json<Vec<FinancialEntry>>, JsonApiError> {
    ensure_user(&state, Some(q.user)).await?;
    let criteria = FinancialEntry {
        description: q.description,
        month: q.month,
        year: q.year,
        user_id: Some(q.user),
        entry_type: parse_opt::<EntryType>(q.entry_type.as_deref())?,
        status: parse_opt::<EntryStatus>(q.status.as_deref())?,
        ..Default::default()
    };
    Ok(Json(state.entries.find(&criteria).await?))
}

#[utoipa::path(get, path = "/api/entries/{id}", tag = "entries", params(("id" = Uuid, Path, description = "Entry id")), responses((status = 200, description = "Found", body = crate::openapi::EntryDoc), (status = 404, description = "Not found")))]
pub async fn get(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
) -> Result<Json<FinancialEntry>, JsonApiError> {
    Ok(Json(load_entry(&state, id).await?))
}

#[utoipa::path(put, path = "/api/entries/{id}", tag = "entries", params(("id" = Uuid, Path, description = "Entry id")), request_body = EntryInput, responses((status = 200, description = "Updated", body = crate::openapi::EntryDoc), (status = 400, description = "Invalid entry or unknown user"), (status = 404, description = "Not found")))]
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
    Json(input): Json<EntryInput>,
) -> Result<Json<FinancialEntry>, JsonApiError> {
    let stored = load_entry(&state, id).await?;
    let mut entry = to_entry(&state, input).await?;
    entry.id = Some(id);
    entry.registered_on = stored.registered_on;
    if entry.status.is_none() {
        entry.status = stored.status;
    }
    Ok(Json(state.entries.update(entry).await?))
}

#[utoipa::path(put, path = "/api/entries/{id}/status", tag = "entries", params(("id" = Uuid, Path, description = "Entry id")), request_body = StatusInput, responses((status = 200, description = "Status changed", body = crate::openapi::EntryDoc), (status = 400, description = "Invalid status"), (status = 404, description = "Not found")))]
pub async fn update_status(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
    Json(input): Json<StatusInput>,
) -> Result<Json<FinancialEntry>, JsonApiError> {
    let mut entry = load_entry(&state, id).await?;
    let status: EntryStatus = input.status.parse().map_err(|_| {
        warn!(entry_id = %id, status = %input.status, "rejected status change");
        JsonApiError::bad_request(INVALID_STATUS)
    })?;
    Ok(Json(state.entries.change_status(&mut entry, status).await?))
}

#[utoipa::path(delete, path = "/api/entries/{id}", tag = "entries", params(("id" = Uuid, Path, description = "Entry id")), responses((status = 204, description = "Deleted"), (status = 404, description = "Not found")))]
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, JsonApiError> {
    let entry = load_entry(&state, id).await?;
    state.entries.delete(&entry).await?;
    Ok(StatusCode::NO_CONTENT)
}
