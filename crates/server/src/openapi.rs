use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use utoipa::OpenApi;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::routes::entries::{EntryInput, StatusInput};
use crate::routes::users::BalanceOutput;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct RegisterRequest { pub name: String, pub email: String, pub password: String }

#[derive(ToSchema)]
pub struct LoginRequest { pub email: String, pub password: String }

#[derive(ToSchema)]
pub struct UserDoc { pub id: Uuid, pub name: String, pub email: String }

#[derive(Serialize, ToSchema)]
pub struct EntryDoc {
    pub id: Uuid,
    pub description: String,
    pub month: i32,
    pub year: i32,
    pub user_id: Uuid,
    pub value: Decimal,
    /// `INCOME` or `EXPENSE`
    #[serde(rename = "type")]
    pub entry_type: String,
    /// `PENDING`, `SETTLED` or `CANCELLED`
    pub status: String,
    pub registered_on: NaiveDate,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::users::register,
        crate::routes::users::authenticate,
        crate::routes::users::balance,
        crate::routes::entries::create,
        crate::routes::entries::search,
        crate::routes::entries::get,
        crate::routes::entries::update,
        crate::routes::entries::update_status,
        crate::routes::entries::delete,
    ),
    components(
        schemas(
            HealthResponse,
            RegisterRequest,
            LoginRequest,
            UserDoc,
            EntryDoc,
            EntryInput,
            StatusInput,
            BalanceOutput,
        )
    ),
    tags(
        (name = "health"),
        (name = "users"),
        (name = "entries")
    )
)]
pub struct ApiDoc;
