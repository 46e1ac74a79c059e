use axum::{
    routing::{get, post, put},
    Json, Router,
};
use tower::ServiceBuilder;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use common::types::Health;

use crate::openapi::ApiDoc;
use crate::state::ServerState;

pub mod entries;
pub mod users;

/// Returned when a request references a user id that does not exist.
pub const USER_NOT_FOUND_FOR_ID: &str = "Usuário não encontrado para o Id informado.";

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "Service is up", body = crate::openapi::HealthResponse)))]
pub async fn health() -> Json<Health> {
    Json(Health::ok())
}

/// Build the full application router: health, users, entries and API docs
pub fn build_router(state: ServerState, cors: CorsLayer) -> Router {
    let api = Router::new()
        .route("/api/users", post(users::register))
        .route("/api/users/authenticate", post(users::authenticate))
        .route("/api/users/:id/balance", get(users::balance))
        .route("/api/entries", post(entries::create).get(entries::search))
        .route(
            "/api/entries/:id",
            get(entries::get).put(entries::update).delete(entries::delete),
        )
        .route("/api/entries/:id/status", put(entries::update_status))
        .with_state(state);

    Router::new()
        .route("/health", get(health))
        .merge(api)
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(
            ServiceBuilder::new()
                .layer(
                    TraceLayer::new_for_http()
                        // 每次请求创建 span，包含方法和路径，日志级别为 INFO
                        .make_span_with(
                            DefaultMakeSpan::new()
                                .level(Level::INFO)
                                .include_headers(false),
                        )
                        // 请求到达时打点
                        .on_request(
                            DefaultOnRequest::new()
                                .level(Level::INFO),
                        )
                        // 响应返回时打点，包含状态码与耗时
                        .on_response(
                            DefaultOnResponse::new()
                                .level(Level::INFO)
                                .include_headers(false),
                        )
                        // 失败（5xx 等）时以 ERROR 记录
                        .on_failure(
                            DefaultOnFailure::new()
                                .level(Level::ERROR),
                        ),
                )
                .layer(cors),
        )
}
