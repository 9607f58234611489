use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use serde_json::{Value, json};

use crate::{questao, state::ApiState, usuario};

pub fn router() -> Router<ApiState> {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health))
        .merge(questao::routes())
        .merge(usuario::routes())
        .fallback(handler_404)
}

/// Root status endpoint: identifies the service and probes the database.
/// Always answers 200; a failing probe is reported in `dbStatus`.
async fn index(State(state): State<ApiState>) -> Json<Value> {
    let db_status = match sqlx::query("SELECT 1").execute(&state.pool).await {
        Ok(_) => "ok".to_string(),
        Err(e) => e.to_string(),
    };

    Json(json!({
        "mensagem": "API para Questões de Prova",
        "autor": "Arthur Porto",
        "dbStatus": db_status,
    }))
}

async fn health() -> StatusCode {
    StatusCode::OK
}

async fn handler_404() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        "The requested resource was not found",
    )
}
