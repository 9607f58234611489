use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    /// Required request fields missing or empty.
    #[error("campos obrigatórios ausentes: {}", .campos.join(", "))]
    Validation { campos: Vec<&'static str> },
    /// Requested row does not exist; carries the resource-specific message.
    #[error("{0}")]
    NotFound(&'static str),
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("password hashing error: {0}")]
    PasswordHash(#[from] bcrypt::BcryptError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::Validation { campos } => (
                StatusCode::BAD_REQUEST,
                Json(json!({
                    "erro": "Todos os campos são obrigatórios.",
                    "campos": campos,
                })),
            )
                .into_response(),
            Self::NotFound(mensagem) => (
                StatusCode::NOT_FOUND,
                Json(json!({ "mensagem": mensagem })),
            )
                .into_response(),
            // Infrastructure failures are logged server-side; clients get an
            // opaque body with no internal detail.
            Self::Database(e) => {
                tracing::error!(error = %e, "database error");
                internal_error()
            }
            Self::PasswordHash(e) => {
                tracing::error!(error = %e, "password hashing error");
                internal_error()
            }
        }
    }
}

fn internal_error() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "erro": "Erro interno do servidor" })),
    )
        .into_response()
}
