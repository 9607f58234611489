use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get, post, put},
};
use serde_json::json;

use crate::{ApiState, error::ApiError, validation};

use super::model::{CreateUsuario, UpdateUsuario};

use prova_db::{models::Usuario, repositories::usuario};

const NOT_FOUND: &str = "Usuário não encontrado";

/// Create the user routes
pub fn routes() -> Router<ApiState> {
    Router::new()
        .route("/usuarios", get(list_usuarios))
        .route("/usuarios/{id}", get(get_usuario_by_id))
        .route("/usuarios", post(create_usuario))
        .route("/usuarios/{id}", put(update_usuario))
        .route("/usuarios/{id}", delete(delete_usuario))
}

async fn list_usuarios(State(state): State<ApiState>) -> Result<Json<Vec<Usuario>>, ApiError> {
    let usuarios = usuario::list(&state.pool).await?;
    Ok(Json(usuarios))
}

async fn get_usuario_by_id(
    State(state): State<ApiState>,
    Path(id): Path<i32>,
) -> Result<Json<Usuario>, ApiError> {
    let usuario = usuario::find_by_id(&state.pool, id)
        .await?
        .ok_or(ApiError::NotFound(NOT_FOUND))?;

    Ok(Json(usuario))
}

async fn create_usuario(
    State(state): State<ApiState>,
    Json(payload): Json<CreateUsuario>,
) -> Result<impl IntoResponse, ApiError> {
    validation::require_fields(&[
        ("nome", payload.nome.as_deref()),
        ("email", payload.email.as_deref()),
        ("senha", payload.senha.as_deref()),
    ])?;

    let senha_hash = bcrypt::hash(
        payload.senha.as_deref().unwrap_or_default(),
        state.bcrypt_cost,
    )?;

    let id = usuario::insert(
        &state.pool,
        payload.nome.as_deref().unwrap_or_default(),
        payload.email.as_deref().unwrap_or_default(),
        &senha_hash,
    )
    .await?;

    tracing::debug!(id, "usuário criado");

    Ok((
        StatusCode::CREATED,
        Json(json!({ "mensagem": "Usuário criado com sucesso!" })),
    ))
}

async fn update_usuario(
    State(state): State<ApiState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateUsuario>,
) -> Result<impl IntoResponse, ApiError> {
    // A new senha is hashed before it touches the update statement.
    let senha_hash = match payload.senha.as_deref() {
        Some(senha) => Some(bcrypt::hash(senha, state.bcrypt_cost)?),
        None => None,
    };

    usuario::update(
        &state.pool,
        id,
        payload.nome.as_deref(),
        payload.email.as_deref(),
        senha_hash.as_deref(),
    )
    .await?
    .ok_or(ApiError::NotFound(NOT_FOUND))?;

    Ok(Json(json!({ "mensagem": "Usuário atualizado com sucesso!" })))
}

async fn delete_usuario(
    State(state): State<ApiState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ApiError> {
    usuario::delete(&state.pool, id)
        .await?
        .ok_or(ApiError::NotFound(NOT_FOUND))?;

    Ok(Json(json!({ "mensagem": "Usuário excluído com sucesso!" })))
}
