use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get, post, put},
};
use serde_json::json;

use crate::{ApiState, error::ApiError, validation};

use super::model::{CreateQuestao, UpdateQuestao};

use prova_db::{models::Questao, repositories::questao};

const NOT_FOUND: &str = "Questão não encontrada";

/// Create the question routes
pub fn routes() -> Router<ApiState> {
    Router::new()
        .route("/questoes", get(list_questoes))
        .route("/questoes/{id}", get(get_questao_by_id))
        .route("/questoes", post(create_questao))
        .route("/questoes/{id}", put(update_questao))
        .route("/questoes/{id}", delete(delete_questao))
}

async fn list_questoes(State(state): State<ApiState>) -> Result<Json<Vec<Questao>>, ApiError> {
    let questoes = questao::list(&state.pool).await?;
    Ok(Json(questoes))
}

async fn get_questao_by_id(
    State(state): State<ApiState>,
    Path(id): Path<i32>,
) -> Result<Json<Questao>, ApiError> {
    let questao = questao::find_by_id(&state.pool, id)
        .await?
        .ok_or(ApiError::NotFound(NOT_FOUND))?;

    Ok(Json(questao))
}

async fn create_questao(
    State(state): State<ApiState>,
    Json(payload): Json<CreateQuestao>,
) -> Result<impl IntoResponse, ApiError> {
    validation::require_fields(&[
        ("enunciado", payload.enunciado.as_deref()),
        ("disciplina", payload.disciplina.as_deref()),
        ("tema", payload.tema.as_deref()),
        ("nivel", payload.nivel.as_deref()),
    ])?;

    // Validation guarantees presence past this point.
    let id = questao::insert(
        &state.pool,
        payload.enunciado.as_deref().unwrap_or_default(),
        payload.disciplina.as_deref().unwrap_or_default(),
        payload.tema.as_deref().unwrap_or_default(),
        payload.nivel.as_deref().unwrap_or_default(),
    )
    .await?;

    tracing::debug!(id, "questão criada");

    Ok((
        StatusCode::CREATED,
        Json(json!({ "mensagem": "Questão criada com sucesso!" })),
    ))
}

async fn update_questao(
    State(state): State<ApiState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateQuestao>,
) -> Result<impl IntoResponse, ApiError> {
    questao::update(
        &state.pool,
        id,
        payload.enunciado.as_deref(),
        payload.disciplina.as_deref(),
        payload.tema.as_deref(),
        payload.nivel.as_deref(),
    )
    .await?
    .ok_or(ApiError::NotFound(NOT_FOUND))?;

    Ok(Json(json!({ "mensagem": "Questão atualizada com sucesso!" })))
}

async fn delete_questao(
    State(state): State<ApiState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ApiError> {
    questao::delete(&state.pool, id)
        .await?
        .ok_or(ApiError::NotFound(NOT_FOUND))?;

    Ok(Json(json!({ "mensagem": "Questão excluída com sucesso!" })))
}
