//! Direct database helpers for seeding and inspecting test data.
//!
//! Tests run in parallel against a shared database, so each test seeds its
//! own rows and asserts on their ids instead of truncating tables.

use prova_db::models::{Questao, Usuario};
use sqlx::PgPool;

/// Insert a question directly, bypassing the API.
pub async fn insert_questao(
    pool: &PgPool,
    enunciado: &str,
    disciplina: &str,
    tema: &str,
    nivel: &str,
) -> anyhow::Result<i32> {
    let id =
        prova_db::repositories::questao::insert(pool, enunciado, disciplina, tema, nivel).await?;
    Ok(id)
}

/// Insert a user directly with a pre-hashed senha, bypassing the API.
pub async fn insert_usuario(
    pool: &PgPool,
    nome: &str,
    email: &str,
    senha: &str,
) -> anyhow::Result<i32> {
    let hash = bcrypt::hash(senha, 4)?;
    let id = prova_db::repositories::usuario::insert(pool, nome, email, &hash).await?;
    Ok(id)
}

/// Fetch a question directly, bypassing the API.
pub async fn get_questao(pool: &PgPool, id: i32) -> anyhow::Result<Option<Questao>> {
    let questao = prova_db::repositories::questao::find_by_id(pool, id).await?;
    Ok(questao)
}

/// Fetch a user directly, bypassing the API.
pub async fn get_usuario(pool: &PgPool, id: i32) -> anyhow::Result<Option<Usuario>> {
    let usuario = prova_db::repositories::usuario::find_by_id(pool, id).await?;
    Ok(usuario)
}

/// Stored senha hash for a user (never exposed through the API).
pub async fn senha_hash(pool: &PgPool, id: i32) -> anyhow::Result<String> {
    let hash: String = sqlx::query_scalar("SELECT senha FROM usuarios WHERE id = $1")
        .bind(id)
        .fetch_one(pool)
        .await?;
    Ok(hash)
}
