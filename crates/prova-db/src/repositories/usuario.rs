use sqlx::{Executor, Postgres};

use crate::models::Usuario;

// The senha column (bcrypt hash) is never selected: responses must not carry
// credentials in any form.

pub async fn list<'e, E>(executor: E) -> Result<Vec<Usuario>, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    sqlx::query_as(
        // language=PostgreSQL
        r#"
            SELECT id, nome, email, criado_em
            FROM usuarios
            ORDER BY id
        "#,
    )
    .fetch_all(executor)
    .await
}

pub async fn find_by_id<'e, E>(executor: E, id: i32) -> Result<Option<Usuario>, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    sqlx::query_as(
        // language=PostgreSQL
        r#"
            SELECT id, nome, email, criado_em
            FROM usuarios
            WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(executor)
    .await
}

pub async fn insert<'e, E>(
    executor: E,
    nome: &str,
    email: &str,
    senha_hash: &str,
) -> Result<i32, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    sqlx::query_scalar(
        // language=PostgreSQL
        r#"
            INSERT INTO usuarios (nome, email, senha)
            VALUES ($1, $2, $3)
            RETURNING id
        "#,
    )
    .bind(nome)
    .bind(email)
    .bind(senha_hash)
    .fetch_one(executor)
    .await
}

/// Partial update in a single conditional statement. `None` keeps the stored
/// value. `senha_hash`, when present, must already be hashed by the caller.
/// Returns `None` when no row has the given id.
pub async fn update<'e, E>(
    executor: E,
    id: i32,
    nome: Option<&str>,
    email: Option<&str>,
    senha_hash: Option<&str>,
) -> Result<Option<i32>, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    sqlx::query_scalar(
        // language=PostgreSQL
        r#"
            UPDATE usuarios
            SET nome = COALESCE($2, nome),
                email = COALESCE($3, email),
                senha = COALESCE($4, senha)
            WHERE id = $1
            RETURNING id
        "#,
    )
    .bind(id)
    .bind(nome)
    .bind(email)
    .bind(senha_hash)
    .fetch_optional(executor)
    .await
}

/// Delete by id. Returns `None` when no row has the given id.
pub async fn delete<'e, E>(executor: E, id: i32) -> Result<Option<i32>, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    sqlx::query_scalar(
        // language=PostgreSQL
        r#"
            DELETE FROM usuarios
            WHERE id = $1
            RETURNING id
        "#,
    )
    .bind(id)
    .fetch_optional(executor)
    .await
}
