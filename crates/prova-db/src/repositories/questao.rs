use sqlx::{Executor, Postgres};

use crate::models::Questao;

pub async fn list<'e, E>(executor: E) -> Result<Vec<Questao>, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    sqlx::query_as(
        // language=PostgreSQL
        r#"
            SELECT id, enunciado, disciplina, tema, nivel
            FROM questoes
            ORDER BY id
        "#,
    )
    .fetch_all(executor)
    .await
}

pub async fn find_by_id<'e, E>(executor: E, id: i32) -> Result<Option<Questao>, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    sqlx::query_as(
        // language=PostgreSQL
        r#"
            SELECT id, enunciado, disciplina, tema, nivel
            FROM questoes
            WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(executor)
    .await
}

pub async fn insert<'e, E>(
    executor: E,
    enunciado: &str,
    disciplina: &str,
    tema: &str,
    nivel: &str,
) -> Result<i32, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    sqlx::query_scalar(
        // language=PostgreSQL
        r#"
            INSERT INTO questoes (enunciado, disciplina, tema, nivel)
            VALUES ($1, $2, $3, $4)
            RETURNING id
        "#,
    )
    .bind(enunciado)
    .bind(disciplina)
    .bind(tema)
    .bind(nivel)
    .fetch_one(executor)
    .await
}

/// Partial update in a single conditional statement. `None` keeps the stored
/// value; `Some` overwrites it, empty strings included. Returns `None` when
/// no row has the given id.
pub async fn update<'e, E>(
    executor: E,
    id: i32,
    enunciado: Option<&str>,
    disciplina: Option<&str>,
    tema: Option<&str>,
    nivel: Option<&str>,
) -> Result<Option<i32>, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    sqlx::query_scalar(
        // language=PostgreSQL
        r#"
            UPDATE questoes
            SET enunciado = COALESCE($2, enunciado),
                disciplina = COALESCE($3, disciplina),
                tema = COALESCE($4, tema),
                nivel = COALESCE($5, nivel)
            WHERE id = $1
            RETURNING id
        "#,
    )
    .bind(id)
    .bind(enunciado)
    .bind(disciplina)
    .bind(tema)
    .bind(nivel)
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
            DELETE FROM questoes
            WHERE id = $1
            RETURNING id
        "#,
    )
    .bind(id)
    .fetch_optional(executor)
    .await
}
