use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::prelude::FromRow;

/// Exam question row.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Questao {
    /// Database-assigned identifier (SERIAL)
    pub id: i32,
    /// Question statement
    pub enunciado: String,
    /// Subject (e.g. "Matemática")
    pub disciplina: String,
    /// Topic within the subject
    pub tema: String,
    /// Difficulty level (e.g. "Fácil")
    pub nivel: String,
}

/// User row as exposed over the API. The stored `senha` column (bcrypt hash)
/// is deliberately absent: no endpoint ever returns it.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Usuario {
    /// Database-assigned identifier (SERIAL)
    pub id: i32,
    /// Display name
    pub nome: String,
    /// E-mail address
    pub email: String,
    /// When the user was created (defaults to NOW() on insert)
    pub criado_em: DateTime<Utc>,
}
