use sqlx::PgPool;

use crate::ApiConfig;

/// Shared application state, cloned into every handler via axum's `State`.
///
/// The pool is constructed once at startup and injected here instead of
/// living behind a lazily-initialized global, so its lifecycle (creation,
/// shutdown close) is owned by the binary.
#[derive(Clone)]
pub struct ApiState {
    pub pool: PgPool,
    pub bcrypt_cost: u32,
}

impl std::fmt::Debug for ApiState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiState")
            .field("bcrypt_cost", &self.bcrypt_cost)
            .finish_non_exhaustive()
    }
}

impl ApiState {
    pub fn new(config: &ApiConfig, pool: PgPool) -> Self {
        Self {
            pool,
            bcrypt_cost: config.bcrypt_cost,
        }
    }
}
