use std::env;

/// Deployment environment, selects the tracing output format.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    pub fn is_development(self) -> bool {
        self == Self::Development
    }

    fn from_env() -> Self {
        match env::var("APP_ENV").as_deref() {
            Ok("production") => Self::Production,
            _ => Self::Development,
        }
    }
}

/// Runtime configuration, sourced from environment variables.
#[derive(Clone, Debug)]
pub struct ApiConfig {
    pub database_url: String,
    pub env: Environment,
    pub bcrypt_cost: u32,
}

impl ApiConfig {
    /// Read configuration from the environment. Only `DATABASE_URL` is
    /// required; `APP_ENV` defaults to development and `BCRYPT_COST` to 12.
    pub fn from_env() -> Result<Self, env::VarError> {
        let bcrypt_cost = env::var("BCRYPT_COST")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(bcrypt::DEFAULT_COST);

        Ok(Self {
            database_url: env::var("DATABASE_URL")?,
            env: Environment::from_env(),
            bcrypt_cost,
        })
    }
}
