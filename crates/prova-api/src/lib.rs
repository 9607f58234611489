pub mod config;
pub mod error;
pub mod questao;
pub mod router;
pub mod state;
pub mod tracing;
pub mod usuario;
pub mod validation;

pub use config::ApiConfig;
pub use state::ApiState;
