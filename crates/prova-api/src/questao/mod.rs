//! CRUD endpoints for the `questoes` table (exam questions).

pub mod model;
pub mod routes;

pub use routes::routes;
