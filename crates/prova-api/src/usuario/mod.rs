//! CRUD endpoints for the `usuarios` table.
//!
//! Passwords are bcrypt-hashed before they reach the database and are never
//! included in a response.

pub mod model;
pub mod routes;

pub use routes::routes;
