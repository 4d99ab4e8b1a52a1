// ABOUTME: HTTP server for pessoas, exposing the record store as a JSON API.
// ABOUTME: Uses Axum with shared state holding the store handle; config comes from the environment.

pub mod api;
pub mod app_state;
pub mod config;
pub mod routes;

pub use app_state::{AppState, SharedState};
pub use config::{ConfigError, PessoasConfig};
pub use routes::create_router;
