// HTTP server setup (Axum + JSON REST)
pub mod app;
pub mod middleware;
pub mod routes;

pub use app::*;
