// Route definitions for the hello forwarding endpoint

use axum::{routing::get, Router};

use super::handler;
use crate::config::state::AppState;

/// Creates a router with the single hello endpoint.
pub fn hello_routes() -> Router<AppState> {
    Router::new().route("/hello", get(handler::hello_handler))
}
