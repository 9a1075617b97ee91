use crate::handler::{commands::supported_commands, query::process_query};
use axum::{
    routing::{get, post},
    Router,
};
use registry::AppRegistry;

pub fn build_query_routers() -> Router<AppRegistry> {
    Router::new()
        .route("/query", post(process_query))
        // Kept for clients that still post transcribed text here.
        .route("/text_query", post(process_query))
        .route("/supported_commands", get(supported_commands))
}
