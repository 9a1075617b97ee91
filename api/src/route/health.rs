use crate::handler::health::health_check;
use axum::{routing::get, Router};
use registry::AppRegistry;

pub fn build_health_check_routers() -> Router<AppRegistry> {
    Router::new().route("/health", get(health_check))
}
