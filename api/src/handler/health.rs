use crate::model::health::HealthResponse;
use axum::{extract::State, http::StatusCode, Json};
use chrono::Utc;
use registry::AppRegistry;

pub async fn health_check(
    State(registry): State<AppRegistry>,
) -> (StatusCode, Json<HealthResponse>) {
    let database_ok = registry.health_check_repository().check_db().await;

    let status = if database_ok {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };
    let body = HealthResponse {
        status: if database_ok { "healthy" } else { "unhealthy" },
        database: if database_ok { "connected" } else { "disconnected" },
        timestamp: Utc::now(),
    };

    (status, Json(body))
}
