use axum::Json;
use serde_json::json;

/// API information endpoint
#[tracing::instrument]
pub async fn index() -> Json<serde_json::Value> {
    Json(json!({
        "name": "jobboard-api",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "health": "GET /health",
            "metrics": "GET /metrics",
            "jobs": "GET|POST /api/jobs, GET|PUT|DELETE /api/jobs/:id",
            "organizations": "GET|POST /api/organizations, GET /api/organizations/:id",
        },
    }))
}
