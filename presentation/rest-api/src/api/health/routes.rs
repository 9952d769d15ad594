use chrono::Utc;
use poem_openapi::{ApiResponse, Object, OpenApi, payload::Json};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::api::tags::ApiTags;

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct HealthCheckResponse {
    /// Service status
    pub status: String,
    /// Current server timestamp
    pub timestamp: String,
    /// Service version
    pub version: String,
}

impl HealthCheckResponse {
    fn with_status(status: &str) -> Self {
        Self {
            status: status.to_string(),
            timestamp: Utc::now().to_rfc3339(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

#[derive(ApiResponse)]
pub enum ReadinessResponse {
    #[oai(status = 200)]
    Ready(Json<HealthCheckResponse>),
    #[oai(status = 503)]
    Unavailable(Json<HealthCheckResponse>),
}

/// Liveness and readiness probes
pub struct Api {
    pool: PgPool,
}

impl Api {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[OpenApi]
impl Api {
    /// Liveness probe
    ///
    /// Answers as long as the process is serving requests. Public.
    #[oai(path = "/health", method = "get", tag = "ApiTags::Health")]
    async fn health_check(&self) -> Json<HealthCheckResponse> {
        Json(HealthCheckResponse::with_status("healthy"))
    }

    /// Readiness probe
    ///
    /// Fails with 503 while the database cannot be reached.
    #[oai(path = "/health/ready", method = "get", tag = "ApiTags::Health")]
    async fn readiness(&self) -> ReadinessResponse {
        match persistence::db::ping(&self.pool).await {
            Ok(()) => ReadinessResponse::Ready(Json(HealthCheckResponse::with_status("ready"))),
            Err(_) => ReadinessResponse::Unavailable(Json(HealthCheckResponse::with_status(
                "database_unreachable",
            ))),
        }
    }
}
