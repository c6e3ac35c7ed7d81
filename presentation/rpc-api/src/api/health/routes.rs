use chrono::Utc;
use poem_openapi::{Object, OpenApi, param::Query, payload::Json};
use serde::{Deserialize, Serialize};

use crate::api::error::{ErrorResponse, RpcCode};
use crate::api::health::registry::{HealthRegistry, OVERALL, ServingStatus};
use crate::api::tags::ApiTags;

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct HealthCheckResponse {
    /// Service name that was checked (empty for the whole server)
    pub service: String,
    /// SERVING or NOT_SERVING
    pub status: String,
    /// Current server timestamp
    pub timestamp: String,
    /// Service version
    pub version: String,
}

/// Health API for liveness and readiness probes.
pub struct Api {
    registry: HealthRegistry,
}

impl Api {
    pub fn new(registry: HealthRegistry) -> Self {
        Self { registry }
    }
}

#[OpenApi]
impl Api {
    /// Health check endpoint
    ///
    /// Reports SERVING once the listener is bound and accepting connections.
    /// No downstream dependency is checked.
    #[oai(path = "/health", method = "get", tag = "ApiTags::Health")]
    async fn health_check(
        &self,
        /// Registered service name; omit for the overall server status
        service: Query<Option<String>>,
    ) -> HealthCheckApiResponse {
        let service = service.0.unwrap_or_else(|| OVERALL.to_string());

        let Some(status) = self.registry.status(&service) else {
            let (_, json) = RpcCode::NotFound.response(format!("unknown service: {}", service));
            return HealthCheckApiResponse::NotFound(json);
        };

        let body = Json(HealthCheckResponse {
            service,
            status: status.to_string(),
            timestamp: Utc::now().to_rfc3339(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        });

        match status {
            ServingStatus::Serving => HealthCheckApiResponse::Ok(body),
            ServingStatus::NotServing => HealthCheckApiResponse::Unavailable(body),
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum HealthCheckApiResponse {
    #[oai(status = 200)]
    Ok(Json<HealthCheckResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 503)]
    Unavailable(Json<HealthCheckResponse>),
}
