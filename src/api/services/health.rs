use actix_web::{HttpResponse, Responder};
use tracing::trace;

use super::types::{HealthStatus, ServiceStatus};

pub struct HealthService;

impl HealthService {
    /// `GET /`
    pub async fn root() -> impl Responder {
        trace!("Received root health check request");

        HttpResponse::Ok().json(ServiceStatus {
            status: "healthy".to_string(),
            service: "URL Shortener API".to_string(),
        })
    }

    /// `GET /api/health`
    pub async fn api_health() -> impl Responder {
        trace!("Received API health check request");

        HttpResponse::Ok().json(HealthStatus {
            status: "ok".to_string(),
            message: "URL Shortener API is running".to_string(),
        })
    }
}
