pub mod health;
pub mod redirect;
pub mod shorten;
pub mod stats;
pub mod types;

use actix_web::{HttpRequest, HttpResponse, web};
use tracing::debug;

use crate::errors::ShortenerError;

pub use health::HealthService;
pub use redirect::RedirectService;
pub use shorten::ShortenService;
pub use stats::StatsService;

/// Register every route on an app or scope.
///
/// Expects a `web::Data<LinkService>` to be registered by the caller.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(HealthService::root))
        .route("/api/health", web::get().to(HealthService::api_health))
        .service(web::resource("/api/shorten").route(web::post().to(ShortenService::shorten)))
        .route(
            "/api/stats/{code}",
            web::get().to(StatsService::get_stats),
        )
        .route("/{code}", web::get().to(RedirectService::handle_redirect))
        .default_service(web::to(not_found));
}

async fn not_found(req: HttpRequest) -> HttpResponse {
    debug!("No route for {} {}", req.method(), req.path());
    actix_web::ResponseError::error_response(&ShortenerError::not_found("Resource not found"))
}
