use actix_web::{HttpResponse, web};
use tracing::trace;

use super::types::StatsResponse;
use crate::errors::ShortenerError;
use crate::services::LinkService;

pub struct StatsService;

impl StatsService {
    /// `GET /api/stats/{code}`
    pub async fn get_stats(
        path: web::Path<String>,
        service: web::Data<LinkService>,
    ) -> Result<HttpResponse, ShortenerError> {
        let code = path.into_inner();
        trace!("Stats request for code: {}", code);

        let mapping = service.stats(&code)?;
        Ok(HttpResponse::Ok().json(StatsResponse::from(&mapping)))
    }
}
