use actix_web::http::header::{self, HeaderValue};
use actix_web::{HttpResponse, web};
use tracing::trace;

use crate::errors::ShortenerError;
use crate::services::LinkService;

pub struct RedirectService;

impl RedirectService {
    /// `GET /{code}`：302 跳转到原始 URL，并累加点击数
    pub async fn handle_redirect(
        path: web::Path<String>,
        service: web::Data<LinkService>,
    ) -> Result<HttpResponse, ShortenerError> {
        let code = path.into_inner();
        trace!("Redirect request for code: {}", code);

        service.resolve_with(&code, |mapping| {
            let location = HeaderValue::from_str(&mapping.original_url).map_err(|e| {
                ShortenerError::internal(format!(
                    "Stored URL for '{}' is not a valid Location header: {}",
                    mapping.short_code, e
                ))
            })?;

            Ok(HttpResponse::Found()
                .insert_header((header::LOCATION, location))
                .finish())
        })
    }
}
