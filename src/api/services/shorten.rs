use actix_web::{HttpRequest, HttpResponse, web};
use serde_json::Value;
use tracing::debug;

use super::types::ShortenResponse;
use crate::errors::ShortenerError;
use crate::services::LinkService;

/// 请求体上限
pub const MAX_BODY_SIZE: usize = 64 * 1024;

pub struct ShortenService;

impl ShortenService {
    /// `POST /api/shorten` with body `{"url": "<text>"}`
    pub async fn shorten(
        req: HttpRequest,
        payload: web::Payload,
        service: web::Data<LinkService>,
    ) -> Result<HttpResponse, ShortenerError> {
        let body = Self::read_body(payload).await?;
        let raw_url = Self::extract_url(&body)?;
        let mapping = service.shorten(&raw_url)?;

        let short_url = Self::short_url(&req, &mapping.short_code);
        debug!("Shortened '{}' to {}", mapping.original_url, short_url);

        Ok(HttpResponse::Created().json(ShortenResponse {
            short_code: mapping.short_code,
            short_url,
            original_url: mapping.original_url,
        }))
    }

    /// Buffer the request body, rejecting anything over `MAX_BODY_SIZE`.
    async fn read_body(payload: web::Payload) -> Result<web::Bytes, ShortenerError> {
        match payload.to_bytes_limited(MAX_BODY_SIZE).await {
            Ok(Ok(body)) => Ok(body),
            Ok(Err(e)) => Err(ShortenerError::internal(format!(
                "Failed to read request body: {}",
                e
            ))),
            Err(_) => {
                debug!("Shorten request body exceeds {} bytes", MAX_BODY_SIZE);
                Err(ShortenerError::invalid_url("Request body is too large"))
            }
        }
    }

    /// 从请求体中取出 `url` 字段
    ///
    /// 缺失、null 或无法解析的请求体视为未提供 URL；非字符串视为非法 URL。
    fn extract_url(body: &[u8]) -> Result<String, ShortenerError> {
        let missing = || ShortenerError::missing_url("Please provide a URL in the request body");

        if body.is_empty() {
            return Err(missing());
        }

        let json: Value = serde_json::from_slice(body).map_err(|e| {
            debug!("Malformed shorten request body: {}", e);
            missing()
        })?;

        match json.get("url") {
            None | Some(Value::Null) => Err(missing()),
            Some(Value::String(url)) => Ok(url.clone()),
            Some(_) => Err(ShortenerError::invalid_url("Please provide a valid URL")),
        }
    }

    /// 使用请求自身的 origin 拼接短链接
    fn short_url(req: &HttpRequest, code: &str) -> String {
        let conn = req.connection_info();
        format!("{}://{}/{}", conn.scheme(), conn.host(), code)
    }
}
