use std::fmt;

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde::Serialize;
use tracing::{debug, error};

use crate::services::CodeGenerationError;
use crate::utils::url_validator::{UrlValidationError, validation_error_message};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShortenerError {
    MissingUrl(String),
    InvalidUrl(String),
    InvalidShortCode(String),
    NotFound(String),
    CodeGeneration(String),
    Internal(String),
}

/// JSON 错误响应体：`{"error": ..., "message": ...}`
#[derive(Debug, Clone, Serialize)]
pub struct ErrorBody {
    pub error: &'static str,
    pub message: String,
}

impl ShortenerError {
    /// 获取错误代码
    pub fn code(&self) -> &'static str {
        match self {
            ShortenerError::MissingUrl(_) => "E001",
            ShortenerError::InvalidUrl(_) => "E002",
            ShortenerError::InvalidShortCode(_) => "E003",
            ShortenerError::NotFound(_) => "E004",
            ShortenerError::CodeGeneration(_) => "E005",
            ShortenerError::Internal(_) => "E006",
        }
    }

    /// 获取错误类型名称（同时作为响应体中的 `error` 字段）
    pub fn error_type(&self) -> &'static str {
        match self {
            ShortenerError::MissingUrl(_) => "URL is required",
            ShortenerError::InvalidUrl(_) => "Invalid URL",
            ShortenerError::InvalidShortCode(_) => "Invalid short code",
            ShortenerError::NotFound(_) => "Not found",
            ShortenerError::CodeGeneration(_) => "Service temporarily unavailable",
            ShortenerError::Internal(_) => "Internal server error",
        }
    }

    /// 获取错误详情
    pub fn message(&self) -> &str {
        match self {
            ShortenerError::MissingUrl(msg) => msg,
            ShortenerError::InvalidUrl(msg) => msg,
            ShortenerError::InvalidShortCode(msg) => msg,
            ShortenerError::NotFound(msg) => msg,
            ShortenerError::CodeGeneration(msg) => msg,
            ShortenerError::Internal(msg) => msg,
        }
    }

    /// Message that is safe to send to clients.
    ///
    /// Capacity and internal failures carry diagnostic text for the logs only.
    pub fn public_message(&self) -> &str {
        match self {
            ShortenerError::CodeGeneration(_) => {
                "Unable to generate short code. Please try again."
            }
            ShortenerError::Internal(_) => "An unexpected error occurred",
            other => other.message(),
        }
    }

    /// Client errors (4xx) vs server errors (5xx).
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            ShortenerError::MissingUrl(_)
                | ShortenerError::InvalidUrl(_)
                | ShortenerError::InvalidShortCode(_)
                | ShortenerError::NotFound(_)
        )
    }

    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }

    pub fn body(&self) -> ErrorBody {
        ErrorBody {
            error: self.error_type(),
            message: self.public_message().to_string(),
        }
    }
}

impl fmt::Display for ShortenerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // 默认使用简洁格式
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for ShortenerError {}

impl ResponseError for ShortenerError {
    fn status_code(&self) -> StatusCode {
        match self {
            ShortenerError::MissingUrl(_)
            | ShortenerError::InvalidUrl(_)
            | ShortenerError::InvalidShortCode(_) => StatusCode::BAD_REQUEST,
            ShortenerError::NotFound(_) => StatusCode::NOT_FOUND,
            ShortenerError::CodeGeneration(_) | ShortenerError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        if self.is_client_error() {
            debug!("Request rejected [{}]: {}", self.code(), self.format_simple());
        } else {
            error!("Request failed [{}]: {}", self.code(), self.format_simple());
        }
        HttpResponse::build(self.status_code()).json(self.body())
    }
}

// 便捷的构造函数
impl ShortenerError {
    pub fn missing_url<T: Into<String>>(msg: T) -> Self {
        ShortenerError::MissingUrl(msg.into())
    }

    pub fn invalid_url<T: Into<String>>(msg: T) -> Self {
        ShortenerError::InvalidUrl(msg.into())
    }

    pub fn invalid_short_code<T: Into<String>>(msg: T) -> Self {
        ShortenerError::InvalidShortCode(msg.into())
    }

    pub fn not_found<T: Into<String>>(msg: T) -> Self {
        ShortenerError::NotFound(msg.into())
    }

    pub fn code_generation<T: Into<String>>(msg: T) -> Self {
        ShortenerError::CodeGeneration(msg.into())
    }

    pub fn internal<T: Into<String>>(msg: T) -> Self {
        ShortenerError::Internal(msg.into())
    }
}

impl From<UrlValidationError> for ShortenerError {
    fn from(err: UrlValidationError) -> Self {
        match err {
            UrlValidationError::EmptyUrl => {
                ShortenerError::MissingUrl("Please provide a URL in the request body".to_string())
            }
            other => ShortenerError::InvalidUrl(validation_error_message(&other).to_string()),
        }
    }
}

impl From<CodeGenerationError> for ShortenerError {
    fn from(err: CodeGenerationError) -> Self {
        ShortenerError::CodeGeneration(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ShortenerError>;
