//! URL 验证模块
//!
//! 规范化用户输入（缺省补全 https://），并校验 URL 是否可以被缩短。

use std::net::Ipv4Addr;

use url::{Host, Url};

/// URL 验证错误
#[derive(Debug, PartialEq, Eq)]
pub enum UrlValidationError {
    EmptyUrl,
    InvalidProtocol(String),
    DangerousProtocol(String),
    InvalidHost(String),
    InvalidFormat(String),
}

impl std::fmt::Display for UrlValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyUrl => write!(f, "URL cannot be empty"),
            Self::InvalidProtocol(proto) => write!(
                f,
                "Invalid protocol: {}. Only http:// and https:// are allowed",
                proto
            ),
            Self::DangerousProtocol(proto) => {
                write!(f, "Dangerous protocol blocked: {}", proto)
            }
            Self::InvalidHost(host) => write!(f, "Invalid host: {}", host),
            Self::InvalidFormat(msg) => write!(f, "Invalid URL format: {}", msg),
        }
    }
}

impl std::error::Error for UrlValidationError {}

/// 危险协议列表
const DANGEROUS_PROTOCOLS: &[&str] = &[
    "javascript:",
    "data:",
    "file:",
    "vbscript:",
    "about:",
    "blob:",
];

const MAX_LABEL_LEN: usize = 63;

fn has_http_scheme(url: &str) -> bool {
    let lower = url.get(..8).unwrap_or(url).to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

/// Trim the input and default the scheme to `https://` when none is given.
pub fn normalize_url(raw: &str) -> String {
    let url = raw.trim();
    if has_http_scheme(url) {
        url.to_string()
    } else {
        format!("https://{}", url)
    }
}

/// 单个域名标签：字母数字开头结尾，中间允许连字符
fn is_valid_label(label: &str) -> bool {
    let bytes = label.as_bytes();
    !bytes.is_empty()
        && bytes.len() <= MAX_LABEL_LEN
        && bytes.iter().all(|b| b.is_ascii_alphanumeric() || *b == b'-')
        && bytes[0] != b'-'
        && bytes[bytes.len() - 1] != b'-'
}

fn is_valid_domain(domain: &str) -> bool {
    if domain.eq_ignore_ascii_case("localhost") {
        return true;
    }

    let domain = domain.strip_suffix('.').unwrap_or(domain);
    let labels: Vec<&str> = domain.split('.').collect();
    let Some((tld, rest)) = labels.split_last() else {
        return false;
    };

    !rest.is_empty()
        && rest.iter().all(|l| is_valid_label(l))
        && (2..=6).contains(&tld.len())
        && tld.bytes().all(|b| b.is_ascii_alphabetic())
}

/// Validate a normalized URL.
///
/// 检查项目：
/// 1. URL 不为空、不含空白字符和控制字符
/// 2. 不是危险协议（javascript:, data:, file: 等）
/// 3. 必须是 http:// 或 https://
/// 4. 主机名必须是带顶级域名的域名、localhost 或 IPv4 地址
/// 5. 不允许携带用户名密码
pub fn validate_url(url: &str) -> Result<(), UrlValidationError> {
    let url = url.trim();

    if url.is_empty() {
        return Err(UrlValidationError::EmptyUrl);
    }

    if url.chars().any(char::is_whitespace) {
        return Err(UrlValidationError::InvalidFormat(
            "URL must not contain whitespace".to_string(),
        ));
    }

    // 控制字符无法放进 Location 响应头
    if url.chars().any(char::is_control) {
        return Err(UrlValidationError::InvalidFormat(
            "URL must not contain control characters".to_string(),
        ));
    }

    let url_lower = url.to_lowercase();

    // 检查危险协议
    for proto in DANGEROUS_PROTOCOLS {
        if url_lower.starts_with(proto) {
            return Err(UrlValidationError::DangerousProtocol(proto.to_string()));
        }
    }

    // 检查协议
    if !has_http_scheme(url) {
        let proto = url_lower
            .split(':')
            .next()
            .map(|s| format!("{}:", s))
            .unwrap_or_default();
        return Err(UrlValidationError::InvalidProtocol(proto));
    }

    // 解析 URL 验证格式
    let parsed = Url::parse(url).map_err(|e| UrlValidationError::InvalidFormat(e.to_string()))?;

    if !parsed.username().is_empty() || parsed.password().is_some() {
        return Err(UrlValidationError::InvalidFormat(
            "credentials are not allowed in URL".to_string(),
        ));
    }

    match parsed.host() {
        Some(Host::Domain(domain)) if is_valid_domain(domain) => Ok(()),
        Some(Host::Ipv4(_)) if is_dotted_ipv4_literal(url) => Ok(()),
        Some(host) => Err(UrlValidationError::InvalidHost(host.to_string())),
        None => Err(UrlValidationError::InvalidHost(String::new())),
    }
}

/// `url` 会把 `http://123` 之类的写法解释成 IPv4，这里只接受点分四段写法
fn is_dotted_ipv4_literal(url: &str) -> bool {
    let after_scheme = url.split_once("://").map(|(_, rest)| rest).unwrap_or(url);
    let authority = after_scheme
        .split(['/', '?', '#'])
        .next()
        .unwrap_or_default();
    let host = authority.rsplit_once(':').map_or(authority, |(h, _)| h);
    host.parse::<Ipv4Addr>().is_ok()
}

/// Normalize raw input, then validate it. Returns the normalized URL.
pub fn normalize_and_validate(raw: &str) -> Result<String, UrlValidationError> {
    if raw.trim().is_empty() {
        return Err(UrlValidationError::EmptyUrl);
    }

    let lower = raw.trim().to_lowercase();
    if let Some(proto) = DANGEROUS_PROTOCOLS.iter().find(|p| lower.starts_with(*p)) {
        return Err(UrlValidationError::DangerousProtocol(proto.to_string()));
    }

    let normalized = normalize_url(raw);
    validate_url(&normalized)?;
    Ok(normalized)
}

/// 获取 URL 验证错误的用户友好消息
pub fn validation_error_message(error: &UrlValidationError) -> &'static str {
    match error {
        UrlValidationError::EmptyUrl => "URL cannot be empty",
        UrlValidationError::InvalidProtocol(_) => "URL must start with http:// or https://",
        UrlValidationError::DangerousProtocol(_) => "This URL protocol is not allowed",
        UrlValidationError::InvalidHost(_) | UrlValidationError::InvalidFormat(_) => {
            "Please provide a valid URL"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_defaults_to_https() {
        assert_eq!(normalize_url("www.example.com"), "https://www.example.com");
        assert_eq!(normalize_url("  example.com/a  "), "https://example.com/a");
        assert_eq!(normalize_url("http://example.com"), "http://example.com");
        assert_eq!(normalize_url("HTTPS://example.com"), "HTTPS://example.com");
    }

    #[test]
    fn test_valid_urls() {
        assert!(validate_url("http://example.com").is_ok());
        assert!(validate_url("https://example.com").is_ok());
        assert!(validate_url("https://www.example.com").is_ok());
        assert!(validate_url("https://example.com/path?query=1").is_ok());
        assert!(validate_url("http://localhost:8080").is_ok());
        assert!(validate_url("http://127.0.0.1:5000/x").is_ok());
        assert!(validate_url("https://sub-domain.example.co.uk").is_ok());
        assert!(validate_url("https://example.com.").is_ok());
    }

    #[test]
    fn test_host_without_tld_is_rejected() {
        assert!(matches!(
            validate_url("https://not-a-valid-url"),
            Err(UrlValidationError::InvalidHost(_))
        ));
        assert!(matches!(
            validate_url("https://example.c"),
            Err(UrlValidationError::InvalidHost(_))
        ));
        assert!(matches!(
            validate_url("https://example.c0m"),
            Err(UrlValidationError::InvalidHost(_))
        ));
        assert!(validate_url("https://-bad.example.com").is_err());
    }

    #[test]
    fn test_ip_hosts() {
        assert!(matches!(
            validate_url("http://[::1]/"),
            Err(UrlValidationError::InvalidHost(_))
        ));
        assert!(matches!(
            validate_url("http://2130706433/"),
            Err(UrlValidationError::InvalidHost(_))
        ));
    }

    #[test]
    fn test_dangerous_protocols() {
        assert!(matches!(
            validate_url("javascript:alert(1)"),
            Err(UrlValidationError::DangerousProtocol(_))
        ));
        assert!(matches!(
            validate_url("file:///etc/passwd"),
            Err(UrlValidationError::DangerousProtocol(_))
        ));
        assert!(matches!(
            normalize_and_validate("data:text/html,hi"),
            Err(UrlValidationError::DangerousProtocol(_))
        ));
    }

    #[test]
    fn test_invalid_protocols() {
        assert!(matches!(
            validate_url("ftp://example.com"),
            Err(UrlValidationError::InvalidProtocol(_))
        ));
    }

    #[test]
    fn test_credentials_and_whitespace_rejected() {
        assert!(matches!(
            validate_url("https://user:pw@example.com"),
            Err(UrlValidationError::InvalidFormat(_))
        ));
        assert!(matches!(
            validate_url("https://example.com/a b"),
            Err(UrlValidationError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_control_characters_rejected() {
        for url in [
            "https://example.com/a\u{1}b",
            "https://example.com/\u{7f}",
            "https://example.com/?q=\u{85}",
        ] {
            assert!(
                matches!(validate_url(url), Err(UrlValidationError::InvalidFormat(_))),
                "accepted {:?}",
                url
            );
        }
        assert!(validate_url("https://example.com/caf\u{e9}").is_ok());
    }

    #[test]
    fn test_empty_url() {
        assert_eq!(validate_url(""), Err(UrlValidationError::EmptyUrl));
        assert_eq!(normalize_and_validate("   "), Err(UrlValidationError::EmptyUrl));
    }

    #[test]
    fn test_normalize_and_validate() {
        assert_eq!(
            normalize_and_validate("www.example.com").unwrap(),
            "https://www.example.com"
        );
        assert_eq!(
            normalize_and_validate(" https://example.com/path ").unwrap(),
            "https://example.com/path"
        );
        assert!(normalize_and_validate("not-a-valid-url").is_err());
    }
}
