pub mod url_validator;

/// 短码长度（固定 6 位）
pub const SHORT_CODE_LENGTH: usize = 6;

/// 短码字符集：大小写字母 + 数字，共 62 个
pub const SHORT_CODE_ALPHABET: &[u8; 62] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

pub fn generate_random_code(length: usize) -> String {
    use std::iter;

    // 随机选择字母和数字
    iter::repeat_with(|| {
        SHORT_CODE_ALPHABET[rand::random_range(0..SHORT_CODE_ALPHABET.len())] as char
    })
    .take(length)
    .collect()
}

/// 短码格式校验：恰好 6 个 ASCII 字母或数字
#[inline]
pub fn is_valid_short_code(code: &str) -> bool {
    code.len() == SHORT_CODE_LENGTH && code.bytes().all(|b| b.is_ascii_alphanumeric())
}
