//! # 문자열 유틸리티
//!
//! 요청 필드 정리와 로그용 토큰 지문 계산에 쓰이는 함수들입니다.

use serde::Deserialize;
use sha2::{Digest, Sha256};

use crate::errors::AuthError;

const FINGERPRINT_LEN: usize = 12;

/// 필수 문자열 필드를 검증하고 앞뒤 공백을 제거합니다.
///
/// # Errors
///
/// 공백만 있거나 비어 있으면 `"<field_name> is required"` 메시지의 `AuthError::ValidationError`
pub fn validate_required_string(value: &str, field_name: &str) -> Result<String, AuthError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AuthError::ValidationError(format!("{} is required", field_name)));
    }
    Ok(trimmed.to_string())
}

/// 공백뿐인 선택 문자열을 `None`으로 정리합니다.
pub fn clean_optional_string(value: Option<String>) -> Option<String> {
    value.and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// serde `deserialize_with`용: 빈 문자열을 `None`으로 역직렬화합니다.
pub fn deserialize_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(clean_optional_string(opt))
}

/// 로그 상관관계용 토큰 지문 (SHA-256 앞 12자리 hex)
///
/// 토큰 원문은 로그에 남기지 않고 이 값만 남깁니다.
pub fn token_fingerprint(token: &str) -> String {
    let digest = Sha256::digest(token.as_bytes());
    let mut hex: String = digest.iter().map(|b| format!("{:02x}", b)).collect();
    hex.truncate(FINGERPRINT_LEN);
    hex
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_required_string() {
        assert_eq!(validate_required_string("Hello", "name").unwrap(), "Hello");
        assert_eq!(validate_required_string("  World  ", "name").unwrap(), "World");

        assert!(validate_required_string("", "name").is_err());
        assert!(validate_required_string("   ", "name").is_err());
        assert!(validate_required_string("\t\n", "name").is_err());

        match validate_required_string("", "token") {
            Err(AuthError::ValidationError(msg)) => assert_eq!(msg, "token is required"),
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn test_clean_optional_string() {
        assert_eq!(clean_optional_string(Some("Hello".to_string())), Some("Hello".to_string()));
        assert_eq!(clean_optional_string(Some("  World  ".to_string())), Some("World".to_string()));
        assert_eq!(clean_optional_string(Some("".to_string())), None);
        assert_eq!(clean_optional_string(Some("   ".to_string())), None);
        assert_eq!(clean_optional_string(None), None);
    }

    #[test]
    fn test_deserialize_optional_string() {
        #[derive(Deserialize)]
        struct Body {
            #[serde(default, deserialize_with = "deserialize_optional_string")]
            value: Option<String>,
        }

        let body: Body = serde_json::from_str(r#"{"value": "  "}"#).unwrap();
        assert_eq!(body.value, None);

        let body: Body = serde_json::from_str(r#"{"value": "abc"}"#).unwrap();
        assert_eq!(body.value, Some("abc".to_string()));

        let body: Body = serde_json::from_str("{}").unwrap();
        assert_eq!(body.value, None);
    }

    #[test]
    fn test_token_fingerprint() {
        let fp = token_fingerprint("header.payload.signature");

        assert_eq!(fp.len(), 12);
        assert!(fp.chars().all(|c| c.is_ascii_hexdigit()));
        assert_eq!(fp, token_fingerprint("header.payload.signature"));
        assert_ne!(fp, token_fingerprint("header.payload.signaturf"));
        // SHA-256("") = e3b0c442...
        assert_eq!(token_fingerprint(""), "e3b0c44298fc");
    }
}
