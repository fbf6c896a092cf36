//! 인증 서비스 전역에서 사용하는 에러 시스템
//!
//! 토큰 코덱, 토큰 매니저, 인증 오케스트레이터가 반환하는 실패를
//! 하나의 열거형으로 분류합니다. `thiserror`로 `Error` trait을 구현하고,
//! `actix_web::ResponseError`를 구현하여 HTTP 응답으로 자동 변환됩니다.
//!
//! ## HTTP 응답 매핑
//!
//! | AuthError | HTTP Status | 응답 메시지 |
//! |-----------|-------------|-------------|
//! | `ValidationError` | 400 Bad Request | 필드 검증 메시지 |
//! | `InvalidCredentials` | 401 Unauthorized | invalid email or password |
//! | 토큰 거부 계열 | 401 Unauthorized | invalid or expired token |
//! | `LogoutFailed` | 500 Internal Server Error | failed to logout |
//! | 인프라 계열 | 500 Internal Server Error | internal server error |
//!
//! 토큰 거부 계열(`TokenExpired`, `TokenRevoked`, `TokenTypeMismatch`,
//! `SignatureInvalid`, `MalformedToken`, `InvalidOrExpiredToken`)은 모두 같은 메시지로
//! 응답하여 위조 시도나 식별자 열거에 단서를 주지 않습니다.

use std::time::Duration;

use actix_web::http::StatusCode;
use serde::Serialize;
use thiserror::Error;

use crate::domain::models::token::TokenKind;

/// 인증 서비스 에러 타입
///
/// 세부 원인은 서버 로그와 테스트에서만 구분되고,
/// 클라이언트에게는 [`AuthError::public_message`]만 노출됩니다.
#[derive(Error, Debug)]
pub enum AuthError {
    /// 식별자가 없거나 비밀번호가 일치하지 않음 (두 경우를 구분하지 않음)
    #[error("invalid credentials")]
    InvalidCredentials,

    /// 토큰의 만료 시각이 지남
    #[error("token has expired")]
    TokenExpired,

    /// 폐기 저장소(denylist)에 등록된 토큰
    #[error("token has been revoked")]
    TokenRevoked,

    /// 기대한 토큰 종류와 실제 종류가 다름
    #[error("invalid token type: expected {expected} token, got {actual}")]
    TokenTypeMismatch {
        expected: TokenKind,
        actual: TokenKind,
    },

    /// 서명이 일치하지 않거나 허용하지 않는 알고리즘
    #[error("token signature is invalid")]
    SignatureInvalid,

    /// 구조를 해석할 수 없는 토큰
    #[error("malformed token: {0}")]
    MalformedToken(String),

    /// 폐기 저장소 쓰기 실패
    #[error("failed to record revocation: {0}")]
    RevocationFailed(String),

    /// 폐기 저장소 조회 실패 (fail-closed)
    #[error("revocation store unavailable: {0}")]
    StoreUnavailable(String),

    /// 갱신/검증 호출자에게 노출되는 통합 토큰 거부
    #[error("invalid or expired token")]
    InvalidOrExpiredToken,

    /// 로그아웃 중 토큰 폐기 실패
    #[error("failed to logout: {0}")]
    LogoutFailed(String),

    /// 토큰 서명(발급) 실패
    #[error("failed to issue token: {0}")]
    TokenIssueFailed(String),

    /// 비밀번호 해싱 실패
    #[error("failed to hash password: {0}")]
    PasswordHashFailed(String),

    /// 자격 증명 저장소 I/O 실패
    #[error("credential store unavailable: {0}")]
    CredentialStoreUnavailable(String),

    /// 요청 필드 검증 실패 (400 Bad Request)
    #[error("Validation error: {0}")]
    ValidationError(String),
}

impl AuthError {
    /// 토큰 자체가 거부된 경우인지 확인합니다.
    ///
    /// 인프라 장애(`StoreUnavailable` 등)는 포함하지 않습니다.
    pub fn is_token_rejection(&self) -> bool {
        matches!(
            self,
            AuthError::TokenExpired
                | AuthError::TokenRevoked
                | AuthError::TokenTypeMismatch { .. }
                | AuthError::SignatureInvalid
                | AuthError::MalformedToken(_)
                | AuthError::InvalidOrExpiredToken
        )
    }

    /// 인프라 장애로 인한 에러인지 확인합니다.
    ///
    /// 이 계열만 서버 로그에 상세 원인과 함께 기록되고,
    /// 호출자에게는 일반 내부 오류로 보고됩니다.
    pub fn is_infrastructure(&self) -> bool {
        matches!(
            self,
            AuthError::RevocationFailed(_)
                | AuthError::StoreUnavailable(_)
                | AuthError::TokenIssueFailed(_)
                | AuthError::PasswordHashFailed(_)
                | AuthError::CredentialStoreUnavailable(_)
        )
    }

    /// 응답 본문에 포함되는 안정적인 에러 코드
    pub fn code(&self) -> &'static str {
        match self {
            AuthError::ValidationError(_) => "invalid_request",
            AuthError::InvalidCredentials => "invalid_credentials",
            AuthError::LogoutFailed(_) => "logout_failed",
            e if e.is_token_rejection() => "invalid_token",
            _ => "internal_error",
        }
    }

    /// 클라이언트에게 노출되는 일반 메시지
    pub fn public_message(&self) -> String {
        match self {
            AuthError::ValidationError(msg) => msg.clone(),
            AuthError::InvalidCredentials => "invalid email or password".to_string(),
            AuthError::LogoutFailed(_) => "failed to logout".to_string(),
            e if e.is_token_rejection() => "invalid or expired token".to_string(),
            _ => "internal server error".to_string(),
        }
    }
}

/// 에러 응답 본문
#[derive(Debug, Serialize)]
struct ErrorBody {
    success: bool,
    code: &'static str,
    message: String,
}

impl actix_web::ResponseError for AuthError {
    fn status_code(&self) -> StatusCode {
        match self {
            AuthError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AuthError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            e if e.is_token_rejection() => StatusCode::UNAUTHORIZED,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 인프라 계열 에러는 여기서 상세 원인과 함께 로그에 남기고,
    /// 응답에는 일반 메시지만 담습니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        if self.is_infrastructure() || matches!(self, AuthError::LogoutFailed(_)) {
            log::error!("요청 처리 중 내부 오류: {}", self);
        }

        actix_web::HttpResponse::build(self.status_code()).json(ErrorBody {
            success: false,
            code: self.code(),
            message: self.public_message(),
        })
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AuthResult<T> = Result<T, AuthError>;

/// 키-값 저장소(폐기 저장소, 자격 증명 저장소) 호출 실패
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StoreError {
    /// 저장소 응답이 제한 시간 안에 오지 않음
    #[error("store call timed out after {0:?}")]
    Timeout(Duration),

    /// 저장소 백엔드 오류 (연결 실패, 프로토콜 오류 등)
    #[error("store backend error: {0}")]
    Backend(String),
}

impl From<redis::RedisError> for StoreError {
    fn from(e: redis::RedisError) -> Self {
        StoreError::Backend(e.to_string())
    }
}

impl From<mongodb::error::Error> for StoreError {
    fn from(e: mongodb::error::Error) -> Self {
        StoreError::Backend(e.to_string())
    }
}

/// 설정 로딩 실패
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// 필수 환경 변수 누락
    #[error("missing required configuration: {0}")]
    Missing(String),

    /// 값 형식 오류
    #[error("invalid value for {key}: {value}")]
    Invalid { key: String, value: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::ResponseError;

    #[test]
    fn test_token_rejections_share_status_and_message() {
        let rejections = vec![
            AuthError::TokenExpired,
            AuthError::TokenRevoked,
            AuthError::TokenTypeMismatch {
                expected: TokenKind::Access,
                actual: TokenKind::Refresh,
            },
            AuthError::SignatureInvalid,
            AuthError::MalformedToken("bad base64".to_string()),
            AuthError::InvalidOrExpiredToken,
        ];

        for error in rejections {
            assert_eq!(error.status_code(), StatusCode::UNAUTHORIZED);
            assert_eq!(error.public_message(), "invalid or expired token");
            assert_eq!(error.code(), "invalid_token");
        }
    }

    #[test]
    fn test_invalid_credentials_response() {
        let error = AuthError::InvalidCredentials;
        let response = error.error_response();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(error.public_message(), "invalid email or password");
    }

    #[test]
    fn test_validation_error_response() {
        let error = AuthError::ValidationError("email is required".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(error.public_message(), "email is required");
    }

    #[test]
    fn test_infrastructure_errors_hide_details() {
        let errors = vec![
            AuthError::RevocationFailed("connection refused".to_string()),
            AuthError::StoreUnavailable("timed out".to_string()),
            AuthError::TokenIssueFailed("bad key".to_string()),
            AuthError::PasswordHashFailed("invalid cost".to_string()),
            AuthError::CredentialStoreUnavailable("mongo down".to_string()),
        ];

        for error in errors {
            assert!(error.is_infrastructure());
            assert!(!error.is_token_rejection());
            assert_eq!(error.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
            assert_eq!(error.public_message(), "internal server error");
        }
    }

    #[test]
    fn test_logout_failed_response() {
        let error = AuthError::LogoutFailed("redis down".to_string());

        assert_eq!(error.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(error.public_message(), "failed to logout");
        assert!(!error.is_token_rejection());
    }
}
