use serde::Serialize;

use crate::domain::models::token::TokenClaims;

/// API 응답 래퍼
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
        }
    }
}

/// 토큰 검증 응답 DTO
#[derive(Debug, Serialize)]
pub struct TokenValidationResponse {
    pub valid: bool,
    pub user_id: i64,
    pub email: String,
}

impl From<TokenClaims> for TokenValidationResponse {
    fn from(claims: TokenClaims) -> Self {
        Self {
            valid: true,
            user_id: claims.user_id,
            email: claims.email,
        }
    }
}

/// 로그아웃 응답 DTO
#[derive(Debug, Serialize)]
pub struct LogoutResponse {
    pub success: bool,
}
