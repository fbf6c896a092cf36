use serde::Deserialize;
use validator::Validate;

use crate::utils::string_utils::deserialize_optional_string;

/// 토큰 갱신 요청 DTO
#[derive(Debug, Deserialize, Validate)]
pub struct RefreshRequest {
    #[validate(length(min = 1, message = "refresh token is required"))]
    pub refresh_token: String,
}

/// 로그아웃 요청 DTO
///
/// 액세스 토큰은 `Authorization: Bearer` 헤더에서 추출하고,
/// 본문에는 함께 폐기할 리프레시 토큰만 선택적으로 담습니다.
#[derive(Debug, Default, Deserialize)]
pub struct LogoutRequest {
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub refresh_token: Option<String>,
}

/// 토큰 검증 요청 DTO
///
/// 본문의 `token`이 없으면 `Authorization: Bearer` 헤더의 토큰을 검증합니다.
#[derive(Debug, Default, Deserialize)]
pub struct ValidateTokenRequest {
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub token: Option<String>,
}
