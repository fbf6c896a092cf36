//! Authentication HTTP Handlers
//!
//! 토큰 수명주기와 관련된 HTTP 엔드포인트입니다.
//!
//! # Endpoints
//!
//! - `POST /api/v1/auth/login` - 이메일/비밀번호 로그인, 토큰 쌍 발급
//! - `POST /api/v1/auth/validate` - 액세스 토큰 검증 (본문 `token` 또는 Bearer 헤더)
//! - `POST /api/v1/auth/refresh` - 리프레시 토큰 로테이션
//! - `POST /api/v1/auth/logout` - Bearer 액세스 토큰과 선택적 리프레시 토큰 폐기

use actix_web::http::header;
use actix_web::{post, web, HttpRequest, HttpResponse};
use validator::Validate;

use crate::domain::dto::{
    ApiResponse, LoginRequest, LoginResponse, LogoutRequest, LogoutResponse, RefreshRequest,
    TokenValidationResponse, ValidateTokenRequest,
};
use crate::errors::AuthError;
use crate::services::auth::AuthService;

/// `Authorization: Bearer <token>` 헤더에서 토큰을 꺼냅니다.
///
/// 헤더가 없거나 Bearer 형식이 아니면 `None`
fn bearer_token(req: &HttpRequest) -> Option<String> {
    req.headers()
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
}

/// 로그인
///
/// # Request
///
/// ```json
/// { "email": "user@example.com", "password": "SecurePass123" }
/// ```
///
/// # Errors
///
/// - 400: 빈 필드
/// - 401: `invalid email or password`
#[post("/login")]
pub async fn login(
    auth: web::Data<AuthService>,
    payload: web::Json<LoginRequest>,
) -> Result<HttpResponse, AuthError> {
    payload.validate()
        .map_err(|e| AuthError::ValidationError(e.to_string()))?;

    let outcome = auth.login(&payload.email, &payload.password).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(LoginResponse::new(
        outcome.tokens,
        outcome.profile,
    ))))
}

/// 액세스 토큰 검증
///
/// 본문의 `token`이 우선이며, 없으면 Bearer 헤더를 사용합니다.
#[post("/validate")]
pub async fn validate_token(
    req: HttpRequest,
    auth: web::Data<AuthService>,
    body: Option<web::Json<ValidateTokenRequest>>,
) -> Result<HttpResponse, AuthError> {
    let token = body
        .and_then(|b| b.into_inner().token)
        .or_else(|| bearer_token(&req))
        .unwrap_or_default();

    let claims = auth.validate_token(&token).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(TokenValidationResponse::from(claims))))
}

/// 리프레시 토큰 로테이션
#[post("/refresh")]
pub async fn refresh_token(
    auth: web::Data<AuthService>,
    payload: web::Json<RefreshRequest>,
) -> Result<HttpResponse, AuthError> {
    payload.validate()
        .map_err(|e| AuthError::ValidationError(e.to_string()))?;

    let pair = auth.refresh_token(&payload.refresh_token).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(pair)))
}

/// 로그아웃
///
/// 액세스 토큰은 Bearer 헤더에서, 리프레시 토큰은 선택적으로 본문에서 받습니다.
#[post("/logout")]
pub async fn logout(
    req: HttpRequest,
    auth: web::Data<AuthService>,
    body: Option<web::Json<LogoutRequest>>,
) -> Result<HttpResponse, AuthError> {
    let access_token = bearer_token(&req).unwrap_or_default();
    let refresh = body.and_then(|b| b.into_inner().refresh_token);

    auth.logout(&access_token, refresh.as_deref()).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(LogoutResponse { success: true })))
}
