//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 정의하는 모듈입니다.
//!
//! ## 아키텍처 위치
//!
//! ```text
//! Client
//!   │  POST /api/v1/auth/{login,validate,refresh,logout}
//!   ▼
//! handlers::auth   ← 요청 파싱, 필드 검증, 응답 래핑
//!   │  web::Data<AuthService>
//!   ▼
//! services::auth::AuthService
//! ```
//!
//! 핸들러는 `Result<HttpResponse, AuthError>`를 반환하며,
//! 에러는 `AuthError`의 `ResponseError` 구현으로 HTTP 응답이 됩니다.

pub mod auth;
