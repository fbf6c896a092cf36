//! 에러 타입 모듈
//!
//! 토큰 생명주기(발급, 검증, 폐기)와 인증 흐름에서 발생하는 모든 실패를
//! 타입으로 분류합니다. HTTP 계층에서는 `actix_web::ResponseError` 구현을 통해
//! 어떤 세부 검사가 실패했는지 드러내지 않는 일반 메시지로 변환됩니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::errors::{AuthError, AuthResult};
//!
//! fn check(token: &str) -> AuthResult<()> {
//!     if token.is_empty() {
//!         return Err(AuthError::ValidationError("token is required".to_string()));
//!     }
//!     Ok(())
//! }
//! ```

pub mod errors;

pub use errors::*;
