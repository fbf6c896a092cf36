//! 공통 유틸리티 함수 모듈
//!
//! # Modules
//!
//! - [`string_utils`] - 필수 문자열 검증, 선택 문자열 정리, 로그용 토큰 지문
//!
//! # Examples
//!
//! ```rust,ignore
//! use token_auth_service::utils::string_utils::{token_fingerprint, validate_required_string};
//!
//! let email = validate_required_string("  user@example.com ", "email")?;
//! log::info!("토큰 폐기: {}", token_fingerprint(&token));
//! ```

pub mod string_utils;
