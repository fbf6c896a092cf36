//! 인증 서비스 모듈
//!
//! - [`token_codec`]: 서명된 토큰 발급과 해석
//! - [`token_manager`]: 토큰 종류 구분, 검증, 폐기
//! - [`auth_service`]: 로그인, 토큰 갱신(로테이션), 로그아웃 흐름
//! - [`password`]: 비밀번호 강도 정책과 bcrypt 해싱

pub mod auth_service;
pub mod password;
pub mod token_codec;
pub mod token_manager;

pub use auth_service::*;
pub use token_codec::*;
pub use token_manager::*;
