//! # 사용자 관련 요청 DTO 모듈
//!
//! 클라이언트로부터 받은 JSON을 구조화된 타입으로 변환하고,
//! `validator` 크레이트로 필수 필드를 검증합니다.

pub mod auth_request;

pub use auth_request::LoginRequest;
