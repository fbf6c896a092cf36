//! 도메인 모델 모듈
//!
//! 서명된 토큰이 운반하는 클레임과 함께 발급되는 토큰 쌍을 정의합니다.

pub mod token;

pub use token::*;
