//! 도메인 엔티티
//!
//! 저장소에 영속되는 객체들입니다.

pub mod users;

pub use users::*;
