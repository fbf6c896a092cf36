//! 사용자 자격 증명 엔티티

pub mod user;

pub use user::*;
