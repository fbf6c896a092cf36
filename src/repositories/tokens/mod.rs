//! 토큰 폐기 목록(denylist) 저장소 모듈
//!
//! 폐기된 토큰을 원문 그대로 키로 삼아, 토큰의 남은 수명만큼의 TTL로 기록합니다.
//! 항목은 TTL이 지나면 저장소가 알아서 잊어버리므로 별도의 정리 작업이 없습니다.
//!
//! # Key format
//!
//! ```text
//! blacklist:<raw token string>  →  "revoked"  (PX = 남은 수명 밀리초)
//! ```

pub mod revocation_store;

pub use revocation_store::*;
