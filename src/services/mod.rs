//! # Service Layer Module
//!
//! 토큰 수명주기와 인증 흐름을 담당하는 서비스 계층입니다.
//!
//! ```text
//! handlers ──▶ AuthService ──▶ TokenManager ──▶ TokenCodec
//!                  │                 │
//!                  ▼                 ▼
//!          CredentialStore    RevocationStore
//! ```

pub mod auth;
