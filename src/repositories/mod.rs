//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 서비스 계층이 의존하는 저장소 능력(capability)을 trait으로 정의하고,
//! 운영용(Redis, MongoDB)과 테스트용(메모리) 구현을 함께 제공합니다.
//!
//! | Trait | 운영 구현 | 테스트 구현 |
//! |-------|-----------|-------------|
//! | [`tokens::RevocationStore`] | [`tokens::RedisRevocationStore`] | [`tokens::InMemoryRevocationStore`] |
//! | [`users::CredentialStore`] | [`users::MongoCredentialStore`] | [`users::InMemoryCredentialStore`] |
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use token_auth_service::repositories::tokens::{InMemoryRevocationStore, RevocationStore};
//!
//! let store: Arc<dyn RevocationStore> = Arc::new(InMemoryRevocationStore::new());
//! ```

pub mod tokens;
pub mod users;
