//! 자격 증명 저장소 모듈
//!
//! 로그인 시 식별자(이메일)로 자격 증명 레코드를 조회하고 비밀번호를 검증합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use token_auth_service::repositories::users::{CredentialStore, MongoCredentialStore};
//!
//! let store = MongoCredentialStore::new(&database, "credentials");
//! if let Some(record) = store.find_by_identifier("user@example.com").await? {
//!     let ok = store.verify_secret(&record, "SecurePass123");
//! }
//! ```

pub mod credential_store;

pub use credential_store::*;
