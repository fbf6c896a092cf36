//! 토큰 인증 서비스
//!
//! 액세스/리프레시 토큰을 발급, 검증, 갱신, 폐기하는 인증 서비스입니다.
//! 토큰은 공유 비밀 키로 서명된 HS256 JWT이며, 폐기된 토큰은 TTL이 걸린
//! denylist 항목으로 Redis에 기록됩니다.
//!
//! # Features
//!
//! - **토큰 종류 구분**: 액세스 토큰과 리프레시 토큰은 서로의 자리에서 절대 통과하지 않음
//! - **리프레시 로테이션**: 갱신 시 이전 리프레시 토큰 폐기 후 새 토큰 쌍 발급
//! - **자동 만료 denylist**: 폐기 항목은 토큰의 남은 수명만큼만 유지
//! - **Fail-closed**: 폐기 저장소를 조회할 수 없으면 토큰을 거부
//! - **MongoDB**: 자격 증명(이메일, bcrypt 해시) 저장
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  AuthService    │ ← 로그인, 검증, 갱신, 로그아웃
//! │  TokenManager   │ ← 발급, 검증, 폐기
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← CredentialStore, RevocationStore
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ MongoDB + Redis │ ← 저장소
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use token_auth_service::config::TokenConfig;
//! use token_auth_service::repositories::tokens::InMemoryRevocationStore;
//! use token_auth_service::repositories::users::InMemoryCredentialStore;
//! use token_auth_service::services::auth::{AuthService, TokenManager};
//!
//! let config = TokenConfig::from_env()?;
//! let tokens = TokenManager::new(&config, Arc::new(InMemoryRevocationStore::new()));
//! let auth = AuthService::new(Arc::new(tokens), Arc::new(InMemoryCredentialStore::new()));
//!
//! let outcome = auth.login("user@example.com", "SecurePass123").await?;
//! let claims = auth.validate_token(&outcome.tokens.access_token).await?;
//! ```

pub mod config;
pub mod db;
pub mod caching;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
pub mod errors;
