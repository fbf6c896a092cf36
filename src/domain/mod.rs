//! # Domain Layer Module
//!
//! 토큰 인증 서비스의 도메인 계층입니다.
//! 토큰 클레임, 자격 증명 레코드, API 요청/응답 계약을 한곳에 모읍니다.
//!
//! ## 아키텍처 개요
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── Entities     - 자격 증명 레코드와 공개 프로필
//! ├── DTOs         - 데이터 전송 객체 (Request/Response)
//! └── Models       - 토큰 클레임, 토큰 종류, 토큰 쌍
//!      │
//!      ▼
//! Application Layer (Services)
//!      │
//!      ▼
//! Infrastructure Layer (Repositories, Redis, MongoDB)
//! ```
//!
//! ## 모듈 구성
//!
//! ### [`entities`] - 자격 증명 엔티티
//!
//! 자격 증명 저장소(MongoDB 또는 메모리)에 보관되는 레코드입니다.
//! 비밀번호 해시는 [`entities::CredentialRecord`]에만 존재하며,
//! 외부로 나가는 [`entities::UserProfile`]에는 포함되지 않습니다.
//!
//! ### [`dto`] - 데이터 전송 객체
//!
//! HTTP 경계에서 쓰이는 요청/응답 구조체입니다.
//! 요청 DTO는 `validator`로 빈 값을 거르고, 응답 DTO는 [`dto::ApiResponse`]로 감쌉니다.
//!
//! ### [`models`] - 토큰 모델
//!
//! JWT 페이로드에 직렬화되는 [`models::TokenClaims`]와 토큰 종류 [`models::TokenKind`],
//! 로그인/갱신 결과인 [`models::TokenPair`]를 정의합니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use token_auth_service::domain::{TokenKind, UserProfile};
//!
//! let claims = token_manager.validate(&token, TokenKind::Access).await?;
//! println!("{} ({})", claims.email, claims.user_id);
//! ```

pub mod entities;
pub mod dto;
pub mod models;

pub use entities::{CredentialRecord, UserProfile};
pub use models::{TokenClaims, TokenKind, TokenPair};
