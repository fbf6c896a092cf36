//! # Data Transfer Objects (DTO) Module
//!
//! HTTP 경계에서 쓰이는 요청/응답 구조체를 정의합니다.
//!
//! ## 모듈 구조
//!
//! ```text
//! dto/
//! ├── tokens/
//! │   ├── request.rs    - 토큰 검증/갱신/로그아웃 요청
//! │   └── response.rs   - 공통 응답 래퍼, 검증/로그아웃 응답
//! └── users/
//!     ├── request/      - 로그인 요청
//!     └── response/     - 로그인 응답, 공개 사용자 정보
//! ```
//!
//! ## 설계 원칙
//!
//! - **빈 값 거부**: 모든 요청 DTO는 `validator`로 필수 필드를 검사하며,
//!   실패는 `AuthError::ValidationError`(400)로 변환됩니다.
//! - **민감 정보 제외**: 응답 DTO에는 비밀번호 해시나 폐기 사유가 실리지 않습니다.
//! - **일관된 래핑**: 성공 응답은 모두 `{ "success": true, "data": ... }` 형태입니다.

pub mod tokens;
pub mod users;

pub use tokens::request::*;
pub use tokens::response::*;
pub use users::request::*;
pub use users::response::*;
