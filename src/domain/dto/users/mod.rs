//! # User Data Transfer Objects Module
//!
//! 로그인 요청과 로그인 응답(토큰 쌍 + 공개 사용자 정보)을 정의합니다.
//!
//! ## 로그인 JSON 예제
//!
//! ```json
//! // POST /api/v1/auth/login
//! { "email": "user@example.com", "password": "SecurePass123" }
//!
//! // 200 OK
//! {
//!   "success": true,
//!   "data": {
//!     "access_token": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...",
//!     "refresh_token": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...",
//!     "token_type": "Bearer",
//!     "expires_in": 900,
//!     "user": { "id": 1, "email": "user@example.com", "name": "User", "created_at": "2024-01-01T00:00:00+00:00" }
//!   },
//!   "message": null
//! }
//! ```

pub mod request;
pub mod response;
