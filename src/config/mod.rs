//! # Configuration Module
//!
//! 애플리케이션 설정을 관리하는 모듈입니다.
//! 모든 값은 환경 변수에서 읽으며, `main`에서 `.env.<PROFILE>` 파일을 먼저 로드합니다.
//!
//! ## 모듈 구성
//!
//! | 모듈 | 설정 | 주입 대상 |
//! |------|------|-----------|
//! | [`auth_config`] | [`TokenConfig`] | `TokenManager` |
//! | [`data_config`] | [`RedisConfig`], [`DatabaseConfig`] | 폐기 저장소, 자격 증명 저장소 |
//! | [`data_config`] | [`ServerConfig`], [`RateLimitConfig`] | HTTP 서버 |
//!
//! ## 환경 변수
//!
//! ```bash
//! # 토큰
//! export JWT_SECRET="your-super-secret-jwt-key"   # production 필수
//! export ACCESS_TOKEN_DURATION="15m"
//! export REFRESH_TOKEN_DURATION="7d"
//!
//! # 저장소
//! export REDIS_URL="redis://localhost:6379"
//! export REDIS_TIMEOUT_MS="500"
//! export MONGODB_URI="mongodb://localhost:27017"
//! export DATABASE_NAME="token_auth"
//! export CREDENTIALS_COLLECTION="credentials"
//!
//! # 서버
//! export HOST="0.0.0.0"
//! export PORT="8080"
//! export RATE_LIMIT_PER_SECOND="100"
//! export RATE_LIMIT_BURST_SIZE="200"
//! ```
//!
//! 토큰 설정은 전역 상태에서 읽지 않고 구조체로 만들어 `TokenManager` 생성 시 주입합니다.
//! 테스트에서는 [`TokenConfig::new`]로 비밀 키와 만료 시간을 직접 지정합니다.

pub mod data_config;
pub mod auth_config;

pub use data_config::*;
pub use auth_config::*;
