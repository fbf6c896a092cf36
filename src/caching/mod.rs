//! 캐싱 계층 모듈
//!
//! Redis 연결을 관리합니다. 토큰 폐기 목록(denylist)이 이 연결 위에 올라갑니다.
//!
//! # 사용 예제
//!
//! ```rust,ignore
//! use token_auth_service::caching::redis::RedisClient;
//! use token_auth_service::config::RedisConfig;
//!
//! let redis = RedisClient::new(&RedisConfig::from_env()).await?;
//! redis.set_with_expiry_millis("blacklist:<token>", "revoked", 60_000).await?;
//! assert!(redis.exists("blacklist:<token>").await?);
//! ```
//!
//! # 환경 설정
//!
//! ```bash
//! REDIS_URL=redis://localhost:6379  # 기본값
//! REDIS_TIMEOUT_MS=500              # 호출당 제한 시간
//! ```

pub mod redis;
