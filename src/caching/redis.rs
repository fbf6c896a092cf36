//! # Redis 클라이언트 구현
//!
//! 멀티플렉싱된 단일 연결 위에서 키 존재 확인과 밀리초 단위 TTL 쓰기를 제공합니다.
//!
//! ## 제한 시간
//!
//! 모든 호출은 설정된 제한 시간 안에 끝나야 합니다.
//! 시간을 넘기면 `StoreError::Timeout`을 반환하며, 호출자는 이를
//! "키 없음"이 아닌 장애로 취급해야 합니다.

use std::future::Future;
use std::time::Duration;

use actix_web::rt::time::timeout;
use log::info;
use redis::aio::MultiplexedConnection;
use redis::{AsyncCommands, Client, RedisResult};

use crate::config::RedisConfig;
use crate::errors::StoreError;

/// Redis 클라이언트 래퍼
///
/// 내부 연결은 복제 비용이 낮은 멀티플렉싱 연결이므로,
/// 호출마다 연결을 복제해서 사용합니다.
#[derive(Clone)]
pub struct RedisClient {
    connection: MultiplexedConnection,
    timeout: Duration,
}

impl RedisClient {
    /// Redis에 연결하고 `PING`으로 연결을 확인합니다.
    ///
    /// # Errors
    ///
    /// * `StoreError::Backend` - URL 파싱 실패, 연결 실패
    /// * `StoreError::Timeout` - 연결 또는 PING이 제한 시간을 넘김
    pub async fn new(config: &RedisConfig) -> Result<Self, StoreError> {
        let client = Client::open(config.url.as_str())?;

        let connection = match timeout(config.timeout, client.get_multiplexed_async_connection()).await {
            Ok(result) => result?,
            Err(_) => return Err(StoreError::Timeout(config.timeout)),
        };

        let redis = Self {
            connection,
            timeout: config.timeout,
        };
        redis.ping().await?;

        info!("✅ Redis 연결 성공");
        Ok(redis)
    }

    pub async fn ping(&self) -> Result<(), StoreError> {
        let mut conn = self.connection.clone();
        self.bounded(async move { redis::cmd("PING").query_async::<()>(&mut conn).await })
            .await
    }

    /// 키가 존재하는지 확인합니다 (`EXISTS`).
    pub async fn exists(&self, key: &str) -> Result<bool, StoreError> {
        let mut conn = self.connection.clone();
        self.bounded(async move { conn.exists(key).await }).await
    }

    /// 값을 밀리초 단위 TTL과 함께 저장합니다 (`SET key value PX millis`).
    pub async fn set_with_expiry_millis(
        &self,
        key: &str,
        value: &str,
        millis: u64,
    ) -> Result<(), StoreError> {
        let mut conn = self.connection.clone();
        self.bounded(async move { conn.pset_ex(key, value, millis).await })
            .await
    }

    async fn bounded<T, F>(&self, operation: F) -> Result<T, StoreError>
    where
        F: Future<Output = RedisResult<T>>,
    {
        bounded(self.timeout, operation).await
    }
}

/// 제한 시간 안에 끝나지 않은 호출은 `StoreError::Timeout`
async fn bounded<T, F>(limit: Duration, operation: F) -> Result<T, StoreError>
where
    F: Future<Output = RedisResult<T>>,
{
    match timeout(limit, operation).await {
        Ok(result) => result.map_err(StoreError::from),
        Err(_) => Err(StoreError::Timeout(limit)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use redis::{ErrorKind, RedisError};

    #[actix_web::test]
    async fn test_stalled_call_times_out() {
        let limit = Duration::from_millis(1);

        let result = bounded(limit, std::future::pending::<RedisResult<bool>>()).await;

        assert_eq!(result, Err(StoreError::Timeout(limit)));
    }

    #[actix_web::test]
    async fn test_backend_error_is_not_a_miss() {
        let failing = async { Err::<bool, _>(RedisError::from((ErrorKind::IoError, "connection reset"))) };

        let result = bounded(Duration::from_millis(50), failing).await;

        assert!(matches!(result, Err(StoreError::Backend(_))));
    }

    #[actix_web::test]
    async fn test_completed_call_passes_through() {
        let result = bounded(Duration::from_millis(50), async { Ok::<_, RedisError>(true) }).await;

        assert_eq!(result, Ok(true));
    }
}
