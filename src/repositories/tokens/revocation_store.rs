use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use std::time::{Duration, Instant};

use async_trait::async_trait;

use crate::caching::redis::RedisClient;
use crate::errors::StoreError;

/// 폐기 항목 키 접두사
pub const REVOCATION_KEY_PREFIX: &str = "blacklist:";

/// 폐기 항목 값 (내용은 의미 없고 존재 여부만 신호로 쓰임)
pub const REVOKED_MARKER: &str = "revoked";

/// 토큰 원문으로부터 폐기 항목 키를 만듭니다.
pub fn revocation_key(token: &str) -> String {
    format!("{}{}", REVOCATION_KEY_PREFIX, token)
}

/// 키별 TTL을 지원하는 폐기 저장소
///
/// 구현체는 단일 키에 대해 read-after-write 일관성을 보장해야 합니다.
/// 쓰기가 확인된 직후의 `exists` 호출은 반드시 그 쓰기를 관찰해야 합니다.
#[async_trait]
pub trait RevocationStore: Send + Sync {
    /// 키가 존재하는지 확인합니다.
    ///
    /// 저장소에 닿지 못했다면 `false`가 아니라 에러를 반환해야 합니다.
    async fn exists(&self, key: &str) -> Result<bool, StoreError>;

    /// 값을 TTL과 함께 기록합니다. TTL이 지나면 항목은 자동으로 사라집니다.
    async fn set_with_ttl(&self, key: &str, value: &str, ttl: Duration) -> Result<(), StoreError>;
}

fn ensure_positive_ttl(ttl: Duration) -> Result<(), StoreError> {
    if ttl.is_zero() {
        return Err(StoreError::Backend("ttl must be positive".to_string()));
    }
    Ok(())
}

/// Redis 기반 폐기 저장소
///
/// `EXISTS`와 `SET ... PX`를 사용하며, 모든 호출은 [`RedisClient`]의 제한 시간을 따릅니다.
pub struct RedisRevocationStore {
    redis: Arc<RedisClient>,
}

impl RedisRevocationStore {
    pub fn new(redis: Arc<RedisClient>) -> Self {
        Self { redis }
    }
}

#[async_trait]
impl RevocationStore for RedisRevocationStore {
    async fn exists(&self, key: &str) -> Result<bool, StoreError> {
        self.redis.exists(key).await
    }

    async fn set_with_ttl(&self, key: &str, value: &str, ttl: Duration) -> Result<(), StoreError> {
        ensure_positive_ttl(ttl)?;
        let millis = u64::try_from(ttl.as_millis()).unwrap_or(u64::MAX);
        self.redis.set_with_expiry_millis(key, value, millis).await
    }
}

/// 메모리 기반 폐기 저장소
///
/// 테스트와 단일 프로세스 실행용입니다. 만료된 항목은 조회 시점에 지연 삭제됩니다.
#[derive(Default)]
pub struct InMemoryRevocationStore {
    entries: RwLock<HashMap<String, (String, Instant)>>,
}

impl InMemoryRevocationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 키의 남은 TTL. 없거나 만료된 키는 `None`
    pub fn ttl(&self, key: &str) -> Option<Duration> {
        let entries = self.entries.read().ok()?;
        let (_, deadline) = entries.get(key)?;
        deadline.checked_duration_since(Instant::now()).filter(|d| !d.is_zero())
    }

    /// 아직 만료되지 않은 항목 수
    pub fn len(&self) -> usize {
        let now = Instant::now();
        self.entries
            .read()
            .map(|entries| entries.values().filter(|(_, deadline)| *deadline > now).count())
            .unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn poisoned<T>(_: T) -> StoreError {
    StoreError::Backend("revocation store lock poisoned".to_string())
}

#[async_trait]
impl RevocationStore for InMemoryRevocationStore {
    async fn exists(&self, key: &str) -> Result<bool, StoreError> {
        let now = Instant::now();
        {
            let entries = self.entries.read().map_err(poisoned)?;
            match entries.get(key) {
                None => return Ok(false),
                Some((_, deadline)) if *deadline > now => return Ok(true),
                Some(_) => {}
            }
        }

        // 만료된 항목 정리
        let mut entries = self.entries.write().map_err(poisoned)?;
        if matches!(entries.get(key), Some((_, deadline)) if *deadline <= now) {
            entries.remove(key);
        }
        Ok(false)
    }

    async fn set_with_ttl(&self, key: &str, value: &str, ttl: Duration) -> Result<(), StoreError> {
        ensure_positive_ttl(ttl)?;
        let deadline = Instant::now() + ttl;
        self.entries
            .write()
            .map_err(poisoned)?
            .insert(key.to_string(), (value.to_string(), deadline));
        Ok(())
    }
}

/// 장애를 흉내 내는 폐기 저장소 (테스트 전용)
#[cfg(test)]
pub(crate) struct FailingRevocationStore {
    pub fail_reads: bool,
    pub fail_writes: bool,
    pub inner: InMemoryRevocationStore,
}

#[cfg(test)]
impl FailingRevocationStore {
    pub fn reads() -> Self {
        Self {
            fail_reads: true,
            fail_writes: false,
            inner: InMemoryRevocationStore::new(),
        }
    }

    pub fn writes() -> Self {
        Self {
            fail_reads: false,
            fail_writes: true,
            inner: InMemoryRevocationStore::new(),
        }
    }
}

#[cfg(test)]
#[async_trait]
impl RevocationStore for FailingRevocationStore {
    async fn exists(&self, key: &str) -> Result<bool, StoreError> {
        if self.fail_reads {
            return Err(StoreError::Timeout(Duration::from_millis(500)));
        }
        self.inner.exists(key).await
    }

    async fn set_with_ttl(&self, key: &str, value: &str, ttl: Duration) -> Result<(), StoreError> {
        if self.fail_writes {
            return Err(StoreError::Backend("connection refused".to_string()));
        }
        self.inner.set_with_ttl(key, value, ttl).await
    }
}
