//! 토큰 매니저
//!
//! 코덱과 폐기 저장소를 조합해 토큰 발급, 검증, 폐기를 담당합니다.
//!
//! ## 검증 순서
//!
//! 1. 폐기 저장소 조회 (`blacklist:<token>`), 존재하면 `TokenRevoked`
//! 2. 서명 검증과 클레임 해석
//! 3. 토큰 종류 확인, 다르면 `TokenTypeMismatch`
//! 4. 만료 확인 (`exp > now`), 지났으면 `TokenExpired`
//!
//! 폐기 저장소를 조회할 수 없으면 `StoreUnavailable`로 실패합니다.
//! 조회 실패를 "폐기되지 않음"으로 취급하지 않습니다.
//!
//! ## 폐기
//!
//! 폐기 항목의 TTL은 토큰의 남은 수명과 같습니다. 이미 만료된 토큰은 기록하지 않습니다.
//! 따라서 저장소 크기는 "수명 창 안의 폐기 건수"로 자연히 제한되고, 정리 작업이 필요 없습니다.

use std::sync::Arc;

use chrono::{Duration, Utc};

use crate::config::TokenConfig;
use crate::domain::models::token::{TokenClaims, TokenKind, TokenPair};
use crate::errors::{AuthError, AuthResult};
use crate::repositories::tokens::{revocation_key, RevocationStore, REVOKED_MARKER};
use crate::utils::string_utils::token_fingerprint;

use super::token_codec::TokenCodec;

/// 토큰 수명주기 관리자
///
/// 비밀 키와 만료 시간은 생성 시 주입된 [`TokenConfig`]에서만 가져옵니다.
pub struct TokenManager {
    codec: TokenCodec,
    access_ttl: Duration,
    refresh_ttl: Duration,
    store: Arc<dyn RevocationStore>,
}

impl TokenManager {
    pub fn new(config: &TokenConfig, store: Arc<dyn RevocationStore>) -> Self {
        Self {
            codec: TokenCodec::new(config.secret()),
            access_ttl: config.access_ttl(),
            refresh_ttl: config.refresh_ttl(),
            store,
        }
    }

    /// 액세스 토큰 유효 기간
    pub fn access_ttl(&self) -> Duration {
        self.access_ttl
    }

    pub fn generate_access_token(&self, user_id: i64, email: &str) -> AuthResult<String> {
        self.codec.issue(user_id, email, TokenKind::Access, self.access_ttl)
    }

    pub fn generate_refresh_token(&self, user_id: i64, email: &str) -> AuthResult<String> {
        self.codec.issue(user_id, email, TokenKind::Refresh, self.refresh_ttl)
    }

    /// 같은 주체의 액세스/리프레시 토큰 쌍을 발급합니다.
    pub fn generate_token_pair(&self, user_id: i64, email: &str) -> AuthResult<TokenPair> {
        Ok(TokenPair {
            access_token: self.generate_access_token(user_id, email)?,
            refresh_token: self.generate_refresh_token(user_id, email)?,
            token_type: "Bearer".to_string(),
            expires_in: self.access_ttl.num_seconds(),
        })
    }

    /// 토큰을 검증하고 클레임을 반환합니다.
    ///
    /// # Arguments
    ///
    /// * `token` - 토큰 원문
    /// * `expected` - 이 호출 지점에서 요구하는 토큰 종류
    ///
    /// # Errors
    ///
    /// * `AuthError::TokenRevoked` - 폐기된 토큰
    /// * `AuthError::StoreUnavailable` - 폐기 저장소 조회 실패
    /// * `AuthError::SignatureInvalid` / `AuthError::MalformedToken` - 해석 실패
    /// * `AuthError::TokenTypeMismatch` - 종류 불일치
    /// * `AuthError::TokenExpired` - 만료
    pub async fn validate(&self, token: &str, expected: TokenKind) -> AuthResult<TokenClaims> {
        match self.store.exists(&revocation_key(token)).await {
            Ok(true) => {
                log::debug!("폐기된 토큰 사용 시도: {}", token_fingerprint(token));
                return Err(AuthError::TokenRevoked);
            }
            Ok(false) => {}
            Err(e) => {
                log::error!("폐기 저장소 조회 실패 (토큰 {}): {}", token_fingerprint(token), e);
                return Err(AuthError::StoreUnavailable(e.to_string()));
            }
        }

        let claims = self.codec.parse(token)?;

        if claims.token_type != expected {
            return Err(AuthError::TokenTypeMismatch {
                expected,
                actual: claims.token_type,
            });
        }

        if claims.is_expired_at(Utc::now()) {
            return Err(AuthError::TokenExpired);
        }

        Ok(claims)
    }

    /// 토큰을 폐기합니다.
    ///
    /// 서명은 확인하지 않고 `exp`만 읽어 남은 수명을 계산합니다.
    /// 남은 수명이 0 이하이면 아무것도 기록하지 않고 성공합니다.
    /// 기록되는 TTL은 리프레시 토큰 유효 기간을 넘지 않습니다.
    ///
    /// # Errors
    ///
    /// * `AuthError::MalformedToken` - `exp`를 읽을 수 없는 토큰
    /// * `AuthError::RevocationFailed` - 폐기 저장소 쓰기 실패
    pub async fn revoke(&self, token: &str) -> AuthResult<()> {
        let claims = self.codec.parse_unverified(token)?;

        let Ok(ttl) = claims.remaining_at(Utc::now()).to_std() else {
            log::debug!("이미 만료된 토큰은 폐기 기록 생략: {}", token_fingerprint(token));
            return Ok(());
        };
        if ttl.is_zero() {
            return Ok(());
        }
        // 이 서비스가 발급한 토큰은 리프레시 수명보다 오래 살 수 없음
        let ttl = match self.refresh_ttl.to_std() {
            Ok(ceiling) => ttl.min(ceiling),
            Err(_) => ttl,
        };

        self.store
            .set_with_ttl(&revocation_key(token), REVOKED_MARKER, ttl)
            .await
            .map_err(|e| {
                log::error!("토큰 폐기 기록 실패 (토큰 {}): {}", token_fingerprint(token), e);
                AuthError::RevocationFailed(e.to_string())
            })?;

        log::info!(
            "토큰 폐기 완료 - 토큰: {}, 종류: {}, TTL: {}ms",
            token_fingerprint(token),
            claims.token_type,
            ttl.as_millis()
        );
        Ok(())
    }
}
