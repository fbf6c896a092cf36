//! 인증 오케스트레이터
//!
//! 로그인, 토큰 검증, 토큰 갱신(로테이션), 로그아웃 흐름을 구현합니다.
//!
//! ## 외부로 나가는 에러
//!
//! - 로그인: 식별자 없음과 비밀번호 불일치를 구분하지 않고 `InvalidCredentials`
//! - 검증/갱신: 토큰 거부 사유를 `InvalidOrExpiredToken` 하나로 묶음
//! - 로그아웃: 폐기 실패는 `LogoutFailed`
//! - 폐기 저장소 조회 실패(`StoreUnavailable`)는 묶지 않고 내부 오류로 그대로 전달
//!
//! ## 갱신 시 취소
//!
//! 기존 리프레시 토큰 폐기에 성공한 뒤 새 토큰 쌍 발급 전에 요청이 취소되면,
//! 기존 토큰은 이미 사용할 수 없으므로 클라이언트는 다시 로그인해야 합니다.

use std::sync::Arc;

use crate::domain::entities::users::user::UserProfile;
use crate::domain::models::token::{TokenClaims, TokenKind, TokenPair};
use crate::errors::{AuthError, AuthResult};
use crate::repositories::users::CredentialStore;
use crate::utils::string_utils::{token_fingerprint, validate_required_string};

use super::token_manager::TokenManager;

/// 로그인 성공 결과
#[derive(Debug, Clone)]
pub struct LoginOutcome {
    pub tokens: TokenPair,
    pub profile: UserProfile,
}

/// 인증 흐름 서비스
///
/// 핸들러는 `web::Data<AuthService>`로 이 서비스를 공유합니다.
pub struct AuthService {
    tokens: Arc<TokenManager>,
    credentials: Arc<dyn CredentialStore>,
}

impl AuthService {
    pub fn new(tokens: Arc<TokenManager>, credentials: Arc<dyn CredentialStore>) -> Self {
        Self { tokens, credentials }
    }

    pub fn token_manager(&self) -> &TokenManager {
        &self.tokens
    }

    /// 이메일/비밀번호로 로그인하고 토큰 쌍과 공개 프로필을 반환합니다.
    ///
    /// # Errors
    ///
    /// * `AuthError::ValidationError` - 빈 식별자 또는 비밀번호
    /// * `AuthError::InvalidCredentials` - 식별자 없음 또는 비밀번호 불일치
    /// * `AuthError::CredentialStoreUnavailable` - 자격 증명 저장소 조회 실패
    /// * `AuthError::TokenIssueFailed` - 토큰 서명 실패
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let outcome = auth_service.login("user@example.com", "SecurePass123").await?;
    /// println!("access token: {}", outcome.tokens.access_token);
    /// ```
    pub async fn login(&self, identifier: &str, secret: &str) -> AuthResult<LoginOutcome> {
        let identifier = validate_required_string(identifier, "email")?;
        if secret.is_empty() {
            return Err(AuthError::ValidationError("password is required".to_string()));
        }

        let record = self.credentials
            .find_by_identifier(&identifier)
            .await
            .map_err(|e| AuthError::CredentialStoreUnavailable(e.to_string()))?;

        let Some(record) = record else {
            log::warn!("로그인 실패 - 존재하지 않는 식별자");
            return Err(AuthError::InvalidCredentials);
        };

        if !self.credentials.verify_secret(&record, secret) {
            log::warn!("로그인 실패 - 비밀번호 불일치 (user_id: {})", record.user_id);
            return Err(AuthError::InvalidCredentials);
        }

        let tokens = self.tokens.generate_token_pair(record.user_id, &record.email)?;

        log::info!("로그인 성공 - user_id: {}", record.user_id);
        Ok(LoginOutcome {
            tokens,
            profile: record.profile(),
        })
    }

    /// 액세스 토큰을 검증합니다.
    ///
    /// # Errors
    ///
    /// * `AuthError::ValidationError` - 빈 토큰
    /// * `AuthError::InvalidOrExpiredToken` - 토큰 거부 (사유 비공개)
    /// * `AuthError::StoreUnavailable` - 폐기 저장소 조회 실패
    pub async fn validate_token(&self, token: &str) -> AuthResult<TokenClaims> {
        let token = validate_required_string(token, "token")?;

        self.tokens
            .validate(&token, TokenKind::Access)
            .await
            .map_err(|e| collapse_rejection(e, &token))
    }

    /// 리프레시 토큰을 새 토큰 쌍으로 교환합니다.
    ///
    /// 제시된 리프레시 토큰은 폐기되어 다시 사용할 수 없습니다.
    /// 폐기 기록에 실패하면 새 토큰 쌍을 발급하지 않습니다.
    ///
    /// # Errors
    ///
    /// * `AuthError::ValidationError` - 빈 토큰
    /// * `AuthError::InvalidOrExpiredToken` - 토큰 거부 (사유 비공개)
    /// * `AuthError::StoreUnavailable` - 폐기 저장소 조회 실패
    /// * `AuthError::RevocationFailed` - 기존 토큰 폐기 실패
    pub async fn refresh_token(&self, refresh_token: &str) -> AuthResult<TokenPair> {
        let refresh_token = validate_required_string(refresh_token, "refresh token")?;

        let claims = self.tokens
            .validate(&refresh_token, TokenKind::Refresh)
            .await
            .map_err(|e| collapse_rejection(e, &refresh_token))?;

        self.tokens.revoke(&refresh_token).await?;

        let pair = self.tokens.generate_token_pair(claims.user_id, &claims.email)?;

        log::info!(
            "토큰 갱신 완료 - user_id: {}, 폐기된 리프레시 토큰: {}",
            claims.user_id,
            token_fingerprint(&refresh_token)
        );
        Ok(pair)
    }

    /// 액세스 토큰과 (있다면) 리프레시 토큰을 폐기합니다.
    ///
    /// # Errors
    ///
    /// * `AuthError::ValidationError` - 빈 액세스 토큰
    /// * `AuthError::LogoutFailed` - 어느 한쪽이라도 폐기 실패
    pub async fn logout(&self, access_token: &str, refresh_token: Option<&str>) -> AuthResult<()> {
        let access_token = validate_required_string(access_token, "token")?;

        self.tokens
            .revoke(&access_token)
            .await
            .map_err(|e| AuthError::LogoutFailed(e.to_string()))?;

        if let Some(refresh_token) = refresh_token.map(str::trim).filter(|t| !t.is_empty()) {
            self.tokens
                .revoke(refresh_token)
                .await
                .map_err(|e| AuthError::LogoutFailed(e.to_string()))?;
        }

        log::info!("로그아웃 완료 - 토큰: {}", token_fingerprint(&access_token));
        Ok(())
    }
}

/// 토큰 거부 사유를 외부용 단일 에러로 묶습니다. 인프라 에러는 그대로 둡니다.
fn collapse_rejection(error: AuthError, token: &str) -> AuthError {
    if error.is_token_rejection() {
        log::debug!("토큰 거부 ({}): {}", token_fingerprint(token), error);
        AuthError::InvalidOrExpiredToken
    } else {
        error
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TokenConfig;
    use crate::repositories::tokens::{
        FailingRevocationStore, InMemoryRevocationStore, RevocationStore,
    };
    use crate::repositories::users::InMemoryCredentialStore;
    use crate::services::auth::token_codec::TokenCodec;
    use chrono::Duration;

    const SECRET: &str = "service-test-secret";
    const EMAIL: &str = "user@example.com";
    const PASSWORD: &str = "SecurePass123";

    fn credentials() -> Arc<InMemoryCredentialStore> {
        let store = Arc::new(InMemoryCredentialStore::new());
        store.register(1, EMAIL, "Test User", PASSWORD, 4).unwrap();
        store
    }

    fn service_with(store: Arc<dyn RevocationStore>) -> AuthService {
        let config = TokenConfig::new(SECRET, Duration::minutes(15), Duration::days(7)).unwrap();
        AuthService::new(Arc::new(TokenManager::new(&config, store)), credentials())
    }

    fn service() -> AuthService {
        service_with(Arc::new(InMemoryRevocationStore::new()))
    }

    #[actix_web::test]
    async fn test_login_issues_typed_pair() {
        let service = service();

        let outcome = service.login(EMAIL, PASSWORD).await.unwrap();
        let manager = service.token_manager();

        assert_eq!(outcome.profile.id, 1);
        assert_eq!(outcome.profile.email, EMAIL);
        assert!(manager.validate(&outcome.tokens.access_token, TokenKind::Access).await.is_ok());
        assert!(manager.validate(&outcome.tokens.refresh_token, TokenKind::Refresh).await.is_ok());
        assert!(matches!(
            manager.validate(&outcome.tokens.refresh_token, TokenKind::Access).await,
            Err(AuthError::TokenTypeMismatch { .. })
        ));
    }

    #[actix_web::test]
    async fn test_login_does_not_distinguish_failures() {
        let service = service();

        let unknown = service.login("nobody@example.com", PASSWORD).await.unwrap_err();
        let wrong = service.login(EMAIL, "WrongPass123").await.unwrap_err();

        assert!(matches!(unknown, AuthError::InvalidCredentials));
        assert!(matches!(wrong, AuthError::InvalidCredentials));
        assert_eq!(unknown.public_message(), wrong.public_message());
    }

    #[actix_web::test]
    async fn test_login_requires_fields() {
        let service = service();

        assert!(matches!(service.login("", PASSWORD).await, Err(AuthError::ValidationError(_))));
        assert!(matches!(service.login(EMAIL, "").await, Err(AuthError::ValidationError(_))));
    }

    #[actix_web::test]
    async fn test_validate_token_collapses_rejections() {
        let service = service();
        let outcome = service.login(EMAIL, PASSWORD).await.unwrap();

        let claims = service.validate_token(&outcome.tokens.access_token).await.unwrap();
        assert_eq!(claims.user_id, 1);
        assert_eq!(claims.email, EMAIL);

        assert!(matches!(
            service.validate_token(&outcome.tokens.refresh_token).await,
            Err(AuthError::InvalidOrExpiredToken)
        ));
        assert!(matches!(
            service.validate_token("garbage").await,
            Err(AuthError::InvalidOrExpiredToken)
        ));

        let expired = TokenCodec::new(SECRET)
            .issue(1, EMAIL, TokenKind::Access, Duration::seconds(-1))
            .unwrap();
        assert!(matches!(
            service.validate_token(&expired).await,
            Err(AuthError::InvalidOrExpiredToken)
        ));
    }

    #[actix_web::test]
    async fn test_refresh_rotates_tokens() {
        let service = service();
        let outcome = service.login(EMAIL, PASSWORD).await.unwrap();
        let old_refresh = outcome.tokens.refresh_token;

        let pair = service.refresh_token(&old_refresh).await.unwrap();
        let manager = service.token_manager();

        assert!(matches!(
            manager.validate(&old_refresh, TokenKind::Refresh).await,
            Err(AuthError::TokenRevoked)
        ));
        assert!(manager.validate(&pair.refresh_token, TokenKind::Refresh).await.is_ok());

        let claims = manager.validate(&pair.access_token, TokenKind::Access).await.unwrap();
        assert_eq!(claims.user_id, 1);
        assert_eq!(claims.email, EMAIL);

        // 같은 리프레시 토큰은 두 번 쓸 수 없음
        assert!(matches!(
            service.refresh_token(&old_refresh).await,
            Err(AuthError::InvalidOrExpiredToken)
        ));
    }

    #[actix_web::test]
    async fn test_refresh_rejects_access_token() {
        let service = service();
        let outcome = service.login(EMAIL, PASSWORD).await.unwrap();

        assert!(matches!(
            service.refresh_token(&outcome.tokens.access_token).await,
            Err(AuthError::InvalidOrExpiredToken)
        ));
        assert!(service.validate_token(&outcome.tokens.access_token).await.is_ok());
    }

    #[actix_web::test]
    async fn test_refresh_fails_closed_when_revocation_fails() {
        let service = service_with(Arc::new(FailingRevocationStore::writes()));
        let outcome = service.login(EMAIL, PASSWORD).await.unwrap();

        assert!(matches!(
            service.refresh_token(&outcome.tokens.refresh_token).await,
            Err(AuthError::RevocationFailed(_))
        ));
    }

    #[actix_web::test]
    async fn test_store_unavailable_is_not_collapsed() {
        let service = service_with(Arc::new(FailingRevocationStore::reads()));
        let outcome = service.login(EMAIL, PASSWORD).await.unwrap();

        assert!(matches!(
            service.validate_token(&outcome.tokens.access_token).await,
            Err(AuthError::StoreUnavailable(_))
        ));
        assert!(matches!(
            service.refresh_token(&outcome.tokens.refresh_token).await,
            Err(AuthError::StoreUnavailable(_))
        ));
    }

    #[actix_web::test]
    async fn test_logout_access_only_keeps_refresh_valid() {
        let service = service();
        let outcome = service.login(EMAIL, PASSWORD).await.unwrap();
        let manager = service.token_manager();

        service.logout(&outcome.tokens.access_token, None).await.unwrap();

        assert!(matches!(
            manager.validate(&outcome.tokens.access_token, TokenKind::Access).await,
            Err(AuthError::TokenRevoked)
        ));
        assert!(manager.validate(&outcome.tokens.refresh_token, TokenKind::Refresh).await.is_ok());
    }

    #[actix_web::test]
    async fn test_logout_with_both_revokes_both() {
        let service = service();
        let outcome = service.login(EMAIL, PASSWORD).await.unwrap();
        let manager = service.token_manager();

        service
            .logout(&outcome.tokens.access_token, Some(&outcome.tokens.refresh_token))
            .await
            .unwrap();

        assert!(matches!(
            manager.validate(&outcome.tokens.access_token, TokenKind::Access).await,
            Err(AuthError::TokenRevoked)
        ));
        assert!(matches!(
            manager.validate(&outcome.tokens.refresh_token, TokenKind::Refresh).await,
            Err(AuthError::TokenRevoked)
        ));
    }

    #[actix_web::test]
    async fn test_logout_failures() {
        let service = service();
        assert!(matches!(service.logout("", None).await, Err(AuthError::ValidationError(_))));
        assert!(matches!(service.logout("garbage", None).await, Err(AuthError::LogoutFailed(_))));

        let service = service_with(Arc::new(FailingRevocationStore::writes()));
        let outcome = service.login(EMAIL, PASSWORD).await.unwrap();
        assert!(matches!(
            service.logout(&outcome.tokens.access_token, None).await,
            Err(AuthError::LogoutFailed(_))
        ));
    }
}
