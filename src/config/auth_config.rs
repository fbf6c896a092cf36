//! # Token Configuration Module
//!
//! JWT 서명 비밀 키와 액세스/리프레시 토큰 만료 시간을 관리하는 모듈입니다.
//!
//! ## 필수 환경 변수 설정
//!
//! ```bash
//! export JWT_SECRET="your-super-secret-jwt-key"
//! export ACCESS_TOKEN_DURATION="15m"     # 기본값 15분
//! export REFRESH_TOKEN_DURATION="7d"     # 기본값 7일
//! ```
//!
//! 만료 시간은 `<n>s`, `<n>m`, `<n>h`, `<n>d` 또는 초 단위 정수를 받습니다.
//! 0 이하의 값은 거부됩니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use token_auth_service::config::TokenConfig;
//!
//! // 환경 변수에서 로드
//! let config = TokenConfig::from_env()?;
//!
//! // 테스트용 직접 생성
//! let config = TokenConfig::new(
//!     "test-secret",
//!     chrono::Duration::minutes(15),
//!     chrono::Duration::days(7),
//! )?;
//! ```

use std::env;
use std::fmt;

use chrono::Duration;

use crate::config::Environment;
use crate::errors::ConfigError;

const DEFAULT_ACCESS_TOKEN_DURATION: &str = "15m";
const DEFAULT_REFRESH_TOKEN_DURATION: &str = "7d";
const DEVELOPMENT_SECRET: &str = "development-only-jwt-secret";

/// 토큰 발급/검증 설정
///
/// 서명 비밀 키와 두 종류 토큰의 수명을 담습니다.
/// `TokenManager`가 소유하며, 생성 이후에는 변경되지 않습니다.
#[derive(Clone)]
pub struct TokenConfig {
    secret: String,
    access_ttl: Duration,
    refresh_ttl: Duration,
}

impl TokenConfig {
    /// 설정 객체를 직접 생성합니다.
    ///
    /// # Errors
    ///
    /// * `ConfigError::Missing` - 비밀 키가 비어 있는 경우
    /// * `ConfigError::Invalid` - 만료 시간이 0 이하인 경우
    pub fn new(
        secret: impl Into<String>,
        access_ttl: Duration,
        refresh_ttl: Duration,
    ) -> Result<Self, ConfigError> {
        let secret = secret.into();
        if secret.is_empty() {
            return Err(ConfigError::Missing("JWT_SECRET".to_string()));
        }
        ensure_positive("ACCESS_TOKEN_DURATION", access_ttl)?;
        ensure_positive("REFRESH_TOKEN_DURATION", refresh_ttl)?;

        Ok(Self {
            secret,
            access_ttl,
            refresh_ttl,
        })
    }

    /// 프로세스 환경 변수에서 설정을 로드합니다.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(&Environment::current(), |key| env::var(key).ok())
    }

    /// 임의의 조회 함수로부터 설정을 로드합니다.
    ///
    /// `JWT_SECRET`이 없으면 development/test 환경에서만 개발용 기본값을 쓰고,
    /// 그 외 환경에서는 `ConfigError::Missing`을 반환합니다.
    pub fn from_lookup<F>(environment: &Environment, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let secret = match lookup("JWT_SECRET").filter(|s| !s.is_empty()) {
            Some(secret) => secret,
            None if matches!(environment, Environment::Development | Environment::Test) => {
                log::warn!("JWT_SECRET not set, using development default (not secure for production!)");
                DEVELOPMENT_SECRET.to_string()
            }
            None => return Err(ConfigError::Missing("JWT_SECRET".to_string())),
        };

        let access = lookup("ACCESS_TOKEN_DURATION")
            .unwrap_or_else(|| DEFAULT_ACCESS_TOKEN_DURATION.to_string());
        let refresh = lookup("REFRESH_TOKEN_DURATION")
            .unwrap_or_else(|| DEFAULT_REFRESH_TOKEN_DURATION.to_string());

        Self::new(
            secret,
            parse_duration("ACCESS_TOKEN_DURATION", &access)?,
            parse_duration("REFRESH_TOKEN_DURATION", &refresh)?,
        )
    }

    pub fn secret(&self) -> &str {
        &self.secret
    }

    pub fn access_ttl(&self) -> Duration {
        self.access_ttl
    }

    pub fn refresh_ttl(&self) -> Duration {
        self.refresh_ttl
    }
}

// 비밀 키가 로그에 찍히지 않도록 Debug를 직접 구현
impl fmt::Debug for TokenConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenConfig")
            .field("secret", &"<redacted>")
            .field("access_ttl", &self.access_ttl)
            .field("refresh_ttl", &self.refresh_ttl)
            .finish()
    }
}

/// 만료 시간 문자열을 파싱합니다.
///
/// # Arguments
///
/// * `key` - 에러 메시지에 포함될 설정 키
/// * `value` - `"15m"`, `"7d"`, `"3600"` 형태의 문자열
///
/// # Returns
///
/// 파싱된 `chrono::Duration`. 0 이하이거나 형식이 잘못되면 `ConfigError::Invalid`
///
/// # Examples
///
/// ```rust,ignore
/// assert_eq!(parse_duration("X", "90s")?, Duration::seconds(90));
/// assert_eq!(parse_duration("X", "2h")?, Duration::hours(2));
/// assert!(parse_duration("X", "0m").is_err());
/// ```
pub fn parse_duration(key: &str, value: &str) -> Result<Duration, ConfigError> {
    let invalid = || ConfigError::Invalid {
        key: key.to_string(),
        value: value.to_string(),
    };

    let trimmed = value.trim();
    let (number, unit_seconds) = match trimmed.char_indices().last() {
        Some((idx, 's')) => (&trimmed[..idx], 1),
        Some((idx, 'm')) => (&trimmed[..idx], 60),
        Some((idx, 'h')) => (&trimmed[..idx], 60 * 60),
        Some((idx, 'd')) => (&trimmed[..idx], 24 * 60 * 60),
        Some(_) => (trimmed, 1),
        None => return Err(invalid()),
    };

    let amount: i64 = number.trim().parse().map_err(|_| invalid())?;
    let seconds = amount.checked_mul(unit_seconds).ok_or_else(invalid)?;
    let duration = Duration::try_seconds(seconds).ok_or_else(invalid)?;

    if duration <= Duration::zero() {
        return Err(invalid());
    }
    Ok(duration)
}

fn ensure_positive(key: &str, duration: Duration) -> Result<(), ConfigError> {
    if duration <= Duration::zero() {
        return Err(ConfigError::Invalid {
            key: key.to_string(),
            value: duration.to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_parse_duration_units() {
        assert_eq!(parse_duration("K", "90s").unwrap(), Duration::seconds(90));
        assert_eq!(parse_duration("K", "15m").unwrap(), Duration::minutes(15));
        assert_eq!(parse_duration("K", "2h").unwrap(), Duration::hours(2));
        assert_eq!(parse_duration("K", "7d").unwrap(), Duration::days(7));
        assert_eq!(parse_duration("K", "3600").unwrap(), Duration::seconds(3600));
    }

    #[test]
    fn test_parse_duration_rejects_invalid_values() {
        assert!(parse_duration("K", "").is_err());
        assert!(parse_duration("K", "0m").is_err());
        assert!(parse_duration("K", "-5s").is_err());
        assert!(parse_duration("K", "abc").is_err());
        assert!(parse_duration("K", "10w").is_err());

        let err = parse_duration("ACCESS_TOKEN_DURATION", "0").unwrap_err();
        assert_eq!(
            err,
            ConfigError::Invalid {
                key: "ACCESS_TOKEN_DURATION".to_string(),
                value: "0".to_string(),
            }
        );
    }

    #[test]
    fn test_defaults_applied_when_durations_missing() {
        let config = TokenConfig::from_lookup(
            &Environment::Production,
            lookup_from(&[("JWT_SECRET", "prod-secret")]),
        )
        .unwrap();

        assert_eq!(config.secret(), "prod-secret");
        assert_eq!(config.access_ttl(), Duration::minutes(15));
        assert_eq!(config.refresh_ttl(), Duration::days(7));
    }

    #[test]
    fn test_secret_required_in_production() {
        let result = TokenConfig::from_lookup(&Environment::Production, lookup_from(&[]));
        assert_eq!(result.unwrap_err(), ConfigError::Missing("JWT_SECRET".to_string()));

        let result = TokenConfig::from_lookup(&Environment::Staging, lookup_from(&[("JWT_SECRET", "")]));
        assert!(result.is_err());
    }

    #[test]
    fn test_development_default_secret() {
        let config = TokenConfig::from_lookup(
            &Environment::Development,
            lookup_from(&[("ACCESS_TOKEN_DURATION", "5m")]),
        )
        .unwrap();

        assert_eq!(config.secret(), DEVELOPMENT_SECRET);
        assert_eq!(config.access_ttl(), Duration::minutes(5));
    }

    #[test]
    fn test_new_rejects_non_positive_ttl() {
        assert!(TokenConfig::new("s", Duration::zero(), Duration::days(1)).is_err());
        assert!(TokenConfig::new("s", Duration::minutes(1), Duration::seconds(-1)).is_err());
        assert!(TokenConfig::new("", Duration::minutes(1), Duration::days(1)).is_err());
    }

    #[test]
    fn test_debug_redacts_secret() {
        let config = TokenConfig::new("top-secret", Duration::minutes(1), Duration::days(1)).unwrap();
        let debug = format!("{:?}", config);

        assert!(!debug.contains("top-secret"));
        assert!(debug.contains("<redacted>"));
    }
}
