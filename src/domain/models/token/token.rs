//! JWT 클레임 구조체와 함께 발급되는 토큰 쌍
//!
//! 모든 토큰은 종류(`access` / `refresh`)를 클레임에 담아 발급됩니다.
//! 종류가 없는 토큰은 해석 단계에서 거부됩니다.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 토큰 종류
///
/// 발급 후 변경되지 않으며, 토큰을 소비하는 모든 곳에서 검사해야 합니다.
/// 액세스 토큰은 리프레시 토큰이 필요한 곳에서, 리프레시 토큰은 액세스 토큰이
/// 필요한 곳에서 절대 받아들여지지 않습니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    /// 개별 요청의 신원 증명용 단기 토큰
    Access,
    /// 새 토큰 쌍을 받는 데에만 쓰이는 장기 토큰
    Refresh,
}

impl TokenKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenKind::Access => "access",
            TokenKind::Refresh => "refresh",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// JWT 토큰의 클레임(Payload) 구조체
///
/// ## 클레임 구성
///
/// - `user_id`: 토큰의 주체 (사용자 정수 ID)
/// - `email`: 주체 레이블
/// - `token_type`: 토큰 종류 (`access` / `refresh`)
/// - `iat`: 토큰 발급 시간 (Unix timestamp)
/// - `exp`: 토큰 만료 시간 (Unix timestamp)
/// - `jti`: 토큰 고유 식별자 (같은 초에 발급된 토큰끼리도 문자열이 달라지도록)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenClaims {
    /// 사용자 ID
    pub user_id: i64,
    /// 사용자 이메일
    pub email: String,
    /// 토큰 종류
    pub token_type: TokenKind,
    /// 토큰 발급 시간 (Unix timestamp)
    pub iat: i64,
    /// 토큰 만료 시간 (Unix timestamp)
    pub exp: i64,
    /// JWT ID
    pub jti: String,
}

impl TokenClaims {
    /// `now` 시점에 토큰이 이미 만료되었는지 확인합니다.
    ///
    /// `exp`와 정확히 같은 시각도 만료로 취급합니다.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.exp <= now.timestamp()
    }

    /// `now` 기준 남은 유효 시간
    ///
    /// 밀리초 단위로 계산하며, 이미 만료된 토큰이면 0 이하의 값을 반환합니다.
    pub fn remaining_at(&self, now: DateTime<Utc>) -> chrono::Duration {
        chrono::Duration::milliseconds(
            self.exp.saturating_mul(1000) - now.timestamp_millis(),
        )
    }
}

/// JWT 토큰 쌍 구조체
///
/// 로그인 또는 토큰 갱신 성공 시 함께 발급되는 액세스/리프레시 토큰입니다.
/// 두 토큰은 같은 주체에서 파생되지만 종류, 만료, 폐기 생명주기는 서로 독립적입니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenPair {
    /// 액세스 토큰 (API 접근용 단기 토큰)
    pub access_token: String,
    /// 리프레시 토큰 (토큰 갱신용 장기 토큰)
    pub refresh_token: String,
    /// 토큰 타입 (항상 "Bearer")
    pub token_type: String,
    /// 액세스 토큰 만료 시간 (초)
    pub expires_in: i64,
}
