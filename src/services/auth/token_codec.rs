//! JWT 토큰 코덱
//!
//! HS256으로 서명된 토큰을 발급하고 해석합니다.
//! 만료 여부는 여기서 판단하지 않고 클레임 값으로만 돌려주며, 판단은 `TokenManager`가 합니다.
//!
//! ## 해석 방식 두 가지
//!
//! | 메서드 | 서명 검증 | 용도 |
//! |--------|-----------|------|
//! | [`TokenCodec::parse`] | O | 토큰 검증 경로 |
//! | [`TokenCodec::parse_unverified`] | X | 폐기 시 남은 수명 계산 전용 |

use chrono::{Duration, Utc};
use jsonwebtoken::errors::{Error as JwtError, ErrorKind};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use uuid::Uuid;

use crate::domain::models::token::{TokenClaims, TokenKind};
use crate::errors::{AuthError, AuthResult};

/// 공유 비밀 키 기반 토큰 코덱
#[derive(Clone)]
pub struct TokenCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenCodec {
    pub fn new(secret: &str) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        validation.leeway = 0;

        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        }
    }

    /// 토큰을 발급합니다.
    ///
    /// `iat`는 현재 시각, `exp`는 현재 시각 + `ttl`입니다.
    ///
    /// # Arguments
    ///
    /// * `user_id` - 주체 ID
    /// * `email` - 주체 레이블
    /// * `kind` - 토큰 종류
    /// * `ttl` - 유효 기간
    ///
    /// # Errors
    ///
    /// * `AuthError::TokenIssueFailed` - 서명 실패
    pub fn issue(&self, user_id: i64, email: &str, kind: TokenKind, ttl: Duration) -> AuthResult<String> {
        let now = Utc::now();
        let claims = TokenClaims {
            user_id,
            email: email.to_string(),
            token_type: kind,
            iat: now.timestamp(),
            exp: (now + ttl).timestamp(),
            jti: Uuid::new_v4().to_string(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| AuthError::TokenIssueFailed(e.to_string()))
    }

    /// 서명을 검증하고 클레임을 해석합니다.
    ///
    /// 만료된 토큰도 서명이 맞으면 클레임을 반환합니다.
    ///
    /// # Errors
    ///
    /// * `AuthError::SignatureInvalid` - 서명 불일치, HS256이 아닌 알고리즘
    /// * `AuthError::MalformedToken` - 구조 해석 실패, 클레임 누락 (`token_type` 포함)
    pub fn parse(&self, token: &str) -> AuthResult<TokenClaims> {
        decode::<TokenClaims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(classify)
    }

    /// 서명을 검증하지 않고 클레임을 해석합니다.
    ///
    /// 결과 클레임은 신뢰할 수 없으므로 인증 판단에 쓰면 안 됩니다.
    /// 폐기 대상 토큰의 남은 수명을 계산하는 데에만 사용합니다.
    pub fn parse_unverified(&self, token: &str) -> AuthResult<TokenClaims> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.insecure_disable_signature_validation();
        validation.validate_exp = false;
        validation.leeway = 0;

        decode::<TokenClaims>(token, &DecodingKey::from_secret(&[]), &validation)
            .map(|data| data.claims)
            .map_err(classify)
    }
}

fn classify(e: JwtError) -> AuthError {
    match e.kind() {
        ErrorKind::InvalidSignature | ErrorKind::InvalidAlgorithm | ErrorKind::InvalidAlgorithmName => {
            AuthError::SignatureInvalid
        }
        _ => AuthError::MalformedToken(e.to_string()),
    }
}
