//! 비밀번호 강도 정책과 bcrypt 해싱
//!
//! 정책: 8자 이상, 소문자/대문자/숫자 각 1개 이상, 영문자와 숫자만 허용

use crate::errors::{AuthError, AuthResult};

const MIN_PASSWORD_LENGTH: usize = 8;

/// 비밀번호가 강도 정책을 만족하는지 확인합니다.
///
/// # Errors
///
/// 정책 위반 시 사유 메시지를 담은 `AuthError::ValidationError`
///
/// # Examples
///
/// ```rust,ignore
/// assert!(validate_password_strength("SecurePass123").is_ok());
/// assert!(validate_password_strength("short1A").is_err());
/// assert!(validate_password_strength("NoSpecial!123").is_err());
/// ```
pub fn validate_password_strength(password: &str) -> AuthResult<()> {
    if password.len() < MIN_PASSWORD_LENGTH {
        return Err(AuthError::ValidationError(
            "password must be at least 8 characters long".to_string(),
        ));
    }

    let has_lower = password.chars().any(|c| c.is_ascii_lowercase());
    let has_upper = password.chars().any(|c| c.is_ascii_uppercase());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());

    if !has_lower || !has_upper || !has_digit {
        return Err(AuthError::ValidationError(
            "password must contain at least one lowercase letter, one uppercase letter, and one digit"
                .to_string(),
        ));
    }

    if !password.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(AuthError::ValidationError(
            "password must only contain alphanumeric characters".to_string(),
        ));
    }

    Ok(())
}

/// 정책 검사를 통과한 비밀번호를 bcrypt로 해싱합니다.
///
/// # Arguments
///
/// * `password` - 평문 비밀번호
/// * `cost` - bcrypt cost (호출자가 지정, 예: `InMemoryCredentialStore::register`)
pub fn hash_password(password: &str, cost: u32) -> AuthResult<String> {
    validate_password_strength(password)?;

    let hash_start = std::time::Instant::now();
    let hashed = bcrypt::hash(password, cost)
        .map_err(|e| AuthError::PasswordHashFailed(e.to_string()))?;
    log::debug!("Password hashing took: {:?}", hash_start.elapsed());

    Ok(hashed)
}

/// 평문 비밀번호와 bcrypt 해시를 비교합니다.
///
/// 해시 형식이 잘못된 경우에도 `false`를 반환합니다.
pub fn verify_password(password: &str, hash: &str) -> bool {
    match bcrypt::verify(password, hash) {
        Ok(matched) => matched,
        Err(e) => {
            log::warn!("비밀번호 해시 검증 실패: {}", e);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strong_password_accepted() {
        assert!(validate_password_strength("SecurePass123").is_ok());
        assert!(validate_password_strength("aB345678").is_ok());
    }

    #[test]
    fn test_password_policy_violations() {
        let cases = [
            ("Ab1", "at least 8 characters"),
            ("alllowercase1", "one uppercase letter"),
            ("ALLUPPERCASE1", "one lowercase letter"),
            ("NoDigitsHere", "one digit"),
            ("Secure Pass123", "alphanumeric"),
            ("SecurePass123!", "alphanumeric"),
        ];

        for (password, expected) in cases {
            match validate_password_strength(password) {
                Err(AuthError::ValidationError(msg)) => {
                    assert!(msg.contains(expected), "{}: {}", password, msg)
                }
                other => panic!("{} should be rejected, got {:?}", password, other),
            }
        }
    }

    #[test]
    fn test_hash_and_verify() {
        let hash = hash_password("SecurePass123", 4).unwrap();

        assert!(hash.starts_with("$2"));
        assert!(verify_password("SecurePass123", &hash));
        assert!(!verify_password("SecurePass124", &hash));
    }

    #[test]
    fn test_hash_rejects_weak_password() {
        assert!(matches!(
            hash_password("weak", 4),
            Err(AuthError::ValidationError(_))
        ));
    }

    #[test]
    fn test_verify_with_malformed_hash() {
        assert!(!verify_password("SecurePass123", "plain-text"));
    }
}
