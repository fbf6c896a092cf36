//! 인증 요청관련 DTO
//!
//! 로그인을 요청하는 사용자의 요청 정보를 매핑합니다.
use serde::Deserialize;
use validator::Validate;

/// 로컬 로그인 요청 구조체
///
/// 식별자가 존재하지 않는 경우와 비밀번호가 틀린 경우는
/// 서비스 계층에서 같은 에러로 처리되므로, 여기서는 빈 값만 거릅니다.
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "email is required"))]
    pub email: String,

    #[validate(length(min = 1, message = "password is required"))]
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_fields_fail_validation() {
        let request = LoginRequest {
            email: String::new(),
            password: "secret".to_string(),
        };
        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("email"));

        let request = LoginRequest {
            email: "user@example.com".to_string(),
            password: String::new(),
        };
        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("password"));
    }

    #[test]
    fn test_filled_request_passes_validation() {
        let request = LoginRequest {
            email: "user@example.com".to_string(),
            password: "SecurePass123".to_string(),
        };
        assert!(request.validate().is_ok());
    }
}
