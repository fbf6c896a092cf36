//! Credential Record Implementation
//!
//! 로그인에 필요한 자격 증명 레코드와, 로그인 응답에 실리는 공개 프로필을 정의합니다.

use chrono::{DateTime, Utc};
use mongodb::bson::{self, oid::ObjectId};
use serde::{Deserialize, Serialize};

/// 자격 증명 레코드
///
/// `credentials` 컬렉션의 문서 하나에 대응합니다.
/// `user_id`는 토큰의 주체 식별자로 그대로 사용되는 정수 ID입니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CredentialRecord {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 토큰 주체 ID
    pub user_id: i64,
    /// 로그인 식별자 (unique)
    pub email: String,
    /// 사용자 이름
    pub name: String,
    /// bcrypt 해시된 비밀번호
    pub password_hash: String,
    /// 생성 시간
    pub created_at: bson::DateTime,
}

impl CredentialRecord {
    /// 새 자격 증명 레코드 생성
    ///
    /// `password_hash`는 이미 해시된 값이어야 합니다.
    /// 평문 비밀번호로부터 만들 때는 [`crate::services::auth::password::hash_password`]를 먼저 거칩니다.
    pub fn new(user_id: i64, email: String, name: String, password_hash: String) -> Self {
        Self {
            id: None,
            user_id,
            email,
            name,
            password_hash,
            created_at: bson::DateTime::now(),
        }
    }

    /// 공개 프로필로 변환 (비밀번호 해시 제외)
    pub fn profile(&self) -> UserProfile {
        UserProfile::from(self)
    }
}

/// 공개 사용자 프로필
///
/// 로그인 성공 시 토큰 쌍과 함께 반환됩니다. 민감한 필드는 담지 않습니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: i64,
    pub email: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

impl From<&CredentialRecord> for UserProfile {
    fn from(record: &CredentialRecord) -> Self {
        Self {
            id: record.user_id,
            email: record.email.clone(),
            name: record.name.clone(),
            created_at: DateTime::from_timestamp_millis(record.created_at.timestamp_millis())
                .unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_excludes_password_hash() {
        let record = CredentialRecord::new(
            42,
            "user@example.com".to_string(),
            "Test User".to_string(),
            "$2b$04$hash".to_string(),
        );

        let profile = record.profile();
        let json = serde_json::to_value(&profile).unwrap();

        assert_eq!(profile.id, 42);
        assert_eq!(profile.email, "user@example.com");
        assert!(json.get("password_hash").is_none());
        assert_eq!(
            profile.created_at.timestamp_millis(),
            record.created_at.timestamp_millis()
        );
    }
}
