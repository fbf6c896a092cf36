use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use mongodb::bson::doc;
use mongodb::options::IndexOptions;
use mongodb::{Collection, IndexModel};

use crate::db::Database;
use crate::domain::entities::users::user::CredentialRecord;
use crate::errors::{AuthResult, StoreError};
use crate::services::auth::password;

/// 외부 자격 증명 저장소
///
/// 로그인 흐름은 이 trait만 알고, 실제 저장 기술(MongoDB, 메모리)은 알지 못합니다.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// 식별자로 자격 증명 레코드를 조회합니다.
    ///
    /// # Returns
    ///
    /// * `Ok(Some(record))` - 레코드 존재
    /// * `Ok(None)` - 해당 식별자 없음
    /// * `Err(StoreError)` - 저장소 I/O 실패
    async fn find_by_identifier(&self, identifier: &str) -> Result<Option<CredentialRecord>, StoreError>;

    /// 평문 비밀번호가 레코드의 해시와 일치하는지 확인합니다.
    ///
    /// 기본 구현은 bcrypt 검증이며, 해시 형식이 잘못된 경우에도 `false`를 반환합니다.
    fn verify_secret(&self, record: &CredentialRecord, secret: &str) -> bool {
        password::verify_password(secret, &record.password_hash)
    }
}

/// MongoDB 기반 자격 증명 저장소
pub struct MongoCredentialStore {
    collection: Collection<CredentialRecord>,
}

impl MongoCredentialStore {
    pub fn new(database: &Database, collection_name: &str) -> Self {
        Self {
            collection: database.get_database().collection::<CredentialRecord>(collection_name),
        }
    }

    /// 이메일 유니크 인덱스와 user_id 유니크 인덱스를 생성합니다.
    ///
    /// 이미 같은 인덱스가 있으면 아무 일도 일어나지 않습니다.
    pub async fn create_indexes(&self) -> Result<(), StoreError> {
        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("email_unique".to_string())
                .build())
            .build();

        let user_id_index = IndexModel::builder()
            .keys(doc! { "user_id": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("user_id_unique".to_string())
                .build())
            .build();

        self.collection
            .create_indexes([email_index, user_id_index])
            .await?;

        Ok(())
    }
}

#[async_trait]
impl CredentialStore for MongoCredentialStore {
    async fn find_by_identifier(&self, identifier: &str) -> Result<Option<CredentialRecord>, StoreError> {
        let record = self.collection
            .find_one(doc! { "email": identifier })
            .await?;

        Ok(record)
    }
}

/// 메모리 기반 자격 증명 저장소
///
/// 테스트와 로컬 실행용입니다. 이메일을 키로 레코드를 보관합니다.
#[derive(Default)]
pub struct InMemoryCredentialStore {
    records: RwLock<HashMap<String, CredentialRecord>>,
}

impl InMemoryCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 이미 해시된 레코드를 추가합니다. 같은 이메일이 있으면 덮어씁니다.
    pub fn insert(&self, record: CredentialRecord) {
        if let Ok(mut records) = self.records.write() {
            records.insert(record.email.clone(), record);
        }
    }

    /// 평문 비밀번호로 레코드를 만들어 추가합니다.
    ///
    /// 비밀번호는 강도 정책을 통과해야 하며, 주어진 bcrypt cost로 해시됩니다.
    ///
    /// # Errors
    ///
    /// * `AuthError::ValidationError` - 비밀번호 정책 위반
    /// * `AuthError::PasswordHashFailed` - bcrypt 해싱 실패
    pub fn register(
        &self,
        user_id: i64,
        email: &str,
        name: &str,
        plain_password: &str,
        cost: u32,
    ) -> AuthResult<CredentialRecord> {
        let password_hash = password::hash_password(plain_password, cost)?;
        let record = CredentialRecord::new(user_id, email.to_string(), name.to_string(), password_hash);
        self.insert(record.clone());
        Ok(record)
    }
}

#[async_trait]
impl CredentialStore for InMemoryCredentialStore {
    async fn find_by_identifier(&self, identifier: &str) -> Result<Option<CredentialRecord>, StoreError> {
        let records = self.records
            .read()
            .map_err(|_| StoreError::Backend("credential store lock poisoned".to_string()))?;
        Ok(records.get(identifier).cloned())
    }
}
