//! MongoDB 기반 사용자 저장소
//!
//! `users` 컬렉션에 사용자를 저장합니다. 식별자는 정수이며
//! `counters` 컬렉션의 시퀀스 문서(`{_id: "users", seq}`)에서 발급합니다.
//!
//! ```text
//! users    : { _id: 1, username: "alice", email: ..., password: "$2b$..." }
//! counters : { _id: "users", seq: 1 }
//! ```

use async_trait::async_trait;
use futures_util::StreamExt;
use mongodb::{
    bson::{doc, Document},
    error::{Error as MongoError, ErrorKind, WriteFailure},
    options::{FindOneAndUpdateOptions, FindOptions, IndexOptions, ReplaceOptions, ReturnDocument},
    Collection, IndexModel,
};
use crate::core::errors::{AppError, AppResult};
use crate::db::Database;
use crate::domain::entities::users::User;
use super::user_store::UserStore;

const USERS_COLLECTION: &str = "users";
const COUNTERS_COLLECTION: &str = "counters";
const USERNAME_INDEX: &str = "username_unique";
const DUPLICATE_KEY_CODE: i32 = 11000;

pub struct MongoUserStore {
    users: Collection<User>,
    counters: Collection<Document>,
}

impl MongoUserStore {
    pub fn new(database: &Database) -> Self {
        let db = database.get_database();
        log::info!("MongoDB 사용자 저장소: {}.{}", database.database_name(), USERS_COLLECTION);

        Self {
            users: db.collection::<User>(USERS_COLLECTION),
            counters: db.collection::<Document>(COUNTERS_COLLECTION),
        }
    }

    /// 사용자명 유니크 인덱스를 생성합니다.
    pub async fn create_indexes(&self) -> AppResult<()> {
        let username_index = IndexModel::builder()
            .keys(doc! { "username": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name(USERNAME_INDEX.to_string())
                .build())
            .build();

        self.users
            .create_indexes([username_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }

    /// 다음 사용자 ID를 발급합니다.
    ///
    /// 시퀀스 문서가 없으면 upsert로 만들어지므로 첫 ID는 1입니다.
    async fn next_id(&self) -> AppResult<u64> {
        let options = FindOneAndUpdateOptions::builder()
            .upsert(true)
            .return_document(ReturnDocument::After)
            .build();

        let counter = self.counters
            .find_one_and_update(
                doc! { "_id": USERS_COLLECTION },
                doc! { "$inc": { "seq": 1_i64 } },
            )
            .with_options(options)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?
            .ok_or_else(|| AppError::DatabaseError("ID 시퀀스 문서를 찾을 수 없습니다".to_string()))?;

        let seq = counter
            .get_i64("seq")
            .map_err(|e| AppError::DatabaseError(format!("잘못된 ID 시퀀스 값: {}", e)))?;

        u64::try_from(seq)
            .map_err(|_| AppError::DatabaseError(format!("잘못된 ID 시퀀스 값: {}", seq)))
    }
}

fn id_filter(id: u64) -> AppResult<Document> {
    let id = i64::try_from(id)
        .map_err(|_| AppError::DatabaseError(format!("저장할 수 없는 사용자 ID: {}", id)))?;

    Ok(doc! { "_id": id })
}

/// 사용자명 유니크 인덱스 위반인지 확인합니다.
fn is_duplicate_username(code: i32, message: &str) -> bool {
    code == DUPLICATE_KEY_CODE && message.contains(USERNAME_INDEX)
}

/// 쓰기 오류를 변환합니다. 사용자명 인덱스 위반은 검증 실패로 보고됩니다.
fn write_error(error: MongoError) -> AppError {
    let duplicate = match error.kind.as_ref() {
        ErrorKind::Write(WriteFailure::WriteError(e)) => is_duplicate_username(e.code, &e.message),
        ErrorKind::Command(e) => is_duplicate_username(e.code, &e.message),
        _ => false,
    };

    if duplicate {
        log::debug!("사용자명 중복으로 저장 거부: {}", error);
        AppError::duplicate_username()
    } else {
        AppError::DatabaseError(error.to_string())
    }
}

#[async_trait]
impl UserStore for MongoUserStore {
    fn name(&self) -> &str {
        "mongodb"
    }

    async fn find_all(&self) -> AppResult<Vec<User>> {
        let options = FindOptions::builder().sort(doc! { "_id": 1 }).build();

        let mut cursor = self.users
            .find(doc! {})
            .with_options(options)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        let mut users = Vec::new();
        while let Some(user) = cursor.next().await {
            match user {
                Ok(user) => users.push(user),
                Err(e) => return Err(AppError::DatabaseError(e.to_string())),
            }
        }

        Ok(users)
    }

    async fn find_by_id(&self, id: u64) -> AppResult<Option<User>> {
        self.users
            .find_one(id_filter(id)?)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        self.users
            .find_one(doc! { "username": username })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn save(&self, mut user: User) -> AppResult<User> {
        match user.id {
            None => {
                user.id = Some(self.next_id().await?);
                self.users
                    .insert_one(&user)
                    .await
                    .map_err(write_error)?;
            }
            Some(id) => {
                let options = ReplaceOptions::builder().upsert(true).build();
                self.users
                    .replace_one(id_filter(id)?, &user)
                    .with_options(options)
                    .await
                    .map_err(write_error)?;
            }
        }

        Ok(user)
    }

    async fn delete(&self, user: &User) -> AppResult<()> {
        let id = user
            .id
            .ok_or_else(|| AppError::InternalError("저장되지 않은 사용자는 삭제할 수 없습니다".to_string()))?;

        let result = self.users
            .delete_one(id_filter(id)?)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        if result.deleted_count == 0 {
            return Err(AppError::user_not_found(id));
        }

        Ok(())
    }
}
