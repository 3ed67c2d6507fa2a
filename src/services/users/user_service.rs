//! # 사용자 관리 서비스 구현
//!
//! 사용자 계정의 생성, 조회, 수정, 삭제를 담당하는 비즈니스 로직입니다.
//! 요청 본문을 폼으로 바인딩하고 검증한 뒤, 비밀번호를 인코딩하여 저장소에 반영합니다.
//!
//! ## 처리 흐름
//!
//! ```text
//! 요청 본문 ──▶ FormValidator::submit ──▶ 사용자명 중복 확인
//!                                            │
//!                                            ▼
//!                     UserStore::save ◀── PasswordEncoder::encode
//! ```
//!
//! ## 수정 규칙
//!
//! - 대상 사용자가 없으면 검증 전에 404를 반환합니다.
//! - 본문에 없는 필드는 비어 있는 것으로 제출됩니다.
//! - 식별자와 생성 시각은 유지되고 비밀번호는 항상 다시 인코딩됩니다.

use std::sync::Arc;
use log::{debug, info, warn};
use crate::core::errors::{AppError, AppResult};
use crate::domain::dto::users::request::UserForm;
use crate::domain::entities::users::{User, UserDetails};
use crate::domain::forms::FormValidator;
use crate::repositories::users::UserStore;
use super::password_encoder::PasswordEncoder;

/// 사용자 관리 비즈니스 로직 서비스
///
/// 저장소와 인코더는 `Arc`로 공유되므로 복제 비용이 작습니다.
///
/// ```rust,ignore
/// let service = UserService::new(
///     Arc::new(MemoryUserStore::new()),
///     Arc::new(BcryptPasswordEncoder::from_config()),
/// );
///
/// let user = service.create_user(br#"{"username":"alice", ...}"#).await?;
/// ```
#[derive(Clone)]
pub struct UserService {
    store: Arc<dyn UserStore>,
    encoder: Arc<dyn PasswordEncoder>,
}

impl UserService {
    pub fn new(store: Arc<dyn UserStore>, encoder: Arc<dyn PasswordEncoder>) -> Self {
        Self { store, encoder }
    }

    /// 사용 중인 저장소 이름 (헬스체크용)
    pub fn store_name(&self) -> &str {
        self.store.name()
    }

    /// 모든 사용자를 ID 순서로 반환합니다.
    pub async fn list_users(&self) -> AppResult<Vec<User>> {
        self.store.find_all().await
    }

    /// ID로 사용자를 조회합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::NotFound` - `"No user found with id {id}"`
    pub async fn get_user(&self, id: u64) -> AppResult<User> {
        self.store
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::user_not_found(id))
    }

    /// 요청 본문으로 새 사용자를 생성합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::Validation` - 폼 검증 실패 또는 사용자명 중복
    /// * `AppError::PasswordEncoding` - 비밀번호 인코딩 실패
    /// * `AppError::DatabaseError` - 저장 실패
    pub async fn create_user(&self, body: &[u8]) -> AppResult<User> {
        let (details, plain_password) = self.submit_form(body)?;
        self.ensure_unique_username(&details.username, None).await?;

        let encoded = self.encoder.encode(&plain_password)?;
        let user = self.store.save(User::new(details, encoded)).await?;

        info!("사용자 생성: {} (id={:?})", user.username, user.id);
        Ok(user)
    }

    /// 요청 본문으로 기존 사용자를 수정합니다.
    ///
    /// 대상이 없으면 본문을 검증하지 않고 `NotFound`를 반환합니다.
    pub async fn update_user(&self, id: u64, body: &[u8]) -> AppResult<User> {
        let mut user = self.get_user(id).await?;

        let (details, plain_password) = self.submit_form(body)?;
        self.ensure_unique_username(&details.username, Some(id)).await?;

        let encoded = self.encoder.encode(&plain_password)?;
        user.apply(details, encoded);
        let user = self.store.save(user).await?;

        info!("사용자 수정: {} (id={})", user.username, id);
        Ok(user)
    }

    /// 사용자를 삭제합니다.
    pub async fn delete_user(&self, id: u64) -> AppResult<()> {
        let user = self.get_user(id).await?;
        self.store.delete(&user).await?;

        warn!("사용자 삭제: {} (id={})", user.username, id);
        Ok(())
    }

    fn submit_form(&self, body: &[u8]) -> AppResult<(UserDetails, String)> {
        let form = FormValidator::submit::<UserForm>(body).map_err(|e| {
            debug!("사용자 폼 검증 실패: {:?}", e.fields());
            e
        })?;

        form.into_details()
            .ok_or_else(|| AppError::InternalError("검증된 폼에 필수 값이 없습니다".to_string()))
    }

    /// 사용자명이 다른 사용자에게 이미 쓰이고 있으면 검증 실패를 반환합니다.
    ///
    /// 저장소도 저장 시점에 같은 규칙을 다시 확인하므로, 동시에 들어온 요청 사이의
    /// 중복은 `save`에서 같은 검증 실패로 보고됩니다.
    async fn ensure_unique_username(&self, username: &str, current_id: Option<u64>) -> AppResult<()> {
        match self.store.find_by_username(username).await? {
            Some(existing) if existing.id != current_id => Err(AppError::duplicate_username()),
            _ => Ok(()),
        }
    }
}
