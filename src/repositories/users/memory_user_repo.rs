//! 메모리 기반 사용자 저장소
//!
//! 프로세스 메모리에 사용자를 보관합니다. 재시작하면 데이터가 사라지므로
//! 개발 환경과 테스트에서 사용합니다.

use std::collections::BTreeMap;
use std::sync::RwLock;
use std::sync::atomic::{AtomicU64, Ordering};
use async_trait::async_trait;
use crate::core::errors::{AppError, AppResult};
use crate::domain::entities::users::User;
use super::user_store::UserStore;

pub struct MemoryUserStore {
    users: RwLock<BTreeMap<u64, User>>,
    next_id: AtomicU64,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self {
            users: RwLock::new(BTreeMap::new()),
            next_id: AtomicU64::new(1),
        }
    }

    fn poisoned<E>(_: E) -> AppError {
        AppError::DatabaseError("사용자 저장소 잠금이 손상되었습니다".to_string())
    }
}

impl Default for MemoryUserStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    fn name(&self) -> &str {
        "memory"
    }

    async fn find_all(&self) -> AppResult<Vec<User>> {
        let users = self.users.read().map_err(Self::poisoned)?;
        Ok(users.values().cloned().collect())
    }

    async fn find_by_id(&self, id: u64) -> AppResult<Option<User>> {
        let users = self.users.read().map_err(Self::poisoned)?;
        Ok(users.get(&id).cloned())
    }

    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        let users = self.users.read().map_err(Self::poisoned)?;
        Ok(users.values().find(|user| user.username == username).cloned())
    }

    async fn save(&self, mut user: User) -> AppResult<User> {
        let mut users = self.users.write().map_err(Self::poisoned)?;

        // 사용자명 중복은 쓰기 잠금 안에서 다시 확인한다
        if users
            .values()
            .any(|existing| existing.username == user.username && existing.id != user.id)
        {
            return Err(AppError::duplicate_username());
        }

        let id = match user.id {
            Some(id) => id,
            None => self.next_id.fetch_add(1, Ordering::SeqCst),
        };
        user.id = Some(id);
        users.insert(id, user.clone());

        Ok(user)
    }

    async fn delete(&self, user: &User) -> AppResult<()> {
        let id = user
            .id
            .ok_or_else(|| AppError::InternalError("저장되지 않은 사용자는 삭제할 수 없습니다".to_string()))?;

        let mut users = self.users.write().map_err(Self::poisoned)?;
        users
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| AppError::user_not_found(id))
    }
}
