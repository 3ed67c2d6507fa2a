use async_trait::async_trait;
use crate::core::errors::AppResult;
use crate::domain::entities::users::User;

/// 사용자 저장소 계약
///
/// 저장소는 사용자 영속 표현을 독점적으로 소유합니다.
/// 각 메서드는 호출 하나 안에서 원자적으로 동작해야 합니다.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// 로그 및 헬스체크에 표시할 저장소 이름
    fn name(&self) -> &str;

    /// 모든 사용자를 ID 오름차순으로 반환합니다.
    async fn find_all(&self) -> AppResult<Vec<User>>;

    async fn find_by_id(&self, id: u64) -> AppResult<Option<User>>;

    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>>;

    /// 사용자를 저장합니다 (insert-or-update).
    ///
    /// ID가 없는 사용자는 새 ID를 부여받아 삽입되고, 부여된 ID가 채워진 사용자를 반환합니다.
    async fn save(&self, user: User) -> AppResult<User>;

    /// 저장된 사용자를 삭제합니다.
    async fn delete(&self, user: &User) -> AppResult<()>;
}
