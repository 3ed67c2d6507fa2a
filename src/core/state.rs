//! 애플리케이션 공유 상태
//!
//! 서버 시작 시 저장소와 비밀번호 인코더를 한 번 구성하고,
//! 워커마다 `web::Data<AppState>`로 복제하여 핸들러에 전달합니다.

use crate::config::ApiConfig;
use crate::services::users::UserService;

/// 핸들러가 공유하는 상태
#[derive(Clone)]
pub struct AppState {
    /// 사용자 관리 서비스
    pub users: UserService,
    /// API 응답 정책
    pub api: ApiConfig,
}

impl AppState {
    pub fn new(users: UserService, api: ApiConfig) -> Self {
        Self { users, api }
    }
}
