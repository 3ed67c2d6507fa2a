//! API 라우트 설정 모듈
//!
//! 사용자 CRUD 엔드포인트와 헬스체크 엔드포인트를 등록합니다.
//! 경로 끝의 `/`는 `middleware::NormalizePath::trim()`으로 정규화되므로
//! `/api/users`와 `/api/users/`는 같은 핸들러로 연결됩니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::{web, App};
//!
//! let app = App::new()
//!     .app_data(web::Data::new(state))
//!     .configure(configure_all_routes);
//! ```

use crate::core::state::AppState;
use crate::handlers;
use actix_web::web;
use serde_json::json;

/// 모든 라우트를 설정합니다
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(health_check);

    configure_user_routes(cfg);
}

/// 사용자 관련 라우트를 설정합니다
///
/// # Available Routes
///
/// - `GET /api/users` - 사용자 목록
/// - `POST /api/users` - 사용자 생성
/// - `GET /api/users/{id}` - 사용자 조회
/// - `PUT /api/users/{id}` - 사용자 수정
/// - `DELETE /api/users/{id}` - 사용자 삭제
///
/// 숫자가 아닌 ID는 `handlers::users::invalid_user_id`가 404 JSON으로 바꿉니다.
///
/// ```bash
/// curl -X PUT http://localhost:8080/api/users/1 \
///   -H "Content-Type: application/json" \
///   -d '{"username":"alice","email":"alice@example.com","plainPassword":"secret456"}'
/// ```
fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/users")
            .app_data(web::PathConfig::default().error_handler(handlers::users::invalid_user_id))
            .service(handlers::users::list_users)
            .service(handlers::users::create_user)
            .service(handlers::users::get_user)
            .service(handlers::users::update_user)
            .service(handlers::users::delete_user)
    );
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// Response:
/// ```json
/// {
///   "status": "healthy",
///   "service": "user_api",
///   "version": "0.1.0",
///   "timestamp": "2024-01-01T00:00:00+00:00",
///   "features": { "store": "memory" }
/// }
/// ```
#[actix_web::get("/health")]
async fn health_check(state: web::Data<AppState>) -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "user_api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "features": {
            "store": state.users.store_name(),
        }
    }))
}
