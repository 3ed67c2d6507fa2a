//! # User Management HTTP Handlers
//!
//! `/api/users` 아래의 사용자 CRUD 엔드포인트입니다.
//! 요청 본문은 Content-Type과 무관하게 원본 바이트로 받아 JSON으로 해석합니다.
//!
//! ## 엔드포인트
//!
//! | 메서드 | 경로 | 성공 | 실패 |
//! |--------|------|------|------|
//! | `GET` | `/api/users` | 200 사용자 목록 | - |
//! | `POST` | `/api/users` | 201 + `Location` | 검증 실패, 500 |
//! | `GET` | `/api/users/{id}` | 200 사용자 | 404 |
//! | `PUT` | `/api/users/{id}` | 200 + `Location` | 404, 검증 실패, 500 |
//! | `DELETE` | `/api/users/{id}` | 200 | 404, 500 |
//!
//! ## 응답 형식
//!
//! ```json
//! { "success": "User added successfully" }
//! { "error": "No user found with id 999" }
//! {
//!   "error": "There was a validation error",
//!   "notValidFields": { "username": ["This value should not be blank."] }
//! }
//! ```
//!
//! 검증 실패의 상태 코드는 `ApiConfig::validation_failure_status`를 따릅니다 (기본 422).
//! 숫자가 아닌 `{id}`는 없는 사용자와 같은 404 JSON으로 응답합니다.

use actix_web::error::PathError;
use actix_web::http::header;
use actix_web::{web, HttpRequest, HttpResponse, get, post, put, delete};
use log::error;
use crate::config::ApiConfig;
use crate::core::errors::{AppError, AppResult, ErrorContext};
use crate::core::state::AppState;
use crate::domain::dto::users::response::{
    ErrorResponse, SuccessResponse, UserResponse, ValidationErrorResponse,
};
use crate::domain::entities::users::User;
use crate::domain::forms::NotValidFormFields;

pub const USER_CREATED_MESSAGE: &str = "User added successfully";
pub const USER_MODIFIED_MESSAGE: &str = "User data modified successfully.";
pub const USER_DELETED_MESSAGE: &str = "The user has been deleted.";
pub const USER_CREATION_FAILED_MESSAGE: &str = "An error occurred while creating the user";

/// 사용자 목록 조회 핸들러
///
/// 저장된 모든 사용자를 ID 순서로 반환합니다. 비밀번호는 포함되지 않습니다.
///
/// ```bash
/// curl http://localhost:8080/api/users
/// ```
#[get("")]
pub async fn list_users(
    state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let users = state.users.list_users().await?;

    let body: Vec<UserResponse> = users.into_iter().map(UserResponse::from).collect();
    Ok(HttpResponse::Ok().json(body))
}

/// 사용자 생성 핸들러
///
/// 검증 실패가 아닌 모든 오류는 원인을 로그에 남기고
/// 고정된 500 메시지로 응답합니다.
///
/// ```bash
/// curl -X POST http://localhost:8080/api/users \
///   -H "Content-Type: application/json" \
///   -d '{"username":"alice","email":"alice@example.com","plainPassword":"secret123"}'
/// ```
#[post("")]
pub async fn create_user(
    req: HttpRequest,
    body: web::Bytes,
    state: web::Data<AppState>,
) -> HttpResponse {
    let created = match state.users.create_user(&body).await {
        Ok(user) => user,
        Err(AppError::Validation(not_valid)) => return validation_failed(&state.api, not_valid),
        Err(e) => return creation_failed(e),
    };

    match user_location(&req, &created) {
        Ok(location) => HttpResponse::Created()
            .insert_header((header::LOCATION, location))
            .json(SuccessResponse::new(USER_CREATED_MESSAGE)),
        Err(e) => creation_failed(e),
    }
}

/// 사용자 조회 핸들러
///
/// `Location` 헤더 생성에 쓰이도록 `user_get`이라는 이름으로 등록됩니다.
#[get("/{id}", name = "user_get")]
pub async fn get_user(
    id: web::Path<u64>,
    state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let user = state.users.get_user(id.into_inner()).await?;

    Ok(HttpResponse::Ok().json(UserResponse::from(user)))
}

/// 사용자 수정 핸들러
///
/// 생성과 같은 폼을 사용하며, 본문에 없는 필드는 비어 있는 것으로 처리됩니다.
#[put("/{id}")]
pub async fn update_user(
    req: HttpRequest,
    id: web::Path<u64>,
    body: web::Bytes,
    state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let updated = match state.users.update_user(id.into_inner(), &body).await {
        Ok(user) => user,
        Err(AppError::Validation(not_valid)) => return Ok(validation_failed(&state.api, not_valid)),
        Err(e) => return Err(e),
    };

    let location = user_location(&req, &updated)?;

    Ok(HttpResponse::Ok()
        .insert_header((header::LOCATION, location))
        .json(SuccessResponse::new(USER_MODIFIED_MESSAGE)))
}

/// 사용자 삭제 핸들러
#[delete("/{id}")]
pub async fn delete_user(
    id: web::Path<u64>,
    state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    state.users.delete_user(id.into_inner()).await?;

    Ok(HttpResponse::Ok().json(SuccessResponse::new(USER_DELETED_MESSAGE)))
}

/// `{id}` 경로 추출 실패 처리기
///
/// 숫자로 해석할 수 없는 ID는 존재하지 않는 사용자로 취급합니다.
pub fn invalid_user_id(err: PathError, req: &HttpRequest) -> actix_web::Error {
    let id = req.match_info().get("id").unwrap_or_default();
    log::debug!("잘못된 사용자 ID '{}': {}", id, err);

    AppError::user_not_found(id).into()
}

/// 저장된 사용자의 조회 경로 (`/api/users/{id}`)
fn user_location(req: &HttpRequest, user: &User) -> AppResult<String> {
    let id = user
        .id
        .ok_or_else(|| AppError::InternalError("저장된 사용자에 ID가 없습니다".to_string()))?;

    let url = req
        .url_for("user_get", [id.to_string()])
        .context("Location URL 생성 실패")?;

    Ok(url.path().to_string())
}

fn validation_failed(api: &ApiConfig, not_valid: NotValidFormFields) -> HttpResponse {
    HttpResponse::build(api.validation_failure_status)
        .json(ValidationErrorResponse::from(not_valid))
}

fn creation_failed(e: AppError) -> HttpResponse {
    error!("사용자 생성 실패: {}", e);
    HttpResponse::InternalServerError().json(ErrorResponse::new(USER_CREATION_FAILED_MESSAGE))
}
