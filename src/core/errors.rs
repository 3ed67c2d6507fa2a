//! # Application Error Handling System
//!
//! 사용자 API를 위한 통합 에러 처리 시스템입니다.
//! 모든 계층은 예외 대신 `Result<T, AppError>`를 반환하며,
//! 핸들러 경계에서 JSON 에러 응답으로 변환됩니다.
//!
//! ## 에러 분류
//!
//! | 변형 | HTTP 상태 | 의미 |
//! |------|-----------|------|
//! | `Validation` | 422 (설정 가능) | 필드 단위 폼 검증 실패 |
//! | `NotFound` | 404 | 존재하지 않는 식별자 |
//! | `DatabaseError` | 500 | 저장소 실패 |
//! | `PasswordEncoding` | 500 | 비밀번호 인코딩 실패 |
//! | `InternalError` | 500 | 그 밖의 내부 오류 |
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::core::errors::{AppError, AppResult};
//!
//! async fn find(store: &dyn UserStore, id: u64) -> AppResult<User> {
//!     store.find_by_id(id).await?
//!         .ok_or_else(|| AppError::user_not_found(id))
//! }
//! ```

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;
use crate::config::DEFAULT_VALIDATION_FAILURE_STATUS;
use crate::domain::dto::users::request::DUPLICATE_USERNAME_MESSAGE;
use crate::domain::dto::users::response::{ErrorResponse, ValidationErrorResponse};
use crate::domain::forms::NotValidFormFields;

/// 애플리케이션 전역 에러 타입
#[derive(Error, Debug)]
pub enum AppError {
    /// 폼 검증 실패 (필드별 메시지 포함)
    #[error("{0}")]
    Validation(#[from] NotValidFormFields),

    /// 리소스 찾을 수 없음 (404 Not Found)
    #[error("{0}")]
    NotFound(String),

    /// 저장소 관련 에러 (500 Internal Server Error)
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// 비밀번호 인코딩 에러 (500 Internal Server Error)
    #[error("Password encoding error: {0}")]
    PasswordEncoding(String),

    /// 내부 서버 에러 (500 Internal Server Error)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// 식별자에 해당하는 사용자가 없을 때의 에러를 생성합니다.
    pub fn user_not_found(id: impl std::fmt::Display) -> Self {
        AppError::NotFound(format!("No user found with id {}", id))
    }

    /// 다른 사용자가 이미 쓰고 있는 사용자명에 대한 검증 실패
    pub fn duplicate_username() -> Self {
        AppError::Validation(NotValidFormFields::for_field("username", DUPLICATE_USERNAME_MESSAGE))
    }

    /// 에러 종류에 해당하는 HTTP 상태 코드
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => DEFAULT_VALIDATION_FAILURE_STATUS,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::DatabaseError(_)
            | AppError::PasswordEncoding(_)
            | AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        AppError::status_code(self)
    }

    /// 각 에러 타입을 HTTP 상태 코드와 JSON 응답으로 변환합니다.
    ///
    /// 검증 실패는 `{"error", "notValidFields"}`, 나머지는 `{"error"}` 형태입니다.
    fn error_response(&self) -> HttpResponse {
        let mut builder = HttpResponse::build(AppError::status_code(self));

        match self {
            AppError::Validation(not_valid) => {
                builder.json(ValidationErrorResponse::from(not_valid.clone()))
            }
            _ => builder.json(ErrorResponse::new(self.to_string())),
        }
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;

    /// 클로저를 사용하여 지연 평가된 컨텍스트를 제공합니다.
    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", f(), e)))
    }
}
