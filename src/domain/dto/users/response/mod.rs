//! # 사용자 관련 응답 DTO 모듈

pub mod user_response;
pub mod message_response;

pub use user_response::{ProfileResponse, UserResponse};
pub use message_response::{ErrorResponse, SuccessResponse, ValidationErrorResponse};
