//! # Form Module
//!
//! 요청 본문을 폼 스키마에 바인딩하고 검증하는 모듈입니다.
//!
//! - [`form_validator`] - JSON 바인딩, `validator` 규칙 실행, 에러 트리 수집
//! - [`form_errors`] - 필드별 에러 트리와 검증 실패 값
//!
//! ```rust,ignore
//! use crate::domain::forms::FormValidator;
//! use crate::domain::dto::users::request::UserForm;
//!
//! match FormValidator::submit::<UserForm>(&body) {
//!     Ok(form) => { /* 저장 */ }
//!     Err(not_valid) => { /* {"error", "notValidFields"} 응답 */ }
//! }
//! ```

pub mod form_errors;
pub mod form_validator;

pub use form_errors::{FieldErrors, NotValidFormFields, VALIDATION_ERROR_MESSAGE};
pub use form_validator::{Form, FormValidator, INVALID_VALUE_MESSAGE};
