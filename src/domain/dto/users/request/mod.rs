//! # 사용자 관련 요청 DTO 모듈
//!
//! 클라이언트로부터 받은 JSON 본문이 바인딩되는 폼 타입을 정의합니다.
//! 바인딩과 검증은 [`crate::domain::forms::FormValidator`]가 수행합니다.

pub mod user_form;

pub use user_form::{ProfileForm, UserForm, DUPLICATE_USERNAME_MESSAGE};
