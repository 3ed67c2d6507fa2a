//! 사용자 관리 서비스 모듈
//!
//! # Security
//!
//! - bcrypt 비밀번호 인코딩 (평문은 저장하지 않음)
//! - 사용자명 중복 방지
//! - 입력값 검증

pub mod password_encoder;
pub mod user_service;

pub use password_encoder::{BcryptPasswordEncoder, PasswordEncoder};
pub use user_service::UserService;
