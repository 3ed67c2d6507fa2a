//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 서비스는 시작 시 한 번 구성되어 `AppState`를 통해 핸들러에 전달됩니다.
//!
//! # Features
//!
//! - 사용자 생명주기 관리 (생성, 조회, 수정, 삭제)
//! - 폼 바인딩 및 검증
//! - 비밀번호 단방향 인코딩
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::users::{BcryptPasswordEncoder, UserService};
//!
//! let service = UserService::new(store, Arc::new(BcryptPasswordEncoder::from_config()));
//! let users = service.list_users().await?;
//! ```

pub mod users;
