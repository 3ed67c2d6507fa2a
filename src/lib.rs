//! 사용자 관리 REST API 백엔드
//!
//! `/api/users` 아래에서 사용자 목록, 조회, 생성, 수정, 삭제를 제공합니다.
//! 요청 본문은 폼으로 바인딩되어 필드 단위로 검증되며,
//! 비밀번호는 bcrypt로 인코딩된 값만 저장됩니다.
//!
//! # Features
//!
//! - **사용자 CRUD**: JSON 기반 REST 엔드포인트
//! - **폼 검증**: 중첩 필드를 포함한 필드별 에러 트리 (`notValidFields`)
//! - **저장소 선택**: 메모리(기본) 또는 MongoDB
//! - **비밀번호 인코딩**: 환경별 bcrypt cost
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 폼 검증, 비밀번호 인코딩
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← UserStore (memory / MongoDB)
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use user_api_backend::repositories::users::MemoryUserStore;
//! use user_api_backend::services::users::{BcryptPasswordEncoder, UserService};
//!
//! let service = UserService::new(
//!     Arc::new(MemoryUserStore::new()),
//!     Arc::new(BcryptPasswordEncoder::from_config()),
//! );
//! let user = service.create_user(body).await?;
//! ```

pub mod core;
pub mod config;
pub mod db;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
