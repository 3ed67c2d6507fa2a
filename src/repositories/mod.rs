//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 저장소는 [`UserStore`](users::UserStore) trait 뒤에 숨겨져 있으며,
//! `main`에서 설정에 따라 구현체를 하나 골라 서비스에 주입합니다.
//!
//! # Features
//!
//! - 메모리 저장소: 개발 및 테스트용, 외부 의존성 없음
//! - MongoDB 저장소: 정수 ID 시퀀스를 사용하는 영구 저장소
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::repositories::users::{MemoryUserStore, UserStore};
//!
//! let store: Arc<dyn UserStore> = Arc::new(MemoryUserStore::new());
//! let users = store.find_all().await?;
//! ```

pub mod users;
