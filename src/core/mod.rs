//! # Core Module
//!
//! 애플리케이션 전반에서 공유하는 핵심 타입을 제공합니다.
//!
//! ## 모듈 구성
//!
//! ### [`errors`] - 통합 에러 처리
//! - **AppError**: 애플리케이션 전역 에러 타입
//! - **HTTP 통합**: Actix-Web `ResponseError` 구현
//! - **자동 변환**: thiserror 기반 에러 변환
//!
//! ### [`state`] - 애플리케이션 상태
//! - **AppState**: 시작 시 한 번 구성되어 `web::Data`로 핸들러에 주입
//!
//! ## 애플리케이션 초기화
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::core::AppState;
//!
//! let state = AppState::new(service, ApiConfig::from_env());
//!
//! HttpServer::new(move || {
//!     App::new()
//!         .app_data(web::Data::new(state.clone()))
//!         .configure(configure_all_routes)
//! })
//! ```

pub mod errors;
pub mod state;

pub use errors::*;
pub use state::*;
