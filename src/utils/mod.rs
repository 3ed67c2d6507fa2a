//! 공통 유틸리티 함수 모듈
//!
//! # Modules
//!
//! - [`display_terminal`] - 터미널 출력 포맷팅 함수들
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::utils::display_terminal::print_startup_summary;
//!
//! print_startup_summary("127.0.0.1:8080", "memory", 4);
//! ```

pub mod display_terminal;
