//! # Domain Layer Module
//!
//! 도메인 계층을 구성하는 핵심 모듈로, 사용자 엔티티와 API 계약, 폼 검증을 담당합니다.
//!
//! ## 아키텍처 개요
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── Entities      - 저장소에 영속되는 사용자 엔티티
//! ├── DTOs          - 요청 폼 / 응답 본문
//! └── Forms         - 폼 바인딩, 검증, 필드 에러 트리
//!      │
//!      ▼
//! Application Layer (Services)
//!      │
//!      ▼
//! Infrastructure Layer (Repositories, DB)
//! ```
//!
//! ## 모듈 구성
//!
//! - [`entities`] - `User` 엔티티. 비밀번호는 인코딩된 값만 보관합니다.
//! - [`dto`] - `UserForm`(요청), `UserResponse`(응답, 비밀번호 제외) 등
//! - [`forms`] - `FormValidator`와 `NotValidFormFields`

pub mod entities;
pub mod dto;
pub mod forms;

