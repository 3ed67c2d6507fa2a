//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 정의하는 모듈입니다.
//!
//! ## 아키텍처 위치
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//!   Client (Browser, API Client)
//! └─────────────────────┬───────────────────────┘
//!                       │ HTTP Request/Response
//! ┌─────────────────────▼───────────────────────┐
//!   Handlers (이 모듈) - HTTP 엔드포인트 처리         ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   Services - 폼 검증, 비밀번호 인코딩             ← Service Layer
//! ├─────────────────────────────────────────────┤
//!   Repositories - 메모리 / MongoDB 저장소          ← Repository Layer
//! └─────────────────────────────────────────────┘
//! ```
//!
//! 핸들러는 `web::Data<AppState>`로 서비스를 받고, 서비스 에러는
//! `AppError`의 `ResponseError` 구현을 통해 JSON 응답으로 변환됩니다.

pub mod users;
