//! # Data Transfer Objects (DTO) Module
//!
//! API 경계에서 데이터를 전송하기 위한 객체들을 정의하는 모듈입니다.
//! 클라이언트와 서버 간의 데이터 계약(Contract)을 명확히 정의합니다.
//!
//! ## 설계 원칙
//!
//! - **내부 표현 vs 외부 표현**: Entity와 DTO의 명확한 분리
//! - **보안**: 인코딩된 비밀번호는 어떤 응답 DTO에도 포함되지 않음
//! - **camelCase**: 모든 JSON 필드는 camelCase (`plainPassword`, `displayName`)
//!
//! ```text
//! dto/
//! └── users/
//!     ├── request/        # 클라이언트 → 서버 (UserForm)
//!     └── response/       # 서버 → 클라이언트 (UserResponse, 메시지 응답)
//! ```

pub mod users;

pub use users::*;
