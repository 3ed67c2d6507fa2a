//! # User Data Transfer Objects Module
//!
//! 사용자 관련 API의 요청/응답 데이터 구조를 정의하는 모듈입니다.
//!
//! | 타입 | 방향 | 용도 |
//! |------|------|------|
//! | `UserForm` | 요청 | 생성/수정 폼 (검증 규칙 포함) |
//! | `UserResponse` | 응답 | 사용자 조회 결과 (비밀번호 제외) |
//! | `SuccessResponse` | 응답 | `{"success": ...}` |
//! | `ErrorResponse` | 응답 | `{"error": ...}` |
//! | `ValidationErrorResponse` | 응답 | `{"error": ..., "notValidFields": ...}` |

pub mod request;
pub mod response;

pub use request::*;
pub use response::*;
