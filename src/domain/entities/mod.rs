//! # Domain Entities Module
//!
//! 저장소에 영속되는 도메인 엔티티를 정의합니다.
//!
//! ```text
//! Domain Layer
//! ├── entities/     ← 이 모듈 (영속 엔티티)
//! ├── forms/        ← 폼 바인딩 및 검증
//! └── dto/          ← 요청 폼, 응답 DTO
//! ```
//!
//! 엔티티는 `serde`로 직렬화되어 MongoDB 문서(`_id` 정수 키)와 대응합니다.
//! 응답에는 엔티티를 직접 쓰지 않고 `dto::users::response::UserResponse`로
//! 변환하여 비밀번호를 제외합니다.

pub mod users;
