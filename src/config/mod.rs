//! # Configuration Module
//!
//! 사용자 API 서비스의 설정 관리를 담당하는 모듈입니다.
//! 환경 변수 기반의 설정값들을 중앙집중식으로 관리합니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 저장소, 서버, 환경, 비밀번호 해싱 설정
//! - [`api_config`] - 응답 상태 코드 정책, CORS 설정
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # 서버 설정
//! export HOST="0.0.0.0"
//! export PORT="8080"
//!
//! # 저장소 설정
//! export USER_STORE="mongodb"      # memory | mongodb
//! export MONGODB_URI="mongodb://localhost:27017"
//! export DATABASE_NAME="user_api"
//!
//! # 보안 설정
//! export ENVIRONMENT="production"  # development, test, staging, production
//! export BCRYPT_COST="12"          # 4-15 범위
//!
//! # 응답 정책
//! export VALIDATION_FAILURE_STATUS="422"
//! ```
//!
//! `.env` 파일은 `PROFILE` 값(`dev`, `prod`)에 따라 `main`에서 로드됩니다.

pub mod data_config;
pub mod api_config;

pub use data_config::*;
pub use api_config::*;
