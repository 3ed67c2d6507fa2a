//! HTTP API 동작 관련 설정
//!
//! 응답 상태 코드 정책과 CORS 허용 Origin을 관리합니다.

use std::env;
use actix_web::http::StatusCode;

/// 폼 검증 실패 시 기본 응답 상태 코드
pub const DEFAULT_VALIDATION_FAILURE_STATUS: StatusCode = StatusCode::UNPROCESSABLE_ENTITY;

/// API 응답 정책 설정
///
/// ```bash
/// # 기존 클라이언트와의 호환이 필요하면 200으로 설정
/// export VALIDATION_FAILURE_STATUS="200"
/// ```
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// 폼 검증 실패 응답에 사용할 상태 코드
    pub validation_failure_status: StatusCode,
}

impl ApiConfig {
    /// 환경 변수에서 설정을 읽어옵니다.
    pub fn from_env() -> Self {
        Self {
            validation_failure_status: Self::validation_failure_status(),
        }
    }

    /// `VALIDATION_FAILURE_STATUS` 값을 해석합니다.
    ///
    /// 200 또는 4xx 코드만 허용하며, 그 외에는 422를 사용합니다.
    pub fn validation_failure_status() -> StatusCode {
        env::var("VALIDATION_FAILURE_STATUS")
            .ok()
            .and_then(|value| Self::parse_status(&value))
            .unwrap_or(DEFAULT_VALIDATION_FAILURE_STATUS)
    }

    fn parse_status(value: &str) -> Option<StatusCode> {
        let code = value.trim().parse::<u16>().ok()?;
        let status = StatusCode::from_u16(code).ok()?;

        (status == StatusCode::OK || status.is_client_error()).then_some(status)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            validation_failure_status: DEFAULT_VALIDATION_FAILURE_STATUS,
        }
    }
}

/// CORS 설정
pub struct CorsConfig;

impl CorsConfig {
    /// 허용할 Origin 목록
    ///
    /// `CORS_ALLOWED_ORIGINS`에 쉼표로 구분된 목록을 지정할 수 있습니다.
    pub fn allowed_origins() -> Vec<String> {
        match env::var("CORS_ALLOWED_ORIGINS") {
            Ok(value) => Self::parse_origins(&value),
            Err(_) => vec![
                "http://localhost:3000".to_string(),
                "http://127.0.0.1:3000".to_string(),
                "http://localhost:8080".to_string(),
                "http://127.0.0.1:8080".to_string(),
            ],
        }
    }

    fn parse_origins(value: &str) -> Vec<String> {
        value
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(str::to_string)
            .collect()
    }
}
