//! 데이터 및 서버 설정 관리 모듈
//!
//! 저장소, 서버, 환경 및 비밀번호 해싱 관련 설정을 관리합니다.

use std::env;

/// 애플리케이션 실행 환경
#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    Development,
    Test,
    Staging,
    /// 알 수 없는 값의 기본 환경
    Production,
}

impl Environment {
    /// `ENVIRONMENT` 환경 변수로 실행 환경을 결정합니다. 없으면 `Production`.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let env = Environment::current();
    /// if env == Environment::Development {
    ///     log::debug!("개발 환경");
    /// }
    /// ```
    pub fn current() -> Self {
        Self::from_str(&env::var("ENVIRONMENT").unwrap_or_else(|_| "production".to_string()))
    }

    /// 문자열에서 Environment를 생성합니다.
    ///
    /// 알 수 없는 값인 경우 `Production`을 반환합니다.
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }
}

/// 패스워드 해싱 설정
pub struct PasswordConfig;

impl PasswordConfig {
    /// 현재 환경에 맞는 bcrypt cost를 반환합니다.
    ///
    /// `BCRYPT_COST`가 4-15 범위의 정수이면 그 값을 우선 사용합니다.
    ///
    /// # Environment Defaults
    ///
    /// - Development/Test: 4 (빠른 처리)
    /// - Staging: 10 (중간 보안)
    /// - Production: 12 (고보안)
    pub fn bcrypt_cost() -> u32 {
        env::var("BCRYPT_COST")
            .ok()
            .and_then(|value| Self::parse_cost(&value))
            .unwrap_or_else(|| Self::bcrypt_cost_for_env(&Environment::current()))
    }

    /// 특정 환경에 대한 bcrypt cost를 반환합니다.
    pub fn bcrypt_cost_for_env(env: &Environment) -> u32 {
        match env {
            Environment::Development => 4,
            Environment::Test => 4,
            Environment::Staging => 10,
            Environment::Production => 12,
        }
    }

    fn parse_cost(value: &str) -> Option<u32> {
        value
            .trim()
            .parse::<u32>()
            .ok()
            .filter(|cost| (4..=15).contains(cost))
    }
}

/// 서버 바인딩 설정
pub struct ServerConfig;

impl ServerConfig {
    /// 서버가 바인딩할 포트를 반환합니다. 기본값: 8080
    ///
    /// # Environment Variables
    ///
    /// - `PORT`: 커스텀 포트 설정
    pub fn port() -> u16 {
        env::var("PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse()
            .unwrap_or(8080)
    }

    /// 서버가 바인딩할 호스트 주소를 반환합니다. 기본값: "0.0.0.0"
    pub fn host() -> String {
        env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string())
    }

    /// HTTP 워커 스레드 수. 기본값: 4
    pub fn workers() -> usize {
        env::var("HTTP_WORKERS")
            .ok()
            .and_then(|value| value.parse::<usize>().ok())
            .filter(|workers| *workers > 0)
            .unwrap_or(4)
    }
}

/// 사용자 저장소 백엔드 종류
#[derive(Debug, Clone, PartialEq)]
pub enum StoreBackend {
    /// 프로세스 메모리 저장소 (재시작 시 데이터 소실)
    Memory,
    /// MongoDB 영구 저장소
    MongoDb,
}

impl StoreBackend {
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "mongodb" | "mongo" => StoreBackend::MongoDb,
            _ => StoreBackend::Memory,
        }
    }
}

/// 사용자 저장소 설정
///
/// ```bash
/// export USER_STORE="mongodb"   # memory | mongodb
/// export MONGODB_URI="mongodb://localhost:27017"
/// export DATABASE_NAME="user_api_dev"
/// ```
pub struct StoreConfig;

impl StoreConfig {
    /// 사용할 저장소 백엔드. 기본값: 메모리 저장소
    pub fn backend() -> StoreBackend {
        StoreBackend::from_str(&env::var("USER_STORE").unwrap_or_else(|_| "memory".to_string()))
    }

    pub fn mongodb_uri() -> String {
        env::var("MONGODB_URI").unwrap_or_else(|_| "mongodb://localhost:27017".to_string())
    }

    pub fn database_name() -> String {
        env::var("DATABASE_NAME").unwrap_or_else(|_| "user_api_dev".to_string())
    }
}
