//! 비밀번호 단방향 인코딩
//!
//! 사용자 엔티티에는 인코딩된 값만 저장합니다. 같은 평문이라도 솔트가
//! 매번 달라지므로 인코딩 결과는 호출할 때마다 다릅니다.
//!
//! # 환경별 bcrypt Cost
//!
//! | 환경 | Cost |
//! |------|------|
//! | Development | 4 |
//! | Test | 4 |
//! | Staging | 10 |
//! | Production | 12 |
//!
//! `BCRYPT_COST` 환경 변수로 직접 지정할 수도 있습니다.

use bcrypt::hash;
use crate::config::PasswordConfig;
use crate::core::errors::{AppError, AppResult};

/// 비밀번호 인코더
pub trait PasswordEncoder: Send + Sync {
    /// 평문 비밀번호를 인코딩합니다.
    fn encode(&self, plain_password: &str) -> AppResult<String>;
}

/// bcrypt 기반 비밀번호 인코더
#[derive(Debug, Clone)]
pub struct BcryptPasswordEncoder {
    cost: u32,
}

impl BcryptPasswordEncoder {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    /// 현재 환경 설정의 cost로 인코더를 생성합니다.
    pub fn from_config() -> Self {
        Self::new(PasswordConfig::bcrypt_cost())
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }
}

impl PasswordEncoder for BcryptPasswordEncoder {
    fn encode(&self, plain_password: &str) -> AppResult<String> {
        let hash_start = std::time::Instant::now();

        let encoded = hash(plain_password, self.cost)
            .map_err(|e| AppError::PasswordEncoding(e.to_string()))?;

        log::debug!("Password hashing took: {:?}", hash_start.elapsed());
        Ok(encoded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encoded_password_differs_from_plain() {
        let encoder = BcryptPasswordEncoder::new(4);
        let encoded = encoder.encode("secret123").unwrap();

        assert_ne!(encoded, "secret123");
        assert!(bcrypt::verify("secret123", &encoded).unwrap());
        assert!(!bcrypt::verify("wrong", &encoded).unwrap());
    }

    #[test]
    fn test_same_password_encodes_differently() {
        let encoder = BcryptPasswordEncoder::new(4);

        let first = encoder.encode("secret123").unwrap();
        let second = encoder.encode("secret123").unwrap();

        assert_ne!(first, second);
    }

    #[test]
    fn test_invalid_cost_is_an_encoding_error() {
        let encoder = BcryptPasswordEncoder::new(99);

        assert!(matches!(encoder.encode("secret123"), Err(AppError::PasswordEncoding(_))));
    }
}
