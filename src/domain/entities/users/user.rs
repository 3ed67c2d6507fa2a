//! User Entity Implementation
//!
//! 사용자 엔티티의 핵심 구현체입니다.
//! 저장소가 영속 표현을 소유하며, 서비스는 요청 하나 동안만 작업 사본을 가집니다.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 사용자 엔티티
///
/// `password`에는 항상 마지막으로 제출된 평문 비밀번호를 단방향 인코딩한 값만
/// 저장됩니다. 평문 비밀번호는 엔티티에 담기지 않습니다.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    /// 저장소가 최초 저장 시 부여하는 식별자 (이후 변경 불가)
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    /// 사용자 이름 (unique)
    pub username: String,
    /// 사용자 이메일
    pub email: String,
    /// 표시 이름
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// 부가 프로필 정보
    #[serde(default)]
    pub profile: Profile,
    /// 인코딩된 비밀번호
    pub password: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// 사용자 프로필 (중첩 필드)
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Profile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_image_url: Option<String>,
}

/// 폼 검증을 통과한 사용자 입력값 (비밀번호 제외)
#[derive(Debug, Clone, PartialEq)]
pub struct UserDetails {
    pub username: String,
    pub email: String,
    pub display_name: Option<String>,
    pub profile: Profile,
}

impl User {
    /// 아직 저장되지 않은 새 사용자를 생성합니다.
    pub fn new(details: UserDetails, encoded_password: String) -> Self {
        let now = Utc::now();

        Self {
            id: None,
            username: details.username,
            email: details.email,
            display_name: details.display_name,
            profile: details.profile,
            password: encoded_password,
            created_at: now,
            updated_at: now,
        }
    }

    /// 제출된 입력값과 새로 인코딩한 비밀번호로 사용자 정보를 갱신합니다.
    ///
    /// 식별자와 생성 시각은 유지됩니다.
    pub fn apply(&mut self, details: UserDetails, encoded_password: String) {
        self.username = details.username;
        self.email = details.email;
        self.display_name = details.display_name;
        self.profile = details.profile;
        self.password = encoded_password;
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn details(username: &str) -> UserDetails {
        UserDetails {
            username: username.to_string(),
            email: format!("{}@example.com", username),
            display_name: None,
            profile: Profile::default(),
        }
    }

    #[test]
    fn test_new_user_is_not_persisted() {
        let user = User::new(details("alice"), "hash".to_string());

        assert_eq!(user.id, None);
        assert_eq!(user.created_at, user.updated_at);
        assert_eq!(user.password, "hash");
    }

    #[test]
    fn test_apply_keeps_identity() {
        let mut user = User::new(details("alice"), "hash-1".to_string());
        user.id = Some(7);
        let created_at = user.created_at;

        user.apply(details("alice_2"), "hash-2".to_string());

        assert_eq!(user.id, Some(7));
        assert_eq!(user.created_at, created_at);
        assert_eq!(user.username, "alice_2");
        assert_eq!(user.password, "hash-2");
    }

    #[test]
    fn test_serialized_document_uses_underscore_id() {
        let mut user = User::new(details("bob"), "hash".to_string());
        user.id = Some(3);

        let value = serde_json::to_value(&user).unwrap();
        assert_eq!(value["_id"], 3);
        assert!(value.get("id").is_none());
    }
}
