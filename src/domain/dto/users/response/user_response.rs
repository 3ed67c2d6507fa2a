use chrono::{DateTime, Utc};
use serde::Serialize;
use crate::domain::entities::users::{Profile, User};

/// 사용자 조회 응답
///
/// 인코딩된 비밀번호는 포함하지 않습니다.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: u64,
    pub username: String,
    pub email: String,
    pub display_name: Option<String>,
    pub profile: ProfileResponse,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProfileResponse {
    pub bio: Option<String>,
    pub profile_image_url: Option<String>,
}

impl From<Profile> for ProfileResponse {
    fn from(profile: Profile) -> Self {
        Self {
            bio: profile.bio,
            profile_image_url: profile.profile_image_url,
        }
    }
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        let User {
            id,
            username,
            email,
            display_name,
            profile,
            created_at,
            updated_at,
            ..
        } = user;

        Self {
            id: id.unwrap_or_default(),
            username,
            email,
            display_name,
            profile: ProfileResponse::from(profile),
            created_at,
            updated_at,
        }
    }
}
