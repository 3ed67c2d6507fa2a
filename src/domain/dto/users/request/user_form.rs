use serde::Deserialize;
use validator::{Validate, ValidationError};
use crate::domain::entities::users::{Profile, UserDetails};
use crate::domain::forms::Form;

/// 이미 사용 중인 사용자명에 대한 검증 메시지
pub const DUPLICATE_USERNAME_MESSAGE: &str = "There is already an account with this username";

/// 사용자 생성/수정 폼
///
/// 생성과 수정에 같은 폼을 사용합니다. 본문에 없는 필드는 비어 있는 것으로
/// 제출되므로, 수정 시에도 필수 필드와 `plainPassword`를 모두 보내야 합니다.
///
/// ```json
/// {
///   "username": "alice",
///   "email": "alice@example.com",
///   "displayName": "Alice",
///   "plainPassword": "secret123",
///   "profile": { "bio": "hello", "profileImageUrl": "https://example.com/a.png" }
/// }
/// ```
///
/// 문자열 값은 앞뒤 공백을 제거하고 바인딩하며, `plainPassword`만 그대로 둡니다.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(default, rename_all = "camelCase")]
pub struct UserForm {
    #[validate(
        required(message = "This value should not be blank."),
        length(min = 3, max = 30, message = "Your username should be between 3 and 30 characters"),
        custom(function = "validate_username")
    )]
    pub username: Option<String>,

    #[validate(
        required(message = "This value should not be blank."),
        email(message = "This value is not a valid email address.")
    )]
    pub email: Option<String>,

    #[validate(length(max = 50, message = "This value is too long. It should have 50 characters or less."))]
    pub display_name: Option<String>,

    /// 평문 비밀번호 (저장되지 않음)
    #[validate(
        required(message = "Please enter a password"),
        length(min = 6, max = 4096, message = "Your password should be at least 6 characters")
    )]
    pub plain_password: Option<String>,

    #[validate(nested)]
    pub profile: Option<ProfileForm>,
}

/// 프로필 하위 폼
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(default, rename_all = "camelCase")]
pub struct ProfileForm {
    #[validate(length(max = 280, message = "This value is too long. It should have 280 characters or less."))]
    pub bio: Option<String>,

    #[validate(url(message = "This value is not a valid URL."))]
    pub profile_image_url: Option<String>,
}

impl Form for UserForm {
    const UNTRIMMED_FIELDS: &'static [&'static str] = &["plainPassword"];
}

impl UserForm {
    /// 검증을 통과한 폼을 엔티티 입력값과 평문 비밀번호로 분리합니다.
    ///
    /// 필수 필드가 비어 있으면 `None`을 반환합니다.
    pub fn into_details(self) -> Option<(UserDetails, String)> {
        let details = UserDetails {
            username: self.username?,
            email: self.email?,
            display_name: self.display_name,
            profile: self.profile.map(Profile::from).unwrap_or_default(),
        };

        Some((details, self.plain_password?))
    }
}

impl From<ProfileForm> for Profile {
    fn from(form: ProfileForm) -> Self {
        Self {
            bio: form.bio,
            profile_image_url: form.profile_image_url,
        }
    }
}

fn validate_username(username: &str) -> Result<(), ValidationError> {
    if !username.chars().all(|c| c.is_alphanumeric() || c == '_') {
        return Err(ValidationError::new("invalid_username")
            .with_message("Your username may only contain letters, digits and underscores".into()));
    }
    Ok(())
}
