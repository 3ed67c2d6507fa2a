use serde::Serialize;
use crate::domain::forms::{FieldErrors, NotValidFormFields};

/// 성공 메시지 응답 `{"success": "..."}`
#[derive(Debug, Clone, Serialize)]
pub struct SuccessResponse {
    pub success: String,
}

impl SuccessResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self { success: message.into() }
    }
}

/// 에러 메시지 응답 `{"error": "..."}`
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self { error: message.into() }
    }
}

/// 폼 검증 실패 응답
///
/// ```json
/// {
///   "error": "There was a validation error",
///   "notValidFields": { "username": ["This value should not be blank."] }
/// }
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationErrorResponse {
    pub error: String,
    pub not_valid_fields: FieldErrors,
}

impl From<NotValidFormFields> for ValidationErrorResponse {
    fn from(not_valid: NotValidFormFields) -> Self {
        Self {
            error: not_valid.message().to_string(),
            not_valid_fields: not_valid.into_fields(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_validation_error_response_shape() {
        let response = ValidationErrorResponse::from(NotValidFormFields::for_field(
            "email",
            "This value should not be blank.",
        ));

        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({
                "error": "There was a validation error",
                "notValidFields": { "email": ["This value should not be blank."] }
            })
        );
    }
}
