//! # 폼 바인딩 및 검증
//!
//! 요청 본문(JSON)을 폼 구조체에 바인딩하고 `validator` 규칙으로 검증합니다.
//! 검증 실패 시 `validator::ValidationErrors`를 재귀적으로 순회하여
//! [`FieldErrors`] 트리를 만들고 [`NotValidFormFields`]로 반환합니다.
//!
//! ## 바인딩 규칙
//!
//! - JSON 객체가 아닌 본문(빈 본문, 잘못된 JSON 포함)은 빈 폼으로 취급
//! - 폼에 정의되지 않은 필드는 무시
//! - 문자열은 앞뒤 공백을 제거하고, 비어 있으면 값이 없는 것으로 취급
//!   (`Form::UNTRIMMED_FIELDS`에 있는 필드는 공백 유지)
//! - 타입이 맞지 않는 필드는 해당 필드(하위 폼이면 하위 필드)에
//!   `This value is not valid.` 에러
//!
//! ## 에러 키
//!
//! 폼은 `#[serde(rename_all = "camelCase")]`를 사용합니다. `validator`는 Rust
//! 필드 이름으로 에러를 보고하므로 수집 시 camelCase JSON 키로 바꿔,
//! 검증 에러와 바인딩 에러가 같은 키를 쓰도록 합니다.

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use validator::{Validate, ValidationError, ValidationErrors, ValidationErrorsKind};
use super::form_errors::{FieldErrors, NotValidFormFields};

/// 타입 변환에 실패한 필드의 에러 메시지
pub const INVALID_VALUE_MESSAGE: &str = "This value is not valid.";

/// `#[validate(schema)]` 등 폼 전체에 대한 에러가 저장되는 키
const FORM_LEVEL_KEY: &str = "__all__";

/// 요청 본문을 바인딩할 수 있는 폼
///
/// ```rust,ignore
/// impl Form for UserForm {
///     const UNTRIMMED_FIELDS: &'static [&'static str] = &["plainPassword"];
/// }
/// ```
pub trait Form: DeserializeOwned + Validate + Default {
    /// 앞뒤 공백을 제거하지 않을 JSON 필드 이름
    const UNTRIMMED_FIELDS: &'static [&'static str] = &[];
}

/// 요청 본문을 폼으로 바인딩하고 검증하는 검증기
pub struct FormValidator;

impl FormValidator {
    /// 본문을 바인딩하고 검증합니다.
    ///
    /// # Returns
    ///
    /// * `Ok(T)` - 검증을 통과한 폼
    /// * `Err(NotValidFormFields)` - 필드별 에러 트리를 포함한 검증 실패
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let form: UserForm = FormValidator::submit(br#"{"username":"alice"}"#)?;
    /// ```
    pub fn submit<T: Form>(body: &[u8]) -> Result<T, NotValidFormFields> {
        let data = Self::decode(body, T::UNTRIMMED_FIELDS);
        let (form, binding_errors) = Self::bind::<T>(data);

        let mut errors = match form.validate() {
            Ok(()) => FieldErrors::new(),
            Err(validation_errors) => collect_errors(&validation_errors),
        };

        for path in &binding_errors {
            errors.replace_at(path, FieldErrors::from_message(INVALID_VALUE_MESSAGE));
        }

        if errors.is_empty() {
            Ok(form)
        } else {
            Err(NotValidFormFields::new(errors))
        }
    }

    /// 본문을 JSON 객체로 디코딩합니다. 객체가 아니면 빈 객체를 반환합니다.
    fn decode(body: &[u8], untrimmed: &[&str]) -> Map<String, Value> {
        match serde_json::from_slice::<Value>(body) {
            Ok(Value::Object(map)) => normalize_object(map, untrimmed),
            Ok(_) | Err(_) => {
                log::debug!("요청 본문이 JSON 객체가 아니므로 빈 폼으로 처리합니다");
                Map::new()
            }
        }
    }

    /// 폼에 데이터를 바인딩합니다.
    ///
    /// 전체 바인딩이 실패하면 바인딩할 수 없는 값을 찾아 제거하고 나머지를 바인딩합니다.
    /// 반환하는 경로 목록은 제거된 값의 JSON 키 경로입니다.
    fn bind<T>(mut data: Map<String, Value>) -> (T, Vec<Vec<String>>)
    where
        T: DeserializeOwned + Default,
    {
        if let Ok(form) = serde_json::from_value::<T>(Value::Object(data.clone())) {
            return (form, Vec::new());
        }

        let mut invalid_paths = Vec::new();
        strip_unbindable::<T>(&mut Vec::new(), &mut data, &mut invalid_paths);

        let form = serde_json::from_value::<T>(Value::Object(data)).unwrap_or_default();
        (form, invalid_paths)
    }
}

/// 단독으로 바인딩되지 않는 값을 제거하고 그 경로를 기록합니다.
///
/// 하위 객체는 먼저 하위 필드 단위로 정리하고, 그래도 바인딩되지 않을 때만 통째로 제거합니다.
fn strip_unbindable<T>(
    path: &mut Vec<String>,
    map: &mut Map<String, Value>,
    invalid_paths: &mut Vec<Vec<String>>,
) where
    T: DeserializeOwned,
{
    let keys: Vec<String> = map.keys().cloned().collect();

    for key in keys {
        path.push(key.clone());

        let bindable = map.get(&key).is_some_and(|value| binds_at::<T>(path, value));
        if !bindable {
            let recorded = invalid_paths.len();
            let repaired = match map.get_mut(&key) {
                Some(Value::Object(inner)) => {
                    strip_unbindable::<T>(path, inner, invalid_paths);
                    binds_at::<T>(path, &Value::Object(inner.clone()))
                }
                _ => false,
            };

            if !repaired {
                invalid_paths.truncate(recorded);
                map.remove(&key);
                invalid_paths.push(path.clone());
            }
        }

        path.pop();
    }
}

/// 값 하나만 경로 위치에 둔 본문이 폼으로 바인딩되는지 확인합니다.
fn binds_at<T: DeserializeOwned>(path: &[String], value: &Value) -> bool {
    let wrapped = path.iter().rev().fold(value.clone(), |inner, key| {
        Value::Object(Map::from_iter([(key.clone(), inner)]))
    });

    serde_json::from_value::<T>(wrapped).is_ok()
}

fn normalize_object(map: Map<String, Value>, untrimmed: &[&str]) -> Map<String, Value> {
    map.into_iter()
        .map(|(key, value)| {
            let value = normalize(&key, value, untrimmed);
            (key, value)
        })
        .collect()
}

/// 문자열 앞뒤 공백을 제거하고 빈 문자열을 `null`로 바꿉니다. 하위 객체에도 적용합니다.
fn normalize(key: &str, value: Value, untrimmed: &[&str]) -> Value {
    match value {
        Value::String(s) => {
            let s = if untrimmed.contains(&key) { s } else { s.trim().to_string() };
            if s.is_empty() { Value::Null } else { Value::String(s) }
        }
        Value::Object(map) => Value::Object(normalize_object(map, untrimmed)),
        other => other,
    }
}

/// `validator` 에러를 필드 에러 트리로 변환합니다.
///
/// 필드 자신의 메시지와, 하위 폼의 에러를 하위 필드 이름을 키로 재귀 수집합니다.
pub fn collect_errors(errors: &ValidationErrors) -> FieldErrors {
    let mut tree = FieldErrors::new();

    for (field, kind) in errors.errors() {
        match kind {
            ValidationErrorsKind::Field(list) if &**field == FORM_LEVEL_KEY => {
                for error in list {
                    tree.add_message(message_of(error));
                }
            }
            ValidationErrorsKind::Field(list) => {
                let mut node = FieldErrors::new();
                for error in list {
                    node.add_message(message_of(error));
                }
                tree.insert_child(json_key(field), node);
            }
            ValidationErrorsKind::Struct(nested) => {
                tree.insert_child(json_key(field), collect_errors(nested));
            }
            ValidationErrorsKind::List(items) => {
                let mut node = FieldErrors::new();
                for (index, nested) in items {
                    node.insert_child(index.to_string(), collect_errors(nested));
                }
                tree.insert_child(json_key(field), node);
            }
        }
    }

    tree
}

/// Rust 필드 이름(`plain_password`)을 JSON 키(`plainPassword`)로 바꿉니다.
fn json_key(field: &str) -> String {
    let mut parts = field.split('_').filter(|part| !part.is_empty());
    let mut key = parts.next().unwrap_or_default().to_string();

    for part in parts {
        let mut chars = part.chars();
        if let Some(first) = chars.next() {
            key.extend(first.to_uppercase());
            key.push_str(chars.as_str());
        }
    }

    key
}

fn message_of(error: &ValidationError) -> String {
    match &error.message {
        Some(message) => message.to_string(),
        None => default_message(&error.code).to_string(),
    }
}

fn default_message(code: &str) -> &'static str {
    match code {
        "required" => "This value should not be blank.",
        "email" => "This value is not a valid email address.",
        "url" => "This value is not a valid URL.",
        "length" => "This value has an invalid length.",
        _ => INVALID_VALUE_MESSAGE,
    }
}
