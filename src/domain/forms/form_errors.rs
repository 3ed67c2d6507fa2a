//! # 폼 검증 에러 트리
//!
//! 폼 검증 실패 정보를 필드 이름 기준의 트리로 표현합니다.
//! 각 노드는 자기 자신의 메시지 목록과 이름이 붙은 하위 필드 노드를 가집니다.
//!
//! ## JSON 표현
//!
//! 하위 필드가 없는 노드는 메시지 배열로, 하위 필드가 있는 노드는
//! 자신의 메시지를 `"0"`, `"1"`, ... 키로 두고 하위 필드를 이름 키로 두는 객체로
//! 직렬화됩니다.
//!
//! ```json
//! {
//!   "username": ["This value should not be blank."],
//!   "profile": {
//!     "profileImageUrl": ["This value is not a valid URL."]
//!   }
//! }
//! ```

use std::collections::BTreeMap;
use serde::ser::{Serialize, SerializeMap, Serializer};
use thiserror::Error;

/// 검증 실패 시 최상위 에러 메시지
pub const VALIDATION_ERROR_MESSAGE: &str = "There was a validation error";

/// 필드별 검증 에러 트리
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldErrors {
    messages: Vec<String>,
    children: BTreeMap<String, FieldErrors>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// 메시지 하나만 가진 노드를 생성합니다.
    pub fn from_message(message: impl Into<String>) -> Self {
        let mut errors = Self::new();
        errors.add_message(message);
        errors
    }

    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    pub fn children(&self) -> &BTreeMap<String, FieldErrors> {
        &self.children
    }

    pub fn child(&self, name: &str) -> Option<&FieldErrors> {
        self.children.get(name)
    }

    pub fn add_message(&mut self, message: impl Into<String>) {
        self.messages.push(message.into());
    }

    /// 지정한 하위 필드에 메시지를 추가합니다. 노드가 없으면 새로 만듭니다.
    pub fn add_field_message(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.children
            .entry(field.into())
            .or_default()
            .add_message(message);
    }

    /// 하위 필드 트리를 병합합니다. 비어 있는 트리는 무시합니다.
    pub fn insert_child(&mut self, name: impl Into<String>, errors: FieldErrors) {
        if errors.is_empty() {
            return;
        }

        let node = self.children.entry(name.into()).or_default();
        node.merge(errors);
    }

    /// 하위 필드 트리를 통째로 교체합니다.
    pub fn replace_child(&mut self, name: impl Into<String>, errors: FieldErrors) {
        let name = name.into();
        if errors.is_empty() {
            self.children.remove(&name);
        } else {
            self.children.insert(name, errors);
        }
    }

    /// 경로 끝의 필드 트리를 교체합니다. 중간 노드가 없으면 새로 만듭니다.
    pub fn replace_at(&mut self, path: &[String], errors: FieldErrors) {
        match path {
            [] => *self = errors,
            [name] => self.replace_child(name.as_str(), errors),
            [name, rest @ ..] => {
                let node = self.children.entry(name.clone()).or_default();
                node.replace_at(rest, errors);
                if node.is_empty() {
                    self.children.remove(name);
                }
            }
        }
    }

    pub fn merge(&mut self, other: FieldErrors) {
        self.messages.extend(other.messages);
        for (name, child) in other.children {
            self.insert_child(name, child);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty() && self.children.is_empty()
    }

    /// 점(`.`)으로 구분된 경로의 필드에 에러가 있는지 확인합니다.
    ///
    /// ```rust,ignore
    /// assert!(errors.contains_field("profile.profileImageUrl"));
    /// ```
    pub fn contains_field(&self, path: &str) -> bool {
        path.split('.')
            .try_fold(self, |node, name| node.child(name))
            .is_some()
    }
}

impl Serialize for FieldErrors {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if self.children.is_empty() {
            return self.messages.serialize(serializer);
        }

        let mut map = serializer.serialize_map(Some(self.messages.len() + self.children.len()))?;
        for (index, message) in self.messages.iter().enumerate() {
            map.serialize_entry(&index.to_string(), message)?;
        }
        for (name, child) in &self.children {
            map.serialize_entry(name, child)?;
        }
        map.end()
    }
}

/// 폼 검증 실패 값
///
/// 검증 실패 시 생성되어 에러 응답을 만드는 데 바로 소비되며, 저장되지 않습니다.
#[derive(Debug, Clone, Error, PartialEq)]
#[error("{message}")]
pub struct NotValidFormFields {
    message: String,
    fields: FieldErrors,
}

impl NotValidFormFields {
    pub fn new(fields: FieldErrors) -> Self {
        Self {
            message: VALIDATION_ERROR_MESSAGE.to_string(),
            fields,
        }
    }

    /// 단일 필드에 대한 검증 실패를 생성합니다.
    pub fn for_field(field: &str, message: impl Into<String>) -> Self {
        let mut fields = FieldErrors::new();
        fields.add_field_message(field, message);
        Self::new(fields)
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn fields(&self) -> &FieldErrors {
        &self.fields
    }

    pub fn into_fields(self) -> FieldErrors {
        self.fields
    }
}
