//! Todo domain entity
//!
//! A todo lives only for the duration of a create request: it is decoded from
//! the request body, validated, and handed to the store.

use std::fmt;

use serde::de::{IgnoredAny, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::TodoValidationError;

/// A todo item
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Todo {
    pub name: String,
    pub category: String,
}

impl Todo {
    pub fn new(name: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
        }
    }

    /// Decode the first JSON value in `bytes`.
    ///
    /// Only a JSON object is accepted. Keys match case-insensitively, a repeated
    /// key keeps its last non-null value, `null` leaves a field untouched and
    /// unknown keys are ignored. Missing fields stay empty; `validate` is what
    /// rejects an incomplete todo. Bytes after the first value are not read.
    pub fn from_json(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::Deserializer::from_slice(bytes)
            .into_iter::<Todo>()
            .next()
            .unwrap_or_else(|| Err(serde::de::Error::custom("EOF while parsing a value")))
    }

    /// Name is checked before category.
    pub fn validate(&self) -> Result<(), TodoValidationError> {
        if self.name.is_empty() {
            return Err(TodoValidationError::EmptyName);
        }
        if self.category.is_empty() {
            return Err(TodoValidationError::EmptyCategory);
        }
        Ok(())
    }
}

impl<'de> Deserialize<'de> for Todo {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(TodoVisitor)
    }
}

struct TodoVisitor;

impl<'de> Visitor<'de> for TodoVisitor {
    type Value = Todo;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a todo object")
    }

    fn visit_map<M>(self, mut map: M) -> Result<Todo, M::Error>
    where
        M: MapAccess<'de>,
    {
        let mut todo = Todo::default();
        while let Some(key) = map.next_key::<String>()? {
            let field = if key.eq_ignore_ascii_case("name") {
                &mut todo.name
            } else if key.eq_ignore_ascii_case("category") {
                &mut todo.category
            } else {
                map.next_value::<IgnoredAny>()?;
                continue;
            };
            if let Some(value) = map.next_value::<Option<String>>()? {
                *field = value;
            }
        }
        Ok(todo)
    }
}
