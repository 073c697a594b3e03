use serde::{Deserialize, Serialize};
use std::{collections::HashMap, fmt, str::FromStr};

use crate::error::Error;

/// Status line terminating every server reply. Code 0 means the command
/// was accepted; anything else fails the whole operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Status {
    pub code: u32,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra_message: Option<String>,
}

impl Status {
    pub fn ok() -> Self {
        Self {
            code: 0,
            message: "ok".to_owned(),
            extra_message: None,
        }
    }

    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code == 0
    }
}

/// A single field of a parsed reply. The query protocol folds repeated
/// keys into lists, so a field holds either one value or several.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Scalar(String),
    List(Vec<String>),
}

impl Value {
    /// Number of entries carried by this field.
    pub fn len(&self) -> usize {
        match self {
            Self::Scalar(_) => 1,
            Self::List(values) => values.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Value at `index`. A scalar applies to every index, matching
    /// replies where a key shared by all entries is sent only once.
    pub fn index(&self, index: usize) -> Option<&str> {
        match self {
            Self::Scalar(value) => Some(value),
            Self::List(values) => values.get(index).map(String::as_str),
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Scalar(value) => Some(value),
            Self::List(_) => None,
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Scalar(value.to_owned())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Scalar(value)
    }
}

impl From<Vec<String>> for Value {
    fn from(values: Vec<String>) -> Self {
        Self::List(values)
    }
}

impl<const N: usize> From<[&str; N]> for Value {
    fn from(values: [&str; N]) -> Self {
        Self::List(values.iter().map(|v| (*v).to_owned()).collect())
    }
}

/// Parsed reply to a single command: the status line plus the named
/// fields of the body. Construction is public because producing replies
/// is the job of [`Query`](crate::Query) implementations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Response {
    pub status: Status,
    fields: HashMap<String, Value>,
}

impl Response {
    pub fn new(status: Status) -> Self {
        Self {
            status,
            fields: HashMap::new(),
        }
    }

    /// Builder form of [`insert`](Self::insert).
    #[must_use]
    pub fn field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        let _ = self.fields.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Scalar field as a string slice. `None` for absent or list fields.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.fields.get(key).and_then(Value::as_str)
    }

    /// Parses a scalar field into `T`, distinguishing an absent field
    /// from an unparsable one.
    pub fn get_parsed<T>(&self, key: &'static str) -> Result<T, Error>
    where
        T: FromStr,
        T::Err: fmt::Display,
    {
        let raw = self.get_str(key).ok_or(Error::MissingField(key))?;
        raw.parse()
            .map_err(|err| Error::MalformedField(key, format!("{err}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalar_applies_to_every_index() {
        let value = Value::from("/icons");

        assert_eq!(value.len(), 1);
        assert_eq!(value.index(0), Some("/icons"));
        assert_eq!(value.index(7), Some("/icons"));
    }

    #[test]
    fn list_is_indexed() {
        let value = Value::from(["a.txt", "b.txt"]);

        assert_eq!(value.len(), 2);
        assert_eq!(value.index(1), Some("b.txt"));
        assert_eq!(value.index(2), None);
        assert_eq!(value.as_str(), None);
    }

    #[test]
    fn get_parsed_missing_vs_malformed() {
        let response = Response::new(Status::ok()).field("port", "x30033");

        assert_eq!(
            response.get_parsed::<u16>("seekpos"),
            Err(Error::MissingField("seekpos"))
        );
        assert!(matches!(
            response.get_parsed::<u16>("port"),
            Err(Error::MalformedField("port", _))
        ));
    }

    #[test]
    fn status_ok() {
        assert!(Status::ok().is_ok());
        assert!(!Status {
            code: 2568,
            message: "insufficient client permissions".to_owned(),
            extra_message: None,
        }
        .is_ok());
    }
}
