use crate::utils::error::{PhonecatError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Resource the phone list is fetched from.
pub const PHONES_PATH: &str = "/phonecat/phones";

/// Ordered item records exactly as the server sent them.
///
/// Records are opaque: the list never inspects, filters or reorders them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemList(Vec<serde_json::Value>);

impl ItemList {
    pub fn new(items: Vec<serde_json::Value>) -> Self {
        Self(items)
    }

    /// Takes a decoded response body. Anything other than a JSON array is rejected.
    pub fn from_body(body: serde_json::Value) -> Result<Self> {
        match body {
            serde_json::Value::Array(items) => Ok(Self(items)),
            other => Err(PhonecatError::UnexpectedBody {
                found: json_kind(&other).to_string(),
            }),
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, serde_json::Value> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[serde_json::Value] {
        &self.0
    }

    pub fn into_inner(self) -> Vec<serde_json::Value> {
        self.0
    }
}

impl<'a> IntoIterator for &'a ItemList {
    type Item = &'a serde_json::Value;
    type IntoIter = std::slice::Iter<'a, serde_json::Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}

/// Field name the view layer orders the list by. Not validated here.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SortKey(String);

impl SortKey {
    pub const DEFAULT: &'static str = "age";

    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for SortKey {
    fn default() -> Self {
        Self::new(Self::DEFAULT)
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SortKey {
    fn from(key: &str) -> Self {
        Self::new(key)
    }
}

impl From<String> for SortKey {
    fn from(key: String) -> Self {
        Self(key)
    }
}

/// What the rendering layer sees.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScopeState {
    /// `None` until the first successful fetch.
    pub phones: Option<ItemList>,
    /// `None` until a controller activates against this scope.
    pub order_prop: Option<SortKey>,
}
