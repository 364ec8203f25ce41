use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Whatever the caller sent on stdin, parsed best-effort.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InputDocument(pub Value);

impl InputDocument {
    /// The fallback used for empty or unparsable input.
    pub fn empty() -> Self {
        Self(Value::Object(Map::new()))
    }

    /// Looks up `key` when the document is a mapping.
    pub fn field(&self, key: &str) -> Option<&Value> {
        self.0.as_object().and_then(|obj| obj.get(key))
    }

    pub fn is_mapping(&self) -> bool {
        self.0.is_object()
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }
}

impl Default for InputDocument {
    fn default() -> Self {
        Self::empty()
    }
}

impl From<Value> for InputDocument {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputDocument {
    pub message: String,
    pub input_received: InputDocument,
}
