use serde::de::Deserializer;
use serde::ser::{Error as _, Serializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// An OpenRTB `ext` object held as raw JSON bytes.
///
/// Extensions are opaque to most of the pipeline, so they are carried as
/// bytes instead of a parsed `Value`. Decoding re-encodes the incoming value
/// compactly with its key order intact. The bytes are not validated when
/// built by hand; a malformed extension is only detected when something
/// parses it (merging, serializing).
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct RawExt(Vec<u8>);

impl RawExt {
    /// Wraps raw bytes without validating them.
    #[must_use]
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Self(bytes.into())
    }

    /// Serializes a JSON value into an extension.
    pub fn from_value(value: &Value) -> serde_json::Result<Self> {
        serde_json::to_vec(value).map(Self)
    }

    /// Returns the raw bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Parses the bytes as a JSON value.
    pub fn to_value(&self) -> serde_json::Result<Value> {
        serde_json::from_slice(&self.0)
    }
}

impl From<Vec<u8>> for RawExt {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

impl From<&str> for RawExt {
    fn from(s: &str) -> Self {
        Self(s.as_bytes().to_vec())
    }
}

impl fmt::Debug for RawExt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RawExt({})", String::from_utf8_lossy(&self.0))
    }
}

impl Serialize for RawExt {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let value: Value = serde_json::from_slice(&self.0).map_err(S::Error::custom)?;
        value.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for RawExt {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        // Goes through `Value` so it also works inside flattened structs.
        let value = Value::deserialize(deserializer)?;
        serde_json::to_vec(&value).map(Self).map_err(serde::de::Error::custom)
    }
}
