//! Opaque identifier as it appears on the wire.
//!
//! The backend has served ids both as JSON numbers and as strings across
//! versions; the client must treat them as opaque either way. `WireId`
//! normalizes both encodings to a string and always serializes as a string.

use std::fmt;

use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize, Serializer};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WireId(pub String);

impl WireId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for WireId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for WireId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl Serialize for WireId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for WireId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct WireIdVisitor;

        impl Visitor<'_> for WireIdVisitor {
            type Value = WireId;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a string or integer identifier")
            }

            fn visit_str<E: de::Error>(self, value: &str) -> Result<WireId, E> {
                Ok(WireId(value.to_string()))
            }

            fn visit_u64<E: de::Error>(self, value: u64) -> Result<WireId, E> {
                Ok(WireId(value.to_string()))
            }

            fn visit_i64<E: de::Error>(self, value: i64) -> Result<WireId, E> {
                Ok(WireId(value.to_string()))
            }
        }

        deserializer.deserialize_any(WireIdVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_numeric_and_string_ids() {
        let numeric: WireId = serde_json::from_str("42").expect("numeric id");
        let string: WireId = serde_json::from_str("\"42\"").expect("string id");
        assert_eq!(numeric, string);
        assert_eq!(numeric.as_str(), "42");
    }

    #[test]
    fn always_serializes_as_a_string() {
        let id: WireId = serde_json::from_str("7").expect("numeric id");
        assert_eq!(serde_json::to_string(&id).expect("serialize"), "\"7\"");
    }
}
