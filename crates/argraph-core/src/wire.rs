//! Wire records for the AIF and OVA edge objects

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{EdgeError, Result};

/// AIF edge object. All IDs travel as strings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AifEdgeRecord {
    #[serde(rename = "edgeID")]
    pub edge_id: RawId,
    #[serde(rename = "fromID")]
    pub from_id: RawId,
    #[serde(rename = "toID")]
    pub to_id: RawId,
    /// Placeholder kept for downstream tools; always `null` on output.
    #[serde(rename = "formEdgeID", default)]
    pub form_edge_id: Option<Value>,
}

/// OVA edge object. Endpoints are embedded node payloads.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OvaEdgeRecord {
    pub from: Value,
    pub to: Value,
    #[serde(default)]
    pub visible: Option<bool>,
    #[serde(default)]
    pub annotator: Option<String>,
    pub date: String,
}

/// An integer ID as found on the wire: a numeric string or a bare number.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum RawId {
    Number(i64),
    Text(String),
}

impl RawId {
    pub fn parse(&self, field: &str) -> Result<i64> {
        match self {
            RawId::Number(n) => Ok(*n),
            RawId::Text(s) => s
                .trim()
                .parse::<i64>()
                .map_err(|e| EdgeError::malformed(field, format!("{s:?} is not an integer: {e}"))),
        }
    }
}

impl From<i64> for RawId {
    fn from(n: i64) -> Self {
        RawId::Text(n.to_string())
    }
}

/// Read an integer ID out of an optional JSON value.
pub(crate) fn integer_field(value: Option<&Value>, field: &str) -> Result<i64> {
    let value = value.ok_or_else(|| EdgeError::malformed(field, "missing"))?;
    let raw: RawId = serde_json::from_value(value.clone())
        .map_err(|_| EdgeError::malformed(field, format!("expected an integer, found {value}")))?;
    raw.parse(field)
}

pub(crate) fn decode<T: serde::de::DeserializeOwned>(raw: &Value, what: &str) -> Result<T> {
    T::deserialize(raw).map_err(|e| EdgeError::malformed(what, e))
}
