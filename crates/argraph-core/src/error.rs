//! Error types for edge conversion

use crate::model::NodeKey;
use thiserror::Error;

/// Failures raised while converting edges between AIF and OVA.
#[derive(Debug, Error)]
pub enum EdgeError {
    /// A required field is missing or has the wrong type.
    #[error("malformed input at `{field}`: {reason}")]
    MalformedInput { field: String, reason: String },

    /// An endpoint refers to a node key absent from the supplied lookup.
    #[error("node {key} is not resolved")]
    UnresolvedReference { key: NodeKey },

    /// A wire record could not be encoded as JSON.
    #[error("failed to encode edge: {0}")]
    Encode(#[source] serde_json::Error),
}

impl EdgeError {
    pub(crate) fn malformed(field: impl Into<String>, reason: impl ToString) -> Self {
        EdgeError::MalformedInput {
            field: field.into(),
            reason: reason.to_string(),
        }
    }
}

pub type Result<T, E = EdgeError> = std::result::Result<T, E>;
