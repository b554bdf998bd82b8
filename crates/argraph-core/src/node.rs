//! Argument graph node as seen by edges: a stable key and an opaque OVA payload

use std::hash::{Hash, Hasher};

use serde_json::{Map, Value};

use crate::error::{EdgeError, Result};
use crate::model::NodeKey;
use crate::wire;

/// A node of the argument graph.
///
/// Edges only rely on `key`. The OVA object, `id` included, is kept verbatim
/// in `payload` and written back by [`Node::to_ova`].
#[derive(Debug, Clone)]
pub struct Node {
    key: NodeKey,
    payload: Map<String, Value>,
}

impl Node {
    /// A bare node carrying nothing but its key.
    pub fn new(key: NodeKey) -> Self {
        Node {
            key,
            payload: Map::new(),
        }
    }

    pub fn key(&self) -> NodeKey {
        self.key
    }

    /// Build a node from an OVA node object. Only the integer `id` is required.
    pub fn from_ova(payload: &Value) -> Result<Self> {
        let obj = payload
            .as_object()
            .ok_or_else(|| EdgeError::malformed("node", format!("expected an object, found {payload}")))?;
        let key = wire::integer_field(obj.get("id"), "id")?;
        Ok(Node {
            key,
            payload: obj.clone(),
        })
    }

    /// Export as an OVA node object. A bare node gets a numeric `id`.
    pub fn to_ova(&self) -> Value {
        let mut obj = self.payload.clone();
        obj.entry("id").or_insert_with(|| Value::from(self.key));
        Value::Object(obj)
    }

    /// Raw access to a payload field.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.payload.get(field)
    }

    pub fn text(&self) -> Option<&str> {
        self.get("text").and_then(Value::as_str)
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for Node {}

impl Hash for Node {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_ova_keeps_payload() {
        let node = Node::from_ova(&json!({
            "id": 119940,
            "type": "RA",
            "text": "Sign",
            "x": 709
        }))
        .unwrap();

        assert_eq!(node.key(), 119940);
        assert_eq!(node.text(), Some("Sign"));
        assert_eq!(node.get("type"), Some(&json!("RA")));
        assert_eq!(node.get("id"), Some(&json!(119940)));
    }

    #[test]
    fn test_to_ova_restores_id() {
        let payload = json!({"id": 5, "text": "claim", "visible": true});
        let node = Node::from_ova(&payload).unwrap();
        assert_eq!(node.to_ova(), payload);
    }

    #[test]
    fn test_to_ova_keeps_string_id() {
        let payload = json!({"id": "5", "text": "claim"});
        let node = Node::from_ova(&payload).unwrap();
        assert_eq!(node.key(), 5);
        assert_eq!(node.to_ova(), payload);
    }

    #[test]
    fn test_bare_node_to_ova() {
        assert_eq!(Node::new(9).to_ova(), json!({"id": 9}));
    }

    #[test]
    fn test_from_ova_requires_object_with_id() {
        assert!(Node::from_ova(&json!([1, 2])).is_err());
        assert!(Node::from_ova(&json!({"text": "no id"})).is_err());
        assert!(Node::from_ova(&json!({"id": "x"})).is_err());
    }

    #[test]
    fn test_equality_is_by_key() {
        let a = Node::from_ova(&json!({"id": 1, "text": "a"})).unwrap();
        let b = Node::from_ova(&json!({"id": 1, "text": "b"})).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, Node::new(2));
    }
}
