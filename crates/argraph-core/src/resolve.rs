//! Resolution of embedded node payloads against a node cache

use std::rc::Rc;

use serde_json::Value;

use crate::error::Result;
use crate::model::NodeMap;
use crate::node::Node;
use crate::wire;

/// Turns an embedded node payload into a node instance.
pub trait NodeResolver {
    fn materialize(&self, payload: &Value) -> Result<Node>;
}

/// Builds nodes with [`Node::from_ova`].
#[derive(Debug, Clone, Copy, Default)]
pub struct OvaNodeResolver;

impl NodeResolver for OvaNodeResolver {
    fn materialize(&self, payload: &Value) -> Result<Node> {
        Node::from_ova(payload)
    }
}

impl<R: NodeResolver + ?Sized> NodeResolver for &R {
    fn materialize(&self, payload: &Value) -> Result<Node> {
        (**self).materialize(payload)
    }
}

/// Outcome of a node lookup.
#[derive(Debug, Clone)]
pub enum Resolution {
    /// The cache already held a node under this key.
    CacheHit(Rc<Node>),
    /// The node was built from the payload and recorded in the cache.
    Materialized(Rc<Node>),
}

impl Resolution {
    pub fn node(&self) -> &Rc<Node> {
        match self {
            Resolution::CacheHit(node) | Resolution::Materialized(node) => node,
        }
    }

    pub fn into_node(self) -> Rc<Node> {
        match self {
            Resolution::CacheHit(node) | Resolution::Materialized(node) => node,
        }
    }

    pub fn is_cache_hit(&self) -> bool {
        matches!(self, Resolution::CacheHit(_))
    }
}

/// Reuse the cached node for the payload's `id`, or materialize and cache a new one.
///
/// The cache is trusted: a cached node is returned even if the payload
/// describes a different node under the same key.
pub fn resolve_node<R>(payload: &Value, cache: &mut NodeMap, resolver: &R) -> Result<Resolution>
where
    R: NodeResolver + ?Sized,
{
    let key = wire::integer_field(payload.get("id"), "id")?;
    if let Some(node) = cache.get(&key) {
        tracing::trace!(key, "node cache hit");
        return Ok(Resolution::CacheHit(Rc::clone(node)));
    }

    let node = Rc::new(resolver.materialize(payload)?);
    tracing::trace!(key, "node materialized");
    cache.insert(key, Rc::clone(&node));
    Ok(Resolution::Materialized(node))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EdgeError;
    use serde_json::json;

    #[test]
    fn test_miss_then_hit() {
        let mut cache = NodeMap::new();
        let payload = json!({"id": 42, "text": "claim"});

        let first = resolve_node(&payload, &mut cache, &OvaNodeResolver).unwrap();
        assert!(!first.is_cache_hit());
        assert_eq!(cache.len(), 1);

        let second = resolve_node(&payload, &mut cache, &OvaNodeResolver).unwrap();
        assert!(second.is_cache_hit());
        assert!(Rc::ptr_eq(first.node(), second.node()));
    }

    #[test]
    fn test_cache_is_trusted_over_payload() {
        let mut cache = NodeMap::new();
        cache.insert(7, Rc::new(Node::new(7)));

        let resolved = resolve_node(&json!({"id": 7, "text": "other"}), &mut cache, &OvaNodeResolver).unwrap();
        assert!(resolved.is_cache_hit());
        assert_eq!(resolved.into_node().text(), None);
    }

    #[test]
    fn test_custom_resolver() {
        struct Tagged;
        impl NodeResolver for Tagged {
            fn materialize(&self, payload: &Value) -> Result<Node> {
                let mut with_tag = payload.clone();
                with_tag["text"] = json!("tagged");
                Node::from_ova(&with_tag)
            }
        }

        let mut cache = NodeMap::new();
        let node = resolve_node(&json!({"id": 3}), &mut cache, &Tagged).unwrap().into_node();
        assert_eq!(node.text(), Some("tagged"));
    }

    #[test]
    fn test_missing_id_is_malformed() {
        let mut cache = NodeMap::new();
        let err = resolve_node(&json!({"text": "x"}), &mut cache, &OvaNodeResolver).unwrap_err();
        assert!(matches!(err, EdgeError::MalformedInput { .. }));
        assert!(cache.is_empty());
    }
}
