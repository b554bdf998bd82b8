//! Directed argument edge and its AIF / OVA converters

use std::fmt;
use std::hash::{Hash, Hasher};
use std::rc::Rc;

use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::date::{format_ova_date, parse_ova_date};
use crate::error::{EdgeError, Result};
use crate::ids::{IdGenerator, ProcessIds};
use crate::model::{EdgeKey, NodeKey, NodeMap};
use crate::node::Node;
use crate::resolve::{NodeResolver, OvaNodeResolver, resolve_node};
use crate::wire::{self, AifEdgeRecord, OvaEdgeRecord};

/// One end of an edge.
#[derive(Debug, Clone)]
pub enum Endpoint {
    Resolved(Rc<Node>),
    /// The key was not found in the lookup the edge was built against.
    Unresolved(NodeKey),
}

impl Endpoint {
    fn lookup(nodes: &NodeMap, key: NodeKey) -> Self {
        match nodes.get(&key) {
            Some(node) => Endpoint::Resolved(Rc::clone(node)),
            None => Endpoint::Unresolved(key),
        }
    }

    pub fn key(&self) -> NodeKey {
        match self {
            Endpoint::Resolved(node) => node.key(),
            Endpoint::Unresolved(key) => *key,
        }
    }

    pub fn node(&self) -> Result<&Rc<Node>> {
        match self {
            Endpoint::Resolved(node) => Ok(node),
            Endpoint::Unresolved(key) => Err(EdgeError::UnresolvedReference { key: *key }),
        }
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self, Endpoint::Resolved(_))
    }
}

impl From<Rc<Node>> for Endpoint {
    fn from(node: Rc<Node>) -> Self {
        Endpoint::Resolved(node)
    }
}

impl From<Node> for Endpoint {
    fn from(node: Node) -> Self {
        Endpoint::Resolved(Rc::new(node))
    }
}

impl PartialEq for Endpoint {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

/// The `(edge key, start key, end key)` triple that identifies an edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeIdentity {
    pub key: EdgeKey,
    pub start: NodeKey,
    pub end: NodeKey,
}

/// A directed relation between two argument nodes.
///
/// # Equality and hashing disagree
///
/// `==` compares only the endpoints, while `Hash` covers the full
/// [`EdgeIdentity`] triple. Two edges with the same endpoints but different
/// keys are equal yet hash differently, which breaks the contract hashed
/// collections rely on. `Edge` therefore does not implement `Eq`; use
/// [`Edge::identity`] as the key when deduplicating through a `HashSet` or
/// `HashMap`.
#[derive(Debug, Clone)]
pub struct Edge {
    pub start: Endpoint,
    pub end: Endpoint,
    pub key: EdgeKey,
    /// OVA display flag.
    pub visible: Option<bool>,
    /// OVA annotator.
    pub annotator: Option<String>,
    pub date: DateTime<Utc>,
}

impl Edge {
    /// Create an edge with a process-unique key, stamped with the current time.
    pub fn new(start: impl Into<Endpoint>, end: impl Into<Endpoint>) -> Self {
        Self::with_ids(start, end, &ProcessIds)
    }

    /// Create an edge whose key is drawn from `ids`.
    pub fn with_ids<G>(start: impl Into<Endpoint>, end: impl Into<Endpoint>, ids: &G) -> Self
    where
        G: IdGenerator + ?Sized,
    {
        Self::with_key(start, end, ids.next())
    }

    pub fn with_key(start: impl Into<Endpoint>, end: impl Into<Endpoint>, key: EdgeKey) -> Self {
        Edge {
            start: start.into(),
            end: end.into(),
            key,
            visible: None,
            annotator: None,
            date: Utc::now(),
        }
    }

    pub fn identity(&self) -> EdgeIdentity {
        EdgeIdentity {
            key: self.key,
            start: self.start.key(),
            end: self.end.key(),
        }
    }

    /// Source node; fails if the edge was built against a lookup that lacked it.
    pub fn start(&self) -> Result<&Rc<Node>> {
        self.start.node()
    }

    /// Target node; fails if the edge was built against a lookup that lacked it.
    pub fn end(&self) -> Result<&Rc<Node>> {
        self.end.node()
    }

    pub fn is_resolved(&self) -> bool {
        self.start.is_resolved() && self.end.is_resolved()
    }

    /// See [`EdgeCodec::from_aif`].
    pub fn from_aif(raw: &Value, nodes: &NodeMap) -> Result<Self> {
        EdgeCodec::new().from_aif(raw, nodes)
    }

    /// See [`EdgeCodec::from_ova`].
    pub fn from_ova(raw: &Value, nodes: &mut NodeMap) -> Result<Self> {
        EdgeCodec::new().from_ova(raw, nodes)
    }

    pub fn to_aif_record(&self) -> Result<AifEdgeRecord> {
        Ok(AifEdgeRecord {
            edge_id: self.key.into(),
            from_id: self.start()?.key().into(),
            to_id: self.end()?.key().into(),
            form_edge_id: None,
        })
    }

    /// AIF edge object. IDs are written as strings; `formEdgeID` is always `null`.
    pub fn to_aif(&self) -> Result<Value> {
        serde_json::to_value(self.to_aif_record()?).map_err(EdgeError::Encode)
    }

    pub fn to_ova_record(&self) -> Result<OvaEdgeRecord> {
        Ok(OvaEdgeRecord {
            from: self.start()?.to_ova(),
            to: self.end()?.to_ova(),
            visible: self.visible,
            annotator: self.annotator.clone(),
            date: format_ova_date(&self.date),
        })
    }

    /// OVA edge object embedding both endpoint payloads.
    pub fn to_ova(&self) -> Result<Value> {
        serde_json::to_value(self.to_ova_record()?).map_err(EdgeError::Encode)
    }
}

impl PartialEq for Edge {
    fn eq(&self, other: &Self) -> bool {
        self.start == other.start && self.end == other.end
    }
}

impl Hash for Edge {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.identity().hash(state);
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {} (#{})", self.start.key(), self.end.key(), self.key)
    }
}

/// Converts raw edge objects into [`Edge`]s.
///
/// The resolver materializes embedded OVA nodes on a cache miss; the ID
/// generator mints keys for OVA edges, which carry none of their own.
#[derive(Debug, Clone, Default)]
pub struct EdgeCodec<R = OvaNodeResolver, G = ProcessIds> {
    resolver: R,
    ids: G,
}

impl EdgeCodec {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<R: NodeResolver, G: IdGenerator> EdgeCodec<R, G> {
    pub fn with_parts(resolver: R, ids: G) -> Self {
        EdgeCodec { resolver, ids }
    }

    /// Build an edge from an AIF edge object.
    ///
    /// Endpoints missing from `nodes` become [`Endpoint::Unresolved`]; the
    /// failure surfaces only when the endpoint is used.
    pub fn from_aif(&self, raw: &Value, nodes: &NodeMap) -> Result<Edge> {
        let record: AifEdgeRecord = wire::decode(raw, "aif edge")?;
        self.from_aif_record(&record, nodes)
    }

    pub fn from_aif_record(&self, record: &AifEdgeRecord, nodes: &NodeMap) -> Result<Edge> {
        let start = record.from_id.parse("fromID")?;
        let end = record.to_id.parse("toID")?;
        let key = record.edge_id.parse("edgeID")?;

        Ok(Edge::with_key(
            Endpoint::lookup(nodes, start),
            Endpoint::lookup(nodes, end),
            key,
        ))
    }

    /// Build an edge from an OVA edge object.
    ///
    /// Embedded endpoints are looked up in `nodes` by `id`; misses are
    /// materialized through the resolver and recorded in `nodes`, so edges
    /// converted against the same map share one instance per key.
    pub fn from_ova(&self, raw: &Value, nodes: &mut NodeMap) -> Result<Edge> {
        let record: OvaEdgeRecord = wire::decode(raw, "ova edge")?;
        self.from_ova_record(&record, nodes)
    }

    /// Convert against a fresh, empty node map. Nothing is shared with other edges.
    pub fn from_ova_detached(&self, raw: &Value) -> Result<Edge> {
        self.from_ova(raw, &mut NodeMap::new())
    }

    pub fn from_ova_record(&self, record: &OvaEdgeRecord, nodes: &mut NodeMap) -> Result<Edge> {
        let date = parse_ova_date(&record.date)?;
        let start = resolve_node(&record.from, nodes, &self.resolver)?.into_node();
        let end = resolve_node(&record.to, nodes, &self.resolver)?.into_node();

        let mut edge = Edge::with_ids(start, end, &self.ids);
        edge.visible = record.visible;
        edge.annotator = record.annotator.clone();
        edge.date = date;
        Ok(edge)
    }
}
