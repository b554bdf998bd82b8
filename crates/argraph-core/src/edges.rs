//! Ordered edge collection and batch conversion

use std::collections::HashSet;
use std::fmt;
use std::ops::Index;
use std::slice;

use serde_json::Value;

use crate::edge::{Edge, EdgeCodec, EdgeIdentity};
use crate::error::Result;
use crate::ids::IdGenerator;
use crate::model::NodeMap;
use crate::resolve::NodeResolver;

/// An ordered sequence of edges. Duplicates are allowed.
#[derive(Clone, Default, PartialEq)]
pub struct Edges {
    store: Vec<Edge>,
}

impl Edges {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Edge> {
        self.store.get(index)
    }

    pub fn iter(&self) -> slice::Iter<'_, Edge> {
        self.store.iter()
    }

    pub fn push(&mut self, edge: Edge) {
        self.store.push(edge);
    }

    pub fn as_slice(&self) -> &[Edge] {
        &self.store
    }

    /// Number of distinct `(key, start, end)` triples.
    pub fn distinct_identities(&self) -> usize {
        self.iter().map(Edge::identity).collect::<HashSet<EdgeIdentity>>().len()
    }

    /// Convert a list of AIF edge objects against one node lookup.
    pub fn from_aif_values<R, G>(codec: &EdgeCodec<R, G>, raw: &[Value], nodes: &NodeMap) -> Result<Self>
    where
        R: NodeResolver,
        G: IdGenerator,
    {
        let edges = raw
            .iter()
            .map(|value| codec.from_aif(value, nodes))
            .collect::<Result<Self>>()?;
        tracing::debug!(edges = edges.len(), "converted AIF edges");
        Ok(edges)
    }

    /// Convert a list of OVA edge objects, all resolving nodes through `nodes`.
    pub fn from_ova_values<R, G>(codec: &EdgeCodec<R, G>, raw: &[Value], nodes: &mut NodeMap) -> Result<Self>
    where
        R: NodeResolver,
        G: IdGenerator,
    {
        let edges = raw
            .iter()
            .map(|value| codec.from_ova(value, nodes))
            .collect::<Result<Self>>()?;
        tracing::debug!(edges = edges.len(), nodes = nodes.len(), "converted OVA edges");
        Ok(edges)
    }

    pub fn to_aif_values(&self) -> Result<Vec<Value>> {
        self.iter().map(Edge::to_aif).collect()
    }

    pub fn to_ova_values(&self) -> Result<Vec<Value>> {
        self.iter().map(Edge::to_ova).collect()
    }
}

impl Index<usize> for Edges {
    type Output = Edge;

    fn index(&self, index: usize) -> &Edge {
        &self.store[index]
    }
}

impl From<Vec<Edge>> for Edges {
    fn from(store: Vec<Edge>) -> Self {
        Edges { store }
    }
}

impl FromIterator<Edge> for Edges {
    fn from_iter<I: IntoIterator<Item = Edge>>(iter: I) -> Self {
        Edges {
            store: iter.into_iter().collect(),
        }
    }
}

impl Extend<Edge> for Edges {
    fn extend<I: IntoIterator<Item = Edge>>(&mut self, iter: I) {
        self.store.extend(iter);
    }
}

impl IntoIterator for Edges {
    type Item = Edge;
    type IntoIter = std::vec::IntoIter<Edge>;

    fn into_iter(self) -> Self::IntoIter {
        self.store.into_iter()
    }
}

impl<'a> IntoIterator for &'a Edges {
    type Item = &'a Edge;
    type IntoIter = slice::Iter<'a, Edge>;

    fn into_iter(self) -> Self::IntoIter {
        self.store.iter()
    }
}

impl fmt::Debug for Edges {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(&self.store).finish()
    }
}

impl fmt::Display for Edges {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, edge) in self.store.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{edge}")?;
        }
        write!(f, "]")
    }
}
