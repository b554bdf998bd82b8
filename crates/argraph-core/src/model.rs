//! Identifier types shared by nodes and edges

use std::collections::HashMap;
use std::rc::Rc;

use crate::node::Node;

/// Integer key of a node, unique within one argument graph.
pub type NodeKey = i64;

/// Integer key of an edge, unique within one argument graph.
pub type EdgeKey = i64;

/// Caller-owned lookup of materialized nodes, shared across one conversion pass.
pub type NodeMap = HashMap<NodeKey, Rc<Node>>;
