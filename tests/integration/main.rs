//! Integration tests for argraph
//!
//! These tests drive a whole document through both converters.

use argraph_core::{Edge, EdgeCodec, EdgeError, Edges, Node, NodeMap, OvaNodeResolver, SequentialIds};
use serde_json::{Value, json};
use std::rc::Rc;

fn ova_document() -> Value {
    serde_json::from_str(include_str!("../fixtures/ova_graph.json")).unwrap()
}

fn ova_edges(document: &Value) -> &[Value] {
    document["edges"].as_array().unwrap()
}

/// OVA document -> edges -> AIF, with deterministic keys
#[test]
fn test_ova_document_to_aif() {
    let document = ova_document();
    let codec = EdgeCodec::with_parts(OvaNodeResolver, SequentialIds::starting_at(160913));
    let mut nodes = NodeMap::new();

    let edges = Edges::from_ova_values(&codec, ova_edges(&document), &mut nodes).unwrap();
    assert_eq!(edges.len(), 2);
    assert_eq!(nodes.len(), 3);

    let aif = edges.to_aif_values().unwrap();
    assert_eq!(
        aif,
        vec![
            json!({"edgeID": "160913", "fromID": "119935", "toID": "119940", "formEdgeID": null}),
            json!({"edgeID": "160914", "fromID": "119940", "toID": "119937", "formEdgeID": null}),
        ]
    );
}

/// The scheme node between the two edges is one shared instance
#[test]
fn test_shared_node_cache_across_document() {
    let document = ova_document();
    let mut nodes = NodeMap::new();
    let edges = Edges::from_ova_values(&EdgeCodec::new(), ova_edges(&document), &mut nodes).unwrap();

    let inbound = edges[0].end().unwrap();
    let outbound = edges[1].start().unwrap();
    assert!(Rc::ptr_eq(inbound, outbound));
    assert!(Rc::ptr_eq(inbound, &nodes[&119940]));
}

/// AIF round trip keeps the identity triple, not the OVA metadata
#[test]
fn test_aif_round_trip_through_node_lookup() {
    let document = ova_document();
    let mut nodes = NodeMap::new();
    let edges = Edges::from_ova_values(&EdgeCodec::new(), ova_edges(&document), &mut nodes).unwrap();

    let aif = edges.to_aif_values().unwrap();
    let back = Edges::from_aif_values(&EdgeCodec::new(), &aif, &nodes).unwrap();

    for (original, restored) in edges.iter().zip(back.iter()) {
        assert_eq!(original.identity(), restored.identity());
        assert_eq!(original, restored);
        assert_eq!(restored.annotator, None);
        assert_eq!(restored.visible, None);
    }
}

/// OVA round trip reproduces the document edges exactly
#[test]
fn test_ova_round_trip_is_lossless() {
    let document = ova_document();
    let edges = Edges::from_ova_values(&EdgeCodec::new(), ova_edges(&document), &mut NodeMap::new()).unwrap();

    assert_eq!(edges.to_ova_values().unwrap(), ova_edges(&document).to_vec());
}

/// AIF edges referencing unknown nodes convert, then fail on export
#[test]
fn test_partial_lookup_defers_failure() {
    let nodes: NodeMap = [(119935, Rc::new(Node::new(119935)))].into_iter().collect();
    let raw = json!({"edgeID": "160913", "fromID": "119935", "toID": "119940", "formEdgeID": null});

    let edge = Edge::from_aif(&raw, &nodes).unwrap();
    assert_eq!(edge.start().unwrap().key(), 119935);
    match edge.to_aif() {
        Err(EdgeError::UnresolvedReference { key }) => assert_eq!(key, 119940),
        other => panic!("expected an unresolved reference, got {other:?}"),
    }
}
