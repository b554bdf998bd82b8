//! CLI command implementations

use anyhow::{Context, bail};
use argraph_core::{EdgeCodec, Edges, NodeMap};
use serde_json::{Value, json};
use std::collections::HashSet;
use std::path::Path;

/// Flags shared by the conversion commands.
#[derive(Debug, Clone, Default)]
pub struct ConvertOptions {
    pub pretty: bool,
    /// Convert every edge against its own empty node map.
    pub detached: bool,
}

/// Counts reported by `inspect`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inspection {
    pub edges: usize,
    pub distinct_identities: usize,
    pub distinct_pairs: usize,
    pub distinct_nodes: usize,
}

pub fn to_aif(input: &Path, output: Option<&Path>, options: &ConvertOptions) -> anyhow::Result<()> {
    tracing::info!("Converting OVA edges from {}", input.display());

    let edges = load_ova_edges(input, options)?;
    let values = edges.to_aif_values()?;
    let aif = json!({ "edges": values });
    let text = if options.pretty {
        serde_json::to_string_pretty(&aif)?
    } else {
        serde_json::to_string(&aif)?
    };

    match output {
        Some(path) => {
            std::fs::write(path, text).with_context(|| format!("writing {}", path.display()))?;
            tracing::info!("Wrote {} AIF edges to {}", edges.len(), path.display());
        }
        None => println!("{text}"),
    }
    Ok(())
}

pub fn inspect(input: &Path, options: &ConvertOptions) -> anyhow::Result<Inspection> {
    let edges = load_ova_edges(input, options)?;

    let pairs: HashSet<_> = edges.iter().map(|e| (e.start.key(), e.end.key())).collect();
    let nodes: HashSet<_> = pairs.iter().flat_map(|&(s, t)| [s, t]).collect();
    let report = Inspection {
        edges: edges.len(),
        distinct_identities: edges.distinct_identities(),
        distinct_pairs: pairs.len(),
        distinct_nodes: nodes.len(),
    };

    tracing::info!(
        edges = report.edges,
        identities = report.distinct_identities,
        pairs = report.distinct_pairs,
        nodes = report.distinct_nodes,
        "Inspected {}",
        input.display()
    );
    Ok(report)
}

fn load_ova_edges(input: &Path, options: &ConvertOptions) -> anyhow::Result<Edges> {
    let text = std::fs::read_to_string(input).with_context(|| format!("reading {}", input.display()))?;
    let document: Value = serde_json::from_str(&text).with_context(|| format!("parsing {}", input.display()))?;
    let raw = edge_values(&document)?;

    let codec = EdgeCodec::new();
    let edges = if options.detached {
        raw.iter()
            .map(|value| codec.from_ova_detached(value))
            .collect::<argraph_core::Result<Edges>>()?
    } else {
        Edges::from_ova_values(&codec, raw, &mut NodeMap::new())?
    };

    tracing::debug!("Loaded {} edges from {}", edges.len(), input.display());
    Ok(edges)
}

/// Accepts a full document with an `edges` array, or a bare array of edges.
fn edge_values(document: &Value) -> anyhow::Result<&[Value]> {
    let edges = match document {
        Value::Array(edges) => edges,
        Value::Object(obj) => match obj.get("edges") {
            Some(Value::Array(edges)) => edges,
            Some(_) => bail!("`edges` is not an array"),
            None => bail!("document has no `edges` array"),
        },
        _ => bail!("expected a JSON object or array"),
    };
    Ok(edges.as_slice())
}
