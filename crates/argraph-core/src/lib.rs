//! Argraph Core — argument graph edges and their AIF / OVA conversion

pub mod error;
pub mod model;
pub mod node;
pub mod ids;
pub mod date;
pub mod wire;
pub mod resolve;
pub mod edge;
pub mod edges;


pub use error::{EdgeError, Result};
pub use model::{NodeKey, EdgeKey, NodeMap};
pub use node::Node;
pub use ids::{IdGenerator, ProcessIds, SequentialIds};
pub use date::{OVA_DATE_FORMAT, parse_ova_date, format_ova_date};
pub use wire::{AifEdgeRecord, OvaEdgeRecord, RawId};
pub use resolve::{NodeResolver, OvaNodeResolver, Resolution, resolve_node};
pub use edge::{Edge, EdgeCodec, EdgeIdentity, Endpoint};
pub use edges::Edges;
