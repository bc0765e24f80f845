//! Branded, arena-backed directed graphs.
//!
//! - `vertex_graph`: the graph arena and its builder operations
//! - `vertex`: vertex handles
//! - `description`: the serializable, index-based form of a graph

pub mod description;
pub mod vertex;
pub mod vertex_graph;
pub(crate) mod access;

pub use description::{GraphDescription, VertexDescription};
pub use vertex::VertexId;
pub use vertex_graph::VertexGraph;
