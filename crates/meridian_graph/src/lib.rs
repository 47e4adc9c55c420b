//! meridian_graph: in-memory spatial directed graph.
//!
//! Vertices carry geographic coordinates and own their outgoing edges.
//! The graph exposes traversal (DFS, BFS, topological order, cycle check)
//! and single-source shortest paths (hop count and Dijkstra). Every query
//! keeps its bookkeeping in a per-call context, so queries only need `&Graph`.

mod edge;
mod error;
mod geopoint;
mod graph;
mod location_index;
pub mod routing;
mod stopwatch;
pub mod traversal;
mod vertex;
mod vertex_idx;

pub use edge::{Edge, EdgeProperties};
pub use error::GraphError;
pub use geopoint::{EARTH_RADIUS_KM, GeoPoint, haversine_distance};
pub use graph::{Graph, VertexId};
pub use location_index::LocationIndex;
pub use routing::ShortestPathTree;
pub use vertex::Vertex;
pub use vertex_idx::VertexIdx;

#[cfg(test)]
pub(crate) mod test_graph_utils;
