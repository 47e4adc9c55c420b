//! Single-source shortest paths.
//!
//! Each search returns a [`ShortestPathTree`] holding the distances and
//! predecessors it computed, borrowed from the graph it ran on.

mod dijkstra;
mod priority_queue;
mod shortest_path_tree;
mod unweighted;

pub use shortest_path_tree::ShortestPathTree;
