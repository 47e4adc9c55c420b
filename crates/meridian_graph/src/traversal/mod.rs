//! Whole-graph and single-source traversals.
//!
//! All of these keep their visited marks in bit sets sized to the vertex
//! arena, so running one never disturbs another.

mod acyclic;
mod bfs;
mod dfs;
mod max_new_children;
mod topological_sort;

pub use max_new_children::MaxNewChildren;
