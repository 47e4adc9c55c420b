use std::collections::VecDeque;

use crate::{
    error::GraphError,
    graph::{Graph, VertexId},
    vertex_idx::VertexIdx,
};

/// Distances and predecessors computed by one single-source search.
///
/// Unreached vertices keep an infinite distance and no predecessor. The tree
/// borrows the graph, so it always describes the graph it was computed on.
#[derive(Debug)]
pub struct ShortestPathTree<'g, T> {
    graph: &'g Graph<T>,
    source: VertexIdx,
    dist: Vec<f64>,
    predecessor: Vec<Option<VertexIdx>>,
}

impl<'g, T: VertexId> ShortestPathTree<'g, T> {
    pub(crate) fn new(graph: &'g Graph<T>, source: VertexIdx) -> Self {
        let mut dist = vec![f64::INFINITY; graph.slot_count()];
        dist[source.get()] = 0.0;

        ShortestPathTree {
            graph,
            source,
            dist,
            predecessor: vec![None; graph.slot_count()],
        }
    }

    pub(crate) fn dist_at(&self, idx: VertexIdx) -> f64 {
        self.dist[idx.get()]
    }

    pub(crate) fn relax(&mut self, idx: VertexIdx, dist: f64, predecessor: VertexIdx) {
        self.dist[idx.get()] = dist;
        self.predecessor[idx.get()] = Some(predecessor);
    }

    pub fn source(&self) -> &T {
        self.graph[self.source].id()
    }

    /// Distance from the source, `None` for unknown or unreached vertices.
    pub fn distance(&self, id: &T) -> Option<f64> {
        self.graph
            .index_of(id)
            .map(|idx| self.dist_at(idx))
            .filter(|dist| dist.is_finite())
    }

    pub fn is_reachable(&self, id: &T) -> bool {
        self.distance(id).is_some()
    }

    /// The vertex preceding `id` on its shortest path.
    pub fn predecessor(&self, id: &T) -> Option<&T> {
        let idx = self.graph.index_of(id)?;
        self.predecessor[idx.get()].map(|predecessor| self.graph[predecessor].id())
    }

    /// Number of vertices reached, the source included.
    pub fn reached(&self) -> usize {
        self.dist.iter().filter(|dist| dist.is_finite()).count()
    }

    /// Path from the source to `destination`, both included.
    pub fn path_to(&self, destination: &T) -> Result<Vec<T>, GraphError> {
        let source = self.source().clone();
        self.path(&source, destination)
    }

    /// Walks predecessors back from `destination` and stops at the first
    /// vertex whose predecessor is `origin` (which is then prepended) or at
    /// the source of the search.
    ///
    /// When `origin` is not on the way back the path simply starts at the
    /// source, so callers wanting an exact `origin` should run the search
    /// from it. A predecessor loop, left behind by a negative cycle, is
    /// reported as [`GraphError::Cyclic`].
    pub fn path(&self, origin: &T, destination: &T) -> Result<Vec<T>, GraphError> {
        let origin_idx = self.graph.require_index(origin)?;
        let destination_idx = self.graph.require_index(destination)?;

        if !self.dist_at(destination_idx).is_finite() {
            return Err(GraphError::unreachable(destination));
        }

        let mut path = VecDeque::new();
        let mut current = destination_idx;
        path.push_front(destination.clone());

        while let Some(predecessor) = self.predecessor[current.get()] {
            if path.len() >= self.graph.vertex_count() {
                return Err(GraphError::Cyclic);
            }
            path.push_front(self.graph[predecessor].id().clone());
            if predecessor == origin_idx {
                break;
            }
            current = predecessor;
        }

        Ok(path.into())
    }
}
