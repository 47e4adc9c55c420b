use std::collections::VecDeque;

use tracing::debug;

use crate::{
    error::GraphError,
    graph::{Graph, VertexId},
};

impl<T: VertexId> Graph<T> {
    /// Kahn's topological order.
    ///
    /// Vertices without incoming edges are seeded in insertion order. A graph
    /// with a directed cycle has no order and yields [`GraphError::Cyclic`];
    /// an empty graph yields an empty order.
    pub fn topsort(&self) -> Result<Vec<T>, GraphError> {
        let mut indegree = vec![0usize; self.slot_count()];
        for edge in self.edges() {
            indegree[edge.destination().get()] += 1;
        }

        let mut queue: VecDeque<_> = self
            .indexed_vertices()
            .filter(|(idx, _)| indegree[idx.get()] == 0)
            .map(|(idx, _)| idx)
            .collect();

        let mut order = Vec::with_capacity(self.vertex_count());

        while let Some(current) = queue.pop_front() {
            let vertex = &self[current];
            order.push(vertex.id().clone());

            for next in vertex.neighbors() {
                indegree[next.get()] -= 1;
                if indegree[next.get()] == 0 {
                    queue.push_back(next);
                }
            }
        }

        if order.len() != self.vertex_count() {
            debug!(
                ordered = order.len(),
                vertices = self.vertex_count(),
                "Topological sort stopped on a cycle"
            );
            return Err(GraphError::Cyclic);
        }

        Ok(order)
    }
}
