use std::collections::VecDeque;

use fixedbitset::FixedBitSet;

use crate::graph::{Graph, VertexId};

impl<T: VertexId> Graph<T> {
    /// Breadth-first order from `source`. Empty when `source` is unknown.
    pub fn bfs(&self, source: &T) -> Vec<T> {
        let Some(start) = self.index_of(source) else {
            return Vec::new();
        };

        let mut visited = FixedBitSet::with_capacity(self.slot_count());
        let mut queue = VecDeque::new();
        let mut order = Vec::new();

        visited.insert(start.get());
        queue.push_back(start);

        while let Some(current) = queue.pop_front() {
            let vertex = &self[current];
            order.push(vertex.id().clone());

            for next in vertex.neighbors() {
                if !visited.put(next.get()) {
                    queue.push_back(next);
                }
            }
        }

        order
    }
}
