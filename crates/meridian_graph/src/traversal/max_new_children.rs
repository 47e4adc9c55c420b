use std::collections::VecDeque;

use fixedbitset::FixedBitSet;

use crate::graph::{Graph, VertexId};

/// The vertex that discovered the most unvisited neighbors during a
/// breadth-first search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaxNewChildren<T> {
    pub vertex: T,
    pub children: usize,
}

impl<T: VertexId> Graph<T> {
    /// Breadth-first search from `source` tracking, for every dequeued vertex,
    /// how many neighbors it reached first. Ties keep the earliest vertex in
    /// BFS order. When nothing new is discovered the source is reported with
    /// zero children. `None` when `source` is unknown.
    pub fn max_new_children(&self, source: &T) -> Option<MaxNewChildren<T>> {
        let start = self.index_of(source)?;

        let mut visited = FixedBitSet::with_capacity(self.slot_count());
        let mut queue = VecDeque::new();
        let mut best = (start, 0);

        visited.insert(start.get());
        queue.push_back(start);

        while let Some(current) = queue.pop_front() {
            let mut children = 0;
            for next in self[current].neighbors() {
                if !visited.put(next.get()) {
                    queue.push_back(next);
                    children += 1;
                }
            }

            if children > best.1 {
                best = (current, children);
            }
        }

        Some(MaxNewChildren {
            vertex: self[best.0].id().clone(),
            children: best.1,
        })
    }
}
