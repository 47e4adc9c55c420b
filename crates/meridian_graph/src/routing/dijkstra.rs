use fixedbitset::FixedBitSet;
use tracing::{Level, debug, instrument};

use crate::{
    error::GraphError,
    graph::{Graph, VertexId},
    routing::{ShortestPathTree, priority_queue::PriorityQueue},
    stopwatch::Stopwatch,
    vertex_idx::VertexIdx,
};

impl<T: VertexId> Graph<T> {
    /// Weighted shortest paths from `source`.
    ///
    /// Blocked edges are impassable: they are never relaxed. Weights
    /// accumulate as `f64`. A vertex waiting in the queue has its priority
    /// lowered in place when a shorter route shows up, and every vertex enters
    /// the queue at most once per run, so the search always terminates.
    ///
    /// Negative weights are accepted but distances are then only an upper
    /// bound: a popped vertex that is improved later keeps the new distance
    /// and predecessor without being expanded again. A negative cycle can
    /// leave a loop in the predecessors, which [`ShortestPathTree::path`]
    /// reports as [`GraphError::Cyclic`].
    #[instrument(skip_all, level = Level::DEBUG)]
    pub fn dijkstra_shortest_path(
        &self,
        source: &T,
    ) -> Result<ShortestPathTree<'_, T>, GraphError> {
        let stopwatch = Stopwatch::new("dijkstra_shortest_path");
        let start = self.require_index(source)?;

        let mut tree = ShortestPathTree::new(self, start);
        let mut queue = PriorityQueue::new(self.slot_count());
        let mut queued = FixedBitSet::with_capacity(self.slot_count());
        queued.insert(start.get());
        queue.push(start.get(), 0.0);

        let mut iterations = 0;
        let mut relaxations = 0;
        let mut max_queue_len = 1;

        while let Some((current, _)) = queue.pop() {
            let current = VertexIdx::new(current);
            let current_dist = tree.dist_at(current);
            iterations += 1;

            for edge in self[current].edges() {
                if edge.is_blocked() {
                    continue;
                }

                let next = edge.destination();
                let candidate = current_dist + edge.weight();

                if candidate < tree.dist_at(next) {
                    tree.relax(next, candidate, current);
                    // Never cleared: a settled vertex does not come back.
                    if queue.contains(next.get()) || !queued.put(next.get()) {
                        queue.push(next.get(), candidate);
                    }
                    relaxations += 1;
                }
            }

            max_queue_len = max_queue_len.max(queue.len());
        }

        debug!(
            source = ?source,
            iterations,
            relaxations,
            max_queue_len,
            "Dijkstra done"
        );
        stopwatch.report();

        Ok(tree)
    }
}
