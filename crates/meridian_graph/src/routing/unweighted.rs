use std::collections::VecDeque;

use tracing::{Level, debug, instrument};

use crate::{
    error::GraphError,
    graph::{Graph, VertexId},
    routing::ShortestPathTree,
    stopwatch::Stopwatch,
};

impl<T: VertexId> Graph<T> {
    /// Hop-count shortest paths from `source`, ignoring weights and the
    /// blocked flag.
    #[instrument(skip_all, level = Level::DEBUG)]
    pub fn unweighted_shortest_path(
        &self,
        source: &T,
    ) -> Result<ShortestPathTree<'_, T>, GraphError> {
        let stopwatch = Stopwatch::new("unweighted_shortest_path");
        let start = self.require_index(source)?;

        let mut tree = ShortestPathTree::new(self, start);
        let mut queue = VecDeque::new();
        queue.push_back(start);

        while let Some(current) = queue.pop_front() {
            let next_dist = tree.dist_at(current) + 1.0;

            for next in self[current].neighbors() {
                if tree.dist_at(next).is_infinite() {
                    tree.relax(next, next_dist, current);
                    queue.push_back(next);
                }
            }
        }

        debug!(source = ?source, reached = tree.reached(), "Unweighted search done");
        stopwatch.report();

        Ok(tree)
    }
}
