use fixedbitset::FixedBitSet;

use crate::{
    graph::{Graph, VertexId},
    vertex_idx::VertexIdx,
};

impl<T: VertexId> Graph<T> {
    /// Depth-first order over the whole graph.
    ///
    /// Roots are tried in insertion order, so every component is covered.
    /// Neighbors are expanded in adjacency order, which makes the result
    /// identical to the classic recursive visit.
    pub fn dfs(&self) -> Vec<T> {
        let mut visited = FixedBitSet::with_capacity(self.slot_count());
        let mut order = Vec::with_capacity(self.vertex_count());

        for (root, _) in self.indexed_vertices() {
            if !visited.contains(root.get()) {
                self.dfs_visit(root, &mut visited, &mut order);
            }
        }

        order
    }

    fn dfs_visit(&self, root: VertexIdx, visited: &mut FixedBitSet, order: &mut Vec<T>) {
        // (vertex, next edge to look at)
        let mut stack: Vec<(VertexIdx, usize)> = vec![(root, 0)];
        visited.insert(root.get());
        order.push(self[root].id().clone());

        while let Some(frame) = stack.last_mut() {
            let (current, cursor) = *frame;

            match self[current].edges().get(cursor) {
                Some(edge) => {
                    frame.1 += 1;
                    let next = edge.destination();
                    if !visited.put(next.get()) {
                        order.push(self[next].id().clone());
                        stack.push((next, 0));
                    }
                }
                None => {
                    stack.pop();
                }
            }
        }
    }
}
