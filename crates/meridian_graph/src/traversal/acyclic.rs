use fixedbitset::FixedBitSet;

use crate::{
    graph::{Graph, VertexId},
    vertex_idx::VertexIdx,
};

impl<T: VertexId> Graph<T> {
    /// Whether the graph has no directed cycle.
    ///
    /// A vertex is on the stack from the moment it is entered until all of
    /// its edges are explored. Reaching a vertex that is still on the stack
    /// means a back edge, and the search stops right there.
    pub fn is_dag(&self) -> bool {
        let mut visited = FixedBitSet::with_capacity(self.slot_count());
        let mut on_stack = FixedBitSet::with_capacity(self.slot_count());

        self.indexed_vertices().all(|(root, _)| {
            visited.contains(root.get()) || self.acyclic_from(root, &mut visited, &mut on_stack)
        })
    }

    fn acyclic_from(
        &self,
        root: VertexIdx,
        visited: &mut FixedBitSet,
        on_stack: &mut FixedBitSet,
    ) -> bool {
        let mut stack: Vec<(VertexIdx, usize)> = vec![(root, 0)];
        visited.insert(root.get());
        on_stack.insert(root.get());

        while let Some(frame) = stack.last_mut() {
            let (current, cursor) = *frame;

            match self[current].edges().get(cursor) {
                Some(edge) => {
                    frame.1 += 1;
                    let next = edge.destination().get();
                    if on_stack.contains(next) {
                        return false;
                    }
                    if !visited.put(next) {
                        on_stack.insert(next);
                        stack.push((edge.destination(), 0));
                    }
                }
                None => {
                    on_stack.set(current.get(), false);
                    stack.pop();
                }
            }
        }

        true
    }
}
