use rstar::{RTree, primitives::GeomWithData};
use tracing::debug;

use crate::{
    geopoint::GeoPoint,
    graph::{Graph, VertexId},
    vertex_idx::VertexIdx,
};

type LocationIndexObject = GeomWithData<[f64; 3], VertexIdx>;

/// Nearest-vertex lookup over a snapshot of the graph coordinates.
///
/// Points are stored on the unit sphere, where the straight-line distance
/// orders neighbors exactly like the haversine distance does. Rebuild the
/// index after adding or removing vertices.
pub struct LocationIndex {
    tree: RTree<LocationIndexObject>,
}

impl LocationIndex {
    pub fn build<T: VertexId>(graph: &Graph<T>) -> LocationIndex {
        let tree = RTree::bulk_load(
            graph
                .indexed_vertices()
                .map(|(idx, vertex)| {
                    LocationIndexObject::new(vertex.point().to_unit_vector(), idx)
                })
                .collect(),
        );

        debug!(size = tree.size(), "Built location index");

        LocationIndex { tree }
    }

    pub fn len(&self) -> usize {
        self.tree.size()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.size() == 0
    }

    pub fn nearest(&self, point: &GeoPoint) -> Option<VertexIdx> {
        self.tree
            .nearest_neighbor(&point.to_unit_vector())
            .map(|object| object.data)
    }

    /// Id of the closest vertex, skipping vertices removed since the build.
    pub fn nearest_id<'g, T: VertexId>(
        &self,
        graph: &'g Graph<T>,
        point: &GeoPoint,
    ) -> Option<&'g T> {
        self.tree
            .nearest_neighbor_iter(&point.to_unit_vector())
            .find_map(|object| graph.vertex_at(object.data))
            .map(|vertex| vertex.id())
    }
}
