use std::{
    collections::BTreeSet,
    fmt::Debug,
    hash::Hash,
    ops::{Index, IndexMut},
};

use fxhash::FxHashMap;
use tracing::debug;

use crate::{
    edge::{Edge, EdgeProperties},
    error::GraphError,
    geopoint::GeoPoint,
    vertex::Vertex,
    vertex_idx::VertexIdx,
};

/// Identity of a vertex, chosen by the caller.
pub trait VertexId: Eq + Hash + Clone + Debug {}

impl<T: Eq + Hash + Clone + Debug> VertexId for T {}

/// Directed spatial graph.
///
/// Vertices live in an arena: removing one leaves an empty slot behind so the
/// [`VertexIdx`] of every other vertex stays valid. Walking the live slots in
/// order yields the vertices in insertion order.
#[derive(Debug, Clone)]
pub struct Graph<T> {
    vertices: Vec<Option<Vertex<T>>>,
    index: FxHashMap<T, VertexIdx>,
}

impl<T: VertexId> Default for Graph<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: VertexId> Graph<T> {
    pub fn new() -> Self {
        Graph {
            vertices: Vec::new(),
            index: FxHashMap::default(),
        }
    }

    pub fn with_capacity(vertices: usize) -> Self {
        Graph {
            vertices: Vec::with_capacity(vertices),
            index: FxHashMap::with_capacity_and_hasher(vertices, Default::default()),
        }
    }

    pub fn add_vertex(
        &mut self,
        id: T,
        name: impl Into<String>,
        lng: f64,
        lat: f64,
    ) -> Result<VertexIdx, GraphError> {
        if self.index.contains_key(&id) {
            return Err(GraphError::duplicate_vertex(&id));
        }

        let idx = VertexIdx::new(self.vertices.len());
        self.index.insert(id.clone(), idx);
        self.vertices
            .push(Some(Vertex::new(id, name, GeoPoint::new(lat, lng))));

        Ok(idx)
    }

    /// Removes the vertex and every edge of the graph pointing at it.
    pub fn remove_vertex(&mut self, id: &T) -> Result<Vertex<T>, GraphError> {
        let idx = self
            .index
            .remove(id)
            .ok_or_else(|| GraphError::unknown_vertex(id))?;

        let removed = self.vertices[idx.get()]
            .take()
            .ok_or_else(|| GraphError::unknown_vertex(id))?;

        let stripped: usize = self
            .vertices
            .iter_mut()
            .flatten()
            .map(|vertex| vertex.remove_all_edges_to(idx))
            .sum();

        debug!(vertex = ?id, stripped, "Removed vertex");

        Ok(removed)
    }

    pub fn add_edge(
        &mut self,
        source: &T,
        destination: &T,
        properties: EdgeProperties<T>,
    ) -> Result<(), GraphError> {
        let source_idx = self.require_index(source)?;
        let destination_idx = self.require_index(destination)?;

        self[source_idx].add_edge(Edge::new(destination_idx, properties));

        Ok(())
    }

    /// Inserts `a -> b` and `b -> a`, both flagged as two-way.
    pub fn add_two_way_edge(
        &mut self,
        a: &T,
        b: &T,
        properties: EdgeProperties<T>,
    ) -> Result<(), GraphError> {
        let a_idx = self.require_index(a)?;
        let b_idx = self.require_index(b)?;

        let properties = properties.with_two_way(true);
        self[b_idx].add_edge(Edge::new(a_idx, properties.clone()));
        self[a_idx].add_edge(Edge::new(b_idx, properties));

        Ok(())
    }

    /// Removes one edge from `source` to `destination`.
    pub fn remove_edge(&mut self, source: &T, destination: &T) -> Result<(), GraphError> {
        let source_idx = self.require_index(source)?;
        let destination_idx = self.require_index(destination)?;

        if self[source_idx].remove_edge_to(destination_idx) {
            Ok(())
        } else {
            Err(GraphError::edge_not_found(source, destination))
        }
    }

    pub fn set_vertex_name(&mut self, id: &T, name: impl Into<String>) -> Result<(), GraphError> {
        let idx = self.require_index(id)?;
        self[idx].set_name(name);
        Ok(())
    }

    /// Sets the blocked flag of every edge carrying `edge_id` and returns how
    /// many edges were touched.
    pub fn set_edge_blocked(&mut self, edge_id: &T, blocked: bool) -> usize {
        let mut updated = 0;
        for edge in self
            .vertices
            .iter_mut()
            .flatten()
            .flat_map(|vertex| vertex.edges_mut().iter_mut())
            .filter(|edge| edge.id() == edge_id)
        {
            edge.set_blocked(blocked);
            updated += 1;
        }

        debug!(edge = ?edge_id, blocked, updated, "Updated blocked flag");

        updated
    }

    /// Distinct non-empty edge names in lexicographic order.
    pub fn edge_names(&self) -> BTreeSet<String> {
        self.edges()
            .filter(|edge| !edge.name().is_empty())
            .map(|edge| edge.name().to_owned())
            .collect()
    }

    /// Great-circle distance in kilometers between two vertices.
    pub fn calculate_dist(&self, a: &T, b: &T) -> Result<f64, GraphError> {
        let a = self.vertex(a).ok_or_else(|| GraphError::unknown_vertex(a))?;
        let b = self.vertex(b).ok_or_else(|| GraphError::unknown_vertex(b))?;

        Ok(a.point().haversine_distance(b.point()))
    }

    pub fn vertex(&self, id: &T) -> Option<&Vertex<T>> {
        self.index_of(id).and_then(|idx| self.vertex_at(idx))
    }

    pub fn index_of(&self, id: &T) -> Option<VertexIdx> {
        self.index.get(id).copied()
    }

    pub fn contains_vertex(&self, id: &T) -> bool {
        self.index.contains_key(id)
    }

    pub(crate) fn require_index(&self, id: &T) -> Result<VertexIdx, GraphError> {
        self.index_of(id)
            .ok_or_else(|| GraphError::unknown_vertex(id))
    }
}

impl<T> Graph<T> {
    pub fn vertex_at(&self, idx: VertexIdx) -> Option<&Vertex<T>> {
        self.vertices.get(idx.get()).and_then(Option::as_ref)
    }

    pub fn vertex_count(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertex_count() == 0
    }

    pub fn edge_count(&self) -> usize {
        self.vertices().map(|vertex| vertex.edges().len()).sum()
    }

    /// Live vertices in insertion order.
    pub fn vertices(&self) -> impl Iterator<Item = &Vertex<T>> {
        self.vertices.iter().flatten()
    }

    /// Live vertices in insertion order along with their arena index.
    pub fn indexed_vertices(&self) -> impl Iterator<Item = (VertexIdx, &Vertex<T>)> {
        self.vertices.iter().enumerate().filter_map(|(index, slot)| {
            slot.as_ref()
                .map(|vertex| (VertexIdx::new(index), vertex))
        })
    }

    pub fn edges(&self) -> impl Iterator<Item = &Edge<T>> {
        self.vertices().flat_map(|vertex| vertex.edges().iter())
    }

    /// Size of per-vertex scratch arrays, tombstones included.
    pub(crate) fn slot_count(&self) -> usize {
        self.vertices.len()
    }
}

const DEAD_VERTEX: &str = "Vertex index does not point at a live vertex";

impl<T> Index<VertexIdx> for Graph<T> {
    type Output = Vertex<T>;

    fn index(&self, idx: VertexIdx) -> &Self::Output {
        self.vertex_at(idx).expect(DEAD_VERTEX)
    }
}

impl<T> IndexMut<VertexIdx> for Graph<T> {
    fn index_mut(&mut self, idx: VertexIdx) -> &mut Self::Output {
        self.vertices
            .get_mut(idx.get())
            .and_then(Option::as_mut)
            .expect(DEAD_VERTEX)
    }
}
