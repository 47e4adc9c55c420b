use crate::{edge::Edge, geopoint::GeoPoint, vertex_idx::VertexIdx};

/// A point of the network together with its outgoing edges.
#[derive(Debug, Clone)]
pub struct Vertex<T> {
    id: T,
    name: String,
    point: GeoPoint,
    outgoing: Vec<Edge<T>>,
}

impl<T> Vertex<T> {
    pub fn new(id: T, name: impl Into<String>, point: GeoPoint) -> Self {
        Vertex {
            id,
            name: name.into(),
            point,
            outgoing: Vec::new(),
        }
    }

    pub fn id(&self) -> &T {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn point(&self) -> &GeoPoint {
        &self.point
    }

    pub fn latitude(&self) -> f64 {
        self.point.lat
    }

    pub fn longitude(&self) -> f64 {
        self.point.lng
    }

    /// Outgoing edges in insertion order.
    pub fn edges(&self) -> &[Edge<T>] {
        &self.outgoing
    }

    pub(crate) fn edges_mut(&mut self) -> &mut [Edge<T>] {
        &mut self.outgoing
    }

    pub(crate) fn neighbors(&self) -> impl Iterator<Item = VertexIdx> + '_ {
        self.outgoing.iter().map(|edge| edge.destination())
    }

    /// Appends an outgoing edge. Parallel edges and self loops are accepted.
    pub fn add_edge(&mut self, edge: Edge<T>) {
        self.outgoing.push(edge);
    }

    /// Removes the first edge towards `destination`. Parallel edges need one
    /// call each.
    pub fn remove_edge_to(&mut self, destination: VertexIdx) -> bool {
        match self
            .outgoing
            .iter()
            .position(|edge| edge.destination() == destination)
        {
            Some(position) => {
                self.outgoing.remove(position);
                true
            }
            None => false,
        }
    }

    /// Removes every edge towards `destination`, returns how many were dropped.
    pub(crate) fn remove_all_edges_to(&mut self, destination: VertexIdx) -> usize {
        let before = self.outgoing.len();
        self.outgoing.retain(|edge| edge.destination() != destination);
        before - self.outgoing.len()
    }
}
