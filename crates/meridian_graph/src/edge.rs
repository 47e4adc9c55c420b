use crate::vertex_idx::VertexIdx;

/// Directed connection owned by its source [`crate::Vertex`].
///
/// Only the blocked flag can change after the edge is built.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge<T> {
    destination: VertexIdx,
    weight: f64,
    name: String,
    id: T,
    two_way: bool,
    blocked: bool,
}

impl<T> Edge<T> {
    pub fn new(destination: VertexIdx, properties: EdgeProperties<T>) -> Self {
        Edge {
            destination,
            weight: properties.weight,
            name: properties.name,
            id: properties.id,
            two_way: properties.two_way,
            blocked: properties.blocked,
        }
    }

    pub fn destination(&self) -> VertexIdx {
        self.destination
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn id(&self) -> &T {
        &self.id
    }

    /// Metadata only, the reverse edge is never inserted implicitly.
    pub fn is_two_way(&self) -> bool {
        self.two_way
    }

    pub fn is_blocked(&self) -> bool {
        self.blocked
    }

    pub fn set_blocked(&mut self, blocked: bool) {
        self.blocked = blocked;
    }
}

/// Attributes of an edge about to be inserted with [`crate::Graph::add_edge`].
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeProperties<T> {
    pub id: T,
    pub weight: f64,
    pub name: String,
    pub two_way: bool,
    pub blocked: bool,
}

impl<T> EdgeProperties<T> {
    pub fn new(id: T, weight: f64) -> Self {
        EdgeProperties {
            id,
            weight,
            name: String::new(),
            two_way: false,
            blocked: false,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_two_way(mut self, two_way: bool) -> Self {
        self.two_way = two_way;
        self
    }

    pub fn with_blocked(mut self, blocked: bool) -> Self {
        self.blocked = blocked;
        self
    }
}
