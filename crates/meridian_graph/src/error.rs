use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("Vertex {0} already exists")]
    DuplicateVertex(String),
    #[error("Vertex {0} does not exist")]
    UnknownVertex(String),
    #[error("No edge from {from} to {to}")]
    EdgeNotFound { from: String, to: String },
    #[error("Graph contains a cycle")]
    Cyclic,
    #[error("Vertex {0} is not reachable from the search source")]
    Unreachable(String),
}

impl GraphError {
    pub(crate) fn duplicate_vertex(id: &impl std::fmt::Debug) -> Self {
        GraphError::DuplicateVertex(format!("{id:?}"))
    }

    pub(crate) fn unknown_vertex(id: &impl std::fmt::Debug) -> Self {
        GraphError::UnknownVertex(format!("{id:?}"))
    }

    pub(crate) fn edge_not_found(from: &impl std::fmt::Debug, to: &impl std::fmt::Debug) -> Self {
        GraphError::EdgeNotFound {
            from: format!("{from:?}"),
            to: format!("{to:?}"),
        }
    }

    pub(crate) fn unreachable(id: &impl std::fmt::Debug) -> Self {
        GraphError::Unreachable(format!("{id:?}"))
    }
}
