/// Stable position of a vertex inside the arena of one [`crate::Graph`].
///
/// Removing a vertex never shifts the index of another one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct VertexIdx(usize);

impl std::fmt::Display for VertexIdx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl VertexIdx {
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    pub const fn get(&self) -> usize {
        self.0
    }
}

impl From<usize> for VertexIdx {
    fn from(index: usize) -> Self {
        Self(index)
    }
}
