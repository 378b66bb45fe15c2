use std::fmt;

/// Dense identifier of a vertex in a [`NamedGraph`](crate::NamedGraph).
///
/// Ids are assigned sequentially, starting at zero, in the order in which
/// vertex names are first seen.  They are only meaningful for the graph that
/// issued them.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub struct VertexId(usize);

impl VertexId {
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// The zero-based position of this vertex in the graph's adjacency store.
    pub const fn index(self) -> usize {
        self.0
    }
}

impl From<usize> for VertexId {
    fn from(index: usize) -> Self {
        Self(index)
    }
}

impl From<VertexId> for usize {
    fn from(id: VertexId) -> Self {
        id.0
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trips_through_usize() {
        let id = VertexId::from(7);
        assert_eq!(id.index(), 7);
        assert_eq!(usize::from(id), 7);
    }

    #[test]
    fn test_orders_by_index() {
        assert!(VertexId::new(1) < VertexId::new(2));
        assert_eq!(VertexId::new(3).to_string(), "#3");
    }
}
