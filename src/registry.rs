use std::collections::HashMap;

use crate::VertexId;

/// Bidirectional mapping between vertex names and dense [`VertexId`]s.
///
/// A name is assigned the next sequential id the first time it is seen;
/// afterwards it always resolves to the same id.
#[derive(Clone, Debug, Default)]
pub struct VertexRegistry {
    ids: HashMap<String, VertexId>,
    names: Vec<String>,
}

impl VertexRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of registered vertices.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Returns the id of `name`, registering it first if it is unseen.  The
    /// flag is `true` when the name was newly registered.
    pub fn intern(&mut self, name: &str) -> (VertexId, bool) {
        if let Some(&id) = self.ids.get(name) {
            return (id, false);
        }
        let id = VertexId::new(self.names.len());
        self.names.push(name.to_owned());
        self.ids.insert(name.to_owned(), id);
        (id, true)
    }

    pub fn id_of(&self, name: &str) -> Option<VertexId> {
        self.ids.get(name).copied()
    }

    pub fn name_of(&self, id: VertexId) -> Option<&str> {
        self.names.get(id.index()).map(String::as_str)
    }

    /// Names in id order.
    pub fn names(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.names.iter().map(String::as_str)
    }
}
