use serde::{Deserialize, Serialize};

/// An ordered set of atoms, identified by their indices into a trajectory's
/// atom table.
///
/// A group is produced once by an external selection mechanism (e.g. resolving
/// `"acidic oxygens"` against a topology) and is never re-resolved mid-run:
/// its cardinality is fixed for the lifetime of an analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AtomGroup {
    pub name: String,
    pub indices: Vec<usize>,
}

impl AtomGroup {
    pub fn new(name: impl Into<String>, indices: Vec<usize>) -> Self {
        Self {
            name: name.into(),
            indices,
        }
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}
