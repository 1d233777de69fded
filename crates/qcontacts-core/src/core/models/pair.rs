use super::group::AtomGroup;
use serde::{Deserialize, Serialize};

/// An ordered pair of atom groups whose inter-group distances are tracked
/// across a trajectory.
///
/// The pair is *ordered*: distance matrices built from it have shape
/// `(reference.len(), mobile.len())`, with entry `(i, j)` the distance between
/// atom `i` of the reference group and atom `j` of the mobile group. The two
/// groups may be distinct selections, so no symmetry is assumed anywhere
/// downstream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupPair {
    pub reference: AtomGroup,
    pub mobile: AtomGroup,
}

impl GroupPair {
    pub fn new(reference: AtomGroup, mobile: AtomGroup) -> Self {
        Self { reference, mobile }
    }

    /// Human-readable label used in logs and failure attribution.
    pub fn label(&self) -> String {
        format!("{}-{}", self.reference.name, self.mobile.name)
    }

    /// The `(rows, cols)` shape of any distance matrix built from this pair.
    pub fn shape(&self) -> (usize, usize) {
        (self.reference.len(), self.mobile.len())
    }
}
