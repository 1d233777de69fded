use nalgebra::DMatrix;

/// The memoized native distance matrices, one per configured group pair, in
/// pair order.
///
/// Built once when a run is configured and immutable thereafter, so every
/// frame (and, under the `parallel` feature, every pair worker) reads it
/// without locking.
#[derive(Debug, Clone, Default)]
pub struct ReferenceSet {
    matrices: Vec<DMatrix<f64>>,
}

impl ReferenceSet {
    pub fn new(matrices: Vec<DMatrix<f64>>) -> Self {
        Self { matrices }
    }

    pub fn len(&self) -> usize {
        self.matrices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matrices.is_empty()
    }

    pub fn matrix(&self, pair: usize) -> &DMatrix<f64> {
        &self.matrices[pair]
    }

    pub fn shape(&self, pair: usize) -> (usize, usize) {
        self.matrices[pair].shape()
    }
}
