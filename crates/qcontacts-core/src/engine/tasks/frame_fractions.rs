use crate::core::distances::{BoxDims, distance_matrix};
use crate::core::metrics::MetricError;
use crate::engine::config::ContactsConfig;
use crate::engine::error::EngineError;
use crate::engine::reference::ReferenceSet;
use nalgebra::Point3;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Coordinates of one group pair at the current frame, already fetched from
/// the trajectory source.
#[derive(Debug, Clone)]
pub struct PairCoordinates {
    pub reference: Vec<Point3<f64>>,
    pub mobile: Vec<Point3<f64>>,
}

/// Evaluates the metric for every group pair of a single frame.
///
/// Pairs are independent and read the memoized references without locking, so
/// under the `parallel` feature they are evaluated concurrently. Results come
/// back in pair order either way, and on failure the error reported is the
/// one of the lowest-indexed failing pair, keeping failure attribution
/// deterministic across both execution modes.
pub fn run(
    frame: usize,
    coords: &[PairCoordinates],
    box_dims: Option<&BoxDims>,
    config: &ContactsConfig,
    references: &ReferenceSet,
) -> Result<Vec<f64>, EngineError> {
    let evaluate_pair = |pair: usize| -> Result<f64, EngineError> {
        let pair_config = &config.pairs[pair];
        let current = &coords[pair];

        let expected = references.shape(pair);
        let found = (current.reference.len(), current.mobile.len());
        if expected != found {
            return Err(EngineError::TopologyChanged {
                pair,
                label: pair_config.groups.label(),
                frame,
                expected,
                found,
            });
        }

        let r = distance_matrix(&current.reference, &current.mobile, box_dims);
        let value = config
            .metric
            .evaluate(&r, references.matrix(pair), &config.params)
            .map_err(|source| EngineError::Metric {
                pair,
                label: pair_config.groups.label(),
                frame,
                source,
            })?;

        if !value.is_finite() {
            return Err(EngineError::Metric {
                pair,
                label: pair_config.groups.label(),
                frame,
                source: MetricError::NonFiniteResult(value),
            });
        }
        Ok(value)
    };

    #[cfg(not(feature = "parallel"))]
    let results: Vec<Result<f64, EngineError>> =
        (0..config.pairs.len()).map(evaluate_pair).collect();

    #[cfg(feature = "parallel")]
    let results: Vec<Result<f64, EngineError>> = (0..config.pairs.len())
        .into_par_iter()
        .map(evaluate_pair)
        .collect();

    // Scan in pair order so the reported failure does not depend on thread
    // scheduling.
    results.into_iter().collect()
}
