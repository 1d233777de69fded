use crate::core::distances::distance_matrix;
use crate::core::models::group::AtomGroup;
use crate::core::models::pair::GroupPair;
use crate::engine::config::ContactsConfig;
use crate::engine::error::EngineError;
use crate::engine::reference::ReferenceSet;
use tracing::{debug, instrument};

/// Computes the native distance matrix of every configured pair from its
/// reference snapshot.
///
/// Each snapshot must carry exactly one position per group atom; any mismatch
/// is fatal here, before a single trajectory frame is read. The matrices are
/// never recomputed mid-run.
#[instrument(skip_all, name = "reference_matrices_task")]
pub fn run(config: &ContactsConfig) -> Result<ReferenceSet, EngineError> {
    let mut matrices = Vec::with_capacity(config.pairs.len());

    for pair in &config.pairs {
        check_snapshot_size(
            &pair.groups.reference,
            pair.reference.reference_positions.len(),
            &pair.groups,
        )?;
        check_snapshot_size(
            &pair.groups.mobile,
            pair.reference.mobile_positions.len(),
            &pair.groups,
        )?;

        let r0 = distance_matrix(
            &pair.reference.reference_positions,
            &pair.reference.mobile_positions,
            pair.reference.box_dims.as_ref(),
        );
        debug!(
            pair = %pair.groups.label(),
            rows = r0.nrows(),
            cols = r0.ncols(),
            "Reference matrix computed."
        );
        matrices.push(r0);
    }

    Ok(ReferenceSet::new(matrices))
}

fn check_snapshot_size(
    group: &AtomGroup,
    found: usize,
    pair: &GroupPair,
) -> Result<(), EngineError> {
    if group.len() != found {
        return Err(EngineError::ReferenceSizeMismatch {
            label: pair.label(),
            group: group.name.clone(),
            expected: group.len(),
            found,
        });
    }
    Ok(())
}
