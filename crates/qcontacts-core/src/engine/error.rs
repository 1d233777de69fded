use thiserror::Error;

use super::config::ConfigError;
use crate::core::metrics::MetricError;
use crate::core::trajectory::TrajectoryError;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Configuration invalid: {source}")]
    Config {
        #[from]
        source: ConfigError,
    },

    #[error(
        "Reference snapshot for pair '{label}' has {found} positions for group '{group}' of {expected} atoms"
    )]
    ReferenceSizeMismatch {
        label: String,
        group: String,
        expected: usize,
        found: usize,
    },

    #[error("Trajectory read failed: {source}")]
    Trajectory {
        #[from]
        source: TrajectoryError,
    },

    #[error(
        "Group sizes for pair '{label}' changed at frame {frame}: expected {expected:?}, found {found:?}"
    )]
    TopologyChanged {
        pair: usize,
        label: String,
        frame: usize,
        expected: (usize, usize),
        found: (usize, usize),
    },

    #[error("Metric evaluation failed for pair '{label}' at frame {frame}: {source}")]
    Metric {
        pair: usize,
        label: String,
        frame: usize,
        source: MetricError,
    },
}

impl EngineError {
    /// Index of the group pair the error is attributed to, when it is
    /// attributable to one.
    pub fn pair_index(&self) -> Option<usize> {
        match self {
            EngineError::TopologyChanged { pair, .. } | EngineError::Metric { pair, .. } => {
                Some(*pair)
            }
            _ => None,
        }
    }
}
