use super::error::EngineError;
use serde::{Deserialize, Serialize};

/// One row of the result time series: the fraction of contacts for every
/// configured group pair at one frame.
///
/// Rows are appended in strictly increasing frame order and are immutable
/// once created; `values` holds one number per pair, in configuration order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSeriesRow {
    pub frame_index: usize,
    pub time: f64,
    pub values: Vec<f64>,
}

/// The trailing failure marker of a partial result.
#[derive(Debug)]
pub struct RunFailure {
    /// Frame at which the run aborted; no row exists for this frame.
    pub frame_index: usize,
    /// Offending group pair, when the failure is attributable to one.
    pub pair_index: Option<usize>,
    pub error: EngineError,
}

impl RunFailure {
    pub fn new(frame_index: usize, error: EngineError) -> Self {
        Self {
            frame_index,
            pair_index: error.pair_index(),
            error,
        }
    }
}

#[derive(Debug)]
pub enum RunOutcome {
    /// Every selected frame was processed.
    Completed,
    /// Cancellation was observed before `next_frame` was processed.
    Cancelled { next_frame: usize },
    /// The run aborted; rows strictly before the failure are retained.
    Failed(RunFailure),
}

/// The accumulated result of a run.
///
/// Rows computed before a failure or cancellation are always preserved, so a
/// caller can inspect progress up to the point the run stopped.
#[derive(Debug)]
pub struct ContactsResult {
    pub rows: Vec<TimeSeriesRow>,
    pub outcome: RunOutcome,
}

impl ContactsResult {
    pub fn is_complete(&self) -> bool {
        matches!(self.outcome, RunOutcome::Completed)
    }

    pub fn failure(&self) -> Option<&RunFailure> {
        match &self.outcome {
            RunOutcome::Failed(failure) => Some(failure),
            _ => None,
        }
    }

    /// The `(time, value)` series of one group pair.
    pub fn pair_series(&self, pair: usize) -> Vec<(f64, f64)> {
        self.rows
            .iter()
            .map(|row| (row.time, row.values[pair]))
            .collect()
    }

    /// Mean fraction of one group pair over all computed rows, `None` when no
    /// row was computed.
    pub fn mean_fraction(&self, pair: usize) -> Option<f64> {
        if self.rows.is_empty() {
            return None;
        }
        let sum: f64 = self.rows.iter().map(|row| row.values[pair]).sum();
        Some(sum / self.rows.len() as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result_with_rows() -> ContactsResult {
        ContactsResult {
            rows: vec![
                TimeSeriesRow {
                    frame_index: 0,
                    time: 0.0,
                    values: vec![1.0, 0.5],
                },
                TimeSeriesRow {
                    frame_index: 1,
                    time: 10.0,
                    values: vec![0.5, 0.25],
                },
            ],
            outcome: RunOutcome::Completed,
        }
    }

    #[test]
    fn extracts_one_pair_as_a_series() {
        let result = result_with_rows();
        assert_eq!(result.pair_series(1), vec![(0.0, 0.5), (10.0, 0.25)]);
    }

    #[test]
    fn mean_fraction_averages_over_rows() {
        let result = result_with_rows();
        assert_eq!(result.mean_fraction(0), Some(0.75));
    }

    #[test]
    fn mean_fraction_of_an_empty_result_is_none() {
        let result = ContactsResult {
            rows: vec![],
            outcome: RunOutcome::Cancelled { next_frame: 0 },
        };
        assert_eq!(result.mean_fraction(0), None);
        assert!(!result.is_complete());
    }
}
