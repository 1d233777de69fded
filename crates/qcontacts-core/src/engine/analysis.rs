use super::cancel::CancellationToken;
use super::config::ContactsConfig;
use super::error::EngineError;
use super::progress::{Progress, ProgressReporter};
use super::reference::ReferenceSet;
use super::state::{ContactsResult, RunFailure, RunOutcome, TimeSeriesRow};
use super::tasks::frame_fractions::{self, PairCoordinates};
use super::tasks::reference_matrices;
use crate::core::trajectory::{TrajectoryError, TrajectorySource};
use tracing::{debug, warn};

/// A configured contacts analysis over one trajectory source.
///
/// Construction computes and memoizes the reference distance matrices; no
/// trajectory frame is read until [`run`](Self::run). The analysis itself is
/// immutable - running it twice over a deterministic source produces
/// bit-identical results.
pub struct ContactsAnalysis<'a, S: TrajectorySource> {
    source: &'a S,
    config: &'a ContactsConfig,
    references: ReferenceSet,
}

impl<'a, S: TrajectorySource> ContactsAnalysis<'a, S> {
    /// Validates the configured pairs against their reference snapshots and
    /// memoizes the native distance matrices.
    ///
    /// # Errors
    ///
    /// Returns an error if any snapshot's position count disagrees with its
    /// group's cardinality.
    pub fn new(source: &'a S, config: &'a ContactsConfig) -> Result<Self, EngineError> {
        let references = reference_matrices::run(config)?;
        Ok(Self {
            source,
            config,
            references,
        })
    }

    pub fn references(&self) -> &ReferenceSet {
        &self.references
    }

    /// Processes the selected frames strictly in increasing index order.
    ///
    /// One [`TimeSeriesRow`] is appended per fully successful frame. A frame
    /// that fails mid-computation contributes no row at all: the run stops
    /// and the rows accumulated so far are returned with a trailing failure
    /// marker. Cancellation is observed between frames, never mid-frame.
    pub fn run(&self, reporter: &ProgressReporter, cancel: &CancellationToken) -> ContactsResult {
        let selected: Vec<usize> = self.config.frames.frames(self.source.n_frames()).collect();
        reporter.report(Progress::FramesStart {
            total: selected.len() as u64,
        });

        let mut rows = Vec::with_capacity(selected.len());
        for frame in selected {
            if cancel.is_cancelled() {
                warn!(frame, "Analysis cancelled; returning partial result.");
                return ContactsResult {
                    rows,
                    outcome: RunOutcome::Cancelled { next_frame: frame },
                };
            }

            match self.process_frame(frame) {
                Ok(row) => {
                    debug!(frame, time = row.time, "Frame processed.");
                    rows.push(row);
                    reporter.report(Progress::FrameDone);
                }
                Err(error) => {
                    warn!(frame, %error, "Analysis failed; returning partial result.");
                    return ContactsResult {
                        rows,
                        outcome: RunOutcome::Failed(RunFailure::new(frame, error)),
                    };
                }
            }
        }

        reporter.report(Progress::FramesFinish);
        ContactsResult {
            rows,
            outcome: RunOutcome::Completed,
        }
    }

    fn process_frame(&self, frame: usize) -> Result<TimeSeriesRow, EngineError> {
        let time = self.source.time(frame)?;
        let box_dims = self.source.box_dimensions(frame)?;

        let coords = self
            .config
            .pairs
            .iter()
            .map(|pair| {
                Ok(PairCoordinates {
                    reference: self.source.group_positions(frame, &pair.groups.reference)?,
                    mobile: self.source.group_positions(frame, &pair.groups.mobile)?,
                })
            })
            .collect::<Result<Vec<_>, TrajectoryError>>()?;

        let values = frame_fractions::run(
            frame,
            &coords,
            box_dims.as_ref(),
            self.config,
            &self.references,
        )?;

        Ok(TimeSeriesRow {
            frame_index: frame,
            time,
            values,
        })
    }
}
