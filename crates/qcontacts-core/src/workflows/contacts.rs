use crate::core::trajectory::TrajectorySource;
use crate::engine::analysis::ContactsAnalysis;
use crate::engine::cancel::CancellationToken;
use crate::engine::config::ContactsConfig;
use crate::engine::error::EngineError;
use crate::engine::progress::{Progress, ProgressReporter};
use crate::engine::state::{ContactsResult, RunOutcome};
use itertools::Itertools;
use tracing::{info, instrument, warn};

/// Runs a contacts analysis to completion (or failure), without external
/// cancellation.
pub fn run<S: TrajectorySource>(
    source: &S,
    config: &ContactsConfig,
    reporter: &ProgressReporter,
) -> Result<ContactsResult, EngineError> {
    run_cancellable(source, config, reporter, &CancellationToken::new())
}

/// Runs a contacts analysis that a caller can cancel between frames through
/// `cancel`.
///
/// Configuration-time problems (invalid pairs, snapshot size mismatches) are
/// returned as `Err`. Once the frame loop has started, the run always yields
/// a [`ContactsResult`]: failures and cancellations are recorded in its
/// outcome while every fully processed row is preserved.
#[instrument(skip_all, name = "contacts_workflow")]
pub fn run_cancellable<S: TrajectorySource>(
    source: &S,
    config: &ContactsConfig,
    reporter: &ProgressReporter,
    cancel: &CancellationToken,
) -> Result<ContactsResult, EngineError> {
    // === Phase 0: Reference preparation ===
    reporter.report(Progress::PhaseStart {
        name: "Preparing Reference Matrices",
    });
    info!(
        pairs = %config.pairs.iter().map(|p| p.groups.label()).join(", "),
        metric = config.metric.name(),
        radius_hint = config.radius,
        "Configuring contacts analysis."
    );
    let analysis = ContactsAnalysis::new(source, config)?;
    reporter.report(Progress::PhaseFinish);

    // === Phase 1: Frame loop ===
    reporter.report(Progress::PhaseStart {
        name: "Analyzing Trajectory",
    });
    let result = analysis.run(reporter, cancel);
    reporter.report(Progress::PhaseFinish);

    match &result.outcome {
        RunOutcome::Completed => {
            info!(rows = result.rows.len(), "Analysis complete.");
        }
        RunOutcome::Cancelled { next_frame } => {
            warn!(
                rows = result.rows.len(),
                next_frame, "Analysis cancelled before completion."
            );
        }
        RunOutcome::Failed(failure) => {
            warn!(
                rows = result.rows.len(),
                frame = failure.frame_index,
                error = %failure.error,
                "Analysis failed; partial result returned."
            );
        }
    }
    Ok(result)
}
