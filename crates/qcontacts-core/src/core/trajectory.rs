use super::distances::BoxDims;
use super::models::group::AtomGroup;
use nalgebra::Point3;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TrajectoryError {
    #[error("frame index {index} out of range ({n_frames} frames)")]
    FrameOutOfRange { index: usize, n_frames: usize },

    #[error("atom index {atom} out of range ({n_atoms} atoms) at frame {frame}")]
    AtomOutOfRange {
        atom: usize,
        n_atoms: usize,
        frame: usize,
    },

    #[error("trajectory read failed at frame {frame}: {message}")]
    Read { frame: usize, message: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Defines the interface for providers of trajectory frames.
///
/// This trait is the engine's only view of a trajectory. Implementors own all
/// decoding and file handling; a call may block on I/O while the next frame
/// is produced. Frame indices are dense in `0..n_frames()`.
pub trait TrajectorySource {
    /// Total number of frames available.
    fn n_frames(&self) -> usize;

    /// Simulation time of a frame, in the source's time unit (typically ps).
    ///
    /// # Errors
    ///
    /// Returns an error if the index is out of range or the read fails.
    fn time(&self, frame: usize) -> Result<f64, TrajectoryError>;

    /// Periodic box dimensions of a frame, if the source records any.
    ///
    /// # Errors
    ///
    /// Returns an error if the index is out of range or the read fails.
    fn box_dimensions(&self, frame: usize) -> Result<Option<BoxDims>, TrajectoryError>;

    /// Positions of a resolved atom group at a frame, in group order.
    ///
    /// # Errors
    ///
    /// Returns an error if the frame or any group atom index is out of range,
    /// or the read fails.
    fn group_positions(
        &self,
        frame: usize,
        group: &AtomGroup,
    ) -> Result<Vec<Point3<f64>>, TrajectoryError>;

    fn is_empty(&self) -> bool {
        self.n_frames() == 0
    }
}

/// Half-open stride over frame indices: `start`, `start + step`, .. up to but
/// excluding `stop` (or the end of the trajectory when `stop` is `None`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameRange {
    pub start: usize,
    pub stop: Option<usize>,
    pub step: usize,
}

impl Default for FrameRange {
    fn default() -> Self {
        Self {
            start: 0,
            stop: None,
            step: 1,
        }
    }
}

impl FrameRange {
    pub fn new(start: usize, stop: Option<usize>, step: usize) -> Self {
        Self { start, stop, step }
    }

    /// The selected frame indices for a trajectory of `n_frames` frames, in
    /// strictly increasing order. A `stop` past the end is clamped.
    pub fn frames(&self, n_frames: usize) -> impl Iterator<Item = usize> + use<> {
        let stop = self.stop.unwrap_or(n_frames).min(n_frames);
        (self.start..stop).step_by(self.step.max(1))
    }
}

/// One decoded trajectory frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub time: f64,
    pub positions: Vec<Point3<f64>>,
    pub box_dims: Option<BoxDims>,
}

impl Frame {
    pub fn new(time: f64, positions: Vec<Point3<f64>>) -> Self {
        Self {
            time,
            positions,
            box_dims: None,
        }
    }

    pub fn with_box(mut self, box_dims: BoxDims) -> Self {
        self.box_dims = Some(box_dims);
        self
    }
}

/// A fully decoded trajectory held in memory.
///
/// This is the container used by the test suite and by callers whose reader
/// has already materialized every frame.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTrajectory {
    frames: Vec<Frame>,
}

impl InMemoryTrajectory {
    pub fn new(frames: Vec<Frame>) -> Self {
        Self { frames }
    }

    pub fn push(&mut self, frame: Frame) {
        self.frames.push(frame);
    }

    fn frame(&self, index: usize) -> Result<&Frame, TrajectoryError> {
        self.frames
            .get(index)
            .ok_or(TrajectoryError::FrameOutOfRange {
                index,
                n_frames: self.frames.len(),
            })
    }
}

impl TrajectorySource for InMemoryTrajectory {
    fn n_frames(&self) -> usize {
        self.frames.len()
    }

    fn time(&self, frame: usize) -> Result<f64, TrajectoryError> {
        Ok(self.frame(frame)?.time)
    }

    fn box_dimensions(&self, frame: usize) -> Result<Option<BoxDims>, TrajectoryError> {
        Ok(self.frame(frame)?.box_dims)
    }

    fn group_positions(
        &self,
        frame: usize,
        group: &AtomGroup,
    ) -> Result<Vec<Point3<f64>>, TrajectoryError> {
        let data = self.frame(frame)?;
        group
            .indices
            .iter()
            .map(|&atom| {
                data.positions
                    .get(atom)
                    .copied()
                    .ok_or(TrajectoryError::AtomOutOfRange {
                        atom,
                        n_atoms: data.positions.len(),
                        frame,
                    })
            })
            .collect()
    }
}
