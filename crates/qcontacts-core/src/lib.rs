//! # qcontacts Core Library
//!
//! A library for native-contacts analysis of molecular dynamics trajectories:
//! given a stream of coordinate frames and one or more pairs of atom groups,
//! it computes a per-frame "fraction of contacts" time series by comparing
//! each frame's inter-group distance matrix against a reference (native)
//! distance matrix under a pluggable contact criterion.
//!
//! ## Architectural Philosophy
//!
//! The library is designed with a strict three-layer architecture to ensure a clear
//! separation of concerns, making it modular, testable, and extensible.
//!
//! - **[`core`]: The Foundation.** Contains stateless data models (`AtomGroup`,
//!   `GroupPair`), pure pairwise distance computation with optional periodic
//!   boundary handling, the `ContactMetric` abstraction with its built-in
//!   criteria, and the `TrajectorySource` boundary trait.
//!
//! - **[`engine`]: The Logic Core.** This stateful layer orchestrates a run. It
//!   owns the run configuration, memoizes the reference distance matrices,
//!   drives the strictly frame-ordered analysis loop with cooperative
//!   cancellation, and assembles the immutable result time series.
//!
//! - **[`workflows`]: The Public API.** This is the highest-level, user-facing
//!   layer. It ties the `engine` and `core` together to execute a complete
//!   contacts analysis in a single call, with progress reporting suitable for
//!   driving front-end progress bars.

pub mod core;
pub mod engine;
pub mod workflows;
