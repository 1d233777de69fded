//! # Engine Module
//!
//! This module implements the stateful analysis engine: it turns a configured
//! set of group pairs and a trajectory source into an ordered fraction-of-
//! contacts time series.
//!
//! ## Overview
//!
//! A run moves through a small lifecycle. Constructing a [`ContactsAnalysis`]
//! is the *configured* state: reference distance matrices are computed once
//! and memoized, and size mismatches are rejected before any frame is read.
//! [`ContactsAnalysis::run`](analysis::ContactsAnalysis::run) is the *running*
//! state: frames are processed strictly in increasing index order, one result
//! row per fully successful frame. The run finishes *completed*, *cancelled*,
//! or *failed*; in every case the rows accumulated so far are preserved and
//! returned.
//!
//! ## Architecture
//!
//! - **Configuration** ([`config`]) - Run parameters, group pairs, reference
//!   snapshots, and the frame-range selection
//! - **State Tracking** ([`state`]) - Result rows, run outcome, and the
//!   trailing failure marker for partial results
//! - **Progress Monitoring** ([`progress`]) - Progress reporting callbacks
//! - **Cancellation** ([`cancel`]) - Cooperative, frame-granular cancellation
//! - **Error Handling** ([`error`]) - Engine-specific error types
//!
//! [`ContactsAnalysis`]: analysis::ContactsAnalysis

pub mod analysis;
pub mod cancel;
pub mod config;
pub mod error;
pub mod progress;
pub mod reference;
pub mod state;
pub(crate) mod tasks;
