//! # Workflows Module
//!
//! This module provides the high-level entry points that orchestrate a
//! complete contacts analysis.
//!
//! ## Overview
//!
//! Workflows are the top-level API of the library. They encapsulate the whole
//! pipeline - reference preparation, the frame loop, progress reporting, and
//! result assembly - behind a single call, so front ends never touch the
//! engine internals directly.
//!
//! - **Contacts Workflow** ([`contacts`]) - Fraction-of-contacts time series
//!   over a trajectory, with optional cooperative cancellation.

pub mod contacts;
