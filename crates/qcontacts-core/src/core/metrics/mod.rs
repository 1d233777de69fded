//! Contact criteria: the pluggable classification rules that turn a pair of
//! distance matrices into a scalar fraction.
//!
//! A metric is a pure function over the current matrix `r`, the reference
//! matrix `r0`, and a string-keyed numeric parameter mapping. Metrics are
//! stateless and may be invoked concurrently across frames and group pairs;
//! they must not retain or mutate their inputs. The engine passes the
//! parameter mapping through *verbatim* - it never injects defaults on a
//! metric's behalf, so an absent key is resolved by the metric itself (either
//! to its own documented default or to an error).

pub mod builtin;
pub mod registry;

use nalgebra::DMatrix;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum MetricError {
    #[error("missing required metric parameter '{0}'")]
    MissingParameter(&'static str),

    #[error("metric parameter '{name}' must be a positive finite number, got {value}")]
    InvalidParameter { name: &'static str, value: f64 },

    #[error(
        "distance matrices disagree in shape: r is {r_rows}x{r_cols}, r0 is {r0_rows}x{r0_cols}"
    )]
    ShapeMismatch {
        r_rows: usize,
        r_cols: usize,
        r0_rows: usize,
        r0_cols: usize,
    },

    #[error("contact fraction is undefined: the normalization set is empty (0/0)")]
    UndefinedFraction,

    #[error("metric returned a non-finite value: {0}")]
    NonFiniteResult(f64),
}

/// Named numeric parameters for a metric, passed through to
/// [`ContactMetric::evaluate`] exactly as configured.
///
/// Note that an engine-level convenience parameter (such as the `radius` on
/// the run configuration) is a *different* setting from a same-named key in
/// this mapping; only the key in this mapping reaches the metric.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MetricParams(HashMap<String, f64>);

impl MetricParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insertion; later values replace earlier ones.
    pub fn with(mut self, name: impl Into<String>, value: f64) -> Self {
        self.0.insert(name.into(), value);
        self
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.0.get(name).copied()
    }

    /// Resolves an optional parameter against the metric's own default.
    pub fn get_or(&self, name: &str, default: f64) -> f64 {
        self.get(name).unwrap_or(default)
    }

    /// Resolves a parameter the metric cannot default.
    pub fn require(&self, name: &'static str) -> Result<f64, MetricError> {
        self.get(name).ok_or(MetricError::MissingParameter(name))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, f64)> for MetricParams {
    fn from_iter<I: IntoIterator<Item = (String, f64)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// A contact classification rule.
///
/// Implementations receive the current frame's distance matrix `r` and the
/// memoized reference matrix `r0` (always shape-compatible from a correctly
/// configured run, but required to verify), and return a scalar. The built-in
/// criteria return values in `[0, 1]`; user criteria are not constrained to
/// that range.
pub trait ContactMetric: Send + Sync {
    /// Stable identifier, used for registry lookup and logging.
    fn name(&self) -> &'static str;

    fn evaluate(
        &self,
        r: &DMatrix<f64>,
        r0: &DMatrix<f64>,
        params: &MetricParams,
    ) -> Result<f64, MetricError>;
}

/// Shape-compatibility guard shared by every metric implementation.
pub fn check_shapes(r: &DMatrix<f64>, r0: &DMatrix<f64>) -> Result<(), MetricError> {
    if r.shape() != r0.shape() {
        let (r_rows, r_cols) = r.shape();
        let (r0_rows, r0_cols) = r0.shape();
        return Err(MetricError::ShapeMismatch {
            r_rows,
            r_cols,
            r0_rows,
            r0_cols,
        });
    }
    Ok(())
}

pub(crate) fn validate_positive(name: &'static str, value: f64) -> Result<f64, MetricError> {
    if !value.is_finite() || value <= 0.0 {
        return Err(MetricError::InvalidParameter { name, value });
    }
    Ok(value)
}
