use crate::core::distances::BoxDims;
use crate::core::metrics::builtin::DEFAULT_RADIUS;
use crate::core::metrics::{ContactMetric, MetricParams};
use crate::core::models::pair::GroupPair;
use crate::core::trajectory::FrameRange;
use nalgebra::Point3;
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),

    #[error("At least one group pair must be configured")]
    NoPairs,

    #[error("Frame range step must be at least 1")]
    ZeroStep,
}

/// Fixed coordinate snapshot of one group pair in the reference structure,
/// used to compute its native distance matrix exactly once.
#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceSnapshot {
    pub reference_positions: Vec<Point3<f64>>,
    pub mobile_positions: Vec<Point3<f64>>,
    pub box_dims: Option<BoxDims>,
}

impl ReferenceSnapshot {
    pub fn new(
        reference_positions: Vec<Point3<f64>>,
        mobile_positions: Vec<Point3<f64>>,
    ) -> Self {
        Self {
            reference_positions,
            mobile_positions,
            box_dims: None,
        }
    }

    pub fn with_box(mut self, box_dims: BoxDims) -> Self {
        self.box_dims = Some(box_dims);
        self
    }
}

/// One configured comparison: a group pair together with its reference
/// snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct ContactPairConfig {
    pub groups: GroupPair,
    pub reference: ReferenceSnapshot,
}

#[derive(Clone)]
pub struct ContactsConfig {
    pub pairs: Vec<ContactPairConfig>,
    pub metric: Arc<dyn ContactMetric>,
    /// Passed to the metric verbatim. The engine never inserts or defaults
    /// keys here; see [`ContactsConfig::radius`] for the consequence.
    pub params: MetricParams,
    /// Engine-level convenience cutoff, reported in run summaries.
    ///
    /// This is NOT forwarded to the metric: a metric reads only
    /// [`ContactsConfig::params`], so `radius` here and `params["radius"]`
    /// can legitimately diverge. Callers who want the metric to see this
    /// value must duplicate it into `params` themselves.
    pub radius: f64,
    pub frames: FrameRange,
}

impl std::fmt::Debug for ContactsConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContactsConfig")
            .field("pairs", &self.pairs.len())
            .field("metric", &self.metric.name())
            .field("params", &self.params)
            .field("radius", &self.radius)
            .field("frames", &self.frames)
            .finish()
    }
}

#[derive(Default)]
pub struct ContactsConfigBuilder {
    pairs: Vec<ContactPairConfig>,
    metric: Option<Arc<dyn ContactMetric>>,
    params: Option<MetricParams>,
    radius: Option<f64>,
    frames: Option<FrameRange>,
}

impl ContactsConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pair(mut self, groups: GroupPair, reference: ReferenceSnapshot) -> Self {
        self.pairs.push(ContactPairConfig { groups, reference });
        self
    }

    pub fn metric(mut self, metric: Arc<dyn ContactMetric>) -> Self {
        self.metric = Some(metric);
        self
    }

    pub fn params(mut self, params: MetricParams) -> Self {
        self.params = Some(params);
        self
    }

    pub fn radius(mut self, radius: f64) -> Self {
        self.radius = Some(radius);
        self
    }

    pub fn frames(mut self, frames: FrameRange) -> Self {
        self.frames = Some(frames);
        self
    }

    pub fn build(self) -> Result<ContactsConfig, ConfigError> {
        if self.pairs.is_empty() {
            return Err(ConfigError::NoPairs);
        }
        let frames = self.frames.unwrap_or_default();
        if frames.step == 0 {
            return Err(ConfigError::ZeroStep);
        }
        Ok(ContactsConfig {
            pairs: self.pairs,
            metric: self.metric.ok_or(ConfigError::MissingParameter("metric"))?,
            params: self.params.unwrap_or_default(),
            radius: self.radius.unwrap_or(DEFAULT_RADIUS),
            frames,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::metrics::builtin::HardCutoff;
    use crate::core::models::group::AtomGroup;

    fn one_pair() -> (GroupPair, ReferenceSnapshot) {
        let groups = GroupPair::new(
            AtomGroup::new("a", vec![0]),
            AtomGroup::new("b", vec![1]),
        );
        let snapshot = ReferenceSnapshot::new(
            vec![Point3::origin()],
            vec![Point3::new(1.0, 0.0, 0.0)],
        );
        (groups, snapshot)
    }

    #[test]
    fn builds_with_defaults() {
        let (groups, snapshot) = one_pair();
        let config = ContactsConfigBuilder::new()
            .pair(groups, snapshot)
            .metric(Arc::new(HardCutoff))
            .build()
            .unwrap();

        assert_eq!(config.pairs.len(), 1);
        assert_eq!(config.radius, DEFAULT_RADIUS);
        assert_eq!(config.frames, FrameRange::default());
        assert!(config.params.is_empty());
    }

    #[test]
    fn missing_metric_is_rejected() {
        let (groups, snapshot) = one_pair();
        let result = ContactsConfigBuilder::new().pair(groups, snapshot).build();
        assert_eq!(result.unwrap_err(), ConfigError::MissingParameter("metric"));
    }

    #[test]
    fn empty_pair_list_is_rejected() {
        let result = ContactsConfigBuilder::new()
            .metric(Arc::new(HardCutoff))
            .build();
        assert_eq!(result.unwrap_err(), ConfigError::NoPairs);
    }

    #[test]
    fn zero_step_is_rejected() {
        let (groups, snapshot) = one_pair();
        let result = ContactsConfigBuilder::new()
            .pair(groups, snapshot)
            .metric(Arc::new(HardCutoff))
            .frames(FrameRange::new(0, None, 0))
            .build();
        assert_eq!(result.unwrap_err(), ConfigError::ZeroStep);
    }

    #[test]
    fn engine_radius_is_not_copied_into_params() {
        let (groups, snapshot) = one_pair();
        let config = ContactsConfigBuilder::new()
            .pair(groups, snapshot)
            .metric(Arc::new(HardCutoff))
            .radius(10.0)
            .build()
            .unwrap();

        assert_eq!(config.radius, 10.0);
        assert_eq!(config.params.get("radius"), None);
    }
}
