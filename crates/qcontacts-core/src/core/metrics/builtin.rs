use super::{ContactMetric, MetricError, MetricParams, check_shapes, validate_positive};
use nalgebra::DMatrix;

/// Conventional heavy-atom contact cutoff in Angstroms.
pub const DEFAULT_RADIUS: f64 = 4.5;

/// Native-fraction criterion: the share of native contacts still intact.
///
/// A pair `(i, j)` is a native contact when `r0[(i, j)] < radius`; it is
/// counted as intact when additionally `r[(i, j)] < radius`. The returned
/// fraction is `intact / native`, so a frame identical to the reference yields
/// exactly `1.0`.
///
/// Parameters: `radius` (optional, defaults to [`DEFAULT_RADIUS`]).
#[derive(Debug, Clone, Copy, Default)]
pub struct HardCutoff;

impl ContactMetric for HardCutoff {
    fn name(&self) -> &'static str {
        "hard_cutoff"
    }

    fn evaluate(
        &self,
        r: &DMatrix<f64>,
        r0: &DMatrix<f64>,
        params: &MetricParams,
    ) -> Result<f64, MetricError> {
        check_shapes(r, r0)?;
        let radius = validate_positive("radius", params.get_or("radius", DEFAULT_RADIUS))?;

        let native = r0.iter().filter(|&&d0| d0 < radius).count();
        if native == 0 {
            return Err(MetricError::UndefinedFraction);
        }

        let intact = r
            .iter()
            .zip(r0.iter())
            .filter(|&(&d, &d0)| d0 < radius && d < radius)
            .count();

        Ok(intact as f64 / native as f64)
    }
}

/// Window criterion: the share of *all* `(i, j)` pairs whose current distance
/// falls strictly between `min_radius` and `radius`, normalized by the total
/// element count of `r`.
///
/// Unlike [`HardCutoff`] this deliberately ignores the contents of `r0`
/// (beyond the shape check): nativeness plays no role, only the current
/// geometry.
///
/// Parameters: `radius` and `min_radius` (both required).
#[derive(Debug, Clone, Copy, Default)]
pub struct BetweenRadii;

impl ContactMetric for BetweenRadii {
    fn name(&self) -> &'static str {
        "between_radii"
    }

    fn evaluate(
        &self,
        r: &DMatrix<f64>,
        r0: &DMatrix<f64>,
        params: &MetricParams,
    ) -> Result<f64, MetricError> {
        check_shapes(r, r0)?;
        let radius = validate_positive("radius", params.require("radius")?)?;
        let min_radius = validate_positive("min_radius", params.require("min_radius")?)?;

        if r.is_empty() {
            return Err(MetricError::UndefinedFraction);
        }

        let hits = r
            .iter()
            .filter(|&&d| d > min_radius && d < radius)
            .count();

        Ok(hits as f64 / r.len() as f64)
    }
}
