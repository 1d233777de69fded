use nalgebra::{DMatrix, Point3, Vector3};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum DistanceError {
    #[error("coordinate buffer of length {len} is not a whole number of 3D points")]
    MalformedCoordinates { len: usize },
}

/// Orthorhombic periodic box, given as the three edge lengths in Angstroms.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoxDims {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl BoxDims {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

/// Wraps a coordinate delta into the minimum-image convention for an
/// orthorhombic box: each component lands in `(-L/2, L/2]` for its axis.
///
/// Axes with a non-positive length are left unwrapped, so a degenerate box
/// behaves like open boundaries along that axis.
pub fn minimum_image(delta: Vector3<f64>, pbc: &BoxDims) -> Vector3<f64> {
    Vector3::new(
        wrap_component(delta.x, pbc.x),
        wrap_component(delta.y, pbc.y),
        wrap_component(delta.z, pbc.z),
    )
}

#[inline]
fn wrap_component(d: f64, length: f64) -> f64 {
    if length <= 0.0 {
        return d;
    }
    d - length * (d / length).round()
}

#[inline]
fn pair_distance(a: &Point3<f64>, b: &Point3<f64>, pbc: Option<&BoxDims>) -> f64 {
    let delta = a - b;
    match pbc {
        Some(dims) => minimum_image(delta, dims).norm(),
        None => delta.norm(),
    }
}

/// Computes the full pairwise Euclidean distance matrix between two coordinate
/// sets, in double precision throughout.
///
/// The result has shape `(points_a.len(), points_b.len())`; entry `(i, j)` is
/// the distance between point `i` of the first set and point `j` of the
/// second. Either set may be empty, producing an empty matrix. If `pbc` is
/// supplied, every coordinate delta is wrapped by [`minimum_image`] before the
/// norm is taken.
pub fn distance_matrix(
    points_a: &[Point3<f64>],
    points_b: &[Point3<f64>],
    pbc: Option<&BoxDims>,
) -> DMatrix<f64> {
    DMatrix::from_fn(points_a.len(), points_b.len(), |i, j| {
        pair_distance(&points_a[i], &points_b[j], pbc)
    })
}

/// Reinterprets a flat `[x0, y0, z0, x1, y1, z1, ..]` coordinate buffer as 3D
/// points.
///
/// External trajectory readers commonly hand out flat buffers; this is the one
/// place where a malformed (non-3D) coordinate set can be observed. Past this
/// boundary the type system guarantees well-formed points.
pub fn points_from_flat(coords: &[f64]) -> Result<Vec<Point3<f64>>, DistanceError> {
    if coords.len() % 3 != 0 {
        return Err(DistanceError::MalformedCoordinates { len: coords.len() });
    }
    Ok(coords
        .chunks_exact(3)
        .map(|c| Point3::new(c[0], c[1], c[2]))
        .collect())
}
