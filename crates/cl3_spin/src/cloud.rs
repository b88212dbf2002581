//! Random point clouds and the rotation applied to them each frame.

use cl3::{Float, MultiVector};
use eyre::{Result, eyre};
use rand::Rng;

use crate::output::Frame;

/// Exponent applied to each random coordinate, which pushes points away from
/// the origin.
const SPREAD_EXPONENT: Float = 2.0 / 5.0;

/// Returns `count` random vectors with coordinates in the range
/// `±radius * 2^(2/5) / 2`.
pub(crate) fn random_points(rng: &mut impl Rng, count: usize, radius: Float) -> Vec<MultiVector> {
    (0..count)
        .map(|_| {
            let x = random_coordinate(rng, radius);
            let y = random_coordinate(rng, radius);
            let z = random_coordinate(rng, radius);
            MultiVector::get_vector(x, y, z)
        })
        .collect()
}

fn random_coordinate(rng: &mut impl Rng, radius: Float) -> Float {
    let magnitude = (rng.random_range(0..200_u32) as Float / 100.0).powf(SPREAD_EXPONENT);
    let sign = if rng.random_bool(0.5) { 0.5 } else { -0.5 };
    radius * magnitude * sign
}

/// Point cloud rotating at a constant rate in the plane of a fixed axis.
#[derive(Debug, Clone)]
pub(crate) struct Spinner {
    axis: MultiVector,
    step: Float,
    points: Vec<MultiVector>,
}

impl Spinner {
    /// Constructs a spinner, normalizing `axis`.
    pub(crate) fn new(axis: [Float; 3], step: Float, points: Vec<MultiVector>) -> Result<Self> {
        let [x, y, z] = axis;
        let axis = MultiVector::get_axis(x, y, z);
        let axis = axis
            .normalize()
            .ok_or_else(|| eyre!("rotation axis {axis} must be nonzero and finite"))?;

        Ok(Self { axis, step, points })
    }

    /// Returns the normalized rotation axis.
    pub(crate) fn axis(&self) -> &MultiVector {
        &self.axis
    }

    /// Returns the rotated positions of every point at frame `index`.
    pub(crate) fn frame(&self, index: usize) -> Frame {
        let theta = self.step * index as Float;
        let cos2 = (theta / 2.0).cos();
        let sin2 = (theta / 2.0).sin();
        let l_rot = MultiVector::rotor2(&self.axis, cos2, sin2);
        let r_rot = MultiVector::rotor2(&self.axis, cos2, -sin2);

        let points = self
            .points
            .iter()
            .map(|initial_point| {
                let p = initial_point.rotate3(&l_rot, &r_rot);
                [p[1], p[2], p[3]]
            })
            .collect();

        Frame {
            index,
            theta,
            points,
        }
    }
}
