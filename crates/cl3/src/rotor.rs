//! Rotors and rotation by the sandwich product.
//!
//! A rotor is a [`MultiVector`] with only scalar and bivector components,
//! `cos(φ) + sin(φ) B`. Rotating `m` by `θ` in the plane of a unit bivector
//! `B` is `L m R`, where `L` is the rotor for `φ = θ/2` and `R` is the rotor
//! for `φ = -θ/2` (which is also the reverse of `L`).
//!
//! If the axis bivector does not have unit magnitude, the result is not a pure
//! rotation: it is scaled as well. Normalize the axis first to get a pure
//! rotation.
//!
//! The bivector components of an axis name planes, not their normals: with
//! the multiplication table in [`crate::basis`], `get_axis(1, 0, 0)` is the
//! plane `e1 e2`, `get_axis(0, 1, 0)` is `e2 e3`, and `get_axis(0, 0, 1)` is
//! `e3 e1`.

use crate::{EPSILON, Float, MultiVector};

impl MultiVector {
    /// Constructs the rotor `cos(theta) + sin(theta) B`, where `B` is the
    /// bivector part of `axis`. All other components of `axis` are ignored.
    ///
    /// Note that this is the rotor for a rotation by `2 * theta`.
    pub fn rotor(axis: &MultiVector, theta: Float) -> Self {
        Self::rotor2(axis, theta.cos(), theta.sin())
    }
    /// Constructs the rotor `cos + sin B` from a precomputed cosine and sine,
    /// where `B` is the bivector part of `axis`.
    pub fn rotor2(axis: &MultiVector, cos: Float, sin: Float) -> Self {
        let [x, y, z] = axis.axi_part();
        Self::new(cos, 0.0, 0.0, 0.0, x * sin, y * sin, z * sin, 0.0)
    }

    /// Returns the multivector rotated by `theta` in the plane of `axis`.
    ///
    /// If `axis` is not normalized, the result is also scaled. When rotating
    /// many multivectors by the same angle, prefer [`MultiVector::rotate2()`]
    /// or [`MultiVector::rotate3()`].
    #[must_use]
    pub fn rotate(&self, axis: &MultiVector, theta: Float) -> Self {
        let (sin_half, cos_half) = (theta / 2.0).sin_cos();
        self.rotate2(axis, cos_half, sin_half)
    }
    /// Returns the multivector rotated in the plane of `axis`, given the
    /// cosine and sine of half the rotation angle.
    #[must_use]
    pub fn rotate2(&self, axis: &MultiVector, cos_half: Float, sin_half: Float) -> Self {
        self.rotate3(
            &Self::rotor2(axis, cos_half, sin_half),
            &Self::rotor2(axis, cos_half, -sin_half),
        )
    }
    /// Returns the sandwich product `(l_rot * self) * r_rot`.
    #[must_use]
    pub fn rotate3(&self, l_rot: &MultiVector, r_rot: &MultiVector) -> Self {
        (l_rot * self) * r_rot
    }
}

/// Rotation with its left and right rotors precomputed.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Rotation {
    /// Rotor multiplied on the left.
    pub left: MultiVector,
    /// Rotor multiplied on the right.
    pub right: MultiVector,
}

impl Default for Rotation {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl approx::AbsDiffEq for Rotation {
    type Epsilon = Float;

    fn default_epsilon() -> Self::Epsilon {
        EPSILON
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.left.abs_diff_eq(&other.left, epsilon) && self.right.abs_diff_eq(&other.right, epsilon)
    }
}

impl Rotation {
    /// Identity rotation.
    pub const IDENTITY: Self = Self {
        left: MultiVector::ONE,
        right: MultiVector::ONE,
    };

    /// Constructs a rotation by `theta` in the plane of `axis`.
    pub fn new(axis: &MultiVector, theta: Float) -> Self {
        let (sin_half, cos_half) = (theta / 2.0).sin_cos();
        Self::from_half_angle(axis, cos_half, sin_half)
    }
    /// Constructs a rotation in the plane of `axis`, given the cosine and sine
    /// of half the rotation angle.
    pub fn from_half_angle(axis: &MultiVector, cos_half: Float, sin_half: Float) -> Self {
        let axis_mag2: Float = axis.axi_part().iter().map(|x| x * x).sum();
        if (axis_mag2 - 1.0).abs() > EPSILON {
            log::debug!(
                "rotation axis {axis} has magnitude {}; result will not be a pure rotation",
                axis_mag2.sqrt(),
            );
        }
        Self {
            left: MultiVector::rotor2(axis, cos_half, sin_half),
            right: MultiVector::rotor2(axis, cos_half, -sin_half),
        }
    }

    /// Applies the rotation to a multivector.
    pub fn apply(&self, m: &MultiVector) -> MultiVector {
        m.rotate3(&self.left, &self.right)
    }

    /// Returns the rotation that applies `self` and then `next`.
    #[must_use]
    pub fn then(&self, next: &Rotation) -> Self {
        Self {
            left: next.left * self.left,
            right: self.right * next.right,
        }
    }
    /// Returns the inverse rotation. This is only exact for rotations built
    /// from a unit axis.
    #[must_use]
    pub fn inverse(&self) -> Self {
        Self {
            left: self.right,
            right: self.left,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::{FRAC_PI_2, PI, TAU};

    use super::*;

    fn regression_axis() -> MultiVector {
        let axis = MultiVector::get_axis(10.0, -20.0, 45.0);
        axis * (1.0 / axis.mag())
    }

    #[test]
    fn test_rotor_construction() {
        let axis = MultiVector::new(9.0, 9.0, 9.0, 9.0, 1.0, 2.0, 3.0, 9.0);
        assert_eq!(
            MultiVector::rotor2(&axis, 0.5, 2.0),
            MultiVector::new(0.5, 0.0, 0.0, 0.0, 2.0, 4.0, 6.0, 0.0),
        );
        assert_approx_eq!(
            MultiVector::rotor(&axis, FRAC_PI_2),
            MultiVector::get_axis(1.0, 2.0, 3.0),
        );
    }

    #[test]
    fn test_quarter_turns_in_basis_planes() {
        let e12 = MultiVector::get_axis(1.0, 0.0, 0.0);
        let e23 = MultiVector::get_axis(0.0, 1.0, 0.0);
        let e31 = MultiVector::get_axis(0.0, 0.0, 1.0);
        let x = MultiVector::VECX;
        let y = MultiVector::VECY;
        let z = MultiVector::VECZ;

        assert_approx_eq!(x.rotate(&e12, FRAC_PI_2), -y);
        assert_approx_eq!(y.rotate(&e12, FRAC_PI_2), x);
        assert_approx_eq!(z.rotate(&e12, FRAC_PI_2), z);

        assert_approx_eq!(x.rotate(&e23, FRAC_PI_2), x);
        assert_approx_eq!(y.rotate(&e23, FRAC_PI_2), -z);

        assert_approx_eq!(x.rotate(&e31, FRAC_PI_2), z);
        assert_approx_eq!(y.rotate(&e31, FRAC_PI_2), y);
    }

    #[test]
    fn test_rotation_identity_and_full_turn() {
        let axis = regression_axis();
        let v = MultiVector::get_vector(1.0, -2.0, 3.0);
        assert_approx_eq!(v.rotate(&axis, 0.0), v);
        assert_approx_eq!(v.rotate(&axis, TAU), v);
        // A half turn twice is a full turn, even though the rotors negate.
        assert_approx_eq!(v.rotate(&axis, PI).rotate(&axis, PI), v);
    }

    #[test]
    fn test_rotation_preserves_norm_for_unit_axis() {
        let axis = regression_axis();
        let v = MultiVector::get_vector(3.0, 4.0, 12.0);
        for i in 0..20 {
            let theta = i as Float * 0.37;
            let rotated = v.rotate(&axis, theta);
            assert_approx_eq!(rotated.mag(), 13.0);
            assert_approx_eq!(rotated.scal_part(), 0.0);
            assert_approx_eq!(rotated.imag_part(), 0.0);
            assert_approx_eq!(rotated.axi_part()[0], 0.0);
        }
    }

    #[test]
    fn test_unnormalized_axis_scales() {
        let axis = MultiVector::get_axis(0.0, 0.0, 2.0);
        let rotated = MultiVector::VECX.rotate(&axis, 0.0);
        assert_approx_eq!(rotated, MultiVector::VECX);
        let rotated = MultiVector::VECX.rotate(&axis, FRAC_PI_2);
        assert_approx_eq!(rotated, MultiVector::get_vector(-1.5, 0.0, 2.0));
        // cos² + |axis|² sin² at half of a quarter turn
        let rotated = MultiVector::VECY.rotate(&axis, FRAC_PI_2);
        assert_approx_eq!(rotated, MultiVector::VECY * 2.5);
    }

    #[test]
    fn test_rotation_regression_fixture() {
        let p = MultiVector::get_vector(100.0, 0.0, 0.0).rotate(&regression_axis(), 0.1);
        assert_approx_eq!(
            p,
            MultiVector::get_vector(99.57955846399229, -2.164828604213265, 8.900845646944228),
        );
    }

    #[test]
    fn test_rotate_forms_agree() {
        let axis = regression_axis();
        let theta: Float = 1.234;
        let v = MultiVector::get_vector(-5.0, 7.0, 0.5);
        let (sin_half, cos_half) = (theta / 2.0).sin_cos();
        let l_rot = MultiVector::rotor2(&axis, cos_half, sin_half);
        let r_rot = MultiVector::rotor2(&axis, cos_half, -sin_half);

        let expected = v.rotate(&axis, theta);
        assert_eq!(v.rotate2(&axis, cos_half, sin_half), expected);
        assert_eq!(v.rotate3(&l_rot, &r_rot), expected);
        assert_eq!(MultiVector::rotor(&axis, theta / 2.0), l_rot);
        assert_eq!(Rotation::new(&axis, theta).apply(&v), expected);
    }

    #[test]
    fn test_right_rotor_is_reverse_of_left() {
        let axis = regression_axis();
        let rot = Rotation::new(&axis, 0.8);
        assert_approx_eq!(rot.right, rot.left.reverse());
        assert_approx_eq!(rot.left * rot.right, MultiVector::ONE);
    }

    #[test]
    fn test_rotation_composition() {
        let axis = regression_axis();
        let quarter = Rotation::new(&axis, FRAC_PI_2);
        let half = Rotation::new(&axis, PI);
        assert_approx_eq!(quarter.then(&quarter), half);

        let v = MultiVector::get_vector(2.0, 0.0, -1.0);
        let other = Rotation::new(&MultiVector::get_axis(1.0, 0.0, 0.0), 0.3);
        assert_approx_eq!(
            quarter.then(&other).apply(&v),
            other.apply(&quarter.apply(&v)),
        );
        assert_approx_eq!(quarter.inverse().apply(&quarter.apply(&v)), v);
        assert_approx_eq!(Rotation::default().apply(&v), v);
    }
}
