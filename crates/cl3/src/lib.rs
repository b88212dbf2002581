//! Multivectors, rotors, and the geometric product of three-dimensional
//! Euclidean space (the Clifford algebra Cl(3,0)).
//!
//! A [`MultiVector`] has eight components: one scalar, three vector, three
//! bivector (axial vector), and one pseudoscalar. Multiplication is defined
//! entirely by the signed table in [`basis::METRIC`].
//!
//! ```
//! use cl3::prelude::*;
//!
//! let mut axis = MultiVector::get_axis(10.0, -20.0, 45.0);
//! axis *= 1.0 / axis.mag();
//!
//! let half_angle: Float = 0.05;
//! let l_rot = MultiVector::rotor2(&axis, half_angle.cos(), half_angle.sin());
//! let r_rot = MultiVector::rotor2(&axis, half_angle.cos(), -half_angle.sin());
//!
//! let p = MultiVector::get_vector(100.0, 0.0, 0.0).rotate3(&l_rot, &r_rot);
//! assert!((p.mag() - 100.0).abs() < 1e-9);
//! ```

pub use {approx, num_traits as num};

/// Floating-point type used for multivector components.
pub type Float = f64;

/// Small floating-point value used for comparisons.
pub const EPSILON: Float = 0.000001;

/// Number of components in a multivector.
pub const NCOMP: usize = 8;

/// Asserts that both arguments are approximately equal.
#[macro_export]
macro_rules! assert_approx_eq {
    ($a:expr, $b:expr $(,)?) => {
        $crate::approx::assert_abs_diff_eq!($a, $b, epsilon = $crate::EPSILON)
    };
}

#[macro_use]
mod impl_macros;

pub mod basis;
pub mod error;
mod multivector;
mod rotor;
pub mod sign;

/// Named multivector constants, also available as associated constants of
/// [`MultiVector`].
pub mod consts {
    use crate::MultiVector;

    /// Zero multivector.
    pub const ZERO: MultiVector = MultiVector::ZERO;
    /// Scalar unit `1`.
    pub const ONE: MultiVector = MultiVector::ONE;
    /// Vector unit `e1`.
    pub const VECX: MultiVector = MultiVector::VECX;
    /// Vector unit `e2`.
    pub const VECY: MultiVector = MultiVector::VECY;
    /// Vector unit `e3`.
    pub const VECZ: MultiVector = MultiVector::VECZ;
    /// Bivector unit `e1 e2`.
    pub const AXIX: MultiVector = MultiVector::AXIX;
    /// Bivector unit `e2 e3`.
    pub const AXIY: MultiVector = MultiVector::AXIY;
    /// Bivector unit `e3 e1`.
    pub const AXIZ: MultiVector = MultiVector::AXIZ;
    /// Pseudoscalar unit `e1 e2 e3`.
    pub const IMAG: MultiVector = MultiVector::IMAG;

    /// Vector frame `[VECX, VECY, VECZ]`.
    pub const VECTOR_BASIS: [MultiVector; 3] = MultiVector::VECTOR_BASIS;
    /// Bivector frame `[AXIX, AXIY, AXIZ]`.
    pub const AXIS_BASIS: [MultiVector; 3] = MultiVector::AXIS_BASIS;
}

/// Structs, traits, and constants.
pub mod prelude {
    pub use crate::basis::{Basis, METRIC, metric};
    pub use crate::consts::*;
    pub use crate::error::Error;
    pub use crate::multivector::MultiVector;
    pub use crate::rotor::Rotation;
    pub use crate::sign::Sign;
    pub use crate::traits::*;
    pub use crate::{EPSILON, Float, NCOMP};
}
pub use prelude::*;

/// Traits only.
pub mod traits {
    pub use approx::AbsDiffEq;
    pub use num_traits::{One, Zero};
}

#[cfg(test)]
mod tests;
