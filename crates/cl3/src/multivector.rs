//! Eight-component multivector of the three-dimensional geometric algebra.

use std::fmt;
use std::iter::Sum;
use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

use approx::AbsDiffEq;
use itertools::iproduct;

use crate::basis::{Basis, METRIC};
use crate::error::Error;
use crate::{EPSILON, Float, NCOMP, Sign};

/// Multivector in Cl(3,0): a scalar, a vector, a bivector (axial vector), and a
/// pseudoscalar.
///
/// Components are ordered as follows:
///
/// | index   | meaning                      |
/// |---------|------------------------------|
/// | 0       | scalar (real)                |
/// | 1, 2, 3 | vector X, Y, Z               |
/// | 4, 5, 6 | bivector (axial) X, Y, Z     |
/// | 7       | pseudoscalar (imaginary)     |
///
/// Indexing out of bounds panics. Use [`MultiVector::get()`] and
/// [`MultiVector::set()`] for fallible access.
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
#[cfg_attr(feature = "bytemuck", derive(bytemuck::Pod, bytemuck::Zeroable))]
#[derive(Default, Copy, Clone, PartialEq)]
#[repr(transparent)]
pub struct MultiVector([Float; NCOMP]);

impl fmt::Debug for MultiVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MultiVector")
            .field("real", &self.scal_part())
            .field("vec", &self.vec_part())
            .field("axi", &self.axi_part())
            .field("imag", &self.imag_part())
            .finish()
    }
}

impl fmt::Display for MultiVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [c0, c1, c2, c3, c4, c5, c6, c7] = self.0;
        write!(
            f,
            "[real={c0}, vec=({c1}; {c2}; {c3}), axi=({c4}; {c5}; {c6}), imag={c7}]",
        )
    }
}

impl MultiVector {
    /// Zero multivector.
    pub const ZERO: Self = Self([0.0; NCOMP]);
    /// Scalar unit.
    pub const ONE: Self = Self::unit(Basis::Scalar);
    /// Unit vector along X.
    pub const VECX: Self = Self::unit(Basis::X);
    /// Unit vector along Y.
    pub const VECY: Self = Self::unit(Basis::Y);
    /// Unit vector along Z.
    pub const VECZ: Self = Self::unit(Basis::Z);
    /// Unit bivector `VECX * VECY`.
    pub const AXIX: Self = Self::unit(Basis::AxiX);
    /// Unit bivector `VECY * VECZ`.
    pub const AXIY: Self = Self::unit(Basis::AxiY);
    /// Unit bivector `VECZ * VECX`.
    pub const AXIZ: Self = Self::unit(Basis::AxiZ);
    /// Unit pseudoscalar `VECX * VECY * VECZ`.
    pub const IMAG: Self = Self::unit(Basis::Imag);

    /// Vector frame, for use with [`MultiVector::linear_combination()`].
    pub const VECTOR_BASIS: [Self; 3] = [Self::VECX, Self::VECY, Self::VECZ];
    /// Bivector frame, for use with [`MultiVector::linear_combination()`].
    pub const AXIS_BASIS: [Self; 3] = [Self::AXIX, Self::AXIY, Self::AXIZ];

    /// Constructs a multivector from named components.
    pub const fn new(
        real: Float,
        vecx: Float,
        vecy: Float,
        vecz: Float,
        axix: Float,
        axiy: Float,
        axiz: Float,
        imag: Float,
    ) -> Self {
        Self([real, vecx, vecy, vecz, axix, axiy, axiz, imag])
    }
    /// Constructs a multivector from its components in index order.
    pub const fn from_components(components: [Float; NCOMP]) -> Self {
        Self(components)
    }
    /// Constructs the unit multivector for a basis element.
    pub const fn unit(basis: Basis) -> Self {
        let mut ret = [0.0; NCOMP];
        ret[basis.index()] = 1.0;
        Self(ret)
    }
    /// Constructs a multivector with only scalar components set.
    pub const fn scalar(real: Float) -> Self {
        Self::new(real, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0)
    }
    /// Constructs a multivector with only vector components set.
    ///
    /// This is equivalent to a linear combination of
    /// [`MultiVector::VECTOR_BASIS`].
    pub const fn get_vector(x: Float, y: Float, z: Float) -> Self {
        Self::new(0.0, x, y, z, 0.0, 0.0, 0.0, 0.0)
    }
    /// Constructs a multivector with only bivector (axis) components set.
    ///
    /// This is equivalent to a linear combination of
    /// [`MultiVector::AXIS_BASIS`].
    pub const fn get_axis(x: Float, y: Float, z: Float) -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0, x, y, z, 0.0)
    }

    /// Returns the multivector negated if `sign` is negative. Usable in
    /// constant expressions.
    #[must_use]
    pub const fn signed(self, sign: Sign) -> Self {
        let mult = sign.to_float();
        let mut ret = self.0;
        let mut i = 0;
        while i < NCOMP {
            ret[i] *= mult;
            i += 1;
        }
        Self(ret)
    }

    /// Returns the components in index order.
    pub const fn components(&self) -> [Float; NCOMP] {
        self.0
    }
    /// Returns a component, or an error if `index` is out of range.
    pub fn get(&self, index: usize) -> Result<Float, Error> {
        self.0
            .get(index)
            .copied()
            .ok_or(Error::IndexOutOfRange { index })
    }
    /// Sets a component, or returns an error if `index` is out of range.
    pub fn set(&mut self, index: usize, value: Float) -> Result<(), Error> {
        let component = self
            .0
            .get_mut(index)
            .ok_or(Error::IndexOutOfRange { index })?;
        *component = value;
        Ok(())
    }

    /// Returns the scalar component.
    pub const fn scal_part(&self) -> Float {
        self.0[0]
    }
    /// Returns the vector components.
    pub const fn vec_part(&self) -> [Float; 3] {
        [self.0[1], self.0[2], self.0[3]]
    }
    /// Returns the bivector (axis) components.
    pub const fn axi_part(&self) -> [Float; 3] {
        [self.0[4], self.0[5], self.0[6]]
    }
    /// Returns the pseudoscalar component.
    pub const fn imag_part(&self) -> Float {
        self.0[7]
    }

    /// Returns the squared Euclidean norm of all eight components.
    pub fn mag2(&self) -> Float {
        self.0.iter().map(|x| x * x).sum()
    }
    /// Returns the Euclidean norm of all eight components. Does not overflow
    /// unless the norm itself is out of range.
    pub fn mag(&self) -> Float {
        self.0.iter().fold(0.0, |acc: Float, &x| acc.hypot(x))
    }
    /// Returns a copy of the multivector scaled to unit magnitude, or `None`
    /// if the magnitude is zero or not finite.
    #[must_use]
    pub fn normalize(&self) -> Option<Self> {
        let mag = self.mag();
        (mag > 0.0 && mag.is_finite()).then(|| Self(self.0.map(|x| x / mag)))
    }
    /// Returns a scaled copy of the multivector.
    #[must_use]
    pub fn scale(&self, scalar: Float) -> Self {
        Self(self.0.map(|x| x * scalar))
    }
    /// Returns the reverse of the multivector, which negates the bivector and
    /// pseudoscalar components.
    #[must_use]
    pub fn reverse(&self) -> Self {
        let [c0, c1, c2, c3, c4, c5, c6, c7] = self.0;
        Self([c0, c1, c2, c3, -c4, -c5, -c6, -c7])
    }

    /// Returns the geometric product `lhs * rhs`. The product is not
    /// commutative, so the order of the arguments matters.
    ///
    /// Every pair of input components is looked up in [`METRIC`].
    pub fn geometric_product(lhs: &Self, rhs: &Self) -> Self {
        Self(std::array::from_fn(|i| {
            iproduct!(0..NCOMP, 0..NCOMP)
                .map(|(j, k)| lhs.0[j] * rhs.0[k] * METRIC[j][k].0[i])
                .sum()
        }))
    }

    /// Returns the sum of `coeffs[i] * system[i]`, expressing a multivector in
    /// terms of an arbitrary frame.
    ///
    /// Returns an error if `system` and `coeffs` have different lengths.
    pub fn linear_combination(system: &[Self], coeffs: &[Float]) -> Result<Self, Error> {
        if system.len() != coeffs.len() {
            return Err(Error::LengthMismatch {
                system: system.len(),
                coefficients: coeffs.len(),
            });
        }
        Ok(std::iter::zip(system, coeffs).map(|(v, &c)| v * c).sum())
    }
}

impl Index<usize> for MultiVector {
    type Output = Float;

    #[track_caller]
    fn index(&self, index: usize) -> &Self::Output {
        self.0.get(index).unwrap_or_else(|| {
            panic!("multivector index out of range: there are {NCOMP} components but the index is {index}")
        })
    }
}
impl IndexMut<usize> for MultiVector {
    #[track_caller]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        self.0.get_mut(index).unwrap_or_else(|| {
            panic!("multivector index out of range: there are {NCOMP} components but the index is {index}")
        })
    }
}
impl Index<Basis> for MultiVector {
    type Output = Float;

    fn index(&self, index: Basis) -> &Self::Output {
        &self.0[index.index()]
    }
}
impl IndexMut<Basis> for MultiVector {
    fn index_mut(&mut self, index: Basis) -> &mut Self::Output {
        &mut self.0[index.index()]
    }
}

impl Neg for MultiVector {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(self.0.map(|x| -x))
    }
}
impl Neg for &MultiVector {
    type Output = MultiVector;

    fn neg(self) -> Self::Output {
        -*self
    }
}

impl Add for MultiVector {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(std::array::from_fn(|i| self.0[i] + rhs.0[i]))
    }
}
impl Sub for MultiVector {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(std::array::from_fn(|i| self.0[i] - rhs.0[i]))
    }
}

/// Geometric product.
impl Mul for MultiVector {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self::geometric_product(&self, &rhs)
    }
}
/// Scaling by a scalar.
impl Mul<Float> for MultiVector {
    type Output = Self;

    fn mul(self, rhs: Float) -> Self::Output {
        self.scale(rhs)
    }
}
/// Scaling by a scalar. Scalars commute with every multivector, so this is
/// the same as multiplying on the right.
impl Mul<MultiVector> for Float {
    type Output = MultiVector;

    fn mul(self, rhs: MultiVector) -> Self::Output {
        rhs.scale(self)
    }
}
impl Mul<&MultiVector> for Float {
    type Output = MultiVector;

    fn mul(self, rhs: &MultiVector) -> Self::Output {
        rhs.scale(self)
    }
}
impl Div<Float> for MultiVector {
    type Output = Self;

    #[allow(clippy::suspicious_arithmetic_impl)]
    fn div(self, rhs: Float) -> Self::Output {
        self.scale(1.0 / rhs)
    }
}


impl_forward_bin_ops_to_value! {
    impl Add for MultiVector { fn add() }
    impl Sub for MultiVector { fn sub() }
    impl Mul for MultiVector { fn mul() }
    impl Mul<Float> for MultiVector { fn mul() -> MultiVector }
    impl Div<Float> for MultiVector { fn div() -> MultiVector }
}

impl_assign_ops_via_bin_ops! {
    impl AddAssign<MultiVector> for MultiVector { fn add_assign() => add }
    impl SubAssign<MultiVector> for MultiVector { fn sub_assign() => sub }
    impl MulAssign<MultiVector> for MultiVector { fn mul_assign() => mul }
    impl MulAssign<Float> for MultiVector { fn mul_assign() => mul }
    impl DivAssign<Float> for MultiVector { fn div_assign() => div }
}

impl Sum for MultiVector {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |a, b| a + b)
    }
}
impl<'a> Sum<&'a MultiVector> for MultiVector {
    fn sum<I: Iterator<Item = &'a MultiVector>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |a, b| a + b)
    }
}

impl num_traits::Zero for MultiVector {
    fn zero() -> Self {
        Self::ZERO
    }

    fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }
}
impl num_traits::One for MultiVector {
    fn one() -> Self {
        Self::ONE
    }
}

impl AbsDiffEq for MultiVector {
    type Epsilon = Float;

    fn default_epsilon() -> Self::Epsilon {
        EPSILON
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        std::iter::zip(&self.0, &other.0).all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}

#[cfg(test)]
impl proptest::arbitrary::Arbitrary for MultiVector {
    type Parameters = ();

    fn arbitrary_with((): Self::Parameters) -> Self::Strategy {
        use proptest::prelude::Strategy;

        proptest::array::uniform8(-10.0..10.0_f64)
            .prop_map(MultiVector::from_components)
            .boxed()
    }

    type Strategy = proptest::strategy::BoxedStrategy<Self>;
}
