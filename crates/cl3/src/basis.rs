//! Basis elements of Cl(3,0) and the table of their geometric products.

use std::fmt;

use crate::error::Error;
use crate::{MultiVector, NCOMP, Sign};

/// Basis element of the three-dimensional geometric algebra. The discriminant
/// of each variant is the index of its component in a [`MultiVector`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Basis {
    /// Scalar `1`
    Scalar = 0,
    /// Vector `e1`
    X = 1,
    /// Vector `e2`
    Y = 2,
    /// Vector `e3`
    Z = 3,
    /// Bivector `e1 e2`
    AxiX = 4,
    /// Bivector `e2 e3`
    AxiY = 5,
    /// Bivector `e3 e1`
    AxiZ = 6,
    /// Pseudoscalar `e1 e2 e3`
    Imag = 7,
}

impl fmt::Display for Basis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl Basis {
    /// All basis elements, in component order.
    pub const ALL: [Basis; NCOMP] = [
        Basis::Scalar,
        Basis::X,
        Basis::Y,
        Basis::Z,
        Basis::AxiX,
        Basis::AxiY,
        Basis::AxiZ,
        Basis::Imag,
    ];

    /// Human-friendly name of each basis element, in component order.
    pub const NAMES: [&'static str; NCOMP] = ["1", "e1", "e2", "e3", "e12", "e23", "e31", "e123"];

    /// Returns the component index of the basis element.
    pub const fn index(self) -> usize {
        self as usize
    }
    /// Returns the basis element with component index `index`.
    pub fn from_index(index: usize) -> Result<Self, Error> {
        Self::ALL
            .get(index)
            .copied()
            .ok_or(Error::IndexOutOfRange { index })
    }

    /// Returns the grade of the basis element: 0 for the scalar, 1 for
    /// vectors, 2 for bivectors, and 3 for the pseudoscalar.
    pub const fn grade(self) -> u8 {
        match self {
            Basis::Scalar => 0,
            Basis::X | Basis::Y | Basis::Z => 1,
            Basis::AxiX | Basis::AxiY | Basis::AxiZ => 2,
            Basis::Imag => 3,
        }
    }

    /// Returns the name of the basis element, such as `e12`.
    pub const fn name(self) -> &'static str {
        Self::NAMES[self.index()]
    }
}

/// Signed products of basis elements. `SIGNED_PRODUCTS[j][k]` is the product
/// of basis `j` (on the left) with basis `k` (on the right).
///
/// Vectors square to `+1` and anticommute, bivectors square to `-1`, and the
/// pseudoscalar squares to `-1` and commutes with everything.
const SIGNED_PRODUCTS: [[(Sign, Basis); NCOMP]; NCOMP] = {
    use Basis::*;
    use Sign::{Neg as N, Pos as P};

    [
        [(P, Scalar), (P, X), (P, Y), (P, Z), (P, AxiX), (P, AxiY), (P, AxiZ), (P, Imag)],
        [(P, X), (P, Scalar), (P, AxiX), (N, AxiZ), (P, Y), (P, Imag), (N, Z), (P, AxiY)],
        [(P, Y), (N, AxiX), (P, Scalar), (P, AxiY), (N, X), (P, Z), (P, Imag), (P, AxiZ)],
        [(P, Z), (P, AxiZ), (N, AxiY), (P, Scalar), (P, Imag), (N, Y), (P, X), (P, AxiX)],
        [(P, AxiX), (N, Y), (P, X), (P, Imag), (N, Scalar), (N, AxiZ), (P, AxiY), (N, Z)],
        [(P, AxiY), (P, Imag), (N, Z), (P, Y), (P, AxiZ), (N, Scalar), (N, AxiX), (N, X)],
        [(P, AxiZ), (P, Z), (P, Imag), (N, X), (N, AxiY), (P, AxiX), (N, Scalar), (N, Y)],
        [(P, Imag), (P, AxiY), (P, AxiZ), (P, AxiX), (N, Z), (N, X), (N, Y), (N, Scalar)],
    ]
};

/// Geometric product of every pair of basis elements, as a multivector.
///
/// `METRIC[j][k]` is the product of basis `j` with basis `k`. This table is the
/// only place the algebra's sign rules are encoded; [`MultiVector`]
/// multiplication contracts against it directly.
pub static METRIC: [[MultiVector; NCOMP]; NCOMP] = {
    let mut table = [[MultiVector::ZERO; NCOMP]; NCOMP];
    let mut j = 0;
    while j < NCOMP {
        let mut k = 0;
        while k < NCOMP {
            let (sign, basis) = SIGNED_PRODUCTS[j][k];
            table[j][k] = MultiVector::unit(basis).signed(sign);
            k += 1;
        }
        j += 1;
    }
    table
};

/// Returns the geometric product of two basis elements.
pub fn metric(lhs: Basis, rhs: Basis) -> MultiVector {
    METRIC[lhs.index()][rhs.index()]
}

/// Returns the geometric product of two basis elements as a sign and a basis
/// element.
pub fn metric_signed(lhs: Basis, rhs: Basis) -> (Sign, Basis) {
    SIGNED_PRODUCTS[lhs.index()][rhs.index()]
}
