//! Error types.

use thiserror::Error;

/// Error produced by a fallible multivector operation.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Error {
    /// Component index outside of `0..NCOMP`.
    #[error("multivector index {index} out of range (expected 0 through 7)")]
    IndexOutOfRange {
        /// Index that was requested.
        index: usize,
    },
    /// Linear combination with a different number of coefficients than basis
    /// elements.
    #[error("linear combination of {system} multivectors given {coefficients} coefficients")]
    LengthMismatch {
        /// Number of multivectors in the system.
        system: usize,
        /// Number of coefficients.
        coefficients: usize,
    },
}
