//! Error types shared by every contract and algorithm.

use thiserror::Error;

/// Result alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, NumericError>;

/// Errors surfaced by scalar, vector and register operations.
///
/// Length mismatches between vectors are deliberately absent: elementwise
/// operations truncate to the common prefix instead of failing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NumericError {
    /// A divisor was zero.
    ///
    /// Raised by scalar division, vector/vector and vector/scalar division,
    /// and by computing a mean with no contributions.
    #[error("division by zero in {context}")]
    DivisionByZero {
        /// The operation that attempted the division.
        context: &'static str,
    },

    /// An element index was outside `0..len`.
    #[error("index {index} out of range for length {len}")]
    IndexOutOfRange {
        /// The offending index.
        index: usize,
        /// Length of the vector at the time of access.
        len: usize,
    },

    /// A 64-bit float could not be converted into the target representation.
    #[error("value {value} is not representable")]
    NotRepresentable {
        /// The rejected value, formatted.
        value: String,
    },
}

impl NumericError {
    /// Construct a division-by-zero error for the named operation.
    #[must_use]
    pub const fn division_by_zero(context: &'static str) -> Self {
        Self::DivisionByZero { context }
    }

    /// Error for updating a register that has no contributions.
    #[must_use]
    pub const fn empty_register() -> Self {
        Self::DivisionByZero {
            context: "register update",
        }
    }

    /// Construct an error for a non-representable float.
    #[must_use]
    pub fn not_representable(value: f64) -> Self {
        Self::NotRepresentable {
            value: value.to_string(),
        }
    }

    /// Returns true for arithmetic failures (division by zero).
    #[must_use]
    pub const fn is_arithmetic(&self) -> bool {
        matches!(self, Self::DivisionByZero { .. })
    }

    /// Returns true for out-of-range element access.
    #[must_use]
    pub const fn is_index(&self) -> bool {
        matches!(self, Self::IndexOutOfRange { .. })
    }
}

/// Check `index < len`, returning [`NumericError::IndexOutOfRange`] otherwise.
pub(crate) fn check_index(index: usize, len: usize) -> Result<()> {
    if index < len {
        Ok(())
    } else {
        Err(NumericError::IndexOutOfRange { index, len })
    }
}
