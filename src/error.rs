//! Error types for patch extraction and recombination

use std::fmt;

/// Main error type for all patch operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatchError {
    /// A size, window or stride argument is neither an integer nor a pair of integers
    InvalidArgumentType {
        /// The offending argument as provided
        value: String,
    },

    /// A sequence argument does not have exactly two elements
    InvalidShapeLength {
        /// Number of elements that were provided
        length: usize,
    },

    /// The array argument does not have the required number of axes
    InvalidRank {
        /// Name of the array argument
        argument: &'static str,
        /// Required number of axes
        expected: usize,
        /// Provided shape
        shape: Vec<usize>,
    },

    /// A stride component exceeds the matching window component
    StrideExceedsWindow {
        /// Normalized stride (height, width)
        stride: (usize, usize),
        /// Normalized window size (height, width)
        window_size: (usize, usize),
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Array shape disagrees with the geometry implied by the parameters
    ShapeMismatch {
        /// Name of the array argument
        argument: &'static str,
        /// Shape implied by the parameters
        expected: Vec<usize>,
        /// Provided shape
        actual: Vec<usize>,
    },

    /// An output position inside the cropped region received no patch
    ///
    /// Only reachable when `size_after_padding`, `window_size` and `stride`
    /// describe a window grid that stops short of `original_size`.
    UncoveredPosition {
        /// Row within the padded grid
        row: usize,
        /// Column within the padded grid
        col: usize,
    },
}

impl fmt::Display for PatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgumentType { value } => {
                write!(
                    f,
                    "Invalid input type, expected an integer or a pair of integers. Got: '{value}'"
                )
            }
            Self::InvalidShapeLength { length } => {
                write!(
                    f,
                    "Invalid input shape, expected a pair of length 2. Got length {length}"
                )
            }
            Self::InvalidRank {
                argument,
                expected,
                shape,
            } => {
                write!(
                    f,
                    "Invalid rank for '{argument}': expected {expected} axes, got shape {shape:?}"
                )
            }
            Self::StrideExceedsWindow {
                stride,
                window_size,
            } => {
                write!(
                    f,
                    "Stride {}x{} must be less than or equal to window size {}x{}",
                    stride.0, stride.1, window_size.0, window_size.1
                )
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::ShapeMismatch {
                argument,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "Shape mismatch for '{argument}': expected {expected:?}, got {actual:?}"
                )
            }
            Self::UncoveredPosition { row, col } => {
                write!(f, "Position ({row}, {col}) is not covered by any patch")
            }
        }
    }
}

impl std::error::Error for PatchError {}

/// Convenience type alias for patch results
pub type Result<T> = std::result::Result<T, PatchError>;

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl fmt::Debug,
    reason: &impl ToString,
) -> PatchError {
    PatchError::InvalidParameter {
        parameter,
        value: format!("{value:?}"),
        reason: reason.to_string(),
    }
}

/// Create a shape mismatch error
pub fn shape_mismatch(argument: &'static str, expected: &[usize], actual: &[usize]) -> PatchError {
    PatchError::ShapeMismatch {
        argument,
        expected: expected.to_vec(),
        actual: actual.to_vec(),
    }
}

/// Create a rank error from an array shape
pub fn invalid_rank(argument: &'static str, expected: usize, shape: &[usize]) -> PatchError {
    PatchError::InvalidRank {
        argument,
        expected,
        shape: shape.to_vec(),
    }
}
