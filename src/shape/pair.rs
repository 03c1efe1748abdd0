//! Normalization of scalar-or-pair shape arguments
//!
//! Window sizes, strides and spatial sizes may be given either as a single
//! integer (same value on both axes) or as an ordered `(height, width)` pair.
//! Every transform funnels its shape arguments through [`normalize_pair`]
//! before doing any geometry.

use std::str::FromStr;

use crate::error::{PatchError, Result};

/// A shape argument before normalization
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShapeArg {
    /// Same extent on both axes
    Scalar(usize),
    /// Explicit per-axis extents; must hold exactly two values to normalize
    Sequence(Vec<usize>),
}

impl ShapeArg {
    /// Resolve to a `(height, width)` pair
    ///
    /// # Errors
    ///
    /// Returns [`PatchError::InvalidShapeLength`] if a sequence does not
    /// have exactly two elements
    pub fn to_pair(&self) -> Result<(usize, usize)> {
        match self {
            Self::Scalar(value) => Ok((*value, *value)),
            Self::Sequence(values) => match values.as_slice() {
                [height, width] => Ok((*height, *width)),
                other => Err(PatchError::InvalidShapeLength {
                    length: other.len(),
                }),
            },
        }
    }
}

/// Normalize a scalar or pair into a `(height, width)` tuple
///
/// # Errors
///
/// Returns [`PatchError::InvalidShapeLength`] if a sequence does not have
/// exactly two elements
pub fn normalize_pair(arg: impl Into<ShapeArg>) -> Result<(usize, usize)> {
    arg.into().to_pair()
}

impl From<usize> for ShapeArg {
    fn from(value: usize) -> Self {
        Self::Scalar(value)
    }
}

impl From<(usize, usize)> for ShapeArg {
    fn from((height, width): (usize, usize)) -> Self {
        Self::Sequence(vec![height, width])
    }
}

impl<const N: usize> From<[usize; N]> for ShapeArg {
    fn from(values: [usize; N]) -> Self {
        Self::Sequence(values.to_vec())
    }
}

impl From<&[usize]> for ShapeArg {
    fn from(values: &[usize]) -> Self {
        Self::Sequence(values.to_vec())
    }
}

impl From<Vec<usize>> for ShapeArg {
    fn from(values: Vec<usize>) -> Self {
        Self::Sequence(values)
    }
}

impl From<&Self> for ShapeArg {
    fn from(arg: &Self) -> Self {
        arg.clone()
    }
}

/// Parses `"5"`, `"3x4"`, `"3,4"`, `"(3, 4)"` or `"[3, 4]"`
///
/// Bracketed input always yields a sequence, so `"(5)"` is a one-element
/// sequence rather than a scalar.
impl FromStr for ShapeArg {
    type Err = PatchError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || PatchError::InvalidArgumentType {
            value: s.to_string(),
        };

        let trimmed = s.trim();
        let (inner, bracketed) = match trimmed
            .strip_prefix('(')
            .and_then(|rest| rest.strip_suffix(')'))
            .or_else(|| {
                trimmed
                    .strip_prefix('[')
                    .and_then(|rest| rest.strip_suffix(']'))
            }) {
            Some(inner) => (inner.trim(), true),
            None => (trimmed, false),
        };

        if inner.is_empty() {
            return if bracketed {
                Ok(Self::Sequence(Vec::new()))
            } else {
                Err(invalid())
            };
        }

        let values = inner
            .split([',', 'x', 'X'])
            .map(|token| token.trim().parse::<usize>().ok().ok_or_else(invalid))
            .collect::<Result<Vec<_>>>()?;

        match values.as_slice() {
            [value] if !bracketed => Ok(Self::Scalar(*value)),
            _ => Ok(Self::Sequence(values)),
        }
    }
}
