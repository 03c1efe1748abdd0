//! Shape argument handling shared by both transforms

/// Scalar-or-pair shape arguments and their normalization
pub mod pair;

pub use pair::{ShapeArg, normalize_pair};
