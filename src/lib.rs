//! Patch extraction and overlap-averaging recombination for 4D arrays
//!
//! Splits (batch, channel, height, width) arrays into overlapping or
//! non-overlapping rectangular patches after reflect-padding the bottom and
//! right edges, and reassembles patch collections by summing contributions
//! onto the padded grid and dividing by per-pixel overlap counts. With
//! matching parameters the two transforms are inverses up to rounding.
//!
//! ```
//! use ndarray::Array4;
//! use tensor_patches::{PaddingPolicy, combine_tensor_patches, extract_tensor_patches, padded_size};
//!
//! let image = Array4::<f64>::from_shape_fn((2, 3, 7, 9), |(b, c, h, w)| {
//!     (b * 1000 + c * 100 + h * 10 + w) as f64
//! });
//!
//! let patches = extract_tensor_patches(&image, (4_usize, 4_usize), (2_usize, 3_usize))?;
//! let padded = padded_size((7_usize, 9_usize), 4_usize, (2_usize, 3_usize), PaddingPolicy::Minimal)?;
//! let restored = combine_tensor_patches(&patches, (7_usize, 9_usize), padded, 4_usize, (2_usize, 3_usize))?;
//!
//! assert_eq!(restored.dim(), image.dim());
//! # Ok::<(), tensor_patches::PatchError>(())
//! ```

/// Transform constants and reusable parameter sets
pub mod configuration;
/// Error taxonomy shared by every operation
pub mod error;
/// Patch extraction and recombination
pub mod patches;
/// Shape argument normalization
pub mod shape;
/// Padding and window grid geometry
pub mod spatial;

pub use configuration::{PaddingPolicy, PatchConfig};
pub use error::{PatchError, Result};
pub use patches::{
    combine_patches_with_geometry, combine_tensor_patches, extract_patches_with_geometry,
    extract_tensor_patches,
};
pub use shape::{ShapeArg, normalize_pair};
pub use spatial::{PatchGeometry, WindowGrid, padded_size};
