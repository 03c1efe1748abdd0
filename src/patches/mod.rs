//! The two patch transforms

/// Reassembly with overlap averaging
pub mod combine;
/// Reflective padding and sliding-window extraction
pub mod extract;

pub use combine::{combine_patches_with_geometry, combine_tensor_patches};
pub use extract::{extract_patches_with_geometry, extract_tensor_patches};
