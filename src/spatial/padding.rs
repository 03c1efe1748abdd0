//! Padding arithmetic and reflective boundary extension
//!
//! Extraction pads only the bottom and right edges so the spatial extent
//! divides evenly into windows. New cells mirror the existing border rather
//! than being zero-filled or replicated, so padded content reads as a
//! plausible continuation of the image.

use ndarray::{Array4, ArrayView4, Axis};

use crate::configuration::PaddingPolicy;
use crate::error::Result;
use crate::shape::ShapeArg;
use crate::spatial::windows::{covered_extent, validate_positive, validate_stride};

/// Padding required to tile an array with a given window and stride
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaddingInfo {
    /// Rows appended below the array
    pub pad_bottom: usize,
    /// Columns appended to the right of the array
    pub pad_right: usize,
    /// Spatial size after padding (height, width)
    pub padded_size: (usize, usize),
    /// Whether any padding is applied at all
    pub needs_padding: bool,
}

/// Padding needed along one axis to reach a multiple of `window`
pub const fn axis_padding(size: usize, window: usize, policy: PaddingPolicy) -> usize {
    if window == 0 {
        return 0;
    }
    let remainder = size % window;
    match policy {
        PaddingPolicy::Minimal if remainder == 0 => 0,
        PaddingPolicy::Minimal | PaddingPolicy::FullWindow => window - remainder,
    }
}

/// Padded length of one axis
///
/// Starts from the next multiple of `window` and grows by whole windows
/// until the last window position reaches `size`. Growth only happens when
/// `stride` does not divide the distance between first and last window.
pub const fn padded_extent(
    size: usize,
    window: usize,
    stride: usize,
    policy: PaddingPolicy,
) -> usize {
    let mut padded = size + axis_padding(size, window, policy);
    if window == 0 || stride == 0 || stride > window {
        return padded;
    }
    while covered_extent(padded, window, stride) < size {
        padded += window;
    }
    padded
}

/// Calculate padding for an array of spatial size `original`
///
/// Callers validate `window_size` and `stride` first; degenerate values
/// produce no growth beyond the divisibility padding.
pub const fn calculate_padding(
    original: (usize, usize),
    window_size: (usize, usize),
    stride: (usize, usize),
    policy: PaddingPolicy,
) -> PaddingInfo {
    let padded_size = (
        padded_extent(original.0, window_size.0, stride.0, policy),
        padded_extent(original.1, window_size.1, stride.1, policy),
    );
    let pad_bottom = padded_size.0 - original.0;
    let pad_right = padded_size.1 - original.1;

    PaddingInfo {
        pad_bottom,
        pad_right,
        padded_size,
        needs_padding: pad_bottom + pad_right > 0,
    }
}

/// Spatial size an array of `original_size` has after extraction padding
///
/// This is the `size_after_padding` to hand to the combiner.
///
/// # Errors
///
/// Returns an error if any argument fails to normalize, has a zero
/// component, or if the stride exceeds the window size
pub fn padded_size(
    original_size: impl Into<ShapeArg>,
    window_size: impl Into<ShapeArg>,
    stride: impl Into<ShapeArg>,
    policy: PaddingPolicy,
) -> Result<(usize, usize)> {
    let original_size = original_size.into().to_pair()?;
    let window_size = window_size.into().to_pair()?;
    let stride = stride.into().to_pair()?;

    validate_positive("original_size", original_size)?;
    validate_positive("window_size", window_size)?;
    validate_positive("stride", stride)?;
    validate_stride(stride, window_size)?;

    Ok(calculate_padding(original_size, window_size, stride, policy).padded_size)
}

/// Mirror an out-of-range index back into `0..len`
///
/// Reflection excludes the edge itself (`a b c d | c b a`). Indices past
/// one full reflection keep bouncing between the two edges with period
/// `2 * (len - 1)`; a length-1 axis always maps to 0.
pub const fn reflect_index(index: usize, len: usize) -> usize {
    if index < len {
        return index;
    }
    if len <= 1 {
        return 0;
    }
    let period = 2 * (len - 1);
    let folded = index % period;
    if folded < len {
        folded
    } else {
        period - folded
    }
}

/// Source index for every position of a padded axis
fn reflected_indices(len: usize, padded: usize) -> Vec<usize> {
    (0..padded).map(|index| reflect_index(index, len)).collect()
}

/// Reflect-pad the bottom and right edges of a (batch, channel, height, width) array
///
/// Always returns a new array; the source view is never written.
pub fn reflect_pad_4d<A: Clone>(array: &ArrayView4<'_, A>, info: &PaddingInfo) -> Array4<A> {
    if !info.needs_padding {
        return array.to_owned();
    }

    let (_, _, rows, cols) = array.dim();
    let row_sources = reflected_indices(rows, info.padded_size.0);
    let col_sources = reflected_indices(cols, info.padded_size.1);

    array
        .select(Axis(2), &row_sources)
        .select(Axis(3), &col_sources)
}
