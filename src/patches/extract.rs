//! Sliding-window patch extraction from (batch, channel, height, width) arrays

use ndarray::{Array4, Array5, ArrayBase, ArrayView4, Axis, Data, Dimension, Ix4, s};

use crate::configuration::{INPUT_RANK, PaddingPolicy};
use crate::error::{Result, invalid_parameter, invalid_rank};
use crate::shape::ShapeArg;
use crate::spatial::padding::{calculate_padding, reflect_pad_4d};
use crate::spatial::windows::{PatchGeometry, WindowGrid, validate_positive, validate_stride};

/// Split an array into patches of `window_size`, stepping by `stride`
///
/// The input is reflect-padded on the bottom and right so its spatial
/// extent divides evenly into windows, then every window is copied out in
/// raster order. The result has shape
/// `(batch, num_patches, channel, window_h, window_w)`.
///
/// Padding follows [`PaddingPolicy::Minimal`]; use
/// [`extract_patches_with_geometry`] to choose the policy and keep the
/// geometry needed to invert the extraction.
///
/// # Errors
///
/// - [`PatchError::InvalidRank`](crate::PatchError::InvalidRank) if `input` is not rank 4
/// - [`PatchError::InvalidShapeLength`](crate::PatchError::InvalidShapeLength) if a
///   pair argument does not have two elements
/// - [`PatchError::StrideExceedsWindow`](crate::PatchError::StrideExceedsWindow) if
///   `stride > window_size` on either axis
/// - [`PatchError::InvalidParameter`](crate::PatchError::InvalidParameter) for zero
///   window or stride components or an empty spatial extent
pub fn extract_tensor_patches<A, S, D>(
    input: &ArrayBase<S, D>,
    window_size: impl Into<ShapeArg>,
    stride: impl Into<ShapeArg>,
) -> Result<Array5<A>>
where
    A: Clone,
    S: Data<Elem = A>,
    D: Dimension,
{
    extract_patches_with_geometry(input, window_size, stride, PaddingPolicy::Minimal)
        .map(|(patches, _)| patches)
}

/// Split an array into patches and report the geometry used
///
/// # Errors
///
/// Same conditions as [`extract_tensor_patches`]
pub fn extract_patches_with_geometry<A, S, D>(
    input: &ArrayBase<S, D>,
    window_size: impl Into<ShapeArg>,
    stride: impl Into<ShapeArg>,
    policy: PaddingPolicy,
) -> Result<(Array5<A>, PatchGeometry)>
where
    A: Clone,
    S: Data<Elem = A>,
    D: Dimension,
{
    if input.ndim() != INPUT_RANK {
        return Err(invalid_rank("input", INPUT_RANK, input.shape()));
    }

    let window_size = window_size.into().to_pair()?;
    let stride = stride.into().to_pair()?;

    validate_positive("window_size", window_size)?;
    validate_positive("stride", stride)?;
    validate_stride(stride, window_size)?;

    let input = input
        .view()
        .into_dimensionality::<Ix4>()
        .map_err(|err| invalid_parameter("input", &input.shape(), &err))?;

    let (batch, channels, height, width) = input.dim();
    validate_positive("input spatial size", (height, width))?;

    let info = calculate_padding((height, width), window_size, stride, policy);
    let grid = WindowGrid::new(info.padded_size, window_size, stride)?;
    let geometry = PatchGeometry {
        original_size: (height, width),
        padded_size: info.padded_size,
        grid,
    };

    tracing::debug!(
        batch,
        channels,
        original = ?geometry.original_size,
        padded = ?geometry.padded_size,
        window = ?window_size,
        stride = ?stride,
        num_patches = grid.count(),
        "extracting patches"
    );

    let padded = reflect_pad_4d(&input, &info);
    tracing::trace!(
        pad_bottom = info.pad_bottom,
        pad_right = info.pad_right,
        "reflect padding applied"
    );

    let patches = stack_windows(&padded, &grid)?;
    Ok((patches, geometry))
}

/// Copy every window of `padded` into a new `num_patches` axis
fn stack_windows<A: Clone>(padded: &Array4<A>, grid: &WindowGrid) -> Result<Array5<A>> {
    let windows: Vec<ArrayView4<'_, A>> = grid
        .origins()
        .map(|origin| {
            let (rows, cols) = grid.spans(origin);
            padded.slice(s![.., .., rows, cols])
        })
        .collect();

    ndarray::stack(Axis(1), &windows)
        .map_err(|err| invalid_parameter("window_size", &grid.window_size, &err))
}
