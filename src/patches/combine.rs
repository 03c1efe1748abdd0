//! Reassembly of patches into a dense array with overlap averaging
//!
//! Patches are scatter-added back onto the padded grid, a second
//! accumulation counts how many patches landed on each pixel, and the sum
//! is divided by that count. Overlapping contributions are therefore
//! averaged rather than double counted. The result is finally cropped to
//! the pre-padding size.

use ndarray::{Array2, Array4, ArrayBase, ArrayView5, Axis, Data, Dimension, Ix5, Zip, s};
use num_traits::{Float, NumAssign};

use crate::configuration::PATCH_RANK;
use crate::error::{PatchError, Result, invalid_parameter, invalid_rank, shape_mismatch};
use crate::shape::ShapeArg;
use crate::spatial::windows::{PatchGeometry, WindowGrid, validate_positive, validate_stride};

/// Reassemble `(batch, num_patches, channel, window_h, window_w)` patches
///
/// `size_after_padding` is the spatial size the patches were cut from and
/// `original_size` the size to crop back to. Patches must be in the raster
/// order produced by [`extract_tensor_patches`](super::extract_tensor_patches).
///
/// # Errors
///
/// - [`PatchError::InvalidRank`] if `patches` is not rank 5
/// - [`PatchError::InvalidShapeLength`] if a pair argument does not have two elements
/// - [`PatchError::StrideExceedsWindow`] if `stride > window_size` on either axis
/// - [`PatchError::InvalidParameter`] for zero components, a window larger than
///   the padded size, or an original size larger than the padded size
/// - [`PatchError::ShapeMismatch`] if the patch shape or count disagrees with the
///   window grid
/// - [`PatchError::UncoveredPosition`] if the window grid does not reach every
///   position of `original_size`
pub fn combine_tensor_patches<A, S, D>(
    patches: &ArrayBase<S, D>,
    original_size: impl Into<ShapeArg>,
    size_after_padding: impl Into<ShapeArg>,
    window_size: impl Into<ShapeArg>,
    stride: impl Into<ShapeArg>,
) -> Result<Array4<A>>
where
    A: Float + NumAssign,
    S: Data<Elem = A>,
    D: Dimension,
{
    if patches.ndim() != PATCH_RANK {
        return Err(invalid_rank("patches", PATCH_RANK, patches.shape()));
    }

    let original_size = original_size.into().to_pair()?;
    let size_after_padding = size_after_padding.into().to_pair()?;
    let window_size = window_size.into().to_pair()?;
    let stride = stride.into().to_pair()?;

    let grid = WindowGrid::new(size_after_padding, window_size, stride)?;
    let geometry = PatchGeometry {
        original_size,
        padded_size: size_after_padding,
        grid,
    };

    combine_patches_with_geometry(patches, &geometry)
}

/// Reassemble patches using geometry reported by extraction
///
/// # Errors
///
/// Same conditions as [`combine_tensor_patches`]
pub fn combine_patches_with_geometry<A, S, D>(
    patches: &ArrayBase<S, D>,
    geometry: &PatchGeometry,
) -> Result<Array4<A>>
where
    A: Float + NumAssign,
    S: Data<Elem = A>,
    D: Dimension,
{
    if patches.ndim() != PATCH_RANK {
        return Err(invalid_rank("patches", PATCH_RANK, patches.shape()));
    }

    validate_geometry(geometry)?;

    let patches = patches
        .view()
        .into_dimensionality::<Ix5>()
        .map_err(|err| invalid_parameter("patches", &patches.shape(), &err))?;

    let (batch, num_patches, channels, patch_h, patch_w) = patches.dim();
    let grid = &geometry.grid;
    let expected = [
        batch,
        grid.count(),
        channels,
        grid.window_size.0,
        grid.window_size.1,
    ];
    if num_patches != grid.count() || (patch_h, patch_w) != grid.window_size {
        return Err(shape_mismatch("patches", &expected, patches.shape()));
    }

    if let Some((row, col)) = grid.first_uncovered(geometry.original_size) {
        return Err(PatchError::UncoveredPosition { row, col });
    }

    tracing::debug!(
        batch,
        channels,
        num_patches,
        original = ?geometry.original_size,
        padded = ?geometry.padded_size,
        window = ?grid.window_size,
        stride = ?grid.stride,
        "combining patches"
    );

    let (summed, counts) = fold(&patches, geometry);
    let averaged = average(summed, &counts);

    let (height, width) = geometry.original_size;
    Ok(averaged.slice_move(s![.., .., ..height, ..width]))
}

/// Check that a geometry describes windows inside the padded grid
///
/// Geometry built by hand may disagree with itself; every slice taken while
/// folding relies on these bounds.
fn validate_geometry(geometry: &PatchGeometry) -> Result<()> {
    let PatchGeometry {
        original_size,
        padded_size,
        grid,
    } = *geometry;

    validate_positive("original_size", original_size)?;
    validate_positive("size_after_padding", padded_size)?;
    validate_positive("window_size", grid.window_size)?;
    validate_positive("stride", grid.stride)?;
    validate_stride(grid.stride, grid.window_size)?;

    if original_size.0 > padded_size.0 || original_size.1 > padded_size.1 {
        return Err(invalid_parameter(
            "original_size",
            &original_size,
            &format!(
                "exceeds size_after_padding {}x{}",
                padded_size.0, padded_size.1
            ),
        ));
    }

    let covered = grid.covered_extent();
    if covered.0 > padded_size.0 || covered.1 > padded_size.1 {
        return Err(invalid_parameter(
            "geometry",
            &grid,
            &format!(
                "windows reach {}x{}, beyond size_after_padding {}x{}",
                covered.0, covered.1, padded_size.0, padded_size.1
            ),
        ));
    }

    Ok(())
}

/// Scatter-add every patch onto the padded grid
///
/// Returns the accumulated sums and, per pixel, the number of patches that
/// contributed. Counts are identical across batch and channel so they are
/// kept as a single plane.
fn fold<A>(patches: &ArrayView5<'_, A>, geometry: &PatchGeometry) -> (Array4<A>, Array2<A>)
where
    A: Float + NumAssign,
{
    let (batch, _, channels, _, _) = patches.dim();
    let (height, width) = geometry.padded_size;
    let grid = &geometry.grid;

    let mut summed = Array4::<A>::zeros((batch, channels, height, width));
    let mut counts = Array2::<A>::zeros((height, width));

    for (patch, origin) in patches.axis_iter(Axis(1)).zip(grid.origins()) {
        let (rows, cols) = grid.spans(origin);

        let mut region = summed.slice_mut(s![.., .., rows.clone(), cols.clone()]);
        region += &patch;

        counts
            .slice_mut(s![rows, cols])
            .mapv_inplace(|count| count + A::one());
    }

    tracing::trace!(shape = ?summed.shape(), "scatter accumulation complete");
    (summed, counts)
}

/// Divide accumulated sums by their contribution counts
///
/// Pixels no patch reached keep their zero sum instead of becoming NaN.
fn average<A>(mut summed: Array4<A>, counts: &Array2<A>) -> Array4<A>
where
    A: Float + NumAssign,
{
    for mut plane in summed.outer_iter_mut() {
        for mut channel in plane.outer_iter_mut() {
            Zip::from(&mut channel).and(counts).for_each(|value, &count| {
                if count > A::zero() {
                    *value /= count;
                }
            });
        }
    }
    summed
}
