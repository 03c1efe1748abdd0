//! Sliding-window grid geometry shared by extraction and recombination
//!
//! Both transforms must agree on where every patch sits inside the padded
//! array. [`WindowGrid`] owns that bookkeeping: how many windows fit along
//! each axis, their raster ordering, and how far the grid actually reaches.

use std::ops::Range;

use crate::error::{PatchError, Result, invalid_parameter};

/// Number of window positions along one axis
///
/// Standard sliding-window count `(size - window) / stride + 1`; zero when
/// the window does not fit or the stride is zero.
pub const fn windows_along(size: usize, window: usize, stride: usize) -> usize {
    if window > size || stride == 0 {
        0
    } else {
        (size - window) / stride + 1
    }
}

/// Extent reached by the last window along one axis
///
/// Equals `size` only when `stride` divides `size - window`.
pub const fn covered_extent(size: usize, window: usize, stride: usize) -> usize {
    let count = windows_along(size, window, stride);
    if count == 0 {
        0
    } else {
        (count - 1) * stride + window
    }
}

/// Reject pairs with a zero component
///
/// # Errors
///
/// Returns [`PatchError::InvalidParameter`] naming `parameter` if either
/// component is zero
pub fn validate_positive(parameter: &'static str, pair: (usize, usize)) -> Result<()> {
    if pair.0 == 0 || pair.1 == 0 {
        return Err(invalid_parameter(
            parameter,
            &pair,
            &"both components must be positive",
        ));
    }
    Ok(())
}

/// Enforce `stride <= window_size` on both axes
///
/// # Errors
///
/// Returns [`PatchError::StrideExceedsWindow`] if either stride component
/// is larger than the matching window component
pub fn validate_stride(stride: (usize, usize), window_size: (usize, usize)) -> Result<()> {
    if stride.0 > window_size.0 || stride.1 > window_size.1 {
        return Err(PatchError::StrideExceedsWindow {
            stride,
            window_size,
        });
    }
    Ok(())
}

/// Layout of windows over a padded spatial extent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowGrid {
    /// Window positions along the height axis
    pub rows: usize,
    /// Window positions along the width axis
    pub cols: usize,
    /// Window extent (height, width)
    pub window_size: (usize, usize),
    /// Step between window origins (height, width)
    pub stride: (usize, usize),
}

impl WindowGrid {
    /// Lay out windows over an extent of `size`
    ///
    /// # Errors
    ///
    /// Returns an error if any component is zero, if the stride exceeds
    /// the window, or if the window does not fit inside `size`
    pub fn new(
        size: (usize, usize),
        window_size: (usize, usize),
        stride: (usize, usize),
    ) -> Result<Self> {
        validate_positive("window_size", window_size)?;
        validate_positive("stride", stride)?;
        validate_stride(stride, window_size)?;

        if window_size.0 > size.0 || window_size.1 > size.1 {
            return Err(invalid_parameter(
                "window_size",
                &window_size,
                &format!("window does not fit inside {}x{}", size.0, size.1),
            ));
        }

        Ok(Self {
            rows: windows_along(size.0, window_size.0, stride.0),
            cols: windows_along(size.1, window_size.1, stride.1),
            window_size,
            stride,
        })
    }

    /// Total number of windows
    pub const fn count(&self) -> usize {
        self.rows * self.cols
    }

    /// Window origins in raster order: top-to-bottom, then left-to-right
    pub fn origins(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.rows).flat_map(move |row| {
            (0..self.cols).map(move |col| (row * self.stride.0, col * self.stride.1))
        })
    }

    /// Row and column ranges covered by a window starting at `origin`
    pub const fn spans(&self, origin: (usize, usize)) -> (Range<usize>, Range<usize>) {
        (
            origin.0..origin.0 + self.window_size.0,
            origin.1..origin.1 + self.window_size.1,
        )
    }

    /// Extent reached by the grid (height, width)
    pub const fn covered_extent(&self) -> (usize, usize) {
        let height = if self.rows == 0 {
            0
        } else {
            (self.rows - 1)
                .saturating_mul(self.stride.0)
                .saturating_add(self.window_size.0)
        };
        let width = if self.cols == 0 {
            0
        } else {
            (self.cols - 1)
                .saturating_mul(self.stride.1)
                .saturating_add(self.window_size.1)
        };
        (height, width)
    }

    /// First position inside `extent` that no window reaches, if any
    ///
    /// With `stride <= window_size` the grid has no interior gaps, so only
    /// the bottom rows and right columns can be left uncovered.
    pub const fn first_uncovered(&self, extent: (usize, usize)) -> Option<(usize, usize)> {
        let covered = self.covered_extent();
        if covered.0 < extent.0 {
            Some((covered.0, 0))
        } else if covered.1 < extent.1 {
            Some((0, covered.1))
        } else {
            None
        }
    }

}

/// Complete geometry of one extraction, enough to invert it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatchGeometry {
    /// Spatial size before padding (height, width)
    pub original_size: (usize, usize),
    /// Spatial size after reflective padding (height, width)
    pub padded_size: (usize, usize),
    /// Window layout over the padded extent
    pub grid: WindowGrid,
}

impl PatchGeometry {
    /// Window extent (height, width)
    pub const fn window_size(&self) -> (usize, usize) {
        self.grid.window_size
    }

    /// Step between window origins (height, width)
    pub const fn stride(&self) -> (usize, usize) {
        self.grid.stride
    }

    /// Number of patches along the `num_patches` axis
    pub const fn num_patches(&self) -> usize {
        self.grid.count()
    }
}
