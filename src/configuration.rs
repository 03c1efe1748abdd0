//! Transform constants and reusable parameter sets

use ndarray::{Array4, Array5, ArrayBase, Data, Dimension};
use num_traits::{Float, NumAssign};

use crate::error::Result;
use crate::patches::{combine_patches_with_geometry, extract_patches_with_geometry};
use crate::shape::ShapeArg;
use crate::spatial::padding::calculate_padding;
use crate::spatial::windows::{PatchGeometry, WindowGrid, validate_positive, validate_stride};

/// Stride used when none is given
pub const DEFAULT_STRIDE: usize = 1;

/// Axes of a dense (batch, channel, height, width) array
pub const INPUT_RANK: usize = 4;

/// Axes of a (batch, num_patches, channel, height, width) patch collection
pub const PATCH_RANK: usize = 5;

/// How much padding extraction adds when an axis already divides evenly
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaddingPolicy {
    /// No padding on axes that are already a multiple of the window
    #[default]
    Minimal,
    /// Always pad by `window - size % window`, adding a whole extra window
    /// when the axis already divides evenly
    FullWindow,
}

/// Window, stride and padding policy shared by a matching extract/combine pair
///
/// ```
/// use ndarray::Array4;
/// use tensor_patches::PatchConfig;
///
/// let image = Array4::<f32>::ones((1, 3, 5, 5));
/// let config = PatchConfig::new(4_usize).with_stride(2_usize);
///
/// let (patches, _) = config.extract(&image)?;
/// let restored = config.combine(&patches, (5_usize, 5_usize))?;
/// assert_eq!(restored.dim(), (1, 3, 5, 5));
/// # Ok::<(), tensor_patches::PatchError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatchConfig {
    window_size: ShapeArg,
    stride: ShapeArg,
    padding: PaddingPolicy,
}

impl PatchConfig {
    /// Configuration with the given window, unit stride and minimal padding
    pub fn new(window_size: impl Into<ShapeArg>) -> Self {
        Self {
            window_size: window_size.into(),
            stride: ShapeArg::Scalar(DEFAULT_STRIDE),
            padding: PaddingPolicy::default(),
        }
    }

    /// Set the step between windows
    #[must_use]
    pub fn with_stride(mut self, stride: impl Into<ShapeArg>) -> Self {
        self.stride = stride.into();
        self
    }

    /// Set the padding policy
    #[must_use]
    pub const fn with_padding(mut self, padding: PaddingPolicy) -> Self {
        self.padding = padding;
        self
    }

    /// Window size as configured
    pub const fn window_size(&self) -> &ShapeArg {
        &self.window_size
    }

    /// Stride as configured
    pub const fn stride(&self) -> &ShapeArg {
        &self.stride
    }

    /// Padding policy
    pub const fn padding(&self) -> PaddingPolicy {
        self.padding
    }

    /// Geometry for an array of spatial size `original_size`
    ///
    /// # Errors
    ///
    /// Returns an error if any parameter fails to normalize or validate
    pub fn geometry(&self, original_size: impl Into<ShapeArg>) -> Result<PatchGeometry> {
        let original_size = original_size.into().to_pair()?;
        let window_size = self.window_size.to_pair()?;
        let stride = self.stride.to_pair()?;
        validate_positive("original_size", original_size)?;
        validate_positive("window_size", window_size)?;
        validate_positive("stride", stride)?;
        validate_stride(stride, window_size)?;

        let info = calculate_padding(original_size, window_size, stride, self.padding);
        Ok(PatchGeometry {
            original_size,
            padded_size: info.padded_size,
            grid: WindowGrid::new(info.padded_size, window_size, stride)?,
        })
    }

    /// Extract patches from a (batch, channel, height, width) array
    ///
    /// # Errors
    ///
    /// See [`extract_tensor_patches`](crate::extract_tensor_patches)
    pub fn extract<A, S, D>(&self, input: &ArrayBase<S, D>) -> Result<(Array5<A>, PatchGeometry)>
    where
        A: Clone,
        S: Data<Elem = A>,
        D: Dimension,
    {
        extract_patches_with_geometry(input, &self.window_size, &self.stride, self.padding)
    }

    /// Reassemble patches extracted with this configuration
    ///
    /// # Errors
    ///
    /// See [`combine_tensor_patches`](crate::combine_tensor_patches)
    pub fn combine<A, S, D>(
        &self,
        patches: &ArrayBase<S, D>,
        original_size: impl Into<ShapeArg>,
    ) -> Result<Array4<A>>
    where
        A: Float + NumAssign,
        S: Data<Elem = A>,
        D: Dimension,
    {
        let geometry = self.geometry(original_size)?;
        combine_patches_with_geometry(patches, &geometry)
    }
}
