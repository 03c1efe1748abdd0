//! Tests for transform constants and the reusable parameter set

#[cfg(test)]
mod tests {
    use ndarray::{Array3, Array4};
    use tensor_patches::configuration::{DEFAULT_STRIDE, INPUT_RANK, PATCH_RANK};
    use tensor_patches::{PaddingPolicy, PatchConfig, PatchError, ShapeArg};

    #[test]
    fn test_constants() {
        assert_eq!(DEFAULT_STRIDE, 1);
        assert_eq!(INPUT_RANK, 4);
        assert_eq!(PATCH_RANK, 5);
    }

    // Tests defaults of unit stride and minimal padding
    // Verified by defaulting to FullWindow
    #[test]
    fn test_new_uses_defaults() {
        let config = PatchConfig::new(4_usize);

        assert_eq!(config.window_size(), &ShapeArg::Scalar(4));
        assert_eq!(config.stride(), &ShapeArg::Scalar(DEFAULT_STRIDE));
        assert_eq!(config.padding(), PaddingPolicy::Minimal);
        assert_eq!(PaddingPolicy::default(), PaddingPolicy::Minimal);
    }

    #[test]
    fn test_builder_methods() {
        let config = PatchConfig::new((4_usize, 6_usize))
            .with_stride(2_usize)
            .with_padding(PaddingPolicy::FullWindow);

        assert_eq!(config.window_size(), &ShapeArg::Sequence(vec![4, 6]));
        assert_eq!(config.stride(), &ShapeArg::Scalar(2));
        assert_eq!(config.padding(), PaddingPolicy::FullWindow);
    }

    #[test]
    fn test_geometry() -> Result<(), PatchError> {
        let geometry = PatchConfig::new(4_usize)
            .with_stride(4_usize)
            .geometry((5_usize, 8_usize))?;

        assert_eq!(geometry.original_size, (5, 8));
        assert_eq!(geometry.padded_size, (8, 8));
        assert_eq!(geometry.num_patches(), 4);
        Ok(())
    }

    #[test]
    fn test_geometry_rejects_invalid_configuration() {
        let config = PatchConfig::new(4_usize).with_stride(6_usize);
        assert!(matches!(
            config.geometry(5_usize),
            Err(PatchError::StrideExceedsWindow { .. })
        ));

        let config = PatchConfig::new([4_usize, 4, 4]);
        assert_eq!(
            config.geometry(5_usize),
            Err(PatchError::InvalidShapeLength { length: 3 })
        );
    }

    // Tests extract and combine agree on geometry for a full round trip
    // Verified by ignoring the configured padding policy in combine
    #[test]
    fn test_extract_combine_round_trip() -> Result<(), PatchError> {
        let input = Array4::from_shape_fn((1, 2, 6, 10), |(_, c, h, w)| {
            (c * 60 + h * 10 + w) as f32
        });

        for padding in [PaddingPolicy::Minimal, PaddingPolicy::FullWindow] {
            let config = PatchConfig::new((3_usize, 4_usize))
                .with_stride((2_usize, 3_usize))
                .with_padding(padding);

            let (patches, geometry) = config.extract(&input)?;
            assert_eq!(
                Ok(geometry),
                config.geometry((6_usize, 10_usize)),
                "Extraction and configuration geometry should agree"
            );

            let restored = config
                .combine(&patches, (6_usize, 10_usize))?;

            assert_eq!(restored.dim(), input.dim());
            for (a, b) in restored.iter().zip(input.iter()) {
                assert!((a - b).abs() < 1e-4);
            }
        }
        Ok(())
    }

    #[test]
    fn test_extract_rejects_wrong_rank() {
        let input = Array3::<f32>::zeros((3, 5, 5));

        assert!(matches!(
            PatchConfig::new(2_usize).extract(&input),
            Err(PatchError::InvalidRank { expected: 4, .. })
        ));
    }
}
