//! Tests for error message formatting and constructor helpers

#[cfg(test)]
mod tests {
    use tensor_patches::PatchError;
    use tensor_patches::error::{invalid_parameter, invalid_rank, shape_mismatch};

    // Tests the offending value appears in the message
    // Verified by omitting value from message
    #[test]
    fn test_invalid_argument_type_error() {
        let error = PatchError::InvalidArgumentType {
            value: "x".to_string(),
        };

        let message = error.to_string();
        assert!(message.contains("'x'"));
        assert!(message.contains("integer"));
    }

    #[test]
    fn test_invalid_shape_length_error() {
        let message = PatchError::InvalidShapeLength { length: 3 }.to_string();
        assert!(message.contains("length 2"));
        assert!(message.contains("length 3"));
    }

    // Tests rank error reports argument, expectation and actual shape
    // Verified by dropping shape from message
    #[test]
    fn test_invalid_rank_error() {
        let error = invalid_rank("input", 4, &[2, 3, 5]);

        assert_eq!(
            error,
            PatchError::InvalidRank {
                argument: "input",
                expected: 4,
                shape: vec![2, 3, 5],
            }
        );

        let message = error.to_string();
        assert!(message.contains("input"));
        assert!(message.contains("4 axes"));
        assert!(message.contains("[2, 3, 5]"));
    }

    #[test]
    fn test_stride_exceeds_window_error() {
        let error = PatchError::StrideExceedsWindow {
            stride: (5, 5),
            window_size: (4, 4),
        };

        let message = error.to_string();
        assert!(message.contains("5x5"));
        assert!(message.contains("4x4"));
    }

    // Tests InvalidParameter error contains all fields
    // Verified by omitting reason from message
    #[test]
    fn test_invalid_parameter_helper() {
        let error = invalid_parameter("window_size", &(0_usize, 3_usize), &"must be positive");

        let message = error.to_string();
        assert!(message.contains("window_size"));
        assert!(message.contains("(0, 3)"));
        assert!(message.contains("must be positive"));
    }

    #[test]
    fn test_shape_mismatch_helper() {
        let error = shape_mismatch("patches", &[1, 4, 1, 4, 4], &[1, 3, 1, 4, 4]);

        match &error {
            PatchError::ShapeMismatch {
                argument,
                expected,
                actual,
            } => {
                assert_eq!(*argument, "patches");
                assert_eq!(expected, &vec![1, 4, 1, 4, 4]);
                assert_eq!(actual, &vec![1, 3, 1, 4, 4]);
            }
            other => unreachable!("Expected ShapeMismatch, got {other:?}"),
        }
        assert!(error.to_string().contains("[1, 3, 1, 4, 4]"));
    }

    #[test]
    fn test_uncovered_position_error() {
        let message = PatchError::UncoveredPosition { row: 7, col: 0 }.to_string();
        assert!(message.contains("(7, 0)"));
    }

    // Tests errors are usable as trait objects
    #[test]
    fn test_error_trait_object() {
        let error: Box<dyn std::error::Error> = Box::new(PatchError::InvalidShapeLength { length: 1 });
        assert!(error.source().is_none());
        assert!(!error.to_string().is_empty());
    }
}
