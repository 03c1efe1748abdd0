//! Tests for scalar-or-pair normalization and textual parsing

#[cfg(test)]
mod tests {
    use tensor_patches::{PatchError, ShapeArg, normalize_pair};

    // Tests scalar duplication onto both axes
    // Verified by returning (value, 1)
    #[test]
    fn test_scalar_is_duplicated() {
        assert_eq!(normalize_pair(5_usize), Ok((5, 5)));
    }

    #[test]
    fn test_pair_is_returned_unchanged() {
        assert_eq!(normalize_pair((3_usize, 4_usize)), Ok((3, 4)));
        assert_eq!(normalize_pair([3_usize, 4]), Ok((3, 4)));
        assert_eq!(normalize_pair(vec![3_usize, 4]), Ok((3, 4)));
    }

    // Tests sequences of the wrong length are rejected with their length
    // Verified by accepting the first two elements of longer sequences
    #[test]
    fn test_wrong_length_sequences_fail() {
        assert_eq!(
            normalize_pair([1_usize, 2, 3]),
            Err(PatchError::InvalidShapeLength { length: 3 })
        );
        assert_eq!(
            normalize_pair(vec![7_usize]),
            Err(PatchError::InvalidShapeLength { length: 1 })
        );
        assert_eq!(
            normalize_pair(Vec::<usize>::new()),
            Err(PatchError::InvalidShapeLength { length: 0 })
        );
    }

    #[test]
    fn test_slice_conversion() {
        let values: &[usize] = &[6, 2];
        assert_eq!(ShapeArg::from(values), ShapeArg::Sequence(vec![6, 2]));
    }

    // Tests the accepted textual forms
    #[test]
    fn test_parse_scalar_and_pairs() {
        assert_eq!("5".parse::<ShapeArg>(), Ok(ShapeArg::Scalar(5)));
        assert_eq!(" 5 ".parse::<ShapeArg>(), Ok(ShapeArg::Scalar(5)));
        assert_eq!("3x4".parse::<ShapeArg>(), Ok(ShapeArg::Sequence(vec![3, 4])));
        assert_eq!("3,4".parse::<ShapeArg>(), Ok(ShapeArg::Sequence(vec![3, 4])));
        assert_eq!("(3, 4)".parse::<ShapeArg>(), Ok(ShapeArg::Sequence(vec![3, 4])));
        assert_eq!("[3, 4]".parse::<ShapeArg>(), Ok(ShapeArg::Sequence(vec![3, 4])));
    }

    // Tests bracketed single values stay sequences and fail normalization
    // Verified by collapsing one-element sequences into scalars
    #[test]
    fn test_parse_bracketed_single_value_is_sequence() -> Result<(), PatchError> {
        let arg: ShapeArg = "(5)".parse()?;
        assert_eq!(arg, ShapeArg::Sequence(vec![5]));
        assert_eq!(
            arg.to_pair(),
            Err(PatchError::InvalidShapeLength { length: 1 })
        );

        let empty: ShapeArg = "()".parse()?;
        assert_eq!(
            empty.to_pair(),
            Err(PatchError::InvalidShapeLength { length: 0 })
        );
        Ok(())
    }

    // Tests non-integer input is a type error, not a length error
    // Verified by mapping parse failures to InvalidShapeLength
    #[test]
    fn test_parse_rejects_non_integers() {
        for text in ["x", "", "2.5", "-1", "3x", "(a, b)", "3;4"] {
            assert_eq!(
                text.parse::<ShapeArg>(),
                Err(PatchError::InvalidArgumentType {
                    value: text.to_string()
                }),
                "Expected type error for {text:?}"
            );
        }
    }

    #[test]
    fn test_parse_three_values_fails_normalization() -> Result<(), PatchError> {
        let arg: ShapeArg = "1,2,3".parse()?;
        assert_eq!(
            normalize_pair(arg),
            Err(PatchError::InvalidShapeLength { length: 3 })
        );
        Ok(())
    }
}
