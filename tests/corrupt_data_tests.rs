pub mod corrupt_data_tests {
    use ebml_stream::error::{DecoderError, ToolError};
    use ebml_stream::specs::{ids, MatroskaSchema};
    use ebml_stream::tags::TagPosition;
    use ebml_stream::TagDecoder;

    #[test]
    pub fn zero_byte_where_id_expected() {
        let mut decoder = TagDecoder::new(MatroskaSchema, &[]);
        decoder.push(&[0x42, 0x86, 0x81, 0x01, 0x00, 0x81, 0x01]);

        assert!(decoder.next().unwrap().is_ok());
        assert!(matches!(decoder.next(), Some(Err(DecoderError::CorruptedData(ToolError::MalformedVint(0))))));
        assert!(decoder.is_poisoned());
        assert!(decoder.next().is_none());
    }

    #[test]
    pub fn zero_byte_where_size_expected() {
        let mut decoder = TagDecoder::new(MatroskaSchema, &[]);
        let result = decoder.decode(&[0x42, 0x86, 0x00, 0x00]);
        assert!(matches!(result, Err(DecoderError::CorruptedData(ToolError::MalformedVint(0)))));
    }

    #[test]
    pub fn nothing_after_error() {
        let mut decoder = TagDecoder::new(MatroskaSchema, &[]);
        assert!(decoder.decode(&[0x00]).is_err());
        assert!(decoder.decode(&[0x42, 0x86, 0x81, 0x01]).unwrap().is_empty());
        assert!(decoder.finish().unwrap().is_empty());
    }

    #[test]
    pub fn oversized_integer() {
        let mut decoder = TagDecoder::new(MatroskaSchema, &[]);
        let result = decoder.decode(&[0xfb, 0x89, 0, 0, 0, 0, 0, 0, 0, 0, 0x01]);
        match result {
            Err(DecoderError::CorruptedTagData { tag_id, problem }) => {
                assert_eq!(ids::REFERENCE_BLOCK, tag_id);
                assert_eq!(ToolError::ReadSignedMismatch(vec![0, 0, 0, 0, 0, 0, 0, 0, 0x01]), problem);
            },
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    pub fn odd_integer_width_does_not_stop_the_stream() {
        let mut decoder = TagDecoder::new(MatroskaSchema, &[]);
        let tags = decoder.decode(&[
            0x1f, 0x43, 0xb6, 0x75, 0x8b,
                0xe7, 0x81, 0x00,
                0xfb, 0x83, 0xfe, 0x79, 0x60,
                0xec, 0x81, 0x00,
        ]).expect("Test shouldn't error");

        assert_eq!(5, tags.len());
        assert_eq!(Some(-100_000), tags[2].as_signed_int());
        assert_eq!(ids::VOID, tags[3].id);
        assert_eq!((ids::CLUSTER, TagPosition::End), (tags[4].id, tags[4].position));
        assert!(!decoder.is_poisoned());
    }

    #[test]
    pub fn bad_float_width() {
        let mut decoder = TagDecoder::new(MatroskaSchema, &[]);
        let result = decoder.decode(&[0x44, 0x89, 0x82, 0x40, 0x20]);
        assert!(matches!(result, Err(DecoderError::CorruptedTagData { tag_id: ids::DURATION, problem: ToolError::ReadFloatMismatch(_) })));
    }

    #[test]
    pub fn truncated_simple_block() {
        let mut decoder = TagDecoder::new(MatroskaSchema, &[]);
        let result = decoder.decode(&[0xa3, 0x82, 0x81, 0x00]);
        assert!(matches!(result, Err(DecoderError::CorruptedTagData { tag_id: ids::SIMPLE_BLOCK, problem: ToolError::TruncatedBlock(2) })));
    }

    #[test]
    pub fn buffered_child_overruns_parent() {
        let mut decoder = TagDecoder::new(MatroskaSchema, &[ids::EBML]);
        let result = decoder.decode(&[0x1a, 0x45, 0xdf, 0xa3, 0x84, 0x42, 0x86, 0x85, 0x01]);
        assert!(matches!(result, Err(DecoderError::OversizedChild { tag_id: ids::EBML })));
    }

    #[test]
    pub fn buffered_child_master_overruns_parent() {
        let mut decoder = TagDecoder::new(MatroskaSchema, &[ids::SEGMENT]);
        let result = decoder.decode(&[0x18, 0x53, 0x80, 0x67, 0x85, 0x15, 0x49, 0xa9, 0x66, 0x8a]);
        assert!(matches!(result, Err(DecoderError::OversizedChild { tag_id: ids::SEGMENT })));
    }

    #[test]
    pub fn corrupt_child_of_buffered_master() {
        let mut decoder = TagDecoder::new(MatroskaSchema, &[ids::EBML]);
        let result = decoder.decode(&[0x1a, 0x45, 0xdf, 0xa3, 0x82, 0x00, 0x00]);
        assert!(matches!(result, Err(DecoderError::CorruptedData(ToolError::MalformedVint(0)))));
    }

    #[test]
    pub fn errors_carry_a_message() {
        let err = DecoderError::CorruptedTagData { tag_id: ids::REFERENCE_BLOCK, problem: ToolError::ReadSignedMismatch(vec![1; 9]) };
        assert_eq!("Content of tag 0xfb could not be read: Could not read int from array: [1, 1, 1, 1, 1, 1, 1, 1, 1]", err.to_string());
        assert!(std::error::Error::source(&err).is_some());
    }
}
