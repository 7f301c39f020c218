#![cfg(feature = "futures")]


pub mod stream_tests {
    use std::io;
    use std::pin::Pin;
    use std::task::{Context, Poll};

    use futures::executor::block_on;
    use futures::{stream, AsyncRead, StreamExt, TryStreamExt};

    use ebml_stream::error::{DecoderError, ToolError};
    use ebml_stream::specs::{ids, MatroskaSchema};
    use ebml_stream::stream::{decode_reader, decode_stream, encode_stream};
    use ebml_stream::tags::{Tag, TagPosition};
    use ebml_stream::{TagDecoder, TagEncoder};

    use super::test_data::*;

    fn summary(tags: &[Tag]) -> Vec<(u64, TagPosition)> {
        tags.iter().map(|t| (t.id, t.position)).collect()
    }

    #[test]
    pub fn decode_byte_at_a_time() {
        let chunks: Vec<Vec<u8>> = sample_document().into_iter().map(|b| vec![b]).collect();
        let tags: Vec<Tag> = block_on(decode_stream(stream::iter(chunks), TagDecoder::new(MatroskaSchema, &[])).try_collect())
            .expect("Test shouldn't error");
        assert_eq!(sample_document_events(), summary(&tags));
    }

    #[test]
    pub fn end_of_input_closes_unknown_sizes() {
        let chunks = stream::iter(vec![unknown_size_document()]);
        let tags: Vec<Tag> = block_on(decode_stream(chunks, TagDecoder::new(MatroskaSchema, &[])).try_collect())
            .expect("Test shouldn't error");
        assert_eq!(Some(&(ids::SEGMENT, TagPosition::End)), summary(&tags).last());
        assert_eq!(8, tags.len());
    }

    #[test]
    pub fn decode_error_ends_stream() {
        let chunks = stream::iter(vec![vec![0x42, 0x86, 0x81, 0x01], vec![0x00], vec![0x42, 0x86, 0x81, 0x01]]);
        let results: Vec<Result<Tag, DecoderError>> = block_on(decode_stream(chunks, TagDecoder::new(MatroskaSchema, &[])).collect());

        assert_eq!(2, results.len());
        assert!(results[0].is_ok());
        assert!(matches!(results[1], Err(DecoderError::CorruptedData(ToolError::MalformedVint(0)))));
    }

    #[test]
    pub fn decode_from_reader() {
        let reader = futures::io::Cursor::new(sample_document());
        let tags: Vec<Tag> = block_on(decode_reader(reader, TagDecoder::new(MatroskaSchema, &[ids::CLUSTER])).try_collect())
            .expect("Test shouldn't error");
        assert_eq!(ids::EBML, tags[0].id);
        assert!(tags.iter().any(|t| t.id == ids::CLUSTER && t.position == TagPosition::Content));
    }

    struct ResetAfterFirstRead {
        data: Vec<u8>,
        sent: bool,
    }

    impl AsyncRead for ResetAfterFirstRead {
        fn poll_read(mut self: Pin<&mut Self>, _cx: &mut Context<'_>, buf: &mut [u8]) -> Poll<io::Result<usize>> {
            if self.sent {
                return Poll::Ready(Err(io::Error::from(io::ErrorKind::ConnectionReset)));
            }
            self.sent = true;
            let length = self.data.len().min(buf.len());
            buf[..length].copy_from_slice(&self.data[..length]);
            Poll::Ready(Ok(length))
        }
    }

    #[test]
    pub fn read_failure_is_not_end_of_input() {
        let reader = ResetAfterFirstRead {
            data: vec![
                0x18, 0x53, 0x80, 0x67, 0xff,
                    0x1f, 0x43, 0xb6, 0x75, 0xff,
                        0xe7, 0x81, 0x00,
            ],
            sent: false,
        };
        let results: Vec<Result<Tag, DecoderError>> = block_on(decode_reader(reader, TagDecoder::new(MatroskaSchema, &[])).collect());

        assert_eq!(4, results.len());
        let tags: Vec<(u64, TagPosition)> = results[..3].iter()
            .map(|r| r.as_ref().map(|t| (t.id, t.position)).expect("Test shouldn't error"))
            .collect();
        assert_eq!(vec![
            (ids::SEGMENT, TagPosition::Start),
            (ids::CLUSTER, TagPosition::Start),
            (ids::TIMECODE, TagPosition::Content),
        ], tags);
        match &results[3] {
            Err(DecoderError::ReadError { source }) => assert_eq!(io::ErrorKind::ConnectionReset, source.kind()),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    pub fn encode_emits_each_top_level_element() {
        let data = sample_document();
        let mut decoder = TagDecoder::new(MatroskaSchema, &[]);
        let tags = decoder.decode(&data).expect("Test shouldn't error");

        let chunks: Vec<Vec<u8>> = block_on(encode_stream(stream::iter(tags), TagEncoder::new()).try_collect())
            .expect("Test shouldn't error");
        assert_eq!(2, chunks.len());
        assert_eq!(ebml_header(), chunks[0]);
    }

    #[test]
    pub fn decode_then_encode_pipeline() {
        let data = ebml_header();
        let chunks: Vec<Vec<u8>> = data.chunks(5).map(|c| c.to_vec()).collect();

        let tags = decode_stream(stream::iter(chunks), TagDecoder::new(MatroskaSchema, &[]))
            .map(|tag| tag.expect("Test shouldn't error"));
        let bytes: Vec<Vec<u8>> = block_on(encode_stream(Box::pin(tags), TagEncoder::new()).try_collect())
            .expect("Test shouldn't error");
        assert_eq!(data, bytes.concat());
    }
}
