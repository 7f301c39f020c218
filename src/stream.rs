//!
//! Adapters exposing the decoder and encoder as [`futures::Stream`] transforms.
//!
//! The end of the input stream finishes the decoder (or flushes the encoder).  An error, including a failed read, is yielded once and then ends the output stream.
//!

use std::collections::VecDeque;
use std::io;

use futures::{AsyncRead, AsyncReadExt, Stream, StreamExt};
use tracing::{trace, warn};

use ebml_stream_specification::EbmlSchema;

use super::decoder::TagDecoder;
use super::encoder::TagEncoder;
use super::errors::decoder::DecoderError;
use super::errors::encoder::EncoderError;
use super::tags::Tag;

const READ_CHUNK_LEN: usize = 1024 * 64;

struct DecodeState<S: EbmlSchema, St> {
    source: St,
    decoder: TagDecoder<S>,
    ready: VecDeque<Result<Tag, DecoderError>>,
    done: bool,
}

impl<S: EbmlSchema, St> DecodeState<S, St> {
    fn accept(&mut self, chunk: &[u8]) {
        trace!("decoding chunk of {} bytes", chunk.len());
        self.decoder.push(chunk);
        self.ready.extend(self.decoder.by_ref());
    }

    fn fail(&mut self, source: io::Error) {
        warn!("read failed, dropping {} open tag(s): {}", self.decoder.open_depth(), source);
        self.done = true;
        self.ready.push_back(Err(DecoderError::ReadError { source }));
    }

    fn finish(&mut self) {
        self.done = true;
        match self.decoder.finish() {
            Ok(tags) => self.ready.extend(tags.into_iter().map(Ok)),
            Err(err) => self.ready.push_back(Err(err)),
        }
    }

    fn pop_ready(&mut self) -> Option<Result<Tag, DecoderError>> {
        let item = self.ready.pop_front()?;
        if item.is_err() {
            self.done = true;
            self.ready.clear();
        }
        Some(item)
    }
}

///
/// Decodes a stream of byte chunks into a stream of tag events.
///
/// ## Example
///
/// ```
/// use futures::{executor::block_on, stream, StreamExt};
/// use ebml_stream::{stream::decode_stream, TagDecoder};
/// use ebml_stream::specs::MatroskaSchema;
///
/// let chunks = stream::iter(vec![vec![0x42, 0x86], vec![0x81, 0x01]]);
/// let tags: Vec<_> = block_on(decode_stream(chunks, TagDecoder::new(MatroskaSchema, &[])).collect());
/// assert_eq!(1, tags.len());
/// assert_eq!(0x4286, tags[0].as_ref().unwrap().id);
/// ```
///
pub fn decode_stream<S, St, B>(source: St, decoder: TagDecoder<S>) -> impl Stream<Item = Result<Tag, DecoderError>>
where
    S: EbmlSchema,
    St: Stream<Item = B> + Unpin,
    B: AsRef<[u8]>,
{
    decode_chunks(source.map(Ok::<B, io::Error>), decoder)
}

///
/// Decodes everything read from `reader` into a stream of tag events.
///
/// A read failure is yielded as [`DecoderError::ReadError`] and ends the stream.  The decoder is not finished in that case, so masters left open get no `End` events.
///
pub fn decode_reader<S, R>(reader: R, decoder: TagDecoder<S>) -> impl Stream<Item = Result<Tag, DecoderError>>
where
    S: EbmlSchema,
    R: AsyncRead + Unpin,
{
    let chunks = futures::stream::unfold(reader, |mut reader| async move {
        let mut chunk = vec![0; READ_CHUNK_LEN];
        loop {
            match reader.read(&mut chunk).await {
                Ok(0) => return None,
                Ok(length) => {
                    chunk.truncate(length);
                    return Some((Ok(chunk), reader));
                },
                Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
                Err(err) => return Some((Err(err), reader)),
            }
        }
    });
    decode_chunks(Box::pin(chunks), decoder)
}

fn decode_chunks<S, St, B>(source: St, decoder: TagDecoder<S>) -> impl Stream<Item = Result<Tag, DecoderError>>
where
    S: EbmlSchema,
    St: Stream<Item = io::Result<B>> + Unpin,
    B: AsRef<[u8]>,
{
    let state = DecodeState { source, decoder, ready: VecDeque::new(), done: false };
    futures::stream::unfold(state, |mut state| async move {
        loop {
            if let Some(item) = state.pop_ready() {
                return Some((item, state));
            }
            if state.done {
                return None;
            }
            match state.source.next().await {
                Some(Ok(chunk)) => state.accept(chunk.as_ref()),
                Some(Err(err)) => state.fail(err),
                None => state.finish(),
            }
        }
    })
}

///
/// Encodes a stream of tag events into a stream of byte chunks, one per completed top level element.
///
pub fn encode_stream<St>(source: St, encoder: TagEncoder) -> impl Stream<Item = Result<Vec<u8>, EncoderError>>
where
    St: Stream<Item = Tag> + Unpin,
{
    futures::stream::unfold((source, encoder, false), |(mut source, mut encoder, done)| async move {
        if done {
            return None;
        }
        loop {
            match source.next().await {
                Some(tag) => match encoder.write(tag) {
                    Ok(Some(bytes)) => return Some((Ok(bytes), (source, encoder, false))),
                    Ok(None) => continue,
                    Err(err) => return Some((Err(err), (source, encoder, true))),
                },
                None => {
                    let rest = encoder.flush();
                    if rest.is_empty() {
                        return None;
                    }
                    return Some((Ok(rest), (source, encoder, true)));
                }
            }
        }
    })
}
