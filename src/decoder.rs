use std::collections::{HashSet, VecDeque};

use tracing::{debug, trace, warn};

use ebml_stream_specification::{EbmlSchema, ElementType};

use super::errors::decoder::DecoderError;
use super::tags::{create_tag, Tag, TagData, TagPosition, TagSize, TreeBuilder};
use super::tools;

struct ProcessingTag {
    id: u64,
    size: TagSize,
    absolute_start: usize,
    header_length: usize,
}

impl ProcessingTag {
    fn absolute_end(&self) -> Option<usize> {
        self.size.known().map(|size| self.absolute_start + self.header_length + size as usize)
    }
}

struct Header {
    id: u64,
    size: TagSize,
    length: usize,
}

const DEFAULT_BUFFER_LEN: usize = 1024 * 64;

///
/// Turns a stream of byte chunks into a flat, document ordered sequence of [`Tag`] events.
///
/// Bytes are handed to the decoder with [`Self::push()`] as they arrive, and events are pulled by iterating.  The iterator returns `None` when it needs more data; it is not fused, so iterate again after the next push.  Chunk boundaries may fall anywhere, including inside an id or size field: the sequence of events is the same however the input is split.
///
/// "Master" tags (according to the schema) are emitted as a `Start` tag, their children, and an `End` tag.  Ids listed in `tag_ids_to_buffer` are instead held back until complete and emitted as one `Content` tag carrying all of their children.
///
/// Masters of unknown size are closed when the schema says the next element cannot be one of their children (a parent, a sibling, or a root element), and at [`Self::finish()`].
///
/// After an error the decoder is poisoned and yields nothing more.
///
/// ## Example
///
/// ```
/// use ebml_stream::TagDecoder;
/// use ebml_stream::specs::MatroskaSchema;
/// use ebml_stream::tags::TagPosition;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let mut decoder = TagDecoder::new(MatroskaSchema, &[]);
/// let tags = decoder.decode(&[0x1a, 0x45, 0xdf, 0xa3, 0x84, 0x42, 0x86, 0x81])?;
/// assert_eq!(1, tags.len());
/// assert_eq!(TagPosition::Start, tags[0].position);
///
/// let tags = decoder.decode(&[0x01])?;
/// assert_eq!(2, tags.len());
/// assert_eq!(TagPosition::Content, tags[0].position);
/// assert_eq!(TagPosition::End, tags[1].position);
/// # Ok(())
/// # }
/// ```
///
pub struct TagDecoder<S: EbmlSchema> {
    schema: S,
    tag_ids_to_buffer: HashSet<u64>,

    buffer: Vec<u8>,
    buffer_position: usize,
    buffer_offset: usize,
    tag_stack: Vec<ProcessingTag>,
    pending: VecDeque<Tag>,
    poisoned: bool,
}

impl<S: EbmlSchema> TagDecoder<S> {

    ///
    /// Returns a new `TagDecoder` reading elements described by `schema`.
    ///
    /// `tag_ids_to_buffer` lists the "Master" tags that should be emitted as complete [`TagPosition::Content`] tags rather than as [`TagPosition::Start`] and [`TagPosition::End`] tags.
    ///
    pub fn new(schema: S, tag_ids_to_buffer: &[u64]) -> Self {
        TagDecoder::with_capacity(schema, tag_ids_to_buffer, DEFAULT_BUFFER_LEN)
    }

    ///
    /// Returns a new `TagDecoder` with the specified initial buffer capacity.
    ///
    /// The buffer still grows as needed, for example when a buffered master is larger than the capacity.
    ///
    pub fn with_capacity(schema: S, tag_ids_to_buffer: &[u64], capacity: usize) -> Self {
        TagDecoder {
            schema,
            tag_ids_to_buffer: tag_ids_to_buffer.iter().copied().collect(),
            buffer: Vec::with_capacity(capacity),
            buffer_position: 0,
            buffer_offset: 0,
            tag_stack: Vec::new(),
            pending: VecDeque::new(),
            poisoned: false,
        }
    }

    ///
    /// Appends a chunk of input.
    ///
    pub fn push(&mut self, chunk: &[u8]) {
        if self.buffer_position > 0 {
            self.buffer.drain(..self.buffer_position);
            self.buffer_offset += self.buffer_position;
            self.buffer_position = 0;
        }
        self.buffer.extend_from_slice(chunk);
    }

    ///
    /// Appends a chunk of input and returns every event that is now complete.
    ///
    pub fn decode(&mut self, chunk: &[u8]) -> Result<Vec<Tag>, DecoderError> {
        self.push(chunk);
        self.by_ref().collect()
    }

    ///
    /// Signals the end of input.
    ///
    /// Returns the events still available from buffered data.  If all input was consumed and every master left open has unknown size, they are closed (innermost first); otherwise the open state is discarded without emitting anything for it.
    ///
    pub fn finish(&mut self) -> Result<Vec<Tag>, DecoderError> {
        let mut tags = self.by_ref().collect::<Result<Vec<Tag>, DecoderError>>()?;
        if self.poisoned {
            return Ok(tags);
        }

        if self.buffered_len() == 0 && self.tag_stack.iter().all(|tag| !tag.size.is_known()) {
            while let Some(open_tag) = self.tag_stack.pop() {
                debug!("closing unknown size tag {:#x} at end of input", open_tag.id);
                tags.push(self.end_tag(&open_tag));
            }
        } else {
            warn!(
                "discarding {} open tag(s) and {} unread byte(s) at end of input",
                self.tag_stack.len(),
                self.buffered_len()
            );
            self.tag_stack.clear();
        }

        self.buffer_offset += self.buffer.len();
        self.buffer.clear();
        self.buffer_position = 0;
        Ok(tags)
    }

    ///
    /// Number of bytes pushed but not yet consumed.
    ///
    pub fn buffered_len(&self) -> usize {
        self.buffer.len() - self.buffer_position
    }

    ///
    /// Absolute position, in the whole input, of the next unconsumed byte.
    ///
    pub fn offset(&self) -> usize {
        self.buffer_offset + self.buffer_position
    }

    ///
    /// Number of streamed masters currently open.
    ///
    pub fn open_depth(&self) -> usize {
        self.tag_stack.len()
    }

    pub fn is_poisoned(&self) -> bool {
        self.poisoned
    }

    fn read_header(&self) -> Result<Option<Header>, DecoderError> {
        let available = &self.buffer[self.buffer_position..];
        let (id, id_length) = match tools::read_id(available).map_err(DecoderError::CorruptedData)? {
            Some(id) => id,
            None => return Ok(None),
        };
        let (size, size_length) = match tools::read_vint_size(&available[id_length..]).map_err(DecoderError::CorruptedData)? {
            Some(size) => size,
            None => return Ok(None),
        };
        Ok(Some(Header { id, size, length: id_length + size_length }))
    }

    fn end_tag(&self, open_tag: &ProcessingTag) -> Tag {
        let mut tag = create_tag(&self.schema, open_tag.id);
        tag.position = TagPosition::End;
        tag.size = open_tag.size;
        tag
    }

    fn emit(&mut self, tag: Tag) {
        trace!("emitting {:?} tag {:#x} ({:?})", tag.position, tag.id, tag.size);
        self.pending.push_back(tag);
    }

    // Closes open masters of unknown size that cannot contain `next_id`.
    fn close_unknown_sized(&mut self, next_id: u64) {
        while let Some(open_tag) = self.tag_stack.last() {
            if open_tag.size.is_known() || !self.schema.is_ended_by(open_tag.id, next_id) {
                break;
            }
            if let Some(open_tag) = self.tag_stack.pop() {
                debug!("tag {:#x} ends unknown size tag {:#x}", next_id, open_tag.id);
                let tag = self.end_tag(&open_tag);
                self.emit(tag);
            }
        }
    }

    // Closes open masters whose known size has been fully consumed.
    fn close_finished(&mut self) {
        let offset = self.offset();
        while let Some(open_tag) = self.tag_stack.last() {
            match open_tag.absolute_end() {
                Some(end) if offset >= end => {},
                _ => break,
            }
            if let Some(open_tag) = self.tag_stack.pop() {
                debug!("closing tag {:#x} at offset {}", open_tag.id, offset);
                let tag = self.end_tag(&open_tag);
                self.emit(tag);
            }
        }
    }

    // Reads one element header and queues the events it produces.  Returns false when more input is needed.
    fn read_tag(&mut self) -> Result<bool, DecoderError> {
        let header = match self.read_header()? {
            Some(header) => header,
            None => {
                trace!("need more data for a tag header at offset {}", self.offset());
                return Ok(false);
            }
        };

        self.close_unknown_sized(header.id);

        let is_master = self.schema.get_element_type(header.id) == Some(ElementType::Master);
        let buffer_requested = self.tag_ids_to_buffer.contains(&header.id);

        if is_master && (!buffer_requested || !header.size.is_known()) {
            if buffer_requested {
                warn!("tag {:#x} has unknown size and cannot be buffered; streaming it instead", header.id);
            }
            let open_tag = ProcessingTag {
                id: header.id,
                size: header.size,
                absolute_start: self.offset(),
                header_length: header.length,
            };
            debug!("opening tag {:#x} at offset {}", open_tag.id, open_tag.absolute_start);
            self.buffer_position += header.length;

            let mut tag = create_tag(&self.schema, header.id);
            tag.position = TagPosition::Start;
            tag.size = header.size;
            self.tag_stack.push(open_tag);
            self.emit(tag);
            self.close_finished();
            return Ok(true);
        }

        let content_length = match header.size {
            TagSize::Known(size) => usize::try_from(size).unwrap_or(usize::MAX),
            TagSize::Unknown => {
                warn!("data tag {:#x} has unknown size; reading it as empty", header.id);
                0
            }
        };
        let content_start = self.buffer_position + header.length;
        let content_end = match content_start.checked_add(content_length) {
            Some(end) if end <= self.buffer.len() => end,
            _ => {
                trace!("need more data for tag {:#x} ({} of {} bytes buffered)", header.id, self.buffer.len() - content_start, content_length);
                return Ok(false);
            }
        };

        let mut tag = create_tag(&self.schema, header.id);
        tag.size = header.size;
        let content = &self.buffer[content_start..content_end];
        if is_master {
            tag.data = self.read_buffered_children(header.id, content)?;
        } else {
            tag.data.parse(content).map_err(|problem| DecoderError::CorruptedTagData { tag_id: header.id, problem })?;
        }

        self.buffer_position = content_end;
        self.emit(tag);
        self.close_finished();
        Ok(true)
    }

    fn read_buffered_children(&self, tag_id: u64, content: &[u8]) -> Result<TagData, DecoderError> {
        let schema: &dyn EbmlSchema = &self.schema;
        let mut children_decoder = TagDecoder::with_capacity(schema, &[], 0);
        children_decoder.push(content);

        let mut builder = TreeBuilder::new();
        let mut children = Vec::new();
        for event in children_decoder.by_ref() {
            if let Some(child) = builder.push(event?).map_err(|problem| DecoderError::MalformedChildren { tag_id, problem })? {
                children.push(child);
            }
        }
        if children_decoder.buffered_len() > 0 {
            return Err(DecoderError::OversizedChild { tag_id });
        }
        for event in children_decoder.finish()? {
            if let Some(child) = builder.push(event).map_err(|problem| DecoderError::MalformedChildren { tag_id, problem })? {
                children.push(child);
            }
        }
        if !builder.is_empty() {
            return Err(DecoderError::OversizedChild { tag_id });
        }

        Ok(TagData::Master(children))
    }
}

impl<S: EbmlSchema> Iterator for TagDecoder<S> {
    type Item = Result<Tag, DecoderError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.poisoned {
            return None;
        }
        if let Some(tag) = self.pending.pop_front() {
            return Some(Ok(tag));
        }

        match self.read_tag() {
            // Closing tags may be queued even when the new element needs more data.
            Ok(_) => self.pending.pop_front().map(Ok),
            Err(err) => {
                warn!("decoder stopped at offset {}: {}", self.offset(), err);
                self.poisoned = true;
                self.pending.clear();
                Some(Err(err))
            }
        }
    }
}
