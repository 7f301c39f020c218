//!
//! Contains types that hold tag data.
//!
//! These types are used by both the [`TagDecoder`](super::TagDecoder) and [`TagEncoder`](super::TagEncoder).
//!

use tracing::debug;

use ebml_stream_specification::matroska::ids;
use ebml_stream_specification::{EbmlSchema, ElementType};

use super::block::{Block, SimpleBlock};
use super::data::{self, Unsigned};
use super::errors::encoder::EncoderError;
use super::errors::schema::SchemaError;
use super::errors::tool::ToolError;
use super::tools::{self, Vint, MAX_SAFE_INTEGER, UNKNOWN_SIZE_VINT};

///
/// The declared payload length of a tag.
///
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum TagSize {
    Known(u64),

    ///
    /// The "unknown size" marker: the payload runs until the document structure ends it.
    ///
    Unknown,
}

impl TagSize {
    ///
    /// Interprets a decoded size vint.
    ///
    /// The reserved all ones payload of any length, and 8 byte values above [`MAX_SAFE_INTEGER`], are [`TagSize::Unknown`].
    ///
    pub fn from_vint(value: u64, vint_length: usize) -> Self {
        if (1..=8).contains(&vint_length) && value == (1 << (7 * vint_length)) - 1 {
            return TagSize::Unknown;
        }
        if vint_length == 8 && value > MAX_SAFE_INTEGER {
            return TagSize::Unknown;
        }
        TagSize::Known(value)
    }

    pub fn is_known(&self) -> bool {
        matches!(self, TagSize::Known(_))
    }

    pub fn known(&self) -> Option<u64> {
        match self {
            TagSize::Known(size) => Some(*size),
            TagSize::Unknown => None,
        }
    }
}

impl Default for TagSize {
    fn default() -> Self {
        TagSize::Known(0)
    }
}

///
/// `TagPosition` is an enumeration containing the three different tag "positions" that this library works with.
///
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum TagPosition {

    ///
    /// The beginning of a streamed "master" tag.  Its children follow as separate tags.
    ///
    Start,

    ///
    /// A complete tag: a data tag, or a master tag carrying all of its children.
    ///
    Content,

    ///
    /// The end of a streamed "master" tag.
    ///
    End,
}

///
/// Contains the content of a tag.
///
/// The variant is chosen once, when the tag is created from its id, and determines how the payload is read and written.
///
#[derive(Clone, Debug, PartialEq)]
pub enum TagData {

    ///
    /// Child tags of a master.  Empty for `Start`/`End` tags coming out of the decoder.
    ///
    Master(Vec<Tag>),

    UnsignedInt(Unsigned),

    Integer(i64),

    ///
    /// IEEE-754 floating point number.
    ///
    Float(f64),

    ///
    /// Single byte (ISO 8859-1) text.
    ///
    String(String),

    Utf8(String),

    ///
    /// Binary data, otherwise uninterpreted.
    ///
    Binary(Vec<u8>),

    Block(Block),

    SimpleBlock(SimpleBlock),
}

impl TagData {
    ///
    /// Returns the empty value for an element of the given type.
    ///
    /// `Block` and `SimpleBlock` ids get their structured variants.
    ///
    pub fn empty(id: u64, element_type: ElementType) -> Self {
        match element_type {
            ElementType::Master => TagData::Master(Vec::new()),
            ElementType::UnsignedInt => TagData::UnsignedInt(Unsigned::default()),
            ElementType::Integer => TagData::Integer(0),
            ElementType::Float => TagData::Float(0.0),
            ElementType::String => TagData::String(String::new()),
            ElementType::Utf8 => TagData::Utf8(String::new()),
            ElementType::Binary => match id {
                ids::BLOCK => TagData::Block(Block::default()),
                ids::SIMPLE_BLOCK => TagData::SimpleBlock(SimpleBlock::default()),
                _ => TagData::Binary(Vec::new()),
            },
        }
    }

    pub fn element_type(&self) -> ElementType {
        match self {
            TagData::Master(_) => ElementType::Master,
            TagData::UnsignedInt(_) => ElementType::UnsignedInt,
            TagData::Integer(_) => ElementType::Integer,
            TagData::Float(_) => ElementType::Float,
            TagData::String(_) => ElementType::String,
            TagData::Utf8(_) => ElementType::Utf8,
            TagData::Binary(_) | TagData::Block(_) | TagData::SimpleBlock(_) => ElementType::Binary,
        }
    }

    ///
    /// Replaces the value with one read from `content`, keeping the variant.
    ///
    /// Master children are not read here; the decoder builds them.
    ///
    pub fn parse(&mut self, content: &[u8]) -> Result<(), ToolError> {
        match self {
            TagData::Master(_) => {},
            TagData::UnsignedInt(val) => *val = data::read_unsigned(content),
            TagData::Integer(val) => *val = data::read_signed(content)?,
            TagData::Float(val) => *val = data::read_float(content)?,
            TagData::String(val) => *val = data::read_string(content),
            TagData::Utf8(val) => *val = data::read_utf8(content),
            TagData::Binary(val) => *val = content.to_vec(),
            TagData::Block(val) => *val = Block::decode(content)?,
            TagData::SimpleBlock(val) => *val = SimpleBlock::decode(content)?,
        }
        Ok(())
    }

    // Master children are written by `Tag::encode_into`.
    fn encode_content(&self, size: TagSize) -> Result<Vec<u8>, ToolError> {
        match self {
            TagData::Master(_) => Ok(Vec::new()),
            TagData::UnsignedInt(val) => match size {
                TagSize::Known(width @ 0..=8) => data::write_unsigned_with_width(val, width as usize)
                    .or_else(|_| data::write_unsigned(val)),
                _ => data::write_unsigned(val),
            },
            TagData::Integer(val) => {
                let width = match size {
                    TagSize::Known(width @ 1..=8) => width as usize,
                    _ => 4,
                };
                data::write_signed(*val, width)
                    .or_else(|_| data::write_signed(*val, 4))
                    .or_else(|_| data::write_signed(*val, 8))
            },
            TagData::Float(val) => Ok(data::write_float(*val, size == TagSize::Known(8))),
            TagData::String(val) => data::write_string(val),
            TagData::Utf8(val) => Ok(data::write_utf8(val)),
            TagData::Binary(val) => Ok(val.clone()),
            TagData::Block(val) => val.encode(),
            TagData::SimpleBlock(val) => val.encode(),
        }
    }
}

///
/// A single EBML element (or one end of a streamed master element).
///
/// `size` is the declared payload length.  The encoder always writes the real length of the encoded payload; the declared size only matters when it is [`TagSize::Unknown`] (written as the 8 byte unknown marker) and for picking value widths: an 8 byte float stays 8 bytes, and signed or unsigned integers keep their declared width when the value fits.  Integers that do not fit fall back to 4 bytes (or 8) for signed values and to the fewest bytes for unsigned ones.
///
#[derive(Clone, Debug, PartialEq)]
pub struct Tag {
    pub id: u64,
    pub position: TagPosition,
    pub size: TagSize,
    pub data: TagData,
}

impl Tag {
    ///
    /// Creates a `Start` tag for a streamed master.
    ///
    pub fn start(id: u64, size: TagSize) -> Self {
        Tag { id, position: TagPosition::Start, size, data: TagData::Master(Vec::new()) }
    }

    ///
    /// Creates an `End` tag for a streamed master.
    ///
    pub fn end(id: u64, size: TagSize) -> Self {
        Tag { id, position: TagPosition::End, size, data: TagData::Master(Vec::new()) }
    }

    ///
    /// Creates a complete tag.
    ///
    pub fn content(id: u64, data: TagData) -> Self {
        Tag { id, position: TagPosition::Content, size: TagSize::default(), data }
    }

    ///
    /// Creates a complete master tag holding `children`.
    ///
    pub fn master(id: u64, children: Vec<Tag>) -> Self {
        Tag::content(id, TagData::Master(children))
    }

    pub fn element_type(&self) -> ElementType {
        self.data.element_type()
    }

    pub fn children(&self) -> Option<&[Tag]> {
        match &self.data {
            TagData::Master(children) => Some(children),
            _ => None,
        }
    }

    pub fn as_unsigned_int(&self) -> Option<&Unsigned> {
        match &self.data {
            TagData::UnsignedInt(val) => Some(val),
            _ => None,
        }
    }

    pub fn as_signed_int(&self) -> Option<i64> {
        match &self.data {
            TagData::Integer(val) => Some(*val),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match &self.data {
            TagData::Float(val) => Some(*val),
            _ => None,
        }
    }

    ///
    /// Returns text for both `String` and `Utf8` tags.
    ///
    pub fn as_str(&self) -> Option<&str> {
        match &self.data {
            TagData::String(val) | TagData::Utf8(val) => Some(val),
            _ => None,
        }
    }

    pub fn as_binary(&self) -> Option<&[u8]> {
        match &self.data {
            TagData::Binary(val) => Some(val),
            _ => None,
        }
    }

    pub fn as_block(&self) -> Option<&Block> {
        match &self.data {
            TagData::Block(val) => Some(val),
            TagData::SimpleBlock(val) => Some(&val.block),
            _ => None,
        }
    }

    pub fn as_simple_block(&self) -> Option<&SimpleBlock> {
        match &self.data {
            TagData::SimpleBlock(val) => Some(val),
            _ => None,
        }
    }

    ///
    /// Encodes this tag, and all of its children, into a new buffer.
    ///
    /// The position is ignored: a master is written with whatever children it holds.
    ///
    pub fn encode(&self) -> Result<Vec<u8>, EncoderError> {
        let mut dest = Vec::new();
        self.encode_into(&mut dest)?;
        Ok(dest)
    }

    ///
    /// Encodes this tag, and all of its children, onto the end of `dest`.
    ///
    /// Nesting is walked with an explicit stack, so depth is only bounded by memory.  Each header is spliced in front of its payload once the payload length is known.
    ///
    pub fn encode_into(&self, dest: &mut Vec<u8>) -> Result<(), EncoderError> {
        enum Step<'a> {
            Open(&'a Tag),
            Close(&'a Tag, usize),
        }

        let mut steps = vec![Step::Open(self)];
        while let Some(step) = steps.pop() {
            match step {
                Step::Open(tag) => {
                    if tag.id == 0 {
                        return Err(EncoderError::MissingIdentifier);
                    }
                    let start = dest.len();
                    match &tag.data {
                        TagData::Master(children) => {
                            steps.push(Step::Close(tag, start));
                            steps.extend(children.iter().rev().map(Step::Open));
                        },
                        data => {
                            let content = data.encode_content(tag.size)
                                .map_err(|problem| EncoderError::TagData { tag_id: tag.id, problem })?;
                            dest.extend_from_slice(&content);
                            tag.write_header(dest, start)?;
                        }
                    }
                },
                Step::Close(tag, start) => tag.write_header(dest, start)?,
            }
        }
        Ok(())
    }

    fn write_header(&self, dest: &mut Vec<u8>, content_start: usize) -> Result<(), EncoderError> {
        let content_length = (dest.len() - content_start) as u64;
        let size_vint = match self.size {
            TagSize::Unknown => Ok(UNKNOWN_SIZE_VINT.to_vec()),
            // Segment and Cluster sizes are padded so they can be rewritten in place later.
            TagSize::Known(_) if self.id == ids::SEGMENT || self.id == ids::CLUSTER => content_length.as_vint_with_length(8),
            TagSize::Known(_) => content_length.as_vint(),
        }.map_err(|problem| EncoderError::TagData { tag_id: self.id, problem })?;

        dest.splice(content_start..content_start, tools::id_to_bytes(self.id).into_iter().chain(size_vint));
        Ok(())
    }
}

///
/// Creates an empty `Content` tag for `id`, typed from the schema.
///
/// Ids missing from the schema get [`TagData::Binary`].
///
/// ```
/// use ebml_stream::tags::{create_tag, TagData};
/// use ebml_stream::specs::{ElementType, MatroskaSchema};
///
/// let tag = create_tag(&MatroskaSchema, 0x4286);
/// assert_eq!(ElementType::UnsignedInt, tag.element_type());
/// assert!(matches!(create_tag(&MatroskaSchema, 0xa3).data, TagData::SimpleBlock(_)));
/// ```
///
pub fn create_tag<S: EbmlSchema + ?Sized>(schema: &S, id: u64) -> Tag {
    let data = match schema.get_element_type(id) {
        Some(element_type) => TagData::empty(id, element_type),
        None => TagData::Binary(Vec::new()),
    };
    Tag::content(id, data)
}

///
/// Creates an empty `Content` tag from an element name.
///
/// # Errors
///
/// Returns [`SchemaError::UnknownSchemaEntry`] if the schema has no element with that name.
///
pub fn create_tag_by_name<S: EbmlSchema + ?Sized>(schema: &S, name: &str) -> Result<Tag, SchemaError> {
    let info = schema.get_element_by_name(name).ok_or_else(|| SchemaError::UnknownSchemaEntry(String::from(name)))?;
    Ok(Tag::content(info.id, TagData::empty(info.id, info.element_type)))
}

///
/// Folds a flat sequence of `Start`/`Content`/`End` tags back into a tree.
///
/// Streamed masters are held on an explicit stack until they close; children are appended to the innermost open master.  A tag is handed back once it is complete at the top level.
///
#[derive(Debug, Default)]
pub struct TreeBuilder {
    open_tags: Vec<Tag>,
}

impl TreeBuilder {
    pub fn new() -> Self {
        TreeBuilder::default()
    }

    ///
    /// Adds one tag to the tree.
    ///
    /// Returns the completed top level tag, if `tag` completed one.  Completed masters are returned as `Content` tags holding their children.
    ///
    /// # Errors
    ///
    /// Fails on tags without an id, on `Start`/`End` tags that are not masters, and on `End` tags that do not match the innermost open master.
    ///
    pub fn push(&mut self, mut tag: Tag) -> Result<Option<Tag>, EncoderError> {
        if tag.id == 0 {
            return Err(EncoderError::MissingIdentifier);
        }

        match tag.position {
            TagPosition::Start => {
                if !matches!(tag.data, TagData::Master(_)) {
                    return Err(EncoderError::InvalidPosition { tag_id: tag.id });
                }
                debug!("opening tag {:#x} at depth {}", tag.id, self.open_tags.len());
                self.open_tags.push(tag);
                Ok(None)
            },
            TagPosition::Content => Ok(self.attach(tag)),
            TagPosition::End => {
                if !matches!(tag.data, TagData::Master(_)) {
                    return Err(EncoderError::InvalidPosition { tag_id: tag.id });
                }
                let mut open_tag = self.open_tags.pop()
                    .ok_or(EncoderError::UnexpectedClosingTag { tag_id: tag.id })?;
                if open_tag.id != tag.id {
                    let expected_id = open_tag.id;
                    self.open_tags.push(open_tag);
                    return Err(EncoderError::StructuralMismatch { tag_id: tag.id, expected_id });
                }
                debug!("closing tag {:#x} at depth {}", tag.id, self.open_tags.len());
                open_tag.position = TagPosition::Content;
                tag = open_tag;
                Ok(self.attach(tag))
            },
        }
    }

    fn attach(&mut self, tag: Tag) -> Option<Tag> {
        match self.open_tags.last_mut() {
            Some(Tag { data: TagData::Master(children), .. }) => {
                children.push(tag);
                None
            },
            Some(_) | None => Some(tag),
        }
    }

    ///
    /// Puts a master completed by [`Self::push()`] back on the stack, undoing its `End`.
    ///
    pub fn reopen(&mut self, mut tag: Tag) {
        tag.position = TagPosition::Start;
        self.open_tags.push(tag);
    }

    ///
    /// Number of masters currently open.
    ///
    pub fn depth(&self) -> usize {
        self.open_tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.open_tags.is_empty()
    }

    ///
    /// Drops every open master.
    ///
    pub fn clear(&mut self) {
        self.open_tags.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ebml_stream_specification::matroska::MatroskaSchema;
    use ebml_stream_specification::empty_schema::EmptySchema;

    #[test]
    fn write_ebml_tag() {
        let tag = Tag::master(ids::EBML, Vec::new());
        assert_eq!(vec![0x1a, 0x45, 0xdf, 0xa3, 0x80], tag.encode().unwrap());
    }

    #[test]
    fn write_single_unsigned_tag() {
        let tag = Tag::content(ids::EBML_VERSION, TagData::UnsignedInt(Unsigned::Int(1)));
        assert_eq!(vec![0x42, 0x86, 0x81, 0x01], tag.encode().unwrap());
    }

    #[test]
    fn write_nested_tags() {
        let tag = Tag::master(ids::EBML, vec![
            Tag::content(ids::EBML_VERSION, TagData::UnsignedInt(Unsigned::Int(1))),
        ]);
        assert_eq!(vec![0x1a, 0x45, 0xdf, 0xa3, 0x84, 0x42, 0x86, 0x81, 0x01], tag.encode().unwrap());
    }

    #[test]
    fn write_deeply_nested_tags() {
        let mut tag = Tag::content(ids::VOID, TagData::Binary(Vec::new()));
        for _ in 0..1_000 {
            tag = Tag::master(ids::BLOCK_GROUP, vec![tag]);
        }
        let bytes = tag.encode().unwrap();
        assert_eq!(&[0xa0], &bytes[..1]);
        assert_eq!(&[0xec, 0x80], &bytes[bytes.len() - 2..]);
    }

    #[test]
    fn segment_and_cluster_sizes_are_padded() {
        let tag = Tag::master(ids::CLUSTER, Vec::new());
        assert_eq!(vec![0x1f, 0x43, 0xb6, 0x75, 0x01, 0, 0, 0, 0, 0, 0, 0], tag.encode().unwrap());
    }

    #[test]
    fn unknown_size_is_written_as_marker() {
        let mut tag = Tag::master(ids::SEGMENT, vec![Tag::content(ids::VOID, TagData::Binary(vec![0x00]))]);
        tag.size = TagSize::Unknown;
        assert_eq!(vec![0x18, 0x53, 0x80, 0x67, 0x01, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xec, 0x81, 0x00], tag.encode().unwrap());
    }

    #[test]
    fn missing_identifier() {
        let tag = Tag::content(0, TagData::Binary(Vec::new()));
        assert_eq!(Err(EncoderError::MissingIdentifier), tag.encode());
    }

    #[test]
    fn integer_width_follows_declared_size() {
        let mut tag = Tag::content(ids::REFERENCE_BLOCK, TagData::Integer(-2));
        assert_eq!(vec![0xfb, 0x84, 0xff, 0xff, 0xff, 0xfe], tag.encode().unwrap());
        tag.size = TagSize::Known(1);
        assert_eq!(vec![0xfb, 0x81, 0xfe], tag.encode().unwrap());
        tag.data = TagData::Integer(1000);
        assert_eq!(vec![0xfb, 0x84, 0x00, 0x00, 0x03, 0xe8], tag.encode().unwrap());
    }

    #[test]
    fn float_width_follows_declared_size() {
        let mut tag = Tag::content(ids::DURATION, TagData::Float(2.5));
        assert_eq!(vec![0x44, 0x89, 0x84, 0x40, 0x20, 0x00, 0x00], tag.encode().unwrap());
        tag.size = TagSize::Known(8);
        assert_eq!(vec![0x44, 0x89, 0x88, 0x40, 0x04, 0, 0, 0, 0, 0, 0], tag.encode().unwrap());
    }

    #[test]
    fn integer_odd_widths() {
        let mut tag = Tag::content(ids::REFERENCE_BLOCK, TagData::Integer(-100_000));
        tag.size = TagSize::Known(3);
        assert_eq!(vec![0xfb, 0x83, 0xfe, 0x79, 0x60], tag.encode().unwrap());
        tag.data = TagData::Integer(i64::MAX);
        assert_eq!(vec![0xfb, 0x88, 0x7f, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff], tag.encode().unwrap());
    }

    #[test]
    fn unsigned_width_follows_declared_size() {
        let mut tag = Tag::content(ids::EBML_VERSION, TagData::UnsignedInt(Unsigned::Int(0)));
        assert_eq!(vec![0x42, 0x86, 0x80], tag.encode().unwrap());
        tag.size = TagSize::Known(1);
        assert_eq!(vec![0x42, 0x86, 0x81, 0x00], tag.encode().unwrap());
        tag.size = TagSize::Known(3);
        tag.data = TagData::UnsignedInt(Unsigned::Int(1));
        assert_eq!(vec![0x42, 0x86, 0x83, 0x00, 0x00, 0x01], tag.encode().unwrap());
        tag.size = TagSize::Known(1);
        tag.data = TagData::UnsignedInt(Unsigned::Int(1000));
        assert_eq!(vec![0x42, 0x86, 0x82, 0x03, 0xe8], tag.encode().unwrap());
    }

    #[test]
    fn unwritable_value() {
        let tag = Tag::content(ids::TRACK_UID, TagData::UnsignedInt(Unsigned::Hex(String::from("zz"))));
        assert!(matches!(tag.encode(), Err(EncoderError::TagData { tag_id: ids::TRACK_UID, .. })));
    }

    #[test]
    fn size_from_vint() {
        assert_eq!(TagSize::Unknown, TagSize::from_vint(0x7f, 1));
        assert_eq!(TagSize::Known(0x7f), TagSize::from_vint(0x7f, 2));
        assert_eq!(TagSize::Unknown, TagSize::from_vint((1 << 56) - 1, 8));
        assert_eq!(TagSize::Unknown, TagSize::from_vint(MAX_SAFE_INTEGER + 1, 8));
        assert_eq!(TagSize::Known(MAX_SAFE_INTEGER), TagSize::from_vint(MAX_SAFE_INTEGER, 8));
    }

    #[test]
    fn factory_uses_schema_types() {
        assert_eq!(ElementType::Master, create_tag(&MatroskaSchema, ids::CLUSTER).element_type());
        assert_eq!(ElementType::Float, create_tag(&MatroskaSchema, ids::DURATION).element_type());
        assert!(matches!(create_tag(&MatroskaSchema, ids::BLOCK).data, TagData::Block(_)));
        assert!(matches!(create_tag(&MatroskaSchema, 0x4fff).data, TagData::Binary(_)));
        assert!(matches!(create_tag(&EmptySchema, ids::SIMPLE_BLOCK).data, TagData::Binary(_)));
    }

    #[test]
    fn factory_by_name() {
        let tag = create_tag_by_name(&MatroskaSchema, "TimecodeScale").unwrap();
        assert_eq!(ids::TIMECODE_SCALE, tag.id);
        assert_eq!(Err(SchemaError::UnknownSchemaEntry(String::from("NotAnElement"))), create_tag_by_name(&MatroskaSchema, "NotAnElement"));
    }

    #[test]
    fn tree_builder_nests_children() {
        let mut builder = TreeBuilder::new();
        assert_eq!(None, builder.push(Tag::start(ids::SEGMENT, TagSize::Unknown)).unwrap());
        assert_eq!(None, builder.push(Tag::start(ids::CLUSTER, TagSize::Known(3))).unwrap());
        assert_eq!(None, builder.push(Tag::content(ids::TIMECODE, TagData::UnsignedInt(Unsigned::Int(0)))).unwrap());
        assert_eq!(None, builder.push(Tag::end(ids::CLUSTER, TagSize::Known(3))).unwrap());
        assert_eq!(1, builder.depth());
        let segment = builder.push(Tag::end(ids::SEGMENT, TagSize::Unknown)).unwrap().expect("segment should be complete");

        assert_eq!(TagPosition::Content, segment.position);
        assert_eq!(TagSize::Unknown, segment.size);
        let cluster = &segment.children().unwrap()[0];
        assert_eq!(ids::CLUSTER, cluster.id);
        assert_eq!(TagPosition::Content, cluster.position);
        assert_eq!(1, cluster.children().unwrap().len());
        assert!(builder.is_empty());
    }

    #[test]
    fn tree_builder_rejects_mismatched_end() {
        let mut builder = TreeBuilder::new();
        builder.push(Tag::start(ids::EBML, TagSize::Unknown)).unwrap();
        builder.push(Tag::start(ids::SEGMENT, TagSize::Unknown)).unwrap();
        assert_eq!(
            Err(EncoderError::StructuralMismatch { tag_id: ids::EBML, expected_id: ids::SEGMENT }),
            builder.push(Tag::end(ids::EBML, TagSize::Unknown))
        );
    }

    #[test]
    fn tree_builder_reopens_completed_master() {
        let mut builder = TreeBuilder::new();
        builder.push(Tag::start(ids::SEGMENT, TagSize::Unknown)).unwrap();
        builder.push(Tag::content(ids::VOID, TagData::Binary(vec![]))).unwrap();
        let segment = builder.push(Tag::end(ids::SEGMENT, TagSize::Unknown)).unwrap().expect("segment should be complete");

        builder.reopen(segment);
        assert_eq!(1, builder.depth());
        let segment = builder.push(Tag::end(ids::SEGMENT, TagSize::Unknown)).unwrap().expect("segment should be complete");
        assert_eq!(1, segment.children().unwrap().len());
    }

    #[test]
    fn tree_builder_rejects_data_start() {
        let mut builder = TreeBuilder::new();
        let mut tag = Tag::content(ids::EBML_VERSION, TagData::UnsignedInt(Unsigned::Int(1)));
        tag.position = TagPosition::Start;
        assert_eq!(Err(EncoderError::InvalidPosition { tag_id: ids::EBML_VERSION }), builder.push(tag));
    }
}
