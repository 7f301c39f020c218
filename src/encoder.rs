use tracing::{debug, warn};

use super::errors::encoder::EncoderError;
use super::tags::{Tag, TagPosition, TreeBuilder};

///
/// Turns a sequence of [`Tag`] events back into bytes.
///
/// `Start` tags open a master, `End` tags close it, and `Content` tags are either written directly (at the top level) or collected into the innermost open master.  Nothing is written for a master until it closes, because its size field depends on the length of its children; at that point the whole element is returned from [`Self::write()`].
///
/// The size written for a master comes from its `Start` tag: [`TagSize::Unknown`](crate::tags::TagSize::Unknown) writes the 8 byte unknown size marker, anything else writes the real length.
///
/// ## Example
///
/// ```
/// use ebml_stream::TagEncoder;
/// use ebml_stream::tags::{Tag, TagData, TagSize};
/// use ebml_stream::data::Unsigned;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let mut encoder = TagEncoder::new();
/// assert_eq!(None, encoder.write(Tag::start(0x1a45dfa3, TagSize::Known(4)))?);
/// assert_eq!(None, encoder.write(Tag::content(0x4286, TagData::UnsignedInt(Unsigned::Int(1))))?);
///
/// let bytes = encoder.write(Tag::end(0x1a45dfa3, TagSize::Known(4)))?;
/// assert_eq!(Some(vec![0x1a, 0x45, 0xdf, 0xa3, 0x84, 0x42, 0x86, 0x81, 0x01]), bytes);
/// # Ok(())
/// # }
/// ```
///
#[derive(Debug, Default)]
pub struct TagEncoder {
    open_tags: TreeBuilder,
}

impl TagEncoder {
    pub fn new() -> Self {
        TagEncoder::default()
    }

    ///
    /// Writes one tag event.
    ///
    /// Returns the bytes of a top level element once it is complete, or `None` while a master is still open.  `Content` tags written into an open master are encoded straight away, so a bad value is reported by the `write` that delivered it.
    ///
    /// # Errors
    ///
    /// Fails if an `End` tag does not match the innermost open master ([`EncoderError::StructuralMismatch`]) or arrives with nothing open ([`EncoderError::UnexpectedClosingTag`]), if a tag has no id, if a non master tag is written as `Start`/`End`, or if a value cannot be encoded.  The open state is left as it was before the failing tag.
    ///
    pub fn write(&mut self, tag: Tag) -> Result<Option<Vec<u8>>, EncoderError> {
        if tag.position == TagPosition::Content && !self.open_tags.is_empty() {
            tag.encode()?;
        }

        let closes_master = tag.position == TagPosition::End;
        let completed = match self.open_tags.push(tag)? {
            Some(completed) => completed,
            None => return Ok(None),
        };

        match completed.encode() {
            Ok(bytes) => {
                debug!("encoded tag {:#x} ({} bytes)", completed.id, bytes.len());
                Ok(Some(bytes))
            },
            Err(err) => {
                if closes_master {
                    self.open_tags.reopen(completed);
                }
                Err(err)
            }
        }
    }

    ///
    /// Writes every tag from `tags` and returns all bytes produced.
    ///
    pub fn write_all<I: IntoIterator<Item = Tag>>(&mut self, tags: I) -> Result<Vec<u8>, EncoderError> {
        let mut result = Vec::new();
        for tag in tags {
            if let Some(bytes) = self.write(tag)? {
                result.extend_from_slice(&bytes);
            }
        }
        Ok(result)
    }

    ///
    /// Discards masters left open.
    ///
    /// Completed elements are always returned by [`Self::write()`], so nothing is held back and the result is empty.
    ///
    pub fn flush(&mut self) -> Vec<u8> {
        if !self.open_tags.is_empty() {
            warn!("discarding {} unclosed tag(s) on flush", self.open_tags.depth());
            self.open_tags.clear();
        }
        Vec::new()
    }

    ///
    /// Number of masters currently open.
    ///
    pub fn open_depth(&self) -> usize {
        self.open_tags.depth()
    }
}
