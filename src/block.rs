//!
//! The payload layout of `Block` and `SimpleBlock` elements.
//!
//! A block payload starts with a fixed header - the track number as a vint, a signed 16 bit timecode relative to the enclosing cluster, and a flag byte - followed by the raw frame data.  Laced frames are left packed inside the frame data; only the lacing mode is decoded.
//!

use super::errors::tool::ToolError;
use super::tools::{self, Vint};

const FLAG_KEYFRAME: u8 = 0x80;
const FLAG_INVISIBLE: u8 = 0x10;
const FLAG_LACING: u8 = 0x0c;
const FLAG_DISCARDABLE: u8 = 0x01;

///
/// How multiple frames are packed into one block payload.
///
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum Lacing {
    #[default]
    None,
    Xiph,
    Ebml,
    FixedSize,
}

impl Lacing {
    fn from_flags(flags: u8) -> Self {
        match flags & FLAG_LACING {
            0x04 => Lacing::Xiph,
            0x08 => Lacing::Ebml,
            0x0c => Lacing::FixedSize,
            _ => Lacing::None,
        }
    }

    fn as_flags(&self) -> u8 {
        match self {
            Lacing::None => 0x00,
            Lacing::Xiph => 0x04,
            Lacing::Ebml => 0x08,
            Lacing::FixedSize => 0x0c,
        }
    }
}

///
/// A decoded `Block` payload.
///
/// ```
/// use ebml_stream::block::{Block, Lacing};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let block = Block::decode(&[0x81, 0x00, 0xbf, 0x18, 0xaa])?;
/// assert_eq!(1, block.track);
/// assert_eq!(191, block.timecode);
/// assert!(block.invisible);
/// assert_eq!(Lacing::Ebml, block.lacing);
/// assert_eq!(vec![0xaa], block.payload);
/// # Ok(())
/// # }
/// ```
///
#[derive(Clone, Debug, PartialEq, Eq, Hash, Default)]
pub struct Block {
    pub track: u64,
    pub timecode: i16,
    pub invisible: bool,
    pub lacing: Lacing,
    pub payload: Vec<u8>,
}

impl Block {
    ///
    /// Splits a block payload into its header fields and frame data.
    ///
    /// # Errors
    ///
    /// Returns [`ToolError::TruncatedBlock`] if the payload ends before the header does, or a vint error if the track number is malformed.
    ///
    pub fn decode(data: &[u8]) -> Result<Self, ToolError> {
        let (block, _) = Self::decode_with_flags(data)?;
        Ok(block)
    }

    fn decode_with_flags(data: &[u8]) -> Result<(Self, u8), ToolError> {
        let (track, track_length) = tools::read_vint(data)?.ok_or(ToolError::TruncatedBlock(data.len()))?;
        if data.len() < track_length + 3 {
            return Err(ToolError::TruncatedBlock(data.len()));
        }

        let timecode = i16::from_be_bytes([data[track_length], data[track_length + 1]]);
        let flags = data[track_length + 2];

        Ok((Block {
            track,
            timecode,
            invisible: flags & FLAG_INVISIBLE != 0,
            lacing: Lacing::from_flags(flags),
            payload: data[track_length + 3..].to_vec(),
        }, flags))
    }

    fn flags(&self) -> u8 {
        let mut flags = self.lacing.as_flags();
        if self.invisible {
            flags |= FLAG_INVISIBLE;
        }
        flags
    }

    fn encode_with_flags(&self, flags: u8) -> Result<Vec<u8>, ToolError> {
        let mut result = self.track.as_vint()?;
        result.extend_from_slice(&self.timecode.to_be_bytes());
        result.push(flags);
        result.extend_from_slice(&self.payload);
        Ok(result)
    }

    ///
    /// Composes the block header and frame data back into a payload.
    ///
    /// # Errors
    ///
    /// Returns an error if the track number cannot be written as a vint.
    ///
    pub fn encode(&self) -> Result<Vec<u8>, ToolError> {
        self.encode_with_flags(self.flags())
    }
}

///
/// A decoded `SimpleBlock` payload: a [`Block`] whose flag byte also carries keyframe and discardable bits.
///
#[derive(Clone, Debug, PartialEq, Eq, Hash, Default)]
pub struct SimpleBlock {
    pub block: Block,
    pub keyframe: bool,
    pub discardable: bool,
}

impl SimpleBlock {
    pub fn decode(data: &[u8]) -> Result<Self, ToolError> {
        let (block, flags) = Block::decode_with_flags(data)?;
        Ok(SimpleBlock {
            block,
            keyframe: flags & FLAG_KEYFRAME != 0,
            discardable: flags & FLAG_DISCARDABLE != 0,
        })
    }

    pub fn encode(&self) -> Result<Vec<u8>, ToolError> {
        let mut flags = self.block.flags();
        if self.keyframe {
            flags |= FLAG_KEYFRAME;
        }
        if self.discardable {
            flags |= FLAG_DISCARDABLE;
        }
        self.block.encode_with_flags(flags)
    }
}
