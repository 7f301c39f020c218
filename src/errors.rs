pub mod tool {
    use thiserror::Error;

    #[derive(Debug, Clone, PartialEq, Error)]
    pub enum ToolError {
        #[error("Unrepresentable vint length: first byte was {0:#04x}")]
        MalformedVint(u8),

        #[error("Value is not representable as a vint: {0}")]
        UnrepresentableValue(u64),

        #[error("Vint length must be between 1 and 8, got {0}")]
        InvalidVintLength(usize),

        #[error("Could not read int from array: {0:?}")]
        ReadSignedMismatch(Vec<u8>),

        #[error("Could not read float from array: {0:?}")]
        ReadFloatMismatch(Vec<u8>),

        #[error("Invalid hex string for unsigned int: {0:?}")]
        InvalidHexString(String),

        #[error("Character {0:?} cannot be written as a single byte string")]
        NonLatin1Character(char),

        #[error("Block payload too short to hold a block header: {0} bytes")]
        TruncatedBlock(usize),
    }
}

pub mod schema {
    use thiserror::Error;

    #[derive(Debug, Clone, PartialEq, Eq, Error)]
    pub enum SchemaError {
        #[error("No schema entry named {0:?}")]
        UnknownSchemaEntry(String),
    }
}

pub mod decoder {
    use std::io;

    use thiserror::Error;

    use super::encoder::EncoderError;
    use super::tool::ToolError;

    #[derive(Debug, Error)]
    pub enum DecoderError {
        #[error("Encountered corrupted data: {0}")]
        CorruptedData(#[source] ToolError),

        #[error("Content of tag {tag_id:#x} could not be read: {problem}")]
        CorruptedTagData {
            tag_id: u64,
            #[source]
            problem: ToolError,
        },

        #[error("A child of buffered tag {tag_id:#x} extends past the end of its parent")]
        OversizedChild {
            tag_id: u64,
        },

        #[error("Children of buffered tag {tag_id:#x} do not form a tree: {problem}")]
        MalformedChildren {
            tag_id: u64,
            #[source]
            problem: EncoderError,
        },

        #[error("Error reading from source: {source}")]
        ReadError {
            #[source]
            source: io::Error,
        },
    }
}

pub mod encoder {
    use thiserror::Error;

    use super::tool::ToolError;

    #[derive(Debug, Clone, PartialEq, Error)]
    pub enum EncoderError {
        #[error("Unexpected closing tag {tag_id:#x}. Expected {expected_id:#x}")]
        StructuralMismatch {
            tag_id: u64,
            expected_id: u64,
        },

        #[error("Unexpected closing tag {tag_id:#x}. No tag is open")]
        UnexpectedClosingTag {
            tag_id: u64,
        },

        #[error("Tag has no id")]
        MissingIdentifier,

        #[error("Tag {tag_id:#x} is not a master and can only be written as content")]
        InvalidPosition {
            tag_id: u64,
        },

        #[error("Problem writing data of tag {tag_id:#x}: {problem}")]
        TagData {
            tag_id: u64,
            #[source]
            problem: ToolError,
        },
    }
}
