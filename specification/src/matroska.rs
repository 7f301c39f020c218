//!
//! The Matroska/WebM element table.
//!
//! The table covers the EBML header, the global elements and the Matroska elements commonly found in `.mkv` and `.webm` files.  Ids missing from the table are still decoded by `ebml-stream`; they are simply read as binary data.
//!

use std::collections::HashMap;
use std::sync::OnceLock;

use super::{EbmlSchema, ElementInfo, ElementType, Parent};

///
/// Element ids of the Matroska schema.
///
/// Ids are stored with their length marker bits intact - i.e. exactly as the id bytes appear in a file.
///
pub mod ids {
    pub const EBML: u64 = 0x1a45dfa3;
    pub const EBML_VERSION: u64 = 0x4286;
    pub const EBML_READ_VERSION: u64 = 0x42f7;
    pub const EBML_MAX_ID_LENGTH: u64 = 0x42f2;
    pub const EBML_MAX_SIZE_LENGTH: u64 = 0x42f3;
    pub const DOC_TYPE: u64 = 0x4282;
    pub const DOC_TYPE_VERSION: u64 = 0x4287;
    pub const DOC_TYPE_READ_VERSION: u64 = 0x4285;
    pub const DOC_TYPE_EXTENSION: u64 = 0x4281;
    pub const DOC_TYPE_EXTENSION_NAME: u64 = 0x4283;
    pub const DOC_TYPE_EXTENSION_VERSION: u64 = 0x4284;
    pub const VOID: u64 = 0xec;
    pub const CRC32: u64 = 0xbf;
    pub const SEGMENT: u64 = 0x18538067;
    pub const SEEK_HEAD: u64 = 0x114d9b74;
    pub const SEEK: u64 = 0x4dbb;
    pub const SEEK_ID: u64 = 0x53ab;
    pub const SEEK_POSITION: u64 = 0x53ac;
    pub const INFO: u64 = 0x1549a966;
    pub const SEGMENT_UID: u64 = 0x73a4;
    pub const SEGMENT_FILENAME: u64 = 0x7384;
    pub const PREV_UID: u64 = 0x3cb923;
    pub const PREV_FILENAME: u64 = 0x3c83ab;
    pub const NEXT_UID: u64 = 0x3eb923;
    pub const NEXT_FILENAME: u64 = 0x3e83bb;
    pub const SEGMENT_FAMILY: u64 = 0x4444;
    pub const CHAPTER_TRANSLATE: u64 = 0x6924;
    pub const CHAPTER_TRANSLATE_EDITION_UID: u64 = 0x69fc;
    pub const CHAPTER_TRANSLATE_CODEC: u64 = 0x69bf;
    pub const CHAPTER_TRANSLATE_ID: u64 = 0x69a5;
    pub const TIMECODE_SCALE: u64 = 0x2ad7b1;
    pub const DURATION: u64 = 0x4489;
    pub const DATE_UTC: u64 = 0x4461;
    pub const TITLE: u64 = 0x7ba9;
    pub const MUXING_APP: u64 = 0x4d80;
    pub const WRITING_APP: u64 = 0x5741;
    pub const CLUSTER: u64 = 0x1f43b675;
    pub const TIMECODE: u64 = 0xe7;
    pub const SILENT_TRACKS: u64 = 0x5854;
    pub const SILENT_TRACK_NUMBER: u64 = 0x58d7;
    pub const POSITION: u64 = 0xa7;
    pub const PREV_SIZE: u64 = 0xab;
    pub const SIMPLE_BLOCK: u64 = 0xa3;
    pub const BLOCK_GROUP: u64 = 0xa0;
    pub const BLOCK: u64 = 0xa1;
    pub const BLOCK_VIRTUAL: u64 = 0xa2;
    pub const BLOCK_ADDITIONS: u64 = 0x75a1;
    pub const BLOCK_MORE: u64 = 0xa6;
    pub const BLOCK_ADD_ID: u64 = 0xee;
    pub const BLOCK_ADDITIONAL: u64 = 0xa5;
    pub const BLOCK_DURATION: u64 = 0x9b;
    pub const REFERENCE_PRIORITY: u64 = 0xfa;
    pub const REFERENCE_BLOCK: u64 = 0xfb;
    pub const REFERENCE_VIRTUAL: u64 = 0xfd;
    pub const CODEC_STATE: u64 = 0xa4;
    pub const DISCARD_PADDING: u64 = 0x75a2;
    pub const SLICES: u64 = 0x8e;
    pub const TIME_SLICE: u64 = 0xe8;
    pub const LACE_NUMBER: u64 = 0xcc;
    pub const ENCRYPTED_BLOCK: u64 = 0xaf;
    pub const TRACKS: u64 = 0x1654ae6b;
    pub const TRACK_ENTRY: u64 = 0xae;
    pub const TRACK_NUMBER: u64 = 0xd7;
    pub const TRACK_UID: u64 = 0x73c5;
    pub const TRACK_TYPE: u64 = 0x83;
    pub const FLAG_ENABLED: u64 = 0xb9;
    pub const FLAG_DEFAULT: u64 = 0x88;
    pub const FLAG_FORCED: u64 = 0x55aa;
    pub const FLAG_LACING: u64 = 0x9c;
    pub const MIN_CACHE: u64 = 0x6de7;
    pub const MAX_CACHE: u64 = 0x6df8;
    pub const DEFAULT_DURATION: u64 = 0x23e383;
    pub const DEFAULT_DECODED_FIELD_DURATION: u64 = 0x234e7a;
    pub const TRACK_TIMECODE_SCALE: u64 = 0x23314f;
    pub const MAX_BLOCK_ADDITION_ID: u64 = 0x55ee;
    pub const NAME: u64 = 0x536e;
    pub const LANGUAGE: u64 = 0x22b59c;
    pub const CODEC_ID: u64 = 0x86;
    pub const CODEC_PRIVATE: u64 = 0x63a2;
    pub const CODEC_NAME: u64 = 0x258688;
    pub const ATTACHMENT_LINK: u64 = 0x7446;
    pub const CODEC_DECODE_ALL: u64 = 0xaa;
    pub const TRACK_OVERLAY: u64 = 0x6fab;
    pub const CODEC_DELAY: u64 = 0x56aa;
    pub const SEEK_PRE_ROLL: u64 = 0x56bb;
    pub const TRACK_TRANSLATE: u64 = 0x6624;
    pub const VIDEO: u64 = 0xe0;
    pub const FLAG_INTERLACED: u64 = 0x9a;
    pub const FIELD_ORDER: u64 = 0x9d;
    pub const STEREO_MODE: u64 = 0x53b8;
    pub const ALPHA_MODE: u64 = 0x53c0;
    pub const PIXEL_WIDTH: u64 = 0xb0;
    pub const PIXEL_HEIGHT: u64 = 0xba;
    pub const PIXEL_CROP_BOTTOM: u64 = 0x54aa;
    pub const PIXEL_CROP_TOP: u64 = 0x54bb;
    pub const PIXEL_CROP_LEFT: u64 = 0x54cc;
    pub const PIXEL_CROP_RIGHT: u64 = 0x54dd;
    pub const DISPLAY_WIDTH: u64 = 0x54b0;
    pub const DISPLAY_HEIGHT: u64 = 0x54ba;
    pub const DISPLAY_UNIT: u64 = 0x54b2;
    pub const ASPECT_RATIO_TYPE: u64 = 0x54b3;
    pub const COLOUR_SPACE: u64 = 0x2eb524;
    pub const COLOUR: u64 = 0x55b0;
    pub const AUDIO: u64 = 0xe1;
    pub const SAMPLING_FREQUENCY: u64 = 0xb5;
    pub const OUTPUT_SAMPLING_FREQUENCY: u64 = 0x78b5;
    pub const CHANNELS: u64 = 0x9f;
    pub const BIT_DEPTH: u64 = 0x6264;
    pub const CONTENT_ENCODINGS: u64 = 0x6d80;
    pub const CONTENT_ENCODING: u64 = 0x6240;
    pub const CONTENT_ENCODING_ORDER: u64 = 0x5031;
    pub const CONTENT_ENCODING_SCOPE: u64 = 0x5032;
    pub const CONTENT_ENCODING_TYPE: u64 = 0x5033;
    pub const CONTENT_COMPRESSION: u64 = 0x5034;
    pub const CONTENT_COMP_ALGO: u64 = 0x4254;
    pub const CONTENT_COMP_SETTINGS: u64 = 0x4255;
    pub const CONTENT_ENCRYPTION: u64 = 0x5035;
    pub const CONTENT_ENC_ALGO: u64 = 0x47e1;
    pub const CONTENT_ENC_KEY_ID: u64 = 0x47e2;
    pub const CUES: u64 = 0x1c53bb6b;
    pub const CUE_POINT: u64 = 0xbb;
    pub const CUE_TIME: u64 = 0xb3;
    pub const CUE_TRACK_POSITIONS: u64 = 0xb7;
    pub const CUE_TRACK: u64 = 0xf7;
    pub const CUE_CLUSTER_POSITION: u64 = 0xf1;
    pub const CUE_RELATIVE_POSITION: u64 = 0xf0;
    pub const CUE_DURATION: u64 = 0xb2;
    pub const CUE_BLOCK_NUMBER: u64 = 0x5378;
    pub const CUE_CODEC_STATE: u64 = 0xea;
    pub const CUE_REFERENCE: u64 = 0xdb;
    pub const CUE_REF_TIME: u64 = 0x96;
    pub const ATTACHMENTS: u64 = 0x1941a469;
    pub const ATTACHED_FILE: u64 = 0x61a7;
    pub const FILE_DESCRIPTION: u64 = 0x467e;
    pub const FILE_NAME: u64 = 0x466e;
    pub const FILE_MIME_TYPE: u64 = 0x4660;
    pub const FILE_DATA: u64 = 0x465c;
    pub const FILE_UID: u64 = 0x46ae;
    pub const CHAPTERS: u64 = 0x1043a770;
    pub const EDITION_ENTRY: u64 = 0x45b9;
    pub const EDITION_UID: u64 = 0x45bc;
    pub const EDITION_FLAG_HIDDEN: u64 = 0x45bd;
    pub const EDITION_FLAG_DEFAULT: u64 = 0x45db;
    pub const EDITION_FLAG_ORDERED: u64 = 0x45dd;
    pub const CHAPTER_ATOM: u64 = 0xb6;
    pub const CHAPTER_UID: u64 = 0x73c4;
    pub const CHAPTER_STRING_UID: u64 = 0x5654;
    pub const CHAPTER_TIME_START: u64 = 0x91;
    pub const CHAPTER_TIME_END: u64 = 0x92;
    pub const CHAPTER_FLAG_HIDDEN: u64 = 0x98;
    pub const CHAPTER_FLAG_ENABLED: u64 = 0x4598;
    pub const CHAPTER_SEGMENT_UID: u64 = 0x6e67;
    pub const CHAPTER_DISPLAY: u64 = 0x80;
    pub const CHAP_STRING: u64 = 0x85;
    pub const CHAP_LANGUAGE: u64 = 0x437c;
    pub const CHAP_COUNTRY: u64 = 0x437e;
    pub const TAGS: u64 = 0x1254c367;
    pub const TAG: u64 = 0x7373;
    pub const TARGETS: u64 = 0x63c0;
    pub const TARGET_TYPE_VALUE: u64 = 0x68ca;
    pub const TARGET_TYPE: u64 = 0x63ca;
    pub const TAG_TRACK_UID: u64 = 0x63c5;
    pub const TAG_EDITION_UID: u64 = 0x63c9;
    pub const TAG_CHAPTER_UID: u64 = 0x63c4;
    pub const TAG_ATTACHMENT_UID: u64 = 0x63c6;
    pub const SIMPLE_TAG: u64 = 0x67c8;
    pub const TAG_NAME: u64 = 0x45a3;
    pub const TAG_LANGUAGE: u64 = 0x447a;
    pub const TAG_DEFAULT: u64 = 0x4484;
    pub const TAG_STRING: u64 = 0x4487;
    pub const TAG_BINARY: u64 = 0x4485;
}

const fn element(id: u64, name: &'static str, element_type: ElementType, parent: Parent) -> ElementInfo {
    ElementInfo { id, name, element_type, parent }
}

use ElementType::{Binary, Float, Integer, Master, UnsignedInt, Utf8};
use Parent::{Global, Root};

static ELEMENTS: &[ElementInfo] = &[
    element(ids::EBML, "EBML", Master, Root),
    element(ids::EBML_VERSION, "EBMLVersion", UnsignedInt, Parent::Id(ids::EBML)),
    element(ids::EBML_READ_VERSION, "EBMLReadVersion", UnsignedInt, Parent::Id(ids::EBML)),
    element(ids::EBML_MAX_ID_LENGTH, "EBMLMaxIDLength", UnsignedInt, Parent::Id(ids::EBML)),
    element(ids::EBML_MAX_SIZE_LENGTH, "EBMLMaxSizeLength", UnsignedInt, Parent::Id(ids::EBML)),
    element(ids::DOC_TYPE, "DocType", ElementType::String, Parent::Id(ids::EBML)),
    element(ids::DOC_TYPE_VERSION, "DocTypeVersion", UnsignedInt, Parent::Id(ids::EBML)),
    element(ids::DOC_TYPE_READ_VERSION, "DocTypeReadVersion", UnsignedInt, Parent::Id(ids::EBML)),
    element(ids::DOC_TYPE_EXTENSION, "DocTypeExtension", Master, Parent::Id(ids::EBML)),
    element(ids::DOC_TYPE_EXTENSION_NAME, "DocTypeExtensionName", ElementType::String, Parent::Id(ids::DOC_TYPE_EXTENSION)),
    element(ids::DOC_TYPE_EXTENSION_VERSION, "DocTypeExtensionVersion", UnsignedInt, Parent::Id(ids::DOC_TYPE_EXTENSION)),
    element(ids::VOID, "Void", Binary, Global),
    element(ids::CRC32, "CRC-32", Binary, Global),
    element(ids::SEGMENT, "Segment", Master, Root),
    element(ids::SEEK_HEAD, "SeekHead", Master, Parent::Id(ids::SEGMENT)),
    element(ids::SEEK, "Seek", Master, Parent::Id(ids::SEEK_HEAD)),
    element(ids::SEEK_ID, "SeekID", Binary, Parent::Id(ids::SEEK)),
    element(ids::SEEK_POSITION, "SeekPosition", UnsignedInt, Parent::Id(ids::SEEK)),
    element(ids::INFO, "Info", Master, Parent::Id(ids::SEGMENT)),
    element(ids::SEGMENT_UID, "SegmentUID", Binary, Parent::Id(ids::INFO)),
    element(ids::SEGMENT_FILENAME, "SegmentFilename", Utf8, Parent::Id(ids::INFO)),
    element(ids::PREV_UID, "PrevUID", Binary, Parent::Id(ids::INFO)),
    element(ids::PREV_FILENAME, "PrevFilename", Utf8, Parent::Id(ids::INFO)),
    element(ids::NEXT_UID, "NextUID", Binary, Parent::Id(ids::INFO)),
    element(ids::NEXT_FILENAME, "NextFilename", Utf8, Parent::Id(ids::INFO)),
    element(ids::SEGMENT_FAMILY, "SegmentFamily", Binary, Parent::Id(ids::INFO)),
    element(ids::CHAPTER_TRANSLATE, "ChapterTranslate", Master, Parent::Id(ids::INFO)),
    element(ids::CHAPTER_TRANSLATE_EDITION_UID, "ChapterTranslateEditionUID", UnsignedInt, Parent::Id(ids::CHAPTER_TRANSLATE)),
    element(ids::CHAPTER_TRANSLATE_CODEC, "ChapterTranslateCodec", UnsignedInt, Parent::Id(ids::CHAPTER_TRANSLATE)),
    element(ids::CHAPTER_TRANSLATE_ID, "ChapterTranslateID", Binary, Parent::Id(ids::CHAPTER_TRANSLATE)),
    element(ids::TIMECODE_SCALE, "TimecodeScale", UnsignedInt, Parent::Id(ids::INFO)),
    element(ids::DURATION, "Duration", Float, Parent::Id(ids::INFO)),
    element(ids::DATE_UTC, "DateUTC", Binary, Parent::Id(ids::INFO)),
    element(ids::TITLE, "Title", Utf8, Parent::Id(ids::INFO)),
    element(ids::MUXING_APP, "MuxingApp", Utf8, Parent::Id(ids::INFO)),
    element(ids::WRITING_APP, "WritingApp", Utf8, Parent::Id(ids::INFO)),
    element(ids::CLUSTER, "Cluster", Master, Parent::Id(ids::SEGMENT)),
    element(ids::TIMECODE, "Timecode", UnsignedInt, Parent::Id(ids::CLUSTER)),
    element(ids::SILENT_TRACKS, "SilentTracks", Master, Parent::Id(ids::CLUSTER)),
    element(ids::SILENT_TRACK_NUMBER, "SilentTrackNumber", UnsignedInt, Parent::Id(ids::SILENT_TRACKS)),
    element(ids::POSITION, "Position", UnsignedInt, Parent::Id(ids::CLUSTER)),
    element(ids::PREV_SIZE, "PrevSize", UnsignedInt, Parent::Id(ids::CLUSTER)),
    element(ids::SIMPLE_BLOCK, "SimpleBlock", Binary, Parent::Id(ids::CLUSTER)),
    element(ids::BLOCK_GROUP, "BlockGroup", Master, Parent::Id(ids::CLUSTER)),
    element(ids::BLOCK, "Block", Binary, Parent::Id(ids::BLOCK_GROUP)),
    element(ids::BLOCK_VIRTUAL, "BlockVirtual", Binary, Parent::Id(ids::BLOCK_GROUP)),
    element(ids::BLOCK_ADDITIONS, "BlockAdditions", Master, Parent::Id(ids::BLOCK_GROUP)),
    element(ids::BLOCK_MORE, "BlockMore", Master, Parent::Id(ids::BLOCK_ADDITIONS)),
    element(ids::BLOCK_ADD_ID, "BlockAddID", UnsignedInt, Parent::Id(ids::BLOCK_MORE)),
    element(ids::BLOCK_ADDITIONAL, "BlockAdditional", Binary, Parent::Id(ids::BLOCK_MORE)),
    element(ids::BLOCK_DURATION, "BlockDuration", UnsignedInt, Parent::Id(ids::BLOCK_GROUP)),
    element(ids::REFERENCE_PRIORITY, "ReferencePriority", UnsignedInt, Parent::Id(ids::BLOCK_GROUP)),
    element(ids::REFERENCE_BLOCK, "ReferenceBlock", Integer, Parent::Id(ids::BLOCK_GROUP)),
    element(ids::REFERENCE_VIRTUAL, "ReferenceVirtual", Integer, Parent::Id(ids::BLOCK_GROUP)),
    element(ids::CODEC_STATE, "CodecState", Binary, Parent::Id(ids::BLOCK_GROUP)),
    element(ids::DISCARD_PADDING, "DiscardPadding", Integer, Parent::Id(ids::BLOCK_GROUP)),
    element(ids::SLICES, "Slices", Master, Parent::Id(ids::BLOCK_GROUP)),
    element(ids::TIME_SLICE, "TimeSlice", Master, Parent::Id(ids::SLICES)),
    element(ids::LACE_NUMBER, "LaceNumber", UnsignedInt, Parent::Id(ids::TIME_SLICE)),
    element(ids::ENCRYPTED_BLOCK, "EncryptedBlock", Binary, Parent::Id(ids::CLUSTER)),
    element(ids::TRACKS, "Tracks", Master, Parent::Id(ids::SEGMENT)),
    element(ids::TRACK_ENTRY, "TrackEntry", Master, Parent::Id(ids::TRACKS)),
    element(ids::TRACK_NUMBER, "TrackNumber", UnsignedInt, Parent::Id(ids::TRACK_ENTRY)),
    element(ids::TRACK_UID, "TrackUID", UnsignedInt, Parent::Id(ids::TRACK_ENTRY)),
    element(ids::TRACK_TYPE, "TrackType", UnsignedInt, Parent::Id(ids::TRACK_ENTRY)),
    element(ids::FLAG_ENABLED, "FlagEnabled", UnsignedInt, Parent::Id(ids::TRACK_ENTRY)),
    element(ids::FLAG_DEFAULT, "FlagDefault", UnsignedInt, Parent::Id(ids::TRACK_ENTRY)),
    element(ids::FLAG_FORCED, "FlagForced", UnsignedInt, Parent::Id(ids::TRACK_ENTRY)),
    element(ids::FLAG_LACING, "FlagLacing", UnsignedInt, Parent::Id(ids::TRACK_ENTRY)),
    element(ids::MIN_CACHE, "MinCache", UnsignedInt, Parent::Id(ids::TRACK_ENTRY)),
    element(ids::MAX_CACHE, "MaxCache", UnsignedInt, Parent::Id(ids::TRACK_ENTRY)),
    element(ids::DEFAULT_DURATION, "DefaultDuration", UnsignedInt, Parent::Id(ids::TRACK_ENTRY)),
    element(ids::DEFAULT_DECODED_FIELD_DURATION, "DefaultDecodedFieldDuration", UnsignedInt, Parent::Id(ids::TRACK_ENTRY)),
    element(ids::TRACK_TIMECODE_SCALE, "TrackTimecodeScale", Float, Parent::Id(ids::TRACK_ENTRY)),
    element(ids::MAX_BLOCK_ADDITION_ID, "MaxBlockAdditionID", UnsignedInt, Parent::Id(ids::TRACK_ENTRY)),
    element(ids::NAME, "Name", Utf8, Parent::Id(ids::TRACK_ENTRY)),
    element(ids::LANGUAGE, "Language", ElementType::String, Parent::Id(ids::TRACK_ENTRY)),
    element(ids::CODEC_ID, "CodecID", ElementType::String, Parent::Id(ids::TRACK_ENTRY)),
    element(ids::CODEC_PRIVATE, "CodecPrivate", Binary, Parent::Id(ids::TRACK_ENTRY)),
    element(ids::CODEC_NAME, "CodecName", Utf8, Parent::Id(ids::TRACK_ENTRY)),
    element(ids::ATTACHMENT_LINK, "AttachmentLink", UnsignedInt, Parent::Id(ids::TRACK_ENTRY)),
    element(ids::CODEC_DECODE_ALL, "CodecDecodeAll", UnsignedInt, Parent::Id(ids::TRACK_ENTRY)),
    element(ids::TRACK_OVERLAY, "TrackOverlay", UnsignedInt, Parent::Id(ids::TRACK_ENTRY)),
    element(ids::CODEC_DELAY, "CodecDelay", UnsignedInt, Parent::Id(ids::TRACK_ENTRY)),
    element(ids::SEEK_PRE_ROLL, "SeekPreRoll", UnsignedInt, Parent::Id(ids::TRACK_ENTRY)),
    element(ids::TRACK_TRANSLATE, "TrackTranslate", Master, Parent::Id(ids::TRACK_ENTRY)),
    element(ids::VIDEO, "Video", Master, Parent::Id(ids::TRACK_ENTRY)),
    element(ids::FLAG_INTERLACED, "FlagInterlaced", UnsignedInt, Parent::Id(ids::VIDEO)),
    element(ids::FIELD_ORDER, "FieldOrder", UnsignedInt, Parent::Id(ids::VIDEO)),
    element(ids::STEREO_MODE, "StereoMode", UnsignedInt, Parent::Id(ids::VIDEO)),
    element(ids::ALPHA_MODE, "AlphaMode", UnsignedInt, Parent::Id(ids::VIDEO)),
    element(ids::PIXEL_WIDTH, "PixelWidth", UnsignedInt, Parent::Id(ids::VIDEO)),
    element(ids::PIXEL_HEIGHT, "PixelHeight", UnsignedInt, Parent::Id(ids::VIDEO)),
    element(ids::PIXEL_CROP_BOTTOM, "PixelCropBottom", UnsignedInt, Parent::Id(ids::VIDEO)),
    element(ids::PIXEL_CROP_TOP, "PixelCropTop", UnsignedInt, Parent::Id(ids::VIDEO)),
    element(ids::PIXEL_CROP_LEFT, "PixelCropLeft", UnsignedInt, Parent::Id(ids::VIDEO)),
    element(ids::PIXEL_CROP_RIGHT, "PixelCropRight", UnsignedInt, Parent::Id(ids::VIDEO)),
    element(ids::DISPLAY_WIDTH, "DisplayWidth", UnsignedInt, Parent::Id(ids::VIDEO)),
    element(ids::DISPLAY_HEIGHT, "DisplayHeight", UnsignedInt, Parent::Id(ids::VIDEO)),
    element(ids::DISPLAY_UNIT, "DisplayUnit", UnsignedInt, Parent::Id(ids::VIDEO)),
    element(ids::ASPECT_RATIO_TYPE, "AspectRatioType", UnsignedInt, Parent::Id(ids::VIDEO)),
    element(ids::COLOUR_SPACE, "ColourSpace", Binary, Parent::Id(ids::VIDEO)),
    element(ids::COLOUR, "Colour", Master, Parent::Id(ids::VIDEO)),
    element(ids::AUDIO, "Audio", Master, Parent::Id(ids::TRACK_ENTRY)),
    element(ids::SAMPLING_FREQUENCY, "SamplingFrequency", Float, Parent::Id(ids::AUDIO)),
    element(ids::OUTPUT_SAMPLING_FREQUENCY, "OutputSamplingFrequency", Float, Parent::Id(ids::AUDIO)),
    element(ids::CHANNELS, "Channels", UnsignedInt, Parent::Id(ids::AUDIO)),
    element(ids::BIT_DEPTH, "BitDepth", UnsignedInt, Parent::Id(ids::AUDIO)),
    element(ids::CONTENT_ENCODINGS, "ContentEncodings", Master, Parent::Id(ids::TRACK_ENTRY)),
    element(ids::CONTENT_ENCODING, "ContentEncoding", Master, Parent::Id(ids::CONTENT_ENCODINGS)),
    element(ids::CONTENT_ENCODING_ORDER, "ContentEncodingOrder", UnsignedInt, Parent::Id(ids::CONTENT_ENCODING)),
    element(ids::CONTENT_ENCODING_SCOPE, "ContentEncodingScope", UnsignedInt, Parent::Id(ids::CONTENT_ENCODING)),
    element(ids::CONTENT_ENCODING_TYPE, "ContentEncodingType", UnsignedInt, Parent::Id(ids::CONTENT_ENCODING)),
    element(ids::CONTENT_COMPRESSION, "ContentCompression", Master, Parent::Id(ids::CONTENT_ENCODING)),
    element(ids::CONTENT_COMP_ALGO, "ContentCompAlgo", UnsignedInt, Parent::Id(ids::CONTENT_COMPRESSION)),
    element(ids::CONTENT_COMP_SETTINGS, "ContentCompSettings", Binary, Parent::Id(ids::CONTENT_COMPRESSION)),
    element(ids::CONTENT_ENCRYPTION, "ContentEncryption", Master, Parent::Id(ids::CONTENT_ENCODING)),
    element(ids::CONTENT_ENC_ALGO, "ContentEncAlgo", UnsignedInt, Parent::Id(ids::CONTENT_ENCRYPTION)),
    element(ids::CONTENT_ENC_KEY_ID, "ContentEncKeyID", Binary, Parent::Id(ids::CONTENT_ENCRYPTION)),
    element(ids::CUES, "Cues", Master, Parent::Id(ids::SEGMENT)),
    element(ids::CUE_POINT, "CuePoint", Master, Parent::Id(ids::CUES)),
    element(ids::CUE_TIME, "CueTime", UnsignedInt, Parent::Id(ids::CUE_POINT)),
    element(ids::CUE_TRACK_POSITIONS, "CueTrackPositions", Master, Parent::Id(ids::CUE_POINT)),
    element(ids::CUE_TRACK, "CueTrack", UnsignedInt, Parent::Id(ids::CUE_TRACK_POSITIONS)),
    element(ids::CUE_CLUSTER_POSITION, "CueClusterPosition", UnsignedInt, Parent::Id(ids::CUE_TRACK_POSITIONS)),
    element(ids::CUE_RELATIVE_POSITION, "CueRelativePosition", UnsignedInt, Parent::Id(ids::CUE_TRACK_POSITIONS)),
    element(ids::CUE_DURATION, "CueDuration", UnsignedInt, Parent::Id(ids::CUE_TRACK_POSITIONS)),
    element(ids::CUE_BLOCK_NUMBER, "CueBlockNumber", UnsignedInt, Parent::Id(ids::CUE_TRACK_POSITIONS)),
    element(ids::CUE_CODEC_STATE, "CueCodecState", UnsignedInt, Parent::Id(ids::CUE_TRACK_POSITIONS)),
    element(ids::CUE_REFERENCE, "CueReference", Master, Parent::Id(ids::CUE_TRACK_POSITIONS)),
    element(ids::CUE_REF_TIME, "CueRefTime", UnsignedInt, Parent::Id(ids::CUE_REFERENCE)),
    element(ids::ATTACHMENTS, "Attachments", Master, Parent::Id(ids::SEGMENT)),
    element(ids::ATTACHED_FILE, "AttachedFile", Master, Parent::Id(ids::ATTACHMENTS)),
    element(ids::FILE_DESCRIPTION, "FileDescription", Utf8, Parent::Id(ids::ATTACHED_FILE)),
    element(ids::FILE_NAME, "FileName", Utf8, Parent::Id(ids::ATTACHED_FILE)),
    element(ids::FILE_MIME_TYPE, "FileMimeType", ElementType::String, Parent::Id(ids::ATTACHED_FILE)),
    element(ids::FILE_DATA, "FileData", Binary, Parent::Id(ids::ATTACHED_FILE)),
    element(ids::FILE_UID, "FileUID", UnsignedInt, Parent::Id(ids::ATTACHED_FILE)),
    element(ids::CHAPTERS, "Chapters", Master, Parent::Id(ids::SEGMENT)),
    element(ids::EDITION_ENTRY, "EditionEntry", Master, Parent::Id(ids::CHAPTERS)),
    element(ids::EDITION_UID, "EditionUID", UnsignedInt, Parent::Id(ids::EDITION_ENTRY)),
    element(ids::EDITION_FLAG_HIDDEN, "EditionFlagHidden", UnsignedInt, Parent::Id(ids::EDITION_ENTRY)),
    element(ids::EDITION_FLAG_DEFAULT, "EditionFlagDefault", UnsignedInt, Parent::Id(ids::EDITION_ENTRY)),
    element(ids::EDITION_FLAG_ORDERED, "EditionFlagOrdered", UnsignedInt, Parent::Id(ids::EDITION_ENTRY)),
    element(ids::CHAPTER_ATOM, "ChapterAtom", Master, Parent::Id(ids::EDITION_ENTRY)),
    element(ids::CHAPTER_UID, "ChapterUID", UnsignedInt, Parent::Id(ids::CHAPTER_ATOM)),
    element(ids::CHAPTER_STRING_UID, "ChapterStringUID", Utf8, Parent::Id(ids::CHAPTER_ATOM)),
    element(ids::CHAPTER_TIME_START, "ChapterTimeStart", UnsignedInt, Parent::Id(ids::CHAPTER_ATOM)),
    element(ids::CHAPTER_TIME_END, "ChapterTimeEnd", UnsignedInt, Parent::Id(ids::CHAPTER_ATOM)),
    element(ids::CHAPTER_FLAG_HIDDEN, "ChapterFlagHidden", UnsignedInt, Parent::Id(ids::CHAPTER_ATOM)),
    element(ids::CHAPTER_FLAG_ENABLED, "ChapterFlagEnabled", UnsignedInt, Parent::Id(ids::CHAPTER_ATOM)),
    element(ids::CHAPTER_SEGMENT_UID, "ChapterSegmentUID", Binary, Parent::Id(ids::CHAPTER_ATOM)),
    element(ids::CHAPTER_DISPLAY, "ChapterDisplay", Master, Parent::Id(ids::CHAPTER_ATOM)),
    element(ids::CHAP_STRING, "ChapString", Utf8, Parent::Id(ids::CHAPTER_DISPLAY)),
    element(ids::CHAP_LANGUAGE, "ChapLanguage", ElementType::String, Parent::Id(ids::CHAPTER_DISPLAY)),
    element(ids::CHAP_COUNTRY, "ChapCountry", ElementType::String, Parent::Id(ids::CHAPTER_DISPLAY)),
    element(ids::TAGS, "Tags", Master, Parent::Id(ids::SEGMENT)),
    element(ids::TAG, "Tag", Master, Parent::Id(ids::TAGS)),
    element(ids::TARGETS, "Targets", Master, Parent::Id(ids::TAG)),
    element(ids::TARGET_TYPE_VALUE, "TargetTypeValue", UnsignedInt, Parent::Id(ids::TARGETS)),
    element(ids::TARGET_TYPE, "TargetType", ElementType::String, Parent::Id(ids::TARGETS)),
    element(ids::TAG_TRACK_UID, "TagTrackUID", UnsignedInt, Parent::Id(ids::TARGETS)),
    element(ids::TAG_EDITION_UID, "TagEditionUID", UnsignedInt, Parent::Id(ids::TARGETS)),
    element(ids::TAG_CHAPTER_UID, "TagChapterUID", UnsignedInt, Parent::Id(ids::TARGETS)),
    element(ids::TAG_ATTACHMENT_UID, "TagAttachmentUID", UnsignedInt, Parent::Id(ids::TARGETS)),
    element(ids::SIMPLE_TAG, "SimpleTag", Master, Parent::Id(ids::TAG)),
    element(ids::TAG_NAME, "TagName", Utf8, Parent::Id(ids::SIMPLE_TAG)),
    element(ids::TAG_LANGUAGE, "TagLanguage", ElementType::String, Parent::Id(ids::SIMPLE_TAG)),
    element(ids::TAG_DEFAULT, "TagDefault", UnsignedInt, Parent::Id(ids::SIMPLE_TAG)),
    element(ids::TAG_STRING, "TagString", Utf8, Parent::Id(ids::SIMPLE_TAG)),
    element(ids::TAG_BINARY, "TagBinary", Binary, Parent::Id(ids::SIMPLE_TAG)),
];

fn by_id() -> &'static HashMap<u64, &'static ElementInfo> {
    static TABLE: OnceLock<HashMap<u64, &'static ElementInfo>> = OnceLock::new();
    TABLE.get_or_init(|| ELEMENTS.iter().map(|e| (e.id, e)).collect())
}

fn by_name() -> &'static HashMap<&'static str, &'static ElementInfo> {
    static TABLE: OnceLock<HashMap<&'static str, &'static ElementInfo>> = OnceLock::new();
    TABLE.get_or_init(|| ELEMENTS.iter().map(|e| (e.name, e)).collect())
}

///
/// The Matroska/WebM schema.
///
/// The underlying table is immutable and built once per process on first use.
///
/// ```
/// use ebml_stream_specification::{EbmlSchema, ElementType};
/// use ebml_stream_specification::matroska::{ids, MatroskaSchema};
///
/// assert_eq!(Some(ElementType::Master), MatroskaSchema.get_element_type(ids::CLUSTER));
/// assert_eq!(Some("SimpleBlock"), MatroskaSchema.get_name(0xa3));
/// ```
///
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MatroskaSchema;

impl MatroskaSchema {
    ///
    /// Returns every element in the table.
    ///
    pub fn elements(&self) -> &'static [ElementInfo] {
        ELEMENTS
    }
}

impl EbmlSchema for MatroskaSchema {
    fn get_element(&self, id: u64) -> Option<&ElementInfo> {
        by_id().get(&id).copied()
    }

    fn get_element_by_name(&self, name: &str) -> Option<&ElementInfo> {
        by_name().get(name).copied()
    }
}
