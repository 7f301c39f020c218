//! This crate provides a push-driven streaming decoder and encoder for [EBML][EBML] data.
//!
//! [EBML][EBML] stands for Extensible Binary Meta-Language and is somewhat of a
//! binary version of XML. It's used for container formats like [WebM][webm] or
//! [MKV][mkv].
//!
//! # Decoding and encoding
//! The [`TagDecoder`] accepts byte chunks of any size as they arrive and yields a flat sequence of [`tags::Tag`] events: `Start` and `End` for "Master" tags, and `Content` for everything else.  The [`TagEncoder`] accepts the same kind of event sequence and produces bytes again, one complete top level element at a time.  Neither needs the whole document in memory; a master only has to be held in memory if the decoder is asked to buffer it.
//!
//! With the `futures` feature, the [`stream`] module wraps both as [`futures::Stream`] transforms.
//!
//! # Schemas
//! Both engines are schema-agnostic.  Element types, names and parents come from an implementation of [`specs::EbmlSchema`]; a Matroska/WebM table is included as [`specs::MatroskaSchema`].
//!
//! # Unknown sizes
//! Masters may be declared with an "Unknown Data Size" as defined in [RFC8794][rfc8794], as live streams usually do.  The decoder closes them when the schema shows that the next element cannot be one of their children, or when input ends.
//!
//! [EBML]: http://ebml.sourceforge.net/
//! [webm]: https://www.webmproject.org/
//! [mkv]: http://www.matroska.org/technical/specs/index.html
//! [rfc8794]: https://datatracker.ietf.org/doc/rfc8794/
//!

pub mod block;
pub mod data;
mod decoder;
mod encoder;
mod errors;
pub mod specs;
pub mod tags;
pub mod tools;

#[cfg(feature = "futures")]
pub mod stream;

pub use self::decoder::TagDecoder;
pub use self::encoder::TagEncoder;

pub mod error {
    //!
    //! Errors returned by this crate.
    //!

    pub use super::errors::decoder::DecoderError;
    pub use super::errors::encoder::EncoderError;
    pub use super::errors::schema::SchemaError;
    pub use super::errors::tool::ToolError;
}
