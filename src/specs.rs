//!
//! Provides the EBML schema types.
//!
//! Implement [`EbmlSchema`] to read a custom EBML document type, or use the included [`MatroskaSchema`].
//!

pub use ebml_stream_specification::EbmlSchema;
pub use ebml_stream_specification::ElementInfo;
pub use ebml_stream_specification::ElementType;
pub use ebml_stream_specification::Parent;

pub use ebml_stream_specification::empty_schema::EmptySchema;
pub use ebml_stream_specification::matroska::{ids, MatroskaSchema};
