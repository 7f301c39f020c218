use super::{EbmlSchema, ElementInfo};

///
/// An empty schema for use with examples or testing.
///
/// Every lookup misses, so a decoder using this schema reads every element as [`ElementType::Binary`](super::ElementType::Binary) and never streams a master.  Useful for dumping the top level framing of an unknown document.
///
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EmptySchema;

impl EbmlSchema for EmptySchema {
    fn get_element(&self, _id: u64) -> Option<&ElementInfo> {
        None
    }

    fn get_element_by_name(&self, _name: &str) -> Option<&ElementInfo> {
        None
    }
}
