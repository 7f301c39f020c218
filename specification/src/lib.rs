//! This crate provides the schema contract that is used by the ebml-stream crate.
//!
//! A schema is the read-only table that maps an element id onto its name, its [`ElementType`] and its place in the document tree.  The `ebml-stream` decoder consults it to decide how each tag's payload is read, but never mutates it.
//!

///
/// Contains an empty schema for use with examples or raw dumps.
///
pub mod empty_schema;

///
/// Contains the Matroska/WebM element table.
///
pub mod matroska;

///
/// Different data types defined in the EBML specification.
///
/// # Notes
///
/// "Date" elements are not given their own type.  Schemas should declare them as [`ElementType::Binary`] so that consumers can parse the unaltered bytes with the date library of their choice.
///
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum ElementType {
    Master,
    UnsignedInt,
    Integer,
    Float,
    String,
    Utf8,
    Binary,
}

///
/// Where an element is allowed to appear in a document.
///
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Parent {

    ///
    /// A top level element (for example `EBML` or `Segment`).
    ///
    Root,

    ///
    /// An element that may appear inside any master (for example `Void` or `CRC-32`).
    ///
    Global,

    ///
    /// An element whose direct parent is the master with the contained id.
    ///
    Id(u64),
}

///
/// A single entry of a schema table.
///
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct ElementInfo {
    pub id: u64,
    pub name: &'static str,
    pub element_type: ElementType,
    pub parent: Parent,
}

///
/// This trait should be implemented to describe a document format built on EBML so that it can be decoded correctly.
///
/// Only [`get_element`](EbmlSchema::get_element) and [`get_element_by_name`](EbmlSchema::get_element_by_name) are required; every other method is derived from them.
///
pub trait EbmlSchema {
    ///
    /// Pulls the table entry for an element id.
    ///
    /// This function *must* return [`None`] if the input id is not in the schema.
    ///
    fn get_element(&self, id: u64) -> Option<&ElementInfo>;

    ///
    /// Pulls the table entry for an element name.
    ///
    /// This function *must* return [`None`] if the input name is not in the schema.
    ///
    fn get_element_by_name(&self, name: &str) -> Option<&ElementInfo>;

    fn get_element_type(&self, id: u64) -> Option<ElementType> {
        self.get_element(id).map(|e| e.element_type)
    }

    fn get_name(&self, id: u64) -> Option<&'static str> {
        self.get_element(id).map(|e| e.name)
    }

    fn get_parent(&self, id: u64) -> Option<Parent> {
        self.get_element(id).map(|e| e.parent)
    }

    ///
    /// Returns whether an element of `next_id` appearing inside the unknown-sized `open_id` ends `open_id`.
    ///
    /// Regarding this method, unknown sized elements are ended if we reach an element that is:
    ///  - A parent (or further ancestor) of the open element
    ///  - A direct sibling of the open element
    ///  - A Root element
    ///
    /// Ids that are not in the schema and global elements never end anything.  More details can be found in the [EBML RFC](https://www.rfc-editor.org/rfc/rfc8794.html#name-unknown-data-size).
    ///
    fn is_ended_by(&self, open_id: u64, next_id: u64) -> bool {
        let next_parent = match self.get_parent(next_id) {
            Some(parent) => parent,
            None => return false,
        };

        match next_parent {
            Parent::Global => false,
            Parent::Root => true,
            Parent::Id(next_parent_id) => {
                if self.get_parent(open_id) == Some(Parent::Id(next_parent_id)) {
                    return true;
                }

                // Walk the ancestors of the open element looking for `next_id`.  The
                // depth bound protects against a table with a parent cycle.
                let mut current = open_id;
                for _ in 0..64 {
                    match self.get_parent(current) {
                        Some(Parent::Id(parent_id)) => {
                            if parent_id == next_id {
                                return true;
                            }
                            current = parent_id;
                        },
                        _ => return false,
                    }
                }
                false
            },
        }
    }
}

impl<S: EbmlSchema + ?Sized> EbmlSchema for &S {
    fn get_element(&self, id: u64) -> Option<&ElementInfo> {
        (**self).get_element(id)
    }

    fn get_element_by_name(&self, name: &str) -> Option<&ElementInfo> {
        (**self).get_element_by_name(name)
    }
}

#[cfg(test)]
mod tests {
    use super::matroska::{ids, MatroskaSchema};
    use super::EbmlSchema;

    #[test]
    fn cluster_is_ended_by_next_cluster() {
        assert!(MatroskaSchema.is_ended_by(ids::CLUSTER, ids::CLUSTER));
    }

    #[test]
    fn cluster_is_ended_by_segment_sibling() {
        assert!(MatroskaSchema.is_ended_by(ids::CLUSTER, ids::CUES));
    }

    #[test]
    fn cluster_is_ended_by_root() {
        assert!(MatroskaSchema.is_ended_by(ids::CLUSTER, ids::EBML));
        assert!(MatroskaSchema.is_ended_by(ids::SEGMENT, ids::SEGMENT));
    }

    #[test]
    fn cluster_is_not_ended_by_children() {
        assert!(!MatroskaSchema.is_ended_by(ids::CLUSTER, ids::SIMPLE_BLOCK));
        assert!(!MatroskaSchema.is_ended_by(ids::CLUSTER, ids::TIMECODE));
        assert!(!MatroskaSchema.is_ended_by(ids::CLUSTER, ids::BLOCK_GROUP));
    }

    #[test]
    fn nothing_is_ended_by_globals_or_unknown_ids() {
        assert!(!MatroskaSchema.is_ended_by(ids::CLUSTER, ids::VOID));
        assert!(!MatroskaSchema.is_ended_by(ids::CLUSTER, ids::CRC32));
        assert!(!MatroskaSchema.is_ended_by(ids::CLUSTER, 0x4fff));
    }

    #[test]
    fn block_group_is_ended_by_ancestor() {
        assert!(MatroskaSchema.is_ended_by(ids::BLOCK_GROUP, ids::CLUSTER));
        assert!(MatroskaSchema.is_ended_by(ids::BLOCK_GROUP, ids::SIMPLE_BLOCK));
    }
}
