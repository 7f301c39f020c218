#![allow(dead_code)]

use ebml_stream::specs::{EbmlSchema, ElementInfo, ElementType, Parent};

pub const ROOT: u64 = 0x81;
pub const INT: u64 = 0x4101;
pub const STRING: u64 = 0x4102;
pub const PARENT: u64 = 0x4103;
pub const CHILD: u64 = 0x210301;
pub const UNLISTED: u64 = 0x4100;
pub const GLOBAL_PADDING: u64 = 0xec;

static ELEMENTS: [ElementInfo; 6] = [
    ElementInfo { id: ROOT, name: "Root", element_type: ElementType::Master, parent: Parent::Root },
    ElementInfo { id: INT, name: "Int", element_type: ElementType::UnsignedInt, parent: Parent::Id(ROOT) },
    ElementInfo { id: STRING, name: "String", element_type: ElementType::Utf8, parent: Parent::Id(ROOT) },
    ElementInfo { id: PARENT, name: "Parent", element_type: ElementType::Master, parent: Parent::Id(ROOT) },
    ElementInfo { id: CHILD, name: "Child", element_type: ElementType::UnsignedInt, parent: Parent::Id(PARENT) },
    ElementInfo { id: GLOBAL_PADDING, name: "Padding", element_type: ElementType::Binary, parent: Parent::Global },
];

pub struct TestSchema;

impl EbmlSchema for TestSchema {
    fn get_element(&self, id: u64) -> Option<&ElementInfo> {
        ELEMENTS.iter().find(|element| element.id == id)
    }

    fn get_element_by_name(&self, name: &str) -> Option<&ElementInfo> {
        ELEMENTS.iter().find(|element| element.name == name)
    }
}
