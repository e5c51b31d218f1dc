use serde::{Deserialize, Serialize};

use super::TypeTag;

/// One declared form of a clipboard entry: a type tag plus the raw payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Representation {
    pub type_tag: TypeTag,
    pub bytes: Vec<u8>,
}

impl Representation {
    pub fn new(type_tag: impl Into<TypeTag>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            type_tag: type_tag.into(),
            bytes: bytes.into(),
        }
    }

    pub fn size_bytes(&self) -> i64 {
        self.bytes.len() as i64
    }

    pub fn is_marker(&self) -> bool {
        self.type_tag.is_marker()
    }
}
