use serde::{Deserialize, Serialize};

/// One annotation-attachment fact: a declarative tag of type
/// `namespace.name` declared on the program element identified by
/// `parent_id`.
///
/// Records are immutable once collected. The builder consumes a finalized
/// ordered list of them; the order is part of the determinism contract.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Record {
    /// Namespace of the tag type.
    pub namespace: String,
    /// Unqualified name of the tag type.
    pub name: String,
    /// Identifier of the program element carrying the tag.
    pub parent_id: u32,
}

impl Record {
    pub fn new(namespace: &str, name: &str, parent_id: u32) -> Self {
        Self {
            namespace: namespace.to_string(),
            name: name.to_string(),
            parent_id,
        }
    }

    /// Dotted tag type name used as the hash key.
    pub fn qualified_name(&self) -> String {
        format!("{}.{}", self.namespace, self.name)
    }
}
