use serde::{Deserialize, Serialize};
use std::fmt;

use crate::entry_type::TreeEntryType;
use crate::hash::Hash;
use crate::mode::{FileType, OwnerPermissions};
use crate::path::PathComponent;

/// One named child of a tree.
///
/// Entries are plain values: two entries are equal exactly when their hash,
/// file type, owner permissions and name are all equal. There are no setters;
/// the `with_*` methods build a new entry and leave `self` untouched.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TreeEntry {
    hash: Hash,
    file_type: FileType,
    owner_permissions: OwnerPermissions,
    name: PathComponent,
}

impl TreeEntry {
    pub fn new(
        hash: Hash,
        name: PathComponent,
        file_type: FileType,
        owner_permissions: OwnerPermissions,
    ) -> Self {
        Self {
            hash,
            file_type,
            owner_permissions,
            name,
        }
    }

    pub fn hash(&self) -> &Hash {
        &self.hash
    }

    pub fn file_type(&self) -> FileType {
        self.file_type
    }

    pub fn owner_permissions(&self) -> OwnerPermissions {
        self.owner_permissions
    }

    pub fn name(&self) -> &PathComponent {
        &self.name
    }

    pub fn entry_type(&self) -> TreeEntryType {
        self.file_type.entry_type()
    }

    pub fn is_tree(&self) -> bool {
        self.entry_type() == TreeEntryType::Tree
    }

    /// Unix-style mode: file format bits plus the owner triplet.
    pub fn mode(&self) -> u32 {
        self.file_type.format_bits() | (u32::from(self.owner_permissions.bits()) << 6)
    }

    pub fn with_hash(&self, hash: Hash) -> Self {
        Self { hash, ..self.clone() }
    }

    pub fn with_name(&self, name: PathComponent) -> Self {
        Self { name, ..self.clone() }
    }

    pub fn with_file_type(&self, file_type: FileType) -> Self {
        Self {
            file_type,
            ..self.clone()
        }
    }

    pub fn with_owner_permissions(&self, owner_permissions: OwnerPermissions) -> Self {
        Self {
            owner_permissions,
            ..self.clone()
        }
    }
}

impl fmt::Display for TreeEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:06o} {} {} {}",
            self.mode(),
            self.entry_type(),
            self.hash,
            self.name
        )
    }
}
