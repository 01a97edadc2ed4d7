use serde::{Deserialize, Serialize};
use std::fmt;

use crate::entry_type::TreeEntryType;
use crate::ModelError;

pub const S_IFDIR: u32 = 0o040000;
pub const S_IFREG: u32 = 0o100000;
pub const S_IFLNK: u32 = 0o120000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FileType {
    Regular,
    Executable,
    Symlink,
    Directory,
}

impl FileType {
    /// Directories are trees; everything else is stored as a blob.
    pub fn entry_type(self) -> TreeEntryType {
        match self {
            Self::Directory => TreeEntryType::Tree,
            Self::Regular | Self::Executable | Self::Symlink => TreeEntryType::Blob,
        }
    }

    pub fn format_bits(self) -> u32 {
        match self {
            Self::Regular | Self::Executable => S_IFREG,
            Self::Symlink => S_IFLNK,
            Self::Directory => S_IFDIR,
        }
    }
}

/// Owner rwx bits, in the low three bits.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct OwnerPermissions(u8);

impl OwnerPermissions {
    pub const READ: u8 = 0b100;
    pub const WRITE: u8 = 0b010;
    pub const EXEC: u8 = 0b001;

    pub fn new(bits: u8) -> Result<Self, ModelError> {
        if bits & !0b111 != 0 {
            return Err(ModelError::InvalidOwnerPermissions(bits));
        }
        Ok(Self(bits))
    }

    /// Keep only the owner triplet of a full unix mode, e.g. `0o644` -> `rw-`.
    pub fn from_mode(mode: u32) -> Self {
        Self(((mode >> 6) & 0b111) as u8)
    }

    pub fn bits(self) -> u8 {
        self.0
    }

    pub fn can_read(self) -> bool {
        self.0 & Self::READ != 0
    }

    pub fn can_write(self) -> bool {
        self.0 & Self::WRITE != 0
    }

    pub fn can_execute(self) -> bool {
        self.0 & Self::EXEC != 0
    }
}

impl TryFrom<u8> for OwnerPermissions {
    type Error = ModelError;

    fn try_from(bits: u8) -> Result<Self, Self::Error> {
        Self::new(bits)
    }
}

impl From<OwnerPermissions> for u8 {
    fn from(p: OwnerPermissions) -> u8 {
        p.0
    }
}

impl fmt::Display for OwnerPermissions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let flag = |set: bool, c: char| if set { c } else { '-' };
        write!(
            f,
            "{}{}{}",
            flag(self.can_read(), 'r'),
            flag(self.can_write(), 'w'),
            flag(self.can_execute(), 'x')
        )
    }
}

impl fmt::Debug for OwnerPermissions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "OwnerPermissions({self})")
    }
}
