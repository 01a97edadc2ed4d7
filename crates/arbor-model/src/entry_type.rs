use serde::{Deserialize, Serialize};
use std::fmt;

use crate::ModelError;

/// What a tree entry's hash refers to: another tree, or file content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
#[repr(u8)]
pub enum TreeEntryType {
    Tree = 0,
    Blob = 1,
}

impl TreeEntryType {
    /// Validate a tag read from untrusted data.
    pub fn from_raw(raw: impl Into<RawTreeEntryType>) -> Result<Self, ModelError> {
        let raw = raw.into();
        raw.known().ok_or_else(|| {
            tracing::warn!("rejecting corrupt tree entry type tag: {}", raw);
            ModelError::UnknownEntryType(raw)
        })
    }

    pub fn as_raw(self) -> RawTreeEntryType {
        RawTreeEntryType(self as u8)
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Tree => "TREE",
            Self::Blob => "BLOB",
        }
    }
}

impl fmt::Display for TreeEntryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<u8> for TreeEntryType {
    type Error = ModelError;

    fn try_from(v: u8) -> Result<Self, Self::Error> {
        Self::from_raw(v)
    }
}

impl TryFrom<RawTreeEntryType> for TreeEntryType {
    type Error = ModelError;

    fn try_from(raw: RawTreeEntryType) -> Result<Self, Self::Error> {
        Self::from_raw(raw)
    }
}

impl From<TreeEntryType> for u8 {
    fn from(t: TreeEntryType) -> u8 {
        t as u8
    }
}

/// An entry type tag exactly as it appeared on the wire or on disk.
///
/// Any `u8` is representable here, including tags no [`TreeEntryType`]
/// variant maps to. Formatting never fails: unknown tags render as
/// `TreeEntryType::<n>` so corruption stays visible in logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawTreeEntryType(u8);

impl RawTreeEntryType {
    pub fn new(v: u8) -> Self {
        Self(v)
    }

    pub fn get(self) -> u8 {
        self.0
    }

    pub fn known(self) -> Option<TreeEntryType> {
        match self.0 {
            0 => Some(TreeEntryType::Tree),
            1 => Some(TreeEntryType::Blob),
            _ => None,
        }
    }
}

impl From<u8> for RawTreeEntryType {
    fn from(v: u8) -> Self {
        Self(v)
    }
}

impl From<TreeEntryType> for RawTreeEntryType {
    fn from(t: TreeEntryType) -> Self {
        t.as_raw()
    }
}

impl fmt::Display for RawTreeEntryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.known() {
            Some(t) => fmt::Display::fmt(&t, f),
            None => write!(f, "TreeEntryType::{}", self.0),
        }
    }
}
