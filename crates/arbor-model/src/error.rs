use thiserror::Error;

use crate::entry_type::RawTreeEntryType;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("invalid hash: {0}")]
    InvalidHash(String),
    #[error("invalid path component {name:?}: {reason}")]
    InvalidPathComponent { name: String, reason: &'static str },
    #[error("unknown tree entry type: {0}")]
    UnknownEntryType(RawTreeEntryType),
    #[error("invalid owner permissions: {0:#o}")]
    InvalidOwnerPermissions(u8),
    #[error("duplicate tree entry: {0}")]
    DuplicateEntry(String),
}
