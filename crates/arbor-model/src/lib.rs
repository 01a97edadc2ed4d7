pub mod entry;
pub mod entry_type;
pub mod error;
pub mod hash;
pub mod mode;
pub mod path;
pub mod tree;

pub use entry::TreeEntry;
pub use entry_type::{RawTreeEntryType, TreeEntryType};
pub use error::ModelError;
pub use hash::Hash;
pub use mode::{FileType, OwnerPermissions};
pub use path::PathComponent;
pub use tree::Tree;
