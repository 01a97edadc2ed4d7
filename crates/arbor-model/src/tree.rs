use serde::{Deserialize, Serialize};

use crate::entry::TreeEntry;
use crate::ModelError;

/// A directory listing: entries sorted by name, names unique.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<TreeEntry>", into = "Vec<TreeEntry>")]
pub struct Tree {
    entries: Vec<TreeEntry>,
}

impl Tree {
    pub fn new(mut entries: Vec<TreeEntry>) -> Result<Self, ModelError> {
        entries.sort_by(|a, b| a.name().cmp(b.name()));
        if let Some(dup) = entries.windows(2).find(|w| w[0].name() == w[1].name()) {
            return Err(ModelError::DuplicateEntry(dup[0].name().to_string()));
        }
        Ok(Self { entries })
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[TreeEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TreeEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn position(&self, name: &str) -> Result<usize, usize> {
        self.entries.binary_search_by(|e| e.name().as_str().cmp(name))
    }

    pub fn get(&self, name: &str) -> Option<&TreeEntry> {
        self.position(name).ok().map(|i| &self.entries[i])
    }

    /// Copy of this tree with `entry` inserted, replacing any entry of the same name.
    pub fn with_entry(&self, entry: TreeEntry) -> Self {
        let mut entries = self.entries.clone();
        match self.position(entry.name().as_str()) {
            Ok(i) => {
                if entries[i] != entry {
                    tracing::debug!("replacing tree entry {} with {}", entries[i], entry);
                }
                entries[i] = entry;
            }
            Err(i) => entries.insert(i, entry),
        }
        Self { entries }
    }

    /// Copy of this tree without the entry called `name`.
    pub fn without_entry(&self, name: &str) -> Self {
        let mut entries = self.entries.clone();
        if let Ok(i) = self.position(name) {
            entries.remove(i);
        }
        Self { entries }
    }
}

impl TryFrom<Vec<TreeEntry>> for Tree {
    type Error = ModelError;

    fn try_from(entries: Vec<TreeEntry>) -> Result<Self, Self::Error> {
        Self::new(entries)
    }
}

impl From<Tree> for Vec<TreeEntry> {
    fn from(tree: Tree) -> Self {
        tree.entries
    }
}

impl<'a> IntoIterator for &'a Tree {
    type Item = &'a TreeEntry;
    type IntoIter = std::slice::Iter<'a, TreeEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
