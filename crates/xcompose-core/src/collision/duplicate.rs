// XCompose Collision Detection - Duplicate Sequences
// Sequences bound more than once; only one of the bindings can ever fire

use indexmap::IndexMap;

use crate::entry::Entry;

/// A key sequence bound by two or more entries of the same list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Duplicate {
    /// Every entry bound to the sequence, in source order
    pub entries: Vec<Entry>,
}

impl Duplicate {
    /// The shared key sequence
    pub fn keys(&self) -> &[String] {
        self.entries.first().map(Entry::keys).unwrap_or_default()
    }
}

/// Group entries by exact key sequence and keep the groups with more than one member
///
/// Groups come out in order of first appearance.
pub fn find_duplicates(entries: &[Entry]) -> Vec<Duplicate> {
    let mut groups: IndexMap<&[String], Vec<&Entry>> = IndexMap::new();
    for entry in entries {
        groups.entry(entry.keys()).or_default().push(entry);
    }

    groups
        .into_values()
        .filter(|group| group.len() > 1)
        .map(|group| Duplicate {
            entries: group.into_iter().cloned().collect(),
        })
        .collect()
}
