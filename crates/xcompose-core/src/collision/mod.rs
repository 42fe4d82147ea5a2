// XCompose Collision Detection
// Finds key sequences that are proper prefixes of other sequences

pub mod detect;
pub mod duplicate;

pub use detect::{find_collisions, find_cross_collisions, find_internal_collisions, is_proper_prefix};
pub use duplicate::{find_duplicates, Duplicate};

use crate::entry::Entry;

/// Where an entry list came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum_macros::Display)]
#[strum(serialize_all = "lowercase")]
pub enum Source {
    /// The user's draft file
    Draft,
    /// The locale's system Compose file
    System,
}

/// One prefix relation between two entries
///
/// The shorter sequence shadows the longer one: once the prefix is typed,
/// a longest-match input method can never reach the longer binding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collision {
    pub prefix_entry: Entry,
    pub prefix_source: Source,
    pub longer_entry: Entry,
    pub longer_source: Source,
}

impl Collision {
    /// The shorter, shadowing key sequence
    pub fn prefix_seq(&self) -> &[String] {
        self.prefix_entry.keys()
    }

    /// True when both sides come from the same list
    pub fn is_internal(&self) -> bool {
        self.prefix_source == self.longer_source
    }
}
