// XCompose Collision Detection - Pairwise Search
//
// Every pair is compared directly. Layout files hold hundreds to a few
// thousand entries, so the quadratic cost stays small.

use super::{Collision, Source};
use crate::entry::Entry;

/// Check if `a` is a proper prefix of `b`
///
/// Equal sequences are not proper prefixes of each other.
pub fn is_proper_prefix<T: PartialEq>(a: &[T], b: &[T]) -> bool {
    a.len() < b.len() && b.starts_with(a)
}

/// Build the collision record for a pair, if either side shadows the other
fn compare(
    first: &Entry,
    first_source: Source,
    second: &Entry,
    second_source: Source,
) -> Option<Collision> {
    if is_proper_prefix(first.keys(), second.keys()) {
        Some(Collision {
            prefix_entry: first.clone(),
            prefix_source: first_source,
            longer_entry: second.clone(),
            longer_source: second_source,
        })
    } else if is_proper_prefix(second.keys(), first.keys()) {
        Some(Collision {
            prefix_entry: second.clone(),
            prefix_source: second_source,
            longer_entry: first.clone(),
            longer_source: first_source,
        })
    } else {
        None
    }
}

/// Find collisions within a single list of entries
///
/// Each unordered pair is visited once and tested in both directions.
pub fn find_internal_collisions(entries: &[Entry], source: Source) -> Vec<Collision> {
    let mut collisions = Vec::new();

    for (i, first) in entries.iter().enumerate() {
        for second in &entries[i + 1..] {
            if let Some(collision) = compare(first, source, second, source) {
                collisions.push(collision);
            }
        }
    }

    collisions
}

/// Find collisions between two independently parsed lists
///
/// Every entry of `a` is compared with every entry of `b`. Passing the same
/// list twice double-counts its internal collisions.
pub fn find_cross_collisions(
    a: &[Entry],
    source_a: Source,
    b: &[Entry],
    source_b: Source,
) -> Vec<Collision> {
    let mut collisions = Vec::new();

    for first in a {
        for second in b {
            if let Some(collision) = compare(first, source_a, second, source_b) {
                collisions.push(collision);
            }
        }
    }

    collisions
}

/// Detect all prefix collisions for a draft
///
/// Internal draft collisions come first, followed by collisions against the
/// system entries when they are available.
pub fn find_collisions(draft: &[Entry], system: Option<&[Entry]>) -> Vec<Collision> {
    let mut collisions = find_internal_collisions(draft, Source::Draft);
    log::debug!("{} internal collisions in draft", collisions.len());

    if let Some(system) = system.filter(|entries| !entries.is_empty()) {
        let cross = find_cross_collisions(draft, Source::Draft, system, Source::System);
        log::debug!(
            "{} collisions against {} system entries",
            cross.len(),
            system.len()
        );
        collisions.extend(cross);
    }

    collisions
}
