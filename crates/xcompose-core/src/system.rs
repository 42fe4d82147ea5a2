// XCompose System Definitions
// Locates and loads the locale's system Compose file

use std::path::{Path, PathBuf};

use crate::entry::{flatten, Entry};
use crate::parser::parse_compose;

/// Where X11 keeps per-locale Compose files
pub const DEFAULT_LOCALE_DIR: &str = "/usr/share/X11/locale";

/// Candidate Compose files for a locale, most specific first
///
/// `en_US.UTF-8` yields `<root>/en_US.UTF-8/Compose` then
/// `<root>/en_US/Compose`.
pub fn candidate_paths(root: &Path, locale: &str) -> Vec<PathBuf> {
    let base = locale.split('.').next().unwrap_or(locale);
    let mut paths = vec![root.join(locale).join("Compose")];
    if base != locale {
        paths.push(root.join(base).join("Compose"));
    }
    paths
}

/// Load the system entries for a locale
///
/// Candidates that are missing, unreadable, fail to parse, or contain no
/// entries are skipped. Returns `None` when no candidate yields entries.
pub fn load_system_compose(root: &Path, locale: &str) -> Option<Vec<Entry>> {
    for path in candidate_paths(root, locale) {
        if !path.exists() {
            log::trace!("no system Compose at {}", path.display());
            continue;
        }

        let content = match std::fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) => {
                log::debug!("skipping {}: {}", path.display(), e);
                continue;
            }
        };

        match parse_compose(&content) {
            Ok(blocks) => {
                let entries = flatten(&blocks);
                if entries.is_empty() {
                    log::debug!("skipping {}: no entries", path.display());
                    continue;
                }
                log::debug!("loaded {} system entries from {}", entries.len(), path.display());
                return Some(entries);
            }
            Err(e) => {
                // System files carry constructs this grammar does not cover
                log::debug!("skipping {}: {}", path.display(), e);
            }
        }
    }

    None
}
