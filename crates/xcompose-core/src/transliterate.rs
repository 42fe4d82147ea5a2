// XCompose Transliteration
// Derives an alternate-layout variant of the configuration by renaming key tokens

use indexmap::IndexMap;
use std::path::Path;

use crate::entry::{Block, Entry, KeySequence};

/// Token substitution table, e.g. `"a" -> "Cyrillic_a"`
pub type TranslitMap = IndexMap<String, String>;

/// Errors while loading a transliteration table
#[derive(Debug, thiserror::Error)]
pub enum TranslitError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Parse a transliteration table from a JSON object of strings
pub fn parse_translit_map(content: &str) -> Result<TranslitMap, TranslitError> {
    Ok(serde_json::from_str(content)?)
}

/// Load a transliteration table from disk
///
/// A missing file is not an error: it yields `Ok(None)` so the caller can
/// skip the transliterated section.
pub fn load_translit_map<P: AsRef<Path>>(path: P) -> Result<Option<TranslitMap>, TranslitError> {
    let path = path.as_ref();
    if !path.exists() {
        log::debug!("no transliteration table at {}", path.display());
        return Ok(None);
    }

    let content = std::fs::read_to_string(path)?;
    let map = parse_translit_map(&content)?;
    log::debug!(
        "loaded transliteration table with {} entries from {}",
        map.len(),
        path.display()
    );
    Ok(Some(map))
}

/// Apply the table to one entry, `None` if no token changes
pub fn transliterate_entry(entry: &Entry, map: &TranslitMap) -> Option<Entry> {
    let keys: KeySequence = entry
        .keys()
        .iter()
        .map(|key| map.get(key).unwrap_or(key).clone())
        .collect();

    if keys.as_slice() == entry.keys() {
        None
    } else {
        Some(entry.with_keys(keys))
    }
}

/// Transliterate every block, keeping only entries whose keys changed
///
/// Blocks left without entries are dropped; headers are preserved.
pub fn transliterate_blocks(blocks: &[Block], map: &TranslitMap) -> Vec<Block> {
    blocks
        .iter()
        .filter_map(|block| {
            let entries: Vec<Entry> = block
                .entries()
                .iter()
                .filter_map(|entry| transliterate_entry(entry, map))
                .collect();
            (!entries.is_empty()).then(|| Block::new(block.header(), entries))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::key_sequence;

    const TOY_MAP: &str = r#"{
        "i": "Cyrillic_i",
        "a": "Cyrillic_a",
        "g": "Cyrillic_ghe",
        "b": "Cyrillic_be",
        "same": "same"
    }"#;

    fn entry(keys: &[&str], line: usize) -> Entry {
        Entry::new(key_sequence(keys.iter().copied()), "x", "U78", "DESC", line)
    }

    #[test]
    fn test_parse_translit_map_keeps_order() {
        let map = parse_translit_map(TOY_MAP).unwrap();
        assert_eq!(map.len(), 5);
        assert_eq!(map.get_index(0), Some((&"i".to_string(), &"Cyrillic_i".to_string())));
    }

    #[test]
    fn test_parse_translit_map_rejects_non_strings() {
        assert!(matches!(
            parse_translit_map(r#"{"a": 1}"#),
            Err(TranslitError::Json(_))
        ));
    }

    #[test]
    fn test_transliterate_blocks_filters_unchanged() {
        let map = parse_translit_map(TOY_MAP).unwrap();
        let blocks = vec![Block::new(
            "TEST",
            vec![
                entry(&["i", "a"], 1),
                entry(&["g", "b"], 2),
                entry(&["X", "Y"], 3),
                entry(&["same", "X"], 4),
            ],
        )];

        let result = transliterate_blocks(&blocks, &map);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].header(), "TEST");
        assert_eq!(result[0].len(), 2);
        assert_eq!(result[0].entries()[0].keys(), ["Cyrillic_i", "Cyrillic_a"]);
        assert_eq!(result[0].entries()[1].keys(), ["Cyrillic_ghe", "Cyrillic_be"]);
        assert_eq!(result[0].entries()[1].line_number(), 2);
    }

    #[test]
    fn test_only_mapped_tokens_change() {
        let map = parse_translit_map(TOY_MAP).unwrap();
        let original = entry(&["Multi_key", "i", "Z"], 9);
        let moved = transliterate_entry(&original, &map).unwrap();
        assert_eq!(moved.keys(), ["Multi_key", "Cyrillic_i", "Z"]);
        assert_eq!(moved.symbol(), original.symbol());
    }

    #[test]
    fn test_unchanged_blocks_are_dropped() {
        let map = parse_translit_map(TOY_MAP).unwrap();
        let blocks = vec![
            Block::new("KEEP", vec![entry(&["a"], 1)]),
            Block::new("DROP", vec![entry(&["Q"], 2)]),
        ];
        let result = transliterate_blocks(&blocks, &map);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].header(), "KEEP");
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = load_translit_map(dir.path().join("absent.json")).unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("parallel-symbols.json");
        std::fs::write(&path, TOY_MAP).unwrap();

        let map = load_translit_map(&path).unwrap().unwrap();
        assert_eq!(map.get("g").map(String::as_str), Some("Cyrillic_ghe"));
    }
}
