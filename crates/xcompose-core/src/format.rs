// XCompose Formatter
// Renders blocks back to aligned compose text

use crate::entry::{Block, Entry};
use crate::transliterate::{transliterate_blocks, TranslitMap};

/// First line of every generated file: pull in the locale's system definitions
pub const INCLUDE_LINE: &str = "include \"%L\"";

/// Banner placed above the transliterated section
pub const TRANSLIT_BANNER: &str = "\
########################################
#      RUSSIAN TRANSLIT VERSION        #
########################################";

/// Render a key list as `<k1> <k2> <k3>`
pub fn format_key_sequence<S: AsRef<str>>(keys: &[S]) -> String {
    keys.iter()
        .map(|key| format!("<{}>", key.as_ref()))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Widest rendered key sequence in a list of entries, in characters
pub fn key_width(entries: &[Entry]) -> usize {
    entries
        .iter()
        .map(|entry| format_key_sequence(entry.keys()).chars().count())
        .max()
        .unwrap_or(0)
}

fn quote_symbol(symbol: &str) -> String {
    let mut quoted = String::with_capacity(symbol.len() + 2);
    quoted.push('"');
    for ch in symbol.chars() {
        if ch == '"' || ch == '\\' {
            quoted.push('\\');
        }
        quoted.push(ch);
    }
    quoted.push('"');
    quoted
}

/// Render one entry, padding its key sequence to `width` characters
///
/// Output looks like `<Multi_key> <i> <a>    : "𝑎" U1D44E # MATHEMATICAL ITALIC SMALL A`.
pub fn format_entry(entry: &Entry, width: usize) -> String {
    let keys = format_key_sequence(entry.keys());
    let padding = width.saturating_sub(keys.chars().count());

    format!(
        "{}{} : {} {} # {}",
        keys,
        " ".repeat(padding),
        quote_symbol(entry.symbol()),
        entry.unicode_point(),
        entry.description()
    )
}

/// Render a block: optional framed header, then entries aligned on the colon
pub fn format_block(block: &Block) -> String {
    let mut lines = Vec::with_capacity(block.len() + 4);

    if !block.header().is_empty() {
        let delimiter = "#".repeat(block.header().chars().count() + 4);
        lines.push(delimiter.clone());
        lines.push(format!("# {} #", block.header()));
        lines.push(delimiter);
        lines.push(String::new());
    }

    let width = key_width(block.entries());
    lines.extend(block.entries().iter().map(|entry| format_entry(entry, width)));

    lines.join("\n")
}

/// Render blocks one after another, each starting on its own line
pub fn format_blocks(blocks: &[Block]) -> String {
    blocks
        .iter()
        .map(format_block)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render the complete generated file
///
/// The include directive comes first, then the base blocks. When a
/// non-empty transliteration table is given, the transliterated variant
/// follows under its own banner.
pub fn render_document(blocks: &[Block], translit: Option<&TranslitMap>) -> String {
    let mut out = String::new();
    out.push_str(INCLUDE_LINE);
    out.push_str("\n\n");
    out.push_str(&format_blocks(blocks));
    out.push_str("\n\n");

    if let Some(map) = translit.filter(|map| !map.is_empty()) {
        out.push_str(TRANSLIT_BANNER);
        out.push_str("\n\n");
        out.push_str(&format_blocks(&transliterate_blocks(blocks, map)));
    }

    out
}
