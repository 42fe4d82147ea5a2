// XCompose Parser - Documents
// Splits a whole file into header-delimited blocks of entries

use super::line::parse_line;
use super::ParseError;
use crate::entry::{Block, Entry};

/// Parse a compose file into blocks of entries
///
/// A file without header markers yields a single block with an empty
/// header. The first malformed entry line aborts the whole parse.
pub fn parse_compose(content: &str) -> Result<Vec<Block>, ParseError> {
    let lines: Vec<&str> = content.split('\n').collect();
    let mut blocks = Vec::new();
    let mut entries: Vec<Entry> = Vec::new();
    let mut header = String::new();

    let mut i = 0;
    while i < lines.len() {
        if let Some(next_header) = detect_block_header(&lines, i) {
            if !entries.is_empty() {
                blocks.push(Block::new(
                    std::mem::take(&mut header),
                    std::mem::take(&mut entries),
                ));
            }
            log::trace!("block header {:?} at line {}", next_header, i + 1);
            header = next_header;
            i += 3;
            continue;
        }

        let line = lines[i];
        if !is_empty_line(line) && !is_comment_line(line) {
            entries.push(parse_line(line, i + 1)?);
        }
        i += 1;
    }

    if !entries.is_empty() {
        blocks.push(Block::new(header, entries));
    }

    if blocks.is_empty() {
        blocks.push(Block::default());
    }

    log::debug!(
        "parsed {} entries in {} blocks",
        blocks.iter().map(Block::len).sum::<usize>(),
        blocks.len()
    );

    Ok(blocks)
}

/// Check whether a block header starts at `index`
///
/// A header is three lines: a delimiter made only of `#`, a comment line
/// holding the label, and a second delimiter. Returns the label with its
/// surrounding `#` and whitespace removed.
pub fn detect_block_header(lines: &[&str], index: usize) -> Option<String> {
    let [open, label, close] = lines.get(index..index + 3)? else {
        return None;
    };

    if is_header_delimiter(open) && is_comment_line(label) && is_header_delimiter(close) {
        Some(label.trim().trim_matches('#').trim().to_string())
    } else {
        None
    }
}

/// Line starts with `#` after leading whitespace
pub fn is_comment_line(line: &str) -> bool {
    line.trim_start().starts_with('#')
}

/// Line is empty or whitespace only
pub fn is_empty_line(line: &str) -> bool {
    line.trim().is_empty()
}

/// Line consists only of `#` characters, ignoring surrounding whitespace
pub fn is_header_delimiter(line: &str) -> bool {
    let trimmed = line.trim();
    !trimmed.is_empty() && trimmed.chars().all(|c| c == '#')
}
