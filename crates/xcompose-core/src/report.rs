// XCompose Reports
// Human-readable collision and duplicate warnings for the diagnostic stream

use std::io::{self, Write};

use crate::collision::{Collision, Duplicate};
use crate::format::format_key_sequence;
use crate::unicode::escape_symbol;

const RULE_WIDTH: usize = 60;

fn rule() -> String {
    "=".repeat(RULE_WIDTH)
}

/// Write a numbered report of prefix collisions
///
/// Nothing is written when the list is empty.
pub fn write_collision_report<W: Write>(out: &mut W, collisions: &[Collision]) -> io::Result<()> {
    if collisions.is_empty() {
        return Ok(());
    }

    writeln!(out)?;
    writeln!(out, "{}", rule())?;
    writeln!(out, "WARNING: {} PREFIX COLLISION(S) DETECTED", collisions.len())?;
    writeln!(out, "{}", rule())?;
    writeln!(out)?;

    for (i, collision) in collisions.iter().enumerate() {
        writeln!(out, "Collision #{}:", i + 1)?;
        writeln!(out, "  Prefix sequence: {}", format_key_sequence(collision.prefix_seq()))?;
        writeln!(
            out,
            "    Line {}, {}",
            collision.prefix_entry.line_number(),
            collision.prefix_source
        )?;
        writeln!(out, "    Symbol: {}", escape_symbol(collision.prefix_entry.symbol()))?;
        writeln!(
            out,
            "  Is prefix of: {}",
            format_key_sequence(collision.longer_entry.keys())
        )?;
        writeln!(
            out,
            "    Line {}, {}",
            collision.longer_entry.line_number(),
            collision.longer_source
        )?;
        writeln!(out, "    Symbol: {}", escape_symbol(collision.longer_entry.symbol()))?;
        writeln!(out)?;
    }

    writeln!(out, "{}", rule())?;
    writeln!(out)?;
    Ok(())
}

/// Write a report of key sequences bound more than once
pub fn write_duplicate_report<W: Write>(out: &mut W, duplicates: &[Duplicate]) -> io::Result<()> {
    if duplicates.is_empty() {
        return Ok(());
    }

    writeln!(out)?;
    writeln!(out, "WARNING: {} DUPLICATE SEQUENCE(S) DETECTED", duplicates.len())?;
    for duplicate in duplicates {
        writeln!(out, "  {}", format_key_sequence(duplicate.keys()))?;
        for entry in &duplicate.entries {
            writeln!(
                out,
                "    Line {}: {}",
                entry.line_number(),
                escape_symbol(entry.symbol())
            )?;
        }
    }
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collision::{find_collisions, find_duplicates};
    use crate::entry::{key_sequence, Entry};

    fn entry(keys: &[&str], symbol: &str, line: usize) -> Entry {
        Entry::new(key_sequence(keys.iter().copied()), symbol, "", "TEST", line)
    }

    fn render<F>(write: F) -> String
    where
        F: FnOnce(&mut Vec<u8>) -> io::Result<()>,
    {
        let mut buf = Vec::new();
        write(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_empty_reports_write_nothing() {
        assert_eq!(render(|out| write_collision_report(out, &[])), "");
        assert_eq!(render(|out| write_duplicate_report(out, &[])), "");
    }

    #[test]
    fn test_collision_report_contents() {
        let draft = vec![entry(&["Multi_key", "a"], "\u{0301}", 3)];
        let system = vec![entry(&["Multi_key", "a", "e"], "æ", 120)];
        let collisions = find_collisions(&draft, Some(system.as_slice()));

        let text = render(|out| write_collision_report(out, &collisions));
        assert!(text.contains("WARNING: 1 PREFIX COLLISION(S) DETECTED"));
        assert!(text.contains("Collision #1:"));
        assert!(text.contains("  Prefix sequence: <Multi_key> <a>\n    Line 3, draft\n"));
        assert!(text.contains("    Symbol: \u{25CC}\u{0301}\n"));
        assert!(text.contains("  Is prefix of: <Multi_key> <a> <e>\n    Line 120, system\n"));
    }

    #[test]
    fn test_duplicate_report_contents() {
        let entries = vec![entry(&["x", "y"], "1", 1), entry(&["x", "y"], "2", 2)];
        let text = render(|out| write_duplicate_report(out, &find_duplicates(&entries)));
        assert!(text.contains("WARNING: 1 DUPLICATE SEQUENCE(S) DETECTED"));
        assert!(text.contains("  <x> <y>\n    Line 1: 1\n    Line 2: 2\n"));
    }
}
