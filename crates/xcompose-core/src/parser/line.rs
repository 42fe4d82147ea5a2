// XCompose Parser - Entry Lines
// Parses lines like `<Multi_key> <i> <a> : "𝑎" # comment`

use super::{ParseError, SyntaxError, MULTI_CHAR_DESCRIPTION};
use crate::entry::{Entry, KeySequence};
use crate::unicode::{char_name, code_point_label};

/// Parse a single entry line
///
/// The syntax is liberal:
/// - keys may be written with or without spaces between them
/// - the symbol string may contain `<`, `>`, `:` and escaped quotes
/// - the trailing comment may contain anything
///
/// # Arguments
/// * `line` - Raw line from the file
/// * `line_number` - 1-indexed line number used for error reporting
pub fn parse_line(line: &str, line_number: usize) -> Result<Entry, ParseError> {
    let (keys, symbol, unicode_point, description) =
        parse_fields(line).map_err(|kind| ParseError::new(line_number, line, kind))?;

    Ok(Entry::new(keys, symbol, unicode_point, description, line_number))
}

fn parse_fields(line: &str) -> Result<(KeySequence, String, String, String), SyntaxError> {
    let (left, right) = line.split_once(':').ok_or(SyntaxError::MissingColon)?;

    let keys = extract_keys(left.trim())?;
    if keys.is_empty() {
        return Err(SyntaxError::NoKeys);
    }

    let (symbol, tail) = scan_quoted(right)?;

    let mut chars = symbol.chars();
    let (unicode_point, description) = match (chars.next(), chars.next()) {
        (Some(ch), None) => {
            let name = char_name(ch).ok_or(SyntaxError::UnnamedCodePoint(ch as u32))?;
            (code_point_label(ch), name)
        }
        _ => {
            let description = trailing_comment(tail)
                .filter(|comment| !comment.is_empty())
                .unwrap_or(MULTI_CHAR_DESCRIPTION);
            (String::new(), description.to_string())
        }
    };

    Ok((keys, symbol, unicode_point, description))
}

/// Extract the key tokens from the left-hand side of an entry
///
/// Every `<...>` group is a token; anything between groups is decoration.
///
/// # Examples
/// ```
/// use xcompose_core::parser::extract_keys;
/// let keys = extract_keys("<Multi_key><i> <a>").unwrap();
/// assert_eq!(keys.as_slice(), ["Multi_key", "i", "a"]);
/// ```
pub fn extract_keys(text: &str) -> Result<KeySequence, SyntaxError> {
    let mut keys = KeySequence::new();
    let mut rest = text;
    let mut consumed = 0;

    while let Some(open) = rest.find('<') {
        let inner = &rest[open + 1..];
        let close = inner.find('>').ok_or_else(|| {
            SyntaxError::UnclosedBracket(text[..consumed + open].chars().count())
        })?;
        keys.push(inner[..close].to_string());

        let step = open + 1 + close + 1;
        consumed += step;
        rest = &rest[step..];
    }

    Ok(keys)
}

/// Extract the content of the quoted string that starts `text`
///
/// Leading whitespace is skipped. A backslash takes the next character
/// literally.
pub fn extract_quoted_string(text: &str) -> Result<String, SyntaxError> {
    scan_quoted(text).map(|(content, _)| content)
}

/// Comment text following the quoted string, or an empty string when there is none
pub fn extract_comment(text: &str) -> String {
    match scan_quoted(text) {
        Ok((_, tail)) => trailing_comment(tail).unwrap_or_default().to_string(),
        Err(_) => String::new(),
    }
}

/// Scan a quoted string, returning its unescaped content and the text after the closing quote
fn scan_quoted(text: &str) -> Result<(String, &str), SyntaxError> {
    let text = text.trim_start();
    let body = text.strip_prefix('"').ok_or(SyntaxError::UnquotedSymbol)?;

    let mut content = String::new();
    let mut chars = body.char_indices();
    while let Some((idx, ch)) = chars.next() {
        match ch {
            '\\' => match chars.next() {
                Some((_, escaped)) => content.push(escaped),
                None => break,
            },
            '"' => return Ok((content, &body[idx + 1..])),
            _ => content.push(ch),
        }
    }

    Err(SyntaxError::UnclosedQuote)
}

fn trailing_comment(tail: &str) -> Option<&str> {
    tail.trim_start().strip_prefix('#').map(str::trim)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_keys_compact_and_spaced() {
        assert_eq!(
            extract_keys("<Multi_key><i><a>").unwrap().as_slice(),
            ["Multi_key", "i", "a"]
        );
        assert_eq!(
            extract_keys("<Multi_key> <i> <a>").unwrap().as_slice(),
            ["Multi_key", "i", "a"]
        );
        assert_eq!(
            extract_keys("<dead_tilde> <space>").unwrap().as_slice(),
            ["dead_tilde", "space"]
        );
    }

    #[test]
    fn test_extract_keys_keeps_duplicates() {
        assert_eq!(
            extract_keys("<Multi_key> <o> <o>").unwrap().as_slice(),
            ["Multi_key", "o", "o"]
        );
    }

    #[test]
    fn test_extract_keys_unclosed_bracket() {
        assert_eq!(
            extract_keys("<Multi_key> <i"),
            Err(SyntaxError::UnclosedBracket(12))
        );
    }

    #[test]
    fn test_extract_quoted_string() {
        assert_eq!(extract_quoted_string("\"α\"").unwrap(), "α");
        assert_eq!(
            extract_quoted_string("\"test \\\" quote\"").unwrap(),
            "test \" quote"
        );
        assert_eq!(extract_quoted_string("  \"a\\\\b\" # x").unwrap(), "a\\b");
        assert_eq!(
            extract_quoted_string("\"open"),
            Err(SyntaxError::UnclosedQuote)
        );
        assert_eq!(
            extract_quoted_string("\"trailing\\"),
            Err(SyntaxError::UnclosedQuote)
        );
        assert_eq!(
            extract_quoted_string("alpha"),
            Err(SyntaxError::UnquotedSymbol)
        );
    }

    #[test]
    fn test_extract_comment() {
        assert_eq!(extract_comment("\"ab\" # LIGATURE AB "), "LIGATURE AB");
        assert_eq!(extract_comment("\"ab\""), "");
        assert_eq!(extract_comment("\"a\\\"#b\" #c"), "c");
        assert_eq!(extract_comment("no quote"), "");
    }

    #[test]
    fn test_parse_line_single_char() {
        let entry = parse_line("<Multi_key> <i> <a> : \"𝑎\" # comment", 1).unwrap();
        assert_eq!(entry.keys(), ["Multi_key", "i", "a"]);
        assert_eq!(entry.symbol(), "𝑎");
        assert_eq!(entry.unicode_point(), "U1D44E");
        assert_eq!(entry.description(), "MATHEMATICAL ITALIC SMALL A");
        assert_eq!(entry.line_number(), 1);
    }

    #[test]
    fn test_parse_line_compact_matches_spaced() {
        let compact = parse_line("<Multi_key><i><a>:\"a\"# comment", 2).unwrap();
        let spaced = parse_line("<Multi_key> <i> <a> : \"a\" # comment", 2).unwrap();
        assert_eq!(compact, spaced);
        assert_eq!(compact.keys(), ["Multi_key", "i", "a"]);
        assert_eq!(compact.symbol(), "a");
    }

    #[test]
    fn test_parse_line_multi_char() {
        let entry = parse_line("<Multi_key> <minus> <greater> : \"->\" # ARROW", 4).unwrap();
        assert_eq!(entry.symbol(), "->");
        assert_eq!(entry.unicode_point(), "");
        assert_eq!(entry.description(), "ARROW");

        let entry = parse_line("<Multi_key> <t> <h> : \"th\"", 5).unwrap();
        assert_eq!(entry.description(), MULTI_CHAR_DESCRIPTION);
    }

    #[test]
    fn test_parse_line_preserves_extra_colons() {
        let entry = parse_line("<Multi_key> <colon> <colon> : \"::\" # a: b", 3).unwrap();
        assert_eq!(entry.symbol(), "::");
        assert_eq!(entry.description(), "a: b");
    }

    #[test]
    fn test_parse_line_missing_colon() {
        let err = parse_line("<Multi_key> <i> <a> \"a\"", 9).unwrap_err();
        assert_eq!(err.line_number, 9);
        assert_eq!(err.kind, SyntaxError::MissingColon);
        assert_eq!(err.line, "<Multi_key> <i> <a> \"a\"");
        assert_eq!(err.message(), "missing colon separator");
    }

    #[test]
    fn test_parse_line_errors_carry_line() {
        let err = parse_line("<Multi_key> <i : \"a\"", 3).unwrap_err();
        assert!(matches!(err.kind, SyntaxError::UnclosedBracket(_)));
        assert_eq!(err.line_number, 3);

        let err = parse_line("<a> : \"open", 4).unwrap_err();
        assert_eq!(err.kind, SyntaxError::UnclosedQuote);

        let err = parse_line("space : \"a\"", 5).unwrap_err();
        assert_eq!(err.kind, SyntaxError::NoKeys);
        assert_eq!(err.line_number, 5);
    }

    #[test]
    fn test_parse_line_empty_symbol() {
        let entry = parse_line("<Multi_key> <e> : \"\"", 6).unwrap();
        assert_eq!(entry.symbol(), "");
        assert_eq!(entry.unicode_point(), "");
        assert_eq!(entry.description(), MULTI_CHAR_DESCRIPTION);

        let entry = parse_line("<Multi_key> <e> : \"\" # NOTHING", 7).unwrap();
        assert_eq!(entry.description(), "NOTHING");
    }

    #[test]
    fn test_parse_line_unnamed_code_point() {
        let err = parse_line("<Multi_key> <p> : \"\u{E000}\"", 8).unwrap_err();
        assert_eq!(err.kind, SyntaxError::UnnamedCodePoint(0xE000));
        assert!(err.to_string().contains("U+E000"));
    }
}
