// XCompose Parser
// Liberal, whitespace-insensitive reader for compose definition files

pub mod document;
pub mod line;

pub use document::{
    detect_block_header, is_comment_line, is_empty_line, is_header_delimiter, parse_compose,
};
pub use line::{extract_comment, extract_keys, extract_quoted_string, parse_line};

/// Description used for multi-character symbols without a trailing comment
pub const MULTI_CHAR_DESCRIPTION: &str = "MULTI-CHAR";

/// What went wrong inside a single line
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SyntaxError {
    #[error("missing colon separator")]
    MissingColon,

    #[error("unclosed angle bracket at position {0}")]
    UnclosedBracket(usize),

    #[error("no key tokens before colon")]
    NoKeys,

    #[error("symbol must be a quoted string")]
    UnquotedSymbol,

    #[error("unclosed quoted string")]
    UnclosedQuote,

    #[error("no unicode name for U+{0:04X}")]
    UnnamedCodePoint(u32),
}

/// A malformed entry line, located in its source file
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("line {line_number}: {kind}\n  {line}")]
pub struct ParseError {
    /// 1-indexed line number
    pub line_number: usize,
    /// Raw text of the offending line
    pub line: String,
    pub kind: SyntaxError,
}

impl ParseError {
    pub fn new(line_number: usize, line: impl Into<String>, kind: SyntaxError) -> Self {
        Self {
            line_number,
            line: line.into(),
            kind,
        }
    }

    /// Human-readable reason, without location
    pub fn message(&self) -> String {
        self.kind.to_string()
    }
}
