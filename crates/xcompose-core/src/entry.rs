// XCompose Entry Model
// Parsed compose sequences and the blocks that group them

use smallvec::SmallVec;
use std::fmt;

/// Ordered list of key tokens, e.g. `["Multi_key", "i", "a"]`.
///
/// Most sequences are short, so the first few tokens live inline.
pub type KeySequence = SmallVec<[String; 4]>;

/// Build a key sequence from anything that yields string-like tokens
pub fn key_sequence<I, S>(tokens: I) -> KeySequence
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    tokens.into_iter().map(Into::into).collect()
}

/// A single compose definition
///
/// Entries are immutable once parsed. Derived entries (for example the
/// transliterated variant) are built with [`Entry::with_keys`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    keys: KeySequence,
    symbol: String,
    unicode_point: String,
    description: String,
    line_number: usize,
}

impl Entry {
    pub fn new(
        keys: KeySequence,
        symbol: impl Into<String>,
        unicode_point: impl Into<String>,
        description: impl Into<String>,
        line_number: usize,
    ) -> Self {
        Self {
            keys,
            symbol: symbol.into(),
            unicode_point: unicode_point.into(),
            description: description.into(),
            line_number,
        }
    }

    /// Key tokens, including the leading marker such as `Multi_key`
    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    /// Output string produced by the sequence
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// `U` + uppercase hex code point for single-character symbols, empty otherwise
    pub fn unicode_point(&self) -> &str {
        &self.unicode_point
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// 1-indexed line the entry was parsed from
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    /// Copy of this entry bound to a different key sequence
    pub fn with_keys(&self, keys: KeySequence) -> Self {
        Self {
            keys,
            ..self.clone()
        }
    }

    /// Compare everything except the source line
    pub fn same_definition(&self, other: &Entry) -> bool {
        self.keys == other.keys
            && self.symbol == other.symbol
            && self.unicode_point == other.unicode_point
            && self.description == other.description
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, key) in self.keys.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "<{}>", key)?;
        }
        write!(f, " : {:?}", self.symbol)
    }
}

/// Contiguous group of entries, optionally introduced by a header
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Block {
    header: String,
    entries: Vec<Entry>,
}

impl Block {
    pub fn new(header: impl Into<String>, entries: Vec<Entry>) -> Self {
        Self {
            header: header.into(),
            entries,
        }
    }

    /// Header label, empty when the block has none
    pub fn header(&self) -> &str {
        &self.header
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Collect the entries of every block in order
pub fn flatten(blocks: &[Block]) -> Vec<Entry> {
    blocks
        .iter()
        .flat_map(|block| block.entries().iter().cloned())
        .collect()
}
