// XCompose Core Library
// Parsing, collision detection and rendering of compose sequence definitions

pub mod collision;
pub mod entry;
pub mod format;
pub mod locale;
pub mod parser;
pub mod report;
pub mod settings;
pub mod system;
pub mod transliterate;
pub mod unicode;

pub use collision::{
    find_collisions, find_cross_collisions, find_duplicates, find_internal_collisions,
    is_proper_prefix, Collision, Duplicate, Source,
};
pub use entry::{flatten, key_sequence, Block, Entry, KeySequence};
pub use format::{format_block, format_blocks, format_entry, format_key_sequence, render_document};
pub use locale::{resolve_locale, LocaleError};
pub use parser::{parse_compose, parse_line, ParseError, SyntaxError};
pub use report::{write_collision_report, write_duplicate_report};
pub use settings::{Settings, SettingsError};
pub use system::{load_system_compose, DEFAULT_LOCALE_DIR};
pub use transliterate::{load_translit_map, transliterate_blocks, TranslitError, TranslitMap};
pub use unicode::escape_symbol;
