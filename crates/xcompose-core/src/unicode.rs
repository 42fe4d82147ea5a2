// XCompose Unicode Helpers
// Code point labels, canonical names and safe display of invisible characters

/// Code point label as used in compose files: `U` + uppercase hex, no padding
pub fn code_point_label(ch: char) -> String {
    format!("U{:X}", ch as u32)
}

/// Canonical Unicode name of a character, `None` for unnamed code points
pub fn char_name(ch: char) -> Option<String> {
    unicode_names2::name(ch).map(|name| name.to_string())
}

/// Whitespace look-alikes that are invisible or indistinguishable from a space
static WHITESPACE_TAGS: &[(u32, &str)] = &[
    (0x00A0, "NBSP"),
    (0x1680, "OGHAM-SPACE"),
    (0x2000, "NQSP"),
    (0x2001, "MQSP"),
    (0x2002, "ENSP"),
    (0x2003, "EMSP"),
    (0x2004, "3/MSP"),
    (0x2005, "4/MSP"),
    (0x2006, "6/MSP"),
    (0x2007, "FSP"),
    (0x2008, "PSP"),
    (0x2009, "THSP"),
    (0x200A, "HSP"),
    (0x200B, "ZWSP"),
    (0x202F, "NNBSP"),
    (0x205F, "MMSP"),
    (0x3000, "IDSP"),
    (0xFEFF, "ZWNBSP"),
];

/// Bidirectional control marks
static BIDI_TAGS: &[(u32, &str)] = &[
    (0x200E, "LRM"),
    (0x200F, "RLM"),
    (0x202A, "LRE"),
    (0x202B, "RLE"),
    (0x202C, "PDF"),
    (0x202D, "LRO"),
    (0x202E, "RLO"),
    (0x2066, "LRI"),
    (0x2067, "RLI"),
    (0x2068, "FSI"),
    (0x2069, "PDI"),
];

static JOINER_TAGS: &[(u32, &str)] = &[(0x200C, "ZWNJ"), (0x200D, "ZWJ")];

/// Invisible formatting hints
static FORMAT_TAGS: &[(u32, &str)] = &[
    (0x00AD, "SHY"),
    (0x034F, "CGJ"),
    (0x061C, "ALM"),
    (0x180E, "MVS"),
    (0x2060, "WJ"),
    (0x2061, "FUNC-APP"),
    (0x2062, "INV-TIMES"),
    (0x2063, "INV-SEP"),
    (0x2064, "INV-PLUS"),
];

static COMBINING_RANGES: &[(u32, u32)] = &[
    (0x0300, 0x036F),
    (0x1AB0, 0x1AFF),
    (0x1DC0, 0x1DFF),
    (0x20D0, 0x20FF),
    (0xFE20, 0xFE2F),
];

static CONTROL_RANGES: &[(u32, u32)] = &[(0x0000, 0x001F), (0x007F, 0x009F)];

static VARIATION_SELECTOR_RANGES: &[(u32, u32)] = &[(0xFE00, 0xFE0F), (0xE0100, 0xE01EF)];

static PRIVATE_USE_RANGES: &[(u32, u32)] = &[
    (0xE000, 0xF8FF),
    (0xF0000, 0xFFFFD),
    (0x100000, 0x10FFFD),
];

const DOTTED_CIRCLE: char = '\u{25CC}';

fn in_ranges(cp: u32, ranges: &[(u32, u32)]) -> bool {
    ranges.iter().any(|&(lo, hi)| (lo..=hi).contains(&cp))
}

fn lookup_tag(cp: u32, table: &[(u32, &'static str)]) -> Option<&'static str> {
    table.iter().find(|(c, _)| *c == cp).map(|(_, tag)| *tag)
}

fn is_noncharacter(cp: u32) -> bool {
    cp & 0xFFFE == 0xFFFE || (0xFDD0..=0xFDEF).contains(&cp)
}

/// Render a symbol so it stays legible in a terminal report
///
/// Multi-character strings are shown in single quotes. Combining marks get a dotted
/// circle carrier, control characters become `U+XXXX`, and other invisible
/// or ambiguous characters become `U+XXXX[TAG]`. Anything else is returned
/// unchanged.
pub fn escape_symbol(symbol: &str) -> String {
    let mut chars = symbol.chars();
    let ch = match (chars.next(), chars.next()) {
        (Some(ch), None) => ch,
        _ => return format!("'{}'", symbol.escape_debug()),
    };
    let cp = ch as u32;
    let tagged = |tag: &str| format!("U+{:04X}[{}]", cp, tag);

    if in_ranges(cp, COMBINING_RANGES) {
        return format!("{}{}", DOTTED_CIRCLE, ch);
    }
    if in_ranges(cp, CONTROL_RANGES) {
        return format!("U+{:04X}", cp);
    }
    if let Some(tag) = lookup_tag(cp, WHITESPACE_TAGS)
        .or_else(|| lookup_tag(cp, BIDI_TAGS))
        .or_else(|| lookup_tag(cp, JOINER_TAGS))
    {
        return tagged(tag);
    }
    if in_ranges(cp, VARIATION_SELECTOR_RANGES) {
        return tagged("VS");
    }
    if let Some(tag) = lookup_tag(cp, FORMAT_TAGS) {
        return tagged(tag);
    }
    if in_ranges(cp, PRIVATE_USE_RANGES) {
        return tagged("PUA");
    }
    if is_noncharacter(cp) {
        return tagged("NONCHAR");
    }
    if char_name(ch).is_none() {
        return tagged("UNASSIGNED");
    }
    match cp {
        0x2028 => tagged("LSEP"),
        0x2029 => tagged("PSEP"),
        _ => symbol.to_string(),
    }
}
