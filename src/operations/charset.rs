//! Extended GSM character accounting.

use serde::Serialize;

/// Characters outside the GSM 03.38 default alphabet that are still
/// reachable through the escape table. Each occurrence is transmitted as
/// an escape plus the character, so it occupies two character slots.
pub const EXTENDED_GSM_CHARS: [char; 9] = ['~', '^', '|', '\\', '[', ']', '{', '}', '\u{20AC}'];

/// Count occurrences of extended GSM characters in `text`.
///
/// Each match costs one extra character slot under GSM-7 segmentation.
/// UCS-2 messages never pay this surcharge.
#[must_use]
pub fn extended_char_count(text: &str) -> usize {
    text.chars().filter(|c| EXTENDED_GSM_CHARS.contains(c)).count()
}

/// How a text counts under each encoding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CharsetReport {
    /// Extended GSM characters found in the text.
    pub extended: usize,
    /// Effective character count under GSM-7 (extended characters count
    /// twice).
    pub gsm7_characters: usize,
    /// Effective character count under UCS-2 (UTF-16 code units).
    pub ucs2_characters: usize,
}

/// Report the effective character count of `text` under both encodings.
#[must_use]
pub fn charset_report(text: &str) -> CharsetReport {
    let units = text.encode_utf16().count();
    let extended = extended_char_count(text);
    CharsetReport {
        extended,
        gsm7_characters: units + extended,
        ucs2_characters: units,
    }
}
