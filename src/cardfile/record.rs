//! # Record Format
//!
//! Each card lives in its own text file: a small YAML header fenced by `---`
//! lines, followed by the body verbatim.
//!
//! ```text
//! ---
//! id: "0b6c1f1e-8a2e-4f43-9d0e-1c2f3a4b5c6d"
//! created_at: 1718000000
//! updated_at: 1718000420
//! ---
//! # Groceries
//! milk, eggs
//! ```
//!
//! The header carries exactly `id`, `created_at` and `updated_at`. The body is
//! the only source of content; nothing from the header is repeated in it.
//! Everything after the closing fence line, byte for byte, is the body, so
//! `decode(&encode(card))` gives back the same card.

use crate::error::FormatError;
use crate::model::Card;
use serde::Deserialize;

pub const FENCE: &str = "---";

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RecordHeader {
    id: String,
    created_at: i64,
    updated_at: i64,
}

/// Renders a card as record text.
pub fn encode(card: &Card) -> String {
    format!(
        "{FENCE}\nid: {}\ncreated_at: {}\nupdated_at: {}\n{FENCE}\n{}",
        quote_id(&card.id),
        card.created_at,
        card.updated_at,
        card.content
    )
}

/// Quotes `id` as a YAML double-quoted scalar.
///
/// A JSON string literal is one, provided it only contains characters YAML
/// accepts raw. JSON leaves DEL, the C1 controls, the Unicode line separators
/// and a few noncharacters unescaped, so those get a `\uXXXX` escape here.
fn quote_id(id: &str) -> String {
    let json = serde_json::Value::String(id.to_string()).to_string();
    let mut quoted = String::with_capacity(json.len());
    for c in json.chars() {
        if needs_yaml_escape(c) {
            quoted.push_str(&format!("\\u{:04X}", c as u32));
        } else {
            quoted.push(c);
        }
    }
    quoted
}

fn needs_yaml_escape(c: char) -> bool {
    matches!(
        c,
        '\u{7f}'..='\u{9f}' | '\u{2028}' | '\u{2029}' | '\u{feff}' | '\u{fffe}' | '\u{ffff}'
    )
}

/// Parses record text back into a card.
pub fn decode(text: &str) -> Result<Card, FormatError> {
    let rest = strip_fence_line(text).ok_or(FormatError::MissingStartMarker)?;
    let (header, body) = split_header(rest).ok_or(FormatError::MissingEndMarker)?;

    let header: RecordHeader = serde_yaml::from_str(header)?;
    Ok(Card {
        id: header.id,
        content: body.to_string(),
        created_at: header.created_at,
        updated_at: header.updated_at,
    })
}

/// Decodes raw file bytes; anything that is not UTF-8 is not a record.
pub fn decode_bytes(bytes: &[u8]) -> Result<Card, FormatError> {
    let text = std::str::from_utf8(bytes).map_err(|_| FormatError::NotUtf8)?;
    decode(text)
}

/// If `text` begins with a fence line, returns what follows it.
fn strip_fence_line(text: &str) -> Option<&str> {
    let rest = text.strip_prefix(FENCE)?;
    rest.strip_prefix('\n')
        .or_else(|| rest.strip_prefix("\r\n"))
}

/// Splits at the first closing fence line: `(header, body)`.
fn split_header(rest: &str) -> Option<(&str, &str)> {
    // Empty header: the closing fence follows the opening one directly.
    if let Some(body) = strip_fence_line(rest) {
        return Some(("", body));
    }
    if rest == FENCE {
        return Some(("", ""));
    }

    let mut offset = 0;
    while let Some(pos) = rest[offset..].find("\n---") {
        let fence_start = offset + pos + 1;
        let after = &rest[fence_start + FENCE.len()..];
        if after.is_empty() {
            return Some((&rest[..fence_start], ""));
        }
        if let Some(body) = after
            .strip_prefix('\n')
            .or_else(|| after.strip_prefix("\r\n"))
        {
            return Some((&rest[..fence_start], body));
        }
        offset = fence_start;
    }
    None
}
