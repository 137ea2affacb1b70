//! Text to token bytes.

use log::{trace, warn};

use crate::diagnostics::Warning;
use crate::error::EncodeError;
use crate::model::{Model, OsVersion};
use crate::record::name::THETA_GLYPHS;
use crate::tokens::{TokenFlags, TokenTable};

use super::state::{Context, EncoderState, Munch};
use super::{EncodeOptions, TokenizeMode};

/// Characters of remaining input quoted in errors.
const EXCERPT_LENGTH: usize = 12;

/// Escapes for variable references, followed by two hex digits.
const VAR_PREFIXES: [(&str, u8); 6] = [
    ("\\Str", 0xAA),
    ("\\Pic", 0x60),
    ("\\GDB", 0x61),
    ("\\M", 0x5C),
    ("\\L", 0x5D),
    ("\\Y", 0x5E),
];

/// The result of encoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Encoded {
    pub bytes: Vec<u8>,
    /// Oldest OS that knows every emitted token.
    pub since: OsVersion,
    /// Byte literals that name no token.
    pub warnings: Vec<Warning>,
}

/// Unifies line breaks to `\n` and theta glyphs to `θ`.
pub fn normalize(text: &str) -> String {
    text.replace("\r\n", "\n")
        .replace('\r', "\n")
        .chars()
        .map(|ch| if THETA_GLYPHS.contains(&ch) { 'θ' } else { ch })
        .collect()
}

/// Encodes text with a model's token table.
pub fn encode(text: &str, model: &Model, options: &EncodeOptions) -> Result<Encoded, EncodeError> {
    encode_with(text, model.tokens(), options.lang.unwrap_or(model.lang), options)
}

/// Encodes text with an explicit token table and language.
pub fn encode_with(
    text: &str,
    table: &TokenTable,
    lang: &str,
    options: &EncodeOptions,
) -> Result<Encoded, EncodeError> {
    let normalized;
    let text = if options.normalize {
        normalized = normalize(text);
        normalized.as_str()
    } else {
        text
    };

    let trie = table.trie(lang);
    let mut stack = vec![EncoderState::new(match options.mode {
        TokenizeMode::Max => Context::Max,
        TokenizeMode::Min => Context::Min,
        TokenizeMode::Smart => Context::Smart,
    })];

    let mut bytes = Vec::with_capacity(text.len());
    let mut since = OsVersion::INITIAL;
    let mut warnings = Vec::new();
    let mut position = 0;
    let mut rest = text;

    while !rest.is_empty() {
        let Some(state) = stack.pop() else {
            return Err(EncodeError::StackUnderflow {
                position,
                excerpt: excerpt(rest),
            });
        };

        let (emitted, flags, consumed) = if let Some((literal, consumed)) = escape(rest) {
            match table.get(&literal) {
                Some(token) => {
                    since = since.max(token.since);
                    (literal, token.flags, consumed)
                }
                None => {
                    let literal_text = rest[..consumed].to_string();
                    warn!("byte literal {literal_text} at position {position} names no token");
                    warnings.push(Warning::UnknownByteLiteral {
                        literal: literal_text,
                    });
                    (literal, TokenFlags::default(), consumed)
                }
            }
        } else {
            let mut candidates = trie.matches(rest);
            if candidates.is_empty() {
                return Err(EncodeError::NoMatch {
                    position,
                    excerpt: excerpt(rest),
                });
            }

            // A lone punctuation glyph must not hide a longer name starting with it.
            let first = rest.chars().next().unwrap_or_default();
            if first.is_ascii_punctuation()
                && candidates.len() > 1
                && candidates.last().is_some_and(|&(_, length)| length == 1)
            {
                candidates.pop();
            }

            let (index, consumed) = match state.munch() {
                Munch::Max => candidates[0],
                Munch::Min => candidates[candidates.len() - 1],
            };
            let token = table.token(index);
            since = since.max(token.since);
            (token.bytes.to_vec(), token.flags, consumed)
        };

        trace!(
            "{:?}[{}] at {position}: {:02x?}",
            state.context, state.length, emitted
        );

        if !state.is_exhausted() {
            stack.extend(state.step(&emitted, flags));
        }

        bytes.extend_from_slice(&emitted);
        position += consumed;
        rest = skip_chars(rest, consumed);
    }

    Ok(Encoded {
        bytes,
        since,
        warnings,
    })
}

/// Recognizes `\xNN`, `\uNNNN` and variable reference escapes, returning the
/// bytes and the number of characters consumed.
fn escape(text: &str) -> Option<(Vec<u8>, usize)> {
    if let Some(digits) = text.strip_prefix("\\x") {
        let value = hex(digits, 2)?;
        return Some((vec![value as u8], 4));
    }
    if let Some(digits) = text.strip_prefix("\\u") {
        let value = hex(digits, 4)?;
        return Some((value.to_be_bytes().to_vec(), 6));
    }

    VAR_PREFIXES.iter().find_map(|&(prefix, leading)| {
        let digits = text.strip_prefix(prefix)?;
        let value = hex(digits, 2)?;
        Some((vec![leading, value as u8], prefix.len() + 2))
    })
}

fn hex(text: &str, width: usize) -> Option<u16> {
    let digits = text.get(..width)?;
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    u16::from_str_radix(digits, 16).ok()
}

fn skip_chars(text: &str, count: usize) -> &str {
    match text.char_indices().nth(count) {
        Some((offset, _)) => &text[offset..],
        None => "",
    }
}

fn excerpt(text: &str) -> String {
    text.chars().take(EXCERPT_LENGTH).collect()
}
