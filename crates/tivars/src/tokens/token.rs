//! Tokens and their names.

use std::fmt;

use crate::model::OsVersion;

/// Context a token opens when the encoder runs in smart mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Trigger {
    /// An opening quote: munch minimally until the closing quote.
    String,
    /// A data-transfer command: a string right after it is munched maximally.
    Interpolation,
    /// `prgm`: a program name follows.
    ProgramName,
    /// `ʟ`: a list name follows.
    ListName,
}

/// Per-token attributes that steer the encoder.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct TokenFlags {
    /// Closes a string literal.
    pub closes_string: bool,
    /// Ends every line-scoped context.
    pub ends_line: bool,
    pub trigger: Option<Trigger>,
}

/// Names of a token in one language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translation {
    /// Name shown on the calculator, with its special glyphs.
    pub display: &'static str,
    /// ASCII-friendly name.
    pub accessible: &'static str,
    /// Further names accepted when encoding, oldest first.
    pub variants: Vec<&'static str>,
}

impl Translation {
    /// Every name of this translation, canonical ones first.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        [self.display, self.accessible]
            .into_iter()
            .chain(self.variants.iter().copied())
            .filter(|name| !name.is_empty())
    }
}

/// One token of a model's token table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub bytes: &'static [u8],
    /// First OS version that recognizes this token.
    pub since: OsVersion,
    pub flags: TokenFlags,
    /// Translations keyed by language code; English is always first.
    pub(crate) langs: Vec<(&'static str, Translation)>,
}

impl Token {
    /// Returns the translation for a language, falling back to English.
    pub fn translation(&self, lang: &str) -> &Translation {
        let (_, translation) = self
            .langs
            .iter()
            .find(|(code, _)| *code == lang)
            .unwrap_or(&self.langs[0]);
        translation
    }

    /// Returns the display name in a language.
    pub fn display(&self, lang: &str) -> &'static str {
        self.translation(lang).display
    }

    /// Returns the accessible name in a language.
    pub fn accessible(&self, lang: &str) -> &'static str {
        self.translation(lang).accessible
    }

    /// Returns the languages this token has names in.
    pub fn langs(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.langs.iter().map(|(code, _)| *code)
    }

    /// Returns true if the token may appear in a variable name: a digit, an
    /// uppercase letter or theta.
    pub fn is_name_char(&self) -> bool {
        is_name_bytes(self.bytes)
    }

    /// Renders the token as the byte-literal escape the encoder accepts.
    pub fn escape(&self) -> String {
        escape_bytes(self.bytes)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display("en"))
    }
}

pub(crate) fn is_name_bytes(bytes: &[u8]) -> bool {
    matches!(bytes, [0x30..=0x39] | [0x41..=0x5B])
}

/// Escapes one- and two-byte sequences as `\xNN` and `\uNNNN`.
pub fn escape_bytes(bytes: &[u8]) -> String {
    match bytes {
        [byte] => format!("\\x{byte:02x}"),
        [first, second] => format!("\\u{first:02x}{second:02x}"),
        _ => bytes.iter().map(|b| format!("\\x{b:02x}")).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token(bytes: &'static [u8]) -> Token {
        Token {
            bytes,
            since: OsVersion::INITIAL,
            flags: TokenFlags::default(),
            langs: vec![
                (
                    "en",
                    Translation {
                        display: "If ",
                        accessible: "If ",
                        variants: vec!["if "],
                    },
                ),
                (
                    "fr",
                    Translation {
                        display: "Si ",
                        accessible: "Si ",
                        variants: vec![],
                    },
                ),
            ],
        }
    }

    #[test]
    fn test_translation_fallback() {
        let token = token(&[0xce]);
        assert_eq!(token.display("fr"), "Si ");
        assert_eq!(token.display("de"), "If ");
        assert_eq!(token.langs().collect::<Vec<_>>(), vec!["en", "fr"]);
        assert_eq!(
            token.translation("en").names().collect::<Vec<_>>(),
            vec!["If ", "If ", "if "]
        );
    }

    #[test]
    fn test_name_chars() {
        assert!(token(&[0x30]).is_name_char());
        assert!(token(&[0x5b]).is_name_char());
        assert!(!token(&[0x5c, 0x00]).is_name_char());
        assert!(!token(&[0x2a]).is_name_char());
    }

    #[test]
    fn test_escape() {
        assert_eq!(token(&[0xde]).escape(), "\\xde");
        assert_eq!(token(&[0xef, 0x4b]).escape(), "\\uef4b");
    }
}
