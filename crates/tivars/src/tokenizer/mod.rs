//! Conversion between TI-BASIC text and token bytes.
//!
//! Encoding is context aware: in the default [`TokenizeMode::Smart`] mode,
//! string literals and program or list names are split into single-character
//! tokens the way the calculator's own editor would, while ordinary code is
//! munched maximally. See [`state`] for the contexts.

pub mod decoder;
pub mod encoder;
pub mod state;

pub use decoder::{Decoded, Tokens, decode, decode_with, tokens};
pub use encoder::{Encoded, encode, encode_with, normalize};
pub use state::{Context, EncoderState, Munch};

/// How the encoder chooses between overlapping token names.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TokenizeMode {
    /// Always the longest name.
    Max,
    /// Always the shortest name; what string literals get in smart mode.
    Min,
    /// Longest by default, shortest inside strings and names.
    #[default]
    Smart,
}

/// Options for [`encode`].
#[derive(Debug, Clone, Copy)]
pub struct EncodeOptions {
    pub mode: TokenizeMode,
    /// Unify line breaks and theta glyphs before encoding.
    pub normalize: bool,
    /// Language of the names in the text; the model's language if unset.
    pub lang: Option<&'static str>,
}

impl Default for EncodeOptions {
    fn default() -> Self {
        Self {
            mode: TokenizeMode::Smart,
            normalize: true,
            lang: None,
        }
    }
}

impl EncodeOptions {
    /// Creates default options: smart mode, normalized input.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(self, mode: TokenizeMode) -> Self {
        Self { mode, ..self }
    }

    pub fn normalize(self, normalize: bool) -> Self {
        Self { normalize, ..self }
    }

    pub fn lang(self, lang: &'static str) -> Self {
        Self {
            lang: Some(lang),
            ..self
        }
    }
}

/// How the decoder renders each token.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DecodeMode {
    /// Names as the calculator shows them.
    #[default]
    Display,
    /// ASCII-friendly names.
    Accessible,
    /// `\xNN` and `\uNNNN` byte literals.
    Escape,
}

/// Options for [`decode`].
#[derive(Debug, Clone, Copy, Default)]
pub struct DecodeOptions {
    pub mode: DecodeMode,
    /// Language of the rendered names; the model's language if unset.
    pub lang: Option<&'static str>,
}

impl DecodeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(self, mode: DecodeMode) -> Self {
        Self { mode, ..self }
    }

    pub fn lang(self, lang: &'static str) -> Self {
        Self {
            lang: Some(lang),
            ..self
        }
    }
}
