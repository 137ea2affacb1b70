//! Per-model token tables.

use log::debug;
use rustc_hash::{FxHashMap, FxHashSet};

use crate::model::{Model, OsVersion};
use crate::tokens::sheet::{SHEET, Sheet, TokenSpec};
use crate::tokens::token::{Token, Translation};
use crate::tokens::trie::TokenTrie;

/// Languages with their own name tries.
pub const LANGS: [&str; 2] = ["en", "fr"];

/// Tokens known to one model, indexed by bytes and by name.
#[derive(Debug, Clone)]
pub struct TokenTable {
    tokens: Vec<Token>,
    by_bytes: FxHashMap<&'static [u8], usize>,
    tries: Vec<(&'static str, TokenTrie)>,
    prefixes: FxHashSet<u8>,
    ambiguous: FxHashSet<u8>,
}

impl TokenTable {
    /// Builds the table of a model from the built-in sheet.
    pub fn for_model(model: &Model) -> Self {
        Self::from_sheet(&SHEET, model.latest_os())
    }

    /// Builds a table holding every token of `sheet` available by `latest`.
    pub fn from_sheet(sheet: &Sheet, latest: OsVersion) -> Self {
        let mut tokens: Vec<Token> = Vec::new();
        let mut by_bytes = FxHashMap::default();

        for spec in sheet.tokens.iter().filter(|spec| spec.since <= latest) {
            match by_bytes.get(spec.bytes) {
                Some(&index) => rename(&mut tokens[index], spec),
                None => {
                    by_bytes.insert(spec.bytes, tokens.len());
                    tokens.push(new_token(spec));
                }
            }
        }

        let prefixes: FxHashSet<u8> = tokens
            .iter()
            .filter(|token| token.bytes.len() == 2)
            .map(|token| token.bytes[0])
            .collect();
        let ambiguous = tokens
            .iter()
            .filter(|token| token.bytes.len() == 1 && prefixes.contains(&token.bytes[0]))
            .map(|token| token.bytes[0])
            .collect();

        let tries = LANGS
            .iter()
            .map(|&lang| (lang, build_trie(&tokens, &by_bytes, sheet, lang)))
            .collect();

        debug!("token table up to {latest}: {} tokens", tokens.len());
        Self {
            tokens,
            by_bytes,
            tries,
            prefixes,
            ambiguous,
        }
    }

    /// Looks up a token by its bytes.
    pub fn get(&self, bytes: &[u8]) -> Option<&Token> {
        self.by_bytes.get(bytes).map(|&index| &self.tokens[index])
    }

    /// Returns the token at an index handed out by a trie.
    pub fn token(&self, index: usize) -> &Token {
        &self.tokens[index]
    }

    /// Returns the name trie for a language, falling back to English.
    pub fn trie(&self, lang: &str) -> &TokenTrie {
        let (_, trie) = self
            .tries
            .iter()
            .find(|(code, _)| *code == lang)
            .unwrap_or(&self.tries[0]);
        trie
    }

    /// Returns true if `byte` starts some two-byte token.
    pub fn is_prefix(&self, byte: u8) -> bool {
        self.prefixes.contains(&byte)
    }

    /// Returns true if `byte` is both a token and the start of a longer one.
    pub fn is_ambiguous(&self, byte: u8) -> bool {
        self.ambiguous.contains(&byte)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Token> {
        self.tokens.iter()
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

fn new_token(spec: &TokenSpec) -> Token {
    let mut langs = vec![(
        "en",
        Translation {
            display: spec.display,
            accessible: spec.accessible,
            variants: Vec::new(),
        },
    )];
    if let Some(fr) = spec.fr {
        langs.push((
            "fr",
            Translation {
                display: fr,
                accessible: spec.accessible,
                variants: Vec::new(),
            },
        ));
    }

    Token {
        bytes: spec.bytes,
        since: spec.since,
        flags: spec.flags,
        langs,
    }
}

/// Applies a later sheet entry for known bytes: its names become canonical and
/// the old ones stay as variants.
fn rename(token: &mut Token, spec: &TokenSpec) {
    let renames = [("en", Some(spec.display)), ("fr", spec.fr)];
    for (lang, display) in renames {
        let Some(display) = display else { continue };
        match token.langs.iter_mut().find(|(code, _)| *code == lang) {
            Some((_, translation)) => {
                for old in [translation.display, translation.accessible] {
                    if old != display && old != spec.accessible && !translation.variants.contains(&old) {
                        translation.variants.push(old);
                    }
                }
                translation.display = display;
                translation.accessible = spec.accessible;
            }
            None => token.langs.push((
                lang,
                Translation {
                    display,
                    accessible: spec.accessible,
                    variants: Vec::new(),
                },
            )),
        }
    }
    token.flags = spec.flags;
}

fn build_trie(
    tokens: &[Token],
    by_bytes: &FxHashMap<&'static [u8], usize>,
    sheet: &Sheet,
    lang: &str,
) -> TokenTrie {
    let mut trie = TokenTrie::new();

    // Canonical names; a later token wins a clash.
    for (index, token) in tokens.iter().enumerate() {
        let translation = token.translation(lang);
        trie.insert(translation.display, index, true);
        trie.insert(translation.accessible, index, true);
    }

    for (index, token) in tokens.iter().enumerate() {
        for &variant in &token.translation(lang).variants {
            trie.insert(variant, index, false);
        }
        if lang != "en" {
            for name in token.translation("en").names() {
                trie.insert(name, index, false);
            }
        }
    }

    for alternate in sheet.alternates {
        if let Some(&index) = by_bytes.get(alternate.bytes) {
            trie.insert(alternate.name, index, false);
        }
    }
    trie
}
