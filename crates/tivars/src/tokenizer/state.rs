//! Encoder contexts.
//!
//! The encoder keeps a stack of [`EncoderState`]s. Each step pops the top
//! state, lets it pick a token, and pushes whatever [`EncoderState::next`]
//! returns: nothing to leave the context, one state to stay or be replaced,
//! two to enter a nested context that later returns to this one.

use crate::tokens::token::is_name_bytes;
use crate::tokens::{Token, TokenFlags, Trigger};

/// Which end of the candidate list a context picks from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Munch {
    /// The candidate consuming the most input.
    Max,
    /// The candidate consuming the least input.
    Min,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Context {
    /// Whole-input maximal munch.
    Max,
    /// Whole-input minimal munch.
    Min,
    /// Maximal munch that opens the contexts below on trigger tokens.
    Smart,
    /// Inside a string literal.
    String,
    /// Just after `Send(` or `Get(`, waiting for a quote.
    InterpolationStart,
    /// A string the calculator evaluates, munched maximally.
    InterpolatedString,
    /// After `prgm`.
    ProgramName,
    /// After `ʟ`.
    ListName,
}

impl Context {
    fn is_line_scoped(self) -> bool {
        !matches!(self, Context::Max | Context::Min | Context::Smart)
    }
}

/// A context plus the number of tokens emitted in it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncoderState {
    pub context: Context,
    pub length: usize,
}

impl EncoderState {
    pub const fn new(context: Context) -> Self {
        Self { context, length: 0 }
    }

    pub fn munch(&self) -> Munch {
        match self.context {
            Context::Max | Context::Smart | Context::InterpolationStart => Munch::Max,
            Context::InterpolatedString => Munch::Max,
            Context::Min | Context::String | Context::ProgramName | Context::ListName => Munch::Min,
        }
    }

    /// Most tokens the context may emit before it is left.
    pub fn max_length(&self) -> Option<usize> {
        match self.context {
            Context::ProgramName => Some(8),
            Context::ListName => Some(5),
            _ => None,
        }
    }

    pub fn is_exhausted(&self) -> bool {
        self.max_length() == Some(self.length)
    }

    /// States to push after this one emitted `token`.
    pub fn next(&self, token: &Token) -> Vec<EncoderState> {
        self.step(token.bytes, token.flags)
    }

    /// Like [`next`](Self::next), for raw bytes that may name no token.
    pub(crate) fn step(&self, bytes: &[u8], flags: TokenFlags) -> Vec<EncoderState> {
        if self.context.is_line_scoped() && flags.ends_line {
            return Vec::new();
        }

        let counted = EncoderState {
            context: self.context,
            length: self.length + 1,
        };

        match self.context {
            Context::Max | Context::Min => vec![counted],
            Context::Smart => match flags.trigger {
                Some(Trigger::String) => vec![counted, EncoderState::new(Context::String)],
                Some(Trigger::ProgramName) => {
                    vec![counted, EncoderState::new(Context::ProgramName)]
                }
                Some(Trigger::ListName) => vec![counted, EncoderState::new(Context::ListName)],
                Some(Trigger::Interpolation) => {
                    vec![counted, EncoderState::new(Context::InterpolationStart)]
                }
                None => vec![counted],
            },
            Context::String | Context::InterpolatedString => {
                if flags.closes_string {
                    Vec::new()
                } else {
                    vec![counted]
                }
            }
            // Anything but a quote leaves straight away.
            Context::InterpolationStart => match flags.trigger {
                Some(Trigger::String) => vec![EncoderState::new(Context::InterpolatedString)],
                _ => Vec::new(),
            },
            Context::ProgramName | Context::ListName => {
                if is_name_bytes(bytes) {
                    vec![counted]
                } else {
                    Vec::new()
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TI_84PCE;

    fn token(bytes: &[u8]) -> &'static Token {
        TI_84PCE.tokens().get(bytes).unwrap()
    }

    fn contexts(states: Vec<EncoderState>) -> Vec<Context> {
        states.into_iter().map(|state| state.context).collect()
    }

    #[test]
    fn test_smart_triggers() {
        let smart = EncoderState::new(Context::Smart);
        assert_eq!(
            contexts(smart.next(token(&[0x2a]))),
            vec![Context::Smart, Context::String]
        );
        assert_eq!(
            contexts(smart.next(token(&[0x5f]))),
            vec![Context::Smart, Context::ProgramName]
        );
        assert_eq!(
            contexts(smart.next(token(&[0xeb]))),
            vec![Context::Smart, Context::ListName]
        );
        assert_eq!(
            contexts(smart.next(token(&[0xe8]))),
            vec![Context::Smart, Context::InterpolationStart]
        );
        assert_eq!(contexts(smart.next(token(&[0x3f]))), vec![Context::Smart]);
    }

    #[test]
    fn test_string_exits() {
        let string = EncoderState::new(Context::String);
        assert!(string.next(token(&[0x2a])).is_empty());
        assert!(string.next(token(&[0x04])).is_empty());
        assert!(string.next(token(&[0x3f])).is_empty());
        assert_eq!(string.next(token(&[0x3e])).len(), 1);
    }

    #[test]
    fn test_interpolation_start() {
        let start = EncoderState::new(Context::InterpolationStart);
        assert_eq!(
            contexts(start.next(token(&[0x2a]))),
            vec![Context::InterpolatedString]
        );
        assert!(start.next(token(&[0x41])).is_empty());
    }

    #[test]
    fn test_name_budget() {
        let mut state = EncoderState::new(Context::ListName);
        for _ in 0..5 {
            assert!(!state.is_exhausted());
            state = state.next(token(&[0x41]))[0];
        }
        assert!(state.is_exhausted());

        let name = EncoderState::new(Context::ProgramName);
        assert!(name.next(token(&[0x2b])).is_empty());
        assert!(name.next(token(&[0x3f])).is_empty());
        assert_eq!(name.next(token(&[0x5b]))[0].length, 1);
    }
}
