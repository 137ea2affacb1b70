//! Token bytes to text.

use crate::error::DecodeError;
use crate::model::{Model, OsVersion};
use crate::tokens::{Token, TokenTable};

use super::{DecodeMode, DecodeOptions};

/// The result of decoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoded {
    pub text: String,
    /// Oldest OS that knows every decoded token.
    pub since: OsVersion,
}

/// Decodes token bytes with a model's token table.
pub fn decode(bytes: &[u8], model: &Model, options: &DecodeOptions) -> Result<Decoded, DecodeError> {
    decode_with(bytes, model.tokens(), options.lang.unwrap_or(model.lang), options.mode)
}

/// Decodes token bytes with an explicit token table and language.
///
/// Trailing NULs are padding and end the stream; a NUL followed by anything
/// else is an error.
pub fn decode_with(
    bytes: &[u8],
    table: &TokenTable,
    lang: &str,
    mode: DecodeMode,
) -> Result<Decoded, DecodeError> {
    let mut text = String::with_capacity(bytes.len());
    let mut since = OsVersion::INITIAL;

    for token in tokens(bytes, table) {
        let token = token?;
        match mode {
            DecodeMode::Display => text.push_str(token.display(lang)),
            DecodeMode::Accessible => text.push_str(token.accessible(lang)),
            DecodeMode::Escape => text.push_str(&token.escape()),
        }
        since = since.max(token.since);
    }

    Ok(Decoded { text, since })
}

/// Iterates over the tokens of a byte stream.
pub fn tokens<'a, 't>(bytes: &'a [u8], table: &'t TokenTable) -> Tokens<'a, 't> {
    Tokens {
        bytes,
        table,
        position: 0,
    }
}

/// Iterator returned by [`tokens`]. Stops after the first error.
#[derive(Debug, Clone)]
pub struct Tokens<'a, 't> {
    bytes: &'a [u8],
    table: &'t TokenTable,
    position: usize,
}

impl<'t> Iterator for Tokens<'_, 't> {
    type Item = Result<&'t Token, DecodeError>;

    fn next(&mut self) -> Option<Self::Item> {
        let position = self.position;
        let rest = self.bytes.get(position..).filter(|rest| !rest.is_empty())?;

        let byte = rest[0];
        if byte == 0 {
            self.position = self.bytes.len();
            if rest.iter().all(|&b| b == 0) {
                return None;
            }
            return Some(Err(DecodeError::UnexpectedNul { position }));
        }

        match next_token(self.table, rest) {
            Some(token) => {
                self.position += token.bytes.len();
                Some(Ok(token))
            }
            None => {
                self.position = self.bytes.len();
                Some(Err(match rest.get(1) {
                    Some(&second) if self.table.is_prefix(byte) => DecodeError::UnrecognizedBytes {
                        bytes: [byte, second],
                        position,
                    },
                    _ => DecodeError::UnrecognizedByte { byte, position },
                }))
            }
        }
    }
}

/// Finds the token at the start of `bytes`. A byte that is both a token and a
/// prefix is read as the two-byte token when its second byte completes one.
fn next_token<'t>(table: &'t TokenTable, bytes: &[u8]) -> Option<&'t Token> {
    let byte = bytes[0];
    if table.is_prefix(byte) {
        if let Some(token) = bytes.get(..2).and_then(|pair| table.get(pair)) {
            return Some(token);
        }
        if !table.is_ambiguous(byte) {
            return None;
        }
    }
    table.get(&bytes[..1])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ModelId, TI_84P, TI_84PCE};
    use crate::tokens::table::tests::TEST_SHEET;

    fn display(bytes: &[u8]) -> Result<Decoded, DecodeError> {
        decode(bytes, &TI_84PCE, &DecodeOptions::new())
    }

    #[test]
    fn test_modes() {
        let bytes = [0xef, 0x00, 0x31, 0x04, 0x5b, 0xbb, 0x31];
        assert_eq!(display(&bytes).unwrap().text, "setDate(1→θ𝑒");

        let accessible = DecodeOptions::new().mode(DecodeMode::Accessible);
        assert_eq!(
            decode(&bytes, &TI_84PCE, &accessible).unwrap().text,
            "setDate(1->theta[e]"
        );

        let escape = DecodeOptions::new().mode(DecodeMode::Escape);
        assert_eq!(
            decode(&bytes, &TI_84PCE, &escape).unwrap().text,
            "\\uef00\\x31\\x04\\x5b\\ubb31"
        );
    }

    #[test]
    fn test_since() {
        let decoded = display(&[0xef, 0x00, 0x31]).unwrap();
        assert_eq!(decoded.since, OsVersion::new(ModelId::Ti84P, 2, 21, 0));
        assert_eq!(display(&[0x41]).unwrap().since, OsVersion::INITIAL);
    }

    #[test]
    fn test_trailing_nuls_are_padding() {
        let decoded = display(&[0xaa, 0x00, 0x00, 0x00, 0x00]).unwrap();
        assert_eq!(decoded.text, "Str1");
        assert_eq!(display(&[]).unwrap().text, "");
    }

    #[test]
    fn test_embedded_nul_is_an_error() {
        assert!(matches!(
            display(&[0x41, 0x00, 0x42]),
            Err(DecodeError::UnexpectedNul { position: 1 })
        ));
    }

    #[test]
    fn test_unrecognized_bytes() {
        assert!(matches!(
            display(&[0x41, 0x26]),
            Err(DecodeError::UnrecognizedByte {
                byte: 0x26,
                position: 1
            })
        ));
        assert!(matches!(
            display(&[0xbb, 0xff]),
            Err(DecodeError::UnrecognizedBytes {
                bytes: [0xbb, 0xff],
                position: 0
            })
        ));
        assert!(matches!(
            display(&[0x41, 0xef]),
            Err(DecodeError::UnrecognizedByte {
                byte: 0xef,
                position: 1
            })
        ));
        // Too new for the TI-84+.
        assert!(matches!(
            decode(&[0xef, 0x98], &TI_84P, &DecodeOptions::new()),
            Err(DecodeError::UnrecognizedBytes { .. })
        ));
    }

    #[test]
    fn test_token_iterator_stops_at_error() {
        let table = TI_84PCE.tokens();
        let found: Vec<_> = tokens(&[0x41, 0xef, 0x00, 0x26, 0x42], table).collect();
        assert_eq!(found.len(), 3);
        assert_eq!(found[0].as_ref().unwrap().bytes, &[0x41]);
        assert_eq!(found[1].as_ref().unwrap().bytes, &[0xef, 0x00]);
        assert!(matches!(
            found[2],
            Err(DecodeError::UnrecognizedByte { byte: 0x26, position: 3 })
        ));
    }

    #[test]
    fn test_ambiguous_prefix() {
        let table = TokenTable::from_sheet(&TEST_SHEET, OsVersion::LATEST);
        let decode = |bytes: &[u8]| decode_with(bytes, &table, "en", DecodeMode::Display);

        assert_eq!(decode(&[0x07, 0x01]).unwrap().text, "ONE");
        assert_eq!(decode(&[0x07, 0x02]).unwrap().text, "'B");
        assert_eq!(decode(&[0x07]).unwrap().text, "'");
        assert!(matches!(
            decode(&[0x08, 0x02]),
            Err(DecodeError::UnrecognizedBytes { .. })
        ));
    }
}
