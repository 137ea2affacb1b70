//! Variable names.
//!
//! Plain names (programs, appvars, reals) are up to eight characters from
//! `A-Z`, `0-9` and theta, starting with a letter or theta. Theta is stored as
//! `0x5B`. Equation and string names are instead stored as tokens, e.g. `Y₁`
//! as `5E 10` and `Str1` as `AA 00`.

use crate::error::ConvertError;
use crate::model::TI_84PCE;
use crate::record::convert::Converter;
use crate::tokenizer::{self, DecodeMode, DecodeOptions, EncodeOptions, TokenizeMode};

/// Width of the name field.
pub const NAME_LENGTH: usize = 8;

/// Byte that stores theta in a plain name.
pub const THETA_BYTE: u8 = 0x5B;

/// Glyphs accepted as theta.
pub const THETA_GLYPHS: [char; 4] = ['θ', 'Θ', 'ϴ', 'ᶿ'];

/// Uppercases a name and unifies theta glyphs.
pub fn normalize_name(name: &str) -> String {
    name.chars()
        .map(|ch| {
            if THETA_GLYPHS.contains(&ch) {
                'θ'
            } else {
                ch.to_ascii_uppercase()
            }
        })
        .collect()
}

/// Checks a normalized plain name.
pub fn validate_name(name: &str) -> Result<(), ConvertError> {
    let invalid = |reason| ConvertError::InvalidName {
        name: name.to_string(),
        reason,
    };

    let mut chars = name.chars();
    match chars.next() {
        None => return Err(invalid("name is empty")),
        Some(first) if first.is_ascii_digit() => {
            return Err(invalid("name cannot start with a digit"));
        }
        Some(_) => {}
    }

    if name.chars().count() > NAME_LENGTH {
        return Err(invalid("name is longer than 8 characters"));
    }
    if !name
        .chars()
        .all(|ch| ch.is_ascii_uppercase() || ch.is_ascii_digit() || ch == 'θ')
    {
        return Err(invalid("name may only contain A-Z, 0-9 and θ"));
    }
    Ok(())
}

/// A plain variable name.
#[derive(Debug, Clone, Copy)]
pub struct VarName;

impl Converter for VarName {
    type Value = String;

    fn get(bytes: &[u8]) -> Result<String, ConvertError> {
        let end = bytes.iter().position(|&b| b == 0).unwrap_or(bytes.len());
        Ok(bytes[..end]
            .iter()
            .map(|&b| if b == THETA_BYTE { 'θ' } else { b as char })
            .collect())
    }

    fn set(value: &String) -> Result<Vec<u8>, ConvertError> {
        let name = normalize_name(value);
        validate_name(&name)?;
        Ok(name
            .chars()
            .map(|ch| if ch == 'θ' { THETA_BYTE } else { ch as u8 })
            .collect())
    }
}

/// A name stored as tokens, read and written with the TI-84+CE table.
#[derive(Debug, Clone, Copy)]
pub struct TokenizedName;

impl Converter for TokenizedName {
    type Value = String;

    fn get(bytes: &[u8]) -> Result<String, ConvertError> {
        let options = DecodeOptions::new().mode(DecodeMode::Display);
        Ok(tokenizer::decode(bytes, &TI_84PCE, &options)?.text)
    }

    fn set(value: &String) -> Result<Vec<u8>, ConvertError> {
        let options = EncodeOptions::new().mode(TokenizeMode::Max);
        let encoded = tokenizer::encode(value, &TI_84PCE, &options)?;
        if encoded.bytes.is_empty() || encoded.bytes.len() > NAME_LENGTH {
            return Err(ConvertError::InvalidName {
                name: value.clone(),
                reason: "name must be one to eight bytes of tokens",
            });
        }
        Ok(encoded.bytes)
    }
}

/// Leading byte of every list name.
pub const LIST_BYTE: u8 = 0x5D;

/// Second byte of the `IDList` name.
const ID_LIST_BYTE: u8 = 0x40;

/// Longest custom list name.
pub const LIST_NAME_LENGTH: usize = 5;

/// A list name: `L₁`-`L₆` (stored `5D 00`-`5D 05`), `IDList`, or a custom
/// name of up to five characters stored after `5D`.
#[derive(Debug, Clone, Copy)]
pub struct ListName;

impl Converter for ListName {
    type Value = String;

    fn get(bytes: &[u8]) -> Result<String, ConvertError> {
        match bytes {
            [LIST_BYTE, 0x00..=0x05, ..] => TokenizedName::get(bytes),
            [LIST_BYTE, ID_LIST_BYTE, ..] => Ok("IDList".to_string()),
            [LIST_BYTE, rest @ ..] => VarName::get(rest),
            _ => VarName::get(bytes),
        }
    }

    fn set(value: &String) -> Result<Vec<u8>, ConvertError> {
        if value == "IDList" {
            return Ok(vec![LIST_BYTE, ID_LIST_BYTE]);
        }

        let name = value
            .strip_prefix('ʟ')
            .or_else(|| value.strip_prefix("|L"))
            .unwrap_or(value);
        let builtin = ["₁", "₂", "₃", "₄", "₅", "₆"]
            .iter()
            .position(|digit| name.strip_prefix('L') == Some(*digit));
        if let Some(index) = builtin {
            return Ok(vec![LIST_BYTE, index as u8]);
        }

        let name = normalize_name(name);
        validate_name(&name)?;
        if name.chars().count() > LIST_NAME_LENGTH {
            return Err(ConvertError::InvalidName {
                name,
                reason: "list name is longer than 5 characters",
            });
        }

        let mut bytes = vec![LIST_BYTE];
        bytes.extend(VarName::set(&name)?);
        Ok(bytes)
    }
}
