//! Bidirectional converters between field bytes and typed values.
//!
//! A converter is stateless: [`Converter::get`] reads a value from a field's
//! current bytes and [`Converter::set`] produces the bytes for a value. Fixed
//! widths are enforced by the layout, not the converter, so `set` may return
//! fewer bytes (they are NUL-padded) or more (they are truncated).
//!
//! Numeric payloads (real, complex, exact forms) are opaque to this crate; a
//! consumer supplies its own `Converter` for them and applies it to
//! [`Entry::data`](crate::record::Entry::data).

use crate::error::ConvertError;
use crate::record::primitives::{uint_from_le, uint_to_le};

/// A typed view of a field's bytes.
pub trait Converter {
    /// The decoded value type.
    type Value;

    /// Converts field bytes to a value.
    fn get(bytes: &[u8]) -> Result<Self::Value, ConvertError>;

    /// Converts a value to field bytes.
    fn set(value: &Self::Value) -> Result<Vec<u8>, ConvertError>;
}

fn expect_width(field: &'static str, bytes: &[u8], expected: usize) -> Result<(), ConvertError> {
    if bytes.len() != expected {
        return Err(ConvertError::WrongWidth {
            field,
            expected,
            found: bytes.len(),
        });
    }
    Ok(())
}

fn trim_nul(bytes: &[u8]) -> &[u8] {
    let end = bytes.iter().rposition(|&b| b != 0).map_or(0, |i| i + 1);
    &bytes[..end]
}

// =============================================================================
// RAW & INTEGERS
// =============================================================================

/// Raw bytes, unchanged.
#[derive(Debug, Clone, Copy)]
pub struct Bytes;

impl Converter for Bytes {
    type Value = Vec<u8>;

    fn get(bytes: &[u8]) -> Result<Vec<u8>, ConvertError> {
        Ok(bytes.to_vec())
    }

    fn set(value: &Vec<u8>) -> Result<Vec<u8>, ConvertError> {
        Ok(value.clone())
    }
}

/// A single byte.
#[derive(Debug, Clone, Copy)]
pub struct Byte;

impl Converter for Byte {
    type Value = u8;

    fn get(bytes: &[u8]) -> Result<u8, ConvertError> {
        expect_width("byte", bytes, 1)?;
        Ok(bytes[0])
    }

    fn set(value: &u8) -> Result<Vec<u8>, ConvertError> {
        Ok(vec![*value])
    }
}

/// A little-endian u16.
#[derive(Debug, Clone, Copy)]
pub struct U16;

impl Converter for U16 {
    type Value = u16;

    fn get(bytes: &[u8]) -> Result<u16, ConvertError> {
        expect_width("u16", bytes, 2)?;
        Ok(uint_from_le(bytes) as u16)
    }

    fn set(value: &u16) -> Result<Vec<u8>, ConvertError> {
        Ok(value.to_le_bytes().to_vec())
    }
}

/// A little-endian u32.
#[derive(Debug, Clone, Copy)]
pub struct U32;

impl Converter for U32 {
    type Value = u32;

    fn get(bytes: &[u8]) -> Result<u32, ConvertError> {
        expect_width("u32", bytes, 4)?;
        Ok(uint_from_le(bytes) as u32)
    }

    fn set(value: &u32) -> Result<Vec<u8>, ConvertError> {
        uint_to_le(*value as u64, 4)
    }
}

/// A flag byte: any nonzero value reads as set; set writes `0x80`.
#[derive(Debug, Clone, Copy)]
pub struct Boolean;

impl Converter for Boolean {
    type Value = bool;

    fn get(bytes: &[u8]) -> Result<bool, ConvertError> {
        expect_width("flag", bytes, 1)?;
        Ok(bytes[0] != 0)
    }

    fn set(value: &bool) -> Result<Vec<u8>, ConvertError> {
        Ok(vec![if *value { 0x80 } else { 0x00 }])
    }
}

// =============================================================================
// STRINGS
// =============================================================================

/// A NUL-padded single-byte string (magic numbers and plain names).
#[derive(Debug, Clone, Copy)]
pub struct Latin1;

impl Converter for Latin1 {
    type Value = String;

    fn get(bytes: &[u8]) -> Result<String, ConvertError> {
        Ok(trim_nul(bytes).iter().map(|&b| b as char).collect())
    }

    fn set(value: &String) -> Result<Vec<u8>, ConvertError> {
        value
            .chars()
            .map(|ch| {
                u8::try_from(ch as u32).map_err(|_| ConvertError::UnencodableChar {
                    field: "latin-1 string",
                    ch,
                })
            })
            .collect()
    }
}

/// A NUL-padded UTF-8 string (header comments).
#[derive(Debug, Clone, Copy)]
pub struct Utf8;

impl Converter for Utf8 {
    type Value = String;

    fn get(bytes: &[u8]) -> Result<String, ConvertError> {
        std::str::from_utf8(trim_nul(bytes))
            .map(str::to_string)
            .map_err(|_| ConvertError::InvalidUtf8 { field: "comment" })
    }

    fn set(value: &String) -> Result<Vec<u8>, ConvertError> {
        Ok(value.as_bytes().to_vec())
    }
}

// =============================================================================
// PACKED BCD
// =============================================================================

fn bcd_decode(byte: u8) -> Result<u8, ConvertError> {
    let (high, low) = (byte >> 4, byte & 0x0f);
    if high > 9 || low > 9 {
        return Err(ConvertError::InvalidBcd { byte });
    }
    Ok(high * 10 + low)
}

fn bcd_encode(value: u32) -> Result<u8, ConvertError> {
    if value > 99 {
        return Err(ConvertError::BcdOverflow { value });
    }
    Ok((((value / 10) << 4) | (value % 10)) as u8)
}

/// A calendar date stored as packed BCD `dd mm yyyy`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Date {
    pub day: u8,
    pub month: u8,
    pub year: u16,
}

/// Four-byte packed BCD date.
#[derive(Debug, Clone, Copy)]
pub struct BcdDate;

impl Converter for BcdDate {
    type Value = Date;

    fn get(bytes: &[u8]) -> Result<Date, ConvertError> {
        expect_width("date", bytes, 4)?;
        Ok(Date {
            day: bcd_decode(bytes[0])?,
            month: bcd_decode(bytes[1])?,
            year: bcd_decode(bytes[2])? as u16 * 100 + bcd_decode(bytes[3])? as u16,
        })
    }

    fn set(value: &Date) -> Result<Vec<u8>, ConvertError> {
        let year = value.year as u32;
        if year > 9999 {
            return Err(ConvertError::BcdOverflow { value: year });
        }
        Ok(vec![
            bcd_encode(value.day as u32)?,
            bcd_encode(value.month as u32)?,
            bcd_encode(year / 100)?,
            bcd_encode(year % 100)?,
        ])
    }
}

/// A `major.minor` revision stored as two packed BCD bytes.
#[derive(Debug, Clone, Copy)]
pub struct BcdRevision;

impl Converter for BcdRevision {
    type Value = (u8, u8);

    fn get(bytes: &[u8]) -> Result<(u8, u8), ConvertError> {
        expect_width("revision", bytes, 2)?;
        Ok((bcd_decode(bytes[0])?, bcd_decode(bytes[1])?))
    }

    fn set(value: &(u8, u8)) -> Result<Vec<u8>, ConvertError> {
        Ok(vec![bcd_encode(value.0 as u32)?, bcd_encode(value.1 as u32)?])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_boolean_writes_archive_bit() {
        assert_eq!(Boolean::set(&true).unwrap(), vec![0x80]);
        assert_eq!(Boolean::set(&false).unwrap(), vec![0x00]);
        assert!(Boolean::get(&[0x80]).unwrap());
        assert!(!Boolean::get(&[0x00]).unwrap());
    }

    #[test]
    fn test_integer_width_checked() {
        assert_eq!(U16::get(&[0x16, 0x00]).unwrap(), 0x16);
        assert!(matches!(
            U16::get(&[0x16]),
            Err(ConvertError::WrongWidth { expected: 2, found: 1, .. })
        ));
        assert_eq!(U32::set(&0x0102_0304).unwrap(), vec![4, 3, 2, 1]);
    }

    #[test]
    fn test_latin1_trims_padding() {
        assert_eq!(Latin1::get(b"**TI83F*").unwrap(), "**TI83F*");
        assert_eq!(Latin1::get(b"AB\0\0\0\0\0\0").unwrap(), "AB");
        assert!(matches!(
            Latin1::set(&"θ".to_string()),
            Err(ConvertError::UnencodableChar { ch: 'θ', .. })
        ));
    }

    #[test]
    fn test_utf8_comment() {
        let comment = "Created by TI Connect CE 5.1.0.68";
        let mut bytes = Utf8::set(&comment.to_string()).unwrap();
        bytes.resize(42, 0);
        assert_eq!(Utf8::get(&bytes).unwrap(), comment);
        assert!(matches!(
            Utf8::get(&[0xff, 0xfe]),
            Err(ConvertError::InvalidUtf8 { .. })
        ));
    }

    #[test]
    fn test_bcd_date() {
        let date = BcdDate::get(&[0x25, 0x12, 0x19, 0x99]).unwrap();
        assert_eq!(
            date,
            Date {
                day: 25,
                month: 12,
                year: 1999
            }
        );
        assert_eq!(BcdDate::set(&date).unwrap(), vec![0x25, 0x12, 0x19, 0x99]);
        assert!(matches!(
            BcdDate::get(&[0x2a, 0x01, 0x20, 0x00]),
            Err(ConvertError::InvalidBcd { byte: 0x2a })
        ));
    }

    #[test]
    fn test_bcd_revision() {
        assert_eq!(BcdRevision::get(&[0x05, 0x08]).unwrap(), (5, 8));
        assert_eq!(BcdRevision::set(&(11, 2)).unwrap(), vec![0x11, 0x02]);
        assert!(matches!(
            BcdRevision::set(&(100, 0)),
            Err(ConvertError::BcdOverflow { value: 100 })
        ));
    }

    proptest! {
        #[test]
        fn prop_bcd_date_roundtrip(day in 1u8..=31, month in 1u8..=12, year in 0u16..=9999) {
            let date = Date { day, month, year };
            let bytes = BcdDate::set(&date).unwrap();
            prop_assert_eq!(BcdDate::get(&bytes).unwrap(), date);
        }
    }
}
