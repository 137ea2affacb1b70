//! Intel hex blocks.
//!
//! ```text
//! :SS AAAA TT DATA CC
//! ```
//!
//! Written without spaces in uppercase ASCII hex: SS is the data size, AAAA
//! the big-endian address, TT the block type and CC the two's complement of
//! the low byte of the sum of every preceding byte. Blocks are separated by
//! `\r\n`.

use std::fmt::{self, Write as _};

use crate::diagnostics::{Diagnostics, Warning};
use crate::error::{ConvertError, RecordError};

/// Separator between blocks.
pub const BLOCK_SEPARATOR: &[u8] = b"\r\n";

const START_CODE: u8 = b':';

/// Size, address and type bytes.
const BLOCK_PREFIX_LENGTH: usize = 4;

/// One addressed block of flash data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntelBlock {
    address: u16,
    block_type: u8,
    data: Vec<u8>,
}

impl IntelBlock {
    pub const DATA: u8 = 0x00;
    pub const END_OF_FILE: u8 = 0x01;
    pub const EXTENDED_SEGMENT: u8 = 0x02;

    /// Creates a block; at most 255 data bytes fit in one.
    pub fn new(address: u16, block_type: u8, data: Vec<u8>) -> Result<Self, ConvertError> {
        if data.len() > u8::MAX as usize {
            return Err(ConvertError::Overflow {
                value: data.len() as u64,
                width: 1,
            });
        }
        Ok(Self {
            address,
            block_type,
            data,
        })
    }

    /// The block that ends every Intel hex payload.
    pub fn end_of_file() -> Self {
        Self {
            address: 0,
            block_type: Self::END_OF_FILE,
            data: Vec::new(),
        }
    }

    pub fn address(&self) -> u16 {
        self.address
    }

    pub fn block_type(&self) -> u8 {
        self.block_type
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// The checksum byte this block is written with.
    pub fn checksum(&self) -> u8 {
        block_checksum(&self.prefix(), &self.data)
    }

    fn prefix(&self) -> [u8; BLOCK_PREFIX_LENGTH] {
        let [high, low] = self.address.to_be_bytes();
        [self.data.len() as u8, high, low, self.block_type]
    }

    /// Splits Intel hex text into blocks.
    ///
    /// A block with a bad checksum, an unknown type or too few bytes is kept
    /// and reported; text that is not hex at all is an error.
    pub fn parse_blocks(text: &[u8], diagnostics: &mut Diagnostics) -> Result<Vec<Self>, RecordError> {
        split_blocks(text)
            .map(|line| Self::parse_one(line, diagnostics))
            .collect()
    }

    fn parse_one(line: &[u8], diagnostics: &mut Diagnostics) -> Result<Self, RecordError> {
        let Some((&START_CODE, digits)) = line.split_first() else {
            return Err(RecordError::InvalidMagic {
                expected: ":",
                found: String::from_utf8_lossy(line.get(..1).unwrap_or_default()).into_owned(),
            });
        };

        let bytes = decode_hex(digits)?;
        if bytes.len() < BLOCK_PREFIX_LENGTH {
            return Err(RecordError::UnexpectedEof {
                context: "intel block",
            });
        }

        let size = bytes[0] as usize;
        let address = u16::from_be_bytes([bytes[1], bytes[2]]);
        let block_type = bytes[3];
        let rest = &bytes[BLOCK_PREFIX_LENGTH..];
        let data = rest[..size.min(rest.len())].to_vec();

        if !matches!(
            block_type,
            Self::DATA | Self::END_OF_FILE | Self::EXTENDED_SEGMENT
        ) {
            diagnostics.report(Warning::UnknownBlockType { block_type })?;
        }

        match rest.get(size) {
            Some(&stored) => {
                let computed = block_checksum(&bytes[..BLOCK_PREFIX_LENGTH], &data);
                if stored != computed {
                    diagnostics.report(Warning::BlockChecksumMismatch {
                        expected: computed,
                        found: stored,
                    })?;
                }
                if rest.len() > size + 1 {
                    diagnostics.report(Warning::TrailingData {
                        len: rest.len() - size - 1,
                    })?;
                }
            }
            None => {
                diagnostics.report(Warning::DataTruncated {
                    context: "intel block",
                    expected: size + 1,
                    found: rest.len(),
                })?;
            }
        }

        Ok(Self {
            address,
            block_type,
            data,
        })
    }

    /// Writes the block as `:SSAAAATT...CC`.
    pub fn to_text(&self) -> String {
        let mut text = String::with_capacity(1 + 2 * (BLOCK_PREFIX_LENGTH + self.data.len() + 1));
        text.push(START_CODE as char);
        for byte in self.prefix().iter().chain(&self.data) {
            // Writing to a String cannot fail.
            let _ = write!(text, "{byte:02X}");
        }
        let _ = write!(text, "{:02X}", self.checksum());
        text
    }

    /// Writes blocks separated by `\r\n`.
    pub fn join(blocks: &[IntelBlock]) -> Vec<u8> {
        blocks
            .iter()
            .map(|block| block.to_text().into_bytes())
            .collect::<Vec<_>>()
            .join(BLOCK_SEPARATOR)
    }
}

impl fmt::Display for IntelBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}

fn split_blocks(text: &[u8]) -> impl Iterator<Item = &[u8]> {
    let mut rest = text;
    std::iter::from_fn(move || {
        while rest.starts_with(BLOCK_SEPARATOR) {
            rest = &rest[BLOCK_SEPARATOR.len()..];
        }
        if rest.is_empty() {
            return None;
        }
        let end = rest
            .windows(BLOCK_SEPARATOR.len())
            .position(|window| window == BLOCK_SEPARATOR)
            .unwrap_or(rest.len());
        let (line, tail) = rest.split_at(end);
        rest = tail;
        Some(line)
    })
}

fn block_checksum(prefix: &[u8], data: &[u8]) -> u8 {
    let sum = prefix
        .iter()
        .chain(data)
        .fold(0u8, |acc, &byte| acc.wrapping_add(byte));
    sum.wrapping_neg()
}

fn decode_hex(digits: &[u8]) -> Result<Vec<u8>, ConvertError> {
    if digits.len() % 2 != 0 || !digits.iter().all(u8::is_ascii_hexdigit) {
        return Err(ConvertError::InvalidHex {
            field: "intel block",
        });
    }
    let nibble = |digit: u8| (digit as char).to_digit(16).unwrap_or(0) as u8;
    Ok(digits
        .chunks_exact(2)
        .map(|pair| nibble(pair[0]) << 4 | nibble(pair[1]))
        .collect())
}
