//! Byte cursor and output buffer used by the record layouts.
//!
//! All multi-byte integers in var and flash files are little-endian.

use crate::error::{ConvertError, RecordError};

// =============================================================================
// DECODING
// =============================================================================

/// Reader for decoding binary data.
///
/// Wraps a byte slice and provides methods for reading primitives
/// with bounds checking and error handling.
#[derive(Debug, Clone)]
pub struct Reader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Reader<'a> {
    /// Creates a new reader from a byte slice.
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Returns the current position in the data.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Returns the remaining bytes.
    pub fn remaining(&self) -> &'a [u8] {
        &self.data[self.pos..]
    }

    /// Returns the number of remaining bytes.
    pub fn remaining_len(&self) -> usize {
        self.data.len() - self.pos
    }

    /// Returns true if all data has been consumed.
    pub fn is_empty(&self) -> bool {
        self.pos >= self.data.len()
    }

    /// Returns the next n bytes without consuming them, if available.
    pub fn peek(&self, n: usize) -> Option<&'a [u8]> {
        self.data.get(self.pos..self.pos + n)
    }

    /// Reads a single byte.
    #[inline]
    pub fn read_byte(&mut self, context: &'static str) -> Result<u8, RecordError> {
        if self.pos >= self.data.len() {
            return Err(RecordError::UnexpectedEof { context });
        }
        let byte = self.data[self.pos];
        self.pos += 1;
        Ok(byte)
    }

    /// Reads exactly n bytes.
    #[inline]
    pub fn read_bytes(&mut self, n: usize, context: &'static str) -> Result<&'a [u8], RecordError> {
        if self.pos + n > self.data.len() {
            return Err(RecordError::UnexpectedEof { context });
        }
        let bytes = &self.data[self.pos..self.pos + n];
        self.pos += n;
        Ok(bytes)
    }

    /// Reads at most n bytes, stopping early at the end of the data.
    pub fn read_up_to(&mut self, n: usize) -> &'a [u8] {
        let end = (self.pos + n).min(self.data.len());
        let bytes = &self.data[self.pos..end];
        self.pos = end;
        bytes
    }

    /// Reads a little-endian u16.
    pub fn read_u16(&mut self, context: &'static str) -> Result<u16, RecordError> {
        let bytes = self.read_bytes(2, context)?;
        Ok(u16::from_le_bytes([bytes[0], bytes[1]]))
    }

    /// Reads a little-endian u32.
    pub fn read_u32(&mut self, context: &'static str) -> Result<u32, RecordError> {
        let bytes = self.read_bytes(4, context)?;
        Ok(u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }

    /// Skips n bytes.
    pub fn skip(&mut self, n: usize, context: &'static str) -> Result<(), RecordError> {
        self.read_bytes(n, context).map(|_| ())
    }
}

// =============================================================================
// ENCODING
// =============================================================================

/// Writer for encoding binary data.
#[derive(Debug, Clone, Default)]
pub struct Writer {
    buf: Vec<u8>,
}

impl Writer {
    /// Creates a new writer.
    pub fn new() -> Self {
        Self { buf: Vec::new() }
    }

    /// Creates a new writer with capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: Vec::with_capacity(capacity),
        }
    }

    /// Returns the written bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }

    /// Returns a reference to the written bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Returns the number of bytes written.
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Returns true if no bytes have been written.
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Writes a single byte.
    #[inline]
    pub fn write_byte(&mut self, byte: u8) {
        self.buf.push(byte);
    }

    /// Writes raw bytes.
    #[inline]
    pub fn write_bytes(&mut self, bytes: &[u8]) {
        self.buf.extend_from_slice(bytes);
    }

    /// Writes a little-endian u16.
    pub fn write_u16(&mut self, value: u16) {
        self.buf.extend_from_slice(&value.to_le_bytes());
    }

    /// Writes a little-endian u32.
    pub fn write_u32(&mut self, value: u32) {
        self.buf.extend_from_slice(&value.to_le_bytes());
    }
}

// =============================================================================
// INTEGERS & CHECKSUMS
// =============================================================================

/// Reads an unsigned little-endian integer of any width up to 8 bytes.
pub fn uint_from_le(bytes: &[u8]) -> u64 {
    bytes
        .iter()
        .take(8)
        .rev()
        .fold(0u64, |acc, &b| (acc << 8) | b as u64)
}

/// Writes an unsigned little-endian integer into exactly `width` bytes.
pub fn uint_to_le(value: u64, width: usize) -> Result<Vec<u8>, ConvertError> {
    if width < 8 && value >> (8 * width) != 0 {
        return Err(ConvertError::Overflow { value, width });
    }
    Ok(value.to_le_bytes().iter().copied().take(width).collect())
}

/// Returns the low 16 bits of the sum of all bytes.
pub fn checksum16(bytes: &[u8]) -> u16 {
    bytes
        .iter()
        .fold(0u16, |acc, &b| acc.wrapping_add(b as u16))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_u16_roundtrip() {
        for v in [0u16, 1, 0x0b, 0x0d, 0x1234, u16::MAX] {
            let mut writer = Writer::new();
            writer.write_u16(v);
            assert_eq!(writer.len(), 2);

            let mut reader = Reader::new(writer.as_bytes());
            assert_eq!(reader.read_u16("test").unwrap(), v);
            assert!(reader.is_empty());
        }
    }

    #[test]
    fn test_u32_little_endian() {
        let mut reader = Reader::new(&[0x78, 0x56, 0x34, 0x12]);
        assert_eq!(reader.read_u32("test").unwrap(), 0x1234_5678);
    }

    #[test]
    fn test_unexpected_eof() {
        let data = [0u8; 5];
        let mut reader = Reader::new(&data);
        let result = reader.read_bytes(10, "test");
        assert!(matches!(result, Err(RecordError::UnexpectedEof { context: "test" })));
    }

    #[test]
    fn test_read_up_to_stops_at_end() {
        let data = [1u8, 2, 3];
        let mut reader = Reader::new(&data);
        reader.read_byte("test").unwrap();
        assert_eq!(reader.read_up_to(10), &[2, 3]);
        assert!(reader.is_empty());
        assert_eq!(reader.read_up_to(1), &[] as &[u8]);
    }

    #[test]
    fn test_peek_does_not_consume() {
        let data = [0x0d, 0x00, 0x05];
        let reader = Reader::new(&data);
        assert_eq!(reader.peek(2), Some(&data[..2]));
        assert_eq!(reader.peek(4), None);
        assert_eq!(reader.position(), 0);
    }

    #[test]
    fn test_uint_overflow() {
        assert_eq!(uint_to_le(0x1234, 2).unwrap(), vec![0x34, 0x12]);
        assert!(matches!(
            uint_to_le(0x10000, 2),
            Err(ConvertError::Overflow { width: 2, .. })
        ));
        assert_eq!(uint_from_le(&[0x34, 0x12]), 0x1234);
        assert_eq!(uint_from_le(&[]), 0);
    }

    #[test]
    fn test_checksum_wraps() {
        assert_eq!(checksum16(&[0xff; 258]), (0xffu32 * 258 & 0xffff) as u16);
        assert_eq!(checksum16(&[]), 0);
    }

    proptest! {
        #[test]
        fn prop_checksum_is_low_sum(bytes in proptest::collection::vec(any::<u8>(), 0..2048)) {
            let sum: u64 = bytes.iter().map(|&b| b as u64).sum();
            prop_assert_eq!(checksum16(&bytes), (sum & 0xffff) as u16);
        }

        #[test]
        fn prop_uint_roundtrip(value in any::<u32>()) {
            let bytes = uint_to_le(value as u64, 4).unwrap();
            prop_assert_eq!(uint_from_le(&bytes), value as u64);
        }
    }
}
