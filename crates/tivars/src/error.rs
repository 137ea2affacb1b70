//! Error types for var file parsing, serialization and tokenization.

use thiserror::Error;

use crate::diagnostics::Warning;

/// Error codes grouping related failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// E001: Invalid magic or signature
    InvalidMagic,
    /// E002: Input ended early
    Truncated,
    /// E003: Anomaly promoted to an error by strict parsing
    Strict,
    /// E004: Field could not be converted
    InvalidValue,
    /// E005: Token stream or program text could not be translated
    Tokenization,
}

impl ErrorCode {
    /// Returns the error code string (e.g., "E001").
    pub fn code(&self) -> &'static str {
        match self {
            ErrorCode::InvalidMagic => "E001",
            ErrorCode::Truncated => "E002",
            ErrorCode::Strict => "E003",
            ErrorCode::InvalidValue => "E004",
            ErrorCode::Tokenization => "E005",
        }
    }
}

/// Error while converting between field bytes and typed values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConvertError {
    #[error("[E004] expected {expected} bytes for {field}, got {found}")]
    WrongWidth {
        field: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("[E004] value {value} does not fit in {width} bytes")]
    Overflow { value: u64, width: usize },

    #[error("[E004] invalid UTF-8 in {field}")]
    InvalidUtf8 { field: &'static str },

    #[error("[E004] character {ch:?} cannot be stored in {field}")]
    UnencodableChar { field: &'static str, ch: char },

    #[error("[E004] invalid BCD byte 0x{byte:02x}")]
    InvalidBcd { byte: u8 },

    #[error("[E004] {value} cannot be stored as BCD")]
    BcdOverflow { value: u32 },

    #[error("[E004] invalid hex digits in {field}")]
    InvalidHex { field: &'static str },

    #[error("[E004] invalid name {name:?}: {reason}")]
    InvalidName { name: String, reason: &'static str },

    #[error(transparent)]
    Encode(#[from] EncodeError),

    #[error(transparent)]
    Decode(#[from] DecodeError),
}

/// Error while parsing or building a record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    #[error("[E001] invalid magic: expected {expected:?}, found {found:?}")]
    InvalidMagic {
        expected: &'static str,
        found: String,
    },

    #[error("[E002] unexpected end of input while reading {context}")]
    UnexpectedEof { context: &'static str },

    #[error("[E003] strict parsing rejected input: {0}")]
    Strict(Warning),

    #[error("[E004] field {field} is not present in this record")]
    FieldAbsent { field: &'static str },

    #[error("[E004] {operation} is not supported by {type_name} entries")]
    Unsupported {
        operation: &'static str,
        type_name: &'static str,
    },

    #[error(transparent)]
    Convert(#[from] ConvertError),
}

impl RecordError {
    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            RecordError::InvalidMagic { .. } => ErrorCode::InvalidMagic,
            RecordError::UnexpectedEof { .. } => ErrorCode::Truncated,
            RecordError::Strict(_) => ErrorCode::Strict,
            RecordError::Convert(ConvertError::Encode(_) | ConvertError::Decode(_)) => {
                ErrorCode::Tokenization
            }
            RecordError::FieldAbsent { .. }
            | RecordError::Unsupported { .. }
            | RecordError::Convert(_) => ErrorCode::InvalidValue,
        }
    }
}

impl From<EncodeError> for RecordError {
    fn from(err: EncodeError) -> Self {
        RecordError::Convert(ConvertError::Encode(err))
    }
}

impl From<DecodeError> for RecordError {
    fn from(err: DecodeError) -> Self {
        RecordError::Convert(ConvertError::Decode(err))
    }
}

/// Error while tokenizing program text.
///
/// Tokenization never recovers: a best-effort token stream would silently
/// change what the program does.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodeError {
    #[error("[E005] could not tokenize input at position {position}: {excerpt:?}")]
    NoMatch { position: usize, excerpt: String },

    #[error("[E005] tokenizer stack underflow at position {position}: {excerpt:?}")]
    StackUnderflow { position: usize, excerpt: String },
}

/// Error while detokenizing a byte stream.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("[E005] unrecognized byte 0x{byte:02x} at position {position}")]
    UnrecognizedByte { byte: u8, position: usize },

    #[error("[E005] unrecognized bytes 0x{:02x}{:02x} at position {position}", .bytes[0], .bytes[1])]
    UnrecognizedBytes { bytes: [u8; 2], position: usize },

    #[error("[E005] unexpected null byte at position {position}")]
    UnexpectedNul { position: usize },
}
