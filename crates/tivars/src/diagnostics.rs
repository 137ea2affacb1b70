//! Recoverable anomalies found while reading records.
//!
//! Lenient parsing keeps going past anomalies: each one is logged through the
//! `log` facade, collected on the parsed value, and (if structural) marks the
//! value as corrupt. Strict parsing turns every non-advisory anomaly into a
//! [`RecordError::Strict`].

use log::warn;
use thiserror::Error;

use crate::error::{DecodeError, RecordError};

/// Options controlling how records are parsed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseOptions {
    /// Reject structural mismatches and checksum failures instead of
    /// recovering from them.
    pub strict: bool,
}

impl ParseOptions {
    /// Creates default (lenient) parse options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates strict parse options.
    pub fn strict() -> Self {
        Self { strict: true }
    }
}

/// How much a warning says about the integrity of the parsed value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Redundant or structural fields disagree; the value is marked corrupt.
    Structural,
    /// The content fails verification but the structure is intact.
    Integrity,
    /// Worth reporting, never fatal.
    Advisory,
}

/// A recoverable anomaly.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Warning {
    // === Structural ===
    #[error("entry data lengths are mismatched ({first} vs. {second}); using {first} to read the data section")]
    DataLengthMismatch { first: u16, second: u16 },

    #[error("entry meta length has an unexpected value ({found}); reading flash bytes anyway")]
    UnexpectedMetaLength { found: u16 },

    #[error("entry meta length is 13 but the flash bytes are likely missing; reading it as flashless")]
    MissingFlashBytes,

    #[error("total length of entries is incorrect (expected {expected}, got {found})")]
    EntryLengthMismatch { expected: usize, found: usize },

    #[error("{context} is truncated (expected {expected} bytes, got {found})")]
    DataTruncated {
        context: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("sized entry has an unexpected length (expected {expected}, got {found})")]
    SizedLengthMismatch { expected: usize, found: usize },

    #[error("type id 0x{type_id:02x} is not recognized; no coercion will occur")]
    UnknownTypeId { type_id: u8 },

    // === Integrity ===
    #[error("checksum is incorrect (expected 0x{expected:04x}, got 0x{found:04x})")]
    ChecksumMismatch { expected: u16, found: u16 },

    #[error("intel block checksum is incorrect (expected 0x{expected:02x}, got 0x{found:02x})")]
    BlockChecksumMismatch { expected: u8, found: u8 },

    // === Advisory ===
    #[error("type id is 0xFF; no coercion will occur")]
    NoType,

    #[error("archive flag 0x{value:02x} is set to an unexpected value")]
    UnexpectedArchiveFlag { value: u8 },

    #[error("version 0x{version:02x} is not recognized for {type_name} entries")]
    UnknownVersion {
        version: u8,
        type_name: &'static str,
    },

    #[error("stored version 0x{stored:02x} differs from the computed version 0x{computed:02x}")]
    VersionMismatch { stored: u8, computed: u8 },

    #[error("{type_name} entries are not compatible with flashless chips")]
    FlashOnly { type_name: &'static str },

    #[error("name {name:?} is invalid: {reason}")]
    InvalidName { name: String, reason: &'static str },

    #[error("payload is not a valid token stream: {0}")]
    InvalidTokens(DecodeError),

    #[error("file magic {magic:?} is not recognized")]
    UnrecognizedMagic { magic: String },

    #[error("product id 0x{product_id:02x} is not recognized")]
    UnrecognizedProductId { product_id: u8 },

    #[error("comment is not valid UTF-8")]
    InvalidComment,

    #[error("entry is archived but the targeted model has no flash to archive it in")]
    ArchiveUnsupported,

    #[error("unexpected trailing data ({len} bytes)")]
    TrailingData { len: usize },

    #[error("byte literal {literal} is not a recognized token")]
    UnknownByteLiteral { literal: String },

    #[error("intel block type 0x{block_type:02x} is not recognized")]
    UnknownBlockType { block_type: u8 },

    #[error("name length byte ({stored}) does not match the name ({actual} bytes)")]
    NameLengthMismatch { stored: u8, actual: usize },

    #[error("device type 0x{device:02x} is not recognized")]
    UnknownDeviceType { device: u8 },
}

impl Warning {
    /// Returns how severe this warning is.
    pub fn severity(&self) -> Severity {
        match self {
            Warning::DataLengthMismatch { .. }
            | Warning::UnexpectedMetaLength { .. }
            | Warning::MissingFlashBytes
            | Warning::EntryLengthMismatch { .. }
            | Warning::DataTruncated { .. }
            | Warning::SizedLengthMismatch { .. }
            | Warning::UnknownTypeId { .. } => Severity::Structural,
            Warning::ChecksumMismatch { .. } | Warning::BlockChecksumMismatch { .. } => {
                Severity::Integrity
            }
            _ => Severity::Advisory,
        }
    }

    /// Returns true if this warning marks the value as corrupt.
    pub fn is_structural(&self) -> bool {
        self.severity() == Severity::Structural
    }
}

/// Collects the warnings raised while reading one value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diagnostics {
    strict: bool,
    corrupt: bool,
    warnings: Vec<Warning>,
}

impl Diagnostics {
    /// Creates an empty collector for the given options.
    pub fn new(options: &ParseOptions) -> Self {
        Self {
            strict: options.strict,
            ..Self::default()
        }
    }

    /// Reports an anomaly.
    ///
    /// Returns an error if strict parsing forbids it; otherwise the warning is
    /// logged and recorded.
    pub fn report(&mut self, warning: Warning) -> Result<(), RecordError> {
        let severity = warning.severity();
        if self.strict && severity != Severity::Advisory {
            return Err(RecordError::Strict(warning));
        }

        warn!("{}", warning);
        if severity == Severity::Structural {
            self.corrupt = true;
        }
        self.warnings.push(warning);
        Ok(())
    }

    /// Merges another collector's findings into this one without re-logging.
    pub fn absorb(&mut self, other: &Diagnostics) {
        self.corrupt |= other.corrupt;
        self.warnings.extend(other.warnings.iter().cloned());
    }

    /// Records warnings that were already logged where they arose.
    pub(crate) fn extend(&mut self, warnings: impl IntoIterator<Item = Warning>) {
        for warning in warnings {
            self.corrupt |= warning.is_structural();
            self.warnings.push(warning);
        }
    }

    /// Returns true if strict parsing is in effect.
    pub fn is_strict(&self) -> bool {
        self.strict
    }

    /// Returns true if a structural anomaly was reported.
    pub fn is_corrupt(&self) -> bool {
        self.corrupt
    }

    /// Returns all warnings in the order they were reported.
    pub fn warnings(&self) -> &[Warning] {
        &self.warnings
    }

    /// Returns true if nothing was reported.
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lenient_structural_marks_corrupt() {
        let mut diagnostics = Diagnostics::new(&ParseOptions::new());
        diagnostics
            .report(Warning::DataLengthMismatch { first: 2, second: 3 })
            .unwrap();
        assert!(diagnostics.is_corrupt());
        assert_eq!(diagnostics.warnings().len(), 1);
    }

    #[test]
    fn test_lenient_checksum_is_not_corrupt() {
        let mut diagnostics = Diagnostics::new(&ParseOptions::new());
        diagnostics
            .report(Warning::ChecksumMismatch {
                expected: 1,
                found: 2,
            })
            .unwrap();
        assert!(!diagnostics.is_corrupt());
        assert!(!diagnostics.is_clean());
    }

    #[test]
    fn test_strict_rejects_structural_and_integrity() {
        let mut diagnostics = Diagnostics::new(&ParseOptions::strict());
        let result = diagnostics.report(Warning::UnexpectedMetaLength { found: 12 });
        assert!(matches!(
            result,
            Err(RecordError::Strict(Warning::UnexpectedMetaLength { found: 12 }))
        ));

        let result = diagnostics.report(Warning::ChecksumMismatch {
            expected: 0,
            found: 1,
        });
        assert!(matches!(result, Err(RecordError::Strict(_))));
    }

    #[test]
    fn test_strict_allows_advisory() {
        let mut diagnostics = Diagnostics::new(&ParseOptions::strict());
        diagnostics.report(Warning::NoType).unwrap();
        assert!(!diagnostics.is_corrupt());
        assert_eq!(diagnostics.warnings(), &[Warning::NoType]);
    }

    #[test]
    fn test_absorb() {
        let mut outer = Diagnostics::new(&ParseOptions::new());
        let mut inner = Diagnostics::new(&ParseOptions::new());
        inner.report(Warning::UnknownTypeId { type_id: 0x42 }).unwrap();
        outer.absorb(&inner);
        assert!(outer.is_corrupt());
        assert_eq!(outer.warnings().len(), 1);
    }
}
