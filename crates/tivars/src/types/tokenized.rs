//! Helpers for tokenized entries: programs, equations and strings.

use crate::error::DecodeError;
use crate::model::{ModelId, OsVersion, TI_84PCE};
use crate::tokenizer::tokens;

/// Legal version bytes of tokenized entries.
pub const VERSIONS: &[u8] = &[
    0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x0A, 0x0B, 0x0C, //
    0x20, 0x21, 0x22, 0x23, 0x24, 0x25, 0x26, 0x2A, 0x2B, 0x2C,
];

/// Tokens that need the real-time clock.
pub const CLOCK_TOKENS: [[u8; 2]; 15] = [
    [0xEF, 0x00],
    [0xEF, 0x01],
    [0xEF, 0x02],
    [0xEF, 0x03],
    [0xEF, 0x04],
    [0xEF, 0x07],
    [0xEF, 0x08],
    [0xEF, 0x09],
    [0xEF, 0x0A],
    [0xEF, 0x0B],
    [0xEF, 0x0C],
    [0xEF, 0x0D],
    [0xEF, 0x0E],
    [0xEF, 0x0F],
    [0xEF, 0x10],
];

/// Version bit set when a clock token is present.
pub const CLOCK_VERSION_BIT: u8 = 0x20;

/// Compiled-assembly tokens and the first model that runs each.
pub const ASM_TOKENS: [([u8; 2], ModelId); 3] = [
    ([0xBB, 0x6D], ModelId::Ti83P),
    ([0xEF, 0x69], ModelId::Ti84PCse),
    ([0xEF, 0x7B], ModelId::Ti84PCe),
];

/// Oldest OS that knows every token of a token stream.
pub fn min_os(payload: &[u8]) -> Result<OsVersion, DecodeError> {
    tokens(payload, TI_84PCE.tokens()).try_fold(OsVersion::INITIAL, |since, token| {
        Ok(since.max(token?.since))
    })
}

/// Version byte for a token stream.
///
/// The low bits name the oldest OS that knows every token; `0x20` is added
/// when the stream uses the clock.
pub fn version_for(payload: &[u8]) -> Result<u8, DecodeError> {
    let mut since = OsVersion::INITIAL;
    let mut clock = false;
    for token in tokens(payload, TI_84PCE.tokens()) {
        let token = token?;
        since = since.max(token.since);
        clock |= CLOCK_TOKENS.iter().any(|clock| clock[..] == *token.bytes);
    }

    let version = version_since(since);
    Ok(if clock {
        version + CLOCK_VERSION_BIT
    } else {
        version
    })
}

fn version_since(since: OsVersion) -> u8 {
    const THRESHOLDS: [(ModelId, [u16; 2], u8); 10] = [
        (ModelId::Ti84PCe, [5, 3], 0x0C),
        (ModelId::Ti84PCe, [5, 2], 0x0B),
        (ModelId::Ti84PCse, [4, 0], 0x0A),
        (ModelId::Ti84P, [2, 55], 0x07),
        (ModelId::Ti84P, [2, 53], 0x06),
        (ModelId::Ti84P, [2, 30], 0x05),
        (ModelId::Ti84P, [2, 21], 0x04),
        (ModelId::Ti83P, [1, 16], 0x03),
        (ModelId::Ti83P, [1, 15], 0x02),
        (ModelId::Ti83P, [1, 0], 0x01),
    ];

    THRESHOLDS
        .iter()
        .find(|(model, [major, minor], _)| since >= OsVersion::new(*model, *major, *minor, 0))
        .map_or(0x00, |&(_, _, version)| version)
}

/// Returns true if a program payload is compiled assembly.
pub fn is_asm(payload: &[u8]) -> bool {
    ASM_TOKENS
        .iter()
        .any(|(token, _)| payload.starts_with(token))
}

/// Oldest OS that runs an assembly program.
pub fn asm_min_os(payload: &[u8]) -> OsVersion {
    ASM_TOKENS
        .iter()
        .filter(|(token, _)| payload.starts_with(token))
        .map(|&(_, model)| OsVersion::initial(model))
        .max()
        .unwrap_or(OsVersion::INITIAL)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clock_raises_version() {
        // setDate(1
        assert_eq!(version_for(&[0xef, 0x00, 0x31]).unwrap(), 0x24);
        // getDate
        assert_eq!(version_for(&[0xef, 0x09]).unwrap(), 0x24);
    }

    #[test]
    fn test_version_thresholds() {
        assert_eq!(version_for(&[]).unwrap(), 0x00);
        assert_eq!(version_for(&[0xde, 0x2a, 0x41, 0x2a]).unwrap(), 0x00);
        // Execute assembly was new in 1.00 on the TI-83+.
        assert_eq!(version_for(&[0xbb, 0x6a]).unwrap(), 0x01);
        // A CE-only token.
        assert_eq!(version_for(&[0xef, 0x98]).unwrap(), 0x0B);
    }

    #[test]
    fn test_version_for_invalid_stream() {
        assert!(matches!(
            version_for(&[0x41, 0x00, 0x41]),
            Err(DecodeError::UnexpectedNul { position: 1 })
        ));
    }

    #[test]
    fn test_versions_are_legal() {
        for version in [0x00, 0x06, 0x0A, 0x0C, 0x20, 0x26, 0x2A, 0x2C] {
            assert!(VERSIONS.contains(&version));
        }
        for version in [0x07, 0x08, 0x10, 0x27] {
            assert!(!VERSIONS.contains(&version));
        }
    }

    #[test]
    fn test_asm_detection() {
        assert!(is_asm(&[0xbb, 0x6d, 0xc9]));
        assert!(is_asm(&[0xef, 0x7b, 0x00]));
        assert!(!is_asm(&[0x3e, 0xbb, 0x6d]));
        assert!(!is_asm(&[]));

        assert_eq!(asm_min_os(&[0xef, 0x7b]), OsVersion::initial(ModelId::Ti84PCe));
        assert_eq!(asm_min_os(&[0x41]), OsVersion::INITIAL);
    }
}
