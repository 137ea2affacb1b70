//! Var files: a header, any number of entries and a checksum.

use log::{debug, warn};

use crate::diagnostics::{Diagnostics, ParseOptions, Warning};
use crate::error::{ConvertError, RecordError};
use crate::model::{Features, Model, TI_84PCE};
use crate::record::entry::{model_extension, Entry, GROUP_EXTENSION};
use crate::record::header::{Header, HEADER_LENGTH};
use crate::record::primitives::{Reader, Writer};

/// Width of the trailing checksum.
const CHECKSUM_LENGTH: usize = 2;

/// A parsed or assembled var file.
#[derive(Debug, Clone)]
pub struct VarFile {
    header: Header,
    entries: Vec<Entry>,
    diagnostics: Diagnostics,
}

impl PartialEq for VarFile {
    fn eq(&self, other: &Self) -> bool {
        // The stored entry length is rewritten on serialization.
        let fixed = HEADER_LENGTH - 2;
        self.header.bytes()[..fixed] == other.header.bytes()[..fixed] && self.entries == other.entries
    }
}

impl Eq for VarFile {}

impl Default for VarFile {
    fn default() -> Self {
        Self::new(&TI_84PCE)
    }
}

impl VarFile {
    /// Creates an empty file targeting a model.
    pub fn new(model: &Model) -> Self {
        Self {
            header: Header::new(model),
            entries: Vec::new(),
            diagnostics: Diagnostics::default(),
        }
    }

    /// Creates a file holding one entry.
    pub fn from_entry(model: &Model, entry: Entry) -> Self {
        let mut file = Self::new(model);
        file.add_entry(entry);
        file
    }

    /// Parses a complete var file.
    ///
    /// The entry length and checksum are verified against the entries as
    /// read; on mismatch the values found in the file are kept.
    pub fn parse(bytes: &[u8], options: &ParseOptions) -> Result<Self, RecordError> {
        let mut diagnostics = Diagnostics::new(options);
        let mut reader = Reader::new(bytes);

        let header = Header::load(&mut reader, &mut diagnostics)?;
        let declared = header.entry_length() as usize;

        let start = reader.position();
        let mut entries = Vec::new();
        while reader.position() - start < declared && reader.remaining_len() > CHECKSUM_LENGTH {
            let entry = Entry::load(&mut reader, options)?;
            diagnostics.absorb(entry.diagnostics());
            entries.push(entry);
        }

        if !can_archive(&header) {
            for _ in entries.iter().filter(|entry| entry.archived()) {
                diagnostics.report(Warning::ArchiveUnsupported)?;
            }
        }

        let found = reader.position() - start;
        if found != declared {
            diagnostics.report(Warning::EntryLengthMismatch {
                expected: declared,
                found,
            })?;
        }

        let computed = checksum(&entries);
        match reader.peek(CHECKSUM_LENGTH) {
            Some(_) => {
                let stored = reader.read_u16("checksum")?;
                if stored != computed {
                    diagnostics.report(Warning::ChecksumMismatch {
                        expected: computed,
                        found: stored,
                    })?;
                }
            }
            None => {
                let found = reader.remaining_len();
                reader.skip(found, "checksum")?;
                diagnostics.report(Warning::DataTruncated {
                    context: "checksum",
                    expected: CHECKSUM_LENGTH,
                    found,
                })?;
            }
        }

        if !reader.is_empty() {
            diagnostics.report(Warning::TrailingData {
                len: reader.remaining_len(),
            })?;
        }

        debug!(
            "parsed var file with {} entries ({} warnings)",
            entries.len(),
            diagnostics.warnings().len()
        );

        Ok(Self {
            header,
            entries,
            diagnostics,
        })
    }

    /// Serializes the file with a fresh entry length and checksum.
    pub fn to_bytes(&self) -> Result<Vec<u8>, RecordError> {
        let entry_length = self.entry_length();
        let entry_length = u16::try_from(entry_length).map_err(|_| ConvertError::Overflow {
            value: entry_length as u64,
            width: 2,
        })?;

        let mut writer = Writer::with_capacity(HEADER_LENGTH + entry_length as usize + CHECKSUM_LENGTH);
        writer.write_bytes(&self.header.bytes()[..HEADER_LENGTH - 2]);
        writer.write_u16(entry_length);
        for entry in &self.entries {
            writer.write_bytes(entry.bytes());
        }
        writer.write_u16(self.checksum());
        Ok(writer.into_bytes())
    }

    pub fn header(&self) -> &Header {
        &self.header
    }

    pub fn header_mut(&mut self) -> &mut Header {
        &mut self.header
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn entry_mut(&mut self, index: usize) -> Option<&mut Entry> {
        self.entries.get_mut(index)
    }

    pub fn into_entries(self) -> Vec<Entry> {
        self.entries
    }

    /// Appends an entry.
    pub fn add_entry(&mut self, entry: Entry) {
        if entry.archived() && !can_archive(&self.header) {
            warn!("{}", Warning::ArchiveUnsupported);
        }
        if let Some(first) = self.entries.first() {
            if first.meta_length() != entry.meta_length() {
                warn!(
                    "entry meta lengths conflict ({} vs. {}); some calculators may reject the file",
                    first.meta_length(),
                    entry.meta_length()
                );
            }
        }
        self.entries.push(entry);
    }

    /// Removes and returns the entry at `index`.
    pub fn remove_entry(&mut self, index: usize) -> Option<Entry> {
        (index < self.entries.len()).then(|| self.entries.remove(index))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total length of the entries.
    pub fn entry_length(&self) -> usize {
        self.entries.iter().map(Entry::len).sum()
    }

    /// Low 16 bits of the sum of every entry byte.
    pub fn checksum(&self) -> u16 {
        checksum(&self.entries)
    }

    /// File extension on `model`: the entry's own, or `8xg` for groups.
    pub fn extension(&self, model: &Model) -> String {
        match self.entries.as_slice() {
            [entry] => entry.extension(model),
            _ => model_extension(GROUP_EXTENSION, model),
        }
    }

    /// Returns true if `model` can hold the header and every entry.
    pub fn supported_by(&self, model: &Model) -> bool {
        self.header.supported_by(model) && self.entries.iter().all(|entry| entry.supported_by(model))
    }

    /// Returns true if the header was made for `model`.
    pub fn targets(&self, model: &Model) -> bool {
        self.header.targets(model)
    }

    /// Returns true if parsing hit a structural anomaly.
    pub fn is_corrupt(&self) -> bool {
        self.diagnostics.is_corrupt()
    }

    /// Every warning raised while parsing, entries included.
    pub fn warnings(&self) -> &[Warning] {
        self.diagnostics.warnings()
    }
}

/// Returns true if some model reading this header can hold archived entries.
fn can_archive(header: &Header) -> bool {
    Model::with_magic(&header.magic()).any(|model| model.has(Features::FLASH))
}

fn checksum(entries: &[Entry]) -> u16 {
    entries
        .iter()
        .fold(0u16, |acc, entry| acc.wrapping_add(entry.checksum()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{TI_83, TI_83P, TI_84P};
    use crate::tokenizer::{DecodeOptions, EncodeOptions};
    use proptest::prelude::*;

    fn program_8xp() -> Vec<u8> {
        let mut bytes = b"**TI83F*\x1a\x0a\x0a".to_vec();
        let mut comment = b"Created by TI Connect CE 5.1.0.68".to_vec();
        comment.resize(42, 0);
        bytes.extend(comment);
        bytes.extend([0x16, 0x00]);
        bytes.extend([
            0x0d, 0x00, 0x05, 0x00, 0x05, b'S', b'E', b'T', b'D', b'A', b'T', b'E', 0x00, 0x04,
            0x00, 0x05, 0x00, 0x03, 0x00, 0xef, 0x00, 0x31,
        ]);
        bytes.extend([0x4d, 0x03]);
        bytes
    }

    fn lenient(bytes: &[u8]) -> VarFile {
        VarFile::parse(bytes, &ParseOptions::new()).unwrap()
    }

    #[test]
    fn test_parse_program() {
        let bytes = program_8xp();
        assert_eq!(bytes.len(), 55 + 22 + 2);

        let file = lenient(&bytes);
        assert_eq!(file.header().magic(), "**TI83F*");
        assert_eq!(file.header().product_id(), 0x0a);
        assert_eq!(file.header().comment().unwrap(), "Created by TI Connect CE 5.1.0.68");
        assert_eq!(file.len(), 1);
        assert_eq!(file.checksum(), 0x034d);
        assert!(!file.is_corrupt());
        assert_eq!(
            file.warnings(),
            &[Warning::VersionMismatch {
                stored: 0x04,
                computed: 0x24
            }]
        );

        let entry = &file.entries()[0];
        assert_eq!(entry.name().unwrap(), "SETDATE");
        assert_eq!(entry.type_id(), 0x05);
        assert!(!entry.archived());
        let decoded = entry.decode(&TI_84PCE, &DecodeOptions::new()).unwrap();
        assert_eq!(decoded.text, "setDate(1");

        assert_eq!(file.to_bytes().unwrap(), bytes);
    }

    #[test]
    fn test_program_compatibility() {
        let file = lenient(&program_8xp());
        assert_eq!(file.extension(&TI_84PCE), "8xp");
        assert!(file.supported_by(&TI_84P));
        assert!(!file.supported_by(&TI_83P));
        assert!(!file.supported_by(&TI_83));
        assert!(file.targets(&TI_84P));
        assert!(!file.targets(&TI_84PCE));
    }

    #[test]
    fn test_checksum_mismatch() {
        let mut bytes = program_8xp();
        let last = bytes.len() - 1;
        bytes[last] = 0x04;

        let file = lenient(&bytes);
        assert!(!file.is_corrupt());
        assert!(file.warnings().contains(&Warning::ChecksumMismatch {
            expected: 0x034d,
            found: 0x044d
        }));

        assert!(matches!(
            VarFile::parse(&bytes, &ParseOptions::strict()),
            Err(RecordError::Strict(Warning::ChecksumMismatch { .. }))
        ));
    }

    #[test]
    fn test_data_length_mismatch() {
        let mut bytes = program_8xp();
        bytes[55 + 15] = 0x07;
        // Keep the checksum consistent so only the length disagrees.
        bytes[55 + 22] = 0x4f;

        let file = lenient(&bytes);
        assert!(file.is_corrupt());
        assert!(file
            .warnings()
            .contains(&Warning::DataLengthMismatch { first: 5, second: 7 }));
        assert_eq!(file.to_bytes().unwrap(), bytes);

        assert!(matches!(
            VarFile::parse(&bytes, &ParseOptions::strict()),
            Err(RecordError::Strict(Warning::DataLengthMismatch { first: 5, second: 7 }))
        ));
    }

    #[test]
    fn test_entry_length_mismatch() {
        let mut bytes = program_8xp();
        bytes[53] = 0x10;

        let file = lenient(&bytes);
        assert!(file.is_corrupt());
        assert!(file.warnings().contains(&Warning::EntryLengthMismatch {
            expected: 0x10,
            found: 22
        }));
        // The rewritten file carries the real length.
        assert_eq!(file.to_bytes().unwrap(), program_8xp());
    }

    #[test]
    fn test_trailing_data() {
        let mut bytes = program_8xp();
        bytes.extend([0xde, 0xad]);
        let file = lenient(&bytes);
        assert!(file.warnings().contains(&Warning::TrailingData { len: 2 }));
        assert!(VarFile::parse(&bytes, &ParseOptions::strict()).is_ok());
    }

    #[test]
    fn test_missing_checksum() {
        let mut bytes = program_8xp();
        bytes.truncate(bytes.len() - 1);
        let file = lenient(&bytes);
        assert!(file.is_corrupt());
        assert!(matches!(
            file.warnings().last(),
            Some(Warning::DataTruncated {
                context: "checksum",
                ..
            })
        ));
    }

    #[test]
    fn test_archived_entry_needs_flash() {
        let mut entry = Entry::new(0x05, "A").unwrap();
        entry.set_archived(true).unwrap();

        let file = VarFile::from_entry(&TI_83, entry.clone());
        let parsed = VarFile::parse(&file.to_bytes().unwrap(), &ParseOptions::strict()).unwrap();
        assert!(parsed.entries()[0].archived());
        assert_eq!(parsed.warnings(), &[Warning::ArchiveUnsupported]);
        assert!(!parsed.is_corrupt());

        let file = VarFile::from_entry(&TI_84P, entry);
        let parsed = VarFile::parse(&file.to_bytes().unwrap(), &ParseOptions::strict()).unwrap();
        assert!(parsed.warnings().is_empty());
    }

    #[test]
    fn test_group_extension() {
        let mut file = VarFile::new(&TI_83);
        assert_eq!(file.extension(&TI_83), "83g");
        file.add_entry(Entry::new(0x05, "A").unwrap());
        assert_eq!(file.extension(&TI_83), "83p");
        file.add_entry(Entry::new(0x04, "Str1").unwrap());
        assert_eq!(file.extension(&TI_84PCE), "8xg");

        assert!(file.remove_entry(1).is_some());
        assert!(file.remove_entry(1).is_none());
    }

    #[test]
    fn test_build_from_text() {
        let entry = Entry::from_text(
            0x05,
            "HELLO",
            "Disp \"HELLO WORLD!\"",
            &TI_84P,
            &EncodeOptions::new(),
        )
        .unwrap();
        let file = VarFile::from_entry(&TI_84P, entry);
        let bytes = file.to_bytes().unwrap();
        assert_eq!(&bytes[53..55], &(file.entry_length() as u16).to_le_bytes());

        let parsed = VarFile::parse(&bytes, &ParseOptions::strict()).unwrap();
        assert!(parsed.warnings().is_empty());
        assert_eq!(parsed, file);
        let decoded = parsed.entries()[0]
            .decode(&TI_84P, &DecodeOptions::new())
            .unwrap();
        assert_eq!(decoded.text, "Disp \"HELLO WORLD!\"");
    }

    proptest! {
        #[test]
        fn test_file_roundtrip(payloads in prop::collection::vec(prop::collection::vec(any::<u8>(), 0..32), 0..4)) {
            let mut file = VarFile::new(&TI_84PCE);
            for (index, payload) in payloads.iter().enumerate() {
                let mut entry = Entry::new(0x15, &format!("VAR{index}")).unwrap();
                entry.set_payload(payload.clone()).unwrap();
                file.add_entry(entry);
            }

            let bytes = file.to_bytes().unwrap();
            let parsed = VarFile::parse(&bytes, &ParseOptions::strict()).unwrap();
            prop_assert_eq!(&parsed, &file);
            prop_assert_eq!(parsed.to_bytes().unwrap(), bytes);
            prop_assert!(parsed.warnings().is_empty());
        }
    }
}
