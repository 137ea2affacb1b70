//! Var file entries.
//!
//! ```text
//! meta_length   2   0x0B, or 0x0D with the flash bytes
//! data_length   2
//! type_id       1
//! name          8
//! version       1   flash bytes only
//! archived      1   flash bytes only
//! data_length   2   repeated
//! data          data_length
//! ```

use log::warn;

use crate::diagnostics::{Diagnostics, ParseOptions, Warning};
use crate::error::{ConvertError, RecordError};
use crate::model::{Features, Model, ModelId, OsVersion, TI_82, TI_83};
use crate::record::convert::{Boolean, Byte, Bytes, Converter, Latin1, U16};
use crate::record::layout::{FieldId, FieldSpec, Layout, Record};
use crate::record::name::{validate_name, ListName, TokenizedName, VarName};
use crate::record::primitives::Reader;
use crate::tokenizer::{self, DecodeOptions, Decoded, EncodeOptions};
use crate::types::registry::NO_TYPE;
use crate::types::{tokenized, Domain, EntryKind, NameKind, NumericForm, TypeDescriptor, REGISTRY};

const META_LENGTH: FieldId = 0;
const DATA_LENGTH: FieldId = 1;
const TYPE_ID: FieldId = 2;
const NAME: FieldId = 3;
const VERSION: FieldId = 4;
const ARCHIVED: FieldId = 5;
const DATA_LENGTH2: FieldId = 6;
const DATA: FieldId = 7;

/// Meta length of an entry without flash bytes.
pub const BASE_META_LENGTH: u16 = 0x0B;

/// Meta length of an entry with version and archived bytes.
pub const FLASH_META_LENGTH: u16 = 0x0D;

/// An empty program named UNNAMED, with flash bytes and version 0.
const UNNAMED_PROGRAM: [u8; 19] = [
    0x0D, 0x00, 0x02, 0x00, 0x05, b'U', b'N', b'N', b'A', b'M', b'E', b'D', 0x00, 0x00, 0x00,
    0x02, 0x00, 0x00, 0x00,
];

/// Extension of files holding several entries, or an entry of unknown type.
pub const GROUP_EXTENSION: &str = "8xg";

fn has_flash_bytes(record: &Record) -> bool {
    record.uint(META_LENGTH) != BASE_META_LENGTH as u64
}

static ENTRY_FIELDS: [FieldSpec; 8] = [
    FieldSpec::fixed("meta length", 2),
    FieldSpec::fixed("data length", 2),
    FieldSpec::fixed("type id", 1),
    FieldSpec::fixed("name", 8),
    FieldSpec::fixed("version", 1).when(has_flash_bytes),
    FieldSpec::fixed("archived", 1).when(has_flash_bytes),
    FieldSpec::fixed("second data length", 2),
    FieldSpec::sized("data", &[DATA_LENGTH, DATA_LENGTH2]),
];

static ENTRY_LAYOUT: Layout = Layout {
    name: "entry",
    fields: &ENTRY_FIELDS,
};

/// One variable of a var file.
///
/// An entry is coerced to the [`EntryKind`] its type id names as soon as it is
/// built or parsed; the kind decides which accessors apply.
#[derive(Debug, Clone)]
pub struct Entry {
    record: Record,
    kind: EntryKind,
    diagnostics: Diagnostics,
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.record == other.record && self.kind == other.kind
    }
}

impl Eq for Entry {}

impl Entry {
    /// Creates an empty entry with flash bytes, the type's default version
    /// and the given name.
    pub fn new(type_id: u8, name: &str) -> Result<Self, RecordError> {
        let mut record = Record::new(&ENTRY_LAYOUT);
        record.set::<U16>(META_LENGTH, &FLASH_META_LENGTH)?;
        record.set::<Byte>(TYPE_ID, &type_id)?;

        let mut entry = Self {
            record,
            kind: EntryKind::Generic,
            diagnostics: Diagnostics::default(),
        };
        if let Some(descriptor) = entry.descriptor() {
            entry
                .record
                .set::<Byte>(VERSION, &descriptor.default_version())?;
            if descriptor.sized {
                entry.record.set::<Bytes>(DATA, &vec![0, 0])?;
            }
        }
        entry.set_name(name)?;
        Ok(entry.coerce())
    }

    /// Creates a tokenized entry from program text.
    pub fn from_text(
        type_id: u8,
        name: &str,
        text: &str,
        model: &Model,
        options: &EncodeOptions,
    ) -> Result<Self, RecordError> {
        let mut entry = Self::new(type_id, name)?;
        entry.set_text(text, model, options)?;
        Ok(entry)
    }

    /// Reads one entry.
    ///
    /// Lenient parsing repairs what it can and records a warning for each
    /// anomaly; strict parsing fails on the first structural one.
    pub fn load(reader: &mut Reader<'_>, options: &ParseOptions) -> Result<Self, RecordError> {
        let mut diagnostics = Diagnostics::new(options);

        let meta_length = match reader.peek(2) {
            Some(&[low, high]) => u16::from_le_bytes([low, high]),
            _ => return Err(RecordError::UnexpectedEof { context: "meta length" }),
        };

        let record = if meta_length == FLASH_META_LENGTH && flash_bytes_missing(reader.remaining()) {
            diagnostics.report(Warning::MissingFlashBytes)?;
            reader.skip(2, "meta length")?;
            Record::load_with_prefix(
                &ENTRY_LAYOUT,
                &BASE_META_LENGTH.to_le_bytes(),
                reader,
                &mut diagnostics,
            )?
        } else {
            if meta_length != BASE_META_LENGTH && meta_length != FLASH_META_LENGTH {
                diagnostics.report(Warning::UnexpectedMetaLength { found: meta_length })?;
            }
            Record::load(&ENTRY_LAYOUT, reader, &mut diagnostics)?
        };

        let mut entry = Self {
            record,
            kind: EntryKind::Generic,
            diagnostics: Diagnostics::default(),
        };

        if entry.has_flash_bytes() {
            let value = entry.record.uint(ARCHIVED) as u8;
            if value != 0x00 && value != 0x80 {
                diagnostics.report(Warning::UnexpectedArchiveFlag { value })?;
            }
        }

        let first = entry.record.uint(DATA_LENGTH) as u16;
        let second = entry.record.uint(DATA_LENGTH2) as u16;
        if first != second {
            diagnostics.report(Warning::DataLengthMismatch { first, second })?;
        }

        let type_id = entry.type_id();
        match entry.descriptor() {
            Some(descriptor) => {
                entry = entry.coerce();
                entry.check(descriptor, &mut diagnostics)?;
            }
            None if type_id == NO_TYPE => diagnostics.report(Warning::NoType)?,
            None => diagnostics.report(Warning::UnknownTypeId { type_id })?,
        }

        entry.diagnostics = diagnostics;
        Ok(entry)
    }

    /// Checks what the type says about the data, after coercion.
    fn check(&self, descriptor: &TypeDescriptor, diagnostics: &mut Diagnostics) -> Result<(), RecordError> {
        if descriptor.sized {
            let data = self.data();
            let found = data.len().saturating_sub(2);
            let expected = match data {
                [low, high, ..] => u16::from_le_bytes([*low, *high]) as usize,
                _ => 2,
            };
            if data.len() < 2 || expected != found {
                diagnostics.report(Warning::SizedLengthMismatch { expected, found })?;
            }
        }

        let version = self.version();
        if descriptor.is_versioned() && !descriptor.versions.contains(&version) {
            diagnostics.report(Warning::UnknownVersion {
                version,
                type_name: descriptor.name,
            })?;
        }

        if descriptor.flash_only && !self.has_flash_bytes() {
            diagnostics.report(Warning::FlashOnly {
                type_name: descriptor.name,
            })?;
        }

        if let Err(RecordError::Convert(ConvertError::InvalidName { name, reason })) = self.name() {
            diagnostics.report(Warning::InvalidName { name, reason })?;
        }

        if self.kind.is_tokenized() {
            match tokenized::version_for(self.payload()) {
                Ok(computed) if self.has_flash_bytes() && computed != version => {
                    diagnostics.report(Warning::VersionMismatch {
                        stored: version,
                        computed,
                    })?;
                }
                Ok(_) => {}
                Err(err) => diagnostics.report(Warning::InvalidTokens(err))?,
            }
        }

        Ok(())
    }

    /// Sets the kind from the type id and data.
    pub fn coerce(mut self) -> Self {
        self.recoerce();
        self
    }

    // =========================================================================
    // TYPE
    // =========================================================================

    pub fn type_id(&self) -> u8 {
        self.record.uint(TYPE_ID) as u8
    }

    /// Changes the type id and coerces again. The data is left as is.
    pub fn set_type_id(&mut self, type_id: u8) -> Result<(), RecordError> {
        self.record.set::<Byte>(TYPE_ID, &type_id)?;
        self.recoerce();
        Ok(())
    }

    pub fn kind(&self) -> EntryKind {
        self.kind
    }

    /// The registered descriptor of this entry's type id.
    pub fn descriptor(&self) -> Option<&'static TypeDescriptor> {
        REGISTRY.get(self.type_id())
    }

    /// The registered type name, or `"Entry"` for unknown types.
    pub fn type_name(&self) -> &'static str {
        self.descriptor().map_or("Entry", |descriptor| descriptor.name)
    }

    /// Makes a program protected against editing.
    pub fn protect(&mut self) -> Result<(), RecordError> {
        self.set_protected(true)
    }

    /// Makes a protected program editable.
    pub fn unprotect(&mut self) -> Result<(), RecordError> {
        self.set_protected(false)
    }

    fn set_protected(&mut self, protected: bool) -> Result<(), RecordError> {
        match self.kind {
            EntryKind::Program { .. } => self.set_type_id(if protected { 0x06 } else { 0x05 }),
            _ => Err(self.unsupported("protection")),
        }
    }

    fn recoerce(&mut self) {
        self.kind = match self.descriptor() {
            Some(descriptor) => descriptor.kind_for(self.payload()),
            None => EntryKind::Generic,
        };
    }

    fn unsupported(&self, operation: &'static str) -> RecordError {
        RecordError::Unsupported {
            operation,
            type_name: self.type_name(),
        }
    }

    // =========================================================================
    // METADATA
    // =========================================================================

    pub fn meta_length(&self) -> u16 {
        self.record.uint(META_LENGTH) as u16
    }

    /// Returns true if the version and archived bytes are present.
    pub fn has_flash_bytes(&self) -> bool {
        has_flash_bytes(&self.record)
    }

    /// Changes the meta length, adding zeroed flash bytes or dropping them.
    pub fn set_meta_length(&mut self, meta_length: u16) -> Result<(), RecordError> {
        if meta_length == BASE_META_LENGTH {
            if self.has_flash_bytes() && (self.version() != 0 || self.archived()) {
                warn!(
                    "flash bytes {:02x}{:02x} will be lost",
                    self.version(),
                    self.record.uint(ARCHIVED)
                );
            }
            if self.descriptor().is_some_and(|descriptor| descriptor.flash_only) {
                warn!("{} entries are not compatible with flashless chips", self.type_name());
            }
        }
        self.record.set::<U16>(META_LENGTH, &meta_length)
    }

    /// The entry name.
    pub fn name(&self) -> Result<String, RecordError> {
        let raw = self.record.raw(NAME);
        let name_kind = self.descriptor().map_or(NameKind::Plain, |d| d.name_kind);
        match name_kind {
            NameKind::Plain => {
                let name = VarName::get(raw)?;
                validate_name(&name)?;
                Ok(name)
            }
            NameKind::Tokenized => TokenizedName::get(raw).map_err(|_| {
                ConvertError::InvalidName {
                    name: Latin1::get(raw).unwrap_or_default(),
                    reason: "name is not a valid token sequence",
                }
                .into()
            }),
            NameKind::List => Ok(ListName::get(raw)?),
            NameKind::Raw => Ok(Latin1::get(raw)?),
        }
    }

    /// Renames the entry, encoding the name the way its type stores names.
    pub fn set_name(&mut self, name: &str) -> Result<(), RecordError> {
        let name = name.to_string();
        let name_kind = self.descriptor().map_or(NameKind::Plain, |d| d.name_kind);
        let bytes = match name_kind {
            NameKind::Plain => VarName::set(&name)?,
            NameKind::Tokenized => TokenizedName::set(&name)?,
            NameKind::List => ListName::set(&name)?,
            NameKind::Raw => Latin1::set(&name)?,
        };
        self.record.set_raw(NAME, bytes)
    }

    /// The name field as stored.
    pub fn raw_name(&self) -> &[u8] {
        self.record.raw(NAME)
    }

    /// The version byte; zero without flash bytes.
    pub fn version(&self) -> u8 {
        self.record.uint(VERSION) as u8
    }

    pub fn set_version(&mut self, version: u8) -> Result<(), RecordError> {
        self.record.set::<Byte>(VERSION, &version)
    }

    /// Whether the entry is archived; never without flash bytes.
    pub fn archived(&self) -> bool {
        self.record.uint(ARCHIVED) != 0
    }

    /// Archives or unarchives the entry. Entries without flash bytes cannot
    /// be archived.
    pub fn set_archived(&mut self, archived: bool) -> Result<(), RecordError> {
        self.record.set::<Boolean>(ARCHIVED, &archived)
    }

    // =========================================================================
    // DATA
    // =========================================================================

    /// The whole data section. Sized types start with their own length.
    pub fn data(&self) -> &[u8] {
        self.record.raw(DATA)
    }

    /// Replaces the data section and coerces again.
    pub fn set_data(&mut self, data: Vec<u8>) -> Result<(), RecordError> {
        self.record.set::<Bytes>(DATA, &data)?;
        self.recoerce();
        Ok(())
    }

    /// The data without a sized type's length prefix.
    pub fn payload(&self) -> &[u8] {
        let data = self.data();
        match self.descriptor() {
            Some(descriptor) if descriptor.sized => data.get(2..).unwrap_or(&[]),
            _ => data,
        }
    }

    /// Replaces the payload, prefixing its length for sized types.
    pub fn set_payload(&mut self, payload: Vec<u8>) -> Result<(), RecordError> {
        match self.descriptor() {
            Some(descriptor) if descriptor.sized => {
                let length = u16::try_from(payload.len()).map_err(|_| ConvertError::Overflow {
                    value: payload.len() as u64,
                    width: 2,
                })?;
                let mut data = Vec::with_capacity(payload.len() + 2);
                data.extend_from_slice(&length.to_le_bytes());
                data.extend(payload);
                self.set_data(data)
            }
            _ => self.set_data(payload),
        }
    }

    /// Decodes the token stream of a tokenized entry.
    pub fn decode(&self, model: &Model, options: &DecodeOptions) -> Result<Decoded, RecordError> {
        if !self.kind.is_tokenized() {
            return Err(self.unsupported("decoding tokens"));
        }
        Ok(tokenizer::decode(self.payload(), model, options)?)
    }

    /// Encodes text into a tokenized entry and updates its version byte.
    ///
    /// Byte literals that name no token are kept and recorded as warnings.
    pub fn set_text(&mut self, text: &str, model: &Model, options: &EncodeOptions) -> Result<(), RecordError> {
        let tokenizable = matches!(
            self.kind,
            EntryKind::Program { .. } | EntryKind::Equation | EntryKind::String
        );
        if !tokenizable {
            return Err(self.unsupported("encoding text"));
        }

        let encoded = tokenizer::encode(text, model, options)?;
        self.set_payload(encoded.bytes)?;
        if self.has_flash_bytes() && self.kind.is_tokenized() {
            let version = tokenized::version_for(self.payload())?;
            self.set_version(version)?;
        }
        self.diagnostics.extend(encoded.warnings);
        Ok(())
    }

    // =========================================================================
    // COMPATIBILITY
    // =========================================================================

    /// Oldest OS that can hold this entry.
    pub fn min_os(&self) -> Result<OsVersion, RecordError> {
        Ok(match self.kind {
            EntryKind::Program { asm: true, .. } => tokenized::asm_min_os(self.payload()),
            kind if kind.is_tokenized() => tokenized::min_os(self.payload())?,
            EntryKind::AppVar => OsVersion::initial(ModelId::Ti83P),
            EntryKind::Numeric(form) if form.is_exact() => OsVersion::initial(ModelId::Ti83PCe),
            EntryKind::Numeric(NumericForm {
                domain: Domain::Complex,
                ..
            }) => OsVersion::initial(ModelId::Ti83),
            _ => OsVersion::INITIAL,
        })
    }

    /// Returns true if `model` can hold this entry.
    pub fn supported_by(&self, model: &Model) -> bool {
        let flash = model.has(Features::FLASH);
        let needs_flash =
            self.archived() || self.descriptor().is_some_and(|descriptor| descriptor.flash_only);
        let min_os = self.min_os().unwrap_or(OsVersion::LATEST);
        min_os <= model.latest_os() && (flash || !needs_flash)
    }

    /// File extension for a single-entry file on `model`.
    pub fn extension(&self, model: &Model) -> String {
        let extension = self
            .descriptor()
            .map_or(GROUP_EXTENSION, |descriptor| descriptor.extension);
        model_extension(extension, model)
    }

    // =========================================================================
    // BYTES
    // =========================================================================

    /// The entry bytes, as they appear in a var file.
    pub fn bytes(&self) -> &[u8] {
        self.record.bytes()
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        self.record.bytes().to_vec()
    }

    pub fn len(&self) -> usize {
        self.record.len()
    }

    pub fn is_empty(&self) -> bool {
        self.record.is_empty()
    }

    /// Low 16 bits of the sum of every entry byte.
    pub fn checksum(&self) -> u16 {
        self.record.checksum()
    }

    /// Returns true if parsing hit a structural anomaly.
    pub fn is_corrupt(&self) -> bool {
        self.diagnostics.is_corrupt()
    }

    pub fn warnings(&self) -> &[Warning] {
        self.diagnostics.warnings()
    }

    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }
}

impl Default for Entry {
    /// An unnamed, empty program.
    fn default() -> Self {
        Self {
            record: Record::from_bytes(&ENTRY_LAYOUT, UNNAMED_PROGRAM.to_vec()),
            kind: EntryKind::Program {
                protected: false,
                asm: false,
            },
            diagnostics: Diagnostics::default(),
        }
    }
}

/// Adapts a TI-83+ family extension to the TI-82 or TI-83.
pub(crate) fn model_extension(extension: &str, model: &Model) -> String {
    if *model == TI_82 {
        extension.replace('x', "2")
    } else if *model == TI_83 {
        extension.replace('x', "3")
    } else {
        extension.to_string()
    }
}

/// Returns true if an entry that claims flash bytes holds its second data
/// length where the flash bytes should be.
fn flash_bytes_missing(rest: &[u8]) -> bool {
    match (rest.get(2..4), rest.get(13..15)) {
        (Some(data_length), Some(flash)) => {
            flash == data_length && rest.get(15..17) != Some(data_length)
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use crate::model::{TI_83P, TI_84P, TI_84PCE};
    use proptest::prelude::*;

    const SETDATE: [u8; 22] = [
        0x0d, 0x00, 0x05, 0x00, 0x05, b'S', b'E', b'T', b'D', b'A', b'T', b'E', 0x00, 0x04, 0x00,
        0x05, 0x00, 0x03, 0x00, 0xef, 0x00, 0x31,
    ];

    fn load(bytes: &[u8], options: &ParseOptions) -> Result<Entry, RecordError> {
        Entry::load(&mut Reader::new(bytes), options)
    }

    fn lenient(bytes: &[u8]) -> Entry {
        load(bytes, &ParseOptions::new()).unwrap()
    }

    #[test]
    fn test_load_program() {
        let entry = lenient(&SETDATE);
        assert_eq!(entry.name().unwrap(), "SETDATE");
        assert_eq!(entry.type_id(), 0x05);
        assert_eq!(entry.type_name(), "Program");
        assert_eq!(
            entry.kind(),
            EntryKind::Program {
                protected: false,
                asm: false
            }
        );
        assert!(!entry.archived());
        assert_eq!(entry.version(), 0x04);
        assert_eq!(entry.payload(), &[0xef, 0x00, 0x31]);
        assert_eq!(entry.to_bytes(), SETDATE);
        assert!(!entry.is_corrupt());
        assert_eq!(
            entry.warnings(),
            &[Warning::VersionMismatch {
                stored: 0x04,
                computed: 0x24
            }]
        );

        let decoded = entry.decode(&TI_84PCE, &DecodeOptions::new()).unwrap();
        assert_eq!(decoded.text, "setDate(1");
    }

    #[test]
    fn test_checksum_sums_every_byte() {
        let entry = lenient(&SETDATE);
        let sum: u32 = SETDATE.iter().map(|&b| b as u32).sum();
        assert_eq!(entry.checksum(), sum as u16);
        assert_eq!(entry.checksum(), 0x034d);
    }

    #[test]
    fn test_new_entry() {
        let entry = Entry::new(0x05, "prog").unwrap();
        assert_eq!(entry.meta_length(), FLASH_META_LENGTH);
        assert_eq!(entry.name().unwrap(), "PROG");
        assert_eq!(entry.data(), &[0, 0]);
        assert_eq!(entry.len(), 2 + 2 + 1 + 8 + 1 + 1 + 2 + 2);
        assert_eq!(entry, Entry::new(0x05, "PROG").unwrap());

        assert!(matches!(
            Entry::new(0x05, "1ABC"),
            Err(RecordError::Convert(ConvertError::InvalidName { .. }))
        ));
    }

    #[test]
    fn test_from_text_sets_version() {
        let entry =
            Entry::from_text(0x05, "SETDATE", "setDate(1", &TI_84PCE, &EncodeOptions::new()).unwrap();
        assert_eq!(entry.data(), &[0x03, 0x00, 0xef, 0x00, 0x31]);
        assert_eq!(entry.version(), 0x24);
        assert!(entry.warnings().is_empty());
    }

    #[test]
    fn test_tokenized_names() {
        let string = Entry::new(0x04, "Str1").unwrap();
        assert_eq!(string.raw_name(), &[0xaa, 0x00, 0, 0, 0, 0, 0, 0]);
        assert_eq!(string.name().unwrap(), "Str1");

        let equation = Entry::new(0x03, "Y₁").unwrap();
        assert_eq!(&equation.raw_name()[..2], &[0x5e, 0x10]);

        let list = Entry::new(0x01, "L₃").unwrap();
        assert_eq!(&list.raw_name()[..2], &[0x5d, 0x02]);
        assert_eq!(list.name().unwrap(), "L₃");
    }

    #[test]
    fn test_missing_flash_bytes() {
        let mut bytes = SETDATE.to_vec();
        // Drop the version and archived bytes but keep the flash meta length.
        bytes.drain(13..15);
        let entry = lenient(&bytes);
        assert_eq!(entry.warnings()[0], Warning::MissingFlashBytes);
        assert!(entry.is_corrupt());
        assert_eq!(entry.meta_length(), BASE_META_LENGTH);
        assert!(!entry.has_flash_bytes());
        assert_eq!(entry.payload(), &[0xef, 0x00, 0x31]);

        assert!(matches!(
            load(&bytes, &ParseOptions::strict()),
            Err(RecordError::Strict(Warning::MissingFlashBytes))
        ));
    }

    #[test]
    fn test_unexpected_meta_length_reads_flash_bytes() {
        let mut bytes = SETDATE.to_vec();
        bytes[0] = 0x0c;
        let entry = lenient(&bytes);
        assert_eq!(entry.warnings()[0], Warning::UnexpectedMetaLength { found: 0x0c });
        assert!(entry.is_corrupt());
        assert_eq!(entry.version(), 0x04);
        assert_eq!(entry.to_bytes(), bytes);
    }

    #[test]
    fn test_unexpected_archive_flag() {
        let mut bytes = SETDATE.to_vec();
        bytes[14] = 0x42;
        let entry = lenient(&bytes);
        assert!(entry
            .warnings()
            .contains(&Warning::UnexpectedArchiveFlag { value: 0x42 }));
        assert!(!entry.is_corrupt());
        assert!(entry.archived());
    }

    #[test]
    fn test_data_length_mismatch() {
        let mut bytes = SETDATE.to_vec();
        bytes[15] = 0x07;
        let entry = lenient(&bytes);
        assert!(entry.is_corrupt());
        assert!(entry
            .warnings()
            .contains(&Warning::DataLengthMismatch { first: 5, second: 7 }));
        assert_eq!(entry.payload(), &[0xef, 0x00, 0x31]);
        assert_eq!(entry.to_bytes(), bytes);

        let err = load(&bytes, &ParseOptions::strict()).unwrap_err();
        assert!(matches!(
            err,
            RecordError::Strict(Warning::DataLengthMismatch { first: 5, second: 7 })
        ));
        assert_eq!(err.code(), ErrorCode::Strict);
    }

    #[test]
    fn test_truncated_data() {
        let bytes = &SETDATE[..20];
        let entry = lenient(bytes);
        assert!(entry.is_corrupt());
        assert!(matches!(
            entry.warnings()[0],
            Warning::DataTruncated {
                context: "data",
                expected: 5,
                found: 3
            }
        ));
    }

    #[test]
    fn test_unknown_type_id() {
        let mut bytes = SETDATE.to_vec();
        bytes[4] = 0x42;
        let entry = lenient(&bytes);
        assert_eq!(entry.kind(), EntryKind::Generic);
        assert_eq!(entry.type_name(), "Entry");
        assert_eq!(entry.warnings(), &[Warning::UnknownTypeId { type_id: 0x42 }]);
        assert!(entry.is_corrupt());
        assert!(load(&bytes, &ParseOptions::strict()).is_err());

        bytes[4] = 0xff;
        let entry = lenient(&bytes);
        assert_eq!(entry.warnings(), &[Warning::NoType]);
        assert!(!entry.is_corrupt());
        assert!(load(&bytes, &ParseOptions::strict()).is_ok());
    }

    #[test]
    fn test_sized_length_mismatch() {
        let mut bytes = SETDATE.to_vec();
        bytes[17] = 0x02;
        let entry = lenient(&bytes);
        assert!(entry.is_corrupt());
        assert!(entry
            .warnings()
            .contains(&Warning::SizedLengthMismatch { expected: 2, found: 3 }));
    }

    #[test]
    fn test_flash_only_without_flash_bytes() {
        let mut appvar = Entry::new(0x15, "APPVAR").unwrap();
        appvar.set_payload(vec![1, 2, 3]).unwrap();
        appvar.set_meta_length(BASE_META_LENGTH).unwrap();
        let entry = lenient(appvar.bytes());
        assert_eq!(entry.warnings(), &[Warning::FlashOnly { type_name: "AppVar" }]);
        assert!(entry.supported_by(&TI_83P));
        assert!(!entry.supported_by(&TI_83));
    }

    #[test]
    fn test_invalid_name_warns() {
        let mut bytes = SETDATE.to_vec();
        bytes[5] = b'1';
        let entry = lenient(&bytes);
        assert!(matches!(
            &entry.warnings()[0],
            Warning::InvalidName { name, .. } if name == "1ETDATE"
        ));
    }

    #[test]
    fn test_flash_bytes_toggle() {
        let mut entry = Entry::new(0x05, "A").unwrap();
        entry.set_archived(true).unwrap();
        assert!(entry.archived());

        entry.set_meta_length(BASE_META_LENGTH).unwrap();
        assert!(!entry.archived());
        assert_eq!(entry.len(), 2 + 2 + 1 + 8 + 2 + 2);
        assert!(matches!(
            entry.set_archived(true),
            Err(RecordError::FieldAbsent { field: "archived" })
        ));

        entry.set_meta_length(FLASH_META_LENGTH).unwrap();
        assert_eq!(entry.version(), 0);
        assert!(!entry.archived());
    }

    #[test]
    fn test_asm_programs() {
        let mut entry = Entry::new(0x06, "ASM").unwrap();
        entry.set_payload(vec![0xbb, 0x6d, 0xc9]).unwrap();
        assert_eq!(
            entry.kind(),
            EntryKind::Program {
                protected: true,
                asm: true
            }
        );
        assert!(matches!(
            entry.decode(&TI_84PCE, &DecodeOptions::new()),
            Err(RecordError::Unsupported { .. })
        ));

        entry.unprotect().unwrap();
        assert_eq!(entry.type_id(), 0x05);
        assert_eq!(
            entry.kind(),
            EntryKind::Program {
                protected: false,
                asm: true
            }
        );
    }

    #[test]
    fn test_protect_requires_program() {
        let mut entry = Entry::new(0x15, "DATA").unwrap();
        assert!(matches!(
            entry.protect(),
            Err(RecordError::Unsupported {
                operation: "protection",
                type_name: "AppVar"
            })
        ));
        assert!(matches!(
            entry.set_text("1", &TI_84PCE, &EncodeOptions::new()),
            Err(RecordError::Unsupported { .. })
        ));
    }

    #[test]
    fn test_supported_by() {
        let entry =
            Entry::from_text(0x05, "CLOCK", "setDate(1", &TI_84PCE, &EncodeOptions::new()).unwrap();
        assert!(entry.supported_by(&TI_84P));
        assert!(!entry.supported_by(&TI_83P));

        let mut archived = Entry::new(0x05, "A").unwrap();
        archived.set_archived(true).unwrap();
        assert!(!archived.supported_by(&TI_83));
        assert!(archived.supported_by(&TI_83P));
    }

    #[test]
    fn test_extension() {
        let entry = Entry::new(0x05, "A").unwrap();
        assert_eq!(entry.extension(&TI_84PCE), "8xp");
        assert_eq!(entry.extension(&TI_83), "83p");
        assert_eq!(entry.extension(&TI_82), "82p");

        let mut unknown = Entry::new(0x05, "A").unwrap();
        unknown.set_type_id(0x42).unwrap();
        assert_eq!(unknown.extension(&TI_84PCE), "8xg");
    }

    #[test]
    fn test_default_is_unnamed_program() {
        let entry = Entry::default();
        assert_eq!(entry.name().unwrap(), "UNNAMED");
        assert_eq!(entry, Entry::new(0x05, "UNNAMED").unwrap());
        assert_eq!(entry.bytes(), Entry::new(0x05, "UNNAMED").unwrap().bytes());
        assert_eq!(entry.data(), &[0x00, 0x00]);
    }

    proptest! {
        #[test]
        fn test_entry_roundtrip(
            name in "[A-Z][A-Z0-9]{0,7}",
            payload in prop::collection::vec(any::<u8>(), 0..64),
            archived in any::<bool>(),
        ) {
            let mut entry = Entry::new(0x15, &name).unwrap();
            entry.set_payload(payload.clone()).unwrap();
            entry.set_archived(archived).unwrap();

            let bytes = entry.to_bytes();
            let parsed = lenient(&bytes);
            prop_assert_eq!(&parsed, &entry);
            prop_assert_eq!(parsed.payload(), &payload[..]);
            prop_assert!(parsed.warnings().is_empty());

            let sum = bytes.iter().fold(0u16, |acc, &b| acc.wrapping_add(b as u16));
            prop_assert_eq!(parsed.checksum(), sum);
        }
    }
}
