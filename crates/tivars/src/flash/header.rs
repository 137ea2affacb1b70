//! Flash headers.
//!
//! ```text
//! magic         8   "**TIFL**"
//! revision      2   BCD major.minor
//! binary_flag   1   0x01 when the data is Intel hex
//! object_type   1
//! date          4   BCD dd mm yyyy
//! name_length   1
//! name          8
//! reserved     23
//! devices      25   (device type, type id) pairs, NUL-padded
//! product_id    1
//! data_size     4
//! data          data_size
//! checksum      2   optional
//! ```

use log::warn;

use crate::diagnostics::{Diagnostics, ParseOptions, Warning};
use crate::error::RecordError;
use crate::flash::intel::IntelBlock;
use crate::flash::{DeviceType, FlashKind};
use crate::model::{Features, Model, ModelId};
use crate::record::convert::{BcdDate, BcdRevision, Byte, Converter, Date, Latin1};
use crate::record::layout::{FieldId, FieldSpec, Layout, Record};
use crate::record::primitives::Reader;

const MAGIC: FieldId = 0;
const REVISION: FieldId = 1;
const BINARY_FLAG: FieldId = 2;
const OBJECT_TYPE: FieldId = 3;
const DATE: FieldId = 4;
const NAME_LENGTH: FieldId = 5;
const NAME: FieldId = 6;
const DEVICES: FieldId = 8;
const PRODUCT_ID: FieldId = 9;
const DATA_SIZE: FieldId = 10;
const DATA: FieldId = 11;

/// Signature at the start of every flash header.
pub const FLASH_MAGIC: &[u8; 8] = b"**TIFL**";

/// Length of a header up to its data.
pub const FLASH_HEADER_LENGTH: usize = 78;

const NAME_WIDTH: usize = 8;
const DEVICES_WIDTH: usize = 25;
const CHECKSUM_LENGTH: usize = 2;

/// Binary flag of headers whose data is Intel hex.
const INTEL_FLAG: u8 = 0x01;

/// Object type written by TI's own tools.
const DEFAULT_OBJECT_TYPE: u8 = 0x88;

// Only the data counts toward the checksum.
static FLASH_FIELDS: [FieldSpec; 12] = [
    FieldSpec::fixed("magic", 8).unchecked(),
    FieldSpec::fixed("revision", 2).unchecked(),
    FieldSpec::fixed("binary flag", 1).unchecked(),
    FieldSpec::fixed("object type", 1).unchecked(),
    FieldSpec::fixed("date", 4).unchecked(),
    FieldSpec::fixed("name length", 1).unchecked(),
    FieldSpec::fixed("name", NAME_WIDTH).unchecked(),
    FieldSpec::fixed("reserved", 23).unchecked(),
    FieldSpec::fixed("devices", DEVICES_WIDTH).unchecked(),
    FieldSpec::fixed("product id", 1).unchecked(),
    FieldSpec::fixed("data size", 4).unchecked(),
    FieldSpec::sized("flash data", &[DATA_SIZE]),
];

static FLASH_LAYOUT: Layout = Layout {
    name: "flash header",
    fields: &FLASH_FIELDS,
};

const OS_EXTENSIONS: &[(ModelId, &str)] = &[
    (ModelId::Ti83P, "8xu"),
    (ModelId::Ti82A, "82u"),
    (ModelId::Ti84PCse, "8cu"),
    (ModelId::Ti84PCe, "8eu"),
    (ModelId::Ti83PCe, "8pu"),
    (ModelId::Ti82Aep, "8yu"),
];

const APP_EXTENSIONS: &[(ModelId, &str)] = &[
    (ModelId::Ti83P, "8xk"),
    (ModelId::Ti84PCse, "8ck"),
    (ModelId::Ti84PCe, "8ek"),
];

const CERTIFICATE_EXTENSIONS: &[(ModelId, &str)] = &[
    (ModelId::Ti83P, "8xq"),
    (ModelId::Ti84PCse, "8cq"),
    (ModelId::Ti84PCe, "8eq"),
];

/// Extension of flash headers of unknown kind.
const DEFAULT_EXTENSION: &str = "8ek";

/// One header of a flash file, data and optional checksum included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlashHeader {
    record: Record,
    has_checksum: bool,
}

impl FlashHeader {
    /// Creates a header for the TI-83+ line holding only an end-of-file block.
    ///
    /// Names longer than eight bytes are cut; names outside Latin-1 are an
    /// error.
    pub fn new(kind: FlashKind, name: &str) -> Result<Self, RecordError> {
        let mut header = Self {
            record: Record::new(&FLASH_LAYOUT),
            has_checksum: true,
        };
        header.record.set_raw(MAGIC, FLASH_MAGIC.to_vec())?;
        header.record.set_raw(BINARY_FLAG, vec![INTEL_FLAG])?;
        header.record.set_raw(OBJECT_TYPE, vec![DEFAULT_OBJECT_TYPE])?;
        header.set_name(name)?;
        header.set_devices(&[(DeviceType::Ti83P as u8, kind as u8)])?;
        header
            .record
            .set_raw(DATA, IntelBlock::end_of_file().to_text().into_bytes())?;
        Ok(header)
    }

    /// Reads one header.
    ///
    /// The checksum is taken to be absent when the data runs to the end of
    /// the input or straight into another header.
    pub fn load(reader: &mut Reader<'_>, diagnostics: &mut Diagnostics) -> Result<Self, RecordError> {
        let magic = reader.peek(FLASH_MAGIC.len()).unwrap_or(reader.remaining());
        if magic != FLASH_MAGIC {
            return Err(RecordError::InvalidMagic {
                expected: "**TIFL**",
                found: String::from_utf8_lossy(magic).into_owned(),
            });
        }

        let record = Record::load(&FLASH_LAYOUT, reader, diagnostics)?;
        let mut header = Self {
            record,
            has_checksum: false,
        };

        let stored = header.name_length();
        let actual = header.name().len();
        if stored as usize != actual {
            diagnostics.report(Warning::NameLengthMismatch { stored, actual })?;
        }

        let device = header.record.raw(DEVICES)[0];
        if DeviceType::from_u8(device).is_none() {
            diagnostics.report(Warning::UnknownDeviceType { device })?;
        }

        let rest = reader.remaining();
        if rest.is_empty() || rest.starts_with(FLASH_MAGIC) {
            return Ok(header);
        }
        if rest.len() < CHECKSUM_LENGTH {
            reader.skip(rest.len(), "checksum")?;
            diagnostics.report(Warning::DataTruncated {
                context: "checksum",
                expected: CHECKSUM_LENGTH,
                found: rest.len(),
            })?;
            return Ok(header);
        }

        header.has_checksum = true;
        let stored = reader.read_u16("checksum")?;
        let computed = header.checksum();
        if stored != computed {
            diagnostics.report(Warning::ChecksumMismatch {
                expected: computed,
                found: stored,
            })?;
        }
        Ok(header)
    }

    /// Parses a single header that makes up a whole input.
    pub fn parse(bytes: &[u8], options: &ParseOptions) -> Result<Self, RecordError> {
        let mut reader = Reader::new(bytes);
        let mut diagnostics = Diagnostics::new(options);
        let header = Self::load(&mut reader, &mut diagnostics)?;
        if !reader.is_empty() {
            diagnostics.report(Warning::TrailingData {
                len: reader.remaining_len(),
            })?;
        }
        Ok(header)
    }

    pub fn magic(&self) -> &[u8] {
        self.record.raw(MAGIC)
    }

    /// The `(major, minor)` revision.
    pub fn revision(&self) -> Result<(u8, u8), RecordError> {
        self.record.get::<BcdRevision>(REVISION)
    }

    pub fn set_revision(&mut self, major: u8, minor: u8) -> Result<(), RecordError> {
        self.record.set::<BcdRevision>(REVISION, &(major, minor))
    }

    pub fn binary_flag(&self) -> u8 {
        self.record.uint(BINARY_FLAG) as u8
    }

    /// Returns true if the data is Intel hex text.
    pub fn is_intel(&self) -> bool {
        self.binary_flag() == INTEL_FLAG
    }

    pub fn object_type(&self) -> u8 {
        self.record.uint(OBJECT_TYPE) as u8
    }

    pub fn set_object_type(&mut self, object_type: u8) -> Result<(), RecordError> {
        self.record.set::<Byte>(OBJECT_TYPE, &object_type)
    }

    pub fn date(&self) -> Result<Date, RecordError> {
        self.record.get::<BcdDate>(DATE)
    }

    pub fn set_date(&mut self, date: Date) -> Result<(), RecordError> {
        self.record.set::<BcdDate>(DATE, &date)
    }

    /// The name length byte as stored.
    pub fn name_length(&self) -> u8 {
        self.record.uint(NAME_LENGTH) as u8
    }

    /// The name or base code, without padding.
    pub fn name(&self) -> String {
        self.record.get::<Latin1>(NAME).unwrap_or_default()
    }

    /// Replaces the name and its length byte.
    pub fn set_name(&mut self, name: &str) -> Result<(), RecordError> {
        let mut bytes = Latin1::set(&name.to_string())?;
        bytes.truncate(NAME_WIDTH);
        self.record.set::<Byte>(NAME_LENGTH, &(bytes.len() as u8))?;
        self.record.set_raw(NAME, bytes)
    }

    /// Every `(device type, type id)` pair.
    ///
    /// Licenses may name several devices; everything else names one.
    pub fn devices(&self) -> Vec<(u8, u8)> {
        self.record
            .raw(DEVICES)
            .chunks_exact(2)
            .take_while(|pair| pair[0] != 0)
            .map(|pair| (pair[0], pair[1]))
            .collect()
    }

    pub fn set_devices(&mut self, devices: &[(u8, u8)]) -> Result<(), RecordError> {
        let bytes = devices
            .iter()
            .flat_map(|&(device, type_id)| [device, type_id])
            .collect();
        self.record.set_raw(DEVICES, bytes)
    }

    /// The first device, if it is a known one.
    pub fn device_type(&self) -> Option<DeviceType> {
        DeviceType::from_u8(self.record.raw(DEVICES)[0])
    }

    /// The type id of the first device.
    pub fn type_id(&self) -> u8 {
        self.record.raw(DEVICES)[1]
    }

    pub fn kind(&self) -> Option<FlashKind> {
        FlashKind::from_u8(self.type_id())
    }

    pub fn product_id(&self) -> u8 {
        self.record.uint(PRODUCT_ID) as u8
    }

    pub fn set_product_id(&mut self, product_id: u8) -> Result<(), RecordError> {
        self.record.set::<Byte>(PRODUCT_ID, &product_id)
    }

    /// The data, as stored.
    pub fn data(&self) -> &[u8] {
        self.record.raw(DATA)
    }

    /// Replaces the data with raw binary.
    pub fn set_data(&mut self, data: Vec<u8>) -> Result<(), RecordError> {
        self.record.set::<Byte>(BINARY_FLAG, &0x00)?;
        self.record.set_raw(DATA, data)
    }

    /// Splits Intel hex data into blocks, or returns `None` for binary data.
    pub fn blocks(&self, diagnostics: &mut Diagnostics) -> Option<Result<Vec<IntelBlock>, RecordError>> {
        self.is_intel()
            .then(|| IntelBlock::parse_blocks(self.data(), diagnostics))
    }

    /// Replaces the data with Intel hex blocks.
    pub fn set_blocks(&mut self, blocks: &[IntelBlock]) -> Result<(), RecordError> {
        self.record.set::<Byte>(BINARY_FLAG, &INTEL_FLAG)?;
        self.record.set_raw(DATA, IntelBlock::join(blocks))
    }

    /// Low 16 bits of the sum of the data bytes.
    pub fn checksum(&self) -> u16 {
        self.record.checksum()
    }

    pub fn has_checksum(&self) -> bool {
        self.has_checksum
    }

    /// Chooses whether the checksum is written after the data.
    pub fn set_has_checksum(&mut self, has_checksum: bool) {
        self.has_checksum = has_checksum;
    }

    pub fn len(&self) -> usize {
        self.record.len() + if self.has_checksum { CHECKSUM_LENGTH } else { 0 }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = self.record.bytes().to_vec();
        if self.has_checksum {
            bytes.extend_from_slice(&self.checksum().to_le_bytes());
        }
        bytes
    }

    /// File extension on `model`.
    ///
    /// Uses the extension of the newest listed model not newer than `model`.
    pub fn extension(&self, model: &Model) -> &'static str {
        if !model.has(Features::FLASH) {
            warn!("the {} does not support flash files", model);
        }

        let table = match self.kind() {
            Some(FlashKind::OperatingSystem | FlashKind::License) => OS_EXTENSIONS,
            Some(FlashKind::App) => APP_EXTENSIONS,
            Some(FlashKind::Certificate) => CERTIFICATE_EXTENSIONS,
            None => return DEFAULT_EXTENSION,
        };
        table
            .iter()
            .rev()
            .find(|(since, _)| *since <= model.id)
            .or_else(|| table.first())
            .map_or(DEFAULT_EXTENSION, |&(_, extension)| extension)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConvertError;
    use crate::model::{TI_83, TI_83P, TI_84P, TI_84PCE};

    fn sample() -> FlashHeader {
        let mut header = FlashHeader::new(FlashKind::App, "SMARTPAD").unwrap();
        header.set_revision(1, 2).unwrap();
        header
            .set_date(Date {
                day: 12,
                month: 10,
                year: 1999,
            })
            .unwrap();
        header
    }

    #[test]
    fn test_new_header() {
        let header = sample();
        assert_eq!(header.magic(), FLASH_MAGIC);
        assert_eq!(header.revision().unwrap(), (1, 2));
        assert!(header.is_intel());
        assert_eq!(header.object_type(), DEFAULT_OBJECT_TYPE);
        assert_eq!(header.name(), "SMARTPAD");
        assert_eq!(header.name_length(), 8);
        assert_eq!(header.devices(), vec![(0x73, 0x24)]);
        assert_eq!(header.device_type(), Some(DeviceType::Ti83P));
        assert_eq!(header.kind(), Some(FlashKind::App));
        assert_eq!(header.data(), b":00000001FF");
        assert_eq!(header.len(), FLASH_HEADER_LENGTH + 11 + 2);
    }

    #[test]
    fn test_new_header_rejects_non_latin1_name() {
        assert!(matches!(
            FlashHeader::new(FlashKind::App, "Ωmega"),
            Err(RecordError::Convert(ConvertError::UnencodableChar { ch: 'Ω', .. }))
        ));

        let header = FlashHeader::new(FlashKind::App, "LONGERNAME").unwrap();
        assert_eq!(header.name(), "LONGERNA");
        assert_eq!(header.name_length(), 8);
    }

    #[test]
    fn test_parse_with_checksum() {
        let header = sample();
        let bytes = header.to_bytes();
        let parsed = FlashHeader::parse(&bytes, &ParseOptions::strict()).unwrap();
        assert!(parsed.has_checksum());
        assert_eq!(parsed, header);
        assert_eq!(parsed.to_bytes(), bytes);
    }

    #[test]
    fn test_parse_without_checksum() {
        let mut header = sample();
        header.set_has_checksum(false);
        let bytes = header.to_bytes();
        assert_eq!(bytes.len(), FLASH_HEADER_LENGTH + 11);

        let parsed = FlashHeader::parse(&bytes, &ParseOptions::strict()).unwrap();
        assert!(!parsed.has_checksum());
        assert_eq!(parsed.to_bytes(), bytes);
    }

    #[test]
    fn test_checksum_mismatch() {
        let mut bytes = sample().to_bytes();
        let last = bytes.len() - 1;
        bytes[last] ^= 0xff;

        assert!(matches!(
            FlashHeader::parse(&bytes, &ParseOptions::strict()),
            Err(RecordError::Strict(Warning::ChecksumMismatch { .. }))
        ));

        let mut reader = Reader::new(&bytes);
        let mut diagnostics = Diagnostics::new(&ParseOptions::new());
        let header = FlashHeader::load(&mut reader, &mut diagnostics).unwrap();
        assert!(header.has_checksum());
        assert!(!diagnostics.is_corrupt());
        assert_eq!(diagnostics.warnings().len(), 1);
    }

    #[test]
    fn test_binary_data() {
        let mut header = FlashHeader::new(FlashKind::OperatingSystem, "").unwrap();
        header.set_data(vec![1, 2, 3]).unwrap();
        assert!(!header.is_intel());
        assert_eq!(header.checksum(), 6);

        let mut diagnostics = Diagnostics::new(&ParseOptions::new());
        assert!(header.blocks(&mut diagnostics).is_none());

        header.set_blocks(&[IntelBlock::end_of_file()]).unwrap();
        let blocks = header.blocks(&mut diagnostics).unwrap().unwrap();
        assert_eq!(blocks, vec![IntelBlock::end_of_file()]);
    }

    #[test]
    fn test_license_devices() {
        let mut header = FlashHeader::new(FlashKind::License, "").unwrap();
        let devices = [(0x74, 0x3e), (0x73, 0x3e), (0x98, 0x3e), (0x88, 0x3e)];
        header.set_devices(&devices).unwrap();
        assert_eq!(header.devices(), devices.to_vec());
        assert_eq!(header.device_type(), Some(DeviceType::Ti73));
    }

    #[test]
    fn test_load_warnings() {
        let mut bytes = sample().to_bytes();
        bytes[16] = 3;
        bytes[FLASH_HEADER_LENGTH - 30] = 0x42;

        let mut reader = Reader::new(&bytes);
        let mut diagnostics = Diagnostics::new(&ParseOptions::new());
        FlashHeader::load(&mut reader, &mut diagnostics).unwrap();
        assert_eq!(
            diagnostics.warnings(),
            &[
                Warning::NameLengthMismatch {
                    stored: 3,
                    actual: 8
                },
                Warning::UnknownDeviceType { device: 0x42 },
            ]
        );
    }

    #[test]
    fn test_rejects_foreign_magic() {
        let mut bytes = sample().to_bytes();
        bytes[..8].copy_from_slice(b"**TI83F*");
        assert!(matches!(
            FlashHeader::parse(&bytes, &ParseOptions::new()),
            Err(RecordError::InvalidMagic { .. })
        ));
    }

    #[test]
    fn test_extensions() {
        let app = sample();
        assert_eq!(app.extension(&TI_83P), "8xk");
        assert_eq!(app.extension(&TI_84P), "8xk");
        assert_eq!(app.extension(&TI_84PCE), "8ek");
        // No flash; falls back to the oldest listed model.
        assert_eq!(app.extension(&TI_83), "8xk");

        let os = FlashHeader::new(FlashKind::OperatingSystem, "").unwrap();
        assert_eq!(os.extension(&TI_84PCE), "8eu");
    }
}
