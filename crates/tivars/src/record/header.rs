//! Var file header.
//!
//! ```text
//! signature     8   "**TI83F*"
//! export        2   1A 0A
//! product_id    1
//! comment      42   UTF-8, NUL-padded
//! entry_length  2   total length of the entries that follow
//! ```

use crate::diagnostics::{Diagnostics, Warning};
use crate::error::RecordError;
use crate::model::{Model, MODELS, TI_84PCE};
use crate::record::convert::{Byte, Latin1, Utf8};
use crate::record::layout::{FieldId, FieldSpec, Layout, Record};
use crate::record::primitives::Reader;

const SIGNATURE: FieldId = 0;
const EXPORT: FieldId = 1;
const PRODUCT_ID: FieldId = 2;
const COMMENT: FieldId = 3;
const ENTRY_LENGTH: FieldId = 4;

/// Length of a header, entry length included.
pub const HEADER_LENGTH: usize = 55;

/// Width of the comment field.
pub const COMMENT_LENGTH: usize = 42;

/// Bytes that follow the signature in every exported file.
pub const EXPORT_BYTES: [u8; 2] = [0x1A, 0x0A];

/// Prefix shared by every var file signature.
const SIGNATURE_PREFIX: &str = "**TI";

static HEADER_FIELDS: [FieldSpec; 5] = [
    FieldSpec::fixed("signature", 8),
    FieldSpec::fixed("export", 2),
    FieldSpec::fixed("product id", 1),
    FieldSpec::fixed("comment", COMMENT_LENGTH),
    FieldSpec::fixed("entry length", 2),
];

static HEADER_LAYOUT: Layout = Layout {
    name: "header",
    fields: &HEADER_FIELDS,
};

/// The header of a var file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    record: Record,
}

impl Default for Header {
    fn default() -> Self {
        Self::new(&TI_84PCE)
    }
}

impl Header {
    /// Creates a header targeting a model, with the default comment.
    pub fn new(model: &Model) -> Self {
        let mut record = Record::new(&HEADER_LAYOUT);
        // Fixed fields of known width cannot fail to set.
        let _ = record.set_raw(SIGNATURE, model.magic.as_bytes().to_vec());
        let _ = record.set_raw(EXPORT, EXPORT_BYTES.to_vec());
        let _ = record.set_raw(PRODUCT_ID, vec![model.product_id]);

        let mut header = Self { record };
        header.set_comment(&format!("Created with tivars v{}", crate::VERSION));
        header
    }

    /// Reads a header.
    ///
    /// A signature that does not start with `**TI` is an error; anything else
    /// unusual is reported as an advisory warning.
    pub fn load(reader: &mut Reader<'_>, diagnostics: &mut Diagnostics) -> Result<Self, RecordError> {
        let record = Record::load(&HEADER_LAYOUT, reader, diagnostics)?;
        let header = Self { record };

        let magic = header.magic();
        if !magic.starts_with(SIGNATURE_PREFIX) {
            return Err(RecordError::InvalidMagic {
                expected: SIGNATURE_PREFIX,
                found: magic,
            });
        }
        if Model::with_magic(&magic).next().is_none() {
            diagnostics.report(Warning::UnrecognizedMagic { magic })?;
        }

        let product_id = header.product_id();
        if !MODELS.iter().any(|model| model.product_id == product_id) {
            diagnostics.report(Warning::UnrecognizedProductId { product_id })?;
        }

        if header.comment().is_err() {
            diagnostics.report(Warning::InvalidComment)?;
        }

        Ok(header)
    }

    /// The file signature, such as `**TI83F*`.
    pub fn magic(&self) -> String {
        self.record
            .get::<Latin1>(SIGNATURE)
            .unwrap_or_default()
    }

    pub fn product_id(&self) -> u8 {
        self.record.uint(PRODUCT_ID) as u8
    }

    pub fn set_product_id(&mut self, product_id: u8) -> Result<(), RecordError> {
        self.record.set::<Byte>(PRODUCT_ID, &product_id)
    }

    /// The bytes after the signature; `1A 0A` in files from every known tool.
    pub fn export(&self) -> &[u8] {
        self.record.raw(EXPORT)
    }

    /// The comment, without padding.
    pub fn comment(&self) -> Result<String, RecordError> {
        self.record.get::<Utf8>(COMMENT)
    }

    /// Replaces the comment, cut at a character boundary to fit 42 bytes.
    pub fn set_comment(&mut self, comment: &str) {
        let mut end = comment.len().min(COMMENT_LENGTH);
        while !comment.is_char_boundary(end) {
            end -= 1;
        }
        let _ = self.record.set_raw(COMMENT, comment.as_bytes()[..end].to_vec());
    }

    /// Entry length as read.
    /// [`VarFile::to_bytes`](crate::record::VarFile::to_bytes) writes a fresh one.
    pub fn entry_length(&self) -> u16 {
        self.record.uint(ENTRY_LENGTH) as u16
    }

    /// Returns true if files with this header can be sent to `model`.
    pub fn supported_by(&self, model: &Model) -> bool {
        self.magic() == model.magic
    }

    /// Returns true if this header was made for `model`: it is supported and
    /// the product id is either zero or the model's.
    pub fn targets(&self, model: &Model) -> bool {
        self.supported_by(model) && (self.product_id() == 0 || self.product_id() == model.product_id)
    }

    /// Every model this header targets.
    pub fn targeted_models(&self) -> impl Iterator<Item = &'static Model> + '_ {
        MODELS.iter().copied().filter(move |model| self.targets(model))
    }

    /// The header bytes, entry length included.
    pub fn bytes(&self) -> &[u8] {
        self.record.bytes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::ParseOptions;
    use crate::model::{TI_82, TI_83P, TI_84P};

    fn load(bytes: &[u8]) -> (Result<Header, RecordError>, Diagnostics) {
        let mut reader = Reader::new(bytes);
        let mut diagnostics = Diagnostics::new(&ParseOptions::new());
        (Header::load(&mut reader, &mut diagnostics), diagnostics)
    }

    #[test]
    fn test_new_header() {
        let header = Header::new(&TI_84P);
        assert_eq!(header.bytes().len(), HEADER_LENGTH);
        assert_eq!(header.magic(), "**TI83F*");
        assert_eq!(header.export(), &EXPORT_BYTES);
        assert_eq!(header.product_id(), 0x0A);
        assert!(header.comment().unwrap().starts_with("Created with tivars"));
        assert_eq!(header.entry_length(), 0);
    }

    #[test]
    fn test_comment_is_cut_at_char_boundary() {
        let mut header = Header::default();
        let comment = "é".repeat(30);
        header.set_comment(&comment);
        assert_eq!(header.comment().unwrap(), "é".repeat(21));
    }

    #[test]
    fn test_supported_and_targets() {
        let header = Header::new(&TI_84P);
        assert!(header.supported_by(&TI_83P));
        assert!(!header.targets(&TI_83P));
        assert!(header.targets(&TI_84P));
        assert!(!header.supported_by(&TI_82));

        let mut any = Header::new(&TI_84P);
        any.set_product_id(0).unwrap();
        assert!(any.targets(&TI_83P));
        assert!(any.targeted_models().all(|model| model.magic == "**TI83F*"));
    }

    #[test]
    fn test_load_rejects_foreign_signature() {
        let mut bytes = Header::default().bytes().to_vec();
        bytes[..8].copy_from_slice(b"PK\x03\x04abcd");
        assert!(matches!(load(&bytes).0, Err(RecordError::InvalidMagic { .. })));
    }

    #[test]
    fn test_load_warns_on_unknown_values() {
        let mut bytes = Header::default().bytes().to_vec();
        bytes[..8].copy_from_slice(b"**TI99**");
        bytes[10] = 0x77;
        bytes[11] = 0xff;
        let (header, diagnostics) = load(&bytes);
        assert!(header.is_ok());
        assert!(!diagnostics.is_corrupt());
        assert_eq!(
            diagnostics.warnings(),
            &[
                Warning::UnrecognizedMagic {
                    magic: "**TI99**".to_string()
                },
                Warning::UnrecognizedProductId { product_id: 0x77 },
                Warning::InvalidComment,
            ]
        );
    }

    #[test]
    fn test_load_short_header() {
        let header = Header::default();
        assert!(matches!(
            load(&header.bytes()[..40]).0,
            Err(RecordError::UnexpectedEof { context: "comment" })
        ));
    }
}
