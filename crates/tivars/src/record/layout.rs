//! Declarative record layouts.
//!
//! A [`Layout`] is a static, ordered table of [`FieldSpec`]s. A [`Record`]
//! pairs a layout with one contiguous backing buffer; every field's span is
//! computed from the current widths of the fields before it, so an optional
//! field that is absent shifts everything after it. Generic routines read,
//! write, load and checksum any layout.

use std::fmt;
use std::ops::Range;

use log::warn;

use crate::diagnostics::{Diagnostics, Warning};
use crate::error::RecordError;
use crate::record::convert::Converter;
use crate::record::primitives::{checksum16, uint_from_le, uint_to_le, Reader};

/// Index of a field within its layout.
pub type FieldId = usize;

/// How many bytes a field occupies.
#[derive(Debug, Clone, Copy)]
pub enum Width {
    /// Always exactly this many bytes.
    Fixed(usize),
    /// As many bytes as the little-endian length fields say. The first
    /// length field is authoritative on load; all of them are rewritten on set.
    Sized(&'static [FieldId]),
}

/// Whether a field is present in a record.
#[derive(Clone, Copy)]
pub enum Presence {
    Always,
    /// Present when the predicate holds. The predicate may only inspect
    /// fields declared earlier in the layout.
    When(fn(&Record) -> bool),
}

impl fmt::Debug for Presence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Presence::Always => f.write_str("Always"),
            Presence::When(_) => f.write_str("When(..)"),
        }
    }
}

/// One entry of a layout table.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub name: &'static str,
    pub width: Width,
    pub presence: Presence,
    /// Whether the field's bytes count toward the record checksum.
    pub checksummed: bool,
}

impl FieldSpec {
    /// A fixed-width field that is always present.
    pub const fn fixed(name: &'static str, width: usize) -> Self {
        Self {
            name,
            width: Width::Fixed(width),
            presence: Presence::Always,
            checksummed: true,
        }
    }

    /// A variable-width field sized by the given length fields.
    pub const fn sized(name: &'static str, by: &'static [FieldId]) -> Self {
        Self {
            name,
            width: Width::Sized(by),
            presence: Presence::Always,
            checksummed: true,
        }
    }

    /// Makes the field conditional.
    pub const fn when(self, predicate: fn(&Record) -> bool) -> Self {
        Self {
            presence: Presence::When(predicate),
            ..self
        }
    }

    /// Excludes the field from the checksum.
    pub const fn unchecked(self) -> Self {
        Self {
            checksummed: false,
            ..self
        }
    }
}

/// A named, ordered field table.
#[derive(Debug)]
pub struct Layout {
    pub name: &'static str,
    pub fields: &'static [FieldSpec],
}

impl Layout {
    /// Looks up a field by name.
    pub fn field_id(&self, name: &str) -> Option<FieldId> {
        self.fields.iter().position(|f| f.name == name)
    }
}

/// A layout together with the bytes of its visible fields.
#[derive(Clone)]
pub struct Record {
    layout: &'static Layout,
    buf: Vec<u8>,
}

impl Record {
    /// Creates a record with every present fixed field zeroed and every sized
    /// field empty.
    pub fn new(layout: &'static Layout) -> Self {
        let mut record = Self {
            layout,
            buf: Vec::new(),
        };
        record.rebuild(vec![None; layout.fields.len()]);
        record
    }

    /// Wraps bytes already laid out for `layout`, such as a built-in template.
    pub(crate) fn from_bytes(layout: &'static Layout, buf: Vec<u8>) -> Self {
        Self { layout, buf }
    }

    /// Consumes the layout's fields in order from a reader.
    ///
    /// A sized field that runs past the end of the input is kept as far as it
    /// goes and reported as truncated.
    pub fn load(
        layout: &'static Layout,
        reader: &mut Reader<'_>,
        diagnostics: &mut Diagnostics,
    ) -> Result<Self, RecordError> {
        Self::load_with_prefix(layout, &[], reader, diagnostics)
    }

    /// Like [`load`](Self::load), but the leading fields come from `prefix`
    /// instead of the reader. `prefix` must end on a field boundary.
    pub fn load_with_prefix(
        layout: &'static Layout,
        prefix: &[u8],
        reader: &mut Reader<'_>,
        diagnostics: &mut Diagnostics,
    ) -> Result<Self, RecordError> {
        let mut record = Self {
            layout,
            buf: prefix.to_vec(),
        };

        let mut offset = 0;
        for (id, field) in layout.fields.iter().enumerate() {
            if !record.is_present(id) {
                continue;
            }
            if offset < prefix.len() {
                offset += record.width(id);
                continue;
            }
            match field.width {
                Width::Fixed(width) => {
                    let bytes = reader.read_bytes(width, field.name)?;
                    record.buf.extend_from_slice(bytes);
                    offset += width;
                }
                Width::Sized(by) => {
                    let expected = record.length_of(by) as usize;
                    let bytes = reader.read_up_to(expected);
                    record.buf.extend_from_slice(bytes);
                    offset += bytes.len();
                    if bytes.len() < expected {
                        diagnostics.report(Warning::DataTruncated {
                            context: field.name,
                            expected,
                            found: bytes.len(),
                        })?;
                    }
                }
            }
        }

        Ok(record)
    }

    /// Returns the layout of this record.
    pub fn layout(&self) -> &'static Layout {
        self.layout
    }

    /// Returns the concatenation of all visible fields in declared order.
    pub fn bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Returns the total length of the visible fields.
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Returns true if no field holds any bytes.
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Returns true if the field is present under the current values.
    pub fn is_present(&self, id: FieldId) -> bool {
        match self.layout.fields[id].presence {
            Presence::Always => true,
            Presence::When(predicate) => predicate(self),
        }
    }

    /// Computes the byte span of a field, or `None` if it is absent.
    pub fn span(&self, id: FieldId) -> Option<Range<usize>> {
        let mut offset = 0;
        for index in 0..=id {
            if !self.is_present(index) {
                if index == id {
                    return None;
                }
                continue;
            }
            let width = self.width(index);
            if index == id {
                return Some(offset..offset + width);
            }
            offset += width;
        }
        None
    }

    /// Returns the current bytes of a field (empty if absent). A sized field
    /// cut short by the end of its input returns what was read.
    pub fn raw(&self, id: FieldId) -> &[u8] {
        match self.span(id) {
            Some(span) => {
                let end = span.end.min(self.buf.len());
                let start = span.start.min(end);
                &self.buf[start..end]
            }
            None => &[],
        }
    }

    /// Reads a field as an unsigned little-endian integer.
    pub fn uint(&self, id: FieldId) -> u64 {
        uint_from_le(self.raw(id))
    }

    /// Reads a field through a converter.
    pub fn get<C: Converter>(&self, id: FieldId) -> Result<C::Value, RecordError> {
        if !self.is_present(id) {
            return Err(RecordError::FieldAbsent {
                field: self.layout.fields[id].name,
            });
        }
        Ok(C::get(self.raw(id))?)
    }

    /// Writes a field through a converter.
    pub fn set<C: Converter>(&mut self, id: FieldId, value: &C::Value) -> Result<(), RecordError> {
        let bytes = C::set(value)?;
        self.set_raw(id, bytes)
    }

    /// Replaces a field's bytes.
    ///
    /// Fixed fields are NUL-padded, or truncated with a warning when too long.
    /// Sized fields are spliced in and their length fields rewritten. Fields
    /// whose presence depends on the changed value appear (zeroed) or vanish.
    pub fn set_raw(&mut self, id: FieldId, mut bytes: Vec<u8>) -> Result<(), RecordError> {
        let field = self.layout.fields[id];
        if !self.is_present(id) {
            return Err(RecordError::FieldAbsent { field: field.name });
        }

        let mut slots = self.slots();
        match field.width {
            Width::Fixed(width) => {
                if bytes.len() > width {
                    warn!(
                        "{} field {} truncated from {} to {} bytes",
                        self.layout.name,
                        field.name,
                        bytes.len(),
                        width
                    );
                    bytes.truncate(width);
                }
                bytes.resize(width, 0);
            }
            Width::Sized(by) => {
                for &length_id in by {
                    let width = self.fixed_width(length_id);
                    slots[length_id] = Some(uint_to_le(bytes.len() as u64, width)?);
                }
            }
        }

        slots[id] = Some(bytes);
        self.rebuild(slots);
        Ok(())
    }

    /// Low 16 bits of the sum of every present checksummed field.
    pub fn checksum(&self) -> u16 {
        (0..self.layout.fields.len())
            .filter(|&id| self.layout.fields[id].checksummed)
            .fold(0u16, |acc, id| acc.wrapping_add(checksum16(self.raw(id))))
    }

    fn width(&self, id: FieldId) -> usize {
        match self.layout.fields[id].width {
            Width::Fixed(width) => width,
            Width::Sized(by) => self.length_of(by) as usize,
        }
    }

    fn length_of(&self, by: &[FieldId]) -> u64 {
        by.first().map_or(0, |&length_id| self.uint(length_id))
    }

    fn fixed_width(&self, id: FieldId) -> usize {
        match self.layout.fields[id].width {
            Width::Fixed(width) => width,
            Width::Sized(_) => self.raw(id).len(),
        }
    }

    fn slots(&self) -> Vec<Option<Vec<u8>>> {
        (0..self.layout.fields.len())
            .map(|id| self.is_present(id).then(|| self.raw(id).to_vec()))
            .collect()
    }

    fn rebuild(&mut self, mut slots: Vec<Option<Vec<u8>>>) {
        self.buf.clear();
        for id in 0..self.layout.fields.len() {
            if !self.is_present(id) {
                continue;
            }
            match slots[id].take() {
                Some(bytes) => self.buf.extend_from_slice(&bytes),
                None => {
                    if let Width::Fixed(width) = self.layout.fields[id].width {
                        self.buf.resize(self.buf.len() + width, 0);
                    }
                }
            }
        }
    }
}

impl PartialEq for Record {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.layout, other.layout) && self.buf == other.buf
    }
}

impl Eq for Record {}

impl fmt::Debug for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for (id, field) in self.layout.fields.iter().enumerate() {
            if self.is_present(id) {
                map.entry(&field.name, &format_args!("{:02x?}", self.raw(id)));
            }
        }
        map.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::ParseOptions;
    use crate::record::convert::{Bytes, Byte, U16};

    const KIND: FieldId = 0;
    const LENGTH: FieldId = 1;
    const EXTRA: FieldId = 2;
    const LENGTH_AGAIN: FieldId = 3;
    const BODY: FieldId = 4;
    const LABEL: FieldId = 5;

    fn has_extra(record: &Record) -> bool {
        record.uint(KIND) == 1
    }

    static TEST_FIELDS: [FieldSpec; 6] = [
        FieldSpec::fixed("kind", 1),
        FieldSpec::fixed("length", 2),
        FieldSpec::fixed("extra", 2).when(has_extra),
        FieldSpec::fixed("length_again", 2),
        FieldSpec::sized("body", &[LENGTH, LENGTH_AGAIN]),
        FieldSpec::fixed("label", 3).unchecked(),
    ];

    static TEST_LAYOUT: Layout = Layout {
        name: "test",
        fields: &TEST_FIELDS,
    };

    #[test]
    fn test_new_record_is_zeroed() {
        let record = Record::new(&TEST_LAYOUT);
        assert_eq!(record.bytes(), &[0u8; 1 + 2 + 2 + 3]);
        assert!(!record.is_present(EXTRA));
        assert_eq!(record.raw(BODY), &[] as &[u8]);
    }

    #[test]
    fn test_sized_field_updates_lengths() {
        let mut record = Record::new(&TEST_LAYOUT);
        record.set::<Bytes>(BODY, &vec![9, 8, 7]).unwrap();
        assert_eq!(record.get::<U16>(LENGTH).unwrap(), 3);
        assert_eq!(record.get::<U16>(LENGTH_AGAIN).unwrap(), 3);
        assert_eq!(record.raw(BODY), &[9, 8, 7]);
        assert_eq!(record.span(LABEL), Some(8..11));
    }

    #[test]
    fn test_conditional_field_shifts_offsets() {
        let mut record = Record::new(&TEST_LAYOUT);
        record.set::<Bytes>(BODY, &vec![1, 2]).unwrap();
        record.set::<Bytes>(LABEL, &b"abc".to_vec()).unwrap();
        assert_eq!(record.span(BODY), Some(5..7));

        record.set::<Byte>(KIND, &1).unwrap();
        assert!(record.is_present(EXTRA));
        assert_eq!(record.raw(EXTRA), &[0, 0]);
        assert_eq!(record.span(BODY), Some(7..9));
        assert_eq!(record.raw(BODY), &[1, 2]);
        assert_eq!(record.raw(LABEL), b"abc");

        record.set::<Byte>(KIND, &0).unwrap();
        assert_eq!(record.span(EXTRA), None);
        assert_eq!(record.raw(LABEL), b"abc");
    }

    #[test]
    fn test_fixed_overflow_truncates() {
        let mut record = Record::new(&TEST_LAYOUT);
        record.set::<Bytes>(LABEL, &b"abcdef".to_vec()).unwrap();
        assert_eq!(record.raw(LABEL), b"abc");

        record.set::<Bytes>(LABEL, &b"a".to_vec()).unwrap();
        assert_eq!(record.raw(LABEL), b"a\0\0");
    }

    #[test]
    fn test_absent_field_is_an_error() {
        let mut record = Record::new(&TEST_LAYOUT);
        assert!(matches!(
            record.get::<U16>(EXTRA),
            Err(RecordError::FieldAbsent { field: "extra" })
        ));
        assert!(matches!(
            record.set::<U16>(EXTRA, &1),
            Err(RecordError::FieldAbsent { .. })
        ));
    }

    #[test]
    fn test_checksum_skips_unchecked_fields() {
        let mut record = Record::new(&TEST_LAYOUT);
        record.set::<Bytes>(BODY, &vec![0xff, 0xff]).unwrap();
        record.set::<Bytes>(LABEL, &b"zzz".to_vec()).unwrap();
        assert_eq!(record.checksum(), 2 + 2 + 0xff + 0xff);
    }

    #[test]
    fn test_load_roundtrip() {
        let data = [1u8, 2, 0, 0xaa, 0xbb, 2, 0, 5, 6, b'x', b'y', b'z'];
        let mut reader = Reader::new(&data);
        let mut diagnostics = Diagnostics::new(&ParseOptions::new());
        let record = Record::load(&TEST_LAYOUT, &mut reader, &mut diagnostics).unwrap();
        assert!(reader.is_empty());
        assert_eq!(record.bytes(), &data);
        assert_eq!(record.raw(EXTRA), &[0xaa, 0xbb]);
        assert_eq!(record.raw(BODY), &[5, 6]);
        assert!(diagnostics.is_clean());
    }

    #[test]
    fn test_load_with_prefix() {
        let data = [2u8, 0, 5, 6, b'x', b'y', b'z'];
        let mut reader = Reader::new(&data);
        let mut diagnostics = Diagnostics::new(&ParseOptions::new());
        let record =
            Record::load_with_prefix(&TEST_LAYOUT, &[1, 2, 0, 0xaa, 0xbb], &mut reader, &mut diagnostics)
                .unwrap();
        assert!(reader.is_empty());
        assert_eq!(record.raw(EXTRA), &[0xaa, 0xbb]);
        assert_eq!(record.raw(BODY), &[5, 6]);
        assert_eq!(record.raw(LABEL), b"xyz");
    }

    #[test]
    fn test_load_truncated_sized_field() {
        let data = [0u8, 4, 0, 4, 0, 1];
        let mut reader = Reader::new(&data);
        let mut diagnostics = Diagnostics::new(&ParseOptions::new());
        let result = Record::load(&TEST_LAYOUT, &mut reader, &mut diagnostics);
        // The body is cut short and the label is missing entirely.
        assert!(matches!(result, Err(RecordError::UnexpectedEof { context: "label" })));
        assert!(diagnostics.is_corrupt());

        let mut reader = Reader::new(&data);
        let mut diagnostics = Diagnostics::new(&ParseOptions::strict());
        let result = Record::load(&TEST_LAYOUT, &mut reader, &mut diagnostics);
        assert!(matches!(
            result,
            Err(RecordError::Strict(Warning::DataTruncated { expected: 4, found: 1, .. }))
        ));
    }
}
