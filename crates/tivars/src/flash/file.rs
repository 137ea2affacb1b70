//! Flash files: one or more flash headers back to back.

use log::debug;

use crate::diagnostics::{Diagnostics, ParseOptions, Warning};
use crate::error::RecordError;
use crate::flash::header::{FLASH_MAGIC, FlashHeader};
use crate::model::Model;
use crate::record::primitives::Reader;

/// Extension of a flash file with no headers.
const EMPTY_EXTENSION: &str = "8xk";

/// A parsed or assembled flash file.
#[derive(Debug, Clone, Default)]
pub struct FlashFile {
    headers: Vec<FlashHeader>,
    diagnostics: Diagnostics,
}

impl PartialEq for FlashFile {
    fn eq(&self, other: &Self) -> bool {
        self.headers == other.headers
    }
}

impl Eq for FlashFile {}

impl FlashFile {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses every header of a flash file.
    pub fn parse(bytes: &[u8], options: &ParseOptions) -> Result<Self, RecordError> {
        let mut diagnostics = Diagnostics::new(options);
        let mut reader = Reader::new(bytes);

        let mut headers = vec![FlashHeader::load(&mut reader, &mut diagnostics)?];
        while reader.remaining().starts_with(FLASH_MAGIC) {
            headers.push(FlashHeader::load(&mut reader, &mut diagnostics)?);
        }

        if !reader.is_empty() {
            diagnostics.report(Warning::TrailingData {
                len: reader.remaining_len(),
            })?;
        }

        debug!("parsed flash file with {} headers", headers.len());
        Ok(Self {
            headers,
            diagnostics,
        })
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        self.headers.iter().flat_map(FlashHeader::to_bytes).collect()
    }

    pub fn headers(&self) -> &[FlashHeader] {
        &self.headers
    }

    pub fn header_mut(&mut self, index: usize) -> Option<&mut FlashHeader> {
        self.headers.get_mut(index)
    }

    pub fn add_header(&mut self, header: FlashHeader) {
        self.headers.push(header);
    }

    pub fn into_headers(self) -> Vec<FlashHeader> {
        self.headers
    }

    pub fn len(&self) -> usize {
        self.headers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.headers.is_empty()
    }

    /// File extension on `model`, taken from the first header.
    pub fn extension(&self, model: &Model) -> &'static str {
        self.headers
            .first()
            .map_or(EMPTY_EXTENSION, |header| header.extension(model))
    }

    /// Returns true if parsing hit a structural anomaly.
    pub fn is_corrupt(&self) -> bool {
        self.diagnostics.is_corrupt()
    }

    pub fn warnings(&self) -> &[Warning] {
        self.diagnostics.warnings()
    }
}
