//! Binary records: var file headers, entries and whole files.
//!
//! Every record is a [`Layout`] table over one backing buffer (see
//! [`layout`]). Typed access goes through [`Converter`]s.

pub mod convert;
pub mod entry;
pub mod file;
pub mod header;
pub mod layout;
pub mod name;
pub mod primitives;

pub use convert::{BcdDate, BcdRevision, Converter, Date};
pub use entry::Entry;
pub use file::VarFile;
pub use header::{HEADER_LENGTH, Header};
pub use layout::{FieldId, FieldSpec, Layout, Presence, Record, Width};
pub use name::{ListName, TokenizedName, VarName, normalize_name, validate_name};
pub use primitives::{Reader, Writer, checksum16};
