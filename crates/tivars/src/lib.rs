//! tivars: read and write the variable files of TI graphing calculators.
//!
//! This crate parses, edits and serializes the files the TI-82 through
//! TI-84+ CE families exchange with computers, and translates TI-BASIC
//! between text and the one- and two-byte tokens programs are stored as.
//!
//! # Overview
//!
//! A var file is a 55-byte [`Header`], any number of [`Entry`]s and a
//! trailing checksum:
//! - **Records** are declared as static field tables over a single buffer, so
//!   every field is addressable and the checksum always covers the right bytes
//! - **Entries** are coerced to a kind by their type id; programs, equations
//!   and strings hold token streams
//! - **Parsing** is lenient by default: anomalies are logged, collected and
//!   mark the value corrupt, while [`ParseOptions::strict`] rejects them
//!
//! # Quick Start
//!
//! ```rust
//! use tivars::{Entry, ParseOptions, VarFile};
//! use tivars::model::TI_84P;
//! use tivars::tokenizer::{DecodeOptions, EncodeOptions};
//!
//! // Build a program from text
//! let entry = Entry::from_text(0x05, "HELLO", "Disp \"HELLO\"", &TI_84P, &EncodeOptions::new()).unwrap();
//! let file = VarFile::from_entry(&TI_84P, entry);
//! assert_eq!(file.extension(&TI_84P), "8xp");
//!
//! // Serialize and parse it back
//! let bytes = file.to_bytes().unwrap();
//! let parsed = VarFile::parse(&bytes, &ParseOptions::strict()).unwrap();
//! assert_eq!(parsed, file);
//!
//! let program = &parsed.entries()[0];
//! assert_eq!(program.name().unwrap(), "HELLO");
//! assert_eq!(program.decode(&TI_84P, &DecodeOptions::new()).unwrap().text, "Disp \"HELLO\"");
//! ```
//!
//! # Modules
//!
//! - [`record`]: Headers, entries, var files and the layout machinery
//! - [`types`]: The type-id registry and entry kinds
//! - [`tokens`]: Token sheet and per-model token tables
//! - [`tokenizer`]: Text to tokens and back
//! - [`model`]: Calculator models, features and OS versions
//! - [`flash`]: Flash headers and Intel hex blocks
//! - [`diagnostics`]: Parse options and warnings
//! - [`error`]: Error types
//!
//! # Logging
//!
//! Warnings are emitted through the [`log`] facade as they are found, and
//! table construction logs at debug level. No logger is installed.

pub mod diagnostics;
pub mod error;
pub mod flash;
pub mod model;
pub mod record;
pub mod tokenizer;
pub mod tokens;
pub mod types;

/// Crate version, written into the comment of new var file headers.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Re-export commonly used types at crate root
pub use diagnostics::{ParseOptions, Warning};
pub use error::{ConvertError, DecodeError, EncodeError, ErrorCode, RecordError};
pub use flash::{FlashFile, FlashHeader, IntelBlock};
pub use model::{Model, ModelId, OsVersion};
pub use record::{Entry, Header, VarFile};
pub use tokenizer::{decode, encode};
pub use types::{EntryKind, REGISTRY};
