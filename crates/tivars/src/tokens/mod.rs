//! Token tables.
//!
//! TI-BASIC programs are stored as one- and two-byte tokens. The built-in
//! sheet in [`sheet`] lists every token once, with the OS version that
//! introduced it; each model's [`TokenTable`] keeps only what that model's
//! newest OS knows.

pub mod sheet;
pub mod table;
pub mod token;
pub mod trie;

pub use sheet::{Alternate, SHEET, Sheet, TokenSpec};
pub use table::{LANGS, TokenTable};
pub use token::{Token, TokenFlags, Translation, Trigger, escape_bytes};
pub use trie::TokenTrie;
