//! Type-id registry.
//!
//! The registry is filled once, on first use, by the `register` calls in the
//! [`REGISTRY`] initializer, and is read-only afterwards.

use lazy_static::lazy_static;
use log::debug;
use rustc_hash::FxHashMap;

use super::tokenized;
use super::{Domain, EntryKind, LeafKind, NumericForm, NumericKind};

/// How an entry's name field is encoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameKind {
    /// Up to eight of `A-Z`, `0-9` and theta.
    Plain,
    /// Tokens, such as `Str1` or `Y₁`.
    Tokenized,
    /// `L₁`-`L₆` as tokens, or a custom list name after `5D`.
    List,
    /// Fixed system names, kept byte for byte.
    Raw,
}

/// Everything the crate knows about one type id.
#[derive(Debug, Clone, Copy)]
pub struct TypeDescriptor {
    pub type_id: u8,
    pub name: &'static str,
    /// File extension for most models; see [`crate::record::Entry::extension`].
    pub extension: &'static str,
    /// Cannot be stored without flash metadata.
    pub flash_only: bool,
    /// Legal version bytes; the first is the default. `[0]` means the type
    /// does not use versions.
    pub versions: &'static [u8],
    pub name_kind: NameKind,
    /// Data starts with its own two-byte length.
    pub sized: bool,
    kind: EntryKind,
}

impl TypeDescriptor {
    const fn new(type_id: u8, name: &'static str, extension: &'static str, kind: EntryKind) -> Self {
        Self {
            type_id,
            name,
            extension,
            flash_only: false,
            versions: &[0x00],
            name_kind: NameKind::Plain,
            sized: false,
            kind,
        }
    }

    const fn flash_only(self) -> Self {
        Self {
            flash_only: true,
            ..self
        }
    }

    const fn versions(self, versions: &'static [u8]) -> Self {
        Self { versions, ..self }
    }

    const fn names(self, name_kind: NameKind) -> Self {
        Self { name_kind, ..self }
    }

    const fn sized(self) -> Self {
        Self {
            sized: true,
            ..self
        }
    }

    /// Returns true if the type uses version bytes.
    pub fn is_versioned(&self) -> bool {
        self.versions != [0x00]
    }

    /// Version byte given to new entries of this type.
    pub fn default_version(&self) -> u8 {
        self.versions.first().copied().unwrap_or(0)
    }

    /// Returns the kind an entry of this type with the given payload has.
    ///
    /// Programs are assembly when their payload starts with a compiled
    /// assembly token.
    pub fn kind_for(&self, payload: &[u8]) -> EntryKind {
        match self.kind {
            EntryKind::Program { protected, .. } => EntryKind::Program {
                protected,
                asm: tokenized::is_asm(payload),
            },
            kind => kind,
        }
    }
}

/// Map from type id to descriptor.
#[derive(Debug, Default)]
pub struct TypeRegistry {
    types: FxHashMap<u8, TypeDescriptor>,
}

impl TypeRegistry {
    fn register(&mut self, descriptor: TypeDescriptor) {
        debug!(
            "registering entry type 0x{:02x} ({})",
            descriptor.type_id, descriptor.name
        );
        self.types.insert(descriptor.type_id, descriptor);
    }

    /// Looks up a type id.
    pub fn get(&self, type_id: u8) -> Option<&TypeDescriptor> {
        self.types.get(&type_id)
    }

    /// Looks up a type by name, such as `"Program"`.
    pub fn by_name(&self, name: &str) -> Option<&TypeDescriptor> {
        self.types.values().find(|descriptor| descriptor.name == name)
    }

    /// Iterates over the registered types in type-id order.
    pub fn iter(&self) -> impl Iterator<Item = &TypeDescriptor> {
        let mut types: Vec<_> = self.types.values().collect();
        types.sort_by_key(|descriptor| descriptor.type_id);
        types.into_iter()
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

/// Type id that marks an entry with no type.
pub const NO_TYPE: u8 = 0xFF;

const LIST_VERSIONS: &[u8] = &[0x00, 0x0B, 0x10];
const MATRIX_VERSIONS: &[u8] = &[0x10, 0x0B, 0x00];
const EXACT_VERSIONS: &[u8] = &[0x10];

const fn numeric(domain: Domain, kind: NumericKind) -> EntryKind {
    EntryKind::Numeric(NumericForm::new(domain, kind))
}

lazy_static! {
    pub static ref REGISTRY: TypeRegistry = {
        use Domain::{Complex, Real};
        use NumericKind::*;

        let mut registry = TypeRegistry::default();
        let program = |protected| EntryKind::Program {
            protected,
            asm: false,
        };

        registry.register(TypeDescriptor::new(0x00, "Real", "8xn", numeric(Real, Plain)));
        registry.register(
            TypeDescriptor::new(0x01, "RealList", "8xl", EntryKind::Leaf(LeafKind::RealList))
                .versions(LIST_VERSIONS)
                .names(NameKind::List),
        );
        registry.register(
            TypeDescriptor::new(0x02, "Matrix", "8xm", EntryKind::Leaf(LeafKind::Matrix))
                .versions(MATRIX_VERSIONS)
                .names(NameKind::Tokenized),
        );
        registry.register(
            TypeDescriptor::new(0x03, "Equation", "8xy", EntryKind::Equation)
                .versions(tokenized::VERSIONS)
                .names(NameKind::Tokenized)
                .sized(),
        );
        registry.register(
            TypeDescriptor::new(0x04, "String", "8xs", EntryKind::String)
                .versions(tokenized::VERSIONS)
                .names(NameKind::Tokenized)
                .sized(),
        );
        registry.register(
            TypeDescriptor::new(0x05, "Program", "8xp", program(false))
                .versions(tokenized::VERSIONS)
                .sized(),
        );
        registry.register(
            TypeDescriptor::new(0x06, "ProtectedProgram", "8xp", program(true))
                .versions(tokenized::VERSIONS)
                .sized(),
        );
        registry.register(
            TypeDescriptor::new(0x07, "Picture", "8xi", EntryKind::Leaf(LeafKind::Picture))
                .names(NameKind::Tokenized)
                .sized(),
        );
        registry.register(
            TypeDescriptor::new(0x08, "GraphDatabase", "8xd", EntryKind::Leaf(LeafKind::GraphDatabase))
                .names(NameKind::Tokenized)
                .sized(),
        );
        registry.register(
            TypeDescriptor::new(0x0B, "NewEquation", "8xy", EntryKind::Equation)
                .versions(tokenized::VERSIONS)
                .names(NameKind::Tokenized)
                .sized(),
        );
        registry.register(TypeDescriptor::new(0x0C, "Complex", "8xc", numeric(Complex, Plain)));
        registry.register(
            TypeDescriptor::new(0x0D, "ComplexList", "8xl", EntryKind::Leaf(LeafKind::ComplexList))
                .versions(LIST_VERSIONS)
                .names(NameKind::List),
        );
        registry.register(TypeDescriptor::new(0x0E, "UndefinedReal", "8xn", numeric(Real, Plain)));
        registry.register(
            TypeDescriptor::new(0x0F, "WindowSettings", "8xw", EntryKind::Leaf(LeafKind::WindowSettings))
                .names(NameKind::Raw),
        );
        registry.register(
            TypeDescriptor::new(0x10, "RecallWindow", "8xz", EntryKind::Leaf(LeafKind::RecallWindow))
                .names(NameKind::Raw),
        );
        registry.register(
            TypeDescriptor::new(0x11, "TableSettings", "8xt", EntryKind::Leaf(LeafKind::TableSettings))
                .names(NameKind::Raw),
        );
        registry.register(
            TypeDescriptor::new(0x15, "AppVar", "8xv", EntryKind::AppVar)
                .flash_only()
                .sized(),
        );
        registry.register(
            TypeDescriptor::new(0x17, "Group", "8xg", EntryKind::Leaf(LeafKind::Group)).sized(),
        );
        registry.register(
            TypeDescriptor::new(0x18, "RealFraction", "8xn", numeric(Real, Fraction))
                .versions(&[0x06]),
        );
        registry.register(
            TypeDescriptor::new(0x1A, "Image", "8ca", EntryKind::Leaf(LeafKind::Image))
                .flash_only()
                .names(NameKind::Tokenized)
                .sized(),
        );
        registry.register(
            TypeDescriptor::new(0x1B, "ComplexFraction", "8xc", numeric(Complex, Fraction))
                .versions(&[0x0B]),
        );
        registry.register(
            TypeDescriptor::new(0x1C, "RealRadical", "8xn", numeric(Real, Radical))
                .flash_only()
                .versions(EXACT_VERSIONS),
        );
        registry.register(
            TypeDescriptor::new(0x1D, "ComplexRadical", "8xc", numeric(Complex, Radical))
                .flash_only()
                .versions(EXACT_VERSIONS),
        );
        registry.register(
            TypeDescriptor::new(0x1E, "ComplexPi", "8xc", numeric(Complex, Pi))
                .flash_only()
                .versions(EXACT_VERSIONS),
        );
        registry.register(
            TypeDescriptor::new(0x1F, "ComplexPiFraction", "8xc", numeric(Complex, PiFraction))
                .flash_only()
                .versions(EXACT_VERSIONS),
        );
        registry.register(
            TypeDescriptor::new(0x20, "RealPi", "8xn", numeric(Real, Pi))
                .flash_only()
                .versions(EXACT_VERSIONS),
        );
        registry.register(
            TypeDescriptor::new(0x21, "RealPiFraction", "8xn", numeric(Real, PiFraction))
                .flash_only()
                .versions(EXACT_VERSIONS),
        );

        debug!("registered {} entry types", registry.len());
        registry
    };
}
