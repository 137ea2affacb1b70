//! Concrete entry types.
//!
//! Every entry carries a one-byte type id. The [`registry`] maps known ids to
//! a [`TypeDescriptor`], which in turn names the [`EntryKind`] a parsed entry
//! is coerced into.

pub mod registry;
pub mod tokenized;

pub use registry::{NameKind, TypeDescriptor, TypeRegistry, REGISTRY};

/// Whether a number has an imaginary part.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Domain {
    Real,
    Complex,
}

/// How a number is stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericKind {
    /// A floating-point value.
    Plain,
    /// An exact fraction `n/d`.
    Fraction,
    /// An exact radical `(a√b + c√d) / e`.
    Radical,
    /// A rational multiple of π.
    Pi,
    /// A fractional multiple of π.
    PiFraction,
}

/// Domain and storage kind of a numeric entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NumericForm {
    pub domain: Domain,
    pub kind: NumericKind,
}

impl NumericForm {
    pub const fn new(domain: Domain, kind: NumericKind) -> Self {
        Self { domain, kind }
    }

    /// Returns true for the exact forms only the newest models display.
    pub fn is_exact(&self) -> bool {
        !matches!(self.kind, NumericKind::Plain | NumericKind::Fraction)
    }
}

/// Entry types whose data this crate keeps as raw bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LeafKind {
    RealList,
    ComplexList,
    Matrix,
    Picture,
    GraphDatabase,
    WindowSettings,
    RecallWindow,
    TableSettings,
    Group,
    Image,
}

/// The concrete type of an entry, set by coercion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum EntryKind {
    /// Not coerced, or an unrecognized type id.
    #[default]
    Generic,
    /// A TI-BASIC or assembly program.
    Program { protected: bool, asm: bool },
    /// A function, parametric, polar or sequence equation.
    Equation,
    /// A `Str` variable.
    String,
    /// An application variable: opaque sized data.
    AppVar,
    Numeric(NumericForm),
    Leaf(LeafKind),
}

impl EntryKind {
    /// Returns true if the data is a token stream.
    pub fn is_tokenized(&self) -> bool {
        match self {
            EntryKind::Program { asm, .. } => !asm,
            EntryKind::Equation | EntryKind::String => true,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenized_kinds() {
        assert!(EntryKind::Equation.is_tokenized());
        assert!(EntryKind::Program {
            protected: true,
            asm: false
        }
        .is_tokenized());
        assert!(!EntryKind::Program {
            protected: false,
            asm: true
        }
        .is_tokenized());
        assert!(!EntryKind::AppVar.is_tokenized());
        assert!(!EntryKind::Generic.is_tokenized());
    }

    #[test]
    fn test_exact_forms() {
        assert!(!NumericForm::new(Domain::Real, NumericKind::Fraction).is_exact());
        assert!(NumericForm::new(Domain::Complex, NumericKind::Radical).is_exact());
    }
}
