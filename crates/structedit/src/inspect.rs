//! The introspection capability the engine is written against.
//!
//! The locator, operators and renderer never see concrete types. They only
//! ask a value for its [`Kind`] and then use the matching group of
//! [`Inspect`] methods:
//!
//! | kind | methods |
//! |---|---|
//! | scalar kinds | [`scalar_text`](Inspect::scalar_text), [`set_scalar`](Inspect::set_scalar) |
//! | `Record` | [`field_names`](Inspect::field_names), [`field`](Inspect::field), [`field_mut`](Inspect::field_mut) |
//! | `Sequence` | [`len`](Inspect::len), [`element`](Inspect::element), [`element_mut`](Inspect::element_mut), [`grow`](Inspect::grow), [`shrink`](Inspect::shrink) |
//! | `Reference` | [`target`](Inspect::target), [`target_mut`](Inspect::target_mut) |
//!
//! Records get their implementation from `#[derive(Inspect)]`; std types are
//! covered in `impls`. `Vec<T>` requires `T: Default` for all of its methods,
//! not only `grow`.

use std::borrow::Cow;
use std::fmt;

use crate::error::EditError;

/// Runtime shape of a value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Kind {
    /// Signed integer.
    Int,
    /// Unsigned integer.
    Uint,
    Float,
    Bool,
    /// Strings and chars.
    String,
    /// Named fields in declaration order.
    Record,
    /// Indexed elements, fixed or growable length.
    Sequence,
    /// Pointer-like indirection that may be unset.
    Reference,
    /// A value exposing no structure (maps, unit).
    Opaque,
}

impl Kind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Kind::Int => "integer",
            Kind::Uint => "unsigned",
            Kind::Float => "float",
            Kind::Bool => "bool",
            Kind::String => "string",
            Kind::Record => "record",
            Kind::Sequence => "sequence",
            Kind::Reference => "reference",
            Kind::Opaque => "opaque",
        }
    }

    /// True for the kinds that render as a single input and accept `set`.
    pub fn is_scalar(&self) -> bool {
        matches!(
            self,
            Kind::Int | Kind::Uint | Kind::Float | Kind::Bool | Kind::String
        )
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Generic access to a value of a type unknown to the engine.
///
/// Every method except [`kind`](Inspect::kind) and the two label methods has
/// a default that reports "not applicable", so an implementation only fills
/// in the group for its own kind.
pub trait Inspect {
    fn kind(&self) -> Kind;

    /// Type label for values of this type, usable without an instance.
    fn static_label() -> Cow<'static, str>
    where
        Self: Sized;

    /// Type label shown in rendered container headers.
    fn type_label(&self) -> Cow<'static, str>;

    /// Textual form of a scalar. `None` for non-scalars.
    fn scalar_text(&self) -> Option<String> {
        None
    }

    /// Replace a scalar with the value parsed from `text`.
    fn set_scalar(&mut self, text: &str) -> Result<(), EditError> {
        let _ = text;
        Err(EditError::unsupported("set", self.kind()))
    }

    /// Record field names in declaration order.
    fn field_names(&self) -> &[&'static str] {
        &[]
    }

    fn field(&self, name: &str) -> Option<&dyn Inspect> {
        let _ = name;
        None
    }

    fn field_mut(&mut self, name: &str) -> Option<&mut dyn Inspect> {
        let _ = name;
        None
    }

    /// Sequence length. Zero for non-sequences.
    fn len(&self) -> usize {
        0
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn element(&self, index: usize) -> Option<&dyn Inspect> {
        let _ = index;
        None
    }

    fn element_mut(&mut self, index: usize) -> Option<&mut dyn Inspect> {
        let _ = index;
        None
    }

    /// True for sequences whose length can change.
    fn is_growable(&self) -> bool {
        false
    }

    /// Append one default-valued element.
    fn grow(&mut self) -> Result<(), EditError> {
        Err(EditError::unsupported("grow", self.kind()))
    }

    /// Remove the last element; no-op when empty.
    fn shrink(&mut self) -> Result<(), EditError> {
        Err(EditError::unsupported("shrink", self.kind()))
    }

    /// Referenced value, `None` when the reference is unset.
    fn target(&self) -> Option<&dyn Inspect> {
        None
    }

    fn target_mut(&mut self) -> Option<&mut dyn Inspect> {
        None
    }
}
