//! Error type shared by the path codec, locator, operators and renderer.

use thiserror::Error;

use crate::inspect::Kind;
use crate::path::Path;

/// Result alias used across the crate.
pub type Result<T, E = EditError> = std::result::Result<T, E>;

/// Every way a parse, lookup, mutation or render can fail.
///
/// Locator and renderer variants carry `at`, the path prefix that was
/// resolved before the failure.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EditError {
    // ── Path codec ────────────────────────────────────────────────────────
    #[error("malformed index segment '{segment}'")]
    MalformedIndex { segment: String },

    // ── Locator ───────────────────────────────────────────────────────────
    #[error("nil reference at '{at}'")]
    NilReference { at: Path },
    #[error("no field named '{name}' at '{at}'")]
    UnknownField { at: Path, name: String },
    #[error("index {index} used on a record at '{at}'")]
    IndexOnRecord { at: Path, index: usize },
    #[error("field name '{name}' used on a sequence at '{at}'")]
    NameOnSequence { at: Path, name: String },
    #[error("index {index} out of range (len: {len}) at '{at}'")]
    IndexOutOfRange { at: Path, index: usize, len: usize },
    #[error("cannot follow path through {kind} value at '{at}'")]
    PathThroughScalar { at: Path, kind: Kind },
    #[error("operator wants a reference but the path continues past '{at}'")]
    ReferenceMidPath { at: Path },

    // ── Operators ─────────────────────────────────────────────────────────
    #[error("cannot parse '{text}' as {kind}: {reason}")]
    ParseError {
        kind: Kind,
        text: String,
        reason: String,
    },
    #[error("operator '{operator}' does not apply to {kind} values")]
    UnsupportedKind { operator: &'static str, kind: Kind },
    #[error("unknown operator '{name}'")]
    UnknownOperator { name: String },

    // ── Renderer ──────────────────────────────────────────────────────────
    #[error("cannot render {kind} value at '{at}'")]
    UnrenderableKind { at: Path, kind: Kind },
}

impl EditError {
    pub(crate) fn parse(kind: Kind, text: &str, reason: impl Into<String>) -> Self {
        EditError::ParseError {
            kind,
            text: text.to_owned(),
            reason: reason.into(),
        }
    }

    pub(crate) fn unsupported(operator: &'static str, kind: Kind) -> Self {
        EditError::UnsupportedKind { operator, kind }
    }

    /// True for failures caused by malformed request input: a bad path
    /// segment, unparsable scalar text or an unknown operator keyword.
    pub fn is_bad_request(&self) -> bool {
        matches!(
            self,
            EditError::MalformedIndex { .. }
                | EditError::ParseError { .. }
                | EditError::UnknownOperator { .. }
        )
    }

    /// True for failures where the path does not address a location in the
    /// held value.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            EditError::NilReference { .. }
                | EditError::UnknownField { .. }
                | EditError::IndexOnRecord { .. }
                | EditError::NameOnSequence { .. }
                | EditError::IndexOutOfRange { .. }
                | EditError::PathThroughScalar { .. }
                | EditError::ReferenceMidPath { .. }
        )
    }
}
