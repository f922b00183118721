//! Operators applied to a located value.

use crate::error::{EditError, Result};
use crate::inspect::{Inspect, Kind};

// ── Operator trait ────────────────────────────────────────────────────────

/// An action applied to the value a path resolves to.
pub trait Operator {
    /// Keyword naming the operator in requests and errors.
    fn name(&self) -> &'static str;

    /// When true the locator stops at a trailing reference instead of
    /// following it, and refuses to walk through references mid-path.
    fn wants_reference(&self) -> bool {
        false
    }

    fn apply(&self, target: &mut dyn Inspect) -> Result<()>;
}

// ── Shipped operators ─────────────────────────────────────────────────────

/// The operators reachable from a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Op {
    /// Replace a scalar with the value parsed from the text.
    Set(String),
    /// Append one default element to a growable sequence.
    Grow,
    /// Drop the last element of a growable sequence.
    Shrink,
}

impl Op {
    pub fn set(value: impl Into<String>) -> Self {
        Op::Set(value.into())
    }

    /// Build an operator from a request keyword. `set` without a value
    /// assigns the empty text.
    pub fn from_keyword(keyword: &str, value: Option<&str>) -> Result<Self> {
        match keyword {
            "set" => Ok(Op::Set(value.unwrap_or_default().to_owned())),
            "grow" => Ok(Op::Grow),
            "shrink" => Ok(Op::Shrink),
            other => Err(EditError::UnknownOperator {
                name: other.to_owned(),
            }),
        }
    }
}

fn apply_set(target: &mut dyn Inspect, text: &str) -> Result<()> {
    let kind = target.kind();
    if !kind.is_scalar() {
        return Err(EditError::unsupported("set", kind));
    }
    target.set_scalar(text)
}

fn resizable(target: &dyn Inspect, operator: &'static str) -> Result<()> {
    let kind = target.kind();
    if kind == Kind::Sequence && target.is_growable() {
        Ok(())
    } else {
        Err(EditError::unsupported(operator, kind))
    }
}

fn apply_grow(target: &mut dyn Inspect) -> Result<()> {
    resizable(target, "grow")?;
    target.grow()
}

fn apply_shrink(target: &mut dyn Inspect) -> Result<()> {
    resizable(target, "shrink")?;
    target.shrink()
}

impl Operator for Op {
    fn name(&self) -> &'static str {
        match self {
            Op::Set(_) => "set",
            Op::Grow => "grow",
            Op::Shrink => "shrink",
        }
    }

    fn apply(&self, target: &mut dyn Inspect) -> Result<()> {
        match self {
            Op::Set(text) => apply_set(target, text),
            Op::Grow => apply_grow(target),
            Op::Shrink => apply_shrink(target),
        }
    }
}
