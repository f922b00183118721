//! Path resolution against a value graph.
//!
//! One segment is consumed per record or sequence level. References are
//! dereferenced transparently and do not consume a segment, including any
//! left at the end of the path, so a path the renderer emits for a value
//! held behind `Box`/`Option` addresses that value and not its holder.
//! Every error carries the path prefix resolved before the failing step.

use tracing::trace;

use crate::error::{EditError, Result};
use crate::inspect::{Inspect, Kind};
use crate::path::{Path, Segment};

fn prefix(segments: &[Segment], depth: usize) -> Path {
    Path::from_segments(segments[..depth].to_vec())
}

fn expect_field<'p>(segments: &'p [Segment], depth: usize) -> Result<&'p str> {
    match &segments[depth] {
        Segment::Field(name) => Ok(name),
        Segment::Index(index) => Err(EditError::IndexOnRecord {
            at: prefix(segments, depth),
            index: *index,
        }),
    }
}

fn expect_index(segments: &[Segment], depth: usize) -> Result<usize> {
    match &segments[depth] {
        Segment::Index(index) => Ok(*index),
        Segment::Field(name) => Err(EditError::NameOnSequence {
            at: prefix(segments, depth),
            name: name.clone(),
        }),
    }
}

/// Resolve `path` to a mutable handle inside `root`.
///
/// Without `wants_reference`, references at the end of the path are followed
/// too and the referenced value is returned. With it set, a reference met
/// while segments remain is an error ([`EditError::ReferenceMidPath`]) and a
/// reference at the very end of the path is returned as is.
pub fn locate_mut<'a>(
    root: &'a mut dyn Inspect,
    path: &Path,
    wants_reference: bool,
) -> Result<&'a mut dyn Inspect> {
    let segments = path.segments();
    let mut current = root;
    let mut depth = 0;

    while depth < segments.len() {
        let kind = current.kind();
        trace!(depth, %kind, "locate step");
        match kind {
            Kind::Reference => {
                if wants_reference {
                    return Err(EditError::ReferenceMidPath {
                        at: prefix(segments, depth),
                    });
                }
                current = match current.target_mut() {
                    Some(target) => target,
                    None => {
                        return Err(EditError::NilReference {
                            at: prefix(segments, depth),
                        })
                    }
                };
                continue;
            }
            Kind::Record => {
                let name = expect_field(segments, depth)?;
                current = match current.field_mut(name) {
                    Some(child) => child,
                    None => {
                        return Err(EditError::UnknownField {
                            at: prefix(segments, depth),
                            name: name.to_owned(),
                        })
                    }
                };
            }
            Kind::Sequence => {
                let index = expect_index(segments, depth)?;
                let len = current.len();
                current = match current.element_mut(index) {
                    Some(element) => element,
                    None => {
                        return Err(EditError::IndexOutOfRange {
                            at: prefix(segments, depth),
                            index,
                            len,
                        })
                    }
                };
            }
            _ => {
                return Err(EditError::PathThroughScalar {
                    at: prefix(segments, depth),
                    kind,
                })
            }
        }
        depth += 1;
    }

    if !wants_reference {
        while current.kind() == Kind::Reference {
            current = match current.target_mut() {
                Some(target) => target,
                None => return Err(EditError::NilReference { at: path.clone() }),
            };
        }
    }

    Ok(current)
}

/// Read-only counterpart of [`locate_mut`]. References are always followed,
/// trailing ones included.
pub fn locate<'a>(root: &'a dyn Inspect, path: &Path) -> Result<&'a dyn Inspect> {
    let segments = path.segments();
    let mut current = root;
    let mut depth = 0;

    while depth < segments.len() {
        let kind = current.kind();
        match kind {
            Kind::Reference => {
                current = current.target().ok_or_else(|| EditError::NilReference {
                    at: prefix(segments, depth),
                })?;
                continue;
            }
            Kind::Record => {
                let name = expect_field(segments, depth)?;
                current = current
                    .field(name)
                    .ok_or_else(|| EditError::UnknownField {
                        at: prefix(segments, depth),
                        name: name.to_owned(),
                    })?;
            }
            Kind::Sequence => {
                let index = expect_index(segments, depth)?;
                current = current
                    .element(index)
                    .ok_or_else(|| EditError::IndexOutOfRange {
                        at: prefix(segments, depth),
                        index,
                        len: current.len(),
                    })?;
            }
            _ => {
                return Err(EditError::PathThroughScalar {
                    at: prefix(segments, depth),
                    kind,
                })
            }
        }
        depth += 1;
    }

    while current.kind() == Kind::Reference {
        current = current
            .target()
            .ok_or_else(|| EditError::NilReference { at: path.clone() })?;
    }

    Ok(current)
}
