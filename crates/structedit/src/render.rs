//! Tree walker producing the HTML view of a value.
//!
//! Each scalar becomes an `<input>` with a fresh `input-N` id. When the root
//! is held by reference the view is editable: every scalar also gets a
//! `change` button carrying the path that addresses it, and growable
//! sequences get `grow`/`shrink` buttons. The embedded paths are exactly the
//! ones [`Editor::mutate`](crate::Editor::mutate) resolves.

use serde::Serialize;
use tracing::trace;

use crate::error::{EditError, Result};
use crate::inspect::{Inspect, Kind};
use crate::path::{Path, Segment};

/// One rendered scalar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldBinding {
    /// DOM id of the `<input>`.
    pub id: String,
    /// Path addressing the scalar. Only present in editable renders.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<Path>,
    /// Current value as shown in the input.
    pub value: String,
}

/// Output of a render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rendered {
    pub markup: String,
    pub editable: bool,
    /// Bindings in traversal order.
    pub fields: Vec<FieldBinding>,
}

/// Single-use render state.
///
/// The current path lives on the stack of [`render`](Self::render) and is
/// extended with [`Path::visiting`] per child, so it is back at the root
/// after every walk, failed or not.
#[derive(Debug)]
pub struct Renderer {
    next_id: usize,
    editable: bool,
    fields: Vec<FieldBinding>,
}

impl Renderer {
    pub fn new(editable: bool) -> Self {
        Self {
            next_id: 0,
            editable,
            fields: Vec::new(),
        }
    }

    /// A renderer whose editability follows the root: editable iff the root
    /// is a reference.
    pub fn for_root(root: &dyn Inspect) -> Self {
        Self::new(root.kind() == Kind::Reference)
    }

    pub fn is_editable(&self) -> bool {
        self.editable
    }

    pub fn render(mut self, root: &dyn Inspect) -> Result<Rendered> {
        trace!(editable = self.editable, "render start");
        let mut path = Path::root();
        let mut markup = String::new();
        self.walk(&mut path, root, &mut markup)?;
        Ok(Rendered {
            markup,
            editable: self.editable,
            fields: self.fields,
        })
    }

    fn next_id(&mut self) -> String {
        let id = self.next_id;
        self.next_id += 1;
        format!("input-{}", id)
    }

    fn walk(&mut self, path: &mut Path, value: &dyn Inspect, out: &mut String) -> Result<()> {
        match value.kind() {
            Kind::Record => self.walk_record(path, value, out),
            Kind::Sequence => self.walk_sequence(path, value, out),
            Kind::Reference => match value.target() {
                Some(target) => {
                    out.push('&');
                    self.walk(path, target, out)
                }
                None => {
                    out.push_str("nil");
                    Ok(())
                }
            },
            Kind::Opaque => Err(EditError::UnrenderableKind {
                at: path.clone(),
                kind: Kind::Opaque,
            }),
            _ => {
                let text = value.scalar_text().unwrap_or_default();
                self.edit_field(path, text, out);
                Ok(())
            }
        }
    }

    fn walk_record(
        &mut self,
        path: &mut Path,
        value: &dyn Inspect,
        out: &mut String,
    ) -> Result<()> {
        out.push_str("<div>");
        out.push_str(&escape_html(&value.type_label()));
        out.push_str(" {<ul>");
        for name in value.field_names() {
            let segment = Segment::field(*name);
            // A listed name the implementation cannot hand out.
            let child = value
                .field(name)
                .ok_or_else(|| EditError::UnrenderableKind {
                    at: path.with_appended(segment.clone()),
                    kind: Kind::Record,
                })?;
            out.push_str("<li>");
            out.push_str(&escape_html(name));
            out.push_str(": ");
            path.visiting(segment, |path| self.walk(path, child, out))?;
            out.push_str(",</li>");
        }
        out.push_str("}</ul></div>");
        Ok(())
    }

    fn walk_sequence(
        &mut self,
        path: &mut Path,
        value: &dyn Inspect,
        out: &mut String,
    ) -> Result<()> {
        out.push_str("<div>");
        out.push_str(&escape_html(&value.type_label()));
        out.push_str(" {<ul>");
        for index in 0..value.len() {
            let segment = Segment::index(index);
            let element = value
                .element(index)
                .ok_or_else(|| EditError::UnrenderableKind {
                    at: path.with_appended(segment.clone()),
                    kind: Kind::Sequence,
                })?;
            out.push_str("<li>");
            path.visiting(segment, |path| self.walk(path, element, out))?;
            out.push_str(",</li>");
        }
        out.push_str("}</ul>");
        if self.editable && value.is_growable() {
            let path = attr_path(path);
            out.push_str(&format!(
                "<button onclick=\"grow('{path}')\">grow</button>\
                 <button onclick=\"shrink('{path}')\">shrink</button>"
            ));
        }
        out.push_str("</div>");
        Ok(())
    }

    fn edit_field(&mut self, path: &Path, value: String, out: &mut String) {
        let id = self.next_id();
        out.push_str(&format!(
            "<input type='text' id='{}' value='{}'>",
            id,
            escape_html(&value)
        ));
        let path = if self.editable {
            out.push_str(&format!(
                "<button onclick=\"update('{}', '{}')\">change</button>",
                attr_path(path),
                id
            ));
            Some(path.clone())
        } else {
            None
        };
        self.fields.push(FieldBinding { id, path, value });
    }
}

/// Path text as a JS string literal body inside an HTML attribute.
fn attr_path(path: &Path) -> String {
    escape_html(&escape_js(&path.to_string()))
}

/// Escape text for an HTML attribute or element body.
pub fn escape_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut last = 0;

    for (i, ch) in s.char_indices() {
        let escaped = match ch {
            '&' => "&amp;",
            '<' => "&lt;",
            '>' => "&gt;",
            '"' => "&#34;",
            '\'' => "&#39;",
            _ => continue,
        };
        result.push_str(&s[last..i]);
        result.push_str(escaped);
        last = i + ch.len_utf8();
    }

    result.push_str(&s[last..]);
    result
}

/// Escape text for a single-quoted JS string literal.
pub fn escape_js(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut last = 0;

    for (i, ch) in s.char_indices() {
        let escaped = match ch {
            '\\' => "\\\\",
            '\'' => "\\'",
            '\n' => "\\n",
            '\r' => "\\r",
            _ => continue,
        };
        result.push_str(&s[last..i]);
        result.push_str(escaped);
        last = i + ch.len_utf8();
    }

    result.push_str(&s[last..]);
    result
}
