//! Attribute parsing for the Inspect derive.

use darling::{ast, FromDeriveInput, FromField};
use syn::{Generics, Ident, Type};

/// Parsed struct.
#[derive(Debug, FromDeriveInput)]
#[darling(attributes(inspect), supports(struct_named))]
pub struct RecordInput {
    pub ident: Ident,
    pub generics: Generics,
    pub data: ast::Data<(), FieldInput>,
}

impl RecordInput {
    pub fn fields(&self) -> Vec<&FieldInput> {
        self.data
            .as_ref()
            .take_struct()
            .map(|s| s.fields.to_vec())
            .unwrap_or_default()
    }

    /// Fields visible through `Inspect`, in declaration order.
    pub fn included_fields(&self) -> Vec<&FieldInput> {
        self.fields().into_iter().filter(|f| !f.skip).collect()
    }
}

/// Parsed field.
#[derive(Debug, FromField)]
#[darling(attributes(inspect))]
pub struct FieldInput {
    pub ident: Option<Ident>,
    pub ty: Type,

    /// Name used in paths and markup instead of the identifier.
    #[darling(default)]
    pub rename: Option<String>,

    #[darling(default)]
    pub skip: bool,
}

impl FieldInput {
    /// Name the field is addressed by. `None` only for tuple fields, which
    /// the struct_named restriction rules out.
    pub fn key(&self) -> Option<String> {
        match &self.rename {
            Some(name) => Some(name.clone()),
            None => self.ident.as_ref().map(|i| {
                let name = i.to_string();
                name.strip_prefix("r#").map(str::to_owned).unwrap_or(name)
            }),
        }
    }
}
