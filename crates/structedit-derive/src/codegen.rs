//! Code generation for the Inspect derive.

use std::collections::HashSet;

use darling::FromDeriveInput;
use proc_macro2::TokenStream;
use quote::quote;
use syn::DeriveInput;

use crate::parse::{FieldInput, RecordInput};

pub fn expand(input: &DeriveInput) -> syn::Result<TokenStream> {
    let parsed = RecordInput::from_derive_input(input)
        .map_err(|e| syn::Error::new_spanned(input, e.to_string()))?;
    let fields = parsed.included_fields();
    let keys = validate_keys(&fields)?;
    generate(&parsed, &fields, &keys)
}

/// Resolve each field's key and reject keys a path cannot address.
fn validate_keys(fields: &[&FieldInput]) -> syn::Result<Vec<String>> {
    let mut seen = HashSet::new();
    let mut keys = Vec::with_capacity(fields.len());
    for field in fields {
        let key = field
            .key()
            .ok_or_else(|| syn::Error::new_spanned(&field.ty, "named field required"))?;
        let span_source = match &field.ident {
            Some(ident) => quote!(#ident),
            None => {
                let ty = &field.ty;
                quote!(#ty)
            }
        };
        if key.is_empty() || key.contains('.') || key.starts_with(|c: char| c.is_ascii_digit()) {
            return Err(syn::Error::new_spanned(
                span_source,
                format!(
                    "field name '{}' cannot be addressed by a path: it must be non-empty, \
                     contain no '.', and not start with a digit",
                    key
                ),
            ));
        }
        if !seen.insert(key.clone()) {
            return Err(syn::Error::new_spanned(
                span_source,
                format!("duplicate field name '{}'", key),
            ));
        }
        keys.push(key);
    }
    Ok(keys)
}

fn generate(input: &RecordInput, fields: &[&FieldInput], keys: &[String]) -> syn::Result<TokenStream> {
    let ident = &input.ident;
    let label = ident.to_string();
    let members: Vec<_> = fields.iter().filter_map(|f| f.ident.as_ref()).collect();

    let mut generics = input.generics.clone();
    if !generics.params.is_empty() {
        let where_clause = generics.make_where_clause();
        for field in fields {
            let ty = &field.ty;
            where_clause
                .predicates
                .push(syn::parse_quote!(#ty: ::structedit::Inspect));
        }
    }
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics ::structedit::Inspect for #ident #ty_generics #where_clause {
            fn kind(&self) -> ::structedit::Kind {
                ::structedit::Kind::Record
            }

            fn static_label() -> ::std::borrow::Cow<'static, str> {
                ::std::borrow::Cow::Borrowed(#label)
            }

            fn type_label(&self) -> ::std::borrow::Cow<'static, str> {
                ::std::borrow::Cow::Borrowed(#label)
            }

            fn field_names(&self) -> &[&'static str] {
                &[#(#keys),*]
            }

            fn field(&self, name: &str) -> ::std::option::Option<&dyn ::structedit::Inspect> {
                match name {
                    #(#keys => ::std::option::Option::Some(&self.#members as &dyn ::structedit::Inspect),)*
                    _ => ::std::option::Option::None,
                }
            }

            fn field_mut(&mut self, name: &str) -> ::std::option::Option<&mut dyn ::structedit::Inspect> {
                match name {
                    #(#keys => ::std::option::Option::Some(&mut self.#members as &mut dyn ::structedit::Inspect),)*
                    _ => ::std::option::Option::None,
                }
            }
        }
    })
}
