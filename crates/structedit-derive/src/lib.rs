//! Derive macro for `structedit::Inspect`.
//!
//! Generates an implementation that exposes a struct as a record: fields are
//! reachable by name in declaration order and the struct name is the type
//! label.
//!
//! ```ignore
//! use structedit::Inspect;
//!
//! #[derive(Inspect)]
//! struct Customer {
//!     name: String,
//!     #[inspect(rename = "Balance")]
//!     balance: f64,
//!     #[inspect(skip)]
//!     cache: Vec<u8>,
//! }
//! ```

use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput};

mod codegen;
mod parse;

/// Derive `Inspect` for a struct with named fields.
///
/// # Field attributes
///
/// - `#[inspect(rename = "name")]`: address the field by another name. The
///   name must not contain `.` or start with a digit.
/// - `#[inspect(skip)]`: leave the field out of paths and rendering. Its
///   type does not need to implement `Inspect`.
#[proc_macro_derive(Inspect, attributes(inspect))]
pub fn derive_inspect(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match codegen::expand(&input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}
