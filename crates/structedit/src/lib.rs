//! View and edit nested in-memory values through dotted paths.
//!
//! A value whose type implements [`Inspect`] (derived for structs, provided
//! for std scalars, `String`, `Vec`, arrays, `Option`, `Box` and `&mut`) can
//! be rendered to HTML and mutated at a location addressed by a [`Path`]
//! such as `customers.1.balance`.
//!
//! # Example
//!
//! ```
//! use structedit::{Editor, Inspect, Op};
//!
//! #[derive(Inspect, Default)]
//! struct Employee {
//!     name: String,
//!     age: u32,
//! }
//!
//! #[derive(Inspect)]
//! struct Company {
//!     employees: Vec<Employee>,
//! }
//!
//! let company = Company {
//!     employees: vec![Employee { name: "Bob".into(), age: 40 }],
//! };
//!
//! // Boxed roots render with the paths the editor accepts back.
//! let mut editor = Editor::new(Box::new(company), "/mutate");
//! editor.mutate("employees.0.age", &Op::set("41")).unwrap();
//! editor.mutate("employees", &Op::Grow).unwrap();
//!
//! assert_eq!(editor.state().employees[0].age, 41);
//! assert_eq!(editor.state().employees.len(), 2);
//!
//! let tree = editor.render_tree().unwrap();
//! assert!(tree.editable);
//! assert_eq!(tree.fields[1].value, "41");
//! ```

pub mod chrome;
pub mod editor;
pub mod error;
mod impls;
pub mod inspect;
pub mod locate;
pub mod op;
pub mod path;
pub mod render;
mod scalar;

pub use chrome::wrap_content;
pub use editor::{Editor, SharedEditor};
pub use error::{EditError, Result};
pub use inspect::{Inspect, Kind};
pub use locate::{locate, locate_mut};
pub use op::{Op, Operator};
pub use path::{Path, Segment};
pub use render::{FieldBinding, Rendered, Renderer};

/// `#[derive(Inspect)]` for structs with named fields.
///
/// Field attributes: `#[inspect(rename = "...")]` changes the name used in
/// paths and markup, `#[inspect(skip)]` hides a field.
///
/// `Vec<T>` is only [`Inspect`](trait@Inspect) when `T: Default`, since
/// `grow` appends `T::default()`. A record held in a `Vec` therefore needs
/// `Default` even to be viewed:
///
/// ```compile_fail
/// use structedit::Inspect;
///
/// #[derive(Inspect)]
/// struct Tag {
///     label: String,
/// }
///
/// #[derive(Inspect)]
/// struct Post {
///     tags: Vec<Tag>,
/// }
/// ```
///
/// Fixed-length arrays have no such requirement.
pub use structedit_derive::Inspect;
