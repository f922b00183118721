//! The facade tying locator, operators and renderer to one held value.

use std::sync::Arc;

use parking_lot::Mutex;
use tracing::debug;

use crate::chrome::wrap_content;
use crate::error::Result;
use crate::inspect::{Inspect, Kind};
use crate::locate::locate_mut;
use crate::op::Operator;
use crate::path::Path;
use crate::render::{Rendered, Renderer};

/// Holds one value and serves views of it and mutations on it.
///
/// The view is editable when `T` is a reference kind (`Box<_>`, `&mut _`,
/// `Option<_>`); see [`Renderer::for_root`].
#[derive(Debug, Clone)]
pub struct Editor<T> {
    state: T,
    mutate_url: String,
}

impl<T: Inspect> Editor<T> {
    pub fn new(state: T, mutate_url: impl Into<String>) -> Self {
        Self {
            state,
            mutate_url: mutate_url.into(),
        }
    }

    /// Full HTML page for the held value.
    pub fn render(&self) -> Result<String> {
        let rendered = self.render_tree()?;
        Ok(wrap_content(&rendered.markup, &self.mutate_url))
    }

    /// Markup and leaf bindings without the page around them.
    pub fn render_tree(&self) -> Result<Rendered> {
        Renderer::for_root(&self.state).render(&self.state)
    }

    /// Parse `path` and apply `operator` at the location it addresses.
    pub fn mutate<O: Operator + ?Sized>(&mut self, path: &str, operator: &O) -> Result<()> {
        let path = Path::parse(path)?;
        self.mutate_path(&path, operator)
    }

    pub fn mutate_path<O: Operator + ?Sized>(&mut self, path: &Path, operator: &O) -> Result<()> {
        debug!(%path, operator = operator.name(), "mutate");
        let target = locate_mut(&mut self.state, path, operator.wants_reference())?;
        operator.apply(target)
    }

    pub fn is_editable(&self) -> bool {
        self.state.kind() == Kind::Reference
    }

    pub fn mutate_url(&self) -> &str {
        &self.mutate_url
    }

    pub fn state(&self) -> &T {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut T {
        &mut self.state
    }

    pub fn into_inner(self) -> T {
        self.state
    }
}

/// An [`Editor`] behind a lock, shareable across threads.
///
/// Each call holds the lock for its whole duration, so a render never sees
/// a half-applied mutation.
#[derive(Debug)]
pub struct SharedEditor<T> {
    inner: Arc<Mutex<Editor<T>>>,
}

impl<T> Clone for SharedEditor<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: Inspect> SharedEditor<T> {
    pub fn new(editor: Editor<T>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(editor)),
        }
    }

    pub fn render(&self) -> Result<String> {
        self.inner.lock().render()
    }

    pub fn render_tree(&self) -> Result<Rendered> {
        self.inner.lock().render_tree()
    }

    pub fn mutate<O: Operator + ?Sized>(&self, path: &str, operator: &O) -> Result<()> {
        self.inner.lock().mutate(path, operator)
    }

    pub fn is_editable(&self) -> bool {
        self.inner.lock().is_editable()
    }

    /// Run `f` with the held value under the lock.
    ///
    /// The lock is not reentrant: calling any method of this editor (or a
    /// clone of it) from inside `f` deadlocks.
    pub fn with_state<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        f(self.inner.lock().state_mut())
    }
}

impl<T: Inspect> From<Editor<T>> for SharedEditor<T> {
    fn from(editor: Editor<T>) -> Self {
        Self::new(editor)
    }
}
