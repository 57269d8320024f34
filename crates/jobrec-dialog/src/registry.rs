//! Context-to-surface registration.
//!
//! A *context* is the opaque identity of a logical form or page; a *surface*
//! is whatever concrete UI element currently represents it. The registry
//! lets dialog code resolve "which window should this dialog appear over"
//! without the business layer ever holding a window reference.
//!
//! The registry is an ordinary value owned by the application's composition
//! root and passed down to whoever needs resolution; there is no process
//! global. It holds weak references only, so it never extends a surface's
//! lifetime, and a torn-down surface simply resolves to `None`.

use std::collections::HashMap;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Weak};

/// Opaque identity of a logical form/page instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContextId(u64);

impl ContextId {
    /// Mint a fresh process-unique context id.
    pub fn next() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(1);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for ContextId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ctx-{}", self.0)
    }
}

/// A concrete UI element capable of anchoring a modal dialog.
pub trait Surface {
    /// The top-level window type dialogs are parented to.
    type Window;

    /// Walk up to the owning top-level window, if the surface is still
    /// attached to one.
    fn root_window(&self) -> Option<Self::Window>;
}

/// At most one surface per context; re-registration replaces silently.
pub struct SurfaceRegistry<S> {
    entries: HashMap<ContextId, Weak<S>>,
}

impl<S> Default for SurfaceRegistry<S> {
    fn default() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }
}

impl<S> SurfaceRegistry<S> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `context` to `surface`. An existing entry for the same context
    /// is replaced, last write wins.
    pub fn register(&mut self, context: ContextId, surface: &Arc<S>) {
        self.entries.insert(context, Arc::downgrade(surface));
        tracing::debug!(%context, "registered surface");
    }

    /// Remove the binding for `context`. The UI lifecycle layer must call
    /// this when the page is torn down.
    pub fn unregister(&mut self, context: ContextId) {
        self.entries.remove(&context);
        tracing::debug!(%context, "unregistered surface");
    }

    /// The surface currently bound to `context`, if it is still alive.
    pub fn resolve_surface(&self, context: ContextId) -> Option<Arc<S>> {
        self.entries.get(&context).and_then(Weak::upgrade)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<S: Surface> SurfaceRegistry<S> {
    /// The top-level window for `context`: `None` if the context was never
    /// registered, the surface is gone, or it has no window right now.
    pub fn resolve_root_window(&self, context: ContextId) -> Option<S::Window> {
        self.resolve_surface(context)
            .and_then(|surface| surface.root_window())
    }
}

impl<S> fmt::Debug for SurfaceRegistry<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SurfaceRegistry")
            .field("entries", &self.entries.keys())
            .finish()
    }
}
