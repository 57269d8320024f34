//! Surface registration and file-dialog routing.
//!
//! Pages register themselves in a [`SurfaceRegistry`] under their context
//! id; the [`DialogRouter`] resolves a root window through the registry and
//! drives native file pickers without the business layer knowing about
//! windows. No two dialog operations should run concurrently for the same
//! context; the caller must not fire a second dialog before the first
//! resolves.

pub mod picker;
pub mod registry;
pub mod router;

pub use picker::{FilePicker, FileTypeFilter, JSON_FILE_TYPE, NativeFilePicker};
pub use registry::{ContextId, Surface, SurfaceRegistry};
pub use router::{DialogError, DialogRouter};
