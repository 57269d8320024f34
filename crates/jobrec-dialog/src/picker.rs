//! File picker abstraction and the `rfd`-backed native implementation.

use std::path::PathBuf;

use raw_window_handle::{HasDisplayHandle, HasWindowHandle};

/// File type descriptor applied to every picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileTypeFilter {
    pub name: &'static str,
    pub extensions: &'static [&'static str],
    /// Kept for backends that filter by MIME instead of extension.
    pub mime: &'static str,
}

/// The single file type the recorder reads and writes.
pub const JSON_FILE_TYPE: FileTypeFilter = FileTypeFilter {
    name: "JSON File",
    extensions: &["json"],
    mime: "application/json",
};

/// Platform file-picker seam, generic over the window type used as the
/// dialog anchor. The native implementation blocks until the user acts;
/// tests substitute a scripted picker.
pub trait FilePicker<W> {
    /// Present an open picker. Cancellation yields an empty list, never an
    /// error. At most one path is returned unless `select_many` is set.
    fn pick_open(
        &self,
        parent: &W,
        title: &str,
        filter: &FileTypeFilter,
        select_many: bool,
    ) -> Vec<PathBuf>;

    /// Present a save picker. Cancellation yields `None`.
    fn pick_save(
        &self,
        parent: &W,
        title: &str,
        suggested_name: &str,
        filter: &FileTypeFilter,
    ) -> Option<PathBuf>;
}

/// Native picker backed by `rfd`, parented to the resolved root window.
#[derive(Debug, Clone, Copy, Default)]
pub struct NativeFilePicker;

impl NativeFilePicker {
    fn dialog<W>(parent: &W, title: &str, filter: &FileTypeFilter) -> rfd::FileDialog
    where
        W: HasWindowHandle + HasDisplayHandle,
    {
        rfd::FileDialog::new()
            .set_title(title)
            .add_filter(filter.name, filter.extensions)
            .set_parent(parent)
    }
}

impl<W> FilePicker<W> for NativeFilePicker
where
    W: HasWindowHandle + HasDisplayHandle,
{
    fn pick_open(
        &self,
        parent: &W,
        title: &str,
        filter: &FileTypeFilter,
        select_many: bool,
    ) -> Vec<PathBuf> {
        let dialog = Self::dialog(parent, title, filter);
        if select_many {
            dialog.pick_files().unwrap_or_default()
        } else {
            dialog.pick_file().into_iter().collect()
        }
    }

    fn pick_save(
        &self,
        parent: &W,
        title: &str,
        suggested_name: &str,
        filter: &FileTypeFilter,
    ) -> Option<PathBuf> {
        Self::dialog(parent, title, filter)
            .set_file_name(suggested_name)
            .save_file()
    }
}
