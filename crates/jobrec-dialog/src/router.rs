//! File dialog routing: resolve a window through the registry, run the
//! picker, and hand the chosen path to the record store.

use std::path::{Path, PathBuf};

use jobrec_model::{JobApplication, RecordId};
use jobrec_settings::{SettingsError, SettingsStore};
use jobrec_store::StoreError;
use thiserror::Error;

use crate::picker::{FilePicker, JSON_FILE_TYPE};
use crate::registry::{ContextId, Surface, SurfaceRegistry};

const DEFAULT_OPEN_TITLE: &str = "Select JSON file";
const DEFAULT_SAVE_TITLE: &str = "Save File as JSON";
const SUGGESTED_FILE_NAME: &str = "JobAppData.json";

#[derive(Debug, Error)]
pub enum DialogError {
    /// A dialog was requested for a context with no resolvable window.
    #[error("no surface registered for {0}")]
    NoSurface(ContextId),
    /// A save was requested with neither an explicit nor a remembered path.
    /// Distinct from the user cancelling a picker.
    #[error("no target path: none given and no last-used path remembered")]
    MissingPath,
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    Settings(#[from] SettingsError),
}

/// Routes open/save/create file dialogs for registered contexts.
///
/// Owns the picker and the settings store; the surface registry stays with
/// the composition root and is borrowed per call so the view layer can keep
/// registering pages on the same instance.
#[derive(Debug)]
pub struct DialogRouter<P> {
    picker: P,
    settings: SettingsStore,
}

impl<P> DialogRouter<P> {
    pub fn new(picker: P, settings: SettingsStore) -> Self {
        Self { picker, settings }
    }

    pub fn settings(&self) -> &SettingsStore {
        &self.settings
    }

    /// Present an open picker over the context's window, restricted to the
    /// JSON file type. Cancellation yields an empty list of file names.
    pub fn open_existing<S>(
        &self,
        registry: &SurfaceRegistry<S>,
        context: ContextId,
        title: Option<&str>,
    ) -> Result<Vec<String>, DialogError>
    where
        S: Surface,
        P: FilePicker<S::Window>,
    {
        let window = self.resolve_window(registry, context)?;
        let selected = self.picker.pick_open(
            &window,
            title.unwrap_or(DEFAULT_OPEN_TITLE),
            &JSON_FILE_TYPE,
            false,
        );
        Ok(selected.into_iter().map(|path| file_name_of(&path)).collect())
    }

    /// Present a save picker and create a fresh data file at the chosen
    /// path. The placeholder write happens first; only after it succeeds is
    /// the path persisted as last-used. Cancellation returns `Ok(None)` and
    /// leaves settings untouched.
    pub fn create_new<S>(
        &self,
        registry: &SurfaceRegistry<S>,
        context: ContextId,
        title: Option<&str>,
    ) -> Result<Option<PathBuf>, DialogError>
    where
        S: Surface,
        P: FilePicker<S::Window>,
    {
        let window = self.resolve_window(registry, context)?;
        let Some(path) = self.picker.pick_save(
            &window,
            title.unwrap_or(DEFAULT_SAVE_TITLE),
            SUGGESTED_FILE_NAME,
            &JSON_FILE_TYPE,
        ) else {
            tracing::debug!(%context, "create dialog cancelled");
            return Ok(None);
        };

        jobrec_store::write_placeholder(&path)?;
        self.settings.remember_last_file(&path)?;
        tracing::info!(%context, path = %path.display(), "created new data file");
        Ok(Some(path))
    }

    /// Save `record` into the resolved data file: `explicit_path` if given,
    /// the remembered last-used path otherwise. Without `record_id` the
    /// record is appended; with it, the existing record is replaced in place.
    pub fn save_or_update<S>(
        &self,
        registry: &SurfaceRegistry<S>,
        context: ContextId,
        record: JobApplication,
        explicit_path: Option<&Path>,
        record_id: Option<RecordId>,
    ) -> Result<(), DialogError>
    where
        S: Surface,
        P: FilePicker<S::Window>,
    {
        self.resolve_window(registry, context)?;
        let path = match explicit_path {
            Some(path) => path.to_path_buf(),
            None => self
                .settings
                .load()
                .last_file_path_used
                .ok_or(DialogError::MissingPath)?,
        };

        match record_id {
            None => jobrec_store::append_record(&path, record)?,
            Some(id) => jobrec_store::replace_record(&path, id, record)?,
        }
        tracing::info!(%context, path = %path.display(), "saved record");
        Ok(())
    }

    fn resolve_window<S: Surface>(
        &self,
        registry: &SurfaceRegistry<S>,
        context: ContextId,
    ) -> Result<S::Window, DialogError> {
        registry
            .resolve_root_window(context)
            .ok_or(DialogError::NoSurface(context))
    }
}

fn file_name_of(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
