//! Router behavior with a scripted picker and a temp-dir settings store.

use std::cell::{Cell, RefCell};
use std::path::PathBuf;
use std::rc::Rc;
use std::sync::Arc;

use chrono::NaiveDate;
use jobrec_dialog::{
    ContextId, DialogError, DialogRouter, FilePicker, FileTypeFilter, Surface, SurfaceRegistry,
};
use jobrec_model::{JobApplication, JobFlexibility, JobInfo, OfferStatus, Salary};
use jobrec_settings::SettingsStore;

#[derive(Debug, Clone, PartialEq, Eq)]
struct TestWindow;

struct TestSurface {
    window: Option<TestWindow>,
}

impl Surface for TestSurface {
    type Window = TestWindow;

    fn root_window(&self) -> Option<TestWindow> {
        self.window.clone()
    }
}

/// Picker that plays back preset results and records the filter it saw.
#[derive(Default)]
struct ScriptedPicker {
    open_result: RefCell<Vec<PathBuf>>,
    save_result: RefCell<Option<PathBuf>>,
    seen_filter: Rc<Cell<Option<&'static str>>>,
}

impl ScriptedPicker {
    fn opening(paths: Vec<PathBuf>) -> Self {
        let picker = Self::default();
        *picker.open_result.borrow_mut() = paths;
        picker
    }

    fn saving(path: PathBuf) -> Self {
        let picker = Self::default();
        *picker.save_result.borrow_mut() = Some(path);
        picker
    }
}

impl FilePicker<TestWindow> for ScriptedPicker {
    fn pick_open(
        &self,
        _parent: &TestWindow,
        _title: &str,
        filter: &FileTypeFilter,
        _select_many: bool,
    ) -> Vec<PathBuf> {
        self.seen_filter.set(Some(filter.name));
        self.open_result.borrow().clone()
    }

    fn pick_save(
        &self,
        _parent: &TestWindow,
        _title: &str,
        _suggested_name: &str,
        filter: &FileTypeFilter,
    ) -> Option<PathBuf> {
        self.seen_filter.set(Some(filter.name));
        self.save_result.borrow().clone()
    }
}

/// One registered context over a live window, plus a temp dir for files.
struct Harness {
    dir: tempfile::TempDir,
    registry: SurfaceRegistry<TestSurface>,
    context: ContextId,
    surface: Arc<TestSurface>,
}

impl Harness {
    fn new() -> Self {
        let dir = tempfile::tempdir().expect("temp dir");
        let mut registry = SurfaceRegistry::new();
        let context = ContextId::next();
        let surface = Arc::new(TestSurface {
            window: Some(TestWindow),
        });
        registry.register(context, &surface);
        Self {
            dir,
            registry,
            context,
            surface,
        }
    }

    fn settings(&self) -> SettingsStore {
        SettingsStore::new(self.dir.path().join("appsettings.json"))
    }

    fn data_path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    fn router(&self, picker: ScriptedPicker) -> DialogRouter<ScriptedPicker> {
        DialogRouter::new(picker, self.settings())
    }
}

fn sample_record(company: &str) -> JobApplication {
    JobApplication::new(JobInfo {
        company_name: company.to_string(),
        job_title: "Engineer".to_string(),
        salary: Salary::range(50_000, 60_000, "$ - USD"),
        job_link: "https://example.com".to_string(),
        job_location: "Amsterdam".to_string(),
        job_flexibility: JobFlexibility::Hybrid,
        date_of_applying: NaiveDate::from_ymd_opt(2026, 5, 5).unwrap(),
        offer_status: OfferStatus::Unknown,
    })
}

#[test]
fn open_existing_returns_selected_file_names() {
    let harness = Harness::new();
    let router = harness.router(ScriptedPicker::opening(vec![
        harness.data_path("JobAppData.json"),
    ]));

    let names = router
        .open_existing(&harness.registry, harness.context, None)
        .expect("open resolves");
    assert_eq!(names, ["JobAppData.json"]);
}

#[test]
fn open_existing_cancel_is_an_empty_result() {
    let harness = Harness::new();
    let router = harness.router(ScriptedPicker::default());

    let names = router
        .open_existing(&harness.registry, harness.context, Some("Open JSON File…"))
        .expect("cancel is not an error");
    assert!(names.is_empty());
}

#[test]
fn unregistered_context_is_a_no_surface_error() {
    let mut harness = Harness::new();
    let router = harness.router(ScriptedPicker::default());
    harness.registry.unregister(harness.context);

    let error = router
        .open_existing(&harness.registry, harness.context, None)
        .unwrap_err();
    assert!(matches!(error, DialogError::NoSurface(_)));
}

#[test]
fn pickers_are_restricted_to_the_json_file_type() {
    let harness = Harness::new();
    let seen = Rc::new(Cell::new(None));
    let picker = ScriptedPicker {
        seen_filter: Rc::clone(&seen),
        ..ScriptedPicker::default()
    };
    let router = harness.router(picker);

    router
        .open_existing(&harness.registry, harness.context, None)
        .expect("open resolves");
    assert_eq!(seen.get(), Some("JSON File"));

    seen.set(None);
    router
        .create_new(&harness.registry, harness.context, None)
        .expect("cancelled create resolves");
    assert_eq!(seen.get(), Some("JSON File"));
}

#[test]
fn create_new_writes_placeholder_then_remembers_path() {
    let harness = Harness::new();
    let target = harness.data_path("fresh.json");
    let router = harness.router(ScriptedPicker::saving(target.clone()));

    let created = router
        .create_new(&harness.registry, harness.context, None)
        .expect("create succeeds");
    assert_eq!(created, Some(target.clone()));

    // Placeholder is structurally valid from creation.
    let file = jobrec_store::read_records(&target).expect("placeholder parses");
    assert!(file.is_empty());

    assert_eq!(harness.settings().load().last_file_path_used, Some(target));
}

#[test]
fn create_new_cancel_leaves_settings_untouched() {
    let harness = Harness::new();
    let router = harness.router(ScriptedPicker::default());

    let created = router
        .create_new(&harness.registry, harness.context, None)
        .expect("cancel is not an error");
    assert_eq!(created, None);
    assert_eq!(harness.settings().load().last_file_path_used, None);
}

#[test]
fn save_without_any_path_is_a_missing_path_error() {
    let harness = Harness::new();
    let router = harness.router(ScriptedPicker::default());

    let error = router
        .save_or_update(
            &harness.registry,
            harness.context,
            sample_record("Acme"),
            None,
            None,
        )
        .unwrap_err();
    assert!(matches!(error, DialogError::MissingPath));
}

#[test]
fn save_appends_to_the_remembered_path() {
    let harness = Harness::new();
    let data = harness.data_path("data.json");
    harness
        .settings()
        .remember_last_file(&data)
        .expect("remember path");
    let router = harness.router(ScriptedPicker::default());

    router
        .save_or_update(
            &harness.registry,
            harness.context,
            sample_record("Acme"),
            None,
            None,
        )
        .expect("append save");
    router
        .save_or_update(
            &harness.registry,
            harness.context,
            sample_record("Globex"),
            None,
            None,
        )
        .expect("append save");

    let file = jobrec_store::read_records(&data).expect("read back");
    assert_eq!(file.len(), 2);
}

#[test]
fn save_with_record_id_replaces_in_place() {
    let harness = Harness::new();
    let data = harness.data_path("data.json");
    let router = harness.router(ScriptedPicker::default());

    let original = sample_record("Acme");
    let id = original.id;
    router
        .save_or_update(
            &harness.registry,
            harness.context,
            original,
            Some(&data),
            None,
        )
        .expect("initial save");

    let mut edited = sample_record("Acme B.V.");
    edited.id = id;
    router
        .save_or_update(
            &harness.registry,
            harness.context,
            edited,
            Some(&data),
            Some(id),
        )
        .expect("edit save");

    let file = jobrec_store::read_records(&data).expect("read back");
    assert_eq!(file.len(), 1);
    assert_eq!(file.applications[0].job.company_name, "Acme B.V.");
}

#[test]
fn dropped_surface_blocks_dialogs() {
    let mut harness = Harness::new();
    let router = harness.router(ScriptedPicker::default());

    // Simulate page teardown without an unregister call: the weak entry
    // goes dead and resolution fails cleanly.
    let torn_down = std::mem::replace(
        &mut harness.surface,
        Arc::new(TestSurface { window: None }),
    );
    drop(torn_down);

    let error = router
        .open_existing(&harness.registry, harness.context, None)
        .unwrap_err();
    assert!(matches!(error, DialogError::NoSurface(_)));
}
