//! Per-field error ledger backing form validity.
//!
//! The ledger is the single source of truth for "is this form valid": a
//! field is present in the map only while it has at least one active error,
//! so `has_errors` is simply "the map is non-empty". Listeners are plain
//! callbacks registered up front; every mutation notifies them synchronously
//! before the call returns.

use std::collections::BTreeMap;
use std::fmt;

/// A validated input field on the application form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    CompanyName,
    JobTitle,
    JobUrl,
    JobLocation,
    JobFlexibility,
    MinSalary,
    MaxSalary,
    Currency,
    ApplicationDate,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::CompanyName => "companyName",
            Field::JobTitle => "jobTitle",
            Field::JobUrl => "jobUrl",
            Field::JobLocation => "jobLocation",
            Field::JobFlexibility => "jobFlexibility",
            Field::MinSalary => "minSalary",
            Field::MaxSalary => "maxSalary",
            Field::Currency => "currency",
            Field::ApplicationDate => "applicationDate",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One active validation failure. Immutable once recorded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub field: Field,
    pub message: String,
}

/// Notification payload sent to ledger listeners after every mutation.
///
/// `field` is `None` for entity-level resets (`clear_all`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ErrorsChanged {
    pub field: Option<Field>,
    pub has_errors: bool,
}

type Listener = Box<dyn FnMut(ErrorsChanged)>;

/// Ordered per-field error collection.
///
/// Invariant: a key is present iff its error list is non-empty; insertion
/// order within a field is display order.
#[derive(Default)]
pub struct ErrorLedger {
    errors: BTreeMap<Field, Vec<ValidationError>>,
    listeners: Vec<Listener>,
}

impl ErrorLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribe to error-set changes. Listeners run synchronously inside
    /// every mutating call, after the ledger state has been updated.
    pub fn subscribe(&mut self, listener: impl FnMut(ErrorsChanged) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Record a failure for `field`, appending after any earlier failures.
    pub fn add_error(&mut self, field: Field, message: impl Into<String>) {
        self.errors.entry(field).or_default().push(ValidationError {
            field,
            message: message.into(),
        });
        self.notify(Some(field));
    }

    /// Drop every error recorded for `field`. No-op notification still fires
    /// so listeners can refresh inline error displays.
    pub fn clear(&mut self, field: Field) {
        self.errors.remove(&field);
        self.notify(Some(field));
    }

    /// Entity-level reset: drop all errors for all fields.
    pub fn clear_all(&mut self) {
        self.errors.clear();
        self.notify(None);
    }

    /// Errors currently recorded for one field, in insertion order.
    pub fn errors(&self, field: Field) -> &[ValidationError] {
        self.errors.get(&field).map_or(&[], Vec::as_slice)
    }

    /// Union of all errors across all fields (entity-level view).
    pub fn all_errors(&self) -> Vec<&ValidationError> {
        self.errors.values().flatten().collect()
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    fn notify(&mut self, field: Option<Field>) {
        let event = ErrorsChanged {
            field,
            has_errors: !self.errors.is_empty(),
        };
        for listener in &mut self.listeners {
            listener(event);
        }
    }
}

impl fmt::Debug for ErrorLedger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ErrorLedger")
            .field("errors", &self.errors)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
