//! Reactive form validation for the job application recorder.
//!
//! The [`ErrorLedger`] is the source of truth for form validity; field
//! validators on [`JobAppForm`] write into it on every mutation, and the
//! [`normalize_number_input`] transform canonicalizes salary input before
//! validation runs.

pub mod currency;
pub mod form;
pub mod ledger;
pub mod normalize;

pub use currency::{CurrencyError, load_currencies, load_currency_choices_or_empty};
pub use form::{FormError, JobAppForm};
pub use ledger::{ErrorLedger, ErrorsChanged, Field, ValidationError};
pub use normalize::normalize_number_input;
