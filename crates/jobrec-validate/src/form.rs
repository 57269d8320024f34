//! Form state and field validators for the "add application" form.
//!
//! Each setter stores the new raw value and immediately re-runs the
//! validator for that field; the two salary fields additionally re-run
//! their pair so the cross-field range rule can never go stale. Validators
//! write only to the ledger and never fail themselves.

use chrono::NaiveDate;
use jobrec_model::{JobApplication, JobFlexibility, JobInfo, ModelError, OfferStatus, Salary};
use thiserror::Error;

use crate::ledger::{ErrorLedger, ErrorsChanged, Field};
use crate::normalize::normalize_number_input;

pub const MSG_REQUIRED: &str = "This field is required.";
pub const MSG_CURRENCY_TOO_LONG: &str = "Input is too long, remove excess whitespace.";
pub const MSG_CURRENCY_UNKNOWN: &str = "Currency isn't present in system.";
pub const MSG_SALARY_RANGE: &str = "The minimum salary cannot be higher than the maximum.";
pub const MSG_SALARY_NOT_NUMERIC: &str =
    "Detected non-numerical inputs, please only enter numbers.";
pub const MSG_DATE_REQUIRED: &str = "No date of applying to job given. Please select one.";

/// Longest accepted currency selection, matching the `"$ - USD"` display form.
const CURRENCY_MAX_LEN: usize = 8;

/// The form could not be turned into a record.
#[derive(Debug, Error)]
pub enum FormError {
    #[error("form has active validation errors")]
    Invalid,
    #[error("salary does not fit in a whole number: {0}")]
    SalaryOutOfRange(String),
    #[error(transparent)]
    Model(#[from] ModelError),
}

/// Raw state of one application being edited, plus its error ledger.
///
/// A freshly constructed form is fully validated once, so an empty form
/// starts out invalid with every required field flagged.
#[derive(Debug)]
pub struct JobAppForm {
    company_name: String,
    job_title: String,
    job_url: String,
    job_location: String,
    min_salary: String,
    max_salary: String,
    currency: String,
    job_flexibility: String,
    application_date: Option<NaiveDate>,
    general_notes: String,
    currencies: Vec<String>,
    ledger: ErrorLedger,
}

impl JobAppForm {
    /// Build an empty form validating against the given currency choices.
    pub fn new(currencies: Vec<String>) -> Self {
        let mut form = Self {
            company_name: String::new(),
            job_title: String::new(),
            job_url: String::new(),
            job_location: String::new(),
            min_salary: String::new(),
            max_salary: String::new(),
            currency: String::new(),
            job_flexibility: String::new(),
            application_date: None,
            general_notes: String::new(),
            currencies,
            ledger: ErrorLedger::new(),
        };
        form.validate_all();
        form
    }

    // --- field setters, each re-validating deterministically ---

    pub fn set_company_name(&mut self, value: &str) {
        self.company_name = value.to_string();
        self.validate_company_name();
    }

    pub fn set_job_title(&mut self, value: &str) {
        self.job_title = value.to_string();
        self.validate_job_title();
    }

    pub fn set_job_url(&mut self, value: &str) {
        self.job_url = value.to_string();
        self.validate_job_url();
    }

    pub fn set_job_location(&mut self, value: &str) {
        self.job_location = value.to_string();
        self.validate_job_location();
    }

    /// Salary input is normalized before it is stored, so the form always
    /// holds the canonical digits-only value.
    pub fn set_min_salary(&mut self, raw: &str) {
        self.min_salary = normalize_number_input(raw);
        self.validate_min_salary();
        self.validate_max_salary();
    }

    pub fn set_max_salary(&mut self, raw: &str) {
        self.max_salary = normalize_number_input(raw);
        self.validate_max_salary();
        self.validate_min_salary();
    }

    pub fn set_currency(&mut self, value: &str) {
        self.currency = value.to_string();
        self.validate_currency();
    }

    pub fn set_job_flexibility(&mut self, value: &str) {
        self.job_flexibility = value.to_string();
        self.validate_job_flexibility();
    }

    pub fn set_application_date(&mut self, value: Option<NaiveDate>) {
        self.application_date = value;
        self.validate_application_date();
    }

    /// Notes are free-form and never validated.
    pub fn set_general_notes(&mut self, value: &str) {
        self.general_notes = value.to_string();
    }

    /// Replace the currency choices wholesale (reference data reload) and
    /// re-check the current selection against the new list.
    pub fn set_currencies(&mut self, currencies: Vec<String>) {
        self.currencies = currencies;
        self.validate_currency();
    }

    // --- accessors ---

    pub fn company_name(&self) -> &str {
        &self.company_name
    }

    pub fn job_title(&self) -> &str {
        &self.job_title
    }

    pub fn job_url(&self) -> &str {
        &self.job_url
    }

    pub fn job_location(&self) -> &str {
        &self.job_location
    }

    /// The normalized (digits-only) minimum salary as it should be displayed.
    pub fn min_salary(&self) -> &str {
        &self.min_salary
    }

    pub fn max_salary(&self) -> &str {
        &self.max_salary
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }

    pub fn job_flexibility(&self) -> &str {
        &self.job_flexibility
    }

    pub fn application_date(&self) -> Option<NaiveDate> {
        self.application_date
    }

    pub fn general_notes(&self) -> &str {
        &self.general_notes
    }

    pub fn currencies(&self) -> &[String] {
        &self.currencies
    }

    pub fn ledger(&self) -> &ErrorLedger {
        &self.ledger
    }

    /// Subscribe to ledger changes (inline error displays, submit gating).
    pub fn subscribe_errors(&mut self, listener: impl FnMut(ErrorsChanged) + 'static) {
        self.ledger.subscribe(listener);
    }

    /// Sole gate for enabling submission.
    pub fn is_valid(&self) -> bool {
        !self.ledger.has_errors()
    }

    // --- validators, fixed precedence, first failure wins ---

    pub fn validate_all(&mut self) {
        self.validate_company_name();
        self.validate_job_title();
        self.validate_job_url();
        self.validate_job_location();
        self.validate_min_salary();
        self.validate_max_salary();
        self.validate_currency();
        self.validate_job_flexibility();
        self.validate_application_date();
    }

    pub fn validate_company_name(&mut self) {
        self.ledger.clear(Field::CompanyName);
        if self.company_name.trim().is_empty() {
            self.ledger.add_error(Field::CompanyName, MSG_REQUIRED);
        }
    }

    pub fn validate_job_title(&mut self) {
        self.ledger.clear(Field::JobTitle);
        if self.job_title.trim().is_empty() {
            self.ledger.add_error(Field::JobTitle, MSG_REQUIRED);
        }
    }

    pub fn validate_job_url(&mut self) {
        self.ledger.clear(Field::JobUrl);
        if self.job_url.trim().is_empty() {
            self.ledger.add_error(Field::JobUrl, MSG_REQUIRED);
        }
    }

    pub fn validate_job_location(&mut self) {
        self.ledger.clear(Field::JobLocation);
        if self.job_location.trim().is_empty() {
            self.ledger.add_error(Field::JobLocation, MSG_REQUIRED);
        }
    }

    pub fn validate_currency(&mut self) {
        self.ledger.clear(Field::Currency);
        if self.currency.trim().is_empty() {
            self.ledger.add_error(Field::Currency, MSG_REQUIRED);
        } else if self.currency.chars().count() > CURRENCY_MAX_LEN {
            self.ledger.add_error(Field::Currency, MSG_CURRENCY_TOO_LONG);
        } else if !self.currencies.contains(&self.currency) {
            self.ledger.add_error(Field::Currency, MSG_CURRENCY_UNKNOWN);
        }
    }

    pub fn validate_job_flexibility(&mut self) {
        self.ledger.clear(Field::JobFlexibility);
        if self.job_flexibility.is_empty() {
            self.ledger.add_error(Field::JobFlexibility, MSG_REQUIRED);
        }
    }

    /// When both bounds parse, only the paired range rule applies; otherwise
    /// the field falls through to its individual required/format checks.
    pub fn validate_min_salary(&mut self) {
        self.ledger.clear(Field::MinSalary);
        if let (Some(min), Some(max)) =
            (parse_salary(&self.min_salary), parse_salary(&self.max_salary))
        {
            if min > max {
                self.ledger.add_error(Field::MinSalary, MSG_SALARY_RANGE);
            }
            return;
        }
        if self.min_salary.trim().is_empty() {
            self.ledger.add_error(Field::MinSalary, MSG_REQUIRED);
        } else if !is_digits_only(&self.min_salary) {
            self.ledger.add_error(Field::MinSalary, MSG_SALARY_NOT_NUMERIC);
        }
    }

    pub fn validate_max_salary(&mut self) {
        self.ledger.clear(Field::MaxSalary);
        if let (Some(min), Some(max)) =
            (parse_salary(&self.min_salary), parse_salary(&self.max_salary))
        {
            if max < min {
                self.ledger.add_error(Field::MaxSalary, MSG_SALARY_RANGE);
            }
            return;
        }
        if self.max_salary.trim().is_empty() {
            self.ledger.add_error(Field::MaxSalary, MSG_REQUIRED);
        } else if !is_digits_only(&self.max_salary) {
            self.ledger.add_error(Field::MaxSalary, MSG_SALARY_NOT_NUMERIC);
        }
    }

    pub fn validate_application_date(&mut self) {
        self.ledger.clear(Field::ApplicationDate);
        if self.application_date.is_none() {
            self.ledger.add_error(Field::ApplicationDate, MSG_DATE_REQUIRED);
        }
    }

    /// Turn a fully valid form into a persistable record.
    pub fn to_record(&self) -> Result<JobApplication, FormError> {
        if self.ledger.has_errors() {
            return Err(FormError::Invalid);
        }
        let minimum = parse_salary(&self.min_salary)
            .ok_or_else(|| FormError::SalaryOutOfRange(self.min_salary.clone()))?;
        let maximum = parse_salary(&self.max_salary)
            .ok_or_else(|| FormError::SalaryOutOfRange(self.max_salary.clone()))?;
        let flexibility: JobFlexibility = self.job_flexibility.parse()?;
        let date = self.application_date.ok_or(FormError::Invalid)?;

        let mut record = JobApplication::new(JobInfo {
            company_name: self.company_name.trim().to_string(),
            job_title: self.job_title.trim().to_string(),
            salary: Salary::range(minimum, maximum, self.currency.clone()),
            job_link: self.job_url.trim().to_string(),
            job_location: self.job_location.trim().to_string(),
            job_flexibility: flexibility,
            date_of_applying: date,
            offer_status: OfferStatus::Unknown,
        });
        record.notes.general = self.general_notes.trim().to_string();
        Ok(record)
    }
}

fn parse_salary(value: &str) -> Option<u64> {
    value.parse::<u64>().ok()
}

fn is_digits_only(value: &str) -> bool {
    value.chars().all(|c| c.is_ascii_digit())
}
