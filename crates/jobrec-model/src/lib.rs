//! Data model for the job application recorder.
//!
//! Everything that is persisted to a user-chosen data file lives here:
//! application records, salary details, interview rounds, and the currency
//! reference entries the form validates against.

pub mod currency;
pub mod error;
pub mod ids;
pub mod record;

pub use currency::Currency;
pub use error::{ModelError, Result};
pub use ids::RecordId;
pub use record::{
    Interview, JobApplication, JobFile, JobFlexibility, JobInfo, JobNotes, OfferStatus, Salary,
};
