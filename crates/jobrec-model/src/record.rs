//! Persisted record types for one job application file.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::ModelError;
use crate::ids::RecordId;

/// Whether an offer came out of the application.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum OfferStatus {
    Yes,
    No,
    #[default]
    Unknown,
}

/// Work arrangement advertised for the position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum JobFlexibility {
    #[serde(rename = "In-Office")]
    InOffice,
    Hybrid,
    Remote,
}

impl JobFlexibility {
    /// All selectable options, in the order they are offered to the user.
    pub const OPTIONS: [JobFlexibility; 3] = [
        JobFlexibility::InOffice,
        JobFlexibility::Hybrid,
        JobFlexibility::Remote,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            JobFlexibility::InOffice => "In-Office",
            JobFlexibility::Hybrid => "Hybrid",
            JobFlexibility::Remote => "Remote",
        }
    }
}

impl fmt::Display for JobFlexibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for JobFlexibility {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "in-office" | "in office" | "office" => Ok(JobFlexibility::InOffice),
            "hybrid" => Ok(JobFlexibility::Hybrid),
            "remote" => Ok(JobFlexibility::Remote),
            _ => Err(ModelError::UnknownFlexibility(s.to_string())),
        }
    }
}

/// Salary attached to a posting, always stored in whole units of `currency`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Salary {
    pub amount: u64,
    /// Upper bound when the posting advertises a range.
    pub maximum: Option<u64>,
    pub is_range: bool,
    /// Currency choice exactly as selected, e.g. `"$ - USD"`.
    pub currency: String,
}

impl Salary {
    /// A single fixed amount (no advertised range).
    pub fn fixed(amount: u64, currency: impl Into<String>) -> Self {
        Self {
            amount,
            maximum: None,
            is_range: false,
            currency: currency.into(),
        }
    }

    /// A min/max range. Collapses to a fixed amount when both bounds match.
    pub fn range(minimum: u64, maximum: u64, currency: impl Into<String>) -> Self {
        if minimum == maximum {
            return Self::fixed(minimum, currency);
        }
        Self {
            amount: minimum,
            maximum: Some(maximum),
            is_range: true,
            currency: currency.into(),
        }
    }
}

/// Core details of the posting that was applied to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobInfo {
    pub company_name: String,
    pub job_title: String,
    pub salary: Salary,
    pub job_link: String,
    pub job_location: String,
    pub job_flexibility: JobFlexibility,
    pub date_of_applying: NaiveDate,
    #[serde(default)]
    pub offer_status: OfferStatus,
}

/// One interview round attached to an application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Interview {
    pub round: u32,
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub notes: String,
}

/// Free-form notes kept alongside an application.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobNotes {
    #[serde(default)]
    pub general: String,
}

/// One recorded job application, the unit that survives a save.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobApplication {
    pub id: RecordId,
    pub job: JobInfo,
    #[serde(default)]
    pub interviews: Vec<Interview>,
    #[serde(default)]
    pub notes: JobNotes,
}

impl JobApplication {
    /// Wrap job details into a record with a fresh id and no interviews yet.
    pub fn new(job: JobInfo) -> Self {
        Self {
            id: RecordId::new(),
            job,
            interviews: Vec::new(),
            notes: JobNotes::default(),
        }
    }
}

/// Full contents of one data file: a flat list of applications.
///
/// `JobFile::default()` is the placeholder written when a new file is
/// created, so a fresh file is structurally valid JSON (`[]`) from the start.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JobFile {
    pub applications: Vec<JobApplication>,
}

impl JobFile {
    pub fn is_empty(&self) -> bool {
        self.applications.is_empty()
    }

    pub fn len(&self) -> usize {
        self.applications.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record() -> JobApplication {
        JobApplication::new(JobInfo {
            company_name: "Acme".to_string(),
            job_title: "Engineer".to_string(),
            salary: Salary::range(50_000, 60_000, "$ - USD"),
            job_link: "https://example.com/jobs/1".to_string(),
            job_location: "Rotterdam".to_string(),
            job_flexibility: JobFlexibility::Hybrid,
            date_of_applying: NaiveDate::from_ymd_opt(2026, 3, 14).unwrap(),
            offer_status: OfferStatus::Unknown,
        })
    }

    #[test]
    fn record_round_trips_through_json() {
        let record = sample_record();
        let json = serde_json::to_string_pretty(&record).expect("serialize record");
        let back: JobApplication = serde_json::from_str(&json).expect("deserialize record");
        assert_eq!(back, record);
    }

    #[test]
    fn placeholder_file_is_an_empty_array() {
        let json = serde_json::to_string(&JobFile::default()).expect("serialize placeholder");
        assert_eq!(json, "[]");
        let back: JobFile = serde_json::from_str(&json).expect("deserialize placeholder");
        assert!(back.is_empty());
    }

    #[test]
    fn salary_range_collapses_when_bounds_match() {
        let salary = Salary::range(50_000, 50_000, "$ - USD");
        assert!(!salary.is_range);
        assert_eq!(salary.maximum, None);
    }

    #[test]
    fn flexibility_parses_display_form() {
        for option in JobFlexibility::OPTIONS {
            assert_eq!(option.as_str().parse::<JobFlexibility>().unwrap(), option);
        }
        assert!("on-a-boat".parse::<JobFlexibility>().is_err());
    }
}
