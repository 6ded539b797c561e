// src/types/job.rs
//! Job postings and the applications submitted against them

use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

// ===== Job =====

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    pub job_id: i64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub location: String,
    #[serde(deserialize_with = "number_or_string")]
    pub salary: f64,
    pub openings: u32,
    pub is_active: bool,
    #[serde(default)]
    pub skills: Vec<String>,
    // the job service spells it this way
    pub posted_by_recuriter_id: i64,
}

impl Job {
    pub fn salary_label(&self) -> String {
        format!("₹{} P.A", self.salary)
    }

    pub fn openings_label(&self) -> String {
        format!("{} positions", self.openings)
    }

    pub fn status_label(&self) -> &'static str {
        if self.is_active {
            "Open"
        } else {
            "Closed"
        }
    }

    pub fn is_posted_by(&self, user_id: i64) -> bool {
        self.posted_by_recuriter_id == user_id
    }
}

/// Postgres NUMERIC columns come back as strings from some job service builds.
fn number_or_string<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(f64),
        Text(String),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Number(n) => Ok(n),
        Raw::Text(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| serde::de::Error::custom(format!("invalid salary: {}", s))),
    }
}

// ===== Application =====

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ApplicationStatus {
    Submitted,
    Hired,
    Rejected,
}

impl ApplicationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ApplicationStatus::Submitted => "Submitted",
            ApplicationStatus::Hired => "Hired",
            ApplicationStatus::Rejected => "Rejected",
        }
    }
}

impl fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ApplicationStatus {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "Submitted" => Ok(ApplicationStatus::Submitted),
            "Hired" => Ok(ApplicationStatus::Hired),
            "Rejected" => Ok(ApplicationStatus::Rejected),
            other => anyhow::bail!(
                "Unknown application status: '{}'. Use Submitted, Hired or Rejected",
                other
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Application {
    pub application_id: i64,
    pub job_id: i64,
    pub applicant_id: i64,
    #[serde(default)]
    pub applicant_email: Option<String>,
    pub resume: String,
    pub status: ApplicationStatus,
    #[serde(default)]
    pub applied_at: Option<DateTime<Utc>>,
}

impl Application {
    /// Relative link to the applicant's public profile page
    pub fn profile_path(&self) -> String {
        format!("/account/{}", self.applicant_id)
    }
}

// ===== Filtering =====

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(ApplicationStatus),
}

impl StatusFilter {
    pub fn matches(&self, application: &Application) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(status) => application.status == *status,
        }
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusFilter::All => f.write_str("All"),
            StatusFilter::Only(status) => status.fmt(f),
        }
    }
}

impl FromStr for StatusFilter {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "All" | "" => Ok(StatusFilter::All),
            other => Ok(StatusFilter::Only(other.parse()?)),
        }
    }
}
