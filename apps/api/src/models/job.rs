use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::recommendation::normalize::normalize_skill;

pub const UNTITLED_POSITION: &str = "Untitled position";
pub const UNKNOWN_COMPANY: &str = "Unknown company";
pub const UNKNOWN_LOCATION: &str = "Unknown location";
pub const NO_DESCRIPTION: &str = "No description available.";

/// A job posting eligible for matching. Only `required_skills` drives the score;
/// every other field is carried through to the caller untouched.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct JobPosting {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub company_name: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub required_skills: Vec<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub job_type: Option<String>,
    #[serde(default)]
    pub posted_at: Option<DateTime<Utc>>,
}

/// Raw row from the `jobs` table.
#[derive(Debug, Clone, FromRow)]
pub struct JobRow {
    pub id: String,
    pub job_title: Option<String>,
    pub company_name: Option<String>,
    pub location: Option<String>,
    pub job_description: Option<String>,
    pub skills_required: Option<Vec<String>>,
    pub category: Option<String>,
    pub job_type: Option<String>,
    pub posted_at: Option<DateTime<Utc>>,
}

impl From<JobRow> for JobPosting {
    /// Fills missing display fields with placeholders and normalizes required skills.
    fn from(row: JobRow) -> Self {
        JobPosting {
            id: row.id,
            title: non_blank_or(row.job_title, UNTITLED_POSITION),
            company_name: non_blank_or(row.company_name, UNKNOWN_COMPANY),
            location: non_blank_or(row.location, UNKNOWN_LOCATION),
            description: non_blank_or(row.job_description, NO_DESCRIPTION),
            required_skills: row
                .skills_required
                .unwrap_or_default()
                .iter()
                .map(|s| normalize_skill(s))
                .collect(),
            category: row.category,
            job_type: row.job_type,
            posted_at: row.posted_at,
        }
    }
}

fn non_blank_or(value: Option<String>, fallback: &str) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v,
        _ => fallback.to_string(),
    }
}
