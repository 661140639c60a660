//! Display shaping for ranked results. The ranker hands back jobs untouched; this
//! is where descriptions are clipped and scores bucketed for the UI.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::recommendation::ranker::{RankOutcome, Recommendation};

pub const EXCERPT_CHARS: usize = 180;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchBand {
    Strong,   // ≥ 0.75
    Moderate, // 0.50 – 0.74
    Weak,     // below 0.50
}

impl MatchBand {
    pub fn from_score(score: f64) -> Self {
        if score >= 0.75 {
            MatchBand::Strong
        } else if score >= 0.50 {
            MatchBand::Moderate
        } else {
            MatchBand::Weak
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationView {
    pub id: String,
    pub title: String,
    pub company_name: String,
    pub location: String,
    pub description_excerpt: String,
    pub category: Option<String>,
    pub job_type: Option<String>,
    pub posted_at: Option<DateTime<Utc>>,
    pub similarity_score: f64,
    pub match_percent: u32,
    pub match_band: MatchBand,
    pub is_bookmarked: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationResponse {
    pub status: String,
    pub message: String,
    pub recommendations: Vec<RecommendationView>,
}

/// Builds the response body for a ranking outcome.
pub fn build_response(outcome: RankOutcome, bookmarked: &HashSet<String>) -> RecommendationResponse {
    let status = outcome.status().to_string();
    let message = outcome_message(&outcome);
    let recommendations = outcome
        .into_recommendations()
        .into_iter()
        .map(|rec| to_view(rec, bookmarked))
        .collect();

    RecommendationResponse {
        status,
        message,
        recommendations,
    }
}

fn to_view(rec: Recommendation, bookmarked: &HashSet<String>) -> RecommendationView {
    let score = rec.similarity_score;
    let job = rec.job;
    RecommendationView {
        is_bookmarked: bookmarked.contains(&job.id),
        description_excerpt: excerpt(&job.description, EXCERPT_CHARS),
        id: job.id,
        title: job.title,
        company_name: job.company_name,
        location: job.location,
        category: job.category,
        job_type: job.job_type,
        posted_at: job.posted_at,
        similarity_score: score,
        match_percent: (score * 100.0).round() as u32,
        match_band: MatchBand::from_score(score),
    }
}

/// First `max_chars` characters of `text`, with "..." appended only when clipped.
fn excerpt(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => format!("{}...", &text[..byte_idx]),
        None => text.to_string(),
    }
}

fn outcome_message(outcome: &RankOutcome) -> String {
    match outcome {
        RankOutcome::Matches(recs) => format!(
            "Found {} job{} matching your skills.",
            recs.len(),
            if recs.len() == 1 { "" } else { "s" }
        ),
        RankOutcome::NoSkillsDeclared => {
            "You have not added any skills yet. Add skills to your profile to get recommendations."
                .to_string()
        }
        RankOutcome::NoCandidateJobs => {
            "No job postings are available for matching right now. Please try again later."
                .to_string()
        }
        RankOutcome::EmptyVocabulary => {
            "None of your skills can be matched against the current job postings.".to_string()
        }
        RankOutcome::NoMatchesAboveThreshold => {
            "No recommended jobs were found for your current skills. Try updating your skill list."
                .to_string()
        }
    }
}
