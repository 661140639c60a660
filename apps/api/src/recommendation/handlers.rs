//! Axum route handlers for the Recommendation API.

use axum::{extract::State, Json};
use serde::Deserialize;
use std::collections::HashSet;
use tracing::info;

use crate::auth::BearerToken;
use crate::errors::AppError;
use crate::loader::load_corpus;
use crate::models::job::JobPosting;
use crate::models::skill::{Skill, UserSkills};
use crate::recommendation::presentation::{build_response, RecommendationResponse};
use crate::recommendation::ranker::{rank, Ranker};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct RankRequest {
    #[serde(default)]
    pub hard_skills: Vec<Skill>,
    #[serde(default)]
    pub soft_skills: Vec<Skill>,
    #[serde(default)]
    pub jobs: Vec<JobPosting>,
}

/// GET /api/v1/recommendations
///
/// Loads the caller's skills and the active job catalog, then ranks jobs by skill
/// similarity. Sparse data comes back as a 200 with a non-"ok" status.
pub async fn handle_get_recommendations(
    State(state): State<AppState>,
    BearerToken(token): BearerToken,
) -> Result<Json<RecommendationResponse>, AppError> {
    let corpus = load_corpus(state.profile.as_ref(), state.jobs.as_ref(), &token).await?;

    let outcome = Ranker::new(state.config.ranker).rank(&corpus.skills, &corpus.jobs);
    info!(
        status = outcome.status(),
        returned = outcome.recommendations().len(),
        "recommendations computed"
    );

    Ok(Json(build_response(outcome, &corpus.bookmarked)))
}

/// POST /api/v1/recommendations/rank
///
/// Ranks exactly the skills and jobs in the request body with the default
/// threshold and limit. No I/O, and independent of the service configuration.
pub async fn handle_rank(
    Json(request): Json<RankRequest>,
) -> Result<Json<RecommendationResponse>, AppError> {
    if request.jobs.iter().any(|job| job.id.trim().is_empty()) {
        return Err(AppError::Validation("every job needs a non-empty id".to_string()));
    }

    let skills = UserSkills::new(request.hard_skills, request.soft_skills);
    let outcome = rank(&skills, &request.jobs);

    Ok(Json(build_response(outcome, &HashSet::new())))
}
