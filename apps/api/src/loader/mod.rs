//! Corpus & profile loader: gathers the caller's declared skills and the active
//! job catalog so the ranker can run on plain in-memory data.

pub mod job_catalog;
pub mod profile_client;

use std::collections::HashSet;

use async_trait::async_trait;
use tracing::{info, warn};

pub use job_catalog::JobCatalog;

use crate::errors::AppError;
use crate::models::job::JobPosting;
use crate::models::skill::{Skill, UserSkills};

/// Source of a user's profile data, keyed by the caller's identity token.
#[async_trait]
pub trait ProfileSource: Send + Sync {
    async fn hard_skills(&self, token: &str) -> Result<Vec<Skill>, AppError>;
    async fn soft_skills(&self, token: &str) -> Result<Vec<Skill>, AppError>;
    async fn bookmarked_job_ids(&self, token: &str) -> Result<HashSet<String>, AppError>;
}

/// Everything a recommendation pass needs.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    pub skills: UserSkills,
    pub jobs: Vec<JobPosting>,
    pub bookmarked: HashSet<String>,
}

/// Fetches skills, the job catalog and bookmarks concurrently. A skill or catalog
/// failure aborts; bookmarks are best-effort and degrade to an empty set.
pub async fn load_corpus(
    profile: &dyn ProfileSource,
    catalog: &dyn JobCatalog,
    token: &str,
) -> Result<Corpus, AppError> {
    let (required, bookmarks) = tokio::join!(
        async {
            tokio::try_join!(
                profile.hard_skills(token),
                profile.soft_skills(token),
                catalog.active_jobs(),
            )
        },
        profile.bookmarked_job_ids(token),
    );
    let (hard, soft, jobs) = required?;

    let bookmarked = match bookmarks {
        Ok(ids) => ids,
        Err(e) => {
            warn!("Failed to load bookmarks, continuing without them: {e}");
            HashSet::new()
        }
    };

    info!(
        hard_skills = hard.len(),
        soft_skills = soft.len(),
        jobs = jobs.len(),
        bookmarks = bookmarked.len(),
        "corpus loaded"
    );

    Ok(Corpus {
        skills: UserSkills::new(hard, soft),
        jobs,
        bookmarked,
    })
}
