use async_trait::async_trait;
use sqlx::PgPool;
use tracing::debug;

use crate::errors::AppError;
use crate::models::job::{JobPosting, JobRow};

/// Source of candidate jobs. Only active postings are returned, newest first.
#[async_trait]
pub trait JobCatalog: Send + Sync {
    async fn active_jobs(&self) -> Result<Vec<JobPosting>, AppError>;
}

/// Job catalog backed by the `jobs` table.
pub struct PgJobCatalog {
    pool: PgPool,
}

impl PgJobCatalog {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl JobCatalog for PgJobCatalog {
    async fn active_jobs(&self) -> Result<Vec<JobPosting>, AppError> {
        let rows = sqlx::query_as::<_, JobRow>(
            r#"
            SELECT id, job_title, company_name, location, job_description,
                   skills_required, category, job_type, posted_at
            FROM jobs
            WHERE is_active = TRUE
            ORDER BY posted_at DESC NULLS LAST
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        debug!(count = rows.len(), "loaded active jobs");
        Ok(rows.into_iter().map(JobPosting::from).collect())
    }
}
