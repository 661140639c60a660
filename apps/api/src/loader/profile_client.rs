//! Profile API client: reads the caller's hard skills, soft skills and bookmarks
//! from the profile REST service, forwarding the caller's identity token.

use std::collections::HashSet;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{de::DeserializeOwned, Deserialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::errors::AppError;
use crate::loader::ProfileSource;
use crate::models::skill::Skill;

const MAX_RETRIES: u32 = 3;
const RETRY_BASE_DELAY: Duration = Duration::from_secs(1);

#[derive(Debug, Error)]
pub enum ProfileApiError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("identity token rejected")]
    Unauthorized,

    #[error("Rate limited after {retries} retries")]
    RateLimited { retries: u32 },
}

/// Skill endpoints answer either `{"skills": [...]}` or a bare array.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum SkillsPayload {
    Wrapped {
        #[serde(default)]
        skills: Vec<Skill>,
    },
    Bare(Vec<Skill>),
}

impl SkillsPayload {
    fn into_skills(self) -> Vec<Skill> {
        match self {
            SkillsPayload::Wrapped { skills } => skills,
            SkillsPayload::Bare(skills) => skills,
        }
    }
}

#[derive(Debug, Deserialize)]
struct BookmarkRecord {
    #[serde(rename = "jobId")]
    job_id: String,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum BookmarksPayload {
    Wrapped {
        #[serde(default)]
        bookmarks: Vec<BookmarkRecord>,
    },
    Bare(Vec<BookmarkRecord>),
}

impl BookmarksPayload {
    fn into_job_ids(self) -> HashSet<String> {
        let records = match self {
            BookmarksPayload::Wrapped { bookmarks } => bookmarks,
            BookmarksPayload::Bare(bookmarks) => bookmarks,
        };
        records.into_iter().map(|b| b.job_id).collect()
    }
}

/// Parses a skill endpoint body. Unrecognised shapes yield an empty list.
fn parse_skills(body: &serde_json::Value) -> Vec<Skill> {
    match SkillsPayload::deserialize(body) {
        Ok(payload) => payload.into_skills(),
        Err(e) => {
            warn!("Unexpected skills payload, treating as empty: {e}");
            Vec::new()
        }
    }
}

fn parse_bookmarks(body: &serde_json::Value) -> HashSet<String> {
    match BookmarksPayload::deserialize(body) {
        Ok(payload) => payload.into_job_ids(),
        Err(e) => {
            warn!("Unexpected bookmarks payload, treating as empty: {e}");
            HashSet::new()
        }
    }
}

#[derive(Clone)]
pub struct ProfileApiClient {
    client: Client,
    base_url: String,
    retry_base_delay: Duration,
}

impl ProfileApiClient {
    pub fn new(base_url: String, timeout: Duration) -> Result<Self, ProfileApiError> {
        Ok(Self {
            client: Client::builder().timeout(timeout).build()?,
            base_url,
            retry_base_delay: RETRY_BASE_DELAY,
        })
    }

    #[cfg(test)]
    fn with_retry_base_delay(mut self, delay: Duration) -> Self {
        self.retry_base_delay = delay;
        self
    }

    /// GETs `{base_url}{path}` with the bearer token and decodes the JSON body.
    /// Retries on 429 (rate limit) and 5xx errors with exponential backoff.
    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        token: &str,
    ) -> Result<T, ProfileApiError> {
        let url = format!("{}{}", self.base_url, path);
        let mut last_error: Option<ProfileApiError> = None;

        for attempt in 0..MAX_RETRIES {
            if attempt > 0 {
                // Exponential backoff: 1s, 2s
                let delay = self.retry_base_delay * (1 << (attempt - 1));
                warn!(
                    "Profile API call to {} attempt {} failed, retrying after {}ms...",
                    path,
                    attempt,
                    delay.as_millis()
                );
                tokio::time::sleep(delay).await;
            }

            let response = match self.client.get(&url).bearer_auth(token).send().await {
                Ok(r) => r,
                Err(e) => {
                    last_error = Some(ProfileApiError::Http(e));
                    continue;
                }
            };

            let status = response.status();

            if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
                return Err(ProfileApiError::Unauthorized);
            }

            if status == StatusCode::TOO_MANY_REQUESTS || status.is_server_error() {
                let body = response.text().await.unwrap_or_default();
                warn!("Profile API returned {} for {}: {}", status, path, body);
                last_error = Some(if status == StatusCode::TOO_MANY_REQUESTS {
                    ProfileApiError::RateLimited { retries: attempt + 1 }
                } else {
                    ProfileApiError::Api {
                        status: status.as_u16(),
                        message: body,
                    }
                });
                continue;
            }

            if !status.is_success() {
                let body = response.text().await.unwrap_or_default();
                return Err(ProfileApiError::Api {
                    status: status.as_u16(),
                    message: body,
                });
            }

            debug!("Profile API {} succeeded on attempt {}", path, attempt + 1);
            return Ok(response.json::<T>().await?);
        }

        Err(last_error.unwrap_or(ProfileApiError::RateLimited {
            retries: MAX_RETRIES,
        }))
    }
}

#[async_trait]
impl ProfileSource for ProfileApiClient {
    async fn hard_skills(&self, token: &str) -> Result<Vec<Skill>, AppError> {
        let body: serde_json::Value = self.get_json("/hard-skills", token).await?;
        Ok(parse_skills(&body))
    }

    async fn soft_skills(&self, token: &str) -> Result<Vec<Skill>, AppError> {
        let body: serde_json::Value = self.get_json("/soft-skills", token).await?;
        Ok(parse_skills(&body))
    }

    async fn bookmarked_job_ids(&self, token: &str) -> Result<HashSet<String>, AppError> {
        let body: serde_json::Value = self.get_json("/bookmarks", token).await?;
        Ok(parse_bookmarks(&body))
    }
}
