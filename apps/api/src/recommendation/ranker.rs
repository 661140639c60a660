//! Ranking pipeline: vocabulary → vectors → cosine scores → filter → sort → top-N.
//!
//! Pure and synchronous. Data sparsity is reported through [`RankOutcome`], never
//! as an error.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::job::JobPosting;
use crate::models::skill::UserSkills;
use crate::recommendation::normalize::normalize_all;
use crate::recommendation::similarity::cosine_similarity;
use crate::recommendation::vectorizer::vectorize;
use crate::recommendation::vocabulary::Vocabulary;

pub const DEFAULT_THRESHOLD: f64 = 0.01;
pub const DEFAULT_LIMIT: usize = 10;

/// Tunables for a ranking pass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RankerConfig {
    /// Scores at or below this are noise and dropped.
    pub threshold: f64,
    /// Maximum number of results.
    pub limit: usize,
}

impl Default for RankerConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            limit: DEFAULT_LIMIT,
        }
    }
}

/// A job paired with its similarity to the user's skill set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    pub job: JobPosting,
    pub similarity_score: f64,
}

/// Result of a ranking pass. Only `Matches` carries results, and it is never empty.
#[derive(Debug, Clone, PartialEq)]
pub enum RankOutcome {
    Matches(Vec<Recommendation>),
    /// The user has no hard and no soft skills.
    NoSkillsDeclared,
    /// The job catalog is empty.
    NoCandidateJobs,
    /// No non-blank skill token exists on either side.
    EmptyVocabulary,
    /// Every job scored at or below the threshold.
    NoMatchesAboveThreshold,
}

impl RankOutcome {
    /// Stable machine-readable tag for the outcome.
    pub fn status(&self) -> &'static str {
        match self {
            RankOutcome::Matches(_) => "ok",
            RankOutcome::NoSkillsDeclared => "no_skills_declared",
            RankOutcome::NoCandidateJobs => "no_candidate_jobs",
            RankOutcome::EmptyVocabulary => "empty_vocabulary",
            RankOutcome::NoMatchesAboveThreshold => "no_matches_above_threshold",
        }
    }

    pub fn recommendations(&self) -> &[Recommendation] {
        match self {
            RankOutcome::Matches(recs) => recs,
            _ => &[],
        }
    }

    pub fn into_recommendations(self) -> Vec<Recommendation> {
        match self {
            RankOutcome::Matches(recs) => recs,
            _ => Vec::new(),
        }
    }
}

/// Ranks jobs against user skills with an explicit configuration.
#[derive(Debug, Clone, Copy, Default)]
pub struct Ranker {
    config: RankerConfig,
}

impl Ranker {
    pub fn new(config: RankerConfig) -> Self {
        Self { config }
    }

    /// Scores every job against the user's skills and returns the best matches.
    ///
    /// Ties keep catalog order (stable sort).
    pub fn rank(&self, skills: &UserSkills, jobs: &[JobPosting]) -> RankOutcome {
        if skills.declared_count() == 0 {
            return RankOutcome::NoSkillsDeclared;
        }
        if jobs.is_empty() {
            return RankOutcome::NoCandidateJobs;
        }

        let user_tokens = normalize_all(skills.names());
        let job_tokens: Vec<Vec<String>> = jobs
            .iter()
            .map(|job| normalize_all(job.required_skills.iter().map(String::as_str)))
            .collect();

        let vocabulary = Vocabulary::build(&user_tokens, &job_tokens);
        if vocabulary.is_empty() {
            return RankOutcome::EmptyVocabulary;
        }
        // Declared skills exist but every name was blank.
        if user_tokens.is_empty() {
            return RankOutcome::NoSkillsDeclared;
        }

        let user_vector = vectorize(&vocabulary, &user_tokens);

        let mut scored: Vec<Recommendation> = jobs
            .iter()
            .zip(job_tokens.iter())
            .filter_map(|(job, tokens)| {
                let job_vector = vectorize(&vocabulary, tokens);
                let score = cosine_similarity(&user_vector, &job_vector);
                (score > self.config.threshold).then(|| Recommendation {
                    job: job.clone(),
                    similarity_score: score,
                })
            })
            .collect();

        scored.sort_by(|a, b| b.similarity_score.total_cmp(&a.similarity_score));
        let retained = scored.len();
        scored.truncate(self.config.limit);

        debug!(
            vocabulary = vocabulary.len(),
            candidates = jobs.len(),
            retained,
            returned = scored.len(),
            "ranking pass complete"
        );

        if scored.is_empty() {
            RankOutcome::NoMatchesAboveThreshold
        } else {
            RankOutcome::Matches(scored)
        }
    }
}

/// Ranks with the default threshold (0.01) and limit (10).
pub fn rank(skills: &UserSkills, jobs: &[JobPosting]) -> RankOutcome {
    Ranker::default().rank(skills, jobs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::skill::Skill;

    fn job(id: &str, skills: &[&str]) -> JobPosting {
        JobPosting {
            id: id.to_string(),
            title: format!("Job {id}"),
            company_name: "Acme".to_string(),
            location: "Jakarta".to_string(),
            description: "Build things.".to_string(),
            required_skills: skills.iter().map(|s| s.to_string()).collect(),
            category: None,
            job_type: None,
            posted_at: None,
        }
    }

    fn hard(names: &[&str]) -> UserSkills {
        UserSkills::new(
            names.iter().map(|n| Skill::new(*n, "Intermediate")).collect(),
            vec![],
        )
    }

    fn ids(outcome: &RankOutcome) -> Vec<&str> {
        outcome
            .recommendations()
            .iter()
            .map(|r| r.job.id.as_str())
            .collect()
    }

    #[test]
    fn test_worked_example() {
        let skills = hard(&["React", "Node.js"]);
        let jobs = vec![
            job("A", &["react", "node.js", "sql"]),
            job("B", &["python"]),
            job("C", &["react"]),
        ];

        let outcome = rank(&skills, &jobs);
        assert_eq!(ids(&outcome), vec!["A", "C"]);

        let recs = outcome.recommendations();
        assert!((recs[0].similarity_score - 0.816).abs() < 0.001);
        assert!((recs[1].similarity_score - 0.707).abs() < 0.001);
    }

    #[test]
    fn test_no_skills_declared() {
        let outcome = rank(&UserSkills::default(), &[job("A", &["rust"])]);
        assert_eq!(outcome, RankOutcome::NoSkillsDeclared);
        assert!(outcome.recommendations().is_empty());
    }

    #[test]
    fn test_no_candidate_jobs() {
        assert_eq!(rank(&hard(&["rust"]), &[]), RankOutcome::NoCandidateJobs);
    }

    #[test]
    fn test_empty_vocabulary_when_all_names_blank() {
        let skills = hard(&["  ", ""]);
        let jobs = vec![job("A", &[]), job("B", &[" "])];
        assert_eq!(rank(&skills, &jobs), RankOutcome::EmptyVocabulary);
    }

    #[test]
    fn test_no_overlap_reports_no_matches() {
        let outcome = rank(&hard(&["cobol"]), &[job("A", &["rust"]), job("B", &[])]);
        assert_eq!(outcome, RankOutcome::NoMatchesAboveThreshold);
    }

    #[test]
    fn test_blank_user_skills_with_job_skills_reports_no_skills() {
        let skills = UserSkills::new(
            vec![Skill::new("   ", "Beginner")],
            vec![Skill::new("", "Expert")],
        );
        let outcome = rank(&skills, &[job("A", &["rust"])]);
        assert_eq!(outcome, RankOutcome::NoSkillsDeclared);
        assert_eq!(outcome.status(), "no_skills_declared");
    }

    #[test]
    fn test_soft_skills_participate() {
        let skills = UserSkills::new(vec![], vec![Skill::new("Communication", "Expert")]);
        let outcome = rank(&skills, &[job("A", &["communication"])]);
        assert_eq!(ids(&outcome), vec!["A"]);
    }

    #[test]
    fn test_full_overlap_scores_one_and_ranks_first() {
        let skills = hard(&["Rust", "SQL"]);
        let jobs = vec![job("partial", &["rust"]), job("full", &["sql", "rust"])];

        let outcome = rank(&skills, &jobs);
        let recs = outcome.recommendations();
        assert_eq!(recs[0].job.id, "full");
        assert!((recs[0].similarity_score - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_case_and_whitespace_insensitive() {
        let outcome = rank(&hard(&["React "]), &[job("A", &[" REACT"])]);
        assert_eq!(ids(&outcome), vec!["A"]);
    }

    #[test]
    fn test_level_is_ignored() {
        let beginner = UserSkills::new(vec![Skill::new("Rust", "Beginner")], vec![]);
        let expert = UserSkills::new(vec![Skill::new("Rust", "Expert")], vec![]);
        let jobs = vec![job("A", &["rust", "go"])];
        assert_eq!(rank(&beginner, &jobs), rank(&expert, &jobs));
    }

    #[test]
    fn test_top_n_cap() {
        let jobs: Vec<JobPosting> = (0..25).map(|i| job(&format!("J{i}"), &["rust"])).collect();
        let outcome = rank(&hard(&["rust"]), &jobs);
        assert_eq!(outcome.recommendations().len(), DEFAULT_LIMIT);
    }

    #[test]
    fn test_custom_limit() {
        let jobs: Vec<JobPosting> = (0..5).map(|i| job(&format!("J{i}"), &["rust"])).collect();
        let ranker = Ranker::new(RankerConfig {
            threshold: DEFAULT_THRESHOLD,
            limit: 2,
        });
        assert_eq!(ranker.rank(&hard(&["rust"]), &jobs).recommendations().len(), 2);
    }

    #[test]
    fn test_threshold_is_exclusive() {
        // One shared token out of 1 user skill and 4 job skills: 1/(1*2) = 0.5.
        let jobs = vec![job("A", &["rust", "a", "b", "c"])];
        let at_threshold = Ranker::new(RankerConfig {
            threshold: 0.5,
            limit: 10,
        });
        assert_eq!(
            at_threshold.rank(&hard(&["rust"]), &jobs),
            RankOutcome::NoMatchesAboveThreshold
        );

        let below = Ranker::new(RankerConfig {
            threshold: 0.49,
            limit: 10,
        });
        assert_eq!(ids(&below.rank(&hard(&["rust"]), &jobs)), vec!["A"]);
    }

    #[test]
    fn test_scores_sorted_descending_and_bounded() {
        let skills = hard(&["rust", "sql", "docker", "aws"]);
        let jobs = vec![
            job("1", &["rust"]),
            job("2", &["rust", "sql", "docker", "aws"]),
            job("3", &["rust", "sql", "java", "go", "php"]),
            job("4", &["sql", "docker"]),
            job("5", &["haskell"]),
        ];
        let outcome = rank(&skills, &jobs);
        let recs = outcome.recommendations();

        for pair in recs.windows(2) {
            assert!(pair[0].similarity_score >= pair[1].similarity_score);
        }
        for rec in recs {
            assert!((0.0..=1.0).contains(&rec.similarity_score));
            assert!(rec.similarity_score > DEFAULT_THRESHOLD);
        }
        assert!(!ids(&outcome).contains(&"5"));
    }

    #[test]
    fn test_ties_keep_catalog_order() {
        let jobs = vec![
            job("first", &["rust"]),
            job("second", &["rust"]),
            job("third", &["rust"]),
        ];
        let outcome = rank(&hard(&["rust"]), &jobs);
        assert_eq!(ids(&outcome), vec!["first", "second", "third"]);
    }

    #[test]
    fn test_deterministic() {
        let skills = hard(&["React", "SQL", "Go"]);
        let jobs = vec![
            job("A", &["react", "go"]),
            job("B", &["sql"]),
            job("C", &["go", "sql", "react", "kafka"]),
        ];
        assert_eq!(rank(&skills, &jobs), rank(&skills, &jobs));
    }

    #[test]
    fn test_jobs_are_attached_unchanged() {
        let original = job("A", &["React "]);
        let outcome = rank(&hard(&["react"]), std::slice::from_ref(&original));
        assert_eq!(outcome.recommendations()[0].job, original);
    }

    #[test]
    fn test_status_tags() {
        assert_eq!(RankOutcome::Matches(vec![]).status(), "ok");
        assert_eq!(RankOutcome::NoSkillsDeclared.status(), "no_skills_declared");
        assert_eq!(RankOutcome::NoCandidateJobs.status(), "no_candidate_jobs");
        assert_eq!(RankOutcome::EmptyVocabulary.status(), "empty_vocabulary");
        assert_eq!(
            RankOutcome::NoMatchesAboveThreshold.status(),
            "no_matches_above_threshold"
        );
    }
}
