//! Batch matching — scores a whole catalog, filters by threshold, ranks.

use serde::{Deserialize, Serialize};

use crate::matching::scorer::{calculate_job_match, JobMatch, ScoringWeights};
use crate::models::job::JobPosting;
use crate::models::profile::CandidateProfile;

/// Default minimum score below which a posting is not worth surfacing.
pub const DEFAULT_MIN_SCORE: u32 = 30;

/// A posting paired with its match report, as handed to display layers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchedJob {
    pub job: JobPosting,
    pub report: JobMatch,
}

/// Scores every posting, drops those below `min_score`, and sorts the rest
/// descending by score. Ties break by ascending job id so the ranking is
/// fully deterministic.
pub fn matched_jobs(
    jobs: &[JobPosting],
    profile: &CandidateProfile,
    min_score: u32,
    weights: &ScoringWeights,
) -> Vec<MatchedJob> {
    let mut matched: Vec<MatchedJob> = jobs
        .iter()
        .map(|job| MatchedJob {
            job: job.clone(),
            report: calculate_job_match(job, profile, weights),
        })
        .filter(|m| m.report.match_score >= min_score)
        .collect();

    matched.sort_by(|a, b| {
        b.report
            .match_score
            .cmp(&a.report.match_score)
            .then_with(|| a.job.id.cmp(&b.job.id))
    });

    matched
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::profile::ExperienceLevel;

    fn job(id: u32, title: &str, skills: Vec<&str>, location: &str) -> JobPosting {
        JobPosting {
            id,
            title: title.to_string(),
            company: "Acme".to_string(),
            location: location.to_string(),
            job_type: "Full-time".to_string(),
            description: String::new(),
            skills: skills.into_iter().map(String::from).collect(),
            salary: None,
        }
    }

    fn profile() -> CandidateProfile {
        CandidateProfile {
            skills: vec!["React".to_string(), "TypeScript".to_string()],
            experience_level: ExperienceLevel::Mid,
            preferred_roles: vec!["Frontend Developer".to_string()],
            education: vec![],
            years_of_experience: 4,
        }
    }

    #[test]
    fn test_output_sorted_non_increasing() {
        let jobs = vec![
            job(1, "DevOps Engineer", vec!["AWS"], "Chicago"),
            job(2, "Frontend Developer", vec!["React", "TypeScript"], "Remote"),
            job(3, "Backend Developer", vec!["Node.js"], "New York"),
        ];

        let ranked = matched_jobs(&jobs, &profile(), 0, &ScoringWeights::default());
        for pair in ranked.windows(2) {
            assert!(pair[0].report.match_score >= pair[1].report.match_score);
        }
        assert_eq!(ranked[0].job.id, 2);
    }

    #[test]
    fn test_threshold_excludes_low_scores() {
        let jobs = vec![
            job(1, "Frontend Developer", vec!["React", "TypeScript"], "Remote"),
            // Entry-tagged title + foreign skills: scores 0 for this profile.
            job(2, "Entry Data Analyst", vec!["Excel"], "Chicago"),
        ];

        let ranked = matched_jobs(&jobs, &profile(), DEFAULT_MIN_SCORE, &ScoringWeights::default());
        assert_eq!(ranked.len(), 1);
        assert!(ranked.iter().all(|m| m.report.match_score >= DEFAULT_MIN_SCORE));
    }

    #[test]
    fn test_ties_break_by_ascending_job_id() {
        // Identical postings under different ids score identically.
        let jobs = vec![
            job(9, "Frontend Developer", vec!["React"], "Remote"),
            job(4, "Frontend Developer", vec!["React"], "Remote"),
            job(7, "Frontend Developer", vec!["React"], "Remote"),
        ];

        let ranked = matched_jobs(&jobs, &profile(), 0, &ScoringWeights::default());
        let ids: Vec<u32> = ranked.iter().map(|m| m.job.id).collect();
        assert_eq!(ids, vec![4, 7, 9]);
    }

    #[test]
    fn test_empty_catalog_yields_empty_ranking() {
        let ranked = matched_jobs(&[], &profile(), 0, &ScoringWeights::default());
        assert!(ranked.is_empty());
    }
}
