//! Job match scoring — weighted-sum relevance between a posting and a candidate profile.
//!
//! Pure, deterministic, no I/O. Five factors, weights summing to 100:
//! skill overlap (40), experience level (25), preferred role (20),
//! salary presence (10), remote location (5). Each binary factor
//! contributes all-or-nothing; skill overlap contributes proportionally.

use serde::{Deserialize, Serialize};

use crate::models::job::JobPosting;
use crate::models::profile::{CandidateProfile, ExperienceLevel};

// ────────────────────────────────────────────────────────────────────────────
// Output data model
// ────────────────────────────────────────────────────────────────────────────

/// Full match report for one posting. Computed fresh on every call,
/// never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobMatch {
    pub job_id: u32,
    pub match_score: u32, // 0 – 100
    /// Human-readable reasons, in factor-evaluation order; a factor appears
    /// only if it contributed.
    pub match_reasons: Vec<String>,
    /// Lowercased job-skill names covered by the profile.
    pub skill_matches: Vec<String>,
    pub experience_match: bool,
}

/// Per-factor weights. Must sum to 100 for `match_score` to span the full
/// 0–100 range.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringWeights {
    pub skills: f64,
    pub experience: f64,
    pub role: f64,
    pub salary: f64,
    pub remote: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            skills: 40.0,
            experience: 25.0,
            role: 20.0,
            salary: 10.0,
            remote: 5.0,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Core scoring algorithm
// ────────────────────────────────────────────────────────────────────────────

/// Scores one posting against a profile.
///
/// Total function: empty skill lists, empty preferred roles, and missing
/// salary fields all contribute zero rather than erroring. The denominator
/// floor `max(job_skills, 1)` keeps the ratio defined for skill-less
/// postings.
pub fn calculate_job_match(
    job: &JobPosting,
    profile: &CandidateProfile,
    weights: &ScoringWeights,
) -> JobMatch {
    let mut score = 0.0_f64;
    let mut match_reasons = Vec::new();

    // Skill overlap: case-insensitive substring containment, either direction.
    let job_skills: Vec<String> = job.skills.iter().map(|s| s.to_lowercase()).collect();
    let profile_skills: Vec<String> = profile.skills.iter().map(|s| s.to_lowercase()).collect();

    let skill_matches: Vec<String> = job_skills
        .iter()
        .filter(|js| {
            profile_skills
                .iter()
                .any(|ps| ps.contains(js.as_str()) || js.contains(ps.as_str()))
        })
        .cloned()
        .collect();

    let skill_ratio = skill_matches.len() as f64 / job_skills.len().max(1) as f64;
    score += skill_ratio * weights.skills;

    if !skill_matches.is_empty() {
        let preview: Vec<&str> = skill_matches.iter().take(3).map(String::as_str).collect();
        match_reasons.push(format!(
            "{} matching skills: {}",
            skill_matches.len(),
            preview.join(", ")
        ));
    }

    // Experience level, read off the job title.
    let experience_match = experience_matches(&job.title, profile.experience_level);
    if experience_match {
        score += weights.experience;
        match_reasons.push("Experience level matches job requirements".to_string());
    }

    // Preferred role vs job title.
    if role_matches(&job.title, &profile.preferred_roles) {
        score += weights.role;
        match_reasons.push("Job title matches your preferred roles".to_string());
    }

    // Salary presence only — no numeric comparison against expectations.
    if job.salary.as_deref().is_some_and(|s| !s.is_empty()) {
        score += weights.salary;
        match_reasons.push("Salary range is competitive".to_string());
    }

    if job.location.contains("Remote") {
        score += weights.remote;
        match_reasons.push("Remote work available".to_string());
    }

    JobMatch {
        job_id: job.id,
        match_score: score.round() as u32,
        match_reasons,
        skill_matches,
        experience_match,
    }
}

/// Seniority requirement is inferred from the job title text.
fn experience_matches(title: &str, level: ExperienceLevel) -> bool {
    let title = title.to_lowercase();

    if title.contains("senior") || title.contains("lead") {
        return matches!(level, ExperienceLevel::Senior | ExperienceLevel::Executive);
    }
    if title.contains("junior") || title.contains("entry") {
        return matches!(level, ExperienceLevel::Entry);
    }
    // Untagged titles are treated as mid-level.
    matches!(level, ExperienceLevel::Mid | ExperienceLevel::Senior)
}

/// Loose title match: the first " developer"/" engineer" occurrence is
/// removed from each preferred role before the substring test, so
/// "Frontend Developer" matches "Senior Frontend Developer".
fn role_matches(title: &str, preferred_roles: &[String]) -> bool {
    if preferred_roles.is_empty() {
        return false;
    }
    let title = title.to_lowercase();
    preferred_roles.iter().any(|role| {
        let needle = role
            .to_lowercase()
            .replacen(" developer", "", 1)
            .replacen(" engineer", "", 1);
        title.contains(&needle)
    })
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
