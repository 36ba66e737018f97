//! Résumé analysis — derives a `CandidateProfile` from raw résumé text.
//!
//! Default: `KeywordAnalyzer` (keyword-table scan, deterministic, fully
//! testable). `FixedAnalyzer` returns a pre-built profile and is what the
//! demo flow uses when no résumé file is supplied.
//!
//! Scoring deliberately does not know where profiles come from; callers
//! pick an analyzer and pass the resulting profile by value.

use std::sync::OnceLock;

use regex::Regex;

use crate::analysis::keywords::{
    EDUCATION_KEYWORDS, EXECUTIVE_KEYWORDS, MID_KEYWORDS, ROLE_KEYWORDS, SENIOR_KEYWORDS,
    SKILL_KEYWORDS,
};
use crate::errors::AppError;
use crate::models::profile::{CandidateProfile, ExperienceLevel};

/// The résumé analyzer seam. Implement this to swap profile derivation
/// without touching the matching engine or CLI.
pub trait ResumeAnalyzer: Send + Sync {
    fn analyze(&self, resume_text: &str) -> Result<CandidateProfile, AppError>;
}

// ────────────────────────────────────────────────────────────────────────────
// KeywordAnalyzer — default backend
// ────────────────────────────────────────────────────────────────────────────

/// Keyword-table résumé analyzer. This is shallow text scanning, not
/// document understanding; it exists so the demo pipeline has a working
/// end-to-end path.
pub struct KeywordAnalyzer;

impl ResumeAnalyzer for KeywordAnalyzer {
    fn analyze(&self, resume_text: &str) -> Result<CandidateProfile, AppError> {
        if resume_text.trim().is_empty() {
            return Err(AppError::Validation(
                "resume text cannot be empty".to_string(),
            ));
        }
        Ok(derive_profile(resume_text))
    }
}

fn derive_profile(resume_text: &str) -> CandidateProfile {
    let text = resume_text.to_lowercase();

    let skills = table_hits(&text, SKILL_KEYWORDS);

    let experience_level = if EXECUTIVE_KEYWORDS.iter().any(|kw| text.contains(kw)) {
        ExperienceLevel::Executive
    } else if SENIOR_KEYWORDS.iter().any(|kw| text.contains(kw)) {
        ExperienceLevel::Senior
    } else if MID_KEYWORDS.iter().any(|kw| text.contains(kw)) {
        ExperienceLevel::Mid
    } else {
        ExperienceLevel::Entry
    };

    let years_of_experience = years_regex()
        .captures(&text)
        .and_then(|c| c.get(1))
        .and_then(|m| m.as_str().parse::<u32>().ok())
        .unwrap_or(0);

    let preferred_roles = table_hits(&text, ROLE_KEYWORDS);
    let education = table_hits(&text, EDUCATION_KEYWORDS);

    CandidateProfile {
        skills,
        experience_level,
        preferred_roles,
        education,
        years_of_experience,
    }
}

/// Table entries found as substrings of `text`, in table order.
fn table_hits(text: &str, table: &[&str]) -> Vec<String> {
    table
        .iter()
        .filter(|kw| text.contains(**kw))
        .map(|kw| kw.to_string())
        .collect()
}

fn years_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(\d+)\s*years?\s*(of\s*)?experience").expect("years pattern is valid")
    })
}

// ────────────────────────────────────────────────────────────────────────────
// FixedAnalyzer — canned-profile backend
// ────────────────────────────────────────────────────────────────────────────

/// Returns the same pre-built profile for any input text.
pub struct FixedAnalyzer(pub CandidateProfile);

impl FixedAnalyzer {
    /// The demo profile: a mid-level frontend/full-stack candidate.
    pub fn demo() -> Self {
        Self(CandidateProfile {
            skills: vec![
                "React".to_string(),
                "TypeScript".to_string(),
                "Node.js".to_string(),
                "Python".to_string(),
                "AWS".to_string(),
            ],
            experience_level: ExperienceLevel::Mid,
            preferred_roles: vec![
                "Frontend Developer".to_string(),
                "Full Stack Developer".to_string(),
            ],
            education: vec!["Computer Science".to_string(), "Bachelor".to_string()],
            years_of_experience: 4,
        })
    }
}

impl ResumeAnalyzer for FixedAnalyzer {
    fn analyze(&self, _resume_text: &str) -> Result<CandidateProfile, AppError> {
        Ok(self.0.clone())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
