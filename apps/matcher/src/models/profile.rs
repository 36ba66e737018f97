use serde::{Deserialize, Serialize};

/// Ordinal candidate seniority classification.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExperienceLevel {
    #[default]
    Entry,
    Mid,
    Senior,
    Executive,
}

/// A candidate profile derived from a résumé. Built once by a
/// `ResumeAnalyzer` and passed by value into scoring — the scorer never
/// reads ambient state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateProfile {
    pub skills: Vec<String>,
    pub experience_level: ExperienceLevel,
    pub preferred_roles: Vec<String>,
    pub education: Vec<String>,
    pub years_of_experience: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_experience_level_serde_lowercase() {
        let level: ExperienceLevel = serde_json::from_str(r#""senior""#).unwrap();
        assert_eq!(level, ExperienceLevel::Senior);
        assert_eq!(serde_json::to_string(&ExperienceLevel::Mid).unwrap(), r#""mid""#);
    }

    #[test]
    fn test_experience_level_default_is_entry() {
        assert_eq!(ExperienceLevel::default(), ExperienceLevel::Entry);
    }

    #[test]
    fn test_profile_roundtrips() {
        let profile = CandidateProfile {
            skills: vec!["React".to_string(), "TypeScript".to_string()],
            experience_level: ExperienceLevel::Mid,
            preferred_roles: vec!["Frontend Developer".to_string()],
            education: vec!["Computer Science".to_string()],
            years_of_experience: 4,
        };
        let json = serde_json::to_string(&profile).unwrap();
        let back: CandidateProfile = serde_json::from_str(&json).unwrap();
        assert_eq!(back.experience_level, ExperienceLevel::Mid);
        assert_eq!(back.years_of_experience, 4);
        assert_eq!(back.skills, profile.skills);
    }
}
