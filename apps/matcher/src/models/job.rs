use serde::{Deserialize, Serialize};

/// A single job posting, sourced from the static catalog or a JSON file.
/// Immutable once loaded; scoring never mutates it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobPosting {
    pub id: u32,
    pub title: String,
    pub company: String,
    pub location: String,
    #[serde(rename = "type")]
    pub job_type: String,
    pub description: String,
    pub skills: Vec<String>,
    /// Display string like "$120,000 - $150,000". Presence alone feeds the
    /// salary factor; there is no numeric comparison.
    #[serde(default)]
    pub salary: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_posting_deserializes_without_salary() {
        let json = r#"{
            "id": 7,
            "title": "Backend Developer",
            "company": "Company ABC",
            "location": "New York",
            "type": "Full-time",
            "description": "Robust APIs and services.",
            "skills": ["Node.js", "Express", "MongoDB"]
        }"#;
        let job: JobPosting = serde_json::from_str(json).unwrap();
        assert_eq!(job.id, 7);
        assert!(job.salary.is_none());
        assert_eq!(job.skills.len(), 3);
    }

    #[test]
    fn test_posting_type_field_renamed() {
        let json = r#"{
            "id": 1,
            "title": "UI/UX Designer",
            "company": "DesignHub",
            "location": "San Francisco",
            "type": "Contract",
            "description": "Beautiful interfaces.",
            "skills": [],
            "salary": "$90,000 - $110,000"
        }"#;
        let job: JobPosting = serde_json::from_str(json).unwrap();
        assert_eq!(job.job_type, "Contract");
        assert_eq!(job.salary.as_deref(), Some("$90,000 - $110,000"));
    }
}
