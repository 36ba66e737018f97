//! Job catalog — the built-in demo postings and JSON file loading.
//! How postings are sourced is deliberately outside the matching engine;
//! this module is the only place that knows.

use std::fs;
use std::path::Path;

use crate::errors::AppError;
use crate::models::job::JobPosting;

/// Loads a posting list from a JSON file (an array of `JobPosting`).
pub fn load_jobs(path: &Path) -> Result<Vec<JobPosting>, AppError> {
    let raw = fs::read_to_string(path)?;
    let jobs: Vec<JobPosting> = serde_json::from_str(&raw)?;
    Ok(jobs)
}

/// The built-in demo catalog.
pub fn sample_jobs() -> Vec<JobPosting> {
    vec![
        JobPosting {
            id: 1,
            title: "Frontend Developer".to_string(),
            company: "Company XYZ".to_string(),
            location: "Remote".to_string(),
            job_type: "Full-time".to_string(),
            description: "We are looking for a skilled frontend developer to join our team \
                          and help build modern web applications."
                .to_string(),
            skills: vec![
                "React".to_string(),
                "TypeScript".to_string(),
                "Tailwind CSS".to_string(),
            ],
            salary: Some("$120,000 - $150,000".to_string()),
        },
        JobPosting {
            id: 2,
            title: "Backend Developer".to_string(),
            company: "Company ABC".to_string(),
            location: "New York".to_string(),
            job_type: "Full-time".to_string(),
            description: "Join our backend team to design and develop robust APIs and \
                          services for our growing platform."
                .to_string(),
            skills: vec![
                "Node.js".to_string(),
                "Express".to_string(),
                "MongoDB".to_string(),
            ],
            salary: Some("$130,000 - $160,000".to_string()),
        },
        JobPosting {
            id: 3,
            title: "UI/UX Designer".to_string(),
            company: "DesignHub".to_string(),
            location: "San Francisco".to_string(),
            job_type: "Contract".to_string(),
            description: "Create beautiful user interfaces and experiences for our clients \
                          across various industries."
                .to_string(),
            skills: vec![
                "Figma".to_string(),
                "Adobe XD".to_string(),
                "User Research".to_string(),
            ],
            salary: Some("$90,000 - $110,000".to_string()),
        },
        JobPosting {
            id: 4,
            title: "DevOps Engineer".to_string(),
            company: "TechOps".to_string(),
            location: "Chicago".to_string(),
            job_type: "Full-time".to_string(),
            description: "Build and maintain our cloud infrastructure and deployment pipelines."
                .to_string(),
            skills: vec![
                "AWS".to_string(),
                "Docker".to_string(),
                "Kubernetes".to_string(),
            ],
            salary: None,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_sample_jobs_have_unique_ids() {
        let jobs = sample_jobs();
        let mut ids: Vec<u32> = jobs.iter().map(|j| j.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), jobs.len());
    }

    #[test]
    fn test_load_jobs_roundtrip() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let json = serde_json::to_string(&sample_jobs()).unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let jobs = load_jobs(file.path()).unwrap();
        assert_eq!(jobs.len(), 4);
        assert_eq!(jobs[0].title, "Frontend Developer");
        assert!(jobs[3].salary.is_none());
    }

    #[test]
    fn test_load_jobs_missing_file_is_io_error() {
        let err = load_jobs(Path::new("/nonexistent/jobs.json")).unwrap_err();
        assert!(matches!(err, AppError::Io(_)));
    }

    #[test]
    fn test_load_jobs_malformed_json_is_json_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"{ not json").unwrap();

        let err = load_jobs(file.path()).unwrap_err();
        assert!(matches!(err, AppError::Json(_)));
    }
}
