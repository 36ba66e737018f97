// Matching engine: per-posting scoring plus batch rank/filter.
// Pure computation only — no I/O and no ambient state in here.

pub mod matcher;
pub mod scorer;

pub use matcher::{matched_jobs, MatchedJob, DEFAULT_MIN_SCORE};
pub use scorer::{calculate_job_match, JobMatch, ScoringWeights};
