// Candidate profile derivation. Pluggable behind the ResumeAnalyzer trait;
// the keyword backend is a shallow text scan, not real document parsing.

pub mod analyzer;
pub mod keywords;

pub use analyzer::{FixedAnalyzer, KeywordAnalyzer, ResumeAnalyzer};
