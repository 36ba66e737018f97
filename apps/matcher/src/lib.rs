//! Jobscout matching engine.
//!
//! Scores job postings against a derived candidate profile with a
//! weighted-sum relevance model and ranks a catalog by fit. The scorer is a
//! pure function over immutable inputs; résumé-to-profile derivation sits
//! behind the [`analysis::ResumeAnalyzer`] seam.

pub mod analysis;
pub mod catalog;
pub mod config;
pub mod errors;
pub mod matching;
pub mod models;
