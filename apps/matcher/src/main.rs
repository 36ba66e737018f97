use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use matcher::analysis::{FixedAnalyzer, KeywordAnalyzer, ResumeAnalyzer};
use matcher::catalog;
use matcher::config::Config;
use matcher::errors::AppError;
use matcher::matching::{calculate_job_match, matched_jobs, ScoringWeights};
use matcher::models::job::JobPosting;
use matcher::models::profile::CandidateProfile;

#[derive(Parser, Debug)]
#[command(name = "jobscout", version, about = "Job-board matching engine")]
struct Cli {
    /// JSON file holding an array of postings. Defaults to the built-in catalog.
    #[arg(global = true, long)]
    jobs: Option<PathBuf>,

    /// Résumé text file. Without it the canned demo profile is used.
    #[arg(global = true, long)]
    resume: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Rank the catalog against the candidate profile.
    Match(MatchArgs),
    /// Print the derived candidate profile as JSON.
    Analyze,
    /// Score a single posting by id and print the full report as JSON.
    Score(ScoreArgs),
}

#[derive(Args, Debug)]
struct MatchArgs {
    /// Minimum match score (0–100). Defaults to JOBSCOUT_MIN_SCORE, then 30.
    #[arg(long)]
    min_score: Option<u32>,
}

#[derive(Args, Debug)]
struct ScoreArgs {
    #[arg(long)]
    job_id: u32,
}

fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let jobs = load_catalog(cli.jobs.as_deref())?;
    let profile = build_profile(cli.resume.as_deref())?;
    info!(
        "Catalog: {} postings; profile: {:?}, {} skills",
        jobs.len(),
        profile.experience_level,
        profile.skills.len()
    );

    let weights = ScoringWeights::default();

    match cli.command {
        Commands::Match(args) => {
            let min_score = args.min_score.unwrap_or(config.min_score);
            run_match(&jobs, &profile, min_score, &weights);
        }
        Commands::Analyze => {
            println!("{}", serde_json::to_string_pretty(&profile)?);
        }
        Commands::Score(args) => {
            let job = jobs
                .iter()
                .find(|j| j.id == args.job_id)
                .ok_or_else(|| AppError::NotFound(format!("job id {}", args.job_id)))?;
            let report = calculate_job_match(job, &profile, &weights);
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }

    Ok(())
}

fn run_match(
    jobs: &[JobPosting],
    profile: &CandidateProfile,
    min_score: u32,
    weights: &ScoringWeights,
) {
    let ranked = matched_jobs(jobs, profile, min_score, weights);
    if ranked.is_empty() {
        println!("No postings scored {min_score} or above.");
        return;
    }

    println!("{} matching postings (min score {min_score}):\n", ranked.len());
    for m in &ranked {
        println!(
            "{:>3}%  {} — {} ({})",
            m.report.match_score, m.job.title, m.job.company, m.job.location
        );
        for reason in &m.report.match_reasons {
            println!("        - {reason}");
        }
        println!();
    }
}

fn load_catalog(path: Option<&Path>) -> Result<Vec<JobPosting>> {
    let jobs = match path {
        Some(p) => {
            info!("Loading catalog from {}", p.display());
            catalog::load_jobs(p)?
        }
        None => catalog::sample_jobs(),
    };
    Ok(jobs)
}

fn build_profile(resume: Option<&Path>) -> Result<CandidateProfile> {
    let profile = match resume {
        Some(path) => {
            info!("Analyzing resume {}", path.display());
            let text = fs::read_to_string(path)?;
            KeywordAnalyzer.analyze(&text)?
        }
        None => FixedAnalyzer::demo().analyze("")?,
    };
    Ok(profile)
}
