mod analyze;
mod cli;
mod config;
mod error;
mod relevance;
mod report;
mod scan;
mod types;

use crate::error::ScorerError;
use crate::relevance::embedding::{EmbeddingEngine, HashingEmbedder};
use crate::relevance::RelevanceEstimator;
use crate::types::config::ScorerConfig;
use crate::types::report::SimilarityReport;
use clap::Parser;
use std::path::Path;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const WARNINGS: i32 = 1;
    pub const BLOCKING: i32 = 2;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn init_logging(verbose: u8, quiet: bool) {
    let default_level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn load_settings() -> Result<ScorerConfig, ScorerError> {
    let cwd = std::env::current_dir()?;
    Ok(config::load_config(&cwd)?.unwrap_or_default())
}

fn build_estimator(cfg: &ScorerConfig) -> RelevanceEstimator {
    let engine: Option<Arc<dyn EmbeddingEngine>> = if cfg.embedding_enabled() {
        let engine = HashingEmbedder::default();
        info!(
            engine = engine.name(),
            dimensions = engine.dimensions(),
            "embedding similarity enabled"
        );
        Some(Arc::new(engine))
    } else {
        None
    };
    RelevanceEstimator::new(engine, cfg.embedding_enabled(), cfg.stop_words())
}

fn output_format(flag: Option<cli::ReportFormat>, cfg: &ScorerConfig) -> report::OutputFormat {
    match flag {
        Some(cli::ReportFormat::Json) => report::OutputFormat::Json,
        Some(cli::ReportFormat::Md) => report::OutputFormat::Md,
        None => report::OutputFormat::from_config(cfg.report_format())
            .unwrap_or(report::OutputFormat::Md),
    }
}

/// Scores one request file, prints its report and returns (score, had parsing errors).
fn score_file(
    path: &Path,
    job_description: Option<String>,
    estimator: &RelevanceEstimator,
    format: report::OutputFormat,
) -> Result<(f64, bool), ScorerError> {
    let mut request = scan::load_request(path)?;
    if job_description.is_some() {
        request.job_description = job_description;
    }

    let outcome = analyze::score_resume(&request, estimator);
    info!(
        file = %path.display(),
        score = outcome.ats_score,
        method = %outcome.relevance.method,
        "scored resume"
    );
    let score = outcome.ats_score;
    let score_report = report::build_report(&request, outcome, Some(path.display().to_string()));
    println!("{}", report::render(&score_report, format)?);

    Ok((score, !request.parsing_errors.is_empty()))
}

fn exit_status(scores: &[(f64, bool)], min_score: Option<f64>) -> i32 {
    let below_threshold = min_score
        .map(|min| scores.iter().any(|(score, _)| *score < min))
        .unwrap_or(false);
    if below_threshold {
        exit_code::BLOCKING
    } else if scores.iter().any(|(_, has_errors)| *has_errors) {
        exit_code::WARNINGS
    } else {
        exit_code::SUCCESS
    }
}

fn run() -> Result<i32, ScorerError> {
    let cli = cli::Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    match cli.command {
        cli::Commands::Score(cmd) => {
            if !cmd.request.exists() {
                return Err(ScorerError::PathNotFound(cmd.request.display().to_string()));
            }
            let cfg = load_settings()?;
            let estimator = build_estimator(&cfg);
            let job_description = cmd
                .job_description
                .as_deref()
                .map(scan::read_text)
                .transpose()?;

            let scored = score_file(
                &cmd.request,
                job_description,
                &estimator,
                output_format(cmd.format, &cfg),
            )?;
            Ok(exit_status(&[scored], cmd.min_score))
        }
        cli::Commands::Batch(cmd) => {
            let cfg = load_settings()?;
            let estimator = build_estimator(&cfg);
            let format = output_format(cmd.format, &cfg);
            let files = scan::discover_requests(&cmd.dir, &cfg.batch_extensions())?;
            info!(count = files.len(), dir = %cmd.dir.display(), "discovered requests");

            let mut scores = Vec::with_capacity(files.len());
            for path in &files {
                scores.push(score_file(path, None, &estimator, format)?);
            }
            if files.is_empty() {
                eprintln!("warning: no request files found in {}", cmd.dir.display());
            }
            Ok(exit_status(&scores, cmd.min_score))
        }
        cli::Commands::Similarity(cmd) => {
            let cfg = load_settings()?;
            let estimator = build_estimator(&cfg);
            let resume = scan::read_text(&cmd.resume)?;
            let job = scan::read_text(&cmd.job_description)?;

            let relevance = estimator.estimate(&resume, &job);
            let similarity = SimilarityReport {
                similarity: relevance.value,
                method: relevance.method,
                resume_length: resume.chars().count(),
                jd_length: job.chars().count(),
            };
            println!("{}", report::json::similarity_to_json(&similarity)?);
            Ok(exit_code::SUCCESS)
        }
    }
}

fn main() {
    match run() {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(exit_code::RUNTIME_FAILURE);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_status_prefers_threshold_over_warnings() {
        assert_eq!(exit_status(&[(80.0, false)], None), exit_code::SUCCESS);
        assert_eq!(exit_status(&[(80.0, true)], None), exit_code::WARNINGS);
        assert_eq!(exit_status(&[(80.0, true)], Some(90.0)), exit_code::BLOCKING);
        assert_eq!(exit_status(&[], Some(90.0)), exit_code::SUCCESS);
    }

    #[test]
    fn embedding_engine_follows_config() {
        let cfg: ScorerConfig =
            toml::from_str("[relevance]\nembedding_enabled = true\n").expect("config should parse");
        assert_eq!(
            build_estimator(&cfg).preferred_method(),
            relevance::SimilarityMethod::Embedding
        );
        assert_eq!(
            build_estimator(&ScorerConfig::default()).preferred_method(),
            relevance::SimilarityMethod::TfIdf
        );
    }
}
