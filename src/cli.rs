use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "ats-scorer",
    version,
    about = "Resume quality and job-description relevance scorer"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score a single extracted resume
    Score(ScoreCommand),
    /// Score every request file under a directory
    Batch(BatchCommand),
    /// Print the similarity between a resume and a job description
    Similarity(SimilarityCommand),
}

#[derive(Args)]
pub struct ScoreCommand {
    /// JSON scoring request produced by the extraction step
    pub request: PathBuf,
    /// Plain-text job description, overriding the one in the request
    #[arg(long)]
    pub job_description: Option<PathBuf>,
    #[arg(short, long, value_enum)]
    pub format: Option<ReportFormat>,
    /// Exit with code 2 when the final score is below this value
    #[arg(long)]
    pub min_score: Option<f64>,
}

#[derive(Args)]
pub struct BatchCommand {
    pub dir: PathBuf,
    #[arg(short, long, value_enum)]
    pub format: Option<ReportFormat>,
    #[arg(long)]
    pub min_score: Option<f64>,
}

#[derive(Args)]
pub struct SimilarityCommand {
    pub resume: PathBuf,
    pub job_description: PathBuf,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ReportFormat {
    Json,
    Md,
}
