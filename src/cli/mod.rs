use clap::{ Parser, Subcommand };
use std::path::PathBuf;

pub mod commands;
pub mod ui;

#[derive(Parser)]
#[command(
    name = "reqclass",
    about = "Evaluate prompt strategies for classifying requirements as functional or non-functional",
    version,
    author,
    long_about = None
)]
pub struct ReqClassCli {
    /// Sets the log level (error, warn, info, debug, trace)
    #[arg(short, long, global = true, default_value = "info")]
    pub log_level: String,

    /// Path to a YAML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run every strategy over a random sample of the dataset
    Run {
        /// Input CSV with RequirementText and _class_ columns
        #[arg(short, long)]
        dataset: Option<PathBuf>,

        /// Output CSV for the result table
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Number of requirements to sample
        #[arg(short = 'n', long)]
        sample_size: Option<usize>,

        /// Trials per strategy
        #[arg(short, long)]
        trials: Option<u32>,

        /// Seed for reproducible sampling
        #[arg(long)]
        seed: Option<u64>,

        /// Directory for the generated artifact document
        #[arg(long)]
        artifact_dir: Option<PathBuf>,

        /// Skip use case / class diagram / code generation
        #[arg(long, default_value = "false")]
        no_artifacts: bool,

        /// Do not ask for confirmation before calling the API
        #[arg(short, long, default_value = "false")]
        yes: bool,
    },

    /// Classify a single requirement with one strategy
    Classify {
        /// Strategy name as listed by `strategies`
        #[arg(short, long)]
        strategy: String,

        /// Requirement text
        #[arg(short, long)]
        text: String,
    },

    /// Extract the F/NF label from a piece of model output without calling the API
    Extract {
        /// Model output to parse
        text: String,
    },

    /// List the strategies in evaluation order
    Strategies,
}
