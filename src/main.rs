use anyhow::Result;
use clap::Parser;
use log::{ debug, info, warn };

use reqclass::{
    HarnessConfig,
    LLMCompletionClient,
    RecoverableError,
    ReqClassError,
    ReqClassResult,
    ServiceError,
};

mod cli;
use cli::{ ReqClassCli, Commands };

#[tokio::main]
async fn main() {
    // Parse the command line arguments
    let cli = ReqClassCli::parse();

    // Setup logging
    setup_logging(&cli.log_level);

    // Pick up API keys from a .env file if there is one
    match dotenv::dotenv() {
        Ok(path) => debug!("Loaded environment from {}", path.display()),
        Err(_) => debug!("No .env file found"),
    }

    if let Err(e) = run(cli).await {
        cli::ui::print_error(&e.to_string());
        if let Some(hint) = e.downcast_ref::<ReqClassError>().and_then(|e| e.recovery_strategy()) {
            cli::ui::print_info(&hint);
        }
        std::process::exit(1);
    }
}

async fn run(cli: ReqClassCli) -> Result<()> {
    let mut config = match &cli.config {
        Some(path) => {
            info!("Loading configuration from {}", path.display());
            HarnessConfig::from_file(path).map_err(ReqClassError::from)?
        }
        None => HarnessConfig::default(),
    };
    let catalog = config.catalog();

    match cli.command {
        Commands::Run { dataset, output, sample_size, trials, seed, artifact_dir, no_artifacts, yes } => {
            let experiment = &mut config.experiment;
            if let Some(dataset) = dataset {
                experiment.dataset_path = dataset;
            }
            if let Some(output) = output {
                experiment.output_path = output;
            }
            if let Some(sample_size) = sample_size {
                experiment.sample_size = sample_size;
            }
            if let Some(trials) = trials {
                experiment.trial_count = trials;
            }
            if seed.is_some() {
                experiment.seed = seed;
            }
            if let Some(dir) = artifact_dir {
                experiment.artifact_dir = dir;
            }
            if no_artifacts {
                experiment.generate_artifacts = false;
            }
            if experiment.trial_count == 0 {
                warn!("Trial count is 0; no classification will run");
            }

            let client = build_client(&config)?;
            cli::commands::run::execute(&client, &catalog, &config.experiment, yes).await?;
        }

        Commands::Classify { strategy, text } => {
            let client = build_client(&config)?;
            cli::commands::classify::execute(&client, &catalog, &config.experiment, &strategy, &text).await?;
        }

        Commands::Extract { text } => cli::commands::extract::execute(&text),

        Commands::Strategies => cli::commands::strategies::execute(&catalog),
    }

    Ok(())
}

fn build_client(config: &HarnessConfig) -> ReqClassResult<LLMCompletionClient> {
    LLMCompletionClient::new(&config.llm_api).map_err(|e| match e {
        ServiceError::ConfigError(e) => ReqClassError::ConfigError(e),
        other => ReqClassError::from(other),
    })
}

fn setup_logging(log_level: &str) {
    // Set up the logger based on the log level
    let level = match log_level.to_lowercase().as_str() {
        "trace" => log::LevelFilter::Trace,
        "debug" => log::LevelFilter::Debug,
        "info" => log::LevelFilter::Info,
        "warn" => log::LevelFilter::Warn,
        "error" => log::LevelFilter::Error,
        _ => log::LevelFilter::Info,
    };

    env_logger::Builder::new().filter_level(level).init();

    info!("Logger initialized with level: {}", log_level);
}
