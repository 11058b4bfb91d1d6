// file: src/main.rs
// description: commandline application entry point with command handling
// reference: application bootstrap and orchestration

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use model_fetch::utils::logging::{format_success, format_warning};
use model_fetch::{Config, Credentials, FetchOutcome, FetchRunner, GraphQlClient, JsonExporter};
use std::path::PathBuf;
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "model_fetch")]
#[command(version)]
#[command(about = "Fetch 3D model listings from the Cults3D GraphQL API into a JSON file", long_about = None)]
struct Cli {
    #[arg(
        short,
        long,
        value_name = "FILE",
        default_value = model_fetch::config::DEFAULT_CONFIG_PATH
    )]
    config: PathBuf,

    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    color: bool,

    #[arg(short, long, action = ArgAction::SetTrue)]
    verbose: bool,

    /// Output file, overriding the configured path
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Search the marketplace for each term and merge the results (default)
    Search {
        /// Search term; repeat to replace the configured list
        #[arg(short, long = "term", value_name = "TERM")]
        terms: Vec<String>,
    },

    /// Fetch the authenticated account's own creations
    Creations {
        #[arg(short, long, value_name = "NUM")]
        limit: Option<usize>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    model_fetch::utils::logging::init_logger(cli.color, cli.verbose);

    let mut config = if cli.config.exists() {
        info!("Loading configuration from: {}", cli.config.display());
        Config::load(Some(cli.config.as_path())).context("Failed to load configuration")?
    } else {
        warn!(
            "Config file {} not found, using default configuration",
            cli.config.display()
        );
        Config::load(None).context("Failed to load configuration")?
    };

    if let Some(output) = cli.output {
        config.output.path = output;
    }

    let credentials = Credentials::from_env().context("API credentials are not configured")?;
    info!("Authenticating as {}", credentials.username());

    let client = GraphQlClient::new(config.api.endpoint.clone(), &credentials)
        .context("Failed to create GraphQL client")?;
    let runner = FetchRunner::new(client, config.search.clone()).with_progress(cli.color);

    let outcome = match cli.command.unwrap_or(Commands::Search { terms: Vec::new() }) {
        Commands::Search { terms } => cmd_search(&runner, &config, terms).await?,
        Commands::Creations { limit } => cmd_creations(&runner, &config, limit).await?,
    };

    let exporter = JsonExporter::new(&config.output.path).context("Failed to prepare output")?;
    exporter
        .write(&outcome.records)
        .context("Failed to write output file")?;

    report(&outcome, &exporter);

    Ok(())
}

async fn cmd_search(
    runner: &FetchRunner,
    config: &Config,
    terms: Vec<String>,
) -> Result<FetchOutcome> {
    let terms = if terms.is_empty() {
        config.search.terms.clone()
    } else {
        model_fetch::Validator::validate_search_terms(&terms)?;
        terms
    };

    runner.run_search(&terms).await.context("Search run aborted")
}

async fn cmd_creations(
    runner: &FetchRunner,
    config: &Config,
    limit: Option<usize>,
) -> Result<FetchOutcome> {
    let limit = limit.unwrap_or(config.creations.limit);
    if limit == 0 {
        anyhow::bail!("--limit must be greater than 0");
    }

    runner
        .run_creations(limit)
        .await
        .context("Failed to fetch creations")
}

fn report(outcome: &FetchOutcome, exporter: &JsonExporter) {
    let stats = &outcome.stats;

    println!(
        "{}",
        format_success(&format!(
            "{} unique model(s) written to {}",
            outcome.records.len(),
            exporter.path().display()
        ))
    );

    if stats.terms_failed > 0 {
        println!(
            "{}",
            format_warning(&format!(
                "{} of {} request(s) failed ({:.0}% succeeded)",
                stats.terms_failed,
                stats.terms_attempted,
                stats.success_rate()
            ))
        );
    }
}
