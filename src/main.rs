use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing::{info, warn};

use truthfort::config::Config;
use truthfort::evidence::fixed::StaticEvidence;
use truthfort::verify::{ClaimVerificationEngine, KeywordExtractor};

/// TruthFort: check a factual claim against recent news coverage.
///
/// Extracts keywords from the claim, pulls matching articles from NewsAPI,
/// and scores how closely the coverage matches the claim.
#[derive(Parser)]
#[command(name = "truthfort", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize the user database
    Init,

    /// Verify a claim and print the verdict
    Verify {
        /// The claim to check (e.g. "The Eiffel Tower is in Paris")
        claim: String,

        /// Print the raw JSON result instead of the formatted view
        #[arg(long)]
        json: bool,

        /// Score against documents in a local file (one per line) instead of NewsAPI
        #[arg(long)]
        evidence_file: Option<PathBuf>,
    },

    /// Restore the daily quota for Free accounts
    ResetUsage,

    /// Run the HTTP API
    #[cfg(feature = "web")]
    Serve {
        /// Port to listen on (default: TRUTHFORT_PORT or 8000)
        #[arg(long)]
        port: Option<u16>,

        /// Address to bind (default: TRUTHFORT_BIND or 0.0.0.0)
        #[arg(long)]
        bind: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("truthfort=info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Init => {
            info!("Initializing TruthFort database...");
            let config = Config::load()?;
            let db = truthfort::db::initialize_sqlite(&config.db_path)?;
            let table_count = db.table_count().await?;
            println!("Database initialized at: {}", config.db_path);
            println!("Tables created: {table_count}");
            println!("\nNext step: set NEWS_API_KEY in your .env file, then run:");
            println!("  cargo run -- verify \"The Eiffel Tower is in Paris\"");
        }

        Commands::Verify {
            claim,
            json,
            evidence_file,
        } => {
            let config = Config::load()?;

            let engine = match evidence_file {
                Some(path) => {
                    let source = StaticEvidence::from_file(&path)?;
                    let extractor = KeywordExtractor::new(&config.stopword_source());
                    ClaimVerificationEngine::with_extractor(Arc::new(source), extractor)
                }
                None => {
                    if let Err(e) = config.require_news_api_key() {
                        warn!("{e}");
                    }
                    ClaimVerificationEngine::from_config(&config)?
                }
            };

            let result = engine.verify(&claim).await;

            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                truthfort::output::terminal::display_result(&result);
            }
        }

        Commands::ResetUsage => {
            let config = Config::load()?;
            let db = truthfort::db::initialize_sqlite(&config.db_path)?;
            let reset = db.reset_daily_usage(&truthfort::db::today()).await?;
            println!("{}", format!("Reset daily usage for {reset} accounts.").bold());
        }

        #[cfg(feature = "web")]
        Commands::Serve { port, bind } => {
            let config = Config::load()?;
            if let Err(e) = config.require_news_api_key() {
                warn!("{e}");
            }

            let db = truthfort::db::initialize_sqlite(&config.db_path)?;
            let reset = db.reset_daily_usage(&truthfort::db::today()).await?;
            info!(accounts = reset, "Applied daily usage reset");

            let engine = ClaimVerificationEngine::from_config(&config)?;
            let port = port.unwrap_or(config.port);
            let bind = bind.unwrap_or_else(|| config.bind.clone());

            println!("{}", "TruthFort server starting...".bold());
            truthfort::web::run_server(db, engine, port, &bind).await?;
        }
    }

    Ok(())
}
