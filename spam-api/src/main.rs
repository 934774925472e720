//! spam-api: Spam detector service
//!
//! # Usage
//!
//! ```bash
//! # Serve results over HTTP (default command)
//! spam-api --config spam.toml serve
//!
//! # Train, test and print the results once
//! spam-api evaluate --data-dir ./data
//! ```

use clap::{Parser, Subcommand};
use spam_api::{ApiConfig, ApiServer};
use spam_rs::{Evaluation, SpamDetector};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "spam-api")]
#[command(about = "Naive-Bayes spam detector", long_about = None, version)]
struct Cli {
    /// Path to a TOML configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve results over HTTP
    Serve,
    /// Train and test once, then print every score and the metrics
    Evaluate {
        /// Corpus root (overrides the configuration)
        #[arg(short, long)]
        data_dir: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => ApiConfig::from_file(path)?,
        None => ApiConfig::development(),
    }
    .with_env_overrides();

    init_logging(&config);

    info!("Starting spam-api v{}", env!("CARGO_PKG_VERSION"));
    match &cli.config {
        Some(path) => info!("Configuration loaded from {}", path.display()),
        None => info!("No config file specified, using development defaults"),
    }

    config.validate()?;

    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => {
            let server = ApiServer::new(config);
            server.run().await?;
        }
        Commands::Evaluate { data_dir } => {
            let root = data_dir.unwrap_or_else(|| config.corpus.data_dir.clone());
            let detector = SpamDetector::with_layout(config.corpus.layout.clone());
            let run = tokio::task::spawn_blocking(move || detector.run(&root)).await??;

            println!("{:<40} {:>18} {:<6}", "File", "Spam probability", "Class");
            println!("{:-<66}", "");
            for doc in &run.results {
                println!(
                    "{:<40} {:>18.6} {:<6}",
                    doc.file, doc.spam_probability, doc.actual_class
                );
            }

            let evaluation = Evaluation::from_results(&run.results);
            println!("\nDocuments: {}", evaluation.total);
            println!("Accuracy:  {:.5}", evaluation.accuracy());
            println!("Precision: {:.5}", evaluation.precision());

            let skipped = run.training.skipped.len() + run.testing.skipped.len();
            if skipped > 0 {
                println!("Skipped:   {} unreadable file(s)", skipped);
            }
        }
    }

    Ok(())
}

fn init_logging(config: &ApiConfig) {
    let level = &config.logging.level;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!("spam_api={level},spam_rs={level},tower_http={level}").into()
    });

    let registry = tracing_subscriber::registry().with(filter);
    if config.logging.format == "json" {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}
