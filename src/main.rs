use anyhow::{Context, Result};
use clap::Parser;
use pubcite::config::RunConfig;
use pubcite::source::PubMedSource;
use pubcite::{output, pipeline};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Query PubMed for an author's publications and populate a Jekyll data file
#[derive(Parser, Debug)]
#[command(name = "pubcite")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(
    about = "Populate a Jekyll data file with an author's PubMed citations",
    long_about = None
)]
struct Cli {
    /// Contact email sent with every NCBI E-utilities request
    email: String,

    /// Author to search, formatted "LastName INITIALS"
    author: String,

    /// Maximum number of records to search
    #[arg(long)]
    max: usize,

    /// Print full record info, including abstracts, to stdout
    #[arg(short, long)]
    verbose: bool,

    /// Skip writing the data file
    #[arg(short = 'd', long = "do_not_populate")]
    do_not_populate: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "pubcite=info".to_string()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = RunConfig::new(cli.email, cli.author, cli.max)
        .verbose(cli.verbose)
        .do_not_populate(cli.do_not_populate);

    let source = PubMedSource::new(&config.email);
    let citations = pipeline::collect_citations(&source, &config)
        .await
        .context("PubMed query failed")?;

    output::emit(&citations, &config)
        .with_context(|| format!("failed to write {}", config.data_file.display()))?;

    if config.do_not_populate {
        tracing::info!(count = citations.len(), "dry run, data file untouched");
    } else {
        tracing::info!(
            count = citations.len(),
            file = %config.data_file.display(),
            "populated data file"
        );
    }
    Ok(())
}
