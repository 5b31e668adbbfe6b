use std::{io::stdout, process::ExitCode, sync::Arc};

use artsel::{
    config::load_settings,
    info_time,
    process::Session,
    repl::{report, run_interactive, run_once},
    request::{CatalogClient, PageSource},
    Result,
};
use chrono::Local;
use clap::Parser;
use tokio::io::{self, BufReader};
use tracing_subscriber::EnvFilter;

/// Browse the artwork catalog 12 rows at a time and select rows across pages.
#[derive(Parser, Debug)]
#[command(name = "artsel")]
struct Args {
    /// Catalog endpoint, queried as `<endpoint>?page=N`
    #[arg(long)]
    endpoint: Option<String>,
    /// Log filter used when RUST_LOG is unset
    #[arg(long)]
    log: Option<String>,
    /// Per-request timeout in seconds
    #[arg(long)]
    timeout: Option<u64>,
    /// Page to open first (1-based)
    #[arg(long, default_value_t = 1)]
    page: usize,
    /// Select the first N rows, print their ids and exit
    #[arg(long)]
    select: Option<i64>,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let start_time = Local::now();
    let args = Args::parse();
    let settings = load_settings().with_overrides(args.endpoint, args.log, args.timeout);

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&settings.log_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    let client = match settings.request_timeout() {
        Some(timeout) => CatalogClient::with_timeout(settings.endpoint.clone(), timeout)?,
        None => CatalogClient::new(settings.endpoint.clone()),
    };
    let source: Arc<dyn PageSource> = Arc::new(client);
    let mut session = Session::new(source);

    session.load_page(args.page.saturating_sub(1)).await?;

    let mut out = stdout().lock();
    match args.select {
        Some(requested) => {
            if let Err(err) = run_once(&mut session, requested, &mut out).await {
                report(&mut out, &err)?;
                return Ok(ExitCode::FAILURE);
            }
        }
        None => {
            let input = BufReader::new(io::stdin());
            run_interactive(&mut session, input, &mut out).await?;
        }
    }

    info_time!(start_time, "Full program time:");
    Ok(ExitCode::SUCCESS)
}
