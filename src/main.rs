use std::process::ExitCode;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use price_dashboard::models::PriceResult;
use price_dashboard::presenter::{present, present_entry};
use price_dashboard::render::{Notice, Renderer};
use price_dashboard::{config, sample, DashboardError, HttpPriceApi, Session};

#[derive(Debug, Parser)]
#[command(name = "price-dashboard")]
#[command(about = "Search product prices and browse saved results")]
struct App {
    /// Backend base URL
    #[arg(long, global = true, env = config::BASE_URL_ENV, default_value = config::DEFAULT_BASE_URL)]
    url: String,
    /// HTTP timeout in seconds
    #[arg(long, global = true, default_value = "30")]
    timeout: u64,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Search prices for a keyword and show stats and the distribution
    Search {
        #[arg(required = true, num_args = 1..)]
        keyword: Vec<String>,
    },
    /// Search, then save the result explicitly
    Save {
        #[arg(required = true, num_args = 1..)]
        keyword: Vec<String>,
    },
    /// List saved searches
    History,
    /// Reload a saved search by filename
    Load { filename: String },
    /// Render a synthetic result without contacting the backend
    Demo {
        /// Keyword choosing the price range
        #[arg(default_value = "wireless mouse")]
        keyword: String,
        /// Number of prices to generate
        #[arg(long, default_value = "50")]
        count: usize,
    },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let app = App::parse();
    match run(app) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let message = e
                .downcast_ref::<DashboardError>()
                .map(DashboardError::user_message)
                .unwrap_or_else(|| format!("{e:#}"));
            let _ = Renderer::stdout().notice(&Notice::error(message));
            ExitCode::FAILURE
        }
    }
}

fn run(app: App) -> Result<()> {
    let mut out = Renderer::stdout();
    let connect = || -> Result<Session<HttpPriceApi>> {
        Session::builder()
            .base_url(app.url.as_str())
            .timeout(Duration::from_secs(app.timeout))
            .build()
            .context("failed to create dashboard session")
    };

    match app.command {
        Commands::Search { keyword } => {
            let session = connect()?;
            let result = session.search(&keyword.join(" "))?;
            show_result(&mut out, &result)?;
            out.notice(&Notice::success(search_message(&result)))?;
        }
        Commands::Save { keyword } => {
            let session = connect()?;
            let result = session.search(&keyword.join(" "))?;
            let filename = session.save()?;
            show_result(&mut out, &session.current().unwrap_or(result))?;
            out.notice(&Notice::success(format!("saved as {filename}")))?;
        }
        Commands::History => history(&mut out, &connect()?)?,
        Commands::Load { filename } => {
            let session = connect()?;
            let result = session.load_entry(&filename)?;
            show_result(&mut out, &result)?;
            out.notice(&Notice::success(format!(
                "loaded saved search \"{}\"",
                result.keyword
            )))?;
        }
        Commands::Demo { keyword, count } => demo(&mut out, &keyword, count)?,
    }
    Ok(())
}

fn show_result<W: std::io::Write>(out: &mut Renderer<W>, result: &PriceResult) -> Result<()> {
    out.result(&present(result))?;
    Ok(())
}

fn search_message(result: &PriceResult) -> String {
    let base = format!(
        "\"{}\" done: analyzed {} prices",
        result.keyword, result.stats.count
    );
    match &result.saved_filename {
        Some(filename) => format!("{base}; auto-saved as {filename}"),
        None => base,
    }
}

fn history<W: std::io::Write>(out: &mut Renderer<W>, session: &Session<HttpPriceApi>) -> Result<()> {
    let entries = session.history().refresh_list();
    if !session.history().is_available() {
        anyhow::bail!("history unavailable");
    }
    let items: Vec<_> = entries.iter().map(present_entry).collect();
    out.history(&items)?;
    Ok(())
}

fn demo<W: std::io::Write>(out: &mut Renderer<W>, keyword: &str, count: usize) -> Result<()> {
    let record = sample::sample_record(&mut rand::thread_rng(), keyword, count);
    let result = PriceResult::from(record);
    show_result(out, &result)?;
    out.notice(&Notice::success(format!(
        "demo: {} synthetic prices",
        result.stats.count
    )))?;
    Ok(())
}
