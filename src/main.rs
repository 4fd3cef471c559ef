//! daf-yomi - Daf Yomi note generator
//!
//! Usage:
//!   daf-yomi by-date \[DATE\]            Add the note for a date (default: today)
//!   daf-yomi by-daf TRACTATE \[PAGE\]    Add the note for a tractate and page
//!   daf-yomi today                     Show today's Daf
//!   daf-yomi tractates                 List the tractates in the calendar

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::{Parser, Subcommand};

use daf_yomi::adapters::{LocalVaultStorage, ReqwestPdfFetcher, TracingNotifier};
use daf_yomi::application::{
    AddPageByDafCommand, AddPageByDafHandler, AddPageByDateCommand, AddPageByDateHandler,
    AddPageError, AddPageHandler, AddPageResult, TodaysDafHandler, TodaysDafQuery,
};
use daf_yomi::config::{AppConfig, ConfigError};
use daf_yomi::domain::calendar::{Catalog, CatalogError};
use daf_yomi::domain::daf::FIRST_PAGE;
use daf_yomi::ports::FetchError;

#[derive(Parser)]
#[command(name = "daf-yomi")]
#[command(about = "Create Daf Yomi study notes")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Settings file (TOML, YAML or JSON)
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Vault directory, overriding the configured one
    #[arg(long, global = true, value_name = "DIR")]
    vault: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Add the note for the Daf studied on a date
    ByDate {
        /// Date as YYYY-MM-DD (defaults to today)
        date: Option<String>,
    },
    /// Add the note for a tractate and page
    ByDaf {
        /// Tractate name as listed by `tractates`
        tractate: String,
        /// Page number (defaults to today's page in that tractate, else 2)
        page: Option<String>,
    },
    /// Show today's Daf
    Today,
    /// List the tractates in the calendar, most recent first
    Tractates,
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    AddPage(#[from] AddPageError),
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let mut config = AppConfig::load(cli.config.as_deref())?;
    if let Some(vault) = cli.vault {
        config.vault.root = vault;
    }
    config.validate().map_err(ConfigError::from)?;
    config.logging.init();

    let catalog = Arc::new(match &config.vault.catalog_path {
        Some(path) => Catalog::from_path(path)?,
        None => Catalog::bundled()?,
    });

    match cli.command {
        Commands::Today => {
            let today = TodaysDafHandler::new(catalog).handle(TodaysDafQuery::default());
            match today.daf {
                Some(daf) => println!("{daf} (Perek {})", daf.chapter()),
                None => println!("No Daf for today"),
            }
            Ok(())
        }
        Commands::Tractates => {
            for name in catalog.display_names() {
                println!("{name}");
            }
            Ok(())
        }
        Commands::ByDate { date } => {
            let add_page = build_add_page(&config)?;
            let cmd = match date {
                Some(date) => AddPageByDateCommand::new(date),
                None => AddPageByDateCommand::today(),
            };
            let result = AddPageByDateHandler::new(catalog, add_page).handle(cmd).await?;
            report(result).await;
            Ok(())
        }
        Commands::ByDaf { tractate, page } => {
            let add_page = build_add_page(&config)?;
            let page = page.unwrap_or_else(|| default_page(&catalog, &tractate));
            let cmd = AddPageByDafCommand { tractate, page };
            let result = AddPageByDafHandler::new(catalog, add_page).handle(cmd).await?;
            report(result).await;
            Ok(())
        }
    }
}

fn build_add_page(config: &AppConfig) -> Result<Arc<AddPageHandler>, CliError> {
    let fetcher = ReqwestPdfFetcher::new(config.vault.fetch_timeout())?;
    Ok(Arc::new(AddPageHandler::new(
        Arc::new(LocalVaultStorage::new(&config.vault.root)),
        Arc::new(fetcher),
        Arc::new(TracingNotifier::new()),
        config.notes.clone(),
        config.vault.attachment_folder(),
    )))
}

/// Today's page when `tractate` is being studied today, else the first page.
fn default_page(catalog: &Arc<Catalog>, tractate: &str) -> String {
    let today = TodaysDafHandler::new(Arc::clone(catalog)).handle(TodaysDafQuery::default());
    today
        .daf
        .filter(|daf| daf.tractate() == tractate)
        .map(|daf| daf.page())
        .unwrap_or(FIRST_PAGE)
        .to_string()
}

/// Prints the note path and waits for the PDF download so the process does
/// not exit under it.
async fn report(result: AddPageResult) {
    println!("{}", result.note.path);
    if let Some(task) = result.pdf_task {
        match task.await {
            Ok(Ok(path)) => println!("{path}"),
            Ok(Err(err)) => eprintln!("warning: {err}"),
            Err(err) => eprintln!("warning: PDF download task failed: {err}"),
        }
    }
}
