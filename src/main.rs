use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use thiserror::Error;

use countrydex::config::Config;
use countrydex::country::{Country, Region};
use countrydex::directory::DirectoryManager;
use countrydex::facts::{self, fun_fact};
use countrydex::logging::init_tracing;
use countrydex::render;

#[derive(Debug, Parser)]
#[command(name = "countrydex", version, about = "Browse world countries and keep favorites with notes")]
struct Cli {
    /// Config file (default: <config_dir>/countrydex/config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Retry the country fetch up to N times when it fails
    #[arg(long, global = true, value_name = "N", default_value_t = 0)]
    retry: u32,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List countries matching a search and region
    List {
        /// Case-insensitive substring of the country name
        #[arg(long, default_value = "")]
        search: String,
        /// All, Africa, Americas, Asia, Europe or Oceania
        #[arg(long, default_value = "All")]
        region: Region,
        /// Number of pages to show
        #[arg(long, default_value_t = 1)]
        pages: usize,
    },
    /// Show details and a fun fact for one country
    Show {
        id: String,
        /// Skip fun fact generation
        #[arg(long)]
        no_fact: bool,
    },
    /// Toggle a country's favorite status
    Favorite { id: String },
    /// Set the note of a favorite country
    Note { id: String, text: String },
    /// List favorite countries with their notes
    Favorites,
}

#[derive(Debug, Error)]
enum CliError {
    #[error("Country '{0}' not found")]
    CountryNotFound(String),

    #[error("Country '{0}' is not a favorite (run `countrydex favorite {0}` first)")]
    NotFavorite(String),

    #[error("{0}")]
    Unavailable(String),
}

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    match run(cli).await {
        Ok(Screen::Done(output)) => {
            print!("{}", output);
            ExitCode::SUCCESS
        }
        Ok(Screen::Unavailable(output)) => {
            print!("{}", output);
            ExitCode::from(1)
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(1)
        }
    }
}

/// Rendered output of a command.
enum Screen {
    Done(String),
    /// The directory could not be loaded; the output carries the error banner.
    Unavailable(String),
}

async fn run(cli: Cli) -> anyhow::Result<Screen> {
    let config_path = cli.config.clone().unwrap_or_else(Config::config_path);
    let config = Config::load_from(&config_path)?;
    let directory = DirectoryManager::from_config(&config)?;

    load(&directory, cli.retry).await;

    // `list` renders the error banner itself; everything else needs records.
    let is_list = matches!(cli.command, Command::List { .. });
    if !is_list {
        if let Some(message) = unavailable(&directory) {
            return Err(CliError::Unavailable(message).into());
        }
    }

    let output = execute(&directory, &config, cli.command).await?;
    if unavailable(&directory).is_some() {
        Ok(Screen::Unavailable(output))
    } else {
        Ok(Screen::Done(output))
    }
}

async fn execute(
    directory: &DirectoryManager,
    config: &Config,
    command: Command,
) -> anyhow::Result<String> {
    match command {
        Command::List {
            search,
            region,
            pages,
        } => Ok(list(directory, search, region, pages)),
        Command::Show { id, no_fact } => show(directory, config, &id, no_fact).await,
        Command::Favorite { id } => {
            let country = lookup(directory, &id)?;
            if directory.toggle_favorite(&country).await {
                Ok(format!("Added {} to favorites\n", country.display_name()))
            } else {
                Ok(format!("Removed {} from favorites\n", country.display_name()))
            }
        }
        Command::Note { id, text } => {
            let country = lookup(directory, &id)?;
            if !directory.update_note(&country.cca3, &text).await {
                return Err(CliError::NotFavorite(country.cca3).into());
            }
            Ok(format!("Saved note for {}\n", country.display_name()))
        }
        Command::Favorites => Ok(render::favorites(
            &directory.favorite_countries(),
            &directory.favorites(),
        )),
    }
}

/// Initial fetch plus up to `retries` retries.
async fn load(directory: &DirectoryManager, retries: u32) {
    directory.fetch().await;

    let mut attempts = 0;
    while directory.snapshot().error.is_some() && attempts < retries {
        attempts += 1;
        tracing::info!(attempt = attempts, "Retrying country fetch");
        directory.retry().await;
    }
}

/// Error message when nothing could be loaded.
fn unavailable(directory: &DirectoryManager) -> Option<String> {
    let state = directory.snapshot();
    state.error.filter(|_| state.countries.is_empty())
}

fn lookup(directory: &DirectoryManager, id: &str) -> Result<Country, CliError> {
    directory
        .find(id)
        .ok_or_else(|| CliError::CountryNotFound(id.to_string()))
}

fn list(directory: &DirectoryManager, search: String, region: Region, pages: usize) -> String {
    directory.set_search(search);
    directory.set_region(region);
    for _ in 1..pages {
        if !directory.load_more() {
            break;
        }
    }
    render::list(&directory.view(), &directory.favorites())
}

async fn show(
    directory: &DirectoryManager,
    config: &Config,
    id: &str,
    no_fact: bool,
) -> anyhow::Result<String> {
    let country = lookup(directory, id)?;

    let fact = if no_fact {
        None
    } else {
        let generator = facts::from_config(&config.facts)?;
        fun_fact(generator.as_ref(), &country).await
    };

    Ok(render::detail(
        &country,
        directory.favorite(&country.cca3).as_ref(),
        fact.as_deref(),
    ))
}
