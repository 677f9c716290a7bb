//! # CLI Layer
//!
//! This module is **one possible UI client** for trello-cli. The library does
//! not depend on it.
//!
//! The CLI layer is the **only** place in the codebase that:
//! - Knows about terminal I/O (stdout, stderr)
//! - Initializes logging
//! - Reads credentials from flags and the environment
//! - Formats output for human consumption
//!
//! ## Flow
//!
//! 1. Parse arguments with clap
//! 2. Initialize logging from `-v` / `RUST_LOG`
//! 3. `config` subcommands run straight against the config file
//! 4. Everything else builds an [`AppContext`] (config, credentials, HTTP
//!    transport) and goes through [`dispatch`]
//! 5. The [`CmdResult`] is rendered to stdout
//!
//! [`dispatch`] is generic over the transport so tests run the exact
//! command-to-API mapping against a `MemoryTransport`.

use super::render::print_result;
use super::setup::{Cli, Commands, ConfigCommands, GlobalArgs};
use clap::Parser;
use log::LevelFilter;
use std::path::{Path, PathBuf};
use std::time::Duration;
use trello_cli::api::{self, CmdResult, ConfigAction, TrelloApi};
use trello_cli::client::http::HttpTransport;
use trello_cli::client::{Transport, TrelloClient};
use trello_cli::config::{Credentials, TrelloConfig};
use trello_cli::error::{Result, TrelloError};

struct AppContext {
    api: TrelloApi<HttpTransport>,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.global.verbose);

    let config_path = resolve_config_path(&cli.global)?;
    log::debug!("using config file {}", config_path.display());

    let result = match cli.command {
        Commands::Config { action } => api::config(&config_path, config_action(action))?,
        command => {
            let ctx = init_context(&cli.global, &config_path)?;
            dispatch(&ctx.api, command)?
        }
    };

    print_result(&result);
    Ok(())
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    // RUST_LOG, when set, wins over -v. reqwest logs full URLs, query
    // credentials included, so it stays at warn under -v.
    let _ = env_logger::Builder::new()
        .filter_level(level)
        .filter_module("reqwest", LevelFilter::Warn)
        .parse_default_env()
        .format_timestamp(None)
        .target(env_logger::Target::Stderr)
        .try_init();
}

fn resolve_config_path(global: &GlobalArgs) -> Result<PathBuf> {
    match &global.config {
        Some(path) => Ok(path.clone()),
        None => TrelloConfig::default_path(),
    }
}

fn init_context(global: &GlobalArgs, config_path: &Path) -> Result<AppContext> {
    let config = TrelloConfig::load(config_path)?;
    let credentials =
        Credentials::resolve(global.api_key.as_deref(), global.token.as_deref(), &config)?;
    log::debug!("resolved {:?}", credentials);

    let base_url = global
        .base_url
        .as_deref()
        .map(str::trim)
        .filter(|url| !url.is_empty())
        .unwrap_or(&config.base_url);
    let transport = HttpTransport::new(base_url, Duration::from_secs(config.timeout_secs))?;
    log::debug!("sending requests to {}", transport.base_url());

    Ok(AppContext {
        api: TrelloApi::new(TrelloClient::new(transport, credentials)),
    })
}

fn config_action(command: Option<ConfigCommands>) -> ConfigAction {
    match command {
        None | Some(ConfigCommands::Show) => ConfigAction::Show,
        Some(ConfigCommands::Path) => ConfigAction::Path,
        Some(ConfigCommands::Set { key, value }) => ConfigAction::Set(key, value),
        Some(ConfigCommands::Unset { key }) => ConfigAction::Unset(key),
    }
}

/// Maps a parsed command onto the API, labelling failures with what was being attempted.
fn dispatch<T: Transport>(api: &TrelloApi<T>, command: Commands) -> Result<CmdResult> {
    match command {
        Commands::Boards => api
            .boards()
            .map_err(|e| e.context("could not retrieve boards")),
        Commands::Lists { board_id } => api
            .lists(&board_id)
            .map_err(|e| e.context("could not retrieve lists")),
        Commands::Labels { board_id } => api
            .labels(&board_id)
            .map_err(|e| e.context("could not retrieve labels")),
        Commands::ViewCards { list_id } => api
            .cards(&list_id)
            .map_err(|e| e.context("could not display the cards in list")),
        Commands::Search { query } => api
            .search(&query)
            .map_err(|e| e.context("could not retrieve search results")),
        Commands::AddCard {
            list_id,
            name,
            labels,
            comment,
        } => api
            .add_card(&list_id, &name, labels.as_slice(), comment.as_deref())
            .map_err(|e| e.context("could not create card")),
        // Handled in run() before credentials are required.
        Commands::Config { .. } => Err(TrelloError::InvalidInput(
            "config is not an API command".into(),
        )),
    }
}
