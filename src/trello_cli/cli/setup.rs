use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use trello_cli::config::ConfigKey;

/// Returns the version string, including git hash and commit date for non-release builds.
/// Format: "0.3.0" for releases, "0.3.0@abc1234 2024-01-15 14:30" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "trello", bin_name = "trello", version = get_version())]
#[command(
    about = "Browse Trello boards, lists and labels, search and create cards",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub global: GlobalArgs,
}

#[derive(Args, Debug, Default)]
pub struct GlobalArgs {
    /// Trello API key
    #[arg(
        long,
        global = true,
        env = "TRELLO_API_KEY",
        hide_env_values = true,
        help_heading = "Credentials"
    )]
    pub api_key: Option<String>,

    /// Trello API token
    #[arg(
        long,
        global = true,
        env = "TRELLO_TOKEN",
        hide_env_values = true,
        help_heading = "Credentials"
    )]
    pub token: Option<String>,

    /// Trello API root, overrides the config file
    #[arg(long, global = true, env = "TRELLO_API_URL", value_name = "URL")]
    pub base_url: Option<String>,

    /// Config file to use instead of the default location
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Verbose output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List all boards you belong to
    Boards,

    /// List the lists in a board
    Lists {
        /// Board id or short link
        #[arg(short = 'b', long = "board-id")]
        board_id: String,
    },

    /// List the labels defined on a board
    Labels {
        /// Board id or short link
        #[arg(short = 'b', long = "board-id")]
        board_id: String,
    },

    /// List the cards in a list
    ViewCards {
        #[arg(short = 'l', long = "list-id")]
        list_id: String,
    },

    /// Search cards across all boards
    Search {
        #[arg(short = 'q', long = "query")]
        query: String,
    },

    /// Create a card, optionally labelled and commented
    AddCard {
        /// List the card goes into
        #[arg(short = 'l', long = "list-id")]
        list_id: String,

        /// Card name
        #[arg(short = 'n', long = "name")]
        name: String,

        /// Label ids, repeat the flag or separate with commas
        #[arg(short = 'L', long = "label", value_name = "ID[,ID...]")]
        labels: Vec<String>,

        /// Comment posted on the new card
        #[arg(short = 'c', long = "comment")]
        comment: Option<String>,
    },

    /// Show or edit the configuration file
    Config {
        #[command(subcommand)]
        action: Option<ConfigCommands>,
    },
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum ConfigCommands {
    /// Show all settings, secrets masked
    Show,

    /// Print the config file location
    Path,

    /// Set a value (api-key, token, base-url, timeout)
    Set { key: ConfigKey, value: String },

    /// Reset a value to its default
    Unset { key: ConfigKey },
}
