use crate::client::DEFAULT_BASE_URL;
use crate::error::{Result, TrelloError};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for trello-cli, stored as JSON in the user's config dir.
///
/// Every field is optional in the file. Flags and environment variables take
/// precedence over anything stored here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TrelloConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,

    /// Root of the REST API, without a trailing slash
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl Default for TrelloConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            token: None,
            base_url: default_base_url(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

/// Keys settable through `trello config set`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigKey {
    ApiKey,
    Token,
    BaseUrl,
    Timeout,
}

impl ConfigKey {
    pub const ALL: [ConfigKey; 4] = [
        ConfigKey::ApiKey,
        ConfigKey::Token,
        ConfigKey::BaseUrl,
        ConfigKey::Timeout,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ConfigKey::ApiKey => "api-key",
            ConfigKey::Token => "token",
            ConfigKey::BaseUrl => "base-url",
            ConfigKey::Timeout => "timeout",
        }
    }

    pub fn is_secret(&self) -> bool {
        matches!(self, ConfigKey::ApiKey | ConfigKey::Token)
    }
}

impl fmt::Display for ConfigKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ConfigKey {
    type Err = TrelloError;

    fn from_str(s: &str) -> Result<Self> {
        ConfigKey::ALL
            .into_iter()
            .find(|key| key.name() == s)
            .ok_or_else(|| {
                let known: Vec<&str> = ConfigKey::ALL.iter().map(ConfigKey::name).collect();
                TrelloError::InvalidInput(format!(
                    "unknown config key '{}' (expected one of: {})",
                    s,
                    known.join(", ")
                ))
            })
    }
}

impl TrelloConfig {
    /// The default location, `<config dir>/trello-cli/config.json`.
    pub fn default_path() -> Result<PathBuf> {
        ProjectDirs::from("com", "trello-cli", "trello-cli")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILENAME))
            .ok_or_else(|| TrelloError::Config("could not determine config directory".into()))
    }

    /// Load config from the given file, or return defaults if it doesn't exist.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            log::debug!("no config file at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| TrelloError::Config(format!("{}: {}", path.display(), e)))
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| TrelloError::Config(e.to_string()))?;
        fs::write(path, content)?;
        Ok(())
    }

    pub fn get(&self, key: ConfigKey) -> Option<String> {
        match key {
            ConfigKey::ApiKey => self.api_key.clone(),
            ConfigKey::Token => self.token.clone(),
            ConfigKey::BaseUrl => Some(self.base_url.clone()),
            ConfigKey::Timeout => Some(self.timeout_secs.to_string()),
        }
    }

    pub fn set(&mut self, key: ConfigKey, value: &str) -> Result<()> {
        let value = value.trim();
        if value.is_empty() {
            return Err(TrelloError::InvalidInput(format!(
                "value for '{}' cannot be empty",
                key
            )));
        }
        match key {
            ConfigKey::ApiKey => self.api_key = Some(value.to_string()),
            ConfigKey::Token => self.token = Some(value.to_string()),
            ConfigKey::BaseUrl => self.base_url = value.trim_end_matches('/').to_string(),
            ConfigKey::Timeout => {
                self.timeout_secs = value
                    .parse()
                    .ok()
                    .filter(|secs: &u64| *secs > 0)
                    .ok_or_else(|| {
                        TrelloError::InvalidInput(format!(
                            "timeout must be a positive whole number of seconds, got '{}'",
                            value
                        ))
                    })?
            }
        }
        Ok(())
    }

    /// Resets a key to its default.
    pub fn unset(&mut self, key: ConfigKey) {
        match key {
            ConfigKey::ApiKey => self.api_key = None,
            ConfigKey::Token => self.token = None,
            ConfigKey::BaseUrl => self.base_url = default_base_url(),
            ConfigKey::Timeout => self.timeout_secs = DEFAULT_TIMEOUT_SECS,
        }
    }
}

/// The API key and token every request is signed with.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub api_key: String,
    pub token: String,
}

impl Credentials {
    pub fn new(api_key: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            token: token.into(),
        }
    }

    /// Picks each value from the command line (which already folds in the
    /// `TRELLO_API_KEY`/`TRELLO_TOKEN` environment) and falls back to the
    /// config file. Blank values count as missing.
    pub fn resolve(
        api_key: Option<&str>,
        token: Option<&str>,
        config: &TrelloConfig,
    ) -> Result<Self> {
        let api_key = first_present(api_key, config.api_key.as_deref());
        let token = first_present(token, config.token.as_deref());

        match (api_key, token) {
            (Some(api_key), Some(token)) => Ok(Self::new(api_key, token)),
            _ => Err(TrelloError::MissingCredentials),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &mask_secret(&self.api_key))
            .field("token", &mask_secret(&self.token))
            .finish()
    }
}

fn first_present(primary: Option<&str>, fallback: Option<&str>) -> Option<String> {
    [primary, fallback]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|v| !v.is_empty())
        .map(str::to_string)
}

/// Hides all but the last four characters of a secret.
pub fn mask_secret(secret: &str) -> String {
    let chars: Vec<char> = secret.chars().collect();
    if chars.len() <= 4 {
        return "*".repeat(chars.len());
    }
    let visible: String = chars[chars.len() - 4..].iter().collect();
    format!("{}{}", "*".repeat(chars.len() - 4), visible)
}
