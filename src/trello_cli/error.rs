use crate::ids::IdKind;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TrelloError {
    #[error(
        "API key and token are required. Either:\n\
         1. Set them via environment variables (.bashrc/.zshrc/etc):\n   \
         TRELLO_API_KEY=your_key\n   \
         TRELLO_TOKEN=your_token\n\
         2. Or provide them as command line options:\n   \
         --api-key and --token"
    )]
    MissingCredentials,

    #[error("Invalid {kind} id '{value}': expected {}", .kind.expected())]
    InvalidId { kind: IdKind, value: String },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Trello API returned {status}: {message}")]
    Http { status: u16, message: String },

    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Unexpected response from Trello: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Card created at {url}, but adding the comment failed: {source}")]
    CommentFailed {
        url: String,
        #[source]
        source: Box<TrelloError>,
    },

    #[error("{action}: {source}")]
    Context {
        action: &'static str,
        #[source]
        source: Box<TrelloError>,
    },
}

impl TrelloError {
    /// Wraps the error with the user-facing operation that was being attempted.
    pub fn context(self, action: &'static str) -> Self {
        TrelloError::Context {
            action,
            source: Box::new(self),
        }
    }
}

pub type Result<T> = std::result::Result<T, TrelloError>;
