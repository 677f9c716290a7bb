//! # CLI Behavior
//!
//! The `trello` binary's user interface. For the layering behind it, see the
//! library docs in `lib.rs`.
//!
//! ## Credentials
//!
//! Each of the API key and token is taken from the first non-blank source:
//!
//! 1. `--api-key` / `--token`
//! 2. `TRELLO_API_KEY` / `TRELLO_TOKEN`
//! 3. `api_key` / `token` in the config file
//!
//! Missing either one fails before any request is sent. `trello config`
//! never needs them.
//!
//! ## Output
//!
//! Results go to stdout as a titled table followed by any messages. Logs and
//! errors go to stderr, so `trello boards | grep Roadmap` sees only the table.

mod commands;
mod render;
mod setup;
mod styles;
mod templates;

pub use commands::run;
