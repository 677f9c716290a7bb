//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single
//! entry point for every trello-cli operation, whatever UI sits on top.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Normalizes inputs**: raw id strings become [`BoardRef`]/[`ObjectId`],
//!   repeated or comma separated `--label` values become one label list
//! - **Dispatches** to the matching command function
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! Invalid input is rejected here, before any request is sent.
//!
//! ## What the API Does NOT Do
//!
//! - **Endpoint knowledge**: paths and parameters live in `client/`
//! - **Presentation**: returns tables and messages, never strings for the terminal
//!
//! ## Generic Over Transport
//!
//! `TrelloApi<T: Transport>` is generic over the network layer:
//! - Production: `TrelloApi<HttpTransport>`
//! - Testing: `TrelloApi<MemoryTransport>`

use crate::client::{Transport, TrelloClient};
use crate::commands;
use crate::error::Result;
use crate::ids::{split_label_ids, BoardRef, IdKind, ObjectId};
use crate::model::NewCard;
use std::path::Path;

pub struct TrelloApi<T: Transport> {
    client: TrelloClient<T>,
}

impl<T: Transport> TrelloApi<T> {
    pub fn new(client: TrelloClient<T>) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &TrelloClient<T> {
        &self.client
    }

    pub fn boards(&self) -> Result<commands::CmdResult> {
        commands::boards::run(&self.client)
    }

    pub fn lists(&self, board_id: &str) -> Result<commands::CmdResult> {
        let board = BoardRef::parse(board_id)?;
        commands::lists::run(&self.client, &board)
    }

    pub fn labels(&self, board_id: &str) -> Result<commands::CmdResult> {
        let board = BoardRef::parse(board_id)?;
        commands::labels::run(&self.client, &board)
    }

    pub fn cards(&self, list_id: &str) -> Result<commands::CmdResult> {
        let list = ObjectId::parse(list_id, IdKind::List)?;
        commands::cards::run(&self.client, &list)
    }

    pub fn search(&self, query: &str) -> Result<commands::CmdResult> {
        commands::search::run(&self.client, query)
    }

    pub fn add_card<S: AsRef<str>>(
        &self,
        list_id: &str,
        name: &str,
        labels: &[S],
        comment: Option<&str>,
    ) -> Result<commands::CmdResult> {
        let card = NewCard {
            list: ObjectId::parse(list_id, IdKind::List)?,
            name: name.trim().to_string(),
            labels: split_label_ids(labels)?,
            comment: comment.map(str::to_string),
        };
        commands::add_card::run(&self.client, &card)
    }
}

/// Reads or edits the configuration file. Needs no credentials.
pub fn config(path: &Path, action: ConfigAction) -> Result<commands::CmdResult> {
    commands::config::run(path, action)
}

pub use crate::commands::config::ConfigAction;
pub use crate::commands::{CmdMessage, CmdResult, MessageLevel, Table};
