//! # Identifiers
//!
//! Trello addresses every object by a 24 character hexadecimal id. Boards can
//! additionally be addressed by their 8 character short link, the token that
//! shows up in board URLs (`https://trello.com/b/<shortLink>/<slug>`).
//!
//! User input is validated here, before any request goes out, so a typo in an
//! id fails fast with a clear message instead of a remote `invalid id`.

use crate::error::{Result, TrelloError};
use std::fmt;

const OBJECT_ID_LEN: usize = 24;
const SHORT_LINK_LEN: usize = 8;

/// What an identifier refers to, used in error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdKind {
    Board,
    List,
    Label,
    Card,
}

impl IdKind {
    pub fn expected(&self) -> &'static str {
        match self {
            IdKind::Board => "24 hexadecimal characters or an 8 character short link",
            _ => "24 hexadecimal characters",
        }
    }
}

impl fmt::Display for IdKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            IdKind::Board => "board",
            IdKind::List => "list",
            IdKind::Label => "label",
            IdKind::Card => "card",
        };
        f.write_str(name)
    }
}

/// A validated Trello object id.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ObjectId(String);

impl ObjectId {
    pub fn parse(input: &str, kind: IdKind) -> Result<Self> {
        let trimmed = input.trim();
        if is_object_id(trimmed) {
            Ok(ObjectId(trimmed.to_string()))
        } else {
            Err(TrelloError::InvalidId {
                kind,
                value: input.to_string(),
            })
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ObjectId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A board, addressed either by id or by short link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardRef {
    Id(ObjectId),
    ShortLink(String),
}

impl BoardRef {
    pub fn parse(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        if is_object_id(trimmed) {
            return Ok(BoardRef::Id(ObjectId(trimmed.to_string())));
        }
        if trimmed.len() == SHORT_LINK_LEN && trimmed.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Ok(BoardRef::ShortLink(trimmed.to_string()));
        }
        Err(TrelloError::InvalidId {
            kind: IdKind::Board,
            value: input.to_string(),
        })
    }

    pub fn as_str(&self) -> &str {
        match self {
            BoardRef::Id(id) => id.as_str(),
            BoardRef::ShortLink(link) => link,
        }
    }
}

impl fmt::Display for BoardRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn is_object_id(s: &str) -> bool {
    s.len() == OBJECT_ID_LEN && s.chars().all(|c| c.is_ascii_hexdigit())
}

/// Flattens repeated `--label` values into a list of label ids.
///
/// Each input may itself hold a comma separated list. Blank entries are
/// skipped and duplicates collapse onto their first occurrence.
pub fn split_label_ids<S: AsRef<str>>(inputs: &[S]) -> Result<Vec<ObjectId>> {
    let mut ids: Vec<ObjectId> = Vec::new();
    for raw in inputs.iter().flat_map(|s| s.as_ref().split(',')) {
        let raw = raw.trim();
        if raw.is_empty() {
            continue;
        }
        let id = ObjectId::parse(raw, IdKind::Label)?;
        if !ids.contains(&id) {
            ids.push(id);
        }
    }
    Ok(ids)
}

/// Joins ids into the comma separated form the REST API expects.
pub fn join_ids(ids: &[ObjectId]) -> String {
    ids.iter()
        .map(ObjectId::as_str)
        .collect::<Vec<_>>()
        .join(",")
}
