//! Trello resources as returned by the REST API.
//!
//! These are read-only views: fetched for a single command and dropped when it
//! finishes. Only the fields the CLI asks for (via the `fields` parameter) are
//! modelled, everything else in the payload is ignored.

use crate::ids::ObjectId;
use serde::{Deserialize, Serialize};

pub const UNNAMED_LABEL: &str = "Unnamed Label";
pub const NO_COLOR: &str = "No Color";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    pub id: String,
    pub name: String,
}

/// A list (column) on a board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardList {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub id_board: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Label {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub id_board: Option<String>,
}

impl Label {
    /// Label names may be empty strings on Trello.
    pub fn display_name(&self) -> &str {
        match self.name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => UNNAMED_LABEL,
        }
    }

    /// Colorless labels come back with a `null` color.
    pub fn display_color(&self) -> &str {
        match self.color.as_deref() {
            Some(color) if !color.is_empty() => color,
            _ => NO_COLOR,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub id_list: Option<String>,
    #[serde(default)]
    pub id_labels: Vec<String>,
    #[serde(default)]
    pub short_url: String,
}

/// The `/search` response. Only cards are requested.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchResults {
    #[serde(default)]
    pub cards: Vec<Card>,
}

/// The action Trello records when a comment is posted.
#[derive(Debug, Clone, Deserialize)]
pub struct CommentAction {
    pub id: String,
}

/// Everything needed to create a card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCard {
    pub list: ObjectId,
    pub name: String,
    pub labels: Vec<ObjectId>,
    pub comment: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_falls_back_for_empty_name_and_null_color() {
        let label: Label =
            serde_json::from_str(r#"{"id":"1","name":"","color":null}"#).unwrap();
        assert_eq!(label.display_name(), UNNAMED_LABEL);
        assert_eq!(label.display_color(), NO_COLOR);
    }

    #[test]
    fn label_keeps_real_values() {
        let label: Label =
            serde_json::from_str(r#"{"id":"1","name":"Bug","color":"red"}"#).unwrap();
        assert_eq!(label.display_name(), "Bug");
        assert_eq!(label.display_color(), "red");
    }

    #[test]
    fn card_reads_camel_case_fields() {
        let card: Card = serde_json::from_str(
            r#"{"id":"c1","name":"Ship it","idList":"l1","idLabels":["a","b"],"shortUrl":"https://trello.com/c/abc"}"#,
        )
        .unwrap();
        assert_eq!(card.id_list.as_deref(), Some("l1"));
        assert_eq!(card.id_labels, vec!["a", "b"]);
        assert_eq!(card.short_url, "https://trello.com/c/abc");
    }

    #[test]
    fn search_results_without_cards_is_empty() {
        let results: SearchResults = serde_json::from_str(r#"{"options":{}}"#).unwrap();
        assert!(results.cards.is_empty());
    }
}
