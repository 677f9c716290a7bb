use crate::client::{Transport, TrelloClient};
use crate::commands::{card_table, CmdMessage, CmdResult};
use crate::error::{Result, TrelloError};

pub fn run<T: Transport>(client: &TrelloClient<T>, query: &str) -> Result<CmdResult> {
    let query = query.trim();
    if query.is_empty() {
        return Err(TrelloError::InvalidInput(
            "search query cannot be empty".into(),
        ));
    }

    let cards = client.search_cards(query)?;
    if cards.is_empty() {
        return Ok(CmdResult::default().with_message(CmdMessage::info(format!(
            "No cards found for the query string: {}",
            query
        ))));
    }

    let title = format!("Card results for the query string: {}", query);
    Ok(CmdResult::default().with_table(card_table(title, &cards)))
}
