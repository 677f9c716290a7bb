use crate::client::{Transport, TrelloClient};
use crate::commands::{CmdResult, Table};
use crate::error::Result;

pub const TITLE: &str = "Your Trello Boards";

pub fn run<T: Transport>(client: &TrelloClient<T>) -> Result<CmdResult> {
    let boards = client.boards()?;

    let mut table = Table::new(TITLE, "boards", &["Name", "Board ID"]);
    for board in boards {
        table.push_row(vec![board.name, board.id]);
    }
    Ok(CmdResult::default().with_table(table))
}
