use crate::client::{Transport, TrelloClient};
use crate::commands::{CmdResult, Table};
use crate::error::Result;
use crate::ids::BoardRef;

pub fn run<T: Transport>(client: &TrelloClient<T>, board: &BoardRef) -> Result<CmdResult> {
    let lists = client.lists(board)?;

    let mut table = Table::new(
        format!("Lists in Board {}", board),
        "lists",
        &["Name", "List ID"],
    );
    for list in lists {
        table.push_row(vec![list.name, list.id]);
    }
    Ok(CmdResult::default().with_table(table))
}
