use crate::client::{Transport, TrelloClient};
use crate::commands::{CmdResult, Table};
use crate::error::Result;
use crate::ids::BoardRef;

pub fn run<T: Transport>(client: &TrelloClient<T>, board: &BoardRef) -> Result<CmdResult> {
    let labels = client.labels(board)?;

    let mut table = Table::new(
        format!("Labels in Board {}", board),
        "labels",
        &["Name", "Label ID", "Color"],
    );
    for label in &labels {
        table.push_row(vec![
            label.display_name().to_string(),
            label.id.clone(),
            label.display_color().to_string(),
        ]);
    }
    Ok(CmdResult::default().with_table(table))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::memory::MemoryTransport;
    use crate::client::Method;
    use crate::commands::test_support::client;

    #[test]
    fn fills_in_unnamed_and_colorless_labels() {
        let transport = MemoryTransport::new().with_response(
            Method::Get,
            "/boards/AbC123xY/labels",
            200,
            r#"[
                {"id":"a1","name":"Bug","color":"red"},
                {"id":"a2","name":"","color":null},
                {"id":"a3","name":"Chore"}
            ]"#,
        );
        let board = BoardRef::parse("AbC123xY").unwrap();

        let table = run(&client(transport), &board).unwrap().table.unwrap();
        assert_eq!(table.title, "Labels in Board AbC123xY");
        assert_eq!(table.columns, vec!["Name", "Label ID", "Color"]);
        assert_eq!(table.rows[0], vec!["Bug", "a1", "red"]);
        assert_eq!(table.rows[1], vec!["Unnamed Label", "a2", "No Color"]);
        assert_eq!(table.rows[2], vec!["Chore", "a3", "No Color"]);
    }
}
