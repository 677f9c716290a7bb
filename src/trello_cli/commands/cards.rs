use crate::client::{Transport, TrelloClient};
use crate::commands::{card_table, CmdMessage, CmdResult};
use crate::error::Result;
use crate::ids::ObjectId;

pub const EMPTY_LIST_MESSAGE: &str = "The list does not contain any cards yet";

/// Cards in a list. The list's name is only fetched when there is something to show.
pub fn run<T: Transport>(client: &TrelloClient<T>, list: &ObjectId) -> Result<CmdResult> {
    let cards = client.cards_in_list(list)?;
    if cards.is_empty() {
        return Ok(CmdResult::default().with_message(CmdMessage::info(EMPTY_LIST_MESSAGE)));
    }

    let list_name = client.list(list)?.name;
    let title = format!("Cards in list: {}[{}]", list_name, list);
    Ok(CmdResult::default().with_table(card_table(title, &cards)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::memory::MemoryTransport;
    use crate::client::Method;
    use crate::commands::test_support::{client, LIST};
    use crate::ids::IdKind;

    fn list_id() -> ObjectId {
        ObjectId::parse(LIST, IdKind::List).unwrap()
    }

    #[test]
    fn shows_cards_under_list_name() {
        let transport = MemoryTransport::new()
            .with_response(
                Method::Get,
                &format!("/lists/{}/cards", LIST),
                200,
                r#"[{"id":"c1","name":"Write tests","shortUrl":"https://trello.com/c/1"}]"#,
            )
            .with_response(
                Method::Get,
                &format!("/lists/{}", LIST),
                200,
                r#"{"id":"60aa11bb22cc33dd44ee55ff","name":"Doing"}"#,
            );
        let client = client(transport);

        let table = run(&client, &list_id()).unwrap().table.unwrap();
        assert_eq!(table.title, format!("Cards in list: Doing[{}]", LIST));
        assert_eq!(table.columns, vec!["Card ID", "Name", "URL"]);
        assert_eq!(
            table.rows[0],
            vec!["c1", "Write tests", "https://trello.com/c/1"]
        );

        let requests = client.transport().requests();
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[1].query_value("fields"), Some("name"));
    }

    #[test]
    fn empty_list_skips_name_lookup() {
        let transport = MemoryTransport::new().with_response(
            Method::Get,
            &format!("/lists/{}/cards", LIST),
            200,
            "[]",
        );
        let client = client(transport);

        let result = run(&client, &list_id()).unwrap();
        assert!(result.table.is_none());
        assert_eq!(result.messages, vec![CmdMessage::info(EMPTY_LIST_MESSAGE)]);
        assert_eq!(client.transport().requests().len(), 1);
    }
}
