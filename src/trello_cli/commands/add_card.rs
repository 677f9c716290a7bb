use crate::client::{Transport, TrelloClient};
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, TrelloError};
use crate::model::NewCard;

/// Creates the card, then posts the comment if one was given.
///
/// The two calls are not atomic: when the comment fails the card already
/// exists, so the error carries its URL.
pub fn run<T: Transport>(client: &TrelloClient<T>, card: &NewCard) -> Result<CmdResult> {
    if card.name.trim().is_empty() {
        return Err(TrelloError::InvalidInput("card name cannot be empty".into()));
    }

    let created = client.create_card(card)?;
    log::info!("created card {} in list {}", created.id, card.list);

    let mut result = CmdResult::default().with_message(CmdMessage::success(format!(
        "Successfully created card: {}",
        created.short_url
    )));

    let comment = card.comment.as_deref().filter(|c| !c.trim().is_empty());
    if let Some(text) = comment {
        if created.id.is_empty() {
            result.add_message(CmdMessage::warning(
                "Trello did not return a card id; comment was not added",
            ));
        } else {
            client
                .add_comment(&created.id, text)
                .map_err(|e| TrelloError::CommentFailed {
                    url: created.short_url.clone(),
                    source: Box::new(e),
                })?;
            result.add_message(CmdMessage::info("Comment added"));
        }
    }

    Ok(result.with_created_card(created))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::memory::MemoryTransport;
    use crate::client::Method;
    use crate::commands::test_support::{client, LABEL_A, LABEL_B, LIST};
    use crate::commands::MessageLevel;
    use crate::ids::{IdKind, ObjectId};

    const CREATED: &str = r#"{"id":"c42","name":"Ship it","shortUrl":"https://trello.com/c/abc"}"#;

    fn new_card(comment: Option<&str>) -> NewCard {
        NewCard {
            list: ObjectId::parse(LIST, IdKind::List).unwrap(),
            name: "Ship it".into(),
            labels: vec![
                ObjectId::parse(LABEL_A, IdKind::Label).unwrap(),
                ObjectId::parse(LABEL_B, IdKind::Label).unwrap(),
            ],
            comment: comment.map(str::to_string),
        }
    }

    #[test]
    fn creates_card_and_reports_url() {
        let transport = MemoryTransport::new().with_response(Method::Post, "/cards", 200, CREATED);
        let client = client(transport);

        let result = run(&client, &new_card(None)).unwrap();
        assert_eq!(result.messages.len(), 1);
        assert_eq!(result.messages[0].level, MessageLevel::Success);
        assert_eq!(
            result.messages[0].content,
            "Successfully created card: https://trello.com/c/abc"
        );
        assert_eq!(result.created_card.unwrap().id, "c42");
        assert_eq!(client.transport().requests().len(), 1);
    }

    #[test]
    fn posts_comment_after_creation() {
        let transport = MemoryTransport::new()
            .with_response(Method::Post, "/cards", 200, CREATED)
            .with_response(
                Method::Post,
                "/cards/c42/actions/comments",
                200,
                r#"{"id":"act1"}"#,
            );
        let client = client(transport);

        let result = run(&client, &new_card(Some("Needs review"))).unwrap();
        assert_eq!(result.messages[1], CmdMessage::info("Comment added"));

        let requests = client.transport().requests();
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[1].path, "/cards/c42/actions/comments");
        assert_eq!(requests[1].query_value("text"), Some("Needs review"));
    }

    #[test]
    fn blank_comment_is_skipped() {
        let transport = MemoryTransport::new().with_response(Method::Post, "/cards", 200, CREATED);
        let client = client(transport);

        run(&client, &new_card(Some("  "))).unwrap();
        assert_eq!(client.transport().requests().len(), 1);
    }

    #[test]
    fn comment_failure_keeps_card_url() {
        let transport = MemoryTransport::new()
            .with_response(Method::Post, "/cards", 200, CREATED)
            .with_response(
                Method::Post,
                "/cards/c42/actions/comments",
                400,
                "invalid value for text",
            );
        let client = client(transport);

        match run(&client, &new_card(Some("hi"))) {
            Err(TrelloError::CommentFailed { url, source }) => {
                assert_eq!(url, "https://trello.com/c/abc");
                assert!(source.to_string().contains("invalid value for text"));
            }
            other => panic!("expected CommentFailed, got {:?}", other),
        }
    }

    #[test]
    fn blank_name_is_rejected() {
        let client = client(MemoryTransport::new());
        let mut card = new_card(None);
        card.name = " ".into();

        assert!(matches!(
            run(&client, &card),
            Err(TrelloError::InvalidInput(_))
        ));
        assert!(client.transport().requests().is_empty());
    }

    #[test]
    fn missing_card_id_skips_comment_with_warning() {
        let transport = MemoryTransport::new().with_response(
            Method::Post,
            "/cards",
            200,
            r#"{"id":"","name":"Ship it","shortUrl":"https://trello.com/c/abc"}"#,
        );
        let client = client(transport);

        let result = run(&client, &new_card(Some("hi"))).unwrap();
        assert_eq!(result.messages[1].level, MessageLevel::Warning);
        assert_eq!(client.transport().requests().len(), 1);
    }
}
