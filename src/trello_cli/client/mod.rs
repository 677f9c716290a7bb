//! # Client Layer
//!
//! [`TrelloClient`] knows the Trello REST endpoints: which path, which method,
//! which `fields` to ask for. It signs every request with the API key and
//! token and turns responses into typed models.
//!
//! The network itself sits behind the [`Transport`] trait:
//!
//! - [`http::HttpTransport`]: production transport over `reqwest`'s blocking client
//! - [`memory::MemoryTransport`]: canned responses plus a request log, for tests
//!
//! Swapping the transport lets every layer above (commands, API facade, CLI)
//! be tested by asserting on the requests that *would* have been sent.
//!
//! ## Status Handling
//!
//! A 2xx body is decoded with `serde_json`. Anything else becomes
//! [`TrelloError::Http`] carrying the status and Trello's error text, which is
//! usually a short plain-text string like `invalid id`.

use crate::config::Credentials;
use crate::error::{Result, TrelloError};
use crate::ids::{join_ids, BoardRef, ObjectId};
use crate::model::{Board, BoardList, Card, CommentAction, Label, NewCard, SearchResults};
use serde::de::DeserializeOwned;
use std::fmt;

pub mod http;
pub mod memory;

pub const DEFAULT_BASE_URL: &str = "https://api.trello.com/1";

const AUTH_PARAMS: [&str; 2] = ["key", "token"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Method::Get => f.write_str("GET"),
            Method::Post => f.write_str("POST"),
        }
    }
}

/// A request relative to the API root. All parameters travel in the query string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub method: Method,
    pub path: String,
    pub query: Vec<(String, String)>,
}

impl Request {
    pub fn get(path: impl Into<String>) -> Self {
        Self {
            method: Method::Get,
            path: path.into(),
            query: Vec::new(),
        }
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self {
            method: Method::Post,
            path: path.into(),
            query: Vec::new(),
        }
    }

    pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    pub fn query_value(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Query string for logging, with credentials masked.
    pub fn redacted_query(&self) -> String {
        self.query
            .iter()
            .map(|(k, v)| {
                if AUTH_PARAMS.contains(&k.as_str()) {
                    format!("{}=***", k)
                } else {
                    format!("{}={}", k, v)
                }
            })
            .collect::<Vec<_>>()
            .join("&")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub status: u16,
    pub body: String,
}

impl Response {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Abstract interface for sending a request to the API.
pub trait Transport {
    fn send(&self, request: &Request) -> Result<Response>;
}

pub struct TrelloClient<T: Transport> {
    transport: T,
    credentials: Credentials,
}

impl<T: Transport> TrelloClient<T> {
    pub fn new(transport: T, credentials: Credentials) -> Self {
        Self {
            transport,
            credentials,
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Boards the token's member belongs to.
    pub fn boards(&self) -> Result<Vec<Board>> {
        self.execute(Request::get("/members/me/boards").param("fields", "name,id"))
    }

    pub fn lists(&self, board: &BoardRef) -> Result<Vec<BoardList>> {
        self.execute(Request::get(format!("/boards/{}/lists", board)).param("fields", "name,id"))
    }

    pub fn labels(&self, board: &BoardRef) -> Result<Vec<Label>> {
        self.execute(
            Request::get(format!("/boards/{}/labels", board)).param("fields", "name,id,color"),
        )
    }

    /// A single list, used for its name.
    pub fn list(&self, list: &ObjectId) -> Result<BoardList> {
        self.execute(Request::get(format!("/lists/{}", list)).param("fields", "name"))
    }

    pub fn cards_in_list(&self, list: &ObjectId) -> Result<Vec<Card>> {
        self.execute(
            Request::get(format!("/lists/{}/cards", list)).param("fields", "name,id,shortUrl"),
        )
    }

    /// Full-text card search across every board the member can see.
    pub fn search_cards(&self, query: &str) -> Result<Vec<Card>> {
        let results: SearchResults = self.execute(
            Request::get("/search")
                .param("query", query)
                .param("modelTypes", "cards")
                .param("card_fields", "name,shortUrl"),
        )?;
        Ok(results.cards)
    }

    /// Creates the card only. Comments are posted separately via [`Self::add_comment`].
    pub fn create_card(&self, card: &NewCard) -> Result<Card> {
        let mut request = Request::post("/cards")
            .param("idList", card.list.as_str())
            .param("name", card.name.as_str());
        if !card.labels.is_empty() {
            request = request.param("idLabels", join_ids(&card.labels));
        }
        self.execute(request)
    }

    pub fn add_comment(&self, card_id: &str, text: &str) -> Result<CommentAction> {
        self.execute(
            Request::post(format!("/cards/{}/actions/comments", card_id)).param("text", text),
        )
    }

    fn execute<R: DeserializeOwned>(&self, request: Request) -> Result<R> {
        let request = request
            .param("key", self.credentials.api_key.as_str())
            .param("token", self.credentials.token.as_str());

        log::debug!(
            "{} {}?{}",
            request.method,
            request.path,
            request.redacted_query()
        );
        let response = self.transport.send(&request)?;
        log::debug!("{} {} -> {}", request.method, request.path, response.status);

        if !response.is_success() {
            return Err(http_error(&response));
        }
        serde_json::from_str(&response.body).map_err(TrelloError::Decode)
    }
}

fn http_error(response: &Response) -> TrelloError {
    let body = response.body.trim();
    let message = if body.is_empty() {
        reqwest::StatusCode::from_u16(response.status)
            .ok()
            .and_then(|status| status.canonical_reason())
            .unwrap_or("unknown error")
            .to_string()
    } else {
        body.to_string()
    };
    TrelloError::Http {
        status: response.status,
        message,
    }
}

#[cfg(test)]
mod tests {
    use super::memory::MemoryTransport;
    use super::*;
    use crate::ids::IdKind;

    const LIST: &str = "5f1a2b3c4d5e6f7a8b9c0d1e";
    const LABEL_A: &str = "aaaaaaaaaaaaaaaaaaaaaaaa";
    const LABEL_B: &str = "bbbbbbbbbbbbbbbbbbbbbbbb";

    fn client(transport: MemoryTransport) -> TrelloClient<MemoryTransport> {
        TrelloClient::new(transport, Credentials::new("the-key", "the-token"))
    }

    #[test]
    fn boards_request_is_signed_and_limits_fields() {
        let transport = MemoryTransport::new().with_response(
            Method::Get,
            "/members/me/boards",
            200,
            r#"[{"id":"b1","name":"Roadmap"}]"#,
        );
        let client = client(transport);

        let boards = client.boards().unwrap();
        assert_eq!(boards[0].name, "Roadmap");

        let request = client.transport().last_request().unwrap();
        assert_eq!(request.method, Method::Get);
        assert_eq!(request.path, "/members/me/boards");
        assert_eq!(request.query_value("fields"), Some("name,id"));
        assert_eq!(request.query_value("key"), Some("the-key"));
        assert_eq!(request.query_value("token"), Some("the-token"));
    }

    #[test]
    fn labels_request_asks_for_color() {
        let transport =
            MemoryTransport::new().with_response(Method::Get, "/boards/AbC123xY/labels", 200, "[]");
        let client = client(transport);

        let board = BoardRef::parse("AbC123xY").unwrap();
        assert!(client.labels(&board).unwrap().is_empty());

        let request = client.transport().last_request().unwrap();
        assert_eq!(request.query_value("fields"), Some("name,id,color"));
    }

    #[test]
    fn search_restricts_to_cards() {
        let transport = MemoryTransport::new().with_response(
            Method::Get,
            "/search",
            200,
            r#"{"cards":[{"id":"c1","name":"Fix login","shortUrl":"https://trello.com/c/x"}]}"#,
        );
        let client = client(transport);

        let cards = client.search_cards("login").unwrap();
        assert_eq!(cards.len(), 1);

        let request = client.transport().last_request().unwrap();
        assert_eq!(request.query_value("query"), Some("login"));
        assert_eq!(request.query_value("modelTypes"), Some("cards"));
        assert_eq!(request.query_value("card_fields"), Some("name,shortUrl"));
    }

    #[test]
    fn create_card_joins_label_ids() {
        let transport = MemoryTransport::new().with_response(
            Method::Post,
            "/cards",
            200,
            r#"{"id":"c1","name":"New","shortUrl":"https://trello.com/c/new"}"#,
        );
        let client = client(transport);

        let card = NewCard {
            list: ObjectId::parse(LIST, IdKind::List).unwrap(),
            name: "New".into(),
            labels: vec![
                ObjectId::parse(LABEL_A, IdKind::Label).unwrap(),
                ObjectId::parse(LABEL_B, IdKind::Label).unwrap(),
            ],
            comment: None,
        };
        client.create_card(&card).unwrap();

        let request = client.transport().last_request().unwrap();
        assert_eq!(request.method, Method::Post);
        assert_eq!(request.query_value("idList"), Some(LIST));
        assert_eq!(request.query_value("name"), Some("New"));
        assert_eq!(
            request.query_value("idLabels"),
            Some(format!("{},{}", LABEL_A, LABEL_B).as_str())
        );
    }

    #[test]
    fn create_card_without_labels_omits_param() {
        let transport = MemoryTransport::new().with_response(
            Method::Post,
            "/cards",
            200,
            r#"{"id":"c1","name":"New"}"#,
        );
        let client = client(transport);

        let card = NewCard {
            list: ObjectId::parse(LIST, IdKind::List).unwrap(),
            name: "New".into(),
            labels: vec![],
            comment: None,
        };
        client.create_card(&card).unwrap();

        let request = client.transport().last_request().unwrap();
        assert_eq!(request.query_value("idLabels"), None);
    }

    #[test]
    fn non_success_status_carries_body() {
        let transport =
            MemoryTransport::new().with_response(Method::Get, "/members/me/boards", 401, "invalid key\n");
        let client = client(transport);

        match client.boards() {
            Err(TrelloError::Http { status, message }) => {
                assert_eq!(status, 401);
                assert_eq!(message, "invalid key");
            }
            other => panic!("expected Http error, got {:?}", other),
        }
    }

    #[test]
    fn empty_error_body_uses_reason_phrase() {
        let transport =
            MemoryTransport::new().with_response(Method::Get, "/members/me/boards", 503, "");
        let client = client(transport);

        match client.boards() {
            Err(TrelloError::Http { message, .. }) => assert_eq!(message, "Service Unavailable"),
            other => panic!("expected Http error, got {:?}", other),
        }
    }

    #[test]
    fn malformed_body_is_decode_error() {
        let transport = MemoryTransport::new().with_response(
            Method::Get,
            "/members/me/boards",
            200,
            "<html>oops</html>",
        );
        let client = client(transport);

        assert!(matches!(client.boards(), Err(TrelloError::Decode(_))));
    }

    #[test]
    fn redacted_query_hides_credentials() {
        let request = Request::get("/x")
            .param("fields", "name")
            .param("key", "k")
            .param("token", "t");
        assert_eq!(request.redacted_query(), "fields=name&key=***&token=***");
    }
}
