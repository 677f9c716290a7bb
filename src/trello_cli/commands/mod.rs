use crate::model::Card;

pub mod add_card;
pub mod boards;
pub mod cards;
pub mod config;
pub mod labels;
pub mod lists;
pub mod search;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

/// Tabular output: a title, column headers and rows of plain cell text.
///
/// `noun` names what the rows are ("boards", "labels") for the empty case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    pub title: String,
    pub noun: String,
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(title: impl Into<String>, noun: impl Into<String>, columns: &[&str]) -> Self {
        Self {
            title: title.into(),
            noun: noun.into(),
            columns: columns.iter().map(|c| c.to_string()).collect(),
            rows: Vec::new(),
        }
    }

    pub fn push_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub table: Option<Table>,
    pub created_card: Option<Card>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_table(mut self, table: Table) -> Self {
        self.table = Some(table);
        self
    }

    pub fn with_created_card(mut self, card: Card) -> Self {
        self.created_card = Some(card);
        self
    }

    pub fn with_message(mut self, message: CmdMessage) -> Self {
        self.messages.push(message);
        self
    }
}

/// Column layout shared by every card listing.
pub(crate) fn card_table(title: String, cards: &[Card]) -> Table {
    let mut table = Table::new(title, "cards", &["Card ID", "Name", "URL"]);
    for card in cards {
        table.push_row(vec![
            card.id.clone(),
            card.name.clone(),
            card.short_url.clone(),
        ]);
    }
    table
}
