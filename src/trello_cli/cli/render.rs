//! # Rendering Module
//!
//! Turns a [`CmdResult`] into terminal text through the minijinja templates in
//! `templates/`, styled with [`TRELLO_THEME`].
//!
//! Layout (column widths, truncation, padding) stays in Rust because it needs
//! Unicode display widths. Templates receive pre-sized strings plus the
//! semantic style name for each piece and only decide arrangement.
//!
//! The `*_internal` functions take `use_color: Option<bool>`: `None` follows
//! terminal detection, `Some` forces it. Tests always pass `Some(false)`.

use super::styles::{names, TRELLO_THEME};
use super::templates::{MESSAGES_TEMPLATE, TABLE_TEMPLATE};
use minijinja::{Environment, Value};
use serde::Serialize;
use trello_cli::api::{CmdMessage, CmdResult, MessageLevel, Table};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Cells wider than this are cut and end with `…`.
pub const MAX_CELL_WIDTH: usize = 60;
pub const COLUMN_GAP: &str = "  ";
pub const RULE_CHAR: char = '─';

#[derive(Serialize)]
struct CellData {
    text: String,
    style: &'static str,
}

#[derive(Serialize)]
struct TableData {
    title: String,
    empty: bool,
    empty_message: String,
    header: String,
    rule: String,
    gap: &'static str,
    rows: Vec<Vec<CellData>>,
}

#[derive(Serialize)]
struct MessageData {
    content: String,
    style: &'static str,
}

#[derive(Serialize)]
struct MessagesData {
    messages: Vec<MessageData>,
}

fn render_template<T: Serialize>(
    template: &'static str,
    data: &T,
    use_color: Option<bool>,
) -> Result<String, minijinja::Error> {
    let use_color = use_color.unwrap_or_else(console::colors_enabled);
    let mut env = Environment::new();
    env.add_filter("style", move |value: Value, name: String| -> String {
        let text = value.to_string();
        if use_color {
            TRELLO_THEME.apply(&name, &text)
        } else {
            TRELLO_THEME.apply_plain(&name, &text)
        }
    });
    env.add_template("output", template)?;
    let tmpl = env.get_template("output")?;
    tmpl.render(data)
}

/// Cuts `text` to at most `max_width` display columns, ending in `…` when cut.
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }

    let mut result = String::new();
    let mut current = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if current + w > max_width.saturating_sub(1) {
            break;
        }
        result.push(c);
        current += w;
    }
    result.push('…');
    result
}

fn pad_to_width(text: &str, width: usize) -> String {
    let padding = width.saturating_sub(text.width());
    format!("{}{}", text, " ".repeat(padding))
}

/// Pads every cell but the last of a line, so lines carry no trailing spaces.
fn layout_line(cells: &[String], widths: &[usize]) -> Vec<String> {
    let last = cells.len().saturating_sub(1);
    cells
        .iter()
        .enumerate()
        .map(|(i, cell)| {
            if i == last {
                cell.clone()
            } else {
                pad_to_width(cell, widths.get(i).copied().unwrap_or(0))
            }
        })
        .collect()
}

fn table_data(table: &Table) -> TableData {
    let rows: Vec<Vec<String>> = table
        .rows
        .iter()
        .map(|row| {
            row.iter()
                .map(|cell| truncate_to_width(&cell.replace('\n', " "), MAX_CELL_WIDTH))
                .collect()
        })
        .collect();

    let mut widths: Vec<usize> = table.columns.iter().map(|c| c.width()).collect();
    for row in &rows {
        for (i, cell) in row.iter().enumerate() {
            if i < widths.len() {
                widths[i] = widths[i].max(cell.width());
            }
        }
    }
    let total = widths.iter().sum::<usize>() + COLUMN_GAP.len() * widths.len().saturating_sub(1);

    TableData {
        title: table.title.clone(),
        empty: rows.is_empty(),
        empty_message: format!("No {} found.", table.noun),
        header: layout_line(&table.columns, &widths).join(COLUMN_GAP),
        rule: RULE_CHAR.to_string().repeat(total),
        gap: COLUMN_GAP,
        rows: rows
            .iter()
            .map(|row| {
                layout_line(row, &widths)
                    .into_iter()
                    .enumerate()
                    .map(|(i, text)| CellData {
                        text,
                        style: names::column(i),
                    })
                    .collect()
            })
            .collect(),
    }
}

fn render_table_internal(table: &Table, use_color: Option<bool>) -> String {
    let data = table_data(table);
    render_template(TABLE_TEMPLATE, &data, use_color).unwrap_or_else(|_| plain_table(&data))
}

fn plain_table(data: &TableData) -> String {
    let mut out = format!("{}\n", data.title);
    if data.empty {
        out.push_str(&data.empty_message);
        out.push('\n');
        return out;
    }
    out.push_str(&format!("{}\n{}\n", data.header, data.rule));
    for row in &data.rows {
        let cells: Vec<&str> = row.iter().map(|c| c.text.as_str()).collect();
        out.push_str(&cells.join(COLUMN_GAP));
        out.push('\n');
    }
    out
}

fn message_style(level: MessageLevel) -> &'static str {
    match level {
        MessageLevel::Info => names::INFO,
        MessageLevel::Success => names::SUCCESS,
        MessageLevel::Warning => names::WARNING,
    }
}

fn render_messages_internal(messages: &[CmdMessage], use_color: Option<bool>) -> String {
    if messages.is_empty() {
        return String::new();
    }

    let data = MessagesData {
        messages: messages
            .iter()
            .map(|m| MessageData {
                content: m.content.clone(),
                style: message_style(m.level),
            })
            .collect(),
    };

    render_template(MESSAGES_TEMPLATE, &data, use_color).unwrap_or_else(|_| {
        messages
            .iter()
            .map(|m| format!("{}\n", m.content))
            .collect()
    })
}

/// Table first, then messages.
pub fn render_result(result: &CmdResult) -> String {
    render_result_internal(result, None)
}

fn render_result_internal(result: &CmdResult, use_color: Option<bool>) -> String {
    let mut output = String::new();
    if let Some(table) = &result.table {
        output.push_str(&render_table_internal(table, use_color));
    }
    output.push_str(&render_messages_internal(&result.messages, use_color));
    output
}

/// Prints a command result to stdout.
pub fn print_result(result: &CmdResult) {
    let output = render_result(result);
    if !output.is_empty() {
        print!("{}", output);
    }
}
