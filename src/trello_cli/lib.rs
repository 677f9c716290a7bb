//! # trello-cli Architecture
//!
//! trello-cli lets you browse boards, lists, labels and cards and create cards
//! from a terminal. Every invocation is one short pipeline: parse the command
//! line, send one or two requests to the Trello REST API, render the answer.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, resolves credentials, renders tables   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Validates ids, splits label lists                        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Turns Trello resources into tables and messages          │
//! │  - Returns `CmdResult`, no I/O assumptions                  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Client Layer (client/)                                     │
//! │  - Endpoint paths, fields, auth query parameters            │
//! │  - Transport trait: HttpTransport, MemoryTransport          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No Terminal Assumptions in Core
//!
//! From `api.rs` inward, code never writes to stdout/stderr and never exits
//! the process. Errors are [`error::TrelloError`] values; output is a
//! [`commands::CmdResult`] holding a [`commands::Table`] and messages.
//!
//! ## Testing Strategy
//!
//! 1. **Client** (`client/`): request construction asserted against
//!    `MemoryTransport`; `HttpTransport` exercised against a local mock server.
//! 2. **Commands** (`commands/*.rs`): table contents and messages for canned
//!    responses.
//! 3. **API** (`api.rs`): input normalization and dispatch.
//! 4. **CLI** (`cli/`): argument parsing and rendering; `tests/` drives the
//!    binary end to end.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: One module per operation
//! - [`client`]: REST endpoints and the transport seam
//! - [`model`]: Boards, lists, labels, cards
//! - [`ids`]: Identifier validation and label list splitting
//! - [`config`]: Config file and credential resolution
//! - [`error`]: Error types

pub mod api;
pub mod client;
pub mod commands;
pub mod config;
pub mod error;
pub mod ids;
pub mod model;
