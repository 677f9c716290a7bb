//! # CLI Templates
//!
//! Terminal output is rendered from minijinja templates kept as standalone
//! files, so layout can be edited and diffed apart from the code, and pulled
//! in here as string constants.
//!
//! Conventions:
//!
//! 1. Line breaks are explicit. Block tags use `-%}` to swallow their own
//!    newline, so every newline in the output is one you can point at.
//! 2. Widths, padding and truncation are computed in Rust (`render.rs`).
//!    Templates only arrange pre-sized strings and pick style names.
//! 3. Style names are semantic (`title`, `success`), never colors. See `styles.rs`.
pub const TABLE_TEMPLATE: &str = include_str!("templates/table.tmp");
pub const MESSAGES_TEMPLATE: &str = include_str!("templates/messages.tmp");
