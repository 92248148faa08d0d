//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use chrono::{DateTime, Local};
use colored::Colorize;
use serde::Serialize;

use crate::adapters::json::SavedDocuments;
use crate::core::models::{Item, ShoppingList};

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// One item as shown to the user
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemView {
    /// Item id
    pub id: String,
    /// Item text
    pub text: String,
    /// Whether it is bought
    pub bought: bool,
    /// Creation time in epoch milliseconds
    pub created_at: i64,
}

/// A full list, split into its two partitions
#[derive(Debug, Serialize)]
pub struct ListView {
    /// List id
    pub id: String,
    /// List name
    pub name: String,
    /// Items still to buy, in order
    pub unbought: Vec<ItemView>,
    /// Items already bought, in order
    pub bought: Vec<ItemView>,
    /// Whether the in-memory state has not reached disk
    pub unsaved: bool,
}

/// One line of the lists overview
#[derive(Debug, Serialize)]
pub struct ListSummary {
    /// List id
    pub id: String,
    /// List name
    pub name: String,
    /// Count of items still to buy
    pub unbought: usize,
    /// Count of bought items
    pub bought: usize,
    /// Whether this is the list commands default to
    pub active: bool,
}

/// Overview of the working set
#[derive(Debug, Serialize)]
pub struct ListOverview {
    /// Lists, most recently created first
    pub lists: Vec<ListSummary>,
    /// Number of lists
    pub total: usize,
}

/// Generic operation result for simple commands
#[derive(Debug, Serialize)]
pub struct OperationResult {
    /// Whether the operation succeeded
    pub success: bool,
    /// Human-readable message
    pub message: String,
}

/// Raw namespace dump
#[derive(Debug, Serialize)]
pub struct SavedView {
    /// Namespace and its documents
    #[serde(flatten)]
    pub documents: SavedDocuments,
}

impl From<&Item> for ItemView {
    fn from(item: &Item) -> Self {
        Self {
            id: item.id.clone(),
            text: item.text.clone(),
            bought: item.bought,
            created_at: item.created_at,
        }
    }
}

impl ListView {
    /// Build the view for a list
    #[must_use]
    pub fn new(list: &ShoppingList, unsaved: bool) -> Self {
        Self {
            id: list.id.clone(),
            name: list.name.clone(),
            unbought: list.unbought().map(ItemView::from).collect(),
            bought: list.bought().map(ItemView::from).collect(),
            unsaved,
        }
    }

    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => render_json(self),
        }
    }

    fn render_human(&self) {
        println!("{} {}", self.name.bold(), format!("({})", self.id).dimmed());
        if self.unsaved {
            println!("{}", "  not saved to disk yet".yellow());
        }

        if self.unbought.is_empty() && self.bought.is_empty() {
            println!("  (empty)");
            return;
        }

        for item in &self.unbought {
            println!("  [ ] {}  {}", item.text, short_id(&item.id).dimmed());
        }
        if !self.bought.is_empty() {
            println!();
            for item in &self.bought {
                println!(
                    "  [x] {}  {}",
                    item.text.dimmed().strikethrough(),
                    short_id(&item.id).dimmed()
                );
            }
        }
        if let Some(newest) = self.unbought.iter().chain(&self.bought).map(|i| i.created_at).max()
        {
            println!("\n  last added {}", format_millis(newest).dimmed());
        }
    }
}

impl ListSummary {
    /// Build the summary line for a list
    #[must_use]
    pub fn new(list: &ShoppingList, active: bool) -> Self {
        Self {
            id: list.id.clone(),
            name: list.name.clone(),
            unbought: list.unbought().count(),
            bought: list.bought().count(),
            active,
        }
    }
}

impl ListOverview {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => render_json(self),
        }
    }

    fn render_human(&self) {
        if self.lists.is_empty() {
            println!("No lists yet.");
            println!("Create one: shoplist new \"Groceries\"");
            return;
        }

        for list in &self.lists {
            let marker = if list.active { "*" } else { " " };
            println!(
                "{marker} {}  {} to buy, {} bought  {}",
                list.name.bold(),
                list.unbought,
                list.bought,
                list.id.dimmed()
            );
        }
        println!("\n{} list(s)", self.total);
    }
}

impl OperationResult {
    /// Successful result
    #[must_use]
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => println!("{}", self.message),
            OutputMode::Json => render_json(self),
        }
    }
}

impl SavedView {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => render_json(self),
        }
    }

    fn render_human(&self) {
        println!("{} {}", "Namespace:".bold(), self.documents.dir.display());
        if self.documents.files.is_empty() {
            println!("  (no documents)");
            return;
        }
        for file in &self.documents.files {
            println!("\n{}", file.name.bold());
            match &file.content {
                Some(content) => println!("{content}"),
                None => println!("{}", "  (unreadable)".red()),
            }
        }
    }
}

fn render_json<T: Serialize>(value: &T) {
    println!("{}", serde_json::to_string_pretty(value).unwrap_or_default());
}

fn short_id(id: &str) -> &str {
    id.get(..8).unwrap_or(id)
}

/// Format epoch milliseconds as local date and time
#[must_use]
pub fn format_millis(millis: i64) -> String {
    DateTime::from_timestamp_millis(millis).map_or_else(
        || millis.to_string(),
        |t| t.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string(),
    )
}
