//! Payload types shared by the page and the host.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Server-assigned item identifier.
pub type TodoId = i64;

/// A todo item as the backend returns it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: TodoId,
    pub title: String,
    pub is_done: bool,
    /// ISO-8601 timestamp, kept verbatim from the wire.
    pub created_at: String,
}

impl Todo {
    /// Calendar date of `created_at`, if it parses.
    ///
    /// Accepts RFC 3339 timestamps and naive `YYYY-MM-DDTHH:MM:SS[.f]` ones.
    pub fn created_date(&self) -> Option<NaiveDate> {
        if let Ok(ts) = DateTime::parse_from_rfc3339(&self.created_at) {
            return Some(ts.date_naive());
        }
        NaiveDateTime::parse_from_str(&self.created_at, "%Y-%m-%dT%H:%M:%S%.f")
            .ok()
            .map(|ts| ts.date())
    }

    /// Date shown next to the title, falling back to the raw timestamp.
    pub fn display_date(&self) -> String {
        match self.created_date() {
            Some(date) => date.format("%Y-%m-%d").to_string(),
            None => self.created_at.clone(),
        }
    }
}

/// Body of the create request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTodo {
    pub title: String,
}

impl NewTodo {
    /// Build a create body from raw input, rejecting blank text.
    pub fn from_input(input: &str) -> Option<Self> {
        let title = input.trim();
        if title.is_empty() {
            return None;
        }
        Some(Self {
            title: title.to_owned(),
        })
    }
}

/// Id of the script tag carrying the serialized `PageConfig`.
pub const STATE_SCRIPT_ID: &str = "todo-initial-state";

/// Page configuration injected into the HTML by the host.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    /// Prefix for every endpoint path. Empty means same origin.
    pub api_base: String,
}
