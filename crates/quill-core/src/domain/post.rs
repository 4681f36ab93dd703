use std::cmp::Reverse;

use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// Fallbacks applied when the composer submits empty fields.
pub const DEFAULT_TITLE: &str = "Untitled";
pub const DEFAULT_CONTENT: &str = "No content";
pub const DEFAULT_AUTHOR: &str = "Anonymous";

/// Number of content characters kept in the derived excerpt.
const EXCERPT_CHARS: usize = 100;

/// The persisted fields of one post, as stored in the backend document.
///
/// Field names are camelCase on the wire. Records written by older clients
/// may miss fields (`createdAt` in particular), so everything decodes with
/// a default.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostRecord {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub excerpt: String,
    #[serde(default)]
    pub author_name: String,
    #[serde(default)]
    pub publish_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub read_time: String,
}

/// Post entity - a record plus the opaque id the store assigned to it.
///
/// The id is assigned exactly once, by the store, at creation. Composing
/// clients never generate it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlogPost {
    pub id: String,
    #[serde(flatten)]
    pub record: PostRecord,
}

impl PostRecord {
    /// Build a record from composer input, filling defaults for empty
    /// fields and deriving the excerpt and timestamps.
    pub fn new(title: &str, content: &str, author_name: &str) -> Self {
        let now = Utc::now();
        Self::with_created_at(title, content, author_name, now)
    }

    /// Like [`PostRecord::new`] with an explicit creation instant.
    pub fn with_created_at(
        title: &str,
        content: &str,
        author_name: &str,
        created_at: DateTime<Utc>,
    ) -> Self {
        let content = non_empty_or(content, DEFAULT_CONTENT);
        Self {
            title: non_empty_or(title, DEFAULT_TITLE),
            excerpt: excerpt_of(&content),
            author_name: non_empty_or(author_name, DEFAULT_AUTHOR),
            publish_date: created_at.format("%-m/%-d/%Y").to_string(),
            created_at: Some(created_at.to_rfc3339_opts(SecondsFormat::Millis, true)),
            category: "General".to_string(),
            tags: Vec::new(),
            read_time: "1 min".to_string(),
            content,
        }
    }

    /// The instant used for ordering: `createdAt` when present and valid,
    /// else `publishDate` at midnight UTC, else the Unix epoch.
    pub fn effective_timestamp(&self) -> DateTime<Utc> {
        if let Some(created) = &self.created_at {
            if let Ok(ts) = DateTime::parse_from_rfc3339(created) {
                return ts.with_timezone(&Utc);
            }
        }

        NaiveDate::parse_from_str(&self.publish_date, "%m/%d/%Y")
            .ok()
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .map(|dt| dt.and_utc())
            .unwrap_or(DateTime::UNIX_EPOCH)
    }
}

/// Sort posts newest first. Ties keep their relative order.
pub fn sort_newest_first(posts: &mut [BlogPost]) {
    posts.sort_by_cached_key(|p| Reverse(p.record.effective_timestamp()));
}

fn non_empty_or(value: &str, fallback: &str) -> String {
    if value.trim().is_empty() {
        fallback.to_string()
    } else {
        value.to_string()
    }
}

/// First `EXCERPT_CHARS` characters of the content, always followed by an
/// ellipsis. Char-based so multi-byte content never splits a boundary.
fn excerpt_of(content: &str) -> String {
    let mut excerpt: String = content.chars().take(EXCERPT_CHARS).collect();
    excerpt.push_str("...");
    excerpt
}
