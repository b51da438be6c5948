//! # Job listing model
//!
//! [`Job`] is display-only. Listings currently come from the static fixtures in
//! [`crate::jobs::fixtures`]; the frontend never creates, updates, or deletes
//! them.

use serde::{Deserialize, Serialize};

/// A single job posting.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Job {
    pub id: u32,
    pub title: String,
    pub company: String,
    pub location: String,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Free-form salary range as displayed, e.g. "$90k – $120k"
    pub salary: String,
    /// "Full-time", "Contract", ...
    #[serde(default)]
    pub job_type: String,
    /// Human-readable posting age, e.g. "2 days ago"
    #[serde(default)]
    pub posted: String,
    /// Markdown body
    #[serde(default)]
    pub description: String,
}

impl Job {
    /// Whether any searchable field contains `needle` (already lowercased).
    pub fn matches_text(&self, needle: &str) -> bool {
        if needle.is_empty() {
            return true;
        }
        self.title.to_lowercase().contains(needle)
            || self.company.to_lowercase().contains(needle)
            || self.location.to_lowercase().contains(needle)
            || self.tags.iter().any(|t| t.to_lowercase().contains(needle))
    }

    /// Two-letter badge shown in place of a company logo.
    pub fn initials(&self) -> String {
        self.company
            .split_whitespace()
            .filter_map(|w| w.chars().next())
            .take(2)
            .collect::<String>()
            .to_uppercase()
    }
}
