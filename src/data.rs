// src/data.rs
use serde::{Deserialize, Serialize};

/// Column order for every tabular export.
pub const HEADERS: [&str; 4] = ["date", "title", "link", "text"];

/// One press conference: listing metadata plus transcript body.
/// `date` is kept exactly as published, it is not parsed.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConferenceRecord {
    pub date: String,
    pub title: String,
    pub link: String,
    pub text: String,
}

impl ConferenceRecord {
    pub fn to_row(&self) -> Vec<String> {
        vec![self.date.clone(), self.title.clone(), self.link.clone(), self.text.clone()]
    }

    /// Inverse of `to_row`. Missing trailing cells become empty strings.
    pub fn from_row(mut row: Vec<String>) -> Self {
        row.resize(HEADERS.len(), s!());
        let mut cells = row.into_iter();
        let mut next = || cells.next().unwrap_or_default();
        Self { date: next(), title: next(), link: next(), text: next() }
    }
}

pub fn header_row() -> Vec<String> {
    HEADERS.iter().map(|h| s!(*h)).collect()
}
