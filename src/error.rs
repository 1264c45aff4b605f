// src/error.rs
use thiserror::Error;

/// Network-level failures. Never retried.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("HTTP {status} for {url}")]
    Status { url: String, status: u16 },
}

/// The page came back but did not have the shape we expect.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("invalid selector `{css}`: {reason}")]
    Selector { css: String, reason: String },

    #[error("no <{what}> element in {url}")]
    MissingElement { url: String, what: &'static str },

    #[error("title block #{index} has no link in {url}")]
    MissingAnchor { url: String, index: usize },

    #[error("{dates} dates but {titles} titles in {url}")]
    Misaligned { url: String, dates: usize, titles: usize },
}

/// Rejected before any network activity.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unsupported output format: {0} (expected csv or json)")]
    UnsupportedFormat(String),

    #[error("worker count must be at least 1")]
    InvalidWorkers,

    #[error("start year {start} is after end year {end}")]
    InvalidYearRange { start: i32, end: i32 },

    #[error("year {year} is before {min_year}, the first year with conferences")]
    YearTooEarly { year: i32, min_year: i32 },
}

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
